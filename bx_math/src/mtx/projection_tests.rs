use glam::{Mat4, Vec3};
use super::*;

const EPS: f32 = 1e-5;

fn ndc_depth(m: &Mat4, view_z: f32) -> f32 {
    m.project_point3(Vec3::new(0.0, 0.0, view_z)).z
}

// ============================================================================
// Depth range
// ============================================================================

#[test]
fn test_opengl_depth_range() {
    let m = proj(60.0, 16.0 / 9.0, 0.1, 100.0, DepthRange::NegativeOneToOne);

    assert!((ndc_depth(&m, 0.1) - -1.0).abs() < 1e-4);
    assert!((ndc_depth(&m, 100.0) - 1.0).abs() < 1e-4);
}

#[test]
fn test_zero_to_one_depth_range() {
    let m = proj(60.0, 16.0 / 9.0, 0.1, 100.0, DepthRange::ZeroToOne);

    assert!(ndc_depth(&m, 0.1).abs() < 1e-4);
    assert!((ndc_depth(&m, 100.0) - 1.0).abs() < 1e-4);
}

#[test]
fn test_depth_increases_with_distance() {
    for depth in [DepthRange::NegativeOneToOne, DepthRange::ZeroToOne] {
        let m = proj(45.0, 1.0, 1.0, 50.0, depth);
        assert!(ndc_depth(&m, 2.0) < ndc_depth(&m, 10.0));
        assert!(ndc_depth(&m, 10.0) < ndc_depth(&m, 40.0));
    }
}

#[test]
fn test_zero_to_one_matches_glam_perspective_lh() {
    let m = proj(60.0, 4.0 / 3.0, 0.5, 200.0, DepthRange::ZeroToOne);
    let expected = Mat4::perspective_lh(60f32.to_radians(), 4.0 / 3.0, 0.5, 200.0);

    assert!(m.abs_diff_eq(expected, EPS));
}

// ============================================================================
// Field of view
// ============================================================================

#[test]
fn test_fov_90_has_unit_scale() {
    let m = proj(90.0, 2.0, 0.1, 10.0, DepthRange::ZeroToOne);

    assert!((m.y_axis.y - 1.0).abs() < EPS);
    assert!((m.x_axis.x - 0.5).abs() < EPS);
}

#[test]
fn test_frustum_edge_maps_to_ndc_edge() {
    let m = proj(90.0, 1.0, 0.1, 10.0, DepthRange::ZeroToOne);
    // At z = 5 with a 90 degree fov the frustum is 5 units tall above the axis
    let top = m.project_point3(Vec3::new(0.0, 5.0, 5.0));
    let right = m.project_point3(Vec3::new(5.0, 0.0, 5.0));

    assert!((top.y - 1.0).abs() < EPS);
    assert!((right.x - 1.0).abs() < EPS);
}

// ============================================================================
// Off-center
// ============================================================================

#[test]
fn test_proj_xywh_shifts_center() {
    let m = proj_xywh(0.25, -0.5, 1.0, 1.0, 0.1, 10.0, DepthRange::ZeroToOne);
    let center = m.project_point3(Vec3::new(0.0, 0.0, 3.0));

    assert!((center.x - -0.25).abs() < EPS);
    assert!((center.y - 0.5).abs() < EPS);
}

#[test]
fn test_proj_is_centered_xywh() {
    let height = 1.0 / (30f32.to_radians()).tan();
    let expected = proj_xywh(0.0, 0.0, height / 1.5, height, 1.0, 100.0, DepthRange::NegativeOneToOne);

    assert!(proj(60.0, 1.5, 1.0, 100.0, DepthRange::NegativeOneToOne).abs_diff_eq(expected, EPS));
}

// ============================================================================
// Flat form
// ============================================================================

#[test]
fn test_mtx_proj_layout() {
    let mut result = [f32::NAN; 16];
    mtx_proj(&mut result, 60.0, 16.0 / 9.0, 0.1, 100.0, false);

    assert_eq!(result[11], 1.0);
    assert_eq!(result[15], 0.0);
    assert_eq!(result[1], 0.0);
    assert!(result[14] < 0.0);
    assert_eq!(result, proj(60.0, 16.0 / 9.0, 0.1, 100.0, DepthRange::ZeroToOne).to_cols_array());
}

#[test]
fn test_mtx_proj_flag_selects_depth_range() {
    let mut gl = [0.0; 16];
    let mut zo = [0.0; 16];
    mtx_proj(&mut gl, 60.0, 1.0, 1.0, 10.0, true);
    mtx_proj(&mut zo, 60.0, 1.0, 1.0, 10.0, false);

    assert_eq!(gl, proj(60.0, 1.0, 1.0, 10.0, DepthRange::NegativeOneToOne).to_cols_array());
    assert_ne!(gl[10], zo[10]);
    assert_eq!(gl[0], zo[0]);
}
