use glam::{Mat4, Vec3};
use super::*;

const EPS: f32 = 1e-5;

#[test]
fn test_zero_angles_is_identity() {
    assert_eq!(rotate_xy(0.0, 0.0), Mat4::IDENTITY);

    let mut result = [f32::NAN; 16];
    mtx_rotate_xy(&mut result, 0.0, 0.0);
    assert_eq!(result, Mat4::IDENTITY.to_cols_array());
}

#[test]
fn test_single_axis_negation_is_inverse() {
    for angle in [0.3_f32, 1.2, -2.7, std::f32::consts::PI] {
        let x = rotate_xy(angle, 0.0) * rotate_xy(-angle, 0.0);
        let y = rotate_xy(0.0, angle) * rotate_xy(0.0, -angle);

        assert!(x.abs_diff_eq(Mat4::IDENTITY, EPS));
        assert!(y.abs_diff_eq(Mat4::IDENTITY, EPS));
    }
}

#[test]
fn test_combined_rotation_is_orthonormal() {
    let m = rotate_xy(0.7, -1.9);

    assert!((m * m.transpose()).abs_diff_eq(Mat4::IDENTITY, EPS));
    assert!((m.determinant() - 1.0).abs() < EPS);
}

#[test]
fn test_rotation_order() {
    let (ax, ay) = (0.4_f32, 1.1_f32);
    let expected = Mat4::from_rotation_y(-ay) * Mat4::from_rotation_x(-ax);

    assert!(rotate_xy(ax, ay).abs_diff_eq(expected, EPS));
}

#[test]
fn test_quarter_turns() {
    let half_pi = std::f32::consts::FRAC_PI_2;

    // X only: +Y goes to -Z
    let y = rotate_xy(half_pi, 0.0).transform_vector3(Vec3::Y);
    assert!(y.abs_diff_eq(Vec3::NEG_Z, EPS));

    // Y only: +X goes to +Z
    let x = rotate_xy(0.0, half_pi).transform_vector3(Vec3::X);
    assert!(x.abs_diff_eq(Vec3::Z, EPS));
}

#[test]
fn test_mtx_rotate_xy_layout() {
    let (ax, ay) = (0.5_f32, 0.25_f32);
    let mut result = [0.0; 16];
    mtx_rotate_xy(&mut result, ax, ay);

    assert!((result[0] - ay.cos()).abs() < EPS);
    assert!((result[2] - ay.sin()).abs() < EPS);
    assert!((result[5] - ax.cos()).abs() < EPS);
    assert!((result[9] - ax.sin()).abs() < EPS);
    assert_eq!(result[12..16], [0.0, 0.0, 0.0, 1.0]);
}
