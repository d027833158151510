//! Headless cubes demo.
//!
//! Runs the per-frame math of the classic bgfx "cubes" sample without a
//! window: one look-at camera, one perspective projection and an 11x11 grid
//! of spinning cubes, packed into a flat transform buffer each frame.
//!
//! Usage: bx_math_demo [frames] [width] [height]

use bx_math::bxmath::mtx::{self, DepthRange};
use bx_math::bxmath::Result;
use bx_math::{bx_error, bx_info, bx_warn};
use glam::{Mat4, Vec3, Vec4};

const SOURCE: &str = "bxmath::demo";

/// Cubes per grid side
const GRID: usize = 11;
const FRAME_RATE: f32 = 60.0;

struct Settings {
    frames: u32,
    width: u32,
    height: u32,
}

impl Settings {
    fn from_args(args: &[String]) -> Self {
        Self {
            frames: parse_arg(args, 1, "frames", 1),
            width: parse_arg(args, 2, "width", 1280),
            height: parse_arg(args, 3, "height", 720),
        }
    }
}

fn parse_arg(args: &[String], index: usize, name: &str, default: u32) -> u32 {
    match args.get(index) {
        None => default,
        Some(raw) => match raw.parse::<u32>() {
            Ok(value) if value > 0 => value,
            _ => {
                bx_warn!(SOURCE, "Invalid {} '{}', using {}", name, raw, default);
                default
            }
        },
    }
}

/// Model matrix of the cube at grid cell (`xx`, `yy`) at time `time`.
fn cube_transform(time: f32, xx: usize, yy: usize) -> Mat4 {
    let mut mtx = mtx::rotate_xy(time + xx as f32 * 0.21, time + yy as f32 * 0.37);
    mtx.w_axis = Vec4::new(-15.0 + xx as f32 * 3.0, -15.0 + yy as f32 * 3.0, 0.0, 1.0);
    mtx
}

/// Fill `transforms` with every cube's model matrix for one frame.
fn update_frame(time: f32, transforms: &mut [f32]) -> Result<usize> {
    let mats: Vec<Mat4> = (0..GRID)
        .flat_map(|yy| (0..GRID).map(move |xx| cube_transform(time, xx, yy)))
        .collect();
    mtx::write_transforms(transforms, &mats)
}

fn run(settings: &Settings) -> Result<()> {
    let view = mtx::look_at(Vec3::new(0.0, 0.0, -35.0), Vec3::ZERO, None);
    let aspect = settings.width as f32 / settings.height as f32;
    let proj = mtx::proj(60.0, aspect, 0.1, 100.0, DepthRange::ZeroToOne);
    let view_proj = proj * view;

    bx_info!(
        SOURCE,
        "Running {} frame(s) at {}x{} ({} cubes)",
        settings.frames, settings.width, settings.height, GRID * GRID
    );

    let mut transforms = vec![0.0_f32; GRID * GRID * 16];
    for frame in 0..settings.frames {
        let time = frame as f32 / FRAME_RATE;
        let written = update_frame(time, &mut transforms)?;

        let first = Mat4::from_cols_slice(&transforms[..16]);
        let center = (view_proj * first).project_point3(Vec3::ZERO);
        bx_info!(
            SOURCE,
            "Frame {}: {} floats, cube[0] center at NDC {}",
            frame, written, center
        );
    }

    Ok(())
}

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let settings = Settings::from_args(&args);

    if let Err(error) = run(&settings) {
        bx_error!(SOURCE, "Demo failed: {}", error);
        std::process::exit(1);
    }
}
