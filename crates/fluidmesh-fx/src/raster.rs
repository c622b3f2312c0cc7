//! CPU reference compositor.
//!
//! Produces the same image the fill pipeline does, one pixel at a time, so the
//! blend math can be checked without a GPU.

use fluidmesh_engine::coords::Vec2;
use fluidmesh_engine::paint::{BlendMode, Color};

use crate::mesh::MeshFrame;

/// Composited color at `p`: the background, then each brush screened on top.
pub fn shade(frame: &MeshFrame, p: Vec2) -> Color {
    frame.brushes.iter().fold(frame.background, |dst, brush| {
        BlendMode::Screen.composite(brush.sample(p), dst)
    })
}

/// Renders `frame` into a tightly packed RGBA8 buffer, sampling pixel centers.
///
/// Returns an empty buffer for degenerate frames or a zero-sized target.
pub fn render_rgba8(frame: &MeshFrame, width: u32, height: u32) -> Vec<u8> {
    if frame.is_degenerate() || width == 0 || height == 0 {
        return Vec::new();
    }

    let vp = frame.geometry.viewport;
    let sx = vp.width / width as f32;
    let sy = vp.height / height as f32;

    let mut out = Vec::with_capacity(width as usize * height as usize * 4);
    for y in 0..height {
        for x in 0..width {
            let p = Vec2::new((x as f32 + 0.5) * sx, (y as f32 + 0.5) * sy);
            out.extend_from_slice(&shade(frame, p).to_rgba8());
        }
    }
    out
}
