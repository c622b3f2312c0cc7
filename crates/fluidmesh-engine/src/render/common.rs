//! Shared GPU types and utilities for renderers.

use bytemuck::{Pod, Zeroable};

use crate::paint::BlendMode;

// ── blend ─────────────────────────────────────────────────────────────────

/// GPU blend state equivalent to [`BlendMode::composite`] on premultiplied color.
pub(super) fn blend_state(mode: BlendMode) -> wgpu::BlendState {
    let alpha = wgpu::BlendComponent {
        src_factor: wgpu::BlendFactor::One,
        dst_factor: wgpu::BlendFactor::OneMinusSrcAlpha,
        operation: wgpu::BlendOperation::Add,
    };

    let color = match mode {
        BlendMode::Normal => alpha,
        // s + d·(1 − s) == s + d − s·d
        BlendMode::Screen => wgpu::BlendComponent {
            src_factor: wgpu::BlendFactor::One,
            dst_factor: wgpu::BlendFactor::OneMinusSrc,
            operation: wgpu::BlendOperation::Add,
        },
    };

    wgpu::BlendState { color, alpha }
}

// ── viewport uniform ──────────────────────────────────────────────────────

#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
pub(super) struct ViewportUniform {
    pub viewport: [f32; 2],
    pub _pad: [f32; 2], // 16-byte alignment
}

/// `wgpu` minimum binding size for the viewport uniform buffer.
pub(super) fn viewport_ubo_min_binding_size() -> std::num::NonZeroU64 {
    std::num::NonZeroU64::new(std::mem::size_of::<ViewportUniform>() as u64)
        .expect("ViewportUniform has non-zero size by construction")
}

// ── quad vertex ───────────────────────────────────────────────────────────

#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
pub(super) struct QuadVertex {
    pub pos: [f32; 2], // 0..1
}

impl QuadVertex {
    const ATTRS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x2];

    pub(super) fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<QuadVertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

pub(super) const QUAD_VERTICES: [QuadVertex; 4] = [
    QuadVertex { pos: [0.0, 0.0] },
    QuadVertex { pos: [1.0, 0.0] },
    QuadVertex { pos: [1.0, 1.0] },
    QuadVertex { pos: [0.0, 1.0] },
];

pub(super) const QUAD_INDICES: [u16; 6] = [0, 1, 2, 0, 2, 3];

#[cfg(test)]
mod tests {
    use super::*;
    use wgpu::{BlendFactor as F, BlendOperation};

    fn add(src: F, dst: F) -> wgpu::BlendComponent {
        wgpu::BlendComponent { src_factor: src, dst_factor: dst, operation: BlendOperation::Add }
    }

    // ── blend_state ───────────────────────────────────────────────────────

    #[test]
    fn normal_is_premultiplied_source_over() {
        let s = blend_state(BlendMode::Normal);
        assert_eq!(s.color, add(F::One, F::OneMinusSrcAlpha));
        assert_eq!(s.alpha, add(F::One, F::OneMinusSrcAlpha));
    }

    #[test]
    fn screen_scales_destination_by_inverse_source_color() {
        let s = blend_state(BlendMode::Screen);
        assert_eq!(s.color, add(F::One, F::OneMinusSrc));
        assert_eq!(s.alpha, add(F::One, F::OneMinusSrcAlpha));
    }

    #[test]
    fn screen_factors_agree_with_cpu_composite() {
        use crate::paint::Color;

        // Evaluate the fixed-function equation by hand for one pixel.
        let src = Color::from_straight(0.8, 0.2, 0.5, 0.6);
        let dst = Color::from_straight(0.1, 0.7, 0.3, 1.0);
        let s = blend_state(BlendMode::Screen);
        assert_eq!(s.color.dst_factor, F::OneMinusSrc);

        let gpu = |sc: f32, dc: f32| sc + dc * (1.0 - sc);
        let cpu = BlendMode::Screen.composite(src, dst);
        assert!((gpu(src.r, dst.r) - cpu.r).abs() < 1e-6);
        assert!((gpu(src.g, dst.g) - cpu.g).abs() < 1e-6);
        assert!((gpu(src.b, dst.b) - cpu.b).abs() < 1e-6);
    }
}
