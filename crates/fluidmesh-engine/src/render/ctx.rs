use crate::coords::Viewport;

/// What a renderer needs to build and feed its pipelines for one frame.
///
/// Pipelines are keyed on `surface_format`; it only changes if the surface is
/// recreated.
pub struct RenderCtx<'a> {
    pub device: &'a wgpu::Device,
    pub queue: &'a wgpu::Queue,
    pub surface_format: wgpu::TextureFormat,
    /// Logical px; geometry is converted to NDC against this.
    pub viewport: Viewport,
}

/// The frame's encoder and the swapchain view renderers draw into.
///
/// The view has already been cleared; renderers load and store.
pub struct RenderTarget<'a> {
    pub encoder: &'a mut wgpu::CommandEncoder,
    pub color_view: &'a wgpu::TextureView,
}
