/// Surface and device options.
#[derive(Debug, Clone)]
pub struct GpuInit {
    /// Pick an `*Srgb` surface format when the surface offers one.
    ///
    /// Off by default so gradient interpolation and screen blending run on
    /// encoded values, matching 2D canvas compositing and the CPU raster.
    pub prefer_srgb: bool,

    /// FIFO paces the continuous redraw loop at the display's refresh rate.
    pub present_mode: wgpu::PresentMode,

    /// Falls back to the first supported mode when `None` or unsupported.
    pub alpha_mode: Option<wgpu::CompositeAlphaMode>,

    pub required_features: wgpu::Features,

    /// Downlevel defaults: the fill pipeline needs nothing beyond instancing
    /// and one uniform buffer.
    pub required_limits: wgpu::Limits,

    /// Hint only; backends may clamp it.
    pub desired_maximum_frame_latency: u32,
}

impl Default for GpuInit {
    fn default() -> Self {
        Self {
            prefer_srgb: false,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: None,
            required_features: wgpu::Features::empty(),
            required_limits: wgpu::Limits::downlevel_defaults(),
            desired_maximum_frame_latency: 2,
        }
    }
}
