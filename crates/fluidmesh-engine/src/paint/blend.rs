use super::Color;

/// How a fill combines with what is already on the surface.
///
/// Both modes are defined on premultiplied colors.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub enum BlendMode {
    /// Source-over: `s + d·(1 − αs)`.
    #[default]
    Normal,
    /// Screen: `s + d − s·d`, i.e. `1 − (1 − s)(1 − d)`. Never darkens.
    Screen,
}

impl BlendMode {
    /// CPU reference for the GPU blend state of the same mode.
    #[inline]
    pub fn composite(self, src: Color, dst: Color) -> Color {
        match self {
            BlendMode::Normal => {
                let k = 1.0 - src.a;
                Color::from_premul(
                    src.r + dst.r * k,
                    src.g + dst.g * k,
                    src.b + dst.b * k,
                    src.a + dst.a * k,
                )
            }
            BlendMode::Screen => {
                let screen = |s: f32, d: f32| s + d - s * d;
                Color::from_premul(
                    screen(src.r, dst.r),
                    screen(src.g, dst.g),
                    screen(src.b, dst.b),
                    screen(src.a, dst.a),
                )
            }
        }
    }
}
