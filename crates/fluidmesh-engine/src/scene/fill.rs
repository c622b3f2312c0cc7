use crate::coords::Rect;
use crate::paint::{BlendMode, Color, Paint};

use super::{DrawCmd, DrawList, ZIndex};

/// Rect fill payload: paint evaluated over `rect`, combined with `blend`.
#[derive(Debug, Clone, PartialEq)]
pub struct FillCmd {
    pub rect: Rect,
    pub paint: Paint,
    pub blend: BlendMode,
}

impl FillCmd {
    #[inline]
    pub fn new(rect: Rect, paint: Paint, blend: BlendMode) -> Self {
        Self { rect, paint, blend }
    }
}

impl DrawList {
    /// Records a fill command.
    #[inline]
    pub fn push_fill(&mut self, z: ZIndex, rect: Rect, paint: impl Into<Paint>, blend: BlendMode) {
        self.push(z, DrawCmd::Fill(FillCmd::new(rect, paint.into(), blend)));
    }

    /// Records a solid, source-over fill.
    #[inline]
    pub fn push_solid_fill(&mut self, z: ZIndex, rect: Rect, color: Color) {
        self.push_fill(z, rect, Paint::Solid(color), BlendMode::Normal);
    }

    /// Iterates fills in paint order.
    pub fn fills_in_paint_order(&mut self) -> impl Iterator<Item = &FillCmd> {
        self.iter_in_paint_order().map(|item| match &item.cmd {
            DrawCmd::Fill(f) => f,
        })
    }
}
