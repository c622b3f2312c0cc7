/// Z-ordering key for draw items.
///
/// Higher values appear on top of lower values.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Default)]
pub struct ZIndex(pub i32);

impl ZIndex {
    /// Layer for full-surface backdrops; everything else draws above it.
    pub const BACKDROP: ZIndex = ZIndex(i32::MIN);

    #[inline]
    pub const fn new(v: i32) -> Self {
        Self(v)
    }
}
