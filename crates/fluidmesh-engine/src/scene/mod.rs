//! Scene (draw stream) types.
//!
//! Responsibilities:
//! - store renderer-agnostic fill commands
//! - provide deterministic ordering (z-index + insertion order)

mod cmd;
mod fill;
mod key;
mod list;
mod z_index;

pub use cmd::DrawCmd;
pub use fill::FillCmd;
pub use key::SortKey;
pub use list::{DrawItem, DrawList};
pub use z_index::ZIndex;
