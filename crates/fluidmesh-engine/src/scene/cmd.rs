use super::FillCmd;

/// Renderer-agnostic draw command stream.
///
/// Extending the scene:
/// - add a payload module next to `fill`
/// - add a new variant here
/// - add push helpers on `DrawList` inside that module
/// - add a matching renderer under `render`
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Fill(FillCmd),
}
