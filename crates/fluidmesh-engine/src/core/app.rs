use winit::event::WindowEvent;

use super::ctx::FrameCtx;

/// Returned by app callbacks to keep running or shut the window down.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// Host application driven by [`Runtime`](crate::window::Runtime).
pub trait App {
    /// Sees every window event first. Returning [`AppControl::Exit`] closes the
    /// window before the runtime acts on the event.
    fn on_window_event(&mut self, event: &WindowEvent) -> AppControl {
        let _ = event;
        AppControl::Continue
    }

    /// One call per display refresh while the surface is attached.
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl;
}
