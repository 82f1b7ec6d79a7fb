//! Port for the host that draws frames.

use crate::domain::navigation::Frame;

/// Draws the current frame.
///
/// Implementations own every visual concern (layout, fonts, colours, tab
/// icons). They relay user input back to the controller as
/// [`FlowEvent`](crate::domain::navigation::FlowEvent)s.
#[cfg_attr(test, mockall::automock)]
pub trait Renderer {
    /// Draw `frame`, replacing whatever was on screen.
    fn render(&mut self, frame: &Frame);
}
