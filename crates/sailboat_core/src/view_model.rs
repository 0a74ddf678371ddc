use crate::{DisplayElement, Mode, Viewport};

/// Borrowed snapshot of everything the platform needs to draw a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppView<'a> {
    pub mode: Mode,
    pub query: &'a str,
    pub page: Option<&'a [DisplayElement]>,
    pub viewport: &'a Viewport,
}

impl AppView<'_> {
    /// Whether the content window (rather than the search bar) has focus.
    pub fn content_focused(&self) -> bool {
        self.mode == Mode::Loaded
    }
}
