use crate::view_model::AppView;
use crate::{DisplayElement, ElementSequence, Viewport};

/// Where the interaction loop is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    AwaitingQuery,
    Loaded,
    Terminated,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    mode: Mode,
    query: String,
    page: Option<ElementSequence>,
    viewport: Viewport,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn is_terminated(&self) -> bool {
        self.mode == Mode::Terminated
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn page(&self) -> Option<&[DisplayElement]> {
        self.page.as_deref()
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn view(&self) -> AppView<'_> {
        AppView {
            mode: self.mode,
            query: &self.query,
            page: self.page.as_deref(),
            viewport: &self.viewport,
        }
    }

    /// Returns whether anything changed since the last call and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
    }

    pub(crate) fn set_query(&mut self, query: String) {
        self.query = query;
    }

    pub(crate) fn resize_viewport(&mut self, width: usize, height: usize) {
        self.viewport.resize(width, height);
    }

    /// Replaces the held sequence and scrolls back to the top.
    pub(crate) fn load_page(&mut self, page: ElementSequence) {
        self.page = Some(page);
        self.viewport.reset();
    }

    pub(crate) fn discard_page(&mut self) {
        self.page = None;
        self.viewport.reset();
    }

    pub(crate) fn scroll(&mut self, direction: crate::ScrollDirection) -> bool {
        match self.page.as_deref() {
            Some(page) => self.viewport.scroll(direction, page),
            None => false,
        }
    }
}
