use crate::ElementSequence;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// The content window was measured (startup or terminal resize).
    ViewportResized { width: usize, height: usize },
    /// User edited the search input.
    InputChanged(String),
    /// User pressed Enter in the search input.
    QuerySubmitted,
    /// Extraction finished for the last submitted query.
    PageLoaded(ElementSequence),
    /// Keyboard command while the page has focus.
    Command(Command),
    /// Ctrl-C from any mode.
    Interrupted,
    NoOp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Quit,
    Search,
    ScrollDown,
    ScrollUp,
}

impl Command {
    /// Maps a character key to its command; arrow keys are mapped by the platform.
    pub fn from_char(key: char) -> Option<Self> {
        match key {
            'q' => Some(Self::Quit),
            's' => Some(Self::Search),
            _ => None,
        }
    }
}
