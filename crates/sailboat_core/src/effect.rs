/// Side effects requested by [`crate::update`] for the platform layer to run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Acquire and extract the document named by `query`, then answer with
    /// [`crate::Msg::PageLoaded`].
    Load { query: String },
    /// Clear the search input and give it keyboard focus.
    FocusSearch,
    /// Leave the interaction loop and restore the terminal.
    Shutdown,
}
