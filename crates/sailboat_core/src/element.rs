/// Content of the `Text` sentinel that forces a new line instead of being wrapped.
pub const LINE_BREAK: &str = "\n";

/// Message shown when a document yields nothing displayable.
pub const EMPTY_PAGE: &str = "Empty Page";

/// One renderable unit produced by the markup extractor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayElement {
    Text {
        content: String,
        is_link_context: bool,
    },
    Image {
        source: String,
        alt: Option<String>,
    },
    /// Exactly one of `text` and `children` is set: a plain anchor carries its
    /// text run, a compound anchor carries its flattened children.
    Link {
        href: Option<String>,
        text: Option<String>,
        children: Option<Vec<DisplayElement>>,
    },
    Title {
        text: String,
    },
    /// When present it is the only element of the sequence.
    Error {
        message: String,
    },
}

/// The elements extracted from one search, in document order.
pub type ElementSequence = Vec<DisplayElement>;

impl DisplayElement {
    pub fn text(content: impl Into<String>) -> Self {
        Self::Text {
            content: content.into(),
            is_link_context: false,
        }
    }

    pub fn line_break() -> Self {
        Self::text(LINE_BREAK)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::Error {
            message: message.into(),
        }
    }

    pub fn is_line_break(&self) -> bool {
        matches!(self, Self::Text { content, .. } if content == LINE_BREAK)
    }
}

/// The scrollable part of a sequence: everything after a leading `Title` or `Error`.
pub fn body(sequence: &[DisplayElement]) -> &[DisplayElement] {
    match sequence.first() {
        Some(DisplayElement::Title { .. }) | Some(DisplayElement::Error { .. }) => &sequence[1..],
        _ => sequence,
    }
}
