//! Paginated drawing of an element sequence into a bordered character grid.
//!
//! Row 0 of the grid holds the page title (or the error heading); the body is
//! drawn from row 1 downwards. The grid itself is abstracted by [`Surface`] so
//! the renderer stays independent of any terminal library.

use crate::element::{body, DisplayElement};

pub const IMAGE_MARKER: &str = "[IMAGE]";
pub const ERROR_HEADING: &str = "Error";

/// Column where every body row starts, just inside the left border.
const LEFT_MARGIN: usize = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StyleClass {
    #[default]
    Default,
    Link,
    Image,
    Heading,
}

/// Style of one drawn unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Stroke {
    pub class: StyleClass,
    pub standout: bool,
}

impl Stroke {
    pub fn new(class: StyleClass) -> Self {
        Self {
            class,
            standout: false,
        }
    }

    pub fn standout(class: StyleClass) -> Self {
        Self {
            class,
            standout: true,
        }
    }
}

/// A write that fell outside the physical grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("write at row {row}, column {col} is outside the grid")]
pub struct RenderOverflow {
    pub row: usize,
    pub col: usize,
}

/// Character grid the renderer draws into.
pub trait Surface {
    /// `(rows, cols)` of the grid.
    fn size(&self) -> (usize, usize);

    /// Writes `text` at `(row, col)`, clipped to the grid width, and returns
    /// the column following the last written cell.
    fn put_str(
        &mut self,
        row: usize,
        col: usize,
        text: &str,
        stroke: Stroke,
    ) -> Result<usize, RenderOverflow>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollDirection {
    Up,
    Down,
}

/// Which slice of the body is visible.
///
/// Invariant: `current_line` only moves within `0..body_len`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScrollState {
    pub top: usize,
    pub current_line: usize,
    pub max_visible_lines: usize,
    bottom: usize,
}

impl ScrollState {
    pub fn for_rows(rows: usize) -> Self {
        Self {
            top: 0,
            current_line: 0,
            max_visible_lines: rows.saturating_sub(2),
            bottom: rows,
        }
    }

    /// Row count of the viewport, the bound both scroll rules test against.
    pub fn bottom(&self) -> usize {
        self.bottom
    }

    /// Body rows a page can fill: text stops one row short of `max_visible_lines`.
    fn text_rows(&self) -> usize {
        self.max_visible_lines.saturating_sub(1)
    }

    /// Applies one scroll step for a body of `body_len` elements and returns
    /// whether the position changed.
    pub fn scroll(&mut self, direction: ScrollDirection, body_len: usize) -> bool {
        let next = match direction {
            ScrollDirection::Up => match self.current_line.checked_sub(1) {
                Some(next) => next,
                None => return false,
            },
            ScrollDirection::Down => {
                let next = self.current_line + 1;
                if body_len <= self.max_visible_lines
                    || self.current_line + self.text_rows() >= body_len
                    || next >= body_len
                {
                    return false;
                }
                next
            }
        };

        if next < self.bottom && self.top + next < self.bottom {
            self.current_line = next;
            true
        } else if next == self.bottom && self.top + self.max_visible_lines < self.bottom {
            self.top += 1;
            true
        } else {
            false
        }
    }
}

/// The content window: its dimensions and the scroll position within the
/// sequence currently shown.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Viewport {
    width: usize,
    height: usize,
    scroll: ScrollState,
}

impl Viewport {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            scroll: ScrollState::for_rows(height),
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn scroll_state(&self) -> ScrollState {
        self.scroll
    }

    /// Adopts new dimensions; the scroll position starts over.
    pub fn resize(&mut self, width: usize, height: usize) {
        *self = Self::new(width, height);
    }

    /// Back to the top of the page, used whenever a new sequence arrives.
    pub fn reset(&mut self) {
        self.scroll = ScrollState::for_rows(self.height);
    }

    pub fn scroll(&mut self, direction: ScrollDirection, sequence: &[DisplayElement]) -> bool {
        self.scroll.scroll(direction, body(sequence).len())
    }

    /// Draws the current page of `sequence`.
    ///
    /// Error pages show the heading and message only. A leading title is drawn
    /// on row 0 and never scrolls. Elements that do not fit the grid are skipped.
    pub fn draw<S: Surface + ?Sized>(&self, sequence: &[DisplayElement], surface: &mut S) {
        match sequence.first() {
            None => return,
            Some(DisplayElement::Error { message }) => {
                let _ = surface.put_str(
                    0,
                    LEFT_MARGIN,
                    ERROR_HEADING,
                    Stroke::new(StyleClass::Heading),
                );
                let _ = surface.put_str(1, LEFT_MARGIN, message, Stroke::default());
                return;
            }
            Some(DisplayElement::Title { text }) => {
                let _ = surface.put_str(
                    0,
                    LEFT_MARGIN,
                    text.trim(),
                    Stroke::new(StyleClass::Heading),
                );
            }
            Some(_) => {}
        }

        let body = body(sequence);
        let start = self.scroll.current_line.min(body.len());
        let end = (start + self.scroll.max_visible_lines).min(body.len());

        let mut row = 1;
        for element in &body[start..end] {
            match self.draw_element(surface, row, element, false) {
                Ok(next_row) => row = next_row,
                Err(_) => continue,
            }
        }
    }

    fn draw_element<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        row: usize,
        element: &DisplayElement,
        in_link: bool,
    ) -> Result<usize, RenderOverflow> {
        match element {
            DisplayElement::Text {
                content,
                is_link_context,
            } => {
                if element.is_line_break() {
                    return Ok(row + 1);
                }
                let class = if in_link || *is_link_context {
                    StyleClass::Link
                } else {
                    StyleClass::Default
                };

                let mut row = row;
                for line in wrap_text(content, self.wrap_width()) {
                    if row >= self.scroll.max_visible_lines {
                        break;
                    }
                    surface.put_str(row, LEFT_MARGIN, &line, Stroke::new(class))?;
                    row += 1;
                }
                Ok(row)
            }
            DisplayElement::Image { source, alt } => {
                let class = if in_link {
                    StyleClass::Link
                } else {
                    StyleClass::Image
                };
                let label = alt.as_deref().unwrap_or(source);
                let col = surface.put_str(row, LEFT_MARGIN, IMAGE_MARKER, Stroke::standout(class))?;
                surface.put_str(row, col, &format!(": {label}"), Stroke::new(class))?;
                Ok(row + 1)
            }
            DisplayElement::Link {
                href,
                text,
                children,
            } => {
                let label = text.as_deref().or(href.as_deref()).unwrap_or_default();
                surface.put_str(
                    row,
                    LEFT_MARGIN,
                    &format!(" {}", label.trim()),
                    Stroke::new(StyleClass::Link),
                )?;

                let mut row = row + 1;
                for child in children.iter().flatten() {
                    // One spacer row under every nested element.
                    row = self.draw_element(surface, row, child, true)? + 1;
                }
                Ok(row)
            }
            // Only valid at the head of a sequence, which `draw` handles.
            DisplayElement::Title { .. } | DisplayElement::Error { .. } => Ok(row),
        }
    }

    fn wrap_width(&self) -> usize {
        self.width.saturating_sub(2).max(1)
    }
}

/// Collapses whitespace runs and word-wraps to `width` columns.
fn wrap_text(content: &str, width: usize) -> Vec<String> {
    let normalized = content.split_whitespace().collect::<Vec<_>>().join(" ");
    if normalized.is_empty() {
        return Vec::new();
    }
    textwrap::wrap(&normalized, width)
        .into_iter()
        .map(|line| line.into_owned())
        .collect()
}
