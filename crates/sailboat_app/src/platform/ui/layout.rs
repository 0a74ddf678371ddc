use ratatui::layout::{Constraint, Layout, Margin, Rect};
use sailboat_core::Msg;

use super::constants::{HINT_HEIGHT, SEARCH_BAR_HEIGHT};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    pub search: Rect,
    pub content: Rect,
    pub hint: Rect,
}

pub fn screen_layout(area: Rect) -> ScreenLayout {
    let [search, content, hint] = Layout::vertical([
        Constraint::Length(SEARCH_BAR_HEIGHT),
        Constraint::Min(0),
        Constraint::Length(HINT_HEIGHT),
    ])
    .areas(area);
    ScreenLayout {
        search,
        content,
        hint,
    }
}

/// Inside of the search bar border, where the query is typed.
pub fn search_text_area(search: Rect) -> Rect {
    search.inner(Margin::new(1, 1))
}

/// Tells the core how large the content window is for a screen of `area`.
pub fn viewport_msg(area: Rect) -> Msg {
    let content = screen_layout(area).content;
    Msg::ViewportResized {
        width: usize::from(content.width),
        height: usize::from(content.height),
    }
}

#[cfg(test)]
mod tests {
    use ratatui::layout::Rect;
    use sailboat_core::Msg;

    use super::{screen_layout, search_text_area, viewport_msg};

    #[test]
    fn content_sits_between_search_bar_and_hint() {
        let layout = screen_layout(Rect::new(0, 0, 80, 24));

        assert_eq!(layout.search, Rect::new(0, 0, 80, 3));
        assert_eq!(layout.content, Rect::new(0, 3, 80, 20));
        assert_eq!(layout.hint, Rect::new(0, 23, 80, 1));
        assert_eq!(search_text_area(layout.search), Rect::new(1, 1, 78, 1));
    }

    #[test]
    fn viewport_is_the_content_window() {
        assert_eq!(
            viewport_msg(Rect::new(0, 0, 30, 7)),
            Msg::ViewportResized {
                width: 30,
                height: 3
            }
        );
    }
}
