use ratatui::buffer::Buffer;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;
use sailboat_core::{AppView, RenderOverflow, Stroke, StyleClass, Surface};

use super::constants::*;
use super::layout::{screen_layout, search_text_area};

/// Draws one frame: search bar, content window and key hint.
///
/// `cursor` is the char index of the input cursor within `view.query`.
pub fn render(frame: &mut Frame, view: &AppView<'_>, cursor: usize) {
    let layout = screen_layout(frame.area());
    let content_focused = view.content_focused();

    frame.render_widget(
        Block::bordered().border_style(border_style(!content_focused)),
        layout.search,
    );
    let text_area = search_text_area(layout.search);
    let (visible, cursor_col) = scroll_into_view(view.query, cursor, usize::from(text_area.width));
    frame.render_widget(
        Paragraph::new(visible).style(Style::default().fg(COLOR_DEFAULT)),
        text_area,
    );
    if !content_focused && text_area.width > 0 {
        frame.set_cursor_position(Position::new(text_area.x + cursor_col, text_area.y));
    }

    frame.render_widget(
        Block::bordered().border_style(border_style(content_focused)),
        layout.content,
    );
    if let Some(page) = view.page {
        let mut surface = ContentSurface::new(frame.buffer_mut(), layout.content);
        view.viewport.draw(page, &mut surface);
    }

    frame.render_widget(Paragraph::new(KEY_HINT), layout.hint);
}

fn border_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(COLOR_FOCUSED)
    } else {
        Style::default().fg(COLOR_DEFAULT)
    }
}

/// Slice of `text` that fits `width` columns with the cursor on screen, and
/// the cursor column within that slice.
fn scroll_into_view(text: &str, cursor: usize, width: usize) -> (String, u16) {
    let offset = cursor.saturating_sub(width.saturating_sub(1));
    let visible = text.chars().skip(offset).take(width).collect();
    let col = u16::try_from(cursor - offset).unwrap_or(u16::MAX);
    (visible, col)
}

pub(crate) fn stroke_style(stroke: Stroke) -> Style {
    let style = match stroke.class {
        StyleClass::Default => Style::default().fg(COLOR_DEFAULT),
        StyleClass::Link => Style::default().fg(COLOR_LINK),
        StyleClass::Image => Style::default().fg(COLOR_IMAGE),
        StyleClass::Heading => Style::default()
            .fg(COLOR_HEADING)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
    };
    if stroke.standout {
        style.add_modifier(Modifier::REVERSED)
    } else {
        style
    }
}

/// The content window's region of the frame buffer, addressed from its
/// top-left corner (border included).
pub(crate) struct ContentSurface<'b> {
    buf: &'b mut Buffer,
    area: Rect,
}

impl<'b> ContentSurface<'b> {
    pub(crate) fn new(buf: &'b mut Buffer, area: Rect) -> Self {
        Self { buf, area }
    }
}

impl Surface for ContentSurface<'_> {
    fn size(&self) -> (usize, usize) {
        (usize::from(self.area.height), usize::from(self.area.width))
    }

    fn put_str(
        &mut self,
        row: usize,
        col: usize,
        text: &str,
        stroke: Stroke,
    ) -> Result<usize, RenderOverflow> {
        let (rows, cols) = self.size();
        if row >= rows || col >= cols {
            return Err(RenderOverflow { row, col });
        }
        // Both fit in u16: they are below the area's own u16 dimensions.
        let x = self.area.x + col as u16;
        let y = self.area.y + row as u16;
        let (end_x, _) = self
            .buf
            .set_stringn(x, y, text, cols - col, stroke_style(stroke));
        Ok(usize::from(end_x - self.area.x))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use ratatui::backend::TestBackend;
    use ratatui::buffer::Buffer;
    use ratatui::layout::Rect;
    use ratatui::style::Modifier;
    use ratatui::Terminal;
    use sailboat_core::{
        update, AppState, DisplayElement, Msg, Stroke, StyleClass, Surface, Viewport,
    };

    use super::{render, scroll_into_view, stroke_style, ContentSurface};
    use crate::platform::ui::constants::{COLOR_FOCUSED, COLOR_HEADING, COLOR_LINK};
    use crate::platform::ui::layout::viewport_msg;

    fn row_text(buf: &Buffer, y: u16) -> String {
        let area = buf.area;
        (area.x..area.x + area.width)
            .map(|x| buf[(x, y)].symbol())
            .collect::<String>()
            .trim_end()
            .to_string()
    }

    #[test]
    fn surface_is_offset_by_its_area_and_rejects_outside_writes() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 20, 10));
        let mut surface = ContentSurface::new(&mut buf, Rect::new(2, 3, 10, 4));

        assert_eq!(surface.size(), (4, 10));
        let next = surface
            .put_str(1, 1, "hello", Stroke::new(StyleClass::Link))
            .unwrap();
        assert_eq!(next, 6);
        assert!(surface.put_str(4, 1, "x", Stroke::default()).is_err());
        assert!(surface.put_str(0, 10, "x", Stroke::default()).is_err());

        assert_eq!(buf[(3, 4)].symbol(), "h");
        assert_eq!(buf[(3, 4)].fg, COLOR_LINK);
    }

    #[test]
    fn surface_clips_to_the_area_width() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 20, 2));
        let mut surface = ContentSurface::new(&mut buf, Rect::new(0, 0, 6, 2));

        let next = surface
            .put_str(0, 1, "abcdefgh", Stroke::default())
            .unwrap();

        assert_eq!(next, 6);
        assert_eq!(row_text(&buf, 0), " abcde");
    }

    #[test]
    fn standout_and_heading_styles() {
        let marker = stroke_style(Stroke::standout(StyleClass::Image));
        assert!(marker.add_modifier.contains(Modifier::REVERSED));

        let heading = stroke_style(Stroke::new(StyleClass::Heading));
        assert_eq!(heading.fg, Some(COLOR_HEADING));
        assert!(heading.add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn long_queries_keep_the_cursor_visible() {
        assert_eq!(scroll_into_view("abc", 3, 10), ("abc".to_string(), 3));
        assert_eq!(scroll_into_view("abcdefghij", 10, 5), ("ghij".to_string(), 4));
        assert_eq!(scroll_into_view("abcdefghij", 0, 5), ("abcde".to_string(), 0));
    }

    #[test]
    fn viewport_draws_into_the_frame_buffer() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 20, 6));
        let page = vec![
            DisplayElement::Title {
                text: "Title".to_string(),
            },
            DisplayElement::text("body text"),
        ];

        let area = buf.area;
        Viewport::new(20, 6).draw(&page, &mut ContentSurface::new(&mut buf, area));

        assert_eq!(row_text(&buf, 0), " Title");
        assert_eq!(row_text(&buf, 1), " body text");
    }

    #[test]
    fn full_frame_shows_query_page_and_hint() {
        let mut terminal = Terminal::new(TestBackend::new(40, 10)).unwrap();
        let (state, _) = update(AppState::new(), viewport_msg(Rect::new(0, 0, 40, 10)));
        let (state, _) = update(state, Msg::InputChanged("example.com".to_string()));
        let (state, _) = update(state, Msg::QuerySubmitted);
        let (state, _) = update(
            state,
            Msg::PageLoaded(vec![
                DisplayElement::Title {
                    text: "Example".to_string(),
                },
                DisplayElement::text("Hello"),
            ]),
        );

        terminal
            .draw(|frame| render(frame, &state.view(), 11))
            .unwrap();

        let buf = terminal.backend().buffer();
        assert!(row_text(buf, 1).contains("example.com"));
        assert!(row_text(buf, 3).starts_with("┌Example"));
        assert!(row_text(buf, 4).starts_with("│Hello"));
        assert_eq!(row_text(buf, 9), "[q]uit, [s]earch");
        assert_eq!(buf[(0, 5)].fg, COLOR_FOCUSED);
    }
}
