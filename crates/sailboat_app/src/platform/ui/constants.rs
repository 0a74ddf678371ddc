use ratatui::style::Color;

/// Search bar (with border), content window (at least 3 rows) and key hint line.
pub const MIN_HEIGHT: u16 = 3 + 3 + 1;
pub const MIN_WIDTH: u16 = 30;

pub const SEARCH_BAR_HEIGHT: u16 = 3;
pub const HINT_HEIGHT: u16 = 1;
pub const KEY_HINT: &str = "[q]uit, [s]earch";

pub const COLOR_FOCUSED: Color = Color::Magenta;
pub const COLOR_DEFAULT: Color = Color::White;
pub const COLOR_LINK: Color = Color::Blue;
pub const COLOR_HEADING: Color = Color::Red;
pub const COLOR_IMAGE: Color = Color::Green;
