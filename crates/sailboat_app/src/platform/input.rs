use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// What a key did to the search input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputOutcome {
    Unchanged,
    Edited,
    Submitted,
}

/// Single-line text box for the search query. The cursor is a char index.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchInput {
    value: String,
    cursor: usize,
}

impl SearchInput {
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn set_value(&mut self, value: &str) {
        self.value = value.to_string();
        self.cursor = self.len();
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> InputOutcome {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Enter => return InputOutcome::Submitted,
            KeyCode::Char('a') if ctrl => self.cursor = 0,
            KeyCode::Char('e') if ctrl => self.cursor = self.len(),
            KeyCode::Char('u') if ctrl => {
                if self.value.is_empty() {
                    return InputOutcome::Unchanged;
                }
                self.clear();
                return InputOutcome::Edited;
            }
            KeyCode::Char(_) if ctrl => {}
            KeyCode::Char(ch) => {
                let at = self.byte_index(self.cursor);
                self.value.insert(at, ch);
                self.cursor += 1;
                return InputOutcome::Edited;
            }
            KeyCode::Backspace if self.cursor > 0 => {
                self.cursor -= 1;
                self.remove_at_cursor();
                return InputOutcome::Edited;
            }
            KeyCode::Delete if self.cursor < self.len() => {
                self.remove_at_cursor();
                return InputOutcome::Edited;
            }
            KeyCode::Left => self.cursor = self.cursor.saturating_sub(1),
            KeyCode::Right => self.cursor = (self.cursor + 1).min(self.len()),
            KeyCode::Home => self.cursor = 0,
            KeyCode::End => self.cursor = self.len(),
            _ => {}
        }
        InputOutcome::Unchanged
    }

    fn len(&self) -> usize {
        self.value.chars().count()
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_index)
            .map_or(self.value.len(), |(at, _)| at)
    }

    fn remove_at_cursor(&mut self) {
        let at = self.byte_index(self.cursor);
        self.value.remove(at);
    }
}
