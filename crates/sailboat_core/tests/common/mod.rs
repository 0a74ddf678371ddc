#![allow(dead_code)]

use sailboat_core::{RenderOverflow, Stroke, Surface};

/// In-memory character grid that records the stroke of every written cell.
pub struct TextGrid {
    rows: usize,
    cols: usize,
    cells: Vec<Vec<(char, Option<Stroke>)>>,
}

impl TextGrid {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![vec![(' ', None); cols]; rows],
        }
    }

    /// Row contents with trailing blanks removed.
    pub fn line(&self, row: usize) -> String {
        let text: String = self.cells[row].iter().map(|(ch, _)| *ch).collect();
        text.trim_end().to_string()
    }

    pub fn lines(&self) -> Vec<String> {
        (0..self.rows).map(|row| self.line(row)).collect()
    }

    pub fn stroke_at(&self, row: usize, col: usize) -> Option<Stroke> {
        self.cells[row][col].1
    }
}

impl Surface for TextGrid {
    fn size(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    fn put_str(
        &mut self,
        row: usize,
        col: usize,
        text: &str,
        stroke: Stroke,
    ) -> Result<usize, RenderOverflow> {
        if row >= self.rows || col >= self.cols {
            return Err(RenderOverflow { row, col });
        }
        let mut next = col;
        for ch in text.chars().take(self.cols - col) {
            self.cells[row][next] = (ch, Some(stroke));
            next += 1;
        }
        Ok(next)
    }
}

pub fn init_logging() {
    static INIT: std::sync::Once = std::sync::Once::new();
    INIT.call_once(sailboat_logging::initialize_for_tests);
}
