use std::io::{self, Write};
use std::num::NonZeroUsize;

use super::grid::CharGrid;
use crate::AsciiError;

/// Default horizontal repeat count; terminal cells are roughly three times taller than wide.
pub const DEFAULT_STRETCH: usize = 3;

/// Writes a grid as text lines, repeating each glyph horizontally.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TextRenderer {
    stretch: NonZeroUsize,
}

impl TextRenderer {
    pub fn new(stretch: usize) -> Result<Self, AsciiError> {
        let stretch = NonZeroUsize::new(stretch).ok_or(AsciiError::InvalidStretch)?;
        Ok(Self { stretch })
    }

    pub fn stretch(&self) -> usize {
        self.stretch.get()
    }

    pub fn line(&self, row: &[char]) -> String {
        let stretch = self.stretch.get();
        let mut line = String::with_capacity(row.len() * stretch);
        for &ch in row {
            line.extend(std::iter::repeat(ch).take(stretch));
        }
        line
    }

    pub fn lines<'a>(&'a self, grid: &'a CharGrid) -> impl Iterator<Item = String> + 'a {
        grid.rows().map(move |row| self.line(row))
    }

    pub fn write_to<W: Write>(&self, grid: &CharGrid, mut sink: W) -> io::Result<()> {
        for line in self.lines(grid) {
            writeln!(sink, "{line}")?;
        }
        sink.flush()
    }

    pub fn render_to_string(&self, grid: &CharGrid) -> String {
        let mut output = String::new();
        for line in self.lines(grid) {
            output.push_str(&line);
            output.push('\n');
        }
        output
    }
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self { stretch: NonZeroUsize::new(DEFAULT_STRETCH).unwrap_or(NonZeroUsize::MIN) }
    }
}
