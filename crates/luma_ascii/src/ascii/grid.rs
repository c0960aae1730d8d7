/// Rectangular grid of glyphs, one per source pixel, stored row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CharGrid {
    pub width: u32,
    pub height: u32,
    pub cells: Vec<char>,
}

impl CharGrid {
    pub fn new(width: u32, height: u32, cells: Vec<char>) -> Self {
        assert_eq!(width as usize * height as usize, cells.len());
        Self { width, height, cells }
    }

    pub fn from_rows<R, I>(rows: R) -> Self
    where
        R: IntoIterator<Item = I>,
        I: IntoIterator<Item = char>,
    {
        let mut cells = Vec::new();
        let mut width = None;
        let mut height = 0;
        for row in rows {
            let start = cells.len();
            cells.extend(row);
            let row_width = cells.len() - start;
            assert_eq!(*width.get_or_insert(row_width), row_width, "rows must share one width");
            height += 1;
        }
        Self::new(width.unwrap_or(0) as u32, height, cells)
    }

    pub fn get(&self, x: u32, y: u32) -> Option<char> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.cells.get(y as usize * self.width as usize + x as usize).copied()
    }

    pub fn row(&self, y: u32) -> Option<&[char]> {
        if y >= self.height {
            return None;
        }
        let width = self.width as usize;
        let start = y as usize * width;
        Some(&self.cells[start..start + width])
    }

    pub fn rows(&self) -> impl Iterator<Item = &[char]> + '_ {
        let width = self.width as usize;
        (0..self.height as usize).map(move |y| &self.cells[y * width..(y + 1) * width])
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rows_shape() {
        let grid = CharGrid::from_rows(["abc".chars(), "def".chars()]);
        assert_eq!((grid.width, grid.height), (3, 2));
        assert_eq!(grid.get(2, 1), Some('f'));
        assert_eq!(grid.get(3, 0), None);
        assert_eq!(grid.row(1), Some(&['d', 'e', 'f'][..]));
    }

    #[test]
    fn test_rows_iterates_in_order() {
        let grid = CharGrid::new(2, 2, vec!['a', 'b', 'c', 'd']);
        let rows: Vec<String> = grid.rows().map(|row| row.iter().collect()).collect();
        assert_eq!(rows, ["ab", "cd"]);
    }

    #[test]
    fn test_empty_grid() {
        let grid = CharGrid::from_rows(Vec::<Vec<char>>::new());
        assert!(grid.is_empty());
        assert_eq!(grid.rows().count(), 0);
    }

    #[test]
    #[should_panic(expected = "rows must share one width")]
    fn test_ragged_rows_panic() {
        CharGrid::from_rows(["ab".chars(), "c".chars()]);
    }
}
