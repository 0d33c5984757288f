use text_size::TextSize;

/// A utility struct to convert byte offsets to line and column numbers.
///
/// The host tree reports byte offsets, but findings carry line/column pairs
/// which are more human-readable.
#[derive(Debug, Clone)]
pub struct LineIndex {
    /// Stores the byte index of the start of each line.
    line_starts: Vec<usize>,
}

impl LineIndex {
    /// Creates a new `LineIndex` by scanning the source code for newlines.
    /// Uses byte iteration since '\n' is always a single byte in UTF-8.
    #[must_use]
    pub fn new(source: &str) -> Self {
        let mut line_starts = vec![0];
        for (i, byte) in source.as_bytes().iter().enumerate() {
            if *byte == b'\n' {
                line_starts.push(i + 1);
            }
        }
        Self { line_starts }
    }

    /// Converts a byte offset to a 1-indexed line number.
    #[must_use]
    pub fn line_index(&self, offset: TextSize) -> usize {
        let offset = usize::from(offset);
        // Binary search to find which line range the offset falls into.
        match self.line_starts.binary_search(&offset) {
            Ok(line) => line + 1,
            Err(line) => line,
        }
    }

    /// Converts a byte offset to a 1-indexed `(line, column)` pair. The
    /// column is a byte column within the line.
    #[must_use]
    pub fn line_col(&self, offset: TextSize) -> (usize, usize) {
        let line = self.line_index(offset);
        let line_start = self.line_starts.get(line - 1).copied().unwrap_or(0);
        (line, usize::from(offset) - line_start + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_index_maps_offsets_to_lines() {
        let index = LineIndex::new("ab\ncd\n\nef");
        assert_eq!(index.line_index(TextSize::from(0)), 1);
        assert_eq!(index.line_index(TextSize::from(2)), 1);
        assert_eq!(index.line_index(TextSize::from(3)), 2);
        assert_eq!(index.line_index(TextSize::from(6)), 3);
        assert_eq!(index.line_index(TextSize::from(7)), 4);
    }

    #[test]
    fn test_line_col_is_one_indexed() {
        let index = LineIndex::new("ab\ncd");
        assert_eq!(index.line_col(TextSize::from(0)), (1, 1));
        assert_eq!(index.line_col(TextSize::from(1)), (1, 2));
        assert_eq!(index.line_col(TextSize::from(3)), (2, 1));
        assert_eq!(index.line_col(TextSize::from(4)), (2, 2));
    }
}
