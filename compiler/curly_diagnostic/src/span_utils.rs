//! Line and column lookup for byte offsets.

use curly_ir::Span;

/// Byte offset of each line start, for O(log L) line lookups.
///
/// ```
/// use curly_diagnostic::span_utils::LineOffsetTable;
///
/// let source = "x = 1\nprint(x)";
/// let table = LineOffsetTable::build(source);
/// assert_eq!(table.offset_to_line_col(source, 0), (1, 1));
/// assert_eq!(table.offset_to_line_col(source, 6), (2, 1));
/// assert_eq!(table.offset_to_line_col(source, 12), (2, 7));
/// ```
#[derive(Clone, Debug, Default)]
pub struct LineOffsetTable {
    /// `offsets[i]` is the byte offset where line `i + 1` starts.
    offsets: Vec<u32>,
}

impl LineOffsetTable {
    pub fn build(source: &str) -> Self {
        let mut offsets = vec![0u32];
        offsets.extend(
            source
                .bytes()
                .enumerate()
                .filter(|&(_, b)| b == b'\n')
                .filter_map(|(i, _)| u32::try_from(i + 1).ok()),
        );
        LineOffsetTable { offsets }
    }

    /// 1-based line containing `offset`.
    pub fn line_from_offset(&self, offset: u32) -> u32 {
        let line = self.offsets.partition_point(|&start| start <= offset);
        u32::try_from(line.max(1)).unwrap_or(u32::MAX)
    }

    /// 1-based `(line, column)` for `offset`; the column counts characters.
    pub fn offset_to_line_col(&self, source: &str, offset: u32) -> (u32, u32) {
        let line = self.line_from_offset(offset);
        let line_start = self.offsets[line as usize - 1] as usize;
        let end = (offset as usize).min(source.len());
        let col = source
            .get(line_start..end)
            .map_or(0, |text| text.chars().count());
        (line, u32::try_from(col + 1).unwrap_or(u32::MAX))
    }

    pub fn line_count(&self) -> usize {
        self.offsets.len()
    }
}

/// `(line, column)` of a span's start, for one-off lookups.
pub fn span_to_line_col(source: &str, span: Span) -> (u32, u32) {
    LineOffsetTable::build(source).offset_to_line_col(source, span.start)
}

/// Convert a byte offset to a character offset.
///
/// Offsets inside a multi-byte character round down to its start.
pub fn byte_to_char_offset(source: &str, offset: usize) -> usize {
    source
        .char_indices()
        .take_while(|&(i, _)| i < offset)
        .count()
}
