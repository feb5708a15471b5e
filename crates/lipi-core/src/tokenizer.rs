//! Longest-match lookup over a char-indexed input.

use crate::tables::MappingTable;

/// Input text with precomputed char boundaries, so that table lookups can
/// slice the original `&str` instead of allocating per probe.
///
/// Positions are char indices. Output scripts outside the BMP never enter
/// here as keys, but Devanagari input does, so byte offsets are required.
pub struct Cursor<'a> {
    text: &'a str,
    /// offsets[i] = byte offset of char i; one trailing entry for `text.len()`.
    offsets: Vec<usize>,
}

impl<'a> Cursor<'a> {
    pub fn new(text: &'a str) -> Self {
        let mut offsets: Vec<usize> = text.char_indices().map(|(i, _)| i).collect();
        offsets.push(text.len());
        Self { text, offsets }
    }

    /// Number of chars.
    pub fn len(&self) -> usize {
        self.offsets.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn char_at(&self, pos: usize) -> Option<char> {
        if pos >= self.len() {
            return None;
        }
        self.text[self.offsets[pos]..].chars().next()
    }

    /// Up to `len` chars starting at `pos`, clamped to the end of input.
    pub fn slice(&self, pos: usize, len: usize) -> &'a str {
        let start = pos.min(self.len());
        let end = pos.saturating_add(len).min(self.len());
        &self.text[self.offsets[start]..self.offsets[end]]
    }

    pub fn starts_with(&self, pos: usize, pattern: &str) -> bool {
        pos < self.len() && self.text[self.offsets[pos]..].starts_with(pattern)
    }
}

/// A table hit: the mapped value and how many input chars it consumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Match {
    pub value: &'static str,
    pub consumed: usize,
}

/// Find the longest key of `table` that starts at `pos`.
///
/// Tries lengths from `min(table.max_key_len(), remaining)` down to 1 and
/// returns the first hit, so "kh" always beats "k" + "h".
pub fn longest_match(cursor: &Cursor<'_>, pos: usize, table: &MappingTable) -> Option<Match> {
    longest_match_within(cursor, pos, table, table.max_key_len())
}

/// [`longest_match`] with an explicit upper bound on the key length.
pub fn longest_match_within(
    cursor: &Cursor<'_>,
    pos: usize,
    table: &MappingTable,
    max_len: usize,
) -> Option<Match> {
    let remaining = cursor.len().saturating_sub(pos);
    (1..=max_len.min(remaining)).rev().find_map(|len| {
        table.get(cursor.slice(pos, len)).map(|value| Match {
            value,
            consumed: len,
        })
    })
}
