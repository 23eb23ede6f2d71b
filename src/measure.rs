//! Cell measurement: how a raw cell value becomes display text, and how that
//! text becomes the length the width allocator fits.

use std::borrow::Cow;

use serde_json::Value;

use crate::LayoutConfig;

/// Text shown for null cells. Measured, not just rendered: an all-null
/// column still gets enough width for the word.
pub const NULL_TEXT: &str = "null";

/// Fallback text for a composite value that cannot be serialized.
pub const UNSERIALIZABLE_TEXT: &str = "<unserializable>";

/// Every cell measures at least this many characters, so very short content
/// still produces a visible column.
pub const MIN_CONTENT_LENGTH: usize = 2;

/// The exact text a renderer shows for a cell value.
///
/// Nulls render as the word "null", booleans as their words, strings as-is,
/// numbers in canonical form, and composite values as canonical JSON. Never
/// fails: a composite that cannot be serialized falls back to
/// [`UNSERIALIZABLE_TEXT`].
pub fn display_text(value: &Value) -> Cow<'_, str> {
    match value {
        Value::Null => Cow::Borrowed(NULL_TEXT),
        Value::Bool(true) => Cow::Borrowed("true"),
        Value::Bool(false) => Cow::Borrowed("false"),
        Value::String(text) => Cow::Borrowed(text.as_str()),
        Value::Number(number) => Cow::Owned(number.to_string()),
        composite => serde_json::to_string(composite)
            .map(Cow::Owned)
            .unwrap_or(Cow::Borrowed(UNSERIALIZABLE_TEXT)),
    }
}

/// Measured length of a cell value: the character count of its display text,
/// floored at [`MIN_CONTENT_LENGTH`].
pub fn estimated_length(value: &Value) -> usize {
    display_text(value).chars().count().max(MIN_CONTENT_LENGTH)
}

/// Measured length of caller-supplied text. Headers take this path.
pub fn estimated_text_length(text: &str) -> usize {
    text.chars().count().max(MIN_CONTENT_LENGTH)
}

/// How many characters fit inside an allocated column width. Renderers use
/// this as the ellipsis threshold for overflowing cells.
pub fn visible_chars(width_px: u32, config: &LayoutConfig) -> usize {
    let chars = (width_px as f64 - config.cell_padding_px) / config.average_char_width_px;
    chars.floor().max(0.0) as usize
}

/// Truncate `text` to `budget_chars` characters, marking the cut with an
/// ellipsis. Text that already fits is returned borrowed and unchanged.
pub fn clipped(text: &str, budget_chars: usize) -> Cow<'_, str> {
    if text.chars().count() <= budget_chars {
        return Cow::Borrowed(text);
    }
    if budget_chars == 0 {
        return Cow::Borrowed("");
    }
    let mut cut: String = text.chars().take(budget_chars - 1).collect();
    cut.push('…');
    Cow::Owned(cut)
}

/// Maximum measured length per column, in the order columns were first seen
/// scanning the sample top-to-bottom, left-to-right. The allocator's
/// first-fit rule depends on this order, so entries are an explicit ordered
/// list rather than an associative container.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ColumnLengths {
    entries: Vec<(usize, usize)>,
}

impl ColumnLengths {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Record a measured length, keeping the running maximum per column. The
    /// first sighting of a column fixes its place in the order.
    pub fn note(&mut self, column: usize, length: usize) {
        match self.entries.iter_mut().find(|(seen, _)| *seen == column) {
            Some((_, max)) => *max = (*max).max(length),
            None => self.entries.push((column, length)),
        }
    }

    pub fn get(&self, column: usize) -> Option<usize> {
        self.entries
            .iter()
            .find(|(seen, _)| *seen == column)
            .map(|(_, length)| *length)
    }

    /// Entries as `(column index, max length)`, in discovery order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.entries.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Reduce a row sample plus its header row to one maximum length per column.
///
/// The header participates as one more row appended to the sample, so a long
/// column name widens its column even when every value is short. Ragged rows
/// are tolerated: a row contributes only to the columns it actually has.
pub fn scan_max_lengths(rows: &[Vec<Value>], headers: &[String]) -> ColumnLengths {
    let mut lengths = ColumnLengths::new();
    for row in rows {
        for (column, value) in row.iter().enumerate() {
            lengths.note(column, estimated_length(value));
        }
    }
    for (column, name) in headers.iter().enumerate() {
        lengths.note(column, estimated_text_length(name));
    }
    lengths
}
