use serde::{Deserialize, Serialize};

/// Measurements for one allocation pass: font metrics plus the pixel budget
/// of the rendering container. Callers derive these from the active font and
/// container size and reuse the value across passes; only the available
/// width changes while the container is resized.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LayoutConfig {
    /// Average glyph advance of the table font, in pixels.
    pub average_char_width_px: f64,
    /// Horizontal padding charged to every column, in pixels.
    pub cell_padding_px: f64,
    /// Pixel budget of the rendering container. May be zero or negative
    /// while the container is collapsed; widths then degrade to zero.
    pub available_width_px: f64,
}

impl Default for LayoutConfig {
    /// Nominal metrics for a ~13px interface font. Real callers should
    /// measure their font and container instead of relying on these.
    fn default() -> Self {
        Self {
            average_char_width_px: 8.0,
            cell_padding_px: 16.0,
            available_width_px: 0.0,
        }
    }
}

impl LayoutConfig {
    pub fn new(average_char_width_px: f64, cell_padding_px: f64, available_width_px: f64) -> Self {
        Self {
            average_char_width_px,
            cell_padding_px,
            available_width_px,
        }
    }

    pub fn with_average_char_width(mut self, px: f64) -> Self {
        self.average_char_width_px = px;
        self
    }

    pub fn with_cell_padding(mut self, px: f64) -> Self {
        self.cell_padding_px = px;
        self
    }

    pub fn with_available_width(mut self, px: f64) -> Self {
        self.available_width_px = px;
        self
    }

    /// Width a column needs to show `max_length` characters untruncated.
    pub fn ideal_width(&self, max_length: usize) -> f64 {
        max_length as f64 * self.average_char_width_px + self.cell_padding_px
    }
}
