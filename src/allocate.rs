//! Greedy width fitting: every column gets its ideal width while the budget
//! allows, the budget is split evenly when it does not, and unspent space is
//! handed back to all columns under a bounded cap.

use serde::Serialize;

use crate::measure::ColumnLengths;
use crate::LayoutConfig;

/// Share of used width that leftover redistribution may add in aggregate.
const LEFTOVER_BONUS_CAP: f64 = 0.2;

/// Allocated pixel width per column, ordered by column index, plus the total.
///
/// Widths are floor-rounded and never negative. A width of 0 means the
/// budget was degenerate (collapsed container); renderers substitute their
/// minimum renderable width.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ColumnWidths {
    entries: Vec<(usize, u32)>,
    total_width: u32,
}

impl ColumnWidths {
    pub fn get(&self, column: usize) -> Option<u32> {
        self.entries
            .iter()
            .find(|(seen, _)| *seen == column)
            .map(|(_, width)| *width)
    }

    /// Entries as `(column index, width px)`, ordered by column index.
    pub fn iter(&self) -> impl Iterator<Item = (usize, u32)> + '_ {
        self.entries.iter().copied()
    }

    /// Sum of all allocated widths. Not forced to match the available
    /// budget; by construction it is usually less.
    pub fn total_width(&self) -> u32 {
        self.total_width
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Fit columns into the configured pixel budget.
///
/// Repeatedly offers each unplaced column, in discovery order, an even share
/// of the remaining budget. The first column whose ideal width fits its
/// share is placed at that ideal width and the scan restarts, so narrow
/// columns settle first and widen the share left for the rest. When no
/// column fits its share, the remainder is split evenly over everything
/// still unplaced and placement ends. Unspent budget beyond one pixel per
/// column is then handed back equally, capped at 20% of the width already
/// used so sparse tables do not balloon in a large viewport.
pub fn allocate(lengths: &ColumnLengths, config: &LayoutConfig) -> ColumnWidths {
    if lengths.is_empty() {
        return ColumnWidths::default();
    }

    let mut remaining = config.available_width_px;
    let mut unplaced: Vec<(usize, f64)> = lengths
        .iter()
        .map(|(column, max_length)| (column, config.ideal_width(max_length)))
        .collect();
    let mut entries: Vec<(usize, u32)> = Vec::with_capacity(unplaced.len());

    while !unplaced.is_empty() {
        let even_share = (remaining / unplaced.len() as f64).floor();

        if let Some(pos) = unplaced.iter().position(|(_, ideal)| *ideal <= even_share) {
            let (column, ideal) = unplaced.remove(pos);
            entries.push((column, ideal.floor().max(0.0) as u32));
            remaining -= ideal;
            continue;
        }

        // Nothing fits an even split: exhaust the remainder over the columns
        // still unplaced, re-flooring after each removal so rounding
        // remainders reach the later columns instead of being dropped.
        while !unplaced.is_empty() {
            let share = (remaining / unplaced.len() as f64).floor();
            let (column, _) = unplaced.remove(0);
            entries.push((column, share.max(0.0) as u32));
            remaining -= share;
        }
    }

    let columns = entries.len() as f64;
    if remaining > columns {
        let used_width = entries
            .iter()
            .fold(0u32, |sum, (_, width)| sum.saturating_add(*width));
        let add_width = (remaining / columns)
            .min(used_width as f64 * LEFTOVER_BONUS_CAP / columns)
            .floor() as u32;
        for (_, width) in &mut entries {
            *width = width.saturating_add(add_width);
        }
    }

    entries.sort_by_key(|(column, _)| *column);
    let total_width = entries
        .iter()
        .fold(0u32, |sum, (_, width)| sum.saturating_add(*width));

    ColumnWidths {
        entries,
        total_width,
    }
}
