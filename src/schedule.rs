//! Recalculation scheduling: when table data or container width changes,
//! decide when scan + allocate actually re-run.
//!
//! Data changes recompute immediately. Resize events only mark a recompute
//! as pending and remember the newest width; the next frame tick performs
//! one recomputation from the latest state, so a burst of resize events
//! costs a single pass. The scheduler owns no table data: callers pass the
//! current snapshot at execution time, which is also what supersedes a stale
//! pending request.

use crate::allocate::ColumnWidths;
use crate::{fit_columns, LayoutConfig, TableSnapshot};

/// Counters for the debug surface. Monotonic; read them, never reset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SchedulerStats {
    /// Resize signals received, including coalesced ones.
    pub num_resize_signals: usize,
    /// Recomputations actually performed for resizes.
    pub num_resize_recomputes: usize,
    /// Recomputations performed for data changes.
    pub num_data_recomputes: usize,
    /// Frame ticks observed, with or without pending work.
    pub num_frames: usize,
}

/// Decides when the width engine re-runs and keeps its latest result.
#[derive(Clone, Debug)]
pub struct FitScheduler {
    config: LayoutConfig,
    resize_pending: bool,
    widths: ColumnWidths,
    pub stats: SchedulerStats,
}

impl FitScheduler {
    pub fn new(config: LayoutConfig) -> Self {
        Self {
            config,
            resize_pending: false,
            widths: ColumnWidths::default(),
            stats: SchedulerStats::default(),
        }
    }

    /// Latest computed width map. Stays valid until the next recomputation
    /// replaces it wholesale.
    pub fn widths(&self) -> &ColumnWidths {
        &self.widths
    }

    /// Configuration the next recomputation will use.
    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Whether a resize recomputation is scheduled for the next frame tick.
    pub fn resize_pending(&self) -> bool {
        self.resize_pending
    }

    /// The table changed (new query results, new dictionary selection):
    /// recompute immediately with the current configuration. A pending
    /// resize is absorbed; its latest width is already in the configuration.
    pub fn data_changed(&mut self, snapshot: &TableSnapshot) -> &ColumnWidths {
        self.resize_pending = false;
        self.widths = fit_columns(snapshot, &self.config);
        self.stats.num_data_recomputes += 1;
        &self.widths
    }

    /// The container was resized. Remembers the newest width and schedules
    /// one recomputation for the next frame tick; bursts collapse into it.
    pub fn viewport_resized(&mut self, available_width_px: f64) {
        self.config.available_width_px = available_width_px;
        self.resize_pending = true;
        self.stats.num_resize_signals += 1;
    }

    /// Font metrics changed: replace the whole configuration and schedule a
    /// recomputation like a resize.
    pub fn reconfigure(&mut self, config: LayoutConfig) {
        self.config = config;
        self.resize_pending = true;
    }

    /// The paint opportunity. Performs the pending recomputation against the
    /// snapshot's current state, or nothing when nothing is pending.
    pub fn frame_tick(&mut self, snapshot: &TableSnapshot) -> Option<&ColumnWidths> {
        self.stats.num_frames += 1;
        if !self.resize_pending {
            return None;
        }
        self.resize_pending = false;
        self.widths = fit_columns(snapshot, &self.config);
        self.stats.num_resize_recomputes += 1;
        Some(&self.widths)
    }
}
