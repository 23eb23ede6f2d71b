//! Adaptive column widths for tabular data views.
//!
//! Measures a bounded sample of rows (plus the header row), fits each column
//! into an available pixel budget with a first-fit even-share pass, and
//! hands unused space back under a bounded cap. Deterministic and cheap, so
//! it can run on every data refresh and every container resize; the
//! [`FitScheduler`] coalesces resize bursts into one recomputation per
//! frame.
//!
//! ```
//! use colfit::{fit_columns, LayoutConfig, TableSnapshot};
//! use serde_json::json;
//!
//! let snapshot = TableSnapshot::new(
//!     vec!["name".into(), "qty".into()],
//!     vec![
//!         vec![json!("ab"), json!(1)],
//!         vec![json!("abcdef"), json!(22)],
//!     ],
//! );
//! let config = LayoutConfig::new(6.5, 10.0, 300.0);
//!
//! let widths = fit_columns(&snapshot, &config);
//! assert_eq!(widths.get(0), Some(56));
//! assert_eq!(widths.get(1), Some(36));
//! assert_eq!(widths.total_width(), 92);
//! ```

pub mod allocate;
pub mod config;
pub mod measure;
pub mod schedule;
pub mod snapshot;

pub use allocate::{allocate, ColumnWidths};
pub use config::LayoutConfig;
pub use measure::{
    clipped, display_text, estimated_length, estimated_text_length, scan_max_lengths,
    visible_chars, ColumnLengths, MIN_CONTENT_LENGTH, NULL_TEXT, UNSERIALIZABLE_TEXT,
};
pub use schedule::{FitScheduler, SchedulerStats};
pub use snapshot::TableSnapshot;

/// One full measurement pass: scan the snapshot's sample (header row
/// included) and fit the resulting column lengths into the configured
/// budget.
pub fn fit_columns(snapshot: &TableSnapshot, config: &LayoutConfig) -> ColumnWidths {
    let lengths = scan_max_lengths(&snapshot.rows, &snapshot.headers);
    allocate(&lengths, config)
}
