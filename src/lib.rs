//! gridviewport - viewport windowing for virtualized data grids
//!
//! Given a scroll position and the geometry of rows and columns, computes the
//! minimal contiguous index range a grid must materialize to cover the visible
//! viewport plus a stability margin:
//! - Rows are uniform height, so the vertical range is scalar index math with
//!   a batch-aligned overscan margin that keeps the rendered window stable
//!   under rapid scrolling.
//! - Columns have variable widths and an optional frozen (pinned) prefix, so
//!   the horizontal range is found by binary search over the monotonic column
//!   edge offsets.
//!
//! Both resolvers are pure and stateless; the owning grid component calls them
//! on every scroll/resize tick and renders only the indices they return. The
//! crate performs no I/O and holds nothing between calls.
//!
//! # Usage
//!
//! ```
//! use gridviewport::{cols_to_render, rows_to_render, ColumnMetrics};
//!
//! let rows = rows_to_render(500.0, 50.0, 200.0, 1000, 8);
//! assert_eq!(rows.map(|r| (r.start, r.end)), Some((0, 24)));
//!
//! let metrics = ColumnMetrics::new(&vec![100.0; 500], 0, 1000.0);
//! let cols = cols_to_render(&metrics, 300.0);
//! assert_eq!(cols.map(|r| (r.start, r.end)), Some((2, 13)));
//! ```

pub mod error;
pub mod metrics;
pub mod range;
pub mod viewport;

pub use error::{MetricsError, Result};
pub use metrics::{Column, ColumnMetrics};
pub use range::IndexRange;
pub use viewport::{
    clamp_scroll_left, clamp_scroll_top, cols_to_render, max_scroll_left, max_scroll_top,
    rows_to_render,
};
