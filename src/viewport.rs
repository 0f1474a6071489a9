//! Range resolvers: which row and column indices must be rendered for the
//! current scroll position.
//!
//! Both resolvers are pure functions called on every scroll/resize tick:
//! - [`rows_to_render`] works in scalar index math since rows are uniform
//!   height, and aligns its boundaries to whole render batches so the window
//!   is stable under rapid scrolling.
//! - [`cols_to_render`] binary-searches the monotonic column edge offsets,
//!   honoring the frozen (pinned) column prefix.
//!
//! Degenerate inputs clamp to the nearest valid range instead of failing;
//! a stalled render is worse than a conservative one.

use crate::metrics::ColumnMetrics;
use crate::range::IndexRange;

/// Rows padded on both sides of the visible band before the boundaries are
/// aligned to the render batch size.
const OVERSCAN_ROWS: i64 = 4;

/// Resolve the inclusive row index range to render for a vertical scroll
/// position.
///
/// The visible band `[scroll_top, scroll_top + height]` is mapped to row
/// indices by division, padded by [`OVERSCAN_ROWS`], and then aligned outward
/// to multiples of `render_batch_size`: the start rounds down and the end
/// rounds up, so the rendered window only moves in whole-batch steps as the
/// user scrolls. Returns `None` when `rows_count` is zero.
///
/// Negative `scroll_top`/`height` clamp to zero and a zero `render_batch_size`
/// is treated as 1. A non-positive `row_height` means every row fits in any
/// viewport, so the full range is returned.
#[allow(clippy::cast_possible_truncation)]
pub fn rows_to_render(
    height: f64,
    row_height: f64,
    scroll_top: f64,
    rows_count: usize,
    render_batch_size: usize,
) -> Option<IndexRange> {
    let last = rows_count.checked_sub(1)?;
    if row_height <= 0.0 {
        return Some(IndexRange::new(0, last));
    }
    let last_i = i64::try_from(last).unwrap_or(i64::MAX);
    let batch = i64::try_from(render_batch_size.max(1)).unwrap_or(1);
    let height = height.max(0.0);
    let scroll_top = scroll_top.max(0.0);

    let visible_start = ((scroll_top / row_height).floor() as i64).min(last_i);
    let visible_end = (((scroll_top + height) / row_height).floor() as i64).min(last_i);

    // Ceiling division written out by hand; both operands are non-negative.
    let start = ((visible_start - OVERSCAN_ROWS).div_euclid(batch) * batch).max(0);
    let end = ((visible_end + OVERSCAN_ROWS + batch - 1).div_euclid(batch) * batch).min(last_i);

    Some(IndexRange::new(
        usize::try_from(start).unwrap_or(0),
        usize::try_from(end).unwrap_or(last),
    ))
}

/// Resolve the inclusive column index range to render for a horizontal
/// scroll position.
///
/// The returned range covers the scrollable region only and always begins
/// after the frozen prefix; frozen columns are pinned and rendered
/// unconditionally by the caller, so the viewport available to scrollable
/// columns starts past the frozen width. Start and end are located by binary
/// search over the monotonic column trailing edges, O(log n) in the column
/// count. No batch overscan is applied on this axis.
///
/// Returns `None` when the column set is empty. When there are no scrollable
/// columns to place — every column is frozen, the frozen prefix covers the
/// whole viewport, or a degenerate `viewport_width <= 0` — the frozen prefix
/// range is returned if one exists, else `None`.
pub fn cols_to_render(metrics: &ColumnMetrics, scroll_left: f64) -> Option<IndexRange> {
    let last = metrics.last_column_index()?;
    let scroll_left = scroll_left.max(0.0);

    let viewport_left = scroll_left + metrics.frozen_width();
    let viewport_right = scroll_left + metrics.viewport_width;

    if viewport_left >= viewport_right {
        return metrics
            .last_frozen_column_index
            .map(|i| IndexRange::new(0, i.min(last)));
    }

    let first_unfrozen = match metrics.last_frozen_column_index {
        // Every column is frozen: the pinned prefix is the whole range.
        Some(i) if i >= last => return Some(IndexRange::new(0, last)),
        Some(i) => i + 1,
        None => 0,
    };

    // First scrollable column whose trailing edge reaches the viewport, then
    // the column straddling the viewport's right edge.
    let tail = metrics.columns.get(first_unfrozen..).unwrap_or(&[]);
    let start = (first_unfrozen + tail.partition_point(|c| c.right() < viewport_left)).min(last);
    let rest = metrics.columns.get(start..).unwrap_or(&[]);
    let end = (start + rest.partition_point(|c| c.right() <= viewport_right)).min(last);

    Some(IndexRange::new(start, end))
}

/// Greatest meaningful `scroll_top` for the given row geometry: the offset at
/// which the last row's bottom edge lines up with the viewport's bottom.
#[allow(clippy::cast_precision_loss)]
pub fn max_scroll_top(height: f64, row_height: f64, rows_count: usize) -> f64 {
    let total = row_height.max(0.0) * rows_count as f64;
    (total - height.max(0.0)).max(0.0)
}

/// Greatest meaningful `scroll_left` for the given column geometry.
pub fn max_scroll_left(metrics: &ColumnMetrics) -> f64 {
    (metrics.total_column_width - metrics.viewport_width.max(0.0)).max(0.0)
}

/// Clamp a proposed vertical scroll offset into the valid range.
pub fn clamp_scroll_top(scroll_top: f64, height: f64, row_height: f64, rows_count: usize) -> f64 {
    scroll_top.clamp(0.0, max_scroll_top(height, row_height, rows_count))
}

/// Clamp a proposed horizontal scroll offset into the valid range.
pub fn clamp_scroll_left(metrics: &ColumnMetrics, scroll_left: f64) -> f64 {
    scroll_left.clamp(0.0, max_scroll_left(metrics))
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(500.0, 50.0, 200.0, 1000, 8 => (0, 24); "row height drives the range")]
    #[test_case(250.0, 50.0, 200.0, 1000, 8 => (0, 16); "height drives the range")]
    #[test_case(500.0, 50.0, 500.0, 1000, 8 => (0, 24); "scroll top drives the range")]
    #[test_case(500.0, 50.0, 0.0, 5, 8 => (0, 4); "rows count caps the range")]
    #[test_case(500.0, 50.0, 0.0, 1000, 4 => (0, 16); "small batch at the top")]
    #[test_case(500.0, 50.0, 49500.0, 1000, 4 => (984, 999); "small batch at max scroll")]
    #[test_case(500.0, 50.0, 2350.0, 1000, 4 => (40, 64); "small batch mid scroll")]
    #[test_case(500.0, 50.0, 2350.0, 1000, 12 => (36, 72); "large batch mid scroll")]
    #[test_case(500.0, 50.0, 2550.0, 1000, 12 => (36, 72); "window holds within a batch")]
    #[test_case(500.0, 50.0, 2850.0, 1000, 12 => (48, 72); "start advances one batch")]
    #[test_case(500.0, 50.0, 2950.0, 1000, 12 => (48, 84); "end advances one batch")]
    #[test_case(200.0, 50.0, 2950.0, 1000, 12 => (48, 72); "short viewport trims the end")]
    #[test_case(800.0, 50.0, 2950.0, 1000, 12 => (48, 84); "tall viewport extends the end")]
    fn vertical_vectors(
        height: f64,
        row_height: f64,
        scroll_top: f64,
        rows_count: usize,
        batch: usize,
    ) -> (usize, usize) {
        let range = rows_to_render(height, row_height, scroll_top, rows_count, batch).unwrap();
        (range.start, range.end)
    }

    #[test]
    fn vertical_empty_rows() {
        assert_eq!(rows_to_render(500.0, 50.0, 0.0, 0, 8), None);
    }

    #[test]
    fn vertical_clamps_degenerate_inputs() {
        // Negative scroll behaves like scroll 0
        assert_eq!(
            rows_to_render(500.0, 50.0, -100.0, 1000, 8),
            rows_to_render(500.0, 50.0, 0.0, 1000, 8)
        );
        // Scroll far past the end stays in bounds
        let range = rows_to_render(500.0, 50.0, 1e12, 1000, 8).unwrap();
        assert!(range.end <= 999);
        assert!(range.start <= range.end);
        // Batch size 0 is treated as 1
        let range = rows_to_render(500.0, 50.0, 200.0, 1000, 0).unwrap();
        assert_eq!((range.start, range.end), (0, 18));
    }

    #[test]
    fn vertical_zero_row_height_renders_everything() {
        let range = rows_to_render(500.0, 0.0, 200.0, 10, 8).unwrap();
        assert_eq!((range.start, range.end), (0, 9));
    }

    fn uniform_metrics(frozen_count: usize, viewport_width: f64) -> ColumnMetrics {
        ColumnMetrics::new(&vec![100.0; 500], frozen_count, viewport_width)
    }

    #[test]
    fn horizontal_uses_scroll_left() {
        let range = cols_to_render(&uniform_metrics(0, 1000.0), 300.0).unwrap();
        assert_eq!((range.start, range.end), (2, 13));
    }

    #[test]
    fn horizontal_accounts_for_large_columns() {
        let mut widths = vec![100.0; 500];
        widths[0] = 500.0;
        let metrics = ColumnMetrics::new(&widths, 0, 1000.0);
        let range = cols_to_render(&metrics, 400.0).unwrap();
        assert_eq!((range.start, range.end), (0, 10));
    }

    #[test]
    fn horizontal_uses_viewport_width() {
        let range = cols_to_render(&uniform_metrics(0, 500.0), 200.0).unwrap();
        assert_eq!((range.start, range.end), (1, 7));
    }

    #[test]
    fn horizontal_skips_past_frozen_prefix() {
        let range = cols_to_render(&uniform_metrics(3, 1000.0), 500.0).unwrap();
        assert_eq!((range.start, range.end), (7, 15));
    }

    #[test]
    fn horizontal_empty_columns() {
        let metrics = ColumnMetrics::new(&[], 0, 1000.0);
        assert_eq!(cols_to_render(&metrics, 0.0), None);
    }

    #[test]
    fn horizontal_degenerate_viewport_width() {
        // No frozen columns: nothing to render
        assert_eq!(cols_to_render(&uniform_metrics(0, 0.0), 200.0), None);
        // Frozen columns remain pinned even with no scrollable viewport
        let range = cols_to_render(&uniform_metrics(3, 0.0), 200.0).unwrap();
        assert_eq!((range.start, range.end), (0, 2));
    }

    #[test]
    fn vertical_end_aligns_up_to_the_next_batch_multiple() {
        // Visible band ends at row 2; the padded end (row 6) rounds up to 8.
        let range = rows_to_render(100.0, 50.0, 0.0, 1000, 4).unwrap();
        assert_eq!((range.start, range.end), (0, 8));
        // A padded end past 8 (visible band ending at row 5) rounds up to 12.
        let range = rows_to_render(250.0, 50.0, 0.0, 1000, 4).unwrap();
        assert_eq!((range.start, range.end), (0, 12));
    }

    #[test]
    fn horizontal_all_columns_frozen() {
        // The pinned prefix is the whole range, at any scroll offset
        let metrics = ColumnMetrics::new(&[100.0; 3], 3, 1000.0);
        let range = cols_to_render(&metrics, 0.0).unwrap();
        assert_eq!((range.start, range.end), (0, 2));
        let range = cols_to_render(&metrics, 500.0).unwrap();
        assert_eq!((range.start, range.end), (0, 2));
    }

    #[test]
    fn horizontal_frozen_prefix_wider_than_viewport() {
        // 5 frozen columns cover the whole 400px viewport
        let range = cols_to_render(&uniform_metrics(5, 400.0), 1000.0).unwrap();
        assert_eq!((range.start, range.end), (0, 4));
    }

    #[test]
    fn horizontal_scroll_past_end_clamps_to_last_column() {
        let range = cols_to_render(&uniform_metrics(0, 1000.0), 1e9).unwrap();
        assert_eq!(range.end, 499);
        assert!(range.start <= range.end);
    }

    #[test]
    fn scroll_bounds() {
        assert_eq!(max_scroll_top(500.0, 50.0, 1000), 49500.0);
        assert_eq!(max_scroll_top(500.0, 50.0, 5), 0.0);
        assert_eq!(clamp_scroll_top(1e9, 500.0, 50.0, 1000), 49500.0);
        assert_eq!(clamp_scroll_top(-5.0, 500.0, 50.0, 1000), 0.0);

        let metrics = uniform_metrics(0, 1000.0);
        assert_eq!(max_scroll_left(&metrics), 49000.0);
        assert_eq!(clamp_scroll_left(&metrics, 1e9), 49000.0);
        assert_eq!(clamp_scroll_left(&metrics, -5.0), 0.0);
    }
}
