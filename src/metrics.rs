//! Column geometry snapshots.
//!
//! Column positions are computed once when the snapshot is built (cumulative
//! sum of widths), enabling O(log n) positional lookup over the monotonic
//! left offsets. The snapshot is a read-only input to the range resolvers;
//! the owning grid component rebuilds it when columns change.

use serde::{Deserialize, Serialize};

use crate::error::{MetricsError, Result};

/// Tolerance when checking that a left offset continues from the previous
/// column's trailing edge.
const EDGE_EPSILON: f64 = 1e-6;

/// A single column's geometry, in render order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Column {
    /// Position in render order, left to right.
    pub index: usize,
    /// Width in pixels.
    pub width: f64,
    /// Absolute pixel offset from the start of the column sequence; equals
    /// the cumulative sum of preceding widths.
    pub left: f64,
    /// Pinned to the viewport's leading edge regardless of horizontal scroll.
    /// Frozen columns must form a contiguous prefix.
    #[serde(default)]
    pub frozen: bool,
}

impl Column {
    /// Pixel offset of the column's trailing edge.
    pub fn right(&self) -> f64 {
        self.left + self.width
    }
}

/// Ordered column geometry plus the viewport measurements the horizontal
/// resolver needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnMetrics {
    /// Columns in render order.
    pub columns: Vec<Column>,
    /// Visible pixel width available for rendering.
    pub viewport_width: f64,
    /// Sum of all column widths; used by callers for scroll-range bounds.
    pub total_column_width: f64,
    /// Index of the last frozen column, or `None` when no columns are frozen.
    pub last_frozen_column_index: Option<usize>,
}

impl ColumnMetrics {
    /// Build a snapshot from raw column widths.
    ///
    /// Left offsets, the total width, and the frozen-prefix index are
    /// computed here; the first `frozen_count` columns are marked frozen.
    /// Negative widths are clamped to zero.
    pub fn new(widths: &[f64], frozen_count: usize, viewport_width: f64) -> Self {
        let mut columns = Vec::with_capacity(widths.len());
        let mut left = 0.0;
        for (index, &width) in widths.iter().enumerate() {
            let width = width.max(0.0);
            columns.push(Column {
                index,
                width,
                left,
                frozen: index < frozen_count,
            });
            left += width;
        }
        Self {
            columns,
            viewport_width,
            total_column_width: left,
            last_frozen_column_index: frozen_count.min(widths.len()).checked_sub(1),
        }
    }

    /// Build a snapshot from externally constructed columns, validating the
    /// geometry invariants and deriving the total width and frozen-prefix
    /// index from the columns themselves.
    ///
    /// # Errors
    /// Returns a [`MetricsError`] if the columns violate the snapshot
    /// contract (see [`ColumnMetrics::validate`]).
    pub fn from_columns(columns: Vec<Column>, viewport_width: f64) -> Result<Self> {
        let total_column_width = columns.last().map_or(0.0, Column::right);
        let last_frozen_column_index = columns
            .iter()
            .take_while(|c| c.frozen)
            .count()
            .checked_sub(1);
        let metrics = Self {
            columns,
            viewport_width,
            total_column_width,
            last_frozen_column_index,
        };
        metrics.validate()?;
        Ok(metrics)
    }

    /// Check the geometry invariants the resolvers rely on: indexes match
    /// positions, widths are non-negative, left offsets are the cumulative
    /// sum of preceding widths, and frozen columns form a contiguous prefix.
    ///
    /// # Errors
    /// Returns the first violation found, in render order.
    pub fn validate(&self) -> Result<()> {
        let mut expected = 0.0;
        let mut prefix_ended = false;
        for (position, col) in self.columns.iter().enumerate() {
            if col.index != position {
                return Err(MetricsError::IndexMismatch {
                    position,
                    index: col.index,
                });
            }
            if col.width < 0.0 {
                return Err(MetricsError::NegativeWidth {
                    index: position,
                    width: col.width,
                });
            }
            if (col.left - expected).abs() > EDGE_EPSILON {
                return Err(MetricsError::NonContiguousLeft {
                    index: position,
                    left: col.left,
                    expected,
                });
            }
            if col.frozen {
                if prefix_ended {
                    return Err(MetricsError::FrozenAfterUnfrozen { index: position });
                }
            } else {
                prefix_ended = true;
            }
            expected = col.right();
        }
        Ok(())
    }

    /// Number of columns in the snapshot.
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Index of the last column, or `None` when the snapshot is empty.
    pub fn last_column_index(&self) -> Option<usize> {
        self.columns.len().checked_sub(1)
    }

    /// Total pixel width of the frozen prefix (0 if no frozen columns).
    pub fn frozen_width(&self) -> f64 {
        match self.last_frozen_column_index {
            Some(i) => self.columns.get(i).map_or(0.0, Column::right),
            None => 0.0,
        }
    }

    /// Find the column containing pixel offset `x` (binary search).
    ///
    /// Returns `None` if `x` is negative or past the last column's trailing
    /// edge. An `x` exactly on a boundary belongs to the column starting
    /// there.
    pub fn column_at(&self, x: f64) -> Option<usize> {
        if x < 0.0 {
            return None;
        }
        let idx = self.columns.partition_point(|c| c.right() <= x);
        if idx < self.columns.len() {
            Some(idx)
        } else {
            None
        }
    }
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

    #[test]
    fn new_computes_cumulative_lefts() {
        let metrics = ColumnMetrics::new(&[100.0, 250.0, 50.0], 0, 1000.0);
        assert_eq!(metrics.columns[0].left, 0.0);
        assert_eq!(metrics.columns[1].left, 100.0);
        assert_eq!(metrics.columns[2].left, 350.0);
        assert_eq!(metrics.total_column_width, 400.0);
        assert_eq!(metrics.last_frozen_column_index, None);
    }

    #[test]
    fn new_marks_frozen_prefix() {
        let metrics = ColumnMetrics::new(&[100.0; 5], 2, 1000.0);
        assert!(metrics.columns[0].frozen);
        assert!(metrics.columns[1].frozen);
        assert!(!metrics.columns[2].frozen);
        assert_eq!(metrics.last_frozen_column_index, Some(1));
        assert_eq!(metrics.frozen_width(), 200.0);
    }

    #[test]
    fn new_clamps_frozen_count_to_column_count() {
        let metrics = ColumnMetrics::new(&[100.0; 3], 10, 1000.0);
        assert_eq!(metrics.last_frozen_column_index, Some(2));
        assert_eq!(metrics.frozen_width(), 300.0);
    }

    #[test]
    fn new_with_no_columns() {
        let metrics = ColumnMetrics::new(&[], 0, 1000.0);
        assert_eq!(metrics.column_count(), 0);
        assert_eq!(metrics.last_column_index(), None);
        assert_eq!(metrics.total_column_width, 0.0);
        assert_eq!(metrics.frozen_width(), 0.0);
    }

    #[test]
    fn column_at_boundaries() {
        let metrics = ColumnMetrics::new(&[100.0; 10], 0, 1000.0);
        assert_eq!(metrics.column_at(0.0), Some(0));
        assert_eq!(metrics.column_at(32.0), Some(0));
        assert_eq!(metrics.column_at(100.0), Some(1));
        assert_eq!(metrics.column_at(250.0), Some(2));
        assert_eq!(metrics.column_at(999.9), Some(9));
        assert_eq!(metrics.column_at(1000.0), None);
        assert_eq!(metrics.column_at(-1.0), None);
    }

    #[test]
    fn from_columns_derives_totals() {
        let columns = vec![
            Column {
                index: 0,
                width: 100.0,
                left: 0.0,
                frozen: true,
            },
            Column {
                index: 1,
                width: 200.0,
                left: 100.0,
                frozen: false,
            },
        ];
        let metrics = ColumnMetrics::from_columns(columns, 500.0).unwrap();
        assert_eq!(metrics.total_column_width, 300.0);
        assert_eq!(metrics.last_frozen_column_index, Some(0));
    }

    #[test]
    fn validate_rejects_gap_in_lefts() {
        let columns = vec![
            Column {
                index: 0,
                width: 100.0,
                left: 0.0,
                frozen: false,
            },
            Column {
                index: 1,
                width: 100.0,
                left: 150.0,
                frozen: false,
            },
        ];
        let err = ColumnMetrics::from_columns(columns, 500.0).unwrap_err();
        assert!(matches!(err, MetricsError::NonContiguousLeft { index: 1, .. }));
    }

    #[test]
    fn validate_rejects_frozen_after_unfrozen() {
        let columns = vec![
            Column {
                index: 0,
                width: 100.0,
                left: 0.0,
                frozen: false,
            },
            Column {
                index: 1,
                width: 100.0,
                left: 100.0,
                frozen: true,
            },
        ];
        let err = ColumnMetrics::from_columns(columns, 500.0).unwrap_err();
        assert!(matches!(err, MetricsError::FrozenAfterUnfrozen { index: 1 }));
    }

    #[test]
    fn validate_rejects_index_mismatch() {
        let columns = vec![Column {
            index: 3,
            width: 100.0,
            left: 0.0,
            frozen: false,
        }];
        let err = ColumnMetrics::from_columns(columns, 500.0).unwrap_err();
        assert!(matches!(
            err,
            MetricsError::IndexMismatch {
                position: 0,
                index: 3
            }
        ));
    }
}
