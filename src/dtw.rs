//! Elastic distance kernel: multichannel dynamic time warping.
//!
//! The one shipped metric that tolerates operands of unequal length.
//! Cell cost is the squared Euclidean distance between the multichannel
//! observations at a pair of time steps; the accumulated optimal cost
//! is square-rooted at the end so DTW with a zero-radius band on
//! equal-length series reduces to plain Euclidean distance.

use std::ops::Range;

use crate::series::SeriesView;

/// Constraint on the DTW warping window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Band {
    /// No constraint. The full cost matrix is computed.
    #[default]
    Full,

    /// Sakoe-Chiba band: cell (i, j) is valid only if |i - j| <= radius.
    SakoeChiba(usize),
}

impl Band {
    /// Return the valid column range for a given row of the cost matrix.
    pub(crate) fn column_range(&self, row: usize, n_cols: usize) -> Range<usize> {
        match self {
            Self::Full => 0..n_cols,
            Self::SakoeChiba(r) => {
                let start = row.saturating_sub(*r);
                let end = (row + r + 1).min(n_cols);
                start..end
            }
        }
    }

    /// Return the maximum band width for a matrix with `m` columns.
    pub(crate) fn band_width(&self, m: usize) -> usize {
        match self {
            Self::Full => m,
            Self::SakoeChiba(r) => (2 * r + 1).min(m),
        }
    }
}

/// Squared multichannel cost of aligning step `i` of `a` with step `j` of `b`.
#[inline]
fn cell_cost(a: SeriesView<'_>, b: SeriesView<'_>, i: usize, j: usize) -> f64 {
    let mut cost = 0.0;
    for c in 0..a.channels() {
        let diff = a.channel(c)[i] - b.channel(c)[j];
        cost += diff * diff;
    }
    cost
}

/// Compute the DTW distance between two canonical series.
///
/// Uses a memory-efficient rolling two-row buffer rather than the full
/// cost matrix: O(n * bw) time and O(bw) space, where `bw` is the band
/// width (`m` for [`Band::Full`], `2r+1` for [`Band::SakoeChiba`]).
///
/// Each row buffer has `bw + 2` slots. Index 0 is the left sentinel
/// (INF) and index `bw + 1` is the right sentinel (INF); active columns
/// occupy indices `1..=bw`, so out-of-band predecessor reads naturally
/// see INF.
///
/// Returns `f64::INFINITY` when the band disconnects the corner cells,
/// which can happen for unequal lengths with a radius below `|n - m|`.
pub(crate) fn distance(a: SeriesView<'_>, b: SeriesView<'_>, band: Band) -> f64 {
    let n = a.length();
    let m = b.length();

    let bw = band.band_width(m);
    let buf_width = bw + 2;

    let mut prev = vec![f64::INFINITY; buf_width];
    let mut curr = vec![f64::INFINITY; buf_width];

    let mut prev_start: usize = 0;

    for i in 0..n {
        curr.fill(f64::INFINITY);

        let col_range = band.column_range(i, m);
        let curr_start = col_range.start;

        for j in col_range {
            let cost = cell_cost(a, b, i, j);
            let cj = j - curr_start + 1;

            if i == 0 && j == 0 {
                curr[cj] = cost;
                continue;
            }

            // Left: C[i][j-1]
            let left = if j > curr_start { curr[cj - 1] } else { f64::INFINITY };

            // Above: C[i-1][j]
            let above = if i > 0 {
                let pj = j.wrapping_sub(prev_start) + 1;
                if pj < buf_width { prev[pj] } else { f64::INFINITY }
            } else {
                f64::INFINITY
            };

            // Diagonal: C[i-1][j-1]
            let diag = if i > 0 && j > 0 {
                let pj = (j - 1).wrapping_sub(prev_start) + 1;
                if pj < buf_width { prev[pj] } else { f64::INFINITY }
            } else {
                f64::INFINITY
            };

            curr[cj] = cost + left.min(above).min(diag);
        }

        prev_start = curr_start;
        std::mem::swap(&mut prev, &mut curr);
    }

    // After the final swap, `prev` holds the last completed row.
    // The corner cell may fall outside the band entirely when the
    // radius is below |n - m|.
    let final_range = band.column_range(n - 1, m);
    if !final_range.contains(&(m - 1)) {
        return f64::INFINITY;
    }
    let local = (m - 1) - final_range.start + 1;
    prev[local].sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::series::TimeSeries;

    #[test]
    fn identical_series_distance_zero() {
        let ts = TimeSeries::univariate(vec![1.0, 2.0, 3.0]).unwrap();
        let d = distance(ts.as_view(), ts.as_view(), Band::Full);
        assert!(d.abs() < 1e-10);
    }

    #[test]
    fn hand_computed_2x2() {
        // a=[0,1], b=[1,0]
        // C[0][0] = 1, C[0][1] = 0 + 1 = 1, C[1][0] = 0 + 1 = 1
        // C[1][1] = 1 + min(1, 1, 1) = 2 → sqrt(2)
        let a = TimeSeries::univariate(vec![0.0, 1.0]).unwrap();
        let b = TimeSeries::univariate(vec![1.0, 0.0]).unwrap();
        let d = distance(a.as_view(), b.as_view(), Band::Full);
        assert!((d - 2.0_f64.sqrt()).abs() < 1e-10);
    }

    #[test]
    fn zero_radius_forces_diagonal() {
        // a=[0,0,0], b=[1,1,1]: each diagonal cell costs 1 → sqrt(3)
        let a = TimeSeries::univariate(vec![0.0, 0.0, 0.0]).unwrap();
        let b = TimeSeries::univariate(vec![1.0, 1.0, 1.0]).unwrap();
        let d = distance(a.as_view(), b.as_view(), Band::SakoeChiba(0));
        assert!((d - 3.0_f64.sqrt()).abs() < 1e-10);
    }

    #[test]
    fn banded_geq_unconstrained() {
        let a = TimeSeries::univariate(vec![0.0, 1.0, 0.0, 1.0, 0.0]).unwrap();
        let b = TimeSeries::univariate(vec![1.0, 0.0, 1.0, 0.0, 1.0]).unwrap();
        let full = distance(a.as_view(), b.as_view(), Band::Full);
        let banded = distance(a.as_view(), b.as_view(), Band::SakoeChiba(1));
        assert!(banded >= full - 1e-10);
    }

    #[test]
    fn unequal_lengths_supported() {
        let a = TimeSeries::univariate(vec![1.0, 2.0, 3.0, 4.0]).unwrap();
        let b = TimeSeries::univariate(vec![1.0, 3.0, 4.0]).unwrap();
        let d = distance(a.as_view(), b.as_view(), Band::Full);
        assert!(d.is_finite());
        // Warping absorbs the missing step: only exact matches remain.
        assert!(d.abs() < 1e-10);
    }

    #[test]
    fn symmetric_for_unequal_lengths() {
        let a = TimeSeries::univariate(vec![1.0, 5.0, 2.0, 4.0]).unwrap();
        let b = TimeSeries::univariate(vec![2.0, 3.0]).unwrap();
        let ab = distance(a.as_view(), b.as_view(), Band::Full);
        let ba = distance(b.as_view(), a.as_view(), Band::Full);
        assert!((ab - ba).abs() < 1e-10);
    }

    #[test]
    fn multichannel_cost_sums_channels() {
        // Single step, two channels: cost = 1² + 2² = 5 → sqrt(5)
        let a = TimeSeries::multivariate(vec![vec![0.0], vec![0.0]]).unwrap();
        let b = TimeSeries::multivariate(vec![vec![1.0], vec![2.0]]).unwrap();
        let d = distance(a.as_view(), b.as_view(), Band::Full);
        assert!((d - 5.0_f64.sqrt()).abs() < 1e-10);
    }

    #[test]
    fn disconnected_band_yields_infinity() {
        // Radius 0 with lengths 1 and 3 never reaches the corner cell.
        let a = TimeSeries::univariate(vec![1.0]).unwrap();
        let b = TimeSeries::univariate(vec![1.0, 2.0, 3.0]).unwrap();
        let d = distance(a.as_view(), b.as_view(), Band::SakoeChiba(0));
        assert_eq!(d, f64::INFINITY);
    }

    #[test]
    fn single_element_series() {
        let a = TimeSeries::univariate(vec![5.0]).unwrap();
        let b = TimeSeries::univariate(vec![3.0]).unwrap();
        let d = distance(a.as_view(), b.as_view(), Band::Full);
        assert!((d - 2.0).abs() < 1e-10);
    }

    #[test]
    fn column_range_clamps_to_bounds() {
        let band = Band::SakoeChiba(2);
        assert_eq!(band.column_range(0, 10), 0..3);
        assert_eq!(band.column_range(5, 10), 3..8);
        assert_eq!(band.column_range(9, 10), 7..10);
    }

    #[test]
    fn band_width_caps_at_columns() {
        assert_eq!(Band::Full.band_width(10), 10);
        assert_eq!(Band::SakoeChiba(2).band_width(52), 5);
        assert_eq!(Band::SakoeChiba(20).band_width(5), 5);
    }
}
