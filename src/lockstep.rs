//! Lockstep distance kernels.
//!
//! Lockstep metrics compare element `i` of one series with element `i`
//! of the other, so operands must have equal `(channels, length)`
//! shape. Channel sums are independent of each other; within a channel
//! the accumulation order is fixed left-to-right so results are
//! bit-identical regardless of how pairs are scheduled.

use crate::series::SeriesView;

/// Euclidean distance: square root of the squared-difference sum over
/// all channels and time steps.
pub(crate) fn euclidean(a: SeriesView<'_>, b: SeriesView<'_>) -> f64 {
    squared_euclidean(a, b).sqrt()
}

/// Squared Euclidean distance. Cheaper than [`euclidean`] and order
/// preserving, useful for nearest-neighbor style consumers.
pub(crate) fn squared_euclidean(a: SeriesView<'_>, b: SeriesView<'_>) -> f64 {
    let mut total = 0.0;
    for c in 0..a.channels() {
        let mut acc = 0.0;
        for (x, y) in a.channel(c).iter().zip(b.channel(c)) {
            let diff = x - y;
            acc += diff * diff;
        }
        total += acc;
    }
    total
}

/// Manhattan distance: absolute-difference sum over all channels and
/// time steps.
pub(crate) fn manhattan(a: SeriesView<'_>, b: SeriesView<'_>) -> f64 {
    let mut total = 0.0;
    for c in 0..a.channels() {
        let mut acc = 0.0;
        for (x, y) in a.channel(c).iter().zip(b.channel(c)) {
            acc += (x - y).abs();
        }
        total += acc;
    }
    total
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::series::TimeSeries;

    #[test]
    fn euclidean_hand_computed() {
        // (4-1)² + (5-2)² + (6-3)² = 27 → sqrt(27)
        let a = TimeSeries::univariate(vec![1.0, 2.0, 3.0]).unwrap();
        let b = TimeSeries::univariate(vec![4.0, 5.0, 6.0]).unwrap();
        let d = euclidean(a.as_view(), b.as_view());
        assert!((d - 27.0_f64.sqrt()).abs() < 1e-10);
    }

    #[test]
    fn euclidean_self_distance_zero() {
        let a = TimeSeries::univariate(vec![1.5, -2.0, 3.25]).unwrap();
        assert_eq!(euclidean(a.as_view(), a.as_view()), 0.0);
    }

    #[test]
    fn euclidean_symmetric() {
        let a = TimeSeries::univariate(vec![1.0, 5.0, 2.0]).unwrap();
        let b = TimeSeries::univariate(vec![3.0, 0.0, 4.0]).unwrap();
        assert_eq!(
            euclidean(a.as_view(), b.as_view()),
            euclidean(b.as_view(), a.as_view())
        );
    }

    #[test]
    fn euclidean_multichannel_sums_over_channels() {
        // Channel 0: (1-0)² = 1, channel 1: (0-2)² = 4 → sqrt(5)
        let a = TimeSeries::multivariate(vec![vec![1.0], vec![0.0]]).unwrap();
        let b = TimeSeries::multivariate(vec![vec![0.0], vec![2.0]]).unwrap();
        let d = euclidean(a.as_view(), b.as_view());
        assert!((d - 5.0_f64.sqrt()).abs() < 1e-10);
    }

    #[test]
    fn squared_euclidean_hand_computed() {
        let a = TimeSeries::univariate(vec![1.0, 2.0, 3.0]).unwrap();
        let b = TimeSeries::univariate(vec![4.0, 5.0, 6.0]).unwrap();
        assert!((squared_euclidean(a.as_view(), b.as_view()) - 27.0).abs() < 1e-10);
    }

    #[test]
    fn manhattan_hand_computed() {
        // |4-1| + |5-2| + |6-3| = 9
        let a = TimeSeries::univariate(vec![1.0, 2.0, 3.0]).unwrap();
        let b = TimeSeries::univariate(vec![4.0, 5.0, 6.0]).unwrap();
        assert!((manhattan(a.as_view(), b.as_view()) - 9.0).abs() < 1e-10);
    }

    #[test]
    fn manhattan_sign_insensitive() {
        let a = TimeSeries::univariate(vec![0.0, 0.0]).unwrap();
        let b = TimeSeries::univariate(vec![3.0, -3.0]).unwrap();
        assert!((manhattan(a.as_view(), b.as_view()) - 6.0).abs() < 1e-10);
    }

    #[test]
    fn nan_propagates() {
        let a = TimeSeries::univariate(vec![1.0, f64::NAN]).unwrap();
        let b = TimeSeries::univariate(vec![1.0, 2.0]).unwrap();
        assert!(euclidean(a.as_view(), b.as_view()).is_nan());
        assert!(manhattan(a.as_view(), b.as_view()).is_nan());
    }

    #[test]
    fn infinity_propagates() {
        let a = TimeSeries::univariate(vec![f64::INFINITY, 0.0]).unwrap();
        let b = TimeSeries::univariate(vec![0.0, 0.0]).unwrap();
        assert_eq!(euclidean(a.as_view(), b.as_view()), f64::INFINITY);
    }
}
