//! Bound distance kernels.

use crate::dtw;
use crate::lockstep;
use crate::metric::Metric;
use crate::series::SeriesView;

/// An immutable, parameter-bound distance kernel.
///
/// Produced once per pairwise call by [`Metric::bind`], then invoked
/// for every index pair. Owns no mutable state, so it is shared
/// read-only across rayon tasks without synchronization. Binding
/// amortizes parameter validation and dispatch over the O(n²) pair
/// evaluations of a fill.
#[derive(Debug, Clone, Copy)]
pub struct Kernel {
    metric: Metric,
    symmetric: bool,
}

impl Kernel {
    pub(crate) fn new(metric: Metric, symmetric: bool) -> Self {
        Self { metric, symmetric }
    }

    /// Return the metric this kernel was bound from.
    #[must_use]
    pub fn metric(&self) -> Metric {
        self.metric
    }

    /// Return true if the binding was created for a symmetric fill.
    #[must_use]
    pub fn is_symmetric(&self) -> bool {
        self.symmetric
    }

    /// Evaluate the bound metric on two canonical series views.
    ///
    /// Operands are assumed compatible; the engine checks channel and
    /// length agreement before any evaluation. Pure and reentrant:
    /// repeated calls on the same inputs return bit-identical results.
    #[must_use]
    pub fn evaluate(&self, a: SeriesView<'_>, b: SeriesView<'_>) -> f64 {
        match self.metric {
            Metric::Euclidean => lockstep::euclidean(a, b),
            Metric::SquaredEuclidean => lockstep::squared_euclidean(a, b),
            Metric::Manhattan => lockstep::manhattan(a, b),
            Metric::Dtw { band } => dtw::distance(a, b, band),
        }
    }
}
