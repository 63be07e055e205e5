//! Pairwise distance computation between time series.
//!
//! Pure math library — zero I/O. Heterogeneous rank-1/2/3 inputs
//! normalize into canonical `(channels, length)` series and
//! `(instances, channels, length)` collections; a [`Metric`] is bound
//! once per call into an immutable [`Kernel`]; the pairwise engine
//! fills a dense [`DistanceMatrix`] in parallel, computing only the
//! half-grid and mirroring when both operands are the same collection.
//!
//! ```
//! use seriate::{distance, pairwise_distance, Collection, Metric, TimeSeries};
//!
//! let x = TimeSeries::univariate(vec![1.0, 2.0, 3.0]).unwrap();
//! let y = TimeSeries::univariate(vec![4.0, 5.0, 6.0]).unwrap();
//! let d = distance(&x, &y, Metric::Euclidean).unwrap();
//! assert!((d - 27.0_f64.sqrt()).abs() < 1e-10);
//!
//! let a = Collection::from_univariate(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]).unwrap();
//! let m = pairwise_distance(&a, None, Metric::Euclidean).unwrap();
//! assert_eq!(m.get(0, 0), 0.0);
//! assert_eq!(m.get(0, 1), m.get(1, 0));
//! ```

mod cache;
mod dtw;
mod error;
mod kernel;
mod lockstep;
mod matrix;
mod metric;
mod pairwise;
mod series;

pub use cache::KernelCache;
pub use dtw::Band;
pub use error::{ConfigError, DistanceError, ShapeError};
pub use kernel::Kernel;
pub use matrix::DistanceMatrix;
pub use metric::{Metric, ShapeHint};
pub use pairwise::{distance, pairwise_distance};
pub use series::{Collection, SeriesView, TimeSeries};
