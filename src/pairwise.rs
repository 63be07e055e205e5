//! Pairwise distance engine.
//!
//! Normalized collections in, dense [`DistanceMatrix`] out. The metric
//! is bound exactly once per call; the independent cell evaluations are
//! scheduled on rayon. When both operands are the same collection only
//! the strict lower triangle is evaluated and mirrored, and the
//! diagonal is set to exact zero without invoking the kernel.

use rayon::prelude::*;
use tracing::{debug, instrument};

use crate::error::{DistanceError, ShapeError};
use crate::matrix::DistanceMatrix;
use crate::metric::{Metric, ShapeHint};
use crate::series::{Collection, SeriesView, TimeSeries};

/// Compute the distance between two time series under `metric`.
///
/// Binds the metric once, validating its parameters against the shape
/// of `x`, then evaluates the kernel a single time.
///
/// # Errors
///
/// | Variant | Condition |
/// |---|---|
/// | [`DistanceError::Shape`] | Operand channel counts differ, or lengths differ for a lockstep metric |
/// | [`DistanceError::Config`] | Metric parameters invalid for the operand shape |
#[instrument(skip(x, y))]
pub fn distance(x: &TimeSeries, y: &TimeSeries, metric: Metric) -> Result<f64, DistanceError> {
    check_operands(
        x.channels(),
        x.length(),
        y.channels(),
        y.length(),
        metric,
    )?;
    let hint = ShapeHint::new(x.channels(), x.length());
    let kernel = metric.bind(Some(hint), false)?;
    Ok(kernel.evaluate(x.as_view(), y.as_view()))
}

/// Compute the pairwise distance matrix between two collections.
///
/// When `b` is `None` the second operand is `a` itself and the fill is
/// symmetric: the diagonal is exact zero, only the strict lower
/// triangle is evaluated (halving kernel invocations), and each
/// computed value is mirrored across the diagonal. Otherwise every
/// `(i, j)` cell is evaluated independently with no mirroring.
///
/// Cell evaluations run in parallel; each cell has exactly one writer,
/// so the result is deterministic regardless of scheduling. On error no
/// matrix is allocated — callers never observe partial output.
///
/// # Errors
///
/// | Variant | Condition |
/// |---|---|
/// | [`DistanceError::Shape`] | Collection channel counts differ, or lengths differ for a lockstep metric |
/// | [`DistanceError::Config`] | Metric parameters invalid for the collection shape |
#[instrument(skip(a, b), fields(rows = a.len(), cols = b.map_or(a.len(), Collection::len)))]
pub fn pairwise_distance(
    a: &Collection,
    b: Option<&Collection>,
    metric: Metric,
) -> Result<DistanceMatrix, DistanceError> {
    match b {
        None => symmetric_fill(a, metric),
        Some(b) => {
            check_operands(a.channels(), a.length(), b.channels(), b.length(), metric)?;
            full_fill(a, b, metric)
        }
    }
}

/// Validate operand compatibility before any numeric work.
fn check_operands(
    channels_a: usize,
    length_a: usize,
    channels_b: usize,
    length_b: usize,
    metric: Metric,
) -> Result<(), ShapeError> {
    if channels_a != channels_b {
        return Err(ShapeError::ChannelMismatch { left: channels_a, right: channels_b });
    }
    if length_a != length_b && !metric.tolerates_unequal_lengths() {
        return Err(ShapeError::LengthMismatch { left: length_a, right: length_b });
    }
    Ok(())
}

/// Map a flat pair index back to `(i, j)` with `i > j`.
///
/// `flat = i*(i-1)/2 + j`, inverted via `i = floor((1 + sqrt(1 + 8*flat)) / 2)`.
fn triangle_index(flat: usize) -> (usize, usize) {
    let i = ((1.0 + (1.0 + 8.0 * flat as f64).sqrt()) / 2.0).floor() as usize;
    let j = flat - i * (i - 1) / 2;
    (i, j)
}

fn symmetric_fill(a: &Collection, metric: Metric) -> Result<DistanceMatrix, DistanceError> {
    let n = a.len();
    let hint = ShapeHint::new(a.channels(), a.length());
    let kernel = metric.bind(Some(hint), true)?;

    let views: Vec<SeriesView<'_>> = a.iter().collect();
    let total_pairs = n * (n - 1) / 2;
    debug!(pairs = total_pairs, "filling symmetric half-grid");

    let triangle: Vec<f64> = (0..total_pairs)
        .into_par_iter()
        .map(|flat| {
            let (i, j) = triangle_index(flat);
            kernel.evaluate(views[i], views[j])
        })
        .collect();

    // Scatter with mirroring; diagonal cells keep the exact zero from
    // the buffer initialization and never touch the kernel.
    let mut data = vec![0.0; n * n];
    for (flat, &d) in triangle.iter().enumerate() {
        let (i, j) = triangle_index(flat);
        data[i * n + j] = d;
        data[j * n + i] = d;
    }

    Ok(DistanceMatrix::from_raw(n, n, data))
}

fn full_fill(a: &Collection, b: &Collection, metric: Metric) -> Result<DistanceMatrix, DistanceError> {
    let rows = a.len();
    let cols = b.len();
    let hint = ShapeHint::new(a.channels(), a.length());
    let kernel = metric.bind(Some(hint), false)?;

    let views_a: Vec<SeriesView<'_>> = a.iter().collect();
    let views_b: Vec<SeriesView<'_>> = b.iter().collect();
    debug!(cells = rows * cols, "filling full grid");

    let data: Vec<f64> = (0..rows * cols)
        .into_par_iter()
        .map(|flat| kernel.evaluate(views_a[flat / cols], views_b[flat % cols]))
        .collect();

    Ok(DistanceMatrix::from_raw(rows, cols, data))
}
