//! Canonical time series and collection types.
//!
//! Heterogeneous rank-1/2/3 inputs normalize into two canonical forms:
//! a single series is row-major `(channels, length)` and a collection
//! is row-major `(instances, channels, length)`. Construction validates
//! shape only; finiteness is deliberately unchecked, so NaN and
//! infinity propagate through kernels unmodified.

use crate::error::ShapeError;

/// Owned canonical time series: row-major `(channels, length)`.
///
/// A rank-1 input lifts to a single channel. All channels share one
/// length; ragged input is rejected at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeSeries {
    data: Vec<f64>,
    channels: usize,
    length: usize,
}

impl TimeSeries {
    /// Create a single-channel series from a rank-1 input.
    ///
    /// # Errors
    ///
    /// | Variant | Condition |
    /// |---|---|
    /// | [`ShapeError::EmptySeries`] | `values` is empty |
    pub fn univariate(values: Vec<f64>) -> Result<Self, ShapeError> {
        if values.is_empty() {
            return Err(ShapeError::EmptySeries);
        }
        let length = values.len();
        Ok(Self { data: values, channels: 1, length })
    }

    /// Create a multi-channel series from a rank-2 `(channels, length)` input.
    ///
    /// # Errors
    ///
    /// | Variant | Condition |
    /// |---|---|
    /// | [`ShapeError::EmptySeries`] | No channels, or the first channel is empty |
    /// | [`ShapeError::RaggedLengths`] | Channels differ in length |
    pub fn multivariate(channels: Vec<Vec<f64>>) -> Result<Self, ShapeError> {
        if channels.is_empty() || channels[0].is_empty() {
            return Err(ShapeError::EmptySeries);
        }
        let length = channels[0].len();
        for (index, channel) in channels.iter().enumerate() {
            if channel.len() != length {
                return Err(ShapeError::RaggedLengths {
                    index,
                    expected: length,
                    found: channel.len(),
                });
            }
        }
        let n_channels = channels.len();
        let mut data = Vec::with_capacity(n_channels * length);
        for channel in channels {
            data.extend_from_slice(&channel);
        }
        Ok(Self { data, channels: n_channels, length })
    }

    /// Create a series from a flat buffer and an explicit shape.
    ///
    /// Rank 1 (`[n]`) lifts to `(1, n)`; rank 2 (`[c, n]`) is taken as
    /// `(channels, length)`. Higher ranks describe collections, not
    /// single series, and are rejected.
    ///
    /// # Errors
    ///
    /// | Variant | Condition |
    /// |---|---|
    /// | [`ShapeError::UnsupportedRank`] | `shape` has rank 0 or rank ≥ 3 |
    /// | [`ShapeError::ShapeDataMismatch`] | `data.len()` differs from the shape product |
    /// | [`ShapeError::EmptySeries`] | Any shape dimension is zero |
    pub fn from_raw(data: Vec<f64>, shape: &[usize]) -> Result<Self, ShapeError> {
        let (channels, length) = match *shape {
            [n] => (1, n),
            [c, n] => (c, n),
            _ => return Err(ShapeError::UnsupportedRank { rank: shape.len() }),
        };
        if channels == 0 || length == 0 {
            return Err(ShapeError::EmptySeries);
        }
        let expected = channels * length;
        if data.len() != expected {
            return Err(ShapeError::ShapeDataMismatch { expected, found: data.len() });
        }
        Ok(Self { data, channels, length })
    }

    /// Borrow this series as a zero-copy view.
    #[must_use]
    pub fn as_view(&self) -> SeriesView<'_> {
        SeriesView { data: &self.data, channels: self.channels, length: self.length }
    }

    /// Return the number of channels.
    #[must_use]
    pub fn channels(&self) -> usize {
        self.channels
    }

    /// Return the number of time steps.
    #[must_use]
    pub fn length(&self) -> usize {
        self.length
    }

    /// Consume and return the flat row-major buffer.
    #[must_use]
    pub fn into_inner(self) -> Vec<f64> {
        self.data
    }
}

/// Borrowed canonical `(channels, length)` view. Zero-copy reference.
#[derive(Debug, Clone, Copy)]
pub struct SeriesView<'a> {
    data: &'a [f64],
    channels: usize,
    length: usize,
}

impl<'a> SeriesView<'a> {
    /// Return the values of channel `c` as a contiguous slice.
    ///
    /// # Panics
    ///
    /// Panics if `c >= channels`.
    #[must_use]
    pub fn channel(&self, c: usize) -> &'a [f64] {
        assert!(c < self.channels, "channel index {c} out of bounds for {} channels", self.channels);
        &self.data[c * self.length..(c + 1) * self.length]
    }

    /// Return the number of channels.
    #[must_use]
    pub fn channels(&self) -> usize {
        self.channels
    }

    /// Return the number of time steps.
    #[must_use]
    pub fn length(&self) -> usize {
        self.length
    }

    /// Return the flat row-major buffer.
    #[must_use]
    pub fn as_slice(&self) -> &'a [f64] {
        self.data
    }
}

/// Owned canonical collection: row-major `(instances, channels, length)`.
///
/// All instances share one channel count and one length. Ragged input
/// is rejected at construction, so every [`SeriesView`] taken from a
/// collection is mutually compatible.
#[derive(Debug, Clone, PartialEq)]
pub struct Collection {
    data: Vec<f64>,
    instances: usize,
    channels: usize,
    length: usize,
}

impl Collection {
    /// Create a collection of univariate series from a rank-2
    /// `(instances, length)` input.
    ///
    /// # Errors
    ///
    /// | Variant | Condition |
    /// |---|---|
    /// | [`ShapeError::EmptyCollection`] | `series` is empty |
    /// | [`ShapeError::EmptySeries`] | The first series is empty |
    /// | [`ShapeError::RaggedLengths`] | Series differ in length |
    pub fn from_univariate(series: Vec<Vec<f64>>) -> Result<Self, ShapeError> {
        if series.is_empty() {
            return Err(ShapeError::EmptyCollection);
        }
        if series[0].is_empty() {
            return Err(ShapeError::EmptySeries);
        }
        let length = series[0].len();
        for (index, s) in series.iter().enumerate() {
            if s.len() != length {
                return Err(ShapeError::RaggedLengths { index, expected: length, found: s.len() });
            }
        }
        let instances = series.len();
        let mut data = Vec::with_capacity(instances * length);
        for s in series {
            data.extend_from_slice(&s);
        }
        Ok(Self { data, instances, channels: 1, length })
    }

    /// Create a collection of multi-channel series from a rank-3
    /// `(instances, channels, length)` input.
    ///
    /// # Errors
    ///
    /// | Variant | Condition |
    /// |---|---|
    /// | [`ShapeError::EmptyCollection`] | `series` is empty |
    /// | [`ShapeError::EmptySeries`] | The first instance has no channels or no time steps |
    /// | [`ShapeError::RaggedChannels`] | Instances differ in channel count |
    /// | [`ShapeError::RaggedLengths`] | Any channel of any instance deviates in length |
    pub fn from_multivariate(series: Vec<Vec<Vec<f64>>>) -> Result<Self, ShapeError> {
        if series.is_empty() {
            return Err(ShapeError::EmptyCollection);
        }
        if series[0].is_empty() || series[0][0].is_empty() {
            return Err(ShapeError::EmptySeries);
        }
        let channels = series[0].len();
        let length = series[0][0].len();
        for (instance, s) in series.iter().enumerate() {
            if s.len() != channels {
                return Err(ShapeError::RaggedChannels {
                    instance,
                    expected: channels,
                    found: s.len(),
                });
            }
            for (index, channel) in s.iter().enumerate() {
                if channel.len() != length {
                    return Err(ShapeError::RaggedLengths {
                        index,
                        expected: length,
                        found: channel.len(),
                    });
                }
            }
        }
        let instances = series.len();
        let mut data = Vec::with_capacity(instances * channels * length);
        for s in series {
            for channel in s {
                data.extend_from_slice(&channel);
            }
        }
        Ok(Self { data, instances, channels, length })
    }

    /// Create a collection from a flat buffer and an explicit shape.
    ///
    /// Rank 1 (`[n]`) lifts to a single univariate series `(1, 1, n)`;
    /// rank 2 (`[m, n]`) is taken in collection context as `m`
    /// univariate series `(m, 1, n)`; rank 3 (`[m, c, n]`) is already
    /// canonical and only validated.
    ///
    /// # Errors
    ///
    /// | Variant | Condition |
    /// |---|---|
    /// | [`ShapeError::UnsupportedRank`] | `shape` has rank 0 or rank > 3 |
    /// | [`ShapeError::ShapeDataMismatch`] | `data.len()` differs from the shape product |
    /// | [`ShapeError::EmptyCollection`] | The instance dimension is zero |
    /// | [`ShapeError::EmptySeries`] | The channel or length dimension is zero |
    pub fn from_raw(data: Vec<f64>, shape: &[usize]) -> Result<Self, ShapeError> {
        let (instances, channels, length) = match *shape {
            [n] => (1, 1, n),
            [m, n] => (m, 1, n),
            [m, c, n] => (m, c, n),
            _ => return Err(ShapeError::UnsupportedRank { rank: shape.len() }),
        };
        if instances == 0 {
            return Err(ShapeError::EmptyCollection);
        }
        if channels == 0 || length == 0 {
            return Err(ShapeError::EmptySeries);
        }
        let expected = instances * channels * length;
        if data.len() != expected {
            return Err(ShapeError::ShapeDataMismatch { expected, found: data.len() });
        }
        Ok(Self { data, instances, channels, length })
    }

    /// Return a zero-copy view of series `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= len()`.
    #[must_use]
    pub fn series(&self, i: usize) -> SeriesView<'_> {
        assert!(i < self.instances, "instance index {i} out of bounds for {} series", self.instances);
        let stride = self.channels * self.length;
        SeriesView {
            data: &self.data[i * stride..(i + 1) * stride],
            channels: self.channels,
            length: self.length,
        }
    }

    /// Iterate over zero-copy views of all series in order.
    pub fn iter(&self) -> impl Iterator<Item = SeriesView<'_>> {
        (0..self.instances).map(|i| self.series(i))
    }

    /// Return the number of series.
    #[must_use]
    pub fn len(&self) -> usize {
        self.instances
    }

    /// Return true if the collection contains no series.
    ///
    /// A [`Collection`] that constructed successfully is never empty;
    /// provided to satisfy the `len_without_is_empty` convention.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.instances == 0
    }

    /// Return the number of channels shared by all series.
    #[must_use]
    pub fn channels(&self) -> usize {
        self.channels
    }

    /// Return the number of time steps shared by all series.
    #[must_use]
    pub fn length(&self) -> usize {
        self.length
    }
}
