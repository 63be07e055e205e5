//! Metric selection and the bind-once kernel factory.

use crate::dtw::Band;
use crate::error::ConfigError;
use crate::kernel::Kernel;

/// Shape of a representative operand: `(channels, length)`.
///
/// Passed to [`Metric::bind`] so shape-sensitive parameters can be
/// validated once, before the fill loop starts. Parameter-free metrics
/// carry no shape-dependent configuration and ignore the hint, which is
/// why it is optional rather than mandatory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShapeHint {
    /// Number of channels in the representative series.
    pub channels: usize,
    /// Number of time steps in the representative series.
    pub length: usize,
}

impl ShapeHint {
    /// Create a hint from explicit channel and length counts.
    #[must_use]
    pub fn new(channels: usize, length: usize) -> Self {
        Self { channels, length }
    }
}

/// Closed set of supported distance metrics.
///
/// Replaces registry-style string dispatch: the variant is matched once
/// per pairwise call when [`bind`](Metric::bind) produces a [`Kernel`],
/// never per pair. Parameters are variant fields and all integer-valued,
/// so `Metric` stays `Eq + Hash` and usable as a
/// [`KernelCache`](crate::KernelCache) key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    /// Euclidean distance (reference metric).
    Euclidean,
    /// Squared Euclidean distance.
    SquaredEuclidean,
    /// Manhattan (L1) distance.
    Manhattan,
    /// Dynamic time warping with an optional Sakoe-Chiba band.
    Dtw {
        /// Warping window constraint.
        band: Band,
    },
}

impl Metric {
    /// Return true if this metric accepts operands of unequal length.
    ///
    /// Lockstep metrics require equal lengths; DTW warps the time axis
    /// and does not.
    #[must_use]
    pub fn tolerates_unequal_lengths(&self) -> bool {
        matches!(self, Self::Dtw { .. })
    }

    /// Bind this metric into a reusable [`Kernel`].
    ///
    /// Parameter validation against the representative shape happens
    /// here, once; the returned binding performs no further validation
    /// no matter how many pairs it evaluates. The `symmetric` flag is
    /// recorded for metrics that can exploit it internally (none of the
    /// shipped ones do) and primarily informs the engine's own loop
    /// structure.
    ///
    /// # Errors
    ///
    /// | Variant | Condition |
    /// |---|---|
    /// | [`ConfigError::BandExceedsLength`] | Sakoe-Chiba radius exceeds the hinted length |
    pub fn bind(self, hint: Option<ShapeHint>, symmetric: bool) -> Result<Kernel, ConfigError> {
        if let (Self::Dtw { band: Band::SakoeChiba(radius) }, Some(h)) = (self, hint)
            && radius > h.length
        {
            return Err(ConfigError::BandExceedsLength { radius, length: h.length });
        }
        Ok(Kernel::new(self, symmetric))
    }
}
