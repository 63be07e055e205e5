//! Error types for shape normalization, metric configuration, and the
//! pairwise engine.

/// Errors from tensor rank normalization and shape validation.
///
/// All shape validation happens before any numeric work: a series or
/// collection that constructs successfully is canonical, and the
/// pairwise engine never produces a partially filled matrix.
#[derive(Debug, thiserror::Error)]
pub enum ShapeError {
    /// Returned when a raw tensor has rank 0 or rank greater than 3.
    #[error("tensors of rank {rank} are not supported (expected rank 1, 2, or 3)")]
    UnsupportedRank {
        /// The offending tensor rank.
        rank: usize,
    },

    /// Returned when rows of one tensor axis differ in length (ragged
    /// channels within a series, or ragged series within a collection).
    #[error("ragged input: row {index} has length {found}, expected {expected}")]
    RaggedLengths {
        /// Index of the first row with a deviating length.
        index: usize,
        /// Length established by the first row.
        expected: usize,
        /// Length of the deviating row.
        found: usize,
    },

    /// Returned when instances of a collection disagree on channel count.
    #[error("ragged collection: instance {instance} has {found} channels, expected {expected}")]
    RaggedChannels {
        /// Index of the first instance with a deviating channel count.
        instance: usize,
        /// Channel count established by the first instance.
        expected: usize,
        /// Channel count of the deviating instance.
        found: usize,
    },

    /// Returned when the two operands of a comparison have different
    /// channel counts.
    #[error("operands have incompatible channel counts: {left} vs {right}")]
    ChannelMismatch {
        /// Channel count of the left operand.
        left: usize,
        /// Channel count of the right operand.
        right: usize,
    },

    /// Returned when the two operands of a comparison have different
    /// lengths and the metric requires lockstep alignment.
    #[error("operands have incompatible lengths: {left} vs {right}")]
    LengthMismatch {
        /// Length of the left operand.
        left: usize,
        /// Length of the right operand.
        right: usize,
    },

    /// Returned when a series has zero channels or zero time steps.
    #[error("time series must have at least one channel and one time step")]
    EmptySeries,

    /// Returned when a collection contains no series.
    #[error("collection must contain at least one series")]
    EmptyCollection,

    /// Returned when a raw buffer does not match the product of its
    /// declared shape.
    #[error("buffer of {found} elements does not match shape product {expected}")]
    ShapeDataMismatch {
        /// Element count implied by the shape.
        expected: usize,
        /// Element count actually provided.
        found: usize,
    },
}

/// Errors from metric parameter validation.
///
/// Raised by [`Metric::bind`](crate::Metric::bind) before any fill work
/// starts; validation never re-runs inside the fill loop.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Returned when a Sakoe-Chiba band radius exceeds the hinted
    /// series length, which would make the band meaningless.
    #[error("band radius {radius} exceeds series length {length}")]
    BandExceedsLength {
        /// The configured band radius.
        radius: usize,
        /// The hinted series length.
        length: usize,
    },
}

/// Errors from the pairwise distance engine.
#[derive(Debug, thiserror::Error)]
pub enum DistanceError {
    /// Wraps a shape error from input normalization or operand
    /// compatibility checks.
    #[error("shape error: {0}")]
    Shape(#[from] ShapeError),

    /// Wraps a metric configuration error from kernel binding.
    #[error("metric configuration error: {0}")]
    Config(#[from] ConfigError),
}
