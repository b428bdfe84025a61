use thiserror::Error;

use crate::graph::VertexId;

/// Errors raised by the map core.
///
/// Degenerate geometry is not an error here: the label engine and the
/// centroid estimator fall back to well-defined answers instead.
#[derive(Debug, Error, PartialEq)]
pub enum MapError {
    #[error("ring needs at least 3 points, got {len}")]
    InvalidRing { len: usize },

    #[error("label precision must be finite and positive, got {0}")]
    InvalidPrecision(f64),

    #[error("army bounds are inverted: min {min} > max {max}")]
    InvalidArmyBounds { min: u32, max: u32 },

    #[error("vertex not found: {0}")]
    VertexNotFound(VertexId),

    #[error("super-bonus refers to unknown bonus index {0}")]
    UnknownBonus(usize),
}

/// Convenience type alias for results using [`MapError`].
pub type Result<T> = std::result::Result<T, MapError>;
