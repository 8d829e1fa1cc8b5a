//! Error types for the turbulence-analysis crate.
use thiserror::Error;

/// Error type for the crate.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Error)]
pub enum AnalysisError {
    /// A report did not lead with a recognizable station identifier.
    #[error("Report does not start with a station identifier record.")]
    MissingStationRecord,
    /// A weight configuration that cannot produce a usable index.
    #[error("Weights must be non-negative and not all zero.")]
    UnusableWeights,
}

/// Shorthand for results.
pub type Result<T> = ::std::result::Result<T, AnalysisError>;
