//! translog-config - Error Types
//! Defines the error hierarchy for the translog configuration crate.

use thiserror::Error;

/// Custom Result type for the translog configuration crate.
pub type Result<T> = std::result::Result<T, TranslogConfigError>;

/// Error types for the translog configuration crate.
///
/// The configuration holder itself raises no errors: it is pure data
/// plumbing, and failures (unreachable generations, bad paths, degenerate
/// buffer sizes) belong to the WAL engine that acts on the values. The
/// only fallible surface in this crate is parsing a byte-size string.
#[derive(Error, Debug)]
pub enum TranslogConfigError {
    /// A byte-size string such as "8kb" could not be parsed.
    #[error("failed to parse byte size: {0}")]
    ParseByteSize(String),
}
