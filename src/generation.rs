//! translog-config - Translog Generation
//! Names a specific translog file epoch for recovery handoff.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A reference to a specific translog generation.
///
/// The generation is treated as the last generation referenced by already
/// committed data: every operation not yet committed should live in the
/// translog file this generation names. A WAL engine handed a generation
/// at open must recover from exactly that generation and fail its own
/// construction if it cannot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslogGeneration {
    translog_uuid: String,
    translog_file_generation: u64,
}

impl TranslogGeneration {
    /// Create a generation reference from the translog UUID and the
    /// file generation number.
    pub fn new(translog_uuid: impl Into<String>, translog_file_generation: u64) -> Self {
        Self {
            translog_uuid: translog_uuid.into(),
            translog_file_generation,
        }
    }

    /// UUID of the translog this generation belongs to.
    pub fn translog_uuid(&self) -> &str {
        &self.translog_uuid
    }

    /// The generation number of the translog file to recover from.
    pub fn translog_file_generation(&self) -> u64 {
        self.translog_file_generation
    }
}

impl fmt::Display for TranslogGeneration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{}",
            self.translog_uuid, self.translog_file_generation
        )
    }
}
