//! translog-config - Shard Identity
//! Identifies the shard a translog belongs to.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identity of a single shard: the owning index plus the shard number.
/// Immutable for the life of any configuration that carries it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ShardId {
    index: String,
    id: u32,
}

impl ShardId {
    /// Create a shard identity for the given index name and shard number.
    pub fn new(index: impl Into<String>, id: u32) -> Self {
        Self {
            index: index.into(),
            id,
        }
    }

    /// Name of the index this shard belongs to.
    pub fn index(&self) -> &str {
        &self.index
    }

    /// Shard number within the index.
    pub fn id(&self) -> u32 {
        self.id
    }
}

impl fmt::Display for ShardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}][{}]", self.index, self.id)
    }
}
