//! translog-config - Byte Size Values
//! A size-with-unit value used to express buffer capacities.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TranslogConfigError;

/// Units for byte sizes. Multipliers are 1024-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ByteUnit {
    Bytes,
    Kb,
    Mb,
    Gb,
}

impl ByteUnit {
    /// Number of bytes represented by one of this unit.
    pub const fn multiplier(self) -> u64 {
        match self {
            ByteUnit::Bytes => 1,
            ByteUnit::Kb => 1024,
            ByteUnit::Mb => 1024 * 1024,
            ByteUnit::Gb => 1024 * 1024 * 1024,
        }
    }

    /// Suffix used when formatting, e.g. "kb" for kilobytes.
    pub const fn suffix(self) -> &'static str {
        match self {
            ByteUnit::Bytes => "b",
            ByteUnit::Kb => "kb",
            ByteUnit::Mb => "mb",
            ByteUnit::Gb => "gb",
        }
    }
}

/// A size together with the unit it was expressed in.
///
/// Keeping the original unit preserves round-trippable formatting:
/// `ByteSize::kb(8)` displays as "8kb", not "8192b". No bound checks are
/// performed; a zero size is a legal value here and it is up to the
/// consumer to reject sizes it cannot work with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ByteSize {
    size: u64,
    unit: ByteUnit,
}

impl ByteSize {
    /// Create a byte size from a count and a unit.
    pub const fn new(size: u64, unit: ByteUnit) -> Self {
        Self { size, unit }
    }

    /// Create a size expressed in raw bytes.
    pub const fn bytes_of(size: u64) -> Self {
        Self::new(size, ByteUnit::Bytes)
    }

    /// Create a size expressed in kilobytes (1024-based).
    pub const fn kb(size: u64) -> Self {
        Self::new(size, ByteUnit::Kb)
    }

    /// Create a size expressed in megabytes (1024-based).
    pub const fn mb(size: u64) -> Self {
        Self::new(size, ByteUnit::Mb)
    }

    /// Total size in bytes.
    pub const fn bytes(&self) -> u64 {
        self.size * self.unit.multiplier()
    }
}

impl fmt::Display for ByteSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.size, self.unit.suffix())
    }
}

impl FromStr for ByteSize {
    type Err = TranslogConfigError;

    /// Parse strings like "8kb", "512b", "1mb" or a bare byte count.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let lower = s.to_ascii_lowercase();
        let (digits, unit) = if let Some(d) = lower.strip_suffix("kb") {
            (d, ByteUnit::Kb)
        } else if let Some(d) = lower.strip_suffix("mb") {
            (d, ByteUnit::Mb)
        } else if let Some(d) = lower.strip_suffix("gb") {
            (d, ByteUnit::Gb)
        } else if let Some(d) = lower.strip_suffix('b') {
            (d, ByteUnit::Bytes)
        } else {
            (lower.as_str(), ByteUnit::Bytes)
        };

        let size: u64 = digits
            .trim()
            .parse()
            .map_err(|_| TranslogConfigError::ParseByteSize(s.to_string()))?;
        Ok(ByteSize::new(size, unit))
    }
}
