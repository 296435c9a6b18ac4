//! translog-config - Durability Policy Source
//! Exposes the live sync-interval setting the translog derives its
//! fsync cadence from. Readers always see the current value: the
//! interval is stored in an atomic and re-read on every query, so a
//! runtime settings update takes effect without rebuilding anything.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

/// Capability interface for "what is the current translog sync interval".
///
/// The configuration holder only ever asks this one question, so it is
/// kept decoupled from any concrete settings representation. A zero
/// interval means every operation must be fsynced individually.
pub trait SyncPolicy: Send + Sync {
    /// The currently configured sync interval. Must reflect live
    /// updates, not a value cached at construction.
    fn sync_interval(&self) -> Duration;
}

/// Index-level settings backing the durability policy.
///
/// Only the translog sync interval is modeled here. The interval is held
/// as whole milliseconds in an `AtomicU64` so concurrent readers never
/// block and updates publish immediately.
#[derive(Debug)]
pub struct IndexSettings {
    sync_interval_millis: AtomicU64,
}

impl IndexSettings {
    /// Create settings with the given translog sync interval.
    /// Sub-millisecond precision is truncated.
    pub fn new(sync_interval: Duration) -> Self {
        Self {
            sync_interval_millis: AtomicU64::new(sync_interval.as_millis() as u64),
        }
    }

    /// Apply a live update to the sync interval. Takes effect on the
    /// next query from any thread.
    pub fn update_sync_interval(&self, sync_interval: Duration) {
        let millis = sync_interval.as_millis() as u64;
        self.sync_interval_millis.store(millis, Ordering::Relaxed);
        log::debug!("translog sync interval updated to {}ms", millis);
    }
}

impl SyncPolicy for IndexSettings {
    fn sync_interval(&self) -> Duration {
        Duration::from_millis(self.sync_interval_millis.load(Ordering::Relaxed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_interval() {
        let settings = IndexSettings::new(Duration::from_secs(5));
        assert_eq!(settings.sync_interval(), Duration::from_millis(5000));
    }

    #[test]
    fn test_live_update_visible_on_next_read() {
        let settings = IndexSettings::new(Duration::from_secs(5));
        settings.update_sync_interval(Duration::ZERO);
        assert_eq!(settings.sync_interval(), Duration::ZERO);

        settings.update_sync_interval(Duration::from_millis(200));
        assert_eq!(settings.sync_interval(), Duration::from_millis(200));
    }

    #[test]
    fn test_sub_millisecond_truncates_to_zero() {
        let settings = IndexSettings::new(Duration::from_micros(500));
        assert_eq!(settings.sync_interval(), Duration::ZERO);
    }
}
