//! translog-config - Translog Configuration Holder
//! Holds all the configuration used to create a translog instance.
//! Once a translog has been created with this object, changes to the
//! generation slot no longer concern that instance; the owning engine
//! resets or discards the configuration between translog lifetimes.

use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use crate::bytesize::ByteSize;
use crate::generation::TranslogGeneration;
use crate::pool::BufferPool;
use crate::settings::SyncPolicy;
use crate::shard::ShardId;

/// Buffer size used when none is supplied at construction.
pub const DEFAULT_BUFFER_SIZE: ByteSize = ByteSize::kb(8);

/// Configuration for a single shard's translog.
///
/// Everything except the generation slot is fixed at construction and
/// read-only thereafter, so the instance can be shared by reference
/// across the threads operating the WAL engine without synchronization.
/// The generation slot is the sole mutable field: the owning engine
/// publishes the recovery generation into it strictly before the
/// translog is opened, and the translog reads it once at open to decide
/// between starting fresh and recovering.
pub struct TranslogConfig {
    shard_id: ShardId,
    translog_path: PathBuf,
    index_settings: Arc<dyn SyncPolicy>,
    buffer_pool: BufferPool,
    buffer_size: ByteSize,
    // Lock-guarded slot rather than a plain field: a store must be
    // visible to any later reader on any thread.
    translog_generation: RwLock<Option<TranslogGeneration>>,
}

impl TranslogConfig {
    /// Create a new configuration with the default 8kb buffer size.
    ///
    /// Never fails: inputs are accepted as given, and any validation
    /// (path writability, generation reachability) belongs to the WAL
    /// engine consuming them.
    pub fn new(
        shard_id: ShardId,
        translog_path: PathBuf,
        index_settings: Arc<dyn SyncPolicy>,
        buffer_pool: BufferPool,
    ) -> Self {
        Self::with_buffer_size(
            shard_id,
            translog_path,
            index_settings,
            buffer_pool,
            DEFAULT_BUFFER_SIZE,
        )
    }

    /// Create a configuration with an explicit buffer size. Internal
    /// knob, mainly for tests; the supplied size is not validated, a
    /// zero size is accepted and simply propagated.
    pub(crate) fn with_buffer_size(
        shard_id: ShardId,
        translog_path: PathBuf,
        index_settings: Arc<dyn SyncPolicy>,
        buffer_pool: BufferPool,
        buffer_size: ByteSize,
    ) -> Self {
        Self {
            shard_id,
            translog_path,
            index_settings,
            buffer_pool,
            buffer_size,
            translog_generation: RwLock::new(None),
        }
    }

    /// Returns `true` iff each low level operation should be fsynced.
    ///
    /// Derived live from the policy source on every call, never cached,
    /// so a runtime settings update changes the answer without
    /// reconstructing the configuration.
    pub fn is_sync_on_each_operation(&self) -> bool {
        self.index_settings.sync_interval().is_zero()
    }

    /// Returns the durability policy source.
    pub fn index_settings(&self) -> &Arc<dyn SyncPolicy> {
        &self.index_settings
    }

    /// Returns the shard this configuration was created for.
    pub fn shard_id(&self) -> &ShardId {
        &self.shard_id
    }

    /// Returns the shared buffer pool the translog allocates scratch
    /// buffers from.
    pub fn buffer_pool(&self) -> &BufferPool {
        &self.buffer_pool
    }

    /// Returns the directory the translog files live in.
    pub fn translog_path(&self) -> &Path {
        &self.translog_path
    }

    /// Returns the translog generation to open. `None` means a new
    /// translog is created. `Some` means the translog must recover from
    /// exactly that generation, treated as the last generation
    /// referenced by already committed data, and fail its own
    /// construction if the generation cannot be opened.
    pub fn translog_generation(&self) -> Option<TranslogGeneration> {
        self.translog_generation.read().unwrap().clone()
    }

    /// Set the generation to be opened. Use `None` to start with a
    /// fresh translog. The write is published with a happens-before
    /// edge: any thread reading afterwards observes it.
    pub fn set_translog_generation(&self, generation: Option<TranslogGeneration>) {
        match &generation {
            Some(gen) => log::debug!("{} translog generation set to {}", self.shard_id, gen),
            None => log::debug!("{} translog generation cleared", self.shard_id),
        }
        *self.translog_generation.write().unwrap() = generation;
    }

    /// The translog buffer size. Default is 8kb.
    pub fn buffer_size(&self) -> ByteSize {
        self.buffer_size
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use super::*;
    use crate::settings::IndexSettings;

    fn config_with_interval(interval: Duration) -> TranslogConfig {
        TranslogConfig::new(
            ShardId::new("test-index", 0),
            PathBuf::from("/tmp/translog"),
            Arc::new(IndexSettings::new(interval)),
            BufferPool::new(),
        )
    }

    #[test]
    fn test_default_buffer_size_is_8kb() {
        let config = config_with_interval(Duration::from_secs(5));
        assert_eq!(config.buffer_size(), DEFAULT_BUFFER_SIZE);
        assert_eq!(config.buffer_size().bytes(), 8192);
    }

    #[test]
    fn test_explicit_buffer_size_is_kept() {
        let config = TranslogConfig::with_buffer_size(
            ShardId::new("test-index", 0),
            PathBuf::from("/tmp/translog"),
            Arc::new(IndexSettings::new(Duration::from_secs(5))),
            BufferPool::new(),
            ByteSize::kb(64),
        );
        assert_eq!(config.buffer_size(), ByteSize::kb(64));
    }

    #[test]
    fn test_zero_buffer_size_is_accepted() {
        // No positivity check here: rejecting degenerate sizes is the
        // WAL engine's call.
        let config = TranslogConfig::with_buffer_size(
            ShardId::new("test-index", 0),
            PathBuf::from("/tmp/translog"),
            Arc::new(IndexSettings::new(Duration::from_secs(5))),
            BufferPool::new(),
            ByteSize::bytes_of(0),
        );
        assert_eq!(config.buffer_size().bytes(), 0);
    }

    #[test]
    fn test_sync_on_each_operation_follows_live_interval() {
        let settings = Arc::new(IndexSettings::new(Duration::from_secs(5)));
        let config = TranslogConfig::new(
            ShardId::new("test-index", 0),
            PathBuf::from("/tmp/translog"),
            settings.clone(),
            BufferPool::new(),
        );
        assert!(!config.is_sync_on_each_operation());

        settings.update_sync_interval(Duration::ZERO);
        assert!(config.is_sync_on_each_operation());

        settings.update_sync_interval(Duration::from_millis(1));
        assert!(!config.is_sync_on_each_operation());
    }

    #[test]
    fn test_generation_starts_absent() {
        let config = config_with_interval(Duration::from_secs(5));
        assert_eq!(config.translog_generation(), None);
    }

    #[test]
    fn test_generation_set_and_reset() {
        let config = config_with_interval(Duration::from_secs(5));

        let gen = TranslogGeneration::new("uuid-a", 3);
        config.set_translog_generation(Some(gen.clone()));
        assert_eq!(config.translog_generation(), Some(gen));

        config.set_translog_generation(None);
        assert_eq!(config.translog_generation(), None);
    }

    #[test]
    fn test_accessors_return_construction_values() {
        let shard = ShardId::new("events", 2);
        let path = PathBuf::from("/data/events/2/translog");
        let settings: Arc<dyn SyncPolicy> =
            Arc::new(IndexSettings::new(Duration::from_secs(5)));
        let pool = BufferPool::new();

        let config = TranslogConfig::new(
            shard.clone(),
            path.clone(),
            settings.clone(),
            pool.clone(),
        );

        assert_eq!(config.shard_id(), &shard);
        assert_eq!(config.translog_path(), path.as_path());
        assert!(Arc::ptr_eq(config.index_settings(), &settings));
        assert!(config.buffer_pool().same_pool(&pool));
    }
}
