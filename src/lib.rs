//! translog-config - Translog Configuration Contract
//!
//! The configuration seam between a shard-partitioned storage engine and
//! its write-ahead log (translog). The engine builds a [`config::TranslogConfig`]
//! per shard, optionally publishes the generation to recover from, and
//! hands the configuration to the translog at open time.
//!
//! ## Features
//! - **Immutable parameters**: shard identity, translog path, buffer size,
//!   and the shared buffer pool are fixed at construction
//! - **Live durability policy**: sync-on-each-operation is re-derived from
//!   the settings source on every call, so runtime updates apply instantly
//! - **Generation handoff**: a safely published, resettable slot deciding
//!   fresh-start vs recover-from-generation at translog open
//!
//! ## Example
//! ```
//! use std::path::PathBuf;
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! use translog_config::config::TranslogConfig;
//! use translog_config::generation::TranslogGeneration;
//! use translog_config::pool::BufferPool;
//! use translog_config::settings::IndexSettings;
//! use translog_config::shard::ShardId;
//!
//! let settings = Arc::new(IndexSettings::new(Duration::from_secs(5)));
//! let config = TranslogConfig::new(
//!     ShardId::new("events", 0),
//!     PathBuf::from("/data/events/0/translog"),
//!     settings,
//!     BufferPool::new(),
//! );
//!
//! config.set_translog_generation(Some(TranslogGeneration::new("uuid", 4)));
//! assert!(!config.is_sync_on_each_operation());
//! ```

pub mod bytesize;
pub mod config;
pub mod error;
pub mod generation;
pub mod pool;
pub mod settings;
pub mod shard;
