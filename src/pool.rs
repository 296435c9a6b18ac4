//! translog-config - Shared Buffer Pool
//! A long-lived allocator handle the translog uses to temporarily
//! allocate scratch buffers while serializing operations. Handles are
//! cheap to clone and all clones share one pool.

use std::sync::{Arc, Mutex};

use bytes::BytesMut;

/// Buffers returned to the pool beyond this count are dropped instead
/// of retained, bounding idle memory.
const MAX_POOLED_BUFFERS: usize = 16;

/// Shared pool of reusable scratch buffers.
///
/// The translog configuration merely forwards this handle; it never
/// allocates from it. The WAL engine acquires a buffer per operation,
/// serializes into it, writes it out, and releases it back.
#[derive(Debug, Clone)]
pub struct BufferPool {
    inner: Arc<Mutex<Vec<BytesMut>>>,
}

impl BufferPool {
    /// Create an empty pool.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Acquire a cleared buffer with at least `min_capacity` bytes of
    /// capacity, recycling a pooled one when possible.
    pub fn acquire(&self, min_capacity: usize) -> BytesMut {
        let mut pool = self.inner.lock().unwrap();
        if let Some(pos) = pool.iter().position(|b| b.capacity() >= min_capacity) {
            return pool.swap_remove(pos);
        }
        drop(pool);
        BytesMut::with_capacity(min_capacity)
    }

    /// Return a buffer to the pool for reuse. The buffer is cleared;
    /// excess buffers beyond the retention bound are dropped.
    pub fn release(&self, mut buf: BytesMut) {
        buf.clear();
        let mut pool = self.inner.lock().unwrap();
        if pool.len() < MAX_POOLED_BUFFERS {
            pool.push(buf);
        }
    }

    /// Number of buffers currently held by the pool.
    pub fn pooled(&self) -> usize {
        self.inner.lock().unwrap().len()
    }

    /// Whether two handles share the same underlying pool.
    pub fn same_pool(&self, other: &BufferPool) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl Default for BufferPool {
    fn default() -> Self {
        Self::new()
    }
}
