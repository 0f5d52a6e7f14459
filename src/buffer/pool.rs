//! Thread-local buffer pool for chunk buffer reuse.

use std::cell::RefCell;

/// Largest buffer capacity the pool will retain.
const MAX_POOLED_CAPACITY: usize = 256 * 1024;

/// Maximum number of buffers to keep per thread.
const MAX_POOL_SIZE: usize = 4;

/// A reusable, zero-filled chunk buffer.
///
/// `take(len)` hands out a buffer of exactly `len` bytes, reusing the
/// allocation from a previous run on the same thread when one is
/// available. Dropping the buffer returns it to the pool unless it is
/// oversized.
pub(crate) struct Buffer {
    data: Vec<u8>,
}

impl Buffer {
    /// Takes a buffer of `len` bytes from the thread-local pool or
    /// allocates a new one.
    pub fn take(len: usize) -> Self {
        THREAD_BUFFER_POOL.with(|pool| {
            let mut data = pool.borrow_mut().pop().unwrap_or_default();
            data.clear();
            data.resize(len, 0);
            Self { data }
        })
    }
}

impl std::ops::Deref for Buffer {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.data
    }
}

impl std::ops::DerefMut for Buffer {
    fn deref_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }
}

impl Drop for Buffer {
    fn drop(&mut self) {
        if self.data.capacity() <= MAX_POOLED_CAPACITY {
            self.data.clear();
            THREAD_BUFFER_POOL.with(|pool| {
                let mut pool = pool.borrow_mut();
                if pool.len() < MAX_POOL_SIZE {
                    pool.push(std::mem::take(&mut self.data));
                }
            });
        }
    }
}

// Thread-local buffer pool
thread_local! {
    static THREAD_BUFFER_POOL: RefCell<Vec<Vec<u8>>> = const { RefCell::new(Vec::new()) };
}
