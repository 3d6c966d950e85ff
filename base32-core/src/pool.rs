// File:    pool.rs
// Author:  apezoo
// Date:    2025-07-25
//
// Description: A process-wide pool of scratch buffers with guard-based release.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! Scratch buffer pool.
//!
//! Encode and decode calls rent small scratch buffers here instead of
//! allocating per call. A rented buffer is wrapped in a [`ScratchGuard`],
//! which hands it back when dropped, so every exit path (including `?`
//! returns and unwinding) releases it.

use once_cell::sync::Lazy;
use parking_lot::Mutex;
use std::ops::{Deref, DerefMut};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Free buffers kept by the global pool.
pub const DEFAULT_MAX_RETAINED: usize = 64;

#[allow(clippy::non_std_lazy_statics)]
static SCRATCH_POOL: Lazy<ScratchPool> = Lazy::new(|| ScratchPool::new(DEFAULT_MAX_RETAINED));

/// A thread-safe pool of reusable byte buffers.
#[derive(Debug)]
pub struct ScratchPool {
    free: Mutex<Vec<Vec<u8>>>,
    max_retained: usize,
    outstanding: AtomicUsize,
}

impl ScratchPool {
    /// Creates an empty pool that keeps at most `max_retained` free buffers.
    #[must_use]
    pub fn new(max_retained: usize) -> Self {
        Self {
            free: Mutex::new(Vec::with_capacity(max_retained)),
            max_retained,
            outstanding: AtomicUsize::new(0),
        }
    }

    /// The process-wide pool used by the codec.
    #[must_use]
    pub fn global() -> &'static Self {
        &SCRATCH_POOL
    }

    /// Rents a zeroed buffer of `len` bytes.
    pub fn rent(&self, len: usize) -> ScratchGuard<'_> {
        let mut buf = self.free.lock().pop().unwrap_or_default();
        buf.clear();
        buf.resize(len, 0);
        self.outstanding.fetch_add(1, Ordering::Relaxed);
        ScratchGuard { pool: self, buf }
    }

    fn give_back(&self, buf: Vec<u8>) {
        self.outstanding.fetch_sub(1, Ordering::Relaxed);
        let mut free = self.free.lock();
        if free.len() < self.max_retained {
            free.push(buf);
        }
    }

    /// Buffers currently rented out.
    #[must_use]
    pub fn outstanding(&self) -> usize {
        self.outstanding.load(Ordering::Relaxed)
    }

    /// Free buffers waiting to be rented.
    #[must_use]
    pub fn retained(&self) -> usize {
        self.free.lock().len()
    }
}

impl Default for ScratchPool {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_RETAINED)
    }
}

/// Exclusive access to a rented buffer; returns it to the pool on drop.
#[derive(Debug)]
pub struct ScratchGuard<'a> {
    pool: &'a ScratchPool,
    buf: Vec<u8>,
}

impl Deref for ScratchGuard<'_> {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.buf
    }
}

impl DerefMut for ScratchGuard<'_> {
    fn deref_mut(&mut self) -> &mut [u8] {
        &mut self.buf
    }
}

impl Drop for ScratchGuard<'_> {
    fn drop(&mut self) {
        self.pool.give_back(std::mem::take(&mut self.buf));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rent_and_release() {
        let pool = ScratchPool::new(4);
        {
            let mut a = pool.rent(8);
            let b = pool.rent(5);
            assert_eq!(a.len(), 8);
            assert_eq!(b.len(), 5);
            a[0] = 42;
            assert_eq!(pool.outstanding(), 2);
            assert_eq!(pool.retained(), 0);
        }
        assert_eq!(pool.outstanding(), 0);
        assert_eq!(pool.retained(), 2);
    }

    #[test]
    fn reused_buffers_come_back_zeroed() {
        let pool = ScratchPool::new(1);
        {
            let mut buf = pool.rent(8);
            buf.fill(0xaa);
        }
        let buf = pool.rent(8);
        assert!(buf.iter().all(|&b| b == 0));
        assert_eq!(pool.retained(), 0);
    }

    #[test]
    fn retention_is_bounded() {
        let pool = ScratchPool::new(2);
        let guards: Vec<_> = (0..5).map(|_| pool.rent(8)).collect();
        assert_eq!(pool.outstanding(), 5);
        drop(guards);
        assert_eq!(pool.outstanding(), 0);
        assert_eq!(pool.retained(), 2);
    }

    #[test]
    fn released_when_unwinding() {
        let pool = ScratchPool::new(4);
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _guard = pool.rent(8);
            panic!("boom");
        }));
        assert!(result.is_err());
        assert_eq!(pool.outstanding(), 0);
    }

    #[test]
    fn concurrent_rent_and_return() {
        let pool = ScratchPool::new(8);
        std::thread::scope(|s| {
            for t in 0..8u8 {
                let pool = &pool;
                s.spawn(move || {
                    for _ in 0..1000 {
                        let mut buf = pool.rent(8);
                        buf.fill(t);
                        assert!(buf.iter().all(|&b| b == t));
                    }
                });
            }
        });
        assert_eq!(pool.outstanding(), 0);
        assert!(pool.retained() <= 8);
    }
}
