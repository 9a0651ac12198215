//! Allocation tracking - leak detection around any allocator

use alloc::vec::Vec;
use parking_lot::Mutex;

use crate::Allocator;

/// Wraps an allocator and records every live block
///
/// Intended for tests and tools: blocks still outstanding when the tracker
/// is dropped are reported through `log`. Accounting happens behind a mutex,
/// so this is not for hot allocation paths.
pub struct TrackingAllocator<A> {
    inner: A,
    live: Mutex<Vec<LiveBlock>>,
}

#[derive(Clone, Copy)]
struct LiveBlock {
    ptr: usize,
    size: usize,
}

impl<A: Allocator> TrackingAllocator<A> {
    /// Wrap an allocator
    pub fn new(inner: A) -> Self {
        Self {
            inner,
            live: Mutex::new(Vec::new()),
        }
    }

    /// Get the wrapped allocator
    pub fn inner(&self) -> &A {
        &self.inner
    }

    /// Get the number of live blocks
    pub fn live_blocks(&self) -> usize {
        self.live.lock().len()
    }

    /// Get the number of live bytes
    pub fn live_bytes(&self) -> usize {
        self.live.lock().iter().map(|block| block.size).sum()
    }
}

impl<A: Allocator> Allocator for TrackingAllocator<A> {
    fn allocate(&self, size: usize, align: usize) -> Option<*mut u8> {
        let ptr = self.inner.allocate(size, align)?;
        if size > 0 {
            self.live.lock().push(LiveBlock {
                ptr: ptr as usize,
                size,
            });
        }
        Some(ptr)
    }

    unsafe fn deallocate(&self, ptr: *mut u8, size: usize, align: usize) {
        if !ptr.is_null() && size > 0 {
            let mut live = self.live.lock();
            match live.iter().position(|block| block.ptr == ptr as usize) {
                Some(at) => {
                    live.swap_remove(at);
                }
                None => log::error!("deallocating untracked block {:p} ({} bytes)", ptr, size),
            }
        }
        self.inner.deallocate(ptr, size, align)
    }

    fn used(&self) -> usize {
        self.inner.used()
    }
}

impl<A> Drop for TrackingAllocator<A> {
    fn drop(&mut self) {
        for block in self.live.get_mut().iter() {
            log::warn!("leaked block at {:#x} ({} bytes)", block.ptr, block.size);
        }
    }
}
