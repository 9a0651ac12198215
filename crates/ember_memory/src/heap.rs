//! Heap allocator - general-purpose allocation through the global heap

use alloc::alloc::{alloc, dealloc, Layout};
use core::sync::atomic::{AtomicUsize, Ordering};

use crate::Allocator;

/// General-purpose allocator backed by the global heap
///
/// Tracks outstanding bytes and block counts so leaks are visible when the
/// allocator is dropped. Most engine subsystems bind their containers to
/// [`default_allocator`] unless they have a reason to use a scoped one.
pub struct HeapAllocator {
    /// Bytes currently handed out
    used: AtomicUsize,
    /// Blocks currently handed out
    blocks: AtomicUsize,
}

impl HeapAllocator {
    /// Create a new heap allocator with zeroed accounting
    pub const fn new() -> Self {
        Self {
            used: AtomicUsize::new(0),
            blocks: AtomicUsize::new(0),
        }
    }

    /// Get the number of outstanding blocks
    pub fn block_count(&self) -> usize {
        self.blocks.load(Ordering::Relaxed)
    }
}

impl Allocator for HeapAllocator {
    fn allocate(&self, size: usize, align: usize) -> Option<*mut u8> {
        if size == 0 {
            return Some(align as *mut u8); // Non-null aligned dangling pointer
        }

        let layout = Layout::from_size_align(size, align).ok()?;
        // Safety: layout has non-zero size
        let ptr = unsafe { alloc(layout) };
        if ptr.is_null() {
            log::error!("heap allocation of {} bytes (align {}) failed", size, align);
            return None;
        }

        self.used.fetch_add(size, Ordering::Relaxed);
        self.blocks.fetch_add(1, Ordering::Relaxed);
        Some(ptr)
    }

    unsafe fn deallocate(&self, ptr: *mut u8, size: usize, align: usize) {
        if ptr.is_null() || size == 0 {
            return;
        }

        // Safety: size/align were accepted by allocate for this block
        dealloc(ptr, Layout::from_size_align_unchecked(size, align));
        self.used.fetch_sub(size, Ordering::Relaxed);
        self.blocks.fetch_sub(1, Ordering::Relaxed);
    }

    fn used(&self) -> usize {
        self.used.load(Ordering::Relaxed)
    }
}

impl Default for HeapAllocator {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for HeapAllocator {
    fn drop(&mut self) {
        let outstanding = self.used.load(Ordering::Relaxed);
        if outstanding > 0 {
            log::warn!(
                "heap allocator dropped with {} bytes leaked in {} blocks",
                outstanding,
                self.block_count()
            );
        }
    }
}

/// Get the process-wide default allocator
pub fn default_allocator() -> &'static HeapAllocator {
    static DEFAULT: HeapAllocator = HeapAllocator::new();
    &DEFAULT
}
