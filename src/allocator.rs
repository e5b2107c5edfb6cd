//! Identifier allocation - the one capability the board consumes
//!
//! Allocators hand out fresh integers. They may be called from a worker
//! thread, so implementations must be `Send + Sync`.

use std::sync::atomic::{AtomicU64, Ordering};

/// Source of fresh, unique identifiers
pub trait IdAllocator: Send + Sync {
    /// Return an identifier never returned before by this allocator
    fn allocate(&self) -> u64;
}

/// Monotonic counter allocator
#[derive(Debug)]
pub struct SequentialAllocator {
    next: AtomicU64,
}

impl SequentialAllocator {
    pub fn starting_at(first: u64) -> Self {
        Self {
            next: AtomicU64::new(first),
        }
    }
}

impl Default for SequentialAllocator {
    fn default() -> Self {
        Self::starting_at(1)
    }
}

impl IdAllocator for SequentialAllocator {
    fn allocate(&self) -> u64 {
        self.next.fetch_add(1, Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::sync::Arc;

    #[test]
    fn test_sequential_allocator_counts_up() {
        let alloc = SequentialAllocator::starting_at(10);
        assert_eq!(alloc.allocate(), 10);
        assert_eq!(alloc.allocate(), 11);
    }

    #[test]
    fn test_sequential_allocator_unique_across_threads() {
        let alloc = Arc::new(SequentialAllocator::default());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let alloc = Arc::clone(&alloc);
                std::thread::spawn(move || (0..50).map(|_| alloc.allocate()).collect::<Vec<_>>())
            })
            .collect();

        let mut seen = HashSet::new();
        for handle in handles {
            for id in handle.join().unwrap() {
                assert!(seen.insert(id), "duplicate id {}", id);
            }
        }
        assert_eq!(seen.len(), 200);
    }
}
