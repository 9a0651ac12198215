//! Integration tests for ember_structures
//!
//! Exercises buffers against the engine allocators end to end.

use bytemuck::{Pod, Zeroable};
use ember_memory::{Allocator, Arena, HeapAllocator, TrackingAllocator};
use ember_structures::Buffer;

#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
#[repr(C)]
struct Particle {
    position: [f32; 2],
    velocity: [f32; 2],
}

#[test]
fn test_buffers_share_one_allocator() {
    let heap = HeapAllocator::new();

    let mut positions = Buffer::new(&heap);
    let mut healths = Buffer::new(&heap);
    for k in 0..16u32 {
        positions.push(k as f32 * 0.5);
        healths.push(100 - k);
    }

    assert_eq!(positions.len(), 16);
    assert_eq!(healths.len(), 16);
    assert!(heap.block_count() >= 2);

    drop(positions);
    drop(healths);
    assert_eq!(heap.used(), 0);
    assert_eq!(heap.block_count(), 0);
}

#[test]
fn test_buffer_of_structs() {
    let heap = HeapAllocator::new();
    let mut particles = Buffer::new(&heap);

    for k in 0..8 {
        particles.push(Particle {
            position: [k as f32, 0.0],
            velocity: [0.0, -1.0],
        });
    }

    for particle in &mut particles {
        particle.position[1] += particle.velocity[1];
    }

    assert_eq!(particles[3].position, [3.0, -1.0]);
    assert_eq!(particles.len(), 8);
}

#[test]
fn test_buffer_on_arena_scratch() {
    let arena = Arena::new(4096);

    let mut scratch = Buffer::new(&arena);
    for k in 0..32u64 {
        scratch.push(k);
    }

    assert_eq!(scratch.len(), 32);
    assert_eq!(*scratch.front(), 0);
    assert_eq!(*scratch.back(), 31);
    // Linear allocation: abandoned blocks from growth stay in the arena
    // until reset, so usage exceeds the final backing block
    assert!(arena.used() > 32 * 8);
}

#[test]
fn test_tracked_lifecycle_has_no_leaks() {
    let tracked = TrackingAllocator::new(HeapAllocator::new());

    {
        let mut buffer = Buffer::new(&tracked);
        buffer.extend_from_slice(&[1u32, 2, 3, 4, 5]);
        buffer.reserve(64);
        buffer.set_capacity(8);
        buffer.resize(2);

        let copy = buffer.clone();
        assert_eq!(copy.as_slice(), &[1, 2]);
    }

    assert_eq!(tracked.live_blocks(), 0);
    assert_eq!(tracked.live_bytes(), 0);
}

#[test]
fn test_bulk_load_then_trim() {
    let heap = HeapAllocator::new();
    let mut buffer = Buffer::new(&heap);

    let chunk: Vec<u32> = (0..100).collect();
    buffer.extend_from_slice(&chunk);
    assert_eq!(buffer.capacity(), 100);

    buffer.resize(10);
    buffer.set_capacity(10);
    assert_eq!(buffer.len(), 10);
    assert_eq!(buffer.capacity(), 10);
    assert_eq!(buffer.as_slice(), &chunk[..10]);
}
