//! Capacity growth policy for contiguous containers

/// Compute the next backing-store capacity for a growing container
///
/// Doubles the current capacity plus a small constant, so any sequence of N
/// single-element appends performs O(N) total element copies, then raises
/// the result to `min_required` when the geometric step falls short.
#[inline]
pub const fn next_capacity(current: usize, min_required: usize) -> usize {
    let geometric = 2 * current + 2;
    if geometric < min_required {
        min_required
    } else {
        geometric
    }
}
