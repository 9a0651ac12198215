//! # ember_structures - Allocator-Aware Containers
//!
//! Contiguous containers that borrow an engine allocator instead of going
//! through the global heap:
//! - Buffer: growable sequence of plain-data elements
//! - growth: the capacity policy shared by growing containers

#![cfg_attr(not(feature = "std"), no_std)]

pub mod buffer;
pub mod growth;

pub use buffer::Buffer;
pub use growth::next_capacity;

pub mod prelude {
    pub use crate::buffer::Buffer;
    pub use crate::growth::next_capacity;
}
