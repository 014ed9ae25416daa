#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! A growable, contiguous, indexable sequence built on top of an exclusively owned heap buffer.
//!
//! This package is split into two layers:
//!
//! * [`OwnedBuffer<T>`] - the sole owner of a fixed number of heap-allocated slots for `T`. It
//!   allocates, releases and transfers ownership of the block but does not know which slots hold
//!   live values. It is move-only; there is no way to duplicate the block.
//! * [`SimpleVec<T>`] - the user-facing container. It owns one [`OwnedBuffer<T>`], tracks how many
//!   of the slots hold live values (the length) and grows the buffer on demand with amortized
//!   constant-time appends.
//!
//! This is part of the [Folo project](https://github.com/folo-rs/folo) that provides mechanisms for
//! high-performance hardware-aware programming in Rust.
//!
//! # Example
//!
//! ```
//! use simple_vec::simple_vec;
//!
//! let mut items = simple_vec![1, 2, 3];
//! assert_eq!(items.len(), 3);
//! assert_eq!(items.capacity(), 3);
//!
//! // Growing past the capacity doubles it.
//! items.push_back(4);
//! assert_eq!(items.capacity(), 6);
//!
//! items.erase(1);
//! items.insert(1, 5);
//! assert_eq!(items, [1, 5, 3, 4]);
//!
//! // Checked access reports an error instead of panicking.
//! assert!(items.at(4).is_err());
//! assert_eq!(items.at(3).copied().ok(), Some(4));
//! ```
//!
//! # Reserving capacity up front
//!
//! The [`reserve()`] function produces a [`CapacityRequest`] that can be turned into an empty
//! sequence with preallocated storage:
//!
//! ```
//! use simple_vec::{SimpleVec, reserve};
//!
//! let items = SimpleVec::<String>::from(reserve(16));
//! assert!(items.is_empty());
//! assert_eq!(items.capacity(), 16);
//! ```
//!
//! # Allocation failure
//!
//! Every operation that may need to grow the storage comes in two forms. The plain form (e.g.
//! [`SimpleVec::push_back()`]) panics if memory cannot be obtained. The `try_` form (e.g.
//! [`SimpleVec::try_push_back()`]) returns [`Error::AllocationFailure`] and leaves the sequence
//! exactly as it was before the call.
//!
//! # Positions
//!
//! Positions are plain indices into the sequence. Any operation that grows, shifts or shrinks the
//! sequence requires an exclusive reference, so the borrow checker guarantees that no reference
//! or iterator into the old element range is still alive when the elements move.

mod buffer;
mod capacity;
mod error;
mod iter;
mod macros;
mod vec;

pub use buffer::*;
pub use capacity::*;
pub use error::*;
pub use iter::*;
pub use vec::*;
