use std::any::type_name;

use thiserror::Error;

/// Errors that can occur when operating on a [`SimpleVec`][crate::SimpleVec] or
/// an [`OwnedBuffer`][crate::OwnedBuffer].
#[derive(Clone, Debug, Eq, Error, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// Storage for the requested number of slots could not be obtained, either because the
    /// memory allocator refused the request or because the size of the block is not
    /// representable on this platform.
    #[error("unable to allocate storage for {slots} items of {element_type}")]
    AllocationFailure {
        /// The number of slots that were requested. If the requested count itself overflowed
        /// during capacity arithmetic, this is `usize::MAX`.
        slots: usize,

        /// Name of the element type, for diagnostics.
        element_type: &'static str,
    },

    /// A checked accessor was called with an index that does not refer to a live element.
    #[error("index {index} is out of range for a sequence of length {len}")]
    OutOfRange {
        /// The index that was requested.
        index: usize,

        /// The length of the sequence at the time of the request.
        len: usize,
    },
}

impl Error {
    pub(crate) fn allocation_failure<T>(slots: usize) -> Self {
        Self::AllocationFailure {
            slots,
            element_type: type_name::<T>(),
        }
    }
}

/// A specialized `Result` type for sequence operations, returning the crate's
/// [`Error`] type as the error value.
pub(crate) type Result<T> = std::result::Result<T, Error>;
