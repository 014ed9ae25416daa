/// A request to preallocate storage for a number of items, without creating any items.
///
/// Produced by [`reserve()`] and consumed by [`SimpleVec::with_reserved()`][1] or the
/// `From<CapacityRequest>` conversion of [`SimpleVec`][2].
///
/// # Examples
///
/// ```
/// use simple_vec::{SimpleVec, reserve};
///
/// let request = reserve(10);
/// assert_eq!(request.capacity(), 10);
///
/// let items: SimpleVec<u32> = request.into();
/// assert_eq!(items.len(), 0);
/// assert_eq!(items.capacity(), 10);
/// ```
///
/// [1]: crate::SimpleVec::with_reserved
/// [2]: crate::SimpleVec
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct CapacityRequest {
    capacity: usize,
}

impl CapacityRequest {
    /// Creates a request for storage of `capacity` items.
    #[must_use]
    pub const fn new(capacity: usize) -> Self {
        Self { capacity }
    }

    /// The number of items to preallocate storage for.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }
}

/// Creates a [`CapacityRequest`] for `capacity` items.
///
/// This is the shorthand for building a sequence with preallocated storage:
///
/// ```
/// use simple_vec::{SimpleVec, reserve};
///
/// let items = SimpleVec::<u8>::with_reserved(reserve(4));
/// assert_eq!(items.capacity(), 4);
/// ```
#[must_use]
pub const fn reserve(capacity: usize) -> CapacityRequest {
    CapacityRequest::new(capacity)
}
