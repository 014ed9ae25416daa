use std::any::type_name;
use std::borrow::{Borrow, BorrowMut};
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};
use std::ops::{Deref, DerefMut, Index, IndexMut};
use std::slice::{self, SliceIndex};
use std::{fmt, mem};

use crate::{CapacityRequest, Error, IntoIter, OwnedBuffer, Result, reserve};

/// A growable, contiguous sequence of items of type `T`.
///
/// The sequence exclusively owns one [`OwnedBuffer<T>`] and keeps track of how many of the
/// buffer's slots hold live items:
///
/// * The length ([`len()`][1]) is the number of live items. They always occupy the slots
///   `0..len`.
/// * The capacity ([`capacity()`][2]) is the number of slots in the buffer. The slots
///   `len..capacity` are allocated but hold nothing.
///
/// When an append or insert finds the buffer full, the sequence allocates a new buffer with double
/// the capacity (or 1 slot if the capacity was zero), moves the items over and releases the old
/// buffer. Removing items never shrinks the capacity.
///
/// # Allocation failure
///
/// Operations that may need to allocate come in a panicking form and a `try_` form. The `try_`
/// form returns [`Error::AllocationFailure`] and leaves the sequence exactly as it was before the
/// call, because the new buffer is always fully obtained before any item moves.
///
/// # Access
///
/// The sequence dereferences to `[T]`, so all the usual slice methods (`iter()`, `first()`,
/// `get_unchecked()`, `sort()` and so on) are available. Indexing with `[]` panics if the index is
/// out of bounds, whereas [`at()`][3] reports [`Error::OutOfRange`] instead.
///
/// # Examples
///
/// ```
/// use simple_vec::SimpleVec;
///
/// let mut items = SimpleVec::new();
/// items.push_back(1);
/// items.push_back(2);
/// items.push_back(3);
/// assert_eq!(items, [1, 2, 3]);
///
/// assert_eq!(items.erase(1), 2);
/// assert_eq!(items, [1, 3]);
///
/// *items.insert(1, 5) += 1;
/// assert_eq!(items, [1, 6, 3]);
///
/// assert_eq!(items.pop_back(), Some(3));
/// assert_eq!(items, [1, 6]);
/// ```
///
/// [1]: Self::len
/// [2]: Self::capacity
/// [3]: Self::at
pub struct SimpleVec<T> {
    buffer: OwnedBuffer<T>,

    /// The number of live items, stored in the slots `0..len` of the buffer.
    len: usize,
}

impl<T> SimpleVec<T> {
    /// Creates an empty sequence. Does not allocate.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            buffer: OwnedBuffer::new(),
            len: 0,
        }
    }

    /// Creates an empty sequence with storage for `capacity` items.
    ///
    /// # Panics
    ///
    /// Panics if the memory cannot be obtained.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_reserved(reserve(capacity))
    }

    /// Creates an empty sequence with the storage described by a [`CapacityRequest`].
    ///
    /// # Panics
    ///
    /// Panics if the memory cannot be obtained.
    ///
    /// # Examples
    ///
    /// ```
    /// use simple_vec::{SimpleVec, reserve};
    ///
    /// let items = SimpleVec::<u64>::with_reserved(reserve(5));
    /// assert_eq!(items.len(), 0);
    /// assert_eq!(items.capacity(), 5);
    /// ```
    #[must_use]
    pub fn with_reserved(request: CapacityRequest) -> Self {
        unwrap_allocation(Self::try_with_reserved(request))
    }

    /// Creates an empty sequence with the storage described by a [`CapacityRequest`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::AllocationFailure`] if the memory cannot be obtained.
    pub fn try_with_reserved(request: CapacityRequest) -> Result<Self> {
        Ok(Self {
            buffer: OwnedBuffer::allocate(request.capacity())?,
            len: 0,
        })
    }

    /// Creates a sequence of `len` default items. The capacity equals the length.
    ///
    /// # Panics
    ///
    /// Panics if the memory cannot be obtained.
    #[must_use]
    pub fn with_len(len: usize) -> Self
    where
        T: Default,
    {
        Self {
            buffer: unwrap_allocation(OwnedBuffer::with_default(len)),
            len,
        }
    }

    /// Creates a sequence of `len` clones of `value`. The capacity equals the length.
    ///
    /// # Panics
    ///
    /// Panics if the memory cannot be obtained.
    #[must_use]
    pub fn from_elem(len: usize, value: T) -> Self
    where
        T: Clone,
    {
        let mut result = Self::with_capacity(len);

        if len == 0 {
            return result;
        }

        for _ in 1..len {
            // SAFETY: We allocated room for `len` items and push exactly `len` items in total.
            unsafe {
                result.push_unchecked(value.clone());
            }
        }

        // The last one gets the original instead of a clone.
        // SAFETY: We allocated room for `len` items and push exactly `len` items in total.
        unsafe {
            result.push_unchecked(value);
        }

        result
    }

    /// The number of items in the sequence.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// The number of items the sequence can hold before it needs to grow its storage.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.buffer.slots()
    }

    /// Whether the sequence holds no items.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The live items as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: The first `len` slots always hold initialized items and `len <= capacity`.
        unsafe { self.buffer.slice(self.len) }
    }

    /// The live items as a mutable slice.
    #[must_use]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: The first `len` slots always hold initialized items and `len <= capacity`.
        unsafe { self.buffer.slice_mut(self.len) }
    }

    /// Pointer to the first item. Ownership of the storage is not transferred.
    #[must_use]
    pub const fn as_ptr(&self) -> *const T {
        self.buffer.as_ptr()
    }

    /// Iterates over shared references to the items, from first to last.
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Iterates over exclusive references to the items, from first to last.
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }

    /// Returns a reference to the item at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if `index` is not less than the length.
    ///
    /// # Examples
    ///
    /// ```
    /// use simple_vec::{Error, simple_vec};
    ///
    /// let items = simple_vec!['a', 'b'];
    /// assert_eq!(items.at(1), Ok(&'b'));
    /// assert_eq!(items.at(2), Err(Error::OutOfRange { index: 2, len: 2 }));
    /// ```
    pub fn at(&self, index: usize) -> Result<&T> {
        let len = self.len;

        self.as_slice()
            .get(index)
            .ok_or(Error::OutOfRange { index, len })
    }

    /// Returns an exclusive reference to the item at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if `index` is not less than the length.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T> {
        let len = self.len;

        self.as_mut_slice()
            .get_mut(index)
            .ok_or(Error::OutOfRange { index, len })
    }

    /// Ensures the capacity is at least `new_capacity`, growing the storage to exactly that
    /// capacity if it is currently smaller. Never shrinks the capacity.
    ///
    /// # Panics
    ///
    /// Panics if the memory cannot be obtained.
    pub fn reserve(&mut self, new_capacity: usize) {
        unwrap_allocation(self.try_reserve(new_capacity));
    }

    /// Ensures the capacity is at least `new_capacity`, growing the storage to exactly that
    /// capacity if it is currently smaller. Never shrinks the capacity.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AllocationFailure`] if the memory cannot be obtained. The sequence is
    /// unchanged in that case.
    pub fn try_reserve(&mut self, new_capacity: usize) -> Result<()> {
        if new_capacity <= self.capacity() {
            return Ok(());
        }

        self.reallocate(new_capacity)
    }

    /// Appends an item to the end of the sequence, doubling the capacity if it is full.
    ///
    /// # Panics
    ///
    /// Panics if the memory cannot be obtained.
    pub fn push_back(&mut self, value: T) {
        unwrap_allocation(self.try_push_back(value));
    }

    /// Appends an item to the end of the sequence, doubling the capacity if it is full.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AllocationFailure`] if the memory cannot be obtained. The sequence is
    /// unchanged in that case and `value` is dropped.
    pub fn try_push_back(&mut self, value: T) -> Result<()> {
        if self.len == self.capacity() {
            self.reallocate(self.grown_capacity()?)?;
        }

        // SAFETY: We ensured above that there is at least one vacant slot.
        unsafe {
            self.push_unchecked(value);
        }

        #[cfg(debug_assertions)]
        self.integrity_check();

        Ok(())
    }

    /// Inserts an item before the item at `index`, shifting all items after it one position
    /// towards the end. An index equal to the length appends.
    ///
    /// Returns a reference to the inserted item.
    ///
    /// # Panics
    ///
    /// Panics if `index` is greater than the length or if the memory cannot be obtained.
    pub fn insert(&mut self, index: usize, value: T) -> &mut T {
        unwrap_allocation(self.try_insert(index, value))
    }

    /// Inserts an item before the item at `index`, shifting all items after it one position
    /// towards the end. An index equal to the length appends.
    ///
    /// Returns a reference to the inserted item.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AllocationFailure`] if the memory cannot be obtained. The sequence is
    /// unchanged in that case and `value` is dropped.
    ///
    /// # Panics
    ///
    /// Panics if `index` is greater than the length.
    pub fn try_insert(&mut self, index: usize, value: T) -> Result<&mut T> {
        assert!(
            index <= self.len,
            "insert index {index} is out of bounds for length {} in SimpleVec of {}",
            self.len,
            type_name::<T>()
        );

        let tail_len = self
            .len
            .checked_sub(index)
            .expect("guarded by index <= len assertion above");

        if self.len == self.capacity() {
            let mut new_buffer = OwnedBuffer::allocate(self.grown_capacity()?)?;

            let tail_target = index
                .checked_add(1)
                .expect("guarded by index <= len < new capacity");

            // SAFETY: The old buffer holds `len` initialized items and the new one has room for
            // more than `len` items. The head keeps its position, the tail moves one slot right,
            // leaving slot `index` vacant for the new item.
            unsafe {
                new_buffer.move_from(0, &self.buffer, 0, index);
            }

            // SAFETY: See above.
            unsafe {
                new_buffer.move_from(tail_target, &self.buffer, index, tail_len);
            }

            // The old buffer only releases its memory here; its items now live in the new one.
            self.buffer = new_buffer;
        } else {
            let tail_target = index
                .checked_add(1)
                .expect("guarded by index <= len < capacity");

            // SAFETY: There is at least one vacant slot at the end, so the tail fits after
            // moving it one slot towards the end. `shift()` handles the overlap.
            unsafe {
                self.buffer.shift(index, tail_target, tail_len);
            }
        }

        // SAFETY: Slot `index` is in bounds and whatever it held has been moved away above.
        unsafe {
            self.buffer.write(index, value);
        }

        self.len = self
            .len
            .checked_add(1)
            .expect("guarded by len < capacity <= usize::MAX");

        #[cfg(debug_assertions)]
        self.integrity_check();

        // SAFETY: We just wrote an item into slot `index`.
        Ok(unsafe { self.buffer.slot_mut(index) })
    }

    /// Removes and returns the item at `index`, shifting all items after it one position towards
    /// the start. The capacity is unchanged.
    ///
    /// After the call, the item that followed the removed one (if any) is at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not less than the length.
    pub fn erase(&mut self, index: usize) -> T {
        assert!(
            index < self.len,
            "erase index {index} is out of bounds for length {} in SimpleVec of {}",
            self.len,
            type_name::<T>()
        );

        let next = index
            .checked_add(1)
            .expect("guarded by index < len assertion above");
        let tail_len = self
            .len
            .checked_sub(next)
            .expect("guarded by index < len assertion above");

        // SAFETY: `index < len`, so the slot holds an initialized item. The gap it leaves is
        // filled by the tail right below.
        let removed = unsafe { self.buffer.read(index) };

        // SAFETY: The tail `next..len` is initialized and moving it one slot towards the start
        // keeps it within `index..len - 1`.
        unsafe {
            self.buffer.shift(next, index, tail_len);
        }

        self.len = self
            .len
            .checked_sub(1)
            .expect("guarded by index < len assertion above");

        #[cfg(debug_assertions)]
        self.integrity_check();

        removed
    }

    /// Removes and returns the last item, or returns `None` if the sequence is empty.
    pub fn pop_back(&mut self) -> Option<T> {
        let last = self.len.checked_sub(1)?;

        self.len = last;

        // SAFETY: The slot held the last live item. It is now beyond the length, so nothing
        // else will read it again.
        Some(unsafe { self.buffer.read(last) })
    }

    /// Changes the length to `new_len`, filling new positions with default items or dropping the
    /// items beyond the new length.
    ///
    /// If `new_len` exceeds the capacity, the storage grows to a capacity of twice `new_len`.
    ///
    /// # Panics
    ///
    /// Panics if the memory cannot be obtained.
    pub fn resize(&mut self, new_len: usize)
    where
        T: Default,
    {
        unwrap_allocation(self.try_resize(new_len));
    }

    /// Changes the length to `new_len`, filling new positions with default items or dropping the
    /// items beyond the new length.
    ///
    /// If `new_len` exceeds the capacity, the storage grows to a capacity of twice `new_len`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AllocationFailure`] if the memory cannot be obtained. The sequence is
    /// unchanged in that case.
    pub fn try_resize(&mut self, new_len: usize) -> Result<()>
    where
        T: Default,
    {
        if new_len > self.capacity() {
            let new_capacity = new_len
                .checked_mul(2)
                .ok_or_else(|| Error::allocation_failure::<T>(usize::MAX))?;

            self.reallocate(new_capacity)?;
        }

        if new_len > self.len {
            while self.len < new_len {
                // SAFETY: `new_len <= capacity` is guaranteed by the growth above.
                unsafe {
                    self.push_unchecked(T::default());
                }
            }
        } else {
            self.truncate(new_len);
        }

        #[cfg(debug_assertions)]
        self.integrity_check();

        Ok(())
    }

    /// Drops all items beyond the first `new_len`. Does nothing if the sequence is not longer
    /// than `new_len`. The capacity is unchanged.
    pub fn truncate(&mut self, new_len: usize) {
        let Some(excess) = self.len.checked_sub(new_len) else {
            return;
        };

        // Shrink first, so that a panic in a drop cannot lead to any item being dropped twice.
        self.len = new_len;

        // SAFETY: The slots `new_len..new_len + excess` held live items and are now beyond the
        // length, so nothing else will touch them.
        unsafe {
            self.buffer.drop_range(new_len, excess);
        }
    }

    /// Drops all items. The capacity is unchanged.
    pub fn clear(&mut self) {
        self.truncate(0);
    }

    /// Exchanges the contents of two sequences without moving any items.
    ///
    /// This is the same as `std::mem::swap(self, other)`.
    pub fn swap_with(&mut self, other: &mut Self) {
        mem::swap(&mut self.buffer, &mut other.buffer);
        mem::swap(&mut self.len, &mut other.len);
    }

    /// Creates a deep copy of the sequence with the same capacity.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AllocationFailure`] if the memory cannot be obtained.
    pub fn try_clone(&self) -> Result<Self>
    where
        T: Clone,
    {
        let mut copy = Self::try_with_reserved(reserve(self.capacity()))?;

        for item in self {
            // SAFETY: The copy has the same capacity as `self`, which is at least `len`.
            unsafe {
                copy.push_unchecked(item.clone());
            }
        }

        Ok(copy)
    }

    /// # Safety
    ///
    /// The caller must guarantee that the length is less than the capacity.
    unsafe fn push_unchecked(&mut self, value: T) {
        debug_assert!(self.len < self.capacity());

        // SAFETY: Forwarding the vacant slot requirement to the caller.
        unsafe {
            self.buffer.write(self.len, value);
        }

        self.len = self
            .len
            .checked_add(1)
            .expect("guarded by len < capacity <= usize::MAX");
    }

    fn grown_capacity(&self) -> Result<usize> {
        match self.capacity() {
            0 => Ok(1),
            capacity => capacity
                .checked_mul(2)
                .ok_or_else(|| Error::allocation_failure::<T>(usize::MAX)),
        }
    }

    /// Moves all items into a new buffer of `new_capacity` slots. Nothing changes if the
    /// allocation fails.
    fn reallocate(&mut self, new_capacity: usize) -> Result<()> {
        debug_assert!(new_capacity >= self.len);

        let mut new_buffer = OwnedBuffer::allocate(new_capacity)?;

        // SAFETY: The old buffer holds `len` initialized items and the new buffer has room for
        // at least `len` items.
        unsafe {
            new_buffer.move_from(0, &self.buffer, 0, self.len);
        }

        // The old buffer only releases its memory here; its items now live in the new one.
        self.buffer = new_buffer;

        Ok(())
    }

    #[cfg_attr(test, mutants::skip)] // This is essentially test logic, mutation is meaningless.
    #[cfg(debug_assertions)]
    fn integrity_check(&self) {
        assert!(
            self.len <= self.capacity(),
            "length {} exceeds capacity {} in SimpleVec of {}",
            self.len,
            self.capacity(),
            type_name::<T>()
        );
    }
}

/// Panics on allocation failure, for the operations that do not surface it to the caller.
#[track_caller]
fn unwrap_allocation<R>(result: Result<R>) -> R {
    match result {
        Ok(value) => value,
        Err(error) => panic!(
            "{error} - we do not intend to handle allocation failure as a real possibility here, OOM is panic"
        ),
    }
}

impl<T> Default for SimpleVec<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for SimpleVec<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T: Clone> Clone for SimpleVec<T> {
    fn clone(&self) -> Self {
        unwrap_allocation(self.try_clone())
    }

    fn clone_from(&mut self, source: &Self) {
        // `self` is untouched until the copy is complete.
        let mut copy = source.clone();
        self.swap_with(&mut copy);
    }
}

impl<T: fmt::Debug> fmt::Debug for SimpleVec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Deref for SimpleVec<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> DerefMut for SimpleVec<T> {
    fn deref_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T, I: SliceIndex<[T]>> Index<I> for SimpleVec<T> {
    type Output = I::Output;

    fn index(&self, index: I) -> &Self::Output {
        self.as_slice().index(index)
    }
}

impl<T, I: SliceIndex<[T]>> IndexMut<I> for SimpleVec<T> {
    fn index_mut(&mut self, index: I) -> &mut Self::Output {
        self.as_mut_slice().index_mut(index)
    }
}

impl<T> AsRef<[T]> for SimpleVec<T> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> AsMut<[T]> for SimpleVec<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T> Borrow<[T]> for SimpleVec<T> {
    fn borrow(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> BorrowMut<[T]> for SimpleVec<T> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T: PartialEq<U>, U> PartialEq<SimpleVec<U>> for SimpleVec<T> {
    fn eq(&self, other: &SimpleVec<U>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: PartialEq<U>, U, const N: usize> PartialEq<[U; N]> for SimpleVec<T> {
    fn eq(&self, other: &[U; N]) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: PartialEq<U>, U> PartialEq<&[U]> for SimpleVec<T> {
    fn eq(&self, other: &&[U]) -> bool {
        self.as_slice() == *other
    }
}

impl<T: PartialEq<U>, U> PartialEq<Vec<U>> for SimpleVec<T> {
    fn eq(&self, other: &Vec<U>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for SimpleVec<T> {}

impl<T: PartialOrd> PartialOrd for SimpleVec<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.as_slice().partial_cmp(other.as_slice())
    }
}

impl<T: Ord> Ord for SimpleVec<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}

impl<T: Hash> Hash for SimpleVec<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}

impl<T> From<CapacityRequest> for SimpleVec<T> {
    fn from(request: CapacityRequest) -> Self {
        Self::with_reserved(request)
    }
}

impl<T, const N: usize> From<[T; N]> for SimpleVec<T> {
    fn from(items: [T; N]) -> Self {
        let mut result = Self::with_capacity(N);

        for item in items {
            // SAFETY: We allocated room for exactly the N items of the array.
            unsafe {
                result.push_unchecked(item);
            }
        }

        result
    }
}

impl<T: Clone> From<&[T]> for SimpleVec<T> {
    fn from(items: &[T]) -> Self {
        let mut result = Self::with_capacity(items.len());

        for item in items {
            // SAFETY: We allocated room for exactly the items of the slice.
            unsafe {
                result.push_unchecked(item.clone());
            }
        }

        result
    }
}

impl<T> From<Vec<T>> for SimpleVec<T> {
    fn from(items: Vec<T>) -> Self {
        let mut result = Self::with_capacity(items.len());

        for item in items {
            // SAFETY: We allocated room for exactly the items of the Vec.
            unsafe {
                result.push_unchecked(item);
            }
        }

        result
    }
}

impl<T> FromIterator<T> for SimpleVec<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut result = Self::new();
        result.extend(iter);
        result
    }
}

impl<T> Extend<T> for SimpleVec<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();

        let (lower_bound, _) = iter.size_hint();
        let required = self.len.saturating_add(lower_bound);

        if required > self.capacity() {
            // Same doubling as `push_back()`, unless the batch needs even more.
            let new_capacity = self
                .grown_capacity()
                .map_or(required, |grown| grown.max(required));

            self.reserve(new_capacity);
        }

        for item in iter {
            self.push_back(item);
        }
    }
}

impl<'a, T: Copy + 'a> Extend<&'a T> for SimpleVec<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl<'a, T> IntoIterator for &'a SimpleVec<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut SimpleVec<T> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T> IntoIterator for SimpleVec<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(mut self) -> Self::IntoIter {
        // We leave `self` empty, so its drop has nothing left to do.
        let len = mem::replace(&mut self.len, 0);

        IntoIter::new(self.buffer.take(), len)
    }
}
