use std::alloc::{Layout, alloc, dealloc};
use std::any::type_name;
use std::marker::PhantomData;
use std::ptr::{self, NonNull};
use std::{fmt, mem, slice};

use crate::{Error, Result};

/// The sole owner of a fixed number of heap-allocated slots for items of type `T`.
///
/// This is the storage layer underneath [`SimpleVec`][1]. It allocates the block, releases it
/// exactly once when dropped and transfers ownership of it on move. There is no way to duplicate
/// the block: the type is not `Clone`, because a deep copy would require knowing which slots hold
/// live items and only the owner of the buffer knows that.
///
/// # Slot initialization
///
/// The buffer does not track which slots are initialized. Dropping the buffer releases the memory
/// but never drops any items that may still be stored in it; the owner is responsible for dropping
/// (or moving out) the items it has written before the buffer goes away.
///
/// # Zero-sized blocks
///
/// A buffer with zero slots, or with slots for a zero-sized `T`, performs no allocation. The slot
/// count is still recorded, so a buffer for a zero-sized type can report any number of slots.
///
/// # Examples
///
/// ```
/// use simple_vec::OwnedBuffer;
///
/// let mut buffer = OwnedBuffer::<u32>::allocate(3).unwrap();
/// assert_eq!(buffer.slots(), 3);
///
/// // SAFETY: All indexes are within the 3 slots we allocated. We write before we read.
/// unsafe {
///     buffer.write(0, 10);
///     buffer.write(1, 20);
///     buffer.write(2, 30);
///
///     assert_eq!(buffer.slice(3), &[10, 20, 30]);
/// }
///
/// // Ownership moves out of the source, which becomes empty.
/// let mut source = buffer;
/// let moved = source.take();
/// assert_eq!(source.slots(), 0);
/// assert_eq!(moved.slots(), 3);
/// ```
///
/// [1]: crate::SimpleVec
pub struct OwnedBuffer<T> {
    /// Start of the block. This is a dangling (but well-aligned) pointer if nothing is allocated.
    ptr: NonNull<T>,

    /// The number of `T` slots in the block. The memory allocator needs the same layout for
    /// deallocation as was used for allocation, so we cannot forget this.
    slots: usize,

    _owns: PhantomData<T>,
}

impl<T> OwnedBuffer<T> {
    /// Creates an empty buffer that owns nothing.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            ptr: NonNull::dangling(),
            slots: 0,
            _owns: PhantomData,
        }
    }

    /// Allocates a block of `slots` uninitialized slots.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AllocationFailure`] if the size of the block overflows or if the memory
    /// allocator cannot provide the memory.
    pub fn allocate(slots: usize) -> Result<Self> {
        let layout = Self::layout(slots)?;

        if layout.size() == 0 {
            return Ok(Self {
                ptr: NonNull::dangling(),
                slots,
                _owns: PhantomData,
            });
        }

        // SAFETY: The layout must be valid for the target type (sure, we calculate it correctly)
        // and not zero-sized (guarded by the check above).
        let ptr = NonNull::new(unsafe { alloc(layout).cast::<T>() })
            .ok_or_else(|| Error::allocation_failure::<T>(slots))?;

        Ok(Self {
            ptr,
            slots,
            _owns: PhantomData,
        })
    }

    /// Allocates a block of `slots` slots and fills every one of them with `T::default()`.
    ///
    /// The buffer never drops its items, so the caller takes ownership of the `slots` default
    /// items and must eventually drop or move them out.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AllocationFailure`] if the memory cannot be obtained.
    pub fn with_default(slots: usize) -> Result<Self>
    where
        T: Default,
    {
        let mut buffer = Self::allocate(slots)?;

        for index in 0..slots {
            // SAFETY: The index is within the slots we just allocated.
            unsafe {
                buffer.write(index, T::default());
            }
        }

        Ok(buffer)
    }

    fn layout(slots: usize) -> Result<Layout> {
        Layout::array::<T>(slots).map_err(|_overflow| Error::allocation_failure::<T>(slots))
    }

    /// The number of slots in the block.
    #[must_use]
    pub const fn slots(&self) -> usize {
        self.slots
    }

    /// Whether the buffer holds memory obtained from the allocator.
    #[must_use]
    pub const fn is_allocated(&self) -> bool {
        self.slots > 0 && size_of::<T>() > 0
    }

    /// Moves the block out of `self`, leaving an empty buffer behind.
    #[must_use]
    pub fn take(&mut self) -> Self {
        mem::take(self)
    }

    /// Pointer to the first slot. Ownership of the block is not transferred.
    #[must_use]
    pub const fn as_ptr(&self) -> *const T {
        self.ptr.as_ptr()
    }

    /// Mutable pointer to the first slot. Ownership of the block is not transferred.
    #[must_use]
    pub const fn as_mut_ptr(&mut self) -> *mut T {
        self.ptr.as_ptr()
    }

    /// # Safety
    ///
    /// The caller must guarantee that `index` is at most [`slots()`][Self::slots]. An index equal
    /// to the slot count yields the one-past-the-end pointer.
    unsafe fn slot_ptr(&self, index: usize) -> NonNull<T> {
        debug_assert!(
            index <= self.slots,
            "slot {index} is out of bounds in buffer of {} slots of {}",
            self.slots,
            type_name::<T>()
        );

        // SAFETY: Forwarding the bounds requirement to the caller.
        unsafe { self.ptr.add(index) }
    }

    /// Returns a shared reference to the item in slot `index`.
    ///
    /// # Safety
    ///
    /// The caller must guarantee that `index` is less than [`slots()`][Self::slots] and that
    /// the slot holds an initialized item.
    #[must_use]
    pub unsafe fn slot(&self, index: usize) -> &T {
        // SAFETY: Forwarding the bounds requirement to the caller.
        let ptr = unsafe { self.slot_ptr(index) };

        // SAFETY: Forwarding the initialization requirement to the caller.
        unsafe { ptr.as_ref() }
    }

    /// Returns an exclusive reference to the item in slot `index`.
    ///
    /// # Safety
    ///
    /// The caller must guarantee that `index` is less than [`slots()`][Self::slots] and that
    /// the slot holds an initialized item.
    #[must_use]
    pub unsafe fn slot_mut(&mut self, index: usize) -> &mut T {
        // SAFETY: Forwarding the bounds requirement to the caller.
        let mut ptr = unsafe { self.slot_ptr(index) };

        // SAFETY: Forwarding the initialization requirement to the caller. We hold an exclusive
        // reference to the buffer, so nobody else can be holding a reference to the item.
        unsafe { ptr.as_mut() }
    }

    /// Writes `value` into slot `index` without reading or dropping what was there before.
    ///
    /// # Safety
    ///
    /// The caller must guarantee that `index` is less than [`slots()`][Self::slots]. If the slot
    /// already holds an item, that item is leaked.
    pub unsafe fn write(&mut self, index: usize, value: T) {
        // SAFETY: Forwarding the bounds requirement to the caller.
        let ptr = unsafe { self.slot_ptr(index) };

        // SAFETY: The pointer is in bounds, aligned and we hold an exclusive reference.
        unsafe {
            ptr.write(value);
        }
    }

    /// Moves the item out of slot `index`.
    ///
    /// # Safety
    ///
    /// The caller must guarantee that `index` is less than [`slots()`][Self::slots] and that
    /// the slot holds an initialized item. After the call, the slot must be treated as
    /// uninitialized.
    #[must_use]
    pub unsafe fn read(&self, index: usize) -> T {
        // SAFETY: Forwarding the bounds requirement to the caller.
        let ptr = unsafe { self.slot_ptr(index) };

        // SAFETY: Forwarding the initialization requirement to the caller.
        unsafe { ptr.read() }
    }

    /// Returns the first `len` slots as a slice.
    ///
    /// # Safety
    ///
    /// The caller must guarantee that `len` is at most [`slots()`][Self::slots] and that the
    /// first `len` slots hold initialized items.
    #[must_use]
    pub unsafe fn slice(&self, len: usize) -> &[T] {
        debug_assert!(len <= self.slots);

        // SAFETY: Forwarding the bounds and initialization requirements to the caller. The
        // pointer is non-null and aligned even when nothing is allocated.
        unsafe { slice::from_raw_parts(self.ptr.as_ptr(), len) }
    }

    /// Returns the first `len` slots as a mutable slice.
    ///
    /// # Safety
    ///
    /// The caller must guarantee that `len` is at most [`slots()`][Self::slots] and that the
    /// first `len` slots hold initialized items.
    #[must_use]
    pub unsafe fn slice_mut(&mut self, len: usize) -> &mut [T] {
        debug_assert!(len <= self.slots);

        // SAFETY: Forwarding the bounds and initialization requirements to the caller. We hold
        // an exclusive reference to the buffer.
        unsafe { slice::from_raw_parts_mut(self.ptr.as_ptr(), len) }
    }

    /// Returns the `len` slots starting at `index` as a slice.
    ///
    /// # Safety
    ///
    /// The caller must guarantee that the range is within the buffer and holds initialized items.
    pub(crate) unsafe fn range(&self, index: usize, len: usize) -> &[T] {
        // SAFETY: Forwarding the bounds requirement to the caller.
        let start = unsafe { self.slot_ptr(index) };

        // SAFETY: Forwarding the bounds and initialization requirements to the caller.
        unsafe { slice::from_raw_parts(start.as_ptr(), len) }
    }

    /// Moves `count` items from `source` (starting at `source_index`) into this buffer (starting
    /// at `index`) by bitwise copy.
    ///
    /// # Safety
    ///
    /// The caller must guarantee that both ranges are within their buffers and that the source
    /// range holds initialized items. Afterwards, the source slots must be treated as
    /// uninitialized and any items previously in the target slots are leaked.
    pub(crate) unsafe fn move_from(
        &mut self,
        index: usize,
        source: &Self,
        source_index: usize,
        count: usize,
    ) {
        // SAFETY: Forwarding the bounds requirement to the caller.
        let from = unsafe { source.slot_ptr(source_index) };

        // SAFETY: Forwarding the bounds requirement to the caller.
        let to = unsafe { self.slot_ptr(index) };

        // SAFETY: Every buffer is the sole owner of its block and we hold an exclusive reference
        // to `self` while `source` is shared, so the two cannot be the same block.
        unsafe {
            ptr::copy_nonoverlapping(from.as_ptr(), to.as_ptr(), count);
        }
    }

    /// Moves `count` items within the buffer from `from_index` to `to_index`. The ranges may
    /// overlap.
    ///
    /// # Safety
    ///
    /// The caller must guarantee that both ranges are within the buffer and that the source range
    /// holds initialized items. Afterwards, the source slots not covered by the target range must
    /// be treated as uninitialized.
    pub(crate) unsafe fn shift(&mut self, from_index: usize, to_index: usize, count: usize) {
        // SAFETY: Forwarding the bounds requirement to the caller.
        let from = unsafe { self.slot_ptr(from_index) };

        // SAFETY: Forwarding the bounds requirement to the caller.
        let to = unsafe { self.slot_ptr(to_index) };

        // SAFETY: `ptr::copy` is valid for overlapping ranges. Bounds are the caller's problem.
        unsafe {
            ptr::copy(from.as_ptr(), to.as_ptr(), count);
        }
    }

    /// Drops `count` items in place, starting at `index`.
    ///
    /// # Safety
    ///
    /// The caller must guarantee that the range is within the buffer and holds initialized items.
    /// Afterwards, the slots must be treated as uninitialized.
    pub(crate) unsafe fn drop_range(&mut self, index: usize, count: usize) {
        // SAFETY: Forwarding the bounds requirement to the caller.
        let start = unsafe { self.slot_ptr(index) };

        let items = ptr::slice_from_raw_parts_mut(start.as_ptr(), count);

        // SAFETY: Forwarding the initialization requirement to the caller. `drop_in_place` on a
        // slice keeps dropping the remaining items even if one of them panics.
        unsafe {
            ptr::drop_in_place(items);
        }
    }
}

impl<T> Default for OwnedBuffer<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for OwnedBuffer<T> {
    fn drop(&mut self) {
        if !self.is_allocated() {
            return;
        }

        let layout = Self::layout(self.slots)
            .expect("layout was calculable when the block was allocated, so it still is");

        // SAFETY: The layout must match between alloc and dealloc. It does, as it is calculated
        // from the same slot count. We are the sole owner, so nobody else will release it.
        unsafe {
            dealloc(self.ptr.as_ptr().cast(), layout);
        }
    }
}

impl<T> fmt::Debug for OwnedBuffer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OwnedBuffer")
            .field("item_type", &format_args!("{}", type_name::<T>()))
            .field("slots", &self.slots)
            .field("ptr", &self.ptr)
            .finish_non_exhaustive()
    }
}

// SAFETY: Yes, there are raw pointers involved here but nothing inherently non-thread-mobile
// about it, so as long as T itself can move between threads, the buffer can do so, too.
unsafe impl<T: Send> Send for OwnedBuffer<T> {}

// SAFETY: A shared reference to the buffer only ever produces shared references to the items,
// so sharing the buffer is as safe as sharing T.
unsafe impl<T: Sync> Sync for OwnedBuffer<T> {}
