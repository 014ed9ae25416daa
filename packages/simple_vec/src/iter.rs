use std::fmt;
use std::iter::FusedIterator;

use crate::OwnedBuffer;

/// An iterator that moves the items out of a [`SimpleVec`][1], from first to last.
///
/// Returned by the `IntoIterator` implementation of [`SimpleVec`][1]. Items that are not
/// consumed are dropped together with the iterator, which also releases the storage.
///
/// # Examples
///
/// ```
/// use simple_vec::simple_vec;
///
/// let items = simple_vec!["a".to_string(), "b".to_string(), "c".to_string()];
///
/// let mut iter = items.into_iter();
/// assert_eq!(iter.next().as_deref(), Some("a"));
/// assert_eq!(iter.next_back().as_deref(), Some("c"));
/// assert_eq!(iter.as_slice(), ["b"]);
/// ```
///
/// [1]: crate::SimpleVec
pub struct IntoIter<T> {
    buffer: OwnedBuffer<T>,

    /// The next slot to yield from the front.
    front: usize,

    /// One past the next slot to yield from the back. The slots `front..back` hold the items
    /// that have not been yielded yet.
    back: usize,
}

impl<T> IntoIter<T> {
    /// Takes ownership of a buffer whose first `len` slots hold initialized items.
    pub(crate) fn new(buffer: OwnedBuffer<T>, len: usize) -> Self {
        debug_assert!(len <= buffer.slots());

        Self {
            buffer,
            front: 0,
            back: len,
        }
    }

    fn remaining(&self) -> usize {
        self.back
            .checked_sub(self.front)
            .expect("front never passes back")
    }

    /// The items that have not been yielded yet.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: The slots `front..back` hold the items that have not been yielded yet.
        unsafe { self.buffer.range(self.front, self.remaining()) }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.front == self.back {
            return None;
        }

        let index = self.front;
        self.front = index.checked_add(1).expect("guarded by front < back");

        // SAFETY: The slot was in `front..back`, so it holds an item that nobody has taken yet.
        // It is now outside that range, so nobody will take it again.
        Some(unsafe { self.buffer.read(index) })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        (remaining, Some(remaining))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        if self.front == self.back {
            return None;
        }

        self.back = self.back.checked_sub(1).expect("guarded by front < back");

        // SAFETY: The slot was in `front..back`, so it holds an item that nobody has taken yet.
        // It is now outside that range, so nobody will take it again.
        Some(unsafe { self.buffer.read(self.back) })
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        let front = self.front;
        let remaining = self.remaining();

        // Forget the items first, so that a panic in a drop cannot lead to a double drop.
        self.front = self.back;

        // SAFETY: The slots `front..front + remaining` held the items nobody has taken.
        unsafe {
            self.buffer.drop_range(front, remaining);
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.as_slice()).finish()
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use static_assertions::assert_impl_all;

    use crate::SimpleVec;

    use super::*;

    assert_impl_all!(IntoIter<u32>: Send, Sync, fmt::Debug, ExactSizeIterator, DoubleEndedIterator);

    struct DropCounter {
        drops: Rc<Cell<usize>>,
    }

    impl Drop for DropCounter {
        fn drop(&mut self) {
            self.drops.set(self.drops.get() + 1);
        }
    }

    #[test]
    fn yields_in_order() {
        let items = SimpleVec::from([1, 2, 3]);

        let collected: Vec<_> = items.into_iter().collect();

        assert_eq!(collected, [1, 2, 3]);
    }

    #[test]
    fn yields_from_both_ends() {
        let mut iter = SimpleVec::from([1, 2, 3, 4]).into_iter();

        assert_eq!(iter.len(), 4);
        assert_eq!(iter.next_back(), Some(4));
        assert_eq!(iter.next(), Some(1));
        assert_eq!(iter.len(), 2);
        assert_eq!(iter.as_slice(), [2, 3]);
        assert_eq!(iter.next_back(), Some(3));
        assert_eq!(iter.next_back(), Some(2));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next_back(), None);
        assert_eq!(iter.len(), 0);
    }

    #[test]
    fn empty_sequence_yields_nothing() {
        let mut iter = SimpleVec::<String>::new().into_iter();

        assert_eq!(iter.size_hint(), (0, Some(0)));
        assert!(iter.next().is_none());
    }

    #[test]
    fn unconsumed_items_dropped_once() {
        let drops = Rc::new(Cell::new(0));

        let mut items = SimpleVec::new();
        for _ in 0..5 {
            items.push_back(DropCounter {
                drops: Rc::clone(&drops),
            });
        }

        let mut iter = items.into_iter();
        drop(iter.next());
        drop(iter.next_back());
        assert_eq!(drops.get(), 2);

        drop(iter);
        assert_eq!(drops.get(), 5);
    }

    #[test]
    fn debug_shows_remaining_items() {
        let mut iter = SimpleVec::from([1, 2, 3]).into_iter();
        _ = iter.next();

        assert_eq!(format!("{iter:?}"), "IntoIter([2, 3])");
    }
}
