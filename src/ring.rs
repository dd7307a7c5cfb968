//! Fixed-capacity ring buffer with overwrite-on-full semantics.
//!
//! A [`Ring<T, S>`] holds at most `S` elements in an inline array. Pushing
//! into a full ring evicts the oldest element, so the ring always keeps the
//! `S` most recent values:
//!
//! ```rust
//! use bounded_ring::Ring;
//!
//! let mut ring = Ring::from_array([1, 2, 3]);
//! assert_eq!(ring.push_back(4), Some(1));
//! assert_eq!(ring.iter().copied().collect::<Vec<_>>(), vec![2, 3, 4]);
//!
//! assert_eq!(ring.pop_front(), Ok(2));
//! assert_eq!(ring.len(), 2);
//! assert!(ring.at(2).is_err());
//! ```
//!
//! Elements are addressed by *logical* position (`0` is the oldest); the
//! physical slot is `(head + pos) % S`.

use crate::cursor::{Cursor, CursorMut};
use crate::error::{Result, RingError};
use core::fmt;
use core::iter::{Chain, FusedIterator, Take};
use core::ops::{Index, IndexMut};
use core::slice;
use log::trace;

#[derive(Clone)]
pub struct Ring<T, const S: usize> {
    buf: [Option<T>; S],
    head: usize,
    tail: usize,
    size: usize,
}

impl<T, const S: usize> Default for Ring<T, S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const S: usize> Ring<T, S> {
    const NON_ZERO: () = assert!(S > 0, "ring capacity must be non-zero");

    /// An empty ring.
    pub fn new() -> Self {
        let () = Self::NON_ZERO;
        Self {
            buf: [const { None }; S],
            head: 0,
            tail: 0,
            size: 0,
        }
    }

    /// A full ring holding `values` in order, oldest first.
    pub fn from_array(values: [T; S]) -> Self {
        let () = Self::NON_ZERO;
        Self {
            buf: values.map(Some),
            head: 0,
            tail: S - 1,
            size: S,
        }
    }

    /// A full ring with every slot set to `value`.
    pub fn filled(value: T) -> Self
    where
        T: Clone,
    {
        let () = Self::NON_ZERO;
        Self {
            buf: core::array::from_fn(|_| Some(value.clone())),
            head: 0,
            tail: S - 1,
            size: S,
        }
    }

    pub fn len(&self) -> usize {
        self.size
    }
    pub const fn capacity(&self) -> usize {
        S
    }
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }
    pub fn is_full(&self) -> bool {
        self.size == S
    }

    /// Forgets every element. Slots keep their stale values until they are
    /// overwritten or the ring is dropped.
    pub fn clear(&mut self) {
        if self.size > 0 {
            trace!("clearing ring: discarding {} element(s)", self.size);
        }
        self.head = 0;
        self.tail = 0;
        self.size = 0;
    }

    fn physical(&self, pos: usize) -> usize {
        (self.head + pos) % S
    }

    pub fn get(&self, pos: usize) -> Option<&T> {
        if pos < self.size {
            self.buf[self.physical(pos)].as_ref()
        } else {
            None
        }
    }
    pub fn get_mut(&mut self, pos: usize) -> Option<&mut T> {
        if pos < self.size {
            let slot = self.physical(pos);
            self.buf[slot].as_mut()
        } else {
            None
        }
    }

    /// Checked access by logical position.
    pub fn at(&self, pos: usize) -> Result<&T> {
        self.get(pos).ok_or(RingError::OutOfRange)
    }
    pub fn at_mut(&mut self, pos: usize) -> Result<&mut T> {
        self.get_mut(pos).ok_or(RingError::OutOfRange)
    }

    pub fn front(&self) -> Result<&T> {
        if self.is_empty() {
            return Err(RingError::Empty);
        }
        self.buf[self.head].as_ref().ok_or(RingError::Empty)
    }
    pub fn front_mut(&mut self) -> Result<&mut T> {
        if self.is_empty() {
            return Err(RingError::Empty);
        }
        self.buf[self.head].as_mut().ok_or(RingError::Empty)
    }
    pub fn back(&self) -> Result<&T> {
        if self.is_empty() {
            return Err(RingError::Empty);
        }
        self.buf[self.tail].as_ref().ok_or(RingError::Empty)
    }
    pub fn back_mut(&mut self) -> Result<&mut T> {
        if self.is_empty() {
            return Err(RingError::Empty);
        }
        self.buf[self.tail].as_mut().ok_or(RingError::Empty)
    }

    /// Appends `value` as the newest element. When the ring is full the
    /// oldest element is evicted and returned.
    pub fn push_back(&mut self, value: T) -> Option<T> {
        if self.is_empty() {
            // head may have moved on through pops; keep tail == head + size - 1
            self.tail = self.head;
            self.buf[self.tail] = Some(value);
            self.size = 1;
            None
        } else if !self.is_full() {
            self.tail = (self.tail + 1) % S;
            self.buf[self.tail] = Some(value);
            self.size += 1;
            None
        } else {
            self.head = (self.head + 1) % S;
            self.tail = (self.tail + 1) % S;
            trace!("ring full (capacity {S}): evicting oldest element");
            self.buf[self.tail].replace(value)
        }
    }

    /// Removes and returns the oldest element.
    pub fn pop_front(&mut self) -> Result<T> {
        if self.is_empty() {
            return Err(RingError::Empty);
        }
        let value = self.buf[self.head].take().ok_or(RingError::Empty)?;
        self.head = (self.head + 1) % S;
        self.size -= 1;
        Ok(value)
    }

    pub fn cursor_begin(&self) -> Cursor<'_, T, S> {
        Cursor::new(self, 0)
    }
    pub fn cursor_end(&self) -> Cursor<'_, T, S> {
        Cursor::new(self, self.size)
    }
    pub fn cursor_begin_mut(&mut self) -> CursorMut<'_, T, S> {
        CursorMut::new(self, 0)
    }
    pub fn cursor_end_mut(&mut self) -> CursorMut<'_, T, S> {
        let end = self.size;
        CursorMut::new(self, end)
    }

    pub fn iter(&self) -> Iter<'_, T, S> {
        Iter {
            front: self.cursor_begin(),
            back: self.cursor_end(),
        }
    }
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        let (wrapped, from_head) = self.buf.split_at_mut(self.head);
        IterMut {
            inner: from_head.iter_mut().chain(wrapped.iter_mut()).take(self.size),
        }
    }
}

impl<T, const S: usize> From<[T; S]> for Ring<T, S> {
    fn from(values: [T; S]) -> Self {
        Self::from_array(values)
    }
}

impl<T: fmt::Debug, const S: usize> fmt::Debug for Ring<T, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq, const S: usize> PartialEq for Ring<T, S> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}
impl<T: Eq, const S: usize> Eq for Ring<T, S> {}

impl<T, const S: usize> Index<usize> for Ring<T, S> {
    type Output = T;
    fn index(&self, pos: usize) -> &T {
        let len = self.size;
        match self.get(pos) {
            Some(value) => value,
            None => panic!("index {pos} out of range for ring of length {len}"),
        }
    }
}

impl<T, const S: usize> IndexMut<usize> for Ring<T, S> {
    fn index_mut(&mut self, pos: usize) -> &mut T {
        let len = self.size;
        match self.get_mut(pos) {
            Some(value) => value,
            None => panic!("index {pos} out of range for ring of length {len}"),
        }
    }
}

impl<T, const S: usize> Extend<T> for Ring<T, S> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(value);
        }
    }
}

impl<T, const S: usize> FromIterator<T> for Ring<T, S> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut ring = Self::new();
        ring.extend(iter);
        ring
    }
}

/// Borrowing iterator, oldest element first. Walks a begin/end cursor pair
/// towards each other.
pub struct Iter<'a, T, const S: usize> {
    front: Cursor<'a, T, S>,
    back: Cursor<'a, T, S>,
}

impl<T, const S: usize> Clone for Iter<'_, T, S> {
    fn clone(&self) -> Self {
        Self {
            front: self.front,
            back: self.back,
        }
    }
}

impl<'a, T, const S: usize> Iterator for Iter<'a, T, S> {
    type Item = &'a T;
    fn next(&mut self) -> Option<&'a T> {
        if self.front == self.back {
            return None;
        }
        let item = self.front.get().ok()?;
        self.front.move_next().ok()?;
        Some(item)
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back.distance(&self.front).unwrap_or(0).max(0) as usize;
        (remaining, Some(remaining))
    }
}

impl<'a, T, const S: usize> DoubleEndedIterator for Iter<'a, T, S> {
    fn next_back(&mut self) -> Option<&'a T> {
        if self.front == self.back {
            return None;
        }
        self.back.move_prev().ok()?;
        self.back.get().ok()
    }
}

impl<T, const S: usize> ExactSizeIterator for Iter<'_, T, S> {}
impl<T, const S: usize> FusedIterator for Iter<'_, T, S> {}

type SlotsMut<'a, T> = Take<Chain<slice::IterMut<'a, Option<T>>, slice::IterMut<'a, Option<T>>>>;

/// Mutably borrowing iterator, oldest element first.
pub struct IterMut<'a, T> {
    inner: SlotsMut<'a, T>,
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;
    fn next(&mut self) -> Option<&'a mut T> {
        self.inner.next().and_then(Option::as_mut)
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}
impl<T> FusedIterator for IterMut<'_, T> {}

/// Owning iterator; drains the ring from the front.
pub struct IntoIter<T, const S: usize> {
    ring: Ring<T, S>,
}

impl<T, const S: usize> Iterator for IntoIter<T, S> {
    type Item = T;
    fn next(&mut self) -> Option<T> {
        self.ring.pop_front().ok()
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.ring.len(), Some(self.ring.len()))
    }
}

impl<T, const S: usize> ExactSizeIterator for IntoIter<T, S> {}
impl<T, const S: usize> FusedIterator for IntoIter<T, S> {}

impl<T, const S: usize> IntoIterator for Ring<T, S> {
    type Item = T;
    type IntoIter = IntoIter<T, S>;
    fn into_iter(self) -> IntoIter<T, S> {
        IntoIter { ring: self }
    }
}

impl<'a, T, const S: usize> IntoIterator for &'a Ring<T, S> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T, S>;
    fn into_iter(self) -> Iter<'a, T, S> {
        self.iter()
    }
}

impl<'a, T, const S: usize> IntoIterator for &'a mut Ring<T, S> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;
    fn into_iter(self) -> IterMut<'a, T> {
        self.iter_mut()
    }
}
