//! Random-access positions over a [`Ring`]'s logical sequence.
//!
//! A cursor borrows its ring and stores a logical index in `0..=len`, where
//! `len` is the one-past-the-end position. Every operation checks the index
//! against the ring as it is at the time of the call. Offsets are not
//! circular: only the physical storage wraps, logical positions never do.
//!
//! Two cursors are compatible when they borrow the same ring instance.
//! Incompatible cursors are never equal and never ordered, and
//! [`Cursor::distance`] between them fails with
//! [`RingError::Incompatible`].

use crate::error::{Result, RingError};
use crate::ring::Ring;
use core::cmp::Ordering;
use core::fmt;
use core::ptr;

fn step_forward(index: usize, len: usize) -> Result<usize> {
    if index >= len {
        return Err(RingError::PastEnd);
    }
    Ok(index + 1)
}

fn step_back(index: usize) -> Result<usize> {
    index.checked_sub(1).ok_or(RingError::BeforeBegin)
}

fn shift(index: usize, len: usize, offset: isize) -> Result<usize> {
    index
        .checked_add_signed(offset)
        .filter(|&target| target <= len)
        .ok_or(RingError::OffsetOutOfBounds)
}

fn negate(offset: isize) -> Result<isize> {
    offset.checked_neg().ok_or(RingError::OffsetOutOfBounds)
}

/// Read-only cursor.
pub struct Cursor<'a, T, const S: usize> {
    ring: &'a Ring<T, S>,
    index: usize,
}

impl<T, const S: usize> Clone for Cursor<'_, T, S> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<T, const S: usize> Copy for Cursor<'_, T, S> {}

impl<'a, T, const S: usize> Cursor<'a, T, S> {
    pub(crate) fn new(ring: &'a Ring<T, S>, index: usize) -> Self {
        Self { ring, index }
    }

    pub fn index(&self) -> usize {
        self.index
    }
    pub fn is_end(&self) -> bool {
        self.index >= self.ring.len()
    }
    pub fn is_compatible(&self, other: &Self) -> bool {
        ptr::eq(self.ring, other.ring)
    }

    /// The element under the cursor. Fails with
    /// [`RingError::InvalidCursor`] when the ring is empty or the cursor is
    /// not on an occupied position.
    pub fn get(&self) -> Result<&'a T> {
        self.ring.get(self.index).ok_or(RingError::InvalidCursor)
    }

    /// The element `offset` positions away, without moving.
    pub fn peek(&self, offset: isize) -> Result<&'a T> {
        self.offset(offset)?.get()
    }

    pub fn move_next(&mut self) -> Result<()> {
        self.index = step_forward(self.index, self.ring.len())?;
        Ok(())
    }
    pub fn move_prev(&mut self) -> Result<()> {
        self.index = step_back(self.index)?;
        Ok(())
    }

    /// Moves forward and returns the position held before the move.
    pub fn post_next(&mut self) -> Result<Self> {
        let previous = *self;
        self.move_next()?;
        Ok(previous)
    }
    pub fn post_prev(&mut self) -> Result<Self> {
        let previous = *self;
        self.move_prev()?;
        Ok(previous)
    }

    /// Moves by a signed offset. The target must lie in `0..=len`.
    pub fn advance(&mut self, offset: isize) -> Result<()> {
        self.index = shift(self.index, self.ring.len(), offset)?;
        Ok(())
    }
    pub fn retreat(&mut self, offset: isize) -> Result<()> {
        self.advance(negate(offset)?)
    }

    pub fn offset(&self, offset: isize) -> Result<Self> {
        let mut moved = *self;
        moved.advance(offset)?;
        Ok(moved)
    }
    pub fn offset_back(&self, offset: isize) -> Result<Self> {
        let mut moved = *self;
        moved.retreat(offset)?;
        Ok(moved)
    }

    /// Signed number of positions from `other` to `self`.
    pub fn distance(&self, other: &Self) -> Result<isize> {
        if !self.is_compatible(other) {
            return Err(RingError::Incompatible);
        }
        Ok(self.index as isize - other.index as isize)
    }
}

impl<T, const S: usize> PartialEq for Cursor<'_, T, S> {
    fn eq(&self, other: &Self) -> bool {
        self.is_compatible(other) && self.index == other.index
    }
}

impl<T, const S: usize> PartialOrd for Cursor<'_, T, S> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.is_compatible(other) {
            Some(self.index.cmp(&other.index))
        } else {
            None
        }
    }
}

impl<T, const S: usize> fmt::Debug for Cursor<'_, T, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("index", &self.index)
            .field("len", &self.ring.len())
            .finish()
    }
}

/// Cursor with write access to the elements. It cannot insert or remove;
/// structural changes go through the ring itself.
pub struct CursorMut<'a, T, const S: usize> {
    ring: &'a mut Ring<T, S>,
    index: usize,
}

impl<'a, T, const S: usize> CursorMut<'a, T, S> {
    pub(crate) fn new(ring: &'a mut Ring<T, S>, index: usize) -> Self {
        Self { ring, index }
    }

    pub fn index(&self) -> usize {
        self.index
    }
    pub fn is_end(&self) -> bool {
        self.index >= self.ring.len()
    }

    /// Read-only view at the same position.
    pub fn as_cursor(&self) -> Cursor<'_, T, S> {
        Cursor::new(&*self.ring, self.index)
    }

    pub fn get(&self) -> Result<&T> {
        self.ring.get(self.index).ok_or(RingError::InvalidCursor)
    }
    pub fn get_mut(&mut self) -> Result<&mut T> {
        self.ring.get_mut(self.index).ok_or(RingError::InvalidCursor)
    }

    pub fn peek(&self, offset: isize) -> Result<&T> {
        let target = shift(self.index, self.ring.len(), offset)?;
        self.ring.get(target).ok_or(RingError::InvalidCursor)
    }
    pub fn peek_mut(&mut self, offset: isize) -> Result<&mut T> {
        let target = shift(self.index, self.ring.len(), offset)?;
        self.ring.get_mut(target).ok_or(RingError::InvalidCursor)
    }

    pub fn move_next(&mut self) -> Result<()> {
        self.index = step_forward(self.index, self.ring.len())?;
        Ok(())
    }
    pub fn move_prev(&mut self) -> Result<()> {
        self.index = step_back(self.index)?;
        Ok(())
    }
    pub fn advance(&mut self, offset: isize) -> Result<()> {
        self.index = shift(self.index, self.ring.len(), offset)?;
        Ok(())
    }
    pub fn retreat(&mut self, offset: isize) -> Result<()> {
        self.advance(negate(offset)?)
    }
}

impl<T, const S: usize> fmt::Debug for CursorMut<'_, T, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CursorMut")
            .field("index", &self.index)
            .field("len", &self.ring.len())
            .finish()
    }
}
