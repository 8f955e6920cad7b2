//! DynArray: a resizable array over a fixed-size backing buffer.
//!
//! DynArray provides indexable storage that:
//! - Is created with an explicit, positive capacity
//! - Appends in amortized O(1), doubling the buffer when it is full
//! - Never shrinks; popping only moves the logical end
//! - Reports allocation failure as [`ArrayError::CapacityOverflow`]
//!   instead of aborting
//! - Treats out-of-range access and popping when empty as caller bugs,
//!   reported through [`ArrayError::PreconditionViolation`]

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

extern crate alloc;

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::{fmt, iter, mem, slice};

/// Errors raised by [`DynArray`] operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ArrayError {
    /// The array was created with a capacity of zero.
    #[error("capacity must be a positive integer")]
    InvalidCapacity,

    /// The buffer could not be allocated at the requested size.
    #[error("cannot allocate a buffer of {requested} elements")]
    CapacityOverflow { requested: usize },

    /// The caller broke an operation's precondition.
    #[error("precondition violated: {0}")]
    PreconditionViolation(Precondition),
}

/// The precondition that was broken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Precondition {
    #[error("index {index} is out of range for size {size}")]
    IndexOutOfRange { index: usize, size: usize },

    #[error("cannot pop from an empty array")]
    EmptyPop,
}

impl From<Precondition> for ArrayError {
    fn from(violation: Precondition) -> Self {
        ArrayError::PreconditionViolation(violation)
    }
}

/// A growable array with explicit capacity management.
///
/// Slots `[0, len)` always hold a value; slots `[len, capacity)` are empty.
/// Equality compares the logical elements only, not the capacity.
#[derive(Clone)]
pub struct DynArray<T> {
    slots: Box<[Option<T>]>,
    len: usize,
}

#[cfg(any(target_arch = "x86_64", target_arch = "aarch64"))]
static_assertions::assert_eq_size!(DynArray<u8>, [usize; 3]);
static_assertions::assert_impl_all!(DynArray<u64>: Send, Sync);

impl<T> DynArray<T> {
    /// Creates an empty array with room for `capacity` elements.
    ///
    /// Returns [`ArrayError::InvalidCapacity`] if `capacity` is zero and
    /// [`ArrayError::CapacityOverflow`] if the buffer cannot be allocated.
    pub fn new(capacity: usize) -> Result<Self, ArrayError> {
        if capacity == 0 {
            return Err(ArrayError::InvalidCapacity);
        }
        Ok(Self {
            slots: empty_slots(capacity)?,
            len: 0,
        })
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Returns the element at `index`.
    pub fn get(&self, index: usize) -> Result<&T, ArrayError> {
        self.check_index(index)?;
        self.slots[index]
            .as_ref()
            .ok_or(ArrayError::from(Precondition::IndexOutOfRange {
                index,
                size: self.len,
            }))
    }

    /// Overwrites the element at `index`.
    pub fn set(&mut self, index: usize, value: T) -> Result<(), ArrayError> {
        self.check_index(index)?;
        self.slots[index] = Some(value);
        Ok(())
    }

    /// Appends `value`, doubling the capacity first if the buffer is full.
    ///
    /// On [`ArrayError::CapacityOverflow`] the array is left unchanged.
    pub fn push_back(&mut self, value: T) -> Result<(), ArrayError> {
        if self.len == self.capacity() {
            self.resize()?;
        }
        self.slots[self.len] = Some(value);
        self.len += 1;
        Ok(())
    }

    /// Removes and returns the last element.
    pub fn pop_back(&mut self) -> Result<T, ArrayError> {
        if self.len == 0 {
            return Err(ArrayError::from(Precondition::EmptyPop));
        }
        self.len -= 1;
        self.slots[self.len]
            .take()
            .ok_or(ArrayError::from(Precondition::EmptyPop))
    }

    /// Doubles the capacity. Elements keep their positions; the new slots are empty.
    ///
    /// On [`ArrayError::CapacityOverflow`] the array is left unchanged.
    #[cold]
    pub fn resize(&mut self) -> Result<(), ArrayError> {
        let old_cap = self.capacity();
        let new_cap = old_cap
            .checked_mul(2)
            .ok_or(ArrayError::CapacityOverflow { requested: usize::MAX })?;
        tracing::trace!(old_cap, new_cap, "growing buffer");

        let mut slots = Vec::new();
        slots
            .try_reserve_exact(new_cap)
            .map_err(|_| ArrayError::CapacityOverflow { requested: new_cap })?;
        slots.extend(mem::take(&mut self.slots).into_vec());
        slots.resize_with(new_cap, || None);
        self.slots = slots.into_boxed_slice();
        Ok(())
    }

    /// Iterates over the elements in `[0, len)`.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            inner: self.slots[..self.len].iter().flatten(),
        }
    }

    fn check_index(&self, index: usize) -> Result<(), Precondition> {
        if index < self.len {
            Ok(())
        } else {
            Err(Precondition::IndexOutOfRange {
                index,
                size: self.len,
            })
        }
    }
}

fn empty_slots<T>(capacity: usize) -> Result<Box<[Option<T>]>, ArrayError> {
    let mut slots = Vec::new();
    slots
        .try_reserve_exact(capacity)
        .map_err(|_| ArrayError::CapacityOverflow {
            requested: capacity,
        })?;
    slots.resize_with(capacity, || None);
    Ok(slots.into_boxed_slice())
}

/// Iterator over the logical elements of a [`DynArray`].
pub struct Iter<'a, T> {
    inner: iter::Flatten<slice::Iter<'a, Option<T>>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }
}

impl<'a, T> IntoIterator for &'a DynArray<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: PartialEq> PartialEq for DynArray<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for DynArray<T> {}

impl<T: fmt::Debug> fmt::Debug for DynArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
