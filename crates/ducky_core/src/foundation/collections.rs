//! Specialized collection types

use crate::error::{Classify, ErrorKind};
use std::mem;
use thiserror::Error;

/// Errors raised by [`DynArray`]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ArrayError {
    /// Arrays start with room for at least one element
    #[error("Initial capacity must be at least 1")]
    ZeroCapacity,

    /// Zero-sized element types have no stride
    #[error("Element type `{0}` has zero size")]
    ZeroSizedElement(&'static str),

    /// Index past the last element
    #[error("Index {index} out of bounds for length {len}")]
    IndexOutOfBounds {
        /// Requested index
        index: usize,
        /// Length at the time of the access
        len: usize,
    },

    /// Backing storage could not be allocated
    #[error("Failed to allocate storage for {requested} elements")]
    Allocation {
        /// Capacity that was requested
        requested: usize,
    },
}

impl Classify for ArrayError {
    fn kind(&self) -> ErrorKind {
        match self {
            Self::ZeroCapacity | Self::ZeroSizedElement(_) => ErrorKind::Failure,
            Self::IndexOutOfBounds { .. } => ErrorKind::IndexOutOfBounds,
            Self::Allocation { .. } => ErrorKind::MemoryFailure,
        }
    }
}

/// Growable array with an explicit doubling growth policy
///
/// Elements are stored contiguously. When the array is full, capacity
/// doubles before the next element is written, so after growing from an
/// initial capacity `C` the capacity is always `C * 2^k`. Failed growth leaves
/// the array untouched.
///
/// [`swap_remove`](Self::swap_remove) is O(1) but moves the last element into
/// the vacated slot; [`remove`](Self::remove) keeps order at O(n). Both shrink
/// the storage to the new length.
#[derive(Debug, Clone)]
pub struct DynArray<T> {
    items: Vec<T>,
    capacity: usize,
}

impl<T> DynArray<T> {
    /// Create an empty array with room for `initial_capacity` elements
    pub fn with_capacity(initial_capacity: usize) -> Result<Self, ArrayError> {
        if mem::size_of::<T>() == 0 {
            return Err(ArrayError::ZeroSizedElement(std::any::type_name::<T>()));
        }
        if initial_capacity == 0 {
            return Err(ArrayError::ZeroCapacity);
        }

        let mut items = Vec::new();
        items
            .try_reserve_exact(initial_capacity)
            .map_err(|_| ArrayError::Allocation { requested: initial_capacity })?;

        Ok(Self {
            items,
            capacity: initial_capacity,
        })
    }

    /// Append an element, doubling capacity first if the array is full
    pub fn push(&mut self, element: T) -> Result<(), ArrayError> {
        if self.items.len() == self.capacity {
            self.grow()?;
        }
        self.items.push(element);
        Ok(())
    }

    /// Element at `index`
    pub fn get(&self, index: usize) -> Result<&T, ArrayError> {
        let len = self.items.len();
        self.items
            .get(index)
            .ok_or(ArrayError::IndexOutOfBounds { index, len })
    }

    /// Mutable element at `index`
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, ArrayError> {
        let len = self.items.len();
        self.items
            .get_mut(index)
            .ok_or(ArrayError::IndexOutOfBounds { index, len })
    }

    /// Remove the element at `index`, moving the last element into its place
    pub fn swap_remove(&mut self, index: usize) -> Result<T, ArrayError> {
        self.check_index(index)?;
        let removed = self.items.swap_remove(index);
        self.shrink();
        Ok(removed)
    }

    /// Remove the element at `index`, shifting later elements down
    pub fn remove(&mut self, index: usize) -> Result<T, ArrayError> {
        self.check_index(index)?;
        let removed = self.items.remove(index);
        self.shrink();
        Ok(removed)
    }

    /// Drop every element, keeping the current capacity
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Number of elements
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the array holds no elements
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of elements the array holds before it grows
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Stride between elements in bytes
    pub const fn element_size(&self) -> usize {
        mem::size_of::<T>()
    }

    /// Elements as a slice
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Iterate over elements in order
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Iterate mutably over elements in order
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.items.iter_mut()
    }

    fn check_index(&self, index: usize) -> Result<(), ArrayError> {
        let len = self.items.len();
        if index >= len {
            return Err(ArrayError::IndexOutOfBounds { index, len });
        }
        Ok(())
    }

    fn grow(&mut self) -> Result<(), ArrayError> {
        let requested = self
            .capacity
            .checked_mul(2)
            .ok_or(ArrayError::Allocation { requested: usize::MAX })?;

        self.items
            .try_reserve_exact(requested - self.items.len())
            .map_err(|_| ArrayError::Allocation { requested })?;

        log::trace!("DynArray grew from {} to {} elements", self.capacity, requested);
        self.capacity = requested;
        Ok(())
    }

    fn shrink(&mut self) {
        self.capacity = self.items.len().max(1);
        self.items.shrink_to(self.capacity);
    }
}

impl<'a, T> IntoIterator for &'a DynArray<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T> IntoIterator for DynArray<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}
