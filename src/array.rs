// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::fmt::{Debug, Formatter};
use std::ptr;
use std::slice;

use crate::buffer::Buffer;
use crate::error::Error;

/// The capacity used by [`IndexedArray::default()`][default] and
/// [`ArrayStack::new()`][ArrayStack::new].
///
/// [default]: struct.IndexedArray.html#method.default
/// [ArrayStack::new]: struct.ArrayStack.html#method.new
pub const DEFAULT_CAPACITY: usize = 16;

/// A growable array of `A` with positional insertion and removal.
///
/// Elements live in a single contiguous buffer, in insertion order, with no
/// gaps: inserting shifts everything after the insertion point one slot up,
/// removing shifts everything after the removed element one slot down. When
/// an insertion finds the buffer full, the buffer is reallocated at twice
/// its capacity first. The buffer never shrinks, not even on
/// [`clear()`][clear].
///
/// # Example
///
/// ```rust
/// # use indexed_array::IndexedArray;
/// let mut array = IndexedArray::new(2)?;
/// array.add("Zagreb");
/// array.add("Split");
/// array.insert("Rijeka", 1)?;
/// assert_eq!(4, array.capacity());
/// assert_eq!(&["Zagreb", "Rijeka", "Split"], array.as_slice());
/// # Ok::<(), indexed_array::Error>(())
/// ```
///
/// [clear]: #method.clear
pub struct IndexedArray<A> {
    buffer: Buffer<A>,
    size: usize,
}

unsafe impl<A: Send> Send for IndexedArray<A> {}
unsafe impl<A: Sync> Sync for IndexedArray<A> {}

impl<A> IndexedArray<A> {
    /// Construct an empty array with room for `initial_capacity` elements.
    ///
    /// Fails with [`Error::InvalidArgument`][InvalidArgument] if
    /// `initial_capacity` is `0`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use indexed_array::{Error, IndexedArray};
    /// let array: IndexedArray<u64> = IndexedArray::new(8)?;
    /// assert_eq!(8, array.capacity());
    /// assert!(array.is_empty());
    ///
    /// assert_eq!(
    ///     Err(Error::InvalidArgument { capacity: 0 }),
    ///     IndexedArray::<u64>::new(0).map(|_| ())
    /// );
    /// # Ok::<(), Error>(())
    /// ```
    ///
    /// [InvalidArgument]: enum.Error.html#variant.InvalidArgument
    pub fn new(initial_capacity: usize) -> Result<Self, Error> {
        if initial_capacity < 1 {
            return Err(Error::InvalidArgument {
                capacity: initial_capacity,
            });
        }
        Ok(Self {
            buffer: Buffer::new(initial_capacity),
            size: 0,
        })
    }

    /// Test whether the array holds no elements.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Get the number of elements in the array.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Get the number of slots currently allocated.
    ///
    /// This is always at least [`size()`][size] and at least `1`.
    ///
    /// [size]: #method.size
    pub fn capacity(&self) -> usize {
        self.buffer.capacity()
    }

    fn check_index(&self, index: usize) -> Result<(), Error> {
        if index >= self.size {
            Err(Error::IndexOutOfRange {
                index,
                bound: self.size,
            })
        } else {
            Ok(())
        }
    }

    /// Get a reference to the element at `index`.
    ///
    /// Fails with [`Error::IndexOutOfRange`][IndexOutOfRange] unless
    /// `index < self.size()`.
    ///
    /// The reference borrows the array, so it can't be held across a call
    /// that might move the element, like an insertion that reallocates.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use indexed_array::{Error, IndexedArray};
    /// let mut array = IndexedArray::default();
    /// array.add(31337);
    /// assert_eq!(Ok(&31337), array.get(0));
    /// assert_eq!(Err(Error::IndexOutOfRange { index: 1, bound: 1 }), array.get(1));
    /// ```
    ///
    /// [IndexOutOfRange]: enum.Error.html#variant.IndexOutOfRange
    pub fn get(&self, index: usize) -> Result<&A, Error> {
        self.check_index(index)?;
        Ok(unsafe { &*self.buffer.as_ptr().add(index) })
    }

    /// Get a mutable reference to the element at `index`.
    ///
    /// Fails under the same conditions as [`get()`][get].
    ///
    /// [get]: #method.get
    pub fn get_mut(&mut self, index: usize) -> Result<&mut A, Error> {
        self.check_index(index)?;
        Ok(unsafe { &mut *self.buffer.as_ptr().add(index) })
    }

    /// Append a value to the end of the array.
    ///
    /// This is the same as `insert(value, self.size())`, except that it
    /// can't fail: a full buffer is simply reallocated.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use indexed_array::IndexedArray;
    /// let mut array = IndexedArray::new(1)?;
    /// array.add(1);
    /// array.add(2);
    /// assert_eq!(&[1, 2], array.as_slice());
    /// assert_eq!(2, array.capacity());
    /// # Ok::<(), indexed_array::Error>(())
    /// ```
    pub fn add(&mut self, value: A) {
        self.insert_unchecked(value, self.size);
    }

    /// Insert a value so that it ends up at `position`.
    ///
    /// Every element at or after `position` moves one place towards the end.
    /// `position` may equal [`size()`][size], which appends.
    ///
    /// Fails with [`Error::IndexOutOfRange`][IndexOutOfRange] if `position`
    /// is greater than the current size, in which case `value` is dropped
    /// and the array is left alone.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use indexed_array::IndexedArray;
    /// let mut array = IndexedArray::default();
    /// array.add('b');
    /// array.insert('a', 0)?;
    /// array.insert('c', 2)?;
    /// assert_eq!(&['a', 'b', 'c'], array.as_slice());
    /// assert!(array.insert('z', 4).is_err());
    /// # Ok::<(), indexed_array::Error>(())
    /// ```
    ///
    /// [size]: #method.size
    /// [IndexOutOfRange]: enum.Error.html#variant.IndexOutOfRange
    pub fn insert(&mut self, value: A, position: usize) -> Result<(), Error> {
        if position > self.size {
            return Err(Error::IndexOutOfRange {
                index: position,
                bound: self.size + 1,
            });
        }
        self.insert_unchecked(value, position);
        Ok(())
    }

    fn insert_unchecked(&mut self, value: A, position: usize) {
        debug_assert!(position <= self.size);
        if self.size == self.capacity() {
            self.grow();
        }
        unsafe {
            let slot = self.buffer.as_ptr().add(position);
            ptr::copy(slot, slot.add(1), self.size - position);
            slot.write(value);
        }
        self.size += 1;
    }

    fn grow(&mut self) {
        let old_capacity = self.capacity();
        unsafe { self.buffer.double(self.size) };
        tracing::trace!(
            old_capacity,
            new_capacity = self.capacity(),
            size = self.size,
            "grew indexed array storage"
        );
    }

    /// Remove the element at `index` and return it.
    ///
    /// Every element after `index` moves one place towards the front, so
    /// the order of the remaining elements is preserved.
    ///
    /// Fails with [`Error::IndexOutOfRange`][IndexOutOfRange] unless
    /// `index < self.size()`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use indexed_array::IndexedArray;
    /// let mut array = IndexedArray::default();
    /// array.add(1);
    /// array.add(2);
    /// array.add(3);
    /// assert_eq!(Ok(1), array.remove(0));
    /// assert_eq!(&[2, 3], array.as_slice());
    /// ```
    ///
    /// [IndexOutOfRange]: enum.Error.html#variant.IndexOutOfRange
    pub fn remove(&mut self, index: usize) -> Result<A, Error> {
        self.check_index(index)?;
        let value = unsafe {
            let slot = self.buffer.as_ptr().add(index);
            let value = slot.read();
            ptr::copy(slot.add(1), slot, self.size - index - 1);
            value
        };
        self.size -= 1;
        Ok(value)
    }

    /// Find the position of the first element equal to `value`.
    ///
    /// Scans from the front and returns `None` if no element matches.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use indexed_array::IndexedArray;
    /// let mut array = IndexedArray::default();
    /// array.add("a");
    /// array.add("b");
    /// array.add("a");
    /// assert_eq!(Some(0), array.index_of(&"a"));
    /// assert_eq!(None, array.index_of(&"c"));
    /// ```
    pub fn index_of(&self, value: &A) -> Option<usize>
    where
        A: PartialEq,
    {
        self.iter().position(|element| element == value)
    }

    /// Test whether any element is equal to `value`.
    pub fn contains(&self, value: &A) -> bool
    where
        A: PartialEq,
    {
        self.index_of(value).is_some()
    }

    /// Drop every element, leaving the array empty.
    ///
    /// The capacity is unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use indexed_array::IndexedArray;
    /// let mut array = IndexedArray::new(1)?;
    /// array.add(1);
    /// array.add(2);
    /// array.clear();
    /// assert!(array.is_empty());
    /// assert_eq!(2, array.capacity());
    /// # Ok::<(), indexed_array::Error>(())
    /// ```
    pub fn clear(&mut self) {
        let size = self.size;
        // No dropped slot may stay live if a destructor panics.
        self.size = 0;
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(self.buffer.as_ptr(), size));
        }
        tracing::trace!(size, capacity = self.capacity(), "cleared indexed array");
    }

    /// Get the live elements as a slice.
    pub fn as_slice(&self) -> &[A] {
        unsafe { slice::from_raw_parts(self.buffer.as_ptr(), self.size) }
    }

    /// Iterate over the elements from front to back.
    pub fn iter(&self) -> slice::Iter<'_, A> {
        self.as_slice().iter()
    }
}

impl<A> Default for IndexedArray<A> {
    /// Construct an empty array with a capacity of
    /// [`DEFAULT_CAPACITY`][DEFAULT_CAPACITY].
    ///
    /// [DEFAULT_CAPACITY]: constant.DEFAULT_CAPACITY.html
    fn default() -> Self {
        Self {
            buffer: Buffer::new(DEFAULT_CAPACITY),
            size: 0,
        }
    }
}

impl<A> Drop for IndexedArray<A> {
    fn drop(&mut self) {
        if std::mem::needs_drop::<A>() {
            unsafe {
                ptr::drop_in_place(ptr::slice_from_raw_parts_mut(
                    self.buffer.as_ptr(),
                    self.size,
                ));
            }
        }
    }
}

impl<A: Clone> Clone for IndexedArray<A> {
    /// Clone the array, keeping its capacity.
    fn clone(&self) -> Self {
        let mut out = Self {
            buffer: Buffer::new(self.capacity()),
            size: 0,
        };
        for element in self.iter() {
            out.add(element.clone());
        }
        out
    }
}

impl<A: PartialEq> PartialEq for IndexedArray<A> {
    /// Two arrays are equal when they hold equal elements in the same
    /// order. Capacity doesn't count.
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<A: Eq> Eq for IndexedArray<A> {}

impl<A: Debug> Debug for IndexedArray<A> {
    /// Debug implementation for `IndexedArray`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use indexed_array::IndexedArray;
    /// let mut array = IndexedArray::default();
    /// array.add(1);
    /// array.add(2);
    /// assert_eq!("[1, 2]", format!("{:?}", array));
    /// ```
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<'a, A> IntoIterator for &'a IndexedArray<A> {
    type Item = &'a A;
    type IntoIter = slice::Iter<'a, A>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
