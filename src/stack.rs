// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use crate::array::IndexedArray;
use crate::error::Error;

/// A last-in-first-out stack backed by an [`IndexedArray`][IndexedArray].
///
/// The top of the stack is the last element of the array, so pushing and
/// popping never shift anything.
///
/// # Example
///
/// ```rust
/// # use indexed_array::ArrayStack;
/// let mut stack = ArrayStack::new();
/// stack.push(1);
/// stack.push(2);
/// assert_eq!(Ok(&2), stack.peek());
/// assert_eq!(Ok(2), stack.pop());
/// assert_eq!(Ok(1), stack.pop());
/// assert!(stack.pop().is_err());
/// ```
///
/// [IndexedArray]: struct.IndexedArray.html
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct ArrayStack<A> {
    array: IndexedArray<A>,
}

impl<A> ArrayStack<A> {
    /// Construct an empty stack with the
    /// [default capacity](constant.DEFAULT_CAPACITY.html).
    pub fn new() -> Self {
        Self {
            array: IndexedArray::default(),
        }
    }

    /// Construct an empty stack with room for `capacity` elements before it
    /// has to grow.
    ///
    /// Fails with [`Error::InvalidArgument`][InvalidArgument] if `capacity`
    /// is `0`.
    ///
    /// [InvalidArgument]: enum.Error.html#variant.InvalidArgument
    pub fn with_capacity(capacity: usize) -> Result<Self, Error> {
        Ok(Self {
            array: IndexedArray::new(capacity)?,
        })
    }

    /// Test whether the stack is empty.
    pub fn is_empty(&self) -> bool {
        self.array.is_empty()
    }

    /// Get the number of elements on the stack.
    pub fn size(&self) -> usize {
        self.array.size()
    }

    /// Push a value onto the top of the stack.
    pub fn push(&mut self, value: A) {
        self.array.add(value);
    }

    /// Get a reference to the top of the stack without removing it.
    ///
    /// Fails with [`Error::EmptyContainer`][EmptyContainer] if the stack is
    /// empty.
    ///
    /// [EmptyContainer]: enum.Error.html#variant.EmptyContainer
    pub fn peek(&self) -> Result<&A, Error> {
        if self.is_empty() {
            return Err(Error::EmptyContainer);
        }
        self.array.get(self.size() - 1)
    }

    /// Remove the top of the stack and return it.
    ///
    /// Fails with [`Error::EmptyContainer`][EmptyContainer] if the stack is
    /// empty.
    ///
    /// [EmptyContainer]: enum.Error.html#variant.EmptyContainer
    pub fn pop(&mut self) -> Result<A, Error> {
        if self.is_empty() {
            return Err(Error::EmptyContainer);
        }
        self.array.remove(self.size() - 1)
    }

    /// Remove everything from the stack.
    pub fn clear(&mut self) {
        self.array.clear();
    }
}

impl<A> Default for ArrayStack<A> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn pops_in_reverse_push_order() {
        let mut stack = ArrayStack::with_capacity(1).unwrap();
        for i in 0..100 {
            stack.push(i);
        }
        assert_eq!(100, stack.size());
        for i in (0..100).rev() {
            assert_eq!(Ok(i), stack.pop());
        }
        assert!(stack.is_empty());
    }

    #[test]
    fn peek_leaves_the_top_in_place() {
        let mut stack = ArrayStack::new();
        stack.push("bottom");
        stack.push("top");
        assert_eq!(Ok(&"top"), stack.peek());
        assert_eq!(Ok(&"top"), stack.peek());
        assert_eq!(2, stack.size());
    }

    #[test]
    fn empty_stack_refuses_peek_and_pop() {
        let mut stack: ArrayStack<u8> = ArrayStack::new();
        assert_eq!(Err(Error::EmptyContainer), stack.peek());
        assert_eq!(Err(Error::EmptyContainer), stack.pop());
        assert!(stack.is_empty());
        assert_eq!(0, stack.size());
        stack.push(1);
        assert_eq!(Ok(1), stack.pop());
        assert_eq!(Err(Error::EmptyContainer), stack.pop());
    }

    #[test]
    fn clear_empties_the_stack() {
        let mut stack = ArrayStack::new();
        stack.push(1);
        stack.push(2);
        stack.clear();
        assert!(stack.is_empty());
        assert_eq!(Err(Error::EmptyContainer), stack.peek());
    }

    #[test]
    fn zero_capacity_is_rejected() {
        assert_eq!(
            Err(Error::InvalidArgument { capacity: 0 }),
            ArrayStack::<u8>::with_capacity(0)
        );
    }

    #[test]
    fn interleaved_pushes_and_pops() {
        let mut stack = ArrayStack::new();
        stack.push('a');
        stack.push('b');
        assert_eq!(Ok('b'), stack.pop());
        stack.push('c');
        stack.push('d');
        assert_eq!(Ok('d'), stack.pop());
        assert_eq!(Ok('c'), stack.pop());
        assert_eq!(Ok('a'), stack.pop());
    }
}
