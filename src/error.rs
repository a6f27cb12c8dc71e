// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::fmt::{Display, Formatter};

/// The ways an operation on an [`IndexedArray`][IndexedArray] or an
/// [`ArrayStack`][ArrayStack] can be refused.
///
/// A refused operation never leaves its container partially modified: if
/// you get an `Error` back, the container looks exactly the way it did
/// before the call.
///
/// [IndexedArray]: struct.IndexedArray.html
/// [ArrayStack]: struct.ArrayStack.html
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Error {
    /// A container was asked to start out with fewer than one slot.
    InvalidArgument {
        /// The capacity that was requested.
        capacity: usize,
    },
    /// An index fell outside the range `0..bound`.
    ///
    /// For lookups and removals `bound` is the current size, for insertions
    /// it's one past the current size, because inserting at the end is
    /// allowed.
    IndexOutOfRange {
        /// The offending index.
        index: usize,
        /// The exclusive upper limit of valid indices at the time of the call.
        bound: usize,
    },
    /// `peek()` or `pop()` was called on an empty stack.
    EmptyContainer,
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidArgument { capacity } => write!(
                f,
                "initial capacity has to be at least 1, got {}",
                capacity
            ),
            Self::IndexOutOfRange { index, bound } if *bound == 0 => {
                write!(f, "index {} is out of range, no index is valid", index)
            }
            Self::IndexOutOfRange { index, bound } => write!(
                f,
                "index {} is out of range, valid indices are [0,{}]",
                index,
                bound - 1
            ),
            Self::EmptyContainer => write!(f, "container is empty"),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn display_names_the_valid_range() {
        let err = Error::IndexOutOfRange { index: 7, bound: 3 };
        assert_eq!("index 7 is out of range, valid indices are [0,2]", err.to_string());
        let err = Error::IndexOutOfRange { index: 0, bound: 0 };
        assert_eq!("index 0 is out of range, no index is valid", err.to_string());
    }

    #[test]
    fn display_invalid_capacity() {
        let err = Error::InvalidArgument { capacity: 0 };
        assert_eq!("initial capacity has to be at least 1, got 0", err.to_string());
    }

    #[test]
    fn is_a_std_error() {
        let err: Box<dyn std::error::Error> = Box::new(Error::EmptyContainer);
        assert_eq!("container is empty", err.to_string());
    }
}
