// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! A growable array with positional insertion and removal, and a stack
//! built on top of it.
//!
//! [`IndexedArray`][IndexedArray] keeps its elements in one contiguous
//! buffer with no gaps. You can read, insert and remove at any position, and
//! elements after the affected position are shifted to close or open the
//! gap. When an insertion finds the buffer full, the buffer is reallocated at
//! twice its size, so appending is amortised constant time. The buffer never
//! shrinks.
//!
//! [`ArrayStack`][ArrayStack] wraps an `IndexedArray` and only lets you at
//! its last element, giving you a plain last-in-first-out stack.
//!
//! # Errors
//!
//! Nothing in this crate panics on bad input. Out of range indices, zero
//! capacities and popping an empty stack all come back as an
//! [`Error`][Error], and a call that returns an error never modifies the
//! container. There is no way to store an absent value: the containers
//! take owned values of `A`, so if you need a slot that may be empty, say
//! so in your element type.
//!
//! # Logging
//!
//! Buffer reallocations and clears are reported as `TRACE` level
//! [`tracing`][tracing] events. No subscriber is installed by this crate.
//!
//! # Example
//!
//! If you need to mix types in one array, store an enum:
//!
//! ```rust
//! # use indexed_array::IndexedArray;
//! #[derive(Debug, PartialEq)]
//! enum Value {
//!     Number(i32),
//!     Text(&'static str),
//! }
//!
//! let mut array = IndexedArray::new(2)?;
//! array.add(Value::Number(20));
//! array.add(Value::Text("New York"));
//! // The buffer is full, so this reallocates it at twice the size.
//! array.add(Value::Text("San Francisco"));
//! assert_eq!(4, array.capacity());
//!
//! assert!(array.contains(&Value::Text("New York")));
//! // Removing "New York" shifts "San Francisco" down to index 1.
//! array.remove(1)?;
//! assert_eq!(&Value::Text("San Francisco"), array.get(1)?);
//! assert_eq!(2, array.size());
//! # Ok::<(), indexed_array::Error>(())
//! ```
//!
//! [IndexedArray]: struct.IndexedArray.html
//! [ArrayStack]: struct.ArrayStack.html
//! [Error]: enum.Error.html
//! [tracing]: https://docs.rs/tracing

#![forbid(rust_2018_idioms)]
#![deny(nonstandard_style)]
#![warn(unreachable_pub, missing_docs, missing_debug_implementations)]

mod array;
mod buffer;
mod error;
mod stack;

pub use self::array::{IndexedArray, DEFAULT_CAPACITY};
pub use self::error::Error;
pub use self::stack::ArrayStack;
