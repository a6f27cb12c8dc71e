// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::alloc::{alloc, dealloc, handle_alloc_error, Layout};
use std::marker::PhantomData;
use std::ptr::NonNull;

#[cold]
fn capacity_overflow() -> ! {
    panic!("capacity overflow")
}

fn layout_for<A>(capacity: usize) -> Layout {
    match Layout::array::<A>(capacity) {
        Ok(layout) => layout,
        Err(_) => capacity_overflow(),
    }
}

fn allocate<A>(capacity: usize) -> NonNull<A> {
    let layout = layout_for::<A>(capacity);
    if layout.size() == 0 {
        return NonNull::dangling();
    }
    match NonNull::new(unsafe { alloc(layout) }) {
        Some(ptr) => ptr.cast(),
        None => handle_alloc_error(layout),
    }
}

unsafe fn deallocate<A>(ptr: NonNull<A>, capacity: usize) {
    let layout = layout_for::<A>(capacity);
    if layout.size() != 0 {
        dealloc(ptr.as_ptr().cast(), layout);
    }
}

/// An owned, fixed size run of uninitialised slots for `A`.
///
/// The buffer knows nothing about which of its slots are live. Whoever owns
/// it is responsible for dropping initialised slots before the buffer goes
/// away; dropping the buffer only hands the memory back to the allocator.
pub(crate) struct Buffer<A> {
    ptr: NonNull<A>,
    capacity: usize,
    _owns: PhantomData<A>,
}

impl<A> Buffer<A> {
    pub(crate) fn new(capacity: usize) -> Self {
        debug_assert!(capacity > 0);
        Self {
            ptr: allocate(capacity),
            capacity,
            _owns: PhantomData,
        }
    }

    #[inline(always)]
    pub(crate) fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline(always)]
    pub(crate) fn as_ptr(&self) -> *mut A {
        self.ptr.as_ptr()
    }

    /// Swap in a buffer twice the size, moving the first `live` slots over.
    ///
    /// # Safety
    ///
    /// Slots `0..live` must be initialised, and `live` must not exceed the
    /// current capacity.
    pub(crate) unsafe fn double(&mut self, live: usize) {
        debug_assert!(live <= self.capacity);
        let new_capacity = match self.capacity.checked_mul(2) {
            Some(capacity) => capacity,
            None => capacity_overflow(),
        };
        let new_ptr = allocate::<A>(new_capacity);
        std::ptr::copy_nonoverlapping(self.ptr.as_ptr(), new_ptr.as_ptr(), live);
        deallocate(self.ptr, self.capacity);
        self.ptr = new_ptr;
        self.capacity = new_capacity;
    }
}

impl<A> Drop for Buffer<A> {
    fn drop(&mut self) {
        unsafe { deallocate(self.ptr, self.capacity) }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn doubling_keeps_live_slots_in_order() {
        let mut buffer: Buffer<String> = Buffer::new(2);
        unsafe {
            buffer.as_ptr().write("a".to_string());
            buffer.as_ptr().add(1).write("b".to_string());
            buffer.double(2);
            assert_eq!(4, buffer.capacity());
            assert_eq!("a", buffer.as_ptr().read());
            assert_eq!("b", buffer.as_ptr().add(1).read());
        }
    }

    #[test]
    fn zero_sized_slots_never_allocate() {
        let mut buffer: Buffer<()> = Buffer::new(1);
        unsafe { buffer.double(0) };
        assert_eq!(2, buffer.capacity());
        assert_eq!(NonNull::<()>::dangling().as_ptr(), buffer.as_ptr());
    }
}
