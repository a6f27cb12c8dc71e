#![no_main]
use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use indexed_array::{ArrayStack, Error, IndexedArray};

#[derive(Arbitrary, Debug)]
enum Action {
    Add(String),
    Insert(String, usize),
    Remove(usize),
    Get(usize),
    Find(String),
    Push(u32),
    Pop,
    Peek,
    Clear,
}

use self::Action::*;

fuzz_target!(|input: (u8, Vec<Action>)| {
    let capacity = input.0 as usize;
    let mut array = match IndexedArray::new(capacity) {
        Ok(array) => array,
        Err(err) => {
            assert_eq!(0, capacity);
            assert_eq!(Error::InvalidArgument { capacity }, err);
            return;
        }
    };
    let mut model: Vec<String> = Vec::new();
    let mut stack = ArrayStack::new();
    let mut stack_model: Vec<u32> = Vec::new();
    for action in input.1 {
        let capacity_before = array.capacity();
        match action {
            Add(data) => {
                array.add(data.clone());
                model.push(data);
            }
            Insert(data, position) => {
                if position <= model.len() {
                    assert_eq!(Ok(()), array.insert(data.clone(), position));
                    model.insert(position, data);
                } else {
                    assert_eq!(
                        Err(Error::IndexOutOfRange {
                            index: position,
                            bound: model.len() + 1
                        }),
                        array.insert(data, position)
                    );
                }
            }
            Remove(index) => {
                if index < model.len() {
                    assert_eq!(Ok(model.remove(index)), array.remove(index));
                } else {
                    assert!(array.remove(index).is_err());
                }
            }
            Get(index) => {
                assert_eq!(model.get(index).ok_or(()), array.get(index).map_err(|_| ()));
            }
            Find(data) => {
                assert_eq!(model.iter().position(|s| *s == data), array.index_of(&data));
            }
            Push(value) => {
                stack.push(value);
                stack_model.push(value);
            }
            Pop => {
                assert_eq!(stack_model.pop().ok_or(Error::EmptyContainer), stack.pop());
            }
            Peek => {
                assert_eq!(stack_model.last().ok_or(Error::EmptyContainer), stack.peek());
            }
            Clear => {
                array.clear();
                model.clear();
            }
        }
        assert_eq!(model.as_slice(), array.as_slice());
        assert_eq!(stack_model.len(), stack.size());
        assert!(array.capacity() >= array.size());
        assert!(
            array.capacity() == capacity_before || array.capacity() == capacity_before * 2
        );
    }
});
