//! The runtime stack.
//!
//! The top of the stack is the front of a `VecDeque`, so every instruction reads and removes
//! elements in O(1). In queue mode new elements enter at the back instead.

use crate::error::{Error, Result};
use std::collections::VecDeque;

/// Capacity kept around however small the stack gets
const MIN_CAPACITY: usize = 16;

/// Where `push` inserts new elements
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Mode {
    /// LIFO: push on top
    #[default]
    Stack,
    /// FIFO: push at the bottom
    Queue,
}

#[derive(Debug, Default)]
pub struct Stack {
    items: VecDeque<i32>,
    mode: Mode,
}

impl Stack {
    pub fn new(mode: Mode) -> Self {
        Stack {
            items: VecDeque::new(),
            mode,
        }
    }

    /// Change where `push` inserts. Existing elements keep their order.
    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
    }

    /// Insert a value according to the current mode. Fails only if memory for it cannot be
    /// reserved.
    pub fn push(&mut self, value: i32) -> Result<()> {
        self.items.try_reserve(1).map_err(|_| Error::Allocation)?;

        match self.mode {
            Mode::Stack => self.items.push_front(value),
            Mode::Queue => self.items.push_back(value),
        }
        Ok(())
    }

    /// Remove the top value. Memory is handed back once the stack uses a quarter of it.
    pub fn pop(&mut self) -> Option<i32> {
        let value = self.items.pop_front();

        let capacity = self.items.capacity();
        if capacity > MIN_CAPACITY && self.items.len() <= capacity / 4 {
            self.items.shrink_to(capacity / 2);
        }

        value
    }

    /// Top value
    pub fn peek(&self) -> Option<i32> {
        self.items.front().copied()
    }

    /// Mutable access to the element right below the top
    pub fn second_mut(&mut self) -> Option<&mut i32> {
        self.items.get_mut(1)
    }

    /// Exchange the top two elements. Returns `false` if there are less than two.
    pub fn swap_top(&mut self) -> bool {
        if self.items.len() < 2 {
            return false;
        }
        self.items.swap(0, 1);
        true
    }

    /// The top element becomes the last one
    pub fn rotate_left(&mut self) {
        if self.items.len() > 1 {
            self.items.rotate_left(1);
        }
    }

    /// The last element becomes the top one
    pub fn rotate_right(&mut self) {
        if self.items.len() > 1 {
            self.items.rotate_right(1);
        }
    }

    /// Values from top to bottom
    pub fn iter(&self) -> impl Iterator<Item = i32> + '_ {
        self.items.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stack_of(values: &[i32]) -> Stack {
        let mut stack = Stack::new(Mode::Stack);
        for &value in values {
            stack.push(value).unwrap();
        }
        stack
    }

    #[test]
    fn push_and_pop() {
        let mut stack = stack_of(&[1, 2, 3]);
        assert_eq!(stack.iter().collect::<Vec<_>>(), vec![3, 2, 1]);
        assert_eq!(stack.peek(), Some(3));

        assert_eq!(stack.pop(), Some(3));
        assert_eq!(stack.pop(), Some(2));
        assert_eq!(stack.pop(), Some(1));
        assert_eq!(stack.pop(), None);
        assert!(stack.is_empty());
        assert_eq!(stack.peek(), None);
    }

    #[test]
    fn popping_everything_releases_memory() {
        let mut stack = stack_of(&(0..100_000).collect::<Vec<_>>());
        assert_eq!(stack.len(), 100_000);
        assert!(stack.items.capacity() >= 100_000);

        while stack.pop().is_some() {}
        assert_eq!(stack.len(), 0);
        assert!(
            stack.items.capacity() <= MIN_CAPACITY,
            "capacity {} left after popping everything",
            stack.items.capacity()
        );
    }

    #[test]
    fn memory_shrinks_while_popping() {
        let mut stack = stack_of(&(0..4096).collect::<Vec<_>>());
        let full = stack.items.capacity();

        for _ in 0..4000 {
            stack.pop();
        }
        assert_eq!(stack.len(), 96);
        assert!(stack.items.capacity() < full / 4);
        assert!(stack.items.capacity() >= stack.len());
        assert_eq!(stack.peek(), Some(95));
    }

    #[test]
    fn queue_mode() {
        let mut stack = stack_of(&[1, 2]);
        stack.set_mode(Mode::Queue);
        stack.push(3).unwrap();
        assert_eq!(stack.iter().collect::<Vec<_>>(), vec![2, 1, 3]);
        assert_eq!(stack.pop(), Some(2));

        stack.set_mode(Mode::Stack);
        stack.push(4).unwrap();
        assert_eq!(stack.iter().collect::<Vec<_>>(), vec![4, 1, 3]);
    }

    #[test]
    fn swap_top() {
        let mut stack = stack_of(&[1]);
        assert!(!stack.swap_top());
        assert_eq!(stack.iter().collect::<Vec<_>>(), vec![1]);

        stack.push(2).unwrap();
        stack.push(3).unwrap();
        assert!(stack.swap_top());
        assert_eq!(stack.iter().collect::<Vec<_>>(), vec![2, 3, 1]);
    }

    #[test]
    fn rotate() {
        let mut stack = stack_of(&[1, 2, 3]);
        stack.rotate_left();
        assert_eq!(stack.iter().collect::<Vec<_>>(), vec![2, 1, 3]);
        stack.rotate_right();
        assert_eq!(stack.iter().collect::<Vec<_>>(), vec![3, 2, 1]);

        let mut empty = Stack::default();
        empty.rotate_left();
        empty.rotate_right();
        assert!(empty.is_empty());
    }

    #[test]
    fn second_mut() {
        let mut stack = stack_of(&[10, 3]);
        *stack.second_mut().unwrap() += 5;
        assert_eq!(stack.iter().collect::<Vec<_>>(), vec![3, 15]);
        assert_eq!(stack_of(&[1]).second_mut(), None);
    }
}
