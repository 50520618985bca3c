//! Two-discipline stack abstraction
//!
//! A single [`Stack`] trait with two containers behind it:
//!
//! - [`Lifo`]: last in, first out — `pop` removes the most recently pushed
//!   element, and `current` is that element.
//! - [`Fifo`]: first in, first out — `pop` removes the oldest element, and
//!   `current` is that element.
//!
//! Both expose a mutable "current" slot: `set_current` overwrites the
//! element `pop` would return next, and silently does nothing on an empty
//! stack.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

/// Stack with a mutable "current" slot.
///
/// `current` always refers to the element the next `pop` would remove.
pub trait Stack<T> {
    /// Add an element.
    fn push(&mut self, item: T);

    /// Remove and return the current element, or `None` if empty.
    fn pop(&mut self) -> Option<T>;

    /// Number of elements held.
    fn len(&self) -> usize;

    /// Borrow the current element, or `None` if empty.
    fn current(&self) -> Option<&T>;

    /// Mutably borrow the current element, or `None` if empty.
    fn current_mut(&mut self) -> Option<&mut T>;

    /// True when the stack holds no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Overwrite the current element. Does nothing when empty.
    fn set_current(&mut self, value: T) {
        if let Some(slot) = self.current_mut() {
            *slot = value;
        }
    }
}

/// Last-in-first-out stack.
///
/// # Example
/// ```
/// use util_belt_core_rs::{Lifo, Stack};
///
/// let mut stack = Lifo::new();
/// stack.push(1);
/// stack.push(2);
/// assert_eq!(stack.current(), Some(&2));
/// assert_eq!(stack.pop(), Some(2));
/// assert_eq!(stack.pop(), Some(1));
/// assert_eq!(stack.pop(), None);
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Lifo<T> {
    items: Vec<T>,
}

impl<T> Lifo<T> {
    /// Create an empty LIFO stack.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T> Stack<T> for Lifo<T> {
    fn push(&mut self, item: T) {
        self.items.push(item);
    }

    fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    fn len(&self) -> usize {
        self.items.len()
    }

    fn current(&self) -> Option<&T> {
        self.items.last()
    }

    fn current_mut(&mut self) -> Option<&mut T> {
        self.items.last_mut()
    }
}

/// First-in-first-out stack (a queue with the same interface).
///
/// # Example
/// ```
/// use util_belt_core_rs::{Fifo, Stack};
///
/// let mut queue = Fifo::new();
/// queue.push(1);
/// queue.push(2);
/// assert_eq!(queue.current(), Some(&1));
/// assert_eq!(queue.pop(), Some(1));
/// assert_eq!(queue.pop(), Some(2));
/// assert_eq!(queue.pop(), None);
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Fifo<T> {
    items: VecDeque<T>,
}

impl<T> Fifo<T> {
    /// Create an empty FIFO stack.
    pub fn new() -> Self {
        Self {
            items: VecDeque::new(),
        }
    }
}

impl<T> Stack<T> for Fifo<T> {
    fn push(&mut self, item: T) {
        self.items.push_back(item);
    }

    fn pop(&mut self) -> Option<T> {
        self.items.pop_front()
    }

    fn len(&self) -> usize {
        self.items.len()
    }

    fn current(&self) -> Option<&T> {
        self.items.front()
    }

    fn current_mut(&mut self) -> Option<&mut T> {
        self.items.front_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_current_on_empty_is_noop() {
        let mut stack: Lifo<i32> = Lifo::new();
        stack.set_current(99);
        assert!(stack.is_empty());
        assert_eq!(stack.pop(), None);
    }

    #[test]
    fn test_lifo_set_current_overwrites_top() {
        let mut stack = Lifo::new();
        stack.push("a");
        stack.push("b");
        stack.set_current("c");
        assert_eq!(stack.pop(), Some("c"));
        assert_eq!(stack.pop(), Some("a"));
    }

    #[test]
    fn test_fifo_set_current_overwrites_front() {
        let mut queue = Fifo::new();
        queue.push("a");
        queue.push("b");
        queue.set_current("c");
        assert_eq!(queue.pop(), Some("c"));
        assert_eq!(queue.pop(), Some("b"));
    }
}
