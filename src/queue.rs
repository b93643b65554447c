//! First-in, first-out queue used for breadth-first walks over the trees in this crate.

use crate::error::Result;
use std::collections::VecDeque;

/// A FIFO queue.
///
/// # Examples
///
/// ```
/// use rb_collections::queue::Queue;
///
/// let mut queue = Queue::new();
/// queue.push(1);
/// queue.push(2);
///
/// assert_eq!(queue.pop(), Some(1));
/// assert_eq!(queue.pop(), Some(2));
/// assert!(queue.is_empty());
/// ```
pub struct Queue<T> {
    items: VecDeque<T>,
}

impl<T> Queue<T> {
    /// Constructs a new, empty `Queue<T>`.
    pub fn new() -> Self {
        Queue {
            items: VecDeque::new(),
        }
    }

    /// Constructs a new, empty `Queue<T>` that can hold at least `capacity` items without
    /// reallocating. Returns `Error::AllocationFailed` if the storage cannot be reserved.
    ///
    /// # Examples
    ///
    /// ```
    /// use rb_collections::queue::Queue;
    ///
    /// let queue: Queue<u32> = Queue::with_capacity(16).unwrap();
    /// assert!(queue.is_empty());
    /// ```
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        let mut items = VecDeque::new();
        items.try_reserve_exact(capacity)?;
        Ok(Queue { items })
    }

    /// Appends an item to the back of the queue.
    pub fn push(&mut self, item: T) {
        self.items.push_back(item);
    }

    /// Removes the item at the front of the queue. Returns `None` if the queue is empty.
    pub fn pop(&mut self) -> Option<T> {
        self.items.pop_front()
    }

    /// Returns `true` if the queue holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the number of items in the queue.
    pub fn len(&self) -> usize {
        self.items.len()
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}
