//! Priority queue that keeps its values ordered in a red black tree.

use crate::error::Result;
use crate::red_black_tree::{Comparator, Destructor, NaturalOrder, RedBlackTree};

/// The end of the ordering that `OrderedQueue::pop` takes values from.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Priority {
    /// Smallest values are popped first.
    Increasing,
    /// Biggest values are popped first.
    Decreasing,
}

/// A priority queue backed by a `RedBlackTree<T, C>`.
///
/// Values that compare equal are popped in the order they were pushed when the priority is
/// `Increasing`, and in reverse order when it is `Decreasing`.
///
/// # Examples
///
/// ```
/// use rb_collections::ordered_queue::{OrderedQueue, Priority};
///
/// let mut queue = OrderedQueue::new(Priority::Decreasing);
/// queue.push(1).unwrap();
/// queue.push(3).unwrap();
/// queue.push(2).unwrap();
///
/// assert_eq!(queue.peek(), Some(&3));
/// assert_eq!(queue.pop(), Some(3));
/// assert_eq!(queue.pop(), Some(2));
/// assert_eq!(queue.len(), 1);
/// ```
pub struct OrderedQueue<T, C = NaturalOrder> {
    tree: RedBlackTree<T, C>,
    priority: Priority,
}

impl<T> OrderedQueue<T, NaturalOrder>
where
    T: Ord,
{
    /// Constructs a new, empty `OrderedQueue<T>` ordered by `T`'s `Ord` implementation.
    pub fn new(priority: Priority) -> Self {
        Self::with_comparator(priority, NaturalOrder)
    }
}

impl<T, C> OrderedQueue<T, C>
where
    C: Comparator<T>,
{
    /// Constructs a new, empty `OrderedQueue<T, C>` ordered by `comparator`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rb_collections::ordered_queue::{OrderedQueue, Priority};
    ///
    /// let mut queue: OrderedQueue<(u32, char), _> = OrderedQueue::with_comparator(
    ///     Priority::Increasing,
    ///     |a: &(u32, char), b: &(u32, char)| a.0.cmp(&b.0),
    /// );
    /// queue.push((2, 'w')).unwrap();
    /// queue.push((1, 'r')).unwrap();
    /// assert_eq!(queue.pop(), Some((1, 'r')));
    /// ```
    pub fn with_comparator(priority: Priority, comparator: C) -> Self {
        OrderedQueue {
            tree: RedBlackTree::with_comparator(comparator),
            priority,
        }
    }

    /// Adds a value to the queue. Returns `Error::AllocationFailed` if no storage could be
    /// reserved for it.
    pub fn push(&mut self, data: T) -> Result<()> {
        self.tree.add(data)
    }

    /// Removes the value with the highest priority from the queue and returns it. Returns `None`
    /// if the queue is empty.
    pub fn pop(&mut self) -> Option<T> {
        match self.priority {
            Priority::Increasing => self.tree.pop_smallest(),
            Priority::Decreasing => self.tree.pop_biggest(),
        }
    }

    /// Returns the value with the highest priority without removing it.
    pub fn peek(&self) -> Option<&T> {
        match self.priority {
            Priority::Increasing => self.tree.smallest(),
            Priority::Decreasing => self.tree.biggest(),
        }
    }

    /// Returns the number of values in the queue.
    pub fn len(&self) -> usize {
        self.tree.len()
    }

    /// Returns `true` if the queue is empty.
    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// Removes every value from the queue and hands each one to `destroy`.
    pub fn clear_with<D>(&mut self, destroy: D)
    where
        D: Destructor<T>,
    {
        self.tree.clear_with(destroy);
    }
}
