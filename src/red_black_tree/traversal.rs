use crate::arena::{Handle, TypedArena};
use crate::error::{Error, Result};
use crate::queue::Queue;
use crate::red_black_tree::node::Node;
use crate::red_black_tree::tree::RedBlackTree;
use crate::red_black_tree::Visitor;

/// The order in which a traversal visits the values of a tree.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Traversal {
    /// Node, then its left subtree, then its right subtree.
    PreOrder,
    /// Left subtree, then right subtree, then the node.
    PostOrder,
    /// Left subtree, then the node, then the right subtree. Yields values in ascending order.
    InOrder,
    /// Breadth-first: level by level from the root, left to right within a level.
    LevelOrder,
}

enum Frontier {
    // the flag marks nodes whose children have already been expanded
    Stack(Vec<(Handle, bool)>),
    Queue(Queue<Handle>),
}

/// Iterator over the node handles of a tree in a given order.
pub(super) struct Handles<'a, T> {
    arena: &'a TypedArena<Node<T>>,
    order: Traversal,
    frontier: Frontier,
}

impl<'a, T> Handles<'a, T> {
    fn depth_first(arena: &'a TypedArena<Node<T>>, root: Option<Handle>, order: Traversal) -> Self {
        Handles {
            arena,
            order,
            frontier: Frontier::Stack(root.map(|root| (root, false)).into_iter().collect()),
        }
    }

    fn breadth_first(
        arena: &'a TypedArena<Node<T>>,
        root: Option<Handle>,
        mut queue: Queue<Handle>,
    ) -> Self {
        if let Some(root) = root {
            queue.push(root);
        }
        Handles {
            arena,
            order: Traversal::LevelOrder,
            frontier: Frontier::Queue(queue),
        }
    }
}

impl<'a, T> Iterator for Handles<'a, T> {
    type Item = Handle;

    fn next(&mut self) -> Option<Self::Item> {
        match self.frontier {
            Frontier::Queue(ref mut queue) => {
                let handle = queue.pop()?;
                let node = &self.arena[handle];
                for child in node.left.iter().chain(node.right.iter()) {
                    queue.push(*child);
                }
                Some(handle)
            },
            Frontier::Stack(ref mut stack) => {
                while let Some((handle, expanded)) = stack.pop() {
                    if expanded {
                        return Some(handle);
                    }

                    // pushed in reverse so that the first entry to visit ends up on top
                    let node = &self.arena[handle];
                    let right = node.right.map(|right| (right, false));
                    let left = node.left.map(|left| (left, false));
                    let entries = match self.order {
                        Traversal::PreOrder => [right, left, Some((handle, true))],
                        Traversal::InOrder => [right, Some((handle, true)), left],
                        _ => [Some((handle, true)), right, left],
                    };
                    stack.extend(entries.iter().filter_map(|entry| *entry));
                }
                None
            },
        }
    }
}

/// An iterator for `RedBlackTree<T, C>`.
///
/// This iterator traverses the values of the tree in a given `Traversal` order and yields
/// immutable references.
pub struct Traverse<'a, T> {
    handles: Handles<'a, T>,
    remaining: usize,
}

impl<'a, T> Iterator for Traverse<'a, T>
where
    T: 'a,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let arena = self.handles.arena;
        let handle = self.handles.next()?;
        self.remaining -= 1;
        Some(&arena[handle].data)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> ExactSizeIterator for Traverse<'a, T> where T: 'a {}

impl<T, C> RedBlackTree<T, C> {
    pub(super) fn handles(&self, order: Traversal) -> Handles<'_, T> {
        match order {
            Traversal::LevelOrder => Handles::breadth_first(&self.arena, self.root, Queue::new()),
            _ => Handles::depth_first(&self.arena, self.root, order),
        }
    }

    /// Returns an iterator over the tree that visits values in the given order.
    ///
    /// # Examples
    ///
    /// ```
    /// use rb_collections::red_black_tree::{RedBlackTree, Traversal};
    ///
    /// let mut tree = RedBlackTree::new();
    /// tree.add(2).unwrap();
    /// tree.add(1).unwrap();
    /// tree.add(3).unwrap();
    ///
    /// let pre_order = tree.traverse(Traversal::PreOrder).collect::<Vec<&u32>>();
    /// assert_eq!(pre_order, vec![&2, &1, &3]);
    ///
    /// let post_order = tree.traverse(Traversal::PostOrder).collect::<Vec<&u32>>();
    /// assert_eq!(post_order, vec![&1, &3, &2]);
    /// ```
    pub fn traverse(&self, order: Traversal) -> Traverse<'_, T> {
        Traverse {
            handles: self.handles(order),
            remaining: self.len(),
        }
    }

    /// Returns an iterator over the tree. The iterator will yield values using in-order
    /// traversal.
    ///
    /// # Examples
    ///
    /// ```
    /// use rb_collections::red_black_tree::RedBlackTree;
    ///
    /// let mut tree = RedBlackTree::new();
    /// tree.add(1).unwrap();
    /// tree.add(3).unwrap();
    ///
    /// let mut iterator = tree.iter();
    /// assert_eq!(iterator.next(), Some(&1));
    /// assert_eq!(iterator.next(), Some(&3));
    /// assert_eq!(iterator.next(), None);
    /// ```
    pub fn iter(&self) -> Traverse<'_, T> {
        self.traverse(Traversal::InOrder)
    }

    /// Applies `visitor` to every value of the tree in the given order. Every value is visited
    /// regardless of what the visitor returns; the non-zero return values are OR'd together into
    /// the returned status. Returns `Error::EmptyTree` if the tree is empty and
    /// `Error::AllocationFailed` if the level-order queue cannot be reserved, before any value is
    /// visited.
    ///
    /// # Examples
    ///
    /// ```
    /// use rb_collections::red_black_tree::{RedBlackTree, Traversal};
    ///
    /// let mut tree = RedBlackTree::new();
    /// tree.add(2).unwrap();
    /// tree.add(1).unwrap();
    /// tree.add(3).unwrap();
    ///
    /// let mut visited = Vec::new();
    /// let status = tree
    ///     .foreach(Traversal::LevelOrder, |value: &u32| {
    ///         visited.push(*value);
    ///         if *value == 3 { 4 } else { 0 }
    ///     })
    ///     .unwrap();
    ///
    /// assert_eq!(visited, vec![2, 1, 3]);
    /// assert_eq!(status, 4);
    /// ```
    pub fn foreach<V>(&self, order: Traversal, mut visitor: V) -> Result<i32>
    where
        V: Visitor<T>,
    {
        if self.root.is_none() {
            return Err(Error::EmptyTree);
        }

        let handles = match order {
            Traversal::LevelOrder => {
                let queue = Queue::with_capacity(self.len())?;
                Handles::breadth_first(&self.arena, self.root, queue)
            },
            _ => Handles::depth_first(&self.arena, self.root, order),
        };

        let mut status = 0;
        for handle in handles {
            status |= visitor.visit(&self.arena[handle].data);
        }
        Ok(status)
    }
}

impl<'a, T, C> IntoIterator for &'a RedBlackTree<T, C>
where
    T: 'a,
{
    type IntoIter = Traverse<'a, T>;
    type Item = &'a T;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
