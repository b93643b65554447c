use crate::arena::Handle;
use crate::red_black_tree::node::{Color, Direction};
use crate::red_black_tree::tree::RedBlackTree;
use crate::red_black_tree::Comparator;
use std::cmp::Ordering;
use std::error;
use std::fmt;
use std::result;

/// A broken red black tree invariant reported by `RedBlackTree::check`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Violation {
    /// The root of the tree is red.
    RedRoot,
    /// A node is still marked double black.
    DoubleBlack,
    /// A red node has a red child.
    RedRed,
    /// Two paths from a node to its leaves pass through different numbers of black nodes.
    BlackHeight,
    /// An in-order walk yields a value that compares less than the value before it.
    Order,
    /// A child does not point back to its parent, or the root has a parent.
    ParentLink,
    /// The number of reachable nodes differs from the length of the tree.
    Count,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let message = match self {
            Violation::RedRoot => "root is red",
            Violation::DoubleBlack => "double black node left in tree",
            Violation::RedRed => "red node has a red child",
            Violation::BlackHeight => "black height differs between paths",
            Violation::Order => "values out of order",
            Violation::ParentLink => "parent link is inconsistent",
            Violation::Count => "node count does not match length",
        };
        write!(f, "{}", message)
    }
}

impl error::Error for Violation {}

impl<T, C> RedBlackTree<T, C>
where
    C: Comparator<T>,
{
    fn check_node(&self, handle: Handle, count: &mut usize) -> result::Result<usize, Violation> {
        let node = &self.arena[handle];
        *count += 1;
        if node.color == Color::DoubleBlack {
            return Err(Violation::DoubleBlack);
        }

        let mut heights = [1; 2];
        for (height, dir) in heights.iter_mut().zip(&[Direction::Left, Direction::Right]) {
            if let Some(child_handle) = node.child(*dir) {
                let child = &self.arena[child_handle];
                if child.parent != Some(handle) {
                    return Err(Violation::ParentLink);
                }
                if node.color.is_red() && child.color.is_red() {
                    return Err(Violation::RedRed);
                }
                *height = self.check_node(child_handle, count)?;
            }
        }

        if heights[0] != heights[1] {
            return Err(Violation::BlackHeight);
        }
        Ok(heights[0] + if node.color == Color::Black { 1 } else { 0 })
    }

    /// Verifies every red black tree invariant and returns the black height of the tree, counting
    /// the empty leaves. An empty tree has a black height of zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use rb_collections::red_black_tree::RedBlackTree;
    ///
    /// let mut tree = RedBlackTree::new();
    /// for value in 0..100 {
    ///     tree.add(value).unwrap();
    /// }
    /// assert!(tree.check().is_ok());
    /// ```
    pub fn check(&self) -> result::Result<usize, Violation> {
        let root = match self.root {
            Some(root) => root,
            None if self.is_empty() => return Ok(0),
            None => return Err(Violation::Count),
        };

        if self.arena[root].parent.is_some() {
            return Err(Violation::ParentLink);
        }
        if self.arena[root].color.is_red() {
            return Err(Violation::RedRoot);
        }

        let mut count = 0;
        let height = self.check_node(root, &mut count)?;
        if count != self.len() {
            return Err(Violation::Count);
        }

        let mut prev: Option<&T> = None;
        for data in self.iter() {
            if let Some(prev) = prev {
                if self.comparator.compare(prev, data) == Ordering::Greater {
                    return Err(Violation::Order);
                }
            }
            prev = Some(data);
        }

        Ok(height)
    }
}

#[cfg(test)]
mod tests {
    use super::Violation;
    use crate::red_black_tree::node::Color;
    use crate::red_black_tree::RedBlackTree;

    fn tree_of(values: &[u32]) -> RedBlackTree<u32> {
        let mut tree = RedBlackTree::new();
        for value in values {
            tree.add(*value).unwrap();
        }
        tree
    }

    #[test]
    fn test_valid() {
        let tree = tree_of(&[10, 20, 30, 15, 25, 5]);
        assert_eq!(tree.check(), Ok(3));
    }

    #[test]
    fn test_red_root() {
        let mut tree = tree_of(&[1]);
        let root = tree.root.unwrap();
        tree.arena[root].color = Color::Red;
        assert_eq!(tree.check(), Err(Violation::RedRoot));
    }

    #[test]
    fn test_double_black() {
        let mut tree = tree_of(&[2, 1, 3]);
        let left = tree.arena[tree.root.unwrap()].left.unwrap();
        tree.arena[left].color = Color::DoubleBlack;
        assert_eq!(tree.check(), Err(Violation::DoubleBlack));
    }

    #[test]
    fn test_red_red() {
        let mut tree = tree_of(&[10, 20, 30, 15]);
        let root = tree.root.unwrap();
        let left = tree.arena[root].left.unwrap();
        tree.arena[left].color = Color::Red;
        assert_eq!(tree.check(), Err(Violation::RedRed));
    }

    #[test]
    fn test_black_height() {
        let mut tree = tree_of(&[2, 1, 3]);
        let left = tree.arena[tree.root.unwrap()].left.unwrap();
        tree.arena[left].color = Color::Black;
        assert_eq!(tree.check(), Err(Violation::BlackHeight));
    }

    #[test]
    fn test_order() {
        let mut tree = tree_of(&[2, 1, 3]);
        let left = tree.arena[tree.root.unwrap()].left.unwrap();
        tree.arena[left].data = 4;
        assert_eq!(tree.check(), Err(Violation::Order));
    }
}
