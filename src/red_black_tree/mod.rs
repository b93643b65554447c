//! Self-balancing binary search tree that uses a color bit to ensure that the tree remains
//! approximately balanced during insertions and deletions.
//!
//! Nodes live in a `TypedArena` and refer to each other through handles, so a node can point
//! back to its parent without owning it.

mod config;
#[cfg(debug_assertions)]
mod dot;
mod node;
mod traversal;
mod tree;
mod validate;

pub use self::config::Config;
pub use self::node::Color;
pub use self::traversal::{Traversal, Traverse};
pub use self::tree::RedBlackTree;
pub use self::validate::Violation;

use std::cmp::Ordering;

/// A total ordering over values of type `T`.
///
/// Any `Fn(&T, &T) -> Ordering` closure is a comparator.
pub trait Comparator<T> {
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

impl<T, F> Comparator<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}

/// Orders values by their `Ord` implementation.
#[derive(Clone, Copy, Debug, Default)]
pub struct NaturalOrder;

impl<T> Comparator<T> for NaturalOrder
where
    T: Ord,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

/// Releases a value that is being torn down with its tree.
pub trait Destructor<T> {
    fn destroy(&mut self, data: T);
}

impl<T, F> Destructor<T> for F
where
    F: FnMut(T),
{
    fn destroy(&mut self, data: T) {
        self(data)
    }
}

/// Callback applied to every value during `RedBlackTree::foreach`. A non-zero return value
/// reports an error for that value without stopping the traversal.
pub trait Visitor<T> {
    fn visit(&mut self, data: &T) -> i32;
}

impl<T, F> Visitor<T> for F
where
    F: FnMut(&T) -> i32,
{
    fn visit(&mut self, data: &T) -> i32 {
        self(data)
    }
}
