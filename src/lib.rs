//! An arena-backed red black tree with order statistics and several traversal orders, and an
//! ordered queue built on top of it.
//!
//! # Examples
//!
//! ```
//! use rb_collections::red_black_tree::{RedBlackTree, Traversal};
//!
//! let mut tree = RedBlackTree::new();
//! for value in &[10, 20, 30, 15, 25, 5] {
//!     tree.add(*value).unwrap();
//! }
//!
//! assert_eq!(tree.nth_smallest(2), Some(&10));
//! assert_eq!(tree.nth_biggest(2), Some(&25));
//!
//! let levels = tree.traverse(Traversal::LevelOrder).collect::<Vec<&u32>>();
//! assert_eq!(levels[0], &20);
//! ```

mod error;
pub mod arena;
pub mod ordered_queue;
pub mod queue;
pub mod red_black_tree;

pub use crate::error::{Error, Result};
