use serde_derive::{Deserialize, Serialize};

/// Tuning parameters for a `RedBlackTree`.
///
/// # Examples
///
/// ```
/// use rb_collections::red_black_tree::{Config, NaturalOrder, RedBlackTree};
///
/// let config = Config { chunk_size: 64 };
/// let tree: RedBlackTree<u32> = RedBlackTree::with_config(config, NaturalOrder).unwrap();
/// assert!(tree.is_empty());
/// ```
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct Config {
    /// Number of nodes reserved at a time by the node arena.
    pub chunk_size: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config { chunk_size: 1024 }
    }
}
