use crate::arena::{Handle, TypedArena};
use crate::error::{Error, Result};
use crate::red_black_tree::config::Config;
use crate::red_black_tree::node::{Color, Direction, Node};
use crate::red_black_tree::traversal::Traversal;
use crate::red_black_tree::{Comparator, Destructor, NaturalOrder};
use log::{debug, trace};
use std::cmp::Ordering;
use std::mem;

/// An ordered collection implemented using a red black tree.
///
/// A red black tree is a self-balancing binary search tree that colors every node red or black
/// so that no red node has a red child and every path from a node to its leaves passes through
/// the same number of black nodes. This keeps the height of the tree logarithmic in the number of
/// values.
///
/// Values are ordered by a `Comparator<T>` supplied when the tree is constructed. Equal values
/// are allowed: a value that compares equal to a stored value is placed after it.
///
/// # Examples
///
/// ```
/// use rb_collections::red_black_tree::RedBlackTree;
///
/// let mut tree = RedBlackTree::new();
/// for value in &[10, 20, 30, 15, 25, 5] {
///     tree.add(*value).unwrap();
/// }
///
/// assert_eq!(tree.len(), 6);
/// assert_eq!(tree.nth_smallest(1), Some(&5));
/// assert_eq!(tree.nth_biggest(1), Some(&30));
/// assert!(tree.contains(&15));
///
/// assert_eq!(tree.remove(&20), Some(20));
/// assert_eq!(tree.iter().collect::<Vec<&u32>>(), vec![&5, &10, &15, &25, &30]);
/// assert!(tree.check().is_ok());
/// ```
pub struct RedBlackTree<T, C = NaturalOrder> {
    pub(super) arena: TypedArena<Node<T>>,
    pub(super) root: Option<Handle>,
    len: usize,
    pub(super) comparator: C,
}

impl<T> RedBlackTree<T, NaturalOrder>
where
    T: Ord,
{
    /// Constructs a new, empty `RedBlackTree<T>` ordered by `T`'s `Ord` implementation.
    ///
    /// # Examples
    ///
    /// ```
    /// use rb_collections::red_black_tree::RedBlackTree;
    ///
    /// let tree: RedBlackTree<u32> = RedBlackTree::new();
    /// ```
    pub fn new() -> Self {
        Self::with_comparator(NaturalOrder)
    }
}

impl<T> Default for RedBlackTree<T, NaturalOrder>
where
    T: Ord,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, C> RedBlackTree<T, C> {
    pub(super) fn is_red(&self, handle: Option<Handle>) -> bool {
        match handle {
            None => false,
            Some(handle) => self.arena[handle].color.is_red(),
        }
    }

    fn side_of(&self, parent: Handle, child: Handle) -> Direction {
        if self.arena[parent].left == Some(child) {
            Direction::Left
        } else {
            Direction::Right
        }
    }

    // precondition: `start` is a valid handle
    fn extreme(&self, start: Handle, dir: Direction) -> Handle {
        let mut curr = start;
        while let Some(next) = self.arena[curr].child(dir) {
            curr = next;
        }
        curr
    }

    fn replace_child(&mut self, parent: Option<Handle>, old: Handle, new: Option<Handle>) {
        match parent {
            Some(parent) => {
                let side = self.side_of(parent, old);
                *self.arena[parent].child_mut(side) = new;
            },
            None => self.root = new,
        }
    }

    // Rotating left brings the right child of `node` up into its place and vice versa.
    fn rotate(&mut self, node: Handle, dir: Direction) {
        let opposite = dir.opposite();
        let pivot = self.arena[node]
            .child(opposite)
            .expect("Expected pivot child node to be `Some`.");

        let middle = self.arena[pivot].child(dir);
        *self.arena[node].child_mut(opposite) = middle;
        if let Some(middle) = middle {
            self.arena[middle].parent = Some(node);
        }

        let parent = self.arena[node].parent;
        self.arena[pivot].parent = parent;
        self.replace_child(parent, node, Some(pivot));

        *self.arena[pivot].child_mut(dir) = Some(node);
        self.arena[node].parent = Some(pivot);
    }

    fn fix_insert(&mut self, mut node: Handle) {
        while let Some(parent) = self.arena[node].parent {
            if !self.arena[parent].color.is_red() {
                break;
            }
            let grandparent = match self.arena[parent].parent {
                Some(grandparent) => grandparent,
                None => break,
            };

            let side = self.side_of(grandparent, parent);
            let uncle = self.arena[grandparent].child(side.opposite());
            if self.is_red(uncle) {
                trace!("insert: red uncle, recoloring");
                self.arena[parent].color = Color::Black;
                if let Some(uncle) = uncle {
                    self.arena[uncle].color = Color::Black;
                }
                self.arena[grandparent].color = Color::Red;
                node = grandparent;
                continue;
            }

            let parent = if self.side_of(parent, node) != side {
                trace!("insert: {:?} {:?} case", side, side.opposite());
                self.rotate(parent, side);
                node
            } else {
                parent
            };
            self.rotate_outer(parent, grandparent, side);
            break;
        }

        if let Some(root) = self.root {
            self.arena[root].color = Color::Black;
        }
    }

    // Resolves a red parent whose red child hangs on the same side as the parent itself.
    fn rotate_outer(&mut self, parent: Handle, grandparent: Handle, side: Direction) {
        trace!("insert: {:?} {:?} case", side, side);
        self.arena[parent].color = Color::Black;
        self.arena[grandparent].color = Color::Red;
        self.rotate(grandparent, side.opposite());
    }

    // Excises a node with at most one child and returns its value.
    fn unlink(&mut self, handle: Handle) -> T {
        let child = self.arena[handle].single_child();
        if self.arena[handle].color.is_red() || self.is_red(child) {
            trace!("remove: red splice");
            if let Some(child) = child {
                self.arena[child].color = Color::Black;
            }
        } else {
            trace!("remove: black node with black child");
            self.arena[handle].color = Color::DoubleBlack;
            self.resolve_double_black(handle);
        }

        // rebalancing may have moved the node under a new parent
        let parent = self.arena[handle].parent;
        self.replace_child(parent, handle, child);
        if let Some(child) = child {
            self.arena[child].parent = parent;
        }

        self.len -= 1;
        self.arena.free(&handle).data
    }

    fn resolve_double_black(&mut self, mut node: Handle) {
        loop {
            let parent = match self.arena[node].parent {
                Some(parent) => parent,
                None => {
                    trace!("double black: reached root");
                    self.arena[node].color = Color::Black;
                    return;
                },
            };
            let side = self.side_of(parent, node);
            let sibling = self.arena[parent]
                .child(side.opposite())
                .expect("Expected sibling of a double black node to be `Some`.");

            if self.arena[sibling].color.is_red() {
                trace!("double black: red sibling");
                self.arena[sibling].color = Color::Black;
                self.arena[parent].color = Color::Red;
                self.rotate(parent, side);
                continue;
            }

            if self.is_red(self.arena[sibling].child(side.opposite())) {
                self.resolve_red_nephew(node, parent, sibling, side);
                return;
            }

            match self.arena[sibling].child(side) {
                Some(near) if self.arena[near].color.is_red() => {
                    trace!("double black: black sibling with red inner child");
                    self.arena[near].color = Color::Black;
                    self.arena[sibling].color = Color::Red;
                    self.rotate(sibling, side.opposite());
                    self.resolve_red_nephew(node, parent, near, side);
                    return;
                },
                _ => {},
            }

            trace!("double black: black sibling with black children");
            self.arena[sibling].color = Color::Red;
            self.arena[node].color = Color::Black;
            if self.arena[parent].color == Color::Black {
                self.arena[parent].color = Color::DoubleBlack;
                node = parent;
            } else {
                self.arena[parent].color = Color::Black;
                return;
            }
        }
    }

    // Resolves a double black `node` whose black sibling has a red child on the far side.
    fn resolve_red_nephew(
        &mut self,
        node: Handle,
        parent: Handle,
        sibling: Handle,
        side: Direction,
    ) {
        trace!("double black: black sibling with red outer child");
        let far = self.arena[sibling]
            .child(side.opposite())
            .expect("Expected outer child of sibling to be `Some`.");
        self.arena[sibling].color = self.arena[parent].color;
        self.arena[parent].color = Color::Black;
        self.arena[far].color = Color::Black;
        self.rotate(parent, side);
        self.arena[node].color = Color::Black;
    }

    fn remove_node(&mut self, handle: Handle) -> T {
        let node = &self.arena[handle];
        match (node.left, node.right) {
            (Some(_), Some(right)) => {
                trace!("remove: two children, excising in-order successor");
                let successor = self.extreme(right, Direction::Left);
                let data = self.unlink(successor);
                mem::replace(&mut self.arena[handle].data, data)
            },
            _ => self.unlink(handle),
        }
    }

    fn select(&self, n: usize, first: Direction) -> Option<&T> {
        if n == 0 || n > self.len {
            return None;
        }

        let mut stack = Vec::new();
        let mut curr = self.root;
        let mut seen = 0;
        loop {
            while let Some(handle) = curr {
                stack.push(handle);
                curr = self.arena[handle].child(first);
            }
            let handle = stack.pop()?;
            seen += 1;
            if seen == n {
                return Some(&self.arena[handle].data);
            }
            curr = self.arena[handle].child(first.opposite());
        }
    }

    /// Returns the number of values in the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use rb_collections::red_black_tree::RedBlackTree;
    ///
    /// let mut tree = RedBlackTree::new();
    /// tree.add(1).unwrap();
    /// tree.add(1).unwrap();
    /// assert_eq!(tree.len(), 2);
    /// ```
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the tree is empty.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the `n`th smallest value of the tree, counting from one. Returns `None` if `n` is
    /// zero or larger than the number of values.
    ///
    /// # Examples
    ///
    /// ```
    /// use rb_collections::red_black_tree::RedBlackTree;
    ///
    /// let mut tree = RedBlackTree::new();
    /// tree.add(3).unwrap();
    /// tree.add(1).unwrap();
    /// tree.add(2).unwrap();
    /// assert_eq!(tree.nth_smallest(2), Some(&2));
    /// assert_eq!(tree.nth_smallest(4), None);
    /// ```
    pub fn nth_smallest(&self, n: usize) -> Option<&T> {
        self.select(n, Direction::Left)
    }

    /// Returns the `n`th biggest value of the tree, counting from one. Returns `None` if `n` is
    /// zero or larger than the number of values.
    ///
    /// # Examples
    ///
    /// ```
    /// use rb_collections::red_black_tree::RedBlackTree;
    ///
    /// let mut tree = RedBlackTree::new();
    /// tree.add(3).unwrap();
    /// tree.add(1).unwrap();
    /// tree.add(2).unwrap();
    /// assert_eq!(tree.nth_biggest(1), Some(&3));
    /// assert_eq!(tree.nth_biggest(0), None);
    /// ```
    pub fn nth_biggest(&self, n: usize) -> Option<&T> {
        self.select(n, Direction::Right)
    }

    /// Returns the smallest value of the tree.
    pub fn smallest(&self) -> Option<&T> {
        self.nth_smallest(1)
    }

    /// Returns the biggest value of the tree.
    pub fn biggest(&self) -> Option<&T> {
        self.nth_biggest(1)
    }

    /// Removes and returns the smallest value of the tree. If several values compare equal to
    /// the smallest, the one that was added first is removed.
    pub fn pop_smallest(&mut self) -> Option<T> {
        let root = self.root?;
        let handle = self.extreme(root, Direction::Left);
        Some(self.remove_node(handle))
    }

    /// Removes and returns the biggest value of the tree. If several values compare equal to the
    /// biggest, the one that was added last is removed.
    pub fn pop_biggest(&mut self) -> Option<T> {
        let root = self.root?;
        let handle = self.extreme(root, Direction::Right);
        Some(self.remove_node(handle))
    }

    /// Removes every value from the tree and drops it.
    ///
    /// # Examples
    ///
    /// ```
    /// use rb_collections::red_black_tree::RedBlackTree;
    ///
    /// let mut tree = RedBlackTree::new();
    /// tree.add(1).unwrap();
    /// tree.clear();
    /// assert!(tree.is_empty());
    /// ```
    pub fn clear(&mut self) {
        debug!("clearing tree of {} values", self.len);
        self.arena.clear();
        self.root = None;
        self.len = 0;
    }

    /// Removes every value from the tree and hands each one to `destroy`. Values are released in
    /// post-order, so every value is destroyed after the values below it. Does nothing on an
    /// empty tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use rb_collections::red_black_tree::RedBlackTree;
    ///
    /// let mut tree = RedBlackTree::new();
    /// tree.add(2).unwrap();
    /// tree.add(1).unwrap();
    /// tree.add(3).unwrap();
    ///
    /// let mut destroyed = Vec::new();
    /// tree.clear_with(|value: u32| destroyed.push(value));
    /// assert_eq!(destroyed, vec![1, 3, 2]);
    /// assert!(tree.is_empty());
    /// ```
    pub fn clear_with<D>(&mut self, mut destroy: D)
    where
        D: Destructor<T>,
    {
        if self.root.is_none() {
            return;
        }
        let order: Vec<Handle> = self.handles(Traversal::PostOrder).collect();
        debug!("destroying {} values", order.len());
        for handle in order {
            destroy.destroy(self.arena.free(&handle).data);
        }
        self.clear();
    }
}

impl<T, C> RedBlackTree<T, C>
where
    C: Comparator<T>,
{
    fn find(&self, data: &T) -> Option<Handle> {
        let mut curr = self.root;
        while let Some(handle) = curr {
            let node = &self.arena[handle];
            curr = match self.comparator.compare(&node.data, data) {
                Ordering::Equal => return Some(handle),
                Ordering::Greater => node.left,
                Ordering::Less => node.right,
            };
        }
        None
    }

    /// Constructs a new, empty `RedBlackTree<T, C>` ordered by `comparator`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rb_collections::red_black_tree::RedBlackTree;
    ///
    /// let mut tree: RedBlackTree<u32, _> = RedBlackTree::with_comparator(|a: &u32, b: &u32| b.cmp(a));
    /// tree.add(1).unwrap();
    /// tree.add(2).unwrap();
    /// assert_eq!(tree.nth_smallest(1), Some(&2));
    /// ```
    pub fn with_comparator(comparator: C) -> Self {
        RedBlackTree {
            arena: TypedArena::new(Config::default().chunk_size),
            root: None,
            len: 0,
            comparator,
        }
    }

    /// Constructs a new, empty `RedBlackTree<T, C>` with the given configuration. Returns
    /// `Error::InvalidArgument` if the configured chunk size is zero.
    pub fn with_config(config: Config, comparator: C) -> Result<Self> {
        if config.chunk_size == 0 {
            return Err(Error::InvalidArgument("chunk size must be non-zero"));
        }
        Ok(RedBlackTree {
            arena: TypedArena::new(config.chunk_size),
            root: None,
            len: 0,
            comparator,
        })
    }

    /// Adds a value to the tree. Values comparing equal to stored values are kept alongside
    /// them. Returns `Error::AllocationFailed` if no storage could be reserved for the new node,
    /// in which case the tree is left unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use rb_collections::red_black_tree::RedBlackTree;
    ///
    /// let mut tree = RedBlackTree::new();
    /// tree.add(1).unwrap();
    /// assert!(tree.contains(&1));
    /// ```
    pub fn add(&mut self, data: T) -> Result<()> {
        let mut parent = None;
        let mut dir = Direction::Left;
        let mut curr = self.root;
        while let Some(handle) = curr {
            let node = &self.arena[handle];
            dir = match self.comparator.compare(&node.data, &data) {
                Ordering::Greater => Direction::Left,
                _ => Direction::Right,
            };
            parent = Some(handle);
            curr = node.child(dir);
        }

        let color = if parent.is_some() {
            Color::Red
        } else {
            Color::Black
        };
        let handle = self.arena.allocate(Node::new(data, color, parent))?;
        match parent {
            Some(parent) => *self.arena[parent].child_mut(dir) = Some(handle),
            None => self.root = Some(handle),
        }
        self.len += 1;

        self.fix_insert(handle);
        Ok(())
    }

    /// Removes a value comparing equal to `data` from the tree and returns it. Returns `None` if
    /// no such value exists.
    ///
    /// # Examples
    ///
    /// ```
    /// use rb_collections::red_black_tree::RedBlackTree;
    ///
    /// let mut tree = RedBlackTree::new();
    /// tree.add(1).unwrap();
    /// assert_eq!(tree.remove(&1), Some(1));
    /// assert_eq!(tree.remove(&1), None);
    /// ```
    pub fn remove(&mut self, data: &T) -> Option<T> {
        let handle = self.find(data)?;
        Some(self.remove_node(handle))
    }

    /// Checks if a value comparing equal to `data` exists in the tree. Returns
    /// `Error::EmptyTree` if the tree is empty and `Error::NotFound` if there is no such value.
    ///
    /// # Examples
    ///
    /// ```
    /// use rb_collections::Error;
    /// use rb_collections::red_black_tree::RedBlackTree;
    ///
    /// let mut tree = RedBlackTree::new();
    /// assert!(match tree.exists(&1) { Err(Error::EmptyTree) => true, _ => false });
    ///
    /// tree.add(1).unwrap();
    /// assert!(tree.exists(&1).is_ok());
    /// assert!(match tree.exists(&2) { Err(Error::NotFound) => true, _ => false });
    /// ```
    pub fn exists(&self, data: &T) -> Result<()> {
        if self.root.is_none() {
            return Err(Error::EmptyTree);
        }
        self.find(data).map(|_| ()).ok_or(Error::NotFound)
    }

    /// Returns `true` if a value comparing equal to `data` exists in the tree.
    pub fn contains(&self, data: &T) -> bool {
        self.find(data).is_some()
    }
}
