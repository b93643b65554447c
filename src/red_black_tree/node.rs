use crate::arena::Handle;

/// An enum representing the color of a node in a red black tree.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Color {
    Red,
    Black,
    /// Transient marker for a position that is one black node short. Only exists while a removal
    /// is being rebalanced.
    DoubleBlack,
}

impl Color {
    pub fn is_red(self) -> bool {
        self == Color::Red
    }
}

/// The side of a parent that a child hangs from.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    pub fn opposite(self) -> Direction {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

/// A struct representing an internal node of a red black tree.
///
/// `left` and `right` own their subtrees; `parent` is only a back-reference used to walk upwards
/// while rebalancing.
pub struct Node<T> {
    pub data: T,
    pub color: Color,
    pub parent: Option<Handle>,
    pub left: Option<Handle>,
    pub right: Option<Handle>,
}

impl<T> Node<T> {
    pub fn new(data: T, color: Color, parent: Option<Handle>) -> Self {
        Node {
            data,
            color,
            parent,
            left: None,
            right: None,
        }
    }

    pub fn child(&self, dir: Direction) -> Option<Handle> {
        match dir {
            Direction::Left => self.left,
            Direction::Right => self.right,
        }
    }

    pub fn child_mut(&mut self, dir: Direction) -> &mut Option<Handle> {
        match dir {
            Direction::Left => &mut self.left,
            Direction::Right => &mut self.right,
        }
    }

    /// Returns the only child of a node that has at most one child.
    pub fn single_child(&self) -> Option<Handle> {
        self.left.or(self.right)
    }
}
