//! Fast, but limited allocator backing the nodes of the tree collections.

use crate::error::Result;
use std::mem;
use std::ops::{Index, IndexMut};
use std::vec::Vec;

/// A handle to a value stored in a `TypedArena<T>`.
///
/// Handles are plain indices: copying one never copies or owns the value it refers to.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Handle {
    chunk_index: usize,
    block_index: usize,
}

impl Handle {
    /// Returns a number that uniquely identifies the slot of this handle within an arena of the
    /// given chunk size.
    pub fn id(self, chunk_size: usize) -> usize {
        self.chunk_index * chunk_size + self.block_index
    }
}

enum Block<T> {
    Occupied(T),
    Vacant(Option<Handle>),
}

/// A chunked slab allocator that only allocates a single type of object.
///
/// Values are addressed by `Handle`s, which stay valid until the value is freed. Freed slots are
/// threaded onto a free list and reused before new storage is requested. Storage is reserved
/// fallibly: if a new chunk cannot be reserved, `allocate` returns an error instead of aborting
/// the process.
///
/// # Examples
///
/// ```
/// use rb_collections::arena::TypedArena;
///
/// let mut arena = TypedArena::new(1024);
///
/// let x = arena.allocate(1).unwrap();
/// assert_eq!(arena[x], 1);
///
/// arena[x] += 1;
/// assert_eq!(arena[x], 2);
///
/// assert_eq!(arena.free(&x), 2);
/// ```
pub struct TypedArena<T> {
    head: Option<Handle>,
    chunks: Vec<Vec<Block<T>>>,
    chunk_size: usize,
    size: usize,
    capacity: usize,
}

impl<T> TypedArena<T> {
    fn is_valid_handle(&self, handle: &Handle) -> bool {
        handle.chunk_index < self.chunks.len()
            && handle.block_index < self.chunks[handle.chunk_index].len()
    }

    fn grow(&mut self) -> Result<()> {
        let mut chunk = Vec::new();
        chunk.try_reserve_exact(self.chunk_size)?;
        self.chunks.try_reserve(1)?;
        self.chunks.push(chunk);
        self.capacity += self.chunk_size;
        Ok(())
    }

    /// Constructs a new, empty `TypedArena<T>` with a specific number of objects per chunk. A
    /// chunk size of zero is treated as one.
    ///
    /// # Examples
    ///
    /// ```
    /// use rb_collections::arena::TypedArena;
    ///
    /// // creates a new TypedArena<T> that contains a maximum of 1024 u32's per chunk
    /// let arena: TypedArena<u32> = TypedArena::new(1024);
    /// ```
    pub fn new(chunk_size: usize) -> Self {
        TypedArena {
            head: None,
            chunks: Vec::new(),
            chunk_size: chunk_size.max(1),
            size: 0,
            capacity: 0,
        }
    }

    /// Returns the number of objects stored in each chunk.
    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// Allocates an object in the typed arena and returns a `Handle` to it. Returns
    /// `Error::AllocationFailed` if a new chunk is needed and cannot be reserved.
    ///
    /// # Examples
    ///
    /// ```
    /// use rb_collections::arena::TypedArena;
    ///
    /// let mut arena = TypedArena::new(1024);
    /// let x = arena.allocate(0).unwrap();
    /// assert_eq!(arena.len(), 1);
    /// ```
    pub fn allocate(&mut self, value: T) -> Result<Handle> {
        if let Some(handle) = self.head.take() {
            let vacant_block = mem::replace(
                &mut self.chunks[handle.chunk_index][handle.block_index],
                Block::Occupied(value),
            );
            return match vacant_block {
                Block::Vacant(next_handle) => {
                    self.head = next_handle;
                    self.size += 1;
                    Ok(handle)
                },
                Block::Occupied(_) => panic!("Expected a vacant block."),
            };
        }

        if self.size == self.capacity {
            self.grow()?;
        }
        self.size += 1;

        let chunk_count = self.chunks.len();
        let last_chunk = &mut self.chunks[chunk_count - 1];
        last_chunk.push(Block::Occupied(value));
        Ok(Handle {
            chunk_index: chunk_count - 1,
            block_index: last_chunk.len() - 1,
        })
    }

    /// Deallocates an object in the typed arena and returns the object.
    ///
    /// # Panics
    ///
    /// Panics if handle corresponds to an invalid or vacant value.
    ///
    /// # Examples
    ///
    /// ```
    /// use rb_collections::arena::TypedArena;
    ///
    /// let mut arena = TypedArena::new(1024);
    /// let x = arena.allocate(0).unwrap();
    /// assert_eq!(arena.free(&x), 0);
    /// ```
    pub fn free(&mut self, handle: &Handle) -> T {
        if !self.is_valid_handle(handle) {
            panic!("Error: attempting to free invalid block.");
        }
        if self.get(handle).is_none() {
            panic!("Error: attempting to free vacant block.");
        }
        let old_block = mem::replace(
            &mut self.chunks[handle.chunk_index][handle.block_index],
            Block::Vacant(self.head.take()),
        );
        match old_block {
            Block::Vacant(_) => unreachable!(),
            Block::Occupied(value) => {
                self.size -= 1;
                self.head = Some(*handle);
                value
            },
        }
    }

    /// Returns an immutable reference to an object in the typed arena. Returns `None` if the
    /// handle does not correspond to a valid object.
    ///
    /// # Examples
    ///
    /// ```
    /// use rb_collections::arena::TypedArena;
    ///
    /// let mut arena = TypedArena::new(1024);
    /// let x = arena.allocate(0).unwrap();
    /// assert_eq!(arena.get(&x), Some(&0));
    /// ```
    pub fn get(&self, handle: &Handle) -> Option<&T> {
        if !self.is_valid_handle(handle) {
            return None;
        }
        match self.chunks[handle.chunk_index][handle.block_index] {
            Block::Occupied(ref value) => Some(value),
            Block::Vacant(_) => None,
        }
    }

    /// Returns a mutable reference to an object in the typed arena. Returns `None` if the handle
    /// does not correspond to a valid object.
    ///
    /// # Examples
    ///
    /// ```
    /// use rb_collections::arena::TypedArena;
    ///
    /// let mut arena = TypedArena::new(1024);
    /// let x = arena.allocate(0).unwrap();
    /// assert_eq!(arena.get_mut(&x), Some(&mut 0));
    /// ```
    pub fn get_mut(&mut self, handle: &Handle) -> Option<&mut T> {
        if !self.is_valid_handle(handle) {
            return None;
        }
        match self.chunks[handle.chunk_index][handle.block_index] {
            Block::Occupied(ref mut value) => Some(value),
            Block::Vacant(_) => None,
        }
    }

    /// Returns the number of live objects in the arena.
    pub fn len(&self) -> usize {
        self.size
    }

    /// Returns `true` if the arena holds no live objects.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Drops every object in the arena and releases its chunks. Outstanding handles become
    /// invalid.
    pub fn clear(&mut self) {
        self.head = None;
        self.chunks.clear();
        self.size = 0;
        self.capacity = 0;
    }
}

impl<T> Index<Handle> for TypedArena<T> {
    type Output = T;

    fn index(&self, handle: Handle) -> &Self::Output {
        self.get(&handle).expect("Error: handle out of bounds.")
    }
}

impl<T> IndexMut<Handle> for TypedArena<T> {
    fn index_mut(&mut self, handle: Handle) -> &mut Self::Output {
        self.get_mut(&handle).expect("Error: handle out of bounds.")
    }
}

#[cfg(test)]
mod tests {
    use super::Handle;
    use super::TypedArena;

    #[test]
    #[should_panic]
    fn test_free_invalid_block() {
        let mut arena: TypedArena<u32> = TypedArena::new(1024);
        arena.free(&Handle {
            chunk_index: 0,
            block_index: 0,
        });
    }

    #[test]
    #[should_panic]
    fn test_free_vacant_block() {
        let mut arena = TypedArena::new(1024);
        let handle = arena.allocate(0).unwrap();
        arena.free(&handle);
        arena.free(&handle);
    }

    #[test]
    fn test_allocate() {
        let mut arena = TypedArena::new(1024);
        assert_eq!(
            arena.allocate(0).unwrap(),
            Handle {
                chunk_index: 0,
                block_index: 0
            },
        );
        assert_eq!(
            arena.allocate(0).unwrap(),
            Handle {
                chunk_index: 0,
                block_index: 1
            },
        );
        assert_eq!(arena.len(), 2);
    }

    #[test]
    fn test_allocate_multiple_chunks() {
        let mut arena = TypedArena::new(2);
        arena.allocate(0).unwrap();
        arena.allocate(0).unwrap();
        let handle = arena.allocate(0).unwrap();
        assert_eq!(
            handle,
            Handle {
                chunk_index: 1,
                block_index: 0
            },
        );
        assert_eq!(handle.id(arena.chunk_size()), 2);
    }

    #[test]
    fn test_free_reuses_slot() {
        let mut arena = TypedArena::new(1024);
        let x = arena.allocate(0).unwrap();
        let y = arena.allocate(1).unwrap();
        assert_eq!(arena.free(&x), 0);
        assert_eq!(arena.len(), 1);
        assert_eq!(arena.allocate(2).unwrap(), x);
        assert_eq!(arena[x], 2);
        assert_eq!(arena[y], 1);
    }

    #[test]
    fn test_free_after_refill_keeps_chunks_bounded() {
        let mut arena = TypedArena::new(2);
        let x = arena.allocate(0).unwrap();
        let y = arena.allocate(1).unwrap();
        arena.free(&x);
        arena.free(&y);
        arena.allocate(2).unwrap();
        arena.allocate(3).unwrap();
        let z = arena.allocate(4).unwrap();
        assert_eq!(
            z,
            Handle {
                chunk_index: 1,
                block_index: 0
            },
        );
    }

    #[test]
    fn test_get_vacant_block() {
        let mut arena = TypedArena::new(1024);
        let handle = arena.allocate(0).unwrap();
        arena.free(&handle);
        assert_eq!(arena.get(&handle), None);
        assert_eq!(arena.get_mut(&handle), None);
    }

    #[test]
    fn test_get_mut() {
        let mut arena = TypedArena::new(1024);
        let handle = arena.allocate(0).unwrap();
        *arena.get_mut(&handle).unwrap() = 1;
        assert_eq!(arena.get(&handle), Some(&1));
    }

    #[test]
    fn test_clear() {
        let mut arena = TypedArena::new(4);
        let handle = arena.allocate(0).unwrap();
        arena.clear();
        assert!(arena.is_empty());
        assert_eq!(arena.get(&handle), None);
        assert_eq!(arena.allocate(1).unwrap(), handle);
    }
}
