use crate::error::Result;
use crate::red_black_tree::node::Color;
use crate::red_black_tree::traversal::Traversal;
use crate::red_black_tree::tree::RedBlackTree;
use log::debug;
use std::fmt::Debug;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

impl<T, C> RedBlackTree<T, C>
where
    T: Debug,
{
    /// Writes the tree as an undirected dot graph. Each node is written as
    /// `n<id>[color=<color>, label="<value>"];` and each edge as `n<parent> -- n<child>;`.
    /// Only available in debug builds.
    ///
    /// # Examples
    ///
    /// ```
    /// use rb_collections::red_black_tree::RedBlackTree;
    ///
    /// let mut tree = RedBlackTree::new();
    /// tree.add(1).unwrap();
    /// tree.add(2).unwrap();
    ///
    /// let mut out = Vec::new();
    /// tree.write_dot(&mut out).unwrap();
    /// let dot = String::from_utf8(out).unwrap();
    /// assert!(dot.contains("n0 -- n1;"));
    /// ```
    pub fn write_dot<W>(&self, writer: &mut W) -> Result<()>
    where
        W: Write,
    {
        let chunk_size = self.arena.chunk_size();
        writeln!(writer, "graph {{")?;
        for handle in self.handles(Traversal::PreOrder) {
            let node = &self.arena[handle];
            let color = match node.color {
                Color::Red => "red",
                Color::Black => "black",
                Color::DoubleBlack => "gray",
            };
            let label = format!("{:?}", node.data).replace('"', "\\\"");
            writeln!(
                writer,
                "\tn{}[color={}, label=\"{}\"];",
                handle.id(chunk_size),
                color,
                label,
            )?;
            if let Some(parent) = node.parent {
                writeln!(
                    writer,
                    "\tn{} -- n{};",
                    parent.id(chunk_size),
                    handle.id(chunk_size),
                )?;
            }
        }
        writeln!(writer, "}}")?;
        Ok(())
    }

    /// Dumps the tree as a dot graph into the file at `path`, replacing its contents. Only
    /// available in debug builds.
    pub fn dump_dot<P>(&self, path: P) -> Result<()>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        let mut writer = BufWriter::new(File::create(path)?);
        self.write_dot(&mut writer)?;
        writer.flush()?;
        debug!("dumped {} nodes to {}", self.len(), path.display());
        Ok(())
    }
}
