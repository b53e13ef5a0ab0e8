//! Human-readable dump of the tree.
//!
//! The format is for debugging only:
//! ```text
//! Level 0 [3]
//! Level 1 [1, 2]
//! Level 1 [3, 4, 5, 6]
//! ```

use std::fmt;
use std::io::{self, Write};

use crate::common::{NodeId, Result};
use crate::index::btree::BTree;

impl BTree {
    /// Write the pre-order dump to `out`.
    ///
    /// # Errors
    /// - `Error::Io` if writing to `out` fails
    pub fn display_to<W: Write>(&self, mut out: W) -> Result<()> {
        write!(out, "{}", self)?;
        out.flush()?;
        Ok(())
    }

    /// Write the pre-order dump to stderr.
    pub fn display(&self) {
        if let Err(err) = self.display_to(io::stderr().lock()) {
            tracing::warn!(%err, "failed to write tree dump");
        }
    }

    fn fmt_node(&self, f: &mut fmt::Formatter<'_>, id: NodeId, level: usize) -> fmt::Result {
        let node = self.pool.get(id);

        write!(f, "Level {} [", level)?;
        for (i, key) in node.keys().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", key)?;
        }
        writeln!(f, "]")?;

        for child in node.children() {
            self.fmt_node(f, child, level + 1)?;
        }
        Ok(())
    }
}

impl fmt::Display for BTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_node(f, self.root, 0)
    }
}
