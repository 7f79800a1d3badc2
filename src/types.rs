use crate::tree::PathTree;
use serde::{Deserialize, Serialize};

/// The complete result of consuming an input stream of paths.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct PathtreeResult {
    /// The tree built from every input line.
    ///
    /// Serializes as its root node: `{"name": "/", "children": [...]}`.
    /// Serde recurses once per level; [`crate::output`] writes the same JSON
    /// without recursing.
    pub tree: PathTree,
    /// Number of input lines read, including lines that added no node.
    pub paths_read: usize,
}
