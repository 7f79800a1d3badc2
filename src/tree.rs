//! Shared-prefix tree built from delimited path strings.

use serde::{Deserialize, Serialize};
#[cfg(feature = "logging")]
use tracing;

/// Display label of the root node.
pub const ROOT_LABEL: &str = "/";

/// One path segment and the segments inserted below it, in first-insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    pub name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Node>,
}

impl Node {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            children: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    fn count(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            count += 1;
            stack.extend(&node.children);
        }
        count
    }
}

// Descendants are detached and dropped one at a time, so tree depth never
// turns into call stack depth.
impl Drop for Node {
    fn drop(&mut self) {
        let mut stack = std::mem::take(&mut self.children);
        while let Some(mut node) = stack.pop() {
            stack.append(&mut node.children);
        }
    }
}

/// Returns the direct child called `name`, if any.
///
/// Sibling names are unique, so the first match is the only one.
pub fn find_child<'a>(children: &'a [Node], name: &str) -> Option<&'a Node> {
    child_position(children, name).map(|index| &children[index])
}

fn segments<'p>(path: &'p str, separator: &'p str) -> Box<dyn Iterator<Item = &'p str> + 'p> {
    if separator.is_empty() {
        Box::new(
            path.char_indices()
                .map(move |(start, c)| &path[start..start + c.len_utf8()]),
        )
    } else {
        Box::new(path.split(separator))
    }
}

fn child_position(children: &[Node], name: &str) -> Option<usize> {
    children.iter().position(|child| child.name == name)
}

/// An ordered tree of path segments rooted at [`ROOT_LABEL`].
///
/// The tree only grows: paths are inserted one at a time and shared prefixes
/// are merged into the nodes that already exist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PathTree {
    root: Node,
}

impl Default for PathTree {
    fn default() -> Self {
        Self {
            root: Node::new(ROOT_LABEL),
        }
    }
}

impl PathTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Number of nodes, root included.
    pub fn node_count(&self) -> usize {
        self.root.count()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_leaf()
    }

    /// Splits `path` on `separator` and merges the segments into the tree.
    ///
    /// The first segment is always dropped, so `/a/b` inserts `a` then `b`
    /// while `a/b` inserts only `b`. A path with a single segment (including
    /// the empty string) inserts nothing. An empty separator splits the path
    /// into its characters.
    pub fn insert(&mut self, path: &str, separator: &str) {
        let mut current = &mut self.root;
        for segment in segments(path, separator).skip(1) {
            let index = match child_position(&current.children, segment) {
                Some(index) => index,
                None => {
                    #[cfg(feature = "logging")]
                    tracing::trace!("New node '{}' under '{}'", segment, current.name);
                    current.children.push(Node::new(segment));
                    current.children.len() - 1
                }
            };
            current = &mut current.children[index];
        }
    }
}
