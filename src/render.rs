//! Tree drawing.
//!
//! [`TreeRenderer`] walks a [`Node`] depth-first and produces one line per
//! node. The root is printed bare; every other node is printed as
//! `<prefix slug><branch glyph> <name>`, where the prefix slug carries one
//! column per ancestor between the root and the node's parent.

use crate::error::PathtreeError;
use crate::options::PathtreeOptions;
use crate::tree::Node;
use std::io::Write;

/// Renders trees using the glyphs and offset of a [`PathtreeOptions`].
#[derive(Debug, Clone, Copy)]
pub struct TreeRenderer<'a> {
    options: &'a PathtreeOptions,
}

impl<'a> TreeRenderer<'a> {
    pub fn new(options: &'a PathtreeOptions) -> Self {
        Self { options }
    }

    /// Lazily yields the rendered lines of `root` and its descendants.
    pub fn lines(&self, root: &'a Node) -> RenderLines<'a> {
        RenderLines {
            renderer: *self,
            pending: vec![Pending {
                node: root,
                depth: 0,
                prefix: Vec::new(),
                is_last: false,
            }],
        }
    }

    /// Writes each rendered line, newline-terminated, as soon as it is produced.
    pub fn render<W: Write>(&self, root: &'a Node, out: &mut W) -> Result<(), PathtreeError> {
        for line in self.lines(root) {
            writeln!(out, "{}", line).map_err(|e| PathtreeError::io("writing tree", e))?;
        }
        Ok(())
    }

    pub fn render_to_string(&self, root: &'a Node) -> String {
        let mut out = String::new();
        for line in self.lines(root) {
            out.push_str(&line);
            out.push('\n');
        }
        out
    }

    /// Concatenates every prefix segment followed by the offset prefix.
    pub fn prefix_slug(&self, segments: &[&str]) -> String {
        let mut slug = String::new();
        for segment in segments {
            slug.push_str(segment);
            slug.push_str(&self.options.offset_prefix);
        }
        slug
    }

    pub fn format_line(&self, node: &Node, depth: usize, prefix: &[&str], is_last: bool) -> String {
        if depth == 0 {
            return node.name.clone();
        }
        let glyph = if is_last {
            &self.options.last_item_glyph
        } else {
            &self.options.item_glyph
        };
        format!("{}{} {}", self.prefix_slug(prefix), glyph, node.name)
    }

    /// The column a node contributes to its children's prefix.
    ///
    /// A last sibling contributes an empty column to all of its children,
    /// whether or not the child is itself last.
    fn column(&self, is_last: bool) -> &'a str {
        if is_last {
            ""
        } else {
            self.options.line_cont_glyph.as_str()
        }
    }
}

struct Pending<'a> {
    node: &'a Node,
    depth: usize,
    prefix: Vec<&'a str>,
    is_last: bool,
}

/// Depth-first iterator over rendered lines, see [`TreeRenderer::lines`].
pub struct RenderLines<'a> {
    renderer: TreeRenderer<'a>,
    pending: Vec<Pending<'a>>,
}

impl<'a> Iterator for RenderLines<'a> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let Pending {
            node,
            depth,
            prefix,
            is_last,
        } = self.pending.pop()?;
        let line = self.renderer.format_line(node, depth, &prefix, is_last);

        // Children of the root start with an empty prefix.
        let child_prefix = if depth == 0 {
            prefix
        } else {
            let mut extended = prefix;
            extended.push(self.renderer.column(is_last));
            extended
        };
        let count = node.children.len();
        for (index, child) in node.children.iter().enumerate().rev() {
            self.pending.push(Pending {
                node: child,
                depth: depth + 1,
                prefix: child_prefix.clone(),
                is_last: index + 1 == count,
            });
        }
        Some(line)
    }
}
