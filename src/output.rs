//! Output formatting for pathtree results.
//!
//! Writes a [`PathtreeResult`] as the drawn tree, as a depth dump, or as JSON.

use crate::options::PathtreeOptions;
use crate::render::TreeRenderer;
use crate::tree::Node;
use crate::{PathtreeError, PathtreeResult};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Tree,
    Dump,
    Json,
}

impl OutputFormat {
    /// Returns the conventional file extension for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Tree | OutputFormat::Dump => "txt",
            OutputFormat::Json => "json",
        }
    }
}

/// Writes the result to `out` in the given format.
///
/// In debug mode the line echoing the offset prefix is written first, except
/// for JSON, which must stay a single parseable document.
pub fn write_result<W: Write>(
    result: &PathtreeResult,
    format: OutputFormat,
    options: &PathtreeOptions,
    pretty: bool,
    out: &mut W,
) -> Result<(), PathtreeError> {
    if options.debug && format != OutputFormat::Json {
        writeln!(out, "{}", options.debug_line())
            .map_err(|e| PathtreeError::io("writing debug line", e))?;
    }
    match format {
        OutputFormat::Tree => TreeRenderer::new(options).render(result.tree.root(), out),
        OutputFormat::Dump => write_dump(result.tree.root(), out),
        OutputFormat::Json => write_json(result, pretty, out),
    }
}

/// Formats the result into a string.
pub fn format_result(
    result: &PathtreeResult,
    format: OutputFormat,
    options: &PathtreeOptions,
    pretty: bool,
) -> Result<String, PathtreeError> {
    let mut buf = Vec::new();
    write_result(result, format, options, pretty, &mut buf)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Writes the formatted result to a file.
pub fn write_result_to_file(
    result: &PathtreeResult,
    format: OutputFormat,
    options: &PathtreeOptions,
    path: impl AsRef<Path>,
    pretty: bool,
) -> Result<(), PathtreeError> {
    let file = File::create(path.as_ref()).map_err(|e| PathtreeError::io("creating output file", e))?;
    let mut out = BufWriter::new(file);
    write_result(result, format, options, pretty, &mut out)?;
    out.flush()
        .map_err(|e| PathtreeError::io("writing output file", e))
}

// ----------------------- Internal formatting -----------------------
//
// Both walks keep their position on a heap stack: a single input line can
// nest arbitrarily deep.

fn write_dump<W: Write>(root: &Node, out: &mut W) -> Result<(), PathtreeError> {
    let mut stack = vec![(root, 0usize)];
    while let Some((node, depth)) = stack.pop() {
        writeln!(out, "depth: {} > child name: {}", depth, node.name)
            .map_err(|e| PathtreeError::io("writing dump", e))?;
        stack.extend(node.children.iter().rev().map(|child| (child, depth + 1)));
    }
    Ok(())
}

enum JsonStep<'a> {
    Node(&'a Node, usize),
    Item { first: bool, level: usize },
    Close(&'static str, usize),
}

struct JsonWriter<'w, W> {
    out: &'w mut W,
    pretty: bool,
}

impl<W: Write> JsonWriter<'_, W> {
    fn raw(&mut self, text: &str) -> Result<(), PathtreeError> {
        self.out
            .write_all(text.as_bytes())
            .map_err(|e| PathtreeError::io("writing JSON", e))
    }

    fn newline(&mut self, level: usize) -> Result<(), PathtreeError> {
        if self.pretty {
            self.raw("\n")?;
            self.raw(&"  ".repeat(level))?;
        }
        Ok(())
    }

    fn key(&mut self, key: &str) -> Result<(), PathtreeError> {
        self.raw(&serde_json::to_string(key)?)?;
        self.raw(if self.pretty { ": " } else { ":" })
    }

    /// Writes `root` as `{"name": ..., "children": [...]}`, omitting empty children.
    fn tree(&mut self, root: &Node, level: usize) -> Result<(), PathtreeError> {
        let mut steps = vec![JsonStep::Node(root, level)];
        while let Some(step) = steps.pop() {
            match step {
                JsonStep::Node(node, level) => {
                    self.raw("{")?;
                    self.newline(level + 1)?;
                    self.key("name")?;
                    self.raw(&serde_json::to_string(&node.name)?)?;
                    if node.children.is_empty() {
                        steps.push(JsonStep::Close("}", level));
                        continue;
                    }
                    self.raw(",")?;
                    self.newline(level + 1)?;
                    self.key("children")?;
                    self.raw("[")?;
                    steps.push(JsonStep::Close("}", level));
                    steps.push(JsonStep::Close("]", level + 1));
                    for (index, child) in node.children.iter().enumerate().rev() {
                        steps.push(JsonStep::Node(child, level + 2));
                        steps.push(JsonStep::Item {
                            first: index == 0,
                            level: level + 2,
                        });
                    }
                }
                JsonStep::Item { first, level } => {
                    if !first {
                        self.raw(",")?;
                    }
                    self.newline(level)?;
                }
                JsonStep::Close(bracket, level) => {
                    self.newline(level)?;
                    self.raw(bracket)?;
                }
            }
        }
        Ok(())
    }
}

/// Writes the same document `serde_json` would produce for the result, with
/// the same two-space indentation when `pretty` is set.
fn write_json<W: Write>(
    result: &PathtreeResult,
    pretty: bool,
    out: &mut W,
) -> Result<(), PathtreeError> {
    let mut json = JsonWriter { out, pretty };
    json.raw("{")?;
    json.newline(1)?;
    json.key("tree")?;
    json.tree(result.tree.root(), 1)?;
    json.raw(",")?;
    json.newline(1)?;
    json.key("paths_read")?;
    json.raw(&result.paths_read.to_string())?;
    json.newline(0)?;
    json.raw("}\n")
}
