//! # Pathtree
//!
//! `pathtree` turns a flat list of delimited paths (one per line, e.g. `/a/b/c`)
//! into a drawing like the one the `tree` command prints for a directory.
//!
//! Paths are merged into a [`PathTree`], which keeps siblings in the order they
//! were first seen, and drawn by a [`TreeRenderer`] configured through
//! [`PathtreeOptions`]. The first segment of every path is dropped, so absolute
//! paths starting with the separator keep all their components.
//!
//! # Features
//!
//! - `logging`: Enables debug logging via the `tracing` crate.
//!
//! # Example
//!
//! ```
//! use pathtree::{PathtreeBuilder, TreeRenderer, pathtree};
//!
//! let options = PathtreeBuilder::new().build();
//! let input = "/src/main.rs\n/src/lib.rs\n/Cargo.toml\n";
//! let result = pathtree(input.as_bytes(), &options).expect("reading from a slice");
//!
//! let drawn = TreeRenderer::new(&options).render_to_string(result.tree.root());
//! assert_eq!(
//!     drawn,
//!     "/\n├─ src\n│   ├─ main.rs\n│   └─ lib.rs\n└─ Cargo.toml\n"
//! );
//! ```

mod engine;
mod error;
mod options;
pub mod output;
mod render;
mod tree;
mod types;

pub use engine::pathtree;
pub use error::PathtreeError;
pub use options::{
    DEFAULT_OFFSET_PREFIX, DEFAULT_SEPARATOR, ITEM_GLYPH, LAST_ITEM_GLYPH, LINE_CONT_GLYPH,
    PathtreeBuilder, PathtreeOptions,
};
pub use render::{RenderLines, TreeRenderer};
pub use tree::{Node, PathTree, ROOT_LABEL, find_child};
pub use types::PathtreeResult;
