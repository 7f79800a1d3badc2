use serde::{Deserialize, Serialize};

pub const DEFAULT_SEPARATOR: &str = "/";
pub const ITEM_GLYPH: &str = "\u{251C}\u{2500}";
pub const LAST_ITEM_GLYPH: &str = "\u{2514}\u{2500}";
pub const LINE_CONT_GLYPH: &str = "\u{2502}";
pub const DEFAULT_OFFSET_PREFIX: &str = "   ";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathtreeOptions {
    pub separator: String,
    pub item_glyph: String,
    pub last_item_glyph: String,
    pub line_cont_glyph: String,
    pub offset_prefix: String,
    pub debug: bool,
}
impl Default for PathtreeOptions {
    fn default() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR.to_string(),
            item_glyph: ITEM_GLYPH.to_string(),
            last_item_glyph: LAST_ITEM_GLYPH.to_string(),
            line_cont_glyph: LINE_CONT_GLYPH.to_string(),
            offset_prefix: DEFAULT_OFFSET_PREFIX.to_string(),
            debug: false,
        }
    }
}
impl PathtreeOptions {
    /// The diagnostic line printed ahead of the tree in debug mode.
    pub fn debug_line(&self) -> String {
        format!("offsetPrefix set to: [{}]", self.offset_prefix)
    }
}
#[derive(Debug, Default)]
pub struct PathtreeBuilder {
    options: PathtreeOptions,
}
impl PathtreeBuilder {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn separator(mut self, separator: impl Into<String>) -> Self {
        self.options.separator = separator.into();
        self
    }
    pub fn item_glyph(mut self, glyph: impl Into<String>) -> Self {
        self.options.item_glyph = glyph.into();
        self
    }
    pub fn last_item_glyph(mut self, glyph: impl Into<String>) -> Self {
        self.options.last_item_glyph = glyph.into();
        self
    }
    pub fn line_cont_glyph(mut self, glyph: impl Into<String>) -> Self {
        self.options.line_cont_glyph = glyph.into();
        self
    }
    pub fn offset_prefix(mut self, offset: impl Into<String>) -> Self {
        self.options.offset_prefix = offset.into();
        self
    }
    pub fn debug(mut self, yes: bool) -> Self {
        self.options.debug = yes;
        self
    }
    pub fn build(self) -> PathtreeOptions {
        self.options
    }
}
