//! Command-line interface for pathtree.
//!
//! Reads paths from standard input, one per line, and prints them as a tree
//! on standard output.

use clap::{Parser, ValueEnum};
use pathtree::{
    DEFAULT_OFFSET_PREFIX, DEFAULT_SEPARATOR, ITEM_GLYPH, LAST_ITEM_GLYPH, LINE_CONT_GLYPH,
    PathtreeBuilder, PathtreeError, PathtreeOptions, output, pathtree,
};
use std::io::{self, Write};
use std::process::exit;

/// pathtree — draw a tree from a list of paths on stdin
#[derive(Parser)]
#[command(name = "pathtree", version, about, long_about = None)]
struct Cli {
    /// Delimiter used to split each input path into segments
    #[arg(long, default_value = DEFAULT_SEPARATOR, allow_hyphen_values = true)]
    separator: String,

    /// Glyph for an item that has later siblings
    #[arg(long, alias = "itemGlyph", default_value = ITEM_GLYPH, allow_hyphen_values = true)]
    item_glyph: String,

    /// Glyph for the last item among its siblings
    #[arg(long, alias = "lastItemGlyph", default_value = LAST_ITEM_GLYPH, allow_hyphen_values = true)]
    last_item_glyph: String,

    /// Glyph for a continuation column
    #[arg(long, alias = "lineContGlyph", default_value = LINE_CONT_GLYPH, allow_hyphen_values = true)]
    line_cont_glyph: String,

    /// String appended after each prefix column
    #[arg(long, alias = "offsetPrefix", default_value = DEFAULT_OFFSET_PREFIX, allow_hyphen_values = true)]
    offset_prefix: String,

    /// Print the resolved offset prefix before the tree
    #[arg(long)]
    debug: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Tree)]
    format: OutputFormat,

    /// Pretty output (indented JSON)
    #[arg(short, long)]
    pretty: bool,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Tree,
    Dump,
    Json,
}

impl From<OutputFormat> for output::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Tree => output::OutputFormat::Tree,
            OutputFormat::Dump => output::OutputFormat::Dump,
            OutputFormat::Json => output::OutputFormat::Json,
        }
    }
}

impl Cli {
    fn into_options(self) -> (PathtreeOptions, OutputFormat, bool) {
        let options = PathtreeBuilder::new()
            .separator(self.separator)
            .item_glyph(self.item_glyph)
            .last_item_glyph(self.last_item_glyph)
            .line_cont_glyph(self.line_cont_glyph)
            .offset_prefix(self.offset_prefix)
            .debug(self.debug)
            .build();

        (options, self.format, self.pretty)
    }
}

#[cfg(feature = "logging")]
fn setup_logging() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_target(true)
        .with_env_filter(filter)
        .init();
}

fn main() {
    let cli = Cli::parse();
    let (options, format, pretty) = cli.into_options();

    #[cfg(feature = "logging")]
    setup_logging();

    if let Err(e) = run(&options, format, pretty) {
        if e.is_broken_pipe() {
            return;
        }
        eprintln!("Error: {}", e);
        exit(1);
    }
}

fn run(options: &PathtreeOptions, format: OutputFormat, pretty: bool) -> Result<(), PathtreeError> {
    let result = pathtree(io::stdin().lock(), options)?;

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    output::write_result(&result, format.into(), options, pretty, &mut handle)?;
    handle
        .flush()
        .map_err(|e| PathtreeError::io("flushing output", e))
}
