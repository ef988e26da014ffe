use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use fastdown::Dialect;

#[derive(Parser)]
#[command(name = "fastdown")]
#[command(author, version)]
#[command(about = "A fast Markdown to HTML converter")]
#[command(
    long_about = "Fastdown converts Markdown documents to HTML. The base dialect covers \
    headings, lists, block quotes, code, tables, links, emphasis and raw HTML. The extended \
    dialect adds footnotes, definition lists, abbreviations, attribute lists and markdown \
    inside HTML blocks. Output is sanitized by default."
)]
#[command(after_help = "\
EXAMPLES:

    # Convert a file to stdout
    fastdown convert README.md

    # Convert from stdin
    cat notes.md | fastdown convert

    # Write site/README.html
    fastdown convert --out-dir site README.md

    # Use the extended dialect and allow raw HTML
    fastdown convert --dialect extended --unsafe notes.md

    # Inspect the recognized blocks
    fastdown blocks notes.md

CONFIGURATION:

Fastdown looks for configuration files in this order:
  1. Explicit --config path
  2. .fastdown.toml or fastdown.toml in the input's directory or a parent
     (the current directory when reading stdin)
  3. Built-in defaults

Example .fastdown.toml:

    dialect = \"extended\"
    safe_mode = true
    breaks_enabled = false
")]
#[command(arg_required_else_help = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to config file
    #[arg(long, global = true)]
    #[arg(help = "Path to configuration file")]
    #[arg(
        long_help = "Path to a custom configuration file. If not specified, fastdown will \
        search for .fastdown.toml or fastdown.toml in the input's directory and its parents, \
        then fall back to the built-in defaults."
    )]
    pub config: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum DialectArg {
    Base,
    Extended,
}

impl From<DialectArg> for Dialect {
    fn from(arg: DialectArg) -> Self {
        match arg {
            DialectArg::Base => Dialect::Base,
            DialectArg::Extended => Dialect::Extended,
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Convert a Markdown document to HTML
    #[command(
        long_about = "Convert a Markdown document to HTML. By default the HTML is printed to \
        stdout. With --out-dir the output is written to <out-dir>/<name>.html instead, creating \
        the directory if needed."
    )]
    #[command(after_help = "\
EXAMPLES:

    # Convert to stdout
    fastdown convert page.md

    # Convert from stdin
    echo '# Heading' | fastdown convert

    # Write out/index.html
    fastdown convert --out-dir out --name index page.md")]
    Convert {
        /// Input file (stdin if not provided)
        #[arg(help = "Input file path")]
        file: Option<PathBuf>,

        /// Directory to write the HTML file into
        #[arg(long, value_name = "DIR")]
        out_dir: Option<PathBuf>,

        /// Output file name, without extension
        #[arg(long, requires = "out_dir")]
        #[arg(
            long_help = "Name of the output file. `.html` is appended when missing. Defaults \
            to the input file stem, or `index` when reading stdin."
        )]
        name: Option<String>,

        /// Markdown dialect
        #[arg(long, value_enum)]
        dialect: Option<DialectArg>,

        /// Disable sanitizing and allow raw HTML
        #[arg(long = "unsafe")]
        unsafe_mode: bool,

        /// Only break lines on two trailing spaces or a trailing backslash
        #[arg(long)]
        no_breaks: bool,

        /// Escape raw HTML even when sanitizing is off
        #[arg(long)]
        escape_markup: bool,

        /// Do not turn bare URLs into links
        #[arg(long)]
        no_autolinks: bool,
    },
    /// Show the block records recognized in a document
    #[command(
        long_about = "Scan a document and pretty-print the recognized blocks before any inline \
        rendering. Useful for understanding how a document is split into headings, lists, \
        quotes, tables and other blocks."
    )]
    Blocks {
        /// Input file (stdin if not provided)
        #[arg(help = "Input file path")]
        file: Option<PathBuf>,
    },
}
