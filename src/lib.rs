pub mod block_parser;
pub mod config;
pub mod definitions;
pub mod engine;
pub mod error;
pub mod inline_parser;
pub mod io;
pub mod lines;
pub mod node;
pub mod registry;
pub mod renderer;

pub use block_parser::Block;
pub use config::Config;
pub use config::ConfigBuilder;
pub use config::Dialect;
pub use definitions::DefinitionTable;
pub use engine::Engine;
pub use error::Error;
pub use node::RenderNode;
pub use registry::{BlockKind, InlineKind, Registry};

#[cfg(debug_assertions)]
fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Converts a Markdown document to HTML.
///
/// Conversion is total: any input produces some output, and malformed
/// constructs fall back to literal paragraph text.
///
/// # Examples
///
/// ```
/// use fastdown::{ConfigBuilder, Dialect};
///
/// let html = fastdown::parse("# hello world", None);
/// assert_eq!(html, "<h1>hello world</h1>");
///
/// let cfg = ConfigBuilder::default().dialect(Dialect::Extended).build();
/// let html = fastdown::parse("## Title {#top}", Some(cfg));
/// assert_eq!(html, "<h2 id=\"top\">Title</h2>");
/// ```
///
/// # Arguments
///
/// * `input` - The Markdown source
/// * `config` - Optional configuration (defaults to default config)
pub fn parse(input: &str, config: Option<Config>) -> String {
    #[cfg(debug_assertions)]
    {
        init_logger();
    }

    let config = config.unwrap_or_default();
    Engine::new(config).parse(input)
}
