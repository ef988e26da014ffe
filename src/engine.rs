use crate::block_parser::{Block, BlockParser};
use crate::config::Config;
use crate::definitions::DefinitionTable;
use crate::lines::split_lines;
use crate::registry::Registry;
use crate::renderer::Renderer;

/// A configured converter. Construction composes the dialect's registry once;
/// every call to [`Engine::parse`] works on its own definition table, so an
/// engine can be reused for any number of documents.
#[derive(Debug, Clone)]
pub struct Engine {
    config: Config,
    registry: Registry,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl Engine {
    pub fn new(config: Config) -> Self {
        let registry = Registry::for_dialect(config.dialect);
        Self { config, registry }
    }

    /// Build an engine around a custom registry.
    pub fn with_registry(config: Config, registry: Registry) -> Self {
        Self { config, registry }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Convert a complete document to HTML.
    pub fn parse(&self, text: &str) -> String {
        let (blocks, definitions) = self.scan(text);
        log::debug!(
            "Scanned {} top-level blocks, {} references",
            blocks.len(),
            definitions.reference_count()
        );
        Renderer::new(self, definitions).render_document(blocks)
    }

    /// Convert a fragment found `depth` containers deep, such as the
    /// content of a `markdown="1"` element.
    pub(crate) fn parse_nested(&self, text: &str, depth: usize) -> String {
        let lines = split_lines(text);
        let mut definitions = DefinitionTable::new();
        let blocks = BlockParser::nested(self, &lines, &mut definitions, depth).parse();
        Renderer::new(self, definitions).render_document(blocks)
    }

    /// The block records of a document, before any inline rendering.
    pub fn blocks(&self, text: &str) -> Vec<Block> {
        self.scan(text).0
    }

    /// The definitions a document declares.
    pub fn definitions(&self, text: &str) -> DefinitionTable {
        self.scan(text).1
    }

    fn scan(&self, text: &str) -> (Vec<Block>, DefinitionTable) {
        let lines = split_lines(text);
        let mut definitions = DefinitionTable::new();
        let blocks = BlockParser::new(self, &lines, &mut definitions).parse();
        (blocks, definitions)
    }
}
