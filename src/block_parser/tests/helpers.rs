use crate::block_parser::{Block, BlockBody};
use crate::config::{ConfigBuilder, Dialect};
use crate::engine::Engine;
use crate::registry::BlockKind;

pub fn parse_blocks(input: &str) -> Vec<Block> {
    Engine::default().blocks(input)
}

pub fn parse_extended(input: &str) -> Vec<Block> {
    extended_engine().blocks(input)
}

pub fn extended_engine() -> Engine {
    Engine::new(
        ConfigBuilder::default()
            .dialect(Dialect::Extended)
            .safe_mode(false)
            .build(),
    )
}

pub fn kinds(blocks: &[Block]) -> Vec<BlockKind> {
    blocks.iter().map(|b| b.kind).collect()
}

pub fn assert_block_kinds(input: &str, expected: &[BlockKind]) {
    let actual = kinds(&parse_blocks(input));
    assert_eq!(
        actual, expected,
        "Block kinds did not match for input:\n{}",
        input
    );
}

/// Blocks that produce output.
pub fn visible(blocks: &[Block]) -> Vec<&Block> {
    blocks.iter().filter(|b| !b.hidden).collect()
}

pub fn paragraph_text(block: &Block) -> Option<&str> {
    match &block.body {
        BlockBody::Paragraph { text } => Some(text),
        _ => None,
    }
}

/// Print debug output for inspection
#[allow(dead_code)]
pub fn debug_blocks(blocks: &[Block]) -> String {
    format!("{:#?}", blocks)
}
