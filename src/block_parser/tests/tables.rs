use crate::block_parser::tests::helpers::{assert_block_kinds, parse_blocks};
use crate::block_parser::{Alignment, BlockBody};
use crate::registry::BlockKind;

fn table(input: &str) -> crate::block_parser::TableBlock {
    let blocks = parse_blocks(input);
    match blocks.into_iter().next().map(|b| b.body) {
        Some(BlockBody::Table(table)) => table,
        other => panic!("expected table, got {:?}", other),
    }
}

#[test]
fn header_divider_and_rows() {
    let t = table("a | b\n--|:-:\n1 | 2\n3 | 4");
    assert_eq!(t.header, vec!["a", "b"]);
    assert_eq!(t.alignments, vec![None, Some(Alignment::Center)]);
    assert_eq!(t.rows.len(), 2);
    assert_eq!(t.rows[1], vec!["3", "4"]);
}

#[test]
fn outer_pipes_are_optional() {
    let t = table("| a | b |\n| --- | --- |\n| 1 | 2 |");
    assert_eq!(t.header, vec!["a", "b"]);
    assert_eq!(t.rows, vec![vec!["1".to_string(), "2".to_string()]]);
}

#[test]
fn table_needs_pipe_in_header() {
    assert_block_kinds("a\n---", &[BlockKind::SetextHeader]);
}

#[test]
fn blank_line_ends_table() {
    assert_block_kinds(
        "a | b\n--|--\n1 | 2\n\n3 | 4",
        &[BlockKind::Table, BlockKind::Paragraph],
    );
}

#[test]
fn row_without_pipe_ends_table() {
    assert_block_kinds(
        "a | b\n--|--\nplain",
        &[BlockKind::Table, BlockKind::Paragraph],
    );
}
