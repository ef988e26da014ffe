use crate::block_parser::BlockBody;
use crate::block_parser::tests::helpers::{assert_block_kinds, kinds, parse_blocks};
use crate::registry::BlockKind;

fn only_list(input: &str) -> crate::block_parser::ListBlock {
    let mut blocks = parse_blocks(input);
    assert_eq!(blocks.len(), 1, "expected a single block for {:?}", input);
    match blocks.remove(0).body {
        BlockBody::List(list) => list,
        other => panic!("expected list, got {:?}", other),
    }
}

#[test]
fn simple_bullet_list() {
    let list = only_list("* one\n* two\n* three\n");
    assert_eq!(list.items.len(), 3);
    assert!(!list.ordered);
    assert!(!list.loose);
}

#[test]
fn bullet_list_requires_space_after_marker() {
    assert_block_kinds("*one\n*two\n", &[BlockKind::Paragraph]);
}

#[test]
fn any_bullet_marker_continues_the_list() {
    let list = only_list("* item\n+ item\n- item\n");
    assert_eq!(list.items.len(), 3);
}

#[test]
fn ordered_marker_does_not_continue_bullet_list() {
    let blocks = parse_blocks("- a\n1. b");
    assert_eq!(kinds(&blocks), vec![BlockKind::List]);
    match &blocks[0].body {
        BlockBody::List(list) => {
            assert_eq!(list.items.len(), 1);
            assert_eq!(list.items[0].lines, vec!["a", "1. b"]);
        }
        other => panic!("expected list, got {:?}", other),
    }
}

#[test]
fn bullet_list_indented_4_spaces_is_code() {
    assert_block_kinds("    * not a list\n", &[BlockKind::Code]);
}

#[test]
fn lazy_continuation_joins_item() {
    let list = only_list("* here is my first\nlist item.\n* and my second.\n");
    assert_eq!(list.items.len(), 2);
    assert_eq!(list.items[0].lines, vec!["here is my first", "list item."]);
}

#[test]
fn nested_list_is_scanned_as_item_blocks() {
    let list = only_list("- a\n    - b\n    - c\n- d");
    assert_eq!(list.items.len(), 2);
    assert_eq!(
        kinds(&list.items[0].blocks),
        vec![BlockKind::Paragraph, BlockKind::List]
    );
}

#[test]
fn ordered_list_start_number() {
    let list = only_list("7. seven\n8. eight");
    assert!(list.ordered);
    assert_eq!(list.start.as_deref(), Some("7"));
}

#[test]
fn blank_line_between_items_makes_list_loose() {
    let list = only_list("- a\n\n- b");
    assert!(list.loose);
    assert!(list.items.iter().all(|item| !item.is_tight()));
}

#[test]
fn unindented_paragraph_after_blank_ends_list() {
    assert_block_kinds("- a\n\npara", &[BlockKind::List, BlockKind::Paragraph]);
}

#[test]
fn indented_paragraph_after_blank_stays_in_item() {
    let list = only_list("- a\n\n  more");
    assert_eq!(list.items[0].lines, vec!["a", "", "more"]);
    assert_eq!(
        kinds(&list.items[0].blocks),
        vec![BlockKind::Paragraph, BlockKind::Paragraph]
    );
}
