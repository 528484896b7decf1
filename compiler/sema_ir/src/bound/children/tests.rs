use pretty_assertions::assert_eq;

use crate::bound::{ArgumentList, BoundNode};
use crate::{Anchor, StringInterner};

use super::*;

fn tree() -> BoundTree {
    BoundTree::new(std::sync::Arc::new(StringInterner::new()))
}

fn leaf(tree: &mut BoundTree, start: u32) -> BoundId {
    tree.alloc(BoundNode::new(BoundKind::Literal, Anchor::new(start, start + 1)))
}

#[test]
fn call_children_are_receiver_then_arguments() {
    let mut t = tree();
    let receiver = leaf(&mut t, 0);
    let a = leaf(&mut t, 4);
    let b = leaf(&mut t, 7);
    let range = t.alloc_list(&[a, b]);
    let args = t.add_arguments(ArgumentList::positional(range));
    let call = t.alloc(BoundNode::new(
        BoundKind::Call {
            receiver,
            method: None,
            arguments: args,
            result: crate::bound::LookupResult::Empty,
        },
        Anchor::new(0, 9),
    ));
    assert_eq!(t.children(call), vec![receiver, a, b]);
}

#[test]
fn absent_children_are_skipped() {
    let mut t = tree();
    let cond = leaf(&mut t, 4);
    let then = leaf(&mut t, 8);
    let if_stmt = t.alloc(BoundNode::new(
        BoundKind::If {
            condition: cond,
            consequence: then,
            alternative: BoundId::INVALID,
        },
        Anchor::new(0, 10),
    ));
    assert_eq!(t.children(if_stmt), vec![cond, then]);
}

#[test]
fn do_loop_body_precedes_condition() {
    let mut t = tree();
    let body = leaf(&mut t, 3);
    let cond = leaf(&mut t, 12);
    let do_loop = t.alloc(BoundNode::new(
        BoundKind::Do {
            condition: cond,
            body,
            locals: crate::bound::SymbolRange::EMPTY,
        },
        Anchor::new(0, 14),
    ));
    assert_eq!(t.children(do_loop), vec![body, cond]);
}

#[test]
fn internal_sequence_exposes_side_effects_and_value() {
    let mut t = tree();
    let first = leaf(&mut t, 0);
    let second = leaf(&mut t, 2);
    let value = leaf(&mut t, 4);
    let side_effects = t.alloc_list(&[first, second]);
    let seq = t.alloc(BoundNode::new(
        BoundKind::Sequence {
            side_effects,
            value,
        },
        Anchor::new(0, 5),
    ));
    assert_eq!(t.children(seq), vec![first, second, value]);
    assert!(t.children(first).is_empty());
}
