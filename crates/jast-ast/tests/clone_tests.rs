use crate::test_support::*;
use crate::*;

#[test]
fn test_deep_clone_is_structurally_equal_and_detached() {
    let mut arena = NodeArena::new();
    let s = sample_tree(&mut arena);
    let before = arena.len();

    let copy = arena.deep_clone(s.method).unwrap();
    assert!(arena.subtrees_equal(s.method, copy));
    assert!(arena.parent(copy).is_none(), "clone is a root");
    assert_eq!(arena.parent(s.method), s.class, "original stays attached");
    assert_eq!(
        arena.len() - before,
        arena.walk(s.method, TreeTraversal::PreOrder).len()
    );
    assert_eq!(arena.verify_parent_links(), Ok(()));
}

#[test]
fn test_clone_shares_no_nodes_with_original() {
    let mut arena = NodeArena::new();
    let s = sample_tree(&mut arena);
    let copy = arena.deep_clone(s.unit).unwrap();

    let original = arena.walk(s.unit, TreeTraversal::PreOrder);
    let cloned = arena.walk(copy, TreeTraversal::PreOrder);
    assert_eq!(original.len(), cloned.len());
    assert!(cloned.iter().all(|n| !original.contains(n)));
    for (&orig, &dup) in original.iter().zip(cloned.iter()) {
        assert_eq!(arena.kind(orig), arena.kind(dup));
    }
}

#[test]
fn test_editing_clone_leaves_original_alone() {
    let mut arena = NodeArena::new();
    let s = sample_tree(&mut arena);
    let copy = arena.deep_clone(s.body).unwrap();

    let first = arena.list(copy, PropertyTag::Statements).unwrap().get(0).unwrap();
    assert_eq!(arena.remove(copy, first), Ok(true));
    assert!(!arena.subtrees_equal(s.body, copy));
    assert_eq!(arena.list(s.body, PropertyTag::Statements).unwrap().len(), 2);
}

#[test]
fn test_clone_drops_ranges() {
    let mut arena = NodeArena::new();
    let value = int_literal(&mut arena, "7");
    arena.set_range(value, Some(TextRange::new(3, 4))).unwrap();
    let stmt = expr_stmt(&mut arena, value);
    arena.set_range(stmt, Some(TextRange::new(3, 5))).unwrap();

    let copy = arena.deep_clone(stmt).unwrap();
    assert_eq!(arena.range(copy), None);
    assert_eq!(arena.range(arena.child(copy, PropertyTag::Expression)), None);
    assert!(arena.subtrees_equal(stmt, copy), "ranges do not affect equality");
}

#[test]
fn test_clone_across_arenas() {
    let mut source = NodeArena::new();
    let s = sample_tree(&mut source);
    let mut target = NodeArena::new();
    let filler = target.add(EmptyStmtData {}).unwrap();

    let copy = clone_subtree(&source, s.class, &mut target).unwrap();
    assert_ne!(copy, filler);
    assert!(structurally_equal(&source, s.class, &target, copy));
    assert_eq!(target.verify_parent_links(), Ok(()));
    assert_eq!(
        dump::to_json(&source, s.class),
        dump::to_json(&target, copy)
    );
}

#[test]
fn test_clone_copies_user_data() {
    const NOTE: DataKey<&'static str> = DataKey::new("note");

    let mut arena = NodeArena::new();
    let s = sample_tree(&mut arena);
    arena.set_data(s.call, NOTE, "resolved").unwrap();

    let copy = arena.deep_clone(s.call_stmt).unwrap();
    let call_copy = arena.child(copy, PropertyTag::Expression);
    assert_eq!(arena.data(call_copy, NOTE), Some(&"resolved"));

    arena.set_data(call_copy, NOTE, "changed").unwrap();
    assert_eq!(arena.data(s.call, NOTE), Some(&"resolved"));
}

#[test]
fn test_clone_unknown_node_fails() {
    let mut arena = NodeArena::new();
    assert_eq!(
        arena.deep_clone(NodeIndex(8)),
        Err(AstError::InvalidIndex(NodeIndex(8)))
    );
}

#[test]
fn test_structural_equality_sees_scalars_and_optional_slots() {
    let mut arena = NodeArena::new();
    let a = int_literal(&mut arena, "1");
    let b = int_literal(&mut arena, "1");
    let c = int_literal(&mut arena, "2");
    assert!(arena.subtrees_equal(a, b));
    assert!(!arena.subtrees_equal(a, c));

    let with_value = arena.add(ReturnStmtData { expression: a }).unwrap();
    let bare = arena.add(ReturnStmtData::default()).unwrap();
    assert!(!arena.subtrees_equal(with_value, bare));
    assert!(arena.subtrees_equal(NodeIndex::NONE, NodeIndex::NONE));
}

#[test]
fn test_compact_leaves_detached_nodes_behind() {
    const NOTE: DataKey<&'static str> = DataKey::new("note");

    let mut arena = NodeArena::new();
    let s = sample_tree(&mut arena);
    arena.set_range(s.class, Some(TextRange::new(0, 40))).unwrap();
    arena.set_data(s.call, NOTE, "resolved").unwrap();
    arena.set_data(s.field, NOTE, "dropped").unwrap();
    assert!(arena.remove_from_parent(s.field).unwrap());
    arena.deep_clone(s.method).unwrap();

    let (compacted, unit) = arena.compact(s.unit).unwrap();
    let before = arena.walk(s.unit, TreeTraversal::PreOrder);
    let after = compacted.walk(unit, TreeTraversal::PreOrder);
    assert_eq!(compacted.len(), after.len(), "only live nodes are copied");
    assert!(compacted.len() < arena.len());
    assert!(compacted.parent(unit).is_none());
    assert!(structurally_equal(&arena, s.unit, &compacted, unit));
    assert_eq!(compacted.verify_parent_links(), Ok(()));

    let at = |node: NodeIndex| after[before.iter().position(|&n| n == node).unwrap()];
    assert_eq!(compacted.range(at(s.class)), Some(TextRange::new(0, 40)));
    assert_eq!(compacted.data(at(s.call), NOTE), Some(&"resolved"));
    for node in after {
        assert_ne!(compacted.data(node, NOTE), Some(&"dropped"));
    }
}
