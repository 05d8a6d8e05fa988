use crate::test_support::*;
use crate::*;

/// Counts nodes, failing on kinds it was not written for.
struct StrictCounter;

impl GenericVisitor<usize> for StrictCounter {
    type Output = Result<(), SyntaxKind>;

    fn visit_default(&mut self, arena: &NodeArena, node: NodeIndex, _: &mut usize) -> Self::Output {
        match arena.kind(node) {
            Some(kind) => Err(kind),
            None => Ok(()),
        }
    }

    fn visit_block_stmt(
        &mut self,
        arena: &NodeArena,
        _: NodeIndex,
        data: &BlockStmtData,
        count: &mut usize,
    ) -> Self::Output {
        *count += 1;
        for stmt in data.statements.iter() {
            self.visit(arena, stmt, count)?;
        }
        Ok(())
    }

    fn visit_empty_stmt(
        &mut self,
        _: &NodeArena,
        _: NodeIndex,
        _: &EmptyStmtData,
        count: &mut usize,
    ) -> Self::Output {
        *count += 1;
        Ok(())
    }
}

#[test]
fn test_default_policy_names_unhandled_kind() {
    let mut arena = NodeArena::new();
    let a = arena.add(EmptyStmtData {}).unwrap();
    let b = arena.add(EmptyStmtData {}).unwrap();
    let inner = block(&mut arena, vec![b]);
    let outer = block(&mut arena, vec![a, inner]);

    let mut count = 0;
    assert_eq!(StrictCounter.visit(&arena, outer, &mut count), Ok(()));
    assert_eq!(count, 4);

    let value = int_literal(&mut arena, "1");
    let stmt = expr_stmt(&mut arena, value);
    let mixed = block(&mut arena, vec![stmt]);
    let mut count = 0;
    assert_eq!(
        StrictCounter.visit(&arena, mixed, &mut count),
        Err(SyntaxKind::ExpressionStmt)
    );
}

#[test]
fn test_missing_node_goes_to_default() {
    let arena = NodeArena::new();
    let mut count = 0;
    assert_eq!(StrictCounter.visit(&arena, NodeIndex(3), &mut count), Ok(()));
    assert_eq!(count, 0);
}

#[test]
fn test_pre_order_walker_matches_walk() {
    let mut arena = NodeArena::new();
    let s = sample_tree(&mut arena);

    let mut visited = Vec::new();
    PreOrderWalker(|_: &NodeArena, node, out: &mut Vec<NodeIndex>| out.push(node)).visit(
        &arena,
        s.unit,
        &mut visited,
    );
    assert_eq!(visited, arena.walk(s.unit, TreeTraversal::PreOrder));
    assert_eq!(visited.first(), Some(&s.unit));
    assert!(visited.contains(&s.call));
}

/// Collects `NameExpr` identifiers while descending into every other kind.
struct NameCollector;

impl VoidVisitor<Vec<String>> for NameCollector {
    fn visit_default(&mut self, arena: &NodeArena, node: NodeIndex, names: &mut Vec<String>) {
        walk_children(self, arena, node, names);
    }

    fn visit_name_expr(
        &mut self,
        arena: &NodeArena,
        _: NodeIndex,
        data: &NameExprData,
        names: &mut Vec<String>,
    ) {
        if let Some(text) = arena.get(data.name).and_then(|n| n.data().identifier()) {
            names.push(text.to_string());
        }
    }
}

#[test]
fn test_void_visitor_recursing_default() {
    let mut arena = NodeArena::new();
    let s = sample_tree(&mut arena);
    let mut names = Vec::new();
    NameCollector.visit(&arena, s.unit, &mut names);
    assert_eq!(names, vec!["count", "count"]);
}

/// Finds integer literals to rewrite; the edits are applied after the walk.
struct LiteralFinder;

impl VoidVisitor<Vec<NodeIndex>> for LiteralFinder {
    fn visit_default(&mut self, arena: &NodeArena, node: NodeIndex, found: &mut Vec<NodeIndex>) {
        walk_children(self, arena, node, found);
    }

    fn visit_integer_literal_expr(
        &mut self,
        _: &NodeArena,
        node: NodeIndex,
        _: &IntegerLiteralExprData,
        found: &mut Vec<NodeIndex>,
    ) {
        found.push(node);
    }
}

#[test]
fn test_collect_then_apply_rewrite() {
    let mut arena = NodeArena::new();
    let s = sample_tree(&mut arena);

    let mut found = Vec::new();
    LiteralFinder.visit(&arena, s.unit, &mut found);
    assert_eq!(found.len(), 1);

    for literal in found {
        let replacement = int_literal(&mut arena, "42");
        assert_eq!(arena.replace_in_parent(literal, replacement), Ok(true));
    }

    let value = arena.child(s.assign, PropertyTag::Value);
    match arena.get(value).map(Node::data) {
        Some(NodeData::IntegerLiteralExpr(data)) => assert_eq!(data.value, "42"),
        other => panic!("unexpected {other:?}"),
    }
    assert_eq!(arena.verify_parent_links(), Ok(()));
}

trait Sink {
    fn seen(&mut self, node: NodeIndex);
}

impl Sink for Vec<NodeIndex> {
    fn seen(&mut self, node: NodeIndex) {
        self.push(node);
    }
}

/// Computes subtree height and reports every node to an unsized argument.
struct Height;

impl<'s> GenericVisitor<dyn Sink + 's> for Height {
    type Output = usize;

    fn visit_default(&mut self, arena: &NodeArena, node: NodeIndex, sink: &mut (dyn Sink + 's)) -> usize {
        sink.seen(node);
        let mut deepest = 0;
        for child in arena.children(node) {
            deepest = deepest.max(self.visit(arena, child, sink));
        }
        deepest + 1
    }
}

#[test]
fn test_generic_visitor_over_unsized_argument() {
    let mut arena = NodeArena::new();
    let statement = arena.add(EmptyStmtData {}).unwrap();
    let inner = block(&mut arena, vec![statement]);
    let outer = block(&mut arena, vec![inner]);

    let mut seen: Vec<NodeIndex> = Vec::new();
    let height = Height.visit(&arena, outer, &mut seen as &mut dyn Sink);
    assert_eq!(height, 3);
    assert_eq!(seen, vec![outer, inner, statement]);
}
