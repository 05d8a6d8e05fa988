use crate::test_support::*;
use crate::*;

#[test]
fn test_add_links_children_to_new_parent() {
    let mut arena = NodeArena::new();
    let sample = sample_tree(&mut arena);

    assert_eq!(arena.parent(sample.class), sample.unit);
    assert_eq!(arena.parent(sample.method), sample.class);
    assert_eq!(arena.parent(sample.body), sample.method);
    assert_eq!(arena.parent(sample.assign_stmt), sample.body);
    assert!(arena.parent(sample.unit).is_none(), "root has no parent");
    assert_eq!(arena.verify_parent_links(), Ok(()));
}

#[test]
fn test_add_rejects_missing_required_slot() {
    let mut arena = NodeArena::new();
    let result = arena.add(LabeledStmtData {
        label: NodeIndex::NONE,
        statement: NodeIndex::NONE,
    });
    assert_eq!(
        result,
        Err(AstError::NullValue {
            kind: SyntaxKind::LabeledStmt,
            property: PropertyTag::Label,
        })
    );
    assert!(arena.is_empty(), "failed add must not allocate");
}

#[test]
fn test_add_rejects_already_parented_child() {
    let mut arena = NodeArena::new();
    let expr = int_literal(&mut arena, "1");
    let first = expr_stmt(&mut arena, expr);

    let result = arena.add(ExpressionStmtData { expression: expr });
    assert_eq!(
        result,
        Err(AstError::AlreadyParented {
            child: expr,
            parent: first,
        })
    );
    assert_eq!(arena.parent(expr), first);
}

#[test]
fn test_add_rejects_incompatible_child_kind() {
    let mut arena = NodeArena::new();
    let ty = void_type(&mut arena);
    let result = arena.add(ExpressionStmtData { expression: ty });
    assert_eq!(
        result,
        Err(AstError::KindMismatch {
            kind: SyntaxKind::ExpressionStmt,
            property: PropertyTag::Expression,
            found: SyntaxKind::VoidType,
        })
    );
    assert!(arena.parent(ty).is_none());
}

#[test]
fn test_add_rejects_duplicate_child() {
    let mut arena = NodeArena::new();
    let stmt = arena.add(EmptyStmtData {}).unwrap();
    let result = arena.add(BlockStmtData {
        statements: vec![stmt, stmt].into(),
    });
    assert_eq!(result, Err(AstError::DuplicateChild(stmt)));
    assert!(arena.parent(stmt).is_none());
}

#[test]
fn test_add_rejects_unknown_child_index() {
    let mut arena = NodeArena::new();
    let result = arena.add(ExpressionStmtData {
        expression: NodeIndex(42),
    });
    assert_eq!(result, Err(AstError::InvalidIndex(NodeIndex(42))));
}

#[test]
fn test_add_rejects_empty_identifier() {
    let mut arena = NodeArena::new();
    let result = arena.add(SimpleNameData {
        identifier: String::new(),
    });
    assert_eq!(
        result,
        Err(AstError::EmptyIdentifier {
            kind: SyntaxKind::SimpleName
        })
    );
}

#[test]
fn test_placeholder_fills_expression_and_statement_slots() {
    let mut arena = NodeArena::new();
    let condition = arena
        .add(PlaceholderExprData {
            name: "$cond".into(),
        })
        .unwrap();
    let body = arena
        .add(PlaceholderExprData {
            name: "$body".into(),
        })
        .unwrap();
    let while_stmt = arena.add(WhileStmtData { condition, body }).unwrap();

    assert_eq!(arena.child(while_stmt, PropertyTag::Condition), condition);
    assert_eq!(arena.child(while_stmt, PropertyTag::Body), body);

    let placeholder_type = arena
        .add(PlaceholderTypeData { name: "$T".into() })
        .unwrap();
    let result = arena.add(ExpressionStmtData {
        expression: placeholder_type,
    });
    assert!(
        matches!(result, Err(AstError::KindMismatch { .. })),
        "a type placeholder is not an expression"
    );
}

#[test]
fn test_ranges_are_optional_provenance() {
    let mut arena = NodeArena::new();
    let with_range = arena
        .add_with_range(EmptyStmtData {}, Some(TextRange::new(4, 5)))
        .unwrap();
    let without = arena.add(EmptyStmtData {}).unwrap();
    assert_eq!(arena.range(with_range), Some(TextRange::new(4, 5)));
    assert_eq!(arena.range(without), None);
}

#[test]
fn test_slot_accessors_follow_catalogue() {
    let mut arena = NodeArena::new();
    let sample = sample_tree(&mut arena);

    let members = arena
        .list(sample.class, PropertyTag::Members)
        .expect("members list");
    assert_eq!(members.as_slice(), &[sample.field, sample.method]);
    assert!(arena.child(sample.class, PropertyTag::Members).is_none());
    assert!(arena.list(sample.class, PropertyTag::Condition).is_none());

    let kinds: Vec<_> = arena
        .children(sample.class)
        .into_iter()
        .filter_map(|c| arena.kind(c))
        .collect();
    assert_eq!(
        kinds,
        vec![
            SyntaxKind::SimpleName,
            SyntaxKind::FieldDeclaration,
            SyntaxKind::MethodDeclaration,
            SyntaxKind::Modifier,
        ]
    );
}

#[test]
fn test_catalogue_metadata() {
    assert_eq!(SyntaxKind::ClassOrInterfaceDeclaration.name(), "ClassOrInterfaceDeclaration");
    assert_eq!(SyntaxKind::from_name("WhileStmt"), Some(SyntaxKind::WhileStmt));
    assert!(SyntaxKind::PlaceholderExpr.is_special_value());
    assert!(SyntaxKind::PlaceholderExpr.is(NodeCategory::STATEMENT));
    assert!(!SyntaxKind::NameExpr.is(NodeCategory::STATEMENT));

    let label = SyntaxKind::LabeledStmt
        .slot(PropertyTag::Label)
        .expect("label slot");
    assert_eq!(label.shape, SlotShape::Required);
    assert!(label.accepts_kind(SyntaxKind::SimpleName));

    let last_slots: Vec<_> = SyntaxKind::MethodDeclaration
        .slots()
        .iter()
        .rev()
        .take(2)
        .map(|s| s.tag)
        .collect();
    assert_eq!(
        last_slots,
        vec![PropertyTag::Annotations, PropertyTag::Modifiers],
        "inherited slots are searched last"
    );

    for kind in SyntaxKind::ALL {
        assert!(!kind.categories().is_empty(), "{kind} has no category");
    }
}

#[test]
fn test_scalar_catalogue_matches_node_data() {
    assert!(SyntaxKind::SimpleName.has_scalar(PropertyTag::Identifier));
    assert!(!SyntaxKind::SimpleName.has_scalar(PropertyTag::Name));
    assert!(!SyntaxKind::BlockStmt.has_scalar(PropertyTag::Statements));

    let mut arena = NodeArena::new();
    let s = sample_tree(&mut arena);
    for node in arena.walk(s.unit, TreeTraversal::PreOrder) {
        let data = arena.get(node).unwrap().data();
        let kind = data.kind();
        for &tag in kind.scalars() {
            assert!(kind.has_scalar(tag));
            assert!(data.scalar(tag).is_some(), "{kind} cannot read {tag}");
        }
        for &tag in PropertyTag::ALL {
            if !kind.has_scalar(tag) {
                assert_eq!(data.scalar(tag), None, "{kind} reads undeclared {tag}");
            }
        }
    }
}

#[test]
fn test_modifier_helpers() {
    let mut arena = NodeArena::new();
    let field = field(&mut arena, "x", &[Keyword::Static, Keyword::Final]);
    assert_eq!(
        arena.modifier_keywords(field).as_slice(),
        &[Keyword::Static, Keyword::Final]
    );
    assert_eq!(
        arena.modifier_flags(field),
        ModifierFlags::STATIC | ModifierFlags::FINAL
    );
    assert!(arena.has_modifier(field, Keyword::Final));
    assert!(!arena.has_modifier(field, Keyword::Public));
    assert!(arena.find_modifier(field, Keyword::Static).is_some());
    assert_eq!(Keyword::from_source("non-sealed"), Some(Keyword::NonSealed));
}

#[test]
fn test_user_data_is_typed_per_key() {
    const COUNT: DataKey<u32> = DataKey::new("count");
    const LABEL: DataKey<String> = DataKey::new("label");

    let mut arena = NodeArena::new();
    let node = arena.add(EmptyStmtData {}).unwrap();
    assert_eq!(arena.set_data(node, COUNT, 3), Ok(false));
    assert_eq!(arena.set_data(node, COUNT, 4), Ok(true));
    arena.set_data(node, LABEL, "hello".to_string()).unwrap();

    assert_eq!(arena.data(node, COUNT), Some(&4));
    assert_eq!(arena.data(node, LABEL).map(String::as_str), Some("hello"));
    assert_eq!(arena.data_keys(node), vec!["count", "label"]);
    assert!(arena.remove_data(node, COUNT));
    assert!(!arena.contains_data(node, COUNT));
    assert_eq!(
        arena.set_data(NodeIndex(99), COUNT, 1),
        Err(AstError::InvalidIndex(NodeIndex(99)))
    );
}

#[test]
fn test_json_dump_shape() {
    let mut arena = NodeArena::new();
    let label = simple_name(&mut arena, "outer");
    let statement = arena
        .add_with_range(EmptyStmtData {}, Some(TextRange::new(7, 8)))
        .unwrap();
    let labeled = arena.add(LabeledStmtData { label, statement }).unwrap();

    let json = dump::to_json(&arena, labeled);
    assert_eq!(
        json,
        serde_json::json!({
            "kind": "LabeledStmt",
            "label": { "kind": "SimpleName", "identifier": "outer" },
            "statement": { "kind": "EmptyStmt", "range": { "pos": 7, "end": 8 } }
        })
    );
}
