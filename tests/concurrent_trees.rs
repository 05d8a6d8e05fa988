//! Independent trees are processed on separate threads.
//!
//! Each worker builds its own arena, edits it under an observer, validates
//! it and resolves through a resolver shared by every tree.

use jast::ast::*;
use jast::resolve::{DeclarationKind, ResolvedDeclaration, ResolvedType};
use jast::{LanguageLevel, Resolve, ResolveError, SymbolResolver, ValidationOptions, bind_symbol_resolver};
use rayon::prelude::*;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Resolves every type declaration to its simple name in package `app`.
struct PackageResolver {
    calls: AtomicUsize,
}

impl SymbolResolver for PackageResolver {
    fn resolve_declaration(
        &self,
        arena: &NodeArena,
        node: NodeIndex,
        kind: DeclarationKind,
    ) -> Result<ResolvedDeclaration, ResolveError> {
        self.calls.fetch_add(1, Ordering::Relaxed);
        let name = arena.child(node, PropertyTag::Name);
        match arena.get(name).map(Node::data) {
            Some(NodeData::SimpleName(data)) => Ok(ResolvedDeclaration::new(kind, format!("app.{}", data.identifier))),
            _ => Err(ResolveError::Unresolved {
                node,
                reason: "declaration without a simple name".into(),
            }),
        }
    }

    fn to_resolved_type(&self, _arena: &NodeArena, ty: NodeIndex) -> Result<ResolvedType, ResolveError> {
        Err(ResolveError::Unresolved {
            node: ty,
            reason: "no types".into(),
        })
    }

    fn calculate_type(&self, _arena: &NodeArena, expr: NodeIndex) -> Result<ResolvedType, ResolveError> {
        Err(ResolveError::Unresolved {
            node: expr,
            reason: "no expressions".into(),
        })
    }
}

struct Built {
    arena: NodeArena,
    unit: NodeIndex,
    class: NodeIndex,
    class_name: NodeIndex,
}

fn simple_name(arena: &mut NodeArena, text: &str) -> NodeIndex {
    arena
        .add(SimpleNameData {
            identifier: text.into(),
        })
        .expect("simple name")
}

/// `class C<i> { [public (private)] void m0() {} ... }` with `i % 4 + 1`
/// methods; every third tree has a conflicting access pair on `m0`.
fn build(i: usize) -> Built {
    let mut arena = NodeArena::new();
    let mut methods = Vec::new();
    for m in 0..(i % 4 + 1) {
        let keywords: &[Keyword] = if m == 0 && i % 3 == 0 {
            &[Keyword::Public, Keyword::Private]
        } else {
            &[Keyword::Public]
        };
        let modifiers: NodeList = keywords
            .iter()
            .map(|&keyword| arena.add(ModifierData { keyword }).expect("modifier"))
            .collect();
        let ty = arena.add(VoidTypeData::default()).expect("void");
        let name = simple_name(&mut arena, &format!("m{m}"));
        let body = arena.add(BlockStmtData::default()).expect("body");
        methods.push(
            arena
                .add(MethodDeclarationData {
                    ty,
                    name,
                    body,
                    modifiers,
                    ..Default::default()
                })
                .expect("method"),
        );
    }
    let class_name = simple_name(&mut arena, &format!("C{i}"));
    let class = arena
        .add(ClassOrInterfaceDeclarationData {
            name: class_name,
            members: methods.into(),
            ..Default::default()
        })
        .expect("class");
    let unit = arena
        .add(CompilationUnitData {
            types: vec![class].into(),
            ..Default::default()
        })
        .expect("unit");
    Built {
        arena,
        unit,
        class,
        class_name,
    }
}

#[test]
fn test_independent_trees_in_parallel() {
    let resolver = Arc::new(PackageResolver {
        calls: AtomicUsize::new(0),
    });
    let options = ValidationOptions::for_level(LanguageLevel::Java8);

    let outcomes: Vec<(usize, usize, String)> = (0..48usize)
        .into_par_iter()
        .map(|i| {
            let Built {
                mut arena,
                unit,
                class,
                class_name,
            } = build(i);
            bind_symbol_resolver(&mut arena, unit, resolver.clone()).expect("bind");

            let events = Arc::new(AtomicUsize::new(0));
            let seen = Arc::clone(&events);
            arena.register_fn(ObserverScope::Subtree(class), move |_, _| {
                seen.fetch_add(1, Ordering::Relaxed);
                Ok(())
            });
            arena
                .set_property(class_name, PropertyTag::Identifier, format!("Renamed{i}"))
                .expect("rename");
            let copy = arena.deep_clone(class).expect("clone");
            assert!(arena.list_mut(unit, PropertyTag::Types).expect("types").push(copy).is_ok());
            arena.verify_parent_links().expect("parent links");

            let problems = jast::validate_modifiers(&arena, unit, &options);
            let qualified = arena.resolve(class).expect("resolve").qualified_name;
            (events.load(Ordering::Relaxed), problems.len(), qualified)
        })
        .collect();

    for (i, (events, problems, qualified)) in outcomes.into_iter().enumerate() {
        assert_eq!(events, 1, "tree {i}: only the rename is inside the class");
        let expected = if i % 3 == 0 { 2 } else { 0 };
        assert_eq!(problems, expected, "tree {i}: the clone repeats the conflict");
        assert_eq!(qualified, format!("app.Renamed{i}"));
    }
    assert_eq!(resolver.calls.load(Ordering::Relaxed), 48);
}

#[test]
fn test_resolver_is_shared_not_copied() {
    let resolver: Arc<dyn SymbolResolver> = Arc::new(PackageResolver {
        calls: AtomicUsize::new(0),
    });
    let trees: Vec<Built> = (0..8).into_par_iter().map(build).collect();
    let bound: Vec<Built> = trees
        .into_iter()
        .map(|mut built| {
            bind_symbol_resolver(&mut built.arena, built.unit, resolver.clone()).expect("bind");
            built
        })
        .collect();
    assert_eq!(Arc::strong_count(&resolver), 9);

    assert_eq!(
        bound[0].arena.resolve(bound[0].unit),
        Err(ResolveError::NotADeclaration(SyntaxKind::CompilationUnit))
    );

    let names: Vec<String> = bound
        .into_par_iter()
        .map(|built| built.arena.resolve(built.class).expect("resolve").name)
        .collect();
    assert_eq!(names[5], "C5");
}
