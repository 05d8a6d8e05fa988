use crate::test_support::*;
use crate::*;
use jast_ast::{Keyword::*, *};
use jast_common::diagnostic_codes;

fn run(arena: &NodeArena, root: NodeIndex, features: ModifierFeatures) -> ProblemCollector {
    let mut collector = ProblemCollector::new();
    ModifierValidator::new(features).validate(arena, root, &mut collector);
    collector
}

const NO_FEATURES: ModifierFeatures = ModifierFeatures {
    strictfp: true,
    default_and_static_interface_methods: false,
    private_interface_methods: false,
};

#[test]
fn test_top_level_public_abstract_class_is_valid() {
    let mut arena = NodeArena::new();
    let class = class(&mut arena, "Shape", &[Public, Abstract], vec![]);
    let unit = unit(&mut arena, vec![class]);

    let problems = run(&arena, unit, ModifierFeatures::ALL);
    assert!(problems.is_empty(), "unexpected: {:?}", problems.messages());
}

#[test]
fn test_top_level_class_with_two_access_modifiers() {
    let mut arena = NodeArena::new();
    let class = class(&mut arena, "Shape", &[Public, Private], vec![]);
    let unit = unit(&mut arena, vec![class]);

    let problems = run(&arena, unit, ModifierFeatures::ALL);
    assert_eq!(
        problems.messages(),
        vec!["Can have only one of 'public', 'private'."],
        "'private' is not re-reported as misplaced"
    );
    assert_eq!(problems.problems()[0].node, class);
    assert_eq!(problems.problems()[0].code, diagnostic_codes::CAN_HAVE_ONLY_ONE_OF);
}

#[test]
fn test_abstract_final_method_gets_one_combined_problem() {
    let mut arena = NodeArena::new();
    let method = method(&mut arena, "area", &[Abstract, Final], vec![], None);
    let class = class(&mut arena, "Shape", &[Public, Abstract], vec![method]);

    let problems = run(&arena, class, ModifierFeatures::ALL);
    assert_eq!(problems.messages(), vec!["Cannot be 'abstract' and also 'final'."]);
    assert_eq!(problems.problems()[0].node, method);
    assert_eq!(
        problems.problems()[0].code,
        diagnostic_codes::CANNOT_BE_ABSTRACT_AND_ALSO
    );
}

#[test]
fn test_abstract_method_lists_every_incompatible_keyword() {
    let mut arena = NodeArena::new();
    let method = method(
        &mut arena,
        "area",
        &[Synchronized, Abstract, Static, Private],
        vec![],
        None,
    );
    let class = class(&mut arena, "Shape", &[Abstract], vec![method]);

    let problems = run(&arena, class, ModifierFeatures::ALL);
    assert_eq!(
        problems.messages(),
        vec!["Cannot be 'abstract' and also 'private', 'static', 'synchronized'."]
    );
}

#[test]
fn test_interface_static_method_without_default_methods() {
    let mut arena = NodeArena::new();
    let method = method(&mut arena, "of", &[Static], vec![], Some(vec![]));
    let iface = interface(&mut arena, "Factory", &[Public], vec![method]);
    let unit = unit(&mut arena, vec![iface]);

    let problems = run(&arena, unit, NO_FEATURES);
    assert_eq!(problems.messages(), vec!["'static' is not allowed here."]);
    assert_eq!(problems.problems()[0].node, method);
}

#[test]
fn test_interface_private_method_requires_private_feature() {
    let mut arena = NodeArena::new();
    let method = method(&mut arena, "helper", &[Private], vec![], Some(vec![]));
    let iface = interface(&mut arena, "Factory", &[], vec![method]);

    let default_only = ModifierFeatures {
        default_and_static_interface_methods: true,
        ..NO_FEATURES
    };
    let problems = run(&arena, iface, default_only);
    assert_eq!(problems.messages(), vec!["'private' is not allowed here."]);

    assert!(run(&arena, iface, ModifierFeatures::ALL).is_empty());
}

#[test]
fn test_interface_method_tables_escalate() {
    let mut arena = NodeArena::new();
    let with_default = method(&mut arena, "a", &[Default], vec![], Some(vec![]));
    let with_static = method(&mut arena, "b", &[Static], vec![], Some(vec![]));
    let iface = interface(&mut arena, "I", &[], vec![with_default, with_static]);

    assert_eq!(run(&arena, iface, NO_FEATURES).len(), 2);
    let default_only = ModifierFeatures {
        default_and_static_interface_methods: true,
        ..NO_FEATURES
    };
    assert!(run(&arena, iface, default_only).is_empty());
}

#[test]
fn test_static_final_field_is_valid() {
    let mut arena = NodeArena::new();
    let field = field(&mut arena, "MAX", &[Static, Final]);
    let class = class(&mut arena, "Limits", &[], vec![field]);

    assert!(run(&arena, class, ModifierFeatures::ALL).is_empty());
}

#[test]
fn test_field_rejects_method_only_keywords() {
    let mut arena = NodeArena::new();
    let field = field(&mut arena, "x", &[Private, Synchronized, Abstract]);
    let class = class(&mut arena, "C", &[], vec![field]);

    let problems = run(&arena, class, ModifierFeatures::ALL);
    assert_eq!(
        problems.messages(),
        vec!["'synchronized' is not allowed here.", "'abstract' is not allowed here."]
    );
}

#[test]
fn test_final_abstract_class() {
    let mut arena = NodeArena::new();
    let class = class(&mut arena, "C", &[Final, Abstract], vec![]);
    let problems = run(&arena, class, ModifierFeatures::ALL);
    assert_eq!(problems.messages(), vec!["Can have only one of 'abstract', 'final'."]);
}

#[test]
fn test_strictfp_gating() {
    let mut arena = NodeArena::new();
    let method = method(&mut arena, "m", &[Native, Strictfp], vec![], None);
    let class = class(&mut arena, "C", &[], vec![method]);

    let with_strictfp = run(&arena, class, ModifierFeatures::ALL);
    assert_eq!(
        with_strictfp.messages(),
        vec!["Can have only one of 'native', 'strictfp'."]
    );

    let without = ModifierFeatures::for_level(jast_common::LanguageLevel::Java1_1);
    let problems = run(&arena, class, without);
    assert_eq!(problems.messages(), vec!["'strictfp' is not allowed here."]);
}

#[test]
fn test_class_placement_changes_allowed_set() {
    let mut arena = NodeArena::new();
    let nested = class(&mut arena, "Inner", &[Private, Static], vec![]);
    let local = class(&mut arena, "Local", &[Static], vec![]);
    let local_stmt = arena
        .add(LocalClassDeclarationStmtData {
            class_declaration: local,
        })
        .unwrap();
    let run_method = method(&mut arena, "run", &[Public], vec![], Some(vec![local_stmt]));
    let outer = class(&mut arena, "Outer", &[Public], vec![nested, run_method]);
    let unit = unit(&mut arena, vec![outer]);

    let problems = run(&arena, unit, ModifierFeatures::ALL);
    assert_eq!(problems.messages(), vec!["'static' is not allowed here."]);
    assert_eq!(problems.problems()[0].node, local);
}

#[test]
fn test_parameters_and_local_variables_allow_only_final() {
    let mut arena = NodeArena::new();
    let ok = parameter(&mut arena, "a", &[Final]);
    let bad = parameter(&mut arena, "b", &[Static]);

    let ty = int_type(&mut arena);
    let name = simple_name(&mut arena, "v");
    let declarator = arena
        .add(VariableDeclaratorData {
            ty,
            name,
            initializer: NodeIndex::NONE,
        })
        .unwrap();
    let local_mods = modifiers(&mut arena, &[Final, Volatile]);
    let local = arena
        .add(VariableDeclarationExprData {
            variables: vec![declarator].into(),
            modifiers: local_mods,
            annotations: NodeList::new(),
        })
        .unwrap();
    let stmt = arena.add(ExpressionStmtData { expression: local }).unwrap();

    let method = method(&mut arena, "m", &[], vec![ok, bad], Some(vec![stmt]));
    let class = class(&mut arena, "C", &[], vec![method]);

    let problems = run(&arena, class, ModifierFeatures::ALL);
    assert_eq!(
        problems.messages(),
        vec!["'static' is not allowed here.", "'volatile' is not allowed here."]
    );
    let nodes: Vec<_> = problems.problems().iter().map(|p| p.node).collect();
    assert_eq!(nodes, vec![bad, local], "pre-order report order");
}

#[test]
fn test_requires_directive_modifiers() {
    let mut arena = NodeArena::new();
    let base = arena
        .add(NameData {
            identifier: "java.base".into(),
            qualifier: NodeIndex::NONE,
        })
        .unwrap();
    let modifiers = modifiers(&mut arena, &[Transitive, Static, Public]);
    let requires = arena
        .add(ModuleRequiresDirectiveData {
            name: base,
            modifiers,
        })
        .unwrap();
    let module_name = arena
        .add(NameData {
            identifier: "app".into(),
            qualifier: NodeIndex::NONE,
        })
        .unwrap();
    let module = arena
        .add(ModuleDeclarationData {
            name: module_name,
            is_open: false,
            directives: vec![requires].into(),
            annotations: NodeList::new(),
        })
        .unwrap();

    let problems = run(&arena, module, ModifierFeatures::ALL);
    assert_eq!(problems.messages(), vec!["'public' is not allowed here."]);
}

#[test]
fn test_problem_location_prefers_modifier_range() {
    let mut arena = NodeArena::new();
    let field = field(&mut arena, "x", &[Abstract]);
    let modifier = arena.find_modifier(field, Abstract).unwrap();
    arena.set_range(modifier, Some(TextRange::new(10, 18))).unwrap();
    arena.set_range(field, Some(TextRange::new(10, 25))).unwrap();

    let mut problems: Vec<Problem> = Vec::new();
    ModifierValidator::new(ModifierFeatures::ALL).validate(&arena, field, &mut problems);
    assert_eq!(problems.len(), 1);
    assert_eq!(problems[0].range, Some(TextRange::new(10, 18)));

    let diagnostics = ProblemCollector::new();
    assert!(diagnostics.to_diagnostics("A.java").is_empty());
    let diagnostic = problems[0].to_diagnostic("A.java");
    assert_eq!(diagnostic.start, 10);
    assert_eq!(diagnostic.length, 8);
    assert_eq!(diagnostic.code, diagnostic_codes::MODIFIER_NOT_ALLOWED_HERE);
}

#[test]
fn test_validator_does_not_touch_the_tree() {
    let mut arena = NodeArena::new();
    let method = method(&mut arena, "m", &[Public, Protected, Abstract, Final], vec![], None);
    let class = class(&mut arena, "C", &[], vec![method]);
    let before = jast_ast::dump::to_json(&arena, class);

    let problems = run(&arena, class, ModifierFeatures::ALL);
    assert_eq!(
        problems.messages(),
        vec![
            "Cannot be 'abstract' and also 'final'.",
            "Can have only one of 'public', 'protected'.",
        ]
    );
    assert_eq!(jast_ast::dump::to_json(&arena, class), before);
}

#[test]
fn test_validate_modifiers_uses_language_level() {
    let mut arena = NodeArena::new();
    let method = method(&mut arena, "helper", &[Private], vec![], Some(vec![]));
    let iface = interface(&mut arena, "I", &[], vec![method]);

    let java8 = ValidationOptions::for_level(jast_common::LanguageLevel::Java8);
    assert_eq!(validate_modifiers(&arena, iface, &java8).len(), 1);
    let java9 = ValidationOptions::for_level(jast_common::LanguageLevel::Java9);
    assert!(validate_modifiers(&arena, iface, &java9).is_empty());
}
