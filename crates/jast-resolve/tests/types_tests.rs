use super::*;
use serde_json::json;

#[test]
fn test_declaration_kinds() {
    assert_eq!(
        DeclarationKind::of(SyntaxKind::ClassOrInterfaceDeclaration),
        Some(DeclarationKind::ReferenceType)
    );
    assert_eq!(
        DeclarationKind::of(SyntaxKind::VariableDeclarator),
        Some(DeclarationKind::Variable)
    );
    assert_eq!(
        DeclarationKind::of(SyntaxKind::EnumConstantDeclaration),
        Some(DeclarationKind::EnumConstant)
    );
    assert_eq!(DeclarationKind::of(SyntaxKind::BlockStmt), None);
    assert_eq!(DeclarationKind::of(SyntaxKind::NameExpr), None);
    assert_eq!(DeclarationKind::of(SyntaxKind::ClassOrInterfaceType), None);
}

#[test]
fn test_every_type_declaration_kind_declares_a_type() {
    for &kind in SyntaxKind::ALL {
        if kind.is(jast_ast::NodeCategory::TYPE_DECLARATION) {
            let declaration = DeclarationKind::of(kind).expect("type declarations resolve");
            assert!(declaration.is_type(), "{kind} should declare a type");
        }
    }
    assert!(!DeclarationKind::Field.is_type());
}

#[test]
fn test_resolved_type_display() {
    let map = ResolvedType::Reference {
        qualified_name: "java.util.Map".into(),
        type_arguments: vec![
            ResolvedType::string(),
            ResolvedType::array_of(ResolvedType::primitive(Primitive::Int)),
        ],
    };
    assert_eq!(map.to_string(), "java.util.Map<java.lang.String, int[]>");

    let matrix = ResolvedType::array_of(ResolvedType::array_of(ResolvedType::TypeVariable { name: "T".into() }));
    assert_eq!(matrix.to_string(), "T[][]");
    assert_eq!(matrix.array_level(), 2);
    assert!(matrix.is_reference());
    assert!(!ResolvedType::Void.is_reference());
    assert!(ResolvedType::primitive(Primitive::Char).is_primitive());
}

#[test]
fn test_declaration_name_is_last_segment() {
    let nested = ResolvedDeclaration::new(DeclarationKind::ReferenceType, "com.acme.Outer$Inner");
    assert_eq!(nested.name, "Inner");
    assert_eq!(nested.qualified_name, "com.acme.Outer$Inner");

    let plain = ResolvedDeclaration::new(DeclarationKind::ReferenceType, "Shape");
    assert_eq!(plain.name, "Shape");
    assert_eq!(plain.ty, None);
}

#[test]
fn test_serialized_forms() {
    let ty = ResolvedType::array_of(ResolvedType::primitive(Primitive::Int));
    assert_eq!(
        serde_json::to_value(&ty).unwrap(),
        json!({ "kind": "array", "component": { "kind": "primitive", "primitive": "Int" } })
    );

    let field = ResolvedDeclaration::new(DeclarationKind::Field, "Point.x").with_type(ResolvedType::string());
    assert_eq!(
        serde_json::to_value(&field).unwrap(),
        json!({
            "kind": "Field",
            "name": "x",
            "qualifiedName": "Point.x",
            "ty": { "kind": "reference", "qualifiedName": "java.lang.String", "typeArguments": [] }
        })
    );
}
