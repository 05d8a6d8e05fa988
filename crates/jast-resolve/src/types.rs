//! Resolved descriptions produced by a `SymbolResolver`.

use jast_ast::{Primitive, SyntaxKind};
use serde::Serialize;
use std::fmt;

/// What kind of entity a declaration node declares.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum DeclarationKind {
    /// A class or an interface.
    ReferenceType,
    Enum,
    EnumConstant,
    Annotation,
    AnnotationMember,
    Field,
    /// A single declarator of a field or a local variable.
    Variable,
    Method,
    Constructor,
    Parameter,
    TypeParameter,
}

impl DeclarationKind {
    /// The declaration kind of `kind`, or `None` for kinds that declare
    /// nothing.
    pub fn of(kind: SyntaxKind) -> Option<DeclarationKind> {
        Some(match kind {
            SyntaxKind::ClassOrInterfaceDeclaration => DeclarationKind::ReferenceType,
            SyntaxKind::EnumDeclaration => DeclarationKind::Enum,
            SyntaxKind::EnumConstantDeclaration => DeclarationKind::EnumConstant,
            SyntaxKind::AnnotationDeclaration => DeclarationKind::Annotation,
            SyntaxKind::AnnotationMemberDeclaration => DeclarationKind::AnnotationMember,
            SyntaxKind::FieldDeclaration => DeclarationKind::Field,
            SyntaxKind::VariableDeclarator => DeclarationKind::Variable,
            SyntaxKind::MethodDeclaration => DeclarationKind::Method,
            SyntaxKind::ConstructorDeclaration => DeclarationKind::Constructor,
            SyntaxKind::Parameter => DeclarationKind::Parameter,
            SyntaxKind::TypeParameter => DeclarationKind::TypeParameter,
            _ => return None,
        })
    }

    /// Declarations that introduce a type.
    pub fn is_type(self) -> bool {
        matches!(
            self,
            DeclarationKind::ReferenceType
                | DeclarationKind::Enum
                | DeclarationKind::Annotation
                | DeclarationKind::TypeParameter
        )
    }
}

/// A resolved type.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ResolvedType {
    Primitive { primitive: Primitive },
    Void,
    /// The type of the `null` literal.
    Null,
    #[serde(rename_all = "camelCase")]
    Reference {
        qualified_name: String,
        type_arguments: Vec<ResolvedType>,
    },
    Array { component: Box<ResolvedType> },
    TypeVariable { name: String },
}

impl ResolvedType {
    pub fn primitive(primitive: Primitive) -> ResolvedType {
        ResolvedType::Primitive { primitive }
    }

    /// A non-generic reference type.
    pub fn reference(qualified_name: impl Into<String>) -> ResolvedType {
        ResolvedType::Reference {
            qualified_name: qualified_name.into(),
            type_arguments: Vec::new(),
        }
    }

    pub fn array_of(component: ResolvedType) -> ResolvedType {
        ResolvedType::Array {
            component: Box::new(component),
        }
    }

    pub fn string() -> ResolvedType {
        ResolvedType::reference("java.lang.String")
    }

    #[inline]
    pub fn is_primitive(&self) -> bool {
        matches!(self, ResolvedType::Primitive { .. })
    }

    #[inline]
    pub fn is_reference(&self) -> bool {
        matches!(
            self,
            ResolvedType::Reference { .. }
                | ResolvedType::Array { .. }
                | ResolvedType::TypeVariable { .. }
                | ResolvedType::Null
        )
    }

    /// Number of array dimensions.
    pub fn array_level(&self) -> usize {
        match self {
            ResolvedType::Array { component } => 1 + component.array_level(),
            _ => 0,
        }
    }
}

impl fmt::Display for ResolvedType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolvedType::Primitive { primitive } => write!(f, "{primitive}"),
            ResolvedType::Void => f.write_str("void"),
            ResolvedType::Null => f.write_str("null"),
            ResolvedType::Reference {
                qualified_name,
                type_arguments,
            } => {
                f.write_str(qualified_name)?;
                if !type_arguments.is_empty() {
                    f.write_str("<")?;
                    for (i, argument) in type_arguments.iter().enumerate() {
                        if i > 0 {
                            f.write_str(", ")?;
                        }
                        write!(f, "{argument}")?;
                    }
                    f.write_str(">")?;
                }
                Ok(())
            }
            ResolvedType::Array { component } => write!(f, "{component}[]"),
            ResolvedType::TypeVariable { name } => f.write_str(name),
        }
    }
}

/// The semantically enriched description of a declaration node.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedDeclaration {
    pub kind: DeclarationKind,
    pub name: String,
    pub qualified_name: String,
    /// The declared type, for fields, variables, parameters and methods.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ty: Option<ResolvedType>,
}

impl ResolvedDeclaration {
    pub fn new(kind: DeclarationKind, qualified_name: impl Into<String>) -> ResolvedDeclaration {
        let qualified_name = qualified_name.into();
        let name = qualified_name
            .rsplit(['.', '$'])
            .next()
            .unwrap_or_default()
            .to_string();
        ResolvedDeclaration {
            kind,
            name,
            qualified_name,
            ty: None,
        }
    }

    pub fn with_type(mut self, ty: ResolvedType) -> ResolvedDeclaration {
        self.ty = Some(ty);
        self
    }
}

#[cfg(test)]
#[path = "../tests/types_tests.rs"]
mod tests;
