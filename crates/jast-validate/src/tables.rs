//! Allowed-modifier tables.
//!
//! Each place a modifier list can appear is a `ModifierSite`; the table maps
//! a site to the keywords the language permits there. Feature gating
//! (`strictfp`, interface method modifiers) is applied on top by
//! `ModifierSite::allowed`.

use crate::config::ModifierFeatures;
use jast_ast::{Keyword, ModifierFlags, ModifierFlags as M};
use std::fmt;

/// A syntactic position that carries modifiers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ModifierSite {
    TopLevelClass,
    NestedClass,
    LocalClass,
    TopLevelInterface,
    NestedInterface,
    LocalInterface,
    TopLevelEnum,
    NestedEnum,
    LocalEnum,
    AnnotationDeclaration,
    AnnotationMember,
    Constructor,
    Field,
    ClassMethod,
    InterfaceMethod,
    Parameter,
    VariableDeclaration,
    RequiresDirective,
}

const SEALING: ModifierFlags = ModifierFlags::SEALED.union(ModifierFlags::NON_SEALED);

const fn flags(list: &[ModifierFlags]) -> ModifierFlags {
    let mut acc = ModifierFlags::empty();
    let mut i = 0;
    while i < list.len() {
        acc = acc.union(list[i]);
        i += 1;
    }
    acc
}

const TOP_LEVEL_CLASS: ModifierFlags = flags(&[M::PUBLIC, M::ABSTRACT, M::FINAL, M::STRICTFP, SEALING]);
const NESTED_CLASS: ModifierFlags = flags(&[
    M::ACCESS,
    M::ABSTRACT,
    M::STATIC,
    M::FINAL,
    M::STRICTFP,
    SEALING,
]);
const LOCAL_CLASS: ModifierFlags = flags(&[M::ABSTRACT, M::FINAL, M::STRICTFP]);
const TOP_LEVEL_INTERFACE: ModifierFlags = flags(&[M::PUBLIC, M::ABSTRACT, M::STRICTFP, SEALING]);
const NESTED_INTERFACE: ModifierFlags = flags(&[M::ACCESS, M::ABSTRACT, M::STATIC, M::STRICTFP, SEALING]);
const LOCAL_INTERFACE: ModifierFlags = flags(&[M::ABSTRACT, M::STRICTFP]);
const TOP_LEVEL_ENUM: ModifierFlags = flags(&[M::PUBLIC, M::STRICTFP]);
const NESTED_ENUM: ModifierFlags = flags(&[M::ACCESS, M::STATIC, M::STRICTFP]);
const LOCAL_ENUM: ModifierFlags = M::STRICTFP;
const ANNOTATION_DECLARATION: ModifierFlags = flags(&[M::ACCESS, M::ABSTRACT, M::STATIC, M::STRICTFP]);
const ANNOTATION_MEMBER: ModifierFlags = flags(&[M::PUBLIC, M::ABSTRACT]);
const CONSTRUCTOR: ModifierFlags = M::ACCESS;
const FIELD: ModifierFlags = flags(&[M::ACCESS, M::STATIC, M::FINAL, M::TRANSIENT, M::VOLATILE]);
const CLASS_METHOD: ModifierFlags = flags(&[
    M::ACCESS,
    M::ABSTRACT,
    M::STATIC,
    M::FINAL,
    M::SYNCHRONIZED,
    M::NATIVE,
    M::STRICTFP,
]);
const PARAMETER: ModifierFlags = M::FINAL;
const VARIABLE_DECLARATION: ModifierFlags = M::FINAL;
const REQUIRES_DIRECTIVE: ModifierFlags = flags(&[M::TRANSITIVE, M::STATIC]);

/// Interface methods before default methods existed.
const INTERFACE_METHOD: ModifierFlags = flags(&[M::PUBLIC, M::ABSTRACT]);
/// Interface methods with default and static methods.
const INTERFACE_METHOD_WITH_DEFAULT: ModifierFlags =
    flags(&[M::PUBLIC, M::ABSTRACT, M::STATIC, M::STRICTFP, M::DEFAULT]);
/// Interface methods with private methods as well.
const INTERFACE_METHOD_WITH_PRIVATE: ModifierFlags = INTERFACE_METHOD_WITH_DEFAULT.union(M::PRIVATE);

/// Keywords that an `abstract` method may not also carry, in report order.
pub const INCOMPATIBLE_WITH_ABSTRACT_METHOD: &[Keyword] = &[
    Keyword::Private,
    Keyword::Static,
    Keyword::Final,
    Keyword::Native,
    Keyword::Strictfp,
    Keyword::Synchronized,
];

impl ModifierSite {
    pub const ALL: &'static [ModifierSite] = &[
        ModifierSite::TopLevelClass,
        ModifierSite::NestedClass,
        ModifierSite::LocalClass,
        ModifierSite::TopLevelInterface,
        ModifierSite::NestedInterface,
        ModifierSite::LocalInterface,
        ModifierSite::TopLevelEnum,
        ModifierSite::NestedEnum,
        ModifierSite::LocalEnum,
        ModifierSite::AnnotationDeclaration,
        ModifierSite::AnnotationMember,
        ModifierSite::Constructor,
        ModifierSite::Field,
        ModifierSite::ClassMethod,
        ModifierSite::InterfaceMethod,
        ModifierSite::Parameter,
        ModifierSite::VariableDeclaration,
        ModifierSite::RequiresDirective,
    ];

    /// The table entry for this site, before feature gating.
    pub fn table(self, features: &ModifierFeatures) -> ModifierFlags {
        match self {
            ModifierSite::TopLevelClass => TOP_LEVEL_CLASS,
            ModifierSite::NestedClass => NESTED_CLASS,
            ModifierSite::LocalClass => LOCAL_CLASS,
            ModifierSite::TopLevelInterface => TOP_LEVEL_INTERFACE,
            ModifierSite::NestedInterface => NESTED_INTERFACE,
            ModifierSite::LocalInterface => LOCAL_INTERFACE,
            ModifierSite::TopLevelEnum => TOP_LEVEL_ENUM,
            ModifierSite::NestedEnum => NESTED_ENUM,
            ModifierSite::LocalEnum => LOCAL_ENUM,
            ModifierSite::AnnotationDeclaration => ANNOTATION_DECLARATION,
            ModifierSite::AnnotationMember => ANNOTATION_MEMBER,
            ModifierSite::Constructor => CONSTRUCTOR,
            ModifierSite::Field => FIELD,
            ModifierSite::ClassMethod => CLASS_METHOD,
            ModifierSite::InterfaceMethod => {
                match (
                    features.default_and_static_interface_methods,
                    features.private_interface_methods,
                ) {
                    (false, _) => INTERFACE_METHOD,
                    (true, false) => INTERFACE_METHOD_WITH_DEFAULT,
                    (true, true) => INTERFACE_METHOD_WITH_PRIVATE,
                }
            }
            ModifierSite::Parameter => PARAMETER,
            ModifierSite::VariableDeclaration => VARIABLE_DECLARATION,
            ModifierSite::RequiresDirective => REQUIRES_DIRECTIVE,
        }
    }

    /// Keywords legal at this site under `features`.
    pub fn allowed(self, features: &ModifierFeatures) -> ModifierFlags {
        let mut allowed = self.table(features);
        if !features.strictfp {
            allowed.remove(ModifierFlags::STRICTFP);
        }
        allowed
    }

    pub fn name(self) -> &'static str {
        match self {
            ModifierSite::TopLevelClass => "top-level class",
            ModifierSite::NestedClass => "nested class",
            ModifierSite::LocalClass => "local class",
            ModifierSite::TopLevelInterface => "top-level interface",
            ModifierSite::NestedInterface => "nested interface",
            ModifierSite::LocalInterface => "local interface",
            ModifierSite::TopLevelEnum => "top-level enum",
            ModifierSite::NestedEnum => "nested enum",
            ModifierSite::LocalEnum => "local enum",
            ModifierSite::AnnotationDeclaration => "annotation declaration",
            ModifierSite::AnnotationMember => "annotation member",
            ModifierSite::Constructor => "constructor",
            ModifierSite::Field => "field",
            ModifierSite::ClassMethod => "method",
            ModifierSite::InterfaceMethod => "interface method",
            ModifierSite::Parameter => "parameter",
            ModifierSite::VariableDeclaration => "variable declaration",
            ModifierSite::RequiresDirective => "requires directive",
        }
    }
}

impl fmt::Display for ModifierSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
#[path = "../tests/tables_tests.rs"]
mod tests;
