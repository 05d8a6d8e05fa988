//! Modifier Validator
//!
//! A `VoidVisitor` that checks every modifier list in a tree against the
//! table for its site and reports violations to a `ProblemReporter`. The
//! tree is never modified.
//!
//! For each node carrying modifiers, in pre-order:
//!
//! 1. Methods marked `abstract` report the incompatible keywords they also
//!    carry in one combined problem.
//! 2. At most one of `public`, `protected`, `private`.
//! 3. Not both `final` and `abstract`.
//! 4. Without the `strictfp` feature the keyword is never allowed; with it,
//!    not both `native` and `strictfp`.
//! 5. Every keyword outside the site's allowed set is reported on its own.
//!
//! A keyword already named by an earlier problem on the same node is not
//! reported again by a later step.

use crate::config::{ModifierFeatures, ValidationOptions};
use crate::reporter::{Problem, ProblemReporter};
use crate::tables::{INCOMPATIBLE_WITH_ABSTRACT_METHOD, ModifierSite};
use jast_ast::*;
use jast_common::DiagnosticMessage;
use jast_common::diagnostic_messages::{
    CAN_HAVE_ONLY_ONE_OF, CANNOT_BE_ABSTRACT_AND_ALSO, MODIFIER_NOT_ALLOWED_HERE,
};
use jast_common::diagnostics::quoted_list;
use smallvec::SmallVec;
use tracing::{debug, trace};

const FINAL_AND_ABSTRACT: ModifierFlags = ModifierFlags::FINAL.union(ModifierFlags::ABSTRACT);
const NATIVE_AND_STRICTFP: ModifierFlags = ModifierFlags::NATIVE.union(ModifierFlags::STRICTFP);

#[derive(Clone, Copy, Debug, Default)]
pub struct ModifierValidator {
    features: ModifierFeatures,
}

impl ModifierValidator {
    pub fn new(features: ModifierFeatures) -> ModifierValidator {
        ModifierValidator { features }
    }

    pub fn from_options(options: &ValidationOptions) -> ModifierValidator {
        ModifierValidator::new(options.features())
    }

    #[inline]
    pub fn features(&self) -> ModifierFeatures {
        self.features
    }

    /// Validate the subtree rooted at `root`.
    pub fn validate<R>(&mut self, arena: &NodeArena, root: NodeIndex, reporter: &mut R)
    where
        R: ProblemReporter + ?Sized,
    {
        debug!(%root, features = ?self.features, "validating modifiers");
        self.visit(arena, root, reporter);
    }

    /// Check the modifiers of `node` as if it sat at `site`.
    pub fn check_site<R>(&self, arena: &NodeArena, node: NodeIndex, site: ModifierSite, reporter: &mut R)
    where
        R: ProblemReporter + ?Sized,
    {
        let keywords = arena.modifier_keywords(node);
        if keywords.is_empty() {
            return;
        }
        trace!(%node, %site, ?keywords, "checking modifiers");
        let mut check = ModifierCheck {
            arena,
            node,
            site,
            keywords,
            named: ModifierFlags::empty(),
            reporter,
        };
        let present = check.present();

        if matches!(site, ModifierSite::ClassMethod | ModifierSite::InterfaceMethod)
            && present.contains(ModifierFlags::ABSTRACT)
        {
            let incompatible: SmallVec<[Keyword; 4]> = INCOMPATIBLE_WITH_ABSTRACT_METHOD
                .iter()
                .copied()
                .filter(|k| present.contains(k.flag()))
                .collect();
            if !incompatible.is_empty() {
                let list = quoted_list(incompatible.iter().map(|k| k.as_str()));
                check.report(
                    incompatible.iter().copied().collect(),
                    &CANNOT_BE_ABSTRACT_AND_ALSO,
                    &list,
                    node,
                );
            }
        }

        let access = present & ModifierFlags::ACCESS;
        if access.bits().count_ones() > 1 {
            check.exclusive(access);
        }
        if present.contains(FINAL_AND_ABSTRACT) {
            check.exclusive(FINAL_AND_ABSTRACT);
        }

        let allowed = site.allowed(&self.features);
        if self.features.strictfp && present.contains(NATIVE_AND_STRICTFP) {
            check.exclusive(NATIVE_AND_STRICTFP);
        }

        for keyword in check.keywords.clone() {
            if !allowed.contains(keyword.flag()) {
                let at = arena.find_modifier(node, keyword).unwrap_or(node);
                check.report(keyword.flag(), &MODIFIER_NOT_ALLOWED_HERE, keyword.as_str(), at);
            }
        }
    }

    fn class_site(&self, arena: &NodeArena, node: NodeIndex, is_interface: bool) -> ModifierSite {
        match (placement(arena, node), is_interface) {
            (Placement::TopLevel, false) => ModifierSite::TopLevelClass,
            (Placement::Nested, false) => ModifierSite::NestedClass,
            (Placement::Local, false) => ModifierSite::LocalClass,
            (Placement::TopLevel, true) => ModifierSite::TopLevelInterface,
            (Placement::Nested, true) => ModifierSite::NestedInterface,
            (Placement::Local, true) => ModifierSite::LocalInterface,
        }
    }
}

/// Where a type declaration sits.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Placement {
    TopLevel,
    Nested,
    Local,
}

fn placement(arena: &NodeArena, node: NodeIndex) -> Placement {
    match arena.kind(arena.parent(node)) {
        None | Some(SyntaxKind::CompilationUnit) => Placement::TopLevel,
        Some(SyntaxKind::LocalClassDeclarationStmt) => Placement::Local,
        Some(_) => Placement::Nested,
    }
}

fn in_interface(arena: &NodeArena, node: NodeIndex) -> bool {
    matches!(
        arena.get(arena.parent(node)).map(Node::data),
        Some(NodeData::ClassOrInterfaceDeclaration(parent)) if parent.is_interface
    )
}

/// Problems for one node, remembering which keywords were already named.
struct ModifierCheck<'a, R: ?Sized> {
    arena: &'a NodeArena,
    node: NodeIndex,
    site: ModifierSite,
    keywords: SmallVec<[Keyword; 4]>,
    named: ModifierFlags,
    reporter: &'a mut R,
}

impl<R: ProblemReporter + ?Sized> ModifierCheck<'_, R> {
    fn present(&self) -> ModifierFlags {
        self.keywords.iter().copied().collect()
    }

    /// Report that only one of `culprits` may appear.
    fn exclusive(&mut self, culprits: ModifierFlags) {
        let list = quoted_list(culprits.keywords().map(Keyword::as_str));
        self.report(culprits, &CAN_HAVE_ONLY_ONE_OF, &list, self.node);
    }

    /// Report `message` unless one of `culprits` has been named already.
    fn report(&mut self, culprits: ModifierFlags, message: &DiagnosticMessage, arg: &str, at: NodeIndex) {
        if self.named.intersects(culprits) {
            return;
        }
        self.named |= culprits;
        let range = self.arena.range(at).or_else(|| self.arena.range(self.node));
        let problem = Problem::new(self.node, range, message, &[arg]);
        debug!(node = %self.node, site = %self.site, message = %problem.message, "modifier problem");
        self.reporter.report(problem);
    }
}

impl<R: ProblemReporter + ?Sized> VoidVisitor<R> for ModifierValidator {
    /// Kinds without modifiers are only descended into.
    fn visit_default(&mut self, arena: &NodeArena, node: NodeIndex, reporter: &mut R) {
        walk_children(self, arena, node, reporter);
    }

    fn visit_class_or_interface_declaration(
        &mut self,
        arena: &NodeArena,
        node: NodeIndex,
        data: &ClassOrInterfaceDeclarationData,
        reporter: &mut R,
    ) {
        let site = self.class_site(arena, node, data.is_interface);
        self.check_site(arena, node, site, reporter);
        walk_children(self, arena, node, reporter);
    }

    fn visit_enum_declaration(
        &mut self,
        arena: &NodeArena,
        node: NodeIndex,
        _data: &EnumDeclarationData,
        reporter: &mut R,
    ) {
        let site = match placement(arena, node) {
            Placement::TopLevel => ModifierSite::TopLevelEnum,
            Placement::Nested => ModifierSite::NestedEnum,
            Placement::Local => ModifierSite::LocalEnum,
        };
        self.check_site(arena, node, site, reporter);
        walk_children(self, arena, node, reporter);
    }

    fn visit_annotation_declaration(
        &mut self,
        arena: &NodeArena,
        node: NodeIndex,
        _data: &AnnotationDeclarationData,
        reporter: &mut R,
    ) {
        self.check_site(arena, node, ModifierSite::AnnotationDeclaration, reporter);
        walk_children(self, arena, node, reporter);
    }

    fn visit_annotation_member_declaration(
        &mut self,
        arena: &NodeArena,
        node: NodeIndex,
        _data: &AnnotationMemberDeclarationData,
        reporter: &mut R,
    ) {
        self.check_site(arena, node, ModifierSite::AnnotationMember, reporter);
        walk_children(self, arena, node, reporter);
    }

    fn visit_field_declaration(
        &mut self,
        arena: &NodeArena,
        node: NodeIndex,
        _data: &FieldDeclarationData,
        reporter: &mut R,
    ) {
        self.check_site(arena, node, ModifierSite::Field, reporter);
        walk_children(self, arena, node, reporter);
    }

    fn visit_method_declaration(
        &mut self,
        arena: &NodeArena,
        node: NodeIndex,
        _data: &MethodDeclarationData,
        reporter: &mut R,
    ) {
        let site = if in_interface(arena, node) {
            ModifierSite::InterfaceMethod
        } else {
            ModifierSite::ClassMethod
        };
        self.check_site(arena, node, site, reporter);
        walk_children(self, arena, node, reporter);
    }

    fn visit_constructor_declaration(
        &mut self,
        arena: &NodeArena,
        node: NodeIndex,
        _data: &ConstructorDeclarationData,
        reporter: &mut R,
    ) {
        self.check_site(arena, node, ModifierSite::Constructor, reporter);
        walk_children(self, arena, node, reporter);
    }

    /// Method, constructor, lambda and catch parameters share one table.
    fn visit_parameter(&mut self, arena: &NodeArena, node: NodeIndex, _data: &ParameterData, reporter: &mut R) {
        self.check_site(arena, node, ModifierSite::Parameter, reporter);
        walk_children(self, arena, node, reporter);
    }

    fn visit_variable_declaration_expr(
        &mut self,
        arena: &NodeArena,
        node: NodeIndex,
        _data: &VariableDeclarationExprData,
        reporter: &mut R,
    ) {
        self.check_site(arena, node, ModifierSite::VariableDeclaration, reporter);
        walk_children(self, arena, node, reporter);
    }

    fn visit_module_requires_directive(
        &mut self,
        arena: &NodeArena,
        node: NodeIndex,
        _data: &ModuleRequiresDirectiveData,
        reporter: &mut R,
    ) {
        self.check_site(arena, node, ModifierSite::RequiresDirective, reporter);
    }
}

#[cfg(test)]
#[path = "../tests/modifier_validator_tests.rs"]
mod tests;
