//! Default type-of adapter.
//!
//! Literals, primitive, `void` and array types, parenthesised expressions and
//! casts are typed locally. Names, calls, field accesses, object creations,
//! `this` and class types are handed to the resolver. Placeholder kinds have
//! no type yet and yield `Ok(None)`. Every other kind is unsupported.

use crate::error::ResolveError;
use crate::resolver::SymbolResolver;
use crate::types::ResolvedType;
use jast_ast::*;
use tracing::trace;

pub type TypeResult = Result<Option<ResolvedType>, ResolveError>;

pub struct TypeOfVisitor<'r> {
    resolver: &'r dyn SymbolResolver,
}

impl<'r> TypeOfVisitor<'r> {
    pub fn new(resolver: &'r dyn SymbolResolver) -> TypeOfVisitor<'r> {
        TypeOfVisitor { resolver }
    }

    fn calculate(&self, arena: &NodeArena, node: NodeIndex) -> TypeResult {
        trace!(%node, "delegating expression type");
        self.resolver.calculate_type(arena, node).map(Some)
    }
}

/// Integer literals with an `l`/`L` suffix are `long`.
fn integer_literal_type(text: &str) -> Primitive {
    if text.ends_with(['l', 'L']) {
        Primitive::Long
    } else {
        Primitive::Int
    }
}

/// Floating literals with an `f`/`F` suffix are `float`.
fn floating_literal_type(text: &str) -> Primitive {
    if text.ends_with(['f', 'F']) {
        Primitive::Float
    } else {
        Primitive::Double
    }
}

impl GenericVisitor<()> for TypeOfVisitor<'_> {
    type Output = TypeResult;

    fn visit_default(&mut self, arena: &NodeArena, node: NodeIndex, _: &mut ()) -> TypeResult {
        match arena.kind(node) {
            Some(kind) => Err(ResolveError::Unsupported(kind)),
            None => Err(ResolveError::InvalidIndex(node)),
        }
    }

    fn visit_integer_literal_expr(
        &mut self,
        _: &NodeArena,
        _: NodeIndex,
        data: &IntegerLiteralExprData,
        _: &mut (),
    ) -> TypeResult {
        Ok(Some(ResolvedType::primitive(integer_literal_type(&data.value))))
    }

    fn visit_double_literal_expr(
        &mut self,
        _: &NodeArena,
        _: NodeIndex,
        data: &DoubleLiteralExprData,
        _: &mut (),
    ) -> TypeResult {
        Ok(Some(ResolvedType::primitive(floating_literal_type(&data.value))))
    }

    fn visit_char_literal_expr(&mut self, _: &NodeArena, _: NodeIndex, _: &CharLiteralExprData, _: &mut ()) -> TypeResult {
        Ok(Some(ResolvedType::primitive(Primitive::Char)))
    }

    fn visit_string_literal_expr(
        &mut self,
        _: &NodeArena,
        _: NodeIndex,
        _: &StringLiteralExprData,
        _: &mut (),
    ) -> TypeResult {
        Ok(Some(ResolvedType::string()))
    }

    fn visit_boolean_literal_expr(
        &mut self,
        _: &NodeArena,
        _: NodeIndex,
        _: &BooleanLiteralExprData,
        _: &mut (),
    ) -> TypeResult {
        Ok(Some(ResolvedType::primitive(Primitive::Boolean)))
    }

    fn visit_null_literal_expr(&mut self, _: &NodeArena, _: NodeIndex, _: &NullLiteralExprData, _: &mut ()) -> TypeResult {
        Ok(Some(ResolvedType::Null))
    }

    fn visit_primitive_type(&mut self, _: &NodeArena, _: NodeIndex, data: &PrimitiveTypeData, _: &mut ()) -> TypeResult {
        Ok(Some(ResolvedType::primitive(data.primitive)))
    }

    fn visit_void_type(&mut self, _: &NodeArena, _: NodeIndex, _: &VoidTypeData, _: &mut ()) -> TypeResult {
        Ok(Some(ResolvedType::Void))
    }

    fn visit_array_type(&mut self, arena: &NodeArena, _: NodeIndex, data: &ArrayTypeData, arg: &mut ()) -> TypeResult {
        Ok(self
            .visit(arena, data.component_type, arg)?
            .map(ResolvedType::array_of))
    }

    fn visit_enclosed_expr(&mut self, arena: &NodeArena, _: NodeIndex, data: &EnclosedExprData, arg: &mut ()) -> TypeResult {
        self.visit(arena, data.inner, arg)
    }

    /// The target type, whatever the operand.
    fn visit_cast_expr(&mut self, arena: &NodeArena, _: NodeIndex, data: &CastExprData, arg: &mut ()) -> TypeResult {
        self.visit(arena, data.ty, arg)
    }

    fn visit_name_expr(&mut self, arena: &NodeArena, node: NodeIndex, _: &NameExprData, _: &mut ()) -> TypeResult {
        self.calculate(arena, node)
    }

    fn visit_method_call_expr(
        &mut self,
        arena: &NodeArena,
        node: NodeIndex,
        _: &MethodCallExprData,
        _: &mut (),
    ) -> TypeResult {
        self.calculate(arena, node)
    }

    fn visit_field_access_expr(
        &mut self,
        arena: &NodeArena,
        node: NodeIndex,
        _: &FieldAccessExprData,
        _: &mut (),
    ) -> TypeResult {
        self.calculate(arena, node)
    }

    fn visit_object_creation_expr(
        &mut self,
        arena: &NodeArena,
        node: NodeIndex,
        _: &ObjectCreationExprData,
        _: &mut (),
    ) -> TypeResult {
        self.calculate(arena, node)
    }

    fn visit_this_expr(&mut self, arena: &NodeArena, node: NodeIndex, _: &ThisExprData, _: &mut ()) -> TypeResult {
        self.calculate(arena, node)
    }

    fn visit_class_or_interface_type(
        &mut self,
        arena: &NodeArena,
        node: NodeIndex,
        _: &ClassOrInterfaceTypeData,
        _: &mut (),
    ) -> TypeResult {
        trace!(%node, "delegating class type");
        self.resolver.to_resolved_type(arena, node).map(Some)
    }

    fn visit_placeholder_expr(&mut self, _: &NodeArena, _: NodeIndex, _: &PlaceholderExprData, _: &mut ()) -> TypeResult {
        Ok(None)
    }

    fn visit_placeholder_type(&mut self, _: &NodeArena, _: NodeIndex, _: &PlaceholderTypeData, _: &mut ()) -> TypeResult {
        Ok(None)
    }
}

#[cfg(test)]
#[path = "../tests/type_of_tests.rs"]
mod tests;
