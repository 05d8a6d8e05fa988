//! Operator and primitive-type scalars carried by expression and type nodes.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BinaryOperator {
    Or,
    And,
    BinaryOr,
    BinaryAnd,
    Xor,
    Equals,
    NotEquals,
    Less,
    Greater,
    LessEquals,
    GreaterEquals,
    LeftShift,
    SignedRightShift,
    UnsignedRightShift,
    #[default]
    Plus,
    Minus,
    Multiply,
    Divide,
    Remainder,
}

impl BinaryOperator {
    pub fn as_str(self) -> &'static str {
        match self {
            BinaryOperator::Or => "||",
            BinaryOperator::And => "&&",
            BinaryOperator::BinaryOr => "|",
            BinaryOperator::BinaryAnd => "&",
            BinaryOperator::Xor => "^",
            BinaryOperator::Equals => "==",
            BinaryOperator::NotEquals => "!=",
            BinaryOperator::Less => "<",
            BinaryOperator::Greater => ">",
            BinaryOperator::LessEquals => "<=",
            BinaryOperator::GreaterEquals => ">=",
            BinaryOperator::LeftShift => "<<",
            BinaryOperator::SignedRightShift => ">>",
            BinaryOperator::UnsignedRightShift => ">>>",
            BinaryOperator::Plus => "+",
            BinaryOperator::Minus => "-",
            BinaryOperator::Multiply => "*",
            BinaryOperator::Divide => "/",
            BinaryOperator::Remainder => "%",
        }
    }

    /// Comparison and logical operators always produce a boolean.
    pub fn is_boolean(self) -> bool {
        matches!(
            self,
            BinaryOperator::Or
                | BinaryOperator::And
                | BinaryOperator::Equals
                | BinaryOperator::NotEquals
                | BinaryOperator::Less
                | BinaryOperator::Greater
                | BinaryOperator::LessEquals
                | BinaryOperator::GreaterEquals
        )
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnaryOperator {
    #[default]
    Plus,
    Minus,
    PrefixIncrement,
    PrefixDecrement,
    LogicalComplement,
    BitwiseComplement,
    PostfixIncrement,
    PostfixDecrement,
}

impl UnaryOperator {
    pub fn as_str(self) -> &'static str {
        match self {
            UnaryOperator::Plus => "+",
            UnaryOperator::Minus => "-",
            UnaryOperator::PrefixIncrement | UnaryOperator::PostfixIncrement => "++",
            UnaryOperator::PrefixDecrement | UnaryOperator::PostfixDecrement => "--",
            UnaryOperator::LogicalComplement => "!",
            UnaryOperator::BitwiseComplement => "~",
        }
    }

    pub fn is_postfix(self) -> bool {
        matches!(
            self,
            UnaryOperator::PostfixIncrement | UnaryOperator::PostfixDecrement
        )
    }

    #[inline]
    pub fn is_prefix(self) -> bool {
        !self.is_postfix()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AssignOperator {
    #[default]
    Assign,
    Plus,
    Minus,
    Multiply,
    Divide,
    BinaryAnd,
    BinaryOr,
    Xor,
    Remainder,
    LeftShift,
    SignedRightShift,
    UnsignedRightShift,
}

impl AssignOperator {
    pub fn as_str(self) -> &'static str {
        match self {
            AssignOperator::Assign => "=",
            AssignOperator::Plus => "+=",
            AssignOperator::Minus => "-=",
            AssignOperator::Multiply => "*=",
            AssignOperator::Divide => "/=",
            AssignOperator::BinaryAnd => "&=",
            AssignOperator::BinaryOr => "|=",
            AssignOperator::Xor => "^=",
            AssignOperator::Remainder => "%=",
            AssignOperator::LeftShift => "<<=",
            AssignOperator::SignedRightShift => ">>=",
            AssignOperator::UnsignedRightShift => ">>>=",
        }
    }

    /// The binary operator a compound assignment applies, `None` for plain `=`.
    pub fn to_binary_operator(self) -> Option<BinaryOperator> {
        Some(match self {
            AssignOperator::Assign => return None,
            AssignOperator::Plus => BinaryOperator::Plus,
            AssignOperator::Minus => BinaryOperator::Minus,
            AssignOperator::Multiply => BinaryOperator::Multiply,
            AssignOperator::Divide => BinaryOperator::Divide,
            AssignOperator::BinaryAnd => BinaryOperator::BinaryAnd,
            AssignOperator::BinaryOr => BinaryOperator::BinaryOr,
            AssignOperator::Xor => BinaryOperator::Xor,
            AssignOperator::Remainder => BinaryOperator::Remainder,
            AssignOperator::LeftShift => BinaryOperator::LeftShift,
            AssignOperator::SignedRightShift => BinaryOperator::SignedRightShift,
            AssignOperator::UnsignedRightShift => BinaryOperator::UnsignedRightShift,
        })
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Primitive {
    Boolean,
    Char,
    Byte,
    Short,
    #[default]
    Int,
    Long,
    Float,
    Double,
}

impl Primitive {
    pub fn as_str(self) -> &'static str {
        match self {
            Primitive::Boolean => "boolean",
            Primitive::Char => "char",
            Primitive::Byte => "byte",
            Primitive::Short => "short",
            Primitive::Int => "int",
            Primitive::Long => "long",
            Primitive::Float => "float",
            Primitive::Double => "double",
        }
    }
}

macro_rules! display_as_str {
    ($($ty:ty),+) => {
        $(impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        })+
    };
}

display_as_str!(BinaryOperator, UnaryOperator, AssignOperator, Primitive);
