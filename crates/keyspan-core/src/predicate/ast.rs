use crate::value::Value;
use std::ops::{BitAnd, BitOr};
use thiserror::Error as ThisError;

///
/// Predicate AST
///
/// Pure, table-agnostic representation of query predicates. Column
/// references are 0-based positions into the target table. This layer
/// carries no planning or execution semantics; all interpretation occurs in
/// later passes:
///
/// - compilation / mask annotation
/// - per-execution bound evaluation
/// - access-path selection and consolidation
///

///
/// CompareOp
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CompareOp {
    Eq,
    Ne,
    Lt,
    Lte,
    Gt,
    Gte,
}

///
/// Operand
///
/// Right-hand side of a comparison: a named parameter resolved at
/// execution time, or an inline literal.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Operand {
    Param(String),
    Literal(Value),
}

impl Operand {
    /// Reference a named execution-time parameter.
    #[must_use]
    pub fn param(name: impl Into<String>) -> Self {
        Self::Param(name.into())
    }
}

macro_rules! impl_operand_from_for {
    ( $( $type:ty ),* $(,)? ) => {
        $(
            impl From<$type> for Operand {
                fn from(v: $type) -> Self {
                    Self::Literal(v.into())
                }
            }
        )*
    };
}

impl_operand_from_for! {
    bool, i8, i16, i32, i64, u8, u16, u32, u64, &str, String,
}

impl From<Value> for Operand {
    fn from(value: Value) -> Self {
        Self::Literal(value)
    }
}

///
/// Predicate
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Predicate {
    Compare {
        column: usize,
        op: CompareOp,
        operand: Operand,
    },
    Between {
        column: usize,
        low: Operand,
        high: Operand,
    },
    NullTest {
        column: usize,
        is_null: bool,
    },
    And(Vec<Self>),
    Or(Vec<Self>),
    Not(Box<Self>),
}

impl Predicate {
    /// Conjunction over two or more children.
    pub fn all(children: Vec<Self>) -> Result<Self, PredicateError> {
        Self::check_arity("and", &children)?;
        Ok(Self::And(children))
    }

    /// Disjunction over two or more children.
    pub fn any(children: Vec<Self>) -> Result<Self, PredicateError> {
        Self::check_arity("or", &children)?;
        Ok(Self::Or(children))
    }

    /// Negation.
    #[must_use]
    pub fn negate(self) -> Self {
        Self::Not(Box::new(self))
    }

    fn check_arity(combinator: &'static str, children: &[Self]) -> Result<(), PredicateError> {
        if children.len() < 2 {
            return Err(PredicateError::CombinatorArity {
                combinator,
                found: children.len(),
            });
        }

        Ok(())
    }
}

impl BitAnd for Predicate {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self::Output {
        Self::And(vec![self, rhs])
    }
}

impl BitOr for Predicate {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self::Or(vec![self, rhs])
    }
}

///
/// PredicateError
///
/// Construction-time rejections, surfaced to the caller building the
/// predicate before any planning runs.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum PredicateError {
    #[error("unknown field '{field}'")]
    UnknownField { field: String },

    #[error("field '{field}' is a relationship and cannot be used with scalar comparators")]
    NonScalarField { field: String },

    #[error("'{combinator}' requires at least 2 children, found {found}")]
    CombinatorArity {
        combinator: &'static str,
        found: usize,
    },

    #[error("column position {column} out of range for {column_count}-column table")]
    ColumnOutOfRange { column: usize, column_count: usize },
}
