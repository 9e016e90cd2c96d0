use crate::{
    model::{ColumnKind, TableModel},
    predicate::{CompareOp, Operand, Predicate, PredicateError},
};

///
/// FieldRef
///
/// A resolved, comparison-capable field of one table. Obtained from
/// [`TableModel::field`], which rejects unknown and relationship fields, so
/// every comparator built from a `FieldRef` is well-formed by construction.
///

#[derive(Clone, Copy, Debug)]
pub struct FieldRef {
    column: usize,
}

impl TableModel {
    /// Resolve a field for predicate building.
    pub fn field(&self, name: &str) -> Result<FieldRef, PredicateError> {
        let Some(column) = self.column_position(name) else {
            return Err(PredicateError::UnknownField {
                field: name.to_string(),
            });
        };

        if self.columns()[column].kind != ColumnKind::Scalar {
            return Err(PredicateError::NonScalarField {
                field: name.to_string(),
            });
        }

        Ok(FieldRef { column })
    }
}

impl FieldRef {
    #[must_use]
    pub const fn column(self) -> usize {
        self.column
    }

    #[must_use]
    pub fn eq(self, operand: impl Into<Operand>) -> Predicate {
        self.compare(CompareOp::Eq, operand)
    }

    #[must_use]
    pub fn ne(self, operand: impl Into<Operand>) -> Predicate {
        self.compare(CompareOp::Ne, operand)
    }

    #[must_use]
    pub fn lt(self, operand: impl Into<Operand>) -> Predicate {
        self.compare(CompareOp::Lt, operand)
    }

    #[must_use]
    pub fn lte(self, operand: impl Into<Operand>) -> Predicate {
        self.compare(CompareOp::Lte, operand)
    }

    #[must_use]
    pub fn gt(self, operand: impl Into<Operand>) -> Predicate {
        self.compare(CompareOp::Gt, operand)
    }

    #[must_use]
    pub fn gte(self, operand: impl Into<Operand>) -> Predicate {
        self.compare(CompareOp::Gte, operand)
    }

    /// Inclusive range test; endpoint order is resolved at evaluation time
    /// by comparing the bound values, not by argument order.
    #[must_use]
    pub fn between(self, low: impl Into<Operand>, high: impl Into<Operand>) -> Predicate {
        Predicate::Between {
            column: self.column,
            low: low.into(),
            high: high.into(),
        }
    }

    #[must_use]
    pub const fn is_null(self) -> Predicate {
        Predicate::NullTest {
            column: self.column,
            is_null: true,
        }
    }

    #[must_use]
    pub const fn is_not_null(self) -> Predicate {
        Predicate::NullTest {
            column: self.column,
            is_null: false,
        }
    }

    fn compare(self, op: CompareOp, operand: impl Into<Operand>) -> Predicate {
        Predicate::Compare {
            column: self.column,
            op,
            operand: operand.into(),
        }
    }
}
