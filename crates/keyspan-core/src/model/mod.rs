mod index;

pub use index::IndexModel;

use serde::Serialize;

///
/// ColumnKind
///
/// Scalar columns carry comparable values; relation columns reference other
/// tables and are not comparable by the planner.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub enum ColumnKind {
    Scalar,
    Relation,
}

///
/// ColumnModel
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct ColumnModel {
    pub name: String,
    pub kind: ColumnKind,
}

impl ColumnModel {
    /// Declare a scalar column.
    #[must_use]
    pub fn scalar(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: ColumnKind::Scalar,
        }
    }

    /// Declare a relation column.
    #[must_use]
    pub fn relation(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: ColumnKind::Relation,
        }
    }
}

///
/// TableModel
///
/// Read-only table metadata the planner consumes: the ordered column list
/// (positions are 0-based) and the declared indexes. Malformed metadata is a
/// caller bug and aborts at construction.
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct TableModel {
    name: String,
    columns: Vec<ColumnModel>,
    indexes: Vec<IndexModel>,
}

impl TableModel {
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        columns: Vec<ColumnModel>,
        indexes: Vec<IndexModel>,
    ) -> Self {
        let name = name.into();

        for index in &indexes {
            assert!(
                !index.columns.is_empty(),
                "index '{}' on table '{name}' has no columns",
                index.name
            );
            for column in &index.columns {
                assert!(
                    *column < columns.len(),
                    "index '{}' on table '{name}' references column position {column} out of {}",
                    index.name,
                    columns.len()
                );
            }
        }

        Self {
            name,
            columns,
            indexes,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    #[must_use]
    pub fn columns(&self) -> &[ColumnModel] {
        &self.columns
    }

    #[must_use]
    pub fn indexes(&self) -> &[IndexModel] {
        &self.indexes
    }

    /// Position of a column by name.
    #[must_use]
    pub fn column_position(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|column| column.name == name)
    }
}
