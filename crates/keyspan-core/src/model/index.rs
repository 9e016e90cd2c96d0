use crate::mask::ColumnMask;
use serde::Serialize;

///
/// IndexModel
///
/// One declared index: the ordered column positions it covers and its
/// access capabilities. A unique index supports exact lookups when every
/// column is pinned; an ordered index supports range scans over a key
/// prefix.
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct IndexModel {
    pub name: String,
    pub columns: Vec<usize>,
    pub unique: bool,
    pub ordered: bool,
    pub primary_key: bool,
}

impl IndexModel {
    /// Declare the primary key: unique and ordered.
    #[must_use]
    pub fn primary_key(name: impl Into<String>, columns: Vec<usize>) -> Self {
        Self {
            name: name.into(),
            columns,
            unique: true,
            ordered: true,
            primary_key: true,
        }
    }

    /// Declare a unique (hash) index.
    #[must_use]
    pub fn unique(name: impl Into<String>, columns: Vec<usize>) -> Self {
        Self {
            name: name.into(),
            columns,
            unique: true,
            ordered: false,
            primary_key: false,
        }
    }

    /// Declare an ordered (range-scannable) index.
    #[must_use]
    pub fn ordered(name: impl Into<String>, columns: Vec<usize>) -> Self {
        Self {
            name: name.into(),
            columns,
            unique: false,
            ordered: true,
            primary_key: false,
        }
    }

    /// Mark a unique index as also ordered.
    #[must_use]
    pub const fn with_ordered(mut self) -> Self {
        self.ordered = true;
        self
    }

    /// First (leading) column position.
    #[must_use]
    pub fn first_column(&self) -> usize {
        self.columns[0]
    }

    /// Mask over the columns this index covers.
    #[must_use]
    pub(crate) fn column_mask(&self, capacity: usize) -> ColumnMask {
        let mut mask = ColumnMask::new(capacity);
        for column in &self.columns {
            mask.set(*column);
        }

        mask
    }
}
