use crate::{
    line::{BoundValue, Endpoint, LinePoint},
    value::Value,
};
use derive_more::{Deref, IntoIterator};
use serde::Serialize;
use std::cmp::Ordering;

///
/// IndexValue
///
/// The multi-part value of a composite index key, built incrementally one
/// column at a time during consolidation. Parts may carry an infinity when a
/// column's bound was open on that side.
///
/// Two index values compare lexicographically over their shared-length
/// prefix; a shorter value equal on the shared prefix compares equal, so a
/// bare prefix stands for the whole key range it covers.
///

#[derive(Clone, Debug, Default, Deref, IntoIterator, PartialEq, Serialize)]
pub struct IndexValue {
    parts: Vec<BoundValue<Value>>,
}

impl IndexValue {
    /// The empty key prefix.
    #[must_use]
    pub const fn new() -> Self {
        Self { parts: Vec::new() }
    }

    /// Append the next column's bound value.
    pub fn push_part(&mut self, part: BoundValue<Value>) {
        self.parts.push(part);
    }

    /// Move the parts out as an output key tuple.
    #[must_use]
    pub fn into_parts(self) -> Vec<BoundValue<Value>> {
        self.parts
    }
}

impl LinePoint for IndexValue {
    fn compare(&self, other: &Self) -> Ordering {
        for (a, b) in self.parts.iter().zip(&other.parts) {
            let cmp = a.compare(b);
            if cmp != Ordering::Equal {
                return cmp;
            }
        }

        Ordering::Equal
    }

    // The empty prefix spans the whole index and acts as an infinity, as
    // does any prefix whose last pushed part was one.
    fn is_finite(&self) -> bool {
        self.parts.last().is_some_and(BoundValue::is_finite)
    }
}

impl Endpoint<IndexValue> {
    /// Extend a composite endpoint with one column's scalar endpoint: the
    /// part value is appended and the scalar endpoint's inclusivity is
    /// adopted for the composite as a whole.
    pub(crate) fn push_part(&mut self, part: &Endpoint<Value>) {
        let BoundValue::Defined(tuple) = &mut self.value else {
            panic!("composite endpoint under extension must carry a key prefix");
        };

        tuple.push_part(part.value.clone());
        self.inclusive = part.inclusive;
    }
}
