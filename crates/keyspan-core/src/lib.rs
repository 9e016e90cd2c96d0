//! Core runtime for Keyspan: the predicate model, column-mask annotation,
//! interval algebra, access-path selection, and index-bound consolidation,
//! with the ergonomics exported via the `prelude`.
//!
//! Planning is pure, synchronous, in-process computation. The compiled
//! predicate is built once per query shape and shared read-only; every
//! per-execution result lives in execution-local state.

pub mod error;
pub mod line;
pub mod mask;
pub mod model;
pub mod plan;
pub mod predicate;
pub mod value;

// test
#[cfg(test)]
pub(crate) mod test_fixtures;

pub use error::Error;

///
/// Prelude
///
/// Prelude contains only domain vocabulary.
/// No errors, internals, or helpers are re-exported here.
///

pub mod prelude {
    pub use crate::{
        model::{ColumnModel, IndexModel, TableModel},
        plan::{AccessPath, AccessRoute, IndexBound, Params, QueryPlan},
        predicate::{Operand, Predicate},
        value::Value,
    };
}
