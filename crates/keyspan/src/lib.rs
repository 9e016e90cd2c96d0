//! ## Crate layout
//! - `core`: predicate model, interval algebra, access-path selection, and
//!   index-bound consolidation.
//!
//! The `prelude` module mirrors the planning surface used by access-layer
//! code: declare table metadata, build a predicate over its fields, plan
//! once, then execute per parameter binding.

pub use keyspan_core as core;

//
// Consts
//

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use core::Error;

///
/// Prelude
/// using _ brings traits into scope and avoids name conflicts
///

pub mod prelude {
    pub use crate::core::{
        model::{ColumnKind, ColumnModel, IndexModel, TableModel},
        plan::{AccessPath, AccessRoute, BindError, IndexBound, IndexBoundEndpoint, Params, QueryPlan},
        predicate::{CompareOp, FieldRef, Operand, Predicate, PredicateError},
        value::Value,
    };
}
