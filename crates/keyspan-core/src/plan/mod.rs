//! Module: plan
//! Responsibility: turn an annotated predicate plus index metadata into an
//! access-path descriptor with concrete key ranges.
//! Does not own: scan execution, storage, or metadata discovery.
//! Boundary: callers hand the produced `AccessPath` to an external executor.

mod bounds;
mod consolidate;
mod eval;
mod keys;
mod select;


pub use bounds::{IndexBound, IndexBoundEndpoint};
pub use eval::{BindError, Params};
pub use select::AccessRoute;

use crate::{
    model::TableModel,
    predicate::{CompiledPredicate, Predicate, PredicateError},
    value::Value,
};
use serde::Serialize;
use tracing::{debug, trace};

///
/// AccessPath
///
/// Per-execution access descriptor: an exact lookup key for unique indexes,
/// or the key ranges an ordered scan must cover. Index positions refer to
/// the table's index declaration order. A table scan carries the single
/// unbounded range.
///

#[derive(Clone, Debug, PartialEq, Serialize)]
pub enum AccessPath {
    PrimaryKeyLookup { index: usize, key: Vec<Value> },
    UniqueKeyLookup { index: usize, key: Vec<Value> },
    OrderedIndexScan { index: usize, bounds: Vec<IndexBound> },
    TableScan { bounds: Vec<IndexBound> },
}

///
/// QueryPlan
///
/// The annotate-once planning artifact for one predicate/table pair.
/// Compilation, annotation, and access-route selection happen here exactly
/// once; the result is immutable and safe to share across arbitrarily many
/// concurrent executions. Each [`QueryPlan::execute`] call works entirely
/// on execution-local state.
///

#[derive(Debug)]
pub struct QueryPlan<'a> {
    table: &'a TableModel,
    compiled: CompiledPredicate,
    route: AccessRoute,
}

impl<'a> QueryPlan<'a> {
    /// Compile and annotate a predicate, then choose its access route.
    pub fn new(table: &'a TableModel, predicate: &Predicate) -> Result<Self, PredicateError> {
        let compiled = CompiledPredicate::compile(table, predicate)?;
        let route = select::select_route(table, compiled.root_masks());

        debug!(table = table.name(), route = ?route, "access route selected");

        Ok(Self {
            table,
            compiled,
            route,
        })
    }

    /// The parameter-independent access route this plan will take.
    #[must_use]
    pub const fn route(&self) -> AccessRoute {
        self.route
    }

    #[must_use]
    pub const fn table(&self) -> &TableModel {
        self.table
    }

    /// Produce the access-path descriptor for one parameter binding.
    ///
    /// An empty predicate result is not an error: an ordered scan may come
    /// back with zero bounds, meaning zero ranges need scanning.
    pub fn execute(&self, params: &Params) -> Result<AccessPath, BindError> {
        match self.route {
            AccessRoute::PrimaryKey { index } => Ok(AccessPath::PrimaryKeyLookup {
                index,
                key: keys::extract_key(&self.compiled, params, &self.table.indexes()[index])?,
            }),
            AccessRoute::UniqueKey { index } => Ok(AccessPath::UniqueKeyLookup {
                index,
                key: keys::extract_key(&self.compiled, params, &self.table.indexes()[index])?,
            }),
            AccessRoute::OrderedScan { index } => {
                let index_model = &self.table.indexes()[index];
                let evaluated = eval::evaluate(&self.compiled, params)?;
                let line = consolidate::consolidate(&self.compiled, &evaluated, index_model);
                let bounds: Vec<IndexBound> =
                    line.segments().map(IndexBound::from_segment).collect();

                trace!(
                    index = index_model.name.as_str(),
                    bounds = bounds.len(),
                    "consolidated scan bounds"
                );

                Ok(AccessPath::OrderedIndexScan { index, bounds })
            }
            AccessRoute::TableScan => Ok(AccessPath::TableScan {
                bounds: vec![IndexBound::unbounded()],
            }),
        }
    }
}
