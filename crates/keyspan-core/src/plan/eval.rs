//! Module: plan::eval
//! Responsibility: per-column satisfying sets for one parameter binding.
//! Does not own: index choice or composite-bound construction.
//! Boundary: consolidation consumes the per-node column lines built here.

use crate::{
    line::{NumberLine, Segment},
    predicate::{CompiledNode, CompiledPredicate, NodeId, Operand},
    value::Value,
};
use derive_more::{Deref, DerefMut};
use std::collections::BTreeMap;
use thiserror::Error as ThisError;

///
/// Params
///
/// Execution-time binding of parameter names to values.
///

#[derive(Clone, Debug, Default, Deref, DerefMut)]
pub struct Params(BTreeMap<String, Value>);

impl Params {
    #[must_use]
    pub const fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Bind one parameter, chaining.
    #[must_use]
    pub fn bind(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(name.into(), value.into());
        self
    }
}

impl From<BTreeMap<String, Value>> for Params {
    fn from(values: BTreeMap<String, Value>) -> Self {
        Self(values)
    }
}

impl FromIterator<(String, Value)> for Params {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

///
/// BindError
///
/// A leaf referenced a parameter the execution did not bind. Aborts this
/// execution only; the shared plan is untouched.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum BindError {
    #[error("parameter '{name}' has no bound value")]
    MissingParameter { name: String },
}

///
/// ColumnBounds
///
/// Per-column satisfying sets of one node. Columns the node's subtree never
/// constrains have no entry and default to the unbounded line.
///

#[derive(Clone, Debug, Default)]
pub(crate) struct ColumnBounds {
    lines: BTreeMap<usize, NumberLine<Value>>,
}

impl ColumnBounds {
    fn insert(&mut self, column: usize, line: NumberLine<Value>) {
        self.lines.insert(column, line);
    }

    pub(crate) fn line(&self, column: usize) -> Option<&NumberLine<Value>> {
        self.lines.get(&column)
    }

    pub(crate) fn line_or_unbounded(&self, column: usize) -> NumberLine<Value> {
        self.lines
            .get(&column)
            .cloned()
            .unwrap_or_else(NumberLine::unbounded)
    }
}

///
/// EvaluatedBounds
///
/// Execution-local evaluation result: one `ColumnBounds` per arena node,
/// never written back onto the shared plan. Concurrent executions each hold
/// their own instance.
///

#[derive(Debug)]
pub(crate) struct EvaluatedBounds {
    per_node: Vec<ColumnBounds>,
}

impl EvaluatedBounds {
    pub(crate) fn node(&self, id: NodeId) -> &ColumnBounds {
        &self.per_node[id]
    }

    pub(crate) fn root(&self) -> &ColumnBounds {
        self.node(CompiledPredicate::ROOT)
    }
}

/// Evaluate every node's per-column lines for one parameter binding.
///
/// Walks the arena in descending id order (children before parents): leaves
/// build their segment from resolved values; `And`/`Or` combine children's
/// lines per used column with intersection/union, children silent on a
/// column contributing the unbounded line; `Not` complements its child's
/// line for every column the child uses.
pub(crate) fn evaluate(
    compiled: &CompiledPredicate,
    params: &Params,
) -> Result<EvaluatedBounds, BindError> {
    let mut per_node: Vec<ColumnBounds> = (0..compiled.node_count())
        .map(|_| ColumnBounds::default())
        .collect();

    for id in (0..compiled.node_count()).rev() {
        match compiled.node(id) {
            CompiledNode::Compare {
                column,
                op,
                operand,
            } => {
                let value = resolve(operand, params)?;
                per_node[id].insert(*column, NumberLine::for_comparator(*op, value));
            }
            CompiledNode::Between { column, low, high } => {
                let segment = Segment::between(resolve(low, params)?, resolve(high, params)?);
                per_node[id].insert(*column, NumberLine::from_segment(segment));
            }
            CompiledNode::NullTest { column, is_null } => {
                let segment = Segment::null_test(*is_null);
                per_node[id].insert(*column, NumberLine::from_segment(segment));
            }
            CompiledNode::And { children } => {
                for column in compiled.masks(id).used.to_positions() {
                    let lines: Vec<NumberLine<Value>> = children
                        .iter()
                        .map(|child| per_node[*child].line_or_unbounded(column))
                        .collect();
                    let line = NumberLine::intersection(&lines);
                    per_node[id].insert(column, line);
                }
            }
            CompiledNode::Or { children } => {
                for column in compiled.masks(id).used.to_positions() {
                    let lines: Vec<NumberLine<Value>> = children
                        .iter()
                        .map(|child| per_node[*child].line_or_unbounded(column))
                        .collect();
                    let line = NumberLine::union(&lines);
                    per_node[id].insert(column, line);
                }
            }
            CompiledNode::Not { child } => {
                for column in compiled.masks(id).used.to_positions() {
                    let line = per_node[*child].line_or_unbounded(column).complement();
                    per_node[id].insert(column, line);
                }
            }
        }
    }

    Ok(EvaluatedBounds { per_node })
}

/// Resolve an operand against the execution's parameter binding.
pub(super) fn resolve(operand: &Operand, params: &Params) -> Result<Value, BindError> {
    match operand {
        Operand::Literal(value) => Ok(value.clone()),
        Operand::Param(name) => params
            .get(name)
            .cloned()
            .ok_or_else(|| BindError::MissingParameter { name: name.clone() }),
    }
}
