use crate::{
    model::IndexModel,
    plan::eval::{self, BindError, Params},
    predicate::{CompareOp, CompiledNode, CompiledPredicate, NodeId, Operand},
    value::Value,
};
use std::collections::BTreeMap;

/// Extract the exact key values for a unique-index lookup, in index-column
/// order.
///
/// Equality leaves reachable through `And` nodes only are collected (an
/// equality under `Or` or `Not` pins nothing, mirroring the `equal` mask),
/// leftmost leaf winning per column. Selection guarantees every index
/// column is covered; a gap here is a planner invariant violation.
pub(crate) fn extract_key(
    compiled: &CompiledPredicate,
    params: &Params,
    index: &IndexModel,
) -> Result<Vec<Value>, BindError> {
    let mut by_column: BTreeMap<usize, &Operand> = BTreeMap::new();
    let mut work: Vec<NodeId> = vec![CompiledPredicate::ROOT];

    while let Some(id) = work.pop() {
        match compiled.node(id) {
            CompiledNode::Compare {
                column,
                op: CompareOp::Eq,
                operand,
            } => {
                by_column.entry(*column).or_insert(operand);
            }
            CompiledNode::And { children } => {
                work.extend(children.iter().rev());
            }
            _ => {}
        }
    }

    index
        .columns
        .iter()
        .map(|column| {
            let operand = by_column
                .get(column)
                .unwrap_or_else(|| panic!("unique index column {column} not pinned by equality"));

            eval::resolve(operand, params)
        })
        .collect()
}
