//! Module: plan::consolidate
//! Responsibility: merge per-column lines into composite index key ranges.
//! Does not own: per-column evaluation or access-route choice.
//! Boundary: ordered-scan execution turns the composite line into bounds.

use crate::{
    line::{BoundValue, Endpoint, IndexValue, NumberLine, Segment},
    model::IndexModel,
    plan::eval::{ColumnBounds, EvaluatedBounds},
    predicate::{CompiledNode, CompiledPredicate},
};

/// Build the composite satisfying line of one ordered index.
///
/// For a single-column index the root's column line lifts directly to
/// one-part key values. For a composite index the arena is walked children
/// first: `And` nodes consolidate their own per-column lines by prefix
/// extension, `Or` nodes union their children's composite lines, and `Not`
/// complements its child's composite line when the child has one. Nodes
/// without a composite result contribute their first-index-column line
/// lifted to one-part key values.
pub(crate) fn consolidate(
    compiled: &CompiledPredicate,
    bounds: &EvaluatedBounds,
    index: &IndexModel,
) -> NumberLine<IndexValue> {
    let first_column = index.first_column();

    if index.columns.len() == 1 {
        return bounds
            .root()
            .line_or_unbounded(first_column)
            .to_index_values();
    }

    let mut ranges: Vec<Option<NumberLine<IndexValue>>> = vec![None; compiled.node_count()];

    for id in (0..compiled.node_count()).rev() {
        match compiled.node(id) {
            CompiledNode::And { .. } => {
                ranges[id] = Some(consolidate_node(bounds.node(id), index));
            }
            CompiledNode::Or { children } => {
                let lines: Vec<NumberLine<IndexValue>> = children
                    .iter()
                    .map(|child| composite_for(*child, &ranges, bounds, first_column))
                    .collect();
                ranges[id] = Some(NumberLine::union(&lines));
            }
            CompiledNode::Not { child } => {
                ranges[id] = ranges[*child].clone().map(NumberLine::complement);
            }
            _ => {}
        }
    }

    ranges[CompiledPredicate::ROOT]
        .take()
        .unwrap_or_else(|| composite_for(CompiledPredicate::ROOT, &ranges, bounds, first_column))
}

/// A node's composite line, or its first-index-column line lifted to
/// one-part key values when no composite result exists.
fn composite_for(
    id: usize,
    ranges: &[Option<NumberLine<IndexValue>>],
    bounds: &EvaluatedBounds,
    first_column: usize,
) -> NumberLine<IndexValue> {
    ranges[id].clone().unwrap_or_else(|| {
        bounds
            .node(id)
            .line_or_unbounded(first_column)
            .to_index_values()
    })
}

///
/// Frame
///
/// One pending prefix-extension step: the partially built composite
/// endpoints and whether each side can still be tightened by the next
/// column.
///

struct Frame {
    part: usize,
    low: Endpoint<IndexValue>,
    high: Endpoint<IndexValue>,
    extend_low: bool,
    extend_high: bool,
}

/// Prefix-extend one node's per-column lines into composite ranges.
///
/// For each segment of the current column's line, the partial bounds are
/// copied and the segment's endpoints pushed. A side stays extendable only
/// while its endpoint is both inclusive and finite (an exclusive or
/// infinite bound already admits every longer key beyond it). Extension
/// stops at the first index column the node has no line for; each finished
/// partial is union-merged into the result.
fn consolidate_node(node_bounds: &ColumnBounds, index: &IndexModel) -> NumberLine<IndexValue> {
    let mut out = NumberLine::empty();
    let mut work = vec![Frame {
        part: 0,
        low: Endpoint::low(BoundValue::Defined(IndexValue::new()), true),
        high: Endpoint::high(BoundValue::Defined(IndexValue::new()), true),
        extend_low: true,
        extend_high: true,
    }];

    while let Some(frame) = work.pop() {
        let column = index.columns[frame.part];
        let Some(line) = node_bounds.line(column) else {
            out.insert_segment(Segment::from_endpoints(frame.low, frame.high));
            continue;
        };

        for segment in line.segments() {
            let mut low = frame.low.clone();
            let mut high = frame.high.clone();
            let mut extend_low = frame.extend_low;
            let mut extend_high = frame.extend_high;

            if extend_low {
                assert_prefix_len(&low, frame.part);
                low.push_part(segment.low());
                extend_low = segment.low().is_inclusive() && segment.low().is_finite();
            }
            if extend_high {
                assert_prefix_len(&high, frame.part);
                high.push_part(segment.high());
                extend_high = segment.high().is_inclusive() && segment.high().is_finite();
            }

            let next = frame.part + 1;
            let next_has_line = next < index.columns.len()
                && node_bounds.line(index.columns[next]).is_some();

            if (extend_low || extend_high) && next_has_line {
                work.push(Frame {
                    part: next,
                    low,
                    high,
                    extend_low,
                    extend_high,
                });
            } else {
                out.insert_segment(Segment::from_endpoints(low, high));
            }
        }
    }

    out
}

fn assert_prefix_len(endpoint: &Endpoint<IndexValue>, part: usize) {
    let len = endpoint
        .value()
        .as_defined()
        .map_or(0, |tuple| tuple.len());

    assert!(
        len == part,
        "composite bound extension out of step: {len}-part prefix at column part {part}"
    );
}
