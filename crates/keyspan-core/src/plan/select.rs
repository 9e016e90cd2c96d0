use crate::{model::TableModel, predicate::NodeMasks};
use serde::Serialize;
use tracing::trace;

///
/// AccessRoute
///
/// Parameter-independent access strategy, chosen once per predicate/table
/// pair from the mask annotation alone. Index positions refer to the
/// table's index declaration order.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub enum AccessRoute {
    PrimaryKey { index: usize },
    UniqueKey { index: usize },
    OrderedScan { index: usize },
    TableScan,
}

/// Choose the access route for an annotated predicate.
///
/// A unique index whose columns are all pinned by equality is always an
/// exact lookup and is checked first, primary key ahead of other unique
/// indexes. Otherwise ordered indexes are scored and the best non-zero
/// scorer wins; with nothing usable the route degrades to a table scan.
pub(crate) fn select_route(table: &TableModel, masks: &NodeMasks) -> AccessRoute {
    let capacity = table.column_count();

    for primary_pass in [true, false] {
        for (position, index) in table.indexes().iter().enumerate() {
            if !index.unique || index.primary_key != primary_pass {
                continue;
            }

            let column_mask = index.column_mask(capacity);
            if masks.equal.and(&column_mask) == column_mask {
                return if index.primary_key {
                    AccessRoute::PrimaryKey { index: position }
                } else {
                    AccessRoute::UniqueKey { index: position }
                };
            }
        }
    }

    let mut best: Option<(usize, u32)> = None;
    for (position, index) in table.indexes().iter().enumerate() {
        if !index.ordered {
            continue;
        }

        let score = score_index(&index.columns, masks);
        trace!(index = index.name.as_str(), score, "scored ordered index");

        // Strictly greater keeps the earliest declared index on ties.
        if score > best.map_or(0, |(_, high)| high) {
            best = Some((position, score));
        }
    }

    match best {
        Some((position, score)) if score > 0 => AccessRoute::OrderedScan { index: position },
        _ => AccessRoute::TableScan,
    }
}

/// Score an ordered index against the predicate masks: one point per
/// consecutive leading column the predicate uses, plus one more when that
/// column is pinned by equality (an exact column never widens the range).
/// Scoring stops at the first unused column.
pub(crate) fn score_index(columns: &[usize], masks: &NodeMasks) -> u32 {
    let mut score = 0;

    for column in columns {
        if !masks.used.bit_is_set(*column) {
            break;
        }

        score += 1;
        if masks.equal.bit_is_set(*column) {
            score += 1;
        }
    }

    score
}
