use crate::value::Value;
use std::cmp::Ordering;

/// Total canonical comparator used by planner surfaces.
///
/// Ordering rules:
/// 1. Canonical variant rank
/// 2. Variant-specific comparison for same-ranked values
///
/// Mixed-variant comparisons inside one rank widen to a common numeric type
/// and must remain deterministic.
#[must_use]
pub fn canonical_cmp(left: &Value, right: &Value) -> Ordering {
    let rank = left.canonical_rank().cmp(&right.canonical_rank());
    if rank != Ordering::Equal {
        return rank;
    }

    canonical_cmp_same_rank(left, right)
}

fn canonical_cmp_same_rank(left: &Value, right: &Value) -> Ordering {
    match (left, right) {
        (Value::Null, Value::Null) => Ordering::Equal,
        (Value::Bool(a), Value::Bool(b)) => a.cmp(b),
        (Value::Text(a), Value::Text(b)) => a.cmp(b),

        // Numeric rank: Int and Uint compare by widening.
        (Value::Int(a), Value::Int(b)) => a.cmp(b),
        (Value::Uint(a), Value::Uint(b)) => a.cmp(b),
        (Value::Int(a), Value::Uint(b)) => i128::from(*a).cmp(&i128::from(*b)),
        (Value::Uint(a), Value::Int(b)) => i128::from(*a).cmp(&i128::from(*b)),

        // Same-rank pairs are exhaustive above; ranks differ otherwise.
        _ => unreachable!("cross-rank pair reached same-rank comparison"),
    }
}
