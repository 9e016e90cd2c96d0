use crate::{
    line::{BoundValue, Endpoint, LinePoint, Side},
    value::Value,
};
use std::cmp::Ordering;

///
/// Segment
///
/// One contiguous range of a line: an ordered low/high endpoint pair,
/// possibly unbounded on either side, each end open or closed.
///

#[derive(Clone, Debug, PartialEq)]
pub struct Segment<P> {
    pub(crate) low: Endpoint<P>,
    pub(crate) high: Endpoint<P>,
}

impl<P: LinePoint> Segment<P> {
    /// Build a segment from two endpoints, ordering them by value; argument
    /// order does not matter.
    #[must_use]
    pub fn new(a: Endpoint<P>, b: Endpoint<P>) -> Self {
        let (mut low, mut high) = match a.value.compare(&b.value) {
            Ordering::Greater => (b, a),
            Ordering::Less | Ordering::Equal => (a, b),
        };
        low.side = Side::Low;
        high.side = Side::High;

        Self { low, high }
    }

    /// Build a segment from endpoints already carrying their final sides.
    pub(crate) fn from_endpoints(low: Endpoint<P>, high: Endpoint<P>) -> Self {
        debug_assert!(low.side == Side::Low && high.side == Side::High);

        Self { low, high }
    }

    /// The segment spanning the whole line.
    #[must_use]
    pub const fn unbounded() -> Self {
        Self {
            low: Endpoint::neg_inf(),
            high: Endpoint::pos_inf(),
        }
    }

    #[must_use]
    pub const fn low(&self) -> &Endpoint<P> {
        &self.low
    }

    #[must_use]
    pub const fn high(&self) -> &Endpoint<P> {
        &self.high
    }

    /// Consume the segment into its endpoint pair.
    #[must_use]
    pub fn into_endpoints(self) -> (Endpoint<P>, Endpoint<P>) {
        (self.low, self.high)
    }

    /// True if no point satisfies both endpoints, e.g. `(v, v]` or `[v, v)`,
    /// or a zero-width segment pinned at one infinity.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match (self.low.value(), self.high.value()) {
            (BoundValue::NegInf, BoundValue::NegInf)
            | (BoundValue::PosInf, BoundValue::PosInf) => true,
            _ => self.low.compare(&self.high) == Ordering::Greater,
        }
    }
}

impl Segment<Value> {
    /// Inclusive range between two values; the endpoints are ordered by
    /// comparing the values, not by argument order.
    #[must_use]
    pub fn between(a: Value, b: Value) -> Self {
        Self::new(
            Endpoint::low(BoundValue::Defined(a), true),
            Endpoint::high(BoundValue::Defined(b), true),
        )
    }

    /// Range satisfying an `IS NULL` / `IS NOT NULL` test. Nulls sort low,
    /// so `IS NOT NULL` is everything strictly above the null point.
    #[must_use]
    pub fn null_test(is_null: bool) -> Self {
        if is_null {
            Self::from_endpoints(
                Endpoint::low(BoundValue::Defined(Value::Null), true),
                Endpoint::high(BoundValue::Defined(Value::Null), true),
            )
        } else {
            Self::from_endpoints(
                Endpoint::low(BoundValue::Defined(Value::Null), false),
                Endpoint::pos_inf(),
            )
        }
    }
}
