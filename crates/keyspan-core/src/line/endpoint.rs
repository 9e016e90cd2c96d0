use crate::line::LinePoint;
use serde::Serialize;
use std::cmp::Ordering;

///
/// BoundValue
///
/// The value carried by one endpoint: a defined point of the domain or one
/// of the two infinities that close the line. Ordering places `NegInf` below
/// and `PosInf` above every defined point.
///

#[derive(Clone, Debug, PartialEq, Serialize)]
pub enum BoundValue<P> {
    NegInf,
    Defined(P),
    PosInf,
}

impl<P: LinePoint> BoundValue<P> {
    /// Total order over bound values of one domain.
    #[must_use]
    pub fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::NegInf, Self::NegInf) | (Self::PosInf, Self::PosInf) => Ordering::Equal,
            (Self::NegInf, _) | (_, Self::PosInf) => Ordering::Less,
            (_, Self::NegInf) | (Self::PosInf, _) => Ordering::Greater,
            (Self::Defined(a), Self::Defined(b)) => a.compare(b),
        }
    }

    /// False for infinities and for defined points that behave as one.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        match self {
            Self::NegInf | Self::PosInf => false,
            Self::Defined(point) => point.is_finite(),
        }
    }

    /// Borrow the defined point, if any.
    #[must_use]
    pub const fn as_defined(&self) -> Option<&P> {
        match self {
            Self::Defined(point) => Some(point),
            Self::NegInf | Self::PosInf => None,
        }
    }
}

///
/// Side
///
/// Whether an endpoint opens (`Low`) or closes (`High`) a segment.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Side {
    Low,
    High,
}

impl Side {
    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            Self::Low => Self::High,
            Self::High => Self::Low,
        }
    }
}

///
/// Endpoint
///
/// One transition point of a line: a bound value, an inclusivity flag, and
/// the side it plays in its segment.
///
/// Tie rules for equal values make the sweep deterministic:
/// - two low endpoints: the inclusive one sorts first
/// - two high endpoints: the inclusive one sorts last
/// - low vs high: low sorts first when both are inclusive (touching segments
///   merge), otherwise the high sorts first (segments stay separate)
///

#[derive(Clone, Debug, PartialEq)]
pub struct Endpoint<P> {
    pub(crate) value: BoundValue<P>,
    pub(crate) inclusive: bool,
    pub(crate) side: Side,
}

impl<P: LinePoint> Endpoint<P> {
    /// Construct a low (opening) endpoint. Exclusivity is meaningless on an
    /// infinity, so non-finite endpoints normalize to inclusive.
    #[must_use]
    pub fn low(value: BoundValue<P>, inclusive: bool) -> Self {
        let inclusive = inclusive || !value.is_finite();

        Self {
            value,
            inclusive,
            side: Side::Low,
        }
    }

    /// Construct a high (closing) endpoint. Exclusivity is meaningless on an
    /// infinity, so non-finite endpoints normalize to inclusive.
    #[must_use]
    pub fn high(value: BoundValue<P>, inclusive: bool) -> Self {
        let inclusive = inclusive || !value.is_finite();

        Self {
            value,
            inclusive,
            side: Side::High,
        }
    }

    /// The inclusive lower endpoint of the whole line.
    #[must_use]
    pub const fn neg_inf() -> Self {
        Self {
            value: BoundValue::NegInf,
            inclusive: true,
            side: Side::Low,
        }
    }

    /// The inclusive upper endpoint of the whole line.
    #[must_use]
    pub const fn pos_inf() -> Self {
        Self {
            value: BoundValue::PosInf,
            inclusive: true,
            side: Side::High,
        }
    }

    #[must_use]
    pub const fn value(&self) -> &BoundValue<P> {
        &self.value
    }

    /// Consume the endpoint, keeping its bound value.
    #[must_use]
    pub fn into_value(self) -> BoundValue<P> {
        self.value
    }

    #[must_use]
    pub const fn is_inclusive(&self) -> bool {
        self.inclusive
    }

    #[must_use]
    pub const fn side(&self) -> Side {
        self.side
    }

    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.value.is_finite()
    }

    /// Total order over endpoints; equal values fall back to the tie rules.
    #[must_use]
    pub fn compare(&self, other: &Self) -> Ordering {
        let cmp = self.value.compare(&other.value);
        if cmp != Ordering::Equal {
            return cmp;
        }

        match (self.side, other.side) {
            (Side::Low, Side::Low) => match (self.inclusive, other.inclusive) {
                (true, false) => Ordering::Less,
                (false, true) => Ordering::Greater,
                _ => Ordering::Equal,
            },
            (Side::High, Side::High) => match (self.inclusive, other.inclusive) {
                (true, false) => Ordering::Greater,
                (false, true) => Ordering::Less,
                _ => Ordering::Equal,
            },
            (Side::Low, Side::High) => {
                if self.inclusive && other.inclusive {
                    Ordering::Less
                } else {
                    Ordering::Greater
                }
            }
            (Side::High, Side::Low) => {
                if self.inclusive && other.inclusive {
                    Ordering::Greater
                } else {
                    Ordering::Less
                }
            }
        }
    }

    /// Flip the endpoint between the set and its complement: inclusivity is
    /// negated for finite values and the side role swaps.
    pub(crate) fn complement(&mut self) {
        if self.is_finite() {
            self.inclusive = !self.inclusive;
        }
        self.side = self.side.flipped();
    }
}
