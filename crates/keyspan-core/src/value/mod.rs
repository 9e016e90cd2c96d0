mod compare;


use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

///
/// Value
///
/// Scalar domain the planner compares and emits in key tuples.
///
/// `Null` is an ordinary point of the domain and sorts below every defined
/// value (nulls-sort-low). Cross-variant comparison is rank-driven so that
/// the order is total and deterministic; `Int` and `Uint` share one numeric
/// rank and compare by widening.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Uint(u64),
    Text(String),
}

impl Value {
    /// Returns true if the value is `Null`.
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Stable cross-variant rank used by the canonical order.
    ///
    /// Rank order is part of deterministic planner behavior and must remain
    /// fixed: Null < Bool < numeric < Text.
    #[must_use]
    pub(crate) const fn canonical_rank(&self) -> u8 {
        match self {
            Self::Null => 0,
            Self::Bool(_) => 1,
            Self::Int(_) | Self::Uint(_) => 2,
            Self::Text(_) => 3,
        }
    }

    /// Total canonical comparator used by every planning surface.
    #[must_use]
    pub fn canonical_cmp(left: &Self, right: &Self) -> Ordering {
        compare::canonical_cmp(left, right)
    }
}

macro_rules! impl_from_for {
    ( $( $type:ty => $variant:ident ),* $(,)? ) => {
        $(
            impl From<$type> for Value {
                fn from(v: $type) -> Self {
                    Self::$variant(v.into())
                }
            }
        )*
    };
}

impl_from_for! {
    bool   => Bool,
    i8     => Int,
    i16    => Int,
    i32    => Int,
    i64    => Int,
    u8     => Uint,
    u16    => Uint,
    u32    => Uint,
    u64    => Uint,
    &str   => Text,
    String => Text,
}
