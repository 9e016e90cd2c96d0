use crate::{
    line::{BoundValue, Endpoint, IndexValue, Segment},
    value::Value,
};
use serde::Serialize;

///
/// IndexBoundEndpoint
///
/// One end of a composite key range: the key parts over the index's leading
/// columns and whether the boundary key itself is included. An empty key
/// leaves that side of the scan unbounded.
///

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct IndexBoundEndpoint {
    pub key: Vec<BoundValue<Value>>,
    pub inclusive: bool,
}

impl IndexBoundEndpoint {
    fn from_endpoint(endpoint: Endpoint<IndexValue>) -> Self {
        let inclusive = endpoint.is_inclusive();
        let key = match endpoint.into_value() {
            BoundValue::Defined(tuple) => tuple.into_parts(),
            BoundValue::NegInf | BoundValue::PosInf => Vec::new(),
        };

        Self { key, inclusive }
    }
}

///
/// IndexBound
///
/// One composite key range of the chosen index, handed to the external scan
/// executor.
///

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct IndexBound {
    pub low: IndexBoundEndpoint,
    pub high: IndexBoundEndpoint,
}

impl IndexBound {
    pub(crate) fn from_segment(segment: Segment<IndexValue>) -> Self {
        let (low, high) = segment.into_endpoints();

        Self {
            low: IndexBoundEndpoint::from_endpoint(low),
            high: IndexBoundEndpoint::from_endpoint(high),
        }
    }

    /// The range covering the whole key space.
    #[must_use]
    pub const fn unbounded() -> Self {
        Self {
            low: IndexBoundEndpoint {
                key: Vec::new(),
                inclusive: true,
            },
            high: IndexBoundEndpoint {
                key: Vec::new(),
                inclusive: true,
            },
        }
    }
}
