use crate::{plan::BindError, predicate::PredicateError};
use thiserror::Error as ThisError;

///
/// Error
///
/// Top-level error surface for callers that drive predicate construction
/// and plan execution through one result type. Stage-specific errors stay
/// available on their own surfaces.
///

#[derive(Debug, ThisError)]
pub enum Error {
    #[error(transparent)]
    Predicate(#[from] PredicateError),

    #[error(transparent)]
    Bind(#[from] BindError),
}
