pub mod client;
pub mod models;

use crate::error::ApiError;

/// Outcome of a single-entity lookup.
///
/// The upstream API makes "no such page" and "request failed" look identical
/// to a naive caller (both produce nothing). `Lookup` keeps them apart for
/// callers that care; [`Lookup::found`] collapses the distinction for the
/// build-time callers that treat both as absence.
#[derive(Debug)]
pub enum Lookup<T> {
    /// The request succeeded and matched exactly one entity.
    Found(T),
    /// The request succeeded but matched nothing.
    Missing,
    /// The request itself failed.
    Failed(ApiError),
}

impl<T> Lookup<T> {
    /// Collapse to an `Option`, discarding the missing/failed distinction.
    pub fn found(self) -> Option<T> {
        match self {
            Lookup::Found(value) => Some(value),
            _ => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Lookup::Found(_))
    }

    pub fn as_found(&self) -> Option<&T> {
        match self {
            Lookup::Found(value) => Some(value),
            _ => None,
        }
    }
}
