//! Shared response envelope types for API handlers.
//!
//! Read responses use a `{ "data": ... }` envelope. Successful mutations use
//! [`MutationResponse`], which carries the affected entity alongside the
//! full refreshed collection -- every successful write triggers exactly one
//! re-list, and the response is how that contract is delivered.

use serde::Serialize;

/// Standard `{ "data": T }` response envelope for reads.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}

/// Response envelope for successful create/update/toggle mutations.
///
/// `records` is the result of the single full re-list performed after the
/// write, so the caller always sees store-assigned fields (ids, timestamps)
/// without issuing a second request. No incremental/optimistic merge exists.
#[derive(Debug, Serialize)]
pub struct MutationResponse<T: Serialize> {
    /// The entity the mutation affected, as returned by the store.
    pub data: T,
    /// The full refreshed collection.
    pub records: Vec<T>,
}
