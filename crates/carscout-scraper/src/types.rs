//! Response types for the inventory search endpoint.
//!
//! Only the envelope is typed. Each listing stays an untyped JSON object
//! because the listing fields are not stable between releases of the remote
//! service; the flattener turns whatever arrives into columns.
//!
//! Observed envelope:
//!
//! ```json
//! { "data": { "listings": [ { "make": "Toyota", "dealer": { "city": "..." } } ], ... }, ... }
//! ```
//!
//! Sibling keys next to `listings` (result counts, facets) are ignored.

use serde::Deserialize;
use serde_json::{Map, Value};

/// A single listing object as returned by the endpoint.
pub type RawListing = Map<String, Value>;

/// Top-level response from the inventory search endpoint.
#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    pub data: SearchData,
}

#[derive(Debug, Deserialize)]
pub struct SearchData {
    /// Listings for the requested page. An empty array is a valid page.
    pub listings: Vec<RawListing>,
}
