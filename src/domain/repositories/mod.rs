//! Capability traits implemented by the infrastructure layer.
//!
//! - [`UrlStore`] - Short code → URL persistence with TTL
//!
//! Mock implementations are generated via `mockall` for unit tests.

pub mod url_store;

pub use url_store::{StoreError, StoreResult, UrlStore};

#[cfg(test)]
pub use url_store::MockUrlStore;
