//! Infrastructure layer for external integrations.
//!
//! Implements the capability traits defined by the domain layer.
//!
//! # Modules
//!
//! - [`store`] - Mapping storage (Redis and in-memory)
//! - [`generator`] - Slug generation via a chat completions API

pub mod generator;
pub mod store;
