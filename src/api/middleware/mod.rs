//! HTTP middleware for request processing.
//!
//! Provides request tracing and the CORS policy for the browser frontend.

pub mod cors;
pub mod tracing;
