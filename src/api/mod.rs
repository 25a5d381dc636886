//! REST API layer for HTTP request/response handling.
//!
//! # Modules
//!
//! - [`dto`] - Request and response bodies
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Tracing and CORS
//! - [`routes`] - `/api` route table

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
