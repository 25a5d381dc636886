//! Application layer services implementing business logic.
//!
//! Services consume the domain traits ([`UrlStore`](crate::domain::repositories::UrlStore),
//! [`SlugGenerator`](crate::domain::slug_generator::SlugGenerator)) and expose a
//! small API for HTTP handlers and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::shortener_service::ShortenerService`] - Short code selection,
//!   persistence and resolution

pub mod services;
