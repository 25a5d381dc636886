//! # slugshort
//!
//! A URL shortening service built with Axum and Redis.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Mapping entities, slug rules, store and
//!   generator traits
//! - **Application Layer** ([`application`]) - The shortening policy
//! - **Infrastructure Layer** ([`infrastructure`]) - Redis and in-memory
//!   stores, OpenAI-compatible slug generator
//! - **API Layer** ([`api`]) - REST handlers, DTOs, and middleware
//!
//! ## Short Codes
//!
//! Every URL gets either a readable slug suggested by a language model
//! (`github.com` → `ghub`) or, when the generator is disabled, fails, or
//! proposes a slug already in use, a deterministic code derived from the
//! URL's SHA-1 digest (`https://example.com` → `4KjP4hmE2uW`). See
//! [`application::services::ShortenerService`].
//!
//! ## Quick Start
//!
//! ```bash
//! export REDIS_URL="redis://localhost:6379/0"
//! export OPENAI_API_KEY="sk-..."  # Optional
//!
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{ShortenerService, ShortenerSettings};
    pub use crate::domain::entities::{ShortenResult, SlugType, UrlMapping};
    pub use crate::domain::repositories::{StoreError, UrlStore};
    pub use crate::domain::slug_generator::{GeneratorError, SlugGenerator};
    pub use crate::error::AppError;
    pub use crate::infrastructure::store::{MemoryStore, RedisStore};
    pub use crate::state::AppState;
}
