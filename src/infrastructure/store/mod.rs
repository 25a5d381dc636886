//! [`UrlStore`](crate::domain::repositories::UrlStore) implementations.
//!
//! - [`RedisStore`] - Production Redis-backed store
//! - [`MemoryStore`] - In-process store for tests and development

mod memory_store;
mod redis_store;

pub use memory_store::MemoryStore;
pub use redis_store::RedisStore;
