//! Domain layer: entities, slug rules, and the capability traits the
//! shortening policy depends on.
//!
//! # Modules
//!
//! - [`entities`] - [`entities::UrlMapping`], [`entities::ShortenResult`], [`entities::SlugType`]
//! - [`repositories`] - [`repositories::UrlStore`] storage capability
//! - [`slug_generator`] - [`slug_generator::SlugGenerator`] capability
//! - [`slug`] - Cleaning of raw generator output
//!
//! The domain layer has no dependency on HTTP, Redis, or the generator client.

pub mod entities;
pub mod repositories;
pub mod slug;
pub mod slug_generator;
