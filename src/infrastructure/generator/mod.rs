//! [`SlugGenerator`](crate::domain::slug_generator::SlugGenerator) implementations.

mod openai;

pub use openai::{OpenAiSettings, OpenAiSlugGenerator};
