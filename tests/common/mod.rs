#![allow(dead_code)]

use async_trait::async_trait;
use axum_test::TestServer;
use slugshort::application::services::{ShortenerService, ShortenerSettings};
use slugshort::domain::repositories::UrlStore;
use slugshort::domain::slug_generator::{GeneratorError, SlugGenerator};
use slugshort::infrastructure::store::MemoryStore;
use slugshort::routes::build_router;
use slugshort::state::AppState;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

pub const BASE_URL: &str = "http://localhost:8080";
pub const CORS_ORIGIN: &str = "http://localhost:3000";

/// Generator that replays a fixed answer, optionally after a delay.
pub struct ScriptedGenerator {
    reply: Result<String, String>,
    delay: Option<Duration>,
    calls: AtomicUsize,
}

impl ScriptedGenerator {
    pub fn returning(slug: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: Ok(slug.to_string()),
            delay: None,
            calls: AtomicUsize::new(0),
        })
    }

    pub fn failing(message: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: Err(message.to_string()),
            delay: None,
            calls: AtomicUsize::new(0),
        })
    }

    pub fn slow(slug: &str, delay: Duration) -> Arc<Self> {
        Arc::new(Self {
            reply: Ok(slug.to_string()),
            delay: Some(delay),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SlugGenerator for ScriptedGenerator {
    async fn generate(&self, _url: &str) -> Result<String, GeneratorError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        self.reply.clone().map_err(GeneratorError::Request)
    }

    fn name(&self) -> &'static str {
        "scripted"
    }
}

pub fn test_settings() -> ShortenerSettings {
    ShortenerSettings {
        base_url: BASE_URL.to_string(),
        generator_timeout: Duration::from_millis(200),
        ..ShortenerSettings::default()
    }
}

pub fn create_shortener(
    store: Arc<MemoryStore>,
    generator: Option<Arc<dyn SlugGenerator>>,
) -> ShortenerService {
    ShortenerService::new(store, generator, test_settings())
}

pub fn create_test_state(
    store: Arc<MemoryStore>,
    generator: Option<Arc<dyn SlugGenerator>>,
) -> AppState {
    let shortener = Arc::new(create_shortener(store.clone(), generator));
    let store: Arc<dyn UrlStore> = store;
    AppState::new(shortener, store)
}

pub fn create_test_server(
    store: Arc<MemoryStore>,
    generator: Option<Arc<dyn SlugGenerator>>,
) -> TestServer {
    let app = build_router(create_test_state(store, generator), CORS_ORIGIN).unwrap();
    TestServer::new(app).unwrap()
}
