#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use portfolio::backend::{Backend, MemoryBackend};
use portfolio::config::Config;
use portfolio::models::*;
use portfolio::services::upload::PercentFn;

pub const ADMIN_EMAIL: &str = "admin@test.com";
pub const ADMIN_PASSWORD: &str = "password0";

pub struct Fixture {
    pub backend: MemoryBackend,
    pub admin: AuthUser,
}

impl Fixture {
    pub fn new() -> Self {
        let backend = MemoryBackend::new();
        let admin = backend.register_user(ADMIN_EMAIL, ADMIN_PASSWORD);
        Self { backend, admin }
    }

    pub fn seeded() -> Self {
        let fixture = Self::new();
        fixture.backend.seed_showcase(fixture.admin.id);
        fixture
    }

    pub async fn sign_in(&self) -> Session {
        self.backend
            .sign_in(ADMIN_EMAIL, ADMIN_PASSWORD)
            .await
            .expect("Seed admin should be able to sign in")
    }
}

pub fn post_draft(title: &str, content: &str) -> BlogPostDraft {
    BlogPostDraft {
        title: title.to_string(),
        content: content.to_string(),
        video_url: None,
    }
}

pub fn project_draft(title: &str) -> ProjectDraft {
    ProjectDraft {
        title: title.to_string(),
        description: "A project used in tests".to_string(),
        link: "https://github.com/example/project".to_string(),
        image: "https://images.unsplash.com/photo-1?w=800".to_string(),
    }
}

pub fn about_draft(title: &str, icon: &str) -> AboutSectionDraft {
    AboutSectionDraft {
        title: title.to_string(),
        description: "Something about me".to_string(),
        icon: icon.to_string(),
    }
}

/// A percent sink that records every value it is handed.
pub fn recording_sink() -> (PercentFn, Arc<Mutex<Vec<u8>>>) {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink_seen = seen.clone();
    let sink: PercentFn = Arc::new(move |p| sink_seen.lock().unwrap().push(p));
    (sink, seen)
}

pub fn config_from(pairs: &[(&str, &str)]) -> Config {
    let pairs: Vec<(String, String)> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

    Config::from_lookup(|key| {
        pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.clone())
    })
    .expect("Test config should load")
}
