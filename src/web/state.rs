use std::sync::Arc;

use portfolio::backend::{Backend, MemoryBackend};
use portfolio::config::Config;

use crate::web::progress::ProgressBoard;
use crate::web::security::RateLimiter;

#[derive(Clone)]
pub struct AppState {
    pub backend: Arc<dyn Backend>,
    pub config: Arc<Config>,
    pub rate_limiter: Arc<RateLimiter>,
    pub progress: Arc<ProgressBoard>,
    /// Set in preview mode so uploaded objects can be served locally.
    pub preview: Option<Arc<MemoryBackend>>,
}
