mod web;

use std::sync::Arc;

use actix_files::Files;
use actix_web::web::Data;
use actix_web::{middleware::Logger, App, HttpServer};

use portfolio::backend::{Backend, MemoryBackend, SupabaseBackend};
use portfolio::config::Config;

use web::middleware::SecurityHeaders;
use web::progress::ProgressBoard;
use web::security::RateLimiter;

fn backend_for(config: &Config) -> (Arc<dyn Backend>, Option<Arc<MemoryBackend>>) {
    match &config.backend {
        Some(backend) => {
            log::info!("Using hosted backend at {}", backend.url);
            (
                Arc::new(SupabaseBackend::new(&backend.url, &backend.anon_key)),
                None,
            )
        }
        None => {
            log::warn!(
                "SUPABASE_URL not set; running with the in-memory preview backend. \
                 Sign in as {} and note that nothing is persisted.",
                config.preview_admin_email
            );
            let memory = MemoryBackend::new().with_public_base(&config.site_url);
            let admin =
                memory.register_user(&config.preview_admin_email, &config.preview_admin_password);
            memory.seed_showcase(admin.id);
            let memory = Arc::new(memory);
            (memory.clone(), Some(memory))
        }
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = Config::load()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string()))?;
    let config = Arc::new(config);
    let bind_addr = config.bind_addr.clone();
    let csp = config.content_security_policy();

    let (backend, preview) = backend_for(&config);
    let state = Data::new(web::AppState {
        backend,
        config: config.clone(),
        rate_limiter: Arc::new(RateLimiter::new()),
        progress: Arc::new(ProgressBoard::new()),
        preview,
    });

    log::info!("Listening on {}", bind_addr);

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(SecurityHeaders::new(&csp))
            .wrap(Logger::default())
            .configure(web::handlers::configure)
            .service(Files::new("/static", "./static").prefer_utf8(true))
            .default_service(actix_web::web::to(web::handlers::public::fallback))
    })
    .bind(bind_addr)?
    .run()
    .await
}
