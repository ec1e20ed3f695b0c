use actix_web::{get, post, web, HttpRequest, Responder};
use std::time::Duration;

use portfolio::common::BackendError;

use crate::web::forms::{AuthQuery, LoginForm};
use crate::web::helpers::{
    current_session, redirect, removal_cookie, render, session_cookie, session_token,
};
use crate::web::security::validate_email;
use crate::web::state::AppState;
use crate::web::templates::{notice_views, FooterView, LoginTemplate, NavState};

#[get("/login")]
pub async fn login_form(
    state: web::Data<AppState>,
    req: HttpRequest,
    query: web::Query<AuthQuery>,
) -> impl Responder {
    if current_session(&state, &req).await.is_some() {
        return redirect(&req, "/admin");
    }

    let error = query.error.as_deref().map(|code| match code {
        "missing" => "Email and password are required".to_string(),
        "invalid" => "Invalid email or password".to_string(),
        "rate_limit" => "Too many login attempts. Please try again later.".to_string(),
        _ => "An internal error occurred. Please try again.".to_string(),
    });

    render(LoginTemplate {
        nav: NavState::new(&state.config, "/login", None),
        footer: FooterView::new(&state.config),
        notices: notice_views(query.notice.as_deref()),
        error,
        preview: state.config.is_preview(),
    })
}

#[post("/login")]
pub async fn login_submit(
    state: web::Data<AppState>,
    req: HttpRequest,
    form: web::Form<LoginForm>,
) -> impl Responder {
    let client_ip = req
        .connection_info()
        .realip_remote_addr()
        .unwrap_or("unknown")
        .to_string();
    let limit_key = format!("login:{}", client_ip);

    if !state.rate_limiter.check_rate_limit(
        &limit_key,
        5,                        // 5 attempts
        Duration::from_secs(300), // per 5 minutes
    ) {
        return redirect(&req, "/login?error=rate_limit");
    }

    let email = form.email.trim().to_string();
    let password = form.password.to_string();

    if !validate_email(&email) || password.is_empty() {
        return redirect(&req, "/login?error=missing");
    }

    let session = match state.backend.sign_in(&email, &password).await {
        Ok(session) => session,
        Err(BackendError::InvalidCredentials) => {
            log::info!("Rejected login for {}", email);
            return redirect(&req, "/login?error=invalid");
        }
        Err(e) => {
            log::error!("Sign-in failed: {}", e);
            return redirect(&req, "/login?error=internal");
        }
    };

    state.rate_limiter.reset(&limit_key);
    log::info!("User {} signed in", session.user.id);

    let mut resp = redirect(&req, "/admin");
    if let Err(e) = resp.add_cookie(&session_cookie(&session, state.config.cookie_secure)) {
        log::error!("Failed to set session cookie: {}", e);
    }
    resp
}

#[post("/logout")]
pub async fn logout(state: web::Data<AppState>, req: HttpRequest) -> impl Responder {
    if let Some(token) = session_token(&req) {
        if let Err(e) = state.backend.sign_out(&token).await {
            log::warn!("Sign-out failed, clearing cookie anyway: {}", e);
        }
    }

    let mut resp = redirect(&req, "/login");
    if let Err(e) = resp.add_cookie(&removal_cookie(state.config.cookie_secure)) {
        log::error!("Failed to clear session cookie: {}", e);
    }
    resp
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(login_form)
        .service(login_submit)
        .service(logout);
}
