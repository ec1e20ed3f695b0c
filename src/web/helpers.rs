use actix_web::cookie::{Cookie, SameSite};
use actix_web::{HttpRequest, HttpResponse};
use askama::Template;
use chrono::Utc;

use portfolio::config::Config;
use portfolio::models::{Session, Table};
use portfolio::services::Notice;

use crate::web::state::AppState;
use crate::web::templates::{FooterView, NavState, NotFoundTemplate};

pub const SESSION_COOKIE: &str = "pf_session";
const SESSION_COOKIE_DAYS: i64 = 7;

pub fn is_htmx(req: &HttpRequest) -> bool {
    req.headers()
        .get("HX-Request")
        .and_then(|v| v.to_str().ok())
        .is_some_and(|s| s.eq_ignore_ascii_case("true"))
}

pub fn session_token(req: &HttpRequest) -> Option<String> {
    req.cookie(SESSION_COOKIE)
        .map(|c| c.value().trim().to_string())
        .filter(|s| !s.is_empty())
}

/// The session behind the request's cookie, if the backend still knows it.
pub async fn current_session(state: &AppState, req: &HttpRequest) -> Option<Session> {
    let token = session_token(req)?;

    match state.backend.get_session(&token).await {
        Ok(session) => session,
        Err(e) => {
            log::error!("Session lookup failed: {}", e);
            None
        }
    }
}

pub async fn require_session(state: &AppState, req: &HttpRequest) -> Result<Session, HttpResponse> {
    match current_session(state, req).await {
        Some(session) => Ok(session),
        None => Err(redirect(req, "/login")),
    }
}

/// 303 to `location`, or `HX-Redirect` for htmx requests.
pub fn redirect(req: &HttpRequest, location: &str) -> HttpResponse {
    if is_htmx(req) {
        HttpResponse::Ok()
            .insert_header(("HX-Redirect", location.to_string()))
            .finish()
    } else {
        HttpResponse::SeeOther()
            .insert_header(("Location", location.to_string()))
            .finish()
    }
}

pub fn session_cookie(session: &Session, secure: bool) -> Cookie<'static> {
    let max_age = session
        .expires_at
        .map(|at| (at - Utc::now()).num_seconds().max(0))
        .map(actix_web::cookie::time::Duration::seconds)
        .unwrap_or_else(|| actix_web::cookie::time::Duration::days(SESSION_COOKIE_DAYS));

    Cookie::build(SESSION_COOKIE, session.access_token.clone())
        .path("/")
        .http_only(true)
        .secure(secure)
        .same_site(SameSite::Lax)
        .max_age(max_age)
        .finish()
}

pub fn removal_cookie(secure: bool) -> Cookie<'static> {
    let mut cookie = Cookie::build(SESSION_COOKIE, "")
        .path("/")
        .http_only(true)
        .secure(secure)
        .same_site(SameSite::Lax)
        .finish();
    cookie.make_removal();
    cookie
}

pub fn render<T: Template>(t: T) -> HttpResponse {
    match t.render() {
        Ok(body) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(body),
        Err(e) => HttpResponse::InternalServerError()
            .content_type("text/plain; charset=utf-8")
            .body(format!("Template error: {e}")),
    }
}

pub fn not_found(config: &Config) -> HttpResponse {
    let page = NotFoundTemplate {
        nav: NavState::new(config, "/", None),
        footer: FooterView::new(config),
    };

    match page.render() {
        Ok(body) => HttpResponse::NotFound()
            .content_type("text/html; charset=utf-8")
            .body(body),
        Err(_) => HttpResponse::NotFound().body("Not found"),
    }
}

/// URL segment of each admin tab.
pub fn tab_slug(table: Table) -> &'static str {
    match table {
        Table::BlogPosts => "posts",
        Table::Projects => "projects",
        Table::AboutSections => "about",
    }
}

pub fn tab_table(slug: &str) -> Option<Table> {
    match slug {
        "posts" => Some(Table::BlogPosts),
        "projects" => Some(Table::Projects),
        "about" => Some(Table::AboutSections),
        _ => None,
    }
}

pub fn tab_location(table: Table, notices: &[Notice]) -> String {
    let base = format!("/admin/{}", tab_slug(table));
    if notices.is_empty() {
        base
    } else {
        format!("{base}?notice={}", Notice::join(notices))
    }
}
