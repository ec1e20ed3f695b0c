use actix_web::{get, web, HttpResponse, Responder};
use uuid::Uuid;

use portfolio::config::Config;
use portfolio::models::Icon;
use portfolio::services::landing::{find_post, load_landing, PostCard};
use portfolio::services::{share_action, ShareAction, SharePlatform};

use crate::web::forms::LandingQuery;
use crate::web::helpers::{not_found, render};
use crate::web::state::AppState;
use crate::web::templates::{
    AboutCardView, FooterView, HeroView, LandingTemplate, NativeShareTemplate, NavState, PostView,
    ShareLinkView,
};

/// Landing page URL pointing at one post, the link shared for it.
fn post_page_url(config: &Config, id: Uuid) -> String {
    format!("{}/#post-{}", config.site_url, id)
}

fn share_links(id: Uuid) -> Vec<ShareLinkView> {
    SharePlatform::LINKED
        .iter()
        .chain(std::iter::once(&SharePlatform::Native))
        .map(|platform| ShareLinkView {
            label: match platform {
                SharePlatform::Native => "More options".to_string(),
                p => format!("Share on {}", p.display_name()),
            },
            href: format!("/share/{}/{}", id, platform),
        })
        .collect()
}

fn post_view(card: PostCard, open_share: Option<Uuid>) -> PostView {
    let share_open = open_share == Some(card.id);
    let share_toggle_href = if share_open {
        format!("/#post-{}", card.id)
    } else {
        format!("/?share={}#post-{}", card.id, card.id)
    };

    PostView {
        share_links: share_links(card.id),
        share_open,
        share_toggle_href,
        card,
    }
}

#[get("/")]
pub async fn public_index(
    state: web::Data<AppState>,
    query: web::Query<LandingQuery>,
) -> impl Responder {
    let content = load_landing(state.backend.as_ref()).await;

    let posts = content
        .posts
        .into_iter()
        .map(|card| post_view(card, query.share))
        .collect();

    render(LandingTemplate {
        nav: NavState::new(&state.config, "/", query.menu.as_deref()),
        footer: FooterView::new(&state.config),
        hero: HeroView::new(&state.config),
        about: content.about.iter().map(AboutCardView::from).collect(),
        projects: content.projects,
        posts,
        github_icon: Icon::Github.svg(),
    })
}

#[get("/share/{id}/{platform}")]
pub async fn share_post(
    state: web::Data<AppState>,
    path: web::Path<(Uuid, String)>,
) -> impl Responder {
    let (id, platform) = path.into_inner();

    let post = match find_post(state.backend.as_ref(), id).await {
        Some(post) => post,
        None => return not_found(&state.config),
    };

    let page_url = post_page_url(&state.config, id);
    match share_action(SharePlatform::parse(&platform), &post.title, &page_url) {
        ShareAction::Open(url) => HttpResponse::SeeOther()
            .insert_header(("Location", url))
            .finish(),
        ShareAction::Native(share) => render(NativeShareTemplate {
            nav: NavState::new(&state.config, "/", None),
            footer: FooterView::new(&state.config),
            links: share_links(id)
                .into_iter()
                .take(SharePlatform::LINKED.len())
                .collect(),
            share,
        }),
    }
}

/// Serves objects uploaded to the preview backend at the URLs it hands out.
#[get("/storage/v1/object/public/{bucket}/{path:.*}")]
pub async fn preview_object(
    state: web::Data<AppState>,
    path: web::Path<(String, String)>,
) -> impl Responder {
    let (bucket, object) = path.into_inner();

    let stored = state
        .preview
        .as_ref()
        .and_then(|memory| memory.object_with_type(&bucket, &object));

    match stored {
        Some((bytes, content_type)) => HttpResponse::Ok()
            .content_type(content_type)
            .body(bytes),
        None => not_found(&state.config),
    }
}

/// Default service for unmatched routes.
pub async fn fallback(state: web::Data<AppState>) -> HttpResponse {
    not_found(&state.config)
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(public_index)
        .service(share_post)
        .service(preview_object);
}
