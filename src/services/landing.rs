use uuid::Uuid;

use super::markdown::render_markdown;
use crate::backend::records::list_records;
use crate::backend::Backend;
use crate::log_err;
use crate::models::{AboutSection, BlogPost, Project, Record};

/// A blog post ready for the public feed.
#[derive(Debug, Clone)]
pub struct PostCard {
    pub id: Uuid,
    pub title: String,
    pub body_html: String,
    pub video_url: Option<String>,
    pub date: String,
}

impl From<BlogPost> for PostCard {
    fn from(post: BlogPost) -> Self {
        Self {
            id: post.id,
            body_html: render_markdown(&post.content),
            date: post.display_date(),
            video_url: post.video_url.filter(|u| !u.is_empty()),
            title: post.title,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct LandingContent {
    pub about: Vec<AboutSection>,
    pub projects: Vec<Project>,
    pub posts: Vec<PostCard>,
}

async fn load_or_empty<R: Record>(backend: &dyn Backend) -> Vec<R> {
    match list_records::<R>(backend, None).await {
        Ok(rows) => rows,
        Err(e) => {
            log_err!(format!("list {}", R::TABLE), &e.to_string());
            Vec::new()
        }
    }
}

/// Fetches the three public collections in turn. A failed list renders as
/// an empty section.
pub async fn load_landing(backend: &dyn Backend) -> LandingContent {
    let about = load_or_empty::<AboutSection>(backend).await;
    let projects = load_or_empty::<Project>(backend).await;
    let posts = load_or_empty::<BlogPost>(backend)
        .await
        .into_iter()
        .map(PostCard::from)
        .collect();

    LandingContent {
        about,
        projects,
        posts,
    }
}

pub async fn find_post(backend: &dyn Backend, id: Uuid) -> Option<BlogPost> {
    load_or_empty::<BlogPost>(backend)
        .await
        .into_iter()
        .find(|p| p.id == id)
}
