use serde::Deserialize;
use uuid::Uuid;

use portfolio::models::{AboutSectionDraft, ProjectDraft};
use portfolio::services::editor::delete_confirmed;
use portfolio::services::upload::VideoFile;

#[derive(Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

#[derive(Deserialize)]
pub struct AuthQuery {
    pub error: Option<String>,
    pub notice: Option<String>,
}

#[derive(Deserialize)]
pub struct LandingQuery {
    pub menu: Option<String>,
    pub share: Option<Uuid>,
}

#[derive(Deserialize)]
pub struct AdminQuery {
    pub edit: Option<Uuid>,
    pub notice: Option<String>,
    pub menu: Option<String>,
}

#[derive(Deserialize)]
pub struct DeleteForm {
    pub confirm: Option<String>,
}

impl DeleteForm {
    pub fn confirmed(&self) -> bool {
        delete_confirmed(self.confirm.as_deref())
    }
}

/// Hidden `id` inputs arrive as empty strings in create mode.
fn parse_id(id: &Option<String>) -> Option<Uuid> {
    id.as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .and_then(|s| Uuid::parse_str(s).ok())
}

#[derive(Deserialize)]
pub struct ProjectForm {
    pub id: Option<String>,
    pub title: String,
    pub description: String,
    pub link: String,
    pub image: String,
}

impl ProjectForm {
    pub fn id(&self) -> Option<Uuid> {
        parse_id(&self.id)
    }

    pub fn draft(&self) -> ProjectDraft {
        ProjectDraft {
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            link: self.link.trim().to_string(),
            image: self.image.trim().to_string(),
        }
    }
}

#[derive(Deserialize)]
pub struct AboutForm {
    pub id: Option<String>,
    pub title: String,
    pub description: String,
    pub icon: String,
}

impl AboutForm {
    pub fn id(&self) -> Option<Uuid> {
        parse_id(&self.id)
    }

    pub fn draft(&self) -> AboutSectionDraft {
        AboutSectionDraft {
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            icon: self.icon.trim().to_string(),
        }
    }
}

/// The blog post form, read from multipart because of the optional video.
#[derive(Default)]
pub struct PostForm {
    pub id: Option<String>,
    pub title: String,
    pub content: String,
    pub video_url: String,
    pub upload_id: Option<String>,
    pub video: Option<VideoFile>,
}

impl PostForm {
    pub fn id(&self) -> Option<Uuid> {
        parse_id(&self.id)
    }

    pub fn upload_id(&self) -> Option<Uuid> {
        parse_id(&self.upload_id)
    }
}
