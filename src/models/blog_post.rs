use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::record::{require, require_http_url};
use super::{Draft, OrderSpec, Record, Table};
use crate::common::EditorError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlogPost {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub video_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub user_id: Uuid,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BlogPostDraft {
    pub title: String,
    pub content: String,
    pub video_url: Option<String>,
}

impl BlogPostDraft {
    /// Empty strings mean "no video".
    pub fn with_video_url(mut self, url: Option<String>) -> Self {
        self.video_url = url.map(|u| u.trim().to_string()).filter(|u| !u.is_empty());
        self
    }
}

impl Draft for BlogPostDraft {
    fn validate(&self) -> Result<(), EditorError> {
        require("title", &self.title)?;
        require("content", &self.content)?;
        if let Some(url) = &self.video_url {
            require_http_url("video_url", url)?;
        }
        Ok(())
    }
}

impl Record for BlogPost {
    type Draft = BlogPostDraft;

    const TABLE: Table = Table::BlogPosts;

    fn default_order() -> OrderSpec {
        OrderSpec::desc("created_at")
    }

    fn id(&self) -> Uuid {
        self.id
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn to_draft(&self) -> BlogPostDraft {
        BlogPostDraft {
            title: self.title.clone(),
            content: self.content.clone(),
            video_url: self.video_url.clone(),
        }
    }
}

impl BlogPost {
    pub fn has_video(&self) -> bool {
        self.video_url.as_deref().is_some_and(|u| !u.is_empty())
    }

    pub fn display_date(&self) -> String {
        self.created_at.format("%-m/%-d/%Y").to_string()
    }
}
