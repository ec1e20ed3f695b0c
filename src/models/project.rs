use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::record::{require, require_http_url};
use super::{Draft, OrderSpec, Record, Table};
use crate::common::EditorError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub link: String,
    pub image: String,
    pub user_id: Uuid,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectDraft {
    pub title: String,
    pub description: String,
    pub link: String,
    pub image: String,
}

impl Draft for ProjectDraft {
    fn validate(&self) -> Result<(), EditorError> {
        require("title", &self.title)?;
        require("description", &self.description)?;
        require_http_url("link", &self.link)?;
        require_http_url("image", &self.image)?;
        Ok(())
    }
}

impl Record for Project {
    type Draft = ProjectDraft;

    const TABLE: Table = Table::Projects;

    fn default_order() -> OrderSpec {
        OrderSpec::asc("title")
    }

    fn id(&self) -> Uuid {
        self.id
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn to_draft(&self) -> ProjectDraft {
        ProjectDraft {
            title: self.title.clone(),
            description: self.description.clone(),
            link: self.link.clone(),
            image: self.image.clone(),
        }
    }
}
