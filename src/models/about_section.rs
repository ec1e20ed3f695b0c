use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::record::require;
use super::{Draft, Icon, OrderSpec, Record, Table};
use crate::common::EditorError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AboutSection {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub icon: String,
    pub user_id: Uuid,
}

impl AboutSection {
    pub fn resolved_icon(&self) -> Icon {
        Icon::from_name(&self.icon)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AboutSectionDraft {
    pub title: String,
    pub description: String,
    pub icon: String,
}

impl Draft for AboutSectionDraft {
    fn validate(&self) -> Result<(), EditorError> {
        require("title", &self.title)?;
        require("description", &self.description)?;
        require("icon", &self.icon)
    }
}

impl Record for AboutSection {
    type Draft = AboutSectionDraft;

    const TABLE: Table = Table::AboutSections;

    fn default_order() -> OrderSpec {
        OrderSpec::asc("title")
    }

    fn id(&self) -> Uuid {
        self.id
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn to_draft(&self) -> AboutSectionDraft {
        AboutSectionDraft {
            title: self.title.clone(),
            description: self.description.clone(),
            icon: self.icon.clone(),
        }
    }
}
