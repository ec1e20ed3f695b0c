use serde::de::DeserializeOwned;
use serde::Serialize;
use uuid::Uuid;

use super::{OrderSpec, Table};
use crate::common::EditorError;

/// A row type stored in one of the backend tables.
pub trait Record: Clone + Serialize + DeserializeOwned + Send + Sync {
    type Draft: Draft;

    const TABLE: Table;

    fn default_order() -> OrderSpec;

    fn id(&self) -> Uuid;

    fn title(&self) -> &str;

    fn to_draft(&self) -> Self::Draft;
}

/// The user-editable fields of a record.
///
/// Serializes to the JSON object sent on insert (with `user_id` added) and
/// on update.
pub trait Draft: std::fmt::Debug + Clone + Default + Serialize + Send + Sync {
    fn validate(&self) -> Result<(), EditorError>;
}

pub(crate) fn require(field: &'static str, value: &str) -> Result<(), EditorError> {
    if value.trim().is_empty() {
        return Err(EditorError::Validation(field));
    }
    Ok(())
}

pub(crate) fn require_http_url(field: &'static str, value: &str) -> Result<(), EditorError> {
    require(field, value)?;
    let value = value.trim();
    if value.starts_with("https://") || value.starts_with("http://") {
        Ok(())
    } else {
        Err(EditorError::InvalidUrl(field))
    }
}
