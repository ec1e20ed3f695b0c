use serde_json::Value;
use uuid::Uuid;

use super::Backend;
use crate::common::BackendError;
use crate::models::Record;

pub async fn list_records<R: Record>(
    backend: &dyn Backend,
    token: Option<&str>,
) -> Result<Vec<R>, BackendError> {
    let rows = backend.list(token, R::TABLE, &R::default_order()).await?;

    rows.into_iter()
        .map(|row| serde_json::from_value(row).map_err(BackendError::from))
        .collect()
}

pub async fn find_record<R: Record>(
    backend: &dyn Backend,
    token: Option<&str>,
    id: Uuid,
) -> Result<Option<R>, BackendError> {
    let rows = list_records::<R>(backend, token).await?;
    Ok(rows.into_iter().find(|r| r.id() == id))
}

/// Inserts `draft` with `user_id` stamped to the owner.
pub async fn insert_record<R: Record>(
    backend: &dyn Backend,
    token: Option<&str>,
    draft: &R::Draft,
    owner: Uuid,
) -> Result<R, BackendError> {
    let mut row = serde_json::to_value(draft)?;
    if let Value::Object(map) = &mut row {
        map.insert("user_id".to_string(), Value::String(owner.to_string()));
    }

    let stored = backend.insert(token, R::TABLE, row).await?;
    Ok(serde_json::from_value(stored)?)
}

pub async fn update_record<R: Record>(
    backend: &dyn Backend,
    token: Option<&str>,
    id: Uuid,
    draft: &R::Draft,
) -> Result<R, BackendError> {
    let patch = serde_json::to_value(draft)?;
    let stored = backend.update(token, R::TABLE, id, patch).await?;
    Ok(serde_json::from_value(stored)?)
}

pub async fn delete_record<R: Record>(
    backend: &dyn Backend,
    token: Option<&str>,
    id: Uuid,
) -> Result<(), BackendError> {
    backend.delete(token, R::TABLE, id).await
}
