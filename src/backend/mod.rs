//! Client side of the hosted backend: session auth, table rows and object
//! storage.
//!
//! Everything the site persists goes through [`Backend`]. Row payloads are
//! plain JSON at this seam; [`records`] layers the typed models on top.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use uuid::Uuid;

use crate::common::BackendError;
use crate::models::{AuthUser, OrderSpec, Session, Table};

pub mod memory;
pub mod records;
pub mod supabase;

pub use memory::MemoryBackend;
pub use supabase::SupabaseBackend;

/// Upload progress callback, invoked with `(loaded, total)` bytes.
pub type ProgressFn = Arc<dyn Fn(u64, u64) + Send + Sync>;

/// Row and storage calls take the caller's access token, if any. Without
/// one the request runs with the public anon key.
#[async_trait]
pub trait Backend: Send + Sync {
    async fn sign_in(&self, email: &str, password: &str) -> Result<Session, BackendError>;

    /// `None` when the token is unknown or expired.
    async fn get_session(&self, access_token: &str) -> Result<Option<Session>, BackendError>;

    async fn get_user(&self, access_token: &str) -> Result<Option<AuthUser>, BackendError> {
        Ok(self.get_session(access_token).await?.map(|s| s.user))
    }

    async fn sign_out(&self, access_token: &str) -> Result<(), BackendError>;

    async fn list(
        &self,
        token: Option<&str>,
        table: Table,
        order: &OrderSpec,
    ) -> Result<Vec<Value>, BackendError>;

    /// Returns the stored row, including server-assigned columns.
    async fn insert(
        &self,
        token: Option<&str>,
        table: Table,
        record: Value,
    ) -> Result<Value, BackendError>;

    async fn update(
        &self,
        token: Option<&str>,
        table: Table,
        id: Uuid,
        patch: Value,
    ) -> Result<Value, BackendError>;

    async fn delete(&self, token: Option<&str>, table: Table, id: Uuid)
        -> Result<(), BackendError>;

    /// Uploads `bytes` to `bucket/path` and resolves to the object's public URL.
    async fn upload_object(
        &self,
        token: Option<&str>,
        bucket: &str,
        path: &str,
        bytes: Vec<u8>,
        content_type: &str,
        on_progress: ProgressFn,
    ) -> Result<String, BackendError>;

    fn public_url(&self, bucket: &str, path: &str) -> String;
}
