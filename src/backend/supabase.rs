use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use futures_util::stream;
use reqwest::header::{AUTHORIZATION, CONTENT_LENGTH, CONTENT_TYPE};
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::Deserialize;
use serde_json::Value;
use uuid::Uuid;

use super::{Backend, ProgressFn};
use crate::common::BackendError;
use crate::models::{AuthUser, OrderSpec, Session, Table};

const UPLOAD_CHUNK_SIZE: usize = 64 * 1024;

/// REST client for a Supabase project (GoTrue auth, PostgREST rows, Storage).
pub struct SupabaseBackend {
    client: Client,
    base_url: String,
    anon_key: String,
}

#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
    refresh_token: Option<String>,
    expires_at: Option<i64>,
    expires_in: Option<i64>,
    user: AuthUser,
}

impl SupabaseBackend {
    pub fn new(base_url: &str, anon_key: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            anon_key: anon_key.to_string(),
        }
    }

    pub fn auth_url(&self, path: &str) -> String {
        format!("{}/auth/v1/{}", self.base_url, path)
    }

    pub fn table_url(&self, table: Table, order: &OrderSpec) -> String {
        format!(
            "{}/rest/v1/{}?select=*&order={}",
            self.base_url,
            table,
            order.to_query()
        )
    }

    pub fn insert_url(&self, table: Table) -> String {
        format!("{}/rest/v1/{}", self.base_url, table)
    }

    pub fn row_url(&self, table: Table, id: Uuid) -> String {
        format!("{}/rest/v1/{}?id=eq.{}", self.base_url, table, id)
    }

    pub fn object_url(&self, bucket: &str, path: &str) -> String {
        format!("{}/storage/v1/object/{}/{}", self.base_url, bucket, path)
    }

    fn request(&self, method: Method, url: String, token: Option<&str>) -> RequestBuilder {
        let bearer = token.unwrap_or(&self.anon_key);
        self.client
            .request(method, url)
            .header("apikey", &self.anon_key)
            .header(AUTHORIZATION, format!("Bearer {bearer}"))
    }

    async fn check(resp: Response) -> Result<Response, BackendError> {
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }

        let body = resp.text().await.unwrap_or_default();
        Err(BackendError::Status {
            status: status.as_u16(),
            message: error_message(&body),
        })
    }

    async fn first_row(resp: Response, table: Table, id: String) -> Result<Value, BackendError> {
        let rows: Vec<Value> = Self::check(resp).await?.json().await?;
        rows.into_iter()
            .next()
            .ok_or(BackendError::NotFound { table, id })
    }
}

/// Pulls the human-readable message out of an error body, whichever of
/// the services produced it.
pub fn error_message(body: &str) -> String {
    let parsed: Option<Value> = serde_json::from_str(body).ok();
    parsed
        .as_ref()
        .and_then(|v| {
            ["message", "msg", "error_description", "error"]
                .iter()
                .find_map(|key| v.get(*key).and_then(Value::as_str))
        })
        .map(str::to_string)
        .unwrap_or_else(|| body.trim().to_string())
}

#[async_trait]
impl Backend for SupabaseBackend {
    async fn sign_in(&self, email: &str, password: &str) -> Result<Session, BackendError> {
        let resp = self
            .request(
                Method::POST,
                self.auth_url("token?grant_type=password"),
                None,
            )
            .json(&serde_json::json!({ "email": email, "password": password }))
            .send()
            .await?;

        if resp.status() == StatusCode::BAD_REQUEST {
            return Err(BackendError::InvalidCredentials);
        }

        let token: TokenResponse = Self::check(resp).await?.json().await?;
        let expires_at = token
            .expires_at
            .and_then(|secs| DateTime::from_timestamp(secs, 0))
            .or_else(|| token.expires_in.map(|secs| Utc::now() + Duration::seconds(secs)));

        Ok(Session {
            access_token: token.access_token,
            refresh_token: token.refresh_token,
            expires_at,
            user: token.user,
        })
    }

    async fn get_session(&self, access_token: &str) -> Result<Option<Session>, BackendError> {
        let resp = self
            .request(Method::GET, self.auth_url("user"), Some(access_token))
            .send()
            .await?;

        if matches!(
            resp.status(),
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN
        ) {
            return Ok(None);
        }

        let user: AuthUser = Self::check(resp).await?.json().await?;
        Ok(Some(Session {
            access_token: access_token.to_string(),
            refresh_token: None,
            expires_at: None,
            user,
        }))
    }

    async fn sign_out(&self, access_token: &str) -> Result<(), BackendError> {
        let resp = self
            .request(Method::POST, self.auth_url("logout"), Some(access_token))
            .send()
            .await?;
        Self::check(resp).await?;
        Ok(())
    }

    async fn list(
        &self,
        token: Option<&str>,
        table: Table,
        order: &OrderSpec,
    ) -> Result<Vec<Value>, BackendError> {
        let resp = self
            .request(Method::GET, self.table_url(table, order), token)
            .send()
            .await?;
        Ok(Self::check(resp).await?.json().await?)
    }

    async fn insert(
        &self,
        token: Option<&str>,
        table: Table,
        record: Value,
    ) -> Result<Value, BackendError> {
        let resp = self
            .request(Method::POST, self.insert_url(table), token)
            .header("Prefer", "return=representation")
            .json(&[record])
            .send()
            .await?;
        Self::first_row(resp, table, "<new>".to_string()).await
    }

    async fn update(
        &self,
        token: Option<&str>,
        table: Table,
        id: Uuid,
        patch: Value,
    ) -> Result<Value, BackendError> {
        let resp = self
            .request(Method::PATCH, self.row_url(table, id), token)
            .header("Prefer", "return=representation")
            .json(&patch)
            .send()
            .await?;
        Self::first_row(resp, table, id.to_string()).await
    }

    async fn delete(
        &self,
        token: Option<&str>,
        table: Table,
        id: Uuid,
    ) -> Result<(), BackendError> {
        let resp = self
            .request(Method::DELETE, self.row_url(table, id), token)
            .send()
            .await?;
        Self::check(resp).await?;
        Ok(())
    }

    async fn upload_object(
        &self,
        token: Option<&str>,
        bucket: &str,
        path: &str,
        bytes: Vec<u8>,
        content_type: &str,
        on_progress: ProgressFn,
    ) -> Result<String, BackendError> {
        let total = bytes.len() as u64;
        let chunks: Vec<Vec<u8>> = bytes.chunks(UPLOAD_CHUNK_SIZE).map(<[u8]>::to_vec).collect();

        // Progress counts bytes handed to the transport.
        let mut loaded = 0u64;
        let progress = on_progress.clone();
        let body = stream::iter(chunks.into_iter().map(move |chunk| {
            loaded += chunk.len() as u64;
            progress(loaded, total);
            Ok::<_, std::io::Error>(chunk)
        }));

        let resp = self
            .request(Method::POST, self.object_url(bucket, path), token)
            .header(CONTENT_TYPE, content_type)
            .header(CONTENT_LENGTH, total)
            .header("x-upsert", "false")
            .body(reqwest::Body::wrap_stream(body))
            .send()
            .await?;

        Self::check(resp).await.map_err(|e| BackendError::Upload {
            bucket: bucket.to_string(),
            path: path.to_string(),
            reason: e.to_string(),
        })?;

        on_progress(total, total);
        Ok(self.public_url(bucket, path))
    }

    fn public_url(&self, bucket: &str, path: &str) -> String {
        format!(
            "{}/storage/v1/object/public/{}/{}",
            self.base_url, bucket, path
        )
    }
}

