use std::cmp::Ordering;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering as AtomicOrdering};
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use chrono::{Duration, SecondsFormat, Utc};
use serde_json::{json, Value};
use uuid::Uuid;

use super::{Backend, ProgressFn};
use crate::common::BackendError;
use crate::models::{AuthUser, OrderSpec, Session, Table};

const UPLOAD_CHUNK_SIZE: usize = 16 * 1024;
const SESSION_TTL_HOURS: i64 = 1;

struct Account {
    user: AuthUser,
    password: String,
}

struct StoredObject {
    bytes: Vec<u8>,
    content_type: String,
}

#[derive(Default)]
struct MemoryState {
    accounts: Vec<Account>,
    sessions: HashMap<String, Session>,
    tables: HashMap<Table, Vec<Value>>,
    objects: HashMap<(String, String), StoredObject>,
}

/// Process-local stand-in for the hosted backend.
///
/// Used by the test suite and by the preview mode of the server when no
/// hosted project is configured. Nothing is persisted.
pub struct MemoryBackend {
    state: Mutex<MemoryState>,
    public_base: String,
    fail_writes: AtomicBool,
    fail_uploads: AtomicBool,
    requests: AtomicUsize,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(MemoryState::default()),
            public_base: "http://localhost:54321".to_string(),
            fail_writes: AtomicBool::new(false),
            fail_uploads: AtomicBool::new(false),
            requests: AtomicUsize::new(0),
        }
    }

    /// Origin used by [`Backend::public_url`]. Preview mode points this at
    /// the site itself, which serves stored objects under the same path.
    pub fn with_public_base(mut self, base: &str) -> Self {
        self.public_base = base.trim_end_matches('/').to_string();
        self
    }

    fn lock(&self) -> MutexGuard<'_, MemoryState> {
        self.state
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn register_user(&self, email: &str, password: &str) -> AuthUser {
        let user = AuthUser {
            id: Uuid::new_v4(),
            email: Some(email.to_string()),
        };
        self.lock().accounts.push(Account {
            user: user.clone(),
            password: password.to_string(),
        });
        user
    }

    /// Makes every insert/update/delete fail with a 500.
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, AtomicOrdering::SeqCst);
    }

    pub fn set_fail_uploads(&self, fail: bool) {
        self.fail_uploads.store(fail, AtomicOrdering::SeqCst);
    }

    /// Number of row and storage calls served so far.
    pub fn request_count(&self) -> usize {
        self.requests.load(AtomicOrdering::SeqCst)
    }

    pub fn object(&self, bucket: &str, path: &str) -> Option<Vec<u8>> {
        self.object_with_type(bucket, path).map(|(bytes, _)| bytes)
    }

    /// Stored bytes together with the content type given at upload.
    pub fn object_with_type(&self, bucket: &str, path: &str) -> Option<(Vec<u8>, String)> {
        self.lock()
            .objects
            .get(&(bucket.to_string(), path.to_string()))
            .map(|o| (o.bytes.clone(), o.content_type.clone()))
    }

    /// Fills the projects and about tables with the sample content the site
    /// shipped with.
    pub fn seed_showcase(&self, owner: Uuid) {
        let owner = owner.to_string();
        let projects = [
            json!({
                "title": "Legal Services Platform",
                "description": "A platform enhancing access to legal services and improving client-lawyer interactions through innovative technology.",
                "link": "https://github.com/quantumNexus0/LegalService",
                "image": "https://images.unsplash.com/photo-1589829085413-56de8ae18c73?auto=format&fit=crop&q=80&w=800",
                "user_id": owner,
            }),
            json!({
                "title": "Railway Reservation System",
                "description": "GUI-based desktop application for managing railway reservations using Java (JFrame) and MySQL.",
                "link": "https://github.com/quantumNexus0/RailwayReservationSystem-",
                "image": "https://images.unsplash.com/photo-1474487548417-781cb71495f3?auto=format&fit=crop&q=80&w=800",
                "user_id": owner,
            }),
        ];
        let about = [
            json!({
                "title": "Web Development",
                "description": "Passionate about creating modern web applications using React and other cutting-edge technologies.",
                "icon": "code",
                "user_id": owner,
            }),
            json!({
                "title": "B.Tech IT Student",
                "description": "Currently in my 3rd year, focusing on building a strong foundation in Information Technology.",
                "icon": "book-open",
                "user_id": owner,
            }),
            json!({
                "title": "Yoga Enthusiast",
                "description": "Dedicated practitioner with deep knowledge in yoga and its benefits for mind and body.",
                "icon": "heart",
                "user_id": owner,
            }),
        ];

        let mut state = self.lock();
        for row in projects {
            store_row(&mut state, Table::Projects, row);
        }
        for row in about {
            store_row(&mut state, Table::AboutSections, row);
        }
    }

    fn count_request(&self) {
        self.requests.fetch_add(1, AtomicOrdering::SeqCst);
    }

    fn check_writes(&self) -> Result<(), BackendError> {
        if self.fail_writes.load(AtomicOrdering::SeqCst) {
            return Err(BackendError::Status {
                status: 500,
                message: "simulated write failure".to_string(),
            });
        }
        Ok(())
    }
}

impl Default for MemoryBackend {
    fn default() -> Self {
        Self::new()
    }
}

/// Fills `id` and `created_at` when the caller left them out, the way the
/// hosted tables default them.
fn store_row(state: &mut MemoryState, table: Table, mut row: Value) -> Value {
    if let Value::Object(map) = &mut row {
        map.entry("id")
            .or_insert_with(|| Value::String(Uuid::new_v4().to_string()));
        map.entry("created_at").or_insert_with(|| {
            Value::String(Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true))
        });
    }

    state.tables.entry(table).or_default().push(row.clone());
    row
}

fn row_id_matches(row: &Value, id: &str) -> bool {
    row.get("id").and_then(Value::as_str) == Some(id)
}

/// Ascending comparison with nulls sorted last.
fn compare_column(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    let a = a.filter(|v| !v.is_null());
    let b = b.filter(|v| !v.is_null());

    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(Value::Number(x)), Some(Value::Number(y))) => x
            .as_f64()
            .partial_cmp(&y.as_f64())
            .unwrap_or(Ordering::Equal),
        (Some(Value::String(x)), Some(Value::String(y))) => x.cmp(y),
        (Some(x), Some(y)) => x.to_string().cmp(&y.to_string()),
    }
}

#[async_trait]
impl Backend for MemoryBackend {
    async fn sign_in(&self, email: &str, password: &str) -> Result<Session, BackendError> {
        let mut state = self.lock();

        let user = state
            .accounts
            .iter()
            .find(|a| a.user.email.as_deref() == Some(email) && a.password == password)
            .map(|a| a.user.clone())
            .ok_or(BackendError::InvalidCredentials)?;

        let session = Session {
            access_token: Uuid::new_v4().to_string(),
            refresh_token: Some(Uuid::new_v4().to_string()),
            expires_at: Some(Utc::now() + Duration::hours(SESSION_TTL_HOURS)),
            user,
        };
        state
            .sessions
            .insert(session.access_token.clone(), session.clone());

        Ok(session)
    }

    async fn get_session(&self, access_token: &str) -> Result<Option<Session>, BackendError> {
        let mut state = self.lock();

        let expired = match state.sessions.get(access_token) {
            Some(s) => s.is_expired(Utc::now()),
            None => return Ok(None),
        };

        if expired {
            state.sessions.remove(access_token);
            return Ok(None);
        }

        Ok(state.sessions.get(access_token).cloned())
    }

    async fn sign_out(&self, access_token: &str) -> Result<(), BackendError> {
        self.lock().sessions.remove(access_token);
        Ok(())
    }

    async fn list(
        &self,
        _token: Option<&str>,
        table: Table,
        order: &OrderSpec,
    ) -> Result<Vec<Value>, BackendError> {
        self.count_request();

        let mut rows = self.lock().tables.get(&table).cloned().unwrap_or_default();

        // Stable sort: ties keep insertion order.
        rows.sort_by(|a, b| {
            let ord = compare_column(a.get(&order.column), b.get(&order.column));
            if order.ascending {
                ord
            } else {
                ord.reverse()
            }
        });

        Ok(rows)
    }

    async fn insert(
        &self,
        _token: Option<&str>,
        table: Table,
        record: Value,
    ) -> Result<Value, BackendError> {
        self.count_request();
        self.check_writes()?;

        if !record.is_object() {
            return Err(BackendError::Status {
                status: 400,
                message: "row must be a JSON object".to_string(),
            });
        }

        Ok(store_row(&mut self.lock(), table, record))
    }

    async fn update(
        &self,
        _token: Option<&str>,
        table: Table,
        id: Uuid,
        patch: Value,
    ) -> Result<Value, BackendError> {
        self.count_request();
        self.check_writes()?;

        let id = id.to_string();
        let mut state = self.lock();
        let row = state
            .tables
            .get_mut(&table)
            .and_then(|rows| rows.iter_mut().find(|r| row_id_matches(r, &id)))
            .ok_or_else(|| BackendError::NotFound {
                table,
                id: id.clone(),
            })?;

        if let (Value::Object(target), Value::Object(changes)) = (&mut *row, patch) {
            for (key, value) in changes {
                if matches!(key.as_str(), "id" | "user_id" | "created_at") {
                    continue;
                }
                target.insert(key, value);
            }
        }

        Ok(row.clone())
    }

    async fn delete(
        &self,
        _token: Option<&str>,
        table: Table,
        id: Uuid,
    ) -> Result<(), BackendError> {
        self.count_request();
        self.check_writes()?;

        let id = id.to_string();
        if let Some(rows) = self.lock().tables.get_mut(&table) {
            rows.retain(|r| !row_id_matches(r, &id));
        }
        Ok(())
    }

    async fn upload_object(
        &self,
        _token: Option<&str>,
        bucket: &str,
        path: &str,
        bytes: Vec<u8>,
        content_type: &str,
        on_progress: ProgressFn,
    ) -> Result<String, BackendError> {
        self.count_request();

        let total = bytes.len() as u64;
        let mut loaded = 0u64;
        for chunk in bytes.chunks(UPLOAD_CHUNK_SIZE) {
            loaded += chunk.len() as u64;
            on_progress(loaded, total);
        }

        if self.fail_uploads.load(AtomicOrdering::SeqCst) {
            return Err(BackendError::Upload {
                bucket: bucket.to_string(),
                path: path.to_string(),
                reason: "simulated storage failure".to_string(),
            });
        }

        let key = (bucket.to_string(), path.to_string());
        let mut state = self.lock();
        if state.objects.contains_key(&key) {
            return Err(BackendError::Upload {
                bucket: bucket.to_string(),
                path: path.to_string(),
                reason: "object already exists".to_string(),
            });
        }
        state.objects.insert(
            key,
            StoredObject {
                bytes,
                content_type: content_type.to_string(),
            },
        );
        drop(state);

        on_progress(total, total);
        Ok(self.public_url(bucket, path))
    }

    fn public_url(&self, bucket: &str, path: &str) -> String {
        format!(
            "{}/storage/v1/object/public/{}/{}",
            self.public_base, bucket, path
        )
    }
}
