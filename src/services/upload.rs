use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::backend::{Backend, ProgressFn};
use crate::log_err;
use crate::models::{BlogPostDraft, Draft};
use crate::services::Notice;

pub const VIDEO_PREFIX: &str = "videos";

/// Receives upload progress as a whole percentage.
pub type PercentFn = Arc<dyn Fn(u8) + Send + Sync>;

/// Text after the final `.` of the base name, or `bin` when it has none.
pub fn file_extension(file_name: &str) -> &str {
    let base = file_name
        .rsplit(|c| c == '/' || c == '\\')
        .next()
        .unwrap_or(file_name);

    match base.rsplit_once('.') {
        Some((_, ext)) if !ext.is_empty() => ext,
        _ => "bin",
    }
}

/// `videos/{fraction}{millis}.{ext}`
pub fn video_object_path(file_name: &str, fraction: f64, now: DateTime<Utc>) -> String {
    format!(
        "{VIDEO_PREFIX}/{fraction}{}.{}",
        now.timestamp_millis(),
        file_extension(file_name)
    )
}

pub fn random_video_path(file_name: &str) -> String {
    video_object_path(file_name, rand::random::<f64>(), Utc::now())
}

pub fn percent(loaded: u64, total: u64) -> u8 {
    if total == 0 {
        return 100;
    }
    let ratio = (loaded as f64 / total as f64) * 100.0;
    ratio.round().clamp(0.0, 100.0) as u8
}

/// Forwards byte progress as percentages that never go backwards.
pub struct ProgressTracker {
    last: AtomicU8,
    sink: PercentFn,
}

impl ProgressTracker {
    pub fn new(sink: PercentFn) -> Self {
        Self {
            last: AtomicU8::new(0),
            sink,
        }
    }

    pub fn observe(&self, loaded: u64, total: u64) {
        let p = percent(loaded, total);
        let prev = self.last.fetch_max(p, Ordering::SeqCst);
        if p > prev {
            (self.sink)(p);
        }
    }

    pub fn finish(&self) {
        self.observe(1, 1);
    }

    pub fn last(&self) -> u8 {
        self.last.load(Ordering::SeqCst)
    }
}

/// Uploads a video under a randomized name in `bucket`.
///
/// Resolves to the public URL, or `None` when the upload failed; the
/// failure is logged and the caller decides how to tell the user.
pub async fn upload_video(
    backend: &dyn Backend,
    token: Option<&str>,
    bucket: &str,
    file_name: &str,
    content_type: Option<&str>,
    bytes: Vec<u8>,
    on_percent: PercentFn,
) -> Option<String> {
    let path = random_video_path(file_name);
    let content_type = content_type
        .filter(|ct| !ct.is_empty())
        .unwrap_or("application/octet-stream");
    let size = bytes.len();

    let tracker = Arc::new(ProgressTracker::new(on_percent));
    let observer = tracker.clone();
    let progress: ProgressFn = Arc::new(move |loaded, total| observer.observe(loaded, total));

    match backend
        .upload_object(token, bucket, &path, bytes, content_type, progress)
        .await
    {
        Ok(url) => {
            tracker.finish();
            log::info!("Uploaded {size} bytes to {bucket}/{path}");
            Some(url)
        }
        Err(e) => {
            log_err!(
                "upload video",
                &serde_json::json!({
                    "bucket": bucket,
                    "path": path,
                    "file_name": file_name,
                    "error": e.to_string(),
                })
            );
            None
        }
    }
}

/// A video file picked in the post form.
pub struct VideoFile {
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

/// Resolves the post's `video_url` before it is submitted.
///
/// A chosen file takes precedence over the typed URL. The upload only
/// happens when the rest of the draft is valid. If it fails, the typed URL
/// is kept when it is usable and `Notice::UploadFailed` is returned.
pub async fn attach_video(
    backend: &dyn Backend,
    token: Option<&str>,
    bucket: &str,
    mut draft: BlogPostDraft,
    video: Option<VideoFile>,
    on_percent: PercentFn,
) -> (BlogPostDraft, Vec<Notice>) {
    let video = match video {
        Some(video) => video,
        None => return (draft, Vec::new()),
    };

    let typed = draft.video_url.take();
    if draft.validate().is_err() {
        draft.video_url = typed;
        return (draft, Vec::new());
    }

    let uploaded = upload_video(
        backend,
        token,
        bucket,
        &video.file_name,
        video.content_type.as_deref(),
        video.bytes,
        on_percent,
    )
    .await;

    match uploaded {
        Some(url) => {
            draft.video_url = Some(url);
            (draft, Vec::new())
        }
        None => {
            draft.video_url = typed;
            if draft.validate().is_err() {
                draft.video_url = None;
            }
            (draft, vec![Notice::UploadFailed])
        }
    }
}
