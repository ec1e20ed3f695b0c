use std::sync::Arc;

use actix_multipart::{Field, Multipart, MultipartError};
use actix_web::{get, post, web, HttpRequest, HttpResponse, Responder};
use futures_util::TryStreamExt;
use uuid::Uuid;

use portfolio::models::{BlogPost, BlogPostDraft};
use portfolio::services::upload::{attach_video, PercentFn, VideoFile};
use portfolio::services::EntityEditor;

use crate::web::forms::{AdminQuery, PostForm};
use crate::web::handlers::admin::{admin_chrome, list_tab, load_tab, submit_editor, Rejected};
use crate::web::helpers::{render, require_session};
use crate::web::state::AppState;
use crate::web::templates::{
    notice_views, AdminPostsTemplate, FooterView, NavState, NoticeView, PostRow,
};

const MAX_TEXT_FIELD: usize = 256 * 1024;
const MAX_VIDEO_BYTES: usize = 200 * 1024 * 1024;

#[derive(Debug)]
enum FormError {
    Multipart(MultipartError),
    TooLarge(&'static str),
}

impl From<MultipartError> for FormError {
    fn from(e: MultipartError) -> Self {
        Self::Multipart(e)
    }
}

async fn read_field(
    field: &mut Field,
    limit: usize,
    name: &'static str,
) -> Result<Vec<u8>, FormError> {
    let mut buf = Vec::new();
    while let Some(chunk) = field.try_next().await? {
        if buf.len() + chunk.len() > limit {
            return Err(FormError::TooLarge(name));
        }
        buf.extend_from_slice(&chunk);
    }
    Ok(buf)
}

async fn read_text(field: &mut Field, name: &'static str) -> Result<String, FormError> {
    let bytes = read_field(field, MAX_TEXT_FIELD, name).await?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

async fn read_post_form(mut payload: Multipart) -> Result<PostForm, FormError> {
    let mut form = PostForm::default();

    while let Some(mut field) = payload.try_next().await? {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "id" => form.id = Some(read_text(&mut field, "id").await?),
            "title" => form.title = read_text(&mut field, "title").await?,
            "content" => form.content = read_text(&mut field, "content").await?,
            "video_url" => form.video_url = read_text(&mut field, "video_url").await?,
            "upload_id" => form.upload_id = Some(read_text(&mut field, "upload_id").await?),
            "video" => {
                let file_name = field
                    .content_disposition()
                    .and_then(|cd| cd.get_filename())
                    .unwrap_or_default()
                    .to_string();
                let content_type = field.content_type().map(|m| m.to_string());
                let bytes = read_field(&mut field, MAX_VIDEO_BYTES, "video").await?;

                // Browsers send an empty part when no file was chosen.
                if !file_name.is_empty() && !bytes.is_empty() {
                    form.video = Some(VideoFile {
                        file_name,
                        content_type,
                        bytes,
                    });
                }
            }
            _ => {
                // drain
                read_field(&mut field, MAX_TEXT_FIELD, "unknown").await?;
            }
        }
    }

    Ok(form)
}

fn posts_page(
    state: &AppState,
    req: &HttpRequest,
    menu: Option<&str>,
    rows: &[BlogPost],
    editor: &EntityEditor<BlogPost>,
    notices: Vec<NoticeView>,
    error: Option<String>,
) -> HttpResponse {
    let draft = editor.draft();

    render(AdminPostsTemplate {
        nav: NavState::new(&state.config, req.path(), menu),
        footer: FooterView::new(&state.config),
        admin: admin_chrome(editor, notices, error),
        form_title: draft.title.clone(),
        form_content: draft.content.clone(),
        form_video_url: draft.video_url.clone().unwrap_or_default(),
        upload_id: Uuid::new_v4().to_string(),
        posts: rows.iter().map(PostRow::from).collect(),
    })
}

#[get("/admin/posts")]
pub async fn posts_tab(
    state: web::Data<AppState>,
    req: HttpRequest,
    query: web::Query<AdminQuery>,
) -> impl Responder {
    let session = match require_session(&state, &req).await {
        Ok(session) => session,
        Err(resp) => return resp,
    };

    let tab = load_tab::<BlogPost>(&state, &session, query.edit).await;
    posts_page(
        &state,
        &req,
        query.menu.as_deref(),
        &tab.rows,
        &tab.editor,
        notice_views(query.notice.as_deref()),
        None,
    )
}

#[post("/admin/posts")]
pub async fn posts_submit(
    state: web::Data<AppState>,
    req: HttpRequest,
    payload: Multipart,
) -> impl Responder {
    let session = match require_session(&state, &req).await {
        Ok(session) => session,
        Err(resp) => return resp,
    };

    let form = match read_post_form(payload).await {
        Ok(form) => form,
        Err(FormError::TooLarge(field)) => {
            log::warn!("Rejected blog post form: {} too large", field);
            return HttpResponse::PayloadTooLarge().body(format!("{field} is too large"));
        }
        Err(FormError::Multipart(e)) => {
            log::warn!("Malformed blog post form: {}", e);
            return HttpResponse::BadRequest().body("Malformed form data");
        }
    };

    let upload_id = form.upload_id();
    let id = form.id();
    let draft = BlogPostDraft {
        title: form.title.trim().to_string(),
        content: form.content.trim().to_string(),
        video_url: None,
    }
    .with_video_url(Some(form.video_url));

    let on_percent: PercentFn = match (upload_id, form.video.is_some()) {
        (Some(id), true) => state.progress.start(id),
        _ => Arc::new(|_| {}),
    };

    let (draft, notices) = attach_video(
        state.backend.as_ref(),
        Some(&session.access_token),
        &state.config.video_bucket,
        draft,
        form.video,
        on_percent,
    )
    .await;
    let editor = EntityEditor::<BlogPost>::from_form(id, draft);

    match submit_editor(&state, &req, &session, editor, notices).await {
        Ok(resp) => resp,
        Err(Rejected {
            editor,
            notices,
            error,
        }) => {
            let rows = list_tab::<BlogPost>(&state, &session).await;
            posts_page(
                &state,
                &req,
                None,
                &rows,
                &editor,
                notices.iter().map(NoticeView::from).collect(),
                error,
            )
        }
    }
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(posts_tab).service(posts_submit);
}
