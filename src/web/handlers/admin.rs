//! Dashboard plumbing shared by the three editors: loading a tab,
//! submitting an editor, delete confirmation, and upload progress.

use actix_web::{get, post, web, HttpRequest, HttpResponse, Responder};
use uuid::Uuid;

use portfolio::backend::records::{find_record, list_records};
use portfolio::common::EditorError;
use portfolio::log_err;
use portfolio::models::{AboutSection, BlogPost, Project, Record, Session, Table};
use portfolio::services::{DeleteOutcome, EntityEditor, Notice, Outcome, SubmitOutcome};

use crate::web::forms::DeleteForm;
use crate::web::helpers::{redirect, render, require_session, tab_location, tab_slug, tab_table};
use crate::web::state::AppState;
use crate::web::templates::{AdminChrome, ConfirmDeleteTemplate, FooterView, NavState, NoticeView};

/// Rows of a tab plus its editor, in edit mode when `edit` names a row.
pub struct TabData<R: Record> {
    pub rows: Vec<R>,
    pub editor: EntityEditor<R>,
}

pub async fn list_tab<R: Record>(state: &AppState, session: &Session) -> Vec<R> {
    match list_records::<R>(state.backend.as_ref(), Some(&session.access_token)).await {
        Ok(rows) => rows,
        Err(e) => {
            log::error!("Failed to list {}: {}", R::TABLE, e);
            Vec::new()
        }
    }
}

pub async fn load_tab<R: Record>(
    state: &AppState,
    session: &Session,
    edit: Option<Uuid>,
) -> TabData<R> {
    let rows = list_tab::<R>(state, session).await;

    let mut editor = EntityEditor::new();
    if let Some(row) = edit.and_then(|id| rows.iter().find(|r| r.id() == id)) {
        editor.select(row);
    }

    TabData { rows, editor }
}

pub fn admin_chrome<R: Record>(
    editor: &EntityEditor<R>,
    notices: Vec<NoticeView>,
    error: Option<String>,
) -> AdminChrome {
    AdminChrome {
        active_tab: tab_slug(R::TABLE),
        notices,
        editing: editor.is_editing(),
        editing_id: editor
            .editing_id()
            .map(|id| id.to_string())
            .unwrap_or_default(),
        error,
    }
}

/// A submit that did not go through; the form is shown again with the
/// user's input.
pub struct Rejected<R: Record> {
    pub editor: EntityEditor<R>,
    pub notices: Vec<Notice>,
    pub error: Option<String>,
}

/// Submits `editor` and redirects to the refreshed list on success.
/// `notices` are carried along (e.g. a failed video upload).
pub async fn submit_editor<R: Record>(
    state: &AppState,
    req: &HttpRequest,
    session: &Session,
    mut editor: EntityEditor<R>,
    mut notices: Vec<Notice>,
) -> Result<HttpResponse, Rejected<R>> {
    let editing = editor.is_editing();

    match editor.submit(state.backend.as_ref(), Some(session)).await {
        Ok(SubmitOutcome::Created(row)) => {
            log::info!("Created {} {}", R::TABLE.label(), row.id());
            notices.push(Notice::Row(R::TABLE, Outcome::Created));
            Ok(redirect(req, &tab_location(R::TABLE, &notices)))
        }
        Ok(SubmitOutcome::Updated(row)) => {
            log::info!("Updated {} {}", R::TABLE.label(), row.id());
            notices.push(Notice::Row(R::TABLE, Outcome::Updated));
            Ok(redirect(req, &tab_location(R::TABLE, &notices)))
        }
        Err(e @ (EditorError::Validation(_) | EditorError::InvalidUrl(_))) => Err(Rejected {
            editor,
            notices,
            error: Some(e.to_string()),
        }),
        Err(EditorError::NotAuthenticated) => {
            let notice = Notice::Row(R::TABLE, Outcome::LoginRequired);
            Ok(redirect(req, &format!("/login?notice={}", notice.code())))
        }
        Err(EditorError::Backend(e)) => {
            log_err!(
                format!("{} {}", if editing { "update" } else { "create" }, R::TABLE.label()),
                &serde_json::json!({ "draft": editor.draft(), "error": e.to_string() })
            );
            let outcome = if editing {
                Outcome::UpdateFailed
            } else {
                Outcome::CreateFailed
            };
            notices.push(Notice::Row(R::TABLE, outcome));
            Err(Rejected {
                editor,
                notices,
                error: None,
            })
        }
    }
}

#[get("/admin")]
pub async fn admin_dashboard(req: HttpRequest) -> impl Responder {
    redirect(&req, &tab_location(Table::BlogPosts, &[]))
}

async fn confirm_page<R: Record>(
    state: &AppState,
    req: &HttpRequest,
    session: &Session,
    id: Uuid,
) -> HttpResponse {
    match find_record::<R>(state.backend.as_ref(), Some(&session.access_token), id).await {
        Ok(Some(row)) => render(ConfirmDeleteTemplate {
            nav: NavState::new(&state.config, req.path(), None),
            footer: FooterView::new(&state.config),
            tab: tab_slug(R::TABLE),
            id: id.to_string(),
            label: R::TABLE.label(),
            title: row.title().to_string(),
        }),
        Ok(None) => redirect(req, &tab_location(R::TABLE, &[])),
        Err(e) => {
            log::error!("Failed to load {} {}: {}", R::TABLE.label(), id, e);
            redirect(
                req,
                &tab_location(R::TABLE, &[Notice::Row(R::TABLE, Outcome::DeleteFailed)]),
            )
        }
    }
}

async fn delete_row<R: Record>(
    state: &AppState,
    req: &HttpRequest,
    session: &Session,
    id: Uuid,
    confirmed: bool,
) -> HttpResponse {
    let mut editor = EntityEditor::<R>::new();

    match editor
        .delete(state.backend.as_ref(), Some(session), id, confirmed)
        .await
    {
        Ok(DeleteOutcome::NeedsConfirmation) => redirect(
            req,
            &format!("/admin/{}/{}/delete", tab_slug(R::TABLE), id),
        ),
        Ok(DeleteOutcome::Deleted) => {
            log::info!("Deleted {} {}", R::TABLE.label(), id);
            redirect(
                req,
                &tab_location(R::TABLE, &[Notice::Row(R::TABLE, Outcome::Deleted)]),
            )
        }
        Err(e) => {
            log_err!(
                format!("delete {}", R::TABLE.label()),
                &serde_json::json!({ "id": id, "error": e.to_string() })
            );
            redirect(
                req,
                &tab_location(R::TABLE, &[Notice::Row(R::TABLE, Outcome::DeleteFailed)]),
            )
        }
    }
}

#[get("/admin/{tab}/{id}/delete")]
pub async fn confirm_delete(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<(String, Uuid)>,
) -> impl Responder {
    let session = match require_session(&state, &req).await {
        Ok(session) => session,
        Err(resp) => return resp,
    };
    let (tab, id) = path.into_inner();

    match tab_table(&tab) {
        Some(Table::BlogPosts) => confirm_page::<BlogPost>(&state, &req, &session, id).await,
        Some(Table::Projects) => confirm_page::<Project>(&state, &req, &session, id).await,
        Some(Table::AboutSections) => {
            confirm_page::<AboutSection>(&state, &req, &session, id).await
        }
        None => HttpResponse::NotFound().body("Unknown tab"),
    }
}

#[post("/admin/{tab}/{id}/delete")]
pub async fn perform_delete(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<(String, Uuid)>,
    form: web::Form<DeleteForm>,
) -> impl Responder {
    let session = match require_session(&state, &req).await {
        Ok(session) => session,
        Err(resp) => return resp,
    };
    let (tab, id) = path.into_inner();
    let confirmed = form.confirmed();

    match tab_table(&tab) {
        Some(Table::BlogPosts) => {
            delete_row::<BlogPost>(&state, &req, &session, id, confirmed).await
        }
        Some(Table::Projects) => delete_row::<Project>(&state, &req, &session, id, confirmed).await,
        Some(Table::AboutSections) => {
            delete_row::<AboutSection>(&state, &req, &session, id, confirmed).await
        }
        None => HttpResponse::NotFound().body("Unknown tab"),
    }
}

#[get("/admin/uploads/{id}")]
pub async fn upload_progress(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<Uuid>,
) -> impl Responder {
    if let Err(resp) = require_session(&state, &req).await {
        return resp;
    }

    match state.progress.get(path.into_inner()) {
        Some(percent) => HttpResponse::Ok().json(serde_json::json!({ "percent": percent })),
        None => HttpResponse::NotFound().json(serde_json::json!({ "percent": null })),
    }
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(admin_dashboard)
        .service(confirm_delete)
        .service(perform_delete)
        .service(upload_progress);
}
