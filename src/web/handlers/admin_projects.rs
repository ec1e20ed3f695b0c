use actix_web::{get, post, web, HttpRequest, HttpResponse, Responder};

use portfolio::models::Project;
use portfolio::services::EntityEditor;

use crate::web::forms::{AdminQuery, ProjectForm};
use crate::web::handlers::admin::{admin_chrome, list_tab, load_tab, submit_editor, Rejected};
use crate::web::helpers::{render, require_session};
use crate::web::state::AppState;
use crate::web::templates::{notice_views, AdminProjectsTemplate, FooterView, NavState, NoticeView};

fn projects_page(
    state: &AppState,
    req: &HttpRequest,
    menu: Option<&str>,
    projects: Vec<Project>,
    editor: &EntityEditor<Project>,
    notices: Vec<NoticeView>,
    error: Option<String>,
) -> HttpResponse {
    render(AdminProjectsTemplate {
        nav: NavState::new(&state.config, req.path(), menu),
        footer: FooterView::new(&state.config),
        admin: admin_chrome(editor, notices, error),
        draft: editor.draft().clone(),
        projects,
    })
}

#[get("/admin/projects")]
pub async fn projects_tab(
    state: web::Data<AppState>,
    req: HttpRequest,
    query: web::Query<AdminQuery>,
) -> impl Responder {
    let session = match require_session(&state, &req).await {
        Ok(session) => session,
        Err(resp) => return resp,
    };

    let tab = load_tab::<Project>(&state, &session, query.edit).await;
    projects_page(
        &state,
        &req,
        query.menu.as_deref(),
        tab.rows,
        &tab.editor,
        notice_views(query.notice.as_deref()),
        None,
    )
}

#[post("/admin/projects")]
pub async fn projects_submit(
    state: web::Data<AppState>,
    req: HttpRequest,
    form: web::Form<ProjectForm>,
) -> impl Responder {
    let session = match require_session(&state, &req).await {
        Ok(session) => session,
        Err(resp) => return resp,
    };

    let editor = EntityEditor::<Project>::from_form(form.id(), form.draft());

    match submit_editor(&state, &req, &session, editor, Vec::new()).await {
        Ok(resp) => resp,
        Err(Rejected {
            editor,
            notices,
            error,
        }) => {
            let projects = list_tab::<Project>(&state, &session).await;
            projects_page(
                &state,
                &req,
                None,
                projects,
                &editor,
                notices.iter().map(NoticeView::from).collect(),
                error,
            )
        }
    }
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(projects_tab).service(projects_submit);
}
