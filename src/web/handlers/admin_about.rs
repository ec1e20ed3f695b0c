use actix_web::{get, post, web, HttpRequest, HttpResponse, Responder};

use portfolio::models::{AboutSection, Icon};
use portfolio::services::EntityEditor;

use crate::web::forms::{AboutForm, AdminQuery};
use crate::web::handlers::admin::{admin_chrome, list_tab, load_tab, submit_editor, Rejected};
use crate::web::helpers::{render, require_session};
use crate::web::state::AppState;
use crate::web::templates::{notice_views, AdminAboutTemplate, FooterView, NavState, NoticeView};

fn about_page(
    state: &AppState,
    req: &HttpRequest,
    menu: Option<&str>,
    sections: Vec<AboutSection>,
    editor: &EntityEditor<AboutSection>,
    notices: Vec<NoticeView>,
    error: Option<String>,
) -> HttpResponse {
    render(AdminAboutTemplate {
        nav: NavState::new(&state.config, req.path(), menu),
        footer: FooterView::new(&state.config),
        admin: admin_chrome(editor, notices, error),
        draft: editor.draft().clone(),
        sections,
        icon_choices: Icon::KNOWN.iter().map(Icon::as_str).collect(),
    })
}

#[get("/admin/about")]
pub async fn about_tab(
    state: web::Data<AppState>,
    req: HttpRequest,
    query: web::Query<AdminQuery>,
) -> impl Responder {
    let session = match require_session(&state, &req).await {
        Ok(session) => session,
        Err(resp) => return resp,
    };

    let tab = load_tab::<AboutSection>(&state, &session, query.edit).await;
    about_page(
        &state,
        &req,
        query.menu.as_deref(),
        tab.rows,
        &tab.editor,
        notice_views(query.notice.as_deref()),
        None,
    )
}

#[post("/admin/about")]
pub async fn about_submit(
    state: web::Data<AppState>,
    req: HttpRequest,
    form: web::Form<AboutForm>,
) -> impl Responder {
    let session = match require_session(&state, &req).await {
        Ok(session) => session,
        Err(resp) => return resp,
    };

    let editor = EntityEditor::<AboutSection>::from_form(form.id(), form.draft());

    match submit_editor(&state, &req, &session, editor, Vec::new()).await {
        Ok(resp) => resp,
        Err(Rejected {
            editor,
            notices,
            error,
        }) => {
            let sections = list_tab::<AboutSection>(&state, &session).await;
            about_page(
                &state,
                &req,
                None,
                sections,
                &editor,
                notices.iter().map(NoticeView::from).collect(),
                error,
            )
        }
    }
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(about_tab).service(about_submit);
}
