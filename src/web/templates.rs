use askama::Template;
use chrono::{Datelike, Utc};

use portfolio::config::Config;
use portfolio::models::{AboutSection, AboutSectionDraft, BlogPost, Icon, Project, ProjectDraft};
use portfolio::services::landing::PostCard;
use portfolio::services::share::NativeShare;
use portfolio::services::Notice;

/// Site header. The mobile menu is the only stateful part.
pub struct NavState {
    pub brand: String,
    pub menu_open: bool,
    pub toggle_href: String,
}

impl NavState {
    pub fn new(config: &Config, path: &str, menu: Option<&str>) -> Self {
        let menu_open = menu == Some("open");
        let toggle_href = if menu_open {
            path.to_string()
        } else {
            format!("{path}?menu=open")
        };

        Self {
            brand: config.profile.name.clone(),
            menu_open,
            toggle_href,
        }
    }
}

pub struct FooterView {
    pub name: String,
    pub github_url: String,
    pub instagram_url: String,
    pub email: String,
    pub year: i32,
    pub github_icon: String,
    pub instagram_icon: String,
    pub mail_icon: String,
}

impl FooterView {
    pub fn new(config: &Config) -> Self {
        Self {
            name: config.profile.name.clone(),
            github_url: config.profile.github_url.clone(),
            instagram_url: config.profile.instagram_url.clone(),
            email: config.profile.email.clone(),
            year: Utc::now().year(),
            github_icon: Icon::Github.svg(),
            instagram_icon: Icon::Instagram.svg(),
            mail_icon: Icon::Mail.svg(),
        }
    }
}

pub struct NoticeView {
    pub message: String,
    pub is_error: bool,
}

impl From<&Notice> for NoticeView {
    fn from(notice: &Notice) -> Self {
        Self {
            message: notice.message(),
            is_error: notice.is_error(),
        }
    }
}

pub fn notice_views(codes: Option<&str>) -> Vec<NoticeView> {
    codes
        .map(Notice::parse_list)
        .unwrap_or_default()
        .iter()
        .map(NoticeView::from)
        .collect()
}

pub struct ShareLinkView {
    pub label: String,
    pub href: String,
}

pub struct PostView {
    pub card: PostCard,
    pub share_open: bool,
    pub share_toggle_href: String,
    pub share_links: Vec<ShareLinkView>,
}

pub struct AboutCardView {
    pub title: String,
    pub description: String,
    pub icon_svg: String,
}

impl From<&AboutSection> for AboutCardView {
    fn from(section: &AboutSection) -> Self {
        Self {
            title: section.title.clone(),
            description: section.description.clone(),
            icon_svg: section.resolved_icon().svg(),
        }
    }
}

pub struct HeroView {
    pub name: String,
    pub headline: String,
    pub tagline: String,
    pub studies: String,
    pub avatar_url: String,
}

impl HeroView {
    pub fn new(config: &Config) -> Self {
        let p = &config.profile;
        Self {
            name: p.name.clone(),
            headline: p.headline.clone(),
            tagline: p.tagline.clone(),
            studies: p.studies.clone(),
            avatar_url: p.avatar_url.clone(),
        }
    }
}

#[derive(Template)]
#[template(path = "public/index.html")]
pub struct LandingTemplate {
    pub nav: NavState,
    pub footer: FooterView,
    pub hero: HeroView,
    pub about: Vec<AboutCardView>,
    pub projects: Vec<Project>,
    pub posts: Vec<PostView>,
    pub github_icon: String,
}

#[derive(Template)]
#[template(path = "public/share.html")]
pub struct NativeShareTemplate {
    pub nav: NavState,
    pub footer: FooterView,
    pub share: NativeShare,
    pub links: Vec<ShareLinkView>,
}

#[derive(Template)]
#[template(path = "public/not_found.html")]
pub struct NotFoundTemplate {
    pub nav: NavState,
    pub footer: FooterView,
}

#[derive(Template)]
#[template(path = "auth/login.html")]
pub struct LoginTemplate {
    pub nav: NavState,
    pub footer: FooterView,
    pub notices: Vec<NoticeView>,
    pub error: Option<String>,
    pub preview: bool,
}

pub struct PostRow {
    pub id: String,
    pub title: String,
    pub date: String,
    pub has_video: bool,
}

impl From<&BlogPost> for PostRow {
    fn from(post: &BlogPost) -> Self {
        Self {
            id: post.id.to_string(),
            title: post.title.clone(),
            date: post.display_date(),
            has_video: post.has_video(),
        }
    }
}

/// Fields shared by every dashboard tab.
pub struct AdminChrome {
    pub active_tab: &'static str,
    pub notices: Vec<NoticeView>,
    pub editing: bool,
    pub editing_id: String,
    pub error: Option<String>,
}

#[derive(Template)]
#[template(path = "admin/posts.html")]
pub struct AdminPostsTemplate {
    pub nav: NavState,
    pub footer: FooterView,
    pub admin: AdminChrome,
    pub form_title: String,
    pub form_content: String,
    pub form_video_url: String,
    pub upload_id: String,
    pub posts: Vec<PostRow>,
}

#[derive(Template)]
#[template(path = "admin/projects.html")]
pub struct AdminProjectsTemplate {
    pub nav: NavState,
    pub footer: FooterView,
    pub admin: AdminChrome,
    pub draft: ProjectDraft,
    pub projects: Vec<Project>,
}

#[derive(Template)]
#[template(path = "admin/about.html")]
pub struct AdminAboutTemplate {
    pub nav: NavState,
    pub footer: FooterView,
    pub admin: AdminChrome,
    pub draft: AboutSectionDraft,
    pub sections: Vec<AboutSection>,
    pub icon_choices: Vec<&'static str>,
}

#[derive(Template)]
#[template(path = "admin/confirm_delete.html")]
pub struct ConfirmDeleteTemplate {
    pub nav: NavState,
    pub footer: FooterView,
    pub tab: &'static str,
    pub id: String,
    pub label: &'static str,
    pub title: String,
}
