pub mod admin;
pub mod admin_about;
pub mod admin_posts;
pub mod admin_projects;
pub mod auth;
pub mod public;

use actix_web::web;

pub fn configure(cfg: &mut web::ServiceConfig) {
    public::configure(cfg);
    auth::configure(cfg);
    admin::configure(cfg);
    admin_posts::configure(cfg);
    admin_projects::configure(cfg);
    admin_about::configure(cfg);
}
