pub use about_section::*;
pub use blog_post::*;
pub use icon::*;
pub use project::*;
pub use record::{Draft, Record};
pub use session::*;
pub use table::*;

mod about_section;
mod blog_post;
mod icon;
mod project;
mod record;
mod session;
mod table;
