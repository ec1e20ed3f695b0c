pub mod editor;
pub mod landing;
pub mod markdown;
pub mod notice;
pub mod share;
pub mod upload;

pub use editor::{DeleteOutcome, EditorMode, EntityEditor, SubmitOutcome};
pub use notice::{Notice, Outcome};
pub use share::{share_action, ShareAction, SharePlatform};
