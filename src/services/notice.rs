use crate::models::Table;

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Outcome {
    Created,
    Updated,
    Deleted,
    CreateFailed,
    UpdateFailed,
    DeleteFailed,
    LoginRequired,
}

impl Outcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::Updated => "updated",
            Self::Deleted => "deleted",
            Self::CreateFailed => "create_error",
            Self::UpdateFailed => "update_error",
            Self::DeleteFailed => "delete_error",
            Self::LoginRequired => "login_required",
        }
    }

    fn parse(s: &str) -> Option<Self> {
        Some(match s {
            "created" => Self::Created,
            "updated" => Self::Updated,
            "deleted" => Self::Deleted,
            "create_error" => Self::CreateFailed,
            "update_error" => Self::UpdateFailed,
            "delete_error" => Self::DeleteFailed,
            "login_required" => Self::LoginRequired,
            _ => return None,
        })
    }
}

/// A one-shot alert carried across a redirect as `?notice=code[,code]`.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Notice {
    Row(Table, Outcome),
    UploadFailed,
}

impl Notice {
    pub fn code(&self) -> String {
        match self {
            Self::Row(table, outcome) => format!("{}.{}", table, outcome.as_str()),
            Self::UploadFailed => "upload_error".to_string(),
        }
    }

    pub fn parse(code: &str) -> Option<Self> {
        if code == "upload_error" {
            return Some(Self::UploadFailed);
        }
        let (table, outcome) = code.split_once('.')?;
        Some(Self::Row(table.parse().ok()?, Outcome::parse(outcome)?))
    }

    /// Unknown codes are dropped.
    pub fn parse_list(codes: &str) -> Vec<Self> {
        codes
            .split(',')
            .filter_map(|c| Self::parse(c.trim()))
            .collect()
    }

    pub fn join(notices: &[Notice]) -> String {
        notices
            .iter()
            .map(Notice::code)
            .collect::<Vec<_>>()
            .join(",")
    }

    pub fn is_error(&self) -> bool {
        match self {
            Self::Row(_, outcome) => matches!(
                outcome,
                Outcome::CreateFailed
                    | Outcome::UpdateFailed
                    | Outcome::DeleteFailed
                    | Outcome::LoginRequired
            ),
            Self::UploadFailed => true,
        }
    }

    pub fn message(&self) -> String {
        let (table, outcome) = match self {
            Self::UploadFailed => return "Error uploading video. Please try again.".to_string(),
            Self::Row(table, outcome) => (table, outcome),
        };
        let label = table.label();

        match outcome {
            Outcome::Created => format!("{} created successfully!", capitalize(label)),
            Outcome::Updated => format!("{} updated successfully!", capitalize(label)),
            Outcome::Deleted => format!("{} deleted successfully!", capitalize(label)),
            Outcome::CreateFailed => format!("Error creating {label}"),
            Outcome::UpdateFailed => format!("Error updating {label}"),
            Outcome::DeleteFailed => format!("Error deleting {label}"),
            Outcome::LoginRequired => match table {
                Table::BlogPosts => "Please log in to create posts".to_string(),
                Table::Projects => "Please log in to manage projects".to_string(),
                Table::AboutSections => "Please log in to manage about sections".to_string(),
            },
        }
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
