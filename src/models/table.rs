use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Table {
    BlogPosts,
    Projects,
    AboutSections,
}

impl Table {
    pub const ALL: [Table; 3] = [Self::BlogPosts, Self::Projects, Self::AboutSections];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BlogPosts => "blog_posts",
            Self::Projects => "projects",
            Self::AboutSections => "about_sections",
        }
    }

    /// Singular, human-facing row name ("post", "about section").
    pub fn label(&self) -> &'static str {
        match self {
            Self::BlogPosts => "post",
            Self::Projects => "project",
            Self::AboutSections => "about section",
        }
    }
}

impl std::fmt::Display for Table {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl PartialEq<&str> for Table {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl std::str::FromStr for Table {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "blog_posts" => Ok(Self::BlogPosts),
            "projects" => Ok(Self::Projects),
            "about_sections" => Ok(Self::AboutSections),
            _ => Err(format!("invalid table: {}", s)),
        }
    }
}

/// Column ordering for a list request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderSpec {
    pub column: String,
    pub ascending: bool,
}

impl OrderSpec {
    pub fn asc(column: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            ascending: true,
        }
    }

    pub fn desc(column: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            ascending: false,
        }
    }

    /// `column.asc` / `column.desc`, the form the REST endpoint takes.
    pub fn to_query(&self) -> String {
        let direction = if self.ascending { "asc" } else { "desc" };
        format!("{}.{}", self.column, direction)
    }
}
