use serde::{Deserialize, Serialize};

/// Icons an about section may reference by name.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum Icon {
    Code,
    BookOpen,
    Heart,
    Github,
    Mail,
    Instagram,
    Star,
    Fallback,
}

impl Icon {
    pub const KNOWN: [Icon; 7] = [
        Self::Code,
        Self::BookOpen,
        Self::Heart,
        Self::Github,
        Self::Mail,
        Self::Instagram,
        Self::Star,
    ];

    /// Accepts `book-open`, `book_open`, `BookOpen` and so on.
    /// Unknown names resolve to [`Icon::Fallback`].
    pub fn from_name(name: &str) -> Self {
        let normalized: String = name
            .trim()
            .chars()
            .filter(|c| *c != '-' && *c != '_' && !c.is_whitespace())
            .flat_map(char::to_lowercase)
            .collect();

        match normalized.as_str() {
            "code" => Self::Code,
            "bookopen" | "book" => Self::BookOpen,
            "heart" => Self::Heart,
            "github" => Self::Github,
            "mail" | "email" => Self::Mail,
            "instagram" => Self::Instagram,
            "star" => Self::Star,
            _ => Self::Fallback,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Code => "code",
            Self::BookOpen => "book-open",
            Self::Heart => "heart",
            Self::Github => "github",
            Self::Mail => "mail",
            Self::Instagram => "instagram",
            Self::Star => "star",
            Self::Fallback => "circle",
        }
    }

    fn paths(&self) -> &'static str {
        match self {
            Self::Code => {
                r#"<polyline points="16 18 22 12 16 6"/><polyline points="8 6 2 12 8 18"/>"#
            }
            Self::BookOpen => {
                r#"<path d="M2 3h6a4 4 0 0 1 4 4v14a3 3 0 0 0-3-3H2z"/><path d="M22 3h-6a4 4 0 0 0-4 4v14a3 3 0 0 1 3-3h7z"/>"#
            }
            Self::Heart => {
                r#"<path d="M20.84 4.61a5.5 5.5 0 0 0-7.78 0L12 5.67l-1.06-1.06a5.5 5.5 0 0 0-7.78 7.78l1.06 1.06L12 21.23l7.78-7.78 1.06-1.06a5.5 5.5 0 0 0 0-7.78z"/>"#
            }
            Self::Github => {
                r#"<path d="M15 22v-4a4.8 4.8 0 0 0-1-3.5c3 0 6-2 6-5.5.08-1.25-.27-2.48-1-3.5.28-1.15.28-2.35 0-3.5 0 0-1 0-3 1.5-2.64-.5-5.36-.5-8 0C6 2 5 2 5 2c-.3 1.15-.3 2.35 0 3.5A5.4 5.4 0 0 0 4 9c0 3.5 3 5.5 6 5.5-.39.49-.68 1.05-.85 1.65-.17.6-.22 1.23-.15 1.85v4"/><path d="M9 18c-4.51 2-5-2-7-2"/>"#
            }
            Self::Mail => {
                r#"<rect x="2" y="4" width="20" height="16" rx="2"/><path d="m22 7-10 6L2 7"/>"#
            }
            Self::Instagram => {
                r#"<rect x="2" y="2" width="20" height="20" rx="5"/><path d="M16 11.37A4 4 0 1 1 12.63 8 4 4 0 0 1 16 11.37z"/><line x1="17.5" y1="6.5" x2="17.51" y2="6.5"/>"#
            }
            Self::Star => {
                r#"<polygon points="12 2 15.09 8.26 22 9.27 17 14.14 18.18 21.02 12 17.77 5.82 21.02 7 14.14 2 9.27 8.91 8.26 12 2"/>"#
            }
            Self::Fallback => r#"<circle cx="12" cy="12" r="10"/>"#,
        }
    }

    /// Inline SVG markup, stroke-colored by the surrounding text color.
    pub fn svg(&self) -> String {
        format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" class="icon icon-{}" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true">{}</svg>"#,
            self.as_str(),
            self.paths()
        )
    }
}

impl std::fmt::Display for Icon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
