use serde::Serialize;

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum SharePlatform {
    Twitter,
    Facebook,
    LinkedIn,
    /// Whatever the browser's own share sheet offers.
    Native,
}

impl SharePlatform {
    pub const LINKED: [SharePlatform; 3] = [Self::Twitter, Self::Facebook, Self::LinkedIn];

    /// Unknown names fall through to [`SharePlatform::Native`].
    pub fn parse(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "twitter" | "x" => Self::Twitter,
            "facebook" => Self::Facebook,
            "linkedin" => Self::LinkedIn,
            _ => Self::Native,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Twitter => "twitter",
            Self::Facebook => "facebook",
            Self::LinkedIn => "linkedin",
            Self::Native => "native",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Twitter => "Twitter",
            Self::Facebook => "Facebook",
            Self::LinkedIn => "LinkedIn",
            Self::Native => "More",
        }
    }
}

impl std::fmt::Display for SharePlatform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct NativeShare {
    pub title: String,
    pub text: String,
    pub url: String,
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub enum ShareAction {
    /// Open this URL in a popup.
    Open(String),
    /// Hand the payload to the platform share capability.
    Native(NativeShare),
}

pub fn share_text(title: &str) -> String {
    format!("Check out this post: {title}")
}

/// Percent-encodes like `encodeURIComponent`, leaving `!'()*` as they are.
pub fn encode_component(value: &str) -> String {
    let mut out = urlencoding::encode(value).into_owned();
    for (escaped, raw) in [("%21", "!"), ("%27", "'"), ("%28", "("), ("%29", ")"), ("%2A", "*")] {
        out = out.replace(escaped, raw);
    }
    out
}

pub fn share_action(platform: SharePlatform, title: &str, page_url: &str) -> ShareAction {
    let url = encode_component(page_url);

    match platform {
        SharePlatform::Twitter => ShareAction::Open(format!(
            "https://twitter.com/intent/tweet?text={}&url={}",
            encode_component(&share_text(title)),
            url
        )),
        SharePlatform::Facebook => ShareAction::Open(format!(
            "https://www.facebook.com/sharer/sharer.php?u={url}"
        )),
        SharePlatform::LinkedIn => ShareAction::Open(format!(
            "https://www.linkedin.com/sharing/share-offsite/?url={url}"
        )),
        SharePlatform::Native => ShareAction::Native(NativeShare {
            title: title.to_string(),
            text: share_text(title),
            url: page_url.to_string(),
        }),
    }
}
