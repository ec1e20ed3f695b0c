use std::fmt::Display;
use std::str::FromStr;

use crate::common::ConfigError;

#[derive(Debug, Clone)]
pub struct BackendConfig {
    pub url: String,
    pub anon_key: String,
}

/// Hero and footer details of the site owner.
#[derive(Debug, Clone)]
pub struct Profile {
    pub name: String,
    pub headline: String,
    pub tagline: String,
    pub studies: String,
    pub avatar_url: String,
    pub github_url: String,
    pub instagram_url: String,
    pub email: String,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: String,
    /// `None` runs the site against the in-memory preview backend.
    pub backend: Option<BackendConfig>,
    pub site_url: String,
    pub image_cdn: String,
    pub video_bucket: String,
    pub cookie_secure: bool,
    pub preview_admin_email: String,
    pub preview_admin_password: String,
    pub profile: Profile,
}

impl Config {
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup; `load` uses the process env.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let or = |key: &str, default: &str| {
            var(key).unwrap_or_else(|| {
                log::debug!("{key} not set, using default: {default}");
                default.to_string()
            })
        };

        let backend = match (var("SUPABASE_URL"), var("SUPABASE_ANON_KEY")) {
            (Some(url), Some(anon_key)) => {
                if !url.starts_with("https://") && !url.starts_with("http://") {
                    return Err(ConfigError::Invalid {
                        key: "SUPABASE_URL",
                        reason: format!("{url} is not an http(s) URL"),
                    });
                }
                Some(BackendConfig {
                    url: url.trim_end_matches('/').to_string(),
                    anon_key,
                })
            }
            (None, None) => None,
            _ => {
                log::warn!("SUPABASE_URL and SUPABASE_ANON_KEY must be set together; using preview backend");
                None
            }
        };

        Ok(Self {
            bind_addr: or("BIND_ADDR", "0.0.0.0:8080"),
            backend,
            site_url: or("SITE_URL", "http://localhost:8080")
                .trim_end_matches('/')
                .to_string(),
            image_cdn: or("IMAGE_CDN", "https://images.unsplash.com"),
            video_bucket: or("VIDEO_BUCKET", "blog-videos"),
            cookie_secure: parse_or(var("COOKIE_SECURE"), "COOKIE_SECURE", true)?,
            preview_admin_email: or("PREVIEW_ADMIN_EMAIL", "admin@localhost"),
            preview_admin_password: or("PREVIEW_ADMIN_PASSWORD", "admin"),
            profile: Profile {
                name: or("PROFILE_NAME", "Portfolio Owner"),
                headline: or("PROFILE_HEADLINE", "Information Technology Student & Web Developer"),
                tagline: or(
                    "PROFILE_TAGLINE",
                    "Passionate about technology, yoga, and creating impactful solutions",
                ),
                studies: or(
                    "PROFILE_STUDIES",
                    "Currently pursuing B.Tech in Information Technology",
                ),
                avatar_url: or("PROFILE_AVATAR_URL", "/static/avatar.jpg"),
                github_url: or("PROFILE_GITHUB", "https://github.com/"),
                instagram_url: or("PROFILE_INSTAGRAM", "https://www.instagram.com/"),
                email: or("PROFILE_EMAIL", "hello@example.com"),
            },
        })
    }

    pub fn is_preview(&self) -> bool {
        self.backend.is_none()
    }

    /// Scripts, styles and connections limited to this origin plus the
    /// backend and the image CDN.
    pub fn content_security_policy(&self) -> String {
        // Uploaded videos come from the backend, or from the site in preview.
        let media = match &self.backend {
            Some(backend) => backend.url.clone(),
            None => self.site_url.trim_end_matches('/').to_string(),
        };
        let trusted = vec!["'self'".to_string(), media, self.image_cdn.clone()];
        let trusted = trusted.join(" ");

        let backend = self
            .backend
            .as_ref()
            .map(|b| format!(" {}", b.url))
            .unwrap_or_default();

        format!(
            "default-src {trusted}; \
             script-src 'self' 'unsafe-inline'; \
             style-src 'self' 'unsafe-inline'; \
             connect-src 'self'{backend}; \
             img-src {trusted} data:; \
             frame-ancestors 'none'"
        )
    }
}

fn parse_or<T>(value: Option<String>, key: &'static str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: Display,
{
    match value {
        Some(v) => v.parse().map_err(|e: T::Err| ConfigError::Invalid {
            key,
            reason: e.to_string(),
        }),
        None => Ok(default),
    }
}
