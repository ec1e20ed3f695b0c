mod common;

#[cfg(test)]
pub mod config_tests {
    use super::common::*;

    use portfolio::common::ConfigError;
    use portfolio::config::Config;

    #[test]
    fn test_config_defaults_success() {
        let config = config_from(&[]);

        assert_eq!(config.bind_addr, "0.0.0.0:8080");
        assert!(config.backend.is_none());
        assert!(config.is_preview());
        assert_eq!(config.video_bucket, "blog-videos");
        assert!(config.cookie_secure);
        assert_eq!(config.preview_admin_email, "admin@localhost");
        assert_eq!(config.site_url, "http://localhost:8080");
    }

    #[test]
    fn test_config_backend_success() {
        let config = config_from(&[
            ("SUPABASE_URL", "https://abc.supabase.co/"),
            ("SUPABASE_ANON_KEY", "anon-key"),
            ("SITE_URL", "https://me.example/"),
            ("COOKIE_SECURE", "false"),
            ("PROFILE_NAME", "Jane Doe"),
        ]);

        let backend = config.backend.as_ref().expect("backend should be configured");
        assert_eq!(backend.url, "https://abc.supabase.co");
        assert_eq!(backend.anon_key, "anon-key");
        assert!(!config.is_preview());
        assert_eq!(config.site_url, "https://me.example");
        assert!(!config.cookie_secure);
        assert_eq!(config.profile.name, "Jane Doe");
    }

    #[test]
    fn test_config_backend_fails_on_half_configured() {
        let config = config_from(&[("SUPABASE_URL", "https://abc.supabase.co")]);
        assert!(config.backend.is_none());
    }

    #[test]
    fn test_config_fails_on_non_http_backend_url() {
        let result = Config::from_lookup(|key| match key {
            "SUPABASE_URL" => Some("abc.supabase.co".to_string()),
            "SUPABASE_ANON_KEY" => Some("anon".to_string()),
            _ => None,
        });

        assert!(matches!(
            result,
            Err(ConfigError::Invalid { key: "SUPABASE_URL", .. })
        ));
    }

    #[test]
    fn test_config_fails_on_bad_cookie_flag() {
        let result = Config::from_lookup(|key| (key == "COOKIE_SECURE").then(|| "maybe".to_string()));

        assert!(matches!(
            result,
            Err(ConfigError::Invalid { key: "COOKIE_SECURE", .. })
        ));
    }

    #[test]
    fn test_content_security_policy_success() {
        let config = config_from(&[
            ("SUPABASE_URL", "https://abc.supabase.co"),
            ("SUPABASE_ANON_KEY", "anon"),
        ]);
        let csp = config.content_security_policy();

        assert!(csp.starts_with(
            "default-src 'self' https://abc.supabase.co https://images.unsplash.com;"
        ));
        assert!(csp.contains("connect-src 'self' https://abc.supabase.co;"));
        assert!(csp.contains("frame-ancestors 'none'"));
    }

    #[test]
    fn test_content_security_policy_success_on_preview() {
        let csp = config_from(&[]).content_security_policy();

        assert!(csp.starts_with(
            "default-src 'self' http://localhost:8080 https://images.unsplash.com;"
        ));
        assert!(csp.contains("img-src 'self' http://localhost:8080 https://images.unsplash.com data:;"));
        assert!(csp.contains("connect-src 'self';"));
    }
}
