#[cfg(test)]
pub mod share_tests {
    use portfolio::services::share::*;

    const PAGE: &str = "https://example.com/#post-1";

    #[test]
    fn test_share_action_twitter_success() {
        let action = share_action(SharePlatform::Twitter, "Hello World", PAGE);

        assert_eq!(
            action,
            ShareAction::Open(
                "https://twitter.com/intent/tweet?text=Check%20out%20this%20post%3A%20Hello%20World\
                 &url=https%3A%2F%2Fexample.com%2F%23post-1"
                    .to_string()
            )
        );
    }

    #[test]
    fn test_share_action_facebook_success() {
        let action = share_action(SharePlatform::Facebook, "Hello", PAGE);

        assert_eq!(
            action,
            ShareAction::Open(
                "https://www.facebook.com/sharer/sharer.php?u=https%3A%2F%2Fexample.com%2F%23post-1"
                    .to_string()
            )
        );
    }

    #[test]
    fn test_share_action_linkedin_success() {
        let action = share_action(SharePlatform::LinkedIn, "Hello", PAGE);

        assert_eq!(
            action,
            ShareAction::Open(
                "https://www.linkedin.com/sharing/share-offsite/?url=https%3A%2F%2Fexample.com%2F%23post-1"
                    .to_string()
            )
        );
    }

    #[test]
    fn test_share_action_native_success() {
        let action = share_action(SharePlatform::Native, "Rust & Yoga", PAGE);

        assert_eq!(
            action,
            ShareAction::Native(NativeShare {
                title: "Rust & Yoga".to_string(),
                text: "Check out this post: Rust & Yoga".to_string(),
                url: PAGE.to_string(),
            })
        );
    }

    #[test]
    fn test_share_action_twitter_encodes_reserved_characters() {
        match share_action(SharePlatform::Twitter, "A&B?", PAGE) {
            ShareAction::Open(url) => {
                assert!(url.contains("text=Check%20out%20this%20post%3A%20A%26B%3F&"));
            }
            other => panic!("expected a URL, got {:?}", other),
        }
    }

    #[test]
    fn test_encode_component_success() {
        assert_eq!(encode_component("Hello (world)!"), "Hello%20(world)!");
        assert_eq!(encode_component("it's *"), "it's%20*");
        assert_eq!(encode_component("a/b?c=d&e"), "a%2Fb%3Fc%3Dd%26e");
        assert_eq!(encode_component("100%"), "100%25");
    }

    #[test]
    fn test_share_action_twitter_keeps_component_safe_characters() {
        match share_action(SharePlatform::Twitter, "Hello (world)!", PAGE) {
            ShareAction::Open(url) => {
                assert!(url.contains("text=Check%20out%20this%20post%3A%20Hello%20(world)!&"));
            }
            other => panic!("expected a URL, got {:?}", other),
        }
    }

    #[test]
    fn test_share_platform_parse_success() {
        assert_eq!(SharePlatform::parse("twitter"), SharePlatform::Twitter);
        assert_eq!(SharePlatform::parse("X"), SharePlatform::Twitter);
        assert_eq!(SharePlatform::parse("Facebook"), SharePlatform::Facebook);
        assert_eq!(SharePlatform::parse("linkedin"), SharePlatform::LinkedIn);
        assert_eq!(SharePlatform::parse("native"), SharePlatform::Native);
    }

    #[test]
    fn test_share_platform_parse_fails_on_unknown_name() {
        assert_eq!(SharePlatform::parse("myspace"), SharePlatform::Native);
    }

    #[test]
    fn test_share_platform_display_matches_parse() {
        for platform in SharePlatform::LINKED {
            assert_eq!(SharePlatform::parse(&platform.to_string()), platform);
        }
    }
}
