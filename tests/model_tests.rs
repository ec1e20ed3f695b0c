mod common;

#[cfg(test)]
pub mod model_tests {
    use chrono::{TimeZone, Utc};
    use uuid::Uuid;

    use super::common::*;

    use portfolio::common::*;
    use portfolio::models::*;
    use portfolio::services::{Notice, Outcome};

    #[test]
    fn test_icon_from_name_success() {
        assert_eq!(Icon::from_name("code"), Icon::Code);
        assert_eq!(Icon::from_name("book-open"), Icon::BookOpen);
        assert_eq!(Icon::from_name("BookOpen"), Icon::BookOpen);
        assert_eq!(Icon::from_name(" book_open "), Icon::BookOpen);
        assert_eq!(Icon::from_name("Heart"), Icon::Heart);
        assert_eq!(Icon::from_name("email"), Icon::Mail);
    }

    #[test]
    fn test_icon_from_name_fails_on_unknown_name() {
        assert_eq!(Icon::from_name("rocket"), Icon::Fallback);
        assert_eq!(Icon::from_name(""), Icon::Fallback);
    }

    #[test]
    fn test_icon_known_names_roundtrip() {
        for icon in Icon::KNOWN {
            assert_eq!(Icon::from_name(icon.as_str()), icon);
            assert!(icon.svg().starts_with("<svg"));
            assert!(icon.svg().contains(&format!("icon-{}", icon.as_str())));
        }
    }

    #[test]
    fn test_table_from_str_success() {
        for table in Table::ALL {
            assert_eq!(table.as_str().parse::<Table>().unwrap(), table);
        }
        assert!(Table::BlogPosts == "blog_posts");
    }

    #[test]
    fn test_table_from_str_fails_on_unknown_table() {
        assert!("users".parse::<Table>().is_err());
    }

    #[test]
    fn test_order_spec_to_query_success() {
        assert_eq!(OrderSpec::desc("created_at").to_query(), "created_at.desc");
        assert_eq!(OrderSpec::asc("title").to_query(), "title.asc");
    }

    #[test]
    fn test_blog_post_draft_with_video_url_success() {
        let draft = post_draft("T", "C").with_video_url(Some("  https://v.example/a.mp4 ".into()));
        assert_eq!(draft.video_url.as_deref(), Some("https://v.example/a.mp4"));

        let draft = post_draft("T", "C").with_video_url(Some("   ".into()));
        assert!(draft.video_url.is_none());
    }

    #[test]
    fn test_blog_post_draft_validate_fails_on_bad_video_url() {
        let draft = post_draft("T", "C").with_video_url(Some("ftp://files/a.mp4".into()));
        assert!(matches!(draft.validate(), Err(EditorError::InvalidUrl("video_url"))));
    }

    #[test]
    fn test_blog_post_display_date_success() {
        let post = BlogPost {
            id: Uuid::new_v4(),
            title: "T".into(),
            content: "C".into(),
            video_url: Some(String::new()),
            created_at: Utc.with_ymd_and_hms(2024, 3, 7, 12, 0, 0).unwrap(),
            user_id: Uuid::new_v4(),
        };

        assert_eq!(post.display_date(), "3/7/2024");
        assert!(!post.has_video());
    }

    #[test]
    fn test_blog_post_deserialize_success_on_missing_video_url() {
        let post: BlogPost = serde_json::from_value(serde_json::json!({
            "id": Uuid::nil(),
            "title": "T",
            "content": "C",
            "created_at": "2024-03-07T12:00:00.000000+00:00",
            "user_id": Uuid::nil(),
        }))
        .unwrap();

        assert!(post.video_url.is_none());
    }

    #[test]
    fn test_about_section_draft_validate_fails_on_missing_icon() {
        let draft = about_draft("Yoga", " ");
        assert!(matches!(draft.validate(), Err(EditorError::Validation("icon"))));
    }

    #[test]
    fn test_notice_parse_success() {
        assert_eq!(
            Notice::parse("blog_posts.created"),
            Some(Notice::Row(Table::BlogPosts, Outcome::Created))
        );
        assert_eq!(Notice::parse("upload_error"), Some(Notice::UploadFailed));
        assert_eq!(
            Notice::parse_list("upload_error, projects.delete_error,bogus"),
            vec![
                Notice::UploadFailed,
                Notice::Row(Table::Projects, Outcome::DeleteFailed)
            ]
        );
    }

    #[test]
    fn test_notice_parse_fails_on_unknown_code() {
        assert_eq!(Notice::parse("blog_posts.exploded"), None);
        assert_eq!(Notice::parse("users.created"), None);
        assert_eq!(Notice::parse(""), None);
    }

    #[test]
    fn test_notice_join_roundtrip() {
        let notices = vec![
            Notice::UploadFailed,
            Notice::Row(Table::BlogPosts, Outcome::Created),
        ];
        let joined = Notice::join(&notices);

        assert_eq!(joined, "upload_error,blog_posts.created");
        assert_eq!(Notice::parse_list(&joined), notices);
    }

    #[test]
    fn test_notice_message_success() {
        let created = Notice::Row(Table::BlogPosts, Outcome::Created);
        assert_eq!(created.message(), "Post created successfully!");
        assert!(!created.is_error());

        let failed = Notice::Row(Table::AboutSections, Outcome::UpdateFailed);
        assert_eq!(failed.message(), "Error updating about section");
        assert!(failed.is_error());

        let login = Notice::Row(Table::Projects, Outcome::LoginRequired);
        assert_eq!(login.message(), "Please log in to manage projects");

        assert_eq!(
            Notice::UploadFailed.message(),
            "Error uploading video. Please try again."
        );
    }
}
