mod common;

#[cfg(test)]
pub mod backend_tests {
    use chrono::{Duration, Utc};
    use serde_json::json;
    use uuid::Uuid;

    use super::common::*;

    use portfolio::backend::records::*;
    use portfolio::backend::supabase::error_message;
    use portfolio::backend::{Backend, MemoryBackend, SupabaseBackend};
    use portfolio::common::*;
    use portfolio::models::*;

    #[tokio::test]
    async fn test_sign_in_success() {
        let fx = Fixture::new();
        let session = fx.sign_in().await;

        assert_eq!(session.user, fx.admin);
        assert!(!session.is_expired(Utc::now()));

        let found = fx.backend.get_session(&session.access_token).await.unwrap();
        assert_eq!(found, Some(session.clone()));

        let user = fx.backend.get_user(&session.access_token).await.unwrap();
        assert_eq!(user, Some(fx.admin.clone()));
    }

    #[tokio::test]
    async fn test_sign_in_fails_on_wrong_password() {
        let fx = Fixture::new();

        let err = fx.backend.sign_in(ADMIN_EMAIL, "nope").await.unwrap_err();
        assert!(matches!(err, BackendError::InvalidCredentials));
    }

    #[tokio::test]
    async fn test_get_session_fails_on_unknown_token() {
        let fx = Fixture::new();

        let found = fx.backend.get_session("not-a-token").await.unwrap();
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn test_sign_out_success() {
        let fx = Fixture::new();
        let session = fx.sign_in().await;

        fx.backend.sign_out(&session.access_token).await.unwrap();

        let found = fx.backend.get_session(&session.access_token).await.unwrap();
        assert!(found.is_none());
    }

    #[test]
    fn test_session_is_expired_success() {
        let session = Session {
            access_token: "t".to_string(),
            refresh_token: None,
            expires_at: Some(Utc::now() - Duration::seconds(1)),
            user: AuthUser {
                id: Uuid::new_v4(),
                email: None,
            },
        };
        assert!(session.is_expired(Utc::now()));

        let open_ended = Session {
            expires_at: None,
            ..session
        };
        assert!(!open_ended.is_expired(Utc::now()));
    }

    #[tokio::test]
    async fn test_list_posts_newest_first() {
        let fx = Fixture::new();
        let session = fx.sign_in().await;
        let token = Some(session.access_token.as_str());

        for (title, created_at) in [
            ("old", "2025-01-01T00:00:00Z"),
            ("new", "2025-03-01T00:00:00Z"),
            ("mid", "2025-02-01T00:00:00Z"),
        ] {
            fx.backend
                .insert(
                    token,
                    Table::BlogPosts,
                    json!({
                        "title": title,
                        "content": "body",
                        "created_at": created_at,
                        "user_id": fx.admin.id,
                    }),
                )
                .await
                .unwrap();
        }

        let posts = list_records::<BlogPost>(&fx.backend, None).await.unwrap();
        let titles: Vec<_> = posts.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["new", "mid", "old"]);
        assert!(posts.iter().all(|p| p.video_url.is_none()));
    }

    #[tokio::test]
    async fn test_list_projects_by_title() {
        let fx = Fixture::seeded();
        let session = fx.sign_in().await;
        let token = Some(session.access_token.as_str());

        insert_record::<Project>(&fx.backend, token, &project_draft("Alpha"), fx.admin.id)
            .await
            .unwrap();

        let projects = list_records::<Project>(&fx.backend, None).await.unwrap();
        let titles: Vec<_> = projects.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(
            titles,
            vec!["Alpha", "Legal Services Platform", "Railway Reservation System"]
        );
    }

    #[tokio::test]
    async fn test_insert_record_stamps_owner() {
        let fx = Fixture::new();
        let session = fx.sign_in().await;

        let section = insert_record::<AboutSection>(
            &fx.backend,
            Some(&session.access_token),
            &about_draft("Reading", "book-open"),
            fx.admin.id,
        )
        .await
        .unwrap();

        assert_eq!(section.user_id, fx.admin.id);
        assert_eq!(section.resolved_icon(), Icon::BookOpen);
    }

    #[tokio::test]
    async fn test_update_fails_on_missing_row() {
        let fx = Fixture::new();

        let err = update_record::<Project>(&fx.backend, None, Uuid::new_v4(), &project_draft("X"))
            .await
            .unwrap_err();
        assert!(matches!(err, BackendError::NotFound { table: Table::Projects, .. }));
    }

    #[tokio::test]
    async fn test_find_record_success() {
        let fx = Fixture::seeded();
        let first = list_records::<AboutSection>(&fx.backend, None).await.unwrap()[0].clone();

        let found = find_record::<AboutSection>(&fx.backend, None, first.id).await.unwrap();
        assert_eq!(found, Some(first));

        let missing = find_record::<AboutSection>(&fx.backend, None, Uuid::new_v4())
            .await
            .unwrap();
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn test_upload_fails_on_existing_object() {
        let fx = Fixture::new();
        let noop: portfolio::backend::ProgressFn = std::sync::Arc::new(|_, _| {});

        fx.backend
            .upload_object(None, "b", "videos/a.mp4", vec![1], "video/mp4", noop.clone())
            .await
            .unwrap();
        let err = fx
            .backend
            .upload_object(None, "b", "videos/a.mp4", vec![2], "video/mp4", noop)
            .await
            .unwrap_err();

        assert!(matches!(err, BackendError::Upload { .. }));
        assert_eq!(fx.backend.object("b", "videos/a.mp4"), Some(vec![1]));
    }

    #[tokio::test]
    async fn test_memory_public_url_success_on_site_base() {
        let backend = MemoryBackend::new().with_public_base("http://localhost:8080/");
        let noop: portfolio::backend::ProgressFn = std::sync::Arc::new(|_, _| {});

        let url = backend
            .upload_object(None, "blog-videos", "videos/a.webm", vec![9; 4], "video/webm", noop)
            .await
            .unwrap();

        assert_eq!(
            url,
            "http://localhost:8080/storage/v1/object/public/blog-videos/videos/a.webm"
        );
        assert_eq!(
            backend.object_with_type("blog-videos", "videos/a.webm"),
            Some((vec![9; 4], "video/webm".to_string()))
        );
        assert!(backend.object_with_type("blog-videos", "videos/b.webm").is_none());
    }

    #[test]
    fn test_supabase_urls_success() {
        let backend = SupabaseBackend::new("https://abc.supabase.co/", "anon");
        let id = Uuid::nil();

        assert_eq!(
            backend.table_url(Table::BlogPosts, &OrderSpec::desc("created_at")),
            "https://abc.supabase.co/rest/v1/blog_posts?select=*&order=created_at.desc"
        );
        assert_eq!(
            backend.insert_url(Table::AboutSections),
            "https://abc.supabase.co/rest/v1/about_sections"
        );
        assert_eq!(
            backend.row_url(Table::Projects, id),
            format!("https://abc.supabase.co/rest/v1/projects?id=eq.{id}")
        );
        assert_eq!(
            backend.auth_url("logout"),
            "https://abc.supabase.co/auth/v1/logout"
        );
        assert_eq!(
            backend.object_url("blog-videos", "videos/x.mp4"),
            "https://abc.supabase.co/storage/v1/object/blog-videos/videos/x.mp4"
        );
        assert_eq!(
            backend.public_url("blog-videos", "videos/x.mp4"),
            "https://abc.supabase.co/storage/v1/object/public/blog-videos/videos/x.mp4"
        );
    }

    #[test]
    fn test_error_message_success() {
        assert_eq!(error_message(r#"{"message":"duplicate key"}"#), "duplicate key");
        assert_eq!(error_message(r#"{"msg":"bad jwt"}"#), "bad jwt");
        assert_eq!(
            error_message(r#"{"error":"invalid_grant","error_description":"Invalid login credentials"}"#),
            "Invalid login credentials"
        );
    }

    #[test]
    fn test_error_message_success_on_plain_body() {
        assert_eq!(error_message("  Bad Gateway \n"), "Bad Gateway");
    }
}
