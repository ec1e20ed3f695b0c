#[cfg(test)]
pub mod markdown_tests {
    use portfolio::services::markdown::render_markdown;

    #[test]
    fn test_render_markdown_success() {
        let html = render_markdown("# Title\n\nSome *emphasis* and `code`.");

        assert!(html.contains("<h1>Title</h1>"));
        assert!(html.contains("<em>emphasis</em>"));
        assert!(html.contains("<code>code</code>"));
    }

    #[test]
    fn test_render_markdown_success_on_tables_and_strikethrough() {
        let html = render_markdown("| a | b |\n|---|---|\n| 1 | 2 |\n\n~~gone~~");

        assert!(html.contains("<table>"));
        assert!(html.contains("<del>gone</del>"));
    }

    #[test]
    fn test_render_markdown_escapes_raw_html() {
        let html = render_markdown("<script>alert(1)</script>\n\nhi <b>there</b>");

        assert!(!html.contains("<script>"));
        assert!(!html.contains("<b>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_render_markdown_keeps_safe_links() {
        let html = render_markdown("[site](https://example.com) [mail](mailto:a@b.c) [rel](/blog)");

        assert!(html.contains(r#"href="https://example.com""#));
        assert!(html.contains(r#"href="mailto:a@b.c""#));
        assert!(html.contains(r#"href="/blog""#));
    }

    #[test]
    fn test_render_markdown_fails_on_script_links() {
        let html = render_markdown("[x](javascript:alert(1)) ![y](data:image/png;base64,AAAA)");

        assert!(!html.contains("javascript:"));
        assert!(!html.contains("data:image"));
        assert!(html.contains(r##"href="#""##));
    }

    #[test]
    fn test_render_markdown_keeps_relative_links_with_colons() {
        let html = render_markdown("[search](/search?q=a:b) [top](#note:1) [doc](docs/a:b)");

        assert!(html.contains(r#"href="/search?q=a:b""#));
        assert!(html.contains(r##"href="#note:1""##));
        assert!(html.contains(r#"href="docs/a:b""#));
    }

    #[test]
    fn test_render_markdown_fails_on_script_links_with_colon_in_path() {
        let html = render_markdown("[x](javascript:alert('/a:b')) [y](vbscript:x?y)");

        assert!(!html.contains("javascript:"));
        assert!(!html.contains("vbscript:"));
    }
}
