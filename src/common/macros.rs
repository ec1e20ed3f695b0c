#[macro_export]
macro_rules! log_err {
    // Usage: log_err!("create blog post", &draft);
    ($context:expr, $params:expr) => {{
        let location = format!("{}:{}", file!(), line!());

        let params_json = ::serde_json::to_value($params)
            .unwrap_or(::serde_json::Value::Null);

        ::log::error!(
            target: "portfolio::errors",
            "{} failed at {} with parameters {}",
            $context,
            location,
            params_json
        );
    }};
}
