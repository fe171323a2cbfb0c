#![allow(dead_code)]

use api::build_app;
use config::ApiConfig;

/// Helper function to create a test configuration
pub fn test_config() -> ApiConfig {
    ApiConfig {
        server: config::ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0, // Use port 0 to get a random available port
            public_url: Some("http://avatars.test".to_string()),
        },
        logging: config::LoggingConfig {
            level: "debug".to_string(),
            format: "compact".to_string(),
            modules: std::collections::HashMap::new(),
        },
        avatar: config::AvatarSettings {
            strict_validation: false,
        },
    }
}

/// Setup a test server from the given configuration
pub fn setup_test_server_with_config(config: &ApiConfig) -> axum_test::TestServer {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::level_filters::LevelFilter::DEBUG)
        .try_init();

    axum_test::TestServer::new(build_app(config)).unwrap()
}

/// Setup a test server with the default (lenient) configuration
pub fn setup_test_server() -> axum_test::TestServer {
    setup_test_server_with_config(&test_config())
}

/// Setup a test server that rejects parameters outside their documented format
pub fn setup_strict_test_server() -> axum_test::TestServer {
    let mut config = test_config();
    config.avatar.strict_validation = true;
    setup_test_server_with_config(&config)
}

/// Text of the single `<text>` node, trimmed
pub fn initials(svg: &str) -> String {
    let start = svg.find("      >\n").expect("text node body") + "      >\n".len();
    let end = svg.find("</text>").expect("closing text tag");
    svg[start..end].trim().to_string()
}

/// Value of the first `attribute="..."` in the document
pub fn attribute(svg: &str, attribute: &str) -> String {
    let needle = format!("{attribute}=\"");
    let start = svg.find(&needle).expect("attribute present") + needle.len();
    let len = svg[start..].find('"').expect("attribute terminated");
    svg[start..start + len].to_string()
}
