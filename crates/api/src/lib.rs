pub mod conversions;
pub mod models;
pub mod openapi;
pub mod routes;

use crate::{
    openapi::openapi_with_server,
    routes::avatar::{get_avatar, AvatarAppState},
};
use axum::{response::Html, routing::get, Json, Router};
use config::ApiConfig;
use services::avatar::{AvatarService, AvatarServiceImpl};
use std::sync::Arc;
use tower_http::cors::CorsLayer;

/// Initialize the avatar service from configuration
pub fn init_avatar_service(config: &ApiConfig) -> Arc<dyn AvatarService> {
    if config.avatar.strict_validation {
        tracing::info!("Strict avatar parameter validation enabled");
    }
    Arc::new(AvatarServiceImpl::from_config(&config.avatar))
}

/// Build the complete application router
pub fn build_app(config: &ApiConfig) -> Router {
    build_app_with_service(
        init_avatar_service(config),
        &config.server.advertised_url(),
    )
}

/// Build the application router around an existing avatar service
pub fn build_app_with_service(avatar_service: Arc<dyn AvatarService>, server_url: &str) -> Router {
    let avatar_routes = build_avatar_routes(avatar_service);
    let openapi_routes = build_openapi_routes(server_url);

    // Avatars are embedded as <img> sources from any origin
    Router::new()
        .nest("/api", avatar_routes)
        .merge(openapi_routes)
        .layer(CorsLayer::permissive())
}

/// Build avatar generation routes
pub fn build_avatar_routes(avatar_service: Arc<dyn AvatarService>) -> Router {
    Router::new()
        .route("/avatar", get(get_avatar))
        .with_state(AvatarAppState { avatar_service })
}

/// Build OpenAPI documentation routes
pub fn build_openapi_routes(server_url: &str) -> Router {
    let spec = Arc::new(openapi_with_server(server_url));

    Router::new().route("/api-docs", get(swagger_ui_handler)).route(
        "/api-docs/openapi.json",
        get(move || {
            let spec = spec.clone();
            async move { Json(spec.as_ref().clone()) }
        }),
    )
}

/// Serve Swagger UI HTML page
async fn swagger_ui_handler() -> Html<String> {
    Html(r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>Avatar Image Generator API Documentation</title>
    <link rel="stylesheet" type="text/css" href="https://unpkg.com/swagger-ui-dist@5.10.5/swagger-ui.css" />
    <style>
        body {
            margin: 0;
            background: #fafafa;
        }
    </style>
</head>
<body>
    <div id="swagger-ui"></div>
    <script src="https://unpkg.com/swagger-ui-dist@5.10.5/swagger-ui-bundle.js"></script>
    <script src="https://unpkg.com/swagger-ui-dist@5.10.5/swagger-ui-standalone-preset.js"></script>
    <script>
    window.onload = function() {
        SwaggerUIBundle({
            url: '/api-docs/openapi.json',
            dom_id: '#swagger-ui',
            deepLinking: true,
            presets: [
                SwaggerUIBundle.presets.apis,
                SwaggerUIStandalonePreset
            ],
            plugins: [
                SwaggerUIBundle.plugins.DownloadUrl
            ],
            layout: "StandaloneLayout",
            docExpansion: 'list'
        });
    };
    </script>
</body>
</html>"#.to_string())
}
