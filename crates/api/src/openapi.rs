use crate::models::*;
use utoipa::openapi::{server::Server, OpenApi as OpenApiDocument};
use utoipa::OpenApi;

/// OpenAPI documentation configuration
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Avatar image generator",
        description = "Avatar generator according to the properties provided.\n\nEvery parameter is optional. Values that are missing or out of range fall back to their defaults.",
        version = "1.0.0",
        contact(
            name = "Santiago Zapata",
            email = "dev.santizapata@gmail.com"
        )
    ),
    paths(
        crate::routes::avatar::get_avatar,
    ),
    components(
        schemas(ErrorResponse, ErrorDetail),
    ),
    tags(
        (name = "Avatar", description = "SVG avatar generation")
    )
)]
pub struct ApiDoc;

/// OpenAPI document advertising `server_url` as its only server
pub fn openapi_with_server(server_url: &str) -> OpenApiDocument {
    let mut doc = ApiDoc::openapi();
    doc.servers = Some(vec![Server::new(server_url)]);
    doc
}
