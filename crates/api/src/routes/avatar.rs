use crate::models::{AvatarQuery, ErrorResponse};
use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Json as ResponseJson},
};
use services::avatar::{consts::SVG_CONTENT_TYPE, AvatarService};
use std::sync::Arc;
use tracing::{debug, warn};

#[derive(Clone)]
pub struct AvatarAppState {
    pub avatar_service: Arc<dyn AvatarService>,
}

/// Generate an SVG avatar image
///
/// Generates a square SVG avatar using initials.
/// If no values are provided, default initials and colors are used.
#[utoipa::path(
    get,
    path = "/api/avatar",
    tag = "Avatar",
    params(AvatarQuery),
    responses(
        (status = 200, description = "SVG avatar image", content_type = "image/svg+xml", body = String),
        (status = 400, description = "Parameter rejected (strict validation only)", body = ErrorResponse)
    )
)]
pub async fn get_avatar(
    State(app_state): State<AvatarAppState>,
    pairs: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<impl IntoResponse, (StatusCode, ResponseJson<ErrorResponse>)> {
    // Only a query string that isn't urlencoded at all degrades to defaults
    let query = match pairs {
        Ok(Query(pairs)) => AvatarQuery::from_pairs(pairs),
        Err(rejection) => {
            debug!("Unreadable avatar query, using defaults: {}", rejection);
            AvatarQuery::default()
        }
    };

    let svg = app_state
        .avatar_service
        .generate(&query.into())
        .map_err(|e| {
            warn!(param = e.param(), "Rejected avatar request: {}", e);
            (
                StatusCode::BAD_REQUEST,
                ResponseJson(ErrorResponse::with_param(
                    e.to_string(),
                    "invalid_request_error".to_string(),
                    e.param().to_string(),
                )),
            )
        })?;

    Ok(([(header::CONTENT_TYPE, SVG_CONTENT_TYPE)], svg))
}
