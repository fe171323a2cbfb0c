use crate::models::AvatarQuery;
use services::avatar::AvatarParams;

// ============================================================================
// HTTP to Service Conversions
// ============================================================================

impl From<AvatarQuery> for AvatarParams {
    fn from(query: AvatarQuery) -> Self {
        Self {
            name: query.name,
            lastname: query.lastname,
            background_color: query.background_color,
            color: query.color,
            size: query.size,
            font_size: query.font_size,
            font_weight: query.font_weight,
            font_family: query.font_family,
        }
    }
}
