use serde::{Deserialize, Serialize};
use services::avatar::consts::{DEFAULT_FONT_WEIGHT, FONT_WEIGHTS};
use utoipa::{
    openapi::{schema::Type, ObjectBuilder},
    IntoParams, ToSchema,
};

// ============================================
// Avatar API Models
// ============================================

/// Query parameters for avatar generation.
///
/// Every field is optional; missing or invalid values fall back to the
/// documented default.
#[derive(Debug, Clone, Default, Serialize, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct AvatarQuery {
    /// First name. The first character is used as the first initial.
    #[param(default = "N", example = "John")]
    pub name: Option<String>,
    /// Last name. The first character is used as the second initial.
    #[param(default = "L", example = "Doe")]
    pub lastname: Option<String>,
    /// Background color in hex (without `#`).
    #[param(default = "d9d9d9", example = "d9d9d9", pattern = "^[0-9a-fA-F]{3,6}$")]
    pub background_color: Option<String>,
    /// Text color in hex (without `#`).
    #[param(default = "000", example = "090909", pattern = "^[0-9a-fA-F]{3,6}$")]
    pub color: Option<String>,
    /// Width and height of the avatar in pixels.
    #[param(value_type = Option<i32>, minimum = 16, maximum = 512, default = 100)]
    pub size: Option<String>,
    /// Font size multiplier relative to the avatar size.
    #[param(value_type = Option<f64>, minimum = 0.5, maximum = 1.2, default = 1)]
    pub font_size: Option<String>,
    /// Font weight of the initials.
    #[param(schema_with = font_weight_schema)]
    pub font_weight: Option<String>,
    /// Font family used for the initials.
    #[param(default = "sans-serif", example = "sans-serif")]
    pub font_family: Option<String>,
}

impl AvatarQuery {
    /// Build from raw query pairs, keeping the first value of each recognized
    /// key. Repeated and unknown keys never affect the other parameters.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut query = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "name" => &mut query.name,
                "lastname" => &mut query.lastname,
                "backgroundColor" => &mut query.background_color,
                "color" => &mut query.color,
                "size" => &mut query.size,
                "fontSize" => &mut query.font_size,
                "fontWeight" => &mut query.font_weight,
                "fontFamily" => &mut query.font_family,
                _ => continue,
            };
            slot.get_or_insert(value);
        }
        query
    }
}

fn font_weight_schema() -> utoipa::openapi::Object {
    ObjectBuilder::new()
        .schema_type(Type::String)
        .enum_values(Some(FONT_WEIGHTS))
        .default(Some(serde_json::Value::from(DEFAULT_FONT_WEIGHT)))
        .build()
}

// ============================================
// Errors
// ============================================

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorDetail {
    pub message: String,
    pub r#type: String,
    pub param: Option<String>,
}

impl ErrorResponse {
    pub fn with_param(message: String, error_type: String, param: String) -> Self {
        Self {
            error: ErrorDetail {
                message,
                r#type: error_type,
                param: Some(param),
            },
        }
    }
}
