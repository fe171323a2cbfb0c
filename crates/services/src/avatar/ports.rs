/// Raw avatar parameters as received from the caller.
/// Every value is optional; an empty string is treated the same as a missing one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AvatarParams {
    pub name: Option<String>,
    pub lastname: Option<String>,
    pub background_color: Option<String>,
    pub color: Option<String>,
    pub size: Option<String>,
    pub font_size: Option<String>,
    pub font_weight: Option<String>,
    pub font_family: Option<String>,
}

impl AvatarParams {
    /// True when no recognized parameter carries a value
    pub fn is_empty(&self) -> bool {
        [
            &self.name,
            &self.lastname,
            &self.background_color,
            &self.color,
            &self.size,
            &self.font_size,
            &self.font_weight,
            &self.font_family,
        ]
        .iter()
        .all(|value| value.as_deref().is_none_or(str::is_empty))
    }
}

/// Fully resolved rendering parameters for a single avatar
#[derive(Debug, Clone, PartialEq)]
pub struct AvatarConfig {
    /// Upper-cased first initial. Usually one character, but some characters
    /// upper-case to several (`ß` becomes `SS`).
    pub first_initial: String,
    pub second_initial: String,
    /// Hex color without `#`
    pub background_color: String,
    /// Hex color without `#`
    pub text_color: String,
    pub size: u32,
    pub font_size_multiplier: f64,
    pub font_weight: String,
    pub font_family: String,
}

impl AvatarConfig {
    /// Glyph size in pixels, always derived from the canvas size and multiplier
    pub fn font_size(&self) -> f64 {
        self.size as f64 * self.font_size_multiplier * super::consts::FONT_SCALE
    }

    pub fn initials(&self) -> String {
        format!("{}{}", self.first_initial, self.second_initial)
    }
}

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum AvatarError {
    #[error("Invalid {param} '{value}': expected 3 to 6 hex digits without '#'")]
    InvalidColor { param: &'static str, value: String },
    #[error("Invalid fontWeight '{0}': expected one of normal, bold, bolder, lighter")]
    InvalidFontWeight(String),
    #[error("Invalid size '{0}': expected an integer between 16 and 512")]
    SizeOutOfRange(String),
    #[error("Invalid fontSize '{0}': expected a number between 0.5 and 1.2")]
    FontSizeOutOfRange(String),
}

impl AvatarError {
    /// Name of the query parameter that caused the error
    pub fn param(&self) -> &'static str {
        match self {
            AvatarError::InvalidColor { param, .. } => param,
            AvatarError::InvalidFontWeight(_) => "fontWeight",
            AvatarError::SizeOutOfRange(_) => "size",
            AvatarError::FontSizeOutOfRange(_) => "fontSize",
        }
    }
}

pub trait AvatarService: Send + Sync {
    /// Build the SVG document for the given parameters.
    ///
    /// Only fails when strict validation is enabled; otherwise every bad
    /// value falls back to its default.
    fn generate(&self, params: &AvatarParams) -> Result<String, AvatarError>;
}
