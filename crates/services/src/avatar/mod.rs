pub mod consts;
pub mod ports;
pub mod renderer;
pub mod resolver;

pub use ports::{AvatarConfig, AvatarError, AvatarParams, AvatarService};

pub struct AvatarServiceImpl {
    strict_validation: bool,
}

impl AvatarServiceImpl {
    pub fn new(strict_validation: bool) -> Self {
        Self { strict_validation }
    }

    pub fn from_config(settings: &config::AvatarSettings) -> Self {
        Self::new(settings.strict_validation)
    }
}

impl AvatarService for AvatarServiceImpl {
    fn generate(&self, params: &AvatarParams) -> Result<String, AvatarError> {
        if self.strict_validation {
            resolver::validate(params)?;
        }

        let avatar = resolver::resolve(params);
        tracing::debug!(
            initials = %avatar.initials(),
            size = avatar.size,
            font_size = avatar.font_size(),
            defaults_only = params.is_empty(),
            "Resolved avatar parameters"
        );

        Ok(renderer::render(&avatar))
    }
}
