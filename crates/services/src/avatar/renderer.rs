use super::ports::AvatarConfig;

/// Render the avatar as an SVG document.
///
/// Values are interpolated as-is. The 55% text offset and the 0.64 font scale
/// are tuned by eye; changing either visibly shifts existing avatars.
pub fn render(config: &AvatarConfig) -> String {
    format!(
        r##"
    <svg width="{size}" height="{size}" xmlns="http://www.w3.org/2000/svg">
      <rect width="100%" height="100%" fill="#{background}" />
      <text
        x="50%"
        y="55%"
        text-anchor="middle"
        dominant-baseline="middle"
        font-size="{font_size}"
        font-family="{font_family}"
        fill="#{color}"
        font-weight="{font_weight}"
      >
        {initials}
      </text>
    </svg>
  "##,
        size = config.size,
        background = config.background_color,
        font_size = config.font_size(),
        font_family = config.font_family,
        color = config.text_color,
        font_weight = config.font_weight,
        initials = config.initials(),
    )
}
