//! Turns raw query parameters into an [`AvatarConfig`].
//!
//! Resolution never fails: a missing, empty, unparseable or out-of-range value
//! is replaced by its default. Out-of-range numbers reset to the default
//! rather than being clamped to the nearest bound.
//!
//! [`validate`] is the strict counterpart used when the service is configured
//! to reject values that don't match the documented patterns.

use std::sync::OnceLock;

use regex::Regex;

use super::consts::*;
use super::ports::{AvatarConfig, AvatarError, AvatarParams};

/// Resolve parameters, substituting defaults for anything missing or invalid
pub fn resolve(params: &AvatarParams) -> AvatarConfig {
    let name = present(&params.name);
    let lastname = present(&params.lastname);

    let first_initial = name
        .and_then(|name| name.chars().next())
        .map(upper)
        .unwrap_or_else(|| DEFAULT_FIRST_INITIAL.to_string());

    // A given lastname always wins, even over a longer first name
    let second_initial = match lastname {
        Some(lastname) => lastname.chars().next(),
        None => name.and_then(|name| name.chars().nth(1)),
    }
    .map(upper)
    .unwrap_or_else(|| DEFAULT_SECOND_INITIAL.to_string());

    AvatarConfig {
        first_initial,
        second_initial,
        background_color: present(&params.background_color)
            .unwrap_or(DEFAULT_BACKGROUND_COLOR)
            .to_string(),
        text_color: present(&params.color)
            .unwrap_or(DEFAULT_TEXT_COLOR)
            .to_string(),
        size: present(&params.size)
            .and_then(parse_size)
            .unwrap_or(DEFAULT_SIZE),
        font_size_multiplier: present(&params.font_size)
            .and_then(parse_font_size_multiplier)
            .unwrap_or(DEFAULT_FONT_SIZE_MULTIPLIER),
        font_weight: present(&params.font_weight)
            .unwrap_or(DEFAULT_FONT_WEIGHT)
            .to_string(),
        font_family: present(&params.font_family)
            .unwrap_or(DEFAULT_FONT_FAMILY)
            .to_string(),
    }
}

/// Check every present parameter against its documented format.
/// Missing parameters are always accepted.
pub fn validate(params: &AvatarParams) -> Result<(), AvatarError> {
    for (param, value) in [
        ("backgroundColor", &params.background_color),
        ("color", &params.color),
    ] {
        if let Some(value) = present(value) {
            if !color_pattern().is_match(value) {
                return Err(AvatarError::InvalidColor {
                    param,
                    value: value.to_string(),
                });
            }
        }
    }

    if let Some(weight) = present(&params.font_weight) {
        if !FONT_WEIGHTS.contains(&weight) {
            return Err(AvatarError::InvalidFontWeight(weight.to_string()));
        }
    }

    if let Some(size) = present(&params.size) {
        if parse_size(size).is_none() {
            return Err(AvatarError::SizeOutOfRange(size.to_string()));
        }
    }

    if let Some(font_size) = present(&params.font_size) {
        if parse_font_size_multiplier(font_size).is_none() {
            return Err(AvatarError::FontSizeOutOfRange(font_size.to_string()));
        }
    }

    Ok(())
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|value| !value.is_empty())
}

fn upper(c: char) -> String {
    c.to_uppercase().collect()
}

/// Whole pixel count within bounds. `1e2` and `100.0` are accepted as 100.
fn parse_size(raw: &str) -> Option<u32> {
    let value: f64 = raw.trim().parse().ok()?;
    let in_range = (MIN_SIZE as f64..=MAX_SIZE as f64).contains(&value);
    (in_range && value.fract() == 0.0).then_some(value as u32)
}

fn parse_font_size_multiplier(raw: &str) -> Option<f64> {
    let value: f64 = raw.trim().parse().ok()?;
    // NaN fails the range check
    (MIN_FONT_SIZE_MULTIPLIER..=MAX_FONT_SIZE_MULTIPLIER)
        .contains(&value)
        .then_some(value)
}

fn color_pattern() -> &'static Regex {
    static COLOR_REGEX: OnceLock<Regex> = OnceLock::new();
    COLOR_REGEX.get_or_init(|| Regex::new(COLOR_PATTERN).expect("Failed to compile color regex"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params() -> AvatarParams {
        AvatarParams::default()
    }

    fn initials(name: Option<&str>, lastname: Option<&str>) -> String {
        resolve(&AvatarParams {
            name: name.map(String::from),
            lastname: lastname.map(String::from),
            ..params()
        })
        .initials()
    }

    #[test]
    fn test_defaults_when_nothing_given() {
        let config = resolve(&params());
        assert_eq!(
            config,
            AvatarConfig {
                first_initial: "N".to_string(),
                second_initial: "L".to_string(),
                background_color: "d9d9d9".to_string(),
                text_color: "000".to_string(),
                size: 100,
                font_size_multiplier: 1.0,
                font_weight: "normal".to_string(),
                font_family: "sans-serif".to_string(),
            }
        );
        assert_eq!(config.font_size(), 64.0);
    }

    #[test]
    fn test_initials_from_name_and_lastname() {
        assert_eq!(initials(Some("Jane"), Some("Doe")), "JD");
        assert_eq!(initials(Some("jane"), Some("doe")), "JD");
    }

    #[test]
    fn test_second_initial_from_name_when_no_lastname() {
        assert_eq!(initials(Some("Jane"), None), "JA");
        assert_eq!(initials(Some("J"), None), "JL");
    }

    #[test]
    fn test_lastname_only() {
        assert_eq!(initials(None, Some("doe")), "ND");
    }

    #[test]
    fn test_empty_strings_count_as_missing() {
        assert_eq!(initials(Some(""), Some("")), "NL");
        assert_eq!(initials(Some("ab"), Some("")), "AB");

        let config = resolve(&AvatarParams {
            background_color: Some(String::new()),
            size: Some(String::new()),
            ..params()
        });
        assert_eq!(config.background_color, "d9d9d9");
        assert_eq!(config.size, 100);
    }

    #[test]
    fn test_multibyte_initials() {
        assert_eq!(initials(Some("émile"), None), "ÉM");
        assert_eq!(initials(Some("ßa"), None), "SSA");
        assert_eq!(initials(Some("😀x"), None), "😀X");
    }

    #[test]
    fn test_size_resets_instead_of_clamping() {
        for raw in ["1000", "0", "15", "513", "-20", "abc", "50.5", "NaN", "inf", "0x20", "0b101"] {
            let config = resolve(&AvatarParams {
                size: Some(raw.to_string()),
                ..params()
            });
            assert_eq!(config.size, 100, "size={raw}");
        }
    }

    #[test]
    fn test_size_accepts_bounds() {
        for (raw, expected) in [("16", 16), ("512", 512), (" 200 ", 200), ("1e2", 100), ("64.0", 64)] {
            let config = resolve(&AvatarParams {
                size: Some(raw.to_string()),
                ..params()
            });
            assert_eq!(config.size, expected, "size={raw}");
        }
    }

    #[test]
    fn test_font_size_multiplier_resets_when_out_of_range() {
        for raw in ["5", "0.49", "1.21", "-1", "big", "NaN"] {
            let config = resolve(&AvatarParams {
                font_size: Some(raw.to_string()),
                ..params()
            });
            assert_eq!(config.font_size_multiplier, 1.0, "fontSize={raw}");
        }

        let config = resolve(&AvatarParams {
            font_size: Some("0.5".to_string()),
            ..params()
        });
        assert_eq!(config.font_size_multiplier, 0.5);
    }

    #[test]
    fn test_font_size_is_derived() {
        for (size, multiplier) in [("100", "1.2"), ("16", "0.5"), ("512", "0.75"), ("37", "1.1")] {
            let config = resolve(&AvatarParams {
                size: Some(size.to_string()),
                font_size: Some(multiplier.to_string()),
                ..params()
            });
            let expected = size.parse::<f64>().unwrap() * multiplier.parse::<f64>().unwrap() * 0.64;
            assert_eq!(config.font_size(), expected);
        }
    }

    #[test]
    fn test_strings_pass_through_unvalidated() {
        let config = resolve(&AvatarParams {
            background_color: Some("not-a-color".to_string()),
            color: Some("ff0000".to_string()),
            font_weight: Some("900".to_string()),
            font_family: Some("Georgia, serif".to_string()),
            ..params()
        });
        assert_eq!(config.background_color, "not-a-color");
        assert_eq!(config.text_color, "ff0000");
        assert_eq!(config.font_weight, "900");
        assert_eq!(config.font_family, "Georgia, serif");
    }

    #[test]
    fn test_validate_accepts_documented_values() {
        let params = AvatarParams {
            name: Some("Jane".to_string()),
            background_color: Some("AbC".to_string()),
            color: Some("090909".to_string()),
            size: Some("512".to_string()),
            font_size: Some("1.2".to_string()),
            font_weight: Some("bolder".to_string()),
            font_family: Some("monospace".to_string()),
            ..params()
        };
        assert_eq!(validate(&params), Ok(()));
        assert_eq!(validate(&AvatarParams::default()), Ok(()));
    }

    #[test]
    fn test_validate_rejects_bad_colors() {
        for (raw, expected_ok) in [("zzz", false), ("ab", false), ("1234567", false), ("#fff", false), ("fff", true)] {
            let result = validate(&AvatarParams {
                color: Some(raw.to_string()),
                ..params()
            });
            assert_eq!(result.is_ok(), expected_ok, "color={raw}");
        }

        let err = validate(&AvatarParams {
            background_color: Some("zzz".to_string()),
            ..params()
        })
        .unwrap_err();
        assert_eq!(err.param(), "backgroundColor");
    }

    #[test]
    fn test_validate_rejects_other_fields() {
        let err = validate(&AvatarParams {
            font_weight: Some("heavy".to_string()),
            ..params()
        })
        .unwrap_err();
        assert_eq!(err, AvatarError::InvalidFontWeight("heavy".to_string()));

        let err = validate(&AvatarParams {
            size: Some("1000".to_string()),
            ..params()
        })
        .unwrap_err();
        assert_eq!(err.param(), "size");

        let err = validate(&AvatarParams {
            font_size: Some("5".to_string()),
            ..params()
        })
        .unwrap_err();
        assert_eq!(err.param(), "fontSize");
    }
}
