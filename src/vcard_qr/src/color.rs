use std::{fmt, str::FromStr};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorParseError {
    #[error("empty color")]
    Empty,
    #[error("invalid color length {0}: expected 6 (RRGGBB) or 8 (AARRGGBB) hex digits")]
    InvalidLength(usize),
    #[error("invalid hex digits in color {0:?}")]
    InvalidDigit(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct RgbaColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl RgbaColor {
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    pub fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl FromStr for RgbaColor {
    type Err = ColorParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_hex_color(s)
    }
}

/// `#RRGGBB` when opaque, `#AARRGGBB` otherwise, so the output parses back.
impl fmt::Display for RgbaColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a == 255 {
            write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            write!(f, "#{:02X}{:02X}{:02X}{:02X}", self.a, self.r, self.g, self.b)
        }
    }
}

/// Which side of the code a color paints, and so which default it falls back to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorRole {
    Dark,
    Light,
}

impl ColorRole {
    pub fn default_color(self) -> RgbaColor {
        match self {
            ColorRole::Dark => RgbaColor::BLACK,
            ColorRole::Light => RgbaColor::WHITE,
        }
    }
}

/// Parse `RRGGBB` or `AARRGGBB`, with an optional leading `#`.
///
/// Surrounding whitespace is ignored. The 8 digit form puts alpha first.
pub fn parse_hex_color(input: &str) -> Result<RgbaColor, ColorParseError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ColorParseError::Empty);
    }
    let hex = trimmed.strip_prefix('#').unwrap_or(trimmed);
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(ColorParseError::InvalidDigit(trimmed.to_owned()));
    }

    // All bytes are ASCII hex digits from here on, so byte slicing is safe.
    let channel = |i: usize| {
        u8::from_str_radix(&hex[i..i + 2], 16)
            .map_err(|_| ColorParseError::InvalidDigit(trimmed.to_owned()))
    };
    match hex.len() {
        6 => Ok(RgbaColor::rgb(channel(0)?, channel(2)?, channel(4)?)),
        8 => Ok(RgbaColor::rgb(channel(2)?, channel(4)?, channel(6)?).with_alpha(channel(0)?)),
        len => Err(ColorParseError::InvalidLength(len)),
    }
}

/// Parse a color, substituting the role's default when the input is unusable.
pub fn parse_or_default(input: &str, role: ColorRole) -> RgbaColor {
    match parse_hex_color(input) {
        Ok(color) => color,
        Err(e) => {
            let fallback = role.default_color();
            debug!(?role, input, error = %e, %fallback, "Using default color");
            fallback
        }
    }
}

/// Resolve the dark and light colors of a render.
///
/// A transparent background ignores `light_input` entirely: the light color
/// becomes white with zero alpha.
pub fn resolve_colors(
    dark_input: &str,
    light_input: &str,
    transparent_background: bool,
) -> (RgbaColor, RgbaColor) {
    let dark = parse_or_default(dark_input, ColorRole::Dark);
    let light = if transparent_background {
        RgbaColor::WHITE.with_alpha(0)
    } else {
        parse_or_default(light_input, ColorRole::Light)
    };
    (dark, light)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rgb() {
        assert_eq!(
            parse_hex_color("#1A2B3C"),
            Ok(RgbaColor {
                r: 0x1A,
                g: 0x2B,
                b: 0x3C,
                a: 255
            })
        );
        assert_eq!(parse_hex_color("  1a2b3c\n"), Ok(RgbaColor::rgb(0x1A, 0x2B, 0x3C)));
    }

    #[test]
    fn test_parse_argb_alpha_first() {
        assert_eq!(
            parse_hex_color("1A2B3C4D"),
            Ok(RgbaColor {
                a: 0x1A,
                r: 0x2B,
                g: 0x3C,
                b: 0x4D
            })
        );
    }

    #[test]
    fn test_parse_failures() {
        assert_eq!(parse_hex_color(""), Err(ColorParseError::Empty));
        assert_eq!(parse_hex_color("   "), Err(ColorParseError::Empty));
        assert_eq!(parse_hex_color("#12345"), Err(ColorParseError::InvalidLength(5)));
        assert_eq!(parse_hex_color("#"), Err(ColorParseError::InvalidLength(0)));
        assert_eq!(parse_hex_color("1234567"), Err(ColorParseError::InvalidLength(7)));
        assert_eq!(parse_hex_color("bad"), Err(ColorParseError::InvalidLength(3)));
        assert!(matches!(
            parse_hex_color("zzzzzz"),
            Err(ColorParseError::InvalidDigit(_))
        ));
        assert!(matches!(
            parse_hex_color("+1A2B3C"),
            Err(ColorParseError::InvalidDigit(_))
        ));
        assert!(matches!(
            parse_hex_color("##1A2B3C"),
            Err(ColorParseError::InvalidDigit(_))
        ));
        assert!(matches!(
            parse_hex_color("1A2B3\u{e9}"),
            Err(ColorParseError::InvalidDigit(_))
        ));
    }

    #[test]
    fn test_display_round_trips() {
        let opaque = RgbaColor::rgb(0x1A, 0x2B, 0x3C);
        assert_eq!(opaque.to_string(), "#1A2B3C");
        let translucent = opaque.with_alpha(0x80);
        assert_eq!(translucent.to_string(), "#801A2B3C");
        assert_eq!(translucent.to_string().parse::<RgbaColor>(), Ok(translucent));
    }

    #[test]
    fn test_defaults_per_role() {
        assert_eq!(parse_or_default("bad", ColorRole::Dark), RgbaColor::BLACK);
        assert_eq!(parse_or_default("", ColorRole::Light), RgbaColor::WHITE);
        assert_eq!(
            parse_or_default("#FF0000", ColorRole::Dark),
            RgbaColor::rgb(255, 0, 0)
        );
    }

    #[test]
    fn test_resolve_colors() {
        let (dark, light) = resolve_colors("bad", "also bad", false);
        assert_eq!(dark, RgbaColor::BLACK);
        assert_eq!(light, RgbaColor::WHITE);

        let (dark, light) = resolve_colors("#102030", "#405060", false);
        assert_eq!(dark, RgbaColor::rgb(0x10, 0x20, 0x30));
        assert_eq!(light, RgbaColor::rgb(0x40, 0x50, 0x60));
    }

    #[test]
    fn test_transparent_background_forces_light_alpha() {
        let (_, light) = resolve_colors("#000000", "#FFFFFF", true);
        assert_eq!(light.to_array(), [255, 255, 255, 0]);

        let (_, light) = resolve_colors("#000000", "#123456", true);
        assert_eq!(light.a, 0);
        let (_, light) = resolve_colors("#000000", "garbage", true);
        assert_eq!(light.a, 0);
    }
}
