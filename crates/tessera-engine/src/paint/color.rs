use core::str::FromStr;

use glam::Vec3;

use super::ColorParseError;

/// Straight RGB color in `0`–`255` bytes.
///
/// This is the only color type callers hand to the builders. It is normalized
/// once, at build time, into the `Vec3` stored on colored renderables.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const SILVER: Rgb = Rgb::new(192, 192, 192);
    pub const GRAY: Rgb = Rgb::new(128, 128, 128);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);
    pub const MAROON: Rgb = Rgb::new(128, 0, 0);
    pub const RED: Rgb = Rgb::new(255, 0, 0);
    pub const PURPLE: Rgb = Rgb::new(128, 0, 128);
    pub const FUCHSIA: Rgb = Rgb::new(255, 0, 255);
    pub const GREEN: Rgb = Rgb::new(0, 128, 0);
    pub const LIME: Rgb = Rgb::new(0, 255, 0);
    pub const OLIVE: Rgb = Rgb::new(128, 128, 0);
    pub const YELLOW: Rgb = Rgb::new(255, 255, 0);
    pub const NAVY: Rgb = Rgb::new(0, 0, 128);
    pub const BLUE: Rgb = Rgb::new(0, 0, 255);
    pub const TEAL: Rgb = Rgb::new(0, 128, 128);
    pub const AQUA: Rgb = Rgb::new(0, 255, 255);

    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Looks up one of the basic named colors (case-insensitive).
    ///
    /// `grey`, `cyan` and `magenta` are accepted as aliases.
    pub fn from_name(name: &str) -> Option<Self> {
        let c = match name.to_ascii_lowercase().as_str() {
            "black" => Self::BLACK,
            "silver" => Self::SILVER,
            "gray" | "grey" => Self::GRAY,
            "white" => Self::WHITE,
            "maroon" => Self::MAROON,
            "red" => Self::RED,
            "purple" => Self::PURPLE,
            "fuchsia" | "magenta" => Self::FUCHSIA,
            "green" => Self::GREEN,
            "lime" => Self::LIME,
            "olive" => Self::OLIVE,
            "yellow" => Self::YELLOW,
            "navy" => Self::NAVY,
            "blue" => Self::BLUE,
            "teal" => Self::TEAL,
            "aqua" | "cyan" => Self::AQUA,
            _ => return None,
        };
        Some(c)
    }

    /// Normalizes to a `0..1` vector by dividing each channel by 255.
    ///
    /// No gamma or color-space conversion is applied.
    #[inline]
    pub fn normalized(self) -> Vec3 {
        Vec3::new(self.r as f32, self.g as f32, self.b as f32) / 255.0
    }
}

impl From<[u8; 3]> for Rgb {
    #[inline]
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::new(r, g, b)
    }
}

impl From<(u8, u8, u8)> for Rgb {
    #[inline]
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r, g, b)
    }
}

impl FromStr for Rgb {
    type Err = ColorParseError;

    /// Parses `#rrggbb`, `#rgb`, or a basic color name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ColorParseError::Empty);
        }

        let Some(hex) = s.strip_prefix('#') else {
            return Self::from_name(s).ok_or_else(|| ColorParseError::UnknownName(s.to_string()));
        };

        let invalid = || ColorParseError::InvalidHex(s.to_string());
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        match hex.len() {
            6 => {
                let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());
                Ok(Self::new(channel(0)?, channel(2)?, channel(4)?))
            }
            3 => {
                // #abc expands to #aabbcc
                let channel = |i: usize| {
                    u8::from_str_radix(&hex[i..i + 1], 16)
                        .map(|v| v * 17)
                        .map_err(|_| invalid())
                };
                Ok(Self::new(channel(0)?, channel(1)?, channel(2)?))
            }
            _ => Err(invalid()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── normalized ────────────────────────────────────────────────────────

    #[test]
    fn normalized_primaries() {
        assert_eq!(Rgb::RED.normalized(), Vec3::new(1.0, 0.0, 0.0));
        assert_eq!(Rgb::BLACK.normalized(), Vec3::ZERO);
        assert_eq!(Rgb::WHITE.normalized(), Vec3::ONE);
    }

    #[test]
    fn normalized_gray_is_mid_range() {
        let g = Rgb::GRAY.normalized();
        assert_eq!(g.x, 128.0 / 255.0);
        assert_eq!(g.x, g.y);
        assert_eq!(g.y, g.z);
    }

    // ── names ─────────────────────────────────────────────────────────────

    #[test]
    fn from_name_is_case_insensitive() {
        assert_eq!(Rgb::from_name("Red"), Some(Rgb::RED));
        assert_eq!(Rgb::from_name("GREY"), Some(Rgb::GRAY));
        assert_eq!(Rgb::from_name("cyan"), Some(Rgb::AQUA));
    }

    #[test]
    fn from_name_unknown() {
        assert_eq!(Rgb::from_name("chartreuse-ish"), None);
    }

    // ── parsing ───────────────────────────────────────────────────────────

    #[test]
    fn parse_six_digit_hex() {
        assert_eq!("#ff8000".parse::<Rgb>(), Ok(Rgb::new(255, 128, 0)));
    }

    #[test]
    fn parse_three_digit_hex_expands() {
        assert_eq!("#f80".parse::<Rgb>(), Ok(Rgb::new(255, 136, 0)));
    }

    #[test]
    fn parse_name_with_whitespace() {
        assert_eq!("  navy ".parse::<Rgb>(), Ok(Rgb::NAVY));
    }

    #[test]
    fn parse_errors() {
        assert_eq!("".parse::<Rgb>(), Err(ColorParseError::Empty));
        assert_eq!("#12345".parse::<Rgb>(), Err(ColorParseError::InvalidHex("#12345".into())));
        assert_eq!("#gg0000".parse::<Rgb>(), Err(ColorParseError::InvalidHex("#gg0000".into())));
        assert_eq!("#ffé".parse::<Rgb>(), Err(ColorParseError::InvalidHex("#ffé".into())));
        assert_eq!("nope".parse::<Rgb>(), Err(ColorParseError::UnknownName("nope".into())));
    }

    #[test]
    fn from_tuple_and_array() {
        assert_eq!(Rgb::from((1, 2, 3)), Rgb::new(1, 2, 3));
        assert_eq!(Rgb::from([4, 5, 6]), Rgb::new(4, 5, 6));
    }
}
