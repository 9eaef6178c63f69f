use std::fmt::Display;

use serde::{Deserialize, Serialize};

pub type ColorValue = u8;
pub type ColorRGB = [ColorValue; 3];

/// A color as the user sees it: an opaque token such as `#e03c28`.
///
/// Tokens are compared and stored verbatim. They are only interpreted as RGB
/// when something has to be drawn.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColorToken(String);

impl ColorToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Case-insensitive comparison, so `#E03C28` matches `#e03c28`.
    pub fn matches(&self, other: &ColorToken) -> bool {
        self.0.eq_ignore_ascii_case(&other.0)
    }

    /// Parse `#rrggbb` or `#rgb`.
    pub fn to_rgb(&self) -> Option<ColorRGB> {
        let hex = self.0.strip_prefix('#')?;
        if !hex.is_ascii() {
            return None;
        }
        match hex.len() {
            6 => {
                let mut out: ColorRGB = [0; 3];
                for (i, c) in out.iter_mut().enumerate() {
                    *c = u8::from_str_radix(&hex[2 * i..2 * i + 2], 16).ok()?;
                }
                Some(out)
            }
            3 => {
                let mut out: ColorRGB = [0; 3];
                for (i, c) in out.iter_mut().enumerate() {
                    *c = u8::from_str_radix(&hex[i..i + 1], 16).ok()? * 17;
                }
                Some(out)
            }
            _ => None,
        }
    }
}

impl From<&str> for ColorToken {
    fn from(token: &str) -> Self {
        Self::new(token)
    }
}

impl From<String> for ColorToken {
    fn from(token: String) -> Self {
        Self(token)
    }
}

impl Display for ColorToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_long_hex() {
        assert_eq!(ColorToken::from("#e03c28").to_rgb(), Some([0xe0, 0x3c, 0x28]));
        assert_eq!(ColorToken::from("#FFFFFF").to_rgb(), Some([255, 255, 255]));
    }

    #[test]
    fn parses_short_hex() {
        assert_eq!(ColorToken::from("#f80").to_rgb(), Some([255, 136, 0]));
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(ColorToken::from("e03c28").to_rgb(), None);
        assert_eq!(ColorToken::from("#e03c2").to_rgb(), None);
        assert_eq!(ColorToken::from("#zzzzzz").to_rgb(), None);
        assert_eq!(ColorToken::from("#ééé").to_rgb(), None);
        assert_eq!(ColorToken::from("rgb(1, 2, 3)").to_rgb(), None);
    }

    #[test]
    fn matching_ignores_case() {
        let a = ColorToken::from("#E03C28");
        let b = ColorToken::from("#e03c28");
        assert!(a.matches(&b));
        assert_ne!(a, b);
    }
}
