use std::{fmt, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize, Serializer, de::Error as _};
use thiserror::Error;

/// An RGBA color with components in the `0.0..=1.0` range.
///
/// Serializes to and from CSS-style hex literals (`#RGB`, `#RRGGBB`,
/// `#RRGGBBAA`), which is how theme documents spell colors.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

/// Creates an RGBA color from a hex value and alpha component.
pub fn rgb_a(hex: u32, a: f32) -> Rgba {
    let [_, r, g, b] = hex.to_be_bytes().map(|b| (b as f32) / 255.0);
    Rgba { r, g, b, a }
}

/// Creates an opaque RGB color from a hex value.
pub fn rgb(hex: u32) -> Rgba {
    rgb_a(hex, 1.)
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid color literal '{0}', expected '#RGB', '#RRGGBB' or '#RRGGBBAA'")]
pub struct InvalidColor(pub String);

impl Rgba {
    /// Returns a new color with the specified alpha value.
    pub fn alpha(mut self, alpha: f32) -> Self {
        self.a = alpha;
        self
    }

    /// Formats the color as a hex literal, omitting the alpha
    /// component when the color is fully opaque.
    pub fn to_hex(&self) -> String {
        let [r, g, b, a] = [self.r, self.g, self.b, self.a].map(to_channel);

        if a == 0xFF {
            format!("#{r:02x}{g:02x}{b:02x}")
        } else {
            format!("#{r:02x}{g:02x}{b:02x}{a:02x}")
        }
    }
}

fn to_channel(component: f32) -> u8 {
    (component.clamp(0., 1.) * 255.).round() as u8
}

fn from_channel(channel: u8) -> f32 {
    (channel as f32) / 255.0
}

impl FromStr for Rgba {
    type Err = InvalidColor;

    fn from_str(literal: &str) -> Result<Self, Self::Err> {
        let err = || InvalidColor(literal.to_owned());
        let hex = literal.strip_prefix('#').ok_or_else(err)?;

        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(err());
        }

        let channel =
            |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).map(from_channel);

        let (r, g, b, a) = match hex.len() {
            // Shorthand form, each digit doubles: "#abc" == "#aabbcc".
            3 => {
                let digit = |index: usize| {
                    u8::from_str_radix(&hex[index..index + 1], 16).map(|d| from_channel(d << 4 | d))
                };
                (digit(0), digit(1), digit(2), Ok(1.))
            }
            6 => (channel(0..2), channel(2..4), channel(4..6), Ok(1.)),
            8 => (channel(0..2), channel(2..4), channel(4..6), channel(6..8)),
            _ => return Err(err()),
        };

        match (r, g, b, a) {
            (Ok(r), Ok(g), Ok(b), Ok(a)) => Ok(Rgba { r, g, b, a }),
            _ => Err(err()),
        }
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl Serialize for Rgba {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Rgba {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let literal = String::deserialize(deserializer)?;
        literal.parse().map_err(D::Error::custom)
    }
}
