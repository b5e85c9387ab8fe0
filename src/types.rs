//! Core color types shared by both translation directions.

use palette::{Srgb, Srgba};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A color as supplied by the host, before normalization.
///
/// Struct strings such as `"(R=1.0,G=0.0,B=0.0,A=1.0)"` arrive as [`ColorInput::Text`]
/// and are told apart from hex and named colors during translation, because the same
/// text can satisfy more than one shape.
#[derive(Debug, Clone, PartialEq)]
pub enum ColorInput {
    /// Nothing usable was supplied.
    Absent,

    /// Any textual form: named color, hex with or without marker, struct string,
    /// or functional notation.
    Text(String),

    /// Component object with 0.0-1.0 channels.
    Components {
        red: f64,
        green: f64,
        blue: f64,
        alpha: Option<f64>,
    },
}

impl ColorInput {
    /// Creates a text input.
    pub fn text(text: impl Into<String>) -> Self {
        ColorInput::Text(text.into())
    }

    /// Creates a component input with an optional alpha.
    pub fn components(red: f64, green: f64, blue: f64, alpha: Option<f64>) -> Self {
        ColorInput::Components {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Classifies a decoded JSON value.
    ///
    /// Objects count as components only when they carry all of `R`, `G` and `B`.
    /// Non-numeric channels read as 0 and a non-numeric alpha reads as absent.
    /// Every other value kind is [`ColorInput::Absent`].
    pub fn from_json(value: &Value) -> Self {
        match value {
            Value::String(text) => ColorInput::Text(text.clone()),
            Value::Object(map)
                if map.contains_key("R") && map.contains_key("G") && map.contains_key("B") =>
            {
                let channel = |key: &str| map.get(key).and_then(Value::as_f64).unwrap_or(0.0);
                ColorInput::Components {
                    red: channel("R"),
                    green: channel("G"),
                    blue: channel("B"),
                    alpha: map.get("A").and_then(Value::as_f64),
                }
            }
            _ => ColorInput::Absent,
        }
    }
}

impl From<&str> for ColorInput {
    fn from(text: &str) -> Self {
        ColorInput::Text(text.into())
    }
}

impl From<HostColor> for ColorInput {
    fn from(color: HostColor) -> Self {
        ColorInput::components(
            f64::from(color.red),
            f64::from(color.green),
            f64::from(color.blue),
            Some(f64::from(color.alpha)),
        )
    }
}

/// A color in the display layer's native form.
///
/// Either a string handed through untouched (named colors, `#` hex, functional
/// notation) or a resolved byte triple with a 0.0-1.0 alpha.
#[derive(Debug, Clone, PartialEq)]
pub enum DisplayColor {
    /// Already display-native, emitted verbatim.
    Passthrough(String),

    /// Resolved channels, emitted as `rgba(r, g, b, a)`.
    Rgba { rgb: Srgb<u8>, alpha: f64 },
}

impl DisplayColor {
    /// Creates a pass-through color.
    pub fn passthrough(css: impl Into<String>) -> Self {
        DisplayColor::Passthrough(css.into())
    }

    /// Creates a resolved color from byte channels.
    pub fn rgba(red: u8, green: u8, blue: u8, alpha: f64) -> Self {
        DisplayColor::Rgba {
            rgb: Srgb::new(red, green, blue),
            alpha,
        }
    }

    /// Formats the color as the display layer expects it.
    pub fn to_css(&self) -> String {
        self.to_string()
    }
}

impl core::fmt::Display for DisplayColor {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            DisplayColor::Passthrough(css) => f.write_str(css),
            DisplayColor::Rgba { rgb, alpha } => {
                write!(f, "rgba({}, {}, {}, {})", rgb.red, rgb.green, rgb.blue, alpha)
            }
        }
    }
}

/// The host engine's color: four 0.0-1.0 channels.
///
/// Serializes with the host's field names (`R`, `G`, `B`, `A`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HostColor {
    #[serde(rename = "R")]
    pub red: f32,

    #[serde(rename = "G")]
    pub green: f32,

    #[serde(rename = "B")]
    pub blue: f32,

    #[serde(rename = "A", default = "opaque")]
    pub alpha: f32,
}

fn opaque() -> f32 {
    1.0
}

impl HostColor {
    /// Opaque white, returned whenever a reverse translation is not possible.
    pub const NEUTRAL: HostColor = HostColor::new(1.0, 1.0, 1.0, 1.0);

    /// Creates a host color.
    pub const fn new(red: f32, green: f32, blue: f32, alpha: f32) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }
}

impl Default for HostColor {
    fn default() -> Self {
        HostColor::NEUTRAL
    }
}

impl From<Srgba> for HostColor {
    fn from(color: Srgba) -> Self {
        HostColor::new(color.red, color.green, color.blue, color.alpha)
    }
}

impl From<HostColor> for Srgba {
    fn from(color: HostColor) -> Self {
        Srgba::new(color.red, color.green, color.blue, color.alpha)
    }
}

/// Reasons a display color could not be turned back into a host color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    /// Input was empty.
    Empty,

    /// Input has no structure to translate (e.g. a bare color name).
    Untranslatable(String),
}

impl core::fmt::Display for ColorError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ColorError::Empty => write!(f, "empty color"),
            ColorError::Untranslatable(css) => {
                write!(f, "cannot convert '{}' without a lookup table", css)
            }
        }
    }
}

impl std::error::Error for ColorError {}
