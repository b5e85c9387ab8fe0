//! Translation between host-native and display-native colors.
//!
//! The host describes channels as 0.0-1.0 floats (component objects, struct strings
//! such as `(R=1.000000,G=0.000000,B=0.000000,A=1.000000)`, or raw `RRGGBBAA` hex).
//! The display layer wants 0-255 channels or a CSS-style string. Both directions are
//! total: every input yields a usable color.

use std::sync::LazyLock;

use palette::Srgb;
use regex::Regex;

use crate::types::{ColorError, ColorInput, DisplayColor, HostColor};

/// Color used when the host supplied nothing usable.
pub const FALLBACK_COLOR: &str = "white";

static STRUCT_RED: LazyLock<Regex> = LazyLock::new(|| channel_pattern('R'));
static STRUCT_GREEN: LazyLock<Regex> = LazyLock::new(|| channel_pattern('G'));
static STRUCT_BLUE: LazyLock<Regex> = LazyLock::new(|| channel_pattern('B'));
static STRUCT_ALPHA: LazyLock<Regex> = LazyLock::new(|| channel_pattern('A'));
static NUMBER_RUN: LazyLock<Regex> = LazyLock::new(|| literal_regex(r"[0-9.]+"));

fn channel_pattern(letter: char) -> Regex {
    literal_regex(&format!("{}=([0-9.]+)", letter))
}

// Patterns are constants, so compilation cannot fail at runtime.
fn literal_regex(pattern: &str) -> Regex {
    Regex::new(pattern).expect("static color pattern is valid")
}

/// Converts a host color into the display layer's form.
///
/// Rules are tried in priority order: component object, struct string, bare hex,
/// then verbatim pass-through. Absent or blank input falls back to
/// [`FALLBACK_COLOR`].
pub fn to_display_color(input: &ColorInput) -> DisplayColor {
    match input {
        ColorInput::Components {
            red,
            green,
            blue,
            alpha,
        } => DisplayColor::Rgba {
            rgb: Srgb::new(scale_channel(*red), scale_channel(*green), scale_channel(*blue)),
            alpha: alpha.unwrap_or(1.0),
        },
        ColorInput::Text(text) => text_to_display_color(text),
        ColorInput::Absent => DisplayColor::passthrough(FALLBACK_COLOR),
    }
}

fn text_to_display_color(text: &str) -> DisplayColor {
    let text = text.trim();
    if text.is_empty() {
        return DisplayColor::passthrough(FALLBACK_COLOR);
    }

    if text.starts_with('(') && text.ends_with(')') {
        if let Some(color) = parse_struct_string(text) {
            return color;
        }
    }

    if is_bare_hex(text) {
        return DisplayColor::passthrough(format!("#{}", text));
    }

    DisplayColor::passthrough(text)
}

/// Parses `(R=..,G=..,B=..[,A=..])`. Returns `None` when any of R, G, B is missing.
fn parse_struct_string(text: &str) -> Option<DisplayColor> {
    let red = capture_number(&STRUCT_RED, text)?;
    let green = capture_number(&STRUCT_GREEN, text)?;
    let blue = capture_number(&STRUCT_BLUE, text)?;
    let alpha = capture_number(&STRUCT_ALPHA, text).unwrap_or(1.0);

    Some(DisplayColor::Rgba {
        rgb: Srgb::new(scale_channel(red), scale_channel(green), scale_channel(blue)),
        alpha,
    })
}

fn capture_number(pattern: &Regex, text: &str) -> Option<f64> {
    let captures = pattern.captures(text)?;
    parse_number_run(captures.get(1)?.as_str())
}

/// Reads the leading decimal number of a `[0-9.]+` run.
///
/// A second `.` ends the number, so `"1.2.3"` reads as `1.2`. A run that is only
/// dots has no number.
fn parse_number_run(run: &str) -> Option<f64> {
    let end = run
        .char_indices()
        .filter(|&(_, c)| c == '.')
        .nth(1)
        .map_or(run.len(), |(idx, _)| idx);
    run[..end].parse().ok()
}

fn is_bare_hex(text: &str) -> bool {
    matches!(text.len(), 3 | 6 | 8) && text.bytes().all(|b| b.is_ascii_hexdigit())
}

/// Scales a 0.0-1.0 channel to a byte, rounding to nearest (0.5 -> 128).
///
/// Computed in `f64` so six-decimal host values land on the same byte as the
/// host's own double math. Out-of-range channels saturate; NaN reads as 0.
#[inline]
pub fn scale_channel(value: f64) -> u8 {
    let scaled = (value * 255.0).round();
    if scaled.is_nan() {
        0
    } else {
        scaled.clamp(0.0, 255.0) as u8
    }
}

/// Converts a display color string back into a host color.
///
/// Supports `#RGB`, `#RRGGBB`, `#RRGGBBAA`, `rgb(...)` and `rgba(...)`. Anything else
/// returns [`HostColor::NEUTRAL`]; a non-empty untranslatable input also logs a
/// warning.
pub fn to_host_color(css: &str) -> HostColor {
    match try_to_host_color(css) {
        Ok(color) => color,
        Err(ColorError::Empty) => HostColor::NEUTRAL,
        Err(err) => {
            tracing::warn!("to_host_color: {}", err);
            HostColor::NEUTRAL
        }
    }
}

/// Fallible form of [`to_host_color`].
///
/// Hex alpha is a byte and is divided by 255. Functional alpha is already 0.0-1.0
/// and is taken as written.
pub fn try_to_host_color(css: &str) -> Result<HostColor, ColorError> {
    if css.is_empty() {
        return Err(ColorError::Empty);
    }

    if let Some(hex) = css.strip_prefix('#') {
        return parse_hex(hex).ok_or_else(|| ColorError::Untranslatable(css.into()));
    }

    if css.starts_with("rgb") {
        if let Some(color) = parse_functional(css) {
            return Ok(color);
        }
    }

    Err(ColorError::Untranslatable(css.into()))
}

fn parse_hex(hex: &str) -> Option<HostColor> {
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }

    let byte = |range: core::ops::Range<usize>| u8::from_str_radix(hex.get(range)?, 16).ok();
    let (rgb, alpha) = match hex.len() {
        3 => {
            let nibble = |idx: usize| byte(idx..idx + 1).map(|n| n * 0x11);
            (Srgb::new(nibble(0)?, nibble(1)?, nibble(2)?), 1.0)
        }
        6 => (Srgb::new(byte(0..2)?, byte(2..4)?, byte(4..6)?), 1.0),
        8 => (
            Srgb::new(byte(0..2)?, byte(2..4)?, byte(4..6)?),
            f32::from(byte(6..8)?) / 255.0,
        ),
        _ => return None,
    };

    let rgb: Srgb<f32> = rgb.into_format();
    Some(HostColor::new(rgb.red, rgb.green, rgb.blue, alpha))
}

fn parse_functional(css: &str) -> Option<HostColor> {
    let numbers: Vec<f64> = NUMBER_RUN
        .find_iter(css)
        .filter_map(|m| parse_number_run(m.as_str()))
        .collect();
    if numbers.len() < 3 {
        return None;
    }

    let alpha = numbers.get(3).copied().unwrap_or(1.0);
    Some(HostColor::new(
        (numbers[0] / 255.0) as f32,
        (numbers[1] / 255.0) as f32,
        (numbers[2] / 255.0) as f32,
        alpha as f32,
    ))
}

impl DisplayColor {
    /// Converts back into a host color, matching [`to_host_color`] on the formatted
    /// string.
    pub fn to_host_color(&self) -> HostColor {
        match self {
            DisplayColor::Passthrough(css) => to_host_color(css),
            DisplayColor::Rgba { rgb, alpha } => {
                let rgb: Srgb<f32> = rgb.into_format();
                HostColor::new(rgb.red, rgb.green, rgb.blue, *alpha as f32)
            }
        }
    }
}

impl From<&ColorInput> for DisplayColor {
    fn from(input: &ColorInput) -> Self {
        to_display_color(input)
    }
}
