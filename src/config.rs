//! Countdown configuration and the host's options payload.

use serde::Deserialize;
use serde_json::Value;

use crate::colors::to_display_color;
use crate::types::{ColorInput, DisplayColor};

/// Seconds at or below which the countdown turns critical, unless configured.
pub const DEFAULT_LOW_TIME_THRESHOLD: f64 = 30.0;

/// Countdown configuration. Colors are always normalized display colors.
#[derive(Debug, Clone, PartialEq)]
pub struct TimerConfig {
    /// Critical when time left is at or below this many seconds.
    pub low_time_threshold: f64,

    /// Color while time is above the threshold.
    pub timer_color: DisplayColor,

    /// Color while time is at or below the threshold.
    pub low_time_color: DisplayColor,
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            low_time_threshold: DEFAULT_LOW_TIME_THRESHOLD,
            timer_color: DisplayColor::passthrough("white"),
            low_time_color: DisplayColor::passthrough("red"),
        }
    }
}

impl TimerConfig {
    /// Sets the low-time threshold.
    pub fn with_low_time_threshold(mut self, seconds: f64) -> Self {
        self.low_time_threshold = seconds;
        self
    }

    /// Sets the normal color from any host color form.
    pub fn with_timer_color(mut self, color: impl Into<ColorInput>) -> Self {
        self.timer_color = to_display_color(&color.into());
        self
    }

    /// Sets the low-time color from any host color form.
    pub fn with_low_time_color(mut self, color: impl Into<ColorInput>) -> Self {
        self.low_time_color = to_display_color(&color.into());
        self
    }

    /// Applies a serialized options object.
    ///
    /// Only fields that are present and truthy override. The payload is parsed in
    /// full before anything changes, so on error the config is left untouched.
    pub fn apply_options(&mut self, payload: &str) -> Result<(), OptionsError> {
        let options = TimerOptions::parse(payload)?;

        if let Some(threshold) = options.low_time_threshold {
            self.low_time_threshold = threshold;
        }
        if let Some(color) = options.timer_color {
            self.timer_color = color;
        }
        if let Some(color) = options.low_time_color {
            self.low_time_color = color;
        }
        Ok(())
    }
}

/// Raw wire shape of the options payload.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawOptions {
    #[serde(default)]
    low_time_threshold: Option<Value>,
    #[serde(default)]
    timer_color: Option<Value>,
    #[serde(default)]
    low_time_color: Option<Value>,
}

/// Options decoded from the host payload, colors already normalized.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TimerOptions {
    pub low_time_threshold: Option<f64>,
    pub timer_color: Option<DisplayColor>,
    pub low_time_color: Option<DisplayColor>,
}

impl TimerOptions {
    /// Parses a JSON options object.
    pub fn parse(payload: &str) -> Result<Self, OptionsError> {
        let value: Value =
            serde_json::from_str(payload).map_err(|err| OptionsError::Json(err.to_string()))?;
        if !value.is_object() {
            return Err(OptionsError::NotAnObject);
        }
        let raw: RawOptions =
            serde_json::from_value(value).map_err(|err| OptionsError::Json(err.to_string()))?;

        let low_time_threshold = raw.low_time_threshold.as_ref().and_then(parse_threshold);

        Ok(Self {
            low_time_threshold,
            timer_color: raw.timer_color.as_ref().and_then(normalize_color_field),
            low_time_color: raw.low_time_color.as_ref().and_then(normalize_color_field),
        })
    }
}

/// Reads a threshold from a number or a numeric string. Other values are skipped
/// with a warning and leave the rest of the payload intact.
fn parse_threshold(value: &Value) -> Option<f64> {
    let threshold = match value {
        Value::Null => return None,
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    if threshold.is_none() {
        tracing::warn!("ignoring non-numeric lowTimeThreshold: {}", value);
    }
    threshold
}

fn normalize_color_field(value: &Value) -> Option<DisplayColor> {
    is_truthy(value).then(|| to_display_color(&ColorInput::from_json(value)))
}

/// Host truthiness: `null`, `false`, zero and `""` do not count as set.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Reasons an options payload was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionsError {
    /// Payload is not valid JSON.
    Json(String),

    /// Payload is valid JSON but not an object.
    NotAnObject,
}

impl core::fmt::Display for OptionsError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            OptionsError::Json(err) => write!(f, "invalid JSON options: {}", err),
            OptionsError::NotAnObject => write!(f, "options payload must be a JSON object"),
        }
    }
}

impl std::error::Error for OptionsError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truthiness_follows_host_rules() {
        assert!(!is_truthy(&Value::Null));
        assert!(!is_truthy(&serde_json::json!(0)));
        assert!(!is_truthy(&serde_json::json!("")));
        assert!(!is_truthy(&serde_json::json!(false)));
        assert!(is_truthy(&serde_json::json!({})));
        assert!(is_truthy(&serde_json::json!("red")));
    }

    #[test]
    fn falsy_colors_do_not_override() {
        let options = TimerOptions::parse(r#"{"timerColor": "", "lowTimeColor": null}"#).unwrap();
        assert_eq!(options.timer_color, None);
        assert_eq!(options.low_time_color, None);
    }

    #[test]
    fn truthy_non_color_value_falls_back_to_white() {
        let options = TimerOptions::parse(r#"{"timerColor": 7}"#).unwrap();
        assert_eq!(options.timer_color, Some(DisplayColor::passthrough("white")));
    }

    #[test]
    fn non_object_payload_is_rejected() {
        assert_eq!(TimerOptions::parse("[1, 2]"), Err(OptionsError::NotAnObject));
        assert_eq!(TimerOptions::parse("null"), Err(OptionsError::NotAnObject));
    }

    #[test]
    fn numeric_string_threshold_is_accepted() {
        let options = TimerOptions::parse(r#"{"lowTimeThreshold": " 10 "}"#).unwrap();
        assert_eq!(options.low_time_threshold, Some(10.0));
    }

    #[test]
    fn non_numeric_threshold_is_skipped() {
        let options = TimerOptions::parse(r#"{"lowTimeThreshold": "ten"}"#).unwrap();
        assert_eq!(options.low_time_threshold, None);

        let options = TimerOptions::parse(r#"{"lowTimeThreshold": [1]}"#).unwrap();
        assert_eq!(options.low_time_threshold, None);
    }
}
