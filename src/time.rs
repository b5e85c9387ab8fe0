//! Countdown time helpers: duration sanitizing and `MM:SS` labels.

use core::fmt::Write;

/// Duration used when the host passes a non-finite or non-positive value.
pub const DEFAULT_DURATION_SECS: f64 = 60.0;

/// Fixed-capacity clock label. Fits any `u64` minute count.
pub type ClockLabel = heapless::String<24>;

/// Returns `duration` if it is finite and positive, otherwise the default.
#[inline]
pub fn sanitize_duration(duration: f64) -> f64 {
    if duration.is_finite() && duration > 0.0 {
        duration
    } else {
        DEFAULT_DURATION_SECS
    }
}

/// Clamps a time value for display. Negative and NaN values read as zero.
#[inline]
pub fn display_seconds(seconds: f64) -> f64 {
    if seconds > 0.0 { seconds } else { 0.0 }
}

/// Formats seconds as zero-padded `MM:SS`.
///
/// Minutes are not wrapped into hours, so 6000 seconds is `"100:00"`.
pub fn format_clock(seconds: f64) -> ClockLabel {
    let t = display_seconds(seconds);
    let minutes = (t / 60.0).floor() as u64;
    let secs = (t % 60.0).floor() as u64;

    let mut label = ClockLabel::new();
    let written = write!(label, "{:02}:{:02}", minutes, secs);
    debug_assert!(written.is_ok(), "clock label capacity covers any u64 minute count");
    label
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_rejects_non_positive_and_non_finite() {
        assert_eq!(sanitize_duration(90.0), 90.0);
        assert_eq!(sanitize_duration(0.0), DEFAULT_DURATION_SECS);
        assert_eq!(sanitize_duration(-3.0), DEFAULT_DURATION_SECS);
        assert_eq!(sanitize_duration(f64::NAN), DEFAULT_DURATION_SECS);
        assert_eq!(sanitize_duration(f64::INFINITY), DEFAULT_DURATION_SECS);
    }

    #[test]
    fn format_clock_pads_and_floors() {
        assert_eq!(format_clock(125.0).as_str(), "02:05");
        assert_eq!(format_clock(59.9).as_str(), "00:59");
        assert_eq!(format_clock(-5.0).as_str(), "00:00");
        assert_eq!(format_clock(f64::NAN).as_str(), "00:00");
        assert_eq!(format_clock(6000.0).as_str(), "100:00");
    }

    #[test]
    fn format_clock_survives_huge_values() {
        let label = format_clock(f64::MAX);
        assert!(label.as_str().starts_with("18446744073709551615:"));
    }
}
