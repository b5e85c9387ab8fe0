#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`ColorInput`**: A host color before normalization (text, component object, or absent)
//! - **`DisplayColor`**: A display-native color, either passed through or resolved to `rgba(...)`
//! - **`HostColor`**: The host's four 0.0-1.0 channels, serialized as `{R, G, B, A}`
//! - **`to_display_color`** / **`to_host_color`**: Total translators between the two sides
//! - **`CountdownTimer`**: Host-driven countdown state that pushes frames to a surface
//! - **`TimerSurface`**: Trait to implement for the widget showing the countdown
//! - **`TimerConfig`**: Low-time threshold and the two label colors
//! - **`HostCall`**: Calls the host can dispatch into a timer
//! - **`CreditsRoll`** / **`ScrollSurface`**: Credits widget that resets its animation on load
//!
//! Host colors use `f32` channels in the 0.0-1.0 range; display colors use 0-255
//! bytes. Channel scaling always rounds to nearest, so 0.5 becomes 128.

// Re-export the palette types that appear in the public API
pub use palette::{Srgb, Srgba};

pub mod colors;
pub mod command;
pub mod config;
pub mod countdown;
pub mod credits;
pub mod time;
pub mod types;

pub use colors::{FALLBACK_COLOR, to_display_color, to_host_color, try_to_host_color};
pub use command::HostCall;
pub use config::{DEFAULT_LOW_TIME_THRESHOLD, OptionsError, TimerConfig, TimerOptions};
pub use countdown::{CountdownTimer, TimerFrame, TimerState, TimerSurface, WAITING_LABEL};
pub use credits::{CreditsRoll, ScrollSurface};
pub use time::{ClockLabel, DEFAULT_DURATION_SECS, format_clock};
pub use types::{ColorError, ColorInput, DisplayColor, HostColor};
