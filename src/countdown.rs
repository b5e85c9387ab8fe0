//! Host-driven countdown with threshold-based coloring.
//!
//! Provides [`CountdownTimer`], which holds the time left and its configuration and
//! pushes label, color and critical flag to a [`TimerSurface`]. The timer owns no
//! clock: the host drives it through [`start`](CountdownTimer::start),
//! [`update`](CountdownTimer::update) and [`stop`](CountdownTimer::stop).

use crate::command::HostCall;
use crate::config::TimerConfig;
use crate::time::{ClockLabel, format_clock, sanitize_duration};
use crate::types::DisplayColor;

/// Label shown before the host has started a countdown.
pub const WAITING_LABEL: &str = "WAITING FOR UE...";

/// Trait for abstracting the widget that shows the countdown.
///
/// Implement this for whatever renders the label (DOM node, texture, terminal).
pub trait TimerSurface {
    /// Replaces the label text.
    fn set_text(&mut self, text: &str);

    /// Sets the label color. Handle any rendering errors internally - this method
    /// cannot fail.
    fn set_color(&mut self, color: &DisplayColor);

    /// Toggles the critical presentation (e.g. a pulsing style).
    fn set_critical(&mut self, critical: bool);
}

/// The current state of a countdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TimerState {
    /// No countdown active.
    Idle,
    /// Duration and config set, no time pushed yet.
    Armed,
    /// Receiving time updates from the host.
    Live,
}

/// What the surface should show, derived from the timer state.
#[derive(Debug, Clone, PartialEq)]
pub struct TimerFrame {
    /// `MM:SS` label of the clamped time.
    pub label: ClockLabel,
    /// Active color.
    pub color: DisplayColor,
    /// Whether time is at or below the low-time threshold.
    pub critical: bool,
}

/// Countdown state for a single widget.
///
/// Each instance owns its surface and configuration; there is no shared state
/// between instances.
pub struct CountdownTimer<S: TimerSurface> {
    surface: S,
    state: TimerState,
    time_left: f64,
    // Set by `update`, cleared by `start`; `stop` leaves it alone.
    time_pushed: bool,
    config: TimerConfig,
}

impl<S: TimerSurface> CountdownTimer<S> {
    /// Creates an idle timer with default configuration and shows the waiting label.
    pub fn new(surface: S) -> Self {
        Self::with_config(surface, TimerConfig::default())
    }

    /// Creates an idle timer with the given configuration.
    pub fn with_config(mut surface: S, config: TimerConfig) -> Self {
        surface.set_text(WAITING_LABEL);

        Self {
            surface,
            state: TimerState::Idle,
            time_left: 0.0,
            time_pushed: false,
            config,
        }
    }

    /// Dispatches a host call to the matching method.
    pub fn handle_call(&mut self, call: HostCall) {
        match call {
            HostCall::Start { duration, options } => self.start(duration, options.as_deref()),
            HostCall::Update { seconds } => self.update(seconds),
            HostCall::Stop => self.stop(),
        }
    }

    /// Arms a new countdown. Can be called from any state.
    ///
    /// Non-finite or non-positive durations use
    /// [`DEFAULT_DURATION_SECS`](crate::time::DEFAULT_DURATION_SECS). A malformed
    /// `options` payload is logged and ignored; the previous configuration stays.
    pub fn start(&mut self, duration: f64, options: Option<&str>) {
        self.state = TimerState::Armed;
        self.time_pushed = false;
        self.time_left = sanitize_duration(duration);

        if let Some(payload) = options.filter(|p| !p.is_empty()) {
            if let Err(err) = self.config.apply_options(payload) {
                tracing::error!("ignoring countdown options: {}", err);
            }
        }

        tracing::debug!(time_left = self.time_left, "countdown armed");
        self.present();
    }

    /// Sets the time left as pushed by the host.
    ///
    /// The stored value is not clamped; only the label is. The last call wins.
    pub fn update(&mut self, seconds: f64) {
        self.time_left = seconds;
        self.time_pushed = true;
        self.state = TimerState::Live;
        self.present();
    }

    /// Ends the countdown. Configuration and the last label are kept.
    pub fn stop(&mut self) {
        if self.state != TimerState::Idle {
            tracing::debug!("countdown stopped");
        }
        self.state = TimerState::Idle;
    }

    /// Projects the current state into label, color and critical flag.
    pub fn render(&self) -> TimerFrame {
        TimerFrame {
            label: format_clock(self.time_left),
            color: self.active_color().clone(),
            critical: self.is_critical(),
        }
    }

    /// Returns true once the host has pushed a time at or below the threshold.
    ///
    /// A fresh `start` clears the flag until the next update. `stop` keeps it, so
    /// the projection still matches what the surface shows.
    pub fn is_critical(&self) -> bool {
        self.time_pushed && self.time_left <= self.config.low_time_threshold
    }

    /// Returns the color the label should currently use.
    pub fn active_color(&self) -> &DisplayColor {
        if self.is_critical() {
            &self.config.low_time_color
        } else {
            &self.config.timer_color
        }
    }

    fn present(&mut self) {
        let frame = self.render();
        self.surface.set_color(&frame.color);
        self.surface.set_critical(frame.critical);
        self.surface.set_text(&frame.label);
    }

    /// Returns the current state of the timer.
    pub fn state(&self) -> TimerState {
        self.state
    }

    /// Returns true while the host is pushing updates.
    pub fn is_running(&self) -> bool {
        self.state == TimerState::Live
    }

    /// Returns the stored (unclamped) time left in seconds.
    pub fn time_left(&self) -> f64 {
        self.time_left
    }

    /// Returns the current configuration.
    pub fn config(&self) -> &TimerConfig {
        &self.config
    }

    /// Returns the surface.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Consumes the timer and returns its surface.
    pub fn into_surface(self) -> S {
        self.surface
    }
}
