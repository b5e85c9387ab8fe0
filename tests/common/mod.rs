//! Shared test infrastructure for overlay-timer integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use overlay_timer::{DisplayColor, HostColor, TimerSurface};

// ============================================================================
// Mock Surface
// ============================================================================

/// One call made against the surface.
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceCall {
    Text(String),
    Color(String),
    Critical(bool),
}

/// Mock surface that records every call for testing
pub struct MockSurface {
    text: String,
    color: Option<String>,
    critical: bool,
    history: Vec<SurfaceCall>,
}

impl MockSurface {
    pub fn new() -> Self {
        Self {
            text: String::new(),
            color: None,
            critical: false,
            history: Vec::new(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn color(&self) -> Option<&str> {
        self.color.as_deref()
    }

    pub fn critical(&self) -> bool {
        self.critical
    }

    pub fn history(&self) -> &[SurfaceCall] {
        &self.history
    }
}

impl TimerSurface for MockSurface {
    fn set_text(&mut self, text: &str) {
        self.text = text.into();
        self.history.push(SurfaceCall::Text(text.into()));
    }

    fn set_color(&mut self, color: &DisplayColor) {
        let css = color.to_css();
        self.color = Some(css.clone());
        self.history.push(SurfaceCall::Color(css));
    }

    fn set_critical(&mut self, critical: bool) {
        self.critical = critical;
        self.history.push(SurfaceCall::Critical(critical));
    }
}

// ============================================================================
// Test Helper Functions
// ============================================================================

/// Compare two host colors with floating-point tolerance
pub fn colors_equal(a: HostColor, b: HostColor) -> bool {
    colors_equal_epsilon(a, b, 0.001)
}

/// Compare two host colors with custom epsilon
pub fn colors_equal_epsilon(a: HostColor, b: HostColor, epsilon: f32) -> bool {
    (a.red - b.red).abs() < epsilon
        && (a.green - b.green).abs() < epsilon
        && (a.blue - b.blue).abs() < epsilon
        && (a.alpha - b.alpha).abs() < epsilon
}
