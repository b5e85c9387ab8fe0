//! Command-based control for countdown timers.

/// Calls the host can make into a countdown.
#[derive(Debug, Clone, PartialEq)]
pub enum HostCall {
    /// Arm a countdown with an optional serialized options object.
    Start {
        duration: f64,
        options: Option<String>,
    },
    /// Push the current time left.
    Update { seconds: f64 },
    /// Tear down.
    Stop,
}

impl HostCall {
    /// Creates a start call.
    pub fn start(duration: f64, options: Option<&str>) -> Self {
        HostCall::Start {
            duration,
            options: options.map(String::from),
        }
    }

    /// Creates an update call.
    pub fn update(seconds: f64) -> Self {
        HostCall::Update { seconds }
    }
}
