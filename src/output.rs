// ABOUTME: Output formatting for CLI feedback.
// ABOUTME: Supports normal, quiet (CI), and JSON output modes.

use serde::Serialize;
use std::time::Instant;

/// Output mode for CLI feedback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Human-friendly output with per-phase progress messages
    Normal,
    /// Minimal output for CI (only final result)
    Quiet,
    /// JSON lines for scripting
    Json,
}

/// Handles CLI output based on the configured mode.
pub struct Output {
    mode: OutputMode,
    start_time: Option<Instant>,
}

impl Output {
    pub fn new(mode: OutputMode) -> Self {
        Self {
            mode,
            start_time: None,
        }
    }

    /// Start timing the run.
    pub fn start_timer(&mut self) {
        self.start_time = Some(Instant::now());
    }

    fn elapsed_secs(&self) -> Option<f64> {
        self.start_time.map(|t| t.elapsed().as_secs_f64())
    }

    /// Announce a pipeline phase (suppressed in quiet/json mode).
    pub fn phase(&self, message: &str) {
        if self.mode == OutputMode::Normal {
            println!("{message}");
        }
    }

    /// Print a progress detail line (suppressed in quiet/json mode).
    pub fn progress(&self, message: &str) {
        if self.mode == OutputMode::Normal {
            println!("  {message}");
        }
    }

    /// Print a non-fatal warning.
    pub fn warning(&self, message: &str) {
        match self.mode {
            OutputMode::Normal | OutputMode::Quiet => eprintln!("Warning: {message}"),
            OutputMode::Json => self.emit(JsonEvent {
                event: "warning",
                message,
                duration_secs: None,
            }),
        }
    }

    /// Print the final success line with timing when available.
    pub fn success(&self, message: &str) {
        match self.mode {
            OutputMode::Normal => match self.elapsed_secs() {
                Some(elapsed) => println!("{message} ({elapsed:.1}s)"),
                None => println!("{message}"),
            },
            OutputMode::Quiet => println!("{message}"),
            OutputMode::Json => self.emit(JsonEvent {
                event: "success",
                message,
                duration_secs: self.elapsed_secs(),
            }),
        }
    }

    /// Print a fatal error message.
    pub fn error(&self, message: &str) {
        match self.mode {
            OutputMode::Normal | OutputMode::Quiet => eprintln!("Error: {message}"),
            OutputMode::Json => {
                let event = JsonEvent {
                    event: "error",
                    message,
                    duration_secs: self.elapsed_secs(),
                };
                if let Ok(json) = serde_json::to_string(&event) {
                    eprintln!("{json}");
                }
            }
        }
    }

    fn emit(&self, event: JsonEvent<'_>) {
        if let Ok(json) = serde_json::to_string(&event) {
            println!("{json}");
        }
    }
}

#[derive(Serialize)]
struct JsonEvent<'a> {
    event: &'a str,
    message: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    duration_secs: Option<f64>,
}
