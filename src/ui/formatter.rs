use crate::generator::Mock;
use crossterm::style::Stylize;
use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};

/// Pretty printing utilities for command output
pub struct Formatter;

impl Formatter {
    /// Format a call signature.
    pub fn format_method(name: &str, params: &[&str]) -> String {
        format!("{}({})", name, params.join(", "))
    }

    /// Format the shape of a generated mock: its method set and recorder keys.
    pub fn format_mock_summary(mock: &Mock) -> String {
        let class = &mock.class_definition;
        let mut lines = vec![format!("Mock class: {}", class.name())];

        lines.push("Methods:".to_string());
        let methods = class.method_names();
        if methods.is_empty() {
            lines.push("  (none)".to_string());
        } else {
            lines.extend(methods.iter().map(|name| format!("  - {}", name)));
        }

        lines.push("Recorders:".to_string());
        lines.extend(mock.recorders.keys().map(|key| format!("  - {}", key)));
        lines.join("\n")
    }

    /// Format an info message in blue.
    pub fn info(message: impl AsRef<str>) -> String {
        Self::apply_color(message.as_ref(), ColorKind::Info)
    }

    /// Format a success message in green.
    pub fn success(message: impl AsRef<str>) -> String {
        Self::apply_color(message.as_ref(), ColorKind::Success)
    }

    /// Configure whether ANSI colors are enabled.
    pub fn configure_colors(enable: bool) {
        COLOR_ENABLED.store(enable, Ordering::Relaxed);
    }

    /// Auto-configure color output based on environment.
    pub fn configure_colors_from_env() {
        let no_color = std::env::var_os("NO_COLOR").is_some();
        Self::configure_colors(!no_color);
    }

    /// Set output verbosity: 0 = quiet, 1 = normal, 2 = verbose.
    pub fn set_verbosity(level: u8) {
        VERBOSITY.store(level, Ordering::Relaxed);
    }

    pub fn is_quiet() -> bool {
        VERBOSITY.load(Ordering::Relaxed) == 0
    }

    pub fn is_verbose() -> bool {
        VERBOSITY.load(Ordering::Relaxed) >= 2
    }

    fn apply_color(message: &str, kind: ColorKind) -> String {
        if !COLOR_ENABLED.load(Ordering::Relaxed) {
            return message.to_string();
        }

        match kind {
            ColorKind::Info => format!("{}", message.blue()),
            ColorKind::Success => format!("{}", message.green()),
        }
    }
}

#[derive(Copy, Clone)]
enum ColorKind {
    Info,
    Success,
}

static COLOR_ENABLED: AtomicBool = AtomicBool::new(true);
static VERBOSITY: AtomicU8 = AtomicU8::new(1);
