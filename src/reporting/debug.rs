use chrono::prelude::*;
use colored::Colorize;

use super::level::DebugLevel;

fn timestamped(name: &str, text: &str) -> String {
    let now = Local::now();
    let time = now.format("%d/%m %H:%M:%S");
    let prefix = format!("[{} {}]", name, time);
    format!("{}: {}", prefix.bright_cyan(), text)
}

pub fn info(level: DebugLevel, text: &str) {
    if level.is_high() {
        eprintln!("{}", timestamped("Info", text));
    }
}

fn trace_line(level: DebugLevel, text: &str) -> Option<String> {
    level.is_max().then(|| timestamped("Trace", text))
}

/// Per-item output, only shown at `DebugLevel::Max`.
pub fn trace(level: DebugLevel, text: &str) {
    if let Some(line) = trace_line(level, text) {
        eprintln!("{}", line);
    }
}
