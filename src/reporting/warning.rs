use colored::*;

use super::level::DebugLevel;

fn warning_generic(level: DebugLevel, message: String, warning_name: &str) {
    if level.is_medium() {
        eprintln!("{}: {}", warning_name.yellow(), message);
    }
}

pub fn warning(level: DebugLevel, message: String) {
    warning_generic(level, message, "[Warning]");
}
