use std::io::IsTerminal;

use colored::*;
use serde::{Deserialize, Serialize};

const ANSI_HEADER: &str = "\x1b[1;35;40m";
const ANSI_METHOD: &str = "\x1b[1;32;40m";
const ANSI_PATH: &str = "\x1b[0;37;40m";
const ANSI_RESET: &str = "\x1b[0m";

/// Requested coloring, as written in the configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorChoice {
    /// Color through `colored` when stdout is a terminal, plain text otherwise.
    #[default]
    Auto,
    /// Always emit raw ANSI escape sequences.
    Ansi,
    /// Always go through `colored` (which still honors `NO_COLOR`).
    Colored,
    /// Never emit escape sequences.
    Never,
}

impl ColorChoice {
    pub fn resolve(&self) -> ColorStrategy {
        self.resolve_for(std::io::stdout().is_terminal())
    }

    /// `terminal` tells whether the table goes to a terminal.
    pub fn resolve_for(&self, terminal: bool) -> ColorStrategy {
        match self {
            Self::Auto if terminal => ColorStrategy::Colored,
            Self::Auto => ColorStrategy::Plain,
            Self::Ansi => ColorStrategy::Ansi,
            Self::Colored => ColorStrategy::Colored,
            Self::Never => ColorStrategy::Plain,
        }
    }
}

/// How table cells are painted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorStrategy {
    Ansi,
    Colored,
    Plain,
}

impl ColorStrategy {
    pub fn header(&self, text: &str) -> String {
        match self {
            Self::Ansi => ansi(ANSI_HEADER, text),
            Self::Colored => text.bright_magenta().bold().to_string(),
            Self::Plain => text.to_string(),
        }
    }

    pub fn method(&self, text: &str) -> String {
        match self {
            Self::Ansi => ansi(ANSI_METHOD, text),
            Self::Colored => text.bright_green().bold().to_string(),
            Self::Plain => text.to_string(),
        }
    }

    pub fn path(&self, text: &str) -> String {
        match self {
            Self::Ansi => ansi(ANSI_PATH, text),
            Self::Colored => text.bright_yellow().to_string(),
            Self::Plain => text.to_string(),
        }
    }
}

fn ansi(code: &str, text: &str) -> String {
    format!("{}{}{}", code, text, ANSI_RESET)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ansi_cells_are_reset() {
        assert_eq!(
            ColorStrategy::Ansi.method("GET"),
            "\x1b[1;32;40mGET\x1b[0m"
        );
        assert_eq!(
            ColorStrategy::Ansi.header("PATH"),
            "\x1b[1;35;40mPATH\x1b[0m"
        );
        assert_eq!(
            ColorStrategy::Ansi.path("/users"),
            "\x1b[0;37;40m/users\x1b[0m"
        );
    }

    #[test]
    fn plain_is_untouched() {
        let plain = ColorStrategy::Plain;
        assert_eq!(plain.header("METHOD"), "METHOD");
        assert_eq!(plain.method("GET"), "GET");
        assert_eq!(plain.path("/users"), "/users");
    }

    #[test]
    fn explicit_choices_resolve_without_a_terminal() {
        assert_eq!(ColorChoice::Ansi.resolve(), ColorStrategy::Ansi);
        assert_eq!(ColorChoice::Colored.resolve(), ColorStrategy::Colored);
        assert_eq!(ColorChoice::Never.resolve(), ColorStrategy::Plain);
    }

    #[test]
    fn auto_degrades_off_a_terminal() {
        assert_eq!(ColorChoice::Auto.resolve_for(true), ColorStrategy::Colored);
        assert_eq!(ColorChoice::Auto.resolve_for(false), ColorStrategy::Plain);
        assert_eq!(ColorChoice::Ansi.resolve_for(false), ColorStrategy::Ansi);
        assert_eq!(ColorChoice::Never.resolve_for(true), ColorStrategy::Plain);
    }

    #[test]
    fn colored_paints_the_path_bright_yellow() {
        colored::control::set_override(true);
        let path = ColorStrategy::Colored.path("/users");
        colored::control::unset_override();
        assert_eq!(path, "\x1b[93m/users\x1b[0m");
    }
}
