use std::{fmt, io};

use colored::*;
use thiserror::Error;

// Error codes:
pub static ERROR_INVALID_APPLICATION: i32 = 1;
pub static ERROR_INVALID_CONFIG: i32 = 2;
pub static ERROR_OUTPUT: i32 = 3;

/// Why an application handle was rejected before anything was printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidReason {
    /// No application was supplied at all.
    Missing,
    /// The route collection is absent or empty.
    NoRoutes,
    /// None of the routes were registered by the application or the framework.
    NoRecognizedRoutes,
}

impl fmt::Display for InvalidReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing => write!(f, "no application was given"),
            Self::NoRoutes => write!(f, "it has no routes"),
            Self::NoRecognizedRoutes => write!(f, "it has no application or predefined routes"),
        }
    }
}

#[derive(Debug, Error)]
pub enum KoiiError {
    #[error("Application isn't valid as {0}.")]
    InvalidApplication(InvalidReason),
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("Failed to write the route table: {0}")]
    Output(#[from] io::Error),
}

impl KoiiError {
    pub fn code(&self) -> i32 {
        match self {
            Self::InvalidApplication(_) => ERROR_INVALID_APPLICATION,
            Self::InvalidConfig(_) => ERROR_INVALID_CONFIG,
            Self::Output(_) => ERROR_OUTPUT,
        }
    }

    pub fn is_invalid_application(&self) -> bool {
        matches!(self, Self::InvalidApplication(_))
    }
}

fn error_generic(message: String, error_name: &str) {
    eprintln!("{} {}", error_name.red(), message);
}

pub fn error(message: String) {
    error_generic(message, "Error");
}
