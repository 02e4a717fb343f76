use serde::{Deserialize, Serialize};

use crate::{
    reporting::{
        color::ColorChoice,
        error::KoiiError,
        level::DebugLevel,
        route::{TableStyle, DEFAULT_COLUMN_WIDTH},
    },
    routing::methods::RecognizedMethods,
};

/// The configuration for a route listing.
/// Every field is optional in JSON and falls back to its default.
///
/// ## Example
/// ```json
/// {
///     "columnWidth": 12,
///     "methods": ["GET", "POST", "DELETE", "PUT", "PATCH"],
///     "color": "auto",
///     "debugLevel": "low"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct KoiiConfig {
    pub column_width: usize,
    pub methods: Vec<String>,
    pub color: ColorChoice,
    pub debug_level: DebugLevel,
}

impl Default for KoiiConfig {
    fn default() -> Self {
        KoiiConfig {
            column_width: DEFAULT_COLUMN_WIDTH,
            methods: RecognizedMethods::default().names(),
            color: ColorChoice::Auto,
            debug_level: DebugLevel::Low,
        }
    }
}

impl KoiiConfig {
    pub fn from_json(json: &str) -> Result<Self, KoiiError> {
        let config: KoiiConfig =
            serde_json::from_str(json).map_err(|e| KoiiError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn with_column_width(mut self, column_width: usize) -> Self {
        self.column_width = column_width;
        self
    }

    pub fn with_methods<S: Into<String>>(mut self, methods: impl IntoIterator<Item = S>) -> Self {
        self.methods = methods.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_color(mut self, color: ColorChoice) -> Self {
        self.color = color;
        self
    }

    pub fn with_debug_level(mut self, debug_level: DebugLevel) -> Self {
        self.debug_level = debug_level;
        self
    }

    pub fn validate(&self) -> Result<(), KoiiError> {
        if self.column_width == 0 {
            return Err(KoiiError::InvalidConfig(
                "columnWidth must be at least 1".to_string(),
            ));
        }
        self.recognized_methods().map(|_| ())
    }

    pub fn recognized_methods(&self) -> Result<RecognizedMethods, KoiiError> {
        RecognizedMethods::parse(self.methods.as_slice()).map_err(KoiiError::InvalidConfig)
    }

    pub fn table_style(&self) -> TableStyle {
        TableStyle {
            column_width: self.column_width,
            color: self.color.resolve(),
        }
    }
}
