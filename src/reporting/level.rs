use serde::{Deserialize, Serialize};

/// Output verbosity level for diagnostics on stderr
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DebugLevel {
    /// Low debug output (only errors)
    #[default]
    Low,
    /// Medium debug output (errors and warnings)
    Medium,
    /// High debug output (errors, warnings and info)
    High,
    /// All debug output
    Max,
}

impl DebugLevel {
    pub fn is_medium(&self) -> bool {
        matches!(self, Self::Medium | Self::High | Self::Max)
    }

    pub fn is_high(&self) -> bool {
        matches!(self, Self::High | Self::Max)
    }

    pub fn is_max(&self) -> bool {
        matches!(self, Self::Max)
    }
}

#[cfg(test)]
mod tests {
    use super::DebugLevel;

    #[test]
    fn levels_are_cumulative() {
        assert!(!DebugLevel::Low.is_medium());
        assert!(DebugLevel::Medium.is_medium());
        assert!(!DebugLevel::Medium.is_high());
        assert!(DebugLevel::High.is_medium() && DebugLevel::High.is_high());
        assert!(DebugLevel::Max.is_max());
        assert!(!DebugLevel::High.is_max());
    }
}
