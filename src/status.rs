//! Status Indicators
//!
//! Every status shown on the dashboard renders as a coloured dot with a short
//! label. Each status enumeration maps its members to a [`StatusIndicator`]
//! through a flat `match`; members without an entry render no indicator.

use std::fmt;

use serde::Serialize;

/// Visual severity of a status dot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Needs attention soon (amber).
    Warning,

    /// Terminal or failing state (red).
    Danger,

    /// Healthy state (green).
    Success,

    /// No particular emphasis (grey).
    Neutral,
}

impl Severity {
    /// Return the wire name of the severity.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Warning => "warning",
            Self::Danger => "danger",
            Self::Success => "success",
            Self::Neutral => "neutral",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Label and severity pair rendered as a status dot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct StatusIndicator {
    /// Human readable label
    pub label: &'static str,

    /// Dot colour
    pub severity: Severity,
}

impl StatusIndicator {
    /// Create a new indicator.
    #[must_use]
    pub const fn new(label: &'static str, severity: Severity) -> Self {
        Self { label, severity }
    }
}

impl fmt::Display for StatusIndicator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indicator_displays_label() {
        let indicator = StatusIndicator::new("Active", Severity::Success);

        assert_eq!(indicator.to_string(), "Active");
        assert_eq!(indicator.severity.to_string(), "success");
    }
}
