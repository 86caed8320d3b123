//! Output format selection for CLI commands.

/// How command results are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text (default)
    #[default]
    Text,
    /// Machine-readable JSON envelope
    Json,
}

impl OutputFormat {
    /// Resolve the format from a `--json` flag.
    pub fn from_json_flag(json: bool) -> Self {
        if json { Self::Json } else { Self::Text }
    }

    pub fn is_json(self) -> bool {
        self == Self::Json
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_json_flag() {
        assert_eq!(OutputFormat::from_json_flag(false), OutputFormat::Text);
        assert_eq!(OutputFormat::from_json_flag(true), OutputFormat::Json);
        assert!(OutputFormat::Json.is_json());
        assert!(!OutputFormat::default().is_json());
    }
}
