// LoadSleuth - util/error.rs
//
// Typed error hierarchy with context-preserving error chains.
// No string-based error propagation (DevWorkflow Part A Rule 2).
// All errors preserve the causal chain for diagnostic logging.
//
// Unrecognised log lines are NOT errors and never appear here: they simply
// fail every pattern test in the extractor.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Top-level error type for all LoadSleuth operations.
/// Errors are categorised by the subsystem that produced them.
#[derive(Debug)]
pub enum LoadSleuthError {
    /// Reading an input stream failed.
    Parse(ParseError),

    /// Writing the report or an export failed.
    Export(ExportError),

    /// Configuration loading or validation failed.
    Config(ConfigError),

    /// I/O error with path context (e.g. opening an input file).
    Io {
        path: PathBuf,
        operation: &'static str,
        source: io::Error,
    },
}

impl fmt::Display for LoadSleuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "Input error: {e}"),
            Self::Export(e) => write!(f, "Output error: {e}"),
            Self::Config(e) => write!(f, "Configuration error: {e}"),
            Self::Io {
                path,
                operation,
                source,
            } => write!(
                f,
                "I/O error during {operation} on '{}': {source}",
                path.display()
            ),
        }
    }
}

impl std::error::Error for LoadSleuthError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::Export(e) => Some(e),
            Self::Config(e) => Some(e),
            Self::Io { source, .. } => Some(source),
        }
    }
}

// ---------------------------------------------------------------------------
// Parse errors
// ---------------------------------------------------------------------------

/// Errors raised while reading an input stream line by line.
#[derive(Debug)]
pub enum ParseError {
    /// I/O error while reading a line from the input.
    Io {
        input: String,
        line_number: u64,
        source: io::Error,
    },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io {
                input,
                line_number,
                source,
            } => write!(f, "'{input}' line {line_number}: I/O error: {source}"),
        }
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
        }
    }
}

impl From<ParseError> for LoadSleuthError {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}

// ---------------------------------------------------------------------------
// Export errors
// ---------------------------------------------------------------------------

/// Errors related to writing records (table, CSV, JSON).
#[derive(Debug)]
pub enum ExportError {
    /// I/O error writing to the output.
    Io { target: String, source: io::Error },

    /// CSV serialisation error.
    Csv { target: String, source: csv::Error },

    /// JSON serialisation error.
    Json {
        target: String,
        source: serde_json::Error,
    },
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { target, source } => {
                write!(f, "Write error on '{target}': {source}")
            }
            Self::Csv { target, source } => {
                write!(f, "CSV export error on '{target}': {source}")
            }
            Self::Json { target, source } => {
                write!(f, "JSON export error on '{target}': {source}")
            }
        }
    }
}

impl std::error::Error for ExportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Csv { source, .. } => Some(source),
            Self::Json { source, .. } => Some(source),
        }
    }
}

impl From<ExportError> for LoadSleuthError {
    fn from(e: ExportError) -> Self {
        Self::Export(e)
    }
}

// ---------------------------------------------------------------------------
// Config errors
// ---------------------------------------------------------------------------

/// Errors related to configuration loading.
///
/// Config problems never abort a run: `load_config` downgrades them to
/// warnings. The variants exist so the message text is built in one place.
#[derive(Debug)]
pub enum ConfigError {
    /// TOML parsing failed.
    TomlParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// A config value is out of the allowed range.
    ValueOutOfRange {
        field: String,
        value: String,
        expected: String,
    },

    /// I/O error reading config file.
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TomlParse { path, source } => {
                write!(f, "Config parse error '{}': {source}", path.display())
            }
            Self::ValueOutOfRange {
                field,
                value,
                expected,
            } => write!(
                f,
                "Config '{field}' = '{value}' is out of range. Expected: {expected}"
            ),
            Self::Io { path, source } => {
                write!(f, "Config I/O error '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::TomlParse { source, .. } => Some(source),
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<ConfigError> for LoadSleuthError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

/// Convenience type alias for LoadSleuth results.
pub type Result<T> = std::result::Result<T, LoadSleuthError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_parse_error_display_includes_input_and_line() {
        let err = ParseError::Io {
            input: "ollama.log".to_string(),
            line_number: 42,
            source: io::Error::new(io::ErrorKind::Other, "disk gone"),
        };
        let msg = err.to_string();
        assert!(msg.contains("ollama.log"));
        assert!(msg.contains("line 42"));
        assert!(msg.contains("disk gone"));
    }

    #[test]
    fn test_top_level_error_preserves_source_chain() {
        let err: LoadSleuthError = ExportError::Io {
            target: "<stdout>".to_string(),
            source: io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"),
        }
        .into();
        assert!(err.to_string().starts_with("Output error:"));

        let export = err.source().expect("export source");
        let io = export.source().expect("io source");
        assert_eq!(io.to_string(), "pipe closed");
    }

    #[test]
    fn test_config_value_out_of_range_has_no_source() {
        let err = ConfigError::ValueOutOfRange {
            field: "[output] format".to_string(),
            value: "xml".to_string(),
            expected: "table, csv, json, jsonl".to_string(),
        };
        assert!(err.source().is_none());
        assert!(err.to_string().contains("xml"));
    }
}
