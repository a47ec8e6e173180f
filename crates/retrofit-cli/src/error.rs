//! Errors that end a `retrofit` run, and how they are reported.
//!
//! A run fails either because a renderer rejected its input or because the
//! configuration could not be loaded. Both exit non-zero with hints on stderr.

use std::error::Error;

use owo_colors::{OwoColorize, Style};
use thiserror::Error;

use retrofit_core::error::RetrofitError;

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

/// CLI error types.
#[derive(Debug, Error)]
pub enum CliError {
    /// A renderer rejected its input.
    #[error("Rendering failed: {0}")]
    Core(#[from] RetrofitError),

    /// A configuration file could not be read or parsed.
    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl From<anyhow::Error> for CliError {
    fn from(err: anyhow::Error) -> Self {
        CliError::ConfigError {
            message: format!("{err:#}"),
            source: Some(err.into()),
        }
    }
}

impl CliError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Core(core) => core.suggestions(),
            Self::ConfigError { message, .. } => vec![
                format!("Configuration issue: {message}"),
                format!(
                    "Check your config file at {}",
                    crate::config::AppConfig::config_path().display()
                ),
                "Valid policies are 'strict' and 'lenient'".into(),
            ],
        }
    }

    /// Get the error category for styling and exit codes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Core(_) => ErrorCategory::UserError,
            Self::ConfigError { .. } => ErrorCategory::Configuration,
        }
    }

    /// Exit code to pass to the OS: 2 for rejected input, 4 for configuration.
    pub fn exit_code(&self) -> u8 {
        match self.category() {
            ErrorCategory::UserError => 2,
            ErrorCategory::Configuration => 4,
        }
    }

    /// The stderr report: the error, its causes when `verbose`, then hints.
    ///
    /// `colored` only adds ANSI styling; the words are the same either way.
    pub fn report(&self, verbose: bool, colored: bool) -> String {
        let paint = |text: &str, style: Style| {
            if colored {
                text.style(style).to_string()
            } else {
                text.to_owned()
            }
        };

        let mut out = format!("\n{} {self}\n", paint("error:", Style::new().red().bold()));

        if verbose {
            let mut cause = self.source();
            while let Some(err) = cause {
                out.push_str(&format!("  caused by: {err}\n"));
                cause = err.source();
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            out.push_str(&format!("\n{}\n", paint("hint:", Style::new().yellow().bold())));
            for suggestion in &suggestions {
                out.push_str(&format!("  - {suggestion}\n"));
            }
        }

        if !verbose {
            out.push_str(&format!(
                "\n{}\n",
                paint(
                    "Re-run with -v to see which renderer was active.",
                    Style::new().dimmed()
                )
            ));
        }

        out
    }

    /// Log the error, with the rejected argument as structured fields.
    pub fn log(&self) {
        match self {
            Self::Core(RetrofitError::InvalidArgument {
                parameter,
                requirement,
            }) => tracing::warn!(parameter, %requirement, "renderer rejected its input"),
            Self::ConfigError { message, source } => {
                tracing::error!(reason = %message, "configuration could not be loaded");
                if let Some(source) = source {
                    tracing::debug!(cause = %source, "configuration error source");
                }
            }
        }
    }
}

/// Error categories for classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Invalid arguments reached a renderer.
    UserError,
    /// Configuration error.
    Configuration,
}

#[cfg(test)]
mod tests {
    use super::*;
    use retrofit_core::domain::Requirement;

    fn blank_name() -> CliError {
        CliError::from(RetrofitError::invalid_argument(
            "name",
            Requirement::NonBlank,
        ))
    }

    fn config_error() -> CliError {
        CliError::ConfigError {
            message: "x".into(),
            source: None,
        }
    }

    #[test]
    fn core_error_is_user_error() {
        assert_eq!(blank_name().category(), ErrorCategory::UserError);
        assert_eq!(blank_name().exit_code(), 2);
    }

    #[test]
    fn exit_code_configuration() {
        assert_eq!(config_error().exit_code(), 4);
    }

    #[test]
    fn anyhow_becomes_config_error() {
        let err = CliError::from(anyhow::anyhow!("bad toml"));
        assert!(matches!(err, CliError::ConfigError { .. }));
        assert!(err.to_string().contains("bad toml"));
    }

    #[test]
    fn plain_report_names_parameter_and_hints() {
        let s = blank_name().report(false, false);
        assert!(s.contains("error: Rendering failed: invalid argument 'name': must be non-blank"));
        assert!(s.contains("  - Pass a value for 'name' that must be non-blank"));
        assert!(s.contains("Re-run with -v"));
        assert!(!s.contains('\u{1b}'));
    }

    #[test]
    fn verbose_report_lists_causes_instead_of_rerun_hint() {
        let s = blank_name().report(true, false);
        assert!(s.contains("caused by: invalid argument 'name'"));
        assert!(!s.contains("Re-run with -v"));
    }

    #[test]
    fn colored_report_keeps_the_words() {
        let s = config_error().report(false, true);
        assert!(s.contains('\u{1b}'));
        assert!(s.contains("Configuration error: x"));
        assert!(s.contains("'strict' and 'lenient'"));
    }

    #[test]
    fn config_suggestions_list_policies() {
        assert!(
            config_error()
                .suggestions()
                .iter()
                .any(|s| s.contains("lenient"))
        );
    }
}
