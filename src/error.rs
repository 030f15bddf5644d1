//! Error types.
//!
//! Two layers, mirroring the split between the pure engine and the binary:
//!
//! - [`EngineError`] is returned by the classification/aggregation/target
//!   code. Every variant is a local validation failure reported to the
//!   immediate caller; the engine performs no I/O and never retries.
//! - [`AppError`] is the CLI-boundary error: a message plus a process exit
//!   code, printed by `main` via `Display`.

/// Validation failures raised by the grading engine.
#[derive(Clone, PartialEq)]
pub enum EngineError {
    /// The id does not name one of the registered grading standards.
    UnknownStandard(String),
    /// A score outside 0..=100 reached `classify` without being clamped.
    InvalidScore(u8),
    /// A letter token with no entry in the standard's inverse table.
    UnknownGrade {
        token: String,
        standard: &'static str,
    },
    /// A malformed target-solver input (non-positive units, non-finite goal).
    InvalidInput(String),
}

impl std::fmt::Display for EngineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EngineError::UnknownStandard(id) => {
                write!(f, "Unknown grading standard '{id}'.")
            }
            EngineError::InvalidScore(score) => {
                write!(f, "Score {score} is outside the 0-100 range.")
            }
            EngineError::UnknownGrade { token, standard } => {
                write!(
                    f,
                    "The grade '{token}' is not valid for the '{standard}' grading standard."
                )
            }
            EngineError::InvalidInput(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::fmt::Debug for EngineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "EngineError({self})")
    }
}

impl std::error::Error for EngineError {}

/// CLI-boundary error carrying the process exit code.
///
/// Exit codes: 2 = invalid input/usage, 3 = unknown standard or record,
/// 4 = data-file failure.
#[derive(Clone)]
pub struct AppError {
    exit_code: u8,
    message: String,
}

impl AppError {
    pub fn new(exit_code: u8, message: impl Into<String>) -> Self {
        Self {
            exit_code,
            message: message.into(),
        }
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }
}

impl From<EngineError> for AppError {
    fn from(err: EngineError) -> Self {
        let exit_code = match err {
            EngineError::UnknownStandard(_) => 3,
            EngineError::InvalidScore(_)
            | EngineError::UnknownGrade { .. }
            | EngineError::InvalidInput(_) => 2,
        };
        AppError::new(exit_code, err.to_string())
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppError")
            .field("exit_code", &self.exit_code)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for AppError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn engine_errors_map_to_exit_codes() {
        let app: AppError = EngineError::UnknownStandard("xx".to_string()).into();
        assert_eq!(app.exit_code(), 3);

        let app: AppError = EngineError::InvalidScore(120).into();
        assert_eq!(app.exit_code(), 2);

        let app: AppError = EngineError::UnknownGrade {
            token: "Z".to_string(),
            standard: "ng",
        }
        .into();
        assert_eq!(app.exit_code(), 2);
    }

    #[test]
    fn unknown_grade_message_names_token_and_standard() {
        let err = EngineError::UnknownGrade {
            token: "AB".to_string(),
            standard: "us",
        };
        let msg = err.to_string();
        assert!(msg.contains("'AB'"), "{msg}");
        assert!(msg.contains("'us'"), "{msg}");
    }
}
