use thiserror::Error;

/// Errors raised while turning a sensor package into a workout summary.
#[derive(Error, Debug)]
pub enum WorkoutError {
    #[error("Unknown workout type: {0}")]
    UnknownWorkoutType(String),

    #[error("Workout type {code} expects {expected} parameters, got {actual}")]
    ArityMismatch {
        code: String,
        expected: usize,
        actual: usize,
    },

    #[error("Invalid parameter {field}: {value}")]
    InvalidParameter { field: &'static str, value: f64 },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error at {path}: {message}")]
    Json { path: String, message: String },
}

pub type Result<T> = std::result::Result<T, WorkoutError>;

impl WorkoutError {
    pub fn unknown(code: impl Into<String>) -> Self {
        Self::UnknownWorkoutType(code.into())
    }

    pub fn arity(code: impl Into<String>, expected: usize, actual: usize) -> Self {
        Self::ArityMismatch {
            code: code.into(),
            expected,
            actual,
        }
    }
}

impl From<serde_path_to_error::Error<serde_json::Error>> for WorkoutError {
    fn from(err: serde_path_to_error::Error<serde_json::Error>) -> Self {
        Self::Json {
            path: err.path().to_string(),
            message: err.into_inner().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = WorkoutError::unknown("XYZ");
        assert_eq!(err.to_string(), "Unknown workout type: XYZ");

        let err = WorkoutError::arity("RUN", 3, 2);
        assert_eq!(err.to_string(), "Workout type RUN expects 3 parameters, got 2");
    }

    #[test]
    fn test_invalid_parameter_display() {
        let err = WorkoutError::InvalidParameter { field: "duration_h", value: 0.0 };
        assert!(err.to_string().contains("duration_h"));
    }
}
