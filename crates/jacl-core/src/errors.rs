use thiserror::Error;

/// Result type alias using JaclError
pub type Result<T> = std::result::Result<T, JaclError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Callers use the kind to tell a failed assertion (`Comparison`) apart from
/// an assertion that could not be evaluated at all (`Evaluation`). Each kind
/// maps to a stable error code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The comparison ran and the data does not satisfy the subset relation
    Comparison,
    /// The comparison could not be attempted
    Evaluation,
}

impl ErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ErrorKind::Comparison => "ERR_COMPARISON",
            ErrorKind::Evaluation => "ERR_EVALUATION",
        }
    }
}

/// Underlying reason a comparison could not be evaluated
#[derive(Error, Debug)]
pub enum EvaluationCause {
    /// A value could not be round-tripped through the structural encoding
    #[error("structural encoding failed: {0}")]
    Encoding(#[from] serde_json::Error),

    /// A value normalized to a shape the operation cannot work with
    #[error("expected {expected}, found {found}")]
    Shape {
        expected: &'static str,
        found: &'static str,
    },
}

/// Verdict error returned by every matcher and overlay function
#[derive(Error, Debug)]
pub enum JaclError {
    /// The actual value does not contain the expected value
    #[error("{message}")]
    Comparison { message: String },

    /// The comparison could not be attempted
    #[error("{op}: {cause}")]
    Evaluation {
        op: &'static str,
        #[source]
        cause: EvaluationCause,
    },
}

impl JaclError {
    /// Create a comparison failure with the given diagnostic
    pub fn comparison(message: impl Into<String>) -> Self {
        JaclError::Comparison {
            message: message.into(),
        }
    }

    /// Create an evaluation failure for the named operation
    pub fn evaluation(op: &'static str, cause: impl Into<EvaluationCause>) -> Self {
        JaclError::Evaluation {
            op,
            cause: cause.into(),
        }
    }

    /// Create an evaluation failure caused by an unexpected value shape
    pub fn shape(op: &'static str, expected: &'static str, found: &'static str) -> Self {
        Self::evaluation(op, EvaluationCause::Shape { expected, found })
    }

    /// Get the error kind
    pub fn kind(&self) -> ErrorKind {
        match self {
            JaclError::Comparison { .. } => ErrorKind::Comparison,
            JaclError::Evaluation { .. } => ErrorKind::Evaluation,
        }
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind().code()
    }

    pub fn is_comparison(&self) -> bool {
        self.kind() == ErrorKind::Comparison
    }

    pub fn is_evaluation(&self) -> bool {
        self.kind() == ErrorKind::Evaluation
    }

    /// Get the evaluation cause, if any
    pub fn cause(&self) -> Option<&EvaluationCause> {
        match self {
            JaclError::Comparison { .. } => None,
            JaclError::Evaluation { cause, .. } => Some(cause),
        }
    }
}

// ========== End Error Facility ==========

/// Diagnostic formats shared by the matchers.
pub(crate) fn have_want(have: impl std::fmt::Display, want: impl std::fmt::Display) -> String {
    format!("have {} want {}", have, want)
}

pub(crate) fn have_want_length(have: usize, want: usize) -> String {
    format!("have length {} want length {}", have, want)
}
