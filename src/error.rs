use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuditError {
    #[error("answers file not found: {0}")]
    AnswersNotFound(String),

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("unknown question key: {0}")]
    UnknownQuestion(String),

    #[error("invalid answer for {key}: {label:?} (expected one of: {expected})")]
    InvalidAnswer {
        key: String,
        label: String,
        expected: String,
    },

    #[error("assessment incomplete: {} unanswered ({})", .0.len(), .0.join(", "))]
    IncompleteAssessment(Vec<String>),

    #[error("refusing to overwrite existing file: {0}")]
    AlreadyExists(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AuditError {
    /// Errors caused by the content of the answers file rather than the
    /// environment.
    pub fn is_invalid_answers(&self) -> bool {
        matches!(
            self,
            Self::UnknownQuestion(_) | Self::InvalidAnswer { .. } | Self::ConfigParse(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, AuditError>;
