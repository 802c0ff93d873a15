use thiserror::Error;

/// Result type alias for UltraDNS operations
pub type Result<T> = std::result::Result<T, UltraError>;

/// Errors that can occur when handling UltraDNS records
#[derive(Error, Debug)]
pub enum UltraError {
    /// JSON parsing/serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A record failed validation
    #[error("validation failed: {}", join_issues(.0))]
    Validation(Vec<ValidationIssue>),

    /// TSIG key value could not be decoded
    #[error("invalid TSIG key value: {0}")]
    InvalidTsigKeyValue(String),
}

impl UltraError {
    /// Returns the validation issues carried by this error, if any
    #[must_use]
    pub fn issues(&self) -> &[ValidationIssue] {
        match self {
            Self::Validation(issues) => issues,
            _ => &[],
        }
    }

    /// Returns true if the error is a validation failure
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

/// A single problem found while validating a name server record
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationIssue {
    /// No IP address was given
    #[error("ip is required")]
    MissingIp,

    /// The IP address does not parse
    #[error("invalid IP address: {0}")]
    InvalidIp(String),

    /// Only one of the TSIG key name and value was given
    #[error("tsigKey and tsigKeyValue must be set together")]
    IncompleteTsig,

    /// No TSIG key was given
    #[error("a TSIG key is required")]
    MissingTsig,

    /// The TSIG key name is not a valid DNS name
    #[error("invalid TSIG key name: {0}")]
    InvalidTsigKeyName(String),

    /// The TSIG key value is not usable key material
    #[error("invalid TSIG key value: {0}")]
    InvalidTsigKeyValue(String),
}

fn join_issues(issues: &[ValidationIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
