use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScreenerError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Request to {url} failed with status {status}")]
    TransportError { url: String, status: u16 },

    #[error("{entity} not found: {id}")]
    NotFoundError { entity: &'static str, id: String },

    #[error("Degenerate input: {message}")]
    DegenerateInputError { message: String },

    #[error("Malformed {entity} record: {message}")]
    InvalidRecordError {
        entity: &'static str,
        message: String,
    },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Missing configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    NotFound,
    Data,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    /// Process exit code for a run that failed with this severity.
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorSeverity::High => 1,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::Critical => 3,
        }
    }
}

impl ScreenerError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ScreenerError::ApiError(_) | ScreenerError::TransportError { .. } => {
                ErrorCategory::Network
            }
            ScreenerError::NotFoundError { .. } => ErrorCategory::NotFound,
            ScreenerError::DegenerateInputError { .. }
            | ScreenerError::InvalidRecordError { .. }
            | ScreenerError::SerializationError(_) => ErrorCategory::Data,
            ScreenerError::MissingConfigError { .. }
            | ScreenerError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Network => ErrorSeverity::Medium,
            ErrorCategory::NotFound | ErrorCategory::Data => ErrorSeverity::High,
            ErrorCategory::Configuration => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            ScreenerError::ApiError(_) => "Check network connectivity and the API base URL",
            ScreenerError::TransportError { status: 401 | 403, .. } => {
                "Check that the API token is valid and has access to candidates and vacancies"
            }
            ScreenerError::TransportError { .. } => {
                "Check the API base URL and the platform status, then run again"
            }
            ScreenerError::NotFoundError { .. } => {
                "Check that the candidate id exists and references an existing vacancy"
            }
            ScreenerError::DegenerateInputError { .. } => {
                "Fill in the vacancy's required skills before screening candidates"
            }
            ScreenerError::InvalidRecordError { .. } | ScreenerError::SerializationError(_) => {
                "The platform returned data in an unexpected shape; inspect the record manually"
            }
            ScreenerError::MissingConfigError { .. }
            | ScreenerError::InvalidConfigValueError { .. } => {
                "Pass the value on the command line or set the matching SKILLAZ_* variable"
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ScreenerError::ApiError(_) | ScreenerError::TransportError { .. } => {
                format!("Could not reach the recruiting platform: {}", self)
            }
            ScreenerError::NotFoundError { entity, id } => {
                format!("No {} with id {} was found", entity, id)
            }
            ScreenerError::DegenerateInputError { message } => {
                format!("The candidate cannot be screened: {}", message)
            }
            ScreenerError::InvalidRecordError { .. } | ScreenerError::SerializationError(_) => {
                format!("Unexpected data from the platform: {}", self)
            }
            ScreenerError::MissingConfigError { .. }
            | ScreenerError::InvalidConfigValueError { .. } => {
                format!("Invalid configuration: {}", self)
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, ScreenerError>;
