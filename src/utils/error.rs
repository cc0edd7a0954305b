use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProvisionError {
    #[error("{message}")]
    CertificateError { message: String },

    #[error(transparent)]
    CreateDirError(std::io::Error),

    #[error(transparent)]
    WriteFileError(std::io::Error),

    #[error("{message}")]
    ExecutionError { message: String },

    #[error(transparent)]
    NotificationError(std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid configuration in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Certificate,
    Filesystem,
    Execution,
    Notification,
    Configuration,
}

impl ProvisionError {
    pub fn certificate(message: impl Into<String>) -> Self {
        Self::CertificateError {
            message: message.into(),
        }
    }

    pub fn execution(message: impl Into<String>) -> Self {
        Self::ExecutionError {
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::CertificateError { .. } => ErrorCategory::Certificate,
            Self::CreateDirError(_) | Self::WriteFileError(_) => ErrorCategory::Filesystem,
            Self::ExecutionError { .. } => ErrorCategory::Execution,
            Self::NotificationError(_) => ErrorCategory::Notification,
            Self::ConfigError { .. }
            | Self::ConfigValidationError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::MissingConfigError { .. } => ErrorCategory::Configuration,
        }
    }

    /// Process exit code the binary uses when this error ends a run.
    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Configuration => 2,
            ErrorCategory::Execution => 3,
            _ => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, ProvisionError>;
