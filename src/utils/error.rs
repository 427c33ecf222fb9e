use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Logger initialization failed: {message}")]
    LoggerError { message: String },

    #[error("Unable to resolve working directory: {0}")]
    WorkingDirError(#[source] std::io::Error),

    #[error("Unable to read platform certificates: {message}")]
    PlatformCertsError { message: String },

    #[error("Unable to read root certificate {}: {source}", .path.display())]
    CertificateReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not add root certificate {} to pool: {reason}", .path.display())]
    CertificateParseError { path: PathBuf, reason: String },

    #[error("Transport configuration failed: {0}")]
    TransportError(#[source] reqwest::Error),

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unable to get the url {url}: {source}")]
    RequestError {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Unable to read response body from {url}: {source}")]
    BodyError {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Fetch task did not complete: {message}")]
    TaskError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Startup,
    Config,
    Request,
}

impl FetchError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            FetchError::LoggerError { .. }
            | FetchError::WorkingDirError(_)
            | FetchError::PlatformCertsError { .. }
            | FetchError::CertificateReadError { .. }
            | FetchError::CertificateParseError { .. }
            | FetchError::TransportError(_) => ErrorCategory::Startup,
            FetchError::InvalidConfigValueError { .. } => ErrorCategory::Config,
            FetchError::RequestError { .. }
            | FetchError::BodyError { .. }
            | FetchError::TaskError { .. } => ErrorCategory::Request,
        }
    }

    /// Process exit status for this error.
    pub fn exit_code(&self) -> u8 {
        match self.category() {
            ErrorCategory::Request => 1,
            ErrorCategory::Config => 2,
            ErrorCategory::Startup => 3,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            FetchError::LoggerError { .. } => "Check the RUST_LOG filter syntax",
            FetchError::WorkingDirError(_) => "Run from an existing, readable directory",
            FetchError::PlatformCertsError { .. } => {
                "Install the system CA bundle (e.g. the ca-certificates package)"
            }
            FetchError::CertificateReadError { .. } => {
                "Place the root certificate at security/ca.pem under the working directory"
            }
            FetchError::CertificateParseError { .. } => {
                "security/ca.pem must hold exactly one PEM-encoded CERTIFICATE block"
            }
            FetchError::TransportError(_) => "Check the TLS configuration of this build",
            FetchError::InvalidConfigValueError { .. } => "Pass absolute http:// or https:// URLs",
            FetchError::RequestError { .. } => {
                "Check that the host is reachable and its certificate chains to a trusted root"
            }
            FetchError::BodyError { .. } => "The connection dropped mid-response; try again",
            FetchError::TaskError { .. } => "A fetch task panicked; rerun with -v for details",
        }
    }
}

pub type Result<T> = std::result::Result<T, FetchError>;
