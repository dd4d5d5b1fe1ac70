use std::error::Error;
use std::fmt;
use std::io;

/// Common result type for top-level wiki operations
pub type BoxResult<T> = Result<T, Box<dyn Error>>;

/// Result type for operations whose failures callers tell apart
pub type WikiResult<T> = Result<T, WikiError>;

/// Error types for wiki operations
#[derive(Debug)]
pub enum WikiError {
    /// IO error wrapper
    Io(io::Error),
    /// Configuration error
    Config(String),
    /// Template processing error
    Template(String),
    /// Page title that cannot name a page
    InvalidTitle(String),
    /// Page that does not exist in storage
    PageNotFound(String),
    /// Server error
    Server(String),
    /// Generic error message
    Generic(String),
}

impl WikiError {
    /// Whether the error means the requested page is simply absent
    pub fn is_not_found(&self) -> bool {
        matches!(self, WikiError::PageNotFound(_))
    }
}

impl fmt::Display for WikiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WikiError::Io(err) => write!(f, "IO error: {}", err),
            WikiError::Config(msg) => write!(f, "Configuration error: {}", msg),
            WikiError::Template(msg) => write!(f, "Template error: {}", msg),
            WikiError::InvalidTitle(title) => write!(f, "Invalid page title: {:?}", title),
            WikiError::PageNotFound(title) => write!(f, "Page not found: {}", title),
            WikiError::Server(msg) => write!(f, "Server error: {}", msg),
            WikiError::Generic(msg) => write!(f, "{}", msg),
        }
    }
}

impl Error for WikiError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            WikiError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for WikiError {
    fn from(err: io::Error) -> Self {
        WikiError::Io(err)
    }
}

impl From<String> for WikiError {
    fn from(msg: String) -> Self {
        WikiError::Generic(msg)
    }
}

impl From<&str> for WikiError {
    fn from(msg: &str) -> Self {
        WikiError::Generic(msg.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(WikiError::PageNotFound("Home".into()).to_string(), "Page not found: Home");
        assert_eq!(WikiError::InvalidTitle("../x".into()).to_string(), "Invalid page title: \"../x\"");
        assert_eq!(WikiError::from("boom").to_string(), "boom");
    }

    #[test]
    fn test_io_source() {
        let err = WikiError::from(io::Error::new(io::ErrorKind::PermissionDenied, "denied"));
        assert!(err.source().is_some());
        assert!(!err.is_not_found());
        assert!(WikiError::PageNotFound("x".into()).is_not_found());
    }
}
