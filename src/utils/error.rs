use std::fmt;

#[derive(Debug)]
pub enum AppError {
    /// Request is missing a usable `mobile` field
    Validation,
    /// Well-formed request with no matching user
    Unauthorized,
    DatabaseError(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Validation => write!(f, "Mobile number required"),
            AppError::Unauthorized => write!(f, "Unauthorized"),
            AppError::DatabaseError(msg) => write!(f, "Database error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        AppError::DatabaseError(err.to_string())
    }
}
