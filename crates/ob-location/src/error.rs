use thiserror::Error;

#[derive(Debug, Error)]
pub enum LocationError {
    #[error("roster parse error: {0}")]
    Parse(String),

    #[error("invalid mixing parameters: {0}")]
    Mixing(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type LocationResult<T> = Result<T, LocationError>;
