use thiserror::Error;

#[derive(Debug, Error)]
pub enum PathogenError {
    #[error("invalid pathogen {name:?}: {reason}")]
    Invalid { name: String, reason: String },

    #[error("unknown pathogen preset {0:?}")]
    UnknownPreset(String),
}

pub type PathogenResult<T> = Result<T, PathogenError>;
