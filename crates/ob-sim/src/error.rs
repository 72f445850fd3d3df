use ob_behavior::BehaviorError;
use ob_core::CoreError;
use ob_location::LocationError;
use ob_pathogen::PathogenError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("scenario configuration error: {0}")]
    Config(String),

    #[error("city has no locations")]
    EmptyRoster,

    #[error("city has no people")]
    EmptyPopulation,

    #[error("no location named {0:?}")]
    UnknownLocation(String),

    #[error("could not seed the infection: {0}")]
    Seeding(String),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Location(#[from] LocationError),

    #[error(transparent)]
    Behavior(#[from] BehaviorError),

    #[error(transparent)]
    Pathogen(#[from] PathogenError),
}

pub type SimResult<T> = Result<T, SimError>;
