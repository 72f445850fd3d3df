use thiserror::Error;

#[derive(Debug, Error)]
pub enum BehaviorError {
    #[error("no location can employ adults (need a company, restaurant, or grocery)")]
    NoWorkplaces,

    #[error("grocery errands requested but the roster has no grocery")]
    NoGroceries,

    #[error("invalid work hours: {0}")]
    InvalidHours(String),
}

pub type BehaviorResult<T> = Result<T, BehaviorError>;
