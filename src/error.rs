/***************************************/
/*        3rd party libraries          */
/***************************************/
use thiserror::Error;

/***************************************/
/*       Public data structures        */
/***************************************/

/// Errors returned by the request gateway.
///
/// None of these leave the shared elevator state half-modified: requests are
/// validated before they reach the control loop, and refused operations are
/// answered without touching anything.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ElevatorError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("elevator is already active")]
    AlreadyActive,

    #[error("elevator still carries {passengers} passenger(s)")]
    InUse { passengers: usize },

    #[error("resource error: {0}")]
    Resource(String),
}

pub type ElevatorResult<T> = Result<T, ElevatorError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read configuration file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse configuration file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid configuration: {0}")]
    Invalid(String),
}
