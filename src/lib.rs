/* Modules */
pub mod building;
pub mod config;
pub mod config_tests;
pub mod coordinator;
pub mod elevator;
pub mod error;
pub mod shared;

pub use config::Config;
pub use coordinator::{Command, ElevatorSystem, Gateway};
pub use elevator::ElevatorEvent;
pub use error::{ConfigError, ElevatorError, ElevatorResult};
pub use shared::{ElevatorState, PassengerClass, StatusReport};
