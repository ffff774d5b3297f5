pub mod command;
pub mod coordinator;
pub mod gateway;

pub use command::Command;
pub use coordinator::ElevatorSystem;
pub use gateway::Gateway;
