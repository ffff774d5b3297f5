pub mod macros;
pub mod status;
pub mod structs;

pub use status::{FloorStatus, StatusReport};
pub use structs::Direction;
pub use structs::ElevatorState;
pub use structs::Passenger;
pub use structs::PassengerClass;
pub use structs::PassengerInfo;
