pub mod car;
pub mod dispatch;
pub mod dispatch_tests;
pub mod fsm;

pub use car::Car;
pub use fsm::{ControlLoop, ElevatorEvent, Request};
