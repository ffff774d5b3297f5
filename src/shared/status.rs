/***************************************/
/*        3rd party libraries          */
/***************************************/
use serde::Serialize;
use std::fmt;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::shared::{ElevatorState, PassengerInfo};

/***************************************/
/*       Public data structures        */
/***************************************/

/// Snapshot of the whole building taken at a single instant by the control loop.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct StatusReport {
    pub state: ElevatorState,
    pub current_floor: u8,
    pub current_weight: u32,
    pub onboard: Vec<PassengerInfo>,
    /// Highest floor first.
    pub floors: Vec<FloorStatus>,
    pub passengers_onboard: usize,
    pub passengers_waiting: usize,
    pub passengers_serviced: u64,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct FloorStatus {
    pub floor: u8,
    pub elevator_here: bool,
    pub waiting_count: usize,
    pub waiting: Vec<PassengerInfo>,
}

impl StatusReport {
    pub fn floor(&self, floor: u8) -> Option<&FloorStatus> {
        self.floors.iter().find(|f| f.floor == floor)
    }
}

impl fmt::Display for StatusReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Elevator state: {}", self.state)?;
        writeln!(f, "Current floor: {}", self.current_floor)?;
        writeln!(f, "Current load: {} lbs", self.current_weight)?;
        writeln!(f)?;

        write!(f, "Elevator status:")?;
        for passenger in self.onboard.iter() {
            write!(f, " {}", passenger)?;
        }
        writeln!(f)?;
        writeln!(f)?;

        for floor in self.floors.iter() {
            let marker = if floor.elevator_here { '*' } else { ' ' };
            write!(f, "[{}] Floor {}: {:2}", marker, floor.floor, floor.waiting_count)?;
            for passenger in floor.waiting.iter() {
                write!(f, " {}", passenger)?;
            }
            writeln!(f)?;
        }
        writeln!(f)?;

        writeln!(f, "Number of passengers: {}", self.passengers_onboard)?;
        writeln!(f, "Number of passengers waiting: {}", self.passengers_waiting)?;
        writeln!(f, "Number of passengers serviced: {}", self.passengers_serviced)
    }
}
