/***************************************/
/*        3rd party libraries          */
/***************************************/
use serde::Serialize;
use std::fmt;

/***************************************/
/*       Public data structures        */
/***************************************/

/// The four ranked passenger classes. Only used for weight accounting.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PassengerClass {
    #[serde(rename = "F")]
    Freshman,
    #[serde(rename = "O")]
    Sophomore,
    #[serde(rename = "J")]
    Junior,
    #[serde(rename = "S")]
    Senior,
}

impl PassengerClass {
    pub const ALL: [PassengerClass; 4] = [
        PassengerClass::Freshman,
        PassengerClass::Sophomore,
        PassengerClass::Junior,
        PassengerClass::Senior,
    ];

    pub fn weight(&self) -> u32 {
        match *self {
            PassengerClass::Freshman => 100,
            PassengerClass::Sophomore => 150,
            PassengerClass::Junior => 200,
            PassengerClass::Senior => 250,
        }
    }

    pub fn letter(&self) -> char {
        match *self {
            PassengerClass::Freshman => 'F',
            PassengerClass::Sophomore => 'O',
            PassengerClass::Junior => 'J',
            PassengerClass::Senior => 'S',
        }
    }

    /// Case-insensitive lookup by class letter.
    pub fn from_letter(letter: char) -> Option<PassengerClass> {
        match letter.to_ascii_uppercase() {
            'F' => Some(PassengerClass::Freshman),
            'O' => Some(PassengerClass::Sophomore),
            'J' => Some(PassengerClass::Junior),
            'S' => Some(PassengerClass::Senior),
            _ => None,
        }
    }

    /// Numeric class index as used by the programmatic entry point (0 = F .. 3 = S).
    pub fn from_index(index: i32) -> Option<PassengerClass> {
        usize::try_from(index)
            .ok()
            .and_then(|i| PassengerClass::ALL.get(i).copied())
    }

    pub fn heaviest() -> PassengerClass {
        PassengerClass::Senior
    }
}

/// A passenger waiting on a floor or riding the elevator.
///
/// Not `Clone`. A passenger is moved between a floor queue and the onboard
/// list and has exactly one owner at any time.
#[derive(Debug, PartialEq, Eq)]
pub struct Passenger {
    class: PassengerClass,
    start_floor: u8,
    dest_floor: u8,
}

impl Passenger {
    pub fn new(class: PassengerClass, start_floor: u8, dest_floor: u8) -> Passenger {
        Passenger {
            class,
            start_floor,
            dest_floor,
        }
    }

    pub fn class(&self) -> PassengerClass {
        self.class
    }

    pub fn start_floor(&self) -> u8 {
        self.start_floor
    }

    pub fn dest_floor(&self) -> u8 {
        self.dest_floor
    }

    pub fn weight(&self) -> u32 {
        self.class.weight()
    }
}

impl fmt::Display for Passenger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.class.letter(), self.dest_floor)
    }
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum ElevatorState {
    Offline,
    Idle,
    Loading,
    Up,
    Down,
}

impl ElevatorState {
    pub fn name(&self) -> &'static str {
        match *self {
            ElevatorState::Offline => "OFFLINE",
            ElevatorState::Idle => "IDLE",
            ElevatorState::Loading => "LOADING",
            ElevatorState::Up => "UP",
            ElevatorState::Down => "DOWN",
        }
    }
}

impl fmt::Display for ElevatorState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Stop,
}

impl Direction {
    /// Moving state matching this direction, `None` for `Stop`.
    pub fn moving_state(&self) -> Option<ElevatorState> {
        match *self {
            Direction::Up => Some(ElevatorState::Up),
            Direction::Down => Some(ElevatorState::Down),
            Direction::Stop => None,
        }
    }
}

/// Copyable description of a passenger for reports and events.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PassengerInfo {
    pub class: PassengerClass,
    pub start_floor: u8,
    pub dest_floor: u8,
}

impl From<&Passenger> for PassengerInfo {
    fn from(passenger: &Passenger) -> Self {
        PassengerInfo {
            class: passenger.class,
            start_floor: passenger.start_floor,
            dest_floor: passenger.dest_floor,
        }
    }
}

impl fmt::Display for PassengerInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.class.letter(), self.dest_floor)
    }
}
