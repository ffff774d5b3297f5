/***************************************/
/*        3rd party libraries          */
/***************************************/
use std::str::FromStr;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::coordinator::Gateway;
use crate::error::{ElevatorError, ElevatorResult};
use crate::shared::PassengerClass;

/// One line of text input: `start`, `stop` or `<class letter> <start floor> <dest floor>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Start,
    Stop,
    Request {
        class: PassengerClass,
        start_floor: i32,
        dest_floor: i32,
    },
}

impl Command {
    pub fn parse(input: &str) -> ElevatorResult<Command> {
        let input = input.trim();
        match input {
            "start" => return Ok(Command::Start),
            "stop" => return Ok(Command::Stop),
            _ => {}
        }

        let tokens: Vec<&str> = input.split_whitespace().collect();
        let [letter, start, dest] = tokens.as_slice() else {
            return Err(invalid(input));
        };

        let mut chars = letter.chars();
        let class = match (chars.next(), chars.next()) {
            (Some(c), None) => PassengerClass::from_letter(c).ok_or_else(|| invalid(input))?,
            _ => return Err(invalid(input)),
        };
        let start_floor = start.parse::<i32>().map_err(|_| invalid(input))?;
        let dest_floor = dest.parse::<i32>().map_err(|_| invalid(input))?;

        Ok(Command::Request {
            class,
            start_floor,
            dest_floor,
        })
    }

    pub fn execute(&self, gateway: &Gateway) -> ElevatorResult<()> {
        match *self {
            Command::Start => gateway.start_elevator(),
            Command::Stop => gateway.stop_elevator(),
            Command::Request {
                class,
                start_floor,
                dest_floor,
            } => gateway.issue_request(class, start_floor, dest_floor),
        }
    }
}

impl FromStr for Command {
    type Err = ElevatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Command::parse(s)
    }
}

fn invalid(input: &str) -> ElevatorError {
    ElevatorError::InvalidArgument(format!("malformed command {:?}", input))
}
