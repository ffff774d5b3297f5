/***************************************/
/*        3rd party libraries          */
/***************************************/
use crossbeam_channel as cbc;
use log::debug;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::elevator::Request;
use crate::error::{ElevatorError, ElevatorResult};
use crate::shared::{Passenger, PassengerClass, StatusReport};

/**
 * Entry points used by everything outside the control loop.
 *
 * Every call is a request/reply round trip with the control loop, so the
 * caller sees the result of its own operation and nothing in between.
 * Arguments are checked here, on the caller's thread, before anything is sent.
 * A gateway is cheap to clone and can be shared between threads.
 */

#[derive(Clone, Debug)]
pub struct Gateway {
    request_tx: cbc::Sender<Request>,
    n_floors: u8,
}

impl Gateway {
    pub fn new(request_tx: cbc::Sender<Request>, n_floors: u8) -> Gateway {
        Gateway { request_tx, n_floors }
    }

    pub fn n_floors(&self) -> u8 {
        self.n_floors
    }

    /// Brings the elevator online at floor 1. Fails with `AlreadyActive` unless offline.
    pub fn start_elevator(&self) -> ElevatorResult<()> {
        let (reply_tx, reply_rx) = cbc::bounded(1);
        self.send(Request::Start(reply_tx))?;
        Self::receive(reply_rx)?
    }

    /// Takes the elevator offline. A no-op when already offline, `InUse`
    /// while anyone is onboard.
    pub fn stop_elevator(&self) -> ElevatorResult<()> {
        let (reply_tx, reply_rx) = cbc::bounded(1);
        self.send(Request::Stop(reply_tx))?;
        Self::receive(reply_rx)?
    }

    /// Queues a new passenger at `start_floor`.
    pub fn issue_request(
        &self,
        class: PassengerClass,
        start_floor: i32,
        dest_floor: i32,
    ) -> ElevatorResult<()> {
        let start = self.checked_floor(start_floor)?;
        let dest = self.checked_floor(dest_floor)?;
        if start == dest {
            return Err(ElevatorError::InvalidArgument(format!(
                "start and destination are both floor {}",
                start
            )));
        }

        // Fully built before it is handed to the loop
        let passenger = Passenger::new(class, start, dest);
        debug!("Issuing request {} from floor {}", passenger, start);

        let (reply_tx, reply_rx) = cbc::bounded(1);
        self.send(Request::Issue(passenger, reply_tx))?;
        Self::receive(reply_rx)?
    }

    /// Numeric form of `issue_request`, class index 0..=3 meaning F, O, J, S.
    pub fn issue_request_raw(
        &self,
        start_floor: i32,
        dest_floor: i32,
        class_index: i32,
    ) -> ElevatorResult<()> {
        let class = PassengerClass::from_index(class_index).ok_or_else(|| {
            ElevatorError::InvalidArgument(format!("unknown passenger class {}", class_index))
        })?;
        self.issue_request(class, start_floor, dest_floor)
    }

    pub fn query_status(&self) -> ElevatorResult<StatusReport> {
        let (reply_tx, reply_rx) = cbc::bounded(1);
        self.send(Request::Status(reply_tx))?;
        Self::receive(reply_rx)
    }

    fn checked_floor(&self, floor: i32) -> ElevatorResult<u8> {
        match u8::try_from(floor) {
            Ok(f) if f >= 1 && f <= self.n_floors => Ok(f),
            _ => Err(ElevatorError::InvalidArgument(format!(
                "floor {} outside 1..={}",
                floor, self.n_floors
            ))),
        }
    }

    fn send(&self, request: Request) -> ElevatorResult<()> {
        self.request_tx
            .send(request)
            .map_err(|_| ElevatorError::Resource("control loop is not running".into()))
    }

    fn receive<T>(reply_rx: cbc::Receiver<T>) -> ElevatorResult<T> {
        reply_rx
            .recv()
            .map_err(|_| ElevatorError::Resource("control loop dropped the request".into()))
    }
}
