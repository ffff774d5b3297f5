/***************************************/
/*        3rd party libraries          */
/***************************************/
use crossbeam_channel as cbc;
use log::{debug, info, warn};
use serde::Serialize;
use std::time::{Duration, Instant};

/***************************************/
/*           Local modules             */
/***************************************/
use crate::building::FloorRegistry;
use crate::config::Config;
use crate::elevator::{dispatch, Car};
use crate::error::{ElevatorError, ElevatorResult};
use crate::shared::{
    Direction, ElevatorState, FloorStatus, Passenger, PassengerInfo, StatusReport,
};

/**
 * Runs the elevator.
 *
 * The `ControlLoop` is the only owner of the car and the floor queues. Callers
 * reach it through `Request` messages; each message is handled to completion
 * before the next one, which makes every request and every transition atomic
 * to an outside observer. Dwell and travel are not slept: the loop records a
 * pending transition with a deadline, keeps answering requests, and finishes
 * the transition on the first tick past the deadline.
 *
 * # Fields
 * - `request_rx`:      Receives requests from the gateway.
 * - `terminate_rx`:    Receives the shutdown signal.
 * - `events_tx`:       Optional sink for `ElevatorEvent`s.
 * - `ticker`:          Fires every `tick_interval`.
 * - `car`:             The elevator car.
 * - `floors`:          Waiting queues for every floor.
 * - `pending`:         Dwell or move in progress, if any.
 * - `dwell_time`:      Time spent at a floor after anyone boarded or left.
 * - `travel_time`:     Time spent moving one floor.
 * - `tick_interval`:   Period of the state machine tick.
 *
 */

/// Messages accepted by the control loop. Every variant carries its reply channel.
pub enum Request {
    Start(cbc::Sender<ElevatorResult<()>>),
    Stop(cbc::Sender<ElevatorResult<()>>),
    Issue(Passenger, cbc::Sender<ElevatorResult<()>>),
    Status(cbc::Sender<StatusReport>),
}

/// Notifications published while the elevator runs.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub enum ElevatorEvent {
    StateChanged { state: ElevatorState, floor: u8 },
    Arrived { floor: u8 },
    Loaded { passenger: PassengerInfo, floor: u8, weight: u32 },
    Serviced { passenger: PassengerInfo, floor: u8, weight: u32 },
}

enum Event {
    Request(Request),
    Tick(Instant),
    Terminate,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Transition {
    Dwell,
    Travel(Direction),
}

#[derive(Debug, Clone, Copy)]
struct Pending {
    transition: Transition,
    deadline: Instant,
}

pub struct ControlLoop {
    // Channels
    request_rx: cbc::Receiver<Request>,
    terminate_rx: cbc::Receiver<()>,
    events_tx: Option<cbc::Sender<ElevatorEvent>>,
    ticker: cbc::Receiver<Instant>,

    // Private fields
    car: Car,
    floors: FloorRegistry,
    pending: Option<Pending>,
    dwell_time: Duration,
    travel_time: Duration,
    tick_interval: Duration,
}

impl ControlLoop {
    pub fn new(
        config: &Config,
        request_rx: cbc::Receiver<Request>,
        terminate_rx: cbc::Receiver<()>,
        events_tx: Option<cbc::Sender<ElevatorEvent>>,
    ) -> ControlLoop {
        ControlLoop {
            request_rx,
            terminate_rx,
            events_tx,
            ticker: cbc::tick(config.timing.tick()),
            car: Car::new(&config.elevator),
            floors: FloorRegistry::new(config.elevator.n_floors),
            pending: None,
            dwell_time: config.timing.dwell(),
            travel_time: config.timing.travel(),
            tick_interval: config.timing.tick(),
        }
    }

    pub fn run(mut self) {
        info!(
            "Control loop running with {} floors, tick every {:?}",
            self.floors.n_floors(),
            self.tick_interval
        );

        // Main loop
        loop {
            match self.wait_for_event() {
                Event::Request(request) => self.handle_request(request),
                Event::Tick(now) => self.step(now),
                Event::Terminate => break,
            }
        }

        self.release_passengers();
        info!("Control loop terminated");
    }

    fn wait_for_event(&self) -> Event {
        cbc::select! {
            recv(self.request_rx) -> request => {
                match request {
                    Ok(request) => Event::Request(request),
                    // All gateways dropped
                    Err(_) => Event::Terminate,
                }
            }
            recv(self.terminate_rx) -> _ => Event::Terminate,
            recv(self.ticker) -> now => Event::Tick(now.unwrap_or_else(|_| Instant::now())),
        }
    }

    /***************************************/
    /*              Requests               */
    /***************************************/
    fn handle_request(&mut self, request: Request) {
        match request {
            Request::Start(reply) => {
                let _ = reply.send(self.start());
            }
            Request::Stop(reply) => {
                let _ = reply.send(self.stop());
            }
            Request::Issue(passenger, reply) => {
                let _ = reply.send(self.admit(passenger));
            }
            Request::Status(reply) => {
                let _ = reply.send(self.status());
            }
        }
    }

    fn start(&mut self) -> ElevatorResult<()> {
        if self.car.state() != ElevatorState::Offline {
            warn!("Start refused, elevator is {}", self.car.state());
            return Err(ElevatorError::AlreadyActive);
        }

        // Start always begins at the ground floor, a move left over from before
        // the last stop no longer applies
        self.pending = None;
        self.car.power_on();
        info!("Elevator started at floor {}", self.car.current_floor());
        self.emit(ElevatorEvent::StateChanged {
            state: self.car.state(),
            floor: self.car.current_floor(),
        });
        Ok(())
    }

    fn stop(&mut self) -> ElevatorResult<()> {
        if self.car.state() == ElevatorState::Offline {
            return Ok(());
        }

        let passengers = self.car.passenger_count();
        if passengers > 0 {
            warn!("Stop refused, {} passenger(s) still onboard", passengers);
            return Err(ElevatorError::InUse { passengers });
        }

        self.car.power_off();
        info!("Elevator stopped at floor {}", self.car.current_floor());
        self.emit(ElevatorEvent::StateChanged {
            state: self.car.state(),
            floor: self.car.current_floor(),
        });
        Ok(())
    }

    fn admit(&mut self, passenger: Passenger) -> ElevatorResult<()> {
        let floor = passenger.start_floor();
        debug!("Passenger {} waiting at floor {}", passenger, floor);
        self.floors.enqueue(floor, passenger)
    }

    fn status(&self) -> StatusReport {
        let floors = self
            .floors
            .iter_descending()
            .map(|(number, floor)| FloorStatus {
                floor: number,
                elevator_here: number == self.car.current_floor(),
                waiting_count: floor.waiting_count(),
                waiting: floor.waiting().map(PassengerInfo::from).collect(),
            })
            .collect();

        StatusReport {
            state: self.car.state(),
            current_floor: self.car.current_floor(),
            current_weight: self.car.current_weight(),
            onboard: self.car.onboard().iter().map(PassengerInfo::from).collect(),
            floors,
            passengers_onboard: self.car.passenger_count(),
            passengers_waiting: self.floors.total_waiting(),
            passengers_serviced: self.car.total_serviced(),
        }
    }

    /***************************************/
    /*            State machine            */
    /***************************************/

    /// One tick: finish a due transition, or evaluate the current state once.
    pub(crate) fn step(&mut self, now: Instant) {
        if let Some(pending) = self.pending {
            if now >= pending.deadline {
                self.pending = None;
                self.complete(pending.transition);
            }
            return;
        }

        if !self.car.is_running() {
            return;
        }

        match self.car.state() {
            ElevatorState::Offline => {}
            ElevatorState::Idle => {
                let next = dispatch::next_state(&self.car, &self.floors);
                self.set_state(next);
            }
            ElevatorState::Loading => {
                if self.exchange_passengers() {
                    self.pending = Some(Pending {
                        transition: Transition::Dwell,
                        deadline: now + self.dwell_time,
                    });
                } else {
                    self.set_state(ElevatorState::Idle);
                }
            }
            ElevatorState::Up => self.begin_move(Direction::Up, now),
            ElevatorState::Down => self.begin_move(Direction::Down, now),
        }
    }

    fn begin_move(&mut self, direction: Direction, now: Instant) {
        let floor = self.car.current_floor();
        let can_move = match direction {
            Direction::Up => floor < self.floors.n_floors(),
            Direction::Down => floor > 1,
            Direction::Stop => false,
        };

        if can_move {
            self.pending = Some(Pending {
                transition: Transition::Travel(direction),
                deadline: now + self.travel_time,
            });
        } else {
            // At the boundary, reassess without moving
            self.set_state(ElevatorState::Idle);
        }
    }

    fn complete(&mut self, transition: Transition) {
        if let Transition::Travel(direction) = transition {
            match direction {
                Direction::Up => self.car.current_floor += 1,
                Direction::Down => self.car.current_floor -= 1,
                Direction::Stop => {}
            }
            info!("Arrived at floor {}", self.car.current_floor());
            self.emit(ElevatorEvent::Arrived {
                floor: self.car.current_floor(),
            });
        }

        // Stopped while the transition was in flight
        if self.car.is_running() {
            self.set_state(ElevatorState::Idle);
        }
    }

    /// Unloads everyone bound for this floor, then boards waiting passengers
    /// front first until the next one does not fit. Returns whether anyone
    /// moved.
    fn exchange_passengers(&mut self) -> bool {
        let floor = self.car.current_floor();
        let mut changed = false;

        for passenger in self.car.unload_at(floor) {
            debug!("Passenger {} left at floor {}", passenger, floor);
            self.emit(ElevatorEvent::Serviced {
                passenger: PassengerInfo::from(&passenger),
                floor,
                weight: self.car.current_weight(),
            });
            changed = true;
        }

        while let Some(passenger) = self.floors.pop_front_if(floor, |p| self.car.can_load(p)) {
            let info = PassengerInfo::from(&passenger);
            if let Err(passenger) = self.car.load(passenger) {
                let _ = self.floors.push_front(floor, passenger);
                break;
            }
            debug!("Passenger {} boarded at floor {}", info, floor);
            self.emit(ElevatorEvent::Loaded {
                passenger: info,
                floor,
                weight: self.car.current_weight(),
            });
            changed = true;
        }

        changed
    }

    fn set_state(&mut self, state: ElevatorState) {
        if self.car.state() == state {
            return;
        }
        debug!("{} -> {} at floor {}", self.car.state(), state, self.car.current_floor());
        self.car.state = state;
        self.emit(ElevatorEvent::StateChanged {
            state,
            floor: self.car.current_floor(),
        });
    }

    fn emit(&self, event: ElevatorEvent) {
        if let Some(events_tx) = &self.events_tx {
            let _ = events_tx.send(event);
        }
    }

    fn release_passengers(&mut self) {
        let waiting = self.floors.clear();
        let onboard = self.car.evacuate();
        if waiting + onboard > 0 {
            warn!(
                "Discarding {} waiting and {} onboard passenger(s) at shutdown",
                waiting, onboard
            );
        }
    }
}

/***************************************/
/*            Test helpers             */
/***************************************/
#[cfg(test)]
impl ControlLoop {
    pub(crate) fn test_car(&self) -> &Car {
        &self.car
    }

    pub(crate) fn test_floors(&self) -> &FloorRegistry {
        &self.floors
    }

    pub(crate) fn test_handle(&mut self, request: Request) {
        self.handle_request(request);
    }

    pub(crate) fn test_has_pending(&self) -> bool {
        self.pending.is_some()
    }
}
