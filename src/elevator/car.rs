/***************************************/
/*           Local modules             */
/***************************************/
use crate::config::ElevatorConfig;
use crate::shared::{Direction, ElevatorState, Passenger};

/**
 * The elevator car and everything it carries.
 *
 * Plain record owned by the control loop. Weight and onboard list are only
 * changed together, through `load` and `unload_at`, so
 * `current_weight == sum of onboard weights` holds after every call.
 *
 * # Fields
 * - `state`:           Current state machine state.
 * - `current_floor`:   Floor the car is at, in `1..=n_floors`.
 * - `current_weight`:  Sum of onboard passenger weights.
 * - `onboard`:         Passengers in boarding order.
 * - `total_serviced`:  Lifetime count of delivered passengers, never reset.
 * - `running`:         False exactly when `state` is `Offline`.
 */

#[derive(Debug)]
pub struct Car {
    pub(crate) state: ElevatorState,
    pub(crate) current_floor: u8,
    current_weight: u32,
    onboard: Vec<Passenger>,
    total_serviced: u64,
    running: bool,
    max_weight: u32,
    capacity: usize,
}

impl Car {
    pub fn new(config: &ElevatorConfig) -> Car {
        Car {
            state: ElevatorState::Offline,
            current_floor: 1,
            current_weight: 0,
            onboard: Vec::with_capacity(config.capacity),
            total_serviced: 0,
            running: false,
            max_weight: config.max_weight,
            capacity: config.capacity,
        }
    }

    pub fn state(&self) -> ElevatorState {
        self.state
    }

    pub fn current_floor(&self) -> u8 {
        self.current_floor
    }

    pub fn current_weight(&self) -> u32 {
        self.current_weight
    }

    pub fn onboard(&self) -> &[Passenger] {
        &self.onboard
    }

    pub fn passenger_count(&self) -> usize {
        self.onboard.len()
    }

    pub fn total_serviced(&self) -> u64 {
        self.total_serviced
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn max_weight(&self) -> u32 {
        self.max_weight
    }

    pub fn has_free_slot(&self) -> bool {
        self.onboard.len() < self.capacity
    }

    /// Brings the car online at the ground floor. The serviced counter is kept.
    pub fn power_on(&mut self) {
        self.running = true;
        self.state = ElevatorState::Idle;
        self.current_floor = 1;
    }

    pub fn power_off(&mut self) {
        self.running = false;
        self.state = ElevatorState::Offline;
    }

    pub fn can_load(&self, passenger: &Passenger) -> bool {
        self.has_free_slot() && self.current_weight + passenger.weight() <= self.max_weight
    }

    /// Takes a passenger onboard, or hands it back if it does not fit.
    pub fn load(&mut self, passenger: Passenger) -> Result<(), Passenger> {
        if !self.can_load(&passenger) {
            return Err(passenger);
        }
        self.current_weight += passenger.weight();
        self.onboard.push(passenger);
        Ok(())
    }

    /// Removes every passenger whose destination is `floor` and counts them as serviced.
    pub fn unload_at(&mut self, floor: u8) -> Vec<Passenger> {
        let (leaving, staying): (Vec<Passenger>, Vec<Passenger>) = self
            .onboard
            .drain(..)
            .partition(|p| p.dest_floor() == floor);
        self.onboard = staying;

        for passenger in leaving.iter() {
            self.current_weight -= passenger.weight();
        }
        self.total_serviced += leaving.len() as u64;
        leaving
    }

    pub fn has_destination_at(&self, floor: u8) -> bool {
        self.onboard.iter().any(|p| p.dest_floor() == floor)
    }

    /// Direction towards the destination of the first onboard passenger that
    /// is not already at its floor. First found wins, not the majority.
    pub fn direction_bias(&self) -> Direction {
        for passenger in self.onboard.iter() {
            if passenger.dest_floor() > self.current_floor {
                return Direction::Up;
            } else if passenger.dest_floor() < self.current_floor {
                return Direction::Down;
            }
        }
        Direction::Stop
    }

    /// Drops everyone still onboard, returning how many there were.
    pub fn evacuate(&mut self) -> usize {
        let count = self.onboard.len();
        self.onboard.clear();
        self.current_weight = 0;
        count
    }
}
