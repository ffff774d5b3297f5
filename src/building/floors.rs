/***************************************/
/*        3rd party libraries          */
/***************************************/
use std::collections::VecDeque;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::error::{ElevatorError, ElevatorResult};
use crate::shared::Passenger;

/**
 * Waiting passengers of every floor in the building.
 *
 * Floors are numbered from 1 to `n_floors`. Each floor keeps a FIFO queue of
 * waiting passengers and a waiting count that always equals the queue length.
 * Queues are unbounded; only the elevator itself has a capacity.
 */

#[derive(Debug, Default)]
pub struct Floor {
    queue: VecDeque<Passenger>,
    waiting_count: usize,
}

impl Floor {
    pub fn waiting_count(&self) -> usize {
        self.waiting_count
    }

    pub fn waiting(&self) -> impl Iterator<Item = &Passenger> {
        self.queue.iter()
    }
}

#[derive(Debug)]
pub struct FloorRegistry {
    floors: Vec<Floor>,
}

impl FloorRegistry {
    pub fn new(n_floors: u8) -> FloorRegistry {
        FloorRegistry {
            floors: (0..n_floors).map(|_| Floor::default()).collect(),
        }
    }

    pub fn n_floors(&self) -> u8 {
        self.floors.len() as u8
    }

    pub fn floor(&self, floor: u8) -> Option<&Floor> {
        let index = usize::from(floor).checked_sub(1)?;
        self.floors.get(index)
    }

    fn floor_mut(&mut self, floor: u8) -> Option<&mut Floor> {
        let index = usize::from(floor).checked_sub(1)?;
        self.floors.get_mut(index)
    }

    /// Appends a passenger to the back of its floor's queue.
    ///
    /// Floors are validated at admission, so the error arm is never reached
    /// from the control loop.
    pub fn enqueue(&mut self, floor: u8, passenger: Passenger) -> ElevatorResult<()> {
        let n_floors = self.n_floors();
        match self.floor_mut(floor) {
            Some(f) => {
                f.queue.push_back(passenger);
                f.waiting_count += 1;
                Ok(())
            }
            None => Err(ElevatorError::InvalidArgument(format!(
                "floor {} outside 1..={}",
                floor, n_floors
            ))),
        }
    }

    pub fn peek_front(&self, floor: u8) -> Option<&Passenger> {
        self.floor(floor).and_then(|f| f.queue.front())
    }

    pub fn pop_front(&mut self, floor: u8) -> Option<Passenger> {
        let f = self.floor_mut(floor)?;
        let passenger = f.queue.pop_front()?;
        f.waiting_count -= 1;
        Some(passenger)
    }

    /// Pops the front passenger only if `fits` accepts it. The queue is left
    /// untouched otherwise, so passengers behind it keep waiting too.
    pub fn pop_front_if<F>(&mut self, floor: u8, fits: F) -> Option<Passenger>
    where
        F: FnOnce(&Passenger) -> bool,
    {
        if !fits(self.peek_front(floor)?) {
            return None;
        }
        self.pop_front(floor)
    }

    /// Puts a passenger back at the head of its queue.
    pub fn push_front(&mut self, floor: u8, passenger: Passenger) -> ElevatorResult<()> {
        let n_floors = self.n_floors();
        match self.floor_mut(floor) {
            Some(f) => {
                f.queue.push_front(passenger);
                f.waiting_count += 1;
                Ok(())
            }
            None => Err(ElevatorError::InvalidArgument(format!(
                "floor {} outside 1..={}",
                floor, n_floors
            ))),
        }
    }

    pub fn has_waiting(&self, floor: u8) -> bool {
        self.floor(floor).map_or(false, |f| f.waiting_count > 0)
    }

    /// Nearest floor strictly above `floor` with anyone waiting.
    pub fn waiting_above(&self, floor: u8) -> Option<u8> {
        let next = floor.checked_add(1)?;
        (next..=self.n_floors()).find(|&f| self.has_waiting(f))
    }

    /// Nearest floor strictly below `floor` with anyone waiting.
    pub fn waiting_below(&self, floor: u8) -> Option<u8> {
        (1..floor).rev().find(|&f| self.has_waiting(f))
    }

    pub fn total_waiting(&self) -> usize {
        self.floors.iter().map(|f| f.waiting_count).sum()
    }

    /// Floors from the top of the building down, paired with their number.
    pub fn iter_descending(&self) -> impl Iterator<Item = (u8, &Floor)> {
        self.floors
            .iter()
            .enumerate()
            .rev()
            .map(|(i, f)| ((i + 1) as u8, f))
    }

    /// Removes every waiting passenger, returning how many there were.
    pub fn clear(&mut self) -> usize {
        let mut removed = 0;
        for f in self.floors.iter_mut() {
            removed += f.queue.len();
            f.queue.clear();
            f.waiting_count = 0;
        }
        removed
    }
}
