/***************************************/
/*           Local modules             */
/***************************************/
use crate::building::FloorRegistry;
use crate::elevator::Car;
use crate::shared::{Direction, ElevatorState};

/**
 * Decision cascade evaluated by an idle car.
 *
 * Pure function of the car and the waiting queues. The first matching rule
 * wins:
 * 1. Someone onboard gets off here                  -> `Loading`
 * 2. Free slot and the front waiter here fits        -> `Loading`
 * 3. Onboard destinations (first found)              -> `Up` / `Down`
 * 4. Anyone waiting above, else anyone waiting below  -> `Up` / `Down`
 * 5. Nothing to do                                   -> `Idle`
 *
 * Only the front of the local queue is considered in rule 2, matching the
 * FIFO boarding done while loading.
 */
pub fn next_state(car: &Car, floors: &FloorRegistry) -> ElevatorState {
    let floor = car.current_floor();

    if car.has_destination_at(floor) {
        return ElevatorState::Loading;
    }

    if car.has_free_slot() {
        if let Some(front) = floors.peek_front(floor) {
            if car.can_load(front) {
                return ElevatorState::Loading;
            }
        }
    }

    if let Some(state) = car.direction_bias().moving_state() {
        return state;
    }

    waiting_direction(floor, floors)
        .moving_state()
        .unwrap_or(ElevatorState::Idle)
}

/// Direction of the nearest waiting passenger, preferring floors above.
pub fn waiting_direction(floor: u8, floors: &FloorRegistry) -> Direction {
    if floors.waiting_above(floor).is_some() {
        Direction::Up
    } else if floors.waiting_below(floor).is_some() {
        Direction::Down
    } else {
        Direction::Stop
    }
}
