/*
 * Unit tests for the idle decision cascade
 *
 * The unit tests follows the Arrange, Act, Assert pattern.
 *
 * Tests:
 * - test_no_work_stays_idle
 * - test_unload_has_priority_over_everything
 * - test_front_waiter_that_fits_is_loaded
 * - test_front_waiter_that_does_not_fit_is_skipped
 * - test_full_car_does_not_load
 * - test_onboard_direction_beats_waiting_passengers
 * - test_waiting_above_preferred_over_below
 * - test_waiting_below
 */

/***************************************/
/*             Unit tests              */
/***************************************/
#[cfg(test)]
mod dispatch_tests {
    use crate::building::FloorRegistry;
    use crate::config::ElevatorConfig;
    use crate::elevator::dispatch::{next_state, waiting_direction};
    use crate::elevator::Car;
    use crate::shared::Direction;
    use crate::shared::ElevatorState::{Down, Idle, Loading, Up};
    use crate::shared::Passenger;
    use crate::shared::PassengerClass::{Freshman, Junior, Senior};

    fn setup(floor: u8) -> (Car, FloorRegistry) {
        let config = ElevatorConfig::default();
        let mut car = Car::new(&config);
        car.power_on();
        car.current_floor = floor;
        (car, FloorRegistry::new(config.n_floors))
    }

    #[test]
    fn test_no_work_stays_idle() {
        // Arrange
        let (car, floors) = setup(3);

        // Act & Assert
        assert_eq!(next_state(&car, &floors), Idle);
        assert_eq!(waiting_direction(3, &floors), Direction::Stop);
    }

    #[test]
    fn test_unload_has_priority_over_everything() {
        // Arrange
        let (mut car, mut floors) = setup(3);
        car.load(Passenger::new(Freshman, 1, 5)).unwrap();
        car.load(Passenger::new(Junior, 1, 3)).unwrap();
        floors.enqueue(6, Passenger::new(Freshman, 6, 1)).unwrap();

        // Act & Assert
        assert_eq!(next_state(&car, &floors), Loading);
    }

    #[test]
    fn test_front_waiter_that_fits_is_loaded() {
        // Arrange
        let (mut car, mut floors) = setup(2);
        car.load(Passenger::new(Freshman, 1, 6)).unwrap();
        floors.enqueue(2, Passenger::new(Senior, 2, 1)).unwrap();

        // Act & Assert
        // Loading happens even though the passenger goes the other way
        assert_eq!(next_state(&car, &floors), Loading);
    }

    #[test]
    fn test_front_waiter_that_does_not_fit_is_skipped() {
        // Arrange
        let (mut car, mut floors) = setup(2);
        car.load(Passenger::new(Senior, 1, 6)).unwrap();
        car.load(Passenger::new(Senior, 1, 6)).unwrap();
        car.load(Passenger::new(Junior, 1, 6)).unwrap();
        floors.enqueue(2, Passenger::new(Senior, 2, 4)).unwrap();
        // Would fit, but it is not at the front
        floors.enqueue(2, Passenger::new(Freshman, 2, 4)).unwrap();

        // Act & Assert
        assert_eq!(next_state(&car, &floors), Up);
    }

    #[test]
    fn test_full_car_does_not_load() {
        // Arrange
        let (mut car, mut floors) = setup(4);
        for _ in 0..5 {
            car.load(Passenger::new(Freshman, 1, 2)).unwrap();
        }
        floors.enqueue(4, Passenger::new(Freshman, 4, 6)).unwrap();

        // Act & Assert
        assert_eq!(next_state(&car, &floors), Down);
    }

    #[test]
    fn test_onboard_direction_beats_waiting_passengers() {
        // Arrange
        let (mut car, mut floors) = setup(3);
        car.load(Passenger::new(Freshman, 3, 1)).unwrap();
        floors.enqueue(5, Passenger::new(Freshman, 5, 6)).unwrap();

        // Act & Assert
        assert_eq!(next_state(&car, &floors), Down);
    }

    #[test]
    fn test_waiting_above_preferred_over_below() {
        // Arrange
        let (car, mut floors) = setup(3);
        floors.enqueue(2, Passenger::new(Freshman, 2, 1)).unwrap();
        floors.enqueue(6, Passenger::new(Freshman, 6, 1)).unwrap();

        // Act & Assert
        assert_eq!(next_state(&car, &floors), Up);
        assert_eq!(waiting_direction(3, &floors), Direction::Up);
    }

    #[test]
    fn test_waiting_below() {
        // Arrange
        let (car, mut floors) = setup(5);
        floors.enqueue(1, Passenger::new(Senior, 1, 2)).unwrap();

        // Act & Assert
        assert_eq!(next_state(&car, &floors), Down);
    }
}
