/*
 * Unit tests for configuration loading
 *
 * The unit tests follows the Arrange, Act, Assert pattern.
 *
 * Tests:
 * - test_default_config
 * - test_parse_full_config
 * - test_parse_partial_config
 * - test_parse_rejects_invalid_values
 * - test_parse_rejects_malformed_toml
 * - test_load_missing_file
 */

/***************************************/
/*             Unit tests              */
/***************************************/
#[cfg(test)]
mod config_tests {
    use std::time::Duration;
    use crate::config::{load_config, parse_config, Config};
    use crate::error::ConfigError;

    #[test]
    fn test_default_config() {
        // Act
        let config = Config::default();

        // Assert
        assert_eq!(config.elevator.n_floors, 6);
        assert_eq!(config.elevator.max_weight, 750);
        assert_eq!(config.elevator.capacity, 5);
        assert_eq!(config.timing.dwell(), Duration::from_millis(1000));
        assert_eq!(config.timing.travel(), Duration::from_millis(2000));
        assert_eq!(config.timing.tick(), Duration::from_millis(100));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_full_config() {
        // Arrange
        let config_str = r#"
            [elevator]
            n_floors = 10
            max_weight = 1000
            capacity = 8

            [timing]
            dwell_time = 500
            travel_time = 750
            tick_interval = 20
        "#;

        // Act
        let config = parse_config(config_str).unwrap();

        // Assert
        assert_eq!(config.elevator.n_floors, 10);
        assert_eq!(config.elevator.max_weight, 1000);
        assert_eq!(config.elevator.capacity, 8);
        assert_eq!(config.timing.dwell_time, 500);
        assert_eq!(config.timing.travel_time, 750);
        assert_eq!(config.timing.tick_interval, 20);
    }

    #[test]
    fn test_parse_partial_config() {
        // Arrange
        let config_str = "[timing]\ntravel_time = 10\n";

        // Act
        let config = parse_config(config_str).unwrap();

        // Assert
        assert_eq!(config.elevator, Config::default().elevator);
        assert_eq!(config.timing.travel_time, 10);
        assert_eq!(config.timing.dwell_time, 1000);
        assert_eq!(parse_config("").unwrap(), Config::default());
    }

    #[test]
    fn test_parse_rejects_invalid_values() {
        // Arrange
        let inputs = [
            "[elevator]\nn_floors = 1\n",
            "[elevator]\ncapacity = 0\n",
            "[elevator]\nmax_weight = 200\n",
            "[timing]\ntick_interval = 0\n",
        ];

        // Act & Assert
        for input in inputs.iter() {
            assert!(
                matches!(parse_config(input), Err(ConfigError::Invalid(_))),
                "{:?} should be rejected",
                input
            );
        }
    }

    #[test]
    fn test_parse_rejects_malformed_toml() {
        // Act
        let result = parse_config("[elevator\nn_floors = \"six\"");

        // Assert
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_load_missing_file() {
        // Act
        let result = load_config("this/file/does/not/exist.toml");

        // Assert
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}
