/***************************************/
/*        3rd party libraries          */
/***************************************/
use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::time::Duration;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::error::ConfigError;
use crate::shared::PassengerClass;

/***************************************/
/*       Public data structures        */
/***************************************/
#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    pub elevator: ElevatorConfig,
    pub timing: TimingConfig,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct ElevatorConfig {
    pub n_floors: u8,
    pub max_weight: u32,
    pub capacity: usize,
}

/// Simulated delays, all in milliseconds.
#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct TimingConfig {
    pub dwell_time: u64,
    pub travel_time: u64,
    pub tick_interval: u64,
}

impl Default for ElevatorConfig {
    fn default() -> ElevatorConfig {
        ElevatorConfig {
            n_floors: 6,
            max_weight: 750,
            capacity: 5,
        }
    }
}

impl Default for TimingConfig {
    fn default() -> TimingConfig {
        TimingConfig {
            dwell_time: 1000,
            travel_time: 2000,
            tick_interval: 100,
        }
    }
}

impl TimingConfig {
    pub fn dwell(&self) -> Duration {
        Duration::from_millis(self.dwell_time)
    }

    pub fn travel(&self) -> Duration {
        Duration::from_millis(self.travel_time)
    }

    pub fn tick(&self) -> Duration {
        Duration::from_millis(self.tick_interval)
    }
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.elevator.n_floors < 2 {
            return Err(ConfigError::Invalid(format!(
                "n_floors must be at least 2, got {}",
                self.elevator.n_floors
            )));
        }
        if self.elevator.capacity == 0 {
            return Err(ConfigError::Invalid("capacity must be at least 1".into()));
        }
        if self.elevator.max_weight < PassengerClass::heaviest().weight() {
            return Err(ConfigError::Invalid(format!(
                "max_weight {} cannot carry a single {:?} passenger",
                self.elevator.max_weight,
                PassengerClass::heaviest()
            )));
        }
        if self.timing.tick_interval == 0 {
            return Err(ConfigError::Invalid("tick_interval must be positive".into()));
        }
        Ok(())
    }
}

/***************************************/
/*             Public API              */
/***************************************/
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let config_str = fs::read_to_string(path)?;
    parse_config(&config_str)
}

pub fn parse_config(config_str: &str) -> Result<Config, ConfigError> {
    let config: Config = toml::from_str(config_str)?;
    config.validate()?;
    Ok(config)
}
