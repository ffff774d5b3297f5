/***************************************/
/*        3rd party libraries          */
/***************************************/
use crossbeam_channel as cbc;
use log::{info, warn};
use std::thread::{Builder, JoinHandle};

/***************************************/
/*           Local modules             */
/***************************************/
use crate::config::Config;
use crate::coordinator::Gateway;
use crate::elevator::{ControlLoop, ElevatorEvent, Request};
use crate::error::{ElevatorError, ElevatorResult};

/***************************************/
/*             Public API              */
/***************************************/

/**
 * Owns the control loop thread for the lifetime of the simulation.
 *
 * `spawn` builds the building state, hands it to a fresh `ControlLoop` on a
 * thread named `control_loop` and returns a handle from which gateways are
 * cloned. Dropping the handle, or calling `shutdown`, stops the loop and waits
 * for it to finish whatever it was doing.
 *
 * # Fields
 * - `gateway`:         Gateway cloned out to callers.
 * - `terminate_tx`:    Tells the control loop to exit.
 * - `control_thread`:  Join handle of the control loop, taken on shutdown.
 */
pub struct ElevatorSystem {
    gateway: Gateway,
    terminate_tx: cbc::Sender<()>,
    control_thread: Option<JoinHandle<()>>,
}

impl ElevatorSystem {
    pub fn spawn(
        config: &Config,
        events_tx: Option<cbc::Sender<ElevatorEvent>>,
    ) -> ElevatorResult<ElevatorSystem> {
        config
            .validate()
            .map_err(|e| ElevatorError::InvalidArgument(e.to_string()))?;

        // Initialize channels
        let (request_tx, request_rx) = cbc::unbounded::<Request>();
        let (terminate_tx, terminate_rx) = cbc::unbounded::<()>();

        let control_loop = ControlLoop::new(config, request_rx, terminate_rx, events_tx);
        let control_thread = Builder::new()
            .name("control_loop".into())
            .spawn(move || control_loop.run())
            .map_err(|e| ElevatorError::Resource(format!("failed to spawn control loop: {}", e)))?;

        info!("Elevator system up with {} floors", config.elevator.n_floors);
        Ok(ElevatorSystem {
            gateway: Gateway::new(request_tx, config.elevator.n_floors),
            terminate_tx,
            control_thread: Some(control_thread),
        })
    }

    pub fn gateway(&self) -> Gateway {
        self.gateway.clone()
    }

    pub fn shutdown(mut self) -> ElevatorResult<()> {
        self.terminate()
    }

    fn terminate(&mut self) -> ElevatorResult<()> {
        let Some(control_thread) = self.control_thread.take() else {
            return Ok(());
        };

        let _ = self.terminate_tx.send(());
        control_thread.join().map_err(|_| {
            warn!("Control loop panicked");
            ElevatorError::Resource("control loop panicked".into())
        })
    }
}

impl Drop for ElevatorSystem {
    fn drop(&mut self) {
        let _ = self.terminate();
    }
}
