//! Fluent builder for constructing a [`LiftSim`].

use lift_core::{BankConfig, Floor};
use lift_dispatch::{Controller, DispatchError, lock};

use crate::{LiftSim, SimError, SimResult};

/// Validated construction of a [`LiftSim`].
///
/// # Required inputs
///
/// - [`BankConfig`] — fleet size, floor count, parking policy, intervals.
///
/// # Optional inputs (have defaults)
///
/// | Method               | Default                         |
/// |----------------------|---------------------------------|
/// | `.initial_floors(v)` | Every cab idle at the ground    |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(BankConfig::default())
///     .initial_floors(vec![Floor(0), Floor(20)])
///     .build()?;
/// sim.run_ticks(10, &mut NoopObserver);
/// ```
pub struct SimBuilder {
    config:         BankConfig,
    initial_floors: Option<Vec<Floor>>,
}

impl SimBuilder {
    pub fn new(config: BankConfig) -> Self {
        Self { config, initial_floors: None }
    }

    /// Place each cab at the given floor instead of the ground floor.
    /// Must be one entry per elevator.
    pub fn initial_floors(mut self, floors: Vec<Floor>) -> Self {
        self.initial_floors = Some(floors);
        self
    }

    /// Validate the configuration, build the fleet, and place it.
    pub fn build(self) -> SimResult<LiftSim> {
        self.config.validate()?;
        let controller = Controller::from_config(&self.config);

        if let Some(floors) = self.initial_floors {
            if floors.len() != controller.fleet().len() {
                return Err(SimError::FleetSizeMismatch {
                    expected: controller.fleet().len(),
                    got:      floors.len(),
                });
            }
            for (cab, &floor) in controller.fleet().iter().zip(&floors) {
                if !self.config.contains(floor) {
                    return Err(DispatchError::FloorOutOfRange {
                        floor,
                        num_floors: self.config.num_floors,
                    }
                    .into());
                }
                lock(cab).place(floor);
            }
        }

        Ok(LiftSim::from_parts(self.config, controller))
    }
}
