//! Square CPU power model.

use crate::host::HostRef;
use crate::power_model::PowerModel;

/// A power model based on square interpolation between the minimum and maximum power consumption values.
#[derive(Clone)]
pub struct SquareCpuPowerModel {
    min_power: f64,
    factor: f64,
    host: HostRef,
}

impl SquareCpuPowerModel {
    /// Creates a square power model.
    ///
    /// * `min_power` - The minimum power consumption in W (at 0% utilization).
    /// * `max_power` - The maximum power consumption in W (at 100% utilization).
    pub fn new(min_power: f64, max_power: f64) -> Self {
        Self {
            min_power,
            factor: max_power - min_power,
            host: HostRef::NONE,
        }
    }
}

impl PowerModel for SquareCpuPowerModel {
    fn get_host(&self) -> HostRef {
        self.host
    }

    fn set_host(&mut self, host: HostRef) {
        self.host = host;
    }

    fn compute_power(&self, utilization: f64) -> f64 {
        self.min_power + self.factor * utilization.powi(2)
    }
}
