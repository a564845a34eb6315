//! Square root CPU power model.

use crate::host::HostRef;
use crate::power_model::PowerModel;

/// A power model where the power grows with the square root of utilization, so the growth is steep at low load.
#[derive(Clone)]
pub struct SqrtCpuPowerModel {
    min_power: f64,
    factor: f64,
    host: HostRef,
}

impl SqrtCpuPowerModel {
    /// Creates a square root power model.
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

impl PowerModel for SqrtCpuPowerModel {
    fn get_host(&self) -> HostRef {
        self.host
    }

    fn set_host(&mut self, host: HostRef) {
        self.host = host;
    }

    fn compute_power(&self, utilization: f64) -> f64 {
        self.min_power + self.factor * utilization.sqrt()
    }
}
