//! Constant CPU power model.

use crate::host::HostRef;
use crate::power_model::PowerModel;

/// A power model using a constant power consumption value.
#[derive(Clone)]
pub struct ConstantCpuPowerModel {
    power: f64,
    host: HostRef,
}

impl ConstantCpuPowerModel {
    /// Creates a constant power model.
    ///
    /// * `power` - The power consumption in W.
    pub fn new(power: f64) -> Self {
        Self {
            power,
            host: HostRef::NONE,
        }
    }
}

impl PowerModel for ConstantCpuPowerModel {
    fn get_host(&self) -> HostRef {
        self.host
    }

    fn set_host(&mut self, host: HostRef) {
        self.host = host;
    }

    fn compute_power(&self, _utilization: f64) -> f64 {
        self.power
    }
}
