//! MSE CPU power model.

use crate::host::HostRef;
use crate::power_model::PowerModel;

/// A non-linear power consumption model from
/// [Fan et al. Power Provisioning for a Warehouse-sized Computer (ISCA 2007)](https://dl.acm.org/doi/abs/10.1145/1273440.1250665).
///
/// The power consumption is computed as `P(u) = P_min + (P_max - P_min) * (2u - u^r)`,
/// where `r` is the calibration parameter that is chosen such as to minimize the mean squared error (MSE)
/// to the actual power measurements (1.4 in the original study).
/// The curve stays within `[P_min, P_max]` and is non-decreasing only for `r` within [1, 2].
#[derive(Clone)]
pub struct MseCpuPowerModel {
    min_power: f64,
    r_param: f64,
    factor: f64,
    host: HostRef,
}

impl MseCpuPowerModel {
    /// Creates a MSE power model.
    ///
    /// * `min_power` - The minimum power consumption in W (at 0% utilization).
    /// * `max_power` - The maximum power consumption in W (at 100% utilization).
    /// * `r_param` - The calibration parameter set to minimize the MSE.
    pub fn new(min_power: f64, max_power: f64, r_param: f64) -> Self {
        Self {
            min_power,
            r_param,
            factor: max_power - min_power,
            host: HostRef::NONE,
        }
    }
}

impl PowerModel for MseCpuPowerModel {
    fn get_host(&self) -> HostRef {
        self.host
    }

    fn set_host(&mut self, host: HostRef) {
        self.host = host;
    }

    fn compute_power(&self, utilization: f64) -> f64 {
        self.min_power + self.factor * (2. * utilization - utilization.powf(self.r_param))
    }
}
