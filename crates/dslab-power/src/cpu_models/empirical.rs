//! Empirical CPU power model.

use crate::host::HostRef;
use crate::power_model::PowerModel;

/// Number of measurements expected by [`EmpiricalCpuPowerModel`].
pub const MEASUREMENTS_COUNT: usize = 11;

/// A power model based on measurements of actual power consumption at different utilization levels.
///
/// The model uses 11 measurements corresponding to power consumption in W at utilization levels from 0% to 100%
/// with step 10%, such as measurements reported by the [SPECpower benchmark](https://www.spec.org/power_ssj2008/results/).
///
/// The power consumption is computed using linear interpolation between the closest measurements.
#[derive(Clone)]
pub struct EmpiricalCpuPowerModel {
    measurements: Vec<f64>,
    host: HostRef,
}

impl EmpiricalCpuPowerModel {
    /// Creates an empirical power model.
    ///
    /// * `measurements` - Power consumption measurements for utilization levels from 0% to 100% with 10% step.
    ///
    /// Panics if the number of measurements is not 11.
    pub fn new(measurements: Vec<f64>) -> Self {
        assert_eq!(
            measurements.len(),
            MEASUREMENTS_COUNT,
            "Incorrect measurements size for EmpiricalCpuPowerModel, should be {}",
            MEASUREMENTS_COUNT
        );
        Self {
            measurements,
            host: HostRef::NONE,
        }
    }

    /// Returns the measurements used by the model.
    pub fn measurements(&self) -> &[f64] {
        &self.measurements
    }

    /// Empirical power model for IBM System x3550 M3 server with Intel Xeon X5675 CPU based on measurements
    /// from [SPECpower benchmark](http://www.spec.org/power_ssj2008/results/res2011q2/power_ssj2008-20110406-00368.html).
    pub fn system_x3550_m3_xeon_x5675() -> Self {
        Self::new(vec![58.4, 98., 109., 118., 128., 140., 153., 170., 189., 205., 222.])
    }

    /// Empirical power model for HP ProLiant ML110 G4 server with Intel Xeon 3040 CPU
    /// based on SPECpower benchmark measurements.
    pub fn proliant_ml110_g4_xeon_3040() -> Self {
        Self::new(vec![86., 89.4, 92.6, 96., 99.5, 102., 106., 108., 112., 114., 117.])
    }

    /// Empirical power model for HP ProLiant ML110 G5 server with Intel Xeon 3075 CPU
    /// based on SPECpower benchmark measurements.
    pub fn proliant_ml110_g5_xeon_3075() -> Self {
        Self::new(vec![93.7, 97., 101., 105., 110., 116., 121., 125., 129., 133., 135.])
    }

    /// Empirical power model for IBM System x3250 server with Intel Xeon X3470 CPU
    /// based on SPECpower benchmark measurements.
    pub fn system_x3250_xeon_x3470() -> Self {
        Self::new(vec![41.6, 46.7, 52.3, 57.9, 65.4, 73., 80.7, 89.5, 99.6, 105., 113.])
    }
}

impl PowerModel for EmpiricalCpuPowerModel {
    fn get_host(&self) -> HostRef {
        self.host
    }

    fn set_host(&mut self, host: HostRef) {
        self.host = host;
    }

    fn compute_power(&self, utilization: f64) -> f64 {
        let last = MEASUREMENTS_COUNT - 1;
        let pos = utilization * last as f64;
        let floor_idx = (pos.floor() as usize).min(last);
        let ceil_idx = (pos.ceil() as usize).min(last);
        let floor_power = self.measurements[floor_idx];
        if floor_idx == ceil_idx {
            return floor_power;
        }
        let ceil_power = self.measurements[ceil_idx];
        floor_power + (ceil_power - floor_power) * (pos - floor_idx as f64)
    }
}
