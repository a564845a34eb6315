//! Power model trait and the null power model.

use dyn_clone::{clone_trait_object, DynClone};

use crate::error::{check_utilization, InvalidUtilization};
use crate::host::HostRef;

/// A model for estimating the power consumption of a host based on the utilization of a resource
/// which is critical for power consumption, such as CPU.
///
/// Each model keeps a non-owning reference to the host it is attached to. The host sets it via
/// [`set_host`](PowerModel::set_host) when the model is attached.
///
/// Hosts without a configured model use [`NullPowerModel`], so the callers never have to check
/// whether a model is present.
pub trait PowerModel: DynClone {
    /// Returns the host this model is attached to, or [`HostRef::NONE`].
    fn get_host(&self) -> HostRef;

    /// Attaches the model to the host, replacing the previous association.
    fn set_host(&mut self, host: HostRef);

    /// Returns the power consumption in W for utilization which is already known to be within [0, 1].
    fn compute_power(&self, utilization: f64) -> f64;

    /// Returns the power consumption in W.
    ///
    /// Utilization should be passed as a float in 0.0-1.0 range,
    /// otherwise [`InvalidUtilization`] is returned.
    fn get_power(&self, utilization: f64) -> Result<f64, InvalidUtilization> {
        let utilization = check_utilization(utilization)?;
        Ok(self.compute_power(utilization))
    }

    /// Returns true only for [`NullPowerModel`].
    fn is_null(&self) -> bool {
        false
    }
}

clone_trait_object!(PowerModel);

/// Power model used when no power model is configured for a host.
///
/// Always consumes 0 W, accepts any utilization value without failing and is never attached
/// to a host: [`get_host`](PowerModel::get_host) always returns [`HostRef::NONE`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NullPowerModel;

/// The null power model instance.
pub const NULL_POWER_MODEL: NullPowerModel = NullPowerModel;

impl PowerModel for NullPowerModel {
    fn get_host(&self) -> HostRef {
        HostRef::NONE
    }

    fn set_host(&mut self, _host: HostRef) {}

    fn compute_power(&self, _utilization: f64) -> f64 {
        0.
    }

    fn get_power(&self, _utilization: f64) -> Result<f64, InvalidUtilization> {
        Ok(0.)
    }

    fn is_null(&self) -> bool {
        true
    }
}

impl Default for Box<dyn PowerModel> {
    fn default() -> Self {
        Box::new(NULL_POWER_MODEL)
    }
}
