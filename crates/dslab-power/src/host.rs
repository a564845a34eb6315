//! Host record and host reference.

use std::fmt::{Display, Formatter};

use crate::error::InvalidUtilization;
use crate::power_model::PowerModel;

/// Non-owning handle to a host, stored by power models as a back-reference.
///
/// The handle only identifies the host, the host lifetime is managed by the simulation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct HostRef {
    id: Option<u32>,
}

impl HostRef {
    /// Reference to no host.
    pub const NONE: HostRef = HostRef { id: None };

    /// Creates a reference to the host with the given id.
    pub fn new(id: u32) -> Self {
        Self { id: Some(id) }
    }

    /// Returns the referenced host id, if any.
    pub fn id(&self) -> Option<u32> {
        self.id
    }

    /// Returns true if this is [`HostRef::NONE`].
    pub fn is_none(&self) -> bool {
        self.id.is_none()
    }
}

impl Default for HostRef {
    fn default() -> Self {
        Self::NONE
    }
}

impl Display for HostRef {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.id {
            Some(id) => write!(f, "host #{}", id),
            None => write!(f, "no host"),
        }
    }
}

/// Physical host with the attached power model.
///
/// Stores the current CPU utilization reported by the simulation and uses it
/// to compute the current power consumption.
#[derive(Clone)]
pub struct Host {
    id: u32,
    name: String,
    cpu_total: u32,
    cpu_load: f64,
    power_model: Box<dyn PowerModel>,
}

impl Host {
    /// Creates a host without power model (the null power model is used) and with zero CPU load.
    pub fn new<S: Into<String>>(id: u32, name: S, cpu_total: u32) -> Self {
        Self {
            id,
            name: name.into(),
            cpu_total,
            cpu_load: 0.,
            power_model: Box::default(),
        }
    }

    /// Returns the host id.
    pub fn id(&self) -> u32 {
        self.id
    }

    /// Returns the host name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the host CPU capacity.
    pub fn cpu_total(&self) -> u32 {
        self.cpu_total
    }

    /// Returns a reference to this host to be stored by its power model.
    pub fn host_ref(&self) -> HostRef {
        HostRef::new(self.id)
    }

    /// Attaches the power model to this host.
    pub fn set_power_model(&mut self, mut power_model: Box<dyn PowerModel>) {
        power_model.set_host(self.host_ref());
        if power_model.is_null() {
            log::debug!("host {} (#{}) uses null power model", self.name, self.id);
        } else {
            log::debug!("power model attached to host {} (#{})", self.name, self.id);
        }
        self.power_model = power_model;
    }

    /// Returns the attached power model.
    pub fn power_model(&self) -> &dyn PowerModel {
        self.power_model.as_ref()
    }

    /// Returns the current CPU utilization.
    pub fn cpu_load(&self) -> f64 {
        self.cpu_load
    }

    /// Updates the current CPU utilization.
    ///
    /// The value is stored as is, the out of range values are reported when the power is requested.
    pub fn set_cpu_load(&mut self, cpu_load: f64) {
        self.cpu_load = cpu_load;
    }

    /// Returns the current power consumption in W.
    pub fn get_power(&self) -> Result<f64, InvalidUtilization> {
        self.get_power_at(self.cpu_load)
    }

    /// Returns the power consumption in W for the given CPU utilization.
    pub fn get_power_at(&self, cpu_load: f64) -> Result<f64, InvalidUtilization> {
        let power = self.power_model.get_power(cpu_load)?;
        log::trace!("host {} power at load {:.3}: {:.3} W", self.name, cpu_load, power);
        Ok(power)
    }
}
