//! Power configuration of simulated hosts.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use sugars::boxed;

use crate::cpu_models::asymptotic::AsymptoticCpuPowerModel;
use crate::cpu_models::constant::ConstantCpuPowerModel;
use crate::cpu_models::cubic::CubicCpuPowerModel;
use crate::cpu_models::empirical::{EmpiricalCpuPowerModel, MEASUREMENTS_COUNT};
use crate::cpu_models::linear::LinearCpuPowerModel;
use crate::cpu_models::mse::MseCpuPowerModel;
use crate::cpu_models::sqrt::SqrtCpuPowerModel;
use crate::cpu_models::square::SquareCpuPowerModel;
use crate::error::ConfigError;
use crate::host::Host;
use crate::power_model::{PowerModel, NULL_POWER_MODEL};

const DEFAULT_MSE_R: f64 = 1.4;
const DEFAULT_ASYMPTOTIC_TAU: f64 = 0.5;

fn default_mse_r() -> f64 {
    DEFAULT_MSE_R
}

fn default_asymptotic_tau() -> f64 {
    DEFAULT_ASYMPTOTIC_TAU
}

/// Hardware with known SPECpower measurements, see [`EmpiricalCpuPowerModel`].
#[derive(Debug, PartialEq, Eq, Serialize, Deserialize, Clone, Copy)]
pub enum EmpiricalPreset {
    /// IBM System x3550 M3 with Intel Xeon X5675.
    #[serde(rename = "system_x3550_m3_xeon_x5675")]
    SystemX3550M3XeonX5675,
    /// HP ProLiant ML110 G4 with Intel Xeon 3040.
    #[serde(rename = "proliant_ml110_g4_xeon_3040")]
    ProliantMl110G4Xeon3040,
    /// HP ProLiant ML110 G5 with Intel Xeon 3075.
    #[serde(rename = "proliant_ml110_g5_xeon_3075")]
    ProliantMl110G5Xeon3075,
    /// IBM System x3250 with Intel Xeon X3470.
    #[serde(rename = "system_x3250_xeon_x3470")]
    SystemX3250XeonX3470,
}

impl EmpiricalPreset {
    fn build(&self) -> EmpiricalCpuPowerModel {
        match self {
            Self::SystemX3550M3XeonX5675 => EmpiricalCpuPowerModel::system_x3550_m3_xeon_x5675(),
            Self::ProliantMl110G4Xeon3040 => EmpiricalCpuPowerModel::proliant_ml110_g4_xeon_3040(),
            Self::ProliantMl110G5Xeon3075 => EmpiricalCpuPowerModel::proliant_ml110_g5_xeon_3075(),
            Self::SystemX3250XeonX3470 => EmpiricalCpuPowerModel::system_x3250_xeon_x3470(),
        }
    }
}

/// Describes a power model, the `type` field selects the model.
///
/// All power values are in W.
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PowerModelConfig {
    /// No power model, the host consumes nothing.
    None,
    /// [`ConstantCpuPowerModel`].
    Constant {
        /// Power consumption.
        power: f64,
    },
    /// [`LinearCpuPowerModel`].
    Linear {
        /// Power consumption at 0% utilization.
        min_power: f64,
        /// Power consumption at 100% utilization.
        max_power: f64,
    },
    /// [`SquareCpuPowerModel`].
    Square {
        /// Power consumption at 0% utilization.
        min_power: f64,
        /// Power consumption at 100% utilization.
        max_power: f64,
    },
    /// [`CubicCpuPowerModel`].
    Cubic {
        /// Power consumption at 0% utilization.
        min_power: f64,
        /// Power consumption at 100% utilization.
        max_power: f64,
    },
    /// [`SqrtCpuPowerModel`].
    Sqrt {
        /// Power consumption at 0% utilization.
        min_power: f64,
        /// Power consumption at 100% utilization.
        max_power: f64,
    },
    /// [`MseCpuPowerModel`].
    Mse {
        /// Power consumption at 0% utilization.
        min_power: f64,
        /// Power consumption at 100% utilization.
        max_power: f64,
        /// Calibration parameter within [1, 2], 1.4 by default.
        #[serde(default = "default_mse_r")]
        r: f64,
    },
    /// [`AsymptoticCpuPowerModel`].
    Asymptotic {
        /// Power consumption at 0% utilization.
        min_power: f64,
        /// Power consumption at 100% utilization.
        max_power: f64,
        /// Utilization level at which the consumption becomes close to linear, 0.5 by default.
        #[serde(default = "default_asymptotic_tau")]
        tau: f64,
    },
    /// [`EmpiricalCpuPowerModel`] with either explicit measurements or a hardware preset.
    Empirical {
        /// Power consumption at utilization levels from 0% to 100% with 10% step.
        measurements: Option<Vec<f64>>,
        /// Hardware preset, used if measurements are not set.
        preset: Option<EmpiricalPreset>,
    },
}

fn invalid(model: &'static str, reason: String) -> ConfigError {
    ConfigError::InvalidModel { model, reason }
}

fn check_power(model: &'static str, param: &str, value: f64) -> Result<(), ConfigError> {
    if !value.is_finite() || value < 0. {
        return Err(invalid(model, format!("{} should be finite and non-negative, got {}", param, value)));
    }
    Ok(())
}

fn check_power_range(model: &'static str, min_power: f64, max_power: f64) -> Result<(), ConfigError> {
    check_power(model, "min_power", min_power)?;
    check_power(model, "max_power", max_power)?;
    if min_power > max_power {
        return Err(invalid(
            model,
            format!("min_power {} is greater than max_power {}", min_power, max_power),
        ));
    }
    Ok(())
}

fn check_within(model: &'static str, param: &str, value: f64, low: f64, high: f64) -> Result<(), ConfigError> {
    if !(low..=high).contains(&value) {
        return Err(invalid(
            model,
            format!("{} should be within [{}, {}], got {}", param, low, high, value),
        ));
    }
    Ok(())
}

fn check_positive(model: &'static str, param: &str, value: f64) -> Result<(), ConfigError> {
    if !value.is_finite() || value <= 0. {
        return Err(invalid(model, format!("{} should be finite and positive, got {}", param, value)));
    }
    Ok(())
}

impl PowerModelConfig {
    /// Returns the model type as written in config.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Constant { .. } => "constant",
            Self::Linear { .. } => "linear",
            Self::Square { .. } => "square",
            Self::Cubic { .. } => "cubic",
            Self::Sqrt { .. } => "sqrt",
            Self::Mse { .. } => "mse",
            Self::Asymptotic { .. } => "asymptotic",
            Self::Empirical { .. } => "empirical",
        }
    }

    /// Validates the parameters and creates the described power model.
    pub fn build(&self) -> Result<Box<dyn PowerModel>, ConfigError> {
        let model = self.type_name();
        let power_model: Box<dyn PowerModel> = match self {
            Self::None => boxed!(NULL_POWER_MODEL),
            Self::Constant { power } => {
                check_power(model, "power", *power)?;
                boxed!(ConstantCpuPowerModel::new(*power))
            }
            Self::Linear { min_power, max_power } => {
                check_power_range(model, *min_power, *max_power)?;
                boxed!(LinearCpuPowerModel::new(*min_power, *max_power))
            }
            Self::Square { min_power, max_power } => {
                check_power_range(model, *min_power, *max_power)?;
                boxed!(SquareCpuPowerModel::new(*min_power, *max_power))
            }
            Self::Cubic { min_power, max_power } => {
                check_power_range(model, *min_power, *max_power)?;
                boxed!(CubicCpuPowerModel::new(*min_power, *max_power))
            }
            Self::Sqrt { min_power, max_power } => {
                check_power_range(model, *min_power, *max_power)?;
                boxed!(SqrtCpuPowerModel::new(*min_power, *max_power))
            }
            Self::Mse { min_power, max_power, r } => {
                check_power_range(model, *min_power, *max_power)?;
                // 2u - u^r is negative near 0 for r < 1 and exceeds 1 before u = 1 for r > 2
                check_within(model, "r", *r, 1., 2.)?;
                boxed!(MseCpuPowerModel::new(*min_power, *max_power, *r))
            }
            Self::Asymptotic {
                min_power,
                max_power,
                tau,
            } => {
                check_power_range(model, *min_power, *max_power)?;
                check_positive(model, "tau", *tau)?;
                boxed!(AsymptoticCpuPowerModel::new(*min_power, *max_power, *tau))
            }
            Self::Empirical { measurements, preset } => match (measurements, preset) {
                (Some(measurements), _) => {
                    if measurements.len() != MEASUREMENTS_COUNT {
                        return Err(invalid(
                            model,
                            format!(
                                "expected {} measurements, got {}",
                                MEASUREMENTS_COUNT,
                                measurements.len()
                            ),
                        ));
                    }
                    for value in measurements {
                        check_power(model, "measurement", *value)?;
                    }
                    boxed!(EmpiricalCpuPowerModel::new(measurements.clone()))
                }
                (None, Some(preset)) => boxed!(preset.build()),
                (None, None) => {
                    return Err(invalid(model, "either measurements or preset should be set".to_string()));
                }
            },
        };
        Ok(power_model)
    }
}

/// Holds configuration of a single physical host or a set of identical hosts.
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct HostConfig {
    /// Host name.
    /// Used as is if count = 1.
    pub name: Option<String>,
    /// Host name prefix.
    /// Full name is produced by appending host instance number to the prefix.
    pub name_prefix: Option<String>,
    /// Host CPU capacity.
    pub cpus: u32,
    /// Number of such hosts.
    pub count: Option<u32>,
    /// Host power model, the default one is used if absent.
    pub power_model: Option<PowerModelConfig>,
}

impl HostConfig {
    fn host_name(&self, id: u32, index: u32) -> String {
        let count = self.count.unwrap_or(1);
        match (&self.name, &self.name_prefix) {
            (_, Some(prefix)) => format!("{}{}", prefix, index),
            (Some(name), None) if count == 1 => name.clone(),
            (Some(name), None) => format!("{}-{}", name, index),
            (None, None) => format!("host-{}", id),
        }
    }
}

/// Holds raw power config parsed from YAML.
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
struct RawPowerConfig {
    pub default_power_model: Option<PowerModelConfig>,
    pub hosts: Option<Vec<HostConfig>>,
}

/// Represents power configuration of simulated hosts.
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct PowerConfig {
    /// Power model used by hosts without own power model.
    pub default_power_model: Option<PowerModelConfig>,
    /// Configurations of physical hosts.
    pub hosts: Vec<HostConfig>,
}

impl FromStr for PowerConfig {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw: RawPowerConfig = serde_yaml::from_str(s)?;
        Ok(Self {
            default_power_model: raw.default_power_model,
            hosts: raw.hosts.unwrap_or_default(),
        })
    }
}

impl PowerConfig {
    /// Creates power config by reading it from YAML file.
    pub fn from_file(file_name: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(file_name).map_err(|source| ConfigError::Io {
            path: file_name.to_string(),
            source,
        })?;
        contents.parse()
    }

    /// Creates hosts described by the config and attaches their power models.
    ///
    /// Host ids are assigned sequentially starting from 0 in the order of appearance.
    pub fn build_hosts(&self) -> Result<Vec<Host>, ConfigError> {
        let mut hosts = Vec::new();
        let mut next_id = 0;
        for host_config in &self.hosts {
            let count = host_config.count.unwrap_or(1);
            if count == 0 {
                return Err(ConfigError::InvalidHost(format!("zero count for {:?}", host_config)));
            }
            if host_config.cpus == 0 {
                return Err(ConfigError::InvalidHost(format!("zero cpus for {:?}", host_config)));
            }
            let model_config = host_config.power_model.as_ref().or(self.default_power_model.as_ref());
            for index in 0..count {
                let mut host = Host::new(next_id, host_config.host_name(next_id, index), host_config.cpus);
                match model_config {
                    Some(model_config) => host.set_power_model(model_config.build()?),
                    None => log::warn!("no power model configured for host {}, using null model", host.name()),
                }
                hosts.push(host);
                next_id += 1;
            }
        }
        log::info!("created {} hosts", hosts.len());
        Ok(hosts)
    }
}
