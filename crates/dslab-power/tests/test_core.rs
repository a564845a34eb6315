//! Tests for the power model contract and the null power model.

use rand::prelude::*;
use rand_pcg::Pcg64;

use dslab_power::cpu_models::asymptotic::AsymptoticCpuPowerModel;
use dslab_power::cpu_models::constant::ConstantCpuPowerModel;
use dslab_power::cpu_models::cubic::CubicCpuPowerModel;
use dslab_power::cpu_models::empirical::EmpiricalCpuPowerModel;
use dslab_power::cpu_models::linear::LinearCpuPowerModel;
use dslab_power::cpu_models::mse::MseCpuPowerModel;
use dslab_power::cpu_models::sqrt::SqrtCpuPowerModel;
use dslab_power::cpu_models::square::SquareCpuPowerModel;
use dslab_power::error::InvalidUtilization;
use dslab_power::host::HostRef;
use dslab_power::power_model::{NullPowerModel, PowerModel, NULL_POWER_MODEL};

fn all_models() -> Vec<Box<dyn PowerModel>> {
    vec![
        Box::new(ConstantCpuPowerModel::new(150.)),
        Box::new(LinearCpuPowerModel::new(100., 250.)),
        Box::new(SquareCpuPowerModel::new(100., 250.)),
        Box::new(CubicCpuPowerModel::new(100., 250.)),
        Box::new(SqrtCpuPowerModel::new(100., 250.)),
        Box::new(MseCpuPowerModel::new(100., 250., 1.4)),
        Box::new(AsymptoticCpuPowerModel::new(100., 250., 0.5)),
        Box::new(EmpiricalCpuPowerModel::system_x3550_m3_xeon_x5675()),
    ]
}

#[test]
fn test_null_model_power() {
    let model = NULL_POWER_MODEL;
    for utilization in [0., 0.5, 1., -1., 2., -5., f64::NAN, f64::INFINITY] {
        assert_eq!(model.get_power(utilization), Ok(0.));
    }
}

#[test]
fn test_null_model_host() {
    let mut model = NullPowerModel;
    assert_eq!(model.get_host(), HostRef::NONE);
    model.set_host(HostRef::new(3));
    assert_eq!(model.get_host(), HostRef::NONE);
    model.set_host(HostRef::new(4));
    assert!(model.get_host().is_none());
    assert!(model.is_null());
}

#[test]
fn test_default_boxed_model_is_null() {
    let model: Box<dyn PowerModel> = Box::default();
    assert!(model.is_null());
    assert_eq!(model.get_power(-5.), Ok(0.));
    assert_eq!(model.get_host(), HostRef::NONE);
}

#[test]
fn test_concrete_models_are_not_null() {
    for model in all_models() {
        assert!(!model.is_null());
    }
}

#[test]
fn test_set_host() {
    for mut model in all_models() {
        assert_eq!(model.get_host(), HostRef::NONE);
        model.set_host(HostRef::new(1));
        assert_eq!(model.get_host(), HostRef::new(1));
        model.set_host(HostRef::new(7));
        assert_eq!(model.get_host(), HostRef::new(7));
        assert_eq!(model.get_host().id(), Some(7));
    }
}

#[test]
fn test_clone_keeps_host() {
    let mut model: Box<dyn PowerModel> = Box::new(LinearCpuPowerModel::new(100., 250.));
    model.set_host(HostRef::new(2));
    let mut copy = model.clone();
    assert_eq!(copy.get_host(), HostRef::new(2));
    copy.set_host(HostRef::new(5));
    assert_eq!(model.get_host(), HostRef::new(2));
    assert_eq!(copy.get_power(0.5), model.get_power(0.5));
}

#[test]
fn test_invalid_utilization() {
    for model in all_models() {
        assert_eq!(model.get_power(-0.1), Err(InvalidUtilization(-0.1)));
        assert_eq!(model.get_power(1.1), Err(InvalidUtilization(1.1)));
        assert_eq!(model.get_power(f64::INFINITY), Err(InvalidUtilization(f64::INFINITY)));
        assert!(model.get_power(f64::NAN).is_err());
    }
}

#[test]
fn test_invalid_utilization_message() {
    let err = LinearCpuPowerModel::new(100., 250.).get_power(1.5).unwrap_err();
    assert_eq!(err.to_string(), "invalid utilization 1.5, should be within [0, 1]");
}

#[test]
fn test_bounds_are_valid() {
    for model in all_models() {
        assert!(model.get_power(0.).is_ok());
        assert!(model.get_power(1.).is_ok());
    }
}

#[test]
fn test_random_utilization() {
    let mut rand = Pcg64::seed_from_u64(123);
    let models = all_models();
    for _ in 0..1000 {
        let utilization: f64 = rand.gen_range(0.0..=1.0);
        for model in &models {
            let power = model.get_power(utilization).unwrap();
            assert!(power.is_finite());
            assert!(power >= 0.);
        }
    }
}

#[test]
fn test_random_utilization_is_monotonic() {
    let mut rand = Pcg64::seed_from_u64(456);
    let models = all_models();
    for _ in 0..1000 {
        let a: f64 = rand.gen_range(0.0..=1.0);
        let b: f64 = rand.gen_range(0.0..=1.0);
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        for model in &models {
            assert!(model.get_power(low).unwrap() <= model.get_power(high).unwrap() + 1e-9);
        }
    }
}
