#![warn(missing_docs)]
#![doc = include_str!("../README.md")]

pub mod config;
pub mod cpu_models;
pub mod error;
pub mod host;
pub mod power_model;
