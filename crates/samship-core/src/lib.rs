//! Core types and configuration for samship.
//!
//! This crate reads the artifact manifest ([`Manifest`]) and per-environment
//! settings ([`EnvironmentConfig`]), validates them, and projects them into
//! [`DeployParameters`]. It never spawns processes.

pub mod config;
pub mod document;
pub mod environment;
pub mod error;
pub mod manifest;
pub mod parameters;

pub use config::{PathsConfig, SamConfig, SamshipConfig};
pub use document::{DocumentKind, RequiredFields};
pub use environment::{Environment, EnvironmentConfig, LambdaSettings};
pub use error::{Error, Result};
pub use manifest::{BuildInfo, Manifest};
pub use parameters::DeployParameters;
