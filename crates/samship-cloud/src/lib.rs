//! AWS SAM CLI boundary for samship.
//!
//! [`SamClient`] issues `sam build` and `sam deploy` through a
//! [`SamExecutor`], which tests replace with a mock.

pub mod client;
pub mod executor;
pub mod sam;

pub use client::{BuildError, DeployError, DeployRequest, SamClient, build_args, deploy_args};
pub use executor::{RealExecutor, SamExecutor};
pub use sam::SamError;
