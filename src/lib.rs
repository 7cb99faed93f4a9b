//! coop_backoffice Library
//!
//! Entity managers for a cooperative back office: generic registries over
//! Postgres that publish a topic for every change.

pub mod api;
pub mod broker;
pub mod config;
pub mod db;
pub mod domain;
pub mod error;
pub mod footstep;
pub mod jobs;
pub mod managers;
pub mod registry;
pub mod seed;

pub use config::Config;
pub use domain::{Amount, AmountError, BranchScope, DomainError, OperationContext};
pub use error::{AppError, AppResult};
pub use managers::{ManagerError, Managers};
pub use registry::{Entity, Filter, Registry, RegistryError, Sort};
