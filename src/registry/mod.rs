//! Registry module
//!
//! Generic CRUD over Postgres for every managed entity. A manager is a
//! [`Registry`] configured by an [`Entity`] implementation plus a few
//! convenience queries.

mod entity;
mod error;
mod filter;
mod repository;
mod value;

pub use entity::{
    format_date, format_optional_timestamp, format_timestamp, Audit, BranchScoped, Entity, Relation,
    BASE_COLUMNS,
};
pub use error::{is_unique_violation, RegistryError};
pub use filter::{Filter, FilterOp, FilterValue, Sort};
pub use repository::Registry;
pub use value::SqlValue;
