//! Domain module
//!
//! Value types and business rules shared by the managers.

pub mod amount;
pub mod context;
pub mod error;
pub mod voucher;

pub use amount::{Amount, AmountError};
pub use context::{BranchScope, OperationContext};
pub use error::DomainError;
pub use voucher::{reference_number, VoucherStatus};
