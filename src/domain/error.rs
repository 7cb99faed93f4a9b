//! Domain Error Types
//!
//! Business-rule failures, independent of storage and transport.

use rust_decimal::Decimal;
use thiserror::Error;
use uuid::Uuid;

use super::{AmountError, VoucherStatus};

#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    #[error("Invalid amount: {0}")]
    InvalidAmount(#[from] AmountError),

    /// Request is missing the organization, branch or user it must run as
    #[error("Missing {0} in operation context")]
    MissingContext(&'static str),

    /// Record belongs to another organization or branch
    #[error("{entity} {id} is outside the current branch")]
    ScopeMismatch { entity: &'static str, id: Uuid },

    #[error("Cannot move {entity} from {from} to {to}")]
    InvalidTransition {
        entity: &'static str,
        from: VoucherStatus,
        to: VoucherStatus,
    },

    #[error("Entries are not balanced: debit {debit}, credit {credit}")]
    Unbalanced { debit: Decimal, credit: Decimal },

    /// Voucher contents are frozen once approved
    #[error("{entity} {id} is {status} and can no longer be edited")]
    Locked {
        entity: &'static str,
        id: Uuid,
        status: VoucherStatus,
    },

    #[error("Currency not found: {0}")]
    CurrencyNotFound(String),

    #[error("Transaction batch {0} is already closed")]
    BatchClosed(Uuid),

    /// Business rule violation
    #[error("Business rule violation: {0}")]
    BusinessRuleViolation(String),
}

impl DomainError {
    pub fn scope_mismatch(entity: &'static str, id: Uuid) -> Self {
        Self::ScopeMismatch { entity, id }
    }

    /// Caller sent something invalid
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidAmount(_)
                | Self::MissingContext(_)
                | Self::Unbalanced { .. }
                | Self::BusinessRuleViolation(_)
        )
    }

    /// Request conflicts with the current state of a record
    pub fn is_conflict_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidTransition { .. } | Self::BatchClosed(_)
        )
    }

    /// Referenced record is missing or invisible to the caller
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ScopeMismatch { .. } | Self::CurrencyNotFound(_))
    }
}
