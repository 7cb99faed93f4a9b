//! Entity Managers
//!
//! One registry per back-office entity, plus the convenience queries and
//! state transitions each entity needs.

use sqlx::PgPool;
use uuid::Uuid;

use crate::broker::SharedBroker;
use crate::domain::DomainError;
use crate::registry::{format_timestamp, Audit, Registry, RegistryError};

pub mod account;
pub mod adjustment_entry;
pub mod bank;
pub mod bill_and_coins;
pub mod branch;
pub mod cash_check_voucher;
pub mod currency;
pub mod general_ledger;
pub mod journal_voucher;
pub mod media;
pub mod member_asset;
pub mod notification;
pub mod organization;
pub mod timesheet;
pub mod transaction_batch;
pub mod user;
pub mod voucher;

pub use account::{Account, AccountRequest, GeneralLedgerType};
pub use adjustment_entry::{AdjustmentEntry, AdjustmentEntryRequest, AdjustmentEntryTotals};
pub use bank::{Bank, BankRequest};
pub use bill_and_coins::{BillAndCoins, BillAndCoinsRequest};
pub use branch::{Branch, BranchRequest};
pub use cash_check_voucher::{CashCheckVoucher, CashCheckVoucherRequest};
pub use currency::{Currency, CurrencyRequest, DEFAULT_CURRENCY_CODE};
pub use general_ledger::{GeneralLedger, GeneralLedgerRequest};
pub use journal_voucher::{JournalVoucher, JournalVoucherRequest};
pub use media::{Media, MediaRequest};
pub use member_asset::{MemberAsset, MemberAssetRequest};
pub use notification::{Notification, NotificationRequest};
pub use organization::{Organization, OrganizationRequest};
pub use timesheet::{Timesheet, TimesheetRequest};
pub use transaction_batch::{TransactionBatch, TransactionBatchRequest};
pub use user::{User, UserRequest};
pub use voucher::{Voucher, VoucherLifecycle};

/// Audit fields as served in every response
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct AuditResponse {
    pub created_at: String,
    pub created_by_id: Option<Uuid>,
    pub updated_at: String,
    pub updated_by_id: Option<Uuid>,
}

impl From<&Audit> for AuditResponse {
    fn from(audit: &Audit) -> Self {
        Self {
            created_at: format_timestamp(&audit.created_at),
            created_by_id: audit.created_by_id,
            updated_at: format_timestamp(&audit.updated_at),
            updated_by_id: audit.updated_by_id,
        }
    }
}

/// Failure of a manager operation mixing storage and business rules
#[derive(Debug, thiserror::Error)]
pub enum ManagerError {
    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// Every entity registry, sharing one pool and one broker
#[derive(Clone, Debug)]
pub struct Managers {
    pub organizations: Registry<Organization>,
    pub branches: Registry<Branch>,
    pub users: Registry<User>,
    pub media: Registry<Media>,
    pub currencies: Registry<Currency>,
    pub banks: Registry<Bank>,
    pub bill_and_coins: Registry<BillAndCoins>,
    pub accounts: Registry<Account>,
    pub transaction_batches: Registry<TransactionBatch>,
    pub general_ledgers: Registry<GeneralLedger>,
    pub adjustment_entries: Registry<AdjustmentEntry>,
    pub journal_vouchers: Registry<JournalVoucher>,
    pub cash_check_vouchers: Registry<CashCheckVoucher>,
    pub member_assets: Registry<MemberAsset>,
    pub timesheets: Registry<Timesheet>,
    pub notifications: Registry<Notification>,
}

impl Managers {
    pub fn new(pool: PgPool, broker: SharedBroker) -> Self {
        Self {
            organizations: Registry::new(pool.clone(), broker.clone()),
            branches: Registry::new(pool.clone(), broker.clone()),
            users: Registry::new(pool.clone(), broker.clone()),
            media: Registry::new(pool.clone(), broker.clone()),
            currencies: Registry::new(pool.clone(), broker.clone()),
            banks: Registry::new(pool.clone(), broker.clone()),
            bill_and_coins: Registry::new(pool.clone(), broker.clone()),
            accounts: Registry::new(pool.clone(), broker.clone()),
            transaction_batches: Registry::new(pool.clone(), broker.clone()),
            general_ledgers: Registry::new(pool.clone(), broker.clone()),
            adjustment_entries: Registry::new(pool.clone(), broker.clone()),
            journal_vouchers: Registry::new(pool.clone(), broker.clone()),
            cash_check_vouchers: Registry::new(pool.clone(), broker.clone()),
            member_assets: Registry::new(pool.clone(), broker.clone()),
            timesheets: Registry::new(pool.clone(), broker.clone()),
            notifications: Registry::new(pool, broker),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_audit_response_formats_timestamps() {
        let user = Uuid::new_v4();
        let mut audit = Audit::by(Some(user));
        audit.created_at = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
        audit.updated_at = audit.created_at;

        let response = AuditResponse::from(&audit);
        assert_eq!(response.created_at, "2024-01-02T03:04:05+00:00");
        assert_eq!(response.updated_by_id, Some(user));
    }

    #[test]
    fn test_manager_error_wraps_both_sides() {
        let err: ManagerError = DomainError::BatchClosed(Uuid::nil()).into();
        assert!(matches!(err, ManagerError::Domain(_)));

        let err: ManagerError = RegistryError::NotFoundWhere { entity: "bank" }.into();
        assert!(err.to_string().contains("bank"));
    }
}
