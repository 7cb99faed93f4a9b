//! Branch resources
//!
//! Ties each branch-scoped entity to its registry and request body so the
//! CRUD handlers can be written once.

use serde::de::DeserializeOwned;
use uuid::Uuid;

use crate::domain::{BranchScope, DomainError};
use crate::managers::{
    Account, AccountRequest, AdjustmentEntry, AdjustmentEntryRequest, Bank, BankRequest,
    BillAndCoins, BillAndCoinsRequest, CashCheckVoucher, CashCheckVoucherRequest, JournalVoucher,
    JournalVoucherRequest, Managers, MemberAsset, MemberAssetRequest, Voucher,
};
use crate::registry::{BranchScoped, Entity, Registry};

/// A branch-scoped entity exposed over HTTP
pub trait BranchResource: BranchScoped {
    /// Body accepted on create (and update, for editable resources)
    type Request: DeserializeOwned + Send + 'static;

    fn registry(managers: &Managers) -> &Registry<Self>;

    fn build(request: Self::Request, scope: BranchScope, user_id: Option<Uuid>) -> Self;
}

/// A resource whose records can be edited in place
pub trait EditableResource: BranchResource {
    /// Reject the edit when the record is frozen
    fn ensure_editable(&self) -> Result<(), DomainError> {
        Ok(())
    }

    fn apply(request: Self::Request, record: &mut Self, user_id: Option<Uuid>);
}

/// A resource with the voucher lifecycle
pub trait VoucherResource: BranchResource + Voucher {}

impl<E: BranchResource + Voucher> VoucherResource for E {}

macro_rules! branch_resource {
    ($entity:ty, $request:ty, $field:ident) => {
        impl BranchResource for $entity {
            type Request = $request;

            fn registry(managers: &Managers) -> &Registry<Self> {
                &managers.$field
            }

            fn build(request: $request, scope: BranchScope, user_id: Option<Uuid>) -> Self {
                request.into_record(scope, user_id)
            }
        }
    };
    ($entity:ty, $request:ty, $field:ident, editable) => {
        branch_resource!($entity, $request, $field);

        impl EditableResource for $entity {
            fn apply(request: $request, record: &mut Self, user_id: Option<Uuid>) {
                request.apply(record, user_id)
            }
        }
    };
}

branch_resource!(Bank, BankRequest, banks, editable);
branch_resource!(BillAndCoins, BillAndCoinsRequest, bill_and_coins, editable);
branch_resource!(MemberAsset, MemberAssetRequest, member_assets, editable);
branch_resource!(Account, AccountRequest, accounts, editable);
branch_resource!(AdjustmentEntry, AdjustmentEntryRequest, adjustment_entries, editable);
branch_resource!(CashCheckVoucher, CashCheckVoucherRequest, cash_check_vouchers);

impl EditableResource for CashCheckVoucher {
    fn ensure_editable(&self) -> Result<(), DomainError> {
        self.lifecycle.ensure_editable(Self::TOPIC, self.id)
    }

    fn apply(request: CashCheckVoucherRequest, record: &mut Self, user_id: Option<Uuid>) {
        request.apply(record, user_id)
    }
}
branch_resource!(JournalVoucher, JournalVoucherRequest, journal_vouchers);
