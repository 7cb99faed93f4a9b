//! Cash/check voucher manager

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::broker::TopicScope;
use crate::domain::{reference_number, Amount, BranchScope};
use crate::registry::{format_date, Audit, BranchScoped, Entity, Relation, SqlValue};

use super::voucher::{Voucher, VoucherLifecycle, VoucherLifecycleResponse};
use super::AuditResponse;

#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct CashCheckVoucher {
    pub id: Uuid,
    #[sqlx(flatten)]
    pub audit: Audit,
    pub organization_id: Uuid,
    pub branch_id: Uuid,
    pub currency_id: Option<Uuid>,
    pub employee_user_id: Option<Uuid>,
    pub transaction_batch_id: Option<Uuid>,
    pub member_profile_id: Option<Uuid>,
    pub pay_to: String,
    pub cash_voucher_number: String,
    pub entry_date: NaiveDate,
    pub description: Option<String>,
    pub total_debit: Decimal,
    pub total_credit: Decimal,
    pub approved_by_name: Option<String>,
    pub prepared_by_name: Option<String>,
    #[sqlx(flatten)]
    pub lifecycle: VoucherLifecycle,
}

#[derive(Debug, Clone, Serialize)]
pub struct CashCheckVoucherResponse {
    pub id: Uuid,
    #[serde(flatten)]
    pub audit: AuditResponse,
    pub organization_id: Uuid,
    pub branch_id: Uuid,
    pub currency_id: Option<Uuid>,
    pub employee_user_id: Option<Uuid>,
    pub transaction_batch_id: Option<Uuid>,
    pub member_profile_id: Option<Uuid>,
    pub pay_to: String,
    pub cash_voucher_number: String,
    pub entry_date: String,
    pub description: Option<String>,
    pub total_debit: Decimal,
    pub total_credit: Decimal,
    pub approved_by_name: Option<String>,
    pub prepared_by_name: Option<String>,
    #[serde(flatten)]
    pub lifecycle: VoucherLifecycleResponse,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CashCheckVoucherRequest {
    pub currency_id: Option<Uuid>,
    pub transaction_batch_id: Option<Uuid>,
    pub member_profile_id: Option<Uuid>,
    pub pay_to: String,
    pub cash_voucher_number: Option<String>,
    pub entry_date: Option<NaiveDate>,
    pub description: Option<String>,
    #[serde(default)]
    pub total_debit: Amount,
    #[serde(default)]
    pub total_credit: Amount,
    pub approved_by_name: Option<String>,
    pub prepared_by_name: Option<String>,
}

impl CashCheckVoucherRequest {
    pub fn into_record(self, scope: BranchScope, user_id: Option<Uuid>) -> CashCheckVoucher {
        let entry_date = self.entry_date.unwrap_or_else(|| Utc::now().date_naive());
        CashCheckVoucher {
            id: Uuid::nil(),
            audit: Audit::by(user_id),
            organization_id: scope.organization_id,
            branch_id: scope.branch_id,
            currency_id: self.currency_id,
            employee_user_id: user_id,
            transaction_batch_id: self.transaction_batch_id,
            member_profile_id: self.member_profile_id,
            pay_to: self.pay_to,
            cash_voucher_number: self
                .cash_voucher_number
                .unwrap_or_else(|| reference_number("CV", entry_date)),
            entry_date,
            description: self.description,
            total_debit: self.total_debit.value(),
            total_credit: self.total_credit.value(),
            approved_by_name: self.approved_by_name,
            prepared_by_name: self.prepared_by_name,
            lifecycle: VoucherLifecycle::draft(),
        }
    }

    /// Overwrite the editable fields; the lifecycle is left untouched
    pub fn apply(self, voucher: &mut CashCheckVoucher, user_id: Option<Uuid>) {
        voucher.currency_id = self.currency_id;
        voucher.transaction_batch_id = self.transaction_batch_id;
        voucher.member_profile_id = self.member_profile_id;
        voucher.pay_to = self.pay_to;
        if let Some(number) = self.cash_voucher_number {
            voucher.cash_voucher_number = number;
        }
        if let Some(date) = self.entry_date {
            voucher.entry_date = date;
        }
        voucher.description = self.description;
        voucher.total_debit = self.total_debit.value();
        voucher.total_credit = self.total_credit.value();
        voucher.approved_by_name = self.approved_by_name;
        voucher.prepared_by_name = self.prepared_by_name;
        voucher.audit.touch(user_id);
    }
}

impl Entity for CashCheckVoucher {
    type Response = CashCheckVoucherResponse;

    const TABLE: &'static str = "cash_check_vouchers";
    const TOPIC: &'static str = "cash_check_voucher";
    const COLUMNS: &'static [&'static str] = &[
        "organization_id",
        "branch_id",
        "currency_id",
        "employee_user_id",
        "transaction_batch_id",
        "member_profile_id",
        "pay_to",
        "cash_voucher_number",
        "entry_date",
        "description",
        "total_debit",
        "total_credit",
        "approved_by_name",
        "prepared_by_name",
        "status",
        "printed_date",
        "printed_by_id",
        "print_number",
        "approved_date",
        "approved_by_id",
        "released_date",
        "released_by_id",
    ];

    fn id(&self) -> Uuid {
        self.id
    }

    fn audit(&self) -> &Audit {
        &self.audit
    }

    fn scope(&self) -> TopicScope {
        self.branch_scope()
    }

    fn values(&self) -> Vec<SqlValue> {
        let mut values = vec![
            self.organization_id.into(),
            self.branch_id.into(),
            self.currency_id.into(),
            self.employee_user_id.into(),
            self.transaction_batch_id.into(),
            self.member_profile_id.into(),
            self.pay_to.clone().into(),
            self.cash_voucher_number.clone().into(),
            self.entry_date.into(),
            self.description.clone().into(),
            self.total_debit.into(),
            self.total_credit.into(),
            self.approved_by_name.clone().into(),
            self.prepared_by_name.clone().into(),
        ];
        values.extend(self.lifecycle.values());
        values
    }

    fn to_response(&self) -> CashCheckVoucherResponse {
        CashCheckVoucherResponse {
            id: self.id,
            audit: (&self.audit).into(),
            organization_id: self.organization_id,
            branch_id: self.branch_id,
            currency_id: self.currency_id,
            employee_user_id: self.employee_user_id,
            transaction_batch_id: self.transaction_batch_id,
            member_profile_id: self.member_profile_id,
            pay_to: self.pay_to.clone(),
            cash_voucher_number: self.cash_voucher_number.clone(),
            entry_date: format_date(&self.entry_date),
            description: self.description.clone(),
            total_debit: self.total_debit,
            total_credit: self.total_credit,
            approved_by_name: self.approved_by_name.clone(),
            prepared_by_name: self.prepared_by_name.clone(),
            lifecycle: self.lifecycle.to_response(),
        }
    }

    fn relations() -> Vec<Relation<Self>> {
        vec![
            Relation::new("currency", "currencies", |v| v.currency_id),
            Relation::new("employee_user", "users", |v| v.employee_user_id),
            Relation::new("transaction_batch", "transaction_batches", |v| {
                v.transaction_batch_id
            }),
        ]
    }
}

impl BranchScoped for CashCheckVoucher {
    fn organization_id(&self) -> Uuid {
        self.organization_id
    }

    fn branch_id(&self) -> Uuid {
        self.branch_id
    }
}

impl Voucher for CashCheckVoucher {
    fn lifecycle(&self) -> &VoucherLifecycle {
        &self.lifecycle
    }

    fn lifecycle_mut(&mut self) -> &mut VoucherLifecycle {
        &mut self.lifecycle
    }

    fn audit_mut(&mut self) -> &mut Audit {
        &mut self.audit
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::VoucherStatus;
    use crate::managers::voucher::LIFECYCLE_COLUMNS;
    use rust_decimal_macros::dec;

    fn request() -> CashCheckVoucherRequest {
        CashCheckVoucherRequest {
            currency_id: None,
            transaction_batch_id: None,
            member_profile_id: None,
            pay_to: "Juan Dela Cruz".into(),
            cash_voucher_number: None,
            entry_date: NaiveDate::from_ymd_opt(2024, 11, 2),
            description: Some("Loan release".into()),
            total_debit: Amount::new(dec!(2500)).unwrap(),
            total_credit: Amount::new(dec!(2500)).unwrap(),
            approved_by_name: None,
            prepared_by_name: Some("Teller 1".into()),
        }
    }

    fn scope() -> BranchScope {
        BranchScope {
            organization_id: Uuid::new_v4(),
            branch_id: Uuid::new_v4(),
        }
    }

    #[test]
    fn test_new_voucher_is_draft() {
        let voucher = request().into_record(scope(), None);

        assert_eq!(voucher.lifecycle.status(), VoucherStatus::Draft);
        assert!(voucher.cash_voucher_number.starts_with("CV-20241102-"));
        assert_eq!(voucher.values().len(), CashCheckVoucher::COLUMNS.len());
        assert!(CashCheckVoucher::COLUMNS.ends_with(&LIFECYCLE_COLUMNS));
    }

    #[test]
    fn test_response_flattens_lifecycle() {
        let voucher = request().into_record(scope(), None);
        let json = serde_json::to_value(voucher.to_response()).unwrap();

        assert_eq!(json["status"], "draft");
        assert_eq!(json["entry_date"], "2024-11-02");
        assert_eq!(json["print_number"], 0);
        assert!(json["released_date"].is_null());
    }

    #[test]
    fn test_apply_keeps_number_when_absent() {
        let mut voucher = request().into_record(scope(), None);
        let number = voucher.cash_voucher_number.clone();

        let mut edit = request();
        edit.pay_to = "Maria Clara".into();
        edit.apply(&mut voucher, None);

        assert_eq!(voucher.pay_to, "Maria Clara");
        assert_eq!(voucher.cash_voucher_number, number);
    }
}
