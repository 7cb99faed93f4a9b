//! Journal voucher manager

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::broker::TopicScope;
use crate::domain::{reference_number, Amount, BranchScope, DomainError};
use crate::registry::{
    format_date, format_optional_timestamp, Audit, BranchScoped, Entity, Registry, Relation,
    SqlValue,
};

use super::voucher::{Voucher, VoucherLifecycle, VoucherLifecycleResponse};
use super::{AuditResponse, ManagerError};

#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct JournalVoucher {
    pub id: Uuid,
    #[sqlx(flatten)]
    pub audit: Audit,
    pub organization_id: Uuid,
    pub branch_id: Uuid,
    pub currency_id: Uuid,
    pub employee_user_id: Option<Uuid>,
    pub transaction_batch_id: Option<Uuid>,
    pub name: String,
    pub cash_voucher_number: String,
    pub date: NaiveDate,
    pub description: Option<String>,
    pub reference: Option<String>,
    pub total_debit: Decimal,
    pub total_credit: Decimal,
    pub posted_at: Option<DateTime<Utc>>,
    pub posted_by_id: Option<Uuid>,
    #[sqlx(flatten)]
    pub lifecycle: VoucherLifecycle,
}

#[derive(Debug, Clone, Serialize)]
pub struct JournalVoucherResponse {
    pub id: Uuid,
    #[serde(flatten)]
    pub audit: AuditResponse,
    pub organization_id: Uuid,
    pub branch_id: Uuid,
    pub currency_id: Uuid,
    pub employee_user_id: Option<Uuid>,
    pub transaction_batch_id: Option<Uuid>,
    pub name: String,
    pub cash_voucher_number: String,
    pub date: String,
    pub description: Option<String>,
    pub reference: Option<String>,
    pub total_debit: Decimal,
    pub total_credit: Decimal,
    pub posted_at: Option<String>,
    pub posted_by_id: Option<Uuid>,
    #[serde(flatten)]
    pub lifecycle: VoucherLifecycleResponse,
}

#[derive(Debug, Clone, Deserialize)]
pub struct JournalVoucherRequest {
    pub currency_id: Uuid,
    pub transaction_batch_id: Option<Uuid>,
    pub name: String,
    pub cash_voucher_number: Option<String>,
    pub date: Option<NaiveDate>,
    pub description: Option<String>,
    pub reference: Option<String>,
    #[serde(default)]
    pub total_debit: Amount,
    #[serde(default)]
    pub total_credit: Amount,
}

impl JournalVoucherRequest {
    pub fn into_record(self, scope: BranchScope, user_id: Option<Uuid>) -> JournalVoucher {
        let date = self.date.unwrap_or_else(|| Utc::now().date_naive());
        JournalVoucher {
            id: Uuid::nil(),
            audit: Audit::by(user_id),
            organization_id: scope.organization_id,
            branch_id: scope.branch_id,
            currency_id: self.currency_id,
            employee_user_id: user_id,
            transaction_batch_id: self.transaction_batch_id,
            name: self.name,
            cash_voucher_number: self
                .cash_voucher_number
                .unwrap_or_else(|| reference_number("JV", date)),
            date,
            description: self.description,
            reference: self.reference,
            total_debit: self.total_debit.value(),
            total_credit: self.total_credit.value(),
            posted_at: None,
            posted_by_id: None,
            lifecycle: VoucherLifecycle::draft(),
        }
    }
}

impl Entity for JournalVoucher {
    type Response = JournalVoucherResponse;

    const TABLE: &'static str = "journal_vouchers";
    const TOPIC: &'static str = "journal_voucher";
    const COLUMNS: &'static [&'static str] = &[
        "organization_id",
        "branch_id",
        "currency_id",
        "employee_user_id",
        "transaction_batch_id",
        "name",
        "cash_voucher_number",
        "date",
        "description",
        "reference",
        "total_debit",
        "total_credit",
        "posted_at",
        "posted_by_id",
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
            self.name.clone().into(),
            self.cash_voucher_number.clone().into(),
            self.date.into(),
            self.description.clone().into(),
            self.reference.clone().into(),
            self.total_debit.into(),
            self.total_credit.into(),
            self.posted_at.into(),
            self.posted_by_id.into(),
        ];
        values.extend(self.lifecycle.values());
        values
    }

    fn to_response(&self) -> JournalVoucherResponse {
        JournalVoucherResponse {
            id: self.id,
            audit: (&self.audit).into(),
            organization_id: self.organization_id,
            branch_id: self.branch_id,
            currency_id: self.currency_id,
            employee_user_id: self.employee_user_id,
            transaction_batch_id: self.transaction_batch_id,
            name: self.name.clone(),
            cash_voucher_number: self.cash_voucher_number.clone(),
            date: format_date(&self.date),
            description: self.description.clone(),
            reference: self.reference.clone(),
            total_debit: self.total_debit,
            total_credit: self.total_credit,
            posted_at: format_optional_timestamp(&self.posted_at),
            posted_by_id: self.posted_by_id,
            lifecycle: self.lifecycle.to_response(),
        }
    }

    fn relations() -> Vec<Relation<Self>> {
        vec![
            Relation::new("currency", "currencies", |v| Some(v.currency_id)),
            Relation::new("employee_user", "users", |v| v.employee_user_id),
            Relation::new("transaction_batch", "transaction_batches", |v| {
                v.transaction_batch_id
            }),
        ]
    }
}

impl BranchScoped for JournalVoucher {
    fn organization_id(&self) -> Uuid {
        self.organization_id
    }

    fn branch_id(&self) -> Uuid {
        self.branch_id
    }
}

impl Voucher for JournalVoucher {
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

impl JournalVoucher {
    /// Mark the voucher as posted to the ledger
    pub fn mark_posted(&mut self, user_id: Option<Uuid>, now: DateTime<Utc>) -> Result<(), DomainError> {
        if self.posted_at.is_some() {
            return Err(DomainError::BusinessRuleViolation(format!(
                "journal voucher {} is already posted",
                self.cash_voucher_number
            )));
        }
        if self.total_debit != self.total_credit {
            return Err(DomainError::Unbalanced {
                debit: self.total_debit,
                credit: self.total_credit,
            });
        }

        self.posted_at = Some(now);
        self.posted_by_id = user_id;
        self.audit.touch(user_id);
        Ok(())
    }
}

impl Registry<JournalVoucher> {
    /// Post a balanced voucher of the branch
    pub async fn post(
        &self,
        id: Uuid,
        scope: BranchScope,
        user_id: Option<Uuid>,
    ) -> Result<JournalVoucher, ManagerError> {
        let mut voucher = self
            .get_in_branch(id, scope.organization_id, scope.branch_id)
            .await?;
        voucher.mark_posted(user_id, Utc::now())?;

        let voucher = self.update(voucher).await?;
        tracing::info!(voucher_id = %id, "Journal voucher posted");
        Ok(voucher)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::managers::voucher::LIFECYCLE_COLUMNS;
    use rust_decimal_macros::dec;

    fn voucher(debit: Decimal, credit: Decimal) -> JournalVoucher {
        JournalVoucherRequest {
            currency_id: Uuid::new_v4(),
            transaction_batch_id: None,
            name: "Accrual".into(),
            cash_voucher_number: None,
            date: NaiveDate::from_ymd_opt(2024, 3, 9),
            description: None,
            reference: None,
            total_debit: Amount::new(debit).unwrap(),
            total_credit: Amount::new(credit).unwrap(),
        }
        .into_record(
            BranchScope {
                organization_id: Uuid::new_v4(),
                branch_id: Uuid::new_v4(),
            },
            None,
        )
    }

    #[test]
    fn test_columns_match_values() {
        let v = voucher(dec!(1), dec!(1));
        assert_eq!(v.values().len(), JournalVoucher::COLUMNS.len());
        assert!(JournalVoucher::COLUMNS.ends_with(&LIFECYCLE_COLUMNS));
        assert!(v.cash_voucher_number.starts_with("JV-20240309-"));
    }

    #[test]
    fn test_post_requires_balance() {
        let mut v = voucher(dec!(100), dec!(90));
        let err = v.mark_posted(None, Utc::now()).unwrap_err();
        assert!(matches!(err, DomainError::Unbalanced { .. }));
        assert!(v.posted_at.is_none());
    }

    #[test]
    fn test_post_only_once() {
        let user = Some(Uuid::new_v4());
        let mut v = voucher(dec!(100), dec!(100));
        v.mark_posted(user, Utc::now()).unwrap();
        assert_eq!(v.posted_by_id, user);
        assert!(v.mark_posted(user, Utc::now()).is_err());
    }
}
