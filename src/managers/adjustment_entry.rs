//! Adjustment entry manager

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::broker::TopicScope;
use crate::domain::{Amount, BranchScope};
use crate::registry::{
    format_date, Audit, BranchScoped, Entity, Filter, Registry, RegistryError, Relation, SqlValue,
};

use super::AuditResponse;

#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct AdjustmentEntry {
    pub id: Uuid,
    #[sqlx(flatten)]
    pub audit: Audit,
    pub organization_id: Uuid,
    pub branch_id: Uuid,
    pub account_id: Uuid,
    pub transaction_batch_id: Option<Uuid>,
    pub signature_media_id: Option<Uuid>,
    pub member_profile_id: Option<Uuid>,
    pub employee_user_id: Option<Uuid>,
    pub type_of_payment_type: Option<String>,
    pub description: Option<String>,
    pub reference_number: Option<String>,
    pub entry_date: Option<NaiveDate>,
    pub debit: Decimal,
    pub credit: Decimal,
}

#[derive(Debug, Clone, Serialize)]
pub struct AdjustmentEntryResponse {
    pub id: Uuid,
    #[serde(flatten)]
    pub audit: AuditResponse,
    pub organization_id: Uuid,
    pub branch_id: Uuid,
    pub account_id: Uuid,
    pub transaction_batch_id: Option<Uuid>,
    pub signature_media_id: Option<Uuid>,
    pub member_profile_id: Option<Uuid>,
    pub employee_user_id: Option<Uuid>,
    pub type_of_payment_type: Option<String>,
    pub description: Option<String>,
    pub reference_number: Option<String>,
    pub entry_date: Option<String>,
    pub debit: Decimal,
    pub credit: Decimal,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AdjustmentEntryRequest {
    pub account_id: Uuid,
    pub transaction_batch_id: Option<Uuid>,
    pub signature_media_id: Option<Uuid>,
    pub member_profile_id: Option<Uuid>,
    pub type_of_payment_type: Option<String>,
    pub description: Option<String>,
    pub reference_number: Option<String>,
    pub entry_date: Option<NaiveDate>,
    #[serde(default)]
    pub debit: Amount,
    #[serde(default)]
    pub credit: Amount,
}

impl AdjustmentEntryRequest {
    pub fn into_record(self, scope: BranchScope, user_id: Option<Uuid>) -> AdjustmentEntry {
        AdjustmentEntry {
            id: Uuid::nil(),
            audit: Audit::by(user_id),
            organization_id: scope.organization_id,
            branch_id: scope.branch_id,
            account_id: self.account_id,
            transaction_batch_id: self.transaction_batch_id,
            signature_media_id: self.signature_media_id,
            member_profile_id: self.member_profile_id,
            employee_user_id: user_id,
            type_of_payment_type: self.type_of_payment_type,
            description: self.description,
            reference_number: self.reference_number,
            entry_date: self.entry_date,
            debit: self.debit.value(),
            credit: self.credit.value(),
        }
    }

    pub fn apply(self, entry: &mut AdjustmentEntry, user_id: Option<Uuid>) {
        entry.account_id = self.account_id;
        entry.transaction_batch_id = self.transaction_batch_id;
        entry.signature_media_id = self.signature_media_id;
        entry.member_profile_id = self.member_profile_id;
        entry.type_of_payment_type = self.type_of_payment_type;
        entry.description = self.description;
        entry.reference_number = self.reference_number;
        entry.entry_date = self.entry_date;
        entry.debit = self.debit.value();
        entry.credit = self.credit.value();
        entry.audit.touch(user_id);
    }
}

/// Sums of a set of adjustment entries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AdjustmentEntryTotals {
    pub total_debit: Decimal,
    pub total_credit: Decimal,
    pub balance: Decimal,
    pub is_balanced: bool,
}

impl AdjustmentEntryTotals {
    pub fn of(entries: &[AdjustmentEntry]) -> Self {
        let total_debit: Decimal = entries.iter().map(|e| e.debit).sum();
        let total_credit: Decimal = entries.iter().map(|e| e.credit).sum();
        Self {
            total_debit,
            total_credit,
            balance: total_debit - total_credit,
            is_balanced: total_debit == total_credit,
        }
    }
}

impl Entity for AdjustmentEntry {
    type Response = AdjustmentEntryResponse;

    const TABLE: &'static str = "adjustment_entries";
    const TOPIC: &'static str = "adjustment_entry";
    const COLUMNS: &'static [&'static str] = &[
        "organization_id",
        "branch_id",
        "account_id",
        "transaction_batch_id",
        "signature_media_id",
        "member_profile_id",
        "employee_user_id",
        "type_of_payment_type",
        "description",
        "reference_number",
        "entry_date",
        "debit",
        "credit",
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
        vec![
            self.organization_id.into(),
            self.branch_id.into(),
            self.account_id.into(),
            self.transaction_batch_id.into(),
            self.signature_media_id.into(),
            self.member_profile_id.into(),
            self.employee_user_id.into(),
            self.type_of_payment_type.clone().into(),
            self.description.clone().into(),
            self.reference_number.clone().into(),
            self.entry_date.into(),
            self.debit.into(),
            self.credit.into(),
        ]
    }

    fn to_response(&self) -> AdjustmentEntryResponse {
        AdjustmentEntryResponse {
            id: self.id,
            audit: (&self.audit).into(),
            organization_id: self.organization_id,
            branch_id: self.branch_id,
            account_id: self.account_id,
            transaction_batch_id: self.transaction_batch_id,
            signature_media_id: self.signature_media_id,
            member_profile_id: self.member_profile_id,
            employee_user_id: self.employee_user_id,
            type_of_payment_type: self.type_of_payment_type.clone(),
            description: self.description.clone(),
            reference_number: self.reference_number.clone(),
            entry_date: self.entry_date.as_ref().map(format_date),
            debit: self.debit,
            credit: self.credit,
        }
    }

    fn relations() -> Vec<Relation<Self>> {
        vec![
            Relation::new("account", "accounts", |e| Some(e.account_id)),
            Relation::new("transaction_batch", "transaction_batches", |e| {
                e.transaction_batch_id
            }),
            Relation::new("signature_media", "media", |e| e.signature_media_id),
            Relation::new("employee_user", "users", |e| e.employee_user_id),
        ]
    }
}

impl BranchScoped for AdjustmentEntry {
    fn organization_id(&self) -> Uuid {
        self.organization_id
    }

    fn branch_id(&self) -> Uuid {
        self.branch_id
    }
}

impl Registry<AdjustmentEntry> {
    /// Debit/credit totals of a branch, optionally narrowed to one batch
    pub async fn totals(
        &self,
        organization_id: Uuid,
        branch_id: Uuid,
        transaction_batch_id: Option<Uuid>,
    ) -> Result<AdjustmentEntryTotals, RegistryError> {
        let mut filters = Self::branch_filters(organization_id, branch_id);
        if let Some(batch_id) = transaction_batch_id {
            filters.push(Filter::eq("transaction_batch_id", batch_id));
        }
        let entries = self.find(&filters).await?;
        Ok(AdjustmentEntryTotals::of(&entries))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn entry(debit: Decimal, credit: Decimal) -> AdjustmentEntry {
        AdjustmentEntryRequest {
            account_id: Uuid::new_v4(),
            transaction_batch_id: None,
            signature_media_id: None,
            member_profile_id: None,
            type_of_payment_type: None,
            description: None,
            reference_number: None,
            entry_date: None,
            debit: Amount::new(debit).unwrap(),
            credit: Amount::new(credit).unwrap(),
        }
        .into_record(
            BranchScope {
                organization_id: Uuid::nil(),
                branch_id: Uuid::nil(),
            },
            None,
        )
    }

    #[test]
    fn test_totals_balanced() {
        let totals = AdjustmentEntryTotals::of(&[
            entry(dec!(100), dec!(0)),
            entry(dec!(0), dec!(60)),
            entry(dec!(0), dec!(40)),
        ]);
        assert_eq!(totals.total_debit, dec!(100));
        assert_eq!(totals.total_credit, dec!(100));
        assert_eq!(totals.balance, Decimal::ZERO);
        assert!(totals.is_balanced);
    }

    #[test]
    fn test_totals_unbalanced() {
        let totals = AdjustmentEntryTotals::of(&[entry(dec!(25.50), dec!(0))]);
        assert_eq!(totals.balance, dec!(25.50));
        assert!(!totals.is_balanced);
    }

    #[test]
    fn test_totals_empty() {
        let totals = AdjustmentEntryTotals::of(&[]);
        assert!(totals.is_balanced);
        assert_eq!(totals.total_debit, Decimal::ZERO);
    }
}
