//! General ledger manager
//!
//! Every posting carries the running balance of its account (and member,
//! for member sub-ledgers) at the time it was written.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgConnection};
use uuid::Uuid;

use crate::broker::TopicScope;
use crate::domain::{reference_number, Amount, BranchScope};
use crate::registry::{
    format_date, Audit, BranchScoped, Entity, Filter, Registry, RegistryError, Relation, Sort,
    SqlValue,
};

use super::account::{Account, GeneralLedgerType};
use super::AuditResponse;

#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct GeneralLedger {
    pub id: Uuid,
    #[sqlx(flatten)]
    pub audit: Audit,
    pub organization_id: Uuid,
    pub branch_id: Uuid,
    pub account_id: Uuid,
    pub transaction_batch_id: Option<Uuid>,
    pub member_profile_id: Option<Uuid>,
    pub employee_user_id: Option<Uuid>,
    pub currency_id: Option<Uuid>,
    pub transaction_reference_number: String,
    pub reference_number: Option<String>,
    pub entry_date: Option<NaiveDate>,
    pub source: String,
    pub description: Option<String>,
    pub debit: Decimal,
    pub credit: Decimal,
    pub balance: Decimal,
    pub print_number: i32,
}

#[derive(Debug, Clone, Serialize)]
pub struct GeneralLedgerResponse {
    pub id: Uuid,
    #[serde(flatten)]
    pub audit: AuditResponse,
    pub organization_id: Uuid,
    pub branch_id: Uuid,
    pub account_id: Uuid,
    pub transaction_batch_id: Option<Uuid>,
    pub member_profile_id: Option<Uuid>,
    pub employee_user_id: Option<Uuid>,
    pub currency_id: Option<Uuid>,
    pub transaction_reference_number: String,
    pub reference_number: Option<String>,
    pub entry_date: Option<String>,
    pub source: String,
    pub description: Option<String>,
    pub debit: Decimal,
    pub credit: Decimal,
    pub balance: Decimal,
    pub print_number: i32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeneralLedgerRequest {
    pub account_id: Uuid,
    pub transaction_batch_id: Option<Uuid>,
    pub member_profile_id: Option<Uuid>,
    pub currency_id: Option<Uuid>,
    pub reference_number: Option<String>,
    pub entry_date: Option<NaiveDate>,
    #[serde(default = "default_source")]
    pub source: String,
    pub description: Option<String>,
    #[serde(default)]
    pub debit: Amount,
    #[serde(default)]
    pub credit: Amount,
}

fn default_source() -> String {
    "journal".to_string()
}

impl GeneralLedgerRequest {
    /// Entry with a zero balance; the balance is filled in on posting
    pub fn into_record(self, scope: BranchScope, user_id: Option<Uuid>) -> GeneralLedger {
        let today = chrono::Utc::now().date_naive();
        GeneralLedger {
            id: Uuid::nil(),
            audit: Audit::by(user_id),
            organization_id: scope.organization_id,
            branch_id: scope.branch_id,
            account_id: self.account_id,
            transaction_batch_id: self.transaction_batch_id,
            member_profile_id: self.member_profile_id,
            employee_user_id: user_id,
            currency_id: self.currency_id,
            transaction_reference_number: reference_number("GL", today),
            reference_number: self.reference_number,
            entry_date: self.entry_date.or(Some(today)),
            source: self.source,
            description: self.description,
            debit: self.debit.value(),
            credit: self.credit.value(),
            balance: Decimal::ZERO,
            print_number: 0,
        }
    }
}

/// Signed effect of a posting on an account balance.
///
/// Debit-normal types (and accounts without a known type) grow with debits;
/// liabilities, equity and revenue grow with credits.
pub fn balance_change(
    ledger_type: Option<GeneralLedgerType>,
    debit: Decimal,
    credit: Decimal,
) -> Decimal {
    match ledger_type {
        Some(t) if !t.is_debit_normal() => credit - debit,
        _ => debit - credit,
    }
}

impl Entity for GeneralLedger {
    type Response = GeneralLedgerResponse;

    const TABLE: &'static str = "general_ledgers";
    const TOPIC: &'static str = "general_ledger";
    const COLUMNS: &'static [&'static str] = &[
        "organization_id",
        "branch_id",
        "account_id",
        "transaction_batch_id",
        "member_profile_id",
        "employee_user_id",
        "currency_id",
        "transaction_reference_number",
        "reference_number",
        "entry_date",
        "source",
        "description",
        "debit",
        "credit",
        "balance",
        "print_number",
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
            self.member_profile_id.into(),
            self.employee_user_id.into(),
            self.currency_id.into(),
            self.transaction_reference_number.clone().into(),
            self.reference_number.clone().into(),
            self.entry_date.into(),
            self.source.clone().into(),
            self.description.clone().into(),
            self.debit.into(),
            self.credit.into(),
            self.balance.into(),
            self.print_number.into(),
        ]
    }

    fn to_response(&self) -> GeneralLedgerResponse {
        GeneralLedgerResponse {
            id: self.id,
            audit: (&self.audit).into(),
            organization_id: self.organization_id,
            branch_id: self.branch_id,
            account_id: self.account_id,
            transaction_batch_id: self.transaction_batch_id,
            member_profile_id: self.member_profile_id,
            employee_user_id: self.employee_user_id,
            currency_id: self.currency_id,
            transaction_reference_number: self.transaction_reference_number.clone(),
            reference_number: self.reference_number.clone(),
            entry_date: self.entry_date.as_ref().map(format_date),
            source: self.source.clone(),
            description: self.description.clone(),
            debit: self.debit,
            credit: self.credit,
            balance: self.balance,
            print_number: self.print_number,
        }
    }

    fn relations() -> Vec<Relation<Self>> {
        vec![
            Relation::new("account", "accounts", |g| Some(g.account_id)),
            Relation::new("transaction_batch", "transaction_batches", |g| {
                g.transaction_batch_id
            }),
            Relation::new("employee_user", "users", |g| g.employee_user_id),
            Relation::new("currency", "currencies", |g| g.currency_id),
        ]
    }
}

impl BranchScoped for GeneralLedger {
    fn organization_id(&self) -> Uuid {
        self.organization_id
    }

    fn branch_id(&self) -> Uuid {
        self.branch_id
    }
}

impl Registry<GeneralLedger> {
    /// Post an entry, computing its running balance.
    ///
    /// The latest entry of the same account (and member, when the account
    /// keeps a member sub-ledger) is row-locked for the rest of the
    /// transaction, so run this inside one.
    pub async fn create_entry(
        &self,
        conn: &mut PgConnection,
        mut entry: GeneralLedger,
        account: Option<&Account>,
    ) -> Result<GeneralLedger, RegistryError> {
        let mut filters = Self::branch_filters(entry.organization_id, entry.branch_id);
        filters.push(Filter::eq("account_id", entry.account_id));
        if let (Some(account), Some(member_profile_id)) = (account, entry.member_profile_id) {
            if account.has_member_ledger() {
                filters.push(Filter::eq("member_profile_id", member_profile_id));
            }
        }

        let previous = self
            .find_one_with_lock(&mut *conn, &filters, &[Sort::desc("created_at")])
            .await?;
        let previous_balance = previous.map(|p| p.balance).unwrap_or(Decimal::ZERO);

        let change = balance_change(
            account.and_then(Account::ledger_type),
            entry.debit,
            entry.credit,
        );
        entry.balance = previous_balance + change;

        let created = self.create_with_tx(&mut *conn, entry).await?;
        tracing::info!(
            entry_id = %created.id,
            account_id = %created.account_id,
            balance = %created.balance,
            "General ledger entry posted"
        );
        Ok(created)
    }

    /// Entries of one member on one account, newest first
    pub async fn member_account_entries(
        &self,
        organization_id: Uuid,
        branch_id: Uuid,
        member_profile_id: Uuid,
        account_id: Uuid,
    ) -> Result<Vec<GeneralLedger>, RegistryError> {
        let mut filters = Self::branch_filters(organization_id, branch_id);
        filters.push(Filter::eq("member_profile_id", member_profile_id));
        filters.push(Filter::eq("account_id", account_id));
        self.find_sorted(&filters, &[Sort::desc("created_at")]).await
    }

    pub async fn by_transaction_batch(
        &self,
        organization_id: Uuid,
        branch_id: Uuid,
        transaction_batch_id: Uuid,
    ) -> Result<Vec<GeneralLedger>, RegistryError> {
        let mut filters = Self::branch_filters(organization_id, branch_id);
        filters.push(Filter::eq("transaction_batch_id", transaction_batch_id));
        self.find_sorted(&filters, &[Sort::asc("created_at")]).await
    }

    /// Highest print number used in a branch, 0 when nothing was printed
    pub async fn print_max_number(
        &self,
        organization_id: Uuid,
        branch_id: Uuid,
    ) -> Result<i64, RegistryError> {
        self.max_int("print_number", &Self::branch_filters(organization_id, branch_id))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_debit_normal_types() {
        assert_eq!(
            balance_change(Some(GeneralLedgerType::Assets), dec!(100), dec!(30)),
            dec!(70)
        );
        assert_eq!(
            balance_change(Some(GeneralLedgerType::Expenses), dec!(0), dec!(20)),
            dec!(-20)
        );
    }

    #[test]
    fn test_credit_normal_types() {
        for t in [
            GeneralLedgerType::Liabilities,
            GeneralLedgerType::Equity,
            GeneralLedgerType::Revenue,
        ] {
            assert_eq!(balance_change(Some(t), dec!(10), dec!(250)), dec!(240));
        }
    }

    #[test]
    fn test_unknown_type_is_debit_normal() {
        assert_eq!(balance_change(None, dec!(5), dec!(2)), dec!(3));
    }

    #[test]
    fn test_request_defaults() {
        let scope = BranchScope {
            organization_id: Uuid::new_v4(),
            branch_id: Uuid::new_v4(),
        };
        let request: GeneralLedgerRequest = serde_json::from_value(serde_json::json!({
            "account_id": Uuid::new_v4(),
            "debit": "150.00"
        }))
        .unwrap();
        let entry = request.into_record(scope, None);

        assert_eq!(entry.source, "journal");
        assert_eq!(entry.debit, dec!(150));
        assert_eq!(entry.credit, Decimal::ZERO);
        assert!(entry.transaction_reference_number.starts_with("GL-"));
        assert!(entry.entry_date.is_some());
    }
}
