//! Transaction batch manager
//!
//! A teller's working batch for the day. A user has at most one open batch
//! per branch; closing it freezes the totals.

use chrono::{DateTime, Duration, TimeZone, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::broker::TopicScope;
use crate::domain::{BranchScope, DomainError};
use crate::registry::{
    format_optional_timestamp, Audit, BranchScoped, Entity, Filter, Registry, RegistryError,
    Relation, SqlValue,
};

use super::{AuditResponse, ManagerError};

#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct TransactionBatch {
    pub id: Uuid,
    #[sqlx(flatten)]
    pub audit: Audit,
    pub organization_id: Uuid,
    pub branch_id: Uuid,
    pub employee_user_id: Option<Uuid>,
    pub currency_id: Option<Uuid>,
    pub batch_name: String,
    pub beginning_balance: Decimal,
    pub deposit_in_bank: Decimal,
    pub cash_count_total: Decimal,
    pub grand_total: Decimal,
    pub petty_cash: Decimal,
    pub total_cash_handled: Decimal,
    pub description: Option<String>,
    pub can_view: bool,
    pub is_closed: bool,
    pub request_view: bool,
    pub ended_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TransactionBatchResponse {
    pub id: Uuid,
    #[serde(flatten)]
    pub audit: AuditResponse,
    pub organization_id: Uuid,
    pub branch_id: Uuid,
    pub employee_user_id: Option<Uuid>,
    pub currency_id: Option<Uuid>,
    pub batch_name: String,
    pub beginning_balance: Decimal,
    pub deposit_in_bank: Decimal,
    pub cash_count_total: Decimal,
    pub grand_total: Decimal,
    pub petty_cash: Decimal,
    pub total_cash_handled: Decimal,
    pub description: Option<String>,
    pub can_view: bool,
    pub is_closed: bool,
    pub request_view: bool,
    pub ended_at: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TransactionBatchRequest {
    #[serde(default)]
    pub batch_name: String,
    pub currency_id: Option<Uuid>,
    #[serde(default)]
    pub beginning_balance: Decimal,
    pub description: Option<String>,
}

impl TransactionBatchRequest {
    /// Open a batch for `employee_user_id`
    pub fn into_record(self, scope: BranchScope, employee_user_id: Uuid) -> TransactionBatch {
        TransactionBatch {
            id: Uuid::nil(),
            audit: Audit::by(Some(employee_user_id)),
            organization_id: scope.organization_id,
            branch_id: scope.branch_id,
            employee_user_id: Some(employee_user_id),
            currency_id: self.currency_id,
            batch_name: self.batch_name,
            beginning_balance: self.beginning_balance,
            deposit_in_bank: Decimal::ZERO,
            cash_count_total: Decimal::ZERO,
            grand_total: self.beginning_balance,
            petty_cash: Decimal::ZERO,
            total_cash_handled: Decimal::ZERO,
            description: self.description,
            can_view: false,
            is_closed: false,
            request_view: false,
            ended_at: None,
        }
    }
}

impl Entity for TransactionBatch {
    type Response = TransactionBatchResponse;

    const TABLE: &'static str = "transaction_batches";
    const TOPIC: &'static str = "transaction_batch";
    const COLUMNS: &'static [&'static str] = &[
        "organization_id",
        "branch_id",
        "employee_user_id",
        "currency_id",
        "batch_name",
        "beginning_balance",
        "deposit_in_bank",
        "cash_count_total",
        "grand_total",
        "petty_cash",
        "total_cash_handled",
        "description",
        "can_view",
        "is_closed",
        "request_view",
        "ended_at",
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
            self.employee_user_id.into(),
            self.currency_id.into(),
            self.batch_name.clone().into(),
            self.beginning_balance.into(),
            self.deposit_in_bank.into(),
            self.cash_count_total.into(),
            self.grand_total.into(),
            self.petty_cash.into(),
            self.total_cash_handled.into(),
            self.description.clone().into(),
            self.can_view.into(),
            self.is_closed.into(),
            self.request_view.into(),
            self.ended_at.into(),
        ]
    }

    fn to_response(&self) -> TransactionBatchResponse {
        TransactionBatchResponse {
            id: self.id,
            audit: (&self.audit).into(),
            organization_id: self.organization_id,
            branch_id: self.branch_id,
            employee_user_id: self.employee_user_id,
            currency_id: self.currency_id,
            batch_name: self.batch_name.clone(),
            beginning_balance: self.beginning_balance,
            deposit_in_bank: self.deposit_in_bank,
            cash_count_total: self.cash_count_total,
            grand_total: self.grand_total,
            petty_cash: self.petty_cash,
            total_cash_handled: self.total_cash_handled,
            description: self.description.clone(),
            can_view: self.can_view,
            is_closed: self.is_closed,
            request_view: self.request_view,
            ended_at: format_optional_timestamp(&self.ended_at),
        }
    }

    fn relations() -> Vec<Relation<Self>> {
        vec![
            Relation::new("employee_user", "users", |b| b.employee_user_id),
            Relation::new("currency", "currencies", |b| b.currency_id),
        ]
    }
}

impl BranchScoped for TransactionBatch {
    fn organization_id(&self) -> Uuid {
        self.organization_id
    }

    fn branch_id(&self) -> Uuid {
        self.branch_id
    }
}

/// Start of the UTC day containing `now`, and the start of the next one
pub(crate) fn day_bounds(now: DateTime<Utc>) -> (DateTime<Utc>, DateTime<Utc>) {
    let start = now
        .date_naive()
        .and_hms_opt(0, 0, 0)
        .map(|naive| Utc.from_utc_datetime(&naive))
        .unwrap_or(now);
    (start, start + Duration::days(1))
}

impl Registry<TransactionBatch> {
    /// The open batch of an employee, if any
    pub async fn current_open(
        &self,
        user_id: Uuid,
        organization_id: Uuid,
        branch_id: Uuid,
    ) -> Result<Option<TransactionBatch>, RegistryError> {
        let mut filters = Self::branch_filters(organization_id, branch_id);
        filters.push(Filter::eq("employee_user_id", user_id));
        filters.push(Filter::eq("is_closed", false));
        self.find_one(&filters).await
    }

    /// Open batches whose owner asked to view totals and has not been allowed yet
    pub async fn view_requests(
        &self,
        organization_id: Uuid,
        branch_id: Uuid,
    ) -> Result<Vec<TransactionBatch>, RegistryError> {
        let mut filters = Self::branch_filters(organization_id, branch_id);
        filters.push(Filter::eq("request_view", true));
        filters.push(Filter::eq("can_view", false));
        filters.push(Filter::eq("is_closed", false));
        self.find(&filters).await
    }

    /// Batches opened today (UTC) that are already closed
    pub async fn closed_today(
        &self,
        organization_id: Uuid,
        branch_id: Uuid,
    ) -> Result<Vec<TransactionBatch>, RegistryError> {
        let (start, end) = day_bounds(Utc::now());
        let mut filters = Self::branch_filters(organization_id, branch_id);
        filters.push(Filter::eq("is_closed", true));
        filters.push(Filter::gte("created_at", start));
        filters.push(Filter::lt("created_at", end));
        self.find(&filters).await
    }

    /// Open a new batch unless the employee already has one
    pub async fn open(
        &self,
        request: TransactionBatchRequest,
        scope: BranchScope,
        user_id: Uuid,
    ) -> Result<TransactionBatch, ManagerError> {
        if let Some(existing) = self
            .current_open(user_id, scope.organization_id, scope.branch_id)
            .await?
        {
            return Err(DomainError::BusinessRuleViolation(format!(
                "user already has open transaction batch {}",
                existing.id
            ))
            .into());
        }

        Ok(self.create(request.into_record(scope, user_id)).await?)
    }

    /// Close an open batch
    pub async fn close(
        &self,
        id: Uuid,
        scope: BranchScope,
        user_id: Option<Uuid>,
    ) -> Result<TransactionBatch, ManagerError> {
        let mut batch = self
            .get_in_branch(id, scope.organization_id, scope.branch_id)
            .await?;
        if batch.is_closed {
            return Err(DomainError::BatchClosed(id).into());
        }

        batch.is_closed = true;
        batch.ended_at = Some(Utc::now());
        batch.audit.touch(user_id);

        let batch = self.update(batch).await?;
        tracing::info!(batch_id = %id, "Transaction batch closed");
        Ok(batch)
    }

    /// Owner asks to see the batch totals
    pub async fn request_view(
        &self,
        id: Uuid,
        scope: BranchScope,
        user_id: Option<Uuid>,
    ) -> Result<TransactionBatch, ManagerError> {
        let mut batch = self
            .get_in_branch(id, scope.organization_id, scope.branch_id)
            .await?;
        if batch.is_closed {
            return Err(DomainError::BatchClosed(id).into());
        }

        batch.request_view = true;
        batch.audit.touch(user_id);
        Ok(self.update(batch).await?)
    }

    /// Grant a pending view request
    pub async fn accept_view(
        &self,
        id: Uuid,
        scope: BranchScope,
        user_id: Option<Uuid>,
    ) -> Result<TransactionBatch, ManagerError> {
        let mut batch = self
            .get_in_branch(id, scope.organization_id, scope.branch_id)
            .await?;
        if !batch.request_view {
            return Err(DomainError::BusinessRuleViolation(
                "batch has no pending view request".to_string(),
            )
            .into());
        }

        batch.can_view = true;
        batch.audit.touch(user_id);
        Ok(self.update(batch).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_day_bounds() {
        let now = Utc.with_ymd_and_hms(2024, 3, 9, 17, 45, 12).unwrap();
        let (start, end) = day_bounds(now);
        assert_eq!(start, Utc.with_ymd_and_hms(2024, 3, 9, 0, 0, 0).unwrap());
        assert_eq!(end, Utc.with_ymd_and_hms(2024, 3, 10, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_new_batch_is_open() {
        let scope = BranchScope {
            organization_id: Uuid::new_v4(),
            branch_id: Uuid::new_v4(),
        };
        let user = Uuid::new_v4();
        let batch = TransactionBatchRequest {
            batch_name: "Morning".into(),
            currency_id: None,
            beginning_balance: dec!(5000),
            description: None,
        }
        .into_record(scope, user);

        assert!(!batch.is_closed);
        assert_eq!(batch.employee_user_id, Some(user));
        assert_eq!(batch.grand_total, dec!(5000));
        assert_eq!(batch.values().len(), TransactionBatch::COLUMNS.len());
    }
}
