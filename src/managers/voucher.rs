//! Voucher lifecycle shared by journal and cash/check vouchers

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

use crate::domain::{BranchScope, DomainError, VoucherStatus};
use crate::registry::{
    format_optional_timestamp, Audit, BranchScoped, Filter, Registry, RegistryError, SqlValue,
};

use super::transaction_batch::day_bounds;
use super::ManagerError;

/// Lifecycle columns, flattened into each voucher table
#[derive(Debug, Clone, Default, PartialEq, FromRow)]
pub struct VoucherLifecycle {
    pub status: String,
    pub printed_date: Option<DateTime<Utc>>,
    pub printed_by_id: Option<Uuid>,
    pub print_number: i32,
    pub approved_date: Option<DateTime<Utc>>,
    pub approved_by_id: Option<Uuid>,
    pub released_date: Option<DateTime<Utc>>,
    pub released_by_id: Option<Uuid>,
}

/// Column names matching [`VoucherLifecycle::values`]
pub const LIFECYCLE_COLUMNS: [&str; 8] = [
    "status",
    "printed_date",
    "printed_by_id",
    "print_number",
    "approved_date",
    "approved_by_id",
    "released_date",
    "released_by_id",
];

impl VoucherLifecycle {
    pub fn draft() -> Self {
        Self {
            status: VoucherStatus::Draft.to_string(),
            ..Default::default()
        }
    }

    pub fn status(&self) -> VoucherStatus {
        VoucherStatus::from_dates(self.printed_date, self.approved_date, self.released_date)
    }

    pub fn values(&self) -> Vec<SqlValue> {
        vec![
            self.status.clone().into(),
            self.printed_date.into(),
            self.printed_by_id.into(),
            self.print_number.into(),
            self.approved_date.into(),
            self.approved_by_id.into(),
            self.released_date.into(),
            self.released_by_id.into(),
        ]
    }

    /// Move to `to`, stamping the date and actor of the step
    pub fn advance(
        &mut self,
        entity: &'static str,
        to: VoucherStatus,
        user_id: Option<Uuid>,
        now: DateTime<Utc>,
    ) -> Result<(), DomainError> {
        let from = self.status();
        if !from.can_transition(to) {
            return Err(DomainError::InvalidTransition { entity, from, to });
        }

        match to {
            VoucherStatus::Printed => {
                self.printed_date = Some(now);
                self.printed_by_id = user_id;
                self.print_number += 1;
            }
            VoucherStatus::Approved => {
                self.approved_date = Some(now);
                self.approved_by_id = user_id;
            }
            VoucherStatus::Released => {
                self.released_date = Some(now);
                self.released_by_id = user_id;
            }
            VoucherStatus::Draft => {}
        }
        self.status = to.to_string();

        Ok(())
    }

    /// Refuse edits once the voucher is past printing
    pub fn ensure_editable(&self, entity: &'static str, id: Uuid) -> Result<(), DomainError> {
        let status = self.status();
        if status.is_editable() {
            Ok(())
        } else {
            Err(DomainError::Locked { entity, id, status })
        }
    }

    pub fn to_response(&self) -> VoucherLifecycleResponse {
        VoucherLifecycleResponse {
            status: self.status(),
            printed_date: format_optional_timestamp(&self.printed_date),
            printed_by_id: self.printed_by_id,
            print_number: self.print_number,
            approved_date: format_optional_timestamp(&self.approved_date),
            approved_by_id: self.approved_by_id,
            released_date: format_optional_timestamp(&self.released_date),
            released_by_id: self.released_by_id,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct VoucherLifecycleResponse {
    pub status: VoucherStatus,
    pub printed_date: Option<String>,
    pub printed_by_id: Option<Uuid>,
    pub print_number: i32,
    pub approved_date: Option<String>,
    pub approved_by_id: Option<Uuid>,
    pub released_date: Option<String>,
    pub released_by_id: Option<Uuid>,
}

/// A branch-scoped record with a voucher lifecycle
pub trait Voucher: BranchScoped {
    fn lifecycle(&self) -> &VoucherLifecycle;

    fn lifecycle_mut(&mut self) -> &mut VoucherLifecycle;

    fn audit_mut(&mut self) -> &mut Audit;
}

/// Filters selecting vouchers currently in `status`
pub fn status_filters(status: VoucherStatus) -> Vec<Filter> {
    match status {
        VoucherStatus::Draft => vec![
            Filter::is_null("printed_date"),
            Filter::is_null("approved_date"),
            Filter::is_null("released_date"),
        ],
        VoucherStatus::Printed => vec![
            Filter::is_not_null("printed_date"),
            Filter::is_null("approved_date"),
            Filter::is_null("released_date"),
        ],
        VoucherStatus::Approved => vec![
            Filter::is_not_null("approved_date"),
            Filter::is_null("released_date"),
        ],
        VoucherStatus::Released => vec![Filter::is_not_null("released_date")],
    }
}

impl<E: Voucher> Registry<E> {
    /// Vouchers of a branch in one lifecycle status
    pub async fn by_status(
        &self,
        organization_id: Uuid,
        branch_id: Uuid,
        status: VoucherStatus,
    ) -> Result<Vec<E>, RegistryError> {
        let mut filters = Self::branch_filters(organization_id, branch_id);
        filters.extend(status_filters(status));
        self.find(&filters).await
    }

    pub async fn drafts(&self, organization_id: Uuid, branch_id: Uuid) -> Result<Vec<E>, RegistryError> {
        self.by_status(organization_id, branch_id, VoucherStatus::Draft)
            .await
    }

    pub async fn printed(&self, organization_id: Uuid, branch_id: Uuid) -> Result<Vec<E>, RegistryError> {
        self.by_status(organization_id, branch_id, VoucherStatus::Printed)
            .await
    }

    pub async fn approved(&self, organization_id: Uuid, branch_id: Uuid) -> Result<Vec<E>, RegistryError> {
        self.by_status(organization_id, branch_id, VoucherStatus::Approved)
            .await
    }

    pub async fn released(&self, organization_id: Uuid, branch_id: Uuid) -> Result<Vec<E>, RegistryError> {
        self.by_status(organization_id, branch_id, VoucherStatus::Released)
            .await
    }

    /// Vouchers released today (UTC)
    pub async fn released_today(
        &self,
        organization_id: Uuid,
        branch_id: Uuid,
    ) -> Result<Vec<E>, RegistryError> {
        let (start, end) = day_bounds(Utc::now());
        let mut filters = Self::branch_filters(organization_id, branch_id);
        filters.push(Filter::gte("released_date", start));
        filters.push(Filter::lt("released_date", end));
        self.find(&filters).await
    }

    /// Advance a voucher of the branch to `to`
    pub async fn transition(
        &self,
        id: Uuid,
        scope: BranchScope,
        to: VoucherStatus,
        user_id: Option<Uuid>,
    ) -> Result<E, ManagerError> {
        let mut voucher = self
            .get_in_branch(id, scope.organization_id, scope.branch_id)
            .await?;
        let from = voucher.lifecycle().status();

        voucher
            .lifecycle_mut()
            .advance(E::TOPIC, to, user_id, Utc::now())?;
        voucher.audit_mut().touch(user_id);

        let voucher = self.update(voucher).await?;
        tracing::info!(
            entity = E::TOPIC,
            voucher_id = %id,
            from = %from,
            to = %to,
            "Voucher status changed"
        );
        Ok(voucher)
    }

    pub async fn print(&self, id: Uuid, scope: BranchScope, user_id: Option<Uuid>) -> Result<E, ManagerError> {
        self.transition(id, scope, VoucherStatus::Printed, user_id)
            .await
    }

    pub async fn approve(&self, id: Uuid, scope: BranchScope, user_id: Option<Uuid>) -> Result<E, ManagerError> {
        self.transition(id, scope, VoucherStatus::Approved, user_id)
            .await
    }

    pub async fn release(&self, id: Uuid, scope: BranchScope, user_id: Option<Uuid>) -> Result<E, ManagerError> {
        self.transition(id, scope, VoucherStatus::Released, user_id)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_lifecycle() {
        let user = Some(Uuid::new_v4());
        let now = Utc::now();
        let mut lifecycle = VoucherLifecycle::draft();
        assert_eq!(lifecycle.status(), VoucherStatus::Draft);

        lifecycle.advance("journal_voucher", VoucherStatus::Printed, user, now).unwrap();
        lifecycle.advance("journal_voucher", VoucherStatus::Printed, user, now).unwrap();
        assert_eq!(lifecycle.print_number, 2);

        lifecycle.advance("journal_voucher", VoucherStatus::Approved, user, now).unwrap();
        lifecycle.advance("journal_voucher", VoucherStatus::Released, user, now).unwrap();

        assert_eq!(lifecycle.status(), VoucherStatus::Released);
        assert_eq!(lifecycle.status, "released");
        assert_eq!(lifecycle.released_by_id, user);
    }

    #[test]
    fn test_skipping_a_step_fails() {
        let mut lifecycle = VoucherLifecycle::draft();
        let err = lifecycle
            .advance("cash_check_voucher", VoucherStatus::Approved, None, Utc::now())
            .unwrap_err();

        assert_eq!(
            err,
            DomainError::InvalidTransition {
                entity: "cash_check_voucher",
                from: VoucherStatus::Draft,
                to: VoucherStatus::Approved,
            }
        );
        assert!(lifecycle.approved_date.is_none());
        assert_eq!(lifecycle.print_number, 0);
    }

    #[test]
    fn test_status_filters_shape() {
        assert_eq!(status_filters(VoucherStatus::Draft).len(), 3);
        assert_eq!(
            status_filters(VoucherStatus::Released),
            vec![Filter::is_not_null("released_date")]
        );
    }
}
