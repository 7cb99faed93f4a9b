//! Entity trait
//!
//! Describes how a record type maps onto its table, which topics it publishes
//! and which response shape it is served as.

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::{postgres::PgRow, FromRow};
use uuid::Uuid;

use crate::broker::{topics, Action, TopicScope, Topics};

use super::SqlValue;

/// Audit columns shared by every managed table
#[derive(Debug, Clone, Default, PartialEq, FromRow, Serialize)]
pub struct Audit {
    pub created_at: DateTime<Utc>,
    pub created_by_id: Option<Uuid>,
    pub updated_at: DateTime<Utc>,
    pub updated_by_id: Option<Uuid>,
    pub deleted_at: Option<DateTime<Utc>>,
    pub deleted_by_id: Option<Uuid>,
}

impl Audit {
    /// Audit fields for a record written by `user_id`
    pub fn by(user_id: Option<Uuid>) -> Self {
        Self {
            created_by_id: user_id,
            updated_by_id: user_id,
            ..Default::default()
        }
    }

    /// Mark the record as last touched by `user_id`
    pub fn touch(&mut self, user_id: Option<Uuid>) {
        if user_id.is_some() {
            self.updated_by_id = user_id;
        }
    }

    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }
}

/// Columns the registry writes or filters on for every entity
pub const BASE_COLUMNS: &[&str] = &[
    "id",
    "created_at",
    "created_by_id",
    "updated_at",
    "updated_by_id",
    "deleted_at",
    "deleted_by_id",
];

/// A relation resolved by [`Registry::preload`](super::Registry::preload)
pub struct Relation<E> {
    /// Key the related object is exposed under
    pub name: &'static str,
    /// Table holding the related rows
    pub table: &'static str,
    /// Foreign key on the record
    pub key: fn(&E) -> Option<Uuid>,
}

impl<E> Relation<E> {
    pub const fn new(name: &'static str, table: &'static str, key: fn(&E) -> Option<Uuid>) -> Self {
        Self { name, table, key }
    }
}

impl<E> Clone for Relation<E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E> Copy for Relation<E> {}

impl<E> std::fmt::Debug for Relation<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Relation")
            .field("name", &self.name)
            .field("table", &self.table)
            .finish()
    }
}

/// A persisted record managed by a [`Registry`](super::Registry)
pub trait Entity: for<'r> FromRow<'r, PgRow> + Clone + Send + Sync + Unpin + 'static {
    /// Serialized API shape
    type Response: Serialize + Send + Sync;

    /// Table name
    const TABLE: &'static str;

    /// Topic prefix (`<topic>.<action>...`)
    const TOPIC: &'static str;

    /// Writable columns, in the order returned by [`Entity::values`]
    const COLUMNS: &'static [&'static str];

    fn id(&self) -> Uuid;

    fn audit(&self) -> &Audit;

    /// Scope deciding the scoped topic variants
    fn scope(&self) -> TopicScope;

    /// Values for [`Entity::COLUMNS`]
    fn values(&self) -> Vec<SqlValue>;

    fn to_response(&self) -> Self::Response;

    /// Relations resolved on preload
    fn relations() -> Vec<Relation<Self>> {
        Vec::new()
    }

    /// Topics published for `action` on this record
    fn topics(&self, action: Action) -> Topics {
        topics(Self::TOPIC, action, self.id(), &self.scope())
    }

    /// Whether `column` may appear in a filter or sort
    fn has_column(column: &str) -> bool {
        BASE_COLUMNS.contains(&column) || Self::COLUMNS.contains(&column)
    }
}

/// Entity living inside one organization branch
pub trait BranchScoped: Entity {
    fn organization_id(&self) -> Uuid;

    fn branch_id(&self) -> Uuid;

    /// Branch scope for topic construction
    fn branch_scope(&self) -> TopicScope {
        TopicScope::Branch {
            organization_id: self.organization_id(),
            branch_id: self.branch_id(),
        }
    }
}

/// Format a timestamp the way responses carry it
pub fn format_timestamp(value: &DateTime<Utc>) -> String {
    value.to_rfc3339()
}

/// Format an optional timestamp
pub fn format_optional_timestamp(value: &Option<DateTime<Utc>>) -> Option<String> {
    value.as_ref().map(format_timestamp)
}

/// Format a date as `YYYY-MM-DD`
pub fn format_date(value: &chrono::NaiveDate) -> String {
    value.format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_audit_by_sets_both_authors() {
        let user = Uuid::new_v4();
        let audit = Audit::by(Some(user));
        assert_eq!(audit.created_by_id, Some(user));
        assert_eq!(audit.updated_by_id, Some(user));
        assert!(!audit.is_deleted());
    }

    #[test]
    fn test_touch_keeps_author_when_anonymous() {
        let user = Uuid::new_v4();
        let mut audit = Audit::by(Some(user));
        audit.touch(None);
        assert_eq!(audit.updated_by_id, Some(user));

        let other = Uuid::new_v4();
        audit.touch(Some(other));
        assert_eq!(audit.updated_by_id, Some(other));
        assert_eq!(audit.created_by_id, Some(user));
    }

    #[test]
    fn test_formatting() {
        let ts = Utc.with_ymd_and_hms(2024, 3, 9, 8, 30, 0).unwrap();
        assert_eq!(format_timestamp(&ts), "2024-03-09T08:30:00+00:00");
        assert_eq!(format_optional_timestamp(&None), None);
        assert_eq!(format_date(&ts.date_naive()), "2024-03-09");
    }
}
