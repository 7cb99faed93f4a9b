//! Timesheet manager
//!
//! One open timesheet (no `time_out`) per user and branch; toggling clocks
//! the user in or out.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::broker::TopicScope;
use crate::domain::BranchScope;
use crate::registry::{
    format_optional_timestamp, format_timestamp, Audit, BranchScoped, Entity, Filter, Registry,
    RegistryError, Relation, SqlValue,
};

use super::AuditResponse;

#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Timesheet {
    pub id: Uuid,
    #[sqlx(flatten)]
    pub audit: Audit,
    pub organization_id: Uuid,
    pub branch_id: Uuid,
    pub user_id: Uuid,
    pub media_in_id: Option<Uuid>,
    pub media_out_id: Option<Uuid>,
    pub time_in: DateTime<Utc>,
    pub time_out: Option<DateTime<Utc>>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TimesheetResponse {
    pub id: Uuid,
    #[serde(flatten)]
    pub audit: AuditResponse,
    pub organization_id: Uuid,
    pub branch_id: Uuid,
    pub user_id: Uuid,
    pub media_in_id: Option<Uuid>,
    pub media_out_id: Option<Uuid>,
    pub time_in: String,
    pub time_out: Option<String>,
    pub description: Option<String>,
}

/// Body of a time in / time out request
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TimesheetRequest {
    pub media_id: Option<Uuid>,
    pub description: Option<String>,
}

impl Timesheet {
    pub fn is_open(&self) -> bool {
        self.time_out.is_none()
    }

    /// A fresh timesheet clocked in at `now`
    pub fn clock_in(
        scope: BranchScope,
        user_id: Uuid,
        request: TimesheetRequest,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::nil(),
            audit: Audit::by(Some(user_id)),
            organization_id: scope.organization_id,
            branch_id: scope.branch_id,
            user_id,
            media_in_id: request.media_id,
            media_out_id: None,
            time_in: now,
            time_out: None,
            description: request.description,
        }
    }

    pub fn clock_out(&mut self, request: TimesheetRequest, now: DateTime<Utc>) {
        self.time_out = Some(now);
        self.media_out_id = request.media_id;
        if request.description.is_some() {
            self.description = request.description;
        }
        self.audit.touch(Some(self.user_id));
    }
}

impl Entity for Timesheet {
    type Response = TimesheetResponse;

    const TABLE: &'static str = "timesheets";
    const TOPIC: &'static str = "timesheet";
    const COLUMNS: &'static [&'static str] = &[
        "organization_id",
        "branch_id",
        "user_id",
        "media_in_id",
        "media_out_id",
        "time_in",
        "time_out",
        "description",
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
            self.user_id.into(),
            self.media_in_id.into(),
            self.media_out_id.into(),
            self.time_in.into(),
            self.time_out.into(),
            self.description.clone().into(),
        ]
    }

    fn to_response(&self) -> TimesheetResponse {
        TimesheetResponse {
            id: self.id,
            audit: (&self.audit).into(),
            organization_id: self.organization_id,
            branch_id: self.branch_id,
            user_id: self.user_id,
            media_in_id: self.media_in_id,
            media_out_id: self.media_out_id,
            time_in: format_timestamp(&self.time_in),
            time_out: format_optional_timestamp(&self.time_out),
            description: self.description.clone(),
        }
    }

    fn relations() -> Vec<Relation<Self>> {
        vec![
            Relation::new("user", "users", |t| Some(t.user_id)),
            Relation::new("media_in", "media", |t| t.media_in_id),
            Relation::new("media_out", "media", |t| t.media_out_id),
        ]
    }
}

impl BranchScoped for Timesheet {
    fn organization_id(&self) -> Uuid {
        self.organization_id
    }

    fn branch_id(&self) -> Uuid {
        self.branch_id
    }
}

impl Registry<Timesheet> {
    pub async fn by_user(
        &self,
        user_id: Uuid,
        organization_id: Uuid,
        branch_id: Uuid,
    ) -> Result<Vec<Timesheet>, RegistryError> {
        let mut filters = Self::branch_filters(organization_id, branch_id);
        filters.push(Filter::eq("user_id", user_id));
        self.find(&filters).await
    }

    /// The timesheet a user is currently clocked in on, if any
    pub async fn current_open(
        &self,
        user_id: Uuid,
        organization_id: Uuid,
        branch_id: Uuid,
    ) -> Result<Option<Timesheet>, RegistryError> {
        let mut filters = Self::branch_filters(organization_id, branch_id);
        filters.push(Filter::eq("user_id", user_id));
        filters.push(Filter::is_null("time_out"));
        self.find_one(&filters).await
    }

    /// Clock in when the user has no open timesheet, otherwise clock out
    pub async fn toggle(
        &self,
        scope: BranchScope,
        user_id: Uuid,
        request: TimesheetRequest,
    ) -> Result<Timesheet, RegistryError> {
        let now = Utc::now();
        match self
            .current_open(user_id, scope.organization_id, scope.branch_id)
            .await?
        {
            Some(mut open) => {
                open.clock_out(request, now);
                let timesheet = self.update(open).await?;
                tracing::info!(user_id = %user_id, timesheet_id = %timesheet.id, "Timed out");
                Ok(timesheet)
            }
            None => {
                let timesheet = self
                    .create(Timesheet::clock_in(scope, user_id, request, now))
                    .await?;
                tracing::info!(user_id = %user_id, timesheet_id = %timesheet.id, "Timed in");
                Ok(timesheet)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn scope() -> BranchScope {
        BranchScope {
            organization_id: Uuid::new_v4(),
            branch_id: Uuid::new_v4(),
        }
    }

    #[test]
    fn test_clock_in_then_out() {
        let user = Uuid::new_v4();
        let media_in = Uuid::new_v4();
        let media_out = Uuid::new_v4();
        let start = Utc::now();

        let mut sheet = Timesheet::clock_in(
            scope(),
            user,
            TimesheetRequest {
                media_id: Some(media_in),
                description: None,
            },
            start,
        );
        assert!(sheet.is_open());
        assert_eq!(sheet.media_in_id, Some(media_in));

        sheet.clock_out(
            TimesheetRequest {
                media_id: Some(media_out),
                description: Some("end of shift".into()),
            },
            start + Duration::hours(8),
        );
        assert!(!sheet.is_open());
        assert_eq!(sheet.media_out_id, Some(media_out));
        assert_eq!(sheet.audit.updated_by_id, Some(user));
        assert_eq!(sheet.description.as_deref(), Some("end of shift"));
    }

    #[test]
    fn test_response_formats_times() {
        let sheet = Timesheet::clock_in(scope(), Uuid::new_v4(), TimesheetRequest::default(), Utc::now());
        let response = sheet.to_response();

        assert!(response.time_out.is_none());
        assert!(chrono::DateTime::parse_from_rfc3339(&response.time_in).is_ok());
        assert_eq!(sheet.values().len(), Timesheet::COLUMNS.len());
    }
}
