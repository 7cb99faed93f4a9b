//! Scheduled Jobs
//!
//! Background maintenance: purging soft-deleted rows past retention, pruning
//! read notifications and closing forgotten timesheets.

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::time::Duration;
use tokio::time::interval;

use crate::config::Config;

/// Tables holding soft-deletable manager records, children before parents
pub const MANAGED_TABLES: &[&str] = &[
    "notifications",
    "timesheets",
    "member_assets",
    "cash_check_vouchers",
    "journal_vouchers",
    "adjustment_entries",
    "general_ledgers",
    "transaction_batches",
    "accounts",
    "bill_and_coins",
    "banks",
    "media",
    "users",
    "branches",
    "organizations",
    "currencies",
];

/// Tables referencing each parent table, with the referencing column.
///
/// A parent row is only purged once no row of any dependent table points at
/// it, soft-deleted or not. Footsteps are an append-only log and never block.
pub const DEPENDENTS: &[(&str, &[(&str, &str)])] = &[
    (
        "organizations",
        &[
            ("branches", "organization_id"),
            ("banks", "organization_id"),
            ("bill_and_coins", "organization_id"),
            ("accounts", "organization_id"),
            ("transaction_batches", "organization_id"),
            ("general_ledgers", "organization_id"),
            ("adjustment_entries", "organization_id"),
            ("journal_vouchers", "organization_id"),
            ("cash_check_vouchers", "organization_id"),
            ("member_assets", "organization_id"),
            ("timesheets", "organization_id"),
        ],
    ),
    (
        "branches",
        &[
            ("banks", "branch_id"),
            ("bill_and_coins", "branch_id"),
            ("accounts", "branch_id"),
            ("transaction_batches", "branch_id"),
            ("general_ledgers", "branch_id"),
            ("adjustment_entries", "branch_id"),
            ("journal_vouchers", "branch_id"),
            ("cash_check_vouchers", "branch_id"),
            ("member_assets", "branch_id"),
            ("timesheets", "branch_id"),
        ],
    ),
    (
        "currencies",
        &[
            ("branches", "currency_id"),
            ("bill_and_coins", "currency_id"),
            ("accounts", "currency_id"),
            ("transaction_batches", "currency_id"),
            ("general_ledgers", "currency_id"),
            ("journal_vouchers", "currency_id"),
            ("cash_check_vouchers", "currency_id"),
        ],
    ),
];

/// Hours a timesheet may stay open before it is closed automatically
pub const STALE_TIMESHEET_HOURS: i32 = 24;

// =========================================================================
// Soft Delete Purge
// =========================================================================

/// Hard-delete rows of `table` soft-deleted more than `retention_days` ago
pub async fn purge_soft_deleted(
    pool: &PgPool,
    table: &str,
    retention_days: i32,
) -> Result<u64, JobError> {
    if !MANAGED_TABLES.contains(&table) {
        return Err(JobError::UnknownTable(table.to_string()));
    }

    let sql = format!(
        r#"
        DELETE FROM {table} p
        WHERE p.deleted_at IS NOT NULL
          AND p.deleted_at < NOW() - make_interval(days => $1){guards}
        "#,
        table = table,
        guards = dependent_guards(table)
    );
    let result = sqlx::query(&sql).bind(retention_days).execute(pool).await?;

    let rows_deleted = result.rows_affected();

    if rows_deleted > 0 {
        tracing::info!(
            table = table,
            rows_deleted = rows_deleted,
            "Purged soft-deleted rows"
        );
    }

    Ok(rows_deleted)
}

/// `AND NOT EXISTS` clauses keeping parents that still have dependent rows
fn dependent_guards(table: &str) -> String {
    DEPENDENTS
        .iter()
        .find(|(parent, _)| *parent == table)
        .map(|(_, children)| {
            children
                .iter()
                .map(|(child, column)| {
                    format!(
                        "\n          AND NOT EXISTS (SELECT 1 FROM {} c WHERE c.{} = p.id)",
                        child, column
                    )
                })
                .collect()
        })
        .unwrap_or_default()
}

/// Purge every managed table; a failing table is logged and skipped
pub async fn purge_all_soft_deleted(pool: &PgPool, retention_days: i32) -> PurgeReport {
    let mut report = PurgeReport::default();

    for table in MANAGED_TABLES {
        match purge_soft_deleted(pool, table, retention_days).await {
            Ok(count) => report.rows_deleted += count,
            Err(e) => {
                tracing::error!(table = table, error = %e, "Soft delete purge failed");
                report.errors.push(format!("{}: {}", table, e));
            }
        }
    }

    report
}

/// Result of a purge run across all tables
#[derive(Debug, Clone, Default)]
pub struct PurgeReport {
    pub rows_deleted: u64,
    pub errors: Vec<String>,
}

// =========================================================================
// Notification Pruning
// =========================================================================

/// Delete viewed notifications older than `retention_days`
pub async fn prune_viewed_notifications(pool: &PgPool, retention_days: i32) -> Result<u64, JobError> {
    let result = sqlx::query(
        r#"
        DELETE FROM notifications
        WHERE is_viewed = TRUE
          AND updated_at < NOW() - make_interval(days => $1)
        "#,
    )
    .bind(retention_days)
    .execute(pool)
    .await?;

    let rows_deleted = result.rows_affected();

    if rows_deleted > 0 {
        tracing::info!(rows_deleted = rows_deleted, "Pruned viewed notifications");
    }

    Ok(rows_deleted)
}

// =========================================================================
// Stale Timesheets
// =========================================================================

/// Close timesheets left open longer than [`STALE_TIMESHEET_HOURS`].
///
/// `time_out` is set to the end of the allowed window, not to now.
pub async fn close_stale_timesheets(pool: &PgPool) -> Result<u64, JobError> {
    let result = sqlx::query(
        r#"
        UPDATE timesheets
        SET time_out = time_in + make_interval(hours => $1),
            updated_at = NOW()
        WHERE time_out IS NULL
          AND deleted_at IS NULL
          AND time_in < NOW() - make_interval(hours => $1)
        "#,
    )
    .bind(STALE_TIMESHEET_HOURS)
    .execute(pool)
    .await?;

    let rows_affected = result.rows_affected();

    if rows_affected > 0 {
        tracing::warn!(rows_affected = rows_affected, "Closed stale timesheets");
    }

    Ok(rows_affected)
}

// =========================================================================
// Job Scheduler
// =========================================================================

/// Configuration for job scheduler
#[derive(Debug, Clone)]
pub struct JobSchedulerConfig {
    /// Interval for the soft delete purge (default: 1 hour)
    pub purge_interval: Duration,
    /// Interval for notification pruning (default: 1 hour)
    pub notification_interval: Duration,
    /// Interval for the stale timesheet check (default: 5 minutes)
    pub timesheet_interval: Duration,
    pub soft_delete_retention_days: i32,
    pub notification_retention_days: i32,
}

impl Default for JobSchedulerConfig {
    fn default() -> Self {
        Self {
            purge_interval: Duration::from_secs(3600),
            notification_interval: Duration::from_secs(3600),
            timesheet_interval: Duration::from_secs(300),
            soft_delete_retention_days: 90,
            notification_retention_days: 30,
        }
    }
}

impl From<&Config> for JobSchedulerConfig {
    fn from(config: &Config) -> Self {
        Self {
            soft_delete_retention_days: config.soft_delete_retention_days,
            notification_retention_days: config.notification_retention_days,
            ..Self::default()
        }
    }
}

/// Spawn the scheduler in the background
pub fn run_scheduler(pool: PgPool, config: JobSchedulerConfig) -> tokio::task::JoinHandle<()> {
    JobScheduler::with_config(pool, config).start()
}

/// Job Scheduler - runs periodic maintenance tasks
pub struct JobScheduler {
    pool: PgPool,
    config: JobSchedulerConfig,
}

impl JobScheduler {
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            config: JobSchedulerConfig::default(),
        }
    }

    pub fn with_config(pool: PgPool, config: JobSchedulerConfig) -> Self {
        Self { pool, config }
    }

    /// Start the job scheduler in the background
    /// Returns a handle that can be used to abort the scheduler
    pub fn start(self) -> tokio::task::JoinHandle<()> {
        tokio::spawn(async move {
            self.run().await;
        })
    }

    async fn run(&self) {
        tracing::info!("Job scheduler started");

        let mut purge_interval = interval(self.config.purge_interval);
        let mut notification_interval = interval(self.config.notification_interval);
        let mut timesheet_interval = interval(self.config.timesheet_interval);

        loop {
            tokio::select! {
                _ = purge_interval.tick() => {
                    purge_all_soft_deleted(&self.pool, self.config.soft_delete_retention_days).await;
                }
                _ = notification_interval.tick() => {
                    if let Err(e) = prune_viewed_notifications(&self.pool, self.config.notification_retention_days).await {
                        tracing::error!(error = %e, "Notification pruning failed");
                    }
                }
                _ = timesheet_interval.tick() => {
                    if let Err(e) = close_stale_timesheets(&self.pool).await {
                        tracing::error!(error = %e, "Stale timesheet check failed");
                    }
                }
            }
        }
    }

    /// Run all maintenance jobs once (for manual trigger or testing)
    pub async fn run_all_once(&self) -> MaintenanceReport {
        let mut report = MaintenanceReport::default();

        let purge = purge_all_soft_deleted(&self.pool, self.config.soft_delete_retention_days).await;
        report.soft_deleted_purged = purge.rows_deleted;
        report.errors.extend(purge.errors);

        match prune_viewed_notifications(&self.pool, self.config.notification_retention_days).await {
            Ok(count) => report.notifications_pruned = count,
            Err(e) => report.errors.push(format!("Notification pruning: {}", e)),
        }

        match close_stale_timesheets(&self.pool).await {
            Ok(count) => report.timesheets_closed = count,
            Err(e) => report.errors.push(format!("Stale timesheets: {}", e)),
        }

        report.completed_at = Utc::now();
        report
    }
}

/// Report from running maintenance jobs
#[derive(Debug, Clone, Default)]
pub struct MaintenanceReport {
    pub soft_deleted_purged: u64,
    pub notifications_pruned: u64,
    pub timesheets_closed: u64,
    pub errors: Vec<String>,
    pub completed_at: DateTime<Utc>,
}

/// Job execution errors
#[derive(Debug, thiserror::Error)]
pub enum JobError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Table is not managed: {0}")]
    UnknownTable(String),
}

// =========================================================================
// Tests
// =========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::managers::{
        Account, AdjustmentEntry, Bank, BillAndCoins, Branch, CashCheckVoucher, Currency,
        GeneralLedger, JournalVoucher, Media, MemberAsset, Notification, Organization, Timesheet,
        TransactionBatch, User,
    };
    use crate::registry::Entity;

    #[test]
    fn test_managed_tables_cover_every_entity() {
        let tables = [
            Organization::TABLE,
            Branch::TABLE,
            User::TABLE,
            Media::TABLE,
            Currency::TABLE,
            Bank::TABLE,
            BillAndCoins::TABLE,
            Account::TABLE,
            TransactionBatch::TABLE,
            GeneralLedger::TABLE,
            AdjustmentEntry::TABLE,
            JournalVoucher::TABLE,
            CashCheckVoucher::TABLE,
            MemberAsset::TABLE,
            Timesheet::TABLE,
            Notification::TABLE,
        ];
        assert_eq!(tables.len(), MANAGED_TABLES.len());
        for table in tables {
            assert!(MANAGED_TABLES.contains(&table), "{} is not managed", table);
        }
    }

    #[test]
    fn test_parents_are_purged_after_their_dependents() {
        let position = |t: &str| MANAGED_TABLES.iter().position(|m| *m == t).unwrap();
        for (parent, children) in DEPENDENTS {
            for (child, _) in children.iter() {
                assert!(position(child) < position(parent), "{} before {}", child, parent);
            }
        }
    }

    #[test]
    fn test_dependent_guards() {
        let guards = dependent_guards("branches");
        assert!(guards.contains("NOT EXISTS (SELECT 1 FROM banks c WHERE c.branch_id = p.id)"));
        assert!(!guards.contains("footsteps"));
        assert!(dependent_guards("banks").is_empty());
    }

    #[test]
    fn test_job_scheduler_config_default() {
        let config = JobSchedulerConfig::default();
        assert_eq!(config.purge_interval, Duration::from_secs(3600));
        assert_eq!(config.timesheet_interval, Duration::from_secs(300));
        assert_eq!(config.soft_delete_retention_days, 90);
        assert_eq!(config.notification_retention_days, 30);
    }

    #[test]
    fn test_maintenance_report_default() {
        let report = MaintenanceReport::default();
        assert_eq!(report.soft_deleted_purged, 0);
        assert_eq!(report.errors.len(), 0);
    }

    #[tokio::test]
    async fn test_purge_rejects_unmanaged_table() {
        let pool = sqlx::postgres::PgPoolOptions::new()
            .connect_lazy("postgres://localhost/unused")
            .unwrap();
        let err = purge_soft_deleted(&pool, "pg_user; --", 30).await.unwrap_err();
        assert!(matches!(err, JobError::UnknownTable(_)));
    }
}
