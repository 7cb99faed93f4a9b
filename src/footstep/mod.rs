//! Footstep Log
//!
//! Records who did what, in which module and branch, as a tamper-evident
//! hash chain. Each row hashes its own content together with the hash of the
//! row before it.

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::{FromRow, PgConnection, PgPool};
use uuid::Uuid;

use crate::domain::OperationContext;

/// Hash the first footstep links to
pub const GENESIS_HASH: &str = "0000000000000000000000000000000000000000000000000000000000000000";

/// Stored footstep
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Footstep {
    pub id: Uuid,
    pub sequence_number: i64,
    pub user_id: Option<Uuid>,
    pub organization_id: Option<Uuid>,
    pub branch_id: Option<Uuid>,
    pub correlation_id: Option<Uuid>,
    pub module: String,
    pub activity: String,
    pub description: Option<String>,
    pub resource_id: Option<Uuid>,
    pub before_state: Option<serde_json::Value>,
    pub after_state: Option<serde_json::Value>,
    pub client_ip: Option<String>,
    pub previous_hash: String,
    pub current_hash: String,
    pub created_at: DateTime<Utc>,
}

/// Builder for a footstep
#[derive(Debug, Clone)]
pub struct FootstepBuilder {
    module: String,
    activity: String,
    description: Option<String>,
    resource_id: Option<Uuid>,
    before_state: Option<serde_json::Value>,
    after_state: Option<serde_json::Value>,
}

impl FootstepBuilder {
    /// `module` is the entity area (e.g. `bank`), `activity` what happened
    pub fn new(module: &str, activity: &str) -> Self {
        Self {
            module: module.to_string(),
            activity: activity.to_string(),
            description: None,
            resource_id: None,
            before_state: None,
            after_state: None,
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn resource_id(mut self, resource_id: Uuid) -> Self {
        self.resource_id = Some(resource_id);
        self
    }

    pub fn before_state<T: Serialize>(mut self, state: &T) -> Self {
        self.before_state = serde_json::to_value(state).ok();
        self
    }

    pub fn after_state<T: Serialize>(mut self, state: &T) -> Self {
        self.after_state = serde_json::to_value(state).ok();
        self
    }
}

/// Result of walking the hash chain
#[derive(Debug, Clone, Serialize)]
pub struct ChainVerificationResult {
    pub is_valid: bool,
    pub entries_checked: u64,
    pub first_invalid_entry: Option<Uuid>,
    pub expected_hash: Option<String>,
    pub actual_hash: Option<String>,
}

impl ChainVerificationResult {
    fn valid(entries_checked: u64) -> Self {
        Self {
            is_valid: true,
            entries_checked,
            first_invalid_entry: None,
            expected_hash: None,
            actual_hash: None,
        }
    }

    fn broken(entries_checked: u64, id: Uuid, expected: String, actual: String) -> Self {
        Self {
            is_valid: false,
            entries_checked,
            first_invalid_entry: Some(id),
            expected_hash: Some(expected),
            actual_hash: Some(actual),
        }
    }
}

/// Footstep errors
#[derive(Debug, thiserror::Error)]
pub enum FootstepError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Footstep service
#[derive(Debug, Clone)]
pub struct FootstepService {
    pool: PgPool,
}

const SELECT_FOOTSTEPS: &str = r#"
    SELECT id, sequence_number, user_id, organization_id, branch_id, correlation_id,
           module, activity, description, resource_id, before_state, after_state,
           client_ip, previous_hash, current_hash, created_at
    FROM footsteps
"#;

impl FootstepService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // =========================================================================
    // Write
    // =========================================================================

    /// Append a footstep in its own transaction
    pub async fn record(
        &self,
        builder: FootstepBuilder,
        context: &OperationContext,
    ) -> Result<Footstep, FootstepError> {
        let mut tx = self.pool.begin().await?;
        let footstep = self.record_with_tx(&mut tx, builder, context).await?;
        tx.commit().await?;
        Ok(footstep)
    }

    /// Append a footstep on an existing transaction.
    ///
    /// Writers are serialized with a transaction-scoped advisory lock so the
    /// chain never forks.
    pub async fn record_with_tx(
        &self,
        conn: &mut PgConnection,
        builder: FootstepBuilder,
        context: &OperationContext,
    ) -> Result<Footstep, FootstepError> {
        sqlx::query("SELECT pg_advisory_xact_lock(hashtext('footsteps'))")
            .execute(&mut *conn)
            .await?;

        let last: Option<(i64, String)> = sqlx::query_as(
            r#"
            SELECT sequence_number, current_hash
            FROM footsteps
            ORDER BY sequence_number DESC
            LIMIT 1
            "#,
        )
        .fetch_optional(&mut *conn)
        .await?;

        let (sequence_number, previous_hash) = match last {
            Some((seq, hash)) => (seq + 1, hash),
            None => (1, GENESIS_HASH.to_string()),
        };

        let id = Uuid::new_v4();
        let current_hash = chain_hash(
            id,
            sequence_number,
            &builder.module,
            &builder.activity,
            context.user_id,
            builder.before_state.as_ref(),
            builder.after_state.as_ref(),
            &previous_hash,
        );

        let footstep: Footstep = sqlx::query_as(
            r#"
            INSERT INTO footsteps (
                id, sequence_number, user_id, organization_id, branch_id, correlation_id,
                module, activity, description, resource_id, before_state, after_state,
                client_ip, previous_hash, current_hash
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15)
            RETURNING id, sequence_number, user_id, organization_id, branch_id, correlation_id,
                      module, activity, description, resource_id, before_state, after_state,
                      client_ip, previous_hash, current_hash, created_at
            "#,
        )
        .bind(id)
        .bind(sequence_number)
        .bind(context.user_id)
        .bind(context.organization_id)
        .bind(context.branch_id)
        .bind(context.correlation_id)
        .bind(&builder.module)
        .bind(&builder.activity)
        .bind(&builder.description)
        .bind(builder.resource_id)
        .bind(&builder.before_state)
        .bind(&builder.after_state)
        .bind(context.client_ip.map(|ip| ip.to_string()))
        .bind(&previous_hash)
        .bind(&current_hash)
        .fetch_one(&mut *conn)
        .await?;

        tracing::debug!(
            footstep_id = %footstep.id,
            module = %footstep.module,
            activity = %footstep.activity,
            "Footstep recorded"
        );

        Ok(footstep)
    }

    // =========================================================================
    // Verification
    // =========================================================================

    /// Walk the first `limit` footsteps (default 1000) and recompute every hash
    pub async fn verify_chain(
        &self,
        limit: Option<i64>,
    ) -> Result<ChainVerificationResult, FootstepError> {
        let sql = format!("{} ORDER BY sequence_number ASC LIMIT $1", SELECT_FOOTSTEPS);
        let entries: Vec<Footstep> = sqlx::query_as(&sql)
            .bind(limit.unwrap_or(1000))
            .fetch_all(&self.pool)
            .await?;

        Ok(verify_entries(&entries))
    }

    // =========================================================================
    // Reads
    // =========================================================================

    pub async fn recent(&self, limit: i64) -> Result<Vec<Footstep>, FootstepError> {
        let sql = format!("{} ORDER BY sequence_number DESC LIMIT $1", SELECT_FOOTSTEPS);
        Ok(sqlx::query_as(&sql)
            .bind(limit)
            .fetch_all(&self.pool)
            .await?)
    }

    pub async fn by_user(&self, user_id: Uuid, limit: i64) -> Result<Vec<Footstep>, FootstepError> {
        let sql = format!(
            "{} WHERE user_id = $1 ORDER BY sequence_number DESC LIMIT $2",
            SELECT_FOOTSTEPS
        );
        Ok(sqlx::query_as(&sql)
            .bind(user_id)
            .bind(limit)
            .fetch_all(&self.pool)
            .await?)
    }

    pub async fn by_branch(
        &self,
        organization_id: Uuid,
        branch_id: Uuid,
        limit: i64,
    ) -> Result<Vec<Footstep>, FootstepError> {
        let sql = format!(
            "{} WHERE organization_id = $1 AND branch_id = $2 ORDER BY sequence_number DESC LIMIT $3",
            SELECT_FOOTSTEPS
        );
        Ok(sqlx::query_as(&sql)
            .bind(organization_id)
            .bind(branch_id)
            .bind(limit)
            .fetch_all(&self.pool)
            .await?)
    }
}

/// Check linkage and content hashes of entries ordered by sequence number
fn verify_entries(entries: &[Footstep]) -> ChainVerificationResult {
    let mut previous_hash = GENESIS_HASH.to_string();

    for (checked, entry) in entries.iter().enumerate() {
        let checked = checked as u64 + 1;

        if entry.previous_hash != previous_hash {
            return ChainVerificationResult::broken(
                checked,
                entry.id,
                previous_hash,
                entry.previous_hash.clone(),
            );
        }

        let calculated = chain_hash(
            entry.id,
            entry.sequence_number,
            &entry.module,
            &entry.activity,
            entry.user_id,
            entry.before_state.as_ref(),
            entry.after_state.as_ref(),
            &entry.previous_hash,
        );
        if calculated != entry.current_hash {
            return ChainVerificationResult::broken(
                checked,
                entry.id,
                calculated,
                entry.current_hash.clone(),
            );
        }

        previous_hash = entry.current_hash.clone();
    }

    ChainVerificationResult::valid(entries.len() as u64)
}

#[allow(clippy::too_many_arguments)]
fn chain_hash(
    id: Uuid,
    sequence_number: i64,
    module: &str,
    activity: &str,
    user_id: Option<Uuid>,
    before_state: Option<&serde_json::Value>,
    after_state: Option<&serde_json::Value>,
    previous_hash: &str,
) -> String {
    let input = format!(
        "{}{}{}{}{}{}{}{}",
        id,
        sequence_number,
        module,
        activity,
        user_id.map(|u| u.to_string()).unwrap_or_default(),
        before_state.map(|v| v.to_string()).unwrap_or_default(),
        after_state.map(|v| v.to_string()).unwrap_or_default(),
        previous_hash
    );
    sha256_hex(&input)
}

/// Calculate SHA-256 hash and return as hex string
fn sha256_hex(input: &str) -> String {
    use sha2::{Digest, Sha256};
    let mut hasher = Sha256::new();
    hasher.update(input.as_bytes());
    hex::encode(hasher.finalize())
}

// =========================================================================
// Tests
// =========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn entry(seq: i64, previous_hash: &str, after: serde_json::Value) -> Footstep {
        let id = Uuid::new_v4();
        let user = Some(Uuid::nil());
        let current_hash = chain_hash(id, seq, "bank", "create", user, None, Some(&after), previous_hash);
        Footstep {
            id,
            sequence_number: seq,
            user_id: user,
            organization_id: None,
            branch_id: None,
            correlation_id: None,
            module: "bank".into(),
            activity: "create".into(),
            description: None,
            resource_id: None,
            before_state: None,
            after_state: Some(after),
            client_ip: None,
            previous_hash: previous_hash.to_string(),
            current_hash,
            created_at: Utc::now(),
        }
    }

    fn chain(len: i64) -> Vec<Footstep> {
        let mut out: Vec<Footstep> = Vec::new();
        for seq in 1..=len {
            let prev = out
                .last()
                .map(|e| e.current_hash.clone())
                .unwrap_or_else(|| GENESIS_HASH.to_string());
            out.push(entry(seq, &prev, json!({ "name": format!("Bank {}", seq) })));
        }
        out
    }

    #[test]
    fn test_builder() {
        let id = Uuid::new_v4();
        let builder = FootstepBuilder::new("bank", "update")
            .resource_id(id)
            .description("renamed")
            .after_state(&json!({ "name": "BDO" }));

        assert_eq!(builder.module, "bank");
        assert_eq!(builder.resource_id, Some(id));
        assert!(builder.before_state.is_none());
        assert!(builder.after_state.is_some());
    }

    #[test]
    fn test_sha256_hex() {
        let hash = sha256_hex("test input");
        assert_eq!(hash.len(), 64);
    }

    #[test]
    fn test_intact_chain_verifies() {
        let result = verify_entries(&chain(4));
        assert!(result.is_valid);
        assert_eq!(result.entries_checked, 4);
    }

    #[test]
    fn test_tampered_content_is_detected() {
        let mut entries = chain(3);
        entries[1].after_state = Some(json!({ "name": "Forged" }));

        let result = verify_entries(&entries);
        assert!(!result.is_valid);
        assert_eq!(result.first_invalid_entry, Some(entries[1].id));
        assert_eq!(result.entries_checked, 2);
    }

    #[test]
    fn test_broken_link_is_detected() {
        let mut entries = chain(3);
        entries.remove(1);

        let result = verify_entries(&entries);
        assert!(!result.is_valid);
        assert_eq!(result.first_invalid_entry, Some(entries[1].id));
    }

    #[test]
    fn test_empty_chain_is_valid() {
        assert!(verify_entries(&[]).is_valid);
    }
}
