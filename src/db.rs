//! Database module
//!
//! Connection checks and schema verification. Migrations are raw SQL files in
//! `migrations/`.

use sqlx::PgPool;

use crate::jobs::MANAGED_TABLES;

/// Simple connectivity check
pub async fn verify_connection(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Check that every manager table and the footstep log exist
pub async fn check_schema(pool: &PgPool) -> Result<bool, sqlx::Error> {
    let required_tables = MANAGED_TABLES.iter().copied().chain(["footsteps"]);

    for table in required_tables {
        let exists: bool = sqlx::query_scalar(
            r#"
            SELECT EXISTS (
                SELECT 1 FROM information_schema.tables
                WHERE table_schema = 'public' AND table_name = $1
            )
            "#,
        )
        .bind(table)
        .fetch_one(pool)
        .await?;

        if !exists {
            tracing::error!("Required table '{}' does not exist", table);
            return Ok(false);
        }
    }

    tracing::info!(tables = MANAGED_TABLES.len() + 1, "Schema verified");
    Ok(true)
}
