//! Seeding Tool
//!
//! Run with: cargo run --bin seed -- [--organization <uuid> --branch <uuid> --user <uuid>]
//!
//! Always applies the global currency seed. With all three IDs it also seeds
//! banks and denominations for that branch.

use std::sync::Arc;

use anyhow::Context;
use sqlx::postgres::PgPoolOptions;
use uuid::Uuid;

use coop_backoffice::broker::NoopBroker;
use coop_backoffice::{seed, Managers};

fn arg_uuid(args: &[String], flag: &str) -> anyhow::Result<Option<Uuid>> {
    args.iter()
        .position(|a| a == flag)
        .map(|i| {
            let raw = args
                .get(i + 1)
                .with_context(|| format!("{} needs a value", flag))?;
            Uuid::parse_str(raw).with_context(|| format!("{} is not a UUID: {}", flag, raw))
        })
        .transpose()
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "coop_backoffice=info".into()),
        )
        .init();

    let args: Vec<String> = std::env::args().collect();
    let organization_id = arg_uuid(&args, "--organization")?;
    let branch_id = arg_uuid(&args, "--branch")?;
    let user_id = arg_uuid(&args, "--user")?;

    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

    println!("Connecting to database...");
    let pool = PgPoolOptions::new()
        .max_connections(2)
        .connect(&database_url)
        .await?;

    let managers = Managers::new(pool.clone(), Arc::new(NoopBroker));

    let mut tx = pool.begin().await?;
    let inserted = seed::global_seeder(&managers, &mut *tx).await?;
    println!("Currencies inserted: {}", inserted);

    match (organization_id, branch_id, user_id) {
        (Some(organization_id), Some(branch_id), Some(user_id)) => {
            let summary =
                seed::organization_seeder(&managers, &mut *tx, user_id, organization_id, branch_id)
                    .await?;
            println!("Banks inserted: {}", summary.banks);
            println!("Bill and coins inserted: {}", summary.bill_and_coins);
        }
        (None, None, None) => {}
        _ => anyhow::bail!("--organization, --branch and --user must be given together"),
    }

    tx.commit().await?;
    pool.close().await;
    println!("Seeding complete");

    Ok(())
}
