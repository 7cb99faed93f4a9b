//! Common test utilities

#![allow(dead_code)]

use std::sync::Arc;

use sqlx::postgres::PgPoolOptions;
use sqlx::{Executor, PgPool};
use uuid::Uuid;

use coop_backoffice::broker::{InMemoryBroker, SharedBroker};
use coop_backoffice::managers::{BranchRequest, OrganizationRequest, UserRequest};
use coop_backoffice::{seed, BranchScope, Managers};

const SCHEMA: &str = include_str!("../../migrations/0001_initial_schema.sql");

/// Serializes schema setup and the global seed across concurrently running tests
const SETUP_LOCK: i64 = 7_340_211;

/// Connect, apply the schema and make sure the global currencies exist.
///
/// Tables are not truncated: every test works inside its own organization
/// and branch so tests can run in parallel.
pub async fn setup_test_db() -> PgPool {
    dotenvy::dotenv().ok();
    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set for tests");

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await
        .expect("Failed to connect to DB");

    let mut conn = pool.acquire().await.expect("Failed to acquire connection");
    sqlx::query("SELECT pg_advisory_lock($1)")
        .bind(SETUP_LOCK)
        .execute(&mut *conn)
        .await
        .expect("Failed to take setup lock");

    (&mut *conn)
        .execute(SCHEMA)
        .await
        .expect("Failed to apply schema");

    let managers = Managers::new(pool.clone(), Arc::new(InMemoryBroker::default()));
    seed::global_seeder(&managers, &mut *conn)
        .await
        .expect("Failed to seed currencies");

    sqlx::query("SELECT pg_advisory_unlock($1)")
        .bind(SETUP_LOCK)
        .execute(&mut *conn)
        .await
        .expect("Failed to release setup lock");

    pool
}

/// Managers over `pool` with a broker the test can subscribe to
pub fn managers(pool: &PgPool) -> (Managers, Arc<InMemoryBroker>) {
    let broker = Arc::new(InMemoryBroker::new(256));
    let shared: SharedBroker = broker.clone();
    (Managers::new(pool.clone(), shared), broker)
}

/// Fresh user, organization and branch for one test
#[derive(Debug, Clone, Copy)]
pub struct Fixture {
    pub user_id: Uuid,
    pub organization_id: Uuid,
    pub branch_id: Uuid,
}

impl Fixture {
    pub fn scope(&self) -> BranchScope {
        BranchScope {
            organization_id: self.organization_id,
            branch_id: self.branch_id,
        }
    }
}

pub async fn create_fixture(managers: &Managers) -> Fixture {
    let tag = Uuid::new_v4().simple().to_string();

    let user = managers
        .users
        .create(
            UserRequest {
                email: format!("teller-{}@coop.test", tag),
                username: format!("teller-{}", tag),
                contact_number: None,
                first_name: Some("Test".into()),
                middle_name: None,
                last_name: Some("Teller".into()),
                birthdate: None,
                media_id: None,
            }
            .into_record(None),
        )
        .await
        .expect("Failed to create user");

    let organization = managers
        .organizations
        .create(
            OrganizationRequest {
                name: "Test Cooperative".into(),
                subdomain: format!("coop-{}", tag),
                email: None,
                contact_number: None,
                address: None,
                description: None,
                is_private: false,
                media_id: None,
            }
            .into_record(Some(user.id)),
        )
        .await
        .expect("Failed to create organization");

    let currency = managers
        .currencies
        .default_currency()
        .await
        .expect("Failed to load default currency");

    let branch = managers
        .branches
        .create(
            BranchRequest {
                currency_id: currency.map(|c| c.id),
                media_id: None,
                name: "Main".into(),
                email: None,
                contact_number: None,
                address: None,
                description: None,
                is_main_branch: true,
            }
            .into_record(organization.id, Some(user.id)),
        )
        .await
        .expect("Failed to create branch");

    Fixture {
        user_id: user.id,
        organization_id: organization.id,
        branch_id: branch.id,
    }
}
