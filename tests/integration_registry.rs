//! Manager Integration Tests
//!
//! Run against a live Postgres (DATABASE_URL).

use axum::http::StatusCode;
use axum::response::IntoResponse;
use rust_decimal_macros::dec;
use uuid::Uuid;

use coop_backoffice::domain::VoucherStatus;
use coop_backoffice::footstep::{FootstepBuilder, FootstepService};
use coop_backoffice::jobs;
use coop_backoffice::managers::{
    AccountRequest, AdjustmentEntryRequest, BankRequest, JournalVoucherRequest,
    NotificationRequest, OrganizationRequest, TimesheetRequest, TransactionBatchRequest,
    UserRequest,
};
use coop_backoffice::{
    seed, Amount, AppError, DomainError, ManagerError, OperationContext, RegistryError,
};

mod common;

#[tokio::test]
async fn test_bank_lifecycle_publishes_topics() {
    let pool = common::setup_test_db().await;
    let (managers, broker) = common::managers(&pool);
    let fx = common::create_fixture(&managers).await;
    let mut rx = broker.subscribe_topic(format!("bank.create.branch.{}", fx.branch_id));

    // 1. Create
    let bank = managers
        .banks
        .create(
            BankRequest {
                name: "Land Bank".into(),
                description: Some("Government bank".into()),
                media_id: None,
            }
            .into_record(fx.scope(), Some(fx.user_id)),
        )
        .await
        .unwrap();
    assert!(!bank.id.is_nil());
    assert_eq!(bank.audit.created_by_id, Some(fx.user_id));

    let message = rx.recv().await.unwrap();
    assert_eq!(message.payload["name"], "Land Bank");
    assert_eq!(message.payload["id"], bank.id.to_string());

    // 2. Update
    let mut edited = bank.clone();
    BankRequest {
        name: "Land Bank of the Philippines".into(),
        description: None,
        media_id: None,
    }
    .apply(&mut edited, Some(fx.user_id));
    let updated = managers.banks.update(edited).await.unwrap();
    assert_eq!(updated.name, "Land Bank of the Philippines");
    assert!(updated.audit.updated_at >= bank.audit.updated_at);

    // 3. Soft delete hides the record
    managers.banks.delete(bank.id, Some(fx.user_id)).await.unwrap();
    let err = managers.banks.get_by_id(bank.id).await.unwrap_err();
    assert!(err.is_not_found());

    let listed = managers
        .banks
        .current_branch(fx.organization_id, fx.branch_id)
        .await
        .unwrap();
    assert!(listed.iter().all(|b| b.id != bank.id));

    // 4. Deleting twice is a miss
    let err = managers.banks.delete(bank.id, None).await.unwrap_err();
    assert!(matches!(err, RegistryError::NotFound { .. }));
}

#[tokio::test]
async fn test_records_are_invisible_from_other_branches() {
    let pool = common::setup_test_db().await;
    let (managers, _broker) = common::managers(&pool);
    let home = common::create_fixture(&managers).await;
    let other = common::create_fixture(&managers).await;

    let bank = managers
        .banks
        .create(
            BankRequest {
                name: "BDO".into(),
                description: None,
                media_id: None,
            }
            .into_record(home.scope(), Some(home.user_id)),
        )
        .await
        .unwrap();

    let err = managers
        .banks
        .get_in_branch(bank.id, other.organization_id, other.branch_id)
        .await
        .unwrap_err();
    assert!(err.is_not_found());

    let found = managers
        .banks
        .get_in_branch(bank.id, home.organization_id, home.branch_id)
        .await
        .unwrap();
    assert_eq!(found.id, bank.id);
}

#[tokio::test]
async fn test_account_lookup_and_adjustment_totals() {
    let pool = common::setup_test_db().await;
    let (managers, _broker) = common::managers(&pool);
    let fx = common::create_fixture(&managers).await;

    let account = managers
        .accounts
        .create(
            AccountRequest {
                code: " 1001 ".into(),
                name: "Cash on Hand".into(),
                description: None,
                currency_id: None,
                account_type: "Other".into(),
                general_ledger_type: None,
            }
            .into_record(fx.scope(), Some(fx.user_id)),
        )
        .await
        .unwrap();

    let by_code = managers
        .accounts
        .find_by_code(fx.organization_id, fx.branch_id, "1001")
        .await
        .unwrap()
        .expect("account by code");
    assert_eq!(by_code.id, account.id);

    for (debit, credit) in [(dec!(150.00), dec!(0)), (dec!(0), dec!(100.00))] {
        managers
            .adjustment_entries
            .create(
                AdjustmentEntryRequest {
                    account_id: account.id,
                    transaction_batch_id: None,
                    signature_media_id: None,
                    member_profile_id: None,
                    type_of_payment_type: None,
                    description: None,
                    reference_number: None,
                    entry_date: None,
                    debit: Amount::new(debit).unwrap(),
                    credit: Amount::new(credit).unwrap(),
                }
                .into_record(fx.scope(), Some(fx.user_id)),
            )
            .await
            .unwrap();
    }

    let totals = managers
        .adjustment_entries
        .totals(fx.organization_id, fx.branch_id, None)
        .await
        .unwrap();
    assert_eq!(totals.total_debit, dec!(150.00));
    assert_eq!(totals.total_credit, dec!(100.00));
    assert_eq!(totals.balance, dec!(50.00));
    assert!(!totals.is_balanced);
}

#[tokio::test]
async fn test_journal_voucher_transitions() {
    let pool = common::setup_test_db().await;
    let (managers, _broker) = common::managers(&pool);
    let fx = common::create_fixture(&managers).await;
    let currency = managers.currencies.default_currency().await.unwrap().unwrap();
    let user = Some(fx.user_id);

    let voucher = managers
        .journal_vouchers
        .create(
            JournalVoucherRequest {
                currency_id: currency.id,
                transaction_batch_id: None,
                name: "Month-end accrual".into(),
                cash_voucher_number: None,
                date: None,
                description: None,
                reference: None,
                total_debit: Amount::new(dec!(500)).unwrap(),
                total_credit: Amount::new(dec!(500)).unwrap(),
            }
            .into_record(fx.scope(), user),
        )
        .await
        .unwrap();
    assert_eq!(voucher.lifecycle.status(), VoucherStatus::Draft);

    // Release straight from draft is refused
    let err = managers
        .journal_vouchers
        .release(voucher.id, fx.scope(), user)
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        ManagerError::Domain(DomainError::InvalidTransition { .. })
    ));

    let printed = managers
        .journal_vouchers
        .print(voucher.id, fx.scope(), user)
        .await
        .unwrap();
    assert_eq!(printed.lifecycle.print_number, 1);

    managers
        .journal_vouchers
        .approve(voucher.id, fx.scope(), user)
        .await
        .unwrap();
    let released = managers
        .journal_vouchers
        .release(voucher.id, fx.scope(), user)
        .await
        .unwrap();
    assert_eq!(released.lifecycle.status(), VoucherStatus::Released);
    assert_eq!(released.lifecycle.released_by_id, user);

    let today = managers
        .journal_vouchers
        .released_today(fx.organization_id, fx.branch_id)
        .await
        .unwrap();
    assert_eq!(today.len(), 1);

    let drafts = managers
        .journal_vouchers
        .drafts(fx.organization_id, fx.branch_id)
        .await
        .unwrap();
    assert!(drafts.is_empty());

    // Balanced vouchers post once
    let posted = managers
        .journal_vouchers
        .post(voucher.id, fx.scope(), user)
        .await
        .unwrap();
    assert!(posted.posted_at.is_some());
    assert!(managers
        .journal_vouchers
        .post(voucher.id, fx.scope(), user)
        .await
        .is_err());
}

#[tokio::test]
async fn test_timesheet_toggle() {
    let pool = common::setup_test_db().await;
    let (managers, _broker) = common::managers(&pool);
    let fx = common::create_fixture(&managers).await;

    let opened = managers
        .timesheets
        .toggle(fx.scope(), fx.user_id, TimesheetRequest::default())
        .await
        .unwrap();
    assert!(opened.is_open());

    let current = managers
        .timesheets
        .current_open(fx.user_id, fx.organization_id, fx.branch_id)
        .await
        .unwrap();
    assert_eq!(current.map(|t| t.id), Some(opened.id));

    let closed = managers
        .timesheets
        .toggle(
            fx.scope(),
            fx.user_id,
            TimesheetRequest {
                media_id: None,
                description: Some("end of shift".into()),
            },
        )
        .await
        .unwrap();
    assert_eq!(closed.id, opened.id);
    assert!(!closed.is_open());

    let current = managers
        .timesheets
        .current_open(fx.user_id, fx.organization_id, fx.branch_id)
        .await
        .unwrap();
    assert!(current.is_none());
}

#[tokio::test]
async fn test_transaction_batch_rules() {
    let pool = common::setup_test_db().await;
    let (managers, _broker) = common::managers(&pool);
    let fx = common::create_fixture(&managers).await;
    let request = || TransactionBatchRequest {
        batch_name: "Morning".into(),
        currency_id: None,
        beginning_balance: dec!(1000),
        description: None,
    };

    let batch = managers
        .transaction_batches
        .open(request(), fx.scope(), fx.user_id)
        .await
        .unwrap();
    assert_eq!(batch.grand_total, dec!(1000));

    // One open batch per employee
    let err = managers
        .transaction_batches
        .open(request(), fx.scope(), fx.user_id)
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        ManagerError::Domain(DomainError::BusinessRuleViolation(_))
    ));

    // Accepting without a request is refused
    assert!(managers
        .transaction_batches
        .accept_view(batch.id, fx.scope(), Some(fx.user_id))
        .await
        .is_err());

    managers
        .transaction_batches
        .request_view(batch.id, fx.scope(), Some(fx.user_id))
        .await
        .unwrap();
    let pending = managers
        .transaction_batches
        .view_requests(fx.organization_id, fx.branch_id)
        .await
        .unwrap();
    assert_eq!(pending.len(), 1);

    let accepted = managers
        .transaction_batches
        .accept_view(batch.id, fx.scope(), Some(fx.user_id))
        .await
        .unwrap();
    assert!(accepted.can_view);

    let closed = managers
        .transaction_batches
        .close(batch.id, fx.scope(), Some(fx.user_id))
        .await
        .unwrap();
    assert!(closed.is_closed);
    assert!(closed.ended_at.is_some());

    let err = managers
        .transaction_batches
        .close(batch.id, fx.scope(), Some(fx.user_id))
        .await
        .unwrap_err();
    assert!(matches!(err, ManagerError::Domain(DomainError::BatchClosed(_))));

    let closed_today = managers
        .transaction_batches
        .closed_today(fx.organization_id, fx.branch_id)
        .await
        .unwrap();
    assert_eq!(closed_today.len(), 1);
}

#[tokio::test]
async fn test_notifications_mark_all_viewed() {
    let pool = common::setup_test_db().await;
    let (managers, broker) = common::managers(&pool);
    let fx = common::create_fixture(&managers).await;
    let mut rx = broker.subscribe_topic(format!("notification.update.user.{}", fx.user_id));

    for title in ["Loan approved", "Share capital posted"] {
        managers
            .notifications
            .notify(
                NotificationRequest {
                    user_id: fx.user_id,
                    title: title.into(),
                    description: String::new(),
                    notification_type: "info".into(),
                },
                None,
            )
            .await
            .unwrap();
    }
    assert_eq!(managers.notifications.unviewed_count(fx.user_id).await.unwrap(), 2);

    let viewed = managers.notifications.mark_all_viewed(fx.user_id).await.unwrap();
    assert_eq!(viewed.len(), 2);
    assert_eq!(managers.notifications.unviewed_count(fx.user_id).await.unwrap(), 0);

    let message = rx.recv().await.unwrap();
    assert_eq!(message.payload["is_viewed"], true);
}

#[tokio::test]
async fn test_organization_seeder_and_destroyer() {
    let pool = common::setup_test_db().await;
    let (managers, _broker) = common::managers(&pool);
    let fx = common::create_fixture(&managers).await;

    let mut tx = pool.begin().await.unwrap();
    let summary =
        seed::organization_seeder(&managers, &mut *tx, fx.user_id, fx.organization_id, fx.branch_id)
            .await
            .unwrap();
    tx.commit().await.unwrap();
    assert!(summary.banks > 0);
    assert!(summary.bill_and_coins > 0);

    let banks = managers
        .banks
        .current_branch(fx.organization_id, fx.branch_id)
        .await
        .unwrap();
    assert_eq!(banks.len(), summary.banks);

    // Global seeding is idempotent
    let mut tx = pool.begin().await.unwrap();
    let inserted = seed::global_seeder(&managers, &mut *tx).await.unwrap();
    tx.commit().await.unwrap();
    assert_eq!(inserted, 0);

    let mut tx = pool.begin().await.unwrap();
    let removed =
        seed::organization_destroyer(&managers, &mut *tx, fx.organization_id, fx.branch_id, None)
            .await
            .unwrap();
    tx.commit().await.unwrap();
    assert_eq!(removed, summary);

    let banks = managers
        .banks
        .current_branch(fx.organization_id, fx.branch_id)
        .await
        .unwrap();
    assert!(banks.is_empty());
}

#[tokio::test]
async fn test_footstep_chain_stays_valid() {
    let pool = common::setup_test_db().await;
    let (managers, _broker) = common::managers(&pool);
    let fx = common::create_fixture(&managers).await;
    let footsteps = FootstepService::new(pool.clone());
    let context = OperationContext {
        user_id: Some(fx.user_id),
        organization_id: Some(fx.organization_id),
        branch_id: Some(fx.branch_id),
        correlation_id: Some(Uuid::new_v4()),
        client_ip: None,
    };

    let first = footsteps
        .record(FootstepBuilder::new("bank", "create"), &context)
        .await
        .unwrap();
    let second = footsteps
        .record(
            FootstepBuilder::new("bank", "delete").description("cleanup"),
            &context,
        )
        .await
        .unwrap();
    assert!(second.sequence_number > first.sequence_number);

    let mine = footsteps
        .by_branch(fx.organization_id, fx.branch_id, 10)
        .await
        .unwrap();
    assert_eq!(mine.len(), 2);

    let result = footsteps.verify_chain(None).await.unwrap();
    assert!(result.is_valid, "chain broken at {:?}", result.first_invalid_entry);
}

#[tokio::test]
async fn test_maintenance_jobs_run() {
    let pool = common::setup_test_db().await;

    let report = jobs::purge_all_soft_deleted(&pool, 30).await;
    assert!(report.errors.is_empty(), "{:?}", report.errors);

    tokio_test::assert_ok!(jobs::prune_viewed_notifications(&pool, 30).await);
    tokio_test::assert_ok!(jobs::close_stale_timesheets(&pool).await);
}

#[tokio::test]
async fn test_purge_keeps_parents_with_live_children() {
    let pool = common::setup_test_db().await;
    let (managers, _broker) = common::managers(&pool);
    let fx = common::create_fixture(&managers).await;

    let mut tx = pool.begin().await.unwrap();
    let summary =
        seed::organization_seeder(&managers, &mut *tx, fx.user_id, fx.organization_id, fx.branch_id)
            .await
            .unwrap();
    tx.commit().await.unwrap();

    // Only the branch is soft-deleted, well past retention
    managers.branches.delete(fx.branch_id, Some(fx.user_id)).await.unwrap();
    sqlx::query("UPDATE branches SET deleted_at = NOW() - INTERVAL '100 days' WHERE id = $1")
        .bind(fx.branch_id)
        .execute(&pool)
        .await
        .unwrap();

    let report = jobs::purge_all_soft_deleted(&pool, 90).await;
    assert!(report.errors.is_empty(), "{:?}", report.errors);

    let live_banks: i64 = sqlx::query_scalar(
        "SELECT COUNT(*) FROM banks WHERE branch_id = $1 AND deleted_at IS NULL",
    )
    .bind(fx.branch_id)
    .fetch_one(&pool)
    .await
    .unwrap();
    assert_eq!(live_banks as usize, summary.banks);

    let branch_rows: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM branches WHERE id = $1")
        .bind(fx.branch_id)
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(branch_rows, 1);
}

#[tokio::test]
async fn test_purge_removes_childless_parents() {
    let pool = common::setup_test_db().await;
    let (managers, _broker) = common::managers(&pool);
    let fx = common::create_fixture(&managers).await;

    let organization = managers
        .organizations
        .create(
            OrganizationRequest {
                name: "Dissolved Cooperative".into(),
                subdomain: format!("dissolved-{}", Uuid::new_v4().simple()),
                email: None,
                contact_number: None,
                address: None,
                description: None,
                is_private: false,
                media_id: None,
            }
            .into_record(Some(fx.user_id)),
        )
        .await
        .unwrap();
    managers
        .organizations
        .delete(organization.id, Some(fx.user_id))
        .await
        .unwrap();
    sqlx::query(
        "UPDATE organizations SET deleted_at = NOW() - INTERVAL '100 days' WHERE id = $1",
    )
    .bind(organization.id)
    .execute(&pool)
    .await
    .unwrap();

    let purged = jobs::purge_soft_deleted(&pool, "organizations", 90).await.unwrap();
    assert!(purged >= 1);

    let rows: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM organizations WHERE id = $1")
        .bind(organization.id)
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(rows, 0);
}

#[tokio::test]
async fn test_duplicate_email_is_a_conflict() {
    let pool = common::setup_test_db().await;
    let (managers, _broker) = common::managers(&pool);
    let tag = Uuid::new_v4().simple().to_string();

    let request = |username: &str| UserRequest {
        email: format!("cashier-{}@coop.test", tag),
        username: username.to_string(),
        contact_number: None,
        first_name: None,
        middle_name: None,
        last_name: None,
        birthdate: None,
        media_id: None,
    };

    managers
        .users
        .create(request(&format!("cashier-{}", tag)).into_record(None))
        .await
        .unwrap();
    let err = managers
        .users
        .create(request(&format!("cashier-two-{}", tag)).into_record(None))
        .await
        .unwrap_err();
    assert!(err.is_unique_violation(), "{:?}", err);

    let response = AppError::from(err).into_response();
    assert_eq!(response.status(), StatusCode::CONFLICT);
}
