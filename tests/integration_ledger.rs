//! Ledger and Lookup Integration Tests
//!
//! Run against a live Postgres (DATABASE_URL).

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use uuid::Uuid;

use coop_backoffice::managers::{
    Account, AccountRequest, BankRequest, GeneralLedger, GeneralLedgerRequest, GeneralLedgerType,
    OrganizationRequest, UserRequest,
};
use coop_backoffice::{Amount, Managers, Registry, RegistryError};

mod common;

async fn deposits_account(managers: &Managers, fx: &common::Fixture) -> Account {
    managers
        .accounts
        .create(
            AccountRequest {
                code: format!("2100-{}", Uuid::new_v4().simple()),
                name: "Deposits".into(),
                description: None,
                currency_id: None,
                account_type: "Savings".into(),
                general_ledger_type: Some(GeneralLedgerType::Liabilities),
            }
            .into_record(fx.scope(), Some(fx.user_id)),
        )
        .await
        .unwrap()
}

fn posting(
    fx: &common::Fixture,
    account: &Account,
    member_profile_id: Uuid,
    debit: Decimal,
    credit: Decimal,
) -> GeneralLedger {
    GeneralLedgerRequest {
        account_id: account.id,
        transaction_batch_id: None,
        member_profile_id: Some(member_profile_id),
        currency_id: None,
        reference_number: None,
        entry_date: None,
        source: "deposit".into(),
        description: None,
        debit: Amount::new(debit).unwrap(),
        credit: Amount::new(credit).unwrap(),
    }
    .into_record(fx.scope(), Some(fx.user_id))
}

#[tokio::test]
async fn test_running_balance_per_member_on_liability_account() {
    let pool = common::setup_test_db().await;
    let (managers, _broker) = common::managers(&pool);
    let fx = common::create_fixture(&managers).await;
    let account = deposits_account(&managers, &fx).await;
    let member = Uuid::new_v4();
    let other_member = Uuid::new_v4();

    let steps = [
        (member, dec!(0), dec!(100.00)),
        (other_member, dec!(0), dec!(999.00)),
        (member, dec!(30.00), dec!(0)),
        (member, dec!(0), dec!(5.50)),
    ];

    let mut mine = Vec::new();
    for (member_profile_id, debit, credit) in steps {
        let mut tx = pool.begin().await.unwrap();
        let entry = managers
            .general_ledgers
            .create_entry(
                &mut *tx,
                posting(&fx, &account, member_profile_id, debit, credit),
                Some(&account),
            )
            .await
            .unwrap();
        tx.commit().await.unwrap();
        if member_profile_id == member {
            mine.push(entry.balance);
        }
    }

    // Credits grow a liability, and the other member's deposit is not mixed in
    assert_eq!(mine, vec![dec!(100.00), dec!(70.00), dec!(75.50)]);

    let entries = managers
        .general_ledgers
        .member_account_entries(fx.organization_id, fx.branch_id, member, account.id)
        .await
        .unwrap();
    let balances: Vec<Decimal> = entries.iter().map(|e| e.balance).collect();
    assert_eq!(balances, vec![dec!(75.50), dec!(70.00), dec!(100.00)]);

    let others = managers
        .general_ledgers
        .member_account_entries(fx.organization_id, fx.branch_id, other_member, account.id)
        .await
        .unwrap();
    assert_eq!(others.len(), 1);
    assert_eq!(others[0].balance, dec!(999.00));
}

#[tokio::test]
async fn test_preload_resolves_relations() {
    let pool = common::setup_test_db().await;
    let (managers, _broker) = common::managers(&pool);
    let fx = common::create_fixture(&managers).await;
    let account = deposits_account(&managers, &fx).await;

    let mut tx = pool.begin().await.unwrap();
    let entry = managers
        .general_ledgers
        .create_entry(
            &mut *tx,
            posting(&fx, &account, Uuid::new_v4(), dec!(0), dec!(50)),
            Some(&account),
        )
        .await
        .unwrap();
    tx.commit().await.unwrap();

    let preloaded = managers.general_ledgers.preload(&[entry]).await.unwrap();
    assert_eq!(preloaded.len(), 1);
    assert_eq!(preloaded[0]["account"]["name"], "Deposits");
    assert_eq!(preloaded[0]["employee_user"]["id"], fx.user_id.to_string());
    assert!(preloaded[0]["transaction_batch"].is_null());
}

#[tokio::test]
async fn test_print_max_number_and_max_int() {
    let pool = common::setup_test_db().await;
    let (managers, _broker) = common::managers(&pool);
    let fx = common::create_fixture(&managers).await;
    let account = deposits_account(&managers, &fx).await;
    let ledgers: &Registry<GeneralLedger> = &managers.general_ledgers;

    assert_eq!(
        ledgers
            .print_max_number(fx.organization_id, fx.branch_id)
            .await
            .unwrap(),
        0
    );

    let mut printed = posting(&fx, &account, Uuid::new_v4(), dec!(0), dec!(10));
    printed.print_number = 3;
    let mut reprinted = posting(&fx, &account, Uuid::new_v4(), dec!(0), dec!(20));
    reprinted.print_number = 7;

    let mut tx = pool.begin().await.unwrap();
    ledgers
        .create_many_with_tx(&mut *tx, vec![printed, reprinted])
        .await
        .unwrap();
    tx.commit().await.unwrap();

    assert_eq!(
        ledgers
            .print_max_number(fx.organization_id, fx.branch_id)
            .await
            .unwrap(),
        7
    );

    let filters = Registry::<GeneralLedger>::branch_filters(fx.organization_id, fx.branch_id);
    assert_eq!(ledgers.max_int("print_number", &filters).await.unwrap(), 7);

    let err = ledgers.max_int("password", &filters).await.unwrap_err();
    assert!(matches!(err, RegistryError::UnknownColumn { .. }));
}

#[tokio::test]
async fn test_create_many_with_tx_keeps_order() {
    let pool = common::setup_test_db().await;
    let (managers, _broker) = common::managers(&pool);
    let fx = common::create_fixture(&managers).await;

    let records = ["Security Bank", "RCBC"]
        .into_iter()
        .map(|name| {
            BankRequest {
                name: name.into(),
                description: None,
                media_id: None,
            }
            .into_record(fx.scope(), Some(fx.user_id))
        })
        .collect();

    let mut tx = pool.begin().await.unwrap();
    let created = managers
        .banks
        .create_many_with_tx(&mut *tx, records)
        .await
        .unwrap();
    tx.commit().await.unwrap();

    assert_eq!(created.len(), 2);
    assert_eq!(created[0].name, "Security Bank");
    assert_eq!(created[1].name, "RCBC");
    assert!(created.iter().all(|b| !b.id.is_nil()));

    let listed = managers
        .banks
        .current_branch(fx.organization_id, fx.branch_id)
        .await
        .unwrap();
    assert_eq!(listed.len(), 2);
}

#[tokio::test]
async fn test_create_many_with_tx_rolls_back_together() {
    let pool = common::setup_test_db().await;
    let (managers, _broker) = common::managers(&pool);
    let fx = common::create_fixture(&managers).await;

    let records = vec![BankRequest {
        name: "UnionBank".into(),
        description: None,
        media_id: None,
    }
    .into_record(fx.scope(), Some(fx.user_id))];

    let mut tx = pool.begin().await.unwrap();
    managers
        .banks
        .create_many_with_tx(&mut *tx, records)
        .await
        .unwrap();
    tx.rollback().await.unwrap();

    let listed = managers
        .banks
        .current_branch(fx.organization_id, fx.branch_id)
        .await
        .unwrap();
    assert!(listed.is_empty());
}

#[tokio::test]
async fn test_find_user_by_identifier() {
    let pool = common::setup_test_db().await;
    let (managers, _broker) = common::managers(&pool);
    let tag = Uuid::new_v4().simple().to_string();
    let phone = format!("+63{}", &Uuid::new_v4().as_u128().to_string()[..10]);

    let user = managers
        .users
        .create(
            UserRequest {
                email: format!("Bookkeeper-{}@Coop.Test", tag),
                username: format!("bookkeeper-{}", tag),
                contact_number: Some(phone.clone()),
                first_name: Some("Lito".into()),
                middle_name: None,
                last_name: Some("Garcia".into()),
                birthdate: None,
                media_id: None,
            }
            .into_record(None),
        )
        .await
        .unwrap();

    let by_email = managers
        .users
        .find_by_identifier(&format!("bookkeeper-{}@coop.test", tag))
        .await
        .unwrap();
    assert_eq!(by_email.map(|u| u.id), Some(user.id));

    let by_username = managers
        .users
        .find_by_identifier(&format!("bookkeeper-{}", tag))
        .await
        .unwrap();
    assert_eq!(by_username.map(|u| u.id), Some(user.id));

    let by_phone = managers.users.find_by_identifier(&phone).await.unwrap();
    assert_eq!(by_phone.map(|u| u.id), Some(user.id));

    let missing = managers
        .users
        .find_by_identifier(&format!("nobody-{}", tag))
        .await
        .unwrap();
    assert!(missing.is_none());
}

#[tokio::test]
async fn test_find_organization_by_subdomain() {
    let pool = common::setup_test_db().await;
    let (managers, _broker) = common::managers(&pool);
    let subdomain = format!("Kapatiran-{}", Uuid::new_v4().simple());

    let organization = managers
        .organizations
        .create(
            OrganizationRequest {
                name: "Kapatiran Cooperative".into(),
                subdomain: subdomain.clone(),
                email: None,
                contact_number: None,
                address: None,
                description: None,
                is_private: false,
                media_id: None,
            }
            .into_record(None),
        )
        .await
        .unwrap();

    let found = managers
        .organizations
        .find_by_subdomain(&subdomain.to_uppercase())
        .await
        .unwrap();
    assert_eq!(found.map(|o| o.id), Some(organization.id));

    managers
        .organizations
        .delete(organization.id, None)
        .await
        .unwrap();
    let gone = managers
        .organizations
        .find_by_subdomain(&subdomain)
        .await
        .unwrap();
    assert!(gone.is_none());
}
