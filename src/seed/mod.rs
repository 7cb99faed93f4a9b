//! Seeders
//!
//! Reference data written once globally (currencies) and once per new
//! organization branch (banks, bill and coin denominations).

use std::collections::HashSet;

use sqlx::PgConnection;
use uuid::Uuid;

use crate::domain::DomainError;
use crate::managers::{Bank, BillAndCoins, Currency, Managers, DEFAULT_CURRENCY_CODE};
use crate::registry::{Audit, Filter, RegistryError};

pub mod bank;
pub mod currency;
pub mod denominations;

pub use bank::{banks_for, banks_for_currency, COUNTRY_BANKS, GLOBAL_BANKS};
pub use currency::{CurrencySeed, CURRENCIES};
pub use denominations::{
    denomination_value, denominations_for, denominations_for_currency, DENOMINATIONS,
};

/// Errors raised while seeding
#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("Failed to seed {entity} '{name}': {source}")]
    Record {
        entity: &'static str,
        name: String,
        #[source]
        source: RegistryError,
    },

    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl SeedError {
    fn record<'a>(entity: &'static str, name: &'a str) -> impl FnOnce(RegistryError) -> Self + 'a {
        move |source| Self::Record {
            entity,
            name: name.to_string(),
            source,
        }
    }
}

/// Counts of records written by the organization seeder
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize)]
pub struct SeedSummary {
    pub banks: usize,
    pub bill_and_coins: usize,
}

impl CurrencySeed {
    fn to_record(self) -> Currency {
        Currency {
            id: Uuid::nil(),
            audit: Audit::default(),
            name: self.name.to_string(),
            country: self.country.to_string(),
            currency_code: self.currency_code.to_string(),
            symbol: self.symbol.to_string(),
            emoji: self.emoji.to_string(),
            iso_3166_alpha2: self.iso_3166_alpha2.to_string(),
            iso_3166_alpha3: self.iso_3166_alpha3.to_string(),
            iso_3166_numeric: self.iso_3166_numeric.to_string(),
            phone_code: self.phone_code.to_string(),
            domain: self.domain.to_string(),
            locale: self.locale.to_string(),
            timezone: String::new(),
        }
    }
}

// =============================================================================
// Global
// =============================================================================

/// Insert every currency whose code is not stored yet; returns how many were added
pub async fn global_seeder(managers: &Managers, conn: &mut PgConnection) -> Result<usize, SeedError> {
    let existing: HashSet<String> = managers
        .currencies
        .find_with_tx(&mut *conn, &[], &[])
        .await?
        .into_iter()
        .map(|c| c.currency_code)
        .collect();

    let mut inserted = 0;
    for seed in CURRENCIES {
        if existing.contains(seed.currency_code) {
            continue;
        }
        managers
            .currencies
            .create_with_tx(&mut *conn, seed.to_record())
            .await
            .map_err(SeedError::record("currency", seed.currency_code))?;
        inserted += 1;
    }

    tracing::info!(
        inserted = inserted,
        skipped = CURRENCIES.len() - inserted,
        "Global seeding complete"
    );
    Ok(inserted)
}

// =============================================================================
// Organization
// =============================================================================

/// Seed banks and denominations for a freshly created branch
pub async fn organization_seeder(
    managers: &Managers,
    conn: &mut PgConnection,
    user_id: Uuid,
    organization_id: Uuid,
    branch_id: Uuid,
) -> Result<SeedSummary, SeedError> {
    let branch = managers
        .branches
        .get_by_id_with_tx(&mut *conn, branch_id)
        .await?;

    let branch_currency = match branch.currency_id {
        Some(currency_id) => {
            managers
                .currencies
                .get_by_id_with_tx(&mut *conn, currency_id)
                .await?
        }
        None => managers
            .currencies
            .find_one_with_tx(
                &mut *conn,
                &[Filter::eq("currency_code", DEFAULT_CURRENCY_CODE)],
                &[],
            )
            .await?
            .ok_or_else(|| DomainError::CurrencyNotFound(DEFAULT_CURRENCY_CODE.to_string()))?,
    };

    let mut summary = SeedSummary::default();

    for (name, description) in
        banks_for_currency(&branch_currency.iso_3166_alpha3, &branch_currency.currency_code)
    {
        let bank = Bank {
            id: Uuid::nil(),
            audit: Audit::by(Some(user_id)),
            organization_id,
            branch_id,
            media_id: None,
            name: name.to_string(),
            description: Some(description.to_string()),
        };
        managers
            .banks
            .create_with_tx(&mut *conn, bank)
            .await
            .map_err(SeedError::record("bank", name))?;
        summary.banks += 1;
    }

    let currencies = managers
        .currencies
        .find_with_tx(&mut *conn, &[], &[])
        .await?;
    for currency in &currencies {
        let Some(table) =
            denominations_for_currency(&currency.iso_3166_alpha3, &currency.currency_code)
        else {
            continue;
        };
        for (name, thousandths) in table {
            let record = BillAndCoins {
                id: Uuid::nil(),
                audit: Audit::by(Some(user_id)),
                organization_id,
                branch_id,
                media_id: None,
                currency_id: currency.id,
                name: name.to_string(),
                value: denomination_value(*thousandths),
            };
            managers
                .bill_and_coins
                .create_with_tx(&mut *conn, record)
                .await
                .map_err(SeedError::record("bill_and_coins", name))?;
            summary.bill_and_coins += 1;
        }
    }

    tracing::info!(
        organization_id = %organization_id,
        branch_id = %branch_id,
        currency = %branch_currency.currency_code,
        banks = summary.banks,
        bill_and_coins = summary.bill_and_coins,
        "Organization seeding complete"
    );
    Ok(summary)
}

/// Soft-delete everything the organization seeder wrote for a branch
pub async fn organization_destroyer(
    managers: &Managers,
    conn: &mut PgConnection,
    organization_id: Uuid,
    branch_id: Uuid,
    deleted_by: Option<Uuid>,
) -> Result<SeedSummary, SeedError> {
    let scope = [
        Filter::eq("organization_id", organization_id),
        Filter::eq("branch_id", branch_id),
    ];
    let mut summary = SeedSummary::default();

    let banks = managers.banks.find_with_tx(&mut *conn, &scope, &[]).await?;
    for bank in banks {
        managers
            .banks
            .delete_with_tx(&mut *conn, bank.id, deleted_by)
            .await?;
        summary.banks += 1;
    }

    let denominations = managers
        .bill_and_coins
        .find_with_tx(&mut *conn, &scope, &[])
        .await?;
    for record in denominations {
        managers
            .bill_and_coins
            .delete_with_tx(&mut *conn, record.id, deleted_by)
            .await?;
        summary.bill_and_coins += 1;
    }

    tracing::info!(
        organization_id = %organization_id,
        branch_id = %branch_id,
        banks = summary.banks,
        bill_and_coins = summary.bill_and_coins,
        "Organization seed data removed"
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_seed_to_record() {
        let seed = CURRENCIES
            .iter()
            .find(|c| c.currency_code == "JPY")
            .copied()
            .unwrap();
        let record = seed.to_record();

        assert!(record.id.is_nil());
        assert_eq!(record.iso_3166_alpha3, "JPN");
        assert_eq!(record.locale, "ja_JP");
    }

    #[test]
    fn test_record_error_names_the_row() {
        let err = SeedError::record("bank", "GCash")(RegistryError::NotFoundWhere { entity: "bank" });
        assert!(err.to_string().contains("bank 'GCash'"));
    }
}
