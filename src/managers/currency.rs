//! Currency manager
//!
//! Currencies are global reference data, published under `.code.<code>`
//! rather than an organization or branch.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::broker::TopicScope;
use crate::registry::{Audit, Entity, Filter, Registry, RegistryError, Sort, SqlValue};

use super::AuditResponse;

/// Currency used when a branch has none configured
pub const DEFAULT_CURRENCY_CODE: &str = "PHP";

#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Currency {
    pub id: Uuid,
    #[sqlx(flatten)]
    pub audit: Audit,
    pub name: String,
    pub country: String,
    pub currency_code: String,
    pub symbol: String,
    pub emoji: String,
    pub iso_3166_alpha2: String,
    pub iso_3166_alpha3: String,
    pub iso_3166_numeric: String,
    pub phone_code: String,
    pub domain: String,
    pub locale: String,
    pub timezone: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct CurrencyResponse {
    pub id: Uuid,
    #[serde(flatten)]
    pub audit: AuditResponse,
    pub name: String,
    pub country: String,
    pub currency_code: String,
    pub symbol: String,
    pub emoji: String,
    pub iso_3166_alpha2: String,
    pub iso_3166_alpha3: String,
    pub iso_3166_numeric: String,
    pub phone_code: String,
    pub domain: String,
    pub locale: String,
    pub timezone: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CurrencyRequest {
    pub name: String,
    pub country: String,
    pub currency_code: String,
    pub symbol: String,
    #[serde(default)]
    pub emoji: String,
    pub iso_3166_alpha2: String,
    pub iso_3166_alpha3: String,
    #[serde(default)]
    pub iso_3166_numeric: String,
    #[serde(default)]
    pub phone_code: String,
    #[serde(default)]
    pub domain: String,
    #[serde(default)]
    pub locale: String,
    #[serde(default)]
    pub timezone: String,
}

impl CurrencyRequest {
    pub fn into_record(self, user_id: Option<Uuid>) -> Currency {
        Currency {
            id: Uuid::nil(),
            audit: Audit::by(user_id),
            name: self.name,
            country: self.country,
            currency_code: self.currency_code.to_uppercase(),
            symbol: self.symbol,
            emoji: self.emoji,
            iso_3166_alpha2: self.iso_3166_alpha2.to_uppercase(),
            iso_3166_alpha3: self.iso_3166_alpha3.to_uppercase(),
            iso_3166_numeric: self.iso_3166_numeric,
            phone_code: self.phone_code,
            domain: self.domain,
            locale: self.locale,
            timezone: self.timezone,
        }
    }
}

impl Entity for Currency {
    type Response = CurrencyResponse;

    const TABLE: &'static str = "currencies";
    const TOPIC: &'static str = "currency";
    const COLUMNS: &'static [&'static str] = &[
        "name",
        "country",
        "currency_code",
        "symbol",
        "emoji",
        "iso_3166_alpha2",
        "iso_3166_alpha3",
        "iso_3166_numeric",
        "phone_code",
        "domain",
        "locale",
        "timezone",
    ];

    fn id(&self) -> Uuid {
        self.id
    }

    fn audit(&self) -> &Audit {
        &self.audit
    }

    fn scope(&self) -> TopicScope {
        TopicScope::Code(self.currency_code.clone())
    }

    fn values(&self) -> Vec<SqlValue> {
        vec![
            self.name.clone().into(),
            self.country.clone().into(),
            self.currency_code.clone().into(),
            self.symbol.clone().into(),
            self.emoji.clone().into(),
            self.iso_3166_alpha2.clone().into(),
            self.iso_3166_alpha3.clone().into(),
            self.iso_3166_numeric.clone().into(),
            self.phone_code.clone().into(),
            self.domain.clone().into(),
            self.locale.clone().into(),
            self.timezone.clone().into(),
        ]
    }

    fn to_response(&self) -> CurrencyResponse {
        CurrencyResponse {
            id: self.id,
            audit: (&self.audit).into(),
            name: self.name.clone(),
            country: self.country.clone(),
            currency_code: self.currency_code.clone(),
            symbol: self.symbol.clone(),
            emoji: self.emoji.clone(),
            iso_3166_alpha2: self.iso_3166_alpha2.clone(),
            iso_3166_alpha3: self.iso_3166_alpha3.clone(),
            iso_3166_numeric: self.iso_3166_numeric.clone(),
            phone_code: self.phone_code.clone(),
            domain: self.domain.clone(),
            locale: self.locale.clone(),
            timezone: self.timezone.clone(),
        }
    }
}

impl Registry<Currency> {
    /// Every currency, alphabetically by code
    pub async fn find_all(&self) -> Result<Vec<Currency>, RegistryError> {
        self.find_sorted(&[], &[Sort::asc("currency_code")]).await
    }

    pub async fn find_by_code(&self, code: &str) -> Result<Option<Currency>, RegistryError> {
        self.find_one(&[Filter::eq("currency_code", code.trim().to_uppercase())])
            .await
    }

    pub async fn find_by_alpha2(&self, alpha2: &str) -> Result<Option<Currency>, RegistryError> {
        self.find_one(&[Filter::eq("iso_3166_alpha2", alpha2.trim().to_uppercase())])
            .await
    }

    pub async fn find_by_alpha3(&self, alpha3: &str) -> Result<Option<Currency>, RegistryError> {
        self.find_one(&[Filter::eq("iso_3166_alpha3", alpha3.trim().to_uppercase())])
            .await
    }

    /// The default currency, if it has been seeded
    pub async fn default_currency(&self) -> Result<Option<Currency>, RegistryError> {
        self.find_by_code(DEFAULT_CURRENCY_CODE).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::broker::Action;

    #[test]
    fn test_currency_topics_use_code() {
        let currency = Currency {
            id: Uuid::new_v4(),
            ..CurrencyRequest {
                name: "Philippine Peso".into(),
                country: "Philippines".into(),
                currency_code: "php".into(),
                symbol: "₱".into(),
                emoji: String::new(),
                iso_3166_alpha2: "ph".into(),
                iso_3166_alpha3: "phl".into(),
                iso_3166_numeric: "608".into(),
                phone_code: "+63".into(),
                domain: ".ph".into(),
                locale: "en-PH".into(),
                timezone: "Asia/Manila".into(),
            }
            .into_record(None)
        };

        let topics = currency.topics(Action::Create);
        assert_eq!(topics[0], "currency.create");
        assert_eq!(topics[2], "currency.create.code.PHP");
        assert_eq!(currency.iso_3166_alpha3, "PHL");
    }
}
