//! Bill and coins manager
//!
//! Cash denominations counted when a teller closes a batch.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::broker::TopicScope;
use crate::domain::{Amount, BranchScope};
use crate::registry::{
    Audit, BranchScoped, Entity, Filter, Registry, RegistryError, Relation, Sort, SqlValue,
};

use super::AuditResponse;

#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct BillAndCoins {
    pub id: Uuid,
    #[sqlx(flatten)]
    pub audit: Audit,
    pub organization_id: Uuid,
    pub branch_id: Uuid,
    pub media_id: Option<Uuid>,
    pub currency_id: Uuid,
    pub name: String,
    pub value: Decimal,
}

#[derive(Debug, Clone, Serialize)]
pub struct BillAndCoinsResponse {
    pub id: Uuid,
    #[serde(flatten)]
    pub audit: AuditResponse,
    pub organization_id: Uuid,
    pub branch_id: Uuid,
    pub media_id: Option<Uuid>,
    pub currency_id: Uuid,
    pub name: String,
    pub value: Decimal,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BillAndCoinsRequest {
    pub name: String,
    pub value: Amount,
    pub currency_id: Uuid,
    pub media_id: Option<Uuid>,
}

impl BillAndCoinsRequest {
    pub fn into_record(self, scope: BranchScope, user_id: Option<Uuid>) -> BillAndCoins {
        BillAndCoins {
            id: Uuid::nil(),
            audit: Audit::by(user_id),
            organization_id: scope.organization_id,
            branch_id: scope.branch_id,
            media_id: self.media_id,
            currency_id: self.currency_id,
            name: self.name,
            value: self.value.value(),
        }
    }

    pub fn apply(self, record: &mut BillAndCoins, user_id: Option<Uuid>) {
        record.name = self.name;
        record.value = self.value.value();
        record.currency_id = self.currency_id;
        record.media_id = self.media_id;
        record.audit.touch(user_id);
    }
}

impl Entity for BillAndCoins {
    type Response = BillAndCoinsResponse;

    const TABLE: &'static str = "bill_and_coins";
    const TOPIC: &'static str = "bill_and_coins";
    const COLUMNS: &'static [&'static str] = &[
        "organization_id",
        "branch_id",
        "media_id",
        "currency_id",
        "name",
        "value",
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
            self.media_id.into(),
            self.currency_id.into(),
            self.name.clone().into(),
            self.value.into(),
        ]
    }

    fn to_response(&self) -> BillAndCoinsResponse {
        BillAndCoinsResponse {
            id: self.id,
            audit: (&self.audit).into(),
            organization_id: self.organization_id,
            branch_id: self.branch_id,
            media_id: self.media_id,
            currency_id: self.currency_id,
            name: self.name.clone(),
            value: self.value,
        }
    }

    fn relations() -> Vec<Relation<Self>> {
        vec![
            Relation::new("media", "media", |b| b.media_id),
            Relation::new("currency", "currencies", |b| Some(b.currency_id)),
        ]
    }
}

impl BranchScoped for BillAndCoins {
    fn organization_id(&self) -> Uuid {
        self.organization_id
    }

    fn branch_id(&self) -> Uuid {
        self.branch_id
    }
}

impl Registry<BillAndCoins> {
    /// Denominations of one currency in a branch, largest first
    pub async fn by_currency(
        &self,
        organization_id: Uuid,
        branch_id: Uuid,
        currency_id: Uuid,
    ) -> Result<Vec<BillAndCoins>, RegistryError> {
        let mut filters = Self::branch_filters(organization_id, branch_id);
        filters.push(Filter::eq("currency_id", currency_id));
        self.find_sorted(&filters, &[Sort::desc("value")]).await
    }
}
