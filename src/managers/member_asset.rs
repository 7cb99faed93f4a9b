//! Member asset manager

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::broker::TopicScope;
use crate::domain::{Amount, BranchScope};
use crate::registry::{
    format_date, Audit, BranchScoped, Entity, Filter, Registry, RegistryError, Relation, SqlValue,
};

use super::AuditResponse;

#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct MemberAsset {
    pub id: Uuid,
    #[sqlx(flatten)]
    pub audit: Audit,
    pub organization_id: Uuid,
    pub branch_id: Uuid,
    pub member_profile_id: Uuid,
    pub media_id: Option<Uuid>,
    pub name: String,
    pub entry_date: Option<NaiveDate>,
    pub description: Option<String>,
    pub cost: Decimal,
}

#[derive(Debug, Clone, Serialize)]
pub struct MemberAssetResponse {
    pub id: Uuid,
    #[serde(flatten)]
    pub audit: AuditResponse,
    pub organization_id: Uuid,
    pub branch_id: Uuid,
    pub member_profile_id: Uuid,
    pub media_id: Option<Uuid>,
    pub name: String,
    pub entry_date: Option<String>,
    pub description: Option<String>,
    pub cost: Decimal,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MemberAssetRequest {
    pub member_profile_id: Uuid,
    pub media_id: Option<Uuid>,
    pub name: String,
    pub entry_date: Option<NaiveDate>,
    pub description: Option<String>,
    #[serde(default)]
    pub cost: Amount,
}

impl MemberAssetRequest {
    pub fn into_record(self, scope: BranchScope, user_id: Option<Uuid>) -> MemberAsset {
        MemberAsset {
            id: Uuid::nil(),
            audit: Audit::by(user_id),
            organization_id: scope.organization_id,
            branch_id: scope.branch_id,
            member_profile_id: self.member_profile_id,
            media_id: self.media_id,
            name: self.name,
            entry_date: self.entry_date,
            description: self.description,
            cost: self.cost.value(),
        }
    }

    pub fn apply(self, asset: &mut MemberAsset, user_id: Option<Uuid>) {
        asset.member_profile_id = self.member_profile_id;
        asset.media_id = self.media_id;
        asset.name = self.name;
        asset.entry_date = self.entry_date;
        asset.description = self.description;
        asset.cost = self.cost.value();
        asset.audit.touch(user_id);
    }
}

impl Entity for MemberAsset {
    type Response = MemberAssetResponse;

    const TABLE: &'static str = "member_assets";
    const TOPIC: &'static str = "member_asset";
    const COLUMNS: &'static [&'static str] = &[
        "organization_id",
        "branch_id",
        "member_profile_id",
        "media_id",
        "name",
        "entry_date",
        "description",
        "cost",
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
            self.member_profile_id.into(),
            self.media_id.into(),
            self.name.clone().into(),
            self.entry_date.into(),
            self.description.clone().into(),
            self.cost.into(),
        ]
    }

    fn to_response(&self) -> MemberAssetResponse {
        MemberAssetResponse {
            id: self.id,
            audit: (&self.audit).into(),
            organization_id: self.organization_id,
            branch_id: self.branch_id,
            member_profile_id: self.member_profile_id,
            media_id: self.media_id,
            name: self.name.clone(),
            entry_date: self.entry_date.as_ref().map(format_date),
            description: self.description.clone(),
            cost: self.cost,
        }
    }

    fn relations() -> Vec<Relation<Self>> {
        vec![Relation::new("media", "media", |a| a.media_id)]
    }
}

impl BranchScoped for MemberAsset {
    fn organization_id(&self) -> Uuid {
        self.organization_id
    }

    fn branch_id(&self) -> Uuid {
        self.branch_id
    }
}

impl Registry<MemberAsset> {
    pub async fn by_member_profile(
        &self,
        organization_id: Uuid,
        branch_id: Uuid,
        member_profile_id: Uuid,
    ) -> Result<Vec<MemberAsset>, RegistryError> {
        let mut filters = Self::branch_filters(organization_id, branch_id);
        filters.push(Filter::eq("member_profile_id", member_profile_id));
        self.find(&filters).await
    }
}
