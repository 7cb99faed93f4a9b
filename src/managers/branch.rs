//! Branch manager

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::broker::TopicScope;
use crate::registry::{Audit, Entity, Filter, Registry, RegistryError, Relation, SqlValue};

use super::AuditResponse;

#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Branch {
    pub id: Uuid,
    #[sqlx(flatten)]
    pub audit: Audit,
    pub organization_id: Uuid,
    pub currency_id: Option<Uuid>,
    pub media_id: Option<Uuid>,
    pub name: String,
    pub email: Option<String>,
    pub contact_number: Option<String>,
    pub address: Option<String>,
    pub description: Option<String>,
    pub is_main_branch: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct BranchResponse {
    pub id: Uuid,
    #[serde(flatten)]
    pub audit: AuditResponse,
    pub organization_id: Uuid,
    pub currency_id: Option<Uuid>,
    pub media_id: Option<Uuid>,
    pub name: String,
    pub email: Option<String>,
    pub contact_number: Option<String>,
    pub address: Option<String>,
    pub description: Option<String>,
    pub is_main_branch: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BranchRequest {
    pub currency_id: Option<Uuid>,
    pub media_id: Option<Uuid>,
    pub name: String,
    pub email: Option<String>,
    pub contact_number: Option<String>,
    pub address: Option<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub is_main_branch: bool,
}

impl BranchRequest {
    pub fn into_record(self, organization_id: Uuid, user_id: Option<Uuid>) -> Branch {
        Branch {
            id: Uuid::nil(),
            audit: Audit::by(user_id),
            organization_id,
            currency_id: self.currency_id,
            media_id: self.media_id,
            name: self.name,
            email: self.email,
            contact_number: self.contact_number,
            address: self.address,
            description: self.description,
            is_main_branch: self.is_main_branch,
        }
    }
}

impl Entity for Branch {
    type Response = BranchResponse;

    const TABLE: &'static str = "branches";
    const TOPIC: &'static str = "branch";
    const COLUMNS: &'static [&'static str] = &[
        "organization_id",
        "currency_id",
        "media_id",
        "name",
        "email",
        "contact_number",
        "address",
        "description",
        "is_main_branch",
    ];

    fn id(&self) -> Uuid {
        self.id
    }

    fn audit(&self) -> &Audit {
        &self.audit
    }

    fn scope(&self) -> TopicScope {
        TopicScope::Organization {
            organization_id: self.organization_id,
        }
    }

    fn values(&self) -> Vec<SqlValue> {
        vec![
            self.organization_id.into(),
            self.currency_id.into(),
            self.media_id.into(),
            self.name.clone().into(),
            self.email.clone().into(),
            self.contact_number.clone().into(),
            self.address.clone().into(),
            self.description.clone().into(),
            self.is_main_branch.into(),
        ]
    }

    fn to_response(&self) -> BranchResponse {
        BranchResponse {
            id: self.id,
            audit: (&self.audit).into(),
            organization_id: self.organization_id,
            currency_id: self.currency_id,
            media_id: self.media_id,
            name: self.name.clone(),
            email: self.email.clone(),
            contact_number: self.contact_number.clone(),
            address: self.address.clone(),
            description: self.description.clone(),
            is_main_branch: self.is_main_branch,
        }
    }

    fn relations() -> Vec<Relation<Self>> {
        vec![
            Relation::new("organization", "organizations", |b| Some(b.organization_id)),
            Relation::new("currency", "currencies", |b| b.currency_id),
            Relation::new("media", "media", |b| b.media_id),
        ]
    }
}

impl Registry<Branch> {
    /// Every live branch of an organization
    pub async fn by_organization(&self, organization_id: Uuid) -> Result<Vec<Branch>, RegistryError> {
        self.find(&[Filter::eq("organization_id", organization_id)])
            .await
    }
}
