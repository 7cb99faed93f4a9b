//! Organization manager

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::broker::TopicScope;
use crate::registry::{Audit, Entity, Filter, Registry, RegistryError, Relation, SqlValue};

use super::AuditResponse;

#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Organization {
    pub id: Uuid,
    #[sqlx(flatten)]
    pub audit: Audit,
    pub name: String,
    pub subdomain: String,
    pub email: Option<String>,
    pub contact_number: Option<String>,
    pub address: Option<String>,
    pub description: Option<String>,
    pub is_private: bool,
    pub media_id: Option<Uuid>,
}

#[derive(Debug, Clone, Serialize)]
pub struct OrganizationResponse {
    pub id: Uuid,
    #[serde(flatten)]
    pub audit: AuditResponse,
    pub name: String,
    pub subdomain: String,
    pub email: Option<String>,
    pub contact_number: Option<String>,
    pub address: Option<String>,
    pub description: Option<String>,
    pub is_private: bool,
    pub media_id: Option<Uuid>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OrganizationRequest {
    pub name: String,
    pub subdomain: String,
    pub email: Option<String>,
    pub contact_number: Option<String>,
    pub address: Option<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub is_private: bool,
    pub media_id: Option<Uuid>,
}

impl OrganizationRequest {
    pub fn into_record(self, user_id: Option<Uuid>) -> Organization {
        Organization {
            id: Uuid::nil(),
            audit: Audit::by(user_id),
            name: self.name,
            subdomain: self.subdomain.to_lowercase(),
            email: self.email,
            contact_number: self.contact_number,
            address: self.address,
            description: self.description,
            is_private: self.is_private,
            media_id: self.media_id,
        }
    }
}

impl Entity for Organization {
    type Response = OrganizationResponse;

    const TABLE: &'static str = "organizations";
    const TOPIC: &'static str = "organization";
    const COLUMNS: &'static [&'static str] = &[
        "name",
        "subdomain",
        "email",
        "contact_number",
        "address",
        "description",
        "is_private",
        "media_id",
    ];

    fn id(&self) -> Uuid {
        self.id
    }

    fn audit(&self) -> &Audit {
        &self.audit
    }

    fn scope(&self) -> TopicScope {
        TopicScope::Global
    }

    fn values(&self) -> Vec<SqlValue> {
        vec![
            self.name.clone().into(),
            self.subdomain.clone().into(),
            self.email.clone().into(),
            self.contact_number.clone().into(),
            self.address.clone().into(),
            self.description.clone().into(),
            self.is_private.into(),
            self.media_id.into(),
        ]
    }

    fn to_response(&self) -> OrganizationResponse {
        OrganizationResponse {
            id: self.id,
            audit: (&self.audit).into(),
            name: self.name.clone(),
            subdomain: self.subdomain.clone(),
            email: self.email.clone(),
            contact_number: self.contact_number.clone(),
            address: self.address.clone(),
            description: self.description.clone(),
            is_private: self.is_private,
            media_id: self.media_id,
        }
    }

    fn relations() -> Vec<Relation<Self>> {
        vec![Relation::new("media", "media", |o| o.media_id)]
    }
}

impl Registry<Organization> {
    pub async fn find_by_subdomain(
        &self,
        subdomain: &str,
    ) -> Result<Option<Organization>, RegistryError> {
        self.find_one(&[Filter::eq("subdomain", subdomain.to_lowercase())])
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::broker::Action;

    #[test]
    fn test_organization_topics_are_global() {
        let record = OrganizationRequest {
            name: "Lands Horizon".into(),
            subdomain: "Horizon".into(),
            email: None,
            contact_number: None,
            address: None,
            description: None,
            is_private: false,
            media_id: None,
        }
        .into_record(None);
        let record = Organization {
            id: Uuid::new_v4(),
            ..record
        };

        assert_eq!(record.subdomain, "horizon");
        let topics = record.topics(Action::Update);
        assert_eq!(
            topics,
            vec![
                "organization.update".to_string(),
                format!("organization.update.{}", record.id),
            ]
        );
        assert_eq!(record.values().len(), Organization::COLUMNS.len());
    }
}
