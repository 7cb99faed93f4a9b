//! Bank manager

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::broker::TopicScope;
use crate::domain::BranchScope;
use crate::registry::{Audit, BranchScoped, Entity, Relation, SqlValue};

use super::AuditResponse;

#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Bank {
    pub id: Uuid,
    #[sqlx(flatten)]
    pub audit: Audit,
    pub organization_id: Uuid,
    pub branch_id: Uuid,
    pub media_id: Option<Uuid>,
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct BankResponse {
    pub id: Uuid,
    #[serde(flatten)]
    pub audit: AuditResponse,
    pub organization_id: Uuid,
    pub branch_id: Uuid,
    pub media_id: Option<Uuid>,
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BankRequest {
    pub name: String,
    pub description: Option<String>,
    pub media_id: Option<Uuid>,
}

impl BankRequest {
    pub fn into_record(self, scope: BranchScope, user_id: Option<Uuid>) -> Bank {
        Bank {
            id: Uuid::nil(),
            audit: Audit::by(user_id),
            organization_id: scope.organization_id,
            branch_id: scope.branch_id,
            media_id: self.media_id,
            name: self.name,
            description: self.description,
        }
    }

    /// Overwrite the editable fields of an existing bank
    pub fn apply(self, bank: &mut Bank, user_id: Option<Uuid>) {
        bank.name = self.name;
        bank.description = self.description;
        bank.media_id = self.media_id;
        bank.audit.touch(user_id);
    }
}

impl Entity for Bank {
    type Response = BankResponse;

    const TABLE: &'static str = "banks";
    const TOPIC: &'static str = "bank";
    const COLUMNS: &'static [&'static str] =
        &["organization_id", "branch_id", "media_id", "name", "description"];

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
            self.name.clone().into(),
            self.description.clone().into(),
        ]
    }

    fn to_response(&self) -> BankResponse {
        BankResponse {
            id: self.id,
            audit: (&self.audit).into(),
            organization_id: self.organization_id,
            branch_id: self.branch_id,
            media_id: self.media_id,
            name: self.name.clone(),
            description: self.description.clone(),
        }
    }

    fn relations() -> Vec<Relation<Self>> {
        vec![Relation::new("media", "media", |b| b.media_id)]
    }
}

impl BranchScoped for Bank {
    fn organization_id(&self) -> Uuid {
        self.organization_id
    }

    fn branch_id(&self) -> Uuid {
        self.branch_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::broker::Action;

    #[test]
    fn test_bank_publishes_branch_and_organization_topics() {
        let scope = BranchScope {
            organization_id: Uuid::new_v4(),
            branch_id: Uuid::new_v4(),
        };
        let bank = Bank {
            id: Uuid::new_v4(),
            ..BankRequest {
                name: "BDO Unibank".into(),
                description: None,
                media_id: None,
            }
            .into_record(scope, None)
        };

        let topics = bank.topics(Action::Delete);
        assert_eq!(
            topics,
            vec![
                "bank.delete".to_string(),
                format!("bank.delete.{}", bank.id),
                format!("bank.delete.branch.{}", scope.branch_id),
                format!("bank.delete.organization.{}", scope.organization_id),
            ]
        );
    }

    #[test]
    fn test_apply_touches_audit() {
        let user = Uuid::new_v4();
        let scope = BranchScope {
            organization_id: Uuid::new_v4(),
            branch_id: Uuid::new_v4(),
        };
        let mut bank = BankRequest {
            name: "Old".into(),
            description: None,
            media_id: None,
        }
        .into_record(scope, None);

        BankRequest {
            name: "New".into(),
            description: Some("renamed".into()),
            media_id: None,
        }
        .apply(&mut bank, Some(user));

        assert_eq!(bank.name, "New");
        assert_eq!(bank.audit.updated_by_id, Some(user));
        assert_eq!(bank.to_response().description.as_deref(), Some("renamed"));
    }
}
