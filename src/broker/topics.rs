//! Topic construction
//!
//! Every change notification is published under a small family of
//! dot-separated topics derived from the entity name, the action and the
//! scope of the record.

use std::fmt;
use uuid::Uuid;

/// Topic list published for a single change
pub type Topics = Vec<String>;

/// Kind of change being published
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Create,
    Update,
    Delete,
}

impl Action {
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Create => "create",
            Action::Update => "update",
            Action::Delete => "delete",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Scope a record lives in, which decides the scoped topic variants
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TopicScope {
    /// Branch-scoped record (publishes branch and organization variants)
    Branch {
        organization_id: Uuid,
        branch_id: Uuid,
    },
    /// Organization-scoped record
    Organization { organization_id: Uuid },
    /// Record owned by a single user
    User { user_id: Uuid },
    /// Record addressed by a natural code (e.g. a currency code)
    Code(String),
    /// Record without any scope
    Global,
}

/// Build the topics for a change.
///
/// ```
/// use coop_backoffice::broker::{topics, Action, TopicScope};
/// use uuid::Uuid;
///
/// let id = Uuid::nil();
/// let t = topics("bank", Action::Create, id, &TopicScope::Global);
/// assert_eq!(t, vec!["bank.create".to_string(), format!("bank.create.{}", id)]);
/// ```
pub fn topics(entity: &str, action: Action, id: Uuid, scope: &TopicScope) -> Topics {
    let base = format!("{}.{}", entity, action);
    let mut out = vec![base.clone(), format!("{}.{}", base, id)];

    match scope {
        TopicScope::Branch {
            organization_id,
            branch_id,
        } => {
            out.push(format!("{}.branch.{}", base, branch_id));
            out.push(format!("{}.organization.{}", base, organization_id));
        }
        TopicScope::Organization { organization_id } => {
            out.push(format!("{}.organization.{}", base, organization_id));
        }
        TopicScope::User { user_id } => {
            out.push(format!("{}.user.{}", base, user_id));
        }
        TopicScope::Code(code) => {
            out.push(format!("{}.code.{}", base, code));
        }
        TopicScope::Global => {}
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_branch_scope_topics() {
        let id = Uuid::new_v4();
        let organization_id = Uuid::new_v4();
        let branch_id = Uuid::new_v4();

        let t = topics(
            "bill_and_coins",
            Action::Update,
            id,
            &TopicScope::Branch {
                organization_id,
                branch_id,
            },
        );

        assert_eq!(
            t,
            vec![
                "bill_and_coins.update".to_string(),
                format!("bill_and_coins.update.{}", id),
                format!("bill_and_coins.update.branch.{}", branch_id),
                format!("bill_and_coins.update.organization.{}", organization_id),
            ]
        );
    }

    #[test]
    fn test_code_scope_topics() {
        let id = Uuid::new_v4();
        let t = topics("currency", Action::Delete, id, &TopicScope::Code("PHP".into()));

        assert_eq!(t.len(), 3);
        assert_eq!(t[0], "currency.delete");
        assert_eq!(t[2], "currency.delete.code.PHP");
    }

    #[test]
    fn test_user_scope_topics() {
        let id = Uuid::new_v4();
        let user_id = Uuid::new_v4();
        let t = topics("notification", Action::Create, id, &TopicScope::User { user_id });

        assert_eq!(t.last().unwrap(), &format!("notification.create.user.{}", user_id));
    }

    #[test]
    fn test_action_display() {
        assert_eq!(Action::Create.to_string(), "create");
        assert_eq!(Action::Update.as_str(), "update");
        assert_eq!(Action::Delete.as_str(), "delete");
    }
}
