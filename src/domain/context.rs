//! Operation Context
//!
//! Who is acting, in which organization and branch, for footsteps, audit
//! columns and tracing.

use serde::{Deserialize, Serialize};
use std::net::IpAddr;
use uuid::Uuid;

use super::DomainError;

/// Context for an operation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationContext {
    /// Acting user from the X-User-Id header
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<Uuid>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization_id: Option<Uuid>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub branch_id: Option<Uuid>,

    /// Correlation ID for request tracing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub correlation_id: Option<Uuid>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_ip: Option<IpAddr>,
}

/// Organization and branch a branch-scoped operation runs in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BranchScope {
    pub organization_id: Uuid,
    pub branch_id: Uuid,
}

impl OperationContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_user(mut self, user_id: Uuid) -> Self {
        self.user_id = Some(user_id);
        self
    }

    pub fn with_branch(mut self, organization_id: Uuid, branch_id: Uuid) -> Self {
        self.organization_id = Some(organization_id);
        self.branch_id = Some(branch_id);
        self
    }

    pub fn with_organization(mut self, organization_id: Uuid) -> Self {
        self.organization_id = Some(organization_id);
        self
    }

    pub fn with_correlation_id(mut self, correlation_id: Uuid) -> Self {
        self.correlation_id = Some(correlation_id);
        self
    }

    pub fn with_client_ip(mut self, ip: IpAddr) -> Self {
        self.client_ip = Some(ip);
        self
    }

    /// Generate a new correlation ID if not present
    pub fn ensure_correlation_id(&mut self) -> Uuid {
        *self.correlation_id.get_or_insert_with(Uuid::new_v4)
    }

    pub fn require_user(&self) -> Result<Uuid, DomainError> {
        self.user_id.ok_or(DomainError::MissingContext("user"))
    }

    pub fn require_organization(&self) -> Result<Uuid, DomainError> {
        self.organization_id
            .ok_or(DomainError::MissingContext("organization"))
    }

    /// Organization and branch, both required
    pub fn require_branch(&self) -> Result<BranchScope, DomainError> {
        let organization_id = self.require_organization()?;
        let branch_id = self.branch_id.ok_or(DomainError::MissingContext("branch"))?;
        Ok(BranchScope {
            organization_id,
            branch_id,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_builder() {
        let user_id = Uuid::new_v4();
        let organization_id = Uuid::new_v4();
        let branch_id = Uuid::new_v4();

        let context = OperationContext::new()
            .with_user(user_id)
            .with_branch(organization_id, branch_id);

        assert_eq!(context.require_user().unwrap(), user_id);
        assert_eq!(
            context.require_branch().unwrap(),
            BranchScope {
                organization_id,
                branch_id
            }
        );
    }

    #[test]
    fn test_missing_branch() {
        let context = OperationContext::new().with_organization(Uuid::new_v4());
        assert_eq!(
            context.require_branch(),
            Err(DomainError::MissingContext("branch"))
        );
        assert_eq!(
            OperationContext::new().require_user(),
            Err(DomainError::MissingContext("user"))
        );
    }

    #[test]
    fn test_ensure_correlation_id() {
        let mut context = OperationContext::new();
        let id = context.ensure_correlation_id();
        assert_eq!(context.correlation_id, Some(id));
        assert_eq!(context.ensure_correlation_id(), id);
    }
}
