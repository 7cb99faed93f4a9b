//! Account manager
//!
//! Chart-of-accounts entries. The general ledger type decides which side of
//! an entry increases the running balance.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::broker::TopicScope;
use crate::domain::{BranchScope, DomainError};
use crate::registry::{
    Audit, BranchScoped, Entity, Filter, Registry, RegistryError, Relation, SqlValue,
};

use super::AuditResponse;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GeneralLedgerType {
    Assets,
    Liabilities,
    Equity,
    Revenue,
    Expenses,
}

impl GeneralLedgerType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Assets => "Assets",
            Self::Liabilities => "Liabilities",
            Self::Equity => "Equity",
            Self::Revenue => "Revenue",
            Self::Expenses => "Expenses",
        }
    }

    /// Whether a debit increases the balance of this type
    pub fn is_debit_normal(&self) -> bool {
        matches!(self, Self::Assets | Self::Expenses)
    }
}

impl fmt::Display for GeneralLedgerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GeneralLedgerType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Assets" => Ok(Self::Assets),
            "Liabilities" => Ok(Self::Liabilities),
            "Equity" => Ok(Self::Equity),
            "Revenue" => Ok(Self::Revenue),
            "Expenses" => Ok(Self::Expenses),
            other => Err(DomainError::BusinessRuleViolation(format!(
                "unknown general ledger type '{}'",
                other
            ))),
        }
    }
}

/// Account type without a member sub-ledger
pub const ACCOUNT_TYPE_OTHER: &str = "Other";

#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Account {
    pub id: Uuid,
    #[sqlx(flatten)]
    pub audit: Audit,
    pub organization_id: Uuid,
    pub branch_id: Uuid,
    pub currency_id: Option<Uuid>,
    pub code: String,
    pub name: String,
    pub description: Option<String>,
    pub account_type: String,
    pub general_ledger_type: Option<String>,
}

impl Account {
    /// Parsed ledger type; unknown or missing values yield `None`
    pub fn ledger_type(&self) -> Option<GeneralLedgerType> {
        self.general_ledger_type
            .as_deref()
            .and_then(|t| t.parse().ok())
    }

    /// Whether entries on this account are tracked per member
    pub fn has_member_ledger(&self) -> bool {
        self.account_type != ACCOUNT_TYPE_OTHER
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AccountResponse {
    pub id: Uuid,
    #[serde(flatten)]
    pub audit: AuditResponse,
    pub organization_id: Uuid,
    pub branch_id: Uuid,
    pub currency_id: Option<Uuid>,
    pub code: String,
    pub name: String,
    pub description: Option<String>,
    pub account_type: String,
    pub general_ledger_type: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AccountRequest {
    pub code: String,
    pub name: String,
    pub description: Option<String>,
    pub currency_id: Option<Uuid>,
    #[serde(default = "default_account_type")]
    pub account_type: String,
    pub general_ledger_type: Option<GeneralLedgerType>,
}

fn default_account_type() -> String {
    ACCOUNT_TYPE_OTHER.to_string()
}

impl AccountRequest {
    pub fn into_record(self, scope: BranchScope, user_id: Option<Uuid>) -> Account {
        Account {
            id: Uuid::nil(),
            audit: Audit::by(user_id),
            organization_id: scope.organization_id,
            branch_id: scope.branch_id,
            currency_id: self.currency_id,
            code: self.code.trim().to_string(),
            name: self.name,
            description: self.description,
            account_type: self.account_type,
            general_ledger_type: self.general_ledger_type.map(|t| t.to_string()),
        }
    }

    pub fn apply(self, account: &mut Account, user_id: Option<Uuid>) {
        account.code = self.code.trim().to_string();
        account.name = self.name;
        account.description = self.description;
        account.currency_id = self.currency_id;
        account.account_type = self.account_type;
        account.general_ledger_type = self.general_ledger_type.map(|t| t.to_string());
        account.audit.touch(user_id);
    }
}

impl Entity for Account {
    type Response = AccountResponse;

    const TABLE: &'static str = "accounts";
    const TOPIC: &'static str = "account";
    const COLUMNS: &'static [&'static str] = &[
        "organization_id",
        "branch_id",
        "currency_id",
        "code",
        "name",
        "description",
        "account_type",
        "general_ledger_type",
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
            self.currency_id.into(),
            self.code.clone().into(),
            self.name.clone().into(),
            self.description.clone().into(),
            self.account_type.clone().into(),
            self.general_ledger_type.clone().into(),
        ]
    }

    fn to_response(&self) -> AccountResponse {
        AccountResponse {
            id: self.id,
            audit: (&self.audit).into(),
            organization_id: self.organization_id,
            branch_id: self.branch_id,
            currency_id: self.currency_id,
            code: self.code.clone(),
            name: self.name.clone(),
            description: self.description.clone(),
            account_type: self.account_type.clone(),
            general_ledger_type: self.general_ledger_type.clone(),
        }
    }

    fn relations() -> Vec<Relation<Self>> {
        vec![Relation::new("currency", "currencies", |a| a.currency_id)]
    }
}

impl BranchScoped for Account {
    fn organization_id(&self) -> Uuid {
        self.organization_id
    }

    fn branch_id(&self) -> Uuid {
        self.branch_id
    }
}

impl Registry<Account> {
    pub async fn find_by_code(
        &self,
        organization_id: Uuid,
        branch_id: Uuid,
        code: &str,
    ) -> Result<Option<Account>, RegistryError> {
        let mut filters = Self::branch_filters(organization_id, branch_id);
        filters.push(Filter::eq("code", code.trim()));
        self.find_one(&filters).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ledger_type_parsing() {
        assert_eq!("Revenue".parse::<GeneralLedgerType>().unwrap(), GeneralLedgerType::Revenue);
        assert!("Income".parse::<GeneralLedgerType>().is_err());
        assert!(GeneralLedgerType::Assets.is_debit_normal());
        assert!(GeneralLedgerType::Expenses.is_debit_normal());
        assert!(!GeneralLedgerType::Equity.is_debit_normal());
    }

    #[test]
    fn test_request_defaults_to_other() {
        let request: AccountRequest = serde_json::from_value(serde_json::json!({
            "code": " 1-100 ",
            "name": "Cash on Hand",
            "general_ledger_type": "Assets"
        }))
        .unwrap();

        let scope = BranchScope {
            organization_id: Uuid::new_v4(),
            branch_id: Uuid::new_v4(),
        };
        let account = request.into_record(scope, None);
        assert_eq!(account.code, "1-100");
        assert_eq!(account.account_type, ACCOUNT_TYPE_OTHER);
        assert!(!account.has_member_ledger());
        assert_eq!(account.ledger_type(), Some(GeneralLedgerType::Assets));
    }
}
