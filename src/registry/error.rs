//! Registry Errors
//!
//! Error types for registry operations.

use uuid::Uuid;

/// Errors that can occur in a registry
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// No live record with this ID
    #[error("{entity} with ID {id} not found")]
    NotFound { entity: &'static str, id: Uuid },

    /// No live record matched the filters
    #[error("{entity} not found with the given filters")]
    NotFoundWhere { entity: &'static str },

    /// Filter or sort referenced a column the entity does not have
    #[error("Unknown column '{column}' for {entity}")]
    UnknownColumn {
        entity: &'static str,
        column: String,
    },

    /// Filter value does not fit the operator
    #[error("Invalid filter on {column}: {reason}")]
    InvalidFilter { column: String, reason: String },

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl RegistryError {
    /// Check if this error means the record does not exist
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            RegistryError::NotFound { .. }
                | RegistryError::NotFoundWhere { .. }
                | RegistryError::Database(sqlx::Error::RowNotFound)
        )
    }

    /// Check if this error is a unique constraint violation (SQLSTATE 23505)
    pub fn is_unique_violation(&self) -> bool {
        match self {
            RegistryError::Database(e) => is_unique_violation(e),
            _ => false,
        }
    }

    /// Check if this error was caused by the caller's input
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            RegistryError::UnknownColumn { .. } | RegistryError::InvalidFilter { .. }
        )
    }
}

/// Whether `err` is a unique constraint violation reported by Postgres
pub fn is_unique_violation(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(db) => db.code().as_deref() == Some(UNIQUE_VIOLATION),
        _ => false,
    }
}

const UNIQUE_VIOLATION: &str = "23505";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_classification() {
        let err = RegistryError::NotFound {
            entity: "bank",
            id: Uuid::nil(),
        };
        assert!(err.is_not_found());
        assert!(!err.is_client_error());
        assert!(err.to_string().starts_with("bank with ID"));

        assert!(RegistryError::Database(sqlx::Error::RowNotFound).is_not_found());
        assert!(!RegistryError::Database(sqlx::Error::RowNotFound).is_unique_violation());
    }

    #[test]
    fn test_unknown_column_is_client_error() {
        let err = RegistryError::UnknownColumn {
            entity: "timesheet",
            column: "password".to_string(),
        };
        assert!(err.is_client_error());
        assert!(err.to_string().contains("password"));
    }
}
