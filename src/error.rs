//! Error handling module
//!
//! Centralized error types and HTTP response conversion.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::domain::DomainError;
use crate::footstep::FootstepError;
use crate::managers::ManagerError;
use crate::registry::{is_unique_violation, RegistryError};
use crate::seed::SeedError;

/// Application-wide Result type
pub type AppResult<T> = Result<T, AppError>;

/// Application error types
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // Client errors (4xx)
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Seed(#[from] SeedError),

    // Server errors (5xx)
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error(transparent)]
    Footstep(#[from] FootstepError),

    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),
}

impl From<ManagerError> for AppError {
    fn from(err: ManagerError) -> Self {
        match err {
            ManagerError::Registry(e) => AppError::Registry(e),
            ManagerError::Domain(e) => AppError::Domain(e),
        }
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub error_code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

type Classified = (StatusCode, &'static str, Option<String>);

fn classify_registry(err: &RegistryError) -> Classified {
    match err {
        RegistryError::NotFound { .. } | RegistryError::NotFoundWhere { .. } => {
            (StatusCode::NOT_FOUND, "not_found", None)
        }
        RegistryError::Database(sqlx::Error::RowNotFound) => {
            (StatusCode::NOT_FOUND, "not_found", None)
        }
        RegistryError::UnknownColumn { column, .. } => {
            (StatusCode::BAD_REQUEST, "unknown_column", Some(column.clone()))
        }
        RegistryError::InvalidFilter { column, reason } => (
            StatusCode::BAD_REQUEST,
            "invalid_filter",
            Some(format!("{}: {}", column, reason)),
        ),
        RegistryError::Database(e) if is_unique_violation(e) => {
            (StatusCode::CONFLICT, "conflict", Some(e.to_string()))
        }
        RegistryError::Database(e) => {
            tracing::error!("Database error: {:?}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "database_error", None)
        }
        RegistryError::Serialization(e) => {
            tracing::error!("Serialization error: {:?}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "serialization_error", None)
        }
    }
}

fn classify_domain(err: &DomainError) -> Classified {
    let details = Some(err.to_string());
    match err {
        DomainError::InvalidAmount(_) => (StatusCode::BAD_REQUEST, "invalid_amount", details),
        DomainError::MissingContext(_) => (StatusCode::BAD_REQUEST, "missing_context", details),
        DomainError::ScopeMismatch { .. } => (StatusCode::NOT_FOUND, "not_found", None),
        DomainError::InvalidTransition { .. } => {
            (StatusCode::CONFLICT, "invalid_transition", details)
        }
        DomainError::Unbalanced { .. } => {
            (StatusCode::UNPROCESSABLE_ENTITY, "unbalanced_entries", details)
        }
        DomainError::CurrencyNotFound(code) => {
            (StatusCode::NOT_FOUND, "currency_not_found", Some(code.clone()))
        }
        DomainError::Locked { .. } => (StatusCode::CONFLICT, "record_locked", details),
        DomainError::BatchClosed(_) => (StatusCode::CONFLICT, "batch_closed", details),
        DomainError::BusinessRuleViolation(msg) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            "business_rule_violation",
            Some(msg.clone()),
        ),
    }
}

impl AppError {
    fn classify(&self) -> Classified {
        match self {
            // 400 Bad Request
            AppError::InvalidRequest(msg) => {
                (StatusCode::BAD_REQUEST, "invalid_request", Some(msg.clone()))
            }

            AppError::Registry(e) => classify_registry(e),
            AppError::Domain(e) => classify_domain(e),
            AppError::Seed(SeedError::Registry(e)) => classify_registry(e),
            AppError::Seed(SeedError::Domain(e)) => classify_domain(e),
            AppError::Seed(e @ SeedError::Record { .. }) => {
                tracing::error!("Seed error: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "seed_error", None)
            }

            AppError::Database(e) if is_unique_violation(e) => {
                (StatusCode::CONFLICT, "conflict", Some(e.to_string()))
            }

            // 500 Internal Server Error
            AppError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "database_error", None)
            }
            AppError::Footstep(e) => {
                tracing::error!("Footstep error: {:?}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "footstep_error", None)
            }
            AppError::Config(e) => {
                tracing::error!("Config error: {:?}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "config_error", None)
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_code, details) = self.classify();

        let body = ErrorResponse {
            error: self.to_string(),
            error_code: error_code.to_string(),
            details,
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::VoucherStatus;
    use uuid::Uuid;

    fn status_of(err: AppError) -> StatusCode {
        err.into_response().status()
    }

    #[test]
    fn test_not_found_maps_to_404() {
        let err = RegistryError::NotFound {
            entity: "bank",
            id: Uuid::nil(),
        };
        assert_eq!(status_of(err.into()), StatusCode::NOT_FOUND);
        assert_eq!(
            status_of(DomainError::scope_mismatch("bank", Uuid::nil()).into()),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn test_locked_voucher_maps_to_409() {
        let err = DomainError::Locked {
            entity: "cash_check_voucher",
            id: Uuid::nil(),
            status: VoucherStatus::Approved,
        };
        assert_eq!(status_of(err.into()), StatusCode::CONFLICT);
    }

    #[test]
    fn test_client_errors_map_to_400() {
        let err = RegistryError::UnknownColumn {
            entity: "bank",
            column: "password".into(),
        };
        assert_eq!(status_of(err.into()), StatusCode::BAD_REQUEST);
        assert_eq!(
            status_of(AppError::InvalidRequest("title is required".into())),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_of(DomainError::MissingContext("branch").into()),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_state_conflicts_map_to_409() {
        let err: AppError = ManagerError::Domain(DomainError::InvalidTransition {
            entity: "journal_voucher",
            from: VoucherStatus::Draft,
            to: VoucherStatus::Approved,
        })
        .into();
        assert_eq!(status_of(err), StatusCode::CONFLICT);
        assert_eq!(
            status_of(DomainError::BatchClosed(Uuid::nil()).into()),
            StatusCode::CONFLICT
        );
    }

    #[test]
    fn test_database_maps_to_500() {
        let err = AppError::Database(sqlx::Error::PoolTimedOut);
        assert_eq!(status_of(err), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_error_body_shape() {
        let (status, code, details) = AppError::InvalidRequest("name is required".into()).classify();
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(code, "invalid_request");
        assert_eq!(details.as_deref(), Some("name is required"));
    }
}
