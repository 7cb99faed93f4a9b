//! API Middleware
//!
//! Operation context extraction and request logging.

use std::net::IpAddr;

use axum::{
    body::Body,
    http::{HeaderMap, Request, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use uuid::Uuid;

use crate::domain::OperationContext;

pub const USER_HEADER: &str = "X-User-Id";
pub const ORGANIZATION_HEADER: &str = "X-Organization-Id";
pub const BRANCH_HEADER: &str = "X-Branch-Id";
pub const CORRELATION_HEADER: &str = "X-Correlation-Id";

// =========================================================================
// Operation Context Middleware
// =========================================================================

fn invalid_header(name: &str) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(json!({
            "error": format!("Invalid {} header format", name),
            "error_code": "invalid_header",
            "details": name,
        })),
    )
        .into_response()
}

/// Parse an optional UUID header; present but malformed is an error
fn uuid_header(headers: &HeaderMap, name: &'static str) -> Result<Option<Uuid>, Response> {
    match headers.get(name) {
        None => Ok(None),
        Some(value) => value
            .to_str()
            .ok()
            .and_then(|s| Uuid::parse_str(s.trim()).ok())
            .map(Some)
            .ok_or_else(|| invalid_header(name)),
    }
}

/// First address in `X-Forwarded-For`, if any
fn forwarded_ip(headers: &HeaderMap) -> Option<IpAddr> {
    headers
        .get("X-Forwarded-For")
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.split(',').next())
        .and_then(|s| s.trim().parse().ok())
}

/// Build the [`OperationContext`] from request headers.
///
/// No header is mandatory here; handlers ask the context for what they need.
pub fn context_from_headers(headers: &HeaderMap) -> Result<OperationContext, Response> {
    let mut context = OperationContext::new();
    context.user_id = uuid_header(headers, USER_HEADER)?;
    context.organization_id = uuid_header(headers, ORGANIZATION_HEADER)?;
    context.branch_id = uuid_header(headers, BRANCH_HEADER)?;
    context.correlation_id = uuid_header(headers, CORRELATION_HEADER)?;
    context.client_ip = forwarded_ip(headers);
    context.ensure_correlation_id();
    Ok(context)
}

/// Attach the operation context to the request
pub async fn context_middleware(mut request: Request<Body>, next: Next) -> Result<Response, Response> {
    let context = context_from_headers(request.headers())?;
    request.extensions_mut().insert(context);
    Ok(next.run(request).await)
}

// =========================================================================
// Header Masking
// =========================================================================

/// Headers that should be masked in logs
const SENSITIVE_HEADERS: &[&str] = &["x-api-key", "authorization", "cookie", "set-cookie"];

/// Mask sensitive headers for logging
pub fn mask_headers_for_logging(headers: &HeaderMap) -> Vec<(String, String)> {
    headers
        .iter()
        .map(|(name, value)| {
            let name_lower = name.as_str().to_lowercase();
            let masked_value = if SENSITIVE_HEADERS.contains(&name_lower.as_str()) {
                "[REDACTED]".to_string()
            } else {
                value.to_str().unwrap_or("[invalid utf8]").to_string()
            };
            (name.to_string(), masked_value)
        })
        .collect()
}

// =========================================================================
// Request Logging Middleware
// =========================================================================

/// Request logging middleware
pub async fn logging_middleware(request: Request<Body>, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let version = request.version();

    let headers = mask_headers_for_logging(request.headers());

    let context = request.extensions().get::<OperationContext>().cloned();
    let correlation_id = context.as_ref().and_then(|ctx| ctx.correlation_id);
    let branch_id = context.as_ref().and_then(|ctx| ctx.branch_id);

    let start = std::time::Instant::now();

    tracing::info!(
        method = %method,
        uri = %uri,
        version = ?version,
        correlation_id = ?correlation_id,
        branch_id = ?branch_id,
        headers = ?headers,
        "Incoming request"
    );

    let response = next.run(request).await;

    let duration = start.elapsed();
    let status = response.status();

    tracing::info!(
        method = %method,
        uri = %uri,
        status = %status,
        duration_ms = %duration.as_millis(),
        correlation_id = ?correlation_id,
        "Request completed"
    );

    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_headers_for_logging() {
        let mut headers = HeaderMap::new();
        headers.insert("content-type", "application/json".parse().unwrap());
        headers.insert("authorization", "Bearer secret".parse().unwrap());
        headers.insert("x-branch-id", "branch-123".parse().unwrap());

        let masked = mask_headers_for_logging(&headers);

        let auth = masked.iter().find(|(k, _)| k == "authorization");
        let content_type = masked.iter().find(|(k, _)| k == "content-type");
        let branch = masked.iter().find(|(k, _)| k == "x-branch-id");

        assert_eq!(auth.unwrap().1, "[REDACTED]");
        assert_eq!(content_type.unwrap().1, "application/json");
        assert_eq!(branch.unwrap().1, "branch-123");
    }

    #[test]
    fn test_context_from_headers() {
        let user = Uuid::new_v4();
        let organization = Uuid::new_v4();
        let branch = Uuid::new_v4();

        let mut headers = HeaderMap::new();
        headers.insert(USER_HEADER, user.to_string().parse().unwrap());
        headers.insert(ORGANIZATION_HEADER, organization.to_string().parse().unwrap());
        headers.insert(BRANCH_HEADER, branch.to_string().parse().unwrap());
        headers.insert("X-Forwarded-For", "10.0.0.7, 172.16.0.1".parse().unwrap());

        let context = context_from_headers(&headers).unwrap();
        assert_eq!(context.user_id, Some(user));
        assert_eq!(context.require_branch().unwrap().branch_id, branch);
        assert_eq!(context.client_ip, Some("10.0.0.7".parse().unwrap()));
        assert!(context.correlation_id.is_some());
    }

    #[test]
    fn test_missing_headers_leave_context_empty() {
        let context = context_from_headers(&HeaderMap::new()).unwrap();
        assert!(context.user_id.is_none());
        assert!(context.require_branch().is_err());
    }

    #[test]
    fn test_malformed_header_is_rejected() {
        let mut headers = HeaderMap::new();
        headers.insert(BRANCH_HEADER, "not-a-uuid".parse().unwrap());

        let response = context_from_headers(&headers).unwrap_err();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
