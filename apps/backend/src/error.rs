use actix_web::error::ResponseError;
use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use serde::Serialize;
use thiserror::Error;

use crate::trace_ctx;

/// Stable error body returned for every failed request (RFC 9457 shape).
#[derive(Debug, Serialize)]
pub struct ProblemDetails {
    #[serde(rename = "type")]
    pub type_: String,
    pub title: String,
    pub status: u16,
    pub detail: String,
    pub code: String,
    pub trace_id: String,
}

#[derive(Error, Debug)]
pub enum AppError {
    /// Login failed. Deliberately identical for unknown email and wrong
    /// password so account existence is not leaked.
    #[error("Invalid credentials")]
    InvalidCredentials,
    #[error("UnauthorizedMissingBearer")]
    UnauthorizedMissingBearer,
    #[error("UnauthorizedInvalidJwt")]
    UnauthorizedInvalidJwt,
    #[error("UnauthorizedExpiredJwt")]
    UnauthorizedExpiredJwt,
    /// A verified token whose subject no longer resolves to a user record.
    /// Treated as unauthenticated, not forbidden.
    #[error("Unknown subject")]
    UnknownSubject,
    #[error("Forbidden: {detail}")]
    Forbidden { detail: String },
    #[error("Not found: {detail}")]
    NotFound { code: &'static str, detail: String },
    #[error("Bad request: {detail}")]
    BadRequest { code: &'static str, detail: String },
    #[error("Internal error: {detail}")]
    Internal { detail: String },
    #[error("Configuration error: {detail}")]
    Config { detail: String },
}

impl AppError {
    fn code(&self) -> String {
        match self {
            AppError::InvalidCredentials => "INVALID_CREDENTIALS".to_string(),
            AppError::UnauthorizedMissingBearer => "UNAUTHORIZED_MISSING_BEARER".to_string(),
            AppError::UnauthorizedInvalidJwt => "UNAUTHORIZED_INVALID_JWT".to_string(),
            AppError::UnauthorizedExpiredJwt => "UNAUTHORIZED_EXPIRED_JWT".to_string(),
            AppError::UnknownSubject => "UNKNOWN_SUBJECT".to_string(),
            AppError::Forbidden { .. } => "FORBIDDEN".to_string(),
            AppError::NotFound { code, .. } => code.to_string(),
            AppError::BadRequest { code, .. } => code.to_string(),
            AppError::Internal { .. } => "INTERNAL".to_string(),
            AppError::Config { .. } => "CONFIG_ERROR".to_string(),
        }
    }

    fn detail(&self) -> String {
        match self {
            AppError::InvalidCredentials => "Incorrect email or password".to_string(),
            AppError::UnauthorizedMissingBearer => "Missing or malformed Bearer token".to_string(),
            AppError::UnauthorizedInvalidJwt => "Invalid token".to_string(),
            AppError::UnauthorizedExpiredJwt => "Token expired".to_string(),
            AppError::UnknownSubject => "Token subject is not a known user".to_string(),
            AppError::Forbidden { detail } => detail.clone(),
            AppError::NotFound { detail, .. } => detail.clone(),
            AppError::BadRequest { detail, .. } => detail.clone(),
            AppError::Internal { detail } => detail.clone(),
            AppError::Config { detail } => detail.clone(),
        }
    }

    /// HTTP status code for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::InvalidCredentials
            | AppError::UnauthorizedMissingBearer
            | AppError::UnauthorizedInvalidJwt
            | AppError::UnauthorizedExpiredJwt
            | AppError::UnknownSubject => StatusCode::UNAUTHORIZED,
            AppError::Forbidden { .. } => StatusCode::FORBIDDEN,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            AppError::Internal { .. } | AppError::Config { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    pub fn invalid_credentials() -> Self {
        Self::InvalidCredentials
    }

    pub fn unauthorized_missing_bearer() -> Self {
        Self::UnauthorizedMissingBearer
    }

    pub fn unauthorized_invalid_jwt() -> Self {
        Self::UnauthorizedInvalidJwt
    }

    pub fn unauthorized_expired_jwt() -> Self {
        Self::UnauthorizedExpiredJwt
    }

    pub fn unknown_subject() -> Self {
        Self::UnknownSubject
    }

    pub fn forbidden(detail: String) -> Self {
        Self::Forbidden { detail }
    }

    pub fn not_found(code: &'static str, detail: String) -> Self {
        Self::NotFound { code, detail }
    }

    pub fn bad_request(code: &'static str, detail: String) -> Self {
        Self::BadRequest { code, detail }
    }

    pub fn internal(detail: String) -> Self {
        Self::Internal { detail }
    }

    pub fn config(detail: String) -> Self {
        Self::Config { detail }
    }

    fn humanize_code(code: &str) -> String {
        code.split('_')
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    None => String::new(),
                    Some(first) => first.to_uppercase().chain(chars).collect(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        self.status()
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status();
        let code = self.code();
        let trace_id = trace_ctx::trace_id();

        if status.is_server_error() {
            tracing::error!(code = %code, trace_id = %trace_id, detail = %self.detail(), "request failed");
        } else {
            tracing::debug!(code = %code, trace_id = %trace_id, detail = %self.detail(), "request rejected");
        }

        let body = ProblemDetails {
            type_: "about:blank".to_string(),
            title: Self::humanize_code(&code),
            status: status.as_u16(),
            detail: self.detail(),
            code,
            trace_id,
        };

        HttpResponse::build(status).json(body)
    }
}

#[cfg(test)]
mod tests {
    use actix_web::http::StatusCode;

    use super::AppError;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            AppError::invalid_credentials().status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(AppError::unknown_subject().status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            AppError::forbidden("nope".to_string()).status(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            AppError::not_found("ACTIVITY_NOT_FOUND", "missing".to_string()).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::bad_request("ALREADY_REGISTERED", "dup".to_string()).status(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_humanize_code() {
        assert_eq!(
            AppError::humanize_code("ACTIVITY_NOT_FOUND"),
            "Activity Not Found"
        );
        assert_eq!(AppError::humanize_code("FORBIDDEN"), "Forbidden");
    }
}
