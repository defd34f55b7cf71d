use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use derive_more::{Display, Error};
use serde::Serialize;
use serde_json::json;

#[derive(Debug, Display, Error)]
pub enum AuthError {
    #[display(fmt = "Invalid username or password")]
    InvalidCredentials,
}

impl ResponseError for AuthError {
    fn status_code(&self) -> StatusCode {
        StatusCode::UNAUTHORIZED
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(json!({ "error": self.to_string() }))
    }
}

/// A rejected cell or form field. `field` carries the table column name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Display, Error)]
#[display(fmt = "{}: {}", field, reason)]
pub struct ValidationError {
    pub field: String,
    pub reason: String,
}

impl ValidationError {
    pub fn new(field: &str, reason: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            reason: reason.into(),
        }
    }
}

impl ResponseError for ValidationError {
    fn status_code(&self) -> StatusCode {
        StatusCode::UNPROCESSABLE_ENTITY
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(json!({
            "error": self.reason,
            "field": self.field,
        }))
    }
}

#[derive(Debug, Display, Error)]
pub enum StoreError {
    #[display(fmt = "payroll data file {} is not a decodable table", path)]
    Malformed { path: String },

    #[display(fmt = "payroll data file error: {}", source)]
    Io { source: std::io::Error },
}

impl ResponseError for StoreError {
    fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(json!({ "error": self.to_string() }))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum IdError {
    #[display(fmt = "cannot derive a next id from an empty table")]
    EmptyTable,

    #[display(fmt = "ticket id {} has no numeric suffix", id)]
    BadSuffix { id: String },
}

impl ResponseError for IdError {
    fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(json!({ "error": self.to_string() }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_names_field_and_reason() {
        let err = ValidationError::new("Hour Rate", "must be between 1 and 100");
        assert_eq!(err.to_string(), "Hour Rate: must be between 1 and 100");
        assert_eq!(err.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn auth_error_is_unauthorized() {
        assert_eq!(
            AuthError::InvalidCredentials.status_code(),
            StatusCode::UNAUTHORIZED
        );
    }
}
