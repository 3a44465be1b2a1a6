use std::borrow::Cow;
use std::fmt;

use actix_web::{
    error::ResponseError,
    http::{header::ContentType, StatusCode},
    HttpResponse
};
use derive_more::Display;
use serde::Serialize;
use validator::{ValidationError, ValidationErrors};

use crate::entities::experience_form::FormErrors;

#[derive(Debug)]
pub enum AppError {
    ValidationError(Vec<FieldError>),
    InternalError(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::ValidationError(errors) => {
                let messages = errors.iter()
                    .map(|e| format!("{}:{}", e.field, e.message))
                    .collect::<Vec<_>>()
                    .join(", ");
                write!(f, "validation error: {}", messages)
            }
            AppError::InternalError(msg) => write!(f, "Internal server error: {}", msg)
        }
    }
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        let body = match self {
            AppError::ValidationError(errors) => {
                serde_json::json!({
                    "error": "Validation failed",
                    "details": errors
                })
            }
            _ => {
                serde_json::json!({"error": self.to_string()})
            }
        };
        HttpResponse::build(self.status_code())
            .insert_header(ContentType::json())
            .json(body)
    }

    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        AppError::from(&FormErrors::from(&errors))
    }
}

impl From<&FormErrors> for AppError {
    fn from(errors: &FormErrors) -> Self {
        let field_errors = errors
            .iter()
            .map(|(field, message)| FieldError {
                field: field.to_string(),
                message: message.to_string(),
            })
            .collect();

        AppError::ValidationError(field_errors)
    }
}

impl AppError {
    pub fn field_errors(&self) -> &[FieldError] {
        match self {
            AppError::ValidationError(errors) => errors,
            _ => &[],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// Every way a filled-in experience form can be rejected.
#[derive(Debug, Display, Clone, PartialEq, Eq)]
pub enum ValidationFailure {
    #[display("{_0} is required")]
    MissingRequiredField(&'static str),

    #[display("Please select a valid month")]
    InvalidMonth,

    #[display("Year must be between {min} and {max}")]
    YearOutOfRange { min: i32, max: i32 },

    #[display("Please select a valid employment type")]
    InvalidEmploymentType,

    #[display("End date must be after start date")]
    InvalidDateOrdering,
}

impl ValidationFailure {
    pub fn code(&self) -> &'static str {
        match self {
            ValidationFailure::MissingRequiredField(_) => "required",
            ValidationFailure::InvalidMonth => "invalid_month",
            ValidationFailure::YearOutOfRange { .. } => "year_out_of_range",
            ValidationFailure::InvalidEmploymentType => "invalid_employment_type",
            ValidationFailure::InvalidDateOrdering => "end_before_start",
        }
    }
}

impl From<ValidationFailure> for ValidationError {
    fn from(failure: ValidationFailure) -> Self {
        let mut err = ValidationError::new(failure.code());
        err.message = Some(Cow::Owned(failure.to_string()));
        err
    }
}
