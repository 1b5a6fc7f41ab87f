use axum::{
    Json, async_trait,
    extract::{FromRequest, FromRequestParts, Path, Query},
    http::{Request, request::Parts},
};
use serde::{Deserialize, de::DeserializeOwned};
use validator::{Validate, ValidationErrors};

use crate::{db::models::api::ErrorDetail, error::AppError};

pub mod analytics;
pub mod files;
pub mod issue;
pub mod report;
pub mod swimlane;

/// JSON body extractor. Malformed JSON and schema failures both reject with
/// the standard 400 envelope.
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S, axum::body::Body> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(
        req: Request<axum::body::Body>,
        state: &S,
    ) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|_| AppError::validation("Invalid JSON format"))?;

        validate(&value)?;
        Ok(ValidatedJson(value))
    }
}

/// Query-string counterpart of [`ValidatedJson`].
pub struct ValidatedQuery<T>(pub T);

#[async_trait]
impl<T, S> FromRequestParts<S> for ValidatedQuery<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::validation(format!("Invalid query string: {}", e)))?;

        validate(&value)?;
        Ok(ValidatedQuery(value))
    }
}

/// Route-param counterpart of [`ValidatedJson`].
pub struct ValidatedPath<T>(pub T);

#[async_trait]
impl<T, S> FromRequestParts<S> for ValidatedPath<T>
where
    T: DeserializeOwned + Validate + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(value) = Path::<T>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::validation(format!("Invalid path parameter: {}", e)))?;

        validate(&value)?;
        Ok(ValidatedPath(value))
    }
}

/// Runs a value's declared rules, mapping failures to field-level details.
pub fn validate<T: Validate>(value: &T) -> Result<(), AppError> {
    value.validate().map_err(|errors| {
        let details = validation_details(&errors);
        AppError::validation_with_details(
            format!("Validation failed with {} errors", details.len()),
            details,
        )
    })
}

#[derive(Debug, Clone)]
pub struct SafeValidation {
    pub success: bool,
    pub errors: Vec<String>,
}

/// Reporting variant of [`validate`] for call sites that want the outcome
/// rather than an error path. Errors are flattened to `"field: message"`.
pub fn safe_validate<T: Validate>(value: &T) -> SafeValidation {
    match value.validate() {
        Ok(()) => SafeValidation {
            success: true,
            errors: Vec::new(),
        },
        Err(errors) => SafeValidation {
            success: false,
            errors: validation_details(&errors)
                .into_iter()
                .map(|detail| match detail.field {
                    Some(field) => format!("{}: {}", field, detail.message),
                    None => detail.message,
                })
                .collect(),
        },
    }
}

pub fn validation_details(errors: &ValidationErrors) -> Vec<ErrorDetail> {
    errors
        .field_errors()
        .iter()
        .flat_map(|(field, field_errors)| {
            field_errors.iter().map(move |error| ErrorDetail {
                field: Some(field.to_string()),
                code: error.code.to_string(),
                message: error
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("Validation failed for field: {}", field)),
            })
        })
        .collect()
}

/// Shared list-endpoint query shape. The lists this service serves return
/// full result sets; paginated surfaces in the host application validate
/// against this same contract.
#[derive(Deserialize, Validate, Debug, Clone)]
pub struct PaginationQuery {
    #[serde(default = "default_page")]
    #[validate(range(min = 1, message = "Page must be >= 1"))]
    pub page: u32,

    #[serde(default = "default_per_page")]
    #[validate(range(min = 1, max = 100, message = "Per-page must be between 1 and 100"))]
    pub per_page: u32,
}

fn default_page() -> u32 {
    1
}

fn default_per_page() -> u32 {
    25
}

/// Standalone predicates for call sites that only need a yes/no answer.
pub mod rules {
    use validator::{ValidateEmail, ValidateUrl, ValidationError};

    pub fn is_valid_id(value: &str) -> bool {
        uuid::Uuid::parse_str(value).is_ok()
    }

    pub fn is_valid_email(value: &str) -> bool {
        value.validate_email()
    }

    pub fn is_valid_url(value: &str) -> bool {
        value.validate_url()
    }

    /// Accepts RFC 3339 timestamps or plain `YYYY-MM-DD` dates.
    pub fn is_valid_date(value: &str) -> bool {
        chrono::DateTime::parse_from_rfc3339(value).is_ok()
            || chrono::NaiveDate::parse_from_str(value, "%Y-%m-%d").is_ok()
    }

    /// `#RRGGBB` form, as stored in swimlane and group color columns.
    pub fn validate_hex_color(value: &str) -> Result<(), ValidationError> {
        let well_formed = value.len() == 7
            && value.starts_with('#')
            && value[1..].chars().all(|c| c.is_ascii_hexdigit());
        if well_formed {
            Ok(())
        } else {
            Err(ValidationError::new("invalid_hex_color"))
        }
    }
}
