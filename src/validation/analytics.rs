use serde::Deserialize;
use validator::{Validate, ValidationError};

/// Date window for trend queries. Both bounds are optional; the service
/// falls back to the last 30 days when they are absent.
#[derive(Deserialize, Validate, Debug, Clone, Copy, Default)]
#[validate(schema(function = "validate_date_window"))]
pub struct AnalyticsQuery {
    pub start_date: Option<chrono::NaiveDate>,
    pub end_date: Option<chrono::NaiveDate>,
}

fn validate_date_window(query: &AnalyticsQuery) -> Result<(), ValidationError> {
    if let (Some(start), Some(end)) = (query.start_date, query.end_date) {
        if start > end {
            return Err(ValidationError::new("start_after_end"));
        }
    }
    Ok(())
}
