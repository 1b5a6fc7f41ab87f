use serde::Deserialize;
use validator::Validate;

use crate::db::enums::ReportType;

#[derive(Deserialize, Validate, Debug, Clone)]
pub struct CreateReportRequest {
    #[validate(length(min = 1, max = 255, message = "Name must be between 1 and 255 characters"))]
    pub name: String,

    #[validate(length(max = 2000, message = "Description is too long (max 2000 characters)"))]
    pub description: Option<String>,

    pub report_type: ReportType,

    pub is_public: Option<bool>,

    pub filters: Option<serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_report_validation() {
        let req = CreateReportRequest {
            name: "Weekly burndown".to_string(),
            description: None,
            report_type: ReportType::Burndown,
            is_public: Some(true),
            filters: None,
        };
        assert!(req.validate().is_ok());

        let empty_name = CreateReportRequest {
            name: String::new(),
            ..req.clone()
        };
        assert!(empty_name.validate().is_err());

        let long_description = CreateReportRequest {
            description: Some("a".repeat(2001)),
            ..req
        };
        assert!(long_description.validate().is_err());
    }

    #[test]
    fn test_report_type_rejects_unknown_values() {
        let parsed: Result<ReportType, _> = serde_json::from_str("\"gantt\"");
        assert!(parsed.is_err());

        let parsed: Result<ReportType, _> = serde_json::from_str("\"cumulative_flow\"");
        assert!(parsed.is_ok());
    }
}
