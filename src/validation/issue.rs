use serde::Deserialize;
use validator::{Validate, ValidationError};

use crate::db::enums::{IssuePriority, IssueStatus, IssueType};

// Issue CRUD itself lives in the host application; the intake shapes are
// declared here so the enum domains the analytics formulas depend on are
// enforced at the same boundary as everything else.

#[derive(Deserialize, Validate, Debug, Clone)]
pub struct CreateIssueRequest {
    pub project_id: uuid::Uuid,

    #[validate(length(min = 1, max = 512, message = "Title must be between 1 and 512 characters"))]
    pub title: String,

    #[validate(length(max = 10000, message = "Description is too long (max 10000 characters)"))]
    pub description: Option<String>,

    pub status: IssueStatus,

    pub priority: IssuePriority,

    pub issue_type: IssueType,

    pub assignee_id: Option<uuid::Uuid>,

    pub epic_id: Option<uuid::Uuid>,

    pub component_id: Option<uuid::Uuid>,

    pub fix_version_id: Option<uuid::Uuid>,

    #[validate(range(min = 0, max = 100, message = "Story points must be between 0 and 100"))]
    pub story_points: Option<i32>,

    pub due_date: Option<chrono::DateTime<chrono::Utc>>,
}

#[derive(Deserialize, Validate, Debug, Clone, Default)]
#[validate(schema(function = "validate_update_has_changes"))]
pub struct UpdateIssueRequest {
    #[validate(length(min = 1, max = 512, message = "Title must be between 1 and 512 characters"))]
    pub title: Option<String>,

    #[validate(length(max = 10000, message = "Description is too long (max 10000 characters)"))]
    pub description: Option<String>,

    pub status: Option<IssueStatus>,

    pub priority: Option<IssuePriority>,

    pub assignee_id: Option<uuid::Uuid>,

    #[validate(range(min = 0, max = 100, message = "Story points must be between 0 and 100"))]
    pub story_points: Option<i32>,

    pub due_date: Option<chrono::DateTime<chrono::Utc>>,
}

fn validate_update_has_changes(req: &UpdateIssueRequest) -> Result<(), ValidationError> {
    let has_changes = req.title.is_some()
        || req.description.is_some()
        || req.status.is_some()
        || req.priority.is_some()
        || req.assignee_id.is_some()
        || req.story_points.is_some()
        || req.due_date.is_some();
    if has_changes {
        Ok(())
    } else {
        Err(ValidationError::new("no_update_data"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::safe_validate;

    fn valid_create() -> CreateIssueRequest {
        CreateIssueRequest {
            project_id: uuid::Uuid::new_v4(),
            title: "Fix login redirect".to_string(),
            description: Some("Redirect loops back to /login".to_string()),
            status: IssueStatus::Todo,
            priority: IssuePriority::High,
            issue_type: IssueType::Bug,
            assignee_id: None,
            epic_id: None,
            component_id: None,
            fix_version_id: None,
            story_points: Some(3),
            due_date: None,
        }
    }

    #[test]
    fn test_valid_issue_passes_safe_validate() {
        let outcome = safe_validate(&valid_create());
        assert!(outcome.success);
        assert!(outcome.errors.is_empty());
    }

    #[test]
    fn test_empty_title_reports_title_field() {
        let mut req = valid_create();
        req.title = String::new();
        let outcome = safe_validate(&req);
        assert!(!outcome.success);
        assert!(outcome.errors.iter().any(|e| e.starts_with("title:")));
    }

    #[test]
    fn test_missing_title_fails_deserialization() {
        let err = serde_json::from_str::<CreateIssueRequest>(
            r#"{"project_id":"550e8400-e29b-41d4-a716-446655440000","status":"todo","priority":"high","issue_type":"bug"}"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("title"));
    }

    #[test]
    fn test_unknown_status_fails_deserialization() {
        let parsed: Result<IssueStatus, _> = serde_json::from_str("\"archived\"");
        assert!(parsed.is_err());
    }

    #[test]
    fn test_update_requires_at_least_one_field() {
        assert!(UpdateIssueRequest::default().validate().is_err());

        let with_title = UpdateIssueRequest {
            title: Some("Retitle".to_string()),
            ..Default::default()
        };
        assert!(with_title.validate().is_ok());
    }

    #[test]
    fn test_story_points_range() {
        let mut req = valid_create();
        req.story_points = Some(101);
        assert!(req.validate().is_err());
    }
}
