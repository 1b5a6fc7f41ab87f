pub mod analytics;
pub mod swimlanes;

// Shared builders for aggregation tests
use chrono::{Duration, Utc};
use taskboard_backend::db::enums::{IssuePriority, IssueStatus, IssueType};
use taskboard_backend::db::models::issue::Issue;
use uuid::Uuid;

pub fn test_issue(status: IssueStatus) -> Issue {
    let now = Utc::now();
    Issue {
        id: Uuid::new_v4(),
        project_id: Uuid::new_v4(),
        reporter_id: Uuid::new_v4(),
        assignee_id: None,
        epic_id: None,
        component_id: None,
        fix_version_id: None,
        title: "Test issue".to_string(),
        description: None,
        status,
        priority: IssuePriority::Medium,
        issue_type: IssueType::Task,
        story_points: None,
        due_date: None,
        resolved_at: None,
        created_at: now,
        updated_at: now,
    }
}

/// Done issue whose resolution took exactly `days_to_resolve` days.
pub fn resolved_issue(days_to_resolve: i64) -> Issue {
    let created = Utc::now() - Duration::days(30);
    let mut issue = test_issue(IssueStatus::Done);
    issue.created_at = created;
    issue.resolved_at = Some(created + Duration::days(days_to_resolve));
    issue
}
