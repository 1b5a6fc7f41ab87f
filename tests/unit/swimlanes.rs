use taskboard_backend::db::enums::{IssuePriority, IssueStatus, SwimlaneType};
use taskboard_backend::db::models::swimlane::{
    GROUP_COLOR_PALETTE, UserSwimlanePrefs, default_group_settings, default_swimlane_settings,
    priority_group_color,
};
use taskboard_backend::services::swimlanes_service::{
    capitalize, issue_group_value, missing_group_values,
};
use uuid::Uuid;

use super::test_issue;

#[test]
fn group_value_follows_lane_type() {
    let assignee = Uuid::new_v4();
    let epic = Uuid::new_v4();
    let component = Uuid::new_v4();
    let fix_version = Uuid::new_v4();

    let mut issue = test_issue(IssueStatus::Todo);
    issue.assignee_id = Some(assignee);
    issue.epic_id = Some(epic);
    issue.component_id = Some(component);
    issue.fix_version_id = Some(fix_version);
    issue.priority = IssuePriority::High;

    assert_eq!(
        issue_group_value(&issue, &SwimlaneType::Assignee),
        Some(assignee.to_string())
    );
    assert_eq!(
        issue_group_value(&issue, &SwimlaneType::Epic),
        Some(epic.to_string())
    );
    assert_eq!(
        issue_group_value(&issue, &SwimlaneType::Priority),
        Some("high".to_string())
    );
    assert_eq!(
        issue_group_value(&issue, &SwimlaneType::Component),
        Some(component.to_string())
    );
    assert_eq!(
        issue_group_value(&issue, &SwimlaneType::FixVersion),
        Some(fix_version.to_string())
    );
    assert_eq!(issue_group_value(&issue, &SwimlaneType::Custom), None);
}

#[test]
fn group_value_is_none_when_field_is_unset() {
    let issue = test_issue(IssueStatus::Todo);

    assert_eq!(issue_group_value(&issue, &SwimlaneType::Assignee), None);
    assert_eq!(issue_group_value(&issue, &SwimlaneType::Epic), None);
    assert_eq!(issue_group_value(&issue, &SwimlaneType::Component), None);
    assert_eq!(issue_group_value(&issue, &SwimlaneType::FixVersion), None);

    // Priority always has a value
    assert_eq!(
        issue_group_value(&issue, &SwimlaneType::Priority),
        Some("medium".to_string())
    );
}

#[test]
fn auto_group_support_is_limited_to_enumerable_types() {
    assert!(SwimlaneType::Assignee.supports_auto_groups());
    assert!(SwimlaneType::Epic.supports_auto_groups());
    assert!(SwimlaneType::Priority.supports_auto_groups());
    assert!(!SwimlaneType::Component.supports_auto_groups());
    assert!(!SwimlaneType::FixVersion.supports_auto_groups());
    assert!(!SwimlaneType::Custom.supports_auto_groups());
}

#[test]
fn derived_values_skip_covered_groups() {
    let user_a = Uuid::new_v4();
    let user_b = Uuid::new_v4();

    let mut issues = vec![
        test_issue(IssueStatus::Todo),
        test_issue(IssueStatus::InProgress),
        test_issue(IssueStatus::Done),
        test_issue(IssueStatus::Todo),
    ];
    issues[0].assignee_id = Some(user_a);
    issues[1].assignee_id = Some(user_b);
    issues[2].assignee_id = Some(user_a);

    let first = missing_group_values(&issues, &SwimlaneType::Assignee, &[]);
    assert_eq!(first, vec![user_a.to_string(), user_b.to_string()]);

    // Once every value has a group, a second derivation finds nothing.
    let covered: Vec<&str> = first.iter().map(String::as_str).collect();
    let second = missing_group_values(&issues, &SwimlaneType::Assignee, &covered);
    assert!(second.is_empty());
}

#[test]
fn capitalize_uppercases_only_the_first_letter() {
    assert_eq!(capitalize("high"), "High");
    assert_eq!(capitalize("fix version"), "Fix version");
    assert_eq!(capitalize("X"), "X");
    assert_eq!(capitalize(""), "");
}

#[test]
fn priority_groups_use_the_fixed_color_map() {
    assert_eq!(priority_group_color("low"), "#10B981");
    assert_eq!(priority_group_color("medium"), "#F59E0B");
    assert_eq!(priority_group_color("high"), "#EF4444");
    assert_eq!(priority_group_color("critical"), "#DC2626");
    assert_eq!(priority_group_color("blocker"), "#6B7280");
}

#[test]
fn palette_rotation_wraps_deterministically() {
    assert_eq!(GROUP_COLOR_PALETTE.len(), 8);

    // Derived colors index by existing count plus offset, modulo the palette
    let existing = 6;
    let offsets = [0, 1, 2, 3];
    let picked: Vec<&str> = offsets
        .iter()
        .map(|idx| GROUP_COLOR_PALETTE[(existing + idx) % GROUP_COLOR_PALETTE.len()])
        .collect();

    assert_eq!(picked[0], GROUP_COLOR_PALETTE[6]);
    assert_eq!(picked[1], GROUP_COLOR_PALETTE[7]);
    assert_eq!(picked[2], GROUP_COLOR_PALETTE[0]);
    assert_eq!(picked[3], GROUP_COLOR_PALETTE[1]);
}

#[test]
fn default_settings_carry_the_ui_keys() {
    let lane = default_swimlane_settings("assignee");
    assert_eq!(lane["groupBy"], "assignee");
    assert_eq!(lane["showEmpty"], true);
    assert_eq!(lane["showSubtasks"], true);
    assert_eq!(lane["showEpics"], true);

    let group = default_group_settings();
    assert_eq!(group["showCount"], true);
    assert_eq!(group["showProgress"], true);
    assert_eq!(group["showStoryPoints"], false);
}

#[test]
fn missing_user_prefs_read_as_defaults() {
    let prefs = UserSwimlanePrefs::default();
    assert!(!prefs.is_collapsed);
    assert_eq!(prefs.settings, serde_json::json!({}));
}

#[test]
fn lane_type_labels_are_display_ready() {
    assert_eq!(SwimlaneType::FixVersion.as_str(), "fix_version");
    assert_eq!(SwimlaneType::FixVersion.label(), "Fix Version");
    assert_eq!(SwimlaneType::all().len(), 6);
}
