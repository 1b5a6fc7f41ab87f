use crate::db::enums::SwimlaneType;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Queryable, Selectable, Serialize, Deserialize, Clone, Debug)]
#[diesel(table_name = crate::schema::swimlanes)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Swimlane {
    pub id: Uuid,
    pub board_id: Uuid,
    pub name: String,
    pub swimlane_type: SwimlaneType,
    pub field: Option<String>,
    pub color: String,
    pub position: i32,
    pub is_visible: bool,
    pub settings: serde_json::Value,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::swimlanes)]
pub struct NewSwimlane {
    pub board_id: Uuid,
    pub name: String,
    pub swimlane_type: SwimlaneType,
    pub field: Option<String>,
    pub color: String,
    pub position: i32,
    pub is_visible: bool,
    pub settings: serde_json::Value,
}

#[derive(AsChangeset, Default)]
#[diesel(table_name = crate::schema::swimlanes)]
pub struct UpdateSwimlane {
    pub name: Option<String>,
    pub field: Option<Option<String>>,
    pub color: Option<String>,
    pub position: Option<i32>,
    pub is_visible: Option<bool>,
    pub settings: Option<serde_json::Value>,
}

#[derive(Queryable, Selectable, Serialize, Deserialize, Clone, Debug)]
#[diesel(table_name = crate::schema::swimlane_groups)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct SwimlaneGroup {
    pub id: Uuid,
    pub swimlane_id: Uuid,
    pub name: String,
    pub value: String,
    pub color: String,
    pub position: i32,
    pub is_visible: bool,
    pub settings: serde_json::Value,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::swimlane_groups)]
pub struct NewSwimlaneGroup {
    pub swimlane_id: Uuid,
    pub name: String,
    pub value: String,
    pub color: String,
    pub position: i32,
    pub is_visible: bool,
    pub settings: serde_json::Value,
}

#[derive(AsChangeset, Default)]
#[diesel(table_name = crate::schema::swimlane_groups)]
pub struct UpdateSwimlaneGroup {
    pub name: Option<String>,
    pub value: Option<String>,
    pub color: Option<String>,
    pub position: Option<i32>,
    pub is_visible: Option<bool>,
    pub settings: Option<serde_json::Value>,
}

// Per-user view preferences, keyed by (user, board, swimlane)
#[derive(Queryable, Selectable, Serialize, Deserialize, Clone, Debug)]
#[diesel(table_name = crate::schema::swimlane_user_settings)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct SwimlaneUserSetting {
    pub user_id: Uuid,
    pub board_id: Uuid,
    pub swimlane_id: Uuid,
    pub is_collapsed: bool,
    pub settings: serde_json::Value,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Insertable, AsChangeset)]
#[diesel(table_name = crate::schema::swimlane_user_settings)]
#[diesel(primary_key(user_id, board_id, swimlane_id))]
pub struct UpsertSwimlaneUserSetting {
    pub user_id: Uuid,
    pub board_id: Uuid,
    pub swimlane_id: Uuid,
    pub is_collapsed: bool,
    pub settings: serde_json::Value,
}

/// What a reader gets back for preferences that were never stored.
#[derive(Serialize, Clone, Debug)]
pub struct UserSwimlanePrefs {
    pub is_collapsed: bool,
    pub settings: serde_json::Value,
}

impl From<SwimlaneUserSetting> for UserSwimlanePrefs {
    fn from(setting: SwimlaneUserSetting) -> Self {
        UserSwimlanePrefs {
            is_collapsed: setting.is_collapsed,
            settings: setting.settings,
        }
    }
}

impl Default for UserSwimlanePrefs {
    fn default() -> Self {
        UserSwimlanePrefs {
            is_collapsed: false,
            settings: serde_json::json!({}),
        }
    }
}

#[derive(Serialize, Clone, Debug)]
pub struct SwimlaneGroupCount {
    pub group_id: Uuid,
    pub name: String,
    pub value: String,
    pub issue_count: i64,
}

#[derive(Serialize, Clone, Debug)]
pub struct SwimlaneStats {
    pub swimlane_id: Uuid,
    pub total_issues: i64,
    pub completed_issues: i64,
    pub in_progress_issues: i64,
    pub issues_by_group: Vec<SwimlaneGroupCount>,
}

#[derive(Serialize, Clone)]
pub struct SwimlaneTypeInfo {
    pub value: &'static str,
    pub label: &'static str,
    pub supports_auto_groups: bool,
}

/// Rotation palette for derived group colors. Priority groups use the
/// fixed mapping below instead.
pub const GROUP_COLOR_PALETTE: [&str; 8] = [
    "#3B82F6", "#10B981", "#F59E0B", "#EF4444", "#8B5CF6", "#EC4899", "#06B6D4", "#84CC16",
];

pub fn priority_group_color(priority: &str) -> &'static str {
    match priority {
        "low" => "#10B981",
        "medium" => "#F59E0B",
        "high" => "#EF4444",
        "critical" => "#DC2626",
        _ => "#6B7280",
    }
}

// Settings blobs keep the camelCase keys the board UI reads.
pub fn default_swimlane_settings(group_by: &str) -> serde_json::Value {
    serde_json::json!({
        "groupBy": group_by,
        "showEmpty": true,
        "showSubtasks": true,
        "showEpics": true,
    })
}

pub fn default_group_settings() -> serde_json::Value {
    serde_json::json!({
        "showCount": true,
        "showProgress": true,
        "showStoryPoints": false,
    })
}
