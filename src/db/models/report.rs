use crate::db::enums::ReportType;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Named report preset. `data` holds the last generated payload; regeneration
/// overwrites it (last write wins).
#[derive(Queryable, Selectable, Serialize, Deserialize, Clone, Debug)]
#[diesel(table_name = crate::schema::board_reports)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct BoardReport {
    pub id: Uuid,
    pub board_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub report_type: ReportType,
    pub created_by_id: Uuid,
    pub is_public: bool,
    pub filters: serde_json::Value,
    pub data: Option<serde_json::Value>,
    pub last_generated: Option<chrono::DateTime<chrono::Utc>>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::board_reports)]
pub struct NewBoardReport {
    pub board_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub report_type: ReportType,
    pub created_by_id: Uuid,
    pub is_public: bool,
    pub filters: serde_json::Value,
}

#[derive(Serialize, Clone)]
pub struct ReportTypeInfo {
    pub value: &'static str,
    pub label: &'static str,
}

// Pre-aggregated series rows, appended by the host application's sprint
// tooling and read back verbatim into report payloads.

#[derive(Queryable, Selectable, Serialize, Deserialize, Clone, Debug)]
#[diesel(table_name = crate::schema::burndown_data)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct BurndownEntry {
    pub id: Uuid,
    pub board_id: Uuid,
    pub sprint_id: Option<Uuid>,
    pub entry_date: chrono::NaiveDate,
    pub remaining_points: f64,
    pub ideal_points: f64,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Queryable, Selectable, Serialize, Deserialize, Clone, Debug)]
#[diesel(table_name = crate::schema::velocity_data)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct VelocityEntry {
    pub id: Uuid,
    pub board_id: Uuid,
    pub sprint_id: Option<Uuid>,
    pub sprint_name: String,
    pub start_date: chrono::NaiveDate,
    pub end_date: chrono::NaiveDate,
    pub committed_points: f64,
    pub completed_points: f64,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Queryable, Selectable, Serialize, Deserialize, Clone, Debug)]
#[diesel(table_name = crate::schema::cumulative_flow_data)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct CumulativeFlowEntry {
    pub id: Uuid,
    pub board_id: Uuid,
    pub entry_date: chrono::NaiveDate,
    pub status: String,
    pub issue_count: i32,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
