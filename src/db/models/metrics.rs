use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One snapshot per board per calendar day, refreshed in place.
#[derive(Queryable, Selectable, Serialize, Deserialize, Clone, Debug)]
#[diesel(table_name = crate::schema::board_metrics)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct BoardMetric {
    pub id: Uuid,
    pub board_id: Uuid,
    pub metric_date: chrono::NaiveDate,
    pub total_issues: i32,
    pub completed_issues: i32,
    pub in_progress_issues: i32,
    pub pending_issues: i32,
    pub overdue_issues: i32,
    pub issues_created: i32,
    pub issues_completed: i32,
    pub average_resolution_time: f64,
    pub cycle_time: f64,
    pub throughput: i32,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Insertable, AsChangeset)]
#[diesel(table_name = crate::schema::board_metrics)]
pub struct UpsertBoardMetric {
    pub board_id: Uuid,
    pub metric_date: chrono::NaiveDate,
    pub total_issues: i32,
    pub completed_issues: i32,
    pub in_progress_issues: i32,
    pub pending_issues: i32,
    pub overdue_issues: i32,
    pub issues_created: i32,
    pub issues_completed: i32,
    pub average_resolution_time: f64,
    pub cycle_time: f64,
    pub throughput: i32,
}
