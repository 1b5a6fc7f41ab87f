use crate::db::enums::IssueStatus;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// Computed analytics payloads. Nothing here maps to a table; overview and
// friends are derived in memory from issue rows on every request.

#[derive(Serialize, Clone, Debug)]
pub struct BoardOverview {
    pub total_issues: i64,
    pub completed_issues: i64,
    pub in_progress_issues: i64,
    pub pending_issues: i64,
    pub overdue_issues: i64,
    pub completion_rate: f64,
    pub average_resolution_time: f64,
    pub throughput: i64,
}

#[derive(Serialize, Clone, Debug)]
pub struct IssueTrendPoint {
    pub date: String,
    pub created: i32,
    pub completed: i32,
}

#[derive(Serialize, Clone, Debug)]
pub struct VelocityPoint {
    pub date: String,
    pub completed: i32,
}

#[derive(Serialize, Clone, Debug)]
pub struct CycleTimePoint {
    pub date: String,
    pub days: f64,
}

/// Parallel per-day series built from stored snapshots. Days without a
/// snapshot are simply absent.
#[derive(Serialize, Clone, Debug)]
pub struct BoardTrends {
    pub issues: Vec<IssueTrendPoint>,
    pub velocity: Vec<VelocityPoint>,
    pub cycle_time: Vec<CycleTimePoint>,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum InsightSeverity {
    Info,
    Warning,
    Error,
}

#[derive(Serialize, Clone, Debug)]
pub struct Insight {
    pub severity: InsightSeverity,
    pub code: &'static str,
    pub message: String,
}

#[derive(Serialize, Clone, Debug)]
pub struct BoardAnalytics {
    pub overview: BoardOverview,
    pub trends: BoardTrends,
    pub insights: Vec<Insight>,
}

#[derive(Serialize, Clone, Debug)]
pub struct ColumnAnalytics {
    pub column_id: Uuid,
    pub name: String,
    pub status: IssueStatus,
    pub issue_count: i64,
    pub wip_limit: Option<i32>,
    pub wip_utilization: f64,
    pub average_time_in_column: f64,
    pub bottleneck_score: f64,
}

#[derive(Serialize, Clone, Debug)]
pub struct UserAnalytics {
    pub user_id: Uuid,
    pub user_name: Option<String>,
    pub issues_assigned: i64,
    pub issues_completed: i64,
    pub average_resolution_time: f64,
    pub productivity_score: f64,
    pub collaboration_score: f64,
}
