use diesel::prelude::*;

use crate::{
    config::AnalyticsConfig,
    db::enums::{IssueStatus, ReportType},
    db::models::analytics::{
        BoardAnalytics, BoardOverview, BoardTrends, ColumnAnalytics, CycleTimePoint, Insight,
        InsightSeverity, IssueTrendPoint, UserAnalytics, VelocityPoint,
    },
    db::models::board::BoardColumn,
    db::models::issue::Issue,
    db::models::metrics::{BoardMetric, UpsertBoardMetric},
    db::models::report::{BoardReport, NewBoardReport},
    db::repositories::boards::BoardRepo,
    db::repositories::issues::IssueRepo,
    db::repositories::metrics::MetricsRepo,
    db::repositories::report_series::ReportSeriesRepo,
    db::repositories::reports::ReportRepo,
    db::repositories::users::UserRepo,
    error::AppError,
    validation::analytics::AnalyticsQuery,
    validation::report::CreateReportRequest,
};

/// Reported as a flat estimate until per-column transition history is
/// recorded.
// TODO: compute real dwell times once column transition events are persisted
pub const AVERAGE_COLUMN_DWELL_DAYS: f64 = 2.5;

/// Stand-in until comment and review activity is wired into this service.
// TODO: derive from comment/review counts when those tables are exposed here
pub const DEFAULT_COLLABORATION_SCORE: f64 = 75.0;

const SECONDS_PER_DAY: f64 = 86_400.0;

/// Boundary values the insight rules compare against. Rules fire strictly
/// above (or below) these, never at them.
#[derive(Clone, Copy, Debug)]
pub struct InsightThresholds {
    pub wip_threshold: i64,
    pub overdue_threshold: i64,
    pub completion_rate_floor: f64,
    pub resolution_days_ceiling: f64,
}

impl Default for InsightThresholds {
    fn default() -> Self {
        Self {
            wip_threshold: 10,
            overdue_threshold: 0,
            completion_rate_floor: 50.0,
            resolution_days_ceiling: 7.0,
        }
    }
}

impl From<AnalyticsConfig> for InsightThresholds {
    fn from(cfg: AnalyticsConfig) -> Self {
        Self {
            wip_threshold: cfg.wip_threshold,
            overdue_threshold: cfg.overdue_threshold,
            completion_rate_floor: cfg.completion_rate_floor,
            resolution_days_ceiling: cfg.resolution_days_ceiling,
        }
    }
}

/// Read-only aggregation over a board's issues. Never mutates issue state;
/// the only writes it performs are metric snapshots and report data blobs.
#[derive(Clone)]
pub struct AnalyticsService {
    thresholds: InsightThresholds,
}

impl AnalyticsService {
    pub fn new(thresholds: InsightThresholds) -> Self {
        Self { thresholds }
    }

    pub fn get_board_analytics(
        &self,
        conn: &mut PgConnection,
        board_id: uuid::Uuid,
        query: &AnalyticsQuery,
    ) -> Result<BoardAnalytics, AppError> {
        let (_, issues) = load_board_issues(conn, board_id)?;
        let now = chrono::Utc::now();

        let overview = compute_overview(&issues, now);

        let end = query.end_date.unwrap_or_else(|| now.date_naive());
        let start = query
            .start_date
            .unwrap_or_else(|| end - chrono::Duration::days(30));
        let snapshots = MetricsRepo::list_range(conn, board_id, start, end)?;
        let trends = build_trends(&snapshots);

        let insights = self.build_insights(&overview);

        Ok(BoardAnalytics {
            overview,
            trends,
            insights,
        })
    }

    pub fn get_column_analytics(
        &self,
        conn: &mut PgConnection,
        board_id: uuid::Uuid,
    ) -> Result<Vec<ColumnAnalytics>, AppError> {
        let (_, issues) = load_board_issues(conn, board_id)?;
        let columns = BoardRepo::columns_for_board(conn, board_id)?;
        Ok(compute_column_analytics(&columns, &issues))
    }

    pub fn get_user_analytics(
        &self,
        conn: &mut PgConnection,
        board_id: uuid::Uuid,
    ) -> Result<Vec<UserAnalytics>, AppError> {
        let (_, issues) = load_board_issues(conn, board_id)?;
        let mut stats = compute_user_analytics(&issues);

        let assignee_ids: Vec<uuid::Uuid> = stats.iter().map(|s| s.user_id).collect();
        let users = UserRepo::list_by_ids(conn, &assignee_ids)?;
        for entry in &mut stats {
            if let Some(user) = users.iter().find(|u| u.id == entry.user_id) {
                entry.user_name = Some(user.name.clone());
            }
        }

        Ok(stats)
    }

    /// Writes (or overwrites) today's metric snapshot for the board.
    pub fn update_board_metrics(
        &self,
        conn: &mut PgConnection,
        board_id: uuid::Uuid,
    ) -> Result<BoardMetric, AppError> {
        let (_, issues) = load_board_issues(conn, board_id)?;
        let now = chrono::Utc::now();
        let today = now.date_naive();
        let overview = compute_overview(&issues, now);

        let issues_created = issues
            .iter()
            .filter(|i| i.created_at.date_naive() == today)
            .count() as i32;
        let issues_completed = issues
            .iter()
            .filter(|i| matches!(i.resolved_at, Some(at) if at.date_naive() == today))
            .count() as i32;

        let row = UpsertBoardMetric {
            board_id,
            metric_date: today,
            total_issues: overview.total_issues as i32,
            completed_issues: overview.completed_issues as i32,
            in_progress_issues: overview.in_progress_issues as i32,
            pending_issues: overview.pending_issues as i32,
            overdue_issues: overview.overdue_issues as i32,
            issues_created,
            issues_completed,
            average_resolution_time: overview.average_resolution_time,
            // No per-column transition data yet, so resolution time doubles
            // as the stored cycle time.
            cycle_time: overview.average_resolution_time,
            throughput: overview.throughput as i32,
        };

        let snapshot = MetricsRepo::upsert_daily(conn, &row)?;
        tracing::info!("Refreshed metric snapshot for board {} ({})", board_id, today);
        Ok(snapshot)
    }

    pub fn create_report(
        &self,
        conn: &mut PgConnection,
        board_id: uuid::Uuid,
        created_by: uuid::Uuid,
        req: &CreateReportRequest,
    ) -> Result<BoardReport, AppError> {
        let _board =
            BoardRepo::find_by_id(conn, board_id)?.ok_or_else(|| AppError::not_found("board"))?;

        let new_report = NewBoardReport {
            board_id,
            name: req.name.clone(),
            description: req.description.clone(),
            report_type: req.report_type.clone(),
            created_by_id: created_by,
            is_public: req.is_public.unwrap_or(false),
            filters: req.filters.clone().unwrap_or_else(|| serde_json::json!({})),
        };
        let created = ReportRepo::insert(conn, &new_report)?;
        tracing::info!("Created report {} on board {}", created.id, board_id);
        Ok(created)
    }

    pub fn get_board_reports(
        &self,
        conn: &mut PgConnection,
        board_id: uuid::Uuid,
        viewer_id: uuid::Uuid,
    ) -> Result<Vec<BoardReport>, AppError> {
        let _board =
            BoardRepo::find_by_id(conn, board_id)?.ok_or_else(|| AppError::not_found("board"))?;
        let reports = ReportRepo::list_visible(conn, board_id, viewer_id)?;
        Ok(reports)
    }

    /// Private reports are invisible to everyone but their creator, so a
    /// non-creator gets the same 404 as a missing id.
    pub fn get_report(
        &self,
        conn: &mut PgConnection,
        report_id: uuid::Uuid,
        viewer_id: uuid::Uuid,
    ) -> Result<BoardReport, AppError> {
        let report =
            ReportRepo::find_by_id(conn, report_id)?.ok_or_else(|| AppError::not_found("report"))?;
        if !report.is_public && report.created_by_id != viewer_id {
            return Err(AppError::not_found("report"));
        }
        Ok(report)
    }

    /// Re-runs the aggregation behind the report and overwrites its cached
    /// data blob. Concurrent calls race benignly; last write wins.
    pub fn generate_report_data(
        &self,
        conn: &mut PgConnection,
        report_id: uuid::Uuid,
        viewer_id: uuid::Uuid,
    ) -> Result<BoardReport, AppError> {
        let report = self.get_report(conn, report_id, viewer_id)?;

        let generated = match report.report_type {
            ReportType::Burndown => {
                serde_json::to_value(ReportSeriesRepo::burndown_for_board(conn, report.board_id)?)
            }
            ReportType::Velocity => {
                serde_json::to_value(ReportSeriesRepo::velocity_for_board(conn, report.board_id)?)
            }
            ReportType::CumulativeFlow => serde_json::to_value(
                ReportSeriesRepo::cumulative_flow_for_board(conn, report.board_id)?,
            ),
            ReportType::UserProductivity => {
                serde_json::to_value(self.get_user_analytics(conn, report.board_id)?)
            }
            ReportType::Generic => serde_json::to_value(self.get_board_analytics(
                conn,
                report.board_id,
                &AnalyticsQuery::default(),
            )?),
        }
        .map_err(|e| AppError::internal(format!("Failed to encode report data: {}", e)))?;

        let updated = ReportRepo::store_generated_data(conn, report.id, generated)?;
        tracing::info!("Regenerated data for report {}", report_id);
        Ok(updated)
    }

    /// Fixed, ordered rule list. Each rule yields at most one insight and
    /// the rules are independent of each other.
    pub fn build_insights(&self, overview: &BoardOverview) -> Vec<Insight> {
        let mut insights = Vec::new();

        if overview.in_progress_issues > self.thresholds.wip_threshold {
            insights.push(Insight {
                severity: InsightSeverity::Warning,
                code: "wip_exceeded",
                message: format!(
                    "High workload: {} issues are in progress",
                    overview.in_progress_issues
                ),
            });
        }

        if overview.overdue_issues > self.thresholds.overdue_threshold {
            insights.push(Insight {
                severity: InsightSeverity::Error,
                code: "overdue_issues",
                message: format!("{} overdue issues need attention", overview.overdue_issues),
            });
        }

        if overview.completion_rate < self.thresholds.completion_rate_floor {
            insights.push(Insight {
                severity: InsightSeverity::Warning,
                code: "low_completion_rate",
                message: format!("Completion rate is at {:.2}%", overview.completion_rate),
            });
        }

        if overview.average_resolution_time > self.thresholds.resolution_days_ceiling {
            insights.push(Insight {
                severity: InsightSeverity::Info,
                code: "slow_resolution",
                message: format!(
                    "Issues take {:.2} days on average to resolve",
                    overview.average_resolution_time
                ),
            });
        }

        insights
    }
}

fn load_board_issues(
    conn: &mut PgConnection,
    board_id: uuid::Uuid,
) -> Result<(crate::db::models::board::Board, Vec<Issue>), AppError> {
    let board =
        BoardRepo::find_by_id(conn, board_id)?.ok_or_else(|| AppError::not_found("board"))?;
    let issues = IssueRepo::list_by_project(conn, board.project_id)?;
    Ok((board, issues))
}

pub fn compute_overview(issues: &[Issue], now: chrono::DateTime<chrono::Utc>) -> BoardOverview {
    let total_issues = issues.len() as i64;
    let completed_issues = issues
        .iter()
        .filter(|i| i.status == IssueStatus::Done)
        .count() as i64;
    let in_progress_issues = issues
        .iter()
        .filter(|i| i.status == IssueStatus::InProgress)
        .count() as i64;
    let pending_issues = issues
        .iter()
        .filter(|i| matches!(i.status, IssueStatus::Backlog | IssueStatus::Todo))
        .count() as i64;
    let overdue_issues = issues.iter().filter(|i| is_overdue(i, now)).count() as i64;

    let completion_rate = if total_issues > 0 {
        round2(completed_issues as f64 / total_issues as f64 * 100.0)
    } else {
        0.0
    };

    let resolution_days: Vec<f64> = issues
        .iter()
        .filter(|i| i.status == IssueStatus::Done)
        .filter_map(|i| i.resolved_at.map(|at| (at - i.created_at).num_seconds()))
        .map(|secs| secs as f64 / SECONDS_PER_DAY)
        .collect();
    let average_resolution_time = if resolution_days.is_empty() {
        0.0
    } else {
        round2(resolution_days.iter().sum::<f64>() / resolution_days.len() as f64)
    };

    BoardOverview {
        total_issues,
        completed_issues,
        in_progress_issues,
        pending_issues,
        overdue_issues,
        completion_rate,
        average_resolution_time,
        // Completed count stands in for a true flow rate.
        throughput: completed_issues,
    }
}

pub fn is_overdue(issue: &Issue, now: chrono::DateTime<chrono::Utc>) -> bool {
    issue.status != IssueStatus::Done && matches!(issue.due_date, Some(due) if due < now)
}

pub fn compute_column_analytics(
    columns: &[BoardColumn],
    issues: &[Issue],
) -> Vec<ColumnAnalytics> {
    columns
        .iter()
        .map(|column| {
            let issue_count = issues.iter().filter(|i| i.status == column.status).count() as i64;

            let wip_utilization = match column.wip_limit {
                Some(limit) if limit > 0 => round2(issue_count as f64 / limit as f64 * 100.0),
                _ => 0.0,
            };

            let average_time_in_column = if issue_count > 0 {
                AVERAGE_COLUMN_DWELL_DAYS
            } else {
                0.0
            };

            let bottleneck_score = if wip_utilization > 80.0 {
                wip_utilization.min(90.0)
            } else {
                wip_utilization
            };

            ColumnAnalytics {
                column_id: column.id,
                name: column.name.clone(),
                status: column.status.clone(),
                issue_count,
                wip_limit: column.wip_limit,
                wip_utilization,
                average_time_in_column,
                bottleneck_score,
            }
        })
        .collect()
}

/// Groups issues by assignee in first-seen order. Unassigned issues are
/// excluded entirely. `user_name` is left for the caller to resolve.
pub fn compute_user_analytics(issues: &[Issue]) -> Vec<UserAnalytics> {
    let mut grouped: Vec<(uuid::Uuid, Vec<&Issue>)> = Vec::new();
    for issue in issues {
        if let Some(assignee_id) = issue.assignee_id {
            match grouped.iter_mut().find(|(id, _)| *id == assignee_id) {
                Some((_, list)) => list.push(issue),
                None => grouped.push((assignee_id, vec![issue])),
            }
        }
    }

    grouped
        .into_iter()
        .map(|(user_id, assigned)| {
            let issues_assigned = assigned.len() as i64;
            let issues_completed = assigned
                .iter()
                .filter(|i| i.status == IssueStatus::Done)
                .count() as i64;

            let resolution_days: Vec<f64> = assigned
                .iter()
                .filter(|i| i.status == IssueStatus::Done)
                .filter_map(|i| i.resolved_at.map(|at| (at - i.created_at).num_seconds()))
                .map(|secs| secs as f64 / SECONDS_PER_DAY)
                .collect();
            let average_resolution_time = if resolution_days.is_empty() {
                0.0
            } else {
                round2(resolution_days.iter().sum::<f64>() / resolution_days.len() as f64)
            };

            let productivity_score = round2(
                (issues_completed as f64 / issues_assigned as f64 * 100.0).min(100.0),
            );

            UserAnalytics {
                user_id,
                user_name: None,
                issues_assigned,
                issues_completed,
                average_resolution_time,
                productivity_score,
                collaboration_score: DEFAULT_COLLABORATION_SCORE,
            }
        })
        .collect()
}

/// Days with no snapshot are absent from every series; nothing is
/// zero-filled.
pub fn build_trends(snapshots: &[BoardMetric]) -> BoardTrends {
    let mut issues = Vec::with_capacity(snapshots.len());
    let mut velocity = Vec::with_capacity(snapshots.len());
    let mut cycle_time = Vec::with_capacity(snapshots.len());

    for snapshot in snapshots {
        let date = snapshot.metric_date.format("%Y-%m-%d").to_string();
        issues.push(IssueTrendPoint {
            date: date.clone(),
            created: snapshot.issues_created,
            completed: snapshot.issues_completed,
        });
        velocity.push(VelocityPoint {
            date: date.clone(),
            completed: snapshot.throughput,
        });
        cycle_time.push(CycleTimePoint {
            date,
            days: snapshot.cycle_time,
        });
    }

    BoardTrends {
        issues,
        velocity,
        cycle_time,
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
