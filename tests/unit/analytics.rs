use chrono::{Duration, NaiveDate, Utc};
use taskboard_backend::db::enums::{IssueStatus, ReportType};
use taskboard_backend::db::models::analytics::{BoardOverview, InsightSeverity};
use taskboard_backend::db::models::board::BoardColumn;
use taskboard_backend::db::models::metrics::BoardMetric;
use taskboard_backend::services::analytics_service::{
    self, AVERAGE_COLUMN_DWELL_DAYS, AnalyticsService, DEFAULT_COLLABORATION_SCORE,
    InsightThresholds,
};
use uuid::Uuid;

use super::{resolved_issue, test_issue};

fn column(name: &str, status: IssueStatus, wip_limit: Option<i32>) -> BoardColumn {
    let now = Utc::now();
    BoardColumn {
        id: Uuid::new_v4(),
        board_id: Uuid::new_v4(),
        name: name.to_string(),
        status,
        wip_limit,
        position: 0,
        created_at: now,
        updated_at: now,
    }
}

fn overview(in_progress: i64, overdue: i64, completion_rate: f64, resolution: f64) -> BoardOverview {
    BoardOverview {
        total_issues: 20,
        completed_issues: 5,
        in_progress_issues: in_progress,
        pending_issues: 3,
        overdue_issues: overdue,
        completion_rate,
        average_resolution_time: resolution,
        throughput: 5,
    }
}

fn snapshot(date: NaiveDate, created: i32, completed: i32, throughput: i32, cycle: f64) -> BoardMetric {
    let now = Utc::now();
    BoardMetric {
        id: Uuid::new_v4(),
        board_id: Uuid::new_v4(),
        metric_date: date,
        total_issues: 10,
        completed_issues: 4,
        in_progress_issues: 2,
        pending_issues: 4,
        overdue_issues: 0,
        issues_created: created,
        issues_completed: completed,
        average_resolution_time: cycle,
        cycle_time: cycle,
        throughput,
        created_at: now,
        updated_at: now,
    }
}

#[test]
fn overview_on_empty_board_is_all_zero() {
    let overview = analytics_service::compute_overview(&[], Utc::now());

    assert_eq!(overview.total_issues, 0);
    assert_eq!(overview.completed_issues, 0);
    assert_eq!(overview.in_progress_issues, 0);
    assert_eq!(overview.pending_issues, 0);
    assert_eq!(overview.overdue_issues, 0);
    assert_eq!(overview.completion_rate, 0.0);
    assert_eq!(overview.average_resolution_time, 0.0);
    assert_eq!(overview.throughput, 0);
}

#[test]
fn completion_rate_is_completed_over_total() {
    let mut issues = Vec::new();
    for _ in 0..3 {
        issues.push(resolved_issue(1));
    }
    for _ in 0..7 {
        issues.push(test_issue(IssueStatus::Todo));
    }

    let overview = analytics_service::compute_overview(&issues, Utc::now());
    assert_eq!(overview.completion_rate, 30.0);

    // Rounded to two decimals, not truncated
    let issues = vec![
        resolved_issue(1),
        test_issue(IssueStatus::Todo),
        test_issue(IssueStatus::Todo),
    ];
    let overview = analytics_service::compute_overview(&issues, Utc::now());
    assert_eq!(overview.completion_rate, 33.33);
}

#[test]
fn pending_counts_backlog_and_todo() {
    let issues = vec![
        test_issue(IssueStatus::Backlog),
        test_issue(IssueStatus::Todo),
        test_issue(IssueStatus::InProgress),
        resolved_issue(1),
    ];

    let overview = analytics_service::compute_overview(&issues, Utc::now());
    assert_eq!(overview.pending_issues, 2);
    assert_eq!(overview.in_progress_issues, 1);
    assert_eq!(overview.completed_issues, 1);
}

#[test]
fn overdue_requires_open_status_and_past_due() {
    let now = Utc::now();

    let mut open_late = test_issue(IssueStatus::Todo);
    open_late.due_date = Some(now - Duration::days(1));
    assert!(analytics_service::is_overdue(&open_late, now));

    // A done issue is never overdue, however late it was
    let mut done_late = resolved_issue(5);
    done_late.due_date = Some(now - Duration::days(10));
    assert!(!analytics_service::is_overdue(&done_late, now));

    let mut open_early = test_issue(IssueStatus::InProgress);
    open_early.due_date = Some(now + Duration::days(1));
    assert!(!analytics_service::is_overdue(&open_early, now));

    let no_due = test_issue(IssueStatus::Todo);
    assert!(!analytics_service::is_overdue(&no_due, now));
}

#[test]
fn resolution_time_averages_only_resolved_done_issues() {
    let overview = analytics_service::compute_overview(&[test_issue(IssueStatus::Todo)], Utc::now());
    assert_eq!(overview.average_resolution_time, 0.0);

    // Done without a resolved_at timestamp contributes nothing
    let mut unresolved_done = test_issue(IssueStatus::Done);
    unresolved_done.resolved_at = None;

    let issues = vec![resolved_issue(2), resolved_issue(4), unresolved_done];
    let overview = analytics_service::compute_overview(&issues, Utc::now());
    assert_eq!(overview.average_resolution_time, 3.0);
}

#[test]
fn throughput_matches_completed_count() {
    let issues = vec![
        resolved_issue(1),
        resolved_issue(2),
        test_issue(IssueStatus::InProgress),
    ];

    let overview = analytics_service::compute_overview(&issues, Utc::now());
    assert_eq!(overview.throughput, 2);
    assert_eq!(overview.throughput, overview.completed_issues);
}

#[test]
fn overview_full_board_scenario() {
    let now = Utc::now();
    let mut overdue = test_issue(IssueStatus::InProgress);
    overdue.due_date = Some(now - Duration::days(2));

    let issues = vec![
        resolved_issue(1),
        resolved_issue(3),
        overdue,
        test_issue(IssueStatus::InProgress),
        test_issue(IssueStatus::Todo),
    ];

    let overview = analytics_service::compute_overview(&issues, now);
    assert_eq!(overview.total_issues, 5);
    assert_eq!(overview.completed_issues, 2);
    assert_eq!(overview.in_progress_issues, 2);
    assert_eq!(overview.pending_issues, 1);
    assert_eq!(overview.overdue_issues, 1);
    assert_eq!(overview.completion_rate, 40.0);
    assert_eq!(overview.average_resolution_time, 2.0);
    assert_eq!(overview.throughput, 2);
}

#[test]
fn wip_insight_fires_only_above_threshold() {
    let service = AnalyticsService::new(InsightThresholds::default());

    let at_threshold = service.build_insights(&overview(10, 0, 60.0, 1.0));
    assert!(!at_threshold.iter().any(|i| i.code == "wip_exceeded"));

    let above = service.build_insights(&overview(11, 0, 60.0, 1.0));
    let insight = above
        .iter()
        .find(|i| i.code == "wip_exceeded")
        .expect("insight should fire above the threshold");
    assert_eq!(insight.severity, InsightSeverity::Warning);
    assert!(insight.message.contains("11"));
}

#[test]
fn overdue_insight_fires_above_zero_by_default() {
    let service = AnalyticsService::new(InsightThresholds::default());

    let none = service.build_insights(&overview(1, 0, 60.0, 1.0));
    assert!(!none.iter().any(|i| i.code == "overdue_issues"));

    let one = service.build_insights(&overview(1, 1, 60.0, 1.0));
    let insight = one
        .iter()
        .find(|i| i.code == "overdue_issues")
        .expect("insight should fire with one overdue issue");
    assert_eq!(insight.severity, InsightSeverity::Error);
}

#[test]
fn completion_rate_insight_is_strictly_below_floor() {
    let service = AnalyticsService::new(InsightThresholds::default());

    let at_floor = service.build_insights(&overview(1, 0, 50.0, 1.0));
    assert!(!at_floor.iter().any(|i| i.code == "low_completion_rate"));

    let below = service.build_insights(&overview(1, 0, 49.99, 1.0));
    let insight = below
        .iter()
        .find(|i| i.code == "low_completion_rate")
        .expect("insight should fire below the floor");
    assert_eq!(insight.severity, InsightSeverity::Warning);
    assert!(insight.message.contains("49.99"));
}

#[test]
fn slow_resolution_insight_is_strictly_above_ceiling() {
    let service = AnalyticsService::new(InsightThresholds::default());

    let at_ceiling = service.build_insights(&overview(1, 0, 60.0, 7.0));
    assert!(!at_ceiling.iter().any(|i| i.code == "slow_resolution"));

    let above = service.build_insights(&overview(1, 0, 60.0, 7.01));
    let insight = above
        .iter()
        .find(|i| i.code == "slow_resolution")
        .expect("insight should fire above the ceiling");
    assert_eq!(insight.severity, InsightSeverity::Info);
}

#[test]
fn empty_board_still_reports_low_completion_rate() {
    let service = AnalyticsService::new(InsightThresholds::default());
    let overview = analytics_service::compute_overview(&[], Utc::now());

    let insights = service.build_insights(&overview);
    assert_eq!(insights.len(), 1);
    assert_eq!(insights[0].code, "low_completion_rate");
}

#[test]
fn insights_keep_rule_order() {
    let service = AnalyticsService::new(InsightThresholds::default());
    let insights = service.build_insights(&overview(15, 3, 10.0, 12.0));

    let codes: Vec<&str> = insights.iter().map(|i| i.code).collect();
    assert_eq!(
        codes,
        vec![
            "wip_exceeded",
            "overdue_issues",
            "low_completion_rate",
            "slow_resolution"
        ]
    );
}

#[test]
fn insight_thresholds_come_from_configuration() {
    let service = AnalyticsService::new(InsightThresholds {
        wip_threshold: 2,
        overdue_threshold: 5,
        completion_rate_floor: 50.0,
        resolution_days_ceiling: 7.0,
    });

    let insights = service.build_insights(&overview(3, 5, 60.0, 1.0));
    assert!(insights.iter().any(|i| i.code == "wip_exceeded"));
    assert!(!insights.iter().any(|i| i.code == "overdue_issues"));
}

#[test]
fn wip_utilization_needs_a_positive_limit() {
    let issues = vec![
        test_issue(IssueStatus::InProgress),
        test_issue(IssueStatus::InProgress),
    ];

    let columns = vec![
        column("Doing", IssueStatus::InProgress, None),
        column("Doing", IssueStatus::InProgress, Some(0)),
        column("Doing", IssueStatus::InProgress, Some(4)),
    ];
    let stats = analytics_service::compute_column_analytics(&columns, &issues);

    assert_eq!(stats[0].wip_utilization, 0.0);
    assert_eq!(stats[1].wip_utilization, 0.0);
    assert_eq!(stats[2].wip_utilization, 50.0);
}

#[test]
fn bottleneck_score_caps_high_utilization_at_ninety() {
    let issues: Vec<_> = (0..10).map(|_| test_issue(IssueStatus::InProgress)).collect();

    // 10 of 10: utilization 100, capped to 90
    let full = analytics_service::compute_column_analytics(
        &[column("Doing", IssueStatus::InProgress, Some(10))],
        &issues,
    );
    assert_eq!(full[0].wip_utilization, 100.0);
    assert_eq!(full[0].bottleneck_score, 90.0);

    // 10 of 12: utilization 83.33, above 80 but already under the cap
    let above = analytics_service::compute_column_analytics(
        &[column("Doing", IssueStatus::InProgress, Some(12))],
        &issues,
    );
    assert_eq!(above[0].wip_utilization, 83.33);
    assert_eq!(above[0].bottleneck_score, 83.33);

    // 8 of 10: utilization exactly 80 passes through untouched
    let at_eighty = analytics_service::compute_column_analytics(
        &[column("Doing", IssueStatus::InProgress, Some(10))],
        &issues[..8],
    );
    assert_eq!(at_eighty[0].wip_utilization, 80.0);
    assert_eq!(at_eighty[0].bottleneck_score, 80.0);
}

#[test]
fn column_dwell_time_is_flat_estimate() {
    let issues = vec![test_issue(IssueStatus::InProgress)];
    let columns = vec![
        column("Doing", IssueStatus::InProgress, None),
        column("Done", IssueStatus::Done, None),
    ];

    let stats = analytics_service::compute_column_analytics(&columns, &issues);
    assert_eq!(stats[0].average_time_in_column, AVERAGE_COLUMN_DWELL_DAYS);
    assert_eq!(stats[1].average_time_in_column, 0.0);
}

#[test]
fn column_issue_counts_group_by_status() {
    let issues = vec![
        test_issue(IssueStatus::Todo),
        test_issue(IssueStatus::Todo),
        test_issue(IssueStatus::InProgress),
    ];
    let columns = vec![
        column("To do", IssueStatus::Todo, None),
        column("Doing", IssueStatus::InProgress, None),
        column("Done", IssueStatus::Done, None),
    ];

    let stats = analytics_service::compute_column_analytics(&columns, &issues);
    assert_eq!(stats[0].issue_count, 2);
    assert_eq!(stats[1].issue_count, 1);
    assert_eq!(stats[2].issue_count, 0);
}

#[test]
fn user_analytics_skips_unassigned_issues() {
    let issues = vec![test_issue(IssueStatus::Todo), test_issue(IssueStatus::Done)];
    let stats = analytics_service::compute_user_analytics(&issues);
    assert!(stats.is_empty());
}

#[test]
fn user_analytics_groups_by_assignee_in_first_seen_order() {
    let first = Uuid::new_v4();
    let second = Uuid::new_v4();

    let mut a = test_issue(IssueStatus::Todo);
    a.assignee_id = Some(first);
    let mut b = test_issue(IssueStatus::Todo);
    b.assignee_id = Some(second);
    let mut c = resolved_issue(2);
    c.assignee_id = Some(first);

    let stats = analytics_service::compute_user_analytics(&[a, b, c]);
    assert_eq!(stats.len(), 2);
    assert_eq!(stats[0].user_id, first);
    assert_eq!(stats[0].issues_assigned, 2);
    assert_eq!(stats[0].issues_completed, 1);
    assert_eq!(stats[1].user_id, second);
    assert_eq!(stats[1].issues_assigned, 1);

    // Name resolution happens at the service layer, not here
    assert!(stats[0].user_name.is_none());
}

#[test]
fn productivity_score_caps_at_one_hundred() {
    let user = Uuid::new_v4();

    let mut all_done = resolved_issue(1);
    all_done.assignee_id = Some(user);
    let stats = analytics_service::compute_user_analytics(&[all_done]);
    assert_eq!(stats[0].productivity_score, 100.0);

    let mut done = resolved_issue(1);
    done.assignee_id = Some(user);
    let mut open = test_issue(IssueStatus::Todo);
    open.assignee_id = Some(user);
    let mut open2 = test_issue(IssueStatus::Todo);
    open2.assignee_id = Some(user);
    let mut open3 = test_issue(IssueStatus::Backlog);
    open3.assignee_id = Some(user);

    let stats = analytics_service::compute_user_analytics(&[done, open, open2, open3]);
    assert_eq!(stats[0].productivity_score, 25.0);
}

#[test]
fn collaboration_score_is_flat_for_now() {
    let mut issue = test_issue(IssueStatus::Todo);
    issue.assignee_id = Some(Uuid::new_v4());

    let stats = analytics_service::compute_user_analytics(&[issue]);
    assert_eq!(stats[0].collaboration_score, DEFAULT_COLLABORATION_SCORE);
}

#[test]
fn trends_skip_days_without_snapshots() {
    let first = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
    let fourth = NaiveDate::from_ymd_opt(2025, 3, 4).unwrap();
    let snapshots = vec![snapshot(first, 3, 1, 4, 2.5), snapshot(fourth, 0, 2, 6, 3.25)];

    let trends = analytics_service::build_trends(&snapshots);

    assert_eq!(trends.issues.len(), 2);
    assert_eq!(trends.issues[0].date, "2025-03-01");
    assert_eq!(trends.issues[0].created, 3);
    assert_eq!(trends.issues[0].completed, 1);
    assert_eq!(trends.issues[1].date, "2025-03-04");

    assert_eq!(trends.velocity.len(), 2);
    assert_eq!(trends.velocity[0].completed, 4);
    assert_eq!(trends.velocity[1].completed, 6);

    assert_eq!(trends.cycle_time.len(), 2);
    assert_eq!(trends.cycle_time[0].days, 2.5);
    assert_eq!(trends.cycle_time[1].days, 3.25);
}

#[test]
fn empty_snapshot_range_yields_empty_series() {
    let trends = analytics_service::build_trends(&[]);
    assert!(trends.issues.is_empty());
    assert!(trends.velocity.is_empty());
    assert!(trends.cycle_time.is_empty());
}

#[test]
fn every_report_type_is_listed() {
    let all = ReportType::all();
    assert_eq!(all.len(), 5);
    assert_eq!(ReportType::CumulativeFlow.as_str(), "cumulative_flow");
    assert_eq!(ReportType::Generic.label(), "Board Analytics");
}
