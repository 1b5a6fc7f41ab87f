use diesel::prelude::*;

use crate::{
    db::enums::{IssueStatus, SwimlaneType},
    db::models::issue::Issue,
    db::models::swimlane::{
        GROUP_COLOR_PALETTE, NewSwimlane, NewSwimlaneGroup, Swimlane, SwimlaneGroup,
        SwimlaneGroupCount, SwimlaneStats, SwimlaneUserSetting, UpdateSwimlane,
        UpdateSwimlaneGroup, UpsertSwimlaneUserSetting, UserSwimlanePrefs,
        default_group_settings, default_swimlane_settings, priority_group_color,
    },
    db::repositories::boards::BoardRepo,
    db::repositories::issues::IssueRepo,
    db::repositories::swimlane_groups::SwimlaneGroupRepo,
    db::repositories::swimlanes::SwimlaneRepo,
    db::repositories::user_settings::UserSettingsRepo,
    db::repositories::users::UserRepo,
    error::AppError,
    validation::swimlane::{
        CreateSwimlaneGroupRequest, CreateSwimlaneRequest, SwimlaneMove, UpdateSwimlaneGroupRequest,
        UpdateSwimlaneRequest, UpsertUserSettingsRequest,
    },
};

pub struct SwimlanesService;

impl SwimlanesService {
    pub fn create_swimlane(
        conn: &mut PgConnection,
        req: &CreateSwimlaneRequest,
    ) -> Result<Swimlane, AppError> {
        let _board = BoardRepo::find_by_id(conn, req.board_id)?
            .ok_or_else(|| AppError::not_found("board"))?;

        let group_by = req
            .field
            .clone()
            .unwrap_or_else(|| req.swimlane_type.as_str().to_string());
        let settings = req
            .settings
            .clone()
            .unwrap_or_else(|| default_swimlane_settings(&group_by));

        let new_swimlane = NewSwimlane {
            board_id: req.board_id,
            name: req.name.clone(),
            swimlane_type: req.swimlane_type.clone(),
            field: req.field.clone(),
            color: req
                .color
                .clone()
                .unwrap_or_else(|| GROUP_COLOR_PALETTE[0].to_string()),
            position: req.position,
            is_visible: req.is_visible.unwrap_or(true),
            settings,
        };
        let created = SwimlaneRepo::insert(conn, &new_swimlane)?;
        tracing::info!("Created swimlane {} on board {}", created.id, req.board_id);
        Ok(created)
    }

    /// Hidden swimlanes never appear here, whatever their position.
    pub fn get_board_swimlanes(
        conn: &mut PgConnection,
        board_id: uuid::Uuid,
    ) -> Result<Vec<Swimlane>, AppError> {
        let _board =
            BoardRepo::find_by_id(conn, board_id)?.ok_or_else(|| AppError::not_found("board"))?;
        let lanes = SwimlaneRepo::list_visible_by_board(conn, board_id)?;
        Ok(lanes)
    }

    pub fn get_swimlane_by_id(
        conn: &mut PgConnection,
        swimlane_id: uuid::Uuid,
    ) -> Result<Swimlane, AppError> {
        let swimlane = SwimlaneRepo::find_by_id(conn, swimlane_id)?
            .ok_or_else(|| AppError::not_found("swimlane"))?;
        Ok(swimlane)
    }

    pub fn update_swimlane(
        conn: &mut PgConnection,
        swimlane_id: uuid::Uuid,
        req: &UpdateSwimlaneRequest,
    ) -> Result<Swimlane, AppError> {
        let _existing = SwimlaneRepo::find_by_id(conn, swimlane_id)?
            .ok_or_else(|| AppError::not_found("swimlane"))?;

        let changes = UpdateSwimlane {
            name: req.name.clone(),
            field: req.field.clone().map(Some),
            color: req.color.clone(),
            position: req.position,
            is_visible: req.is_visible,
            settings: req.settings.clone(),
        };
        let updated = SwimlaneRepo::update(conn, swimlane_id, &changes)?;
        tracing::info!("Updated swimlane {}", swimlane_id);
        Ok(updated)
    }

    pub fn delete_swimlane(
        conn: &mut PgConnection,
        swimlane_id: uuid::Uuid,
    ) -> Result<(), AppError> {
        let _existing = SwimlaneRepo::find_by_id(conn, swimlane_id)?
            .ok_or_else(|| AppError::not_found("swimlane"))?;

        SwimlaneRepo::delete_by_id(conn, swimlane_id)?;
        tracing::info!("Deleted swimlane {}", swimlane_id);
        Ok(())
    }

    /// Applies each move independently. Not atomic: a mid-batch failure
    /// leaves the earlier moves applied. Ids outside the board are ignored.
    pub fn reorder_swimlanes(
        conn: &mut PgConnection,
        board_id: uuid::Uuid,
        moves: &[SwimlaneMove],
    ) -> Result<(), AppError> {
        let _board =
            BoardRepo::find_by_id(conn, board_id)?.ok_or_else(|| AppError::not_found("board"))?;

        for entry in moves {
            SwimlaneRepo::update_position(conn, board_id, entry.swimlane_id, entry.position)?;
        }
        tracing::info!("Reordered {} swimlanes on board {}", moves.len(), board_id);
        Ok(())
    }

    /// Missing row reads as the defaults; nothing is inserted on read.
    pub fn get_user_settings(
        conn: &mut PgConnection,
        user_id: uuid::Uuid,
        board_id: uuid::Uuid,
        swimlane_id: uuid::Uuid,
    ) -> Result<UserSwimlanePrefs, AppError> {
        let found = UserSettingsRepo::find(conn, user_id, board_id, swimlane_id)?;
        Ok(found.map(UserSwimlanePrefs::from).unwrap_or_default())
    }

    pub fn update_user_settings(
        conn: &mut PgConnection,
        user_id: uuid::Uuid,
        swimlane_id: uuid::Uuid,
        req: &UpsertUserSettingsRequest,
    ) -> Result<UserSwimlanePrefs, AppError> {
        let swimlane = SwimlaneRepo::find_by_id(conn, swimlane_id)?
            .ok_or_else(|| AppError::not_found("swimlane"))?;

        let row = UpsertSwimlaneUserSetting {
            user_id,
            board_id: swimlane.board_id,
            swimlane_id,
            is_collapsed: req.is_collapsed,
            settings: req
                .settings
                .clone()
                .unwrap_or_else(|| serde_json::json!({})),
        };
        let saved: SwimlaneUserSetting = UserSettingsRepo::upsert(conn, &row)?;
        Ok(saved.into())
    }

    pub fn create_swimlane_group(
        conn: &mut PgConnection,
        swimlane_id: uuid::Uuid,
        req: &CreateSwimlaneGroupRequest,
    ) -> Result<SwimlaneGroup, AppError> {
        let _swimlane = SwimlaneRepo::find_by_id(conn, swimlane_id)?
            .ok_or_else(|| AppError::not_found("swimlane"))?;

        let color = match &req.color {
            Some(color) => color.clone(),
            None => {
                let existing = SwimlaneGroupRepo::list_by_swimlane(conn, swimlane_id)?;
                GROUP_COLOR_PALETTE[existing.len() % GROUP_COLOR_PALETTE.len()].to_string()
            }
        };

        let new_group = NewSwimlaneGroup {
            swimlane_id,
            name: req.name.clone(),
            value: req.value.clone(),
            color,
            position: req.position,
            is_visible: req.is_visible.unwrap_or(true),
            settings: req.settings.clone().unwrap_or_else(default_group_settings),
        };
        let created = SwimlaneGroupRepo::insert(conn, &new_group)?;
        tracing::info!("Created group {} under swimlane {}", created.id, swimlane_id);
        Ok(created)
    }

    pub fn get_swimlane_groups(
        conn: &mut PgConnection,
        swimlane_id: uuid::Uuid,
    ) -> Result<Vec<SwimlaneGroup>, AppError> {
        let _swimlane = SwimlaneRepo::find_by_id(conn, swimlane_id)?
            .ok_or_else(|| AppError::not_found("swimlane"))?;
        let groups = SwimlaneGroupRepo::list_by_swimlane(conn, swimlane_id)?;
        Ok(groups)
    }

    pub fn update_swimlane_group(
        conn: &mut PgConnection,
        group_id: uuid::Uuid,
        req: &UpdateSwimlaneGroupRequest,
    ) -> Result<SwimlaneGroup, AppError> {
        let _existing = SwimlaneGroupRepo::find_by_id(conn, group_id)?
            .ok_or_else(|| AppError::not_found("swimlane group"))?;

        let changes = UpdateSwimlaneGroup {
            name: req.name.clone(),
            value: req.value.clone(),
            color: req.color.clone(),
            position: req.position,
            is_visible: req.is_visible,
            settings: req.settings.clone(),
        };
        let updated = SwimlaneGroupRepo::update(conn, group_id, &changes)?;
        tracing::info!("Updated swimlane group {}", group_id);
        Ok(updated)
    }

    pub fn delete_swimlane_group(
        conn: &mut PgConnection,
        group_id: uuid::Uuid,
    ) -> Result<(), AppError> {
        let _existing = SwimlaneGroupRepo::find_by_id(conn, group_id)?
            .ok_or_else(|| AppError::not_found("swimlane group"))?;

        SwimlaneGroupRepo::delete_by_id(conn, group_id)?;
        tracing::info!("Deleted swimlane group {}", group_id);
        Ok(())
    }

    pub fn get_swimlane_stats(
        conn: &mut PgConnection,
        swimlane_id: uuid::Uuid,
    ) -> Result<SwimlaneStats, AppError> {
        let swimlane = SwimlaneRepo::find_by_id(conn, swimlane_id)?
            .ok_or_else(|| AppError::not_found("swimlane"))?;
        let board = BoardRepo::find_by_id(conn, swimlane.board_id)?
            .ok_or_else(|| AppError::not_found("board"))?;
        let issues = IssueRepo::list_by_project(conn, board.project_id)?;

        // Totals intentionally cover the whole board; only the per-group
        // breakdown below is partitioned by swimlane value.
        let total_issues = issues.len() as i64;
        let completed_issues = issues
            .iter()
            .filter(|i| i.status == IssueStatus::Done)
            .count() as i64;
        let in_progress_issues = issues
            .iter()
            .filter(|i| i.status == IssueStatus::InProgress)
            .count() as i64;

        let groups = SwimlaneGroupRepo::list_by_swimlane(conn, swimlane_id)?;
        let issues_by_group = groups
            .into_iter()
            .map(|group| {
                let issue_count = issues
                    .iter()
                    .filter(|issue| {
                        issue_group_value(issue, &swimlane.swimlane_type)
                            .is_some_and(|v| v == group.value)
                    })
                    .count() as i64;
                SwimlaneGroupCount {
                    group_id: group.id,
                    name: group.name,
                    value: group.value,
                    issue_count,
                }
            })
            .collect();

        Ok(SwimlaneStats {
            swimlane_id,
            total_issues,
            completed_issues,
            in_progress_issues,
            issues_by_group,
        })
    }

    /// Derives one group per distinct value of the swimlane's field across
    /// the board's issues, skipping values already covered. Idempotent: a
    /// second call finds everything covered and creates nothing. Types
    /// without an enumerable value space are a silent no-op.
    pub fn auto_create_groups(
        conn: &mut PgConnection,
        swimlane_id: uuid::Uuid,
    ) -> Result<Vec<SwimlaneGroup>, AppError> {
        let swimlane = SwimlaneRepo::find_by_id(conn, swimlane_id)?
            .ok_or_else(|| AppError::not_found("swimlane"))?;

        if !swimlane.swimlane_type.supports_auto_groups() {
            return Ok(Vec::new());
        }

        let board = BoardRepo::find_by_id(conn, swimlane.board_id)?
            .ok_or_else(|| AppError::not_found("board"))?;
        let issues = IssueRepo::list_by_project(conn, board.project_id)?;
        let existing = SwimlaneGroupRepo::list_by_swimlane(conn, swimlane_id)?;
        let covered: Vec<&str> = existing.iter().map(|g| g.value.as_str()).collect();

        let distinct = missing_group_values(&issues, &swimlane.swimlane_type, &covered);
        if distinct.is_empty() {
            return Ok(Vec::new());
        }

        let names = resolve_group_names(conn, &swimlane.swimlane_type, &distinct, &issues)?;

        let next_position = existing
            .iter()
            .map(|g| g.position)
            .max()
            .map(|p| p + 1)
            .unwrap_or(0);

        let new_groups: Vec<NewSwimlaneGroup> = distinct
            .iter()
            .zip(names)
            .enumerate()
            .map(|(idx, (value, name))| {
                let color = match swimlane.swimlane_type {
                    SwimlaneType::Priority => priority_group_color(value).to_string(),
                    _ => GROUP_COLOR_PALETTE[(existing.len() + idx) % GROUP_COLOR_PALETTE.len()]
                        .to_string(),
                };
                NewSwimlaneGroup {
                    swimlane_id,
                    name,
                    value: value.clone(),
                    color,
                    position: next_position + idx as i32,
                    is_visible: true,
                    settings: default_group_settings(),
                }
            })
            .collect();

        let created = SwimlaneGroupRepo::insert_batch(conn, &new_groups)?;
        tracing::info!(
            "Auto-created {} groups for swimlane {}",
            created.len(),
            swimlane_id
        );
        Ok(created)
    }
}

/// The issue field a swimlane of the given kind partitions by, rendered as
/// the string stored in `SwimlaneGroup.value`. `Custom` lanes have no
/// matchable field and always yield `None`.
pub fn issue_group_value(issue: &Issue, lane_type: &SwimlaneType) -> Option<String> {
    match lane_type {
        SwimlaneType::Assignee => issue.assignee_id.map(|id| id.to_string()),
        SwimlaneType::Epic => issue.epic_id.map(|id| id.to_string()),
        SwimlaneType::Priority => Some(issue.priority.as_str().to_string()),
        SwimlaneType::Component => issue.component_id.map(|id| id.to_string()),
        SwimlaneType::FixVersion => issue.fix_version_id.map(|id| id.to_string()),
        SwimlaneType::Custom => None,
    }
}

/// Distinct field values observed across `issues` that do not yet have a
/// group, in first-seen order.
pub fn missing_group_values(
    issues: &[Issue],
    lane_type: &SwimlaneType,
    covered: &[&str],
) -> Vec<String> {
    let mut distinct: Vec<String> = Vec::new();
    for issue in issues {
        if let Some(value) = issue_group_value(issue, lane_type) {
            if !covered.contains(&value.as_str()) && !distinct.contains(&value) {
                distinct.push(value);
            }
        }
    }
    distinct
}

fn resolve_group_names(
    conn: &mut PgConnection,
    lane_type: &SwimlaneType,
    values: &[String],
    issues: &[Issue],
) -> Result<Vec<String>, AppError> {
    let names = match lane_type {
        SwimlaneType::Assignee => {
            let ids: Vec<uuid::Uuid> = values
                .iter()
                .filter_map(|v| uuid::Uuid::parse_str(v).ok())
                .collect();
            let users = UserRepo::list_by_ids(conn, &ids)?;
            values
                .iter()
                .map(|value| {
                    users
                        .iter()
                        .find(|u| u.id.to_string() == *value)
                        .map(|u| u.name.clone())
                        .unwrap_or_else(|| value.clone())
                })
                .collect()
        }
        // Epics live in the issue table, so the board's own issues carry
        // their titles.
        SwimlaneType::Epic => values
            .iter()
            .map(|value| {
                issues
                    .iter()
                    .find(|i| i.id.to_string() == *value)
                    .map(|i| i.title.clone())
                    .unwrap_or_else(|| value.clone())
            })
            .collect(),
        SwimlaneType::Priority => values.iter().map(|v| capitalize(v)).collect(),
        _ => values.to_vec(),
    };
    Ok(names)
}

pub fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
