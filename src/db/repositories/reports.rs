use diesel::prelude::*;

use crate::db::models::report::{BoardReport, NewBoardReport};

pub struct ReportRepo;

impl ReportRepo {
    pub fn find_by_id(
        conn: &mut PgConnection,
        report_id: uuid::Uuid,
    ) -> Result<Option<BoardReport>, diesel::result::Error> {
        use crate::schema::board_reports::dsl::*;
        board_reports
            .filter(id.eq(report_id))
            .first::<BoardReport>(conn)
            .optional()
    }

    /// Reports a user may see on a board: public ones plus their own private
    /// ones, newest first.
    pub fn list_visible(
        conn: &mut PgConnection,
        target_board_id: uuid::Uuid,
        viewer_id: uuid::Uuid,
    ) -> Result<Vec<BoardReport>, diesel::result::Error> {
        use crate::schema::board_reports::dsl::*;
        board_reports
            .filter(board_id.eq(target_board_id))
            .filter(is_public.eq(true).or(created_by_id.eq(viewer_id)))
            .order(created_at.desc())
            .load::<BoardReport>(conn)
    }

    pub fn insert(
        conn: &mut PgConnection,
        new_report: &NewBoardReport,
    ) -> Result<BoardReport, diesel::result::Error> {
        use crate::schema::board_reports::dsl::*;
        diesel::insert_into(board_reports)
            .values(new_report)
            .get_result::<BoardReport>(conn)
    }

    /// Last write wins when two generations of the same report finish close
    /// together.
    pub fn store_generated_data(
        conn: &mut PgConnection,
        report_id: uuid::Uuid,
        generated: serde_json::Value,
    ) -> Result<BoardReport, diesel::result::Error> {
        use crate::schema::board_reports::dsl::*;
        let now = chrono::Utc::now();
        diesel::update(board_reports.filter(id.eq(report_id)))
            .set((
                data.eq(Some(generated)),
                last_generated.eq(Some(now)),
                updated_at.eq(now),
            ))
            .get_result::<BoardReport>(conn)
    }
}
