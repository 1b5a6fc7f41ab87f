use diesel::prelude::*;

use crate::db::models::metrics::{BoardMetric, UpsertBoardMetric};

pub struct MetricsRepo;

impl MetricsRepo {
    /// Single-statement upsert keyed on (board_id, metric_date). A second
    /// refresh on the same day overwrites the earlier snapshot instead of
    /// failing on the unique index.
    pub fn upsert_daily(
        conn: &mut PgConnection,
        row: &UpsertBoardMetric,
    ) -> Result<BoardMetric, diesel::result::Error> {
        use crate::schema::board_metrics::dsl::*;
        diesel::insert_into(board_metrics)
            .values(row)
            .on_conflict((board_id, metric_date))
            .do_update()
            .set((row, updated_at.eq(chrono::Utc::now())))
            .get_result::<BoardMetric>(conn)
    }

    pub fn list_range(
        conn: &mut PgConnection,
        target_board_id: uuid::Uuid,
        start: chrono::NaiveDate,
        end: chrono::NaiveDate,
    ) -> Result<Vec<BoardMetric>, diesel::result::Error> {
        use crate::schema::board_metrics::dsl::*;
        board_metrics
            .filter(board_id.eq(target_board_id))
            .filter(metric_date.ge(start))
            .filter(metric_date.le(end))
            .order(metric_date.asc())
            .load::<BoardMetric>(conn)
    }
}
