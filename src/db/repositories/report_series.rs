use diesel::prelude::*;

use crate::db::models::report::{BurndownEntry, CumulativeFlowEntry, VelocityEntry};

/// Read side of the sprint series tables. Rows are appended by the host
/// application's sprint tooling; report generation only ever reads them.
pub struct ReportSeriesRepo;

impl ReportSeriesRepo {
    pub fn burndown_for_board(
        conn: &mut PgConnection,
        target_board_id: uuid::Uuid,
    ) -> Result<Vec<BurndownEntry>, diesel::result::Error> {
        use crate::schema::burndown_data::dsl::*;
        burndown_data
            .filter(board_id.eq(target_board_id))
            .order(entry_date.asc())
            .load::<BurndownEntry>(conn)
    }

    pub fn velocity_for_board(
        conn: &mut PgConnection,
        target_board_id: uuid::Uuid,
    ) -> Result<Vec<VelocityEntry>, diesel::result::Error> {
        use crate::schema::velocity_data::dsl::*;
        velocity_data
            .filter(board_id.eq(target_board_id))
            .order(start_date.asc())
            .load::<VelocityEntry>(conn)
    }

    pub fn cumulative_flow_for_board(
        conn: &mut PgConnection,
        target_board_id: uuid::Uuid,
    ) -> Result<Vec<CumulativeFlowEntry>, diesel::result::Error> {
        use crate::schema::cumulative_flow_data::dsl::*;
        cumulative_flow_data
            .filter(board_id.eq(target_board_id))
            .order(entry_date.asc())
            .then_order_by(status.asc())
            .load::<CumulativeFlowEntry>(conn)
    }
}
