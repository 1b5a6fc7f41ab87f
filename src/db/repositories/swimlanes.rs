use diesel::prelude::*;

use crate::db::models::swimlane::{NewSwimlane, Swimlane, UpdateSwimlane};

pub struct SwimlaneRepo;

impl SwimlaneRepo {
    pub fn find_by_id(
        conn: &mut PgConnection,
        swimlane_id: uuid::Uuid,
    ) -> Result<Option<Swimlane>, diesel::result::Error> {
        use crate::schema::swimlanes::dsl::*;
        swimlanes
            .filter(id.eq(swimlane_id))
            .first::<Swimlane>(conn)
            .optional()
    }

    pub fn list_visible_by_board(
        conn: &mut PgConnection,
        target_board_id: uuid::Uuid,
    ) -> Result<Vec<Swimlane>, diesel::result::Error> {
        use crate::schema::swimlanes::dsl::*;
        swimlanes
            .filter(board_id.eq(target_board_id))
            .filter(is_visible.eq(true))
            .order(position.asc())
            .load::<Swimlane>(conn)
    }

    pub fn insert(
        conn: &mut PgConnection,
        new_swimlane: &NewSwimlane,
    ) -> Result<Swimlane, diesel::result::Error> {
        use crate::schema::swimlanes::dsl::*;
        diesel::insert_into(swimlanes)
            .values(new_swimlane)
            .get_result::<Swimlane>(conn)
    }

    pub fn update(
        conn: &mut PgConnection,
        swimlane_id: uuid::Uuid,
        changes: &UpdateSwimlane,
    ) -> Result<Swimlane, diesel::result::Error> {
        use crate::schema::swimlanes::dsl::*;
        diesel::update(swimlanes.filter(id.eq(swimlane_id)))
            .set((changes, updated_at.eq(chrono::Utc::now())))
            .get_result::<Swimlane>(conn)
    }

    /// Scoped to the board so a stray id from another board cannot be moved.
    pub fn update_position(
        conn: &mut PgConnection,
        target_board_id: uuid::Uuid,
        swimlane_id: uuid::Uuid,
        new_position: i32,
    ) -> Result<usize, diesel::result::Error> {
        use crate::schema::swimlanes::dsl::*;
        diesel::update(
            swimlanes
                .filter(id.eq(swimlane_id))
                .filter(board_id.eq(target_board_id)),
        )
        .set((position.eq(new_position), updated_at.eq(chrono::Utc::now())))
        .execute(conn)
    }

    pub fn delete_by_id(
        conn: &mut PgConnection,
        swimlane_id: uuid::Uuid,
    ) -> Result<usize, diesel::result::Error> {
        use crate::schema::swimlanes::dsl::*;
        diesel::delete(swimlanes.filter(id.eq(swimlane_id))).execute(conn)
    }
}
