use diesel::prelude::*;

use crate::db::models::swimlane::{SwimlaneUserSetting, UpsertSwimlaneUserSetting};

pub struct UserSettingsRepo;

impl UserSettingsRepo {
    pub fn find(
        conn: &mut PgConnection,
        target_user_id: uuid::Uuid,
        target_board_id: uuid::Uuid,
        target_swimlane_id: uuid::Uuid,
    ) -> Result<Option<SwimlaneUserSetting>, diesel::result::Error> {
        use crate::schema::swimlane_user_settings::dsl::*;
        swimlane_user_settings
            .filter(user_id.eq(target_user_id))
            .filter(board_id.eq(target_board_id))
            .filter(swimlane_id.eq(target_swimlane_id))
            .first::<SwimlaneUserSetting>(conn)
            .optional()
    }

    /// Single-statement upsert keyed on (user_id, board_id, swimlane_id), so
    /// two concurrent saves of the same setting cannot race into a duplicate
    /// key error.
    pub fn upsert(
        conn: &mut PgConnection,
        row: &UpsertSwimlaneUserSetting,
    ) -> Result<SwimlaneUserSetting, diesel::result::Error> {
        use crate::schema::swimlane_user_settings::dsl::*;
        diesel::insert_into(swimlane_user_settings)
            .values(row)
            .on_conflict((user_id, board_id, swimlane_id))
            .do_update()
            .set((row, updated_at.eq(chrono::Utc::now())))
            .get_result::<SwimlaneUserSetting>(conn)
    }
}
