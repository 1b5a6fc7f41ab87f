use diesel::prelude::*;

use crate::db::models::swimlane::{NewSwimlaneGroup, SwimlaneGroup, UpdateSwimlaneGroup};

pub struct SwimlaneGroupRepo;

impl SwimlaneGroupRepo {
    pub fn find_by_id(
        conn: &mut PgConnection,
        group_id: uuid::Uuid,
    ) -> Result<Option<SwimlaneGroup>, diesel::result::Error> {
        use crate::schema::swimlane_groups::dsl::*;
        swimlane_groups
            .filter(id.eq(group_id))
            .first::<SwimlaneGroup>(conn)
            .optional()
    }

    pub fn list_by_swimlane(
        conn: &mut PgConnection,
        target_swimlane_id: uuid::Uuid,
    ) -> Result<Vec<SwimlaneGroup>, diesel::result::Error> {
        use crate::schema::swimlane_groups::dsl::*;
        swimlane_groups
            .filter(swimlane_id.eq(target_swimlane_id))
            .order(position.asc())
            .load::<SwimlaneGroup>(conn)
    }

    pub fn insert(
        conn: &mut PgConnection,
        new_group: &NewSwimlaneGroup,
    ) -> Result<SwimlaneGroup, diesel::result::Error> {
        use crate::schema::swimlane_groups::dsl::*;
        diesel::insert_into(swimlane_groups)
            .values(new_group)
            .get_result::<SwimlaneGroup>(conn)
    }

    pub fn insert_batch(
        conn: &mut PgConnection,
        new_groups: &[NewSwimlaneGroup],
    ) -> Result<Vec<SwimlaneGroup>, diesel::result::Error> {
        use crate::schema::swimlane_groups::dsl::*;
        diesel::insert_into(swimlane_groups)
            .values(new_groups)
            .get_results::<SwimlaneGroup>(conn)
    }

    pub fn update(
        conn: &mut PgConnection,
        group_id: uuid::Uuid,
        changes: &UpdateSwimlaneGroup,
    ) -> Result<SwimlaneGroup, diesel::result::Error> {
        use crate::schema::swimlane_groups::dsl::*;
        diesel::update(swimlane_groups.filter(id.eq(group_id)))
            .set((changes, updated_at.eq(chrono::Utc::now())))
            .get_result::<SwimlaneGroup>(conn)
    }

    pub fn delete_by_id(
        conn: &mut PgConnection,
        group_id: uuid::Uuid,
    ) -> Result<usize, diesel::result::Error> {
        use crate::schema::swimlane_groups::dsl::*;
        diesel::delete(swimlane_groups.filter(id.eq(group_id))).execute(conn)
    }
}
