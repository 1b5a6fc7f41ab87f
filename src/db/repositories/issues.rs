use diesel::prelude::*;

use crate::db::models::issue::Issue;

pub struct IssueRepo;

impl IssueRepo {
    /// Full scan of a project's issues in creation order. Aggregation always
    /// works over the complete list, so there is no pagination here.
    pub fn list_by_project(
        conn: &mut PgConnection,
        target_project_id: uuid::Uuid,
    ) -> Result<Vec<Issue>, diesel::result::Error> {
        use crate::schema::issues::dsl::*;
        issues
            .filter(project_id.eq(target_project_id))
            .order(created_at.asc())
            .load::<Issue>(conn)
    }
}
