use diesel::prelude::*;

use crate::db::models::user::User;

pub struct UserRepo;

impl UserRepo {
    pub fn list_by_ids(
        conn: &mut PgConnection,
        user_ids: &[uuid::Uuid],
    ) -> Result<Vec<User>, diesel::result::Error> {
        use crate::schema::users::dsl::*;
        users.filter(id.eq_any(user_ids)).load::<User>(conn)
    }
}
