use diesel::prelude::*;

use crate::db::models::board::{Board, BoardColumn};

pub struct BoardRepo;

impl BoardRepo {
    pub fn find_by_id(
        conn: &mut PgConnection,
        board_id: uuid::Uuid,
    ) -> Result<Option<Board>, diesel::result::Error> {
        use crate::schema::boards::dsl::*;
        boards.filter(id.eq(board_id)).first::<Board>(conn).optional()
    }

    pub fn list_all(conn: &mut PgConnection) -> Result<Vec<Board>, diesel::result::Error> {
        use crate::schema::boards::dsl::*;
        boards.order(created_at.asc()).load::<Board>(conn)
    }

    pub fn columns_for_board(
        conn: &mut PgConnection,
        target_board_id: uuid::Uuid,
    ) -> Result<Vec<BoardColumn>, diesel::result::Error> {
        use crate::schema::board_columns::dsl::*;
        board_columns
            .filter(board_id.eq(target_board_id))
            .order(position.asc())
            .load::<BoardColumn>(conn)
    }
}
