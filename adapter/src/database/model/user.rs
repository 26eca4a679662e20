use kernel::model::{id::UserId, user::User};
use sqlx::FromRow;

#[derive(FromRow)]
pub struct UserRow {
    pub id: UserId,
    pub name: String,
    pub email: String,
}

impl From<UserRow> for User {
    fn from(value: UserRow) -> Self {
        let UserRow { id, name, email } = value;
        User { id, name, email }
    }
}
