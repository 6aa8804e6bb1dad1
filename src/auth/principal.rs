use sqlx::PgPool;

use crate::users::repo::User;

/// Authenticated identity attached to a request. Built fresh from the users
/// table for every request; never cached across requests.
#[derive(Debug, Clone)]
pub struct Principal {
    pub id: i64,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub admin: bool,
}

impl Principal {
    pub async fn load_by_email(db: &PgPool, email: &str) -> anyhow::Result<Option<Principal>> {
        let user = User::find_by_email(db, email).await?;
        Ok(user.map(Principal::from))
    }
}

impl From<User> for Principal {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            email: u.email,
            first_name: u.first_name,
            last_name: u.last_name,
            admin: u.admin,
        }
    }
}
