use serde::Serialize;
use time::OffsetDateTime;

use crate::domain::Identified;
use crate::users::repo::User;

/// Public shape of a user; the password hash is deliberately absent.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: Option<i64>,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub admin: bool,
    #[serde(with = "time::serde::rfc3339::option")]
    pub created_at: Option<OffsetDateTime>,
    #[serde(with = "time::serde::rfc3339::option")]
    pub updated_at: Option<OffsetDateTime>,
}

impl From<User> for UserDto {
    fn from(u: User) -> Self {
        Self {
            id: Some(u.id),
            email: u.email,
            first_name: u.first_name,
            last_name: u.last_name,
            admin: u.admin,
            created_at: Some(u.created_at),
            updated_at: Some(u.updated_at),
        }
    }
}

impl Identified for UserDto {
    fn identity(&self) -> Option<i64> {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn password_hash_never_serialized() {
        let dto = UserDto::from(User {
            id: 1,
            email: "yoga@studio.com".into(),
            first_name: "Margot".into(),
            last_name: "DELAHAYE".into(),
            password_hash: "secret-hash".into(),
            admin: true,
            created_at: datetime!(2026-08-01 0:00 UTC),
            updated_at: datetime!(2026-08-01 0:00 UTC),
        });
        let json = serde_json::to_string(&dto).unwrap();
        assert!(!json.contains("secret-hash"));
        assert!(!json.contains("password"));
        assert!(json.contains("yoga@studio.com"));
    }
}
