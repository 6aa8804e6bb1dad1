use serde::Serialize;
use time::OffsetDateTime;

use crate::domain::Identified;
use crate::teachers::repo::Teacher;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeacherDto {
    pub id: Option<i64>,
    pub first_name: String,
    pub last_name: String,
    #[serde(with = "time::serde::rfc3339::option")]
    pub created_at: Option<OffsetDateTime>,
    #[serde(with = "time::serde::rfc3339::option")]
    pub updated_at: Option<OffsetDateTime>,
}

impl From<Teacher> for TeacherDto {
    fn from(t: Teacher) -> Self {
        Self {
            id: Some(t.id),
            first_name: t.first_name,
            last_name: t.last_name,
            created_at: Some(t.created_at),
            updated_at: Some(t.updated_at),
        }
    }
}

impl Identified for TeacherDto {
    fn identity(&self) -> Option<i64> {
        self.id
    }
}
