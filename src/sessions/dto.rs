use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::domain::Identified;
use crate::error::ApiError;
use crate::sessions::repo::{Session, SessionData};

/// Wire shape for a session. `teacher_id` keeps its legacy snake_case name;
/// everything else is camelCase.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionDto {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub name: String,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub date: Option<OffsetDateTime>,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "teacher_id", default)]
    pub teacher_id: Option<i64>,
    #[serde(default)]
    pub users: Vec<i64>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub created_at: Option<OffsetDateTime>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub updated_at: Option<OffsetDateTime>,
}

impl From<Session> for SessionDto {
    fn from(s: Session) -> Self {
        Self {
            id: Some(s.id),
            name: s.name,
            date: Some(s.date),
            description: s.description,
            teacher_id: s.teacher_id,
            users: s.user_ids,
            created_at: Some(s.created_at),
            updated_at: Some(s.updated_at),
        }
    }
}

impl SessionDto {
    /// Validate the incoming body and turn it into a writable field set.
    /// Any id in the body is ignored; storage (or the path) decides ids.
    pub fn into_data(self) -> Result<SessionData, ApiError> {
        if self.name.trim().is_empty() {
            return Err(ApiError::Validation("Name is required".into()));
        }
        // Character counts, not bytes: the columns are VARCHAR(n)
        if self.name.chars().count() > 50 {
            return Err(ApiError::Validation(
                "Name must be at most 50 characters".into(),
            ));
        }
        let date = self
            .date
            .ok_or_else(|| ApiError::Validation("Date is required".into()))?;
        if self.description.trim().is_empty() {
            return Err(ApiError::Validation("Description is required".into()));
        }
        if self.description.chars().count() > 2500 {
            return Err(ApiError::Validation(
                "Description must be at most 2500 characters".into(),
            ));
        }
        Ok(SessionData {
            name: self.name,
            date,
            description: self.description,
            teacher_id: self.teacher_id,
            user_ids: self.users,
        })
    }
}

impl Identified for SessionDto {
    fn identity(&self) -> Option<i64> {
        self.id
    }
}
