use sqlx::PgPool;
use tracing::info;

use crate::error::ApiError;
use crate::sessions::repo::Session;
use crate::users::repo::User;

/// Enroll a user in a session. Both must exist; enrolling twice is a
/// business-rule rejection, not a conflict at the storage layer.
pub async fn participate(db: &PgPool, session_id: i64, user_id: i64) -> Result<(), ApiError> {
    let session = Session::find_by_id(db, session_id)
        .await?
        .ok_or(ApiError::NotFound)?;
    let user = User::find_by_id(db, user_id)
        .await?
        .ok_or(ApiError::NotFound)?;

    let mut user_ids = session.user_ids;
    enroll(&mut user_ids, user.id)?;
    Session::set_participants(db, session.id, &user_ids).await?;

    info!(session_id, user_id, "user enrolled in session");
    Ok(())
}

/// Withdraw a user from a session. Only the session is looked up; a bogus
/// user id simply fails the membership check.
pub async fn no_longer_participate(
    db: &PgPool,
    session_id: i64,
    user_id: i64,
) -> Result<(), ApiError> {
    let session = Session::find_by_id(db, session_id)
        .await?
        .ok_or(ApiError::NotFound)?;

    let mut user_ids = session.user_ids;
    withdraw(&mut user_ids, user_id)?;
    Session::set_participants(db, session.id, &user_ids).await?;

    info!(session_id, user_id, "user withdrawn from session");
    Ok(())
}

fn enroll(user_ids: &mut Vec<i64>, user_id: i64) -> Result<(), ApiError> {
    if user_ids.contains(&user_id) {
        return Err(ApiError::BadRequest("Already participating".into()));
    }
    user_ids.push(user_id);
    Ok(())
}

fn withdraw(user_ids: &mut Vec<i64>, user_id: i64) -> Result<(), ApiError> {
    if !user_ids.contains(&user_id) {
        return Err(ApiError::BadRequest("Not participating".into()));
    }
    // Filter, not single-element removal: clears duplicates left by older data
    user_ids.retain(|&id| id != user_id);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enroll_appends_preserving_order() {
        let mut ids = vec![5, 7];
        enroll(&mut ids, 2).expect("enroll");
        assert_eq!(ids, vec![5, 7, 2]);
    }

    #[test]
    fn enroll_twice_fails_and_adds_exactly_once() {
        let mut ids = Vec::new();
        enroll(&mut ids, 2).expect("first enroll");
        let err = enroll(&mut ids, 2).unwrap_err();
        assert!(matches!(err, ApiError::BadRequest(_)));
        assert_eq!(ids, vec![2]);
    }

    #[test]
    fn withdraw_rejects_non_member_and_leaves_list_unchanged() {
        let mut ids = vec![5, 7];
        let err = withdraw(&mut ids, 2).unwrap_err();
        assert!(matches!(err, ApiError::BadRequest(_)));
        assert_eq!(ids, vec![5, 7]);
    }

    #[test]
    fn withdraw_removes_only_that_user() {
        let mut ids = vec![2, 99];
        withdraw(&mut ids, 2).expect("withdraw");
        assert_eq!(ids, vec![99]);
    }

    #[test]
    fn withdraw_removes_all_duplicate_entries() {
        let mut ids = vec![2, 7, 2, 2];
        withdraw(&mut ids, 2).expect("withdraw");
        assert_eq!(ids, vec![7]);
    }

    #[test]
    fn enroll_then_withdraw_restores_membership() {
        let original = vec![5, 7];
        let mut ids = original.clone();
        enroll(&mut ids, 2).expect("enroll");
        withdraw(&mut ids, 2).expect("withdraw");
        assert_eq!(ids.len(), original.len());
        for id in original {
            assert!(ids.contains(&id));
        }
    }
}
