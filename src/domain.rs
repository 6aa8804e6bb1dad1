/// Identity comparison for stored entities, separate from structural
/// equality. Two values refer to the same entity when their storage-assigned
/// ids match, whatever the other fields hold.
///
/// Values that were never persisted carry no id, and two of those compare as
/// the same identity. That mirrors the legacy backend and is almost certainly
/// incidental there; callers must not rely on it for unsaved values.
pub trait Identified {
    fn identity(&self) -> Option<i64>;

    fn same_identity(&self, other: &Self) -> bool {
        self.identity() == other.identity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::users::dto::UserDto;

    fn user(id: Option<i64>, email: &str) -> UserDto {
        UserDto {
            id,
            email: email.into(),
            first_name: "John".into(),
            last_name: "Doe".into(),
            admin: false,
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn same_id_is_same_identity_regardless_of_fields() {
        let a = user(Some(1), "a@mail.com");
        let b = user(Some(1), "b@mail.com");
        assert!(a.same_identity(&b));
    }

    #[test]
    fn different_ids_are_different_identities() {
        let a = user(Some(1), "a@mail.com");
        let b = user(Some(2), "a@mail.com");
        assert!(!a.same_identity(&b));
    }

    #[test]
    fn unsaved_values_compare_as_same_identity() {
        // Ported quirk: no id on either side means "same".
        let a = user(None, "a@mail.com");
        let b = user(None, "b@mail.com");
        assert!(a.same_identity(&b));
        assert!(!a.same_identity(&user(Some(1), "a@mail.com")));
    }
}
