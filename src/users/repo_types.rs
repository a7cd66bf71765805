use sqlx::FromRow;
use time::OffsetDateTime;

/// User record in the database.
#[derive(Debug, FromRow)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub password: String, // Argon2 hash
    pub creation_time: OffsetDateTime,
}

/// Column changes for a user. `password` is already hashed.
#[derive(Debug, Default)]
pub struct UserChanges {
    pub name: Option<String>,
    pub password: Option<String>,
}

impl UserChanges {
    pub fn apply_to(self, user: &mut User) {
        if let Some(name) = self.name {
            user.name = name;
        }
        if let Some(password) = self.password {
            user.password = password;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> User {
        User {
            id: 7,
            name: "user_1".into(),
            password: "$argon2id$old".into(),
            creation_time: OffsetDateTime::from_unix_timestamp(1_700_000_000).unwrap(),
        }
    }

    #[test]
    fn only_present_fields_change() {
        let mut u = user();
        UserChanges {
            name: Some("user_2".into()),
            password: None,
        }
        .apply_to(&mut u);
        assert_eq!(u.name, "user_2");
        assert_eq!(u.password, "$argon2id$old");
        assert_eq!(u.id, 7);
        assert_eq!(u.creation_time.unix_timestamp(), 1_700_000_000);
    }

    #[test]
    fn empty_changes_are_a_no_op() {
        let mut u = user();
        UserChanges::default().apply_to(&mut u);
        assert_eq!(u.name, "user_1");
        assert_eq!(u.password, "$argon2id$old");
    }
}
