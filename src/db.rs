use anyhow::Context;
use sqlx::PgPool;

const CREATE_USERS: &str = r#"
    CREATE TABLE IF NOT EXISTS users (
        id            SERIAL PRIMARY KEY,
        name          TEXT NOT NULL UNIQUE,
        password      TEXT NOT NULL,
        creation_time TIMESTAMPTZ NOT NULL DEFAULT now()
    )
"#;

// RESTRICT: a user that still owns ads cannot be deleted.
const CREATE_ADS: &str = r#"
    CREATE TABLE IF NOT EXISTS ads (
        id            SERIAL PRIMARY KEY,
        title         TEXT NOT NULL UNIQUE,
        description   TEXT NOT NULL,
        creation_time TIMESTAMPTZ NOT NULL DEFAULT now(),
        user_id       INTEGER NOT NULL REFERENCES users (id) ON DELETE RESTRICT
    )
"#;

const CREATE_ADS_USER_IDX: &str =
    "CREATE INDEX IF NOT EXISTS ads_user_id_idx ON ads (user_id)";

/// Create the tables if they are missing. Existing tables are left untouched.
pub async fn ensure_schema(db: &PgPool) -> anyhow::Result<()> {
    let mut tx = db.begin().await.context("begin schema tx")?;
    for ddl in [CREATE_USERS, CREATE_ADS, CREATE_ADS_USER_IDX] {
        sqlx::query(ddl)
            .execute(&mut *tx)
            .await
            .context("create schema")?;
    }
    tx.commit().await.context("commit schema tx")?;
    tracing::info!("database schema ready");
    Ok(())
}

const UNIQUE_VIOLATION: &str = "23505";
const FOREIGN_KEY_VIOLATION: &str = "23503";

fn sqlstate(err: &sqlx::Error) -> Option<String> {
    match err {
        sqlx::Error::Database(db_err) => db_err.code().map(|c| c.into_owned()),
        _ => None,
    }
}

pub fn is_unique_violation(err: &sqlx::Error) -> bool {
    sqlstate(err).as_deref() == Some(UNIQUE_VIOLATION)
}

pub fn is_foreign_key_violation(err: &sqlx::Error) -> bool {
    sqlstate(err).as_deref() == Some(FOREIGN_KEY_VIOLATION)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_database_errors_are_not_constraint_violations() {
        let err = sqlx::Error::RowNotFound;
        assert!(!is_unique_violation(&err));
        assert!(!is_foreign_key_violation(&err));

        let err = sqlx::Error::PoolTimedOut;
        assert!(!is_unique_violation(&err));
    }
}
