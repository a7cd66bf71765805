use sqlx::{Postgres, Transaction};

use crate::users::repo_types::User;

impl User {
    pub async fn find(tx: &mut Transaction<'_, Postgres>, id: i32) -> sqlx::Result<Option<User>> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, password, creation_time
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&mut **tx)
        .await
    }

    /// Same as `find`, but holds a row lock until the transaction ends.
    pub async fn find_for_update(
        tx: &mut Transaction<'_, Postgres>,
        id: i32,
    ) -> sqlx::Result<Option<User>> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, password, creation_time
            FROM users
            WHERE id = $1
            FOR UPDATE
            "#,
        )
        .bind(id)
        .fetch_optional(&mut **tx)
        .await
    }

    /// Insert a user; `password_hash` must already be hashed.
    pub async fn create(
        tx: &mut Transaction<'_, Postgres>,
        name: &str,
        password_hash: &str,
    ) -> sqlx::Result<User> {
        sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (name, password)
            VALUES ($1, $2)
            RETURNING id, name, password, creation_time
            "#,
        )
        .bind(name)
        .bind(password_hash)
        .fetch_one(&mut **tx)
        .await
    }

    /// Write back the mutable columns. `creation_time` is left alone.
    pub async fn save(&self, tx: &mut Transaction<'_, Postgres>) -> sqlx::Result<()> {
        sqlx::query(
            r#"
            UPDATE users
               SET name = $2, password = $3
             WHERE id = $1
            "#,
        )
        .bind(self.id)
        .bind(&self.name)
        .bind(&self.password)
        .execute(&mut **tx)
        .await?;
        Ok(())
    }

    pub async fn delete(&self, tx: &mut Transaction<'_, Postgres>) -> sqlx::Result<()> {
        sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(self.id)
            .execute(&mut **tx)
            .await?;
        Ok(())
    }
}
