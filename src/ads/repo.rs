use sqlx::{Postgres, Transaction};

use crate::ads::repo_types::Ad;

impl Ad {
    pub async fn find(tx: &mut Transaction<'_, Postgres>, id: i32) -> sqlx::Result<Option<Ad>> {
        sqlx::query_as::<_, Ad>(
            r#"
            SELECT id, title, description, creation_time, user_id
            FROM ads
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&mut **tx)
        .await
    }

    pub async fn find_for_update(
        tx: &mut Transaction<'_, Postgres>,
        id: i32,
    ) -> sqlx::Result<Option<Ad>> {
        sqlx::query_as::<_, Ad>(
            r#"
            SELECT id, title, description, creation_time, user_id
            FROM ads
            WHERE id = $1
            FOR UPDATE
            "#,
        )
        .bind(id)
        .fetch_optional(&mut **tx)
        .await
    }

    pub async fn create(
        tx: &mut Transaction<'_, Postgres>,
        title: &str,
        description: &str,
        user_id: i32,
    ) -> sqlx::Result<Ad> {
        sqlx::query_as::<_, Ad>(
            r#"
            INSERT INTO ads (title, description, user_id)
            VALUES ($1, $2, $3)
            RETURNING id, title, description, creation_time, user_id
            "#,
        )
        .bind(title)
        .bind(description)
        .bind(user_id)
        .fetch_one(&mut **tx)
        .await
    }

    pub async fn save(&self, tx: &mut Transaction<'_, Postgres>) -> sqlx::Result<()> {
        sqlx::query(
            r#"
            UPDATE ads
               SET title = $2, description = $3, user_id = $4
             WHERE id = $1
            "#,
        )
        .bind(self.id)
        .bind(&self.title)
        .bind(&self.description)
        .bind(self.user_id)
        .execute(&mut **tx)
        .await?;
        Ok(())
    }

    pub async fn delete(&self, tx: &mut Transaction<'_, Postgres>) -> sqlx::Result<()> {
        sqlx::query("DELETE FROM ads WHERE id = $1")
            .bind(self.id)
            .execute(&mut **tx)
            .await?;
        Ok(())
    }
}
