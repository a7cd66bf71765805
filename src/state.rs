use crate::config::AppConfig;
use anyhow::Context;
use sqlx::{postgres::PgPoolOptions, PgPool};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub async fn init(config: AppConfig) -> anyhow::Result<Self> {
        let config = Arc::new(config);

        let db = PgPoolOptions::new()
            .max_connections(config.db.max_connections)
            .connect(&config.db.dsn())
            .await
            .with_context(|| {
                format!(
                    "connect to database {}@{}:{}/{}",
                    config.db.user, config.db.host, config.db.port, config.db.name
                )
            })?;

        Ok(Self { db, config })
    }

    #[cfg(test)]
    pub fn from_parts(db: PgPool, config: Arc<AppConfig>) -> Self {
        Self { db, config }
    }

    /// State backed by a pool that never connects until a query is issued.
    #[cfg(test)]
    pub fn fake() -> Self {
        use crate::config::DbConfig;

        let config = Arc::new(AppConfig {
            host: "127.0.0.1".into(),
            port: 0,
            db: DbConfig {
                host: "localhost".into(),
                port: 5432,
                user: "postgres".into(),
                password: "postgres".into(),
                name: "postgres".into(),
                max_connections: 1,
                url: None,
            },
        });

        let db = PgPoolOptions::new()
            .max_connections(1)
            .connect_lazy(&config.db.dsn())
            .expect("lazy pool ok");

        Self { db, config }
    }
}
