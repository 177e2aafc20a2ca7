use std::sync::Arc;

use anyhow::Context;
use sqlx::{postgres::PgPoolOptions, PgPool};

use crate::config::AppConfig;

#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub async fn init() -> anyhow::Result<Self> {
        let config = Arc::new(AppConfig::from_env()?);
        let db = PgPoolOptions::new()
            .max_connections(10)
            .connect(&config.database_url)
            .await
            .context("connect to database")?;
        Ok(Self { db, config })
    }
}

#[cfg(test)]
impl AppState {
    pub(crate) fn for_tests(db: PgPool) -> Self {
        Self {
            db,
            config: Arc::new(AppConfig {
                database_url: String::new(),
                host: "127.0.0.1".into(),
                port: 0,
            }),
        }
    }
}
