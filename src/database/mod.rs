use crate::{config::Config, models::User, utils::AppError};
use async_trait::async_trait;
use sqlx::postgres::{PgConnectOptions, PgPool, PgPoolOptions};
use std::time::Duration;

const FIND_USER_BY_MOBILE: &str = r#"
    SELECT id::bigint AS id, mobile, "name"
    FROM public."user"
    WHERE mobile = $1
    ORDER BY id
"#;

/// Read access to the `user` table
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Every row whose `mobile` column equals `mobile` exactly, lowest id first
    async fn find_user_by_mobile(&self, mobile: &str) -> Result<Vec<User>, AppError>;
}

#[derive(Clone)]
pub struct Postgres {
    pool: PgPool,
}

impl Postgres {
    /// Builds the connection pool. Connections are opened on first use, so an
    /// unreachable database shows up as a per-request error instead of a startup failure.
    pub fn connect(config: &Config) -> Self {
        let options = PgConnectOptions::new()
            .host(&config.db_host)
            .port(config.db_port)
            .database(&config.db_name)
            .username(&config.db_user)
            .password(&config.db_password);

        let pool = PgPoolOptions::new()
            .max_connections(config.db_max_connections)
            .acquire_timeout(Duration::from_secs(config.db_acquire_timeout_secs))
            .connect_lazy_with(options);

        Self { pool }
    }

    /// Round trip to check the database is reachable
    pub async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }
}

#[async_trait]
impl UserRepository for Postgres {
    async fn find_user_by_mobile(&self, mobile: &str) -> Result<Vec<User>, AppError> {
        let users = sqlx::query_as::<_, User>(FIND_USER_BY_MOBILE)
            .bind(mobile)
            .fetch_all(&self.pool)
            .await?;

        Ok(users)
    }
}
