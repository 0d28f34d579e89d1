//! PostgreSQL admin store implementation.

use async_trait::async_trait;
use sqlx::PgPool;

use estatehub_core::error::{AppError, ErrorKind};
use estatehub_core::result::AppResult;
use estatehub_entity::admin::{Admin, CreateAdmin};

use super::AdminStore;

/// Repository for admin account persistence backed by PostgreSQL.
#[derive(Debug, Clone)]
pub struct AdminRepository {
    pool: PgPool,
}

impl AdminRepository {
    /// Create a new admin repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AdminStore for AdminRepository {
    async fn create(&self, data: &CreateAdmin) -> AppResult<Admin> {
        sqlx::query_as::<_, Admin>(
            "INSERT INTO admins (name, email, password, status) \
             VALUES ($1, $2, $3, $4) \
             RETURNING *",
        )
        .bind(&data.name)
        .bind(&data.email)
        .bind(&data.password)
        .bind(data.status)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err) if db_err.constraint() == Some("admins_email_key") => {
                AppError::conflict(format!("Email '{}' already in use", data.email))
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create admin", e),
        })
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<Admin>> {
        sqlx::query_as::<_, Admin>("SELECT * FROM admins WHERE email = $1")
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find admin by email", e)
            })
    }
}
