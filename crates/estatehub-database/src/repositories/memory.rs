//! In-memory admin store using a Tokio mutex for single-node use and tests.

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::Mutex;
use uuid::Uuid;

use estatehub_core::error::AppError;
use estatehub_core::result::AppResult;
use estatehub_entity::admin::{Admin, CreateAdmin};

use super::AdminStore;

/// In-memory admin store using a Tokio mutex for thread safety.
///
/// Suitable for single-node use only; nothing survives a restart.
#[derive(Debug, Default)]
pub struct MemoryAdminStore {
    /// Protected record list.
    records: Mutex<Vec<Admin>>,
}

impl MemoryAdminStore {
    /// Creates a new empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AdminStore for MemoryAdminStore {
    async fn create(&self, data: &CreateAdmin) -> AppResult<Admin> {
        let mut records = self.records.lock().await;

        if records.iter().any(|a| a.email == data.email) {
            return Err(AppError::conflict(format!(
                "Email '{}' already in use",
                data.email
            )));
        }

        let now = Utc::now();
        let admin = Admin {
            id: Uuid::new_v4(),
            name: data.name.clone(),
            email: data.email.clone(),
            password: data.password.clone(),
            status: data.status,
            created_at: now,
            updated_at: now,
        };
        records.push(admin.clone());
        Ok(admin)
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<Admin>> {
        let records = self.records.lock().await;
        Ok(records.iter().find(|a| a.email == email).cloned())
    }
}
