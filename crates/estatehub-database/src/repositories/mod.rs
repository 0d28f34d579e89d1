//! Admin account store: the trait and its concrete implementations.
//!
//! The store persists admin records keyed by unique email. Two backends
//! are provided:
//! - PostgreSQL (for deployments)
//! - In-memory mutex (for single-node use and tests)

pub mod admin;
pub mod memory;

use async_trait::async_trait;

use estatehub_core::result::AppResult;
use estatehub_entity::admin::{Admin, CreateAdmin};

pub use admin::AdminRepository;
pub use memory::MemoryAdminStore;

/// Persistence seam for admin accounts.
///
/// Email uniqueness is enforced here, not by callers. Lookup misses are a
/// normal outcome (`Ok(None)`), never an error.
#[async_trait]
pub trait AdminStore: Send + Sync + std::fmt::Debug + 'static {
    /// Persist a new admin record, returning it with its assigned id.
    ///
    /// No validation of email format or password strength is performed.
    /// A duplicate email yields a conflict error.
    async fn create(&self, data: &CreateAdmin) -> AppResult<Admin>;

    /// Exact-match lookup by email, case-sensitive as stored.
    async fn find_by_email(&self, email: &str) -> AppResult<Option<Admin>>;
}
