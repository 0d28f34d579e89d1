//! # estatehub-database
//!
//! PostgreSQL connection management and concrete implementations of the
//! admin account store.

pub mod connection;
pub mod migration;
pub mod repositories;

pub use connection::DatabasePool;
pub use repositories::{AdminRepository, AdminStore, MemoryAdminStore};
