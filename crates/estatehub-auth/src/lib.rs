//! # estatehub-auth
//!
//! Token-based authentication for the EstateHub admin backend.
//!
//! ## Modules
//!
//! - `jwt` — signed token creation and validation
//! - `service` — the authentication gate: registration, login, and
//!   authenticated account lookup

pub mod jwt;
pub mod service;

pub use jwt::{Claims, TokenDecoder, TokenEncoder};
pub use service::AuthService;
