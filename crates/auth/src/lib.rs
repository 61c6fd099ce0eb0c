//! `stockdesk-auth` — authentication boundary.
//!
//! This crate is intentionally decoupled from HTTP and storage: credentials
//! checking, token derivation, and the session store live here; bearer
//! extraction and status-code mapping live in the API crate.

pub mod credentials;
pub mod session;
pub mod token;

pub use credentials::verify_credentials;
pub use session::{Session, SessionStore, TokenValidationError};
pub use token::derive_token;
