//! `stockdesk-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns).

pub mod email;
pub mod error;
pub mod item;
pub mod message;

pub use email::validate_email;
pub use error::{DomainError, DomainResult};
pub use item::{Item, ItemId};
pub use message::{ContactMessage, MessageId};
