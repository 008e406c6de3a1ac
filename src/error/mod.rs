//! Error handling and diagnostics
//!
//! Lexing failures are not errors in the Rust sense: they travel through the
//! item stream as items tagged `ItemType::ERROR`. The only fallible
//! operation in this crate is registering a tag name under a strict
//! [`RegistryConfig`](crate::RegistryConfig).

use thiserror::Error;

use crate::item::ItemType;

pub mod diagnostic;

pub use diagnostic::Diagnostic;

/// Result type alias for registry operations
pub type RegistryResult<T> = Result<T, RegistryError>;

/// Registration failures
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// The tag already has a different name and the registry rejects collisions
    #[error("item type {} is already registered as {existing:?}, refusing {attempted:?}", .tag.value())]
    Collision {
        tag: ItemType,
        existing: String,
        attempted: String,
    },
    /// The tag is at or below `ItemType::DEFAULT_MAX` and the registry protects that range
    #[error("item type {} is reserved, refusing {name:?}", .tag.value())]
    ReservedTag { tag: ItemType, name: String },
}

impl RegistryError {
    /// Get the error kind as a string
    pub fn kind(&self) -> &str {
        match self {
            Self::Collision { .. } => "Tag Collision",
            Self::ReservedTag { .. } => "Reserved Tag",
        }
    }

    /// The tag the failed registration was for
    pub fn tag(&self) -> ItemType {
        match self {
            Self::Collision { tag, .. } | Self::ReservedTag { tag, .. } => *tag,
        }
    }
}
