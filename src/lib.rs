//! # lex-item
//!
//! Building blocks for hand-written lexers:
//! - an open set of item type tags with two reserved values (`EOF`, `ERROR`)
//!   and a boundary (`DEFAULT_MAX`) above which lexers define their own
//! - a registry that gives every tag a human-readable name
//! - the `LexItem` interface parsers consume, and a concrete `Item`
//!
//! No scanner is included. A lexer defines its tags, registers their names,
//! and emits items over whatever transport it likes; lexing failures are
//! emitted as items tagged `ItemType::ERROR` with the message as value.
//!
//! ```
//! use lex_item::{register, Item, ItemType, LexItem};
//!
//! const IDENT: ItemType = ItemType::custom(1);
//! register(IDENT, "Identifier");
//!
//! let item = Item::new(IDENT, 0, 1, "foo");
//! assert_eq!(item.value(), "foo");
//! assert_eq!(item.to_string(), r#"Identifier ("foo")"#);
//! ```
//!
//! ## Architecture
//!
//! - `item`: item type tags, the `LexItem` trait and `Item`
//! - `registry`: tag name registry and its configuration
//! - `error`: registration errors and diagnostics for error items

pub mod error;
pub mod item;
pub mod registry;

// Re-export commonly used types
pub use error::{Diagnostic, RegistryError, RegistryResult};
pub use item::{display_item, quote, Item, ItemDisplay, ItemType, LexItem};
pub use registry::{name_of, register, CollisionPolicy, RegistryConfig, TypeRegistry};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
