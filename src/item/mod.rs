//! Lexed items
//!
//! This module holds the item model shared by lexers and parsers: the open
//! set of item type tags, the `LexItem` interface, and the concrete `Item`.

pub mod item_type;
pub mod quote;
pub mod token;

pub use item_type::ItemType;
pub use quote::quote;
pub use token::{display_item, Item, ItemDisplay, LexItem};
