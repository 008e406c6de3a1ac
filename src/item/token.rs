//! Lexed items and the interface parsers consume
//!
//! Parsers only ever see items through [`LexItem`], so a lexer is free to
//! emit a richer type (extra diagnostic metadata, borrowed text, ...) as long
//! as it answers the same four questions.

use std::fmt;

use super::item_type::ItemType;
use super::quote::quote;
use crate::registry::{self, TypeRegistry};

/// Read-only view of a single lexed item
pub trait LexItem {
    /// Category of the item
    fn item_type(&self) -> ItemType;

    /// Offset into the input where the item starts
    fn pos(&self) -> usize;

    /// Line on which the item occurred
    fn line(&self) -> usize;

    /// Raw text captured for the item
    fn value(&self) -> &str;

    /// Whether this item marks the end of input
    fn is_eof(&self) -> bool {
        self.item_type() == ItemType::EOF
    }

    /// Whether this item reports a lexing failure
    fn is_error(&self) -> bool {
        self.item_type() == ItemType::ERROR
    }
}

impl<T: LexItem + ?Sized> LexItem for &T {
    fn item_type(&self) -> ItemType {
        (**self).item_type()
    }

    fn pos(&self) -> usize {
        (**self).pos()
    }

    fn line(&self) -> usize {
        (**self).line()
    }

    fn value(&self) -> &str {
        (**self).value()
    }
}

impl<T: LexItem + ?Sized> LexItem for Box<T> {
    fn item_type(&self) -> ItemType {
        (**self).item_type()
    }

    fn pos(&self) -> usize {
        (**self).pos()
    }

    fn line(&self) -> usize {
        (**self).line()
    }

    fn value(&self) -> &str {
        (**self).value()
    }
}

/// An item emitted by a lexer
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    item_type: ItemType,
    pos: usize,
    line: usize,
    value: String,
}

impl Item {
    /// Create a new item
    pub fn new(item_type: ItemType, pos: usize, line: usize, value: impl Into<String>) -> Self {
        Self {
            item_type,
            pos,
            line,
            value: value.into(),
        }
    }

    /// Create an end-of-input item
    pub fn eof(pos: usize, line: usize) -> Self {
        Self::new(ItemType::EOF, pos, line, String::new())
    }

    /// Create an error item carrying `message` as its value
    pub fn error(pos: usize, line: usize, message: impl Into<String>) -> Self {
        Self::new(ItemType::ERROR, pos, line, message)
    }

    /// Render against an explicit registry instead of the process-wide one
    pub fn display_with<'a>(&'a self, registry: &'a TypeRegistry) -> ItemDisplay<'a, Self> {
        display_item(self, registry)
    }
}

impl LexItem for Item {
    fn item_type(&self) -> ItemType {
        self.item_type
    }

    fn pos(&self) -> usize {
        self.pos
    }

    fn line(&self) -> usize {
        self.line
    }

    fn value(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({})",
            registry::name_of(self.item_type),
            quote(&self.value)
        )
    }
}

/// Displays any [`LexItem`] as `<type-name> (<quoted-value>)`
pub struct ItemDisplay<'a, I: LexItem + ?Sized> {
    item: &'a I,
    registry: &'a TypeRegistry,
}

/// Pair `item` with `registry` for display
pub fn display_item<'a, I: LexItem + ?Sized>(
    item: &'a I,
    registry: &'a TypeRegistry,
) -> ItemDisplay<'a, I> {
    ItemDisplay { item, registry }
}

impl<I: LexItem + ?Sized> fmt::Display for ItemDisplay<'_, I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({})",
            self.registry.name_of(self.item.item_type()),
            quote(self.item.value())
        )
    }
}
