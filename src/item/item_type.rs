//! Item type tags
//!
//! An `ItemType` is an open integer tag rather than a closed enum, so
//! downstream lexers can define their own categories above
//! [`ItemType::DEFAULT_MAX`] without touching this crate.

use std::fmt;

use crate::registry;

/// The category of a lexed item
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ItemType(u32);

impl ItemType {
    /// Emitted once the input is exhausted
    pub const EOF: ItemType = ItemType(0);
    /// Emitted when lexing fails; the item value carries the message
    pub const ERROR: ItemType = ItemType(1);
    /// Boundary of the reserved range. Custom tags start at `DEFAULT_MAX + 1`.
    pub const DEFAULT_MAX: ItemType = ItemType(2);

    /// Create a tag from its raw value
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Create a custom tag `offset` steps above [`ItemType::DEFAULT_MAX`].
    ///
    /// An offset of zero is bumped to one so the result never lands in the
    /// reserved range.
    pub const fn custom(offset: u32) -> Self {
        let offset = if offset == 0 { 1 } else { offset };
        Self(Self::DEFAULT_MAX.0.saturating_add(offset))
    }

    /// Raw numeric value of the tag
    pub const fn value(self) -> u32 {
        self.0
    }

    /// Whether this tag belongs to the range owned by this crate
    pub const fn is_reserved(self) -> bool {
        self.0 <= Self::DEFAULT_MAX.0
    }
}

impl From<u32> for ItemType {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl From<ItemType> for u32 {
    fn from(tag: ItemType) -> Self {
        tag.0
    }
}

/// Resolves the name through the process-wide registry.
impl fmt::Display for ItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&registry::name_of(*self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_reserved_values() {
        assert_eq!(ItemType::EOF.value(), 0);
        assert_eq!(ItemType::ERROR.value(), 1);
        assert_eq!(ItemType::DEFAULT_MAX.value(), 2);
        assert!(ItemType::EOF.is_reserved());
        assert!(ItemType::DEFAULT_MAX.is_reserved());
        assert!(!ItemType::new(3).is_reserved());
    }

    #[test]
    fn test_custom_tags() {
        assert_eq!(ItemType::custom(1), ItemType::new(3));
        assert_eq!(ItemType::custom(10), ItemType::new(12));
        // zero would collide with DEFAULT_MAX
        assert_eq!(ItemType::custom(0), ItemType::new(3));
        assert_eq!(ItemType::custom(u32::MAX), ItemType::new(u32::MAX));
    }

    #[test]
    fn test_display_reserved() {
        assert_eq!(ItemType::EOF.to_string(), "EOF");
        assert_eq!(ItemType::ERROR.to_string(), "Error");
        assert_eq!(ItemType::DEFAULT_MAX.to_string(), "Special (DefaultMax)");
    }

    #[test]
    fn test_display_unknown() {
        assert_eq!(ItemType::new(4_000_000).to_string(), "Unknown Item (4000000)");
    }
}
