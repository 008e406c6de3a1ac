//! Item type name registry
//!
//! Maps [`ItemType`] tags to human-readable names for display and
//! diagnostics. Every registry starts out knowing the reserved tags; lexers
//! add names for their own tags, usually once at start-up.
//!
//! A process-wide registry backs `Display` for [`ItemType`] and
//! [`Item`](crate::Item). It is initialised on first use and can be extended
//! through [`register`] from any thread. Code that wants isolated naming
//! (tests, several languages in one process) can build its own
//! [`TypeRegistry`] and render with [`Item::display_with`](crate::Item::display_with).
//!
//! # Thread Safety
//! The map sits behind a `RwLock`, so lookups and registrations from
//! different threads are safe. Names are expected to be registered before
//! lexing starts; registering while other threads display items is allowed
//! but the displayed name depends on timing.

use std::borrow::Cow;

use lazy_static::lazy_static;
use parking_lot::RwLock;
use rustc_hash::FxHashMap;

use crate::error::{RegistryError, RegistryResult};
use crate::item::ItemType;

pub mod config;

pub use config::{CollisionPolicy, RegistryConfig};

const RESERVED_NAMES: [(ItemType, &str); 3] = [
    (ItemType::EOF, "EOF"),
    (ItemType::ERROR, "Error"),
    (ItemType::DEFAULT_MAX, "Special (DefaultMax)"),
];

lazy_static! {
    static ref GLOBAL: TypeRegistry = TypeRegistry::new();
}

/// Mapping from item type tags to display names
#[derive(Debug)]
pub struct TypeRegistry {
    names: RwLock<FxHashMap<ItemType, Cow<'static, str>>>,
    config: RegistryConfig,
}

impl TypeRegistry {
    /// Create a registry holding only the reserved names
    pub fn new() -> Self {
        Self::with_config(RegistryConfig::default())
    }

    /// Create a registry holding only the reserved names, with custom settings
    pub fn with_config(config: RegistryConfig) -> Self {
        let mut names = FxHashMap::default();
        for (tag, name) in RESERVED_NAMES {
            names.insert(tag, Cow::Borrowed(name));
        }
        Self {
            names: RwLock::new(names),
            config,
        }
    }

    /// The process-wide registry
    pub fn global() -> &'static TypeRegistry {
        &GLOBAL
    }

    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// Register `name` for `tag`, returning the name it replaced.
    ///
    /// Under the default configuration this always succeeds and the last
    /// registration for a tag wins. Re-registering the same name is never a
    /// collision.
    pub fn register(
        &self,
        tag: ItemType,
        name: impl Into<Cow<'static, str>>,
    ) -> RegistryResult<Option<String>> {
        let name = name.into();

        if self.config.protect_reserved && tag.is_reserved() {
            tracing::warn!(tag = tag.value(), name = %name, "refusing to rename reserved item type");
            return Err(RegistryError::ReservedTag {
                tag,
                name: name.into_owned(),
            });
        }

        let mut names = self.names.write();
        if let Some(existing) = names.get(&tag) {
            if *existing == name {
                return Ok(None);
            }
            match self.config.collision {
                CollisionPolicy::Overwrite => {}
                CollisionPolicy::Warn => {
                    tracing::warn!(
                        tag = tag.value(),
                        existing = %existing,
                        name = %name,
                        "item type renamed"
                    );
                }
                CollisionPolicy::Reject => {
                    tracing::warn!(
                        tag = tag.value(),
                        existing = %existing,
                        name = %name,
                        "rejected item type name collision"
                    );
                    return Err(RegistryError::Collision {
                        tag,
                        existing: existing.to_string(),
                        attempted: name.into_owned(),
                    });
                }
            }
        }

        tracing::debug!(tag = tag.value(), name = %name, "registered item type");
        Ok(names.insert(tag, name).map(Cow::into_owned))
    }

    /// Display name for `tag`, or `Unknown Item (<n>)` if it was never registered
    pub fn name_of(&self, tag: ItemType) -> String {
        match self.names.read().get(&tag) {
            Some(name) => name.to_string(),
            None => {
                tracing::trace!(tag = tag.value(), "no name registered for item type");
                format!("Unknown Item ({})", tag.value())
            }
        }
    }

    pub fn contains(&self, tag: ItemType) -> bool {
        self.names.read().contains_key(&tag)
    }

    pub fn len(&self) -> usize {
        self.names.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.read().is_empty()
    }

    /// All registered names, ordered by tag
    pub fn snapshot(&self) -> Vec<(ItemType, String)> {
        let mut entries: Vec<(ItemType, String)> = self
            .names
            .read()
            .iter()
            .map(|(tag, name)| (*tag, name.to_string()))
            .collect();
        entries.sort_unstable_by_key(|(tag, _)| *tag);
        entries
    }
}

impl Default for TypeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Register `name` for `tag` in the process-wide registry.
///
/// The process-wide registry uses the default configuration, so this never
/// fails; the replaced name, if any, is returned.
pub fn register(tag: ItemType, name: impl Into<Cow<'static, str>>) -> Option<String> {
    match TypeRegistry::global().register(tag, name) {
        Ok(previous) => previous,
        // unreachable with the default configuration
        Err(err) => {
            tracing::error!(%err, "process-wide registration failed");
            None
        }
    }
}

/// Display name for `tag` from the process-wide registry
pub fn name_of(tag: ItemType) -> String {
    TypeRegistry::global().name_of(tag)
}
