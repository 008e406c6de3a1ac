//! Registry configuration

/// What happens when a tag that already has a name is registered again
/// with a different name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum CollisionPolicy {
    /// Last write wins, silently
    #[default]
    Overwrite,
    /// Last write wins, and a warning is logged
    Warn,
    /// The first name is kept and registration fails
    Reject,
}

/// Settings for a [`TypeRegistry`](super::TypeRegistry)
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RegistryConfig {
    #[cfg_attr(feature = "serde", serde(default))]
    pub collision: CollisionPolicy,
    /// Refuse registrations for tags at or below `ItemType::DEFAULT_MAX`
    #[cfg_attr(feature = "serde", serde(default))]
    pub protect_reserved: bool,
}

impl RegistryConfig {
    /// Create the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_collision(mut self, collision: CollisionPolicy) -> Self {
        self.collision = collision;
        self
    }

    pub fn with_protect_reserved(mut self, protect_reserved: bool) -> Self {
        self.protect_reserved = protect_reserved;
        self
    }

    /// Strictest setup: reject collisions and protect the reserved range
    pub fn strict() -> Self {
        Self {
            collision: CollisionPolicy::Reject,
            protect_reserved: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_last_write_wins() {
        let config = RegistryConfig::default();
        assert_eq!(config.collision, CollisionPolicy::Overwrite);
        assert!(!config.protect_reserved);
    }

    #[test]
    fn test_builder() {
        let config = RegistryConfig::new()
            .with_collision(CollisionPolicy::Warn)
            .with_protect_reserved(true);
        assert_eq!(config.collision, CollisionPolicy::Warn);
        assert!(config.protect_reserved);
        assert_eq!(RegistryConfig::strict().collision, CollisionPolicy::Reject);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialize_partial() {
        let config: RegistryConfig = serde_json::from_str(r#"{"collision":"reject"}"#).unwrap();
        assert_eq!(config.collision, CollisionPolicy::Reject);
        assert!(!config.protect_reserved);
    }
}
