//! Navigator configuration

use crate::node::Level;

/// Default node capacity of [`Menu`](crate::Menu)
pub const DEFAULT_CAPACITY: usize = 64;

/// Text shown for entries without a payload
pub const DEFAULT_PLACEHOLDER: &str = "E0  ";

/// Navigator settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MenuConfig {
    /// Text handed to the text renderer when the cursor has no payload
    pub placeholder: &'static str,
    /// Deepest group level `add_child` will create
    pub max_level: Level,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl MenuConfig {
    pub const fn new() -> Self {
        Self {
            placeholder: DEFAULT_PLACEHOLDER,
            max_level: Level::MAX,
        }
    }

    pub const fn with_placeholder(mut self, placeholder: &'static str) -> Self {
        self.placeholder = placeholder;
        self
    }

    /// Limit nesting depth, e.g. to what a display can indicate
    pub const fn with_max_level(mut self, max_level: Level) -> Self {
        self.max_level = max_level;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = MenuConfig::default();
        assert_eq!(config.placeholder, "E0  ");
        assert_eq!(config.max_level, Level::MAX);
    }

    #[test]
    fn test_builders() {
        let config = MenuConfig::new()
            .with_placeholder("----")
            .with_max_level(Level(3));
        assert_eq!(config.placeholder, "----");
        assert_eq!(config.max_level, Level(3));
    }
}
