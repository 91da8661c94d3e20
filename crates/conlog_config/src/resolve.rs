//! Turning category declarations into loggable categories.

use conlog_category::{category_active, Category};

use crate::error::ConfigError;
use crate::types::{CategoryDef, LogConfig};

impl CategoryDef {
    /// The display label: the explicit name, or the table key.
    pub fn label<'a>(&'a self, key: &'a str) -> &'a str {
        self.name.as_deref().unwrap_or(key)
    }

    /// Whether the declaration is active in this build.
    pub fn is_active(&self) -> bool {
        category_active(self.enabled, self.debug_only, cfg!(debug_assertions))
    }

    /// Builds the category, or `None` when it is inactive in this build.
    pub fn to_category<'a>(&'a self, key: &'a str) -> Option<Category<'a, true>> {
        self.is_active().then(|| {
            Category::new(
                self.label(key),
                self.severities,
                self.timestamp,
                self.colors.to_colors(),
            )
        })
    }
}

/// Looks up a declared category by key.
///
/// Returns `Ok(None)` when the category exists but is inactive, so callers can
/// skip logging the same way a disabled compile-time category does.
pub fn resolve_category<'a>(
    config: &'a LogConfig,
    key: &str,
) -> Result<Option<Category<'a, true>>, ConfigError> {
    let (key, def) = config
        .categories
        .get_key_value(key)
        .ok_or_else(|| ConfigError::UnknownCategory(key.to_string()))?;
    Ok(def.to_category(key))
}
