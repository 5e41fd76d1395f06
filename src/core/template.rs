//! Template key type for section lookup.

use std::borrow::Borrow;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// A section's template key.
///
/// Invariants:
/// - Trimmed (host catalogs occasionally pad template names)
/// - The empty key is reserved for the front page / site root
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Template(Arc<str>);

impl Template {
    /// Create a template key, trimming surrounding whitespace.
    pub fn new(name: &str) -> Self {
        Self(Arc::from(name.trim()))
    }

    /// The reserved front-page key.
    pub fn front_page() -> Self {
        Self(Arc::from(""))
    }

    /// Check whether this is the reserved front-page key.
    #[inline]
    pub fn is_front_page(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the template key as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Template {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Template {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Template {
    fn from(name: String) -> Self {
        Self::new(&name)
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_trims() {
        assert_eq!(Template::new("  template-about.php ").as_str(), "template-about.php");
    }

    #[test]
    fn test_front_page_is_empty_key() {
        assert!(Template::front_page().is_front_page());
        assert!(Template::new("   ").is_front_page());
        assert!(!Template::new("template-news.php").is_front_page());
    }

    #[test]
    fn test_borrow_matches_hash_lookup() {
        use rustc_hash::FxHashMap;

        let mut map: FxHashMap<Template, u32> = FxHashMap::default();
        map.insert(Template::new("template-news.php"), 1);
        assert_eq!(map.get("template-news.php"), Some(&1));
    }
}
