//! Section registry: the template → root-identifier cache.
//!
//! Built once per initialization cycle from the host template catalog
//! (one query per template), optionally amended with manual overrides,
//! then read by resolution call sites for the rest of the lifecycle.
//! Usage contract is single-writer-then-many-readers: `rebuild` and
//! overrides run during initialization, lookups after.

use std::collections::BTreeMap;

use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::config::SectionsConfig;
use crate::core::{ItemId, Template};
use crate::debug;
use crate::host::ContentSource;

// ============================================================================
// Tie-break policy
// ============================================================================

/// Policy for picking one root when multiple pages share a template.
///
/// The host query surfaces candidates in some backing-store order; which
/// one anchors the section is a policy choice, not an accident of the
/// backing store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TieBreak {
    /// First candidate the host query surfaces wins.
    #[default]
    HostOrder,
    /// Smallest identifier wins (stable across backing-store reordering).
    LowestId,
}

// ============================================================================
// Rebuild summary
// ============================================================================

/// Counts reported by [`SectionRegistry::rebuild`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RebuildSummary {
    /// Templates enumerated from the catalog.
    pub templates: usize,
    /// Templates with a root item found.
    pub mapped: usize,
    /// Templates with no matching item (entry stored as absent).
    pub empty: usize,
}

// ============================================================================
// Section registry
// ============================================================================

/// Cache mapping each section template to its root content item.
///
/// An entry's value is `None` when no content item currently uses the
/// template; absence of the *key* means the section was never registered.
/// [`SectionRegistry::contains`] is the only way to tell the two apart.
#[derive(Debug, Default)]
pub struct SectionRegistry {
    cache: RwLock<FxHashMap<Template, Option<ItemId>>>,
    tie_break: TieBreak,
}

impl SectionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with an explicit tie-break policy.
    pub fn with_tie_break(tie_break: TieBreak) -> Self {
        Self {
            cache: RwLock::default(),
            tie_break,
        }
    }

    /// Create with the tie-break policy from `config`.
    pub fn from_config(config: &SectionsConfig) -> Self {
        Self::with_tie_break(config.tie_break)
    }

    /// The active tie-break policy.
    pub fn tie_break(&self) -> TieBreak {
        self.tie_break
    }

    /// Rebuild the cache from the host template catalog.
    ///
    /// Issues one host query per catalog template and replaces the whole
    /// cache (full replace, not merge); repeated calls are idempotent only
    /// if the underlying content store is unchanged. The reserved
    /// front-page entry (`""` → absent) is always seeded so the empty
    /// section name stays resolvable.
    pub fn rebuild(&self, source: &dyn ContentSource) -> RebuildSummary {
        let templates = source.templates();

        let mut fresh = FxHashMap::default();
        fresh.insert(Template::front_page(), None);

        let mut summary = RebuildSummary {
            templates: templates.len(),
            mapped: 0,
            empty: 0,
        };

        for template in templates {
            let root = self.pick_root(source.pages_using_template(&template));
            match root {
                Some(_) => summary.mapped += 1,
                None => summary.empty += 1,
            }
            fresh.insert(template, root);
        }

        *self.cache.write() = fresh;

        debug!(
            "sections";
            "rebuilt {} templates ({} mapped, {} empty)",
            summary.templates, summary.mapped, summary.empty
        );

        summary
    }

    /// Pick one root from host-ordered candidates per the tie-break policy.
    fn pick_root(&self, candidates: Vec<i64>) -> Option<ItemId> {
        let mut ids = candidates.into_iter().filter_map(ItemId::coerce);
        match self.tie_break {
            TieBreak::HostOrder => ids.next(),
            TieBreak::LowestId => ids.min(),
        }
    }

    /// Manually register a section root without a catalog template.
    ///
    /// Silently ignores invalid input: an empty (or all-whitespace)
    /// template name or a non-positive id leaves the cache untouched.
    /// Returns whether the entry was stored; callers that don't care can
    /// drop the flag, preserving the historical fire-and-forget contract.
    pub fn set_manual(&self, template: &str, id: i64) -> bool {
        let template = Template::new(template);
        if template.is_front_page() || id <= 0 {
            debug!("sections"; "manual entry ignored: `{}` => {}", template, id);
            return false;
        }

        self.cache.write().insert(template, ItemId::coerce(id));
        true
    }

    /// Apply the `[manual]` override table from `config`.
    ///
    /// Each entry goes through [`set_manual`](Self::set_manual) and keeps
    /// its silent-skip semantics. Returns how many entries were stored.
    pub fn apply_manual(&self, config: &SectionsConfig) -> usize {
        config
            .manual
            .iter()
            .filter(|(template, id)| self.set_manual(template, **id))
            .count()
    }

    /// Look up the root identifier for `template`.
    ///
    /// Returns `None` both for unknown templates and for registered
    /// templates with no matching content item; use
    /// [`contains`](Self::contains) when that distinction matters.
    pub fn get_root(&self, template: &str) -> Option<ItemId> {
        self.cache.read().get(template).copied().flatten()
    }

    /// Check whether `template` has been registered at all.
    pub fn contains(&self, template: &str) -> bool {
        self.cache.read().contains_key(template)
    }

    pub fn len(&self) -> usize {
        self.cache.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.read().is_empty()
    }

    /// Snapshot the cache as JSON for diagnostics (sorted by template).
    pub fn to_json_value(&self) -> serde_json::Value {
        let cache = self.cache.read();
        let sorted: BTreeMap<&str, Option<ItemId>> = cache
            .iter()
            .map(|(template, root)| (template.as_str(), *root))
            .collect();
        serde_json::to_value(&sorted).unwrap_or(serde_json::Value::Null)
    }

    /// Insert an entry directly, bypassing catalog and validation.
    #[cfg(test)]
    pub(crate) fn insert_for_tests(&self, template: &str, root: Option<ItemId>) {
        self.cache.write().insert(Template::new(template), root);
    }
}
