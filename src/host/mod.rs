//! Capability traits for the host content-management system.
//!
//! The core never talks to a CMS directly; everything it needs from the
//! host (template catalog, content queries, request-state introspection)
//! comes through these two traits. Production code implements them over
//! the real host; tests implement them with fixture data.

use crate::core::{ItemId, Template};

// ============================================================================
// Content Source
// ============================================================================

/// Catalog and content-tree introspection.
///
/// Backs [`SectionRegistry::rebuild`](crate::registry::SectionRegistry::rebuild)
/// and [`MembershipContext::for_request`](crate::resolver::MembershipContext::for_request).
pub trait ContentSource {
    /// All template names known to the active theme/skin's catalog.
    fn templates(&self) -> Vec<Template>;

    /// Identifiers of content items of type page using `template`, in the
    /// order the host query surfaces them.
    ///
    /// Identifiers are raw host values; the registry coerces them (zero
    /// means absent, negative values are folded to their absolute value)
    /// and applies its tie-break policy.
    fn pages_using_template(&self, template: &Template) -> Vec<i64>;

    /// The content item the current request resolves to, if any.
    fn current_item(&self) -> Option<ItemId>;

    /// Ancestor identifiers of `id` in the containment hierarchy.
    /// Only set-membership matters to the resolver; any order is fine.
    fn ancestors_of(&self, id: ItemId) -> Vec<ItemId>;
}

// ============================================================================
// Request State
// ============================================================================

/// Introspection of the request currently being served.
pub trait RequestState {
    /// Is the current request the site front page?
    fn is_front_page(&self) -> bool;

    /// Is the current request a page view of exactly `id`?
    fn is_page(&self, id: ItemId) -> bool;

    /// Is the current request a singular view of any of `types`?
    fn is_singular_of(&self, types: &[String]) -> bool;

    /// Is the current request an archive listing of any of `types`?
    fn is_archive_of(&self, types: &[String]) -> bool;

    /// Is the current request an archive of `taxonomy`?
    fn is_taxonomy_archive(&self, taxonomy: &str) -> bool;

    /// Taxonomy names registered on `type_name`.
    fn taxonomies_for_type(&self, type_name: &str) -> Vec<String>;
}
