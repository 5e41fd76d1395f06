//! Section membership resolution.
//!
//! Answers "is the current request within section X?" against a built
//! [`SectionRegistry`], short-circuiting through the rule chain:
//! registered check → front page → identity → ancestry → custom-type
//! singular/archive → taxonomy-archive scan.

mod context;

pub use context::{CustomTypes, MembershipContext};

use crate::host::RequestState;
use crate::registry::SectionRegistry;

/// Membership test over a registry snapshot and the current request.
///
/// Holds borrows only; construct one wherever a test is needed. Every
/// query is a pure function of (registry, context, request state) with
/// no memoization, so identical inputs always yield identical results.
pub struct MembershipResolver<'a, R: RequestState + ?Sized> {
    registry: &'a SectionRegistry,
    request: &'a R,
}

impl<'a, R: RequestState + ?Sized> MembershipResolver<'a, R> {
    pub fn new(registry: &'a SectionRegistry, request: &'a R) -> Self {
        Self { registry, request }
    }

    /// Check whether the current request falls within `section`.
    ///
    /// Rules apply in order, first match wins:
    /// 1. unregistered sections never match;
    /// 2. the empty section name is reserved for the front page and
    ///    bypasses every other rule;
    /// 3. the section root itself is being viewed (identity);
    /// 4. the root appears in the ancestor chain (ancestry);
    /// 5. a nested custom type is being viewed as singular or archive;
    /// 6. an archive of a taxonomy registered on a nested custom type
    ///    is being viewed (first match across types wins).
    pub fn is_in_section(&self, section: &str, ctx: &MembershipContext) -> bool {
        // make sure the section has been registered
        if !self.registry.contains(section) {
            return false;
        }

        // an empty section means the front page
        if section.is_empty() {
            return self.request.is_front_page();
        }

        // identity and ancestry are cheap and authoritative; when the
        // section has no root item neither can match
        if let Some(root) = self.registry.get_root(section) {
            if self.request.is_page(root) {
                return true;
            }
            if ctx.ancestors.contains(&root) {
                return true;
            }
        }

        // sometimes custom types are nested inside sections
        let types = ctx.custom_types.for_section(section);
        if types.is_empty() {
            return false;
        }
        if self.request.is_singular_of(&types) || self.request.is_archive_of(&types) {
            return true;
        }

        types.iter().any(|t| self.is_taxonomy_archive_for_type(t))
    }

    /// Check whether an archive of any taxonomy registered on
    /// `type_name` is currently being viewed.
    ///
    /// Pure query against request state, recomputed per call; types
    /// typically carry few taxonomies.
    pub fn is_taxonomy_archive_for_type(&self, type_name: &str) -> bool {
        self.request
            .taxonomies_for_type(type_name)
            .iter()
            .any(|taxonomy| self.request.is_taxonomy_archive(taxonomy))
    }
}
