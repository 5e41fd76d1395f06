//! Per-call membership context.

use std::borrow::Cow;
use std::fmt;

use crate::core::ItemId;
use crate::host::ContentSource;

// ============================================================================
// Custom-type strategy
// ============================================================================

/// Which custom content types are nested under a section.
///
/// This is the explicit replacement for a host-side filter hook: callers
/// either leave it unset (no custom-type membership possible), pin a
/// fixed set, or supply a callback that answers per section.
#[derive(Default)]
pub enum CustomTypes<'a> {
    /// No custom types nest under any section (the default).
    #[default]
    None,
    /// The same type set applies to whichever section is being tested.
    Fixed(Vec<String>),
    /// Per-section answer, queried with the section name on each call.
    Hook(Box<dyn Fn(&str) -> Vec<String> + 'a>),
}

impl CustomTypes<'_> {
    /// Resolve the type set for `section`, in stable order.
    pub fn for_section(&self, section: &str) -> Cow<'_, [String]> {
        match self {
            Self::None => Cow::Borrowed(&[]),
            Self::Fixed(types) => Cow::Borrowed(types.as_slice()),
            Self::Hook(hook) => Cow::Owned(hook(section)),
        }
    }
}

impl fmt::Debug for CustomTypes<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => f.write_str("CustomTypes::None"),
            Self::Fixed(types) => f.debug_tuple("CustomTypes::Fixed").field(types).finish(),
            Self::Hook(_) => f.write_str("CustomTypes::Hook(..)"),
        }
    }
}

// ============================================================================
// Membership context
// ============================================================================

/// Everything about the current item a membership test needs.
///
/// Built per resolution call, never stored. Only set-membership of
/// `ancestors` matters; order is irrelevant.
#[derive(Debug, Default)]
pub struct MembershipContext<'a> {
    /// The content item being evaluated, if any.
    pub current_item: Option<ItemId>,
    /// Ancestor identifiers of `current_item`.
    pub ancestors: Vec<ItemId>,
    /// Custom types nested under sections.
    pub custom_types: CustomTypes<'a>,
}

impl<'a> MembershipContext<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from the host's view of the current request: the current
    /// item and its ancestor chain.
    pub fn for_request(source: &dyn ContentSource) -> Self {
        let current_item = source.current_item();
        let ancestors = current_item
            .map(|id| source.ancestors_of(id))
            .unwrap_or_default();
        Self {
            current_item,
            ancestors,
            custom_types: CustomTypes::None,
        }
    }

    pub fn with_current(mut self, id: ItemId) -> Self {
        self.current_item = Some(id);
        self
    }

    pub fn with_ancestors(mut self, ancestors: Vec<ItemId>) -> Self {
        self.ancestors = ancestors;
        self
    }

    /// Pin a fixed custom-type set.
    pub fn with_types(mut self, types: Vec<String>) -> Self {
        self.custom_types = CustomTypes::Fixed(types);
        self
    }

    /// Supply a per-section custom-type callback.
    pub fn with_types_hook(mut self, hook: impl Fn(&str) -> Vec<String> + 'a) -> Self {
        self.custom_types = CustomTypes::Hook(Box::new(hook));
        self
    }
}
