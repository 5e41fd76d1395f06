//! End-to-end flow: rebuild from a fixture catalog, apply config
//! overrides, resolve membership against simulated requests.

use std::io::Write;

use template_map::{
    ContentSource, ItemId, MembershipContext, MembershipResolver, RequestState, SectionRegistry,
    SectionsConfig, Template, TieBreak,
};

// ============================================================================
// Fixture host
// ============================================================================

/// In-memory host: a template catalog, a page tree, and the request
/// currently being served.
#[derive(Default)]
struct FixtureHost {
    /// template name → page ids using it, in host query order
    catalog: Vec<(&'static str, Vec<i64>)>,
    /// child → ancestors
    ancestry: Vec<(u64, Vec<u64>)>,
    /// type → registered taxonomies
    taxonomies: Vec<(&'static str, Vec<&'static str>)>,
    request: Request,
}

/// What the host is currently serving.
#[derive(Default)]
struct Request {
    front_page: bool,
    page: Option<u64>,
    singular: Option<&'static str>,
    archive: Option<&'static str>,
    taxonomy_archive: Option<&'static str>,
}

impl FixtureHost {
    fn site() -> Self {
        Self {
            catalog: vec![
                ("template-news.php", vec![7]),
                ("template-events.php", vec![30]),
                ("template-empty.php", vec![]),
            ],
            ancestry: vec![(23, vec![11, 7]), (31, vec![30])],
            taxonomies: vec![("event", vec!["event-category"]), ("book", vec![])],
            request: Request::default(),
        }
    }

    fn serving(mut self, request: Request) -> Self {
        self.request = request;
        self
    }
}

impl ContentSource for FixtureHost {
    fn templates(&self) -> Vec<Template> {
        self.catalog.iter().map(|(t, _)| Template::new(t)).collect()
    }

    fn pages_using_template(&self, template: &Template) -> Vec<i64> {
        self.catalog
            .iter()
            .find(|(t, _)| *t == template.as_str())
            .map(|(_, ids)| ids.clone())
            .unwrap_or_default()
    }

    fn current_item(&self) -> Option<ItemId> {
        self.request.page.and_then(ItemId::new)
    }

    fn ancestors_of(&self, id: ItemId) -> Vec<ItemId> {
        self.ancestry
            .iter()
            .find(|(child, _)| *child == id.get())
            .map(|(_, ancestors)| ancestors.iter().filter_map(|a| ItemId::new(*a)).collect())
            .unwrap_or_default()
    }
}

impl RequestState for FixtureHost {
    fn is_front_page(&self) -> bool {
        self.request.front_page
    }

    fn is_page(&self, id: ItemId) -> bool {
        self.request.page == Some(id.get())
    }

    fn is_singular_of(&self, types: &[String]) -> bool {
        self.request
            .singular
            .is_some_and(|t| types.iter().any(|ty| ty == t))
    }

    fn is_archive_of(&self, types: &[String]) -> bool {
        self.request
            .archive
            .is_some_and(|t| types.iter().any(|ty| ty == t))
    }

    fn is_taxonomy_archive(&self, taxonomy: &str) -> bool {
        self.request.taxonomy_archive == Some(taxonomy)
    }

    fn taxonomies_for_type(&self, type_name: &str) -> Vec<String> {
        self.taxonomies
            .iter()
            .find(|(t, _)| *t == type_name)
            .map(|(_, taxes)| taxes.iter().map(|s| s.to_string()).collect())
            .unwrap_or_default()
    }
}

fn built_registry(host: &FixtureHost) -> SectionRegistry {
    let registry = SectionRegistry::new();
    registry.rebuild(host);
    registry
}

// ============================================================================
// Scenarios
// ============================================================================

#[test]
fn rebuild_then_lookup() {
    let host = FixtureHost::site();
    let registry = built_registry(&host);

    assert_eq!(registry.get_root("template-news.php"), ItemId::new(7));
    assert_eq!(registry.get_root("template-empty.php"), None);
    assert!(registry.contains("template-empty.php"));
    assert!(!registry.contains("template-missing.php"));
    // catalog templates plus the seeded front-page entry
    assert_eq!(registry.len(), 4);
}

#[test]
fn viewing_child_page_is_in_ancestor_section() {
    let host = FixtureHost::site().serving(Request {
        page: Some(23),
        ..Default::default()
    });
    let registry = built_registry(&host);
    let resolver = MembershipResolver::new(&registry, &host);
    let ctx = MembershipContext::for_request(&host);

    assert_eq!(ctx.current_item, ItemId::new(23));
    assert!(resolver.is_in_section("template-news.php", &ctx));
    assert!(!resolver.is_in_section("template-events.php", &ctx));
}

#[test]
fn viewing_section_root_matches_identity() {
    let host = FixtureHost::site().serving(Request {
        page: Some(7),
        ..Default::default()
    });
    let registry = built_registry(&host);
    let resolver = MembershipResolver::new(&registry, &host);
    let ctx = MembershipContext::for_request(&host);

    assert!(resolver.is_in_section("template-news.php", &ctx));
}

#[test]
fn front_page_section_tracks_request() {
    let host = FixtureHost::site().serving(Request {
        front_page: true,
        ..Default::default()
    });
    let registry = built_registry(&host);
    let resolver = MembershipResolver::new(&registry, &host);

    assert!(resolver.is_in_section("", &MembershipContext::new()));

    let elsewhere = FixtureHost::site().serving(Request {
        page: Some(7),
        ..Default::default()
    });
    let resolver = MembershipResolver::new(&registry, &elsewhere);
    assert!(!resolver.is_in_section("", &MembershipContext::new()));
}

#[test]
fn event_archive_falls_into_events_section_via_hook() {
    let host = FixtureHost::site().serving(Request {
        taxonomy_archive: Some("event-category"),
        ..Default::default()
    });
    let registry = built_registry(&host);
    let resolver = MembershipResolver::new(&registry, &host);

    let ctx = MembershipContext::for_request(&host).with_types_hook(|section| {
        if section == "template-events.php" {
            vec!["event".into()]
        } else {
            Vec::new()
        }
    });

    assert!(resolver.is_in_section("template-events.php", &ctx));
    assert!(!resolver.is_in_section("template-news.php", &ctx));
}

#[test]
fn unregistered_section_never_matches() {
    let host = FixtureHost::site().serving(Request {
        page: Some(7),
        singular: Some("event"),
        front_page: true,
        ..Default::default()
    });
    let registry = built_registry(&host);
    let resolver = MembershipResolver::new(&registry, &host);
    let ctx = MembershipContext::for_request(&host).with_types(vec!["event".into()]);

    assert!(!resolver.is_in_section("template-missing.php", &ctx));
}

#[test]
fn manual_section_without_catalog_template() {
    let host = FixtureHost::site().serving(Request {
        page: Some(99),
        ..Default::default()
    });
    let registry = built_registry(&host);
    assert!(registry.set_manual("legacy-landing", 99));

    let resolver = MembershipResolver::new(&registry, &host);
    assert!(resolver.is_in_section("legacy-landing", &MembershipContext::for_request(&host)));
}

#[test]
fn tie_break_policies_differ_on_shared_template() {
    let mut host = FixtureHost::site();
    host.catalog.push(("template-shared.php", vec![40, 12]));

    let host_order = SectionRegistry::new();
    host_order.rebuild(&host);
    assert_eq!(host_order.get_root("template-shared.php"), ItemId::new(40));

    let lowest = SectionRegistry::with_tie_break(TieBreak::LowestId);
    lowest.rebuild(&host);
    assert_eq!(lowest.get_root("template-shared.php"), ItemId::new(12));
}

#[test]
fn config_file_drives_tie_break_and_overrides() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        "tie-break = \"lowest-id\"\n\n[manual]\n\"template-contact.php\" = 42\n"
    )
    .unwrap();

    let config = SectionsConfig::load(file.path()).unwrap();
    assert_eq!(config.tie_break, TieBreak::LowestId);

    let host = FixtureHost::site();
    let registry = SectionRegistry::from_config(&config);
    registry.rebuild(&host);
    assert_eq!(registry.apply_manual(&config), 1);
    assert_eq!(registry.get_root("template-contact.php"), ItemId::new(42));
    assert_eq!(registry.tie_break(), TieBreak::LowestId);
}

#[test]
fn config_load_surfaces_validation_errors() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "[manual]\n\"template-bad.php\" = -1\n").unwrap();

    assert!(SectionsConfig::load(file.path()).is_err());
}

#[test]
fn resolution_has_no_side_effects() {
    let host = FixtureHost::site().serving(Request {
        page: Some(23),
        ..Default::default()
    });
    let registry = built_registry(&host);
    let snapshot = registry.to_json_value();

    let resolver = MembershipResolver::new(&registry, &host);
    let ctx = MembershipContext::for_request(&host);
    for _ in 0..3 {
        assert!(resolver.is_in_section("template-news.php", &ctx));
        assert!(!resolver.is_in_section("template-empty.php", &ctx));
    }

    assert_eq!(registry.to_json_value(), snapshot);
}
