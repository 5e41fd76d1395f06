//! template-map - section membership resolution for template-mapped content.
//!
//! Content-item identifiers can't be relied on across environments, and
//! slugs aren't much better; the one stable designation is the template a
//! section's root page uses. This crate builds a template → root-id cache
//! from the host CMS's catalog and answers "is the current request within
//! section X?" using ancestry, custom-type, and taxonomy-archive rules.
//!
//! The host is abstracted behind two capability traits
//! ([`ContentSource`], [`RequestState`]); the crate never queries a CMS
//! directly.
//!
//! # Example
//!
//! ```ignore
//! let config = SectionsConfig::load(Path::new("sections.toml"))?;
//! let registry = SectionRegistry::from_config(&config);
//! registry.rebuild(&host);
//! registry.apply_manual(&config);
//!
//! let ctx = MembershipContext::for_request(&host);
//! let resolver = MembershipResolver::new(&registry, &host);
//! if resolver.is_in_section("template-news.php", &ctx) {
//!     // mark the News nav item current
//! }
//! ```

pub mod config;
pub mod core;
pub mod host;
pub mod logger;
pub mod registry;
pub mod resolver;

pub use config::{ConfigDiagnostic, ConfigDiagnostics, ConfigError, SectionsConfig};
pub use core::{ItemId, Template};
pub use host::{ContentSource, RequestState};
pub use registry::{RebuildSummary, SectionRegistry, TieBreak};
pub use resolver::{CustomTypes, MembershipContext, MembershipResolver};
