//! Section configuration from `sections.toml`.
//!
//! The file is optional; everything has a default. It carries the two
//! knobs the embedding site may want without code changes:
//!
//! ```toml
//! tie-break = "host-order"   # or "lowest-id"
//!
//! [manual]
//! "template-contact.php" = 42
//! ```
//!
//! `[manual]` entries are applied through
//! [`SectionRegistry::apply_manual`](crate::registry::SectionRegistry::apply_manual)
//! after a rebuild, for sections with no matching catalog template.

mod error;

pub use error::{ConfigDiagnostic, ConfigDiagnostics, ConfigError};

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::log;
use crate::registry::TieBreak;

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing sections.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct SectionsConfig {
    /// Root-selection policy when multiple pages share a template.
    #[serde(default)]
    pub tie_break: TieBreak,

    /// Manual section roots: template name → content-item id.
    #[serde(default)]
    pub manual: BTreeMap<String, i64>,
}

impl SectionsConfig {
    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    ///
    /// Unknown fields are warned about and ignored; validation errors are
    /// collected and returned all at once.
    pub fn load(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        config.validate()?;
        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>)> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}:", display_path);
        log!("warning"; "ignoring:");
        for field in fields {
            eprintln!("- {}", field);
        }
    }

    /// Validate the `[manual]` table.
    ///
    /// Collects all validation errors and returns them at once. The
    /// registry itself skips invalid manual entries silently; the config
    /// file has no legacy callers to protect, so it gets told.
    pub fn validate(&self) -> Result<()> {
        let mut diag = ConfigDiagnostics::new();

        for (template, id) in &self.manual {
            let field = format!("manual.{:?}", template);
            if template.trim().is_empty() {
                diag.error_with_hint(
                    &field,
                    "empty template name",
                    "the empty name is reserved for the front page; remove the entry",
                );
            }
            if *id <= 0 {
                diag.error_with_hint(
                    &field,
                    format!("content-item id must be positive, got {id}"),
                    "look the id up in the host's content admin",
                );
            }
        }

        diag.into_result()
            .map_err(|e| ConfigError::Diagnostics(e).into())
    }
}

// ============================================================================
// Test Helpers
// ============================================================================

/// Parse config, panicking on unknown fields (to catch typos in tests).
#[cfg(test)]
pub fn test_parse_config(content: &str) -> SectionsConfig {
    let (parsed, ignored) = SectionsConfig::parse_with_ignored(content).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================
