//! Core types: section templates and content-item identifiers.

mod id;
mod template;

pub use id::ItemId;
pub use template::Template;
