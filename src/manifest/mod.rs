//! Manifest handling for configure-myst
//!
//! This module contains data structures for:
//! - `article.yml` - Article manifest (input)
//! - `myst.yml` - MyST site manifest (output)
//!
//! [`yaml`] holds the YAML writer used for the output.

pub mod article;
pub mod site;
pub mod yaml;

// Re-export commonly used types
pub use article::ArticleManifest;
pub use site::{ProjectId, SITE_MANIFEST_FILE, SiteManifest};
