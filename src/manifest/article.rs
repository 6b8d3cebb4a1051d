//! Article manifest (article.yml) data structures

use std::fs;
use std::io;
use std::path::Path;

use serde_yaml::{Mapping, Value};

use crate::error::{Result, article, fs as fs_error};

/// Article manifest file name
pub const ARTICLE_MANIFEST_FILE: &str = "article.yml";

/// Article metadata read from article.yml
///
/// `banner`, `title`, `subtitle`, `abstract` and `date` are required and
/// checked in that order. Values are kept as raw YAML so they are copied
/// into the site manifest exactly as written. Only presence is checked,
/// never shape.
#[derive(Debug, Clone, PartialEq)]
pub struct ArticleManifest {
    pub banner: Value,
    pub title: Value,
    pub subtitle: Value,
    pub abstract_text: Value,
    pub date: Value,
}

impl ArticleManifest {
    /// Load `article.yml` from an article directory
    pub fn load(article_dir: &Path) -> Result<Self> {
        let path = article_dir.join(ARTICLE_MANIFEST_FILE);

        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(article::not_found(path.display().to_string()));
            }
            Err(e) if e.kind() == io::ErrorKind::InvalidData => {
                return Err(article::parse_failed(
                    path.display().to_string(),
                    e.to_string(),
                ));
            }
            Err(e) => {
                return Err(fs_error::read_failed(
                    path.display().to_string(),
                    e.to_string(),
                ));
            }
        };

        Self::from_yaml(&content, &path)
    }

    /// Parse an article manifest from YAML
    ///
    /// Merge keys (`<<: *anchor`) are resolved before the required fields are
    /// looked up. `path` is only used for error messages.
    pub fn from_yaml(yaml: &str, path: &Path) -> Result<Self> {
        let parse_failed = |e: serde_yaml::Error| {
            article::parse_failed(path.display().to_string(), e.to_string())
        };

        let mut document: Value = serde_yaml::from_str(yaml).map_err(parse_failed)?;
        document.apply_merge().map_err(parse_failed)?;

        let Value::Mapping(mapping) = document else {
            return Err(article::parse_failed(
                path.display().to_string(),
                "expected a mapping at the top level",
            ));
        };

        let field = |name: &str| required_field(&mapping, name, path);

        Ok(Self {
            banner: field("banner")?,
            title: field("title")?,
            subtitle: field("subtitle")?,
            abstract_text: field("abstract")?,
            date: field("date")?,
        })
    }
}

/// Copy a required key out of the manifest, failing on the first absent one
///
/// A key present with a null value counts as present.
fn required_field(mapping: &Mapping, name: &str, path: &Path) -> Result<Value> {
    mapping
        .get(name)
        .cloned()
        .ok_or_else(|| article::missing_field(path.display().to_string(), name))
}
