//! MyST site manifest (myst.yml) data structures

use std::fmt;

use serde::Serialize;
use serde_yaml::Value;
use uuid::Uuid;

use super::{ArticleManifest, yaml};
use crate::error::{Result, site};

/// Site manifest file name
pub const SITE_MANIFEST_FILE: &str = "myst.yml";

/// MyST configuration schema version
pub const MANIFEST_VERSION: u32 = 1;

const GITHUB_URL: &str = "https://github.com/stickshift/myst-demo";
const CONTENT_LICENSE: &str = "CC-BY-SA-3.0";
const CODE_LICENSE: &str = "MIT";
const SUBJECT: &str = "tutorial";
const VENUE_TITLE: &str = "Stickshift";
const AUTHOR_NAME: &str = "Andrew Young";
const AUTHOR_EMAIL: &str = "joven@alum.wpi.edu";
const AUTHOR_GITHUB: &str = "stickshift";
const TOC_ROOT: &str = "index.md";
const SITE_TEMPLATE: &str = "article-theme";

/// Per-run project identifier: 128 random bits as 32 lowercase hex digits
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ProjectId(String);

impl ProjectId {
    /// Generate a fresh identifier
    pub fn generate() -> Self {
        Self(Uuid::new_v4().simple().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Contents of myst.yml
///
/// Field order here is the key order of the written document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SiteManifest {
    pub version: u32,
    pub project: Project,
    pub site: Site,
}

/// The `project` section: fixed organizational metadata plus article fields
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Project {
    pub id: ProjectId,
    pub license: License,
    pub github: String,
    pub open_access: bool,
    pub subject: String,
    pub venue: Venue,
    pub authors: Vec<Author>,
    pub banner: Value,
    pub title: Value,
    pub subtitle: Value,
    #[serde(rename = "abstract")]
    pub abstract_text: Value,
    pub date: Value,
    pub toc: Vec<TocEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct License {
    pub content: String,
    pub code: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Venue {
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Author {
    pub name: String,
    pub email: String,
    pub github: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TocEntry {
    pub file: String,
}

/// The `site` section
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Site {
    pub template: String,
}

impl SiteManifest {
    /// Build the site manifest for an article
    ///
    /// The organizational metadata is fixed; only `id` and the five article
    /// fields vary between runs.
    pub fn new(article: ArticleManifest, id: ProjectId) -> Self {
        let ArticleManifest {
            banner,
            title,
            subtitle,
            abstract_text,
            date,
        } = article;

        Self {
            version: MANIFEST_VERSION,
            project: Project {
                id,
                license: License {
                    content: CONTENT_LICENSE.to_string(),
                    code: CODE_LICENSE.to_string(),
                },
                github: GITHUB_URL.to_string(),
                open_access: true,
                subject: SUBJECT.to_string(),
                venue: Venue {
                    title: VENUE_TITLE.to_string(),
                },
                authors: vec![Author {
                    name: AUTHOR_NAME.to_string(),
                    email: AUTHOR_EMAIL.to_string(),
                    github: AUTHOR_GITHUB.to_string(),
                }],
                banner,
                title,
                subtitle,
                abstract_text,
                date,
                toc: vec![TocEntry {
                    file: TOC_ROOT.to_string(),
                }],
            },
            site: Site {
                template: SITE_TEMPLATE.to_string(),
            },
        }
    }

    /// Serialize site manifest to YAML string
    ///
    /// Strings that YAML 1.1 readers would retype (dates, `yes`/`no`, ...)
    /// are single-quoted.
    pub fn to_yaml(&self) -> Result<String> {
        yaml::to_string(self).map_err(|e| site::serialize_failed(e.to_string()))
    }
}
