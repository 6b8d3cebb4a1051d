//! Configure command implementation
//!
//! Reads `article.yml` from an article directory and writes the matching
//! `myst.yml` next to it.

use std::path::{Path, PathBuf};

use console::Style;

use crate::cli::ConfigureArgs;
use crate::common::fs::write_atomic;
use crate::error::{Result, article};
use crate::manifest::{ArticleManifest, ProjectId, SITE_MANIFEST_FILE, SiteManifest};

/// Run configure command
pub fn run(args: ConfigureArgs) -> Result<()> {
    if args.dry_run {
        let manifest = build_site_manifest(&args.article_path)?;
        print!("{}", manifest.to_yaml()?);
        return Ok(());
    }

    let written = configure_article(&args.article_path)?;
    let label = Style::new().green().bold();
    println!("{} {}", label.apply_to("Wrote"), written.display());

    Ok(())
}

/// Generate `myst.yml` for an article directory, returning the path written
///
/// Nothing is written unless the whole manifest could be built.
pub fn configure_article(article_dir: &Path) -> Result<PathBuf> {
    let manifest = build_site_manifest(article_dir)?;
    let yaml = manifest.to_yaml()?;

    let output = article_dir.join(SITE_MANIFEST_FILE);
    write_atomic(&output, &yaml)?;
    tracing::debug!(path = %output.display(), bytes = yaml.len(), "wrote site manifest");

    Ok(output)
}

/// Validate the article directory and build its site manifest in memory
pub fn build_site_manifest(article_dir: &Path) -> Result<SiteManifest> {
    validate_article_dir(article_dir)?;

    let article = ArticleManifest::load(article_dir)?;
    tracing::debug!(dir = %article_dir.display(), "loaded article manifest");

    let id = ProjectId::generate();
    tracing::debug!(%id, "generated project id");

    Ok(SiteManifest::new(article, id))
}

fn validate_article_dir(article_dir: &Path) -> Result<()> {
    let path = article_dir.display().to_string();

    if !article_dir.exists() {
        return Err(article::invalid_input(path, "path does not exist"));
    }
    if !article_dir.is_dir() {
        return Err(article::invalid_input(path, "path is not a directory"));
    }

    tracing::debug!(dir = %path, "validated article directory");
    Ok(())
}
