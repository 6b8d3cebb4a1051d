//! CLI definitions using clap derive API

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Args, Parser};
use std::path::PathBuf;

/// configure-myst - MyST site configuration generator
///
/// Generate myst.yml for an article directory from its article.yml.
#[derive(Parser, Debug)]
#[command(
    name = "configure-myst",
    author,
    version,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Generate myst.yml from article.yml",
    long_about = "Reads article.yml from an article directory, merges its banner, title, \
                  subtitle, abstract and date into the fixed site metadata, and writes \
                  myst.yml next to it with a freshly generated project id.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  configure-myst articles/intro             \x1b[90m# Write articles/intro/myst.yml\x1b[0m\n   \
                  configure-myst articles/intro --dry-run   \x1b[90m# Print the manifest instead\x1b[0m\n   \
                  configure-myst -v articles/intro          \x1b[90m# Log each step to stderr\x1b[0m\n"
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, short = 'v')]
    pub verbose: bool,

    #[command(flatten)]
    pub configure: ConfigureArgs,
}

/// Arguments for generating myst.yml
#[derive(Args, Debug)]
pub struct ConfigureArgs {
    /// Article directory containing article.yml
    #[arg(value_name = "ARTICLE_PATH")]
    pub article_path: PathBuf,

    /// Print the generated myst.yml instead of writing it
    #[arg(long)]
    pub dry_run: bool,
}
