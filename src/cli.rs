//! CLI argument parsing.
use clap::Parser;
use std::path::PathBuf;

/// Update a plugin descriptor's change notes from a CHANGELOG.md section.
#[derive(Parser, Debug)]
#[command(about, long_about = None, disable_version_flag = true)]
pub struct Args {
    #[arg(long)]
    /// Plugin descriptor to update in place
    /// (e.g. src/main/resources/META-INF/plugin.xml).
    pub plugin_xml: PathBuf,

    #[arg(long)]
    /// Changelog containing `## [<version>]` sections.
    pub changelog: PathBuf,

    #[arg(long)]
    /// Version without 'v' prefix (e.g. 0.1.0).
    pub version: String,

    #[arg(long)]
    /// Configuration file. Defaults to change-notes.toml when present.
    pub config: Option<PathBuf>,

    #[arg(long, default_value_t = false)]
    /// Print the patched descriptor instead of writing it.
    pub dry_run: bool,

    #[arg(long, default_value_t = false)]
    /// Enable debug logging.
    pub debug: bool,
}
