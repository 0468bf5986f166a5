//! Change notes update command.
//!
//! Runs the whole pipeline for one version:
//!
//! 1. **Read**: load the descriptor and changelog through a [`DocumentStore`]
//! 2. **Extract**: find the version's section in the changelog
//! 3. **Render**: convert the section to HTML, or use the fallback notes when
//!    the section is empty
//! 4. **Patch**: replace the descriptor's change-notes block
//! 5. **Write**: store the patched descriptor, unless running dry
//!
//! Nothing is written unless every earlier step succeeded.
use derive_builder::Builder;
use log::*;
use std::path::PathBuf;

use crate::{
    ChangeNotesError, Result,
    changelog::{extract_section, find_versions},
    cli::Args,
    config::NotesConfig,
    descriptor::Patcher,
    renderer::Renderer,
    store::{DocumentStore, FsStore},
};

/// Inputs for a single change notes update.
#[derive(Debug, Clone, Builder)]
#[builder(setter(into), build_fn(private, name = "_build"))]
pub struct UpdateRequest {
    /// Descriptor rewritten in place
    pub plugin_xml: PathBuf,
    /// Changelog the notes are taken from
    pub changelog: PathBuf,
    /// Version label, without any `v` prefix
    pub version: String,
    /// Skip the final write
    #[builder(default)]
    pub dry_run: bool,
    #[builder(default)]
    pub config: NotesConfig,
}

impl UpdateRequestBuilder {
    pub fn build(&self) -> Result<UpdateRequest> {
        let request = self._build().map_err(|e| {
            ChangeNotesError::invalid_args(format!(
                "Failed to build update request: {}",
                e
            ))
        })?;

        if request.version.trim().is_empty() {
            return Err(ChangeNotesError::invalid_args(
                "version must not be empty",
            ));
        }

        if request.version.starts_with('v')
            && request.version[1..].starts_with(|c: char| c.is_ascii_digit())
        {
            warn!(
                "version {} starts with 'v': changelog headings usually \
                 omit the prefix",
                request.version
            );
        }

        Ok(request)
    }
}

impl UpdateRequest {
    pub fn builder() -> UpdateRequestBuilder {
        UpdateRequestBuilder::default()
    }
}

/// Build an update request from CLI arguments and run it against the
/// filesystem. Dry runs print the patched descriptor to stdout.
pub fn execute(args: &Args) -> Result<()> {
    let config = NotesConfig::load(args.config.as_deref())?;

    let request = UpdateRequest::builder()
        .plugin_xml(args.plugin_xml.clone())
        .changelog(args.changelog.clone())
        .version(args.version.clone())
        .dry_run(args.dry_run)
        .config(config)
        .build()?;

    let patched = update(&FsStore, &request)?;

    if request.dry_run {
        println!("{patched}");
    }

    Ok(())
}

/// Produce the notes HTML for the request's version from changelog text.
pub fn notes_html(changelog: &str, request: &UpdateRequest) -> Result<String> {
    let renderer = Renderer::new(&request.config, &request.version)?;
    let section = extract_section(changelog, &request.version)?;

    if section.is_empty() {
        warn!(
            "no release notes found for version {} in {}: using fallback notes",
            request.version,
            request.changelog.display()
        );
        debug!("changelog versions: {:?}", find_versions(changelog));
        return Ok(renderer.fallback());
    }

    info!(
        "found release notes for version {} ({} lines)",
        request.version,
        section.lines().count()
    );

    Ok(renderer.render(&section))
}

/// Run the update and return the patched descriptor.
///
/// Reads happen before any transformation and the single write happens
/// last, so any error leaves the descriptor untouched.
pub fn update(
    store: &dyn DocumentStore,
    request: &UpdateRequest,
) -> Result<String> {
    let patcher = Patcher::new(&request.config)?;

    let descriptor = store.read(&request.plugin_xml)?;
    let changelog = store.read(&request.changelog)?;

    let html = notes_html(&changelog, request)?;
    let patched = patcher.patch(&descriptor, &html)?;

    match patcher.read_block(&patched) {
        Ok(Some(read_back)) if read_back == html => {
            debug!("verified patched <{}> block", request.config.tag);
        }
        Ok(_) => warn!(
            "patched <{}> block does not read back as the rendered notes",
            request.config.tag
        ),
        Err(err) => {
            warn!("unable to verify patched descriptor as XML: {err}");
        }
    }

    if request.dry_run {
        info!("dry run: not writing {}", request.plugin_xml.display());
        return Ok(patched);
    }

    store.write(&request.plugin_xml, &patched)?;

    info!(
        "updated change notes for version {} in {}",
        request.version,
        request.plugin_xml.display()
    );

    Ok(patched)
}

#[cfg(test)]
#[path = "./command_tests.rs"]
mod tests;
