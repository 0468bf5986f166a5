//! Version section extraction from keep-a-changelog style documents.
//!
//! A section starts after a heading line of the form `## [1.2.0] - date`
//! and runs until the next `## [...]` heading or the end of the document.
use regex::Regex;
use std::sync::LazyLock;

use crate::Result;

/// Matches any version heading line, capturing the bracketed label
static VERSION_HEADING_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^##\s+\[(?<version>.+?)\].*$").unwrap()
});

/// Builds a heading pattern for one specific version. The version is
/// escaped so labels such as `1.0.0-beta+exp` are matched literally.
fn version_heading_regex(version: &str) -> Result<Regex> {
    let pattern = format!(r"(?m)^##\s+\[{}\].*$", regex::escape(version));
    Ok(Regex::new(&pattern)?)
}

/// Returns the markdown body of the `version` section, trimmed of
/// surrounding blank lines and whitespace.
///
/// An absent heading yields an empty string rather than an error so the
/// caller can substitute fallback notes. When the same version appears
/// twice the first heading wins, and the duplicate ends the section.
pub fn extract_section(document: &str, version: &str) -> Result<String> {
    let heading = version_heading_regex(version)?;

    let Some(found) = heading.find(document) else {
        return Ok(String::new());
    };

    let start = found.end();

    let end = VERSION_HEADING_REGEX
        .find_at(document, start)
        .map(|next| next.start())
        .unwrap_or(document.len());

    let section = document[start..end].trim_matches('\n').trim();

    Ok(section.to_string())
}

/// Lists every version label that has a heading, in document order.
pub fn find_versions(document: &str) -> Vec<String> {
    VERSION_HEADING_REGEX
        .captures_iter(document)
        .filter_map(|caps| caps.name("version"))
        .map(|m| m.as_str().to_string())
        .collect()
}

#[cfg(test)]
#[path = "./changelog_tests.rs"]
mod tests;
