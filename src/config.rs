//! Configuration loading and parsing for `change-notes.toml` files.
//!
//! Every field is optional; a missing file or missing field falls back to the
//! values the IntelliJ `plugin.xml` release workflow expects.
use color_eyre::eyre::WrapErr;
use derive_builder::Builder;
use log::*;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

use crate::{ChangeNotesError, Result};

/// Default configuration filename.
pub const DEFAULT_CONFIG_FILE: &str = "change-notes.toml";

/// Default descriptor element whose content is replaced.
pub const DEFAULT_TAG: &str = "change-notes";

/// Default indentation unit added inside the element.
pub const DEFAULT_INDENT: &str = "    ";

/// Default title template, rendered with tera.
pub const DEFAULT_TITLE: &str = "Version {{ version }} Changes:";

/// Default message used when the changelog has no section for the version.
pub const DEFAULT_FALLBACK: &str =
    "No release notes were found in CHANGELOG.md.";

/// Change notes rendering and patching configuration
#[derive(
    Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema, Builder,
)]
#[builder(setter(into), default)]
#[serde(default)] // Use default for missing fields
pub struct NotesConfig {
    /// Descriptor element name (without angle brackets) to replace
    pub tag: String,
    /// Indentation unit nested inside the element (spaces and tabs only)
    pub indent: String,
    /// Title template; `{{ version }}` expands to the version label
    pub title: String,
    /// Message shown when no release notes exist for the version
    pub fallback: String,
}

impl Default for NotesConfig {
    fn default() -> Self {
        Self {
            tag: DEFAULT_TAG.into(),
            indent: DEFAULT_INDENT.into(),
            title: DEFAULT_TITLE.into(),
            fallback: DEFAULT_FALLBACK.into(),
        }
    }
}

impl NotesConfig {
    pub fn builder() -> NotesConfigBuilder {
        NotesConfigBuilder::default()
    }

    /// Parse and validate configuration from TOML content.
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: NotesConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from `path`, or from [`DEFAULT_CONFIG_FILE`] in
    /// the working directory when no path is given. Only the default file
    /// is allowed to be missing.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            let default_path = Path::new(DEFAULT_CONFIG_FILE);

            if !default_path.exists() {
                debug!("no {DEFAULT_CONFIG_FILE} found: using defaults");
                return Ok(Self::default());
            }

            return Self::load(Some(default_path));
        };

        info!("loading configuration: {}", path.display());

        let content = fs::read_to_string(path).wrap_err_with(|| {
            format!("failed to read config file: {}", path.display())
        })?;

        Self::from_toml(&content)
    }

    /// Reject values that would produce a malformed descriptor.
    pub fn validate(&self) -> Result<()> {
        if self.tag.is_empty() {
            return Err(ChangeNotesError::invalid_config(
                "tag must not be empty",
            ));
        }

        if self
            .tag
            .chars()
            .any(|c| c.is_whitespace() || matches!(c, '<' | '>' | '/'))
        {
            return Err(ChangeNotesError::invalid_config(format!(
                "tag must be a bare element name: {}",
                self.tag
            )));
        }

        if self.indent.chars().any(|c| c != ' ' && c != '\t') {
            return Err(ChangeNotesError::invalid_config(
                "indent may only contain spaces and tabs",
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::fs;
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn default_matches_built_in_values() {
        let config = NotesConfig::default();

        assert_eq!(config.tag, "change-notes");
        assert_eq!(config.indent, "    ");
        assert_eq!(config.title, "Version {{ version }} Changes:");
        assert_eq!(
            config.fallback,
            "No release notes were found in CHANGELOG.md."
        );
    }

    #[test]
    fn parses_partial_config_with_defaults() {
        let config = NotesConfig::from_toml(
            r#"
indent = "  "
fallback = "See the changelog."
"#,
        )
        .unwrap();

        assert_eq!(config.tag, DEFAULT_TAG);
        assert_eq!(config.indent, "  ");
        assert_eq!(config.title, DEFAULT_TITLE);
        assert_eq!(config.fallback, "See the changelog.");
    }

    #[test]
    fn empty_config_is_default() {
        let config = NotesConfig::from_toml("").unwrap();

        assert_eq!(config, NotesConfig::default());
    }

    #[test]
    fn rejects_malformed_toml() {
        let result = NotesConfig::from_toml("tag = ");

        assert!(matches!(result, Err(ChangeNotesError::TomlParseError(_))));
    }

    #[test]
    fn rejects_empty_tag() {
        let result = NotesConfig::from_toml(r#"tag = """#);

        assert!(matches!(result, Err(ChangeNotesError::InvalidConfig(_))));
    }

    #[test]
    fn rejects_tag_with_markup() {
        for tag in ["<change-notes>", "change notes", "a/b"] {
            let config = NotesConfig::builder().tag(tag).build().unwrap();

            assert!(
                matches!(
                    config.validate(),
                    Err(ChangeNotesError::InvalidConfig(_))
                ),
                "expected {tag} to be rejected"
            );
        }
    }

    #[test]
    fn rejects_non_whitespace_indent() {
        let config = NotesConfig::builder().indent("--").build().unwrap();

        assert!(matches!(
            config.validate(),
            Err(ChangeNotesError::InvalidConfig(_))
        ));
    }

    #[test]
    fn builder_fills_unset_fields_with_defaults() {
        let config = NotesConfig::builder().indent("\t").build().unwrap();

        assert_eq!(config.indent, "\t");
        assert_eq!(config.tag, DEFAULT_TAG);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn loads_explicit_config_file() {
        let tmp_dir = TempDir::new().unwrap();
        let path = tmp_dir.path().join("notes.toml");
        fs::write(&path, "tag = \"release-notes\"\n").unwrap();

        let config = NotesConfig::load(Some(&path)).unwrap();

        assert_eq!(config.tag, "release-notes");
    }

    #[test]
    fn missing_explicit_config_file_is_an_error() {
        let tmp_dir = TempDir::new().unwrap();
        let path = tmp_dir.path().join("missing.toml");

        let result = NotesConfig::load(Some(&path));

        assert!(matches!(result, Err(ChangeNotesError::Other(_))));
    }
}
