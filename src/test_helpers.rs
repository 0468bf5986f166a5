//! Common test helper functions shared across test modules.
//!
//! Provides sample documents and configuration builders so each suite
//! exercises the same realistic inputs.
use crate::{command::UpdateRequest, config::NotesConfig};

/// A keep-a-changelog document with an empty Unreleased section.
pub const SAMPLE_CHANGELOG: &str = "# Changelog

All notable changes to this project will be documented in this file.

## [Unreleased]

## [1.1.0] - 2024-03-01

### Added
- Copy all open tabs
- Directory structure header

## [1.0.0] - 2024-01-15

Initial release.
";

/// An IntelliJ plugin descriptor with previous notes in its block.
pub const SAMPLE_DESCRIPTOR: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<idea-plugin>
    <id>io.github.example.copy4lm</id>
    <name>Copy4LM</name>
    <vendor>example</vendor>

    <description>Copy file contents for language models.</description>

    <change-notes>
        <![CDATA[
        <h3>Version 0.9.0 Changes:</h3>
        <p>old notes</p>
        ]]>
    </change-notes>

    <depends>com.intellij.modules.platform</depends>
</idea-plugin>
"#;

/// Creates a NotesConfig with the built-in defaults.
pub fn create_test_config() -> NotesConfig {
    NotesConfig::builder().build().unwrap()
}

/// Creates an UpdateRequest for `version` using the default file names.
pub fn create_test_request(version: &str) -> UpdateRequest {
    UpdateRequest::builder()
        .plugin_xml("plugin.xml")
        .changelog("CHANGELOG.md")
        .version(version)
        .config(create_test_config())
        .build()
        .unwrap()
}
