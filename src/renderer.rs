//! Markdown subset to HTML conversion for descriptor change notes.
//!
//! Only the constructs that show up in release notes are understood:
//!
//! - `### Heading` lines become `<h4>` elements
//! - `-` and `*` bullets become `<ul>` lists
//! - any other run of lines becomes a `<p>` paragraph
//!
//! Inline markdown (emphasis, links, code spans) is not interpreted. All text
//! is HTML-escaped so it passes through literally.
use log::*;
use quick_xml::escape::escape;
use regex::Regex;
use std::sync::LazyLock;
use tera::{Context, Tera};

use crate::{
    Result,
    config::{DEFAULT_FALLBACK, NotesConfig},
};

const SUBHEADING_MARKER: &str = "### ";

/// Every line boundary recognized in changelog text, including lone `\r`,
/// form feeds and the Unicode line and paragraph separators
static LINE_BREAK_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\r\n|[\n\r\x0B\x0C\x1C-\x1E\x{85}\x{2028}\x{2029}]")
        .unwrap()
});

/// Matches a bullet line, capturing the item text after the marker
static BULLET_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*[-*]\s+(?<item>.+)").unwrap());

/// Classification of a single trimmed markdown line.
#[derive(Debug, PartialEq)]
enum Line<'a> {
    Blank,
    Heading(&'a str),
    Bullet(&'a str),
    Text(&'a str),
}

impl<'a> Line<'a> {
    fn classify(line: &'a str) -> Self {
        if line.is_empty() {
            return Line::Blank;
        }

        if let Some(heading) = line.strip_prefix(SUBHEADING_MARKER) {
            return Line::Heading(heading.trim());
        }

        if let Some(item) =
            BULLET_REGEX.captures(line).and_then(|caps| caps.name("item"))
        {
            return Line::Bullet(item.as_str().trim());
        }

        Line::Text(line)
    }
}

/// Escape `&`, `<`, `>` and both quote characters for embedding in HTML.
///
/// `&apos;` is not an HTML 3.2 entity, so `'` becomes `&#x27;`.
pub fn escape_html(text: &str) -> String {
    escape(text).replace("&apos;", "&#x27;")
}

/// Renders changelog sections for a single version.
///
/// The title and fallback message are resolved once at construction so
/// rendering itself cannot fail.
#[derive(Debug, Clone)]
pub struct Renderer {
    title: String,
    fallback: String,
}

impl Renderer {
    /// Create a renderer using the configured title template and fallback
    /// message. The title template is rendered with tera and receives the
    /// version as `version`.
    pub fn new(config: &NotesConfig, version: &str) -> Result<Self> {
        let mut context = Context::new();
        context.insert("version", version);

        let title = Tera::one_off(&config.title, &context, false)?;

        debug!("rendered change notes title: {title}");

        Ok(Self {
            title: format!("<h3>{}</h3>", escape_html(&title)),
            fallback: format!("<p>{}</p>", escape_html(&config.fallback)),
        })
    }

    /// Create a renderer with the built-in title and fallback message.
    pub fn for_version(version: &str) -> Self {
        Self {
            title: format!(
                "<h3>Version {} Changes:</h3>",
                escape_html(version)
            ),
            fallback: format!("<p>{}</p>", escape_html(DEFAULT_FALLBACK)),
        }
    }

    /// The escaped `<h3>` title element.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Convert a markdown section to HTML, one element per line.
    pub fn render(&self, section: &str) -> String {
        let lines = LINE_BREAK_REGEX
            .split(section)
            .map(str::trim)
            .collect::<Vec<_>>();

        let mut out = vec![self.title.clone()];
        let mut in_list = false;
        let mut i = 0;

        while i < lines.len() {
            match Line::classify(lines[i]) {
                Line::Blank => {
                    close_list(&mut out, &mut in_list);
                    i += 1;
                }
                Line::Heading(heading) => {
                    close_list(&mut out, &mut in_list);
                    out.push(format!("<h4>{}</h4>", escape_html(heading)));
                    i += 1;
                }
                Line::Bullet(item) => {
                    if !in_list {
                        out.push("<ul>".to_string());
                        in_list = true;
                    }
                    out.push(format!("<li>{}</li>", escape_html(item)));
                    i += 1;
                }
                Line::Text(text) => {
                    close_list(&mut out, &mut in_list);

                    let mut paragraph = vec![text];
                    i += 1;

                    while let Some(Line::Text(next)) =
                        lines.get(i).copied().map(Line::classify)
                    {
                        paragraph.push(next);
                        i += 1;
                    }

                    let paragraph = paragraph.join(" ");
                    out.push(format!("<p>{}</p>", escape_html(&paragraph)));
                }
            }
        }

        close_list(&mut out, &mut in_list);

        out.join("\n")
    }

    /// Notes used when the changelog has no section for the version: the
    /// title followed by a single fixed paragraph.
    pub fn fallback(&self) -> String {
        format!("{}\n{}", self.title, self.fallback)
    }
}

fn close_list(out: &mut Vec<String>, in_list: &mut bool) {
    if *in_list {
        out.push("</ul>".to_string());
        *in_list = false;
    }
}

/// Render a markdown section with the built-in title.
pub fn render(section: &str, version: &str) -> String {
    Renderer::for_version(version).render(section)
}

/// Built-in fallback notes for a version with no changelog section.
pub fn fallback_notes(version: &str) -> String {
    Renderer::for_version(version).fallback()
}

#[cfg(test)]
#[path = "./renderer_tests.rs"]
mod tests;
