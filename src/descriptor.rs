//! Plugin descriptor (`plugin.xml`) change-notes block patching.
//!
//! The block is rewritten textually so the rest of the descriptor keeps its
//! exact formatting; quick-xml is only used to read a block back.
use log::*;
use quick_xml::{Reader, events::Event};
use regex::Regex;

use crate::{ChangeNotesError, Result, config::NotesConfig};

const CDATA_OPEN: &str = "<![CDATA[";
const CDATA_CLOSE: &str = "]]>";

/// Replaces the content of a descriptor element with a CDATA-wrapped HTML
/// body.
#[derive(Debug, Clone)]
pub struct Patcher {
    tag: String,
    indent: String,
    opening_tag: Regex,
    closing_tag: String,
}

impl Patcher {
    /// Create a patcher for the configured element and indentation unit.
    pub fn new(config: &NotesConfig) -> Result<Self> {
        config.validate()?;

        // Group 1: indentation preceding the opening tag
        let opening_tag = Regex::new(&format!(
            r"(?m)^(?<indent>[ \t]*)<{}>\s*$",
            regex::escape(&config.tag)
        ))?;

        Ok(Self {
            tag: config.tag.clone(),
            indent: config.indent.clone(),
            opening_tag,
            closing_tag: format!("</{}>", config.tag),
        })
    }

    /// Replace the first block in `descriptor` with `html`.
    ///
    /// The opening tag must sit alone on its line; the closing tag may appear
    /// anywhere after it. Everything outside the block is preserved byte for
    /// byte and only the first block is touched.
    pub fn patch(&self, descriptor: &str, html: &str) -> Result<String> {
        let caps = self
            .opening_tag
            .captures(descriptor)
            .ok_or_else(|| ChangeNotesError::missing_opening_tag(&self.tag))?;

        let opening_line = caps.get_match();
        let indent = caps.name("indent").map_or("", |m| m.as_str());

        let close_offset = descriptor[opening_line.end()..]
            .find(&self.closing_tag)
            .ok_or_else(|| ChangeNotesError::missing_closing_tag(&self.tag))?;

        let block_end =
            opening_line.end() + close_offset + self.closing_tag.len();

        debug!(
            "replacing <{}> block at bytes {}..{}",
            self.tag,
            opening_line.start(),
            block_end
        );

        let block = self.build_block(indent, html);

        Ok(format!(
            "{}{}{}",
            &descriptor[..opening_line.start()],
            block,
            &descriptor[block_end..]
        ))
    }

    fn build_block(&self, indent: &str, html: &str) -> String {
        let nested = format!("{indent}{}", self.indent);

        let mut lines = vec![
            format!("{indent}<{}>", self.tag),
            format!("{nested}{CDATA_OPEN}"),
        ];

        let body_start = lines.len();
        lines.extend(html.lines().map(|line| format!("{nested}{line}")));

        // an empty body still gets its own indented line
        if lines.len() == body_start {
            lines.push(nested.clone());
        }

        lines.push(format!("{nested}{CDATA_CLOSE}"));
        lines.push(format!("{indent}{}", self.closing_tag));

        lines.join("\n")
    }

    /// Read the HTML held in the first block's CDATA section, with the
    /// nesting indentation removed.
    ///
    /// Returns `None` when the descriptor has no such element or the element
    /// holds no CDATA.
    pub fn read_block(&self, descriptor: &str) -> Result<Option<String>> {
        let mut reader = Reader::from_str(descriptor);
        let mut in_block = false;
        let mut cdata: Option<String> = None;

        loop {
            match reader.read_event()? {
                Event::Start(e) if e.name().as_ref() == self.tag.as_bytes() => {
                    in_block = true;
                }
                Event::End(e) if e.name().as_ref() == self.tag.as_bytes() => {
                    break;
                }
                Event::CData(e) if in_block => {
                    let text = String::from_utf8(e.into_inner().into_owned())?;
                    cdata.get_or_insert_with(String::new).push_str(&text);
                }
                Event::Eof => break,
                _ => {}
            }
        }

        Ok(cdata.map(|content| strip_nesting(&content)))
    }
}

/// Undo the framing added by [`Patcher::patch`]: the CDATA content starts
/// with a newline and ends with the nested indentation on its own line, and
/// every body line carries that same indentation.
fn strip_nesting(content: &str) -> String {
    let inner = content
        .strip_prefix("\r\n")
        .or_else(|| content.strip_prefix('\n'))
        .unwrap_or(content);

    let Some((body, nested)) = inner.rsplit_once('\n') else {
        return inner.trim().to_string();
    };

    if !nested.chars().all(|c| c == ' ' || c == '\t') {
        return inner.trim().to_string();
    }

    body.lines()
        .map(|line| line.strip_prefix(nested).unwrap_or(line.trim_start()))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Patch the `<change-notes>` block with the built-in configuration.
pub fn patch(descriptor: &str, html: &str) -> Result<String> {
    Patcher::new(&NotesConfig::default())?.patch(descriptor, html)
}

/// Read the `<change-notes>` CDATA content with the built-in configuration.
pub fn read_change_notes(descriptor: &str) -> Result<Option<String>> {
    Patcher::new(&NotesConfig::default())?.read_block(descriptor)
}

#[cfg(test)]
#[path = "./descriptor_tests.rs"]
mod tests;
