//! Inject a version's changelog section into a plugin descriptor's
//! change-notes block.
//!
//! The pipeline is three pure text transformations composed by
//! [`command::update`]:
//!
//! - [`changelog::extract_section`] finds the `## [version]` section
//! - [`renderer::render`] converts it to a small HTML subset
//! - [`descriptor::patch`] splices the HTML into the descriptor as CDATA
pub mod changelog;
pub mod cli;
pub mod command;
pub mod config;
pub mod descriptor;
pub mod error;
pub mod renderer;
pub mod store;

pub use changelog::extract_section;
pub use cli::Args;
pub use descriptor::{patch, read_change_notes};
pub use error::{ChangeNotesError, Result};
pub use renderer::{fallback_notes, render};

#[cfg(test)]
pub mod test_helpers;
