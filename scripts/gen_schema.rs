//! Prints the JSON schema for `change-notes.toml`, or writes it to the path
//! given as the first argument.
use change_notes::config::NotesConfig;
use schemars::schema_for;
use std::{env, fs};

fn main() -> color_eyre::eyre::Result<()> {
    color_eyre::install()?;

    let schema = schema_for!(NotesConfig);
    let schema_string = serde_json::to_string_pretty(&schema)?;

    match env::args().nth(1) {
        Some(path) => fs::write(path, format!("{schema_string}\n"))?,
        None => println!("{schema_string}"),
    }

    Ok(())
}
