//! Custom error types for change-notes.

use thiserror::Error;

/// Main error type for change-notes operations.
#[derive(Error, Debug)]
pub enum ChangeNotesError {
    // Cli args errors
    #[error("Invalid arguments: {0}")]
    InvalidArgs(String),

    // Configuration errors
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    // Descriptor errors
    #[error("Could not find <{tag}> start tag on its own line")]
    MissingOpeningTag { tag: String },

    #[error("Could not find </{tag}> end tag")]
    MissingClosingTag { tag: String },

    // TOML parsing errors
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    // XML parsing errors
    #[error("XML parse error: {0}")]
    XmlError(#[from] quick_xml::Error),

    #[error("Regular expression error: {0}")]
    RegexError(#[from] regex::Error),

    #[error("Template rendering failed: {0}")]
    TemplateError(#[from] tera::Error),

    #[error("UTF-8 conversion error: {0}")]
    Utf8Error(#[from] std::string::FromUtf8Error),

    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] log::SetLoggerError),

    // Generic wrapper for other errors
    #[error(transparent)]
    Other(#[from] color_eyre::Report),
}

/// Result type alias using ChangeNotesError
pub type Result<T> = std::result::Result<T, ChangeNotesError>;

impl ChangeNotesError {
    /// Create an invalid arguments error
    pub fn invalid_args(msg: impl Into<String>) -> Self {
        Self::InvalidArgs(msg.into())
    }

    /// Create an invalid config error
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }

    /// Create a missing opening tag error for the given tag name
    pub fn missing_opening_tag(tag: impl Into<String>) -> Self {
        Self::MissingOpeningTag { tag: tag.into() }
    }

    /// Create a missing closing tag error for the given tag name
    pub fn missing_closing_tag(tag: impl Into<String>) -> Self {
        Self::MissingClosingTag { tag: tag.into() }
    }
}

// I/O errors carry no domain meaning so they land in Other
impl From<std::io::Error> for ChangeNotesError {
    fn from(err: std::io::Error) -> Self {
        Self::Other(color_eyre::Report::from(err))
    }
}
