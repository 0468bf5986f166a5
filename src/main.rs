use change_notes::{Args, Result, command};
use clap::Parser;
use simplelog::{
    ColorChoice, ConfigBuilder, LevelFilter, TermLogger, TerminalMode,
};

/// Logs go to stderr: a dry run prints the patched descriptor on stdout.
/// CI runners stamp every line themselves, so no timestamps are added.
fn initialize_logger(args: &Args) -> Result<()> {
    let level = if args.debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let config = ConfigBuilder::new()
        .add_filter_allow_str("change_notes")
        .set_time_level(LevelFilter::Off)
        .build();

    TermLogger::init(level, config, TerminalMode::Stderr, ColorChoice::Auto)?;

    Ok(())
}

fn main() -> color_eyre::eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();

    initialize_logger(&args)?;

    command::execute(&args)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use change_notes::ChangeNotesError;

    #[test]
    fn logger_installs_once() {
        let args = Args::parse_from([
            "change-notes",
            "--plugin-xml",
            "plugin.xml",
            "--changelog",
            "CHANGELOG.md",
            "--version",
            "1.0.0",
            "--debug",
        ]);

        initialize_logger(&args).unwrap();

        assert!(matches!(
            initialize_logger(&args),
            Err(ChangeNotesError::LoggerError(_))
        ));
    }
}
