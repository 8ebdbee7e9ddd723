use crate::error::{Error, Result};
use crate::form::FormState;
use crate::terminal::RenderMode;
use clap::{Parser, ValueEnum};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Parser)]
#[command(
    name = "contact-form",
    version,
    about = "Fill in a contact form in the terminal"
)]
pub struct Cli {
    /// Draw below the prompt instead of on the alternate screen.
    #[arg(long)]
    pub inline: bool,

    /// How to print the submitted record on exit.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub output: OutputFormat,

    /// YAML file with initial values (firstName, lastName, email, message).
    #[arg(long, value_name = "FILE")]
    pub prefill: Option<PathBuf>,

    /// Print the initial frame as JSON and exit.
    #[arg(long)]
    pub dump_frame: bool,

    /// Log info-level events. Takes effect with --log-file or RUST_LOG.
    #[arg(short, long)]
    pub verbose: bool,

    /// Write logs to this file. Without it, logs go to stderr only when
    /// RUST_LOG is set.
    #[arg(long, value_name = "FILE")]
    pub log_file: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, Default)]
pub struct LogConfig {
    pub verbose: bool,
    pub file: Option<PathBuf>,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub render_mode: RenderMode,
    pub output: OutputFormat,
    pub prefill: FormState,
    pub dump_frame: bool,
    pub logging: LogConfig,
}

impl Config {
    pub fn from_cli(cli: Cli) -> Result<Self> {
        let prefill = match &cli.prefill {
            Some(path) => load_prefill(path)?,
            None => FormState::default(),
        };
        Ok(Self {
            render_mode: if cli.inline {
                RenderMode::Inline
            } else {
                RenderMode::AltScreen
            },
            output: cli.output,
            prefill,
            dump_frame: cli.dump_frame,
            logging: LogConfig {
                verbose: cli.verbose,
                file: cli.log_file,
            },
        })
    }
}

pub fn load_prefill(path: &Path) -> Result<FormState> {
    let raw = fs::read_to_string(path).map_err(|source| Error::PrefillRead {
        path: path.to_path_buf(),
        source,
    })?;
    if raw.trim().is_empty() {
        return Ok(FormState::default());
    }
    serde_yaml::from_str(&raw).map_err(|source| Error::PrefillParse {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::{Cli, Config, OutputFormat, load_prefill};
    use crate::error::Error;
    use crate::form::Field;
    use crate::terminal::RenderMode;
    use clap::Parser;
    use std::io::Write;

    #[test]
    fn defaults() {
        let cli = Cli::try_parse_from(["contact-form"]).expect("parse");
        let config = Config::from_cli(cli).expect("config");
        assert_eq!(config.render_mode, RenderMode::AltScreen);
        assert_eq!(config.output, OutputFormat::Text);
        assert_eq!(config.prefill.get(Field::Email), "");
        assert!(!config.dump_frame);
    }

    #[test]
    fn flags_map_to_config() {
        let cli = Cli::try_parse_from(["contact-form", "--inline", "--output", "json", "-v"])
            .expect("parse");
        let config = Config::from_cli(cli).expect("config");
        assert_eq!(config.render_mode, RenderMode::Inline);
        assert_eq!(config.output, OutputFormat::Json);
        assert!(config.logging.verbose);
    }

    #[test]
    fn prefill_file_is_loaded() {
        let mut file = tempfile::NamedTempFile::new().expect("tempfile");
        writeln!(file, "firstName: Matthew\nmessage: hi there").expect("write");

        let state = load_prefill(file.path()).expect("prefill");
        assert_eq!(state.get(Field::FirstName), "Matthew");
        assert_eq!(state.get(Field::Message), "hi there");
    }

    #[test]
    fn empty_prefill_file_is_blank_form() {
        let file = tempfile::NamedTempFile::new().expect("tempfile");
        let state = load_prefill(file.path()).expect("prefill");
        assert_eq!(state.get(Field::FirstName), "");
    }

    #[test]
    fn bad_prefill_is_reported() {
        let mut file = tempfile::NamedTempFile::new().expect("tempfile");
        writeln!(file, "firstName: [unclosed").expect("write");
        assert!(matches!(
            load_prefill(file.path()),
            Err(Error::PrefillParse { .. })
        ));

        let missing = file.path().with_extension("missing");
        assert!(matches!(
            load_prefill(&missing),
            Err(Error::PrefillRead { .. })
        ));
    }
}
