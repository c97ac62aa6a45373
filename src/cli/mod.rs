// FILE: src/cli/mod.rs

mod config;
mod handlers;

use crate::error::Result;
use clap::{Arg, ArgAction, Command, ValueEnum};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    fn from_config(name: &str) -> Option<Self> {
        <Self as ValueEnum>::from_str(name, true).ok()
    }
}

pub struct AnchorCli {
    config: config::ConfigFile,
}

impl AnchorCli {
    pub fn new() -> Self {
        Self {
            config: config::ConfigFile::default(),
        }
    }

    pub fn run(&mut self) -> Result<()> {
        let matches = self.build_cli().get_matches();

        if let Some(config_path) = matches.get_one::<String>("config") {
            self.config = config::load(config_path)?;
        }

        self.setup_logging(matches.get_count("verbose"));

        match matches.subcommand() {
            Some(("resolve", sub_matches)) => handlers::handle_resolve_command(self, sub_matches),
            Some(("check", sub_matches)) => handlers::handle_check_command(self, sub_matches),
            Some(("kinds", _)) => handlers::handle_kinds_command(),
            _ => {
                println!("No subcommand specified. Use --help for usage information.");
                Ok(())
            }
        }
    }

    fn build_cli(&self) -> Command {
        Command::new("anchorc")
            .version(crate::VERSION)
            .about(crate::DESCRIPTION)
            .arg(
                Arg::new("config")
                    .short('c')
                    .long("config")
                    .value_name("FILE")
                    .help("Configuration file path")
                    .action(ArgAction::Set),
            )
            .arg(
                Arg::new("verbose")
                    .short('v')
                    .long("verbose")
                    .help("Increase verbosity (can be used multiple times)")
                    .action(ArgAction::Count),
            )
            .subcommand(
                Command::new("resolve")
                    .about("Resolve a layout document into constraints")
                    .arg(Arg::new("input").help("Input layout file (.toml or .json)").required(true).index(1))
                    .arg(Arg::new("output").short('o').long("output").value_name("FILE").help("Write constraints to a file"))
                    .arg(Arg::new("format").short('f').long("format").value_parser(clap::value_parser!(OutputFormat)).help("Output format"))
                    .arg(Arg::new("activate").short('a').long("activate").value_name("SET").help("Activate one constraint set and deactivate the others"))
                    .arg(Arg::new("stats").long("stats").help("Show resolution statistics").action(ArgAction::SetTrue)),
            )
            .subcommand(
                Command::new("check")
                    .about("Validate layout documents without resolving them")
                    .arg(Arg::new("input").help("Input layout file or directory").required(true).index(1))
                    .arg(Arg::new("recursive").short('r').long("recursive").help("Check all layout files in directory recursively").action(ArgAction::SetTrue)),
            )
            .subcommand(Command::new("kinds").about("List supported anchor names"))
    }

    fn setup_logging(&self, verbose_count: u8) {
        let log_level = match verbose_count {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        };
        env_logger::Builder::from_default_env()
            .filter_level(log_level)
            .format_timestamp_secs()
            .init();
    }

    /// Command-line flag first, then the config file, then text.
    pub fn output_format(&self, matches: &clap::ArgMatches) -> OutputFormat {
        matches
            .get_one::<OutputFormat>("format")
            .copied()
            .or_else(|| self.config.format.as_deref().and_then(OutputFormat::from_config))
            .unwrap_or(OutputFormat::Text)
    }

    pub fn activate_set(&self, matches: &clap::ArgMatches) -> Option<String> {
        matches
            .get_one::<String>("activate")
            .cloned()
            .or_else(|| self.config.activate.clone())
    }

    pub fn extensions(&self) -> Vec<String> {
        self.config.extensions()
    }
}

impl Default for AnchorCli {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        AnchorCli::new().build_cli().debug_assert();
    }

    #[test]
    fn test_flag_overrides_config() {
        let mut cli = AnchorCli::new();
        cli.config.format = Some("json".to_string());
        cli.config.activate = Some("portrait".to_string());

        let matches = cli
            .build_cli()
            .try_get_matches_from(["anchorc", "resolve", "layout.toml", "-f", "text"])
            .unwrap();
        let (_, sub_matches) = matches.subcommand().unwrap();
        assert_eq!(cli.output_format(sub_matches), OutputFormat::Text);
        assert_eq!(cli.activate_set(sub_matches).as_deref(), Some("portrait"));
    }

    #[test]
    fn test_config_format_used_without_flag() {
        let mut cli = AnchorCli::new();
        cli.config.format = Some("JSON".to_string());

        let matches = cli
            .build_cli()
            .try_get_matches_from(["anchorc", "resolve", "layout.toml"])
            .unwrap();
        let (_, sub_matches) = matches.subcommand().unwrap();
        assert_eq!(cli.output_format(sub_matches), OutputFormat::Json);
        assert_eq!(cli.activate_set(sub_matches), None);
    }
}
