use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    version,
    about = "PLOCAR CLI - Inspect projected local-orbital data stored in PLOCAR binary files.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Path to a configuration file in TOML format.
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the maximum number of PLO elements a file header may request.
    #[arg(long, global = true, value_name = "INT")]
    pub max_elements: Option<usize>,

    /// Print the header summary of each decoded file at INFO level.
    #[arg(long, global = true)]
    pub verbose_decode: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Decode a PLOCAR file and print its parameters and a summary of its arrays.
    Info(InfoArgs),
    /// Print the Fermi weights and PLO values of selected records.
    Show(ShowArgs),
}

/// Arguments for the `info` subcommand.
#[derive(Args, Debug)]
pub struct InfoArgs {
    /// Path to the PLOCAR file.
    #[arg(value_name = "PATH")]
    pub input: Option<PathBuf>,
}

/// Arguments for the `show` subcommand.
#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Path to the PLOCAR file.
    #[arg(value_name = "PATH")]
    pub input: Option<PathBuf>,

    /// Zero-based ion index.
    #[arg(short, long, required = true, value_name = "INT")]
    pub ion: usize,

    /// Zero-based spin index. All spins are shown when omitted.
    #[arg(short, long, value_name = "INT")]
    pub spin: Option<usize>,

    /// Zero-based k-point index. All k-points are shown when omitted.
    #[arg(short, long, value_name = "INT")]
    pub kpoint: Option<usize>,

    /// Zero-based band index. All bands are shown when omitted.
    #[arg(short, long, value_name = "INT")]
    pub band: Option<usize>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn info_path_is_optional() {
        let cli = Cli::try_parse_from(["plocar", "info"]).unwrap();
        match cli.command {
            Commands::Info(args) => assert!(args.input.is_none()),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn show_parses_selection_and_global_flags() {
        let cli = Cli::try_parse_from([
            "plocar", "show", "data/PLOCAR", "--ion", "2", "-s", "1", "-vv", "--max-elements", "64",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.max_elements, Some(64));
        match cli.command {
            Commands::Show(args) => {
                assert_eq!(args.input, Some(PathBuf::from("data/PLOCAR")));
                assert_eq!(args.ion, 2);
                assert_eq!(args.spin, Some(1));
                assert_eq!(args.kpoint, None);
                assert_eq!(args.band, None);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn show_requires_an_ion() {
        assert!(Cli::try_parse_from(["plocar", "show"]).is_err());
    }

    #[test]
    fn quiet_conflicts_with_verbose() {
        assert!(Cli::try_parse_from(["plocar", "-q", "-v", "info"]).is_err());
    }
}
