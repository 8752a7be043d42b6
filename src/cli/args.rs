use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

#[derive(Parser)]
#[command(name = "planwise")]
#[command(about = "Turn planner phrases like \"every first friday review\" into dates")]
#[command(long_about = "planwise - natural language scheduling phrases

Parses short planner phrases into a title, a start date, an optional time of
day, an optional recurrence rule and the next few occurrences.

QUICK START:
  planwise parse \"daily standup at 9am\"
  planwise parse \"every monday and wednesday gym\" --templates
  planwise occurrences --start 2024-01-01 \"every first friday\" --count 6

OUTPUT FORMATS:
  --output pretty    Human-readable colored output (default)
  --output json      Machine-readable JSON for scripting

Defaults are read from ~/.planwise/config.yaml (see `planwise config`).")]
#[command(version, propagate_version = true)]
pub struct Cli {
    /// Output format for command results
    ///
    /// Use 'pretty' for human-readable colored output, or 'json' for
    /// machine-readable output. Defaults to `general.default_output` from
    /// the config file.
    #[arg(short, long, value_enum, global = true, env = "PLANWISE_OUTPUT")]
    pub output: Option<OutputFormat>,

    /// Log matcher decisions to stderr (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for command results.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable colored output.
    #[default]
    Pretty,
    /// Machine-readable JSON output.
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse a planner phrase
    ///
    /// # Examples
    ///
    ///   planwise parse "daily standup at 9am"
    ///   planwise parse "pay rent on the 3rd each month" --max 6
    ///   planwise parse "every first friday review" --reference 2024-01-01
    ///
    /// # Supported Patterns
    ///
    ///   Times:       9am, 3:30pm, 15:45, noon, morning, tonight
    ///   Dates:       today, tomorrow, day after tomorrow, in 3 days, in 2 weeks,
    ///                march 5th, 2024-12-25, 12/25, friday, next monday
    ///   Recurrence:  daily, weekly, monthly, every weekday, weekends,
    ///                every mon and wed, every 2 weeks, every first friday,
    ///                the 3rd of every month
    Parse(ParseArgs),

    /// Show the quick-pick templates for a recurring phrase
    ///
    /// Non-recurring phrases have no templates.
    Templates(TemplatesArgs),

    /// List occurrences of a phrase's recurrence from an explicit start date
    ///
    /// # Examples
    ///
    ///   planwise occurrences --start 2024-01-01 "every first friday" --count 12
    Occurrences(OccurrencesArgs),

    /// Manage the configuration file
    Config(ConfigArgs),

    /// Generate shell completions
    ///
    /// # Examples
    ///
    ///   planwise completions zsh > ~/.zsh/completions/_planwise
    ///   planwise completions bash --install
    Completions {
        /// Shell to generate completions for (bash, zsh, fish, powershell, elvish)
        shell: String,

        /// Print installation instructions instead of the script
        #[arg(long)]
        install: bool,
    },
}

#[derive(Args)]
pub struct ParseArgs {
    /// The phrase to parse (multiple words are joined with spaces)
    #[arg(required = true, num_args = 1..)]
    pub phrase: Vec<String>,

    /// Reference date (YYYY-MM-DD); defaults to today
    #[arg(short, long)]
    pub reference: Option<String>,

    /// Maximum number of occurrences to compute
    #[arg(short, long)]
    pub max: Option<usize>,

    /// Also show recurring templates
    #[arg(short, long)]
    pub templates: bool,
}

#[derive(Args)]
pub struct TemplatesArgs {
    /// The phrase to parse (multiple words are joined with spaces)
    #[arg(required = true, num_args = 1..)]
    pub phrase: Vec<String>,

    /// Reference date (YYYY-MM-DD); defaults to today
    #[arg(short, long)]
    pub reference: Option<String>,

    /// Occurrences considered when building templates
    #[arg(short, long)]
    pub max: Option<usize>,
}

#[derive(Args)]
pub struct OccurrencesArgs {
    /// First date to generate from (YYYY-MM-DD)
    #[arg(short, long)]
    pub start: String,

    /// Phrase describing the recurrence
    #[arg(required = true, num_args = 1..)]
    pub phrase: Vec<String>,

    /// Number of occurrences to list
    #[arg(short, long)]
    pub count: Option<usize>,
}

#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show the effective configuration
    Show,
    /// Print the configuration file path
    Path,
    /// Write a default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

/// Join phrase words from the command line.
#[must_use]
pub fn join_phrase(words: &[String]) -> String {
    words.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_output_format_default_is_unset() {
        let cli = Cli::try_parse_from(["planwise", "parse", "daily standup"]).unwrap();
        assert!(cli.output.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn test_cli_output_format_json() {
        let cli = Cli::try_parse_from(["planwise", "--output", "json", "parse", "x"]).unwrap();
        assert_eq!(cli.output, Some(OutputFormat::Json));
    }

    #[test]
    fn test_cli_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["planwise", "parse", "x", "-o", "json", "-v"]).unwrap();
        assert_eq!(cli.output, Some(OutputFormat::Json));
        assert!(cli.verbose);
    }

    #[test]
    fn test_cli_parse_command() {
        let cli = Cli::try_parse_from([
            "planwise",
            "parse",
            "every",
            "first",
            "friday",
            "--reference",
            "2024-01-01",
            "--max",
            "6",
            "--templates",
        ])
        .unwrap();
        if let Commands::Parse(args) = cli.command {
            assert_eq!(join_phrase(&args.phrase), "every first friday");
            assert_eq!(args.reference.as_deref(), Some("2024-01-01"));
            assert_eq!(args.max, Some(6));
            assert!(args.templates);
        } else {
            panic!("Expected Parse command");
        }
    }

    #[test]
    fn test_cli_parse_requires_phrase() {
        assert!(Cli::try_parse_from(["planwise", "parse"]).is_err());
    }

    #[test]
    fn test_cli_occurrences_requires_start() {
        assert!(Cli::try_parse_from(["planwise", "occurrences", "daily"]).is_err());
        let cli =
            Cli::try_parse_from(["planwise", "occurrences", "--start", "2024-01-01", "daily"])
                .unwrap();
        if let Commands::Occurrences(args) = cli.command {
            assert_eq!(args.start, "2024-01-01");
            assert_eq!(args.count, None);
        } else {
            panic!("Expected Occurrences command");
        }
    }

    #[test]
    fn test_cli_config_init_force() {
        let cli = Cli::try_parse_from(["planwise", "config", "init", "--force"]).unwrap();
        match cli.command {
            Commands::Config(ConfigArgs {
                command: ConfigCommands::Init { force },
            }) => assert!(force),
            _ => panic!("Expected Config Init command"),
        }
    }

    #[test]
    fn test_cli_completions() {
        let cli = Cli::try_parse_from(["planwise", "completions", "zsh"]).unwrap();
        match cli.command {
            Commands::Completions { shell, install } => {
                assert_eq!(shell, "zsh");
                assert!(!install);
            },
            _ => panic!("Expected Completions command"),
        }
    }
}
