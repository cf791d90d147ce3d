use crate::config::Config;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "mock-class")]
#[command(about = "Generate recording test doubles from class manifests", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Only print errors and results
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Show internal details and debug logs
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn verbosity(&self) -> Verbosity {
        if self.quiet {
            Verbosity::Quiet
        } else if self.verbose {
            Verbosity::Verbose
        } else {
            Verbosity::Normal
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    Quiet,
    Normal,
    Verbose,
}

impl Verbosity {
    pub fn to_log_level(self) -> &'static str {
        match self {
            Verbosity::Quiet => "error",
            Verbosity::Normal => "warn",
            Verbosity::Verbose => "debug",
        }
    }

    /// Numeric level understood by `Formatter::set_verbosity`.
    pub fn level(self) -> u8 {
        match self {
            Verbosity::Quiet => 0,
            Verbosity::Normal => 1,
            Verbosity::Verbose => 2,
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate a mock from a class manifest and show its methods and recorders
    Inspect(InspectArgs),

    /// Generate a mock_class! declaration and a test skeleton from a class manifest
    Scaffold(ScaffoldArgs),

    /// Generate shell completion scripts
    Completions(CompletionsArgs),
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    /// Parse a config file value; unknown values are ignored.
    pub fn from_config(value: &str) -> Option<Self> {
        <OutputFormat as ValueEnum>::from_str(value, true).ok()
    }
}

#[derive(Parser)]
pub struct InspectArgs {
    /// Path to the class manifest (JSON, or TOML with a .toml extension)
    #[arg(short, long)]
    pub class: PathBuf,

    /// Output format
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,
}

impl InspectArgs {
    pub fn merge_config(&mut self, config: &Config) {
        if self.format.is_none() {
            self.format = config
                .output
                .format
                .as_deref()
                .and_then(OutputFormat::from_config);
        }
    }
}

#[derive(Parser)]
pub struct ScaffoldArgs {
    /// Path to the class manifest (JSON, or TOML with a .toml extension)
    #[arg(short, long)]
    pub class: PathBuf,

    /// Write the scaffold to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Overwrite the output file instead of appending to it
    #[arg(long)]
    pub overwrite: bool,

    /// Type used for parameters and returns the manifest leaves untyped
    #[arg(long)]
    pub value_type: Option<String>,
}

impl ScaffoldArgs {
    pub fn merge_config(&mut self, config: &Config) {
        if !self.overwrite {
            self.overwrite = config.scaffold.overwrite.unwrap_or(false);
        }
        if self.value_type.is_none() {
            self.value_type = Some(config.scaffold.value_type().to_string());
        }
    }
}

#[derive(Parser)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: clap_complete::Shell,
}
