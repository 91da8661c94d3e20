//! Conlog CLI, the command-line front end of the conlog library.
//!
//! Provides `conlog emit` for writing a categorized log line from a shell
//! script and `conlog list` for inspecting the categories a `conlog.toml`
//! declares.

#![warn(missing_docs)]

mod emit;
mod list;
mod settings;

use std::process;

use clap::{Parser, Subcommand, ValueEnum};
use conlog::{declare_category, CategoryColors, Severity};

declare_category! {
    /// The category used by `conlog emit` when no `--category` is given.
    pub static CLI {
        name: "Cli",
        severities: All,
        enabled: true,
        debug_only: false,
        timestamp: false,
        colors: CategoryColors::DEFAULT,
    }
}

/// Conlog: category-gated console logging from the shell.
#[derive(Parser, Debug)]
#[command(name = "conlog", version, about = "Category-gated console logging")]
pub struct Cli {
    /// Control colored output. Overrides `[console] color` in the config.
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorArg>,

    /// Path to a `conlog.toml` configuration file.
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// The subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Write one log line through a category.
    Emit(EmitArgs),
    /// List the available categories.
    List(ListArgs),
}

/// Arguments for the `conlog emit` subcommand.
#[derive(Parser, Debug)]
pub struct EmitArgs {
    /// Category key from `conlog.toml`. Defaults to the built-in `Cli` category.
    #[arg(short, long)]
    pub category: Option<String>,

    /// Severity of the line.
    #[arg(short, long, value_enum, default_value_t = LevelArg::Info)]
    pub level: LevelArg,

    /// Message words, joined with single spaces.
    #[arg(required = true, num_args = 1..)]
    pub message: Vec<String>,
}

/// Arguments for the `conlog list` subcommand.
#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Output format.
    #[arg(short, long, value_enum, default_value_t = ListFormat::Text)]
    pub format: ListFormat,
}

/// Controls whether colored output is produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ColorArg {
    /// Color when stdout is a terminal.
    Auto,
    /// Always write color commands.
    Always,
    /// Never write color commands.
    Never,
}

impl From<ColorArg> for conlog::ColorChoice {
    fn from(arg: ColorArg) -> Self {
        match arg {
            ColorArg::Auto => conlog::ColorChoice::Auto,
            ColorArg::Always => conlog::ColorChoice::Always,
            ColorArg::Never => conlog::ColorChoice::Never,
        }
    }
}

/// Severity selection for `conlog emit`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LevelArg {
    /// `[INFO]`.
    Info,
    /// `[WARNING]`.
    Warning,
    /// `[ERROR]`.
    Error,
}

impl From<LevelArg> for Severity {
    fn from(arg: LevelArg) -> Self {
        match arg {
            LevelArg::Info => Severity::Info,
            LevelArg::Warning => Severity::Warning,
            LevelArg::Error => Severity::Error,
        }
    }
}

/// Output format for `conlog list`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ListFormat {
    /// One aligned row per category.
    Text,
    /// A JSON array.
    Json,
}

/// Global settings derived from CLI flags.
pub struct GlobalArgs {
    /// Color choice from `--color`, if given.
    pub color: Option<conlog::ColorChoice>,
    /// Optional path to a config file.
    pub config: Option<String>,
}

fn main() {
    let cli = Cli::parse();

    let global = GlobalArgs {
        color: cli.color.map(Into::into),
        config: cli.config,
    };

    let result = match cli.command {
        Command::Emit(ref args) => emit::run(args, &global),
        Command::List(ref args) => list::run(args, &global),
    };

    match result {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(1);
        }
    }
}
