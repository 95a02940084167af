use clap::{Args, Parser, Subcommand, ValueEnum};

/// Top-level CLI parser for the `vitrina` binary.
#[derive(Debug, Parser)]
#[command(
    name = "vitrina",
    version,
    about = "Vitrina - ask the product catalog in natural language"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Quiet mode (errors only in logs)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            quiet: self.quiet,
        }
    }
}

/// Shared output mode across all commands.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Raw,
}

/// Global flags available before or after subcommands.
#[derive(Clone, Debug)]
pub struct GlobalFlags {
    pub format: OutputFormat,
    pub quiet: bool,
}

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Answer one question against the catalog.
    Ask(AskArgs),
    /// Sanitize and validate SQL text locally, without remote calls.
    Sql(SqlArgs),
    /// Serve the chat endpoint and static files over HTTP.
    Serve(ServeArgs),
}

#[derive(Clone, Debug, Args)]
pub struct AskArgs {
    /// Question, in natural language. Words are joined with spaces.
    #[arg(required = true, num_args = 1..)]
    pub message: Vec<String>,
}

impl AskArgs {
    #[must_use]
    pub fn message(&self) -> String {
        self.message.join(" ")
    }
}

#[derive(Clone, Debug, Args)]
pub struct SqlArgs {
    /// Raw model output to normalize.
    #[arg(required = true, num_args = 1..)]
    pub raw: Vec<String>,
}

#[derive(Clone, Debug, Args)]
pub struct ServeArgs {
    /// Bind host (overrides `server.host`).
    #[arg(long)]
    pub host: Option<String>,

    /// Bind port (overrides `server.port`).
    #[arg(long)]
    pub port: Option<u16>,

    /// Static files directory (overrides `server.public_dir`).
    #[arg(long)]
    pub public_dir: Option<String>,
}
