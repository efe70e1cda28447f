//! CLI argument definitions using the clap derive API.
//!
//! Only argument names, help text and value enums live here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::GlobalArgs;

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "viewcfg",
    bin_name = "viewcfg",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Resolve view-engine configuration sections",
    long_about = "viewcfg reads the view-engine section of an MVC application's \
                  configuration document and prints the resolved view root, \
                  engines and additional template sources.",
    after_help = "EXAMPLES:\n\
        \x20 viewcfg resolve web.config\n\
        \x20 viewcfg resolve web.config --section monorail --base-dir /srv/app\n\
        \x20 viewcfg resolve web.config --format json\n\
        \x20 viewcfg engines",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Resolve the view-engine configuration of a document.
    #[command(
        visible_alias = "r",
        about = "Resolve a configuration document",
        after_help = "EXAMPLES:\n\
            \x20 viewcfg resolve web.config\n\
            \x20 viewcfg resolve app.xml --section monorail\n\
            \x20 viewcfg resolve web.config --base-dir ./site --format plain"
    )]
    Resolve(ResolveArgs),

    /// List the registered view engines.
    #[command(
        visible_alias = "ls",
        about = "List registered view engines",
        after_help = "EXAMPLES:\n\
            \x20 viewcfg engines\n\
            \x20 viewcfg engines --format json"
    )]
    Engines(EnginesArgs),

    /// Write a default viewcfg settings file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 viewcfg init\n\
            \x20 viewcfg init --force"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 viewcfg completions bash > ~/.local/share/bash-completion/completions/viewcfg\n\
            \x20 viewcfg completions zsh  > ~/.zfunc/_viewcfg\n\
            \x20 viewcfg completions fish > ~/.config/fish/completions/viewcfg.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the viewcfg settings.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 viewcfg config get registry.extra_engines\n\
            \x20 viewcfg config list\n\
            \x20 viewcfg config path"
    )]
    Config(ConfigCommands),
}

// ── resolve ───────────────────────────────────────────────────────────────────

/// Arguments for `viewcfg resolve`.
#[derive(Debug, Args)]
pub struct ResolveArgs {
    /// Configuration document (XML).
    #[arg(value_name = "FILE", help = "Configuration document to resolve")]
    pub file: PathBuf,

    /// Directory relative view roots are resolved against.
    ///
    /// Defaults to `resolve.base_dir` from the settings file, then to the
    /// directory containing FILE.
    #[arg(
        short = 'b',
        long = "base-dir",
        value_name = "DIR",
        help = "Application base directory"
    )]
    pub base_dir: Option<PathBuf>,

    /// Element to resolve; the first element with this name wins.
    #[arg(
        short = 's',
        long = "section",
        value_name = "NAME",
        help = "Section element name (default: document root)"
    )]
    pub section: Option<String>,

    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ResolveFormat,
}

/// Output format for `resolve`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ResolveFormat {
    /// Labelled, human-readable listing.
    Table,
    /// Pretty-printed JSON object.
    Json,
    /// `key=value` lines.
    Plain,
}

// ── engines ───────────────────────────────────────────────────────────────────

/// Arguments for `viewcfg engines`.
#[derive(Debug, Args)]
pub struct EnginesArgs {
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: EnginesFormat,
}

/// Output format for `engines`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum EnginesFormat {
    /// Short name and full type name.
    Table,
    /// One full type name per line.
    List,
    /// JSON array of type names.
    Json,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `viewcfg init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Overwrite an existing settings file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `viewcfg completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `viewcfg config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a settings key.
    Get {
        /// Dotted key path, e.g. `resolve.section`.
        key: String,
    },
    /// Print all settings.
    List,
    /// Print the path of the settings file.
    Path,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::{CommandFactory, Parser};

    #[test]
    fn verify_cli_structure() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_resolve_command() {
        let cli = Cli::parse_from([
            "viewcfg",
            "resolve",
            "web.config",
            "--base-dir",
            "/srv/app",
            "--section",
            "monorail",
        ]);
        let Commands::Resolve(args) = cli.command else {
            panic!("expected Resolve command");
        };
        assert_eq!(args.file, PathBuf::from("web.config"));
        assert_eq!(args.base_dir, Some(PathBuf::from("/srv/app")));
        assert_eq!(args.section.as_deref(), Some("monorail"));
        assert_eq!(args.format, ResolveFormat::Table);
    }

    #[test]
    fn resolve_requires_file() {
        assert!(Cli::try_parse_from(["viewcfg", "resolve"]).is_err());
    }

    #[test]
    fn engines_alias() {
        let cli = Cli::parse_from(["viewcfg", "ls", "--format", "json"]);
        let Commands::Engines(args) = cli.command else {
            panic!("expected Engines command");
        };
        assert_eq!(args.format, EnginesFormat::Json);
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        let result = Cli::try_parse_from(["viewcfg", "--quiet", "--verbose", "engines"]);
        assert!(result.is_err());
    }
}
