//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums. No validation rules live here.

use clap::{Args, Parser, Subcommand, ValueEnum};
use signup_core::domain::{DomainError, Field};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "signup",
    bin_name = "signup",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Fill in and submit the account sign-up form",
    long_about = "Validates first name, last name, email, password and its \
                  confirmation, then creates the account and moves on to the \
                  home screen.",
    after_help = "EXAMPLES:\n\
        \x20 signup register --first-name Marie --last-name Dupont \\\n\
        \x20     --email marie@example.com --password Abcdef1 --confirm-password Abcdef1\n\
        \x20 signup check email marie@example\n\
        \x20 signup check confirm-password Abcdef1 --password Abcdef1\n\
        \x20 signup completions bash > /usr/share/bash-completion/completions/signup",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Fill in the form and submit it.
    #[command(
        visible_alias = "r",
        about = "Submit the sign-up form",
        after_help = "Fields not given as flags are prompted for when running \
            in a terminal.\n\n\
            EXAMPLES:\n\
            \x20 signup register --first-name Marie --last-name Dupont --email marie@example.com\n\
            \x20 SIGNUP_PASSWORD=Abcdef1 signup register ... --confirm-password Abcdef1\n\
            \x20 signup register --interactive"
    )]
    Register(RegisterArgs),

    /// Validate one field without submitting.
    #[command(
        about = "Check a single field",
        after_help = "EXAMPLES:\n\
            \x20 signup check password abc\n\
            \x20 signup check email marie@example.com\n\
            \x20 signup check confirm-password Abcdef1 --password Abcdef1"
    )]
    Check(CheckArgs),

    /// Leave the form for the login screen.
    #[command(about = "Go to login (already have an account)")]
    Login,

    /// Write a default configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 signup init                  # per-user location\n\
            \x20 signup init -c ./signup.toml # explicit path\n\
            \x20 signup init --force          # overwrite"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 signup completions bash > ~/.local/share/bash-completion/completions/signup\n\
            \x20 signup completions zsh  > ~/.zfunc/_signup\n\
            \x20 signup completions fish > ~/.config/fish/completions/signup.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 signup config get policy.min_password_length\n\
            \x20 signup config list\n\
            \x20 signup config path"
    )]
    Config(ConfigCommands),
}

// ── register ──────────────────────────────────────────────────────────────────

/// Arguments for `signup register`.
#[derive(Debug, Default, Args)]
pub struct RegisterArgs {
    #[arg(long = "first-name", value_name = "NAME", help = "First name")]
    pub first_name: Option<String>,

    #[arg(long = "last-name", value_name = "NAME", help = "Last name")]
    pub last_name: Option<String>,

    #[arg(short = 'e', long = "email", value_name = "EMAIL", help = "Email address")]
    pub email: Option<String>,

    /// Password. Prefer the environment variable over the flag so it stays
    /// out of shell history.
    #[arg(
        short = 'p',
        long = "password",
        value_name = "PASSWORD",
        env = "SIGNUP_PASSWORD",
        hide_env_values = true,
        help = "Password"
    )]
    pub password: Option<String>,

    #[arg(
        long = "confirm-password",
        value_name = "PASSWORD",
        help = "Password again"
    )]
    pub confirm_password: Option<String>,

    /// Prompt for missing fields even if the config turns prompting off.
    #[arg(short = 'i', long = "interactive", help = "Prompt for missing fields")]
    pub interactive: bool,
}

impl RegisterArgs {
    /// The value given on the command line for `field`, if any.
    pub fn value(&self, field: Field) -> Option<&str> {
        match field {
            Field::FirstName => self.first_name.as_deref(),
            Field::LastName => self.last_name.as_deref(),
            Field::Email => self.email.as_deref(),
            Field::Password => self.password.as_deref(),
            Field::ConfirmPassword => self.confirm_password.as_deref(),
        }
    }
}

// ── check ─────────────────────────────────────────────────────────────────────

/// Arguments for `signup check`.
#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Field name: first-name, last-name, email, password, confirm-password.
    #[arg(value_name = "FIELD", value_parser = parse_field)]
    pub field: Field,

    /// Value to check. Empty string is allowed.
    #[arg(value_name = "VALUE", allow_hyphen_values = true)]
    pub value: String,

    /// Password to compare against when checking `confirm-password`.
    #[arg(
        long = "password",
        value_name = "PASSWORD",
        help = "Password to compare against (confirm-password only)"
    )]
    pub password: Option<String>,
}

fn parse_field(s: &str) -> Result<Field, DomainError> {
    s.parse()
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `signup init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `signup completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `signup config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `policy.min_password_length`.
        key: String,
    },
    /// Print the effective configuration.
    List,
    /// Print the path of the default configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn parse_register_command() {
        let cli = Cli::parse_from([
            "signup",
            "register",
            "--first-name",
            "Marie",
            "--email",
            "marie@example.com",
        ]);
        let Commands::Register(args) = cli.command else {
            panic!("expected Register command");
        };
        assert_eq!(args.value(Field::FirstName), Some("Marie"));
        assert_eq!(args.value(Field::Email), Some("marie@example.com"));
        assert_eq!(args.value(Field::LastName), None);
    }

    #[test]
    fn check_accepts_any_field_spelling() {
        for name in ["confirm-password", "confirm_password", "confirmPassword"] {
            let cli = Cli::parse_from(["signup", "check", name, "x"]);
            let Commands::Check(args) = cli.command else {
                panic!("expected Check command");
            };
            assert_eq!(args.field, Field::ConfirmPassword);
        }
    }

    #[test]
    fn check_rejects_unknown_field() {
        let result = Cli::try_parse_from(["signup", "check", "nickname", "x"]);
        assert!(result.is_err());
    }

    #[test]
    fn check_accepts_empty_value() {
        let cli = Cli::parse_from(["signup", "check", "email", ""]);
        let Commands::Check(args) = cli.command else {
            panic!("expected Check command");
        };
        assert_eq!(args.value, "");
        assert_eq!(args.password, None);
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        let result = Cli::try_parse_from(["signup", "--quiet", "--verbose", "login"]);
        assert!(result.is_err());
    }
}
