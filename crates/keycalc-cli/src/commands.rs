//! CLI command definitions using clap

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// keycalc: keypad calculator for the terminal
#[derive(Parser, Debug)]
#[command(name = "keycalc")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Color output (auto, always, never)
    #[arg(long, default_value = "auto", global = true)]
    pub color: ColorArg,

    /// Engine configuration file (YAML)
    #[arg(long, global = true, env = "KEYCALC_CONFIG")]
    pub config: Option<PathBuf>,

    /// Reject division by zero instead of showing 0
    #[arg(long, global = true)]
    pub strict: bool,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Press a key sequence and print the display
    ///
    /// Keys: digits, `.`, `+ - * /` (or `× ÷ x`), `=`, `c`/`AC` clear,
    /// `b` backspace, `n`/`~` sign toggle.
    Eval(EvalArgs),

    /// Interactive session: one key sequence per line
    Repl(ReplArgs),

    /// Print the keypad layout
    Keypad,

    /// Show the effective engine configuration
    Config(ConfigArgs),
}

/// Arguments for the eval command
#[derive(Parser, Debug)]
pub struct EvalArgs {
    /// Key sequence, e.g. `5+3*2=` (several arguments are joined)
    #[arg(required = true, allow_hyphen_values = true)]
    pub keys: Vec<String>,

    /// Start from this number instead of 0
    #[arg(long, value_name = "NUMBER", allow_hyphen_values = true)]
    pub start: Option<String>,

    /// Print the full engine state as JSON
    #[arg(long)]
    pub json: bool,
}

impl EvalArgs {
    /// Returns the key arguments as one sequence
    #[must_use]
    pub fn key_sequence(&self) -> String {
        self.keys.join(" ")
    }
}

/// Arguments for the repl command
#[derive(Parser, Debug, Default)]
pub struct ReplArgs {
    /// Do not print a prompt
    #[arg(long)]
    pub no_prompt: bool,
}

/// Arguments for the config command
#[derive(Parser, Debug)]
pub struct ConfigArgs {
    /// Output format
    #[arg(long, value_enum, default_value = "yaml")]
    pub format: ConfigFormat,
}

/// Config output format
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ConfigFormat {
    /// YAML
    #[default]
    Yaml,
    /// JSON
    Json,
}

/// Color argument
#[derive(ValueEnum, Clone, Debug, Default)]
pub enum ColorArg {
    /// Automatic color detection
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl From<ColorArg> for crate::config::ColorChoice {
    fn from(arg: ColorArg) -> Self {
        match arg {
            ColorArg::Auto => Self::Auto,
            ColorArg::Always => Self::Always,
            ColorArg::Never => Self::Never,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ColorChoice;

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_eval() {
        let cli = Cli::parse_from(["keycalc", "eval", "--json", "5+3", "="]);
        match cli.command {
            Commands::Eval(args) => {
                assert_eq!(args.key_sequence(), "5+3 =");
                assert!(args.json);
                assert!(args.start.is_none());
            }
            other => panic!("expected eval, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_eval_hyphen_key() {
        let cli = Cli::parse_from(["keycalc", "eval", "9", "-", "4", "="]);
        match cli.command {
            Commands::Eval(args) => assert_eq!(args.key_sequence(), "9 - 4 ="),
            other => panic!("expected eval, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_eval_negative_start() {
        let cli = Cli::parse_from(["keycalc", "eval", "--start", "-2.5", "*2="]);
        match cli.command {
            Commands::Eval(args) => assert_eq!(args.start.as_deref(), Some("-2.5")),
            other => panic!("expected eval, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_global_flags() {
        let cli = Cli::parse_from(["keycalc", "keypad", "-vv", "--strict", "--color", "never"]);
        assert_eq!(cli.verbose, 2);
        assert!(cli.strict);
        assert!(matches!(cli.command, Commands::Keypad));
        assert_eq!(ColorChoice::from(cli.color), ColorChoice::Never);
    }

    #[test]
    fn test_parse_config_format() {
        let cli = Cli::parse_from(["keycalc", "config", "--format", "json"]);
        match cli.command {
            Commands::Config(args) => assert_eq!(args.format, ConfigFormat::Json),
            other => panic!("expected config, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_repl_defaults() {
        let cli = Cli::parse_from(["keycalc", "repl"]);
        match cli.command {
            Commands::Repl(args) => assert!(!args.no_prompt),
            other => panic!("expected repl, got {other:?}"),
        }
    }

    #[test]
    fn test_eval_requires_keys() {
        assert!(Cli::try_parse_from(["keycalc", "eval"]).is_err());
    }
}
