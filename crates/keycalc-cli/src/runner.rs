//! Command execution
//!
//! Everything here writes to caller-supplied streams so the commands can be
//! driven from tests without a terminal.

use crate::commands::ConfigFormat;
use crate::error::CliResult;
use console::style;
use keycalc::prelude::{parse_keys, CalculatorEngine, EngineConfig, Keypad};
use std::io::{BufRead, Write};
use tracing::{debug, info};

/// Formats the display line, bold when colors are on
#[must_use]
pub fn styled_display(display: &str, use_color: bool) -> String {
    if use_color {
        style(display).bold().force_styling(true).to_string()
    } else {
        display.to_string()
    }
}

/// Presses a typed key sequence on `engine`
pub fn press_sequence(engine: &mut CalculatorEngine, input: &str) -> CliResult<()> {
    let keys = parse_keys(input)?;
    debug!(count = keys.len(), "pressing keys");
    engine.press_all(keys)?;
    Ok(())
}

/// Runs one key sequence on a fresh engine and returns the output line
pub fn run_eval(
    config: EngineConfig,
    start: Option<&str>,
    input: &str,
    json: bool,
) -> CliResult<String> {
    let mut engine = CalculatorEngine::with_config(config);
    if let Some(start) = start {
        engine.set_display(start)?;
    }
    press_sequence(&mut engine, input)?;
    if json {
        Ok(serde_json::to_string_pretty(&engine.snapshot())?)
    } else {
        Ok(engine.current_display())
    }
}

/// Counters for a finished REPL session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReplSummary {
    /// Key-sequence lines processed
    pub lines: usize,
    /// Lines rejected with an error
    pub errors: usize,
}

/// REPL output settings
#[derive(Debug, Clone, Copy, Default)]
pub struct ReplOptions {
    /// Print a prompt before each line
    pub prompt: bool,
    /// Style the display line
    pub color: bool,
}

const REPL_HELP: &str = "\
keys: 0-9 . + - * / (× ÷ x) = c|AC (clear) b (backspace) n|~ (sign)
commands: help, quit";

/// Reads key sequences line by line until EOF or `quit`
///
/// The engine lives for the whole session. A rejected line is reported on
/// `err` and the session continues with the state it left behind.
pub fn run_repl<R, W, E>(
    engine: &mut CalculatorEngine,
    input: R,
    out: &mut W,
    err: &mut E,
    options: ReplOptions,
) -> CliResult<ReplSummary>
where
    R: BufRead,
    W: Write,
    E: Write,
{
    let mut summary = ReplSummary::default();
    let mut lines = input.lines();
    loop {
        if options.prompt {
            write!(out, "> ")?;
            out.flush()?;
        }
        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        let trimmed = line.trim();
        match trimmed {
            "" => continue,
            "quit" | "exit" => break,
            "help" => {
                writeln!(out, "{REPL_HELP}")?;
                continue;
            }
            _ => {}
        }

        summary.lines += 1;
        if let Err(e) = press_sequence(engine, trimmed) {
            summary.errors += 1;
            writeln!(err, "error: {e}")?;
        }
        writeln!(
            out,
            "{}",
            styled_display(&engine.current_display(), options.color)
        )?;
    }
    info!(lines = summary.lines, errors = summary.errors, "session ended");
    Ok(summary)
}

/// Renders the keypad layout
#[must_use]
pub fn render_keypad() -> String {
    Keypad::new().render_text()
}

/// Renders the engine configuration
pub fn render_config(config: &EngineConfig, format: ConfigFormat) -> CliResult<String> {
    match format {
        ConfigFormat::Yaml => Ok(serde_yaml_ng::to_string(config)?),
        ConfigFormat::Json => Ok(serde_json::to_string_pretty(config)?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CliError;
    use keycalc::prelude::CalcError;

    fn repl(input: &str) -> (String, String, ReplSummary) {
        let mut engine = CalculatorEngine::new();
        let mut out = Vec::new();
        let mut err = Vec::new();
        let summary = run_repl(
            &mut engine,
            input.as_bytes(),
            &mut out,
            &mut err,
            ReplOptions::default(),
        )
        .unwrap();
        (
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
            summary,
        )
    }

    // ===== eval =====

    #[test]
    fn test_eval_chained() {
        let out = run_eval(EngineConfig::default(), None, "5+3*2=", false).unwrap();
        assert_eq!(out, "16");
    }

    #[test]
    fn test_eval_with_start() {
        let out = run_eval(EngineConfig::default(), Some("-2.5"), "*4=", false).unwrap();
        assert_eq!(out, "-10");
    }

    #[test]
    fn test_eval_bad_start() {
        let result = run_eval(EngineConfig::default(), Some("1e5"), "=", false);
        assert!(matches!(result, Err(CliError::Calc(CalcError::ParseError(_)))));
    }

    #[test]
    fn test_eval_strict_division() {
        let result = run_eval(EngineConfig::strict(), None, "9/0=", false);
        assert!(matches!(result, Err(CliError::Calc(CalcError::DivisionByZero))));
    }

    #[test]
    fn test_eval_invalid_key() {
        let result = run_eval(EngineConfig::default(), None, "2^3", false);
        assert!(matches!(result, Err(CliError::Calc(CalcError::InvalidKey('^')))));
    }

    #[test]
    fn test_eval_json_snapshot() {
        let out = run_eval(EngineConfig::default(), None, "7+", true).unwrap();
        let json: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(json["phase"], "operator_pending");
        assert_eq!(json["operator"], "add");
        assert_eq!(json["display"], "7");
    }

    // ===== repl =====

    #[test]
    fn test_repl_keeps_state_between_lines() {
        let (out, err, summary) = repl("5+3\n*2=\nquit\n9\n");
        assert_eq!(out, "3\n16\n");
        assert!(err.is_empty());
        assert_eq!(summary, ReplSummary { lines: 2, errors: 0 });
    }

    #[test]
    fn test_repl_reports_errors_and_continues() {
        let (out, err, summary) = repl("4\n4?\n2\n");
        assert_eq!(out, "4\n4\n42\n");
        assert!(err.contains("Invalid key"));
        assert_eq!(summary.errors, 1);
        assert_eq!(summary.lines, 3);
    }

    #[test]
    fn test_repl_skips_blank_lines_and_shows_help() {
        let (out, _, summary) = repl("\n   \nhelp\n");
        assert!(out.contains("commands: help, quit"));
        assert_eq!(summary.lines, 0);
    }

    #[test]
    fn test_repl_prompt() {
        let mut engine = CalculatorEngine::new();
        let mut out = Vec::new();
        let options = ReplOptions {
            prompt: true,
            color: false,
        };
        run_repl(&mut engine, "1\n".as_bytes(), &mut out, &mut Vec::new(), options).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "> 1\n> ");
    }

    // ===== rendering =====

    #[test]
    fn test_styled_display_plain() {
        assert_eq!(styled_display("42", false), "42");
    }

    #[test]
    fn test_styled_display_color() {
        let styled = styled_display("42", true);
        assert!(styled.contains("42"));
        assert!(styled.contains('\u{1b}'));
    }

    #[test]
    fn test_render_keypad() {
        let keypad = render_keypad();
        assert!(keypad.contains("AC"));
        assert!(keypad.contains('÷'));
        assert_eq!(keypad.lines().count(), 5);
    }

    #[test]
    fn test_render_config_yaml() {
        let yaml = render_config(&EngineConfig::default(), ConfigFormat::Yaml).unwrap();
        assert!(yaml.contains("division: lenient"));
        assert!(yaml.contains("max_plain_len: 10"));
    }

    #[test]
    fn test_render_config_json() {
        let json = render_config(&EngineConfig::strict(), ConfigFormat::Json).unwrap();
        assert!(json.contains("\"division\": \"strict\""));
    }
}
