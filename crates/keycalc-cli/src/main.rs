//! keycalc: keypad calculator for the terminal
//!
//! ## Usage
//!
//! ```bash
//! keycalc eval 5+3*2=          # prints 16
//! keycalc --strict eval 9/0=   # error: Division by zero
//! keycalc repl                 # one key sequence per line
//! keycalc keypad               # show the button layout
//! keycalc config --format json # effective engine settings
//! ```

use clap::Parser;
use keycalc::prelude::CalculatorEngine;
use keycalc_cli::{
    load_engine_config, logging, runner, Cli, CliConfig, CliResult, ColorChoice, Commands,
    ConfigArgs, ConfigFormat, EvalArgs, ReplArgs, ReplOptions, Verbosity,
};
use std::io::{self, IsTerminal};
use std::process::ExitCode;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> CliResult<()> {
    let cli = Cli::parse();
    let config = build_config(&cli)?;
    logging::init(config.verbosity, config.color.should_color());

    match cli.command {
        Commands::Eval(args) => run_eval(&config, &args),
        Commands::Repl(args) => run_repl(&config, &args),
        Commands::Keypad => {
            println!("{}", runner::render_keypad());
            Ok(())
        }
        Commands::Config(args) => run_config(&config, &args),
    }
}

fn build_config(cli: &Cli) -> CliResult<CliConfig> {
    let verbosity = Verbosity::from_flags(cli.quiet, cli.verbose);
    let color: ColorChoice = cli.color.clone().into();
    let engine = load_engine_config(cli.config.as_deref(), cli.strict)?;

    Ok(CliConfig::new()
        .with_verbosity(verbosity)
        .with_color(color)
        .with_engine(engine))
}

fn run_eval(config: &CliConfig, args: &EvalArgs) -> CliResult<()> {
    let output = runner::run_eval(
        config.engine,
        args.start.as_deref(),
        &args.key_sequence(),
        args.json,
    )?;
    if args.json {
        println!("{output}");
    } else {
        println!(
            "{}",
            runner::styled_display(&output, config.color.should_color())
        );
    }
    Ok(())
}

fn run_repl(config: &CliConfig, args: &ReplArgs) -> CliResult<()> {
    let stdin = io::stdin();
    let options = ReplOptions {
        prompt: !args.no_prompt && stdin.is_terminal(),
        color: config.color.should_color(),
    };
    if options.prompt && !config.verbosity.is_quiet() {
        println!("keycalc: type keys, `help` for the key list, `quit` to leave");
    }

    let mut engine = CalculatorEngine::with_config(config.engine);
    let summary = runner::run_repl(
        &mut engine,
        stdin.lock(),
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
        options,
    )?;
    if config.verbosity.is_verbose() {
        eprintln!("{} line(s), {} error(s)", summary.lines, summary.errors);
    }
    Ok(())
}

fn run_config(config: &CliConfig, args: &ConfigArgs) -> CliResult<()> {
    print!("{}", runner::render_config(&config.engine, args.format)?);
    if args.format == ConfigFormat::Json {
        println!();
    }
    Ok(())
}
