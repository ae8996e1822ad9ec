use std::io::{self, BufRead, IsTerminal, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use reckon::calculator::{
    CalcResult, DisplayOptions, copy_to_clipboard, evaluate_expression, paste_from_clipboard,
};
use reckon::config::Config;
use reckon::session::Session;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

/// Evaluate arithmetic expressions with `^ * / + -` and brackets.
///
/// Without an expression, reads one expression per line from stdin.
/// In line mode `p` stands for the previous answer.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Read the expression from the clipboard instead of the arguments.
    #[arg(long, conflicts_with = "expression")]
    paste: bool,

    /// Copy successful results to the clipboard.
    #[arg(short, long)]
    copy: bool,

    /// Print results as JSON.
    #[arg(long)]
    json: bool,

    /// Decimal places shown for results.
    #[arg(short, long)]
    precision: Option<u32>,

    /// Group thousands with `,` in displayed results.
    #[arg(short, long)]
    separators: bool,

    /// The expression to evaluate; multiple words are joined with spaces.
    expression: Vec<String>,
}

fn main() -> Result<ExitCode> {
    init_tracing();
    let args = Args::parse();

    let config = Config::load().unwrap_or_else(|e| {
        warn!(error = %e, "falling back to default config");
        Config::default()
    });

    let options = DisplayOptions {
        precision: args.precision.unwrap_or(config.precision),
        thousands_separator: args.separators || config.thousands_separator,
    };
    let copy = args.copy || config.copy_result;

    let expression = if args.paste {
        Some(paste_from_clipboard().map_err(anyhow::Error::msg)?)
    } else if !args.expression.is_empty() {
        Some(args.expression.join(" "))
    } else {
        None
    };

    match expression {
        Some(expression) => run_once(&expression, &options, copy, args.json),
        None => run_interactive(Session::new(options), copy, args.json),
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run_once(expression: &str, options: &DisplayOptions, copy: bool, json: bool) -> Result<ExitCode> {
    let result = evaluate_expression(expression, options);

    if json {
        println!("{}", serde_json::to_string(&result)?);
    } else if result.is_success() {
        println!("{}", result.display());
    } else {
        eprintln!("{}", result.display());
    }

    if !result.is_success() {
        return Ok(ExitCode::FAILURE);
    }

    if copy {
        copy_result(&result)?;
    }

    Ok(ExitCode::SUCCESS)
}

fn run_interactive(mut session: Session, copy: bool, json: bool) -> Result<ExitCode> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let prompt = stdin.is_terminal();
    let mut line = String::new();

    loop {
        if prompt {
            write!(stdout, "> ")?;
            stdout.flush()?;
        }

        line.clear();
        let read = stdin
            .lock()
            .read_line(&mut line)
            .context("Failed to read from stdin")?;
        if read == 0 {
            break;
        }

        let input = line.trim();
        match input {
            "" => continue,
            "exit" | "quit" => break,
            _ => {}
        }

        let result = session.submit(input);
        if json {
            writeln!(stdout, "{}", serde_json::to_string(&result)?)?;
        } else {
            writeln!(stdout, "{}", result.display())?;
        }

        // A clipboard failure should not end the session.
        if copy && let Err(e) = copy_result(&result) {
            warn!(error = %e, "could not copy result");
        }
    }

    debug!("leaving line mode");
    Ok(ExitCode::SUCCESS)
}

fn copy_result(result: &CalcResult) -> Result<()> {
    if let Some(text) = result.clipboard() {
        copy_to_clipboard(text).map_err(anyhow::Error::msg)?;
        debug!(text, "copied result to clipboard");
    }
    Ok(())
}
