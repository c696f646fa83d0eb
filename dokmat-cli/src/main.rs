use anyhow::Context;
use clap::Parser;
use dokmat::io::read_description;
use dokmat::visu::{dense_formatter, sparse_formatter};
use dokmat::{ops, DokMatInt, Operation};
use std::io::{self, BufRead, Write};
use std::path::Path;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::FmtSubscriber;

mod cli;

use cli::Cli;

const PROMPT: &str = "Select operation: add, subtract, multiply: ";

/// How a run which did not fail ended
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
enum Outcome {
    Printed,
    InvalidOperation,
}

impl From<Outcome> for ExitCode {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Printed => ExitCode::SUCCESS,
            Outcome::InvalidOperation => ExitCode::from(1),
        }
    }
}

fn load(path: &Path) -> anyhow::Result<DokMatInt> {
    read_description(path).with_context(|| format!("failed to load {}", path.display()))
}

/// Print the prompt on `output` and read one answer from `input`.
fn prompt_operation<R: BufRead, W: Write>(mut input: R, mut output: W) -> io::Result<String> {
    write!(output, "{PROMPT}")?;
    output.flush()?;
    let mut answer = String::new();
    input.read_line(&mut answer)?;
    Ok(answer.trim().to_owned())
}

/// Load the operands, get the operation from the command line or from
/// `input`, then print the result.
fn run<R: BufRead>(cli: &Cli, input: R) -> anyhow::Result<Outcome> {
    let lhs = load(&cli.lhs)?;
    let rhs = load(cli.rhs_path())?;
    info!(lhs = ?lhs.shape(), rhs = ?rhs.shape(), "loaded operands");

    let answer = match &cli.operation {
        Some(op) => op.clone(),
        None => prompt_operation(input, io::stdout())?,
    };
    let op: Operation = match answer.parse() {
        Ok(op) => op,
        Err(err) => {
            info!("{err}");
            println!("Invalid operation selected");
            return Ok(Outcome::InvalidOperation);
        }
    };

    let result = ops::apply(op, &lhs, &rhs)?;
    info!(%op, shape = ?result.shape(), nnz = result.nnz(), "computed result");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "Resulting Matrix:")?;
    if cli.dense {
        write!(out, "{}", dense_formatter(&result))?;
    } else {
        write!(out, "{}", sparse_formatter(&result))?;
    }
    Ok(Outcome::Printed)
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(cli.log_level)
        .with_writer(io::stderr)
        .finish();
    if let Err(err) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("failed to install the log subscriber: {err}");
    }

    match run(&cli, io::stdin().lock()) {
        Ok(outcome) => outcome.into(),
        Err(err) => {
            error!("{err:#}");
            ExitCode::from(2)
        }
    }
}
