use addend_calculator::{Calculator, CalculatorConfig, Outcome};
use anyhow::{Context as AnyhowContext, Result};
use clap::{Args, Parser, Subcommand};
use std::env;
use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;
use std::process::ExitCode;

mod repl;
mod report;

const CONFIG_ENV: &str = "ADDEND_CONFIG";

#[derive(Parser)]
#[command(name = "addend")]
#[command(about = "Sum delimited numbers", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Quiet mode: log only errors
    #[arg(long, global = true)]
    quiet: bool,

    /// Calculator config file (TOML, overrides ADDEND_CONFIG)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Sum the numbers in INPUT (or stdin)
    Add(AddArgs),

    /// Evaluate one input per line until EOF or `:quit`
    Repl,
}

#[derive(Args)]
struct AddArgs {
    /// Numbers to sum, e.g. "1,2,3", "-1,2" or "//;\n1;2;3"
    #[arg(allow_hyphen_values = true)]
    input: Option<String>,

    /// Output JSON
    #[arg(long)]
    json: bool,

    /// Show the delimiter set and how each token was classified
    #[arg(long)]
    explain: bool,
}

fn main() -> Result<ExitCode> {
    let mut cli = Cli::parse();
    if matches!(&cli.command, Commands::Add(args) if args.json) {
        cli.quiet = true;
    }

    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if cli.quiet {
        builder.filter_level(log::LevelFilter::Error);
    } else if cli.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.target(env_logger::Target::Stderr).init();

    let config = load_config(cli.config)?;
    let calculator = Calculator::new(config).context("Invalid calculator config")?;
    log::debug!("Calculator config: {:?}", calculator.config());

    match cli.command {
        Commands::Add(args) => run_add(&calculator, args),
        Commands::Repl => {
            let stdin = io::stdin();
            let prompt = stdin.is_terminal();
            repl::run(&calculator, stdin.lock(), io::stdout().lock(), prompt)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn load_config(flag: Option<PathBuf>) -> Result<CalculatorConfig> {
    let path = flag.or_else(|| env::var_os(CONFIG_ENV).map(PathBuf::from));
    match path {
        Some(path) => {
            log::debug!("Using config {}", path.display());
            CalculatorConfig::from_file(&path)
                .with_context(|| format!("Failed to load config {}", path.display()))
        }
        None => Ok(CalculatorConfig::default()),
    }
}

fn run_add(calculator: &Calculator, args: AddArgs) -> Result<ExitCode> {
    let input = match args.input {
        Some(input) => input,
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            buf
        }
    };

    let evaluation = calculator.evaluate(input.trim());
    let outcome = evaluation.outcome();

    if args.json {
        let explain = args.explain.then_some(&evaluation);
        report::print_stdout(&report::render_json(&outcome, explain)?)?;
    } else {
        if args.explain {
            report::print_stdout(report::render_explain(&evaluation).trim_end())?;
        }
        match &outcome {
            Outcome::Sum(value) => report::print_stdout(&value.to_string())?,
            Outcome::Rejected(_) => eprintln!("{}", outcome.message().unwrap_or_default()),
        }
    }

    Ok(if outcome.is_ok() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
