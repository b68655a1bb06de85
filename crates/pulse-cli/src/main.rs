#![forbid(unsafe_code)]

use clap::{Parser, Subcommand, ValueEnum};
use pulse_cli::{run_eval, EvalOptions, PredictionMode};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "pulse")]
#[command(about = "Pulse sentiment operations CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify a feedback CSV and report accuracy against ground truth.
    Eval {
        /// Input CSV; must carry a "feedback" column.
        #[arg(long)]
        data: PathBuf,
        /// Output CSV; defaults to with_predictions.csv next to the input.
        #[arg(long)]
        out: Option<PathBuf>,
        #[arg(long, value_enum, default_value_t = ModeCli::Local)]
        mode: ModeCli,
        /// Prediction service base URL, used in api mode.
        #[arg(long, default_value = "http://127.0.0.1:8000")]
        api_url: String,
        /// Display the service resource snapshot after evaluating.
        #[arg(long, default_value_t = false)]
        show_resources: bool,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ModeCli {
    Local,
    Api,
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), String> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Eval {
            data,
            out,
            mode,
            api_url,
            show_resources,
        } => {
            run_eval(&EvalOptions {
                data,
                out,
                mode: match mode {
                    ModeCli::Local => PredictionMode::Local,
                    ModeCli::Api => PredictionMode::Api,
                },
                api_url,
                show_resources,
            })?;
            Ok(())
        }
    }
}
