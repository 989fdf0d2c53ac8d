//! ecr-deploy CLI - pick an ECR image tag, run a make target with VERSION set
//!
//! Usage: ecr-deploy -r <repo> -t <target> [-f <filter>] [-l <limit>]

use std::io;
use std::process::ExitCode;

use clap::Parser;

use ecr_deploy::app;
use ecr_deploy::error::DeployError;
use ecr_deploy::exec::ShellRunner;
use ecr_deploy::select::SelectionOutcome;
use ecr_deploy::ui::{colors, Ui};
use ecr_deploy::Context;

/// Interactive ECR image selector for make-driven deployments
#[derive(Parser, Debug)]
#[command(name = "ecr-deploy")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Name of the ECR repository
    #[arg(short, long)]
    repo: String,

    /// Make target to execute with VERSION set to the chosen tag
    #[arg(short, long)]
    target: String,

    /// Keep only image tags containing this substring
    #[arg(short, long)]
    filter: Option<String>,

    /// Limit the number of images to fetch
    #[arg(short, long, default_value_t = 20)]
    limit: usize,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let ui = Ui::detect();

    // Single top-level interrupt handler. It covers both interactive prompts
    // and both external command executions.
    if let Err(err) = ctrlc::set_handler(move || {
        eprintln!("\n{}", ui.paint("Caught CTRL-C. Exiting ...", colors::WARNING));
        std::process::exit(1);
    }) {
        eprintln!(
            "{}",
            ui.warning(&format!("Unable to install interrupt handler: {}", err))
        );
    }

    let ctx = Context {
        repo: cli.repo,
        target: cli.target,
        filter: cli.filter,
        limit: cli.limit,
    };

    let runner = ShellRunner;
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout();

    match app::run(&ctx, &runner, &mut input, &mut out, &ui) {
        Ok(SelectionOutcome::Deployed { .. }) => ExitCode::SUCCESS,
        // Inline validation failures already printed their message; exit
        // non-zero so automation can tell nothing was deployed.
        Ok(SelectionOutcome::InvalidInput) | Ok(SelectionOutcome::InvalidSelection) => {
            ExitCode::from(1)
        }
        Err(DeployError::Interrupted) => {
            eprintln!("{}", ui.paint("Caught CTRL-C. Exiting ...", colors::WARNING));
            ExitCode::from(1)
        }
        Err(err) if err.is_warning() => {
            eprintln!("{}", ui.warning(&err.to_string()));
            ExitCode::from(1)
        }
        Err(err) => {
            eprintln!("{}", ui.error(&err.to_string()));
            ExitCode::from(1)
        }
    }
}
