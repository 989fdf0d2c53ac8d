//! Interactive selection and deploy dispatch.

use std::io::{BufRead, Write};

use crate::candidates::ImageCandidate;
use crate::context::Context;
use crate::error::{DeployError, DeployResult};
use crate::exec::CommandRunner;
use crate::registry;
use crate::ui::{self, colors, Ui};

/// How a selection round ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionOutcome {
    /// Deploy command ran; its stdout has been printed.
    Deployed { output: String },
    /// Non-numeric input at the selection prompt.
    InvalidInput,
    /// Numeric input outside `[1, candidate count]`.
    InvalidSelection,
}

/// Prompt for a 1-based choice, confirm it, and dispatch the deploy command.
///
/// Invalid input is reported inline without retrying; the operator re-invokes
/// the program. Stdin closing at the confirmation prompt counts as
/// cancellation.
pub fn select_candidate(
    ctx: &Context,
    candidates: &[ImageCandidate],
    runner: &dyn CommandRunner,
    input: &mut dyn BufRead,
    out: &mut dyn Write,
    ui: &Ui,
) -> DeployResult<SelectionOutcome> {
    write!(out, "{}", ui.paint("# to deploy: ", colors::PROMPT))?;
    out.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;

    let choice: i64 = match line.trim().parse() {
        Ok(n) => n,
        Err(_) => {
            writeln!(out, "{}", ui.error("Invalid input. Please enter a number."))?;
            return Ok(SelectionOutcome::InvalidInput);
        }
    };

    if choice < 1 || choice as usize > candidates.len() {
        writeln!(out, "{}", ui.error("Invalid selection."))?;
        return Ok(SelectionOutcome::InvalidSelection);
    }

    let candidate = &candidates[choice as usize - 1];
    writeln!(
        out,
        "{} {}",
        ui.paint("Going to deploy:", colors::SUCCESS),
        ui::candidate_line(ui, candidate),
    )?;

    write!(
        out,
        "{}",
        ui.paint("Press [ENTER] to continue or CTRL-C to exit ...", colors::PROMPT)
    )?;
    out.flush()?;

    let mut confirm = String::new();
    if input.read_line(&mut confirm)? == 0 {
        // Stdin closed while waiting for confirmation.
        return Err(DeployError::Interrupted);
    }

    let output = runner.run(&registry::deploy_command(&candidate.tag, &ctx.target))?;
    writeln!(out, "{}", output)?;

    Ok(SelectionOutcome::Deployed { output })
}
