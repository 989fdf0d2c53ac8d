//! The sequential fetch → parse → filter → present → select pipeline.

use std::io::{BufRead, Write};

use crate::candidates;
use crate::context::Context;
use crate::error::{DeployError, DeployResult};
use crate::exec::CommandRunner;
use crate::registry;
use crate::select::{self, SelectionOutcome};
use crate::ui::{self, Ui};

/// Run one interactive deploy round.
///
/// Warning-class exits (empty result set, before or after filtering) and
/// fatal errors both propagate to the caller; nothing here terminates the
/// process.
pub fn run(
    ctx: &Context,
    runner: &dyn CommandRunner,
    input: &mut dyn BufRead,
    out: &mut dyn Write,
    ui: &Ui,
) -> DeployResult<SelectionOutcome> {
    let raw = runner.run(&registry::fetch_images_command(&ctx.repo, ctx.limit))?;
    let parsed = candidates::parse_candidates(&raw)?;

    for warning in &parsed.warnings {
        writeln!(out, "{}", ui.warning(warning))?;
    }

    let images = candidates::filter_candidates(parsed.candidates, ctx.filter.as_deref());
    if images.is_empty() {
        return Err(DeployError::NoImages {
            repo: ctx.repo.clone(),
            filter: ctx.filter.clone(),
        });
    }

    ui::present_candidates(out, ui, &images, &ctx.repo)?;

    select::select_candidate(ctx, &images, runner, input, out, ui)
}
