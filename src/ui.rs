//! Terminal presentation: semantic colors and the candidate listing.

use std::io::Write;

use crossterm::style::{Color, Stylize};
use is_terminal::IsTerminal;

use crate::candidates::ImageCandidate;
use crate::error::{DeployError, DeployResult};

/// Semantic color tokens. All colored output is sourced from this module.
pub mod colors {
    use super::Color;

    pub const SUCCESS: Color = Color::Green;
    pub const ERROR: Color = Color::Red;
    pub const WARNING: Color = Color::Yellow;
    pub const PROMPT: Color = Color::Cyan;
    pub const DETAIL: Color = Color::Blue;
    pub const LABEL: Color = Color::White;
}

/// Color-aware text painter.
#[derive(Debug, Clone, Copy)]
pub struct Ui {
    color: bool,
}

impl Ui {
    /// Detect color support from the terminal. Honors `NO_COLOR`.
    pub fn detect() -> Self {
        let color = std::io::stdout().is_terminal() && std::env::var_os("NO_COLOR").is_none();
        Self { color }
    }

    pub fn with_color(color: bool) -> Self {
        Self { color }
    }

    pub fn paint(&self, text: &str, color: Color) -> String {
        if self.color {
            format!("{}", text.with(color))
        } else {
            text.to_string()
        }
    }

    pub fn error(&self, text: &str) -> String {
        self.paint(&format!("ERROR: {}", text), colors::ERROR)
    }

    pub fn warning(&self, text: &str) -> String {
        self.paint(&format!("WARNING: {}", text), colors::WARNING)
    }
}

/// `Tag = <tag>, Date = <date>` with per-field colors. Shared by the listing
/// and the selection echo.
pub fn candidate_line(ui: &Ui, candidate: &ImageCandidate) -> String {
    format!(
        "{} {}, {} {}",
        ui.paint("Tag =", colors::LABEL),
        ui.paint(&candidate.tag, colors::WARNING),
        ui.paint("Date =", colors::LABEL),
        ui.paint(&candidate.pushed_at, colors::DETAIL),
    )
}

/// Render the numbered candidate listing.
///
/// An empty list is reported as a warning-class error even though the filter
/// stage already guards for it upstream; both exits are part of the
/// observable contract.
pub fn present_candidates(
    out: &mut dyn Write,
    ui: &Ui,
    candidates: &[ImageCandidate],
    repo: &str,
) -> DeployResult<()> {
    if candidates.is_empty() {
        return Err(DeployError::NoImages {
            repo: repo.to_string(),
            filter: None,
        });
    }

    let header = format!("Found {} images for {}", candidates.len(), repo);
    let rule = "=".repeat(header.len());

    writeln!(out, "{}", ui.paint(&header, colors::PROMPT))?;
    writeln!(out, "{}", ui.paint(&rule, colors::WARNING))?;

    for (i, candidate) in candidates.iter().enumerate() {
        writeln!(
            out,
            "{}: {}",
            ui.paint(&(i + 1).to_string(), colors::SUCCESS),
            candidate_line(ui, candidate),
        )?;
    }

    writeln!(out, "{}", ui.paint(&rule, colors::WARNING))?;
    Ok(())
}
