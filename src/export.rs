//! Rendering of generated runs
//!
//! Produces the markdown or JSON text a display layer consumes. Writing the
//! text anywhere is left to the caller.

use serde::{Deserialize, Serialize};

use crate::mission::{MissionBrief, MissionRun};

/// Text format for rendered briefs
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Markdown,
    Json,
}

/// Markdown sections for each brief, separated by a blank line
pub fn briefs_to_markdown(briefs: &[MissionBrief]) -> String {
    briefs
        .iter()
        .map(MissionBrief::to_markdown)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Pretty JSON including the replay seed
pub fn run_to_json(run: &MissionRun) -> serde_json::Result<String> {
    serde_json::to_string_pretty(run)
}

pub fn render(run: &MissionRun, format: OutputFormat) -> serde_json::Result<String> {
    match format {
        OutputFormat::Markdown => Ok(briefs_to_markdown(&run.briefs)),
        OutputFormat::Json => run_to_json(run),
    }
}
