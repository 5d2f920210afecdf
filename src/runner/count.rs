use std::path::Path;

use crate::audit::{count_trace_file, AuditMode};
use crate::runner::errors::CliError;

/// Audits a textual trace file and prints the gate counts, multiplication
/// first, each on its own line with its fixed label prefix. `json` switches
/// the output to a serialized [`crate::audit::CostSummary`].
pub fn run(trace_path: &Path, mode: AuditMode, json: bool) -> Result<(), CliError> {
    tracing::info!("scanning trace {} ({mode})", trace_path.display());
    let summary = count_trace_file(trace_path, mode)?;

    if json {
        let rendered = serde_json::to_string_pretty(&summary).map_err(|e| CliError::Json {
            path: trace_path.display().to_string(),
            msg: e.to_string(),
        })?;
        println!("{rendered}");
    } else {
        println!("{summary}");
    }
    Ok(())
}
