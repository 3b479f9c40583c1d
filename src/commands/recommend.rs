use anyhow::Result;
use nutrigene_tools::export::{Export, RECOMMENDATIONS_RECORD};
use nutrigene_tools::report::render_recommendations;
use std::path::PathBuf;

use super::{print_json, Service};
use crate::cli::OutputFormat;

pub fn run(
    service: &Service,
    session_id: &str,
    output_file: Option<PathBuf>,
    format: OutputFormat,
) -> Result<()> {
    let result = service.recommendations(session_id)?;

    if let Some(path) = output_file {
        Export::new(RECOMMENDATIONS_RECORD, &result).write_to(&path)?;
        eprintln!("Recommendations written to {}", path.display());
    }

    match format {
        OutputFormat::Json => print_json(&result)?,
        OutputFormat::Text => print!("{}", render_recommendations(&result)),
    }
    Ok(())
}
