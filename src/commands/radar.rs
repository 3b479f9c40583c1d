use anyhow::Result;
use nutrigene_tools::report::render_radar;

use super::{print_json, Service};
use crate::cli::OutputFormat;

pub fn run(service: &Service, session_id: &str, format: OutputFormat) -> Result<()> {
    let chart = service.radar(session_id)?;
    match format {
        OutputFormat::Json => print_json(&chart)?,
        OutputFormat::Text => print!("{}", render_radar(&chart)),
    }
    Ok(())
}
