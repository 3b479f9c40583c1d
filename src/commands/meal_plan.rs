use anyhow::Result;
use nutrigene_tools::export::{Export, MEAL_PLAN_RECORD};
use nutrigene_tools::report::render_meal_plan;
use std::path::PathBuf;

use super::{print_json, Service};
use crate::cli::OutputFormat;
use crate::utils::progress_bar_builder::ProgressBarBuilder;

pub fn run(
    service: &Service,
    session_id: &str,
    days: u8,
    output_file: Option<PathBuf>,
    format: OutputFormat,
) -> Result<()> {
    let progress = ProgressBarBuilder::new(format!("Generating {}-day meal plan", days))
        .with_tick()
        .build()?;
    let outcome = service.meal_plan(session_id, days, None);
    progress.finish_and_clear();
    let outcome = outcome?;

    if let Some(path) = output_file {
        Export::new(MEAL_PLAN_RECORD, &outcome).write_to(&path)?;
        eprintln!("Meal plan written to {}", path.display());
    }

    match format {
        OutputFormat::Json => print_json(&outcome)?,
        OutputFormat::Text => print!("{}", render_meal_plan(&outcome)),
    }
    Ok(())
}
