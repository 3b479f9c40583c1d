use anyhow::{Context, Result};
use nutrigene_tools::export::{Export, ANALYSIS_RECORD};
use nutrigene_tools::report::render_analysis;
use std::fs;
use std::path::PathBuf;

use super::{print_json, Service};
use crate::cli::OutputFormat;
use crate::utils::progress_bar_builder::{spinner_callback, ProgressBarBuilder};

pub fn run(
    service: Service,
    file: PathBuf,
    output_file: Option<PathBuf>,
    format: OutputFormat,
) -> Result<()> {
    let data = fs::read(&file).with_context(|| format!("reading {}", file.display()))?;
    let original_name = file
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| file.display().to_string());

    let progress = ProgressBarBuilder::new(format!("Reading {}", original_name))
        .with_template("{spinner:.green} [{elapsed_precise}] {msg}")
        .with_tick()
        .build()?;
    let service = service.with_progress(spinner_callback(progress.clone()));
    let report = service.upload(&original_name, &data);
    progress.finish_and_clear();
    let report = report?;

    if let Some(path) = output_file {
        Export::new(ANALYSIS_RECORD, &report).write_to(&path)?;
        eprintln!("Analysis written to {}", path.display());
    }

    match format {
        OutputFormat::Json => print_json(&report)?,
        OutputFormat::Text => print!("{}", render_analysis(&report)),
    }
    Ok(())
}
