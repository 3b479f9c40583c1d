use anyhow::Result;

use super::{print_json, Service};
use crate::cli::OutputFormat;

pub fn run(service: &Service, format: OutputFormat) -> Result<()> {
    let listing = service.catalog_listing();
    match format {
        OutputFormat::Json => print_json(&listing)?,
        OutputFormat::Text => {
            println!(
                "{} monitored variants (catalog {})",
                listing.total_snps, listing.catalog_version
            );
            for snp in &listing.snps {
                println!(
                    "{:<11} {:<10} {:<13} {}",
                    snp.rsid,
                    snp.gene,
                    snp.category.as_str(),
                    snp.condition
                );
            }
        }
    }
    Ok(())
}

pub fn template(service: &Service) -> Result<()> {
    print_json(&service.questionnaire_template())
}
