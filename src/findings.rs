use serde::{Deserialize, Serialize};
use std::fmt;

use crate::catalog::{NutrientCategory, RiskLevel};
use crate::parser::ParseStats;
use crate::types::Source;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Finding {
    pub rsid: String,
    pub gene: String,
    pub condition: String,
    pub category: NutrientCategory,
    pub genotype: String,
    pub risk_level: RiskLevel,
    pub interpretation: String,
    pub recommendation: String,
    /// Literature provenance of the rule that produced this finding.
    pub source: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FindingsSummary {
    pub total_snps_in_file: u64,
    pub nutrigenomics_snps_analyzed: usize,
    pub high_risk: usize,
    pub moderate_risk: usize,
    pub low_risk: usize,
    pub protective: usize,
    pub not_available: usize,
}

impl FindingsSummary {
    pub fn count(&self, level: RiskLevel) -> usize {
        match level {
            RiskLevel::High => self.high_risk,
            RiskLevel::Moderate => self.moderate_risk,
            RiskLevel::Low => self.low_risk,
            RiskLevel::Protective => self.protective,
        }
    }
}

pub fn summarize(findings: &[Finding], total_snps_in_file: u64, not_available: usize) -> FindingsSummary {
    let mut summary = FindingsSummary {
        total_snps_in_file,
        nutrigenomics_snps_analyzed: findings.len(),
        not_available,
        ..FindingsSummary::default()
    };
    for finding in findings {
        match finding.risk_level {
            RiskLevel::High => summary.high_risk += 1,
            RiskLevel::Moderate => summary.moderate_risk += 1,
            RiskLevel::Low => summary.low_risk += 1,
            RiskLevel::Protective => summary.protective += 1,
        }
    }
    summary
}

pub fn by_risk(findings: &[Finding], level: RiskLevel) -> Vec<&Finding> {
    findings.iter().filter(|f| f.risk_level == level).collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AnalysisWarning {
    /// The file parsed but none of its rows is a monitored variant.
    NoMonitoredVariantsFound { snp_count: u64 },
}

impl fmt::Display for AnalysisWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnalysisWarning::NoMonitoredVariantsFound { snp_count } => write!(
                f,
                "None of the {} SNPs in this file is a monitored nutrigenomic variant",
                snp_count
            ),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileInfo {
    pub original_name: String,
    pub size_bytes: u64,
    pub sha256: String,
    pub source: Source,
    pub snp_count: u64,
    pub build: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub session_id: String,
    pub file_info: FileInfo,
    pub findings: Vec<Finding>,
    pub summary: FindingsSummary,
    pub not_available: Vec<String>,
    pub parse_stats: ParseStats,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<AnalysisWarning>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::classifier::classify;

    #[test]
    fn summary_counts_each_tier() {
        let catalog = Catalog::builtin();
        let findings = vec![
            classify(catalog.get("rs4988235").unwrap(), "AG"),
            classify(catalog.get("rs671").unwrap(), "AA"),
            classify(catalog.get("rs1229984").unwrap(), "TT"),
            classify(catalog.get("rs4341").unwrap(), "CC"),
        ];
        let summary = summarize(&findings, 600_000, 2);
        assert_eq!(summary.nutrigenomics_snps_analyzed, 4);
        assert_eq!(summary.count(RiskLevel::High), 1);
        assert_eq!(summary.count(RiskLevel::Moderate), 1);
        assert_eq!(summary.count(RiskLevel::Low), 1);
        assert_eq!(summary.count(RiskLevel::Protective), 1);
        assert_eq!(summary.not_available, 2);

        assert_eq!(by_risk(&findings, RiskLevel::High)[0].rsid, "rs671");
    }
}
