use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::findings::{summarize, AnalysisWarning, FileInfo, Finding, FindingsSummary};
use crate::parser::{ParseStats, ParsedGenome};
use crate::questionnaire::QuestionnaireAnswers;
use crate::types::{GenomeBuild, Source};

/// Everything derived from one upload. Persisted whole; deleting it erases all of it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub id: String,
    pub original_name: String,
    pub size_bytes: u64,
    pub sha256: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub source: Source,
    pub build: GenomeBuild,
    pub parse_stats: ParseStats,
    pub findings: Vec<Finding>,
    /// Monitored rsids whose call was a no-call.
    pub not_available: Vec<String>,
    #[serde(default)]
    pub answers: Option<QuestionnaireAnswers>,
}

impl Session {
    pub fn new(
        original_name: impl Into<String>,
        size_bytes: u64,
        sha256: String,
        parsed: ParsedGenome,
        findings: Vec<Finding>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            original_name: original_name.into(),
            size_bytes,
            sha256,
            created_at: now,
            updated_at: now,
            source: parsed.source,
            build: parsed.build,
            parse_stats: parsed.stats,
            findings,
            not_available: parsed.unavailable,
            answers: None,
        }
    }

    pub fn set_answers(&mut self, answers: QuestionnaireAnswers) {
        self.answers = Some(answers);
        self.updated_at = Utc::now();
    }

    pub fn summary(&self) -> FindingsSummary {
        summarize(
            &self.findings,
            self.parse_stats.snp_count,
            self.not_available.len(),
        )
    }

    pub fn file_info(&self) -> FileInfo {
        FileInfo {
            original_name: self.original_name.clone(),
            size_bytes: self.size_bytes,
            sha256: self.sha256.clone(),
            source: self.source,
            snp_count: self.parse_stats.snp_count,
            build: self.build.number(),
        }
    }

    pub fn warnings(&self) -> Vec<AnalysisWarning> {
        if self.findings.is_empty() {
            vec![AnalysisWarning::NoMonitoredVariantsFound {
                snp_count: self.parse_stats.snp_count,
            }]
        } else {
            Vec::new()
        }
    }
}
