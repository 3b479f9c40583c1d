use chrono::{DateTime, Utc};
use serde::Serialize;
use sha2::{Digest, Sha256};
use std::sync::Arc;
use std::time::Duration;

use super::{ApiError, ApiResult, ProgressCallback};
use crate::catalog::{Catalog, NutrientCategory};
use crate::classifier::classify_calls;
use crate::config::Config;
use crate::findings::{AnalysisReport, FindingsSummary};
use crate::meal_plan::{
    validate_days, CancelToken, ChatCompletionsGenerator, DegradedPlan, MealGenerator,
    MealPlanOutcome, MealPlanner,
};
use crate::parser::GenotypeParser;
use crate::questionnaire::{self, QuestionnaireAnswers, RawAnswers, TemplateField};
use crate::radar::{self, RadarChart};
use crate::recommendations::{synthesize, RecommendationReport};
use crate::session::Session;
use crate::store::SessionStore;

#[derive(Debug, Clone, Serialize)]
pub struct RecommendationsResult {
    pub session_id: String,
    pub generated_at: DateTime<Utc>,
    pub genetic_summary: FindingsSummary,
    pub personalized: bool,
    #[serde(flatten)]
    pub recommendations: RecommendationReport,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionStage {
    Analyzed,
    QuestionnaireCompleted,
}

#[derive(Debug, Clone, Serialize)]
pub struct SessionStatus {
    pub session_id: String,
    pub stage: SessionStage,
    pub original_name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub findings: usize,
    pub has_questionnaire: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct CatalogEntry {
    pub rsid: String,
    pub gene: String,
    pub condition: String,
    pub category: NutrientCategory,
}

#[derive(Debug, Clone, Serialize)]
pub struct CatalogListing {
    pub catalog_version: String,
    pub total_snps: usize,
    pub snps: Vec<CatalogEntry>,
}

/// Entry point for embedding UIs and the CLI. Owns the shared catalog, a session store and
/// the configuration; every operation is keyed by session id.
pub struct NutriService<S: SessionStore> {
    catalog: Arc<Catalog>,
    store: S,
    config: Config,
    generator: Option<Arc<dyn MealGenerator>>,
    progress_callback: Option<ProgressCallback>,
}

impl<S: SessionStore> NutriService<S> {
    pub fn new(catalog: Arc<Catalog>, store: S, config: Config) -> Self {
        Self {
            catalog,
            store,
            config,
            generator: None,
            progress_callback: None,
        }
    }

    /// Replaces the HTTP generator built from config.
    pub fn with_generator(mut self, generator: Arc<dyn MealGenerator>) -> Self {
        self.generator = Some(generator);
        self
    }

    pub fn with_progress(mut self, callback: ProgressCallback) -> Self {
        self.progress_callback = Some(callback);
        self
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn catalog_listing(&self) -> CatalogListing {
        let snps: Vec<CatalogEntry> = self
            .catalog
            .iter()
            .map(|variant| CatalogEntry {
                rsid: variant.rsid.clone(),
                gene: variant.gene.clone(),
                condition: variant.condition.clone(),
                category: variant.category,
            })
            .collect();
        CatalogListing {
            catalog_version: self.catalog.version().to_string(),
            total_snps: snps.len(),
            snps,
        }
    }

    pub fn questionnaire_template(&self) -> Vec<TemplateField> {
        questionnaire::template()
    }

    /// Parses and classifies an upload, persisting it as a new session.
    pub fn upload(&self, original_name: &str, data: &[u8]) -> ApiResult<AnalysisReport> {
        let mut parser = GenotypeParser::new(&self.catalog)
            .with_header_scan_lines(self.config.parser.header_scan_lines);
        if let Some(callback) = &self.progress_callback {
            parser = parser.with_progress(Arc::clone(callback));
        }
        let parsed = parser.parse(data)?;
        let findings = classify_calls(&self.catalog, &parsed.calls);

        let digest = Sha256::digest(data);
        let sha256: String = digest.iter().map(|b| format!("{:02x}", b)).collect();
        let session = Session::new(original_name, data.len() as u64, sha256, parsed, findings);
        self.store.save(&session)?;

        tracing::info!(
            id = %session.id,
            findings = session.findings.len(),
            not_available = session.not_available.len(),
            "session created"
        );
        Ok(Self::report(&session))
    }

    fn report(session: &Session) -> AnalysisReport {
        AnalysisReport {
            session_id: session.id.clone(),
            file_info: session.file_info(),
            findings: session.findings.clone(),
            summary: session.summary(),
            not_available: session.not_available.clone(),
            parse_stats: session.parse_stats.clone(),
            warnings: session.warnings(),
        }
    }

    pub fn analysis(&self, id: &str) -> ApiResult<AnalysisReport> {
        Ok(Self::report(&self.store.load(id)?))
    }

    /// Validates and stores answers, replacing earlier ones. A rejected submission leaves
    /// the stored answers untouched, and a session deleted meanwhile stays deleted.
    pub fn submit_questionnaire(&self, id: &str, raw: RawAnswers) -> ApiResult<QuestionnaireAnswers> {
        let answers = raw.validate()?;
        self.store
            .update(id, &mut |session: &mut Session| session.set_answers(answers.clone()))?;
        tracing::info!(id, "questionnaire saved");
        Ok(answers)
    }

    pub fn submit_questionnaire_json(&self, id: &str, text: &str) -> ApiResult<QuestionnaireAnswers> {
        let raw: RawAnswers = serde_json::from_str(text)
            .map_err(|e| ApiError::validation("answers", e.to_string()))?;
        self.submit_questionnaire(id, raw)
    }

    pub fn recommendations(&self, id: &str) -> ApiResult<RecommendationsResult> {
        let session = self.store.load(id)?;
        let recommendations = synthesize(&self.catalog, &session.findings, session.answers.as_ref());
        Ok(RecommendationsResult {
            session_id: session.id.clone(),
            generated_at: Utc::now(),
            genetic_summary: session.summary(),
            personalized: session.answers.is_some(),
            recommendations,
        })
    }

    pub fn radar(&self, id: &str) -> ApiResult<RadarChart> {
        let session = self.store.load(id)?;
        Ok(radar::score(&session.findings, &self.config.radar))
    }

    /// Requests a meal plan. Only an out-of-range day count or an unknown session is an
    /// error; generator trouble yields a degraded outcome.
    pub fn meal_plan(
        &self,
        id: &str,
        days: u8,
        cancel: Option<&CancelToken>,
    ) -> ApiResult<MealPlanOutcome> {
        let days = validate_days(days)?;
        let session = self.store.load(id)?;
        let report = synthesize(&self.catalog, &session.findings, session.answers.as_ref());

        let generator: Arc<dyn MealGenerator> = match &self.generator {
            Some(generator) => Arc::clone(generator),
            None => match ChatCompletionsGenerator::from_config(&self.config.meal_plan) {
                Ok(generator) => Arc::new(generator),
                Err(e) => return Ok(MealPlanOutcome::Degraded(DegradedPlan::from_error(&e))),
            },
        };

        let mut planner = MealPlanner::new(generator)
            .with_timeout(Duration::from_secs(self.config.meal_plan.timeout_secs));
        planner.plan(&report, session.answers.as_ref(), days, cancel)
    }

    pub fn status(&self, id: &str) -> ApiResult<SessionStatus> {
        let session = self.store.load(id)?;
        let has_questionnaire = session.answers.is_some();
        Ok(SessionStatus {
            session_id: session.id.clone(),
            stage: if has_questionnaire {
                SessionStage::QuestionnaireCompleted
            } else {
                SessionStage::Analyzed
            },
            original_name: session.original_name.clone(),
            created_at: session.created_at,
            updated_at: session.updated_at,
            findings: session.findings.len(),
            has_questionnaire,
        })
    }

    /// Erases the session and all derived data.
    pub fn delete(&self, id: &str) -> ApiResult<()> {
        self.store.delete(id)
    }
}
