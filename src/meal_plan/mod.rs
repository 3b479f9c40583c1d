//! Bounded, cancellable meal plan generation with a deterministic fallback.
//!
//! A request moves `Idle -> Requesting -> {Succeeded, Degraded}`. The generator runs on a
//! worker thread; the caller waits on whichever comes first of its result, the timeout, or
//! the cancel token. Anything other than at least one valid day resolves to a
//! [`DegradedPlan`], so generation never fails the surrounding request.

mod generator;
mod prompt;

pub use generator::{ChatCompletionsGenerator, GenerationError, MealGenerator};
pub use prompt::{build_prompt, MealPrompt};

use crossbeam_channel::{after, bounded, never, select, Receiver, Sender};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use crate::api::{ApiError, ApiResult};
use crate::questionnaire::QuestionnaireAnswers;
use crate::recommendations::RecommendationReport;

pub const MIN_DAYS: u8 = 1;
pub const MAX_DAYS: u8 = 7;
pub const DEFAULT_DAYS: u8 = 3;
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(45);

pub const PLAN_DISCLAIMER: &str = "This meal plan is AI-generated based on your genetic profile \
and should be reviewed with a healthcare professional or registered dietitian.";
const FALLBACK_REPORT: &str = "Focus on the dietary recommendations provided in your report.";
const FALLBACK_DIETITIAN: &str =
    "Please consult with a registered dietitian for personalized meal planning.";
const QUICK_TIPS: [&str; 5] = [
    "Focus on whole, unprocessed foods",
    "Include plenty of vegetables and fruits",
    "Choose lean proteins appropriate for your diet type",
    "Stay hydrated with water throughout the day",
    "Consider meal prep to ensure consistency",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanState {
    Idle,
    Requesting,
    Succeeded,
    Degraded,
}

impl PlanState {
    fn can_move_to(self, next: PlanState) -> bool {
        matches!(
            (self, next),
            (PlanState::Idle, PlanState::Requesting)
                | (PlanState::Requesting, PlanState::Succeeded)
                | (PlanState::Requesting, PlanState::Degraded)
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Macros {
    pub protein_g: f64,
    pub carbs_g: f64,
    pub fats_g: f64,
}

impl Macros {
    fn is_valid(&self) -> bool {
        [self.protein_g, self.carbs_g, self.fats_g]
            .iter()
            .all(|v| v.is_finite() && *v >= 0.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meal {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ingredients: Vec<String>,
    pub macros: Macros,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meals {
    pub breakfast: Meal,
    pub lunch: Meal,
    pub dinner: Meal,
    /// Required slot; an empty list is allowed.
    pub snacks: Vec<Meal>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealDay {
    pub day: u8,
    #[serde(default)]
    pub genetic_note: String,
    pub meals: Meals,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealPlan {
    /// Number of valid days returned, at most the number requested.
    pub days: u8,
    pub requested_days: u8,
    pub meal_plan: Vec<MealDay>,
    pub generated_by: String,
    pub disclaimer: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DegradedPlan {
    pub error: String,
    pub fallback_advice: String,
    pub quick_tips: Vec<String>,
}

impl DegradedPlan {
    pub fn from_error(err: &GenerationError) -> Self {
        let fallback_advice = match err {
            GenerationError::Malformed(_) | GenerationError::NoValidDays => FALLBACK_DIETITIAN,
            _ => FALLBACK_REPORT,
        };
        let error = match err {
            GenerationError::NotConfigured { .. } => err.to_string(),
            _ => format!("AI generation failed: {}", err),
        };
        Self {
            error,
            fallback_advice: fallback_advice.to_string(),
            quick_tips: QUICK_TIPS.iter().map(|tip| tip.to_string()).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MealPlanOutcome {
    Generated(MealPlan),
    Degraded(DegradedPlan),
}

impl MealPlanOutcome {
    pub fn state(&self) -> PlanState {
        match self {
            MealPlanOutcome::Generated(_) => PlanState::Succeeded,
            MealPlanOutcome::Degraded(_) => PlanState::Degraded,
        }
    }

    pub fn is_generated(&self) -> bool {
        matches!(self, MealPlanOutcome::Generated(_))
    }
}

/// Owner side of a cancellation signal. Cancelling, or dropping the handle, stops the wait.
pub struct CancelHandle {
    tx: Sender<()>,
}

impl CancelHandle {
    pub fn cancel(self) {
        let _ = self.tx.send(());
    }
}

#[derive(Clone)]
pub struct CancelToken {
    rx: Receiver<()>,
}

pub fn cancel_pair() -> (CancelHandle, CancelToken) {
    let (tx, rx) = bounded(1);
    (CancelHandle { tx }, CancelToken { rx })
}

pub fn validate_days(days: u8) -> ApiResult<u8> {
    if !(MIN_DAYS..=MAX_DAYS).contains(&days) {
        return Err(ApiError::validation(
            "days",
            format!("{} is outside {}-{}", days, MIN_DAYS, MAX_DAYS),
        ));
    }
    Ok(days)
}

/// Keeps the well-formed days of a raw response, at most `requested` of them.
pub fn validate_response(raw: &Value, requested: u8) -> Result<Vec<MealDay>, GenerationError> {
    let days = raw
        .get("days")
        .and_then(Value::as_array)
        .ok_or_else(|| GenerationError::Malformed("missing \"days\" array".to_string()))?;

    let mut valid = Vec::new();
    for (idx, day) in days.iter().enumerate() {
        if valid.len() == usize::from(requested) {
            tracing::debug!(extra = days.len() - idx, "truncating days beyond the request");
            break;
        }
        match serde_json::from_value::<MealDay>(day.clone()) {
            Ok(parsed) if day_is_valid(&parsed) => valid.push(parsed),
            Ok(_) => tracing::warn!(index = idx, "dropping meal day with invalid macros"),
            Err(e) => tracing::warn!(index = idx, "dropping malformed meal day: {}", e),
        }
    }
    Ok(valid)
}

fn day_is_valid(day: &MealDay) -> bool {
    let meals = &day.meals;
    [&meals.breakfast, &meals.lunch, &meals.dinner]
        .into_iter()
        .chain(meals.snacks.iter())
        .all(|meal| meal.macros.is_valid())
}

pub struct MealPlanner {
    generator: Arc<dyn MealGenerator>,
    timeout: Duration,
    state: PlanState,
}

impl MealPlanner {
    pub fn new(generator: Arc<dyn MealGenerator>) -> Self {
        Self {
            generator,
            timeout: DEFAULT_TIMEOUT,
            state: PlanState::Idle,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn state(&self) -> PlanState {
        self.state
    }

    fn transition(&mut self, next: PlanState) {
        debug_assert!(self.state.can_move_to(next), "{:?} -> {:?}", self.state, next);
        tracing::debug!(from = ?self.state, to = ?next, "meal plan state");
        self.state = next;
    }

    /// Runs one generation. Only an out-of-range day count is an error; every generator
    /// problem becomes a degraded outcome. A planner serves a single request.
    pub fn plan(
        &mut self,
        report: &RecommendationReport,
        answers: Option<&QuestionnaireAnswers>,
        days: u8,
        cancel: Option<&CancelToken>,
    ) -> ApiResult<MealPlanOutcome> {
        let days = validate_days(days)?;
        if self.state != PlanState::Idle {
            return Err(ApiError::validation("meal_plan", "planner already used"));
        }
        let prompt = build_prompt(report, answers, days);

        self.transition(PlanState::Requesting);
        let outcome = match self.request(prompt, cancel) {
            Ok(meal_plan) => {
                if meal_plan.len() < usize::from(days) {
                    tracing::info!(requested = days, returned = meal_plan.len(), "partial meal plan");
                }
                MealPlanOutcome::Generated(MealPlan {
                    days: meal_plan.len() as u8,
                    requested_days: days,
                    meal_plan,
                    generated_by: self.generator.name(),
                    disclaimer: PLAN_DISCLAIMER.to_string(),
                })
            }
            Err(e) => {
                tracing::warn!("meal plan degraded: {}", e);
                MealPlanOutcome::Degraded(DegradedPlan::from_error(&e))
            }
        };
        self.transition(outcome.state());
        Ok(outcome)
    }

    fn request(
        &self,
        prompt: MealPrompt,
        cancel: Option<&CancelToken>,
    ) -> Result<Vec<MealDay>, GenerationError> {
        let requested = prompt.days;
        let (tx, rx) = bounded(1);
        let generator = Arc::clone(&self.generator);
        thread::Builder::new()
            .name("meal-plan".to_string())
            .spawn(move || {
                // A timeout or cancel abandons this call rather than stopping it. It runs until
                // the generator's own timeout and its result is discarded.
                let _ = tx.send(generator.generate(&prompt));
            })
            .map_err(|e| GenerationError::Malformed(format!("cannot start worker: {}", e)))?;

        let cancel_rx = cancel.map(|token| token.rx.clone()).unwrap_or_else(never);
        let raw = select! {
            recv(rx) -> result => match result {
                Ok(result) => result?,
                Err(_) => return Err(GenerationError::Malformed("worker exited without a result".to_string())),
            },
            recv(cancel_rx) -> _ => return Err(GenerationError::Cancelled),
            recv(after(self.timeout)) -> _ => return Err(GenerationError::TimedOut(self.timeout)),
        };

        let days = validate_response(&raw, requested)?;
        if days.is_empty() {
            return Err(GenerationError::NoValidDays);
        }
        Ok(days)
    }
}
