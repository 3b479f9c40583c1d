use nutrigene_tools::catalog::Catalog;
use nutrigene_tools::config::Config;
use nutrigene_tools::meal_plan::{
    cancel_pair, GenerationError, MealGenerator, MealPlanOutcome, MealPlanner, MealPrompt,
    PlanState,
};
use nutrigene_tools::recommendations::synthesize;
use nutrigene_tools::store::MemoryStore;
use nutrigene_tools::{ApiError, NutriService};
use serde_json::{json, Value};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

// Orchestrator behavior against stub generators: partial success, failure, timeout
// and cancellation all resolve without failing the request.

struct FixedDays(usize);

impl MealGenerator for FixedDays {
    fn name(&self) -> String {
        "stub".to_string()
    }

    fn generate(&self, prompt: &MealPrompt) -> Result<Value, GenerationError> {
        assert!(prompt.user.contains(&format!("{}-day", prompt.days)));
        let days: Vec<Value> = (1..=self.0).map(day).collect();
        Ok(json!({ "days": days }))
    }
}

struct Failing;

impl MealGenerator for Failing {
    fn name(&self) -> String {
        "failing".to_string()
    }

    fn generate(&self, _prompt: &MealPrompt) -> Result<Value, GenerationError> {
        Err(GenerationError::Status {
            status: 503,
            body: "unavailable".to_string(),
        })
    }
}

struct Slow(Duration);

impl MealGenerator for Slow {
    fn name(&self) -> String {
        "slow".to_string()
    }

    fn generate(&self, _prompt: &MealPrompt) -> Result<Value, GenerationError> {
        thread::sleep(self.0);
        Ok(json!({ "days": [day(1)] }))
    }
}

fn meal(name: &str) -> Value {
    json!({
        "name": name,
        "description": "simple",
        "macros": {"protein_g": 20, "carbs_g": 30, "fats_g": 10}
    })
}

fn day(n: usize) -> Value {
    json!({
        "day": n,
        "genetic_note": "Built around your lactase result",
        "meals": {
            "breakfast": meal("Oatmeal"),
            "lunch": meal("Lentil soup"),
            "dinner": meal("Baked salmon"),
            "snacks": []
        }
    })
}

fn service(generator: Arc<dyn MealGenerator>) -> (NutriService<MemoryStore>, String) {
    let service = NutriService::new(Arc::new(Catalog::builtin()), MemoryStore::new(), Config::default())
        .with_generator(generator);
    let text = "# This data file generated by 23andMe\nrs4988235\t2\t136608646\tCC\n";
    let id = service.upload("genome.txt", text.as_bytes()).expect("upload").session_id;
    (service, id)
}

#[test]
fn partial_plan_succeeds_without_error() {
    let (service, id) = service(Arc::new(FixedDays(4)));
    match service.meal_plan(&id, 7, None).expect("meal plan") {
        MealPlanOutcome::Generated(plan) => {
            assert_eq!(plan.days, 4);
            assert_eq!(plan.requested_days, 7);
            assert_eq!(plan.meal_plan.len(), 4);
            assert_eq!(plan.generated_by, "stub");
        }
        other => panic!("expected generated plan, got {:?}", other),
    }
}

#[test]
fn extra_days_are_truncated() {
    let (service, id) = service(Arc::new(FixedDays(5)));
    let outcome = service.meal_plan(&id, 2, None).expect("meal plan");
    match outcome {
        MealPlanOutcome::Generated(plan) => assert_eq!(plan.meal_plan.len(), 2),
        other => panic!("expected generated plan, got {:?}", other),
    }
}

#[test]
fn generator_error_degrades() {
    let (service, id) = service(Arc::new(Failing));
    match service.meal_plan(&id, 3, None).expect("meal plan") {
        MealPlanOutcome::Degraded(degraded) => {
            assert!(degraded.error.contains("503"));
            assert!(!degraded.fallback_advice.is_empty());
        }
        other => panic!("expected degraded plan, got {:?}", other),
    }
}

#[test]
fn zero_valid_days_degrades() {
    let (service, id) = service(Arc::new(FixedDays(0)));
    let outcome = service.meal_plan(&id, 3, None).expect("meal plan");
    assert_eq!(outcome.state(), PlanState::Degraded);
}

#[test]
fn out_of_range_days_is_a_validation_error() {
    let (service, id) = service(Arc::new(FixedDays(3)));
    assert!(matches!(
        service.meal_plan(&id, 0, None),
        Err(ApiError::Validation { .. })
    ));
    assert!(matches!(
        service.meal_plan(&id, 8, None),
        Err(ApiError::Validation { .. })
    ));
}

#[test]
fn slow_generator_times_out() {
    let catalog = Catalog::builtin();
    let report = synthesize(&catalog, &[], None);
    let mut planner = MealPlanner::new(Arc::new(Slow(Duration::from_millis(500))))
        .with_timeout(Duration::from_millis(20));
    assert_eq!(planner.state(), PlanState::Idle);

    let outcome = planner.plan(&report, None, 3, None).expect("plan");
    match outcome {
        MealPlanOutcome::Degraded(degraded) => assert!(degraded.error.contains("no response")),
        other => panic!("expected degraded plan, got {:?}", other),
    }
    assert_eq!(planner.state(), PlanState::Degraded);
}

#[test]
fn cancel_stops_the_wait() {
    let catalog = Catalog::builtin();
    let report = synthesize(&catalog, &[], None);
    let mut planner = MealPlanner::new(Arc::new(Slow(Duration::from_secs(2))))
        .with_timeout(Duration::from_secs(30));

    let (handle, token) = cancel_pair();
    let canceller = thread::spawn(move || {
        thread::sleep(Duration::from_millis(20));
        handle.cancel();
    });
    let outcome = planner.plan(&report, None, 3, Some(&token)).expect("plan");
    canceller.join().expect("canceller thread");

    match outcome {
        MealPlanOutcome::Degraded(degraded) => assert!(degraded.error.contains("cancelled")),
        other => panic!("expected degraded plan, got {:?}", other),
    }
}

#[test]
fn dropped_handle_cancels() {
    let catalog = Catalog::builtin();
    let report = synthesize(&catalog, &[], None);
    let mut planner = MealPlanner::new(Arc::new(Slow(Duration::from_secs(2))))
        .with_timeout(Duration::from_secs(30));

    let (handle, token) = cancel_pair();
    drop(handle);
    let outcome = planner.plan(&report, None, 1, Some(&token)).expect("plan");
    assert_eq!(outcome.state(), PlanState::Degraded);
}

#[test]
fn missing_api_key_degrades_as_not_configured() {
    let mut config = Config::default();
    config.meal_plan.api_key_env = "NUTRIGENE_TEST_KEY_THAT_IS_NEVER_SET".to_string();
    let service = NutriService::new(Arc::new(Catalog::builtin()), MemoryStore::new(), config);
    let text = "# This data file generated by 23andMe\nrs4988235\t2\t136608646\tCC\n";
    let id = service.upload("genome.txt", text.as_bytes()).expect("upload").session_id;

    match service.meal_plan(&id, 3, None).expect("meal plan") {
        MealPlanOutcome::Degraded(degraded) => {
            assert!(degraded.error.contains("not configured"));
            assert!(degraded.error.contains("NUTRIGENE_TEST_KEY_THAT_IS_NEVER_SET"));
        }
        other => panic!("expected degraded plan, got {:?}", other),
    }
}
