use std::fmt::Write;

use crate::questionnaire::QuestionnaireAnswers;
use crate::recommendations::RecommendationReport;

const MAX_CONCERNS: usize = 3;
const MAX_PRIORITIZE: usize = 8;
const MAX_MINIMIZE: usize = 5;

const SYSTEM_PROMPT: &str = "You are a nutrigenomics expert who creates personalized meal plans. \
You MUST respond with valid JSON only, no additional text.";

const RESPONSE_SHAPE: &str = r#"{
  "days": [
    {
      "day": 1,
      "genetic_note": "Brief explanation of how today's meals address your genetic profile",
      "meals": {
        "breakfast": {
          "name": "Meal name",
          "description": "Brief description",
          "ingredients": ["ingredient1", "ingredient2"],
          "macros": {"protein_g": 25, "carbs_g": 40, "fats_g": 15}
        },
        "lunch": { ... },
        "dinner": { ... },
        "snacks": [
          {
            "name": "Snack name",
            "description": "Brief description",
            "macros": {"protein_g": 10, "carbs_g": 20, "fats_g": 8}
          }
        ]
      }
    }
  ]
}"#;

#[derive(Debug, Clone, PartialEq)]
pub struct MealPrompt {
    pub system: String,
    pub user: String,
    pub days: u8,
}

fn capitalize(value: &str) -> String {
    let value = value.replace('_', " ");
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn joined_or(values: &[String], empty: &str) -> String {
    if values.is_empty() {
        empty.to_string()
    } else {
        values.join(", ")
    }
}

fn bullets(out: &mut String, values: &[String], limit: usize, empty: &str) {
    if values.is_empty() {
        let _ = writeln!(out, "- {}", empty);
    }
    for value in values.iter().take(limit) {
        let _ = writeln!(out, "- {}", value);
    }
}

/// Builds the generator prompt from the synthesized recommendations and lifestyle answers.
pub fn build_prompt(
    report: &RecommendationReport,
    answers: Option<&QuestionnaireAnswers>,
    days: u8,
) -> MealPrompt {
    let diet = answers.map(|a| a.diet_type.as_str()).unwrap_or("omnivore");
    let activity = answers.map(|a| a.activity_level.as_str()).unwrap_or("moderate");
    let empty = Vec::new();
    let allergies = answers.map(|a| &a.known_allergies).unwrap_or(&empty);
    let digestive = answers.map(|a| &a.digestive_issues).unwrap_or(&empty);
    let goals = answers.map(|a| &a.health_goals).unwrap_or(&empty);

    let concerns: Vec<String> = report
        .high_priority
        .iter()
        .take(MAX_CONCERNS)
        .map(|rec| rec.category.clone())
        .collect();

    let mut user = String::new();
    let _ = writeln!(
        user,
        "Generate a {}-day personalized meal plan in JSON format.\n",
        days
    );
    let _ = writeln!(user, "USER PROFILE:");
    let _ = writeln!(user, "- Diet Type: {}", capitalize(diet));
    let _ = writeln!(user, "- Activity Level: {}", capitalize(activity));
    let _ = writeln!(user, "- Allergies/Intolerances: {}", joined_or(allergies, "None"));
    let _ = writeln!(user, "- Digestive Issues: {}", joined_or(digestive, "None"));
    let _ = writeln!(user, "- Health Goals: {}\n", joined_or(goals, "General wellness"));

    let _ = writeln!(user, "GENETIC INSIGHTS:");
    let _ = writeln!(
        user,
        "Top Genetic Concerns: {}\n",
        joined_or(&concerns, "None identified")
    );
    let _ = writeln!(user, "Foods to PRIORITIZE (based on genetics):");
    bullets(&mut user, &report.foods_to_increase, MAX_PRIORITIZE, "No specific prioritization");
    let _ = writeln!(user, "\nFoods to MINIMIZE (based on genetics):");
    bullets(&mut user, &report.foods_to_limit, MAX_MINIMIZE, "No specific restrictions");

    let _ = writeln!(user, "\nINSTRUCTIONS:");
    let _ = writeln!(
        user,
        "1. Create exactly {} days of meals (breakfast, lunch, dinner, snacks)",
        days
    );
    let _ = writeln!(
        user,
        "2. Every meal must fit a {} diet, avoid all listed allergens, emphasize prioritized foods, \
         minimize restricted foods and match a {} activity level",
        diet, activity
    );
    let _ = writeln!(user, "3. Give protein, carbs and fats in grams for each meal");
    let _ = writeln!(user, "4. Keep meals practical and easy to prepare");
    let _ = writeln!(
        user,
        "5. Add one genetic_note per day explaining how the meals address the top concern\n"
    );
    let _ = writeln!(user, "REQUIRED JSON FORMAT:\n{}\n", RESPONSE_SHAPE);
    let _ = write!(user, "Return ONLY the JSON object, no additional text.");

    MealPrompt {
        system: SYSTEM_PROMPT.to_string(),
        user,
        days,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::classifier::classify;
    use crate::recommendations::synthesize;

    #[test]
    fn prompt_caps_lists_and_names_concerns() {
        let catalog = Catalog::builtin();
        let findings: Vec<_> = catalog
            .iter()
            .map(|v| {
                let high = v
                    .effects()
                    .find(|(_, e)| e.risk == crate::catalog::RiskLevel::High)
                    .map(|(gt, _)| gt.to_string())
                    .unwrap_or_else(|| "--".to_string());
                classify(v, &high)
            })
            .collect();
        let report = synthesize(&catalog, &findings, None);
        assert!(report.foods_to_increase.len() > MAX_PRIORITIZE);

        let prompt = build_prompt(&report, None, 3);
        assert_eq!(prompt.days, 3);
        assert!(prompt.user.contains("Generate a 3-day"));
        assert!(prompt.user.contains("Top Genetic Concerns: Dairy/Lactose, Celiac Risk, Taste Preferences"));
        assert!(!prompt.user.contains(&report.foods_to_increase[MAX_PRIORITIZE]));
        assert!(prompt.user.contains("Diet Type: Omnivore"));
        assert!(prompt.system.contains("valid JSON"));
    }

    #[test]
    fn empty_report_uses_placeholders() {
        let report = synthesize(&Catalog::builtin(), &[], None);
        let prompt = build_prompt(&report, None, 1);
        assert!(prompt.user.contains("None identified"));
        assert!(prompt.user.contains("- No specific prioritization"));
        assert!(prompt.user.contains("- No specific restrictions"));
    }
}
