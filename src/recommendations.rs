//! Turns classified findings plus questionnaire answers into prioritized advice.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::catalog::{Catalog, PersonalTrigger, RiskLevel, TriggerCondition};
use crate::findings::Finding;
use crate::questionnaire::QuestionnaireAnswers;

pub const DISCLAIMER: &str = "This is for educational purposes only. Consult a healthcare professional before making dietary changes.";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub category: String,
    pub genetic_basis: String,
    pub rsid: String,
    pub risk_level: RiskLevel,
    pub recommendation: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub personalized_note: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationReport {
    pub high_priority: Vec<Recommendation>,
    pub moderate_priority: Vec<Recommendation>,
    pub general_advice: Vec<Recommendation>,
    pub foods_to_increase: Vec<String>,
    pub foods_to_limit: Vec<String>,
    pub supplements_to_consider: Vec<String>,
    pub disclaimer: String,
}

/// Insertion-ordered list that drops case-insensitive repeats.
#[derive(Debug, Default)]
struct DedupList {
    items: Vec<String>,
    seen: HashSet<String>,
}

impl DedupList {
    fn extend<'a>(&mut self, values: impl IntoIterator<Item = &'a String>) {
        for value in values {
            if self.seen.insert(value.to_lowercase()) {
                self.items.push(value.clone());
            }
        }
    }
}

fn first_match(answers: &[String], wanted: &[String]) -> Option<String> {
    answers
        .iter()
        .find(|answer| wanted.iter().any(|w| w.eq_ignore_ascii_case(answer)))
        .cloned()
}

fn single_match(answer: &str, wanted: &[String]) -> Option<String> {
    wanted
        .iter()
        .any(|w| w.eq_ignore_ascii_case(answer))
        .then(|| answer.to_string())
}

/// The answer value that fires a trigger, if any.
fn trigger_value(condition: &TriggerCondition, answers: &QuestionnaireAnswers) -> Option<String> {
    match condition {
        TriggerCondition::DigestiveIssue(values) => first_match(&answers.digestive_issues, values),
        TriggerCondition::CurrentSupplement(values) => {
            first_match(&answers.current_supplements, values)
        }
        TriggerCondition::HealthGoal(values) => first_match(&answers.health_goals, values),
        TriggerCondition::Allergy(values) => first_match(&answers.known_allergies, values),
        TriggerCondition::DietType(values) => single_match(answers.diet_type.as_str(), values),
        TriggerCondition::ActivityLevel(values) => {
            single_match(answers.activity_level.as_str(), values)
        }
        TriggerCondition::AlcoholFrequency(values) => {
            single_match(answers.alcohol_frequency.as_str(), values)
        }
        TriggerCondition::CaffeineAbove(limit) => (answers.caffeine_cups_per_day > *limit)
            .then(|| answers.caffeine_cups_per_day.to_string()),
    }
}

pub fn personalized_note(
    triggers: &[PersonalTrigger],
    answers: &QuestionnaireAnswers,
) -> Option<String> {
    let notes: Vec<String> = triggers
        .iter()
        .filter_map(|trigger| {
            trigger_value(&trigger.condition, answers)
                .map(|value| trigger.note.replace("{value}", &value.replace('_', " ")))
        })
        .collect();
    if notes.is_empty() {
        None
    } else {
        Some(notes.join(" "))
    }
}

/// Builds the report. Findings are expected in catalog order; output ordering follows them.
pub fn synthesize(
    catalog: &Catalog,
    findings: &[Finding],
    answers: Option<&QuestionnaireAnswers>,
) -> RecommendationReport {
    let mut high_priority = Vec::new();
    let mut moderate_priority = Vec::new();
    let mut general_advice = Vec::new();
    let mut general_categories = HashSet::new();
    let mut increase = DedupList::default();
    let mut limit = DedupList::default();
    let mut supplements = DedupList::default();

    for finding in findings {
        let variant = catalog.get(&finding.rsid);
        let category = variant
            .map(|v| v.focus.clone())
            .unwrap_or_else(|| finding.condition.clone());
        let mut recommendation = Recommendation {
            category,
            genetic_basis: format!("{} {} ({})", finding.gene, finding.rsid, finding.genotype),
            rsid: finding.rsid.clone(),
            risk_level: finding.risk_level,
            recommendation: finding.recommendation.clone(),
            personalized_note: None,
        };

        if finding.risk_level.is_elevated() {
            if let Some(variant) = variant {
                if let Some(answers) = answers {
                    recommendation.personalized_note = personalized_note(&variant.triggers, answers);
                }
                increase.extend(&variant.tags.increase);
                limit.extend(&variant.tags.limit);
                supplements.extend(&variant.tags.supplements);
            }
            if finding.risk_level == RiskLevel::High {
                high_priority.push(recommendation);
            } else {
                moderate_priority.push(recommendation);
            }
        } else if general_categories.insert(recommendation.category.to_lowercase()) {
            general_advice.push(recommendation);
        }
    }

    RecommendationReport {
        high_priority,
        moderate_priority,
        general_advice,
        foods_to_increase: increase.items,
        foods_to_limit: limit.items,
        supplements_to_consider: supplements.items,
        disclaimer: DISCLAIMER.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{NutrientCategory, Variant};
    use crate::classifier::classify;
    use crate::questionnaire::{ActivityLevel, AlcoholFrequency, DietType, Sex};

    fn answers() -> QuestionnaireAnswers {
        QuestionnaireAnswers {
            age: 40,
            sex: Sex::Male,
            activity_level: ActivityLevel::Moderate,
            diet_type: DietType::Omnivore,
            alcohol_frequency: AlcoholFrequency::Rare,
            caffeine_cups_per_day: 1,
            digestive_issues: vec![],
            health_goals: vec![],
            current_supplements: vec![],
            known_allergies: vec![],
        }
    }

    fn findings(catalog: &Catalog, calls: &[(&str, &str)]) -> Vec<Finding> {
        calls
            .iter()
            .map(|(rsid, gt)| classify(catalog.get(rsid).unwrap(), gt))
            .collect()
    }

    #[test]
    fn existing_vitamin_d_supplement_is_noted() {
        let catalog = Catalog::builtin();
        let found = findings(&catalog, &[("rs2228570", "CT")]);
        assert_eq!(found[0].risk_level, RiskLevel::Moderate);

        let mut answers = answers();
        answers.current_supplements = vec!["vitamin_d".to_string()];
        let report = synthesize(&catalog, &found, Some(&answers));

        assert_eq!(report.moderate_priority.len(), 1);
        let rec = &report.moderate_priority[0];
        assert_eq!(rec.category, "Vitamin D");
        let note = rec.personalized_note.as_deref().unwrap();
        assert!(note.contains("already supplement vitamin D"));
        assert_eq!(rec.risk_level, RiskLevel::Moderate);
    }

    #[test]
    fn tiers_are_bucketed_in_finding_order() {
        let catalog = Catalog::builtin();
        let found = findings(
            &catalog,
            &[
                ("rs4988235", "CC"),
                ("rs762551", "AC"),
                ("rs671", "AA"),
                ("rs1229984", "TT"),
                ("rs4341", "CC"),
            ],
        );
        let report = synthesize(&catalog, &found, None);
        let high: Vec<&str> = report.high_priority.iter().map(|r| r.rsid.as_str()).collect();
        assert_eq!(high, vec!["rs4988235", "rs671"]);
        assert_eq!(report.moderate_priority[0].rsid, "rs762551");
        let general: Vec<&str> = report.general_advice.iter().map(|r| r.rsid.as_str()).collect();
        assert_eq!(general, vec!["rs1229984", "rs4341"]);
        assert_eq!(report.disclaimer, DISCLAIMER);
        assert!(report.foods_to_limit.contains(&"Alcoholic beverages".to_string()));
    }

    #[test]
    fn synthesis_is_deterministic() {
        let catalog = Catalog::builtin();
        let found: Vec<Finding> = catalog
            .iter()
            .map(|v| classify(v, &v.effects().last().unwrap().0.to_string()))
            .collect();
        let mut answers = answers();
        answers.digestive_issues = vec!["bloating".to_string()];
        let first = serde_json::to_string(&synthesize(&catalog, &found, Some(&answers))).unwrap();
        let second = serde_json::to_string(&synthesize(&catalog, &found, Some(&answers))).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn duplicate_findings_do_not_change_lists() {
        let catalog = Catalog::builtin();
        let base = findings(&catalog, &[("rs1801133", "AA"), ("rs174546", "TT")]);
        let mut doubled = base.clone();
        doubled.push(base[0].clone());

        let once = synthesize(&catalog, &base, None);
        let twice = synthesize(&catalog, &doubled, None);
        assert_eq!(once.foods_to_increase, twice.foods_to_increase);
        assert_eq!(once.foods_to_limit, twice.foods_to_limit);
        assert_eq!(once.supplements_to_consider, twice.supplements_to_consider);
        assert_eq!(
            once.foods_to_increase,
            vec!["Leafy greens".to_string(), "Legumes".to_string(), "Fatty fish".to_string()]
        );
    }

    #[test]
    fn lists_dedupe_case_insensitively() {
        let catalog = Catalog::from_variants(
            "test",
            vec![
                Variant::new("rs1", "A", "First", NutrientCategory::Fats)
                    .effect("TT", RiskLevel::High, "i", "r")
                    .increase(&["Fatty fish", "Olive oil"]),
                Variant::new("rs2", "B", "Second", NutrientCategory::Fats)
                    .effect("TT", RiskLevel::Moderate, "i", "r")
                    .increase(&["FATTY FISH", "Walnuts"]),
            ],
        );
        let found = findings(&catalog, &[("rs1", "TT"), ("rs2", "TT")]);
        let report = synthesize(&catalog, &found, None);
        assert_eq!(report.foods_to_increase, vec!["Fatty fish", "Olive oil", "Walnuts"]);
    }

    #[test]
    fn low_findings_add_no_tags_and_share_general_category() {
        let catalog = Catalog::builtin();
        let found = findings(&catalog, &[("rs1801133", "GG"), ("rs1801131", "TT")]);
        let report = synthesize(&catalog, &found, None);
        assert!(report.foods_to_increase.is_empty());
        assert!(report.supplements_to_consider.is_empty());
        assert_eq!(report.general_advice.len(), 1);
        assert_eq!(report.general_advice[0].rsid, "rs1801133");
    }

    #[test]
    fn answers_never_change_risk() {
        let catalog = Catalog::builtin();
        let found = findings(&catalog, &[("rs762551", "CC"), ("rs174546", "CT")]);
        let mut answers = answers();
        answers.caffeine_cups_per_day = 5;
        answers.diet_type = DietType::Vegan;

        let plain = synthesize(&catalog, &found, None);
        let personal = synthesize(&catalog, &found, Some(&answers));
        assert_eq!(plain.high_priority.len(), personal.high_priority.len());
        assert_eq!(plain.moderate_priority.len(), personal.moderate_priority.len());
        assert_eq!(
            personal.high_priority[0].personalized_note.as_deref(),
            Some("You drink 5 cups/day but clear caffeine slowly.")
        );
        assert_eq!(
            personal.moderate_priority[0].personalized_note.as_deref(),
            Some("As a vegan, consider algae-based omega-3 supplements.")
        );
        assert!(plain.high_priority[0].personalized_note.is_none());
    }
}
