//! Plain-text renderings for terminal output.

use std::fmt::Write;

use crate::api::RecommendationsResult;
use crate::catalog::RiskLevel;
use crate::findings::{by_risk, AnalysisReport};
use crate::meal_plan::{Meal, MealPlanOutcome};
use crate::radar::RadarChart;
use crate::recommendations::Recommendation;

const RULE: &str = "------------------------------------------------------------";

pub fn render_analysis(report: &AnalysisReport) -> String {
    let mut out = String::new();
    let info = &report.file_info;
    let _ = writeln!(out, "Session:  {}", report.session_id);
    let _ = writeln!(
        out,
        "File:     {} ({} bytes, sha256 {})",
        info.original_name, info.size_bytes, info.sha256
    );
    let _ = writeln!(out, "Source:   {} (build {})", info.source, info.build);
    let _ = writeln!(
        out,
        "SNPs:     {} in file, {} monitored, {} not available",
        info.snp_count, report.summary.nutrigenomics_snps_analyzed, report.summary.not_available
    );
    let stats = &report.parse_stats;
    if stats.malformed_lines > 0 || stats.duplicate_calls > 0 {
        let _ = writeln!(
            out,
            "Skipped:  {} malformed lines, {} duplicate calls",
            stats.malformed_lines, stats.duplicate_calls
        );
    }
    for warning in &report.warnings {
        let _ = writeln!(out, "Warning:  {}", warning);
    }

    for level in RiskLevel::ALL {
        let findings = by_risk(&report.findings, level);
        if findings.is_empty() {
            continue;
        }
        let _ = writeln!(out, "\n{} ({})\n{}", level.as_str().to_uppercase(), findings.len(), RULE);
        for finding in findings {
            let _ = writeln!(
                out,
                "{:<11} {:<10} {:<3} {}",
                finding.rsid, finding.gene, finding.genotype, finding.condition
            );
            let _ = writeln!(out, "            {}", finding.interpretation);
        }
    }
    out
}

fn render_recommendation(out: &mut String, rec: &Recommendation) {
    let _ = writeln!(out, "* {} [{}]", rec.category, rec.genetic_basis);
    let _ = writeln!(out, "  {}", rec.recommendation);
    if let Some(note) = &rec.personalized_note {
        let _ = writeln!(out, "  Note: {}", note);
    }
}

fn render_list(out: &mut String, title: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    let _ = writeln!(out, "\n{}: {}", title, items.join(", "));
}

pub fn render_recommendations(result: &RecommendationsResult) -> String {
    let mut out = String::new();
    let recs = &result.recommendations;
    let _ = writeln!(
        out,
        "Recommendations for {} ({})",
        result.session_id,
        if result.personalized {
            "personalized"
        } else {
            "no questionnaire yet"
        }
    );

    for (title, list) in [
        ("High priority", &recs.high_priority),
        ("Moderate priority", &recs.moderate_priority),
        ("General advice", &recs.general_advice),
    ] {
        if list.is_empty() {
            continue;
        }
        let _ = writeln!(out, "\n{}\n{}", title, RULE);
        for rec in list {
            render_recommendation(&mut out, rec);
        }
    }

    render_list(&mut out, "Foods to increase", &recs.foods_to_increase);
    render_list(&mut out, "Foods to limit", &recs.foods_to_limit);
    render_list(&mut out, "Supplements to consider", &recs.supplements_to_consider);
    let _ = writeln!(out, "\n{}", recs.disclaimer);
    out
}

pub fn render_radar(chart: &RadarChart) -> String {
    let mut out = String::new();
    for entry in &chart.categories {
        let bar = "#".repeat(usize::from(entry.score) / 5);
        let _ = writeln!(
            out,
            "{:<13} {:>3} {:<20} ({} findings)",
            entry.category.as_str(),
            entry.score,
            bar,
            entry.findings_count
        );
    }
    let _ = writeln!(out, "\n{}", chart.description);
    out
}

fn render_meal(out: &mut String, slot: &str, meal: &Meal) {
    let _ = writeln!(
        out,
        "  {:<10} {} (P {:.0}g / C {:.0}g / F {:.0}g)",
        slot, meal.name, meal.macros.protein_g, meal.macros.carbs_g, meal.macros.fats_g
    );
}

pub fn render_meal_plan(outcome: &MealPlanOutcome) -> String {
    let mut out = String::new();
    match outcome {
        MealPlanOutcome::Generated(plan) => {
            let _ = writeln!(
                out,
                "{} of {} days generated by {}",
                plan.days, plan.requested_days, plan.generated_by
            );
            for day in &plan.meal_plan {
                let _ = writeln!(out, "\nDay {}\n{}", day.day, RULE);
                if !day.genetic_note.is_empty() {
                    let _ = writeln!(out, "  {}", day.genetic_note);
                }
                render_meal(&mut out, "Breakfast", &day.meals.breakfast);
                render_meal(&mut out, "Lunch", &day.meals.lunch);
                render_meal(&mut out, "Dinner", &day.meals.dinner);
                for snack in &day.meals.snacks {
                    render_meal(&mut out, "Snack", snack);
                }
            }
            let _ = writeln!(out, "\n{}", plan.disclaimer);
        }
        MealPlanOutcome::Degraded(degraded) => {
            let _ = writeln!(out, "Meal plan unavailable: {}", degraded.error);
            let _ = writeln!(out, "{}", degraded.fallback_advice);
            for tip in &degraded.quick_tips {
                let _ = writeln!(out, "  - {}", tip);
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::meal_plan::{DegradedPlan, GenerationError};

    #[test]
    fn degraded_plan_lists_tips() {
        let outcome = MealPlanOutcome::Degraded(DegradedPlan::from_error(&GenerationError::Cancelled));
        let text = render_meal_plan(&outcome);
        assert!(text.starts_with("Meal plan unavailable"));
        assert_eq!(text.matches("  - ").count(), 5);
    }
}
