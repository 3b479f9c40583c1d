//! Per-category nutrient need scores for the radar chart.

use serde::{Deserialize, Serialize};

use crate::catalog::{NutrientCategory, RiskLevel};
use crate::findings::Finding;

pub const RADAR_DESCRIPTION: &str =
    "Higher scores indicate greater genetic need for attention in that nutrient area.";

/// Severity weights per risk tier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadarWeights {
    #[serde(default = "default_high")]
    pub high: u32,
    #[serde(default = "default_moderate")]
    pub moderate: u32,
    #[serde(default = "default_low")]
    pub low: u32,
    #[serde(default)]
    pub protective: u32,
}

fn default_high() -> u32 {
    3
}

fn default_moderate() -> u32 {
    2
}

fn default_low() -> u32 {
    1
}

impl Default for RadarWeights {
    fn default() -> Self {
        Self {
            high: default_high(),
            moderate: default_moderate(),
            low: default_low(),
            protective: 0,
        }
    }
}

impl RadarWeights {
    pub fn weight(&self, level: RiskLevel) -> u32 {
        match level {
            RiskLevel::High => self.high,
            RiskLevel::Moderate => self.moderate,
            RiskLevel::Low => self.low,
            RiskLevel::Protective => self.protective,
        }
    }

    pub fn max(&self) -> u32 {
        self.high.max(self.moderate).max(self.low).max(self.protective)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreBand {
    Low,
    Moderate,
    High,
}

impl ScoreBand {
    pub fn for_score(score: u8) -> Self {
        match score {
            0..=30 => ScoreBand::Low,
            31..=60 => ScoreBand::Moderate,
            _ => ScoreBand::High,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadarEntry {
    pub category: NutrientCategory,
    pub score: u8,
    pub findings_count: usize,
    pub band: ScoreBand,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadarChart {
    pub categories: Vec<RadarEntry>,
    pub description: String,
}

pub fn score(findings: &[Finding], weights: &RadarWeights) -> RadarChart {
    // Summed in u64 so large configured weights cannot overflow.
    let mut totals: Vec<(NutrientCategory, u64, usize)> = Vec::new();
    for finding in findings {
        let weight = u64::from(weights.weight(finding.risk_level));
        match totals.iter_mut().find(|(category, _, _)| *category == finding.category) {
            Some((_, sum, count)) => {
                *sum += weight;
                *count += 1;
            }
            None => totals.push((finding.category, weight, 1)),
        }
    }

    let max_weight = weights.max();
    let categories = totals
        .into_iter()
        .map(|(category, sum, count)| {
            let score = if max_weight == 0 {
                0
            } else {
                let raw = (100.0 * sum as f64 / (count as f64 * f64::from(max_weight))).round();
                raw.clamp(0.0, 100.0) as u8
            };
            RadarEntry {
                category,
                score,
                findings_count: count,
                band: ScoreBand::for_score(score),
            }
        })
        .collect();

    RadarChart {
        categories,
        description: RADAR_DESCRIPTION.to_string(),
    }
}
