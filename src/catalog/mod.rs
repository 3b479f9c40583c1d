//! Reference catalog of monitored nutrigenomic variants.
//!
//! The catalog is an immutable value: build it once with [`Catalog::builtin`] and share it
//! behind an `Arc`. Genotype rules are plain data so adding a variant never touches the
//! classifier.

mod genotype;
mod variants;

pub use genotype::{is_no_call, normalize_genotype};

use serde::Serialize;
use std::collections::HashMap;
use std::fmt;

pub const CATALOG_VERSION: &str = "2024.12-25";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    High,
    Moderate,
    Low,
    Protective,
}

impl RiskLevel {
    pub const ALL: [RiskLevel; 4] = [
        RiskLevel::High,
        RiskLevel::Moderate,
        RiskLevel::Low,
        RiskLevel::Protective,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::High => "high",
            RiskLevel::Moderate => "moderate",
            RiskLevel::Low => "low",
            RiskLevel::Protective => "protective",
        }
    }

    /// High and moderate findings drive prioritized recommendations and dietary tags.
    pub fn is_elevated(&self) -> bool {
        matches!(self, RiskLevel::High | RiskLevel::Moderate)
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Radar grouping for a variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NutrientCategory {
    Digestion,
    Taste,
    Metabolism,
    Vitamins,
    Minerals,
    Fats,
    Carbs,
    Weight,
    Fitness,
    Antioxidants,
    Detox,
}

impl NutrientCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            NutrientCategory::Digestion => "digestion",
            NutrientCategory::Taste => "taste",
            NutrientCategory::Metabolism => "metabolism",
            NutrientCategory::Vitamins => "vitamins",
            NutrientCategory::Minerals => "minerals",
            NutrientCategory::Fats => "fats",
            NutrientCategory::Carbs => "carbs",
            NutrientCategory::Weight => "weight",
            NutrientCategory::Fitness => "fitness",
            NutrientCategory::Antioxidants => "antioxidants",
            NutrientCategory::Detox => "detox",
        }
    }
}

impl fmt::Display for NutrientCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenotypeEffect {
    pub risk: RiskLevel,
    pub interpretation: String,
    pub recommendation: String,
}

/// A risk allele where a single copy is enough to reach the carrier tier.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DominantAllele {
    pub allele: char,
    /// Normalized heterozygous genotype whose effect carriers inherit.
    pub carrier: String,
}

/// Foods and supplements a variant contributes once its finding is high or moderate.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DietaryTags {
    pub increase: Vec<String>,
    pub limit: Vec<String>,
    pub supplements: Vec<String>,
}

impl DietaryTags {
    pub fn is_empty(&self) -> bool {
        self.increase.is_empty() && self.limit.is_empty() && self.supplements.is_empty()
    }
}

/// Questionnaire answer that makes a variant's recommendation more specific.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "field", content = "values", rename_all = "snake_case")]
pub enum TriggerCondition {
    DigestiveIssue(Vec<String>),
    CurrentSupplement(Vec<String>),
    HealthGoal(Vec<String>),
    Allergy(Vec<String>),
    DietType(Vec<String>),
    ActivityLevel(Vec<String>),
    AlcoholFrequency(Vec<String>),
    CaffeineAbove(u8),
}

/// A cross-reference rule. `note` may contain `{value}`, replaced by the matched answer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PersonalTrigger {
    pub condition: TriggerCondition,
    pub note: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Variant {
    pub rsid: String,
    pub gene: String,
    pub condition: String,
    pub category: NutrientCategory,
    /// Label used for the recommendation category, e.g. "Dairy/Lactose".
    pub focus: String,
    pub source: String,
    effects: Vec<(String, GenotypeEffect)>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dominant: Option<DominantAllele>,
    #[serde(skip_serializing_if = "DietaryTags::is_empty")]
    pub tags: DietaryTags,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub triggers: Vec<PersonalTrigger>,
}

impl Variant {
    pub fn new(
        rsid: impl Into<String>,
        gene: impl Into<String>,
        condition: impl Into<String>,
        category: NutrientCategory,
    ) -> Self {
        let condition = condition.into();
        Variant {
            rsid: rsid.into(),
            gene: gene.into(),
            focus: condition.clone(),
            condition,
            category,
            source: String::new(),
            effects: Vec::new(),
            dominant: None,
            tags: DietaryTags::default(),
            triggers: Vec::new(),
        }
    }

    pub fn focus(mut self, focus: impl Into<String>) -> Self {
        self.focus = focus.into();
        self
    }

    pub fn source(mut self, source: impl Into<String>) -> Self {
        self.source = source.into();
        self
    }

    /// Adds a genotype rule. The key is normalized; a later rule for an equivalent
    /// genotype ("CA" after "AC") is ignored.
    pub fn effect(
        mut self,
        genotype: &str,
        risk: RiskLevel,
        interpretation: impl Into<String>,
        recommendation: impl Into<String>,
    ) -> Self {
        let key = normalize_genotype(genotype);
        if self.effects.iter().all(|(existing, _)| *existing != key) {
            self.effects.push((
                key,
                GenotypeEffect {
                    risk,
                    interpretation: interpretation.into(),
                    recommendation: recommendation.into(),
                },
            ));
        }
        self
    }

    pub fn dominant(mut self, allele: char, carrier: &str) -> Self {
        self.dominant = Some(DominantAllele {
            allele: allele.to_ascii_uppercase(),
            carrier: normalize_genotype(carrier),
        });
        self
    }

    pub fn increase(mut self, foods: &[&str]) -> Self {
        self.tags.increase.extend(foods.iter().map(|s| s.to_string()));
        self
    }

    pub fn limit(mut self, foods: &[&str]) -> Self {
        self.tags.limit.extend(foods.iter().map(|s| s.to_string()));
        self
    }

    pub fn supplements(mut self, items: &[&str]) -> Self {
        self.tags.supplements.extend(items.iter().map(|s| s.to_string()));
        self
    }

    pub fn trigger(mut self, condition: TriggerCondition, note: impl Into<String>) -> Self {
        self.triggers.push(PersonalTrigger {
            condition,
            note: note.into(),
        });
        self
    }

    /// Exact lookup on an already normalized genotype.
    pub fn effect_for(&self, genotype: &str) -> Option<&GenotypeEffect> {
        self.effects
            .iter()
            .find(|(key, _)| key == genotype)
            .map(|(_, effect)| effect)
    }

    pub fn effects(&self) -> impl Iterator<Item = (&str, &GenotypeEffect)> {
        self.effects.iter().map(|(key, effect)| (key.as_str(), effect))
    }
}

#[derive(Debug, Clone)]
pub struct Catalog {
    version: String,
    variants: Vec<Variant>,
    index: HashMap<String, usize>,
}

impl Catalog {
    /// The shipped catalog of 25 diet-relevant variants.
    pub fn builtin() -> Self {
        Catalog::from_variants(CATALOG_VERSION, variants::builtin_variants())
    }

    /// Builds a catalog in the given iteration order. Variants without any genotype rule
    /// are rejected, as are duplicate rsids (first occurrence kept).
    pub fn from_variants(version: impl Into<String>, variants: Vec<Variant>) -> Self {
        let mut kept = Vec::with_capacity(variants.len());
        let mut index = HashMap::with_capacity(variants.len());
        for variant in variants {
            if variant.effects.is_empty() {
                tracing::warn!(rsid = %variant.rsid, "variant has no genotype rules, skipping");
                continue;
            }
            let key = variant.rsid.to_ascii_lowercase();
            if index.contains_key(&key) {
                tracing::warn!(rsid = %variant.rsid, "duplicate catalog entry, skipping");
                continue;
            }
            index.insert(key, kept.len());
            kept.push(variant);
        }
        Catalog {
            version: version.into(),
            variants: kept,
            index,
        }
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn get(&self, rsid: &str) -> Option<&Variant> {
        self.index
            .get(&rsid.to_ascii_lowercase())
            .map(|&i| &self.variants[i])
    }

    pub fn contains(&self, rsid: &str) -> bool {
        self.index.contains_key(&rsid.to_ascii_lowercase())
    }

    /// Position of a variant in iteration order.
    pub fn position(&self, rsid: &str) -> Option<usize> {
        self.index.get(&rsid.to_ascii_lowercase()).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Variant> {
        self.variants.iter()
    }

    pub fn len(&self) -> usize {
        self.variants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }
}
