use crate::catalog::{normalize_genotype, Catalog, GenotypeEffect, RiskLevel, Variant};
use crate::findings::Finding;
use crate::parser::GenotypeCall;

pub const UNMAPPED_INTERPRETATION: &str = "pattern not in reference table";
pub const UNMAPPED_RECOMMENDATION: &str = "No specific recommendation available for this genotype.";

/// How a finding's effect was resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Exact,
    DominantCarrier,
    Unmapped,
}

/// Resolves a genotype against a variant's rule table. Total: any string yields an effect.
pub fn resolve<'v>(variant: &'v Variant, genotype: &str) -> (Resolution, Option<&'v GenotypeEffect>) {
    let genotype = normalize_genotype(genotype);
    if let Some(effect) = variant.effect_for(&genotype) {
        return (Resolution::Exact, Some(effect));
    }
    if let Some(dominant) = &variant.dominant {
        if genotype.contains(dominant.allele) {
            if let Some(effect) = variant.effect_for(&dominant.carrier) {
                return (Resolution::DominantCarrier, Some(effect));
            }
        }
    }
    (Resolution::Unmapped, None)
}

/// Classifies one monitored genotype.
pub fn classify(variant: &Variant, genotype: &str) -> Finding {
    let normalized = normalize_genotype(genotype);
    let (resolution, effect) = resolve(variant, &normalized);
    if resolution == Resolution::DominantCarrier {
        tracing::debug!(rsid = %variant.rsid, genotype = %normalized, "resolved through dominant allele");
    }
    let (risk_level, interpretation, recommendation) = match effect {
        Some(effect) => (
            effect.risk,
            effect.interpretation.clone(),
            effect.recommendation.clone(),
        ),
        None => (
            RiskLevel::Low,
            UNMAPPED_INTERPRETATION.to_string(),
            UNMAPPED_RECOMMENDATION.to_string(),
        ),
    };
    Finding {
        rsid: variant.rsid.clone(),
        gene: variant.gene.clone(),
        condition: variant.condition.clone(),
        category: variant.category,
        genotype: normalized,
        risk_level,
        interpretation,
        recommendation,
        source: variant.source.clone(),
    }
}

/// Classifies parsed calls in catalog order. Calls for unknown rsids are ignored.
pub fn classify_calls(catalog: &Catalog, calls: &[GenotypeCall]) -> Vec<Finding> {
    let mut ordered: Vec<(usize, &GenotypeCall)> = calls
        .iter()
        .filter_map(|call| catalog.position(&call.rsid).map(|pos| (pos, call)))
        .collect();
    ordered.sort_by_key(|(pos, _)| *pos);
    ordered
        .into_iter()
        .filter_map(|(_, call)| {
            catalog
                .get(&call.rsid)
                .map(|variant| classify(variant, &call.genotype))
        })
        .collect()
}
