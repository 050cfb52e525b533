use super::domain::{GapConfidence, ReadinessLevel, TargetEnvironment};
use super::scoring::ScoringConfig;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Per-category evidence tallies, serialized under `counts` on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EvidenceCounts {
    pub total_pubs: usize,
    pub positive_evidence: usize,
    pub countermeasure_pubs: usize,
}

/// One of the up-to-three most relevant matched publications.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TopFinding {
    pub pub_id: String,
    pub short: String,
}

/// Readiness verdict for a single category.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryResult {
    pub id: &'static str,
    pub name: &'static str,
    pub score: ReadinessLevel,
    pub numeric: u8,
    pub counts: EvidenceCounts,
    pub top_findings: Vec<TopFinding>,
    pub design_implications: Vec<String>,
    pub gap_confidence: GapConfidence,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OverallIndex {
    pub numeric: u8,
    pub level: ReadinessLevel,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisMetadata {
    pub total_publications: usize,
    pub environment: TargetEnvironment,
    pub min_year: u16,
    pub analysis_date: DateTime<Utc>,
}

/// The engine's sole output; field names are the dashboard wire contract.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MissionReadinessAnalysis {
    pub categories: Vec<CategoryResult>,
    pub overall_index: OverallIndex,
    pub metadata: AnalysisMetadata,
}

/// Confidence-weighted mean of the category scores, banded on the same
/// thresholds as the per-category levels. Zero categories collapse to a
/// red zero index rather than dividing by zero.
pub(crate) fn aggregate(categories: &[CategoryResult], config: &ScoringConfig) -> OverallIndex {
    let total_weight: u32 = categories
        .iter()
        .map(|category| category.gap_confidence.weight())
        .sum();

    if total_weight == 0 {
        return OverallIndex {
            numeric: 0,
            level: ReadinessLevel::Red,
        };
    }

    let weighted_sum: u32 = categories
        .iter()
        .map(|category| category.gap_confidence.weight() * u32::from(category.numeric))
        .sum();

    let numeric = ((weighted_sum as f32 / total_weight as f32).round() as u8).min(100);

    OverallIndex {
        numeric,
        level: config.level_for(numeric),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn category(numeric: u8, confidence: GapConfidence) -> CategoryResult {
        let config = ScoringConfig::default();
        CategoryResult {
            id: "radiation",
            name: "Radiation",
            score: config.level_for(numeric),
            numeric,
            counts: EvidenceCounts {
                total_pubs: 0,
                positive_evidence: 0,
                countermeasure_pubs: 0,
            },
            top_findings: Vec::new(),
            design_implications: Vec::new(),
            gap_confidence: confidence,
        }
    }

    #[test]
    fn zero_categories_produce_red_zero_index() {
        let index = aggregate(&[], &ScoringConfig::default());
        assert_eq!(index.numeric, 0);
        assert_eq!(index.level, ReadinessLevel::Red);
    }

    #[test]
    fn high_confidence_categories_dominate_the_mean() {
        let config = ScoringConfig::default();
        let categories = vec![
            category(90, GapConfidence::High),
            category(30, GapConfidence::Low),
        ];
        // (3 * 90 + 1 * 30) / 4 = 75, versus a plain mean of 60.
        let index = aggregate(&categories, &config);
        assert_eq!(index.numeric, 75);
        assert_eq!(index.level, ReadinessLevel::Green);
    }

    #[test]
    fn equal_confidence_reduces_to_the_plain_mean() {
        let config = ScoringConfig::default();
        let categories = vec![
            category(40, GapConfidence::Medium),
            category(60, GapConfidence::Medium),
        ];
        let index = aggregate(&categories, &config);
        assert_eq!(index.numeric, 50);
        assert_eq!(index.level, ReadinessLevel::Yellow);
    }
}
