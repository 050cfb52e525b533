use super::catalog::{CategoryDefinition, ImplicationTone};
use super::domain::{GapConfidence, Publication, ReadinessLevel};
use super::matcher::CategoryMatch;
use super::report::{CategoryResult, EvidenceCounts, TopFinding};

/// Weights, saturation points, and banding thresholds for the scorer.
///
/// Every numeric score component is monotone non-decreasing in its
/// counter; downstream consumers rely on that when comparing analyses.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoringConfig {
    /// Scores at or above this band Green.
    pub green_floor: u8,
    /// Scores at or above this (but below `green_floor`) band Yellow.
    pub yellow_floor: u8,
    /// Maximum points for evidence volume.
    pub volume_weight: f32,
    /// Corpus share at which the volume component saturates.
    pub volume_saturation_coverage: f32,
    /// Maximum points for positive-evidence quality.
    pub quality_weight: f32,
    /// Positive-evidence count at which the quality component saturates.
    pub quality_saturation_pubs: usize,
    /// Flat bonus granted when any countermeasure publication exists.
    pub mitigation_bonus: f32,
    /// Below this many matched publications, confidence is low.
    pub low_confidence_below: usize,
    /// Above this many matched publications, confidence is high.
    pub high_confidence_above: usize,
    /// Maximum number of top findings surfaced per category.
    pub max_findings: usize,
    /// Character bound for a finding excerpt.
    pub finding_excerpt_chars: usize,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            green_floor: 70,
            yellow_floor: 40,
            volume_weight: 45.0,
            volume_saturation_coverage: 0.25,
            quality_weight: 40.0,
            quality_saturation_pubs: 6,
            mitigation_bonus: 15.0,
            low_confidence_below: 5,
            high_confidence_above: 15,
            max_findings: 3,
            finding_excerpt_chars: 140,
        }
    }
}

impl ScoringConfig {
    pub fn level_for(&self, numeric: u8) -> ReadinessLevel {
        if numeric >= self.green_floor {
            ReadinessLevel::Green
        } else if numeric >= self.yellow_floor {
            ReadinessLevel::Yellow
        } else {
            ReadinessLevel::Red
        }
    }

    /// Confidence derives solely from match volume, never from the score,
    /// so thin-but-green categories stay distinguishable downstream.
    pub fn confidence_for(&self, total_pubs: usize) -> GapConfidence {
        if total_pubs < self.low_confidence_below {
            GapConfidence::Low
        } else if total_pubs <= self.high_confidence_above {
            GapConfidence::Medium
        } else {
            GapConfidence::High
        }
    }
}

pub(crate) fn score_category(
    definition: &CategoryDefinition,
    match_result: &CategoryMatch<'_>,
    corpus_size: usize,
    config: &ScoringConfig,
) -> CategoryResult {
    let numeric = numeric_score(
        match_result.total_pubs,
        match_result.positive_evidence,
        match_result.countermeasure_pubs,
        corpus_size,
        config,
    );
    let score = config.level_for(numeric);
    let gap_confidence = config.confidence_for(match_result.total_pubs);

    CategoryResult {
        id: definition.id,
        name: definition.name,
        score,
        numeric,
        counts: EvidenceCounts {
            total_pubs: match_result.total_pubs,
            positive_evidence: match_result.positive_evidence,
            countermeasure_pubs: match_result.countermeasure_pubs,
        },
        top_findings: top_findings(&match_result.matched, config),
        design_implications: implications_for(definition, score),
        gap_confidence,
    }
}

/// Volume, quality, and mitigation components, each saturating.
fn numeric_score(
    total_pubs: usize,
    positive_evidence: usize,
    countermeasure_pubs: usize,
    corpus_size: usize,
    config: &ScoringConfig,
) -> u8 {
    let volume = if corpus_size == 0 {
        0.0
    } else {
        let coverage = total_pubs as f32 / corpus_size as f32;
        config.volume_weight * (coverage / config.volume_saturation_coverage).min(1.0)
    };

    let quality = config.quality_weight
        * (positive_evidence as f32 / config.quality_saturation_pubs as f32).min(1.0);

    let mitigation = if countermeasure_pubs > 0 {
        config.mitigation_bonus
    } else {
        0.0
    };

    (volume + quality + mitigation).clamp(0.0, 100.0).round() as u8
}

/// Most recent matched publications first, ids breaking year ties so the
/// selection is reproducible; records without a year sort last.
fn top_findings(matched: &[&Publication], config: &ScoringConfig) -> Vec<TopFinding> {
    let mut ranked: Vec<&Publication> = matched.to_vec();
    ranked.sort_by(|a, b| b.year.cmp(&a.year).then_with(|| a.id.cmp(&b.id)));

    ranked
        .into_iter()
        .take(config.max_findings)
        .map(|publication| TopFinding {
            pub_id: publication.id.clone(),
            short: excerpt(&publication.abstract_text, config.finding_excerpt_chars),
        })
        .collect()
}

fn excerpt(text: &str, max_chars: usize) -> String {
    let trimmed = text.trim();
    if trimmed.chars().count() <= max_chars {
        return trimmed.to_string();
    }

    let mut short: String = trimmed.chars().take(max_chars.saturating_sub(1)).collect();
    short.push('…');
    short
}

fn implications_for(definition: &CategoryDefinition, score: ReadinessLevel) -> Vec<String> {
    let wanted = match score {
        ReadinessLevel::Green => ImplicationTone::Maintenance,
        ReadinessLevel::Yellow | ReadinessLevel::Red => ImplicationTone::Urgency,
    };

    definition
        .implications
        .iter()
        .filter(|template| template.tone == wanted)
        .map(|template| template.text.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::readiness::catalog::ImplicationTemplate;

    fn config() -> ScoringConfig {
        ScoringConfig::default()
    }

    fn publication(id: &str, abstract_text: &str, year: Option<u16>) -> Publication {
        Publication {
            id: id.to_string(),
            title: String::new(),
            abstract_text: abstract_text.to_string(),
            keywords: Vec::new(),
            year,
        }
    }

    fn definition() -> CategoryDefinition {
        CategoryDefinition {
            id: "radiation",
            name: "Radiation",
            environments: vec![],
            match_terms: vec!["radiation"],
            positive_terms: vec![],
            countermeasure_terms: vec![],
            implications: vec![
                ImplicationTemplate {
                    tone: ImplicationTone::Urgency,
                    text: "close the gap",
                },
                ImplicationTemplate {
                    tone: ImplicationTone::Maintenance,
                    text: "keep watching",
                },
            ],
        }
    }

    #[test]
    fn banding_matches_threshold_constants() {
        let config = config();
        assert_eq!(config.level_for(70), ReadinessLevel::Green);
        assert_eq!(config.level_for(69), ReadinessLevel::Yellow);
        assert_eq!(config.level_for(40), ReadinessLevel::Yellow);
        assert_eq!(config.level_for(39), ReadinessLevel::Red);
        assert_eq!(config.level_for(0), ReadinessLevel::Red);
    }

    #[test]
    fn confidence_depends_only_on_match_volume() {
        let config = config();
        assert_eq!(config.confidence_for(0), GapConfidence::Low);
        assert_eq!(config.confidence_for(4), GapConfidence::Low);
        assert_eq!(config.confidence_for(5), GapConfidence::Medium);
        assert_eq!(config.confidence_for(15), GapConfidence::Medium);
        assert_eq!(config.confidence_for(16), GapConfidence::High);
    }

    #[test]
    fn numeric_score_is_monotone_in_each_counter() {
        let config = config();
        let base = numeric_score(4, 2, 0, 40, &config);
        assert!(numeric_score(5, 2, 0, 40, &config) >= base);
        assert!(numeric_score(4, 3, 0, 40, &config) >= base);
        assert!(numeric_score(4, 2, 1, 40, &config) >= base);
    }

    #[test]
    fn volume_component_saturates() {
        let config = config();
        // Once a category holds a quarter of the corpus, more volume alone
        // stops moving the score.
        let saturated = numeric_score(10, 0, 0, 40, &config);
        assert_eq!(numeric_score(40, 0, 0, 40, &config), saturated);
    }

    #[test]
    fn empty_match_scores_red_with_urgency_implications() {
        let definition = definition();
        let empty = CategoryMatch {
            total_pubs: 0,
            positive_evidence: 0,
            countermeasure_pubs: 0,
            matched: Vec::new(),
        };
        let result = score_category(&definition, &empty, 0, &config());

        assert_eq!(result.numeric, 0);
        assert_eq!(result.score, ReadinessLevel::Red);
        assert_eq!(result.gap_confidence, GapConfidence::Low);
        assert!(result.top_findings.is_empty());
        assert_eq!(result.design_implications, vec!["close the gap".to_string()]);
    }

    #[test]
    fn findings_rank_by_recency_then_id_and_bound_excerpts() {
        let config = config();
        let long_abstract = "a".repeat(400);
        let pubs = vec![
            publication("b", "newer twin", Some(2020)),
            publication("a", &long_abstract, Some(2020)),
            publication("c", "oldest", Some(2010)),
            publication("d", "undated", None),
            publication("e", "newest", Some(2023)),
        ];
        let refs: Vec<&Publication> = pubs.iter().collect();

        let findings = top_findings(&refs, &config);
        let ids: Vec<&str> = findings.iter().map(|f| f.pub_id.as_str()).collect();
        assert_eq!(ids, vec!["e", "a", "b"]);
        assert!(findings[1].short.chars().count() <= config.finding_excerpt_chars);
        assert!(findings[1].short.ends_with('…'));
    }

    #[test]
    fn green_categories_surface_maintenance_implications_only() {
        assert_eq!(
            implications_for(&definition(), ReadinessLevel::Green),
            vec!["keep watching".to_string()]
        );
        assert_eq!(
            implications_for(&definition(), ReadinessLevel::Yellow),
            vec!["close the gap".to_string()]
        );
    }
}
