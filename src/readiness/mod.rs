pub mod catalog;
pub mod domain;
mod matcher;
pub mod report;
pub mod scoring;

pub use catalog::CategoryCatalog;
pub use domain::{GapConfidence, Publication, ReadinessLevel, TargetEnvironment};
pub use report::{CategoryResult, MissionReadinessAnalysis, OverallIndex};
pub use scoring::ScoringConfig;

use chrono::Utc;
use report::AnalysisMetadata;

/// Stateless engine applying the category catalog and scoring policy to a
/// publication corpus. Holds only read-only configuration, so one engine
/// may serve concurrent analyses.
#[derive(Debug)]
pub struct ReadinessEngine {
    catalog: CategoryCatalog,
    scoring: ScoringConfig,
}

impl ReadinessEngine {
    pub fn new(catalog: CategoryCatalog, scoring: ScoringConfig) -> Self {
        Self { catalog, scoring }
    }

    pub fn standard() -> Self {
        Self::new(CategoryCatalog::standard(), ScoringConfig::default())
    }

    pub fn catalog(&self) -> &CategoryCatalog {
        &self.catalog
    }

    /// Runs the four stages in order: year filter, per-category matching,
    /// per-category scoring, aggregation. Categories gated out by the
    /// requested environment are omitted from the output entirely. Never
    /// fails; an empty corpus yields a well-formed degenerate analysis.
    pub fn analyze(
        &self,
        publications: &[Publication],
        environment: TargetEnvironment,
        min_year: u16,
    ) -> MissionReadinessAnalysis {
        let filtered = matcher::filter_by_year(publications, min_year);

        let mut categories = Vec::new();
        for definition in self.catalog.categories() {
            if !definition.applies_to(environment) {
                continue;
            }

            let match_result = matcher::match_category(definition, &filtered);
            categories.push(scoring::score_category(
                definition,
                &match_result,
                filtered.len(),
                &self.scoring,
            ));
        }

        let overall_index = report::aggregate(&categories, &self.scoring);

        MissionReadinessAnalysis {
            categories,
            overall_index,
            metadata: AnalysisMetadata {
                total_publications: filtered.len(),
                environment,
                min_year,
                analysis_date: Utc::now(),
            },
        }
    }
}

/// Convenience entry point using the standard catalog and scoring policy.
pub fn compute_mission_readiness_index(
    publications: &[Publication],
    environment: TargetEnvironment,
    min_year: u16,
) -> MissionReadinessAnalysis {
    ReadinessEngine::standard().analyze(publications, environment, min_year)
}
