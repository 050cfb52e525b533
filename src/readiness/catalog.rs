use super::domain::TargetEnvironment;

/// Whether an implication template addresses an evidence gap or sustains an
/// already well-covered area. Red/Yellow categories surface urgency
/// templates, Green categories surface maintenance templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImplicationTone {
    Urgency,
    Maintenance,
}

#[derive(Debug, Clone)]
pub struct ImplicationTemplate {
    pub tone: ImplicationTone,
    pub text: &'static str,
}

/// Static definition of one research-domain bucket.
///
/// All terms are stored lowercase; the matcher folds publication text to
/// lowercase before substring checks.
#[derive(Debug, Clone)]
pub struct CategoryDefinition {
    pub id: &'static str,
    pub name: &'static str,
    /// Destinations the category applies to; empty means all of them.
    pub environments: Vec<TargetEnvironment>,
    pub match_terms: Vec<&'static str>,
    pub positive_terms: Vec<&'static str>,
    pub countermeasure_terms: Vec<&'static str>,
    pub implications: Vec<ImplicationTemplate>,
}

impl CategoryDefinition {
    pub fn applies_to(&self, environment: TargetEnvironment) -> bool {
        self.environments.is_empty() || self.environments.contains(&environment)
    }
}

/// Read-only registry of category definitions, shared freely across
/// concurrent analyses.
#[derive(Debug)]
pub struct CategoryCatalog {
    categories: Vec<CategoryDefinition>,
}

impl CategoryCatalog {
    pub fn standard() -> Self {
        Self {
            categories: standard_category_definitions(),
        }
    }

    pub fn categories(&self) -> &[CategoryDefinition] {
        &self.categories
    }

    pub fn categories_for(&self, environment: TargetEnvironment) -> Vec<&CategoryDefinition> {
        self.categories
            .iter()
            .filter(|category| category.applies_to(environment))
            .collect()
    }
}

fn urgency(text: &'static str) -> ImplicationTemplate {
    ImplicationTemplate {
        tone: ImplicationTone::Urgency,
        text,
    }
}

fn maintenance(text: &'static str) -> ImplicationTemplate {
    ImplicationTemplate {
        tone: ImplicationTone::Maintenance,
        text,
    }
}

fn standard_category_definitions() -> Vec<CategoryDefinition> {
    vec![
        CategoryDefinition {
            id: "radiation",
            name: "Radiation Exposure & Shielding",
            environments: vec![],
            match_terms: vec![
                "radiation",
                "cosmic ray",
                "solar particle",
                "irradiation",
                "dosimet",
                "radioprotect",
            ],
            positive_terms: vec![
                "reduces exposure",
                "dose-dependent",
                "dna damage",
                "dose reduction",
                "significant",
                "quantified",
            ],
            countermeasure_terms: vec![
                "shielding prototype",
                "radioprotective",
                "shielding material",
                "countermeasure",
                "protective garment",
            ],
            implications: vec![
                urgency("Prioritize shielding mass allocation and storm-shelter placement in habitat design."),
                urgency("Fund additional dosimetry campaigns before committing crew exposure limits."),
                maintenance("Track shielding material studies to refine existing exposure models."),
            ],
        },
        CategoryDefinition {
            id: "bone_skeletal",
            name: "Bone & Skeletal Health",
            environments: vec![],
            match_terms: vec!["bone", "skeletal", "osteo", "calcium", "mineral density"],
            positive_terms: vec![
                "bone loss",
                "density decrease",
                "resorption",
                "osteopenia",
                "significant",
            ],
            countermeasure_terms: vec![
                "bisphosphonate",
                "resistive exercise",
                "exercise countermeasure",
                "supplementation",
            ],
            implications: vec![
                urgency("Budget crew time for high-load resistive exercise from day one of the mission."),
                urgency("Screen candidates for baseline bone density and plan pharmaceutical backup."),
                maintenance("Continue periodic densitometry to validate the exercise prescription."),
            ],
        },
        CategoryDefinition {
            id: "muscle_atrophy",
            name: "Muscle Atrophy & Performance",
            environments: vec![],
            match_terms: vec!["muscle", "atrophy", "sarcopenia", "myofiber"],
            positive_terms: vec![
                "mass loss",
                "strength decline",
                "fiber-type shift",
                "significant",
            ],
            countermeasure_terms: vec![
                "resistance training",
                "exercise protocol",
                "treadmill",
                "electrical stimulation",
            ],
            implications: vec![
                urgency("Reserve habitat volume and power for resistance exercise hardware."),
                urgency("Define minimum strength thresholds for surface operations before launch."),
                maintenance("Keep in-flight strength testing cadence to confirm protocol adherence."),
            ],
        },
        CategoryDefinition {
            id: "cardiovascular",
            name: "Cardiovascular Deconditioning",
            environments: vec![],
            match_terms: vec![
                "cardiovascular",
                "cardiac",
                "heart",
                "orthostatic",
                "vascular",
            ],
            positive_terms: vec![
                "remodeling",
                "intolerance",
                "stiffening",
                "significant",
            ],
            countermeasure_terms: vec![
                "lower body negative pressure",
                "compression garment",
                "fluid loading",
                "exercise countermeasure",
            ],
            implications: vec![
                urgency("Plan landing-day procedures around expected orthostatic intolerance."),
                urgency("Include aerobic conditioning targets in the integrated exercise schedule."),
                maintenance("Monitor cardiac remodeling literature for changes to screening criteria."),
            ],
        },
        CategoryDefinition {
            id: "behavioral_health",
            name: "Behavioral Health & Crew Psychology",
            environments: vec![],
            match_terms: vec![
                "psycholog",
                "behavioral",
                "isolation",
                "confinement",
                "sleep",
                "circadian",
                "cognitive",
            ],
            positive_terms: vec![
                "performance decline",
                "stress response",
                "mood",
                "significant",
            ],
            countermeasure_terms: vec![
                "lighting protocol",
                "schedule redesign",
                "training program",
                "virtual reality",
            ],
            implications: vec![
                urgency("Reserve private crew quarters and schedule protected rest in the mission timeline."),
                urgency("Stand up asynchronous behavioral-health support before communication delays grow."),
                maintenance("Keep circadian lighting settings aligned with the latest protocol studies."),
            ],
        },
        CategoryDefinition {
            id: "immune_function",
            name: "Immune System Dysregulation",
            environments: vec![],
            match_terms: vec![
                "immune",
                "immunolog",
                "lymphocyte",
                "cytokine",
                "viral reactivation",
            ],
            positive_terms: vec![
                "reactivation",
                "suppression",
                "altered expression",
                "significant",
            ],
            countermeasure_terms: vec![
                "vaccination",
                "nutritional intervention",
                "probiotic",
                "countermeasure",
            ],
            implications: vec![
                urgency("Stock antivirals sized for latent-virus reactivation over the full mission."),
                urgency("Add pre-flight immunological screening to the crew medical gateway."),
                maintenance("Track nutrition-immunity studies to tune the standard menu."),
            ],
        },
        CategoryDefinition {
            id: "food_production",
            name: "Food Production & Plant Systems",
            environments: vec![TargetEnvironment::Moon, TargetEnvironment::Mars],
            match_terms: vec![
                "plant",
                "crop",
                "food production",
                "veggie",
                "photosynthesis",
                "agriculture",
            ],
            positive_terms: vec!["yield", "growth rate", "germination", "significant"],
            countermeasure_terms: vec![
                "led lighting",
                "hydroponic",
                "substrate",
                "cultivation protocol",
            ],
            implications: vec![
                urgency("Size surface greenhouse mass and power margins conservatively until yields are proven."),
                urgency("Carry packaged-food reserves covering full crop-cycle failures."),
                maintenance("Fold validated cultivar results into the surface agriculture plan."),
            ],
        },
        CategoryDefinition {
            id: "dust_toxicology",
            name: "Dust & Regolith Toxicology",
            environments: vec![TargetEnvironment::Moon, TargetEnvironment::Mars],
            match_terms: vec!["dust", "regolith", "particulate", "inhalation"],
            positive_terms: vec!["inflammation", "toxicity", "pulmonary", "significant"],
            countermeasure_terms: vec![
                "filtration",
                "airlock protocol",
                "suit design",
                "mitigation",
            ],
            implications: vec![
                urgency("Require suitport or dust-lock architecture in surface habitat trades."),
                urgency("Set cabin particulate exposure limits before finalizing ECLSS filtration."),
                maintenance("Review toxicology updates when revising EVA dust procedures."),
            ],
        },
        CategoryDefinition {
            id: "fluid_shift_vision",
            name: "Fluid Shifts & Ocular Health",
            environments: vec![TargetEnvironment::Transit],
            match_terms: vec![
                "fluid shift",
                "intracranial",
                "ocular",
                "optic disc",
                "vision",
            ],
            positive_terms: vec![
                "edema",
                "globe flattening",
                "acuity change",
                "significant",
            ],
            countermeasure_terms: vec![
                "lower body negative pressure",
                "venous thigh cuff",
                "countermeasure",
            ],
            implications: vec![
                urgency("Include in-flight ocular imaging hardware in the transit medical kit."),
                urgency("Qualify a fluid-shift countermeasure before transits beyond six months."),
                maintenance("Track longitudinal vision outcomes to refine flight-duration limits."),
            ],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn standard_catalog_has_unique_ids_and_match_terms() {
        let catalog = CategoryCatalog::standard();
        let mut seen = HashSet::new();
        for category in catalog.categories() {
            assert!(seen.insert(category.id), "duplicate id {}", category.id);
            assert!(
                !category.match_terms.is_empty(),
                "{} needs at least one match term",
                category.id
            );
        }
    }

    #[test]
    fn every_category_covers_both_implication_tones() {
        for category in CategoryCatalog::standard().categories() {
            let has_urgency = category
                .implications
                .iter()
                .any(|template| template.tone == ImplicationTone::Urgency);
            let has_maintenance = category
                .implications
                .iter()
                .any(|template| template.tone == ImplicationTone::Maintenance);
            assert!(has_urgency && has_maintenance, "{} lacks a tone", category.id);
        }
    }

    #[test]
    fn terms_are_stored_lowercase() {
        for category in CategoryCatalog::standard().categories() {
            for term in category
                .match_terms
                .iter()
                .chain(&category.positive_terms)
                .chain(&category.countermeasure_terms)
            {
                assert_eq!(*term, term.to_lowercase(), "in {}", category.id);
            }
        }
    }

    #[test]
    fn environment_gating_partitions_the_catalog() {
        let catalog = CategoryCatalog::standard();
        let transit = catalog.categories_for(TargetEnvironment::Transit);
        assert!(transit.iter().any(|c| c.id == "fluid_shift_vision"));
        assert!(transit.iter().all(|c| c.id != "dust_toxicology"));

        let moon = catalog.categories_for(TargetEnvironment::Moon);
        assert!(moon.iter().any(|c| c.id == "dust_toxicology"));
        assert!(moon.iter().all(|c| c.id != "fluid_shift_vision"));
    }
}
