use super::catalog::CategoryDefinition;
use super::domain::Publication;

/// Per-category tallies plus the matched records, kept for finding
/// selection. The positive and countermeasure counters are independent:
/// one publication may contribute to both.
#[derive(Debug)]
pub(crate) struct CategoryMatch<'a> {
    pub(crate) total_pubs: usize,
    pub(crate) positive_evidence: usize,
    pub(crate) countermeasure_pubs: usize,
    pub(crate) matched: Vec<&'a Publication>,
}

/// Restricts the corpus to records at or after `min_year`.
///
/// `min_year == 0` disables filtering entirely, so records without a year
/// survive; any positive cutoff requires a present year meeting it.
pub(crate) fn filter_by_year(publications: &[Publication], min_year: u16) -> Vec<&Publication> {
    publications
        .iter()
        .filter(|publication| {
            min_year == 0 || publication.year.is_some_and(|year| year >= min_year)
        })
        .collect()
}

pub(crate) fn match_category<'a>(
    definition: &CategoryDefinition,
    filtered: &[&'a Publication],
) -> CategoryMatch<'a> {
    let mut result = CategoryMatch {
        total_pubs: 0,
        positive_evidence: 0,
        countermeasure_pubs: 0,
        matched: Vec::new(),
    };

    for publication in filtered {
        let haystack = search_text(publication);
        if !contains_any(&haystack, &definition.match_terms) {
            continue;
        }

        result.total_pubs += 1;
        if contains_any(&haystack, &definition.positive_terms) {
            result.positive_evidence += 1;
        }
        if contains_any(&haystack, &definition.countermeasure_terms) {
            result.countermeasure_pubs += 1;
        }
        result.matched.push(publication);
    }

    result
}

/// Case-folded concatenation of every text field the matcher inspects.
fn search_text(publication: &Publication) -> String {
    let mut text = String::with_capacity(
        publication.title.len() + publication.abstract_text.len() + 32,
    );
    text.push_str(&publication.title);
    text.push(' ');
    text.push_str(&publication.abstract_text);
    for keyword in &publication.keywords {
        text.push(' ');
        text.push_str(keyword);
    }
    text.to_lowercase()
}

fn contains_any(haystack: &str, terms: &[&str]) -> bool {
    terms.iter().any(|term| haystack.contains(term))
}
