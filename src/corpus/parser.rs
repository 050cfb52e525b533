use crate::readiness::Publication;
use serde::{Deserialize, Deserializer};
use std::io::Read;

pub(crate) fn parse_rows<R: Read>(reader: R) -> Result<Vec<Publication>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut publications = Vec::new();

    for (index, record) in csv_reader.deserialize::<PublicationRow>().enumerate() {
        let row = record?;
        publications.push(row.into_publication(index));
    }

    Ok(publications)
}

#[derive(Debug, Deserialize)]
struct PublicationRow {
    #[serde(rename = "Id", default, deserialize_with = "empty_string_as_none")]
    id: Option<String>,
    #[serde(rename = "Title", default)]
    title: String,
    #[serde(rename = "Abstract", default, deserialize_with = "empty_string_as_none")]
    abstract_text: Option<String>,
    #[serde(rename = "Keywords", default, deserialize_with = "empty_string_as_none")]
    keywords: Option<String>,
    #[serde(rename = "Year", default, deserialize_with = "empty_string_as_none")]
    year: Option<String>,
}

impl PublicationRow {
    fn into_publication(self, index: usize) -> Publication {
        Publication {
            // Rows without an id still need a stable, deterministic one.
            id: self.id.unwrap_or_else(|| format!("row-{}", index + 1)),
            title: self.title,
            abstract_text: self.abstract_text.unwrap_or_default(),
            keywords: self
                .keywords
                .as_deref()
                .map(split_keywords)
                .unwrap_or_default(),
            year: self.year.as_deref().and_then(parse_year),
        }
    }
}

fn split_keywords(raw: &str) -> Vec<String> {
    raw.split(';')
        .map(str::trim)
        .filter(|keyword| !keyword.is_empty())
        .map(str::to_string)
        .collect()
}

/// Accepts only plausible 4-digit calendar years; anything else is treated
/// as unknown rather than failing the row.
fn parse_year(raw: &str) -> Option<u16> {
    raw.trim()
        .parse::<u16>()
        .ok()
        .filter(|year| (1000..=9999).contains(year))
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}
