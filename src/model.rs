//! Claims dataset model and JSON parsing.
//!
//! A dataset holds the year extent of the timeline plus one entry per
//! country, each carrying the self-determination claims recorded for that
//! country. Claims are categorized by the kind of political claim being
//! made; unknown category labels are kept for display but flagged at parse
//! time and rendered in the neutral color.

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::timeline::{HighlightSpan, TimeRange};

/// Classification of a political claim, used to color timeline bars.
///
/// Labels are matched by exact, case-sensitive string equality against the
/// canonical forms returned by [`ClaimCategory::label`]. No fuzzy matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClaimCategory {
    Autonomy,
    SubStateSecession,
    Independence,
    Irredentism,
}

impl ClaimCategory {
    /// All categories in legend display order.
    pub const ALL: [ClaimCategory; 4] = [
        ClaimCategory::Autonomy,
        ClaimCategory::SubStateSecession,
        ClaimCategory::Independence,
        ClaimCategory::Irredentism,
    ];

    /// Parses a canonical category label. Returns None for anything else.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Autonomy" => Some(ClaimCategory::Autonomy),
            "Sub-state secession" => Some(ClaimCategory::SubStateSecession),
            "Independence" => Some(ClaimCategory::Independence),
            "Irredentism" => Some(ClaimCategory::Irredentism),
            _ => None,
        }
    }

    /// Returns the canonical display label for this category.
    pub fn label(&self) -> &'static str {
        match self {
            ClaimCategory::Autonomy => "Autonomy",
            ClaimCategory::SubStateSecession => "Sub-state secession",
            ClaimCategory::Independence => "Independence",
            ClaimCategory::Irredentism => "Irredentism",
        }
    }
}

/// A country record as used by the search control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    pub code: String,
    pub name: String,
}

/// A single claim made by a movement within a country.
#[derive(Debug, Clone)]
pub struct Claim {
    /// Name of the movement making the claim
    pub movement: String,
    /// Raw category label from the source data (kept for display)
    pub label: String,
    /// The claim period and its rendering attributes
    pub span: HighlightSpan,
}

/// All claims recorded for one country.
#[derive(Debug, Clone)]
pub struct CountryClaims {
    pub code: String,
    pub name: String,
    pub claims: Vec<Claim>,
}

/// A parsed and validated claims dataset.
#[derive(Debug, Clone)]
pub struct Dataset {
    range: TimeRange,
    countries: Vec<CountryClaims>,
}

// ===== On-disk format =====

#[derive(Debug, Clone, Serialize, Deserialize)]
struct DatasetFile {
    start_year: i32,
    end_year: i32,
    countries: Vec<CountryFile>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct CountryFile {
    code: String,
    name: String,
    #[serde(default)]
    claims: Vec<ClaimFile>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct ClaimFile {
    movement: String,
    claim: String,
    from: i32,
    /// Omitted or null for ongoing claims
    #[serde(default)]
    to: Option<i32>,
    #[serde(default)]
    violence: Option<bool>,
}

impl Dataset {
    /// Loads and validates a dataset from a JSON file.
    pub fn load_file(path: &Path) -> Result<Dataset> {
        let file = File::open(path)
            .with_context(|| format!("Failed to open dataset file: {}", path.display()))?;
        let raw: DatasetFile = serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("Failed to parse dataset file: {}", path.display()))?;
        Dataset::from_file_format(raw)
    }

    /// Parses and validates a dataset from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Dataset> {
        let raw: DatasetFile = serde_json::from_str(json).context("Failed to parse dataset JSON")?;
        Dataset::from_file_format(raw)
    }

    /// Assembles a dataset from already-parsed parts. Used by the sample
    /// generator; applies the same validation as file loading.
    pub fn from_parts(range: TimeRange, countries: Vec<CountryClaims>) -> Result<Dataset> {
        if range.start_year >= range.end_year {
            bail!(
                "Dataset year range is degenerate: {}..{}",
                range.start_year,
                range.end_year
            );
        }
        for country in &countries {
            for claim in &country.claims {
                if claim.span.from > claim.span.to {
                    bail!(
                        "Claim '{}' in {} has inverted span {}..{}",
                        claim.movement,
                        country.name,
                        claim.span.from,
                        claim.span.to
                    );
                }
            }
        }
        Ok(Dataset { range, countries })
    }

    fn from_file_format(raw: DatasetFile) -> Result<Dataset> {
        let range = TimeRange::new(raw.start_year, raw.end_year);
        if range.start_year >= range.end_year {
            bail!(
                "Dataset year range is degenerate: {}..{}",
                range.start_year,
                range.end_year
            );
        }

        let mut countries = Vec::with_capacity(raw.countries.len());
        for country in raw.countries {
            let mut claims = Vec::with_capacity(country.claims.len());
            for claim in country.claims {
                let category = ClaimCategory::from_label(&claim.claim);
                if category.is_none() {
                    log::warn!(
                        "Unknown claim category '{}' for movement '{}' ({})",
                        claim.claim,
                        claim.movement,
                        country.name
                    );
                }

                let violence = claim.violence.unwrap_or(false);
                let span = match claim.to {
                    Some(to) => {
                        if claim.from > to {
                            bail!(
                                "Claim '{}' in {} has inverted span {}..{}",
                                claim.movement,
                                country.name,
                                claim.from,
                                to
                            );
                        }
                        HighlightSpan::closed(claim.from, to, category, violence)
                    }
                    // No end year recorded: the claim is ongoing
                    None => HighlightSpan::ongoing(claim.from, range, category, violence),
                };

                claims.push(Claim {
                    movement: claim.movement,
                    label: claim.claim,
                    span,
                });
            }

            countries.push(CountryClaims {
                code: country.code,
                name: country.name,
                claims,
            });
        }

        Ok(Dataset { range, countries })
    }

    /// Serializes the dataset back to pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String> {
        let raw = DatasetFile {
            start_year: self.range.start_year,
            end_year: self.range.end_year,
            countries: self
                .countries
                .iter()
                .map(|country| CountryFile {
                    code: country.code.clone(),
                    name: country.name.clone(),
                    claims: country
                        .claims
                        .iter()
                        .map(|claim| ClaimFile {
                            movement: claim.movement.clone(),
                            claim: claim.label.clone(),
                            from: claim.span.from,
                            to: if claim.span.open_ended { None } else { Some(claim.span.to) },
                            violence: if claim.span.violence { Some(true) } else { None },
                        })
                        .collect(),
                })
                .collect(),
        };
        serde_json::to_string_pretty(&raw).context("Failed to serialize dataset")
    }

    /// Returns the year extent of the dataset.
    pub fn range(&self) -> TimeRange {
        self.range
    }

    /// Returns all countries in the dataset, in file order.
    pub fn countries(&self) -> &[CountryClaims] {
        &self.countries
    }

    /// Looks up a country by its code.
    pub fn find_country(&self, code: &str) -> Option<&CountryClaims> {
        self.countries.iter().find(|c| c.code == code)
    }

    /// Returns the country records (code + name) for the search control.
    pub fn country_options(&self) -> Vec<Country> {
        self.countries
            .iter()
            .map(|c| Country { code: c.code.clone(), name: c.name.clone() })
            .collect()
    }

    /// Returns the total number of claims across all countries.
    pub fn claim_count(&self) -> usize {
        self.countries.iter().map(|c| c.claims.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_JSON: &str = r#"{
        "start_year": 1945,
        "end_year": 2020,
        "countries": [
            {
                "code": "520",
                "name": "Somalia",
                "claims": [
                    {"movement": "Somaliland", "claim": "Independence", "from": 1991, "violence": false},
                    {"movement": "Northern clans", "claim": "Autonomy", "from": 1961, "to": 1969, "violence": true}
                ]
            },
            {
                "code": "230",
                "name": "Spain",
                "claims": [
                    {"movement": "Catalans", "claim": "Sub-state secession", "from": 2010, "to": 2017}
                ]
            }
        ]
    }"#;

    #[test]
    fn test_parse_basic_dataset() {
        let dataset = Dataset::from_json_str(SAMPLE_JSON).unwrap();

        assert_eq!(dataset.range(), TimeRange::new(1945, 2020));
        assert_eq!(dataset.countries().len(), 2);
        assert_eq!(dataset.claim_count(), 3);

        let somalia = dataset.find_country("520").unwrap();
        assert_eq!(somalia.name, "Somalia");
        assert_eq!(somalia.claims.len(), 2);
    }

    #[test]
    fn test_missing_end_year_is_ongoing() {
        let dataset = Dataset::from_json_str(SAMPLE_JSON).unwrap();
        let somalia = dataset.find_country("520").unwrap();

        let somaliland = &somalia.claims[0];
        assert!(somaliland.span.open_ended);
        assert_eq!(somaliland.span.to, 2020);

        let clans = &somalia.claims[1];
        assert!(!clans.span.open_ended);
        assert_eq!(clans.span.to, 1969);
        assert!(clans.span.violence);
    }

    #[test]
    fn test_category_labels_round_trip() {
        for category in ClaimCategory::ALL {
            assert_eq!(ClaimCategory::from_label(category.label()), Some(category));
        }
    }

    #[test]
    fn test_category_matching_is_exact() {
        assert_eq!(ClaimCategory::from_label("autonomy"), None);
        assert_eq!(ClaimCategory::from_label("Independence "), None);
        assert_eq!(ClaimCategory::from_label("Secession"), None);
    }

    #[test]
    fn test_unknown_label_kept_without_category() {
        let json = r#"{
            "start_year": 1945,
            "end_year": 2020,
            "countries": [
                {"code": "1", "name": "Testland", "claims": [
                    {"movement": "Movement", "claim": "Cultural rights", "from": 1950, "to": 1960}
                ]}
            ]
        }"#;
        let dataset = Dataset::from_json_str(json).unwrap();
        let claim = &dataset.countries()[0].claims[0];

        assert_eq!(claim.span.category, None);
        assert_eq!(claim.label, "Cultural rights");
    }

    #[test]
    fn test_degenerate_range_rejected() {
        let json = r#"{"start_year": 2020, "end_year": 2020, "countries": []}"#;
        assert!(Dataset::from_json_str(json).is_err());
    }

    #[test]
    fn test_inverted_span_rejected() {
        let json = r#"{
            "start_year": 1945,
            "end_year": 2020,
            "countries": [
                {"code": "1", "name": "Testland", "claims": [
                    {"movement": "Movement", "claim": "Autonomy", "from": 1990, "to": 1980}
                ]}
            ]
        }"#;
        assert!(Dataset::from_json_str(json).is_err());
    }

    #[test]
    fn test_json_round_trip() {
        let dataset = Dataset::from_json_str(SAMPLE_JSON).unwrap();
        let json = dataset.to_json_pretty().unwrap();
        let reparsed = Dataset::from_json_str(&json).unwrap();

        assert_eq!(reparsed.range(), dataset.range());
        assert_eq!(reparsed.claim_count(), dataset.claim_count());
        let somaliland = &reparsed.find_country("520").unwrap().claims[0];
        assert!(somaliland.span.open_ended);
    }
}
