//! In-memory sample dataset generation.
//!
//! Produces a deterministic claims dataset without touching the filesystem
//! or the network. Used by the GUI's "Sample Data" button, the datagen
//! binary, and tests.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::model::{Claim, ClaimCategory, CountryClaims, Dataset};
use crate::timeline::{HighlightSpan, TimeRange};

const SAMPLE_START_YEAR: i32 = 1945;
const SAMPLE_END_YEAR: i32 = 2020;

/// Movement templates: (country code, country name, movements).
/// Each movement is (name, category label, earliest plausible start year).
const COUNTRIES: &[(&str, &str, &[(&str, &str, i32)])] = &[
    ("520", "Somalia", &[
        ("Somaliland", "Independence", 1991),
        ("Northern clans", "Autonomy", 1961),
    ]),
    ("230", "Spain", &[
        ("Catalans", "Sub-state secession", 1979),
        ("Basques", "Independence", 1959),
        ("Galicians", "Autonomy", 1981),
    ]),
    ("200", "United Kingdom", &[
        ("Scots", "Sub-state secession", 1967),
        ("Welsh", "Autonomy", 1955),
    ]),
    ("020", "Canada", &[
        ("Quebecois", "Sub-state secession", 1960),
        ("Cree", "Autonomy", 1971),
    ]),
    ("645", "Iraq", &[
        ("Kurds", "Independence", 1961),
        ("Assyrians", "Autonomy", 1968),
    ]),
    ("750", "India", &[
        ("Nagas", "Independence", 1947),
        ("Kashmiris", "Irredentism", 1947),
        ("Mizos", "Autonomy", 1966),
    ]),
    ("365", "Russia", &[
        ("Chechens", "Independence", 1991),
        ("Tatars", "Autonomy", 1990),
    ]),
    ("850", "Indonesia", &[
        ("Acehnese", "Independence", 1953),
        ("Papuans", "Independence", 1963),
    ]),
];

/// Generates a deterministic sample dataset for the given seed.
///
/// The movement roster is fixed; the seed varies claim periods, violence
/// flags, and which claims are still ongoing.
pub fn generate_sample_dataset(seed: u64) -> Dataset {
    let mut rng = StdRng::seed_from_u64(seed);
    let range = TimeRange::new(SAMPLE_START_YEAR, SAMPLE_END_YEAR);

    let countries = COUNTRIES
        .iter()
        .map(|(code, name, movements)| {
            let claims = movements
                .iter()
                .map(|(movement, label, earliest)| {
                    generate_claim(&mut rng, movement, label, *earliest, range)
                })
                .collect();

            CountryClaims {
                code: (*code).to_string(),
                name: (*name).to_string(),
                claims,
            }
        })
        .collect();

    // The roster above never produces an inverted span or degenerate range
    Dataset::from_parts(range, countries).unwrap_or_else(|e| {
        unreachable!("sample dataset violated its own invariants: {e}")
    })
}

fn generate_claim(
    rng: &mut StdRng,
    movement: &str,
    label: &str,
    earliest: i32,
    range: TimeRange,
) -> Claim {
    let from = earliest + rng.gen_range(0..=4);
    let violence = rng.gen_bool(0.35);
    let category = ClaimCategory::from_label(label);

    // Roughly a third of claims run to the present day
    let span = if rng.gen_bool(0.35) {
        HighlightSpan::ongoing(from, range, category, violence)
    } else {
        let max_len = (range.end_year - from - 1).max(1);
        let len = rng.gen_range(1..=max_len.min(30));
        HighlightSpan::closed(from, from + len, category, violence)
    };

    Claim {
        movement: movement.to_string(),
        label: label.to_string(),
        span,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_is_deterministic() {
        let a = generate_sample_dataset(42);
        let b = generate_sample_dataset(42);

        assert_eq!(a.claim_count(), b.claim_count());
        for (ca, cb) in a.countries().iter().zip(b.countries()) {
            for (claim_a, claim_b) in ca.claims.iter().zip(&cb.claims) {
                assert_eq!(claim_a.span, claim_b.span);
            }
        }
    }

    #[test]
    fn test_sample_spans_are_valid() {
        let dataset = generate_sample_dataset(7);
        let range = dataset.range();

        for country in dataset.countries() {
            for claim in &country.claims {
                assert!(claim.span.from <= claim.span.to);
                assert!(range.contains(claim.span.from));
                if claim.span.open_ended {
                    assert_eq!(claim.span.to, range.end_year);
                }
            }
        }
    }

    #[test]
    fn test_sample_categories_all_known() {
        let dataset = generate_sample_dataset(42);
        for country in dataset.countries() {
            for claim in &country.claims {
                assert!(claim.span.category.is_some(), "movement {}", claim.movement);
            }
        }
    }
}
