//! Background fetch of the country list for the search control.
//!
//! The list is fetched once at startup from the country-lookup service.
//! Failures are logged and leave the option list empty; the search control
//! then falls back to the countries in the loaded dataset. No retry, no
//! caching.

use claimline::Country;
use eframe::egui;
use serde::{Deserialize, Deserializer};
use std::sync::mpsc::{channel, Receiver};
use std::sync::{Arc, Mutex};
use std::thread;

/// Default country-lookup endpoint.
pub const DEFAULT_COUNTRIES_URL: &str =
    "https://selfdeterminationdata-codebackend-19450166485.europe-west1.run.app/countries";

/// Environment variable overriding the country-lookup endpoint.
pub const COUNTRIES_URL_ENV: &str = "CLAIMLINE_COUNTRIES_URL";

/// A country record as served by the lookup endpoint.
#[derive(Debug, Deserialize)]
struct RemoteCountry {
    #[serde(rename = "ccode", deserialize_with = "string_or_number")]
    code: String,
    #[serde(rename = "countryname")]
    name: String,
}

// The endpoint serves ccode as a bare number in some dataset revisions
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "expected string or number for ccode, got {other}"
        ))),
    }
}

/// Result of a completed country-list fetch.
pub enum CountryFetchResult {
    /// Fetch completed successfully
    Success(Vec<Country>),
    /// Fetch failed with an error
    Error(String),
    /// No fetch in progress or result not ready
    None,
}

/// Manages the one-shot background fetch of the country list.
pub struct CountryFetcher {
    /// Shared in-progress flag
    in_progress: Arc<Mutex<bool>>,
    /// Channel receiver for the fetch result
    receiver: Option<Receiver<Result<Vec<Country>, String>>>,
}

impl CountryFetcher {
    /// Creates a new fetcher with no active fetch.
    pub fn new() -> Self {
        Self {
            in_progress: Arc::new(Mutex::new(false)),
            receiver: None,
        }
    }

    /// Resolves the endpoint URL, honoring the environment override.
    pub fn resolve_url() -> String {
        std::env::var(COUNTRIES_URL_ENV).unwrap_or_else(|_| DEFAULT_COUNTRIES_URL.to_string())
    }

    /// Checks if a fetch is currently in progress.
    pub fn is_fetching(&self) -> bool {
        *self.in_progress.lock().unwrap()
    }

    /// Starts fetching the country list in a background thread.
    ///
    /// Call `check_completion()` once per frame to pick up the result.
    pub fn start_fetch(&mut self, url: String, ctx: &egui::Context) {
        let (sender, receiver) = channel();
        self.receiver = Some(receiver);
        *self.in_progress.lock().unwrap() = true;

        let in_progress = Arc::clone(&self.in_progress);
        let ctx_handle = ctx.clone();

        thread::spawn(move || {
            let result = fetch_countries(&url);
            let _ = sender.send(result);

            *in_progress.lock().unwrap() = false;
            ctx_handle.request_repaint();
        });
    }

    /// Checks whether the background fetch has completed.
    pub fn check_completion(&mut self) -> CountryFetchResult {
        if let Some(receiver) = &self.receiver {
            if let Ok(result) = receiver.try_recv() {
                self.receiver = None;
                return match result {
                    Ok(countries) => CountryFetchResult::Success(countries),
                    Err(error_msg) => CountryFetchResult::Error(error_msg),
                };
            }
        }

        CountryFetchResult::None
    }
}

impl Default for CountryFetcher {
    fn default() -> Self {
        Self::new()
    }
}

/// Performs the blocking HTTP request. Runs on the background thread only.
fn fetch_countries(url: &str) -> Result<Vec<Country>, String> {
    let response = reqwest::blocking::get(url)
        .and_then(|r| r.error_for_status())
        .map_err(|e| e.to_string())?;

    let records: Vec<RemoteCountry> = response.json().map_err(|e| e.to_string())?;

    Ok(records
        .into_iter()
        .map(|r| Country { code: r.code, name: r.name })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetcher_creation() {
        let fetcher = CountryFetcher::new();
        assert!(!fetcher.is_fetching());
    }

    #[test]
    fn test_check_completion_when_idle() {
        let mut fetcher = CountryFetcher::new();
        assert!(matches!(fetcher.check_completion(), CountryFetchResult::None));
    }

    #[test]
    fn test_remote_record_accepts_numeric_codes() {
        let records: Vec<RemoteCountry> = serde_json::from_str(
            r#"[{"ccode": 520, "countryname": "Somalia"},
                {"ccode": "230", "countryname": "Spain"}]"#,
        )
        .unwrap();

        assert_eq!(records[0].code, "520");
        assert_eq!(records[1].code, "230");
    }
}
