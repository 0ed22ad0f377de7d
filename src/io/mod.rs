//! I/O modules for dataset loading and the country-list fetch.

pub mod country_fetch;
pub mod dataset_loader;

// Re-export commonly used types
pub use country_fetch::{CountryFetchResult, CountryFetcher};
pub use dataset_loader::{AsyncDatasetLoader, DatasetLoadResult};
