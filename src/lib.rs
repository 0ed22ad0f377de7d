pub mod model;
pub mod timeline;
pub mod sample;
pub mod theme;

// Export data model
pub use model::{
    Claim, ClaimCategory, Country, CountryClaims, Dataset,
};

// Export timeline geometry
pub use timeline::{
    compute_bar_geometry, year_marks,
    BarGeometry, HighlightSpan, TimeRange, YearMark,
};

// Export sample dataset generation
pub use sample::generate_sample_dataset;

// Export theme support
pub use theme::{Theme, ThemeColors, ThemeManager, hex_to_color32, adjust_brightness, with_alpha};
