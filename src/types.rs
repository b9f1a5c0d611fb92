/// Stable record identifier, derived from the title slug at creation.
/// Examples: `mandarin-call-center-speech-corpus`, `why-data-quality-matters`
pub type RecordId = String;
/// Identifier for the source that supplied a record batch.
/// Examples: `seeded-datasets`, `content-service`, `fixtures`
pub type SourceId = String;
/// Selected or selectable facet value.
/// Examples: `English`, `Automotive`, `Speech Recognition`
pub type FacetValue = String;
/// Free-text search input typed into a catalog search box.
/// Example: `mandarin speech`
pub type QueryText = String;
/// URL-safe slug derived from a display title.
/// Example: `german-retail-text-corpus`
pub type SlugText = String;
