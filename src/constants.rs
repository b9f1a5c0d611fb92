/// Constants used by catalog pagination.
pub mod pagination {
    /// Records shown per catalog page unless a page overrides it.
    pub const DEFAULT_PAGE_SIZE: usize = 12;
}

/// Closed facet value domains shared by the catalog pages.
///
/// These are selection menus, not validation tables: the filter predicate
/// is pure equality and accepts any string, so a value outside its domain
/// simply matches nothing.
pub mod facets {
    /// Languages offered across the dataset catalogs.
    pub const LANGUAGES: [&str; 21] = [
        "English",
        "Mandarin",
        "Spanish",
        "Hindi",
        "Arabic",
        "French",
        "German",
        "Japanese",
        "Korean",
        "Portuguese",
        "Russian",
        "Italian",
        "Dutch",
        "Turkish",
        "Vietnamese",
        "Thai",
        "Indonesian",
        "Polish",
        "Swedish",
        "Hebrew",
        "Tamil",
    ];
    /// Industries the datasets are collected for.
    pub const INDUSTRIES: [&str; 5] = [
        "Automotive",
        "Healthcare",
        "Retail",
        "Finance",
        "Technology",
    ];
    /// Downstream applications a dataset targets.
    pub const APPLICATIONS: [&str; 6] = [
        "Speech Recognition",
        "Machine Translation",
        "Sentiment Analysis",
        "Text To Speech",
        "Chatbots",
        "Search Relevance",
    ];
    /// Collection regions.
    pub const REGIONS: [&str; 6] = [
        "North America",
        "South America",
        "Europe",
        "Middle East",
        "Africa",
        "Asia Pacific",
    ];
    /// Blog post topics.
    pub const TOPICS: [&str; 8] = [
        "Localization",
        "Machine Translation",
        "Speech Technology",
        "Data Annotation",
        "Quality Assurance",
        "Industry Trends",
        "Company News",
        "Engineering",
    ];
    /// Dataset modalities.
    pub const DATA_TYPES: [&str; 4] = ["Text", "Audio", "Image", "Video"];
    /// Recording styles (audio datasets only).
    pub const STYLES: [&str; 3] = ["Scripted", "Spontaneous", "Prompted"];
    /// Recording environments (audio datasets only).
    pub const ENVIRONMENTS: [&str; 4] = ["Studio", "Office", "Street", "Vehicle"];
    /// Recording devices (audio datasets only).
    pub const DEVICES: [&str; 4] = ["Smartphone", "Headset", "Laptop", "Far-field Mic"];
    /// Editorial statuses used by the admin screens.
    pub const STATUSES: [&str; 3] = ["Draft", "Published", "Archived"];
}

/// Constants used by deterministic catalog seeding.
pub mod seed {
    /// Default RNG seed for mock catalog generation.
    pub const DEFAULT_SEED: u64 = 99;
    /// Default number of mock dataset records generated.
    pub const DEFAULT_DATASET_COUNT: usize = 96;
    /// Default number of mock blog posts generated.
    pub const DEFAULT_POST_COUNT: usize = 24;
    /// Base timestamp for generated records: 2025-01-01T00:00:00Z.
    pub const BASE_TIMESTAMP_SECS: i64 = 1_735_689_600;
}
