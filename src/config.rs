use crate::constants::pagination::DEFAULT_PAGE_SIZE;
use crate::constants::seed::{DEFAULT_DATASET_COUNT, DEFAULT_POST_COUNT, DEFAULT_SEED};
use crate::errors::CatalogError;
use crate::facet::FacetSchema;

/// Top-level catalog configuration for one page.
#[derive(Clone, Debug)]
pub struct CatalogConfig {
    /// Records shown per page.
    pub page_size: usize,
    /// RNG seed controlling deterministic mock generation.
    pub seed: u64,
    /// Number of mock dataset records generated by seeding.
    pub dataset_count: usize,
    /// Number of mock blog posts generated by seeding.
    pub post_count: usize,
    /// Facet set the page exposes.
    pub schema: FacetSchema,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            seed: DEFAULT_SEED,
            dataset_count: DEFAULT_DATASET_COUNT,
            post_count: DEFAULT_POST_COUNT,
            schema: FacetSchema::text_datasets(),
        }
    }
}

impl CatalogConfig {
    /// Validate that sizes are usable (`page_size >= 1`, at least one
    /// seeded record per collection).
    pub fn normalized(self) -> Result<Self, CatalogError> {
        if self.page_size == 0 {
            return Err(CatalogError::Configuration(
                "page_size must be at least 1".to_string(),
            ));
        }
        if self.dataset_count == 0 || self.post_count == 0 {
            return Err(CatalogError::Configuration(
                "seeded record counts must be at least 1".to_string(),
            ));
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_normalized() {
        assert!(CatalogConfig::default().normalized().is_ok());
    }

    #[test]
    fn zero_page_size_is_rejected() {
        let config = CatalogConfig {
            page_size: 0,
            ..CatalogConfig::default()
        };
        assert!(matches!(
            config.normalized(),
            Err(CatalogError::Configuration(_))
        ));
    }
}
