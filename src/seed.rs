//! Deterministic mock catalog generation.
//!
//! The catalog pages ship with generated records standing in for a real
//! content service. Same config => same records in the same order, so
//! tests and demos can assert against stable data.

use std::collections::HashSet;

use chrono::{DateTime, Duration, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::CatalogConfig;
use crate::constants::facets as domains;
use crate::constants::seed::BASE_TIMESTAMP_SECS;
use crate::facet::FacetKey;
use crate::record::{ContentRecord, RecordKind, RecordMetrics};
use crate::types::RecordId;
use crate::utils::slugify;

/// Generate the mock dataset catalog described by `config`.
pub fn seed_datasets(config: &CatalogConfig) -> Vec<ContentRecord> {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut used_ids = HashSet::new();
    let mut records = Vec::with_capacity(config.dataset_count);

    for idx in 0..config.dataset_count {
        let language = domains::LANGUAGES[idx % domains::LANGUAGES.len()];
        let industry = domains::INDUSTRIES[idx % domains::INDUSTRIES.len()];
        let application = domains::APPLICATIONS[idx % domains::APPLICATIONS.len()];
        let region = domains::REGIONS[(idx / 3) % domains::REGIONS.len()];
        let data_type = domains::DATA_TYPES[idx % domains::DATA_TYPES.len()];

        let title = format!("{language} {industry} {application} {data_type} Corpus");
        let id = unique_id(&title, &mut used_ids);
        let stamped_at = record_timestamp(idx);

        let mut record = ContentRecord {
            id,
            kind: RecordKind::Dataset,
            title,
            facets: Default::default(),
            metrics: RecordMetrics {
                sample_count: Some(rng.random_range(5_000..=250_000)),
                recorded_hours: None,
                word_count: None,
            },
            created_at: stamped_at,
            updated_at: stamped_at,
        };
        record.facets.insert(FacetKey::Language, language.to_string());
        record.facets.insert(FacetKey::Industry, industry.to_string());
        record
            .facets
            .insert(FacetKey::Application, application.to_string());
        record.facets.insert(FacetKey::Region, region.to_string());
        record.facets.insert(FacetKey::DataType, data_type.to_string());

        if data_type == "Audio" {
            let style = domains::STYLES[idx % domains::STYLES.len()];
            let environment = domains::ENVIRONMENTS[(idx / 2) % domains::ENVIRONMENTS.len()];
            let device = domains::DEVICES[idx % domains::DEVICES.len()];
            record.facets.insert(FacetKey::Style, style.to_string());
            record
                .facets
                .insert(FacetKey::Environment, environment.to_string());
            record.facets.insert(FacetKey::Device, device.to_string());
            record.metrics.recorded_hours = Some(rng.random_range(10.0_f32..2_000.0));
        } else {
            record.metrics.word_count = Some(rng.random_range(50_000..=5_000_000));
        }

        records.push(record);
    }
    records
}

/// Generate mock blog posts for the blog index and admin screens.
pub fn seed_blog_posts(config: &CatalogConfig) -> Vec<ContentRecord> {
    let mut rng = StdRng::seed_from_u64(config.seed.wrapping_add(1));
    let mut used_ids = HashSet::new();
    let mut records = Vec::with_capacity(config.post_count);

    for idx in 0..config.post_count {
        let topic = domains::TOPICS[idx % domains::TOPICS.len()];
        let industry = domains::INDUSTRIES[idx % domains::INDUSTRIES.len()];
        // Every seventh post stays in draft, like a real editorial queue.
        let status = if idx % 7 == 6 { "Draft" } else { "Published" };

        let title = format!("{topic} Field Notes, Part {}", idx + 1);
        let id = unique_id(&title, &mut used_ids);
        let stamped_at = record_timestamp(idx * 5);

        let mut record = ContentRecord {
            id,
            kind: RecordKind::BlogPost,
            title,
            facets: Default::default(),
            metrics: RecordMetrics {
                sample_count: None,
                recorded_hours: None,
                word_count: Some(rng.random_range(400..=3_000)),
            },
            created_at: stamped_at,
            updated_at: stamped_at,
        };
        record.facets.insert(FacetKey::Topic, topic.to_string());
        record.facets.insert(FacetKey::Industry, industry.to_string());
        record.facets.insert(FacetKey::Status, status.to_string());
        records.push(record);
    }
    records
}

fn record_timestamp(day_offset: usize) -> DateTime<Utc> {
    DateTime::<Utc>::UNIX_EPOCH
        + Duration::seconds(BASE_TIMESTAMP_SECS)
        + Duration::days((day_offset % 365) as i64)
}

fn unique_id(title: &str, used: &mut HashSet<RecordId>) -> RecordId {
    let base = slugify(title);
    let mut candidate = base.clone();
    let mut suffix = 2;
    while !used.insert(candidate.clone()) {
        candidate = format!("{base}-{suffix}");
        suffix += 1;
    }
    candidate
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_produces_identical_catalogs() {
        let config = CatalogConfig::default();
        assert_eq!(seed_datasets(&config), seed_datasets(&config));
        assert_eq!(seed_blog_posts(&config), seed_blog_posts(&config));
    }

    #[test]
    fn different_seeds_differ_in_metrics() {
        let base = CatalogConfig::default();
        let other = CatalogConfig {
            seed: base.seed + 1,
            ..CatalogConfig::default()
        };
        assert_ne!(seed_datasets(&base), seed_datasets(&other));
    }

    #[test]
    fn record_ids_are_unique() {
        let config = CatalogConfig {
            dataset_count: 500,
            ..CatalogConfig::default()
        };
        let records = seed_datasets(&config);
        let ids: HashSet<_> = records.iter().map(|record| record.id.clone()).collect();
        assert_eq!(ids.len(), records.len());
    }

    #[test]
    fn audio_records_carry_recording_facets() {
        let config = CatalogConfig::default();
        let records = seed_datasets(&config);
        let audio: Vec<_> = records
            .iter()
            .filter(|record| record.facet(FacetKey::DataType) == Some("Audio"))
            .collect();
        assert!(!audio.is_empty());
        for record in audio {
            assert!(record.facet(FacetKey::Style).is_some());
            assert!(record.facet(FacetKey::Environment).is_some());
            assert!(record.facet(FacetKey::Device).is_some());
            assert!(record.metrics.recorded_hours.is_some());
        }
        let text = records
            .iter()
            .find(|record| record.facet(FacetKey::DataType) == Some("Text"))
            .expect("text records seeded");
        assert!(text.facet(FacetKey::Device).is_none());
    }
}
