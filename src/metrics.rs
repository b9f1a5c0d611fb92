use std::collections::HashMap;

use crate::facet::FacetKey;
use crate::record::ContentRecord;
use crate::types::FacetValue;

/// Number and share of records carrying one value of a facet.
#[derive(Clone, Debug, PartialEq)]
pub struct FacetCount {
    pub value: FacetValue,
    pub count: usize,
    pub share: f64,
}

/// Count facet values across `records` (facet pill badges).
///
/// Records without the facet field are excluded from the total. Results
/// are sorted by count descending, then value, for stable display order.
pub fn facet_value_counts<'a, I>(records: I, key: FacetKey) -> Vec<FacetCount>
where
    I: IntoIterator<Item = &'a ContentRecord>,
{
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for record in records {
        if let Some(value) = record.facet(key) {
            *counts.entry(value).or_insert(0) += 1;
        }
    }
    let total: usize = counts.values().sum();
    let mut rows: Vec<FacetCount> = counts
        .into_iter()
        .map(|(value, count)| FacetCount {
            value: value.to_string(),
            count,
            share: if total == 0 {
                0.0
            } else {
                count as f64 / total as f64
            },
        })
        .collect();
    rows.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.value.cmp(&b.value)));
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{RecordDraft, RecordKind};
    use crate::store::RecordStore;

    fn store_with_languages(languages: &[&str]) -> RecordStore {
        let mut store = RecordStore::new();
        for (idx, language) in languages.iter().enumerate() {
            store.create(
                RecordDraft::new(RecordKind::Dataset, format!("Corpus {idx}"))
                    .with_facet(FacetKey::Language, *language),
            );
        }
        store
    }

    #[test]
    fn counts_sort_by_count_then_value() {
        let store = store_with_languages(&["English", "French", "English", "German"]);
        let records = store.list();
        let rows = facet_value_counts(&records, FacetKey::Language);
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].value, "English");
        assert_eq!(rows[0].count, 2);
        assert!((rows[0].share - 0.5).abs() < 1e-9);
        assert_eq!(rows[1].value, "French");
        assert_eq!(rows[2].value, "German");
    }

    #[test]
    fn records_without_the_facet_are_ignored() {
        let mut store = store_with_languages(&["English"]);
        store.create(RecordDraft::new(RecordKind::BlogPost, "No language here"));
        let records = store.list();
        let rows = facet_value_counts(&records, FacetKey::Language);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].count, 1);
        assert!((rows[0].share - 1.0).abs() < 1e-9);
    }
}
