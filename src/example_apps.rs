//! Reusable example runners shared by the demo wrappers under `demos/`.

use std::error::Error;

use clap::Parser;

use crate::config::CatalogConfig;
use crate::facet::{FacetKey, FacetSchema};
use crate::metrics::facet_value_counts;
use crate::record::{ContentRecord, RecordDraft, RecordKind, RecordMetrics, RecordPatch};
use crate::seed::seed_datasets;
use crate::session::{CatalogSession, Transition};
use crate::store::RecordStore;

#[derive(Debug, Parser)]
#[command(
    name = "catalog_browse_demo",
    disable_help_subcommand = true,
    about = "Browse the seeded dataset catalog with facet filters",
    long_about = "Generate the deterministic mock dataset catalog, apply facet and free-text \
                  filters, and print one page of results plus facet counts."
)]
struct BrowseCli {
    #[arg(long, help = "Deterministic seed for the mock catalog")]
    seed: Option<u64>,
    #[arg(long, value_name = "N", help = "Number of mock datasets to generate")]
    count: Option<usize>,
    #[arg(long, value_name = "N", help = "Records per page")]
    page_size: Option<usize>,
    #[arg(long, default_value_t = 1, value_name = "N", help = "Page to display (1-indexed)")]
    page: usize,
    #[arg(long, value_name = "VALUE", help = "Filter by language")]
    language: Option<String>,
    #[arg(long, value_name = "VALUE", help = "Filter by industry")]
    industry: Option<String>,
    #[arg(long, value_name = "VALUE", help = "Filter by application")]
    application: Option<String>,
    #[arg(long, value_name = "VALUE", help = "Filter by region")]
    region: Option<String>,
    #[arg(long = "data-type", value_name = "VALUE", help = "Filter by data type")]
    data_type: Option<String>,
    #[arg(long, help = "Free-text search query")]
    query: Option<String>,
    #[arg(long, help = "Use the audio catalog facet schema")]
    audio: bool,
}

/// Run the catalog browse demo with CLI-style `args` (program name omitted).
pub fn run_browse_demo<I>(args: I) -> Result<(), Box<dyn Error>>
where
    I: IntoIterator<Item = String>,
{
    let cli =
        BrowseCli::try_parse_from(std::iter::once("catalog_browse_demo".to_string()).chain(args))?;

    let mut config = CatalogConfig::default();
    if let Some(seed) = cli.seed {
        config.seed = seed;
    }
    if let Some(count) = cli.count {
        config.dataset_count = count;
    }
    if let Some(page_size) = cli.page_size {
        config.page_size = page_size;
    }
    if cli.audio {
        config.schema = FacetSchema::audio_datasets();
    }
    let config = config.normalized()?;

    let store = RecordStore::from_records(seed_datasets(&config));
    let records = store.list();
    let mut session = CatalogSession::new(&records, config.page_size);

    let selections = [
        (FacetKey::Language, cli.language),
        (FacetKey::Industry, cli.industry),
        (FacetKey::Application, cli.application),
        (FacetKey::Region, cli.region),
        (FacetKey::DataType, cli.data_type),
    ];
    for (key, value) in selections {
        if let Some(value) = value {
            session.apply(&records, Transition::ActivateFacet(key, value));
        }
    }
    if let Some(query) = cli.query {
        session.apply(&records, Transition::SetQuery(query));
    }
    session.apply(&records, Transition::GotoPage(cli.page));

    let view = session.view(&records);
    println!(
        "{} of {} records match; page {} of {}",
        view.filtered_count,
        records.len(),
        view.current_page,
        view.total_pages
    );
    for record in &view.items {
        println!("  {}", format_record_line(record));
    }

    println!();
    for key in config.schema.keys() {
        let filtered = crate::query::evaluate(&records, session.facet_state());
        let rows = facet_value_counts(filtered.into_iter(), key);
        if rows.is_empty() {
            continue;
        }
        let summary: Vec<String> = rows
            .iter()
            .take(5)
            .map(|row| format!("{} ({})", row.value, row.count))
            .collect();
        println!("{}: {}", key.label(), summary.join(", "));
    }
    Ok(())
}

#[derive(Debug, Parser)]
#[command(
    name = "admin_console_demo",
    disable_help_subcommand = true,
    about = "Walk through the admin create/update/delete cycle",
    long_about = "Create, edit, and delete catalog records against the in-memory store, \
                  printing the store contents after each mutation."
)]
struct AdminCli {
    #[arg(long, help = "Deterministic seed for the starting catalog")]
    seed: Option<u64>,
}

/// Run the admin console demo with CLI-style `args` (program name omitted).
pub fn run_admin_demo<I>(args: I) -> Result<(), Box<dyn Error>>
where
    I: IntoIterator<Item = String>,
{
    let cli =
        AdminCli::try_parse_from(std::iter::once("admin_console_demo".to_string()).chain(args))?;

    let mut config = CatalogConfig::default();
    if let Some(seed) = cli.seed {
        config.seed = seed;
    }
    config.dataset_count = 4;
    let config = config.normalized()?;

    let mut store = RecordStore::from_records(seed_datasets(&config));
    print_store("seeded", &store);

    let id = store.create(
        RecordDraft::new(RecordKind::Dataset, "Swahili Call Center Speech Corpus")
            .with_facet(FacetKey::Language, "Swahili")
            .with_facet(FacetKey::Industry, "Finance")
            .with_facet(FacetKey::DataType, "Audio")
            .with_metrics(RecordMetrics {
                sample_count: Some(42_000),
                recorded_hours: Some(310.0),
                word_count: None,
            }),
    );
    print_store("after create", &store);

    store.apply_patch(
        &id,
        RecordPatch {
            title: Some("Swahili Contact Center Speech Corpus".to_string()),
            ..RecordPatch::default()
        },
    )?;
    print_store("after patch", &store);

    store.remove(&id)?;
    print_store("after delete", &store);
    Ok(())
}

fn print_store(stage: &str, store: &RecordStore) {
    println!("[{stage}] {} records", store.len());
    for record in store.list() {
        println!("  {}", format_record_line(&record));
    }
    println!();
}

fn format_record_line(record: &ContentRecord) -> String {
    let facets: Vec<String> = record
        .facets
        .iter()
        .map(|(key, value)| format!("{}={}", key.as_str(), value))
        .collect();
    format!("{} [{}] {}", record.id, record.kind.as_str(), facets.join(" "))
}
