use catalog::{
    CatalogConfig, CatalogSession, FacetKey, RecordStore, Transition,
};

fn seeded_records(dataset_count: usize) -> Vec<catalog::ContentRecord> {
    let config = CatalogConfig {
        dataset_count,
        ..CatalogConfig::default()
    };
    catalog::seed_datasets(&config)
}

#[test]
fn filter_changes_always_reset_to_page_one() {
    let records = seeded_records(60);
    let mut session = CatalogSession::new(&records, 10);

    session.apply(&records, Transition::GotoPage(4));
    assert_eq!(session.current_page(), 4);
    session.apply(
        &records,
        Transition::ActivateFacet(FacetKey::Language, "English".into()),
    );
    assert_eq!(session.current_page(), 1);

    session.apply(&records, Transition::GotoPage(session.total_pages()));
    session.apply(&records, Transition::DeactivateFacet(FacetKey::Language));
    assert_eq!(session.current_page(), 1);

    session.apply(&records, Transition::GotoPage(3));
    session.apply(&records, Transition::SetQuery("corpus".into()));
    assert_eq!(session.current_page(), 1);
}

#[test]
fn goto_page_clamps_without_touching_filters() {
    let records = seeded_records(25);
    let mut session = CatalogSession::new(&records, 10);

    session.apply(&records, Transition::GotoPage(0));
    assert_eq!(session.current_page(), 1);
    session.apply(&records, Transition::GotoPage(99));
    assert_eq!(session.current_page(), 3);
    assert!(session.facet_state().is_unconstrained());
    assert_eq!(session.filtered_count(), 25);
}

#[test]
fn page_navigation_uses_the_cached_filtered_list_until_sync() {
    let records = seeded_records(30);
    let mut session = CatalogSession::new(&records, 10);
    assert_eq!(session.total_pages(), 3);

    // The store shrinks underneath the session; nothing filter-changing
    // happened, so the cached list and page count are unchanged.
    let shrunk = seeded_records(5);
    session.apply(&shrunk, Transition::GotoPage(3));
    assert_eq!(session.current_page(), 3);
    assert_eq!(session.filtered_count(), 30);

    session.sync(&shrunk);
    assert_eq!(session.filtered_count(), 5);
    assert_eq!(session.total_pages(), 1);
    assert_eq!(session.current_page(), 1);
}

#[test]
fn view_reports_one_empty_page_for_an_empty_store() {
    let store = RecordStore::new();
    let records = store.list();
    let session = CatalogSession::new(&records, 12);
    let view = session.view(&records);
    assert_eq!(view.filtered_count, 0);
    assert_eq!(view.total_pages, 1);
    assert_eq!(view.current_page, 1);
    assert!(view.items.is_empty());
}

#[test]
fn toggling_the_active_value_restores_the_full_list() {
    let records = seeded_records(40);
    let mut session = CatalogSession::new(&records, 12);

    session.apply(
        &records,
        Transition::ActivateFacet(FacetKey::Industry, "Retail".into()),
    );
    let constrained = session.filtered_count();
    assert!(constrained < records.len());

    session.apply(
        &records,
        Transition::ActivateFacet(FacetKey::Industry, "Retail".into()),
    );
    assert!(session.facet_state().is_unconstrained());
    assert_eq!(session.filtered_count(), records.len());
}

#[test]
fn view_pages_match_the_evaluator_output() {
    let records = seeded_records(35);
    let mut session = CatalogSession::new(&records, 12);
    session.apply(
        &records,
        Transition::ActivateFacet(FacetKey::DataType, "Text".into()),
    );

    let filtered = catalog::evaluate(&records, session.facet_state());
    let mut seen = Vec::new();
    for page in 1..=session.total_pages() {
        session.apply(&records, Transition::GotoPage(page));
        let view = session.view(&records);
        assert_eq!(view.current_page, page);
        seen.extend(view.items.iter().map(|record| record.id.clone()));
    }
    let expected: Vec<_> = filtered.iter().map(|record| record.id.clone()).collect();
    assert_eq!(seen, expected);
}
