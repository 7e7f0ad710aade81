//! Property-based tests for the ingestion and cleaning engine.
//!
//! These use proptest to generate arbitrary tables and verify that the
//! engine's invariants hold under all conditions: no panics, confidence
//! bounds, stats consistency, and cleaning idempotence.

use proptest::prelude::*;

use scour::{canonical_key, Cell, CleanConfig, RawTable, Scour};

fn arb_cell() -> impl Strategy<Value = Cell> {
    prop_oneof![
        Just(Cell::Null),
        any::<bool>().prop_map(Cell::Bool),
        (-1e9f64..1e9f64).prop_map(Cell::Number),
        "[ a-zA-Z0-9_\\-\\.]{0,12}".prop_map(Cell::Text),
    ]
}

fn arb_grid() -> impl Strategy<Value = Vec<Vec<Cell>>> {
    let cols = 1..5usize;
    cols.prop_flat_map(|width| {
        prop::collection::vec(prop::collection::vec(arb_cell(), width), 0..20)
    })
}

proptest! {
    #[test]
    fn confidence_always_in_bounds(grid in arb_grid()) {
        let scour = Scour::new();
        let dataset = scour.ingest_table(&RawTable::new(grid), "prop", "memory");
        prop_assert!(dataset.confidence <= 100);
    }

    #[test]
    fn stats_totals_match_dimensions(grid in arb_grid()) {
        let scour = Scour::new();
        let dataset = scour.ingest_table(&RawTable::new(grid), "prop", "memory");
        prop_assert_eq!(dataset.stats.total_rows, dataset.rows.len());
        prop_assert_eq!(dataset.stats.total_columns, dataset.headers.len());
    }

    #[test]
    fn duplicate_count_never_exceeds_extra_rows(grid in arb_grid()) {
        let scour = Scour::new();
        let dataset = scour.ingest_table(&RawTable::new(grid), "prop", "memory");
        let rows = dataset.stats.total_rows;
        prop_assert!(dataset.stats.duplicate_rows <= rows.saturating_sub(1));
    }

    #[test]
    fn missing_values_are_sparse(grid in arb_grid()) {
        let scour = Scour::new();
        let dataset = scour.ingest_table(&RawTable::new(grid), "prop", "memory");
        for count in dataset.stats.missing_values.values() {
            prop_assert!(*count > 0);
        }
    }

    #[test]
    fn one_type_per_header(grid in arb_grid()) {
        let scour = Scour::new();
        let dataset = scour.ingest_table(&RawTable::new(grid), "prop", "memory");
        for header in &dataset.headers {
            prop_assert!(dataset.column_types.contains_key(header));
        }
    }

    #[test]
    fn trim_and_dedupe_are_idempotent(grid in arb_grid()) {
        let scour = Scour::new();
        let dataset = scour.ingest_table(&RawTable::new(grid), "prop", "memory");
        let config = CleanConfig::new().with_trim().with_dedupe();

        let once = scour.clean(&dataset, &config);
        let twice = scour.clean(&once, &config);

        prop_assert_eq!(&once.rows, &twice.rows);
        prop_assert_eq!(&once.headers, &twice.headers);
    }

    #[test]
    fn cleaned_dataset_has_no_duplicates(grid in arb_grid()) {
        let scour = Scour::new();
        let dataset = scour.ingest_table(&RawTable::new(grid), "prop", "memory");
        let cleaned = scour.clean(&dataset, &CleanConfig::new().with_dedupe());
        prop_assert_eq!(cleaned.stats.duplicate_rows, 0);
    }

    #[test]
    fn canonical_key_deterministic(row in prop::collection::vec(arb_cell(), 0..6)) {
        prop_assert_eq!(canonical_key(&row), canonical_key(&row.clone()));
    }
}
