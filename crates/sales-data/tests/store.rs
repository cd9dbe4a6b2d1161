// File: crates/sales-data/tests/store.rs
// Purpose: Replace/read semantics of the SQLite store.

use std::io::Cursor;

use sales_data::{
    aggregate_reader, load_and_publish, IngestError, SalesAggregate, SalesStore, StoreError, Winner,
};
use tempfile::TempDir;

const SAMPLE: &str = "ITEM DESCRIPTION,RETAIL SALES,WAREHOUSE SALES\n\
                      Vodka,100,10\nRum,50,80\nGin,100,100\n";

fn store_in(dir: &TempDir) -> SalesStore {
    SalesStore::new(dir.path().join("salesdata.db"))
}

fn sample_aggregate() -> SalesAggregate {
    aggregate_reader(Cursor::new(SAMPLE)).expect("aggregate")
}

#[test]
fn reads_before_any_publish_report_data_unavailable() {
    let tmp = TempDir::new().unwrap();
    let store = store_in(&tmp);
    assert!(matches!(store.comparison_rows().unwrap_err(), StoreError::DataUnavailable));
    assert!(matches!(store.top_five_rows().unwrap_err(), StoreError::DataUnavailable));
    assert!(matches!(store.count_winner(Winner::Retail).unwrap_err(), StoreError::DataUnavailable));
}

#[test]
fn publish_then_read_round_trips() {
    let tmp = TempDir::new().unwrap();
    let store = store_in(&tmp);
    let aggregate = sample_aggregate();
    store.replace(&aggregate).expect("replace");

    assert_eq!(store.comparison_rows().expect("comparison"), aggregate.comparison);
    assert_eq!(store.top_five_rows().expect("top five"), aggregate.top_five);
    assert_eq!(store.count_winner(Winner::Retail).expect("count"), 1);
    assert_eq!(store.count_winner(Winner::Warehouse).expect("count"), 2);
}

#[test]
fn republish_fully_replaces_the_previous_generation() {
    let tmp = TempDir::new().unwrap();
    let store = store_in(&tmp);
    store.replace(&sample_aggregate()).expect("first replace");

    let smaller = aggregate_reader(Cursor::new(
        "ITEM DESCRIPTION,RETAIL SALES,WAREHOUSE SALES\nWhisky,7,3\n",
    ))
    .expect("aggregate");
    store.replace(&smaller).expect("second replace");

    let rows = store.comparison_rows().expect("comparison");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].item, "Whisky");
    assert_eq!(store.top_five_rows().expect("top five").len(), 1);
}

#[test]
fn republishing_identical_input_is_idempotent() {
    let tmp = TempDir::new().unwrap();
    let store = store_in(&tmp);

    store.replace(&sample_aggregate()).expect("first replace");
    let first = (store.comparison_rows().unwrap(), store.top_five_rows().unwrap());

    store.replace(&sample_aggregate()).expect("second replace");
    let second = (store.comparison_rows().unwrap(), store.top_five_rows().unwrap());

    assert_eq!(first, second);
}

#[test]
fn failed_ingest_leaves_the_previous_tables_intact() {
    let tmp = TempDir::new().unwrap();
    let store = store_in(&tmp);

    let good = tmp.path().join("good.csv");
    std::fs::write(&good, SAMPLE).unwrap();
    load_and_publish(&good, &store).expect("publish good data");

    let empty = tmp.path().join("empty.csv");
    std::fs::write(&empty, "ITEM DESCRIPTION,RETAIL SALES,WAREHOUSE SALES\n").unwrap();
    let err = load_and_publish(&empty, &store).unwrap_err();
    assert!(matches!(err, IngestError::EmptyInput));

    // the earlier generation is still readable
    assert_eq!(store.comparison_rows().expect("comparison").len(), 3);
}
