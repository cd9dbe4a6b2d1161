// File: crates/sales-data/tests/ingest.rs
// Purpose: Aggregation rules: grouping, winner labels, top-five ordering, error taxonomy.

use std::io::Cursor;
use std::path::Path;

use sales_data::{aggregate_csv, aggregate_reader, IngestError, SalesAggregate, Winner};

const HEADER: &str = "ITEM DESCRIPTION,RETAIL SALES,WAREHOUSE SALES\n";

fn aggregate(body: &str) -> SalesAggregate {
    aggregate_reader(Cursor::new(format!("{HEADER}{body}"))).expect("aggregate")
}

#[test]
fn winner_needs_a_strictly_greater_retail_total() {
    let a = aggregate("Vodka,100,10\nRum,50,80\nGin,100,100\n");
    assert_eq!(a.comparison.len(), 3);
    assert_eq!(a.comparison[0].winner, Winner::Retail);
    assert_eq!(a.comparison[1].winner, Winner::Warehouse);
    // a tie goes to warehouse
    assert_eq!(a.comparison[2].winner, Winner::Warehouse);
}

#[test]
fn top_five_orders_by_retail_with_first_seen_tie_break() {
    let a = aggregate("Vodka,100,10\nRum,50,80\nGin,100,100\n");
    let items: Vec<&str> = a.top_five.iter().map(|r| r.item.as_str()).collect();
    // Vodka and Gin tie at 100; Vodka was seen first
    assert_eq!(items, ["Vodka", "Gin", "Rum"]);
}

#[test]
fn repeated_items_are_grouped_and_summed() {
    let a = aggregate("Vodka,60,5\nRum,10,0\nVodka,40,5\n");
    assert_eq!(a.comparison.len(), 2);
    assert_eq!(a.comparison[0].item, "Vodka");
    assert_eq!(a.comparison[0].retail, 100.0);
    assert_eq!(a.comparison[0].warehouse, 10.0);
}

#[test]
fn blank_quantities_count_as_zero() {
    let a = aggregate("Vodka,,7\nRum,3,\n");
    assert_eq!(a.comparison[0].retail, 0.0);
    assert_eq!(a.comparison[0].warehouse, 7.0);
    assert_eq!(a.comparison[1].retail, 3.0);
    assert_eq!(a.comparison[1].warehouse, 0.0);
}

#[test]
fn every_item_gets_exactly_one_winner_label() {
    let a = aggregate("A,1,2\nB,5,1\nC,3,3\nD,9,0\nE,0,0\nF,2,8\n");
    let retail = a.comparison.iter().filter(|r| r.winner == Winner::Retail).count();
    let warehouse = a.comparison.iter().filter(|r| r.winner == Winner::Warehouse).count();
    assert_eq!(retail + warehouse, a.comparison.len());
    assert_eq!(a.comparison.len(), 6);
}

#[test]
fn top_five_keeps_at_most_five_rows_sorted_descending() {
    let body: String = (0..8).map(|i| format!("Item{i},{},1\n", i * 10)).collect();
    let a = aggregate(&body);
    assert_eq!(a.top_five.len(), 5);
    let retails: Vec<f64> = a.top_five.iter().map(|r| r.retail).collect();
    assert_eq!(retails, [70.0, 60.0, 50.0, 40.0, 30.0]);
}

#[test]
fn fewer_than_five_items_keeps_them_all() {
    let a = aggregate("Vodka,100,10\nRum,50,80\n");
    assert_eq!(a.top_five.len(), 2);
}

#[test]
fn header_only_input_is_empty() {
    let err = aggregate_reader(Cursor::new(HEADER)).unwrap_err();
    assert!(matches!(err, IngestError::EmptyInput));
}

#[test]
fn zero_byte_input_is_empty() {
    let err = aggregate_reader(Cursor::new("")).unwrap_err();
    assert!(matches!(err, IngestError::EmptyInput));
}

#[test]
fn missing_required_column_is_reported() {
    let err = aggregate_reader(Cursor::new("ITEM DESCRIPTION,RETAIL SALES\nVodka,5\n")).unwrap_err();
    assert!(matches!(err, IngestError::MissingColumn("WAREHOUSE SALES")));
}

#[test]
fn missing_file_is_not_found() {
    let err = aggregate_csv(Path::new("definitely-not-here.csv")).unwrap_err();
    assert!(matches!(err, IngestError::NotFound(_)));
}

#[test]
fn header_match_is_case_insensitive_and_extra_columns_are_ignored() {
    let a = aggregate_reader(Cursor::new(
        "County,item description,Retail Sales,WAREHOUSE SALES\nSomewhere,Vodka,5,1\n",
    ))
    .expect("aggregate");
    assert_eq!(a.comparison.len(), 1);
    assert_eq!(a.comparison[0].retail, 5.0);
}
