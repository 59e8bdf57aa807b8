use pretty_assertions::assert_eq;
use services::fixtures;
use shared_types::{filter_items, Searchable};

#[test]
fn patient_search_ignores_case() {
    let patients = fixtures::doctor_patients();
    let hits = filter_items(&patients, "SHARMA");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, "P002");
}

#[test]
fn patient_search_matches_condition_and_id() {
    let patients = fixtures::doctor_patients();
    assert_eq!(filter_items(&patients, "asthma")[0].name, "Sneha Reddy");
    assert_eq!(filter_items(&patients, "p005")[0].name, "Vikram Singh");
}

#[test]
fn blank_query_keeps_every_row_in_order() {
    let patients = fixtures::doctor_patients();
    assert_eq!(filter_items(&patients, "  "), patients);
}

#[test]
fn no_match_yields_empty_list() {
    let users = fixtures::staff_users();
    assert!(filter_items(&users, "zzz-nobody").is_empty());
    assert!(users.iter().all(|u| u.matches("")));
}
