//! Tests for the filter/map iterator adapters

use keypath::{KeyPath, KeyPathIterator, Property, key_path};

#[derive(Clone, Debug, PartialEq)]
struct Task {
    title: &'static str,
    done: bool,
    estimate: u32,
}

fn tasks() -> Vec<Task> {
    vec![
        Task {
            title: "parse",
            done: true,
            estimate: 3,
        },
        Task {
            title: "index",
            done: false,
            estimate: 5,
        },
        Task {
            title: "query",
            done: true,
            estimate: 8,
        },
    ]
}

const IS_EVEN: Property<i32, bool> = Property::new(|n: &i32| n % 2 == 0);
const DONE: KeyPath<Task, bool> = KeyPath::new(|t: &Task| &t.done);

#[test]
fn test_filter_by_keeps_order() {
    let data = [1, 2, 3, 4, 5, 6, 7, 8, 9];
    let even: Vec<i32> = data.into_iter().filter_by(IS_EVEN).collect();
    assert_eq!(even, [2, 4, 6, 8]);
}

#[test]
fn test_filter_by_borrowed_items() {
    let list = tasks();
    let done: Vec<&Task> = list.iter().filter_by(DONE).collect();
    assert_eq!(done.len(), 2);
    assert_eq!(done[0].title, "parse");
    assert_eq!(done[1].title, "query");
}

#[test]
fn test_filter_by_all_false_and_all_true() {
    let data = [1, 3, 5];
    assert_eq!(data.iter().filter_by(IS_EVEN).count(), 0);

    let data = [2, 4, 6];
    let kept: Vec<&i32> = data.iter().filter_by(IS_EVEN).collect();
    assert_eq!(kept, [&2, &4, &6]);
}

#[test]
fn test_filter_by_empty() {
    let data: Vec<i32> = Vec::new();
    assert_eq!(data.iter().filter_by(IS_EVEN).count(), 0);
}

#[test]
fn test_map_by_preserves_length_and_order() {
    let list = tasks();
    let titles: Vec<&str> = list.iter().map_by(key_path!(Task, title)).collect();
    assert_eq!(titles, ["parse", "index", "query"]);

    let estimates: Vec<u32> = list.into_iter().map_by(key_path!(Task, estimate)).collect();
    assert_eq!(estimates, [3, 5, 8]);
}

#[test]
fn test_map_by_computed_property() {
    let data = [1, 2, 3, 4, 5, 6, 7, 8, 9];
    let description = Property::new(|n: &i32| n.to_string());
    let labels: Vec<String> = data.iter().map_by(description).collect();
    assert_eq!(labels.len(), data.len());
    assert_eq!(labels[8], "9");
}

#[test]
fn test_map_by_empty() {
    let data: Vec<Task> = Vec::new();
    assert_eq!(data.iter().map_by(DONE).count(), 0);
}

#[test]
fn test_filter_then_map() {
    let total: u32 = tasks()
        .iter()
        .filter_by(DONE)
        .map_by(key_path!(Task, estimate))
        .sum();
    assert_eq!(total, 11);
}

#[test]
fn test_sorted_by_predicate() {
    let words = ["pear", "fig", "banana", "kiwi"];
    let sorted = words
        .into_iter()
        .sorted_by_predicate(|a, b| a.len() < b.len());
    // stable: "pear" stays ahead of "kiwi"
    assert_eq!(sorted, ["fig", "pear", "kiwi", "banana"]);
}
