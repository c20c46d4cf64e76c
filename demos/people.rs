//! Example: sorting and filtering records with key paths
//!
//! This example walks from single-key helpers to multi-key sort descriptors,
//! then resolves a sort order given as a string.
//!
//! Run with: cargo run --example people -- "age,-name"

use std::collections::HashMap;
use std::env;

use keypath::{
    Accessor, KeyPath, KeyPathIterator, Property, SortByKeyPath, SortDescriptor, SortSchema,
    key_path, their,
};

#[derive(Clone, Debug)]
struct Person {
    name: String,
    age: u32,
}

fn person(name: &str, age: u32) -> Person {
    Person {
        name: name.to_string(),
        age,
    }
}

fn show(title: &str, people: &[Person]) {
    let rendered: Vec<String> = people
        .iter()
        .map(|p| format!("{} ({})", p.name, p.age))
        .collect();
    println!("{title:<24} {}", rendered.join(", "));
}

fn main() -> keypath::Result<()> {
    let unordered = vec![
        person("John", 45),
        person("Xavier", 12),
        person("Charlie", 12),
        person("Alexia", 23),
        person("Franck", 86),
        person("Tony", 16),
    ];

    let data = [1, 2, 3, 4, 5, 6, 7, 8, 9];
    let even: Vec<i32> = data
        .into_iter()
        .filter_by(Property::new(|n: &i32| n % 2 == 0))
        .collect();
    println!("{:<24} {even:?}", "even numbers");

    let teenagers: Vec<String> = unordered
        .iter()
        .filter_by(Property::new(|p: &Person| (13..20).contains(&p.age)))
        .map_by(key_path!(Person, name))
        .collect();
    println!("{:<24} {teenagers:?}", "teenagers");

    let mut by_age = unordered.clone();
    by_age.sort_by_predicate(their(key_path!(Person, age)));
    show("their(age)", &by_age);

    let by_age_then_name = unordered.iter().cloned().sorted_by_descriptors(&[
        SortDescriptor::ascending(key_path!(Person, age)),
        SortDescriptor::descending(key_path!(Person, name)),
    ]);
    show("age, name descending", &by_age_then_name);

    let teams: HashMap<&str, Person> = HashMap::from([
        ("EpicTeam2", person("Lee", 44)),
        ("EpicTeam1", person("Coco", 21)),
        ("EpicTeam4", person("Poco", 73)),
        ("EpicTeam3", person("Xixi", 33)),
    ]);
    let mut entries: Vec<(&str, Person)> = teams.into_iter().collect();
    let value_age =
        KeyPath::new(|e: &(&'static str, Person)| &e.1).appending(key_path!(Person, age));
    entries.sort_by_descriptors(&[SortDescriptor::ascending(value_age)]);
    for entry in &entries {
        println!(
            "{:<24} {}: {} ({})",
            "teams by lead age",
            entry.0,
            entry.1.name,
            value_age.get(entry)
        );
    }

    let schema = SortSchema::new()
        .with_key("name", key_path!(Person, name))?
        .with_key("age", key_path!(Person, age))?;
    let order = env::args().nth(1).unwrap_or_else(|| "age,-name".to_string());
    let mut custom = unordered;
    custom.sort_by_descriptors(&schema.parse(&order)?);
    show(&format!("\"{order}\""), &custom);

    Ok(())
}
