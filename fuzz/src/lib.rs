use keypath::{KeyPath, SortByKeyPath, SortKey, SortSchema, compare_all, parse_sort_keys};

#[derive(Clone, Debug, PartialEq)]
struct Row {
    id: u32,
    name: String,
    score: u8,
}

fn schema() -> SortSchema<Row> {
    SortSchema::new()
        .with_key("id", KeyPath::new(|r: &Row| &r.id))
        .and_then(|s| s.with_key("name", KeyPath::new(|r: &Row| &r.name)))
        .and_then(|s| s.with_key("score", KeyPath::new(|r: &Row| &r.score)))
        .expect("fuzz schema keys are distinct")
}

fn rows(data: &[u8]) -> Vec<Row> {
    data.chunks(3)
        .map(|c| Row {
            id: u32::from(c[0]),
            name: String::from_utf8_lossy(&c[1..]).into_owned(),
            score: c.len() as u8 ^ c[0],
        })
        .collect()
}

pub fn test_sort_keys(data: &[u8]) {
    let Ok(source) = std::str::from_utf8(data) else {
        return;
    };

    if let Ok(keys) = parse_sort_keys(source) {
        for key in &keys {
            let reparsed = key.to_string().parse::<SortKey>();
            assert_eq!(reparsed.as_ref(), Ok(key));
        }
    }

    let schema = schema();
    if let Ok(descriptors) = schema.parse(source) {
        let mut once = rows(data);
        once.sort_by_descriptors(&descriptors);
        assert_eq!(once.len(), rows(data).len());
        for pair in once.windows(2) {
            assert!(!compare_all(&descriptors, &pair[0], &pair[1]).is_gt());
        }
    }
}
