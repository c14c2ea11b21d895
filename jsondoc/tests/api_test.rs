// SPDX-License-Identifier: Apache-2.0

// Public entry points and tree queries

use jsondoc::{parse, parse_with_config, AccessError, JsonNumber, Kind, ParserConfig, Value};
use test_log::test;

const FEED: &str = r#"{
    "title": "Release notes",
    "entries": [
        {"title": "x", "tags": ["a", "b"]},
        {"title": "y", "draft": true},
        {"title": "z", "score": 4.5}
    ],
    "count": 3,
    "owner": null
}"#;

#[test]
fn test_title_and_entry_titles() {
    let doc = parse(FEED.as_bytes()).unwrap();

    assert_eq!(doc.get("title").unwrap().as_str(), Ok("Release notes"));

    let titles: Vec<&str> = doc
        .get("entries")
        .unwrap()
        .array_iter()
        .unwrap()
        .map(|entry| entry.get("title").unwrap().as_str().unwrap())
        .collect();
    assert_eq!(titles, ["x", "y", "z"]);
}

#[test]
fn test_type_of_every_member() {
    let doc = parse(FEED.as_bytes()).unwrap();
    let kinds: Vec<(&str, Kind)> = doc
        .object_pairs()
        .unwrap()
        .map(|(key, value)| (key, value.type_of()))
        .collect();
    assert_eq!(
        kinds,
        [
            ("title", Kind::String),
            ("entries", Kind::Array),
            ("count", Kind::Number),
            ("owner", Kind::Null),
        ]
    );
}

#[test]
fn test_queries_are_repeatable() {
    let doc = parse(FEED.as_bytes()).unwrap();
    let entries = doc.object_get("entries").unwrap().unwrap();

    // Same answers no matter how often or in what order we ask
    for _ in 0..3 {
        assert_eq!(entries.array_len(), Ok(3));
        assert_eq!(
            entries.array_get(2).unwrap().get("score"),
            Some(&Value::from(4.5))
        );
        assert_eq!(doc.object_get("count"), Ok(Some(&Value::from(3i64))));
    }
}

#[test]
fn test_pairs_restart() {
    let doc = parse(br#"{"a": 1, "b": 2, "c": 3}"#).unwrap();
    let pairs = doc.object_pairs().unwrap();

    let first: Vec<&str> = pairs.clone().map(|(k, _)| k).collect();
    let second: Vec<&str> = pairs.map(|(k, _)| k).collect();
    assert_eq!(first, second);
    assert_eq!(first, ["a", "b", "c"]);
}

#[test]
fn test_pairs_reverse() {
    let doc = parse(br#"{"a": 1, "b": 2}"#).unwrap();
    let keys: Vec<&str> = doc.object_pairs().unwrap().rev().map(|(k, _)| k).collect();
    assert_eq!(keys, ["b", "a"]);
}

#[test]
fn test_duplicate_keys_first_wins() {
    let doc = parse(br#"{"k": 1, "k": 2}"#).unwrap();
    assert_eq!(doc.object_len(), Ok(2));
    assert_eq!(doc.get("k"), Some(&Value::from(1i64)));

    let values: Vec<&Value> = doc.object_pairs().unwrap().map(|(_, v)| v).collect();
    assert_eq!(values, [&Value::from(1i64), &Value::from(2i64)]);
}

#[test]
fn test_lookup_is_byte_exact() {
    let doc = parse("{\"caf\u{e9}\": 1, \"cafe\": 2}".as_bytes()).unwrap();
    assert_eq!(doc.get("caf\u{e9}"), Some(&Value::from(1i64)));
    assert_eq!(doc.get("cafe"), Some(&Value::from(2i64)));
    assert_eq!(doc.get("CAFE"), None);
}

#[test]
fn test_escaped_key_matches_decoded_lookup() {
    let doc = parse(br#"{"\u0074itle": "T"}"#).unwrap();
    assert_eq!(doc.get("title"), Some(&Value::from("T")));
}

#[test]
fn test_scalar_roots() {
    assert_eq!(parse(b"null"), Ok(Value::Null));
    assert_eq!(parse(b" true "), Ok(Value::Bool(true)));
    assert_eq!(parse(b"\"s\""), Ok(Value::from("s")));
    assert_eq!(
        parse(b"-12").unwrap().as_number(),
        Ok(JsonNumber::Int(-12))
    );
}

#[test]
fn test_empty_containers() {
    let doc = parse(b"{\"a\": [], \"o\": {}}").unwrap();
    assert_eq!(doc.get("a").unwrap().array_len(), Ok(0));
    assert_eq!(doc.get("o").unwrap().object_len(), Ok(0));
    assert_eq!(doc.get("o").unwrap().object_pairs().unwrap().count(), 0);
}

#[test]
fn test_mismatched_access_reports_kinds() {
    let doc = parse(FEED.as_bytes()).unwrap();
    let title = doc.get("title").unwrap();

    assert_eq!(
        title.array_len(),
        Err(AccessError::TypeMismatch {
            expected: Kind::Array,
            found: Kind::String
        })
    );
    assert_eq!(
        doc.get("entries").unwrap().array_get(3),
        Err(AccessError::IndexOutOfRange { index: 3, len: 3 })
    );
    assert!(doc.get("owner").unwrap().object_get("x").is_err());
}

#[test]
fn test_parse_with_config_exposes_document() {
    let document = parse_with_config(FEED.as_bytes(), &ParserConfig::default()).unwrap();
    assert_eq!(document.bytes_read(), FEED.len());
    assert_eq!(document.root(), &parse(FEED.as_bytes()).unwrap());
}

#[test]
fn test_tree_outlives_input() {
    let doc = {
        let input = String::from(r#"["owned", {"deep": ["copy"]}]"#);
        parse(input.as_bytes()).unwrap()
    };
    assert_eq!(
        doc.get_index(1)
            .and_then(|v| v.get("deep"))
            .and_then(|v| v.get_index(0)),
        Some(&Value::from("copy"))
    );
}

#[test]
fn test_shared_across_threads() {
    let doc = parse(FEED.as_bytes()).unwrap();
    std::thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                assert_eq!(doc.get("entries").unwrap().array_len(), Ok(3));
            });
        }
    });
}
