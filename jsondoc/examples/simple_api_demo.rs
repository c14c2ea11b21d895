// SPDX-License-Identifier: Apache-2.0

// Walk a parsed document and print every value with its path

use jsondoc::{parse, ParseError, Value};

fn walk(path: &str, value: &Value) {
    match value {
        Value::Array(items) => {
            for (index, item) in items.iter().enumerate() {
                walk(&format!("{path}[{index}]"), item);
            }
        }
        Value::Object(members) => {
            for (key, member) in members {
                walk(&format!("{path}.{key}"), member);
            }
        }
        Value::Null => println!("{path}: null"),
        Value::Bool(b) => println!("{path}: {b}"),
        Value::Number(n) => println!("{path}: {n} ({})", if n.is_integer() { "integer" } else { "float" }),
        Value::String(s) => println!("{path}: {s:?}"),
    }
}

fn main() -> Result<(), ParseError> {
    let json = r#"{"name": "value", "number": 42, "ratio": 0.25, "flags": [true, null]}"#;
    println!("Input: {}", json);

    let root = parse(json.as_bytes())?;
    println!("Root is a(n) {}", root.type_of());
    walk("$", &root);

    match parse(br#"{"broken": [1, 2,]}"#) {
        Ok(_) => println!("Unexpectedly parsed"),
        Err(e) => println!("Error: {e}"),
    }
    Ok(())
}
