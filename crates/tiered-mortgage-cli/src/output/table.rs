use serde_json::{Map, Value};
use tabled::{builder::Builder, Table};

use super::{is_scalar, scalar_text};

/// Format output as tables using the tabled crate.
///
/// Scalar result fields go in a Field/Value table. Arrays of objects (the
/// tiers) get a summary table of their scalar columns, followed by one
/// table per element for any nested arrays (the monthly steps).
pub fn print_table(value: &Value) {
    match value {
        Value::Object(map) => {
            if let Some(result) = map.get("result") {
                print_result_table(result, map);
            } else {
                print_object(map);
            }
        }
        Value::Array(arr) => print_array_table(arr),
        _ => println!("{}", value),
    }
}

fn print_result_table(result: &Value, envelope: &Map<String, Value>) {
    match result {
        Value::Object(res_map) => print_object(res_map),
        other => println!("{}", scalar_text(other)),
    }

    if let Some(Value::Array(warnings)) = envelope.get("warnings") {
        if !warnings.is_empty() {
            println!("\nWarnings:");
            for w in warnings {
                if let Value::String(s) = w {
                    println!("  - {}", s);
                }
            }
        }
    }

    if let Some(Value::String(meth)) = envelope.get("methodology") {
        println!("\nMethodology: {}", meth);
    }
}

fn print_object(map: &Map<String, Value>) {
    let mut builder = Builder::default();
    builder.push_record(["Field", "Value"]);
    for (key, val) in map.iter().filter(|(_, v)| is_scalar(v)) {
        builder.push_record([key.as_str(), &scalar_text(val)]);
    }
    println!("{}", Table::from(builder));

    for (key, val) in map {
        if let Value::Array(items) = val {
            println!("\n{}:", key);
            print_array_table(items);
            print_nested_arrays(key, items);
        }
    }
}

fn print_nested_arrays(parent: &str, items: &[Value]) {
    for (i, item) in items.iter().enumerate() {
        if let Value::Object(map) = item {
            for (key, val) in map {
                if let Value::Array(children) = val {
                    println!("\n{} #{} {}:", parent, i + 1, key);
                    print_array_table(children);
                }
            }
        }
    }
}

fn print_array_table(arr: &[Value]) {
    if arr.is_empty() {
        println!("(empty)");
        return;
    }

    if let Some(Value::Object(first)) = arr.first() {
        let headers: Vec<String> = first
            .iter()
            .filter(|(_, v)| is_scalar(v))
            .map(|(k, _)| k.clone())
            .collect();
        let mut builder = Builder::default();
        builder.push_record(&headers);

        for item in arr {
            if let Value::Object(map) = item {
                let row: Vec<String> = headers
                    .iter()
                    .map(|h| map.get(h.as_str()).map(scalar_text).unwrap_or_default())
                    .collect();
                builder.push_record(row);
            }
        }

        println!("{}", Table::from(builder));
    } else {
        for item in arr {
            println!("{}", scalar_text(item));
        }
    }
}
