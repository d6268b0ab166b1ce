use serde_json::Value;
use std::io;

use super::scalar_text;

/// Columns carried from a tier onto each of its monthly rows.
const TIER_COLUMNS: [&str; 2] = ["kind", "annual_rate_pct"];

/// Write output as CSV to stdout.
///
/// A schedule becomes one row per loan month; anything else is written as
/// two-column field/value pairs.
pub fn print_csv(value: &Value) {
    let stdout = io::stdout();
    let mut wtr = csv::Writer::from_writer(stdout.lock());

    let result = value
        .as_object()
        .and_then(|m| m.get("result"))
        .unwrap_or(value);

    match result {
        Value::Object(map) => {
            if let Some(Value::Array(tiers)) = map.get("tiers") {
                write_schedule_rows(&mut wtr, tiers);
            } else {
                let _ = wtr.write_record(["field", "value"]);
                for (key, val) in map {
                    let _ = wtr.write_record([key.as_str(), &scalar_text(val)]);
                }
            }
        }
        other => {
            let _ = wtr.write_record([&scalar_text(other)]);
        }
    }

    let _ = wtr.flush();
}

fn write_schedule_rows<W: io::Write>(wtr: &mut csv::Writer<W>, tiers: &[Value]) {
    let step_headers: Vec<String> = tiers
        .iter()
        .filter_map(|t| t.get("steps").and_then(Value::as_array))
        .flat_map(|steps| steps.first())
        .filter_map(Value::as_object)
        .map(|first| first.keys().cloned().collect())
        .next()
        .unwrap_or_default();

    let mut headers = vec!["tier".to_string()];
    headers.extend(TIER_COLUMNS.iter().map(|c| c.to_string()));
    headers.extend(step_headers.iter().cloned());
    let _ = wtr.write_record(&headers);

    for (i, tier) in tiers.iter().enumerate() {
        let Some(steps) = tier.get("steps").and_then(Value::as_array) else {
            continue;
        };
        let tier_cells: Vec<String> = TIER_COLUMNS
            .iter()
            .map(|c| tier.get(*c).map(scalar_text).unwrap_or_default())
            .collect();

        for step in steps {
            let mut row = vec![(i + 1).to_string()];
            row.extend(tier_cells.iter().cloned());
            row.extend(
                step_headers
                    .iter()
                    .map(|h| step.get(h.as_str()).map(scalar_text).unwrap_or_default()),
            );
            let _ = wtr.write_record(&row);
        }
    }
}
