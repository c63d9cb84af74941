// ==========================================
// Fixture dataset generator
// ==========================================
// Usage: cargo run --bin generate_fixture_data [OUT_PATH]
// Writes a deterministic mock dataset shaped like a production data.json.
// Test fixture tooling only; the reporting commands never read its output
// unless pointed at it with --data.
// ==========================================

use chrono::{Duration, NaiveDate};
use serde_json::{json, Map, Value};
use std::env;
use std::fs;

const OPERATIONS: [&str; 4] = ["DRC", "SL", "GM", "AO"];

// Relative sizes of the four operations
const OP_SCALE: [f64; 4] = [1.0, 0.35, 0.22, 0.28];

/// Deterministic LCG so regenerated fixtures do not churn in diffs.
struct Lcg(u64);

impl Lcg {
    fn next(&mut self) -> u64 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0 >> 33
    }

    /// Roughly uniform value in [lo, hi)
    fn range(&mut self, lo: f64, hi: f64) -> f64 {
        lo + (self.next() % 10_000) as f64 / 10_000.0 * (hi - lo)
    }
}

/// Per-operation subscriber counters; snapshots drift upward day over day
struct SubscriberState {
    rgs: f64,
    active: f64,
    total: f64,
}

fn company_fields(
    rng: &mut Lcg,
    scale: f64,
    subs: &SubscriberState,
    telecom: bool,
) -> Value {
    let mut fields = Map::new();
    fields.insert(
        "Revenue_USD".into(),
        json!((rng.range(80_000.0, 110_000.0) * scale).round()),
    );
    fields.insert(
        "Recharge_USD".into(),
        json!((rng.range(70_000.0, 95_000.0) * scale).round()),
    );
    if telecom {
        fields.insert(
            "Data_Consumption_GB".into(),
            json!((rng.range(40_000.0, 60_000.0) * scale).round()),
        );
        fields.insert(
            "Minute_of_Use_Min".into(),
            json!((rng.range(850_000.0, 1_050_000.0) * scale).round()),
        );
    }
    fields.insert(
        "Churn_Subs".into(),
        json!((rng.range(300.0, 500.0) * scale).round()),
    );
    fields.insert(
        "New_Joining_Subs".into(),
        json!((rng.range(800.0, 1_200.0) * scale).round()),
    );
    fields.insert("RGS_30_Subs".into(), json!(subs.rgs.round()));
    fields.insert("Active_30_Subs".into(), json!(subs.active.round()));
    fields.insert("Total_Subs".into(), json!(subs.total.round()));
    Value::Object(fields)
}

fn main() -> anyhow::Result<()> {
    let out = env::args()
        .nth(1)
        .unwrap_or_else(|| "tests/fixtures/generated-data.json".into());

    let start = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
    let end = NaiveDate::from_ymd_opt(2026, 2, 28).unwrap();

    let mut rng = Lcg(0x5eed_2026);

    // Telecom side is an order of magnitude larger than the money side
    let mut africell: Vec<SubscriberState> = OP_SCALE
        .iter()
        .map(|s| SubscriberState {
            rgs: 180_000.0 * s,
            active: 240_000.0 * s,
            total: 400_000.0 * s,
        })
        .collect();
    let mut afrimoney: Vec<SubscriberState> = OP_SCALE
        .iter()
        .map(|s| SubscriberState {
            rgs: 21_000.0 * s,
            active: 32_000.0 * s,
            total: 60_000.0 * s,
        })
        .collect();

    let mut data = Vec::new();
    let mut day = start;
    while day <= end {
        for (i, op) in OPERATIONS.iter().enumerate() {
            // Not every operation reports every day
            if rng.next() % 100 >= 85 {
                continue;
            }

            africell[i].rgs += rng.range(-40.0, 220.0) * OP_SCALE[i];
            africell[i].active += rng.range(-50.0, 280.0) * OP_SCALE[i];
            africell[i].total += rng.range(0.0, 350.0) * OP_SCALE[i];
            afrimoney[i].rgs += rng.range(-10.0, 40.0) * OP_SCALE[i];
            afrimoney[i].active += rng.range(-12.0, 55.0) * OP_SCALE[i];
            afrimoney[i].total += rng.range(0.0, 70.0) * OP_SCALE[i];

            let mut row = Map::new();
            row.insert("date".into(), json!(day.format("%Y-%m-%d").to_string()));
            row.insert("operation".into(), json!(op));
            row.insert(
                "Africell".into(),
                company_fields(&mut rng, OP_SCALE[i], &africell[i], true),
            );
            row.insert(
                "Afrimoney".into(),
                company_fields(&mut rng, OP_SCALE[i] * 0.11, &afrimoney[i], false),
            );
            data.push(Value::Object(row));
        }
        day += Duration::days(1);
    }

    let dataset = json!({
        "metadata": {
            "operations": OPERATIONS,
            "date_range": {
                "start": start.format("%Y-%m-%d").to_string(),
                "end": end.format("%Y-%m-%d").to_string(),
            },
        },
        "configuration": {
            "monthly_aggregation_rules": { "default_rule": "sum" },
            "kpis": {
                "Africell": {
                    "RGS_30_Subs": { "monthly_aggregation": "last" },
                    "Active_30_Subs": { "monthly_aggregation": "last" },
                    "Total_Subs": { "monthly_aggregation": "last" },
                },
                "Afrimoney": {
                    "RGS_30_Subs": { "monthly_aggregation": "last" },
                    "Active_30_Subs": { "monthly_aggregation": "last" },
                    "Total_Subs": { "monthly_aggregation": "last" },
                },
            },
        },
        "data": data,
    });

    fs::write(&out, serde_json::to_string_pretty(&dataset)?)?;
    println!(
        "Wrote {} rows covering {} to {} into {}",
        dataset["data"].as_array().map(Vec::len).unwrap_or(0),
        start,
        end,
        out
    );
    Ok(())
}
