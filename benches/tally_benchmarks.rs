//! Performance benchmarks for ingredient tallying and extremal reports

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use mealdb_analysis::analysis::{
    tied_extremum, Extremum, IngredientScan, IngredientTable, IngredientTally,
};
use mealdb_analysis::api::MealRecord;
use serde_json::{json, Map, Value};
use std::hint::black_box;

const PANTRY: &[&str] = &[
    "Flour",
    "Sugar",
    "Butter",
    "Eggs",
    "Milk",
    "Maple Syrup",
    "Vanilla",
    "Salt",
    "Baking Soda",
    "Cinnamon",
    "Brown Sugar",
    "Cream",
    "Oats",
    "Raisins",
    "Walnuts",
];

const SCANS: &[(&str, IngredientScan)] = &[
    ("stop_at_null", IngredientScan::StopAtNull),
    ("full", IngredientScan::Full),
];

fn build_meals(count: usize) -> Vec<MealRecord> {
    (0..count)
        .map(|i| {
            let mut fields = Map::new();
            let category = if i % 3 == 0 { "Beef" } else { "Dessert" };
            fields.insert("strCategory".to_string(), json!(category));
            for slot in 1..=20 {
                let value = if slot <= 8 + i % 10 {
                    Value::String(PANTRY[(i + slot) % PANTRY.len()].to_string())
                } else {
                    Value::Null
                };
                fields.insert(format!("strIngredient{slot}"), value);
            }
            MealRecord::new(fields)
        })
        .collect()
}

fn bench_tally(c: &mut Criterion) {
    let mut group = c.benchmark_group("ingredient_tally");

    for size in &[10, 100, 1000] {
        let meals = build_meals(*size);

        for &(name, scan) in SCANS {
            let id = BenchmarkId::new(name, size);
            group.bench_with_input(id, &meals, |b, meals| {
                b.iter(|| {
                    let tally = IngredientTally::from_meals(meals, "Dessert", scan);
                    black_box(tally);
                });
            });
        }
    }

    group.finish();
}

fn bench_extremum(c: &mut Criterion) {
    let table: IngredientTable = (0..5000)
        .map(|i| (format!("ingredient {i}"), i % 37 + 1))
        .collect();

    c.bench_function("tied_extremum_min_5000", |b| {
        b.iter(|| black_box(tied_extremum(table.iter(), Extremum::Min)));
    });
}

criterion_group!(benches, bench_tally, bench_extremum);
criterion_main!(benches);
