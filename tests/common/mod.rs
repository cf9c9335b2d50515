//! Common test utilities and helpers
//!
//! Serves a small TheMealDB fixture over HTTP so the real client and the
//! binary can be exercised without network access.

#![allow(dead_code)]

use axum::extract::Query;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};
use std::collections::HashMap;

pub const API_PREFIX: &str = "/api/json/v1/1";

fn meal_list(count: usize) -> Value {
    let meals: Vec<Value> = (0..count)
        .map(|i| json!({ "idMeal": format!("{}", 52000 + i), "strMeal": format!("Meal {i}") }))
        .collect();
    json!({ "meals": meals })
}

async fn categories() -> Json<Value> {
    Json(json!({
        "categories": [
            { "idCategory": "1", "strCategory": "Beef" },
            { "idCategory": "3", "strCategory": "Dessert" },
            { "idCategory": "13", "strCategory": "Goat" }
        ]
    }))
}

async fn filter(Query(params): Query<HashMap<String, String>>) -> Response {
    if let Some(category) = params.get("c") {
        return match category.as_str() {
            "Beef" => Json(meal_list(10)).into_response(),
            "Dessert" => Json(meal_list(3)).into_response(),
            "Broken" => (StatusCode::INTERNAL_SERVER_ERROR, "boom").into_response(),
            _ => Json(json!({ "meals": null })).into_response(),
        };
    }

    if let Some(area) = params.get("a") {
        return match area.as_str() {
            "Canadian" => Json(json!({
                "meals": [
                    { "idMeal": "1", "strMeal": "Butter Tarts" },
                    { "idMeal": "2", "strMeal": "Nanaimo Bars" },
                    { "idMeal": "3", "strMeal": "Tourtiere" },
                    { "idMeal": "4", "strMeal": "Sugar Pie" }
                ]
            }))
            .into_response(),
            _ => Json(json!({ "meals": null })).into_response(),
        };
    }

    StatusCode::BAD_REQUEST.into_response()
}

async fn lookup(Query(params): Query<HashMap<String, String>>) -> Response {
    let meal = match params.get("i").map(String::as_str) {
        Some("1") => json!({
            "idMeal": "1",
            "strCategory": "Dessert",
            "strIngredient1": "Flour",
            "strIngredient2": "Sugar",
            "strIngredient3": "",
            "strIngredient4": null,
            "strIngredient5": "Butter"
        }),
        Some("2") => json!({
            "idMeal": "2",
            "strCategory": "Dessert",
            "strIngredient1": "flour",
            "strIngredient2": "Maple Syrup",
            "strIngredient3": "Butter",
            "strIngredient4": " ",
            "strIngredient5": null
        }),
        Some("3") => json!({
            "idMeal": "3",
            "strCategory": "Pork",
            "strIngredient1": "Pork",
            "strIngredient2": "Onion"
        }),
        Some("4") => json!({
            "idMeal": "4",
            "strCategory": "Dessert",
            "strIngredient1": "Sugar",
            "strIngredient2": "Butter",
            "strIngredient3": null
        }),
        Some("bad") => return "not json".into_response(),
        Some("500") => return StatusCode::INTERNAL_SERVER_ERROR.into_response(),
        _ => return Json(json!({ "meals": null })).into_response(),
    };

    Json(json!({ "meals": [meal] })).into_response()
}

/// Start the fixture server and return its API base URL (ending in `/`).
pub async fn spawn_fixture_server() -> String {
    let app = Router::new()
        .route(&format!("{API_PREFIX}/categories.php"), get(categories))
        .route(&format!("{API_PREFIX}/filter.php"), get(filter))
        .route(&format!("{API_PREFIX}/lookup.php"), get(lookup));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{addr}{API_PREFIX}/")
}
