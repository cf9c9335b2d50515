//! Response shapes for the four TheMealDB endpoints this crate consumes

use serde::de::IgnoredAny;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Field prefix shared by the twenty ingredient slots of a meal record
pub const INGREDIENT_FIELD_PREFIX: &str = "strIngredient";

/// `categories.php`
#[derive(Debug, Deserialize)]
pub struct CategoryListResponse {
    pub categories: Vec<CategoryEntry>,
}

#[derive(Debug, Deserialize)]
pub struct CategoryEntry {
    #[serde(rename = "strCategory")]
    pub name: String,
}

/// `filter.php?c=<name>`; only the list length is used.
///
/// The API answers `{"meals": null}` when nothing matches.
#[derive(Debug, Deserialize)]
pub struct CategoryFilterResponse {
    pub meals: Option<Vec<IgnoredAny>>,
}

impl CategoryFilterResponse {
    pub fn recipe_count(&self) -> usize {
        self.meals.as_ref().map_or(0, Vec::len)
    }
}

/// `filter.php?a=<area>`
#[derive(Debug, Deserialize)]
pub struct AreaFilterResponse {
    pub meals: Option<Vec<MealSummary>>,
}

#[derive(Debug, Deserialize)]
pub struct MealSummary {
    #[serde(rename = "idMeal")]
    pub id: String,
}

/// `lookup.php?i=<id>`
#[derive(Debug, Deserialize)]
pub struct MealLookupResponse {
    pub meals: Option<Vec<MealRecord>>,
}

/// A full meal record, kept as the raw field map returned by the API.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MealRecord {
    fields: Map<String, Value>,
}

impl MealRecord {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    /// Raw value of one field, `None` when the record lacks it
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    pub fn category(&self) -> Option<&str> {
        self.field("strCategory").and_then(Value::as_str)
    }

    /// Ingredient slots in slot order (`strIngredient2` before `strIngredient10`).
    ///
    /// A `None` value is a JSON null. Fields holding neither a string nor null
    /// are left out. Fields whose suffix is not a number sort after the
    /// numbered ones.
    pub fn ingredient_fields(&self) -> Vec<(&str, Option<&str>)> {
        let mut slots: Vec<(Option<u32>, &str, Option<&str>)> = self
            .fields
            .iter()
            .filter_map(|(key, value)| {
                let suffix = key.strip_prefix(INGREDIENT_FIELD_PREFIX)?;
                let value = match value {
                    Value::Null => None,
                    Value::String(s) => Some(s.as_str()),
                    _ => return None,
                };
                Some((suffix.parse::<u32>().ok(), key.as_str(), value))
            })
            .collect();

        slots.sort_by_key(|(index, _, _)| (index.is_none(), *index));
        slots
            .into_iter()
            .map(|(_, key, value)| (key, value))
            .collect()
    }
}
