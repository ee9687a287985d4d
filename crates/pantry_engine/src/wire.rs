//! JSON shapes returned by TheMealDB.

use std::collections::HashMap;

use pantry_core::{IngredientSlot, Recipe, INGREDIENT_SLOTS};
use serde::Deserialize;
use serde_json::Value;

/// Every endpoint wraps its rows in `meals`, which is `null` when nothing matched.
#[derive(Debug, Deserialize)]
pub(crate) struct MealsEnvelope<T> {
    pub(crate) meals: Option<Vec<T>>,
}

impl<T> MealsEnvelope<T> {
    pub(crate) fn into_rows(self) -> Vec<T> {
        self.meals.unwrap_or_default()
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct CategoryRow {
    #[serde(rename = "strCategory")]
    pub(crate) name: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct MealRow {
    #[serde(rename = "idMeal")]
    id: String,
    #[serde(rename = "strMeal", default)]
    name: Option<String>,
    #[serde(rename = "strCategory", default)]
    category: Option<String>,
    #[serde(rename = "strArea", default)]
    area: Option<String>,
    #[serde(rename = "strMealThumb", default)]
    thumbnail: Option<String>,
    #[serde(rename = "strInstructions", default)]
    instructions: Option<String>,
    /// Numbered `strIngredientN` / `strMeasureN` columns plus anything else upstream adds.
    #[serde(flatten)]
    columns: HashMap<String, Value>,
}

impl MealRow {
    fn column(&self, key: &str) -> Option<String> {
        self.columns
            .get(key)
            .and_then(Value::as_str)
            .filter(|value| !value.trim().is_empty())
            .map(ToOwned::to_owned)
    }
}

impl From<MealRow> for Recipe {
    fn from(row: MealRow) -> Self {
        let mut ingredients: [IngredientSlot; INGREDIENT_SLOTS] = Default::default();
        for (index, slot) in ingredients.iter_mut().enumerate() {
            let n = index + 1;
            *slot = IngredientSlot {
                name: row.column(&format!("strIngredient{n}")),
                measure: row.column(&format!("strMeasure{n}")),
            };
        }

        Recipe {
            id: row.id,
            name: row.name.unwrap_or_default(),
            category: row.category.unwrap_or_default(),
            area: row.area.unwrap_or_default(),
            thumbnail: row.thumbnail.unwrap_or_default(),
            instructions: row.instructions.unwrap_or_default(),
            ingredients,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_numbered_columns_into_slots() {
        let body = r#"{"meals":[{
            "idMeal":"52772",
            "strMeal":"Teriyaki Chicken Casserole",
            "strCategory":"Chicken",
            "strArea":"Japanese",
            "strMealThumb":"https://www.themealdb.com/images/media/meals/wvpsxx1468256321.jpg",
            "strInstructions":"Preheat oven to 350F.",
            "strIngredient1":"soy sauce","strMeasure1":"3/4 cup",
            "strIngredient2":"water","strMeasure2":"1/2 cup",
            "strIngredient3":"","strMeasure3":" ",
            "strIngredient20":null,"strMeasure20":null,
            "strSource":null
        }]}"#;

        let envelope: MealsEnvelope<MealRow> = serde_json::from_str(body).unwrap();
        let recipes: Vec<Recipe> = envelope.into_rows().into_iter().map(Recipe::from).collect();
        assert_eq!(recipes.len(), 1);

        let recipe = &recipes[0];
        assert_eq!(recipe.id, "52772");
        assert_eq!(recipe.area, "Japanese");
        assert_eq!(recipe.ingredients[0], IngredientSlot::new("soy sauce", "3/4 cup"));
        assert_eq!(recipe.ingredients[1], IngredientSlot::new("water", "1/2 cup"));
        assert_eq!(recipe.ingredients[2], IngredientSlot::default());
        assert_eq!(recipe.listed_ingredients().count(), 2);
    }

    fn decode_rows<T: serde::de::DeserializeOwned>(body: &str) -> Vec<T> {
        serde_json::from_str::<MealsEnvelope<T>>(body)
            .unwrap()
            .into_rows()
    }

    #[test]
    fn envelope_decodes_for_any_row_type() {
        let categories: Vec<CategoryRow> =
            decode_rows(r#"{"meals":[{"strCategory":"Beef"},{"strCategory":"Vegan"}]}"#);
        let names: Vec<_> = categories.into_iter().map(|row| row.name).collect();
        assert_eq!(names, vec!["Beef", "Vegan"]);

        assert!(decode_rows::<MealRow>("{}").is_empty());
    }

    #[test]
    fn null_meals_is_empty() {
        let envelope: MealsEnvelope<MealRow> = serde_json::from_str(r#"{"meals":null}"#).unwrap();
        assert!(envelope.into_rows().is_empty());

        let envelope: MealsEnvelope<MealRow> = serde_json::from_str("{}").unwrap();
        assert!(envelope.into_rows().is_empty());
    }

    #[test]
    fn filter_rows_only_carry_id_name_and_thumbnail() {
        let body = r#"{"meals":[{"strMeal":"Beef Lo Mein","strMealThumb":"x.jpg","idMeal":"52952"}]}"#;
        let envelope: MealsEnvelope<MealRow> = serde_json::from_str(body).unwrap();
        let recipe = Recipe::from(envelope.into_rows().remove(0));
        assert_eq!(recipe.name, "Beef Lo Mein");
        assert_eq!(recipe.category, "");
        assert_eq!(recipe.listed_ingredients().count(), 0);
    }
}
