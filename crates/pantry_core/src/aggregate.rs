use std::collections::HashMap;
use std::fmt;

use crate::quantity::parse_quantity;
use crate::recipe::Recipe;

/// Summed amount of one ingredient across several recipes.
#[derive(Debug, Clone, PartialEq)]
pub struct IngredientTotal {
    /// Lowercased, trimmed ingredient name.
    pub name: String,
    pub amount: f64,
    /// Unit of the first occurrence; later units are not converted.
    pub unit: String,
}

impl fmt::Display for IngredientTotal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.unit.is_empty() {
            write!(f, "{}: {}", self.name, self.amount)
        } else {
            write!(f, "{}: {} {}", self.name, self.amount, self.unit)
        }
    }
}

/// Merges the ingredient slots of `recipes` into one total per ingredient.
///
/// Entries come out in first-seen order. Amounts with differing units are
/// still summed under the first unit seen for that ingredient.
pub fn aggregate_ingredients<'a, I>(recipes: I) -> Vec<IngredientTotal>
where
    I: IntoIterator<Item = &'a Recipe>,
{
    let mut totals: Vec<IngredientTotal> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for recipe in recipes {
        for slot in recipe.listed_ingredients() {
            let Some(name) = slot.trimmed_name() else {
                continue;
            };
            let key = name.to_lowercase();
            let quantity = parse_quantity(slot.measure.as_deref().unwrap_or(""));

            match index.get(&key) {
                Some(&pos) => totals[pos].amount += quantity.amount,
                None => {
                    index.insert(key.clone(), totals.len());
                    totals.push(IngredientTotal {
                        name: key,
                        amount: quantity.amount,
                        unit: quantity.unit,
                    });
                }
            }
        }
    }

    totals
}

/// Display lines for the favorites summary, e.g. `"salt: 3 tsp"`.
pub fn ingredient_lines<'a, I>(recipes: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a Recipe>,
{
    aggregate_ingredients(recipes)
        .iter()
        .map(ToString::to_string)
        .collect()
}
