use serde::{Deserialize, Serialize};

/// Number of ingredient/measure pairs every recipe carries.
pub const INGREDIENT_SLOTS: usize = 20;

pub type RecipeId = String;

/// One ingredient line of a recipe. Both halves are optional upstream.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct IngredientSlot {
    pub name: Option<String>,
    pub measure: Option<String>,
}

impl IngredientSlot {
    pub fn new(name: impl Into<String>, measure: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            measure: Some(measure.into()),
        }
    }

    /// Ingredient name with surrounding whitespace removed, if non-blank.
    pub fn trimmed_name(&self) -> Option<&str> {
        self.name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Recipe {
    pub id: RecipeId,
    pub name: String,
    pub category: String,
    pub area: String,
    pub thumbnail: String,
    pub instructions: String,
    pub ingredients: [IngredientSlot; INGREDIENT_SLOTS],
}

impl Recipe {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_area(mut self, area: impl Into<String>) -> Self {
        self.area = area.into();
        self
    }

    /// Fills ingredient slots in order; pairs beyond the last slot are dropped.
    pub fn with_ingredients<I, N, M>(mut self, pairs: I) -> Self
    where
        I: IntoIterator<Item = (N, M)>,
        N: Into<String>,
        M: Into<String>,
    {
        for (slot, (name, measure)) in self.ingredients.iter_mut().zip(pairs) {
            *slot = IngredientSlot::new(name, measure);
        }
        self
    }

    /// Slots with a non-blank ingredient name, in slot order.
    pub fn listed_ingredients(&self) -> impl Iterator<Item = &IngredientSlot> {
        self.ingredients
            .iter()
            .filter(|slot| slot.trimmed_name().is_some())
    }
}
