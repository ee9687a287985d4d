use crate::recipe::Recipe;

/// Favorite recipes, unique by id, in the order they were added.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Favorites {
    recipes: Vec<Recipe>,
}

impl Favorites {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `recipe` unless one with the same id is present.
    /// Returns whether the set changed.
    pub fn add(&mut self, recipe: Recipe) -> bool {
        if self.is_favorite(&recipe.id) {
            return false;
        }
        self.recipes.push(recipe);
        true
    }

    /// Removes the recipe with `id`, keeping the others in order.
    /// Returns whether the set changed.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.recipes.len();
        self.recipes.retain(|recipe| recipe.id != id);
        self.recipes.len() != before
    }

    pub fn is_favorite(&self, id: &str) -> bool {
        self.recipes.iter().any(|recipe| recipe.id == id)
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}
