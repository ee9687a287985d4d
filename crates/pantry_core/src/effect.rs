use std::time::Duration;

use crate::{Recipe, RecipeId, RequestToken};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    FetchAll { token: RequestToken },
    FetchByCategory { token: RequestToken, category: String },
    FetchCategories,
    LookupRecipe { token: RequestToken, id: RecipeId },
    /// Restart the search debounce timer; it reports back with `generation`.
    ScheduleSearch { generation: u64, delay: Duration },
    /// Favorites changed; carries the full new collection.
    SaveFavorites { recipes: Vec<Recipe> },
}
