use crate::{Recipe, RecipeId, RequestToken, Route};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User asked for the full catalog (served from cache when possible).
    CatalogRequested,
    /// User asked to replace the catalog with one category from the remote source.
    CategoryFetchRequested(String),
    /// Engine finished a catalog fetch.
    CatalogLoaded {
        token: RequestToken,
        result: Result<Vec<Recipe>, String>,
    },
    /// User picked a local category filter; `None` shows every category.
    CategorySelected(Option<String>),
    /// User asked for the list of category names.
    CategoriesRequested,
    /// Engine finished listing category names.
    CategoriesLoaded(Result<Vec<String>, String>),
    /// User edited the search box (raw, not yet debounced).
    SearchInput(String),
    /// Debounce timer fired for the given search generation.
    SearchDebounceElapsed { generation: u64 },
    /// User picked a page number.
    PageSelected(usize),
    NextPage,
    PrevPage,
    /// User toggled a recipe in or out of the favorites.
    FavoriteToggled { id: RecipeId },
    /// User removed a recipe from the favorites view.
    FavoriteRemoved { id: RecipeId },
    /// Restore favorites persisted by a previous session.
    FavoritesRestored(Vec<Recipe>),
    /// User moved to another route.
    Navigate(Route),
    /// Engine finished a single-recipe lookup.
    RecipeLookedUp {
        token: RequestToken,
        result: Result<Option<Recipe>, String>,
    },
    /// Fallback for placeholder wiring.
    NoOp,
}
