use crate::{DetailState, LoadStatus, PageControls, Recipe, RecipeId, Route};

pub const ADD_FAVORITE_LABEL: &str = "Add to favorites";
pub const REMOVE_FAVORITE_LABEL: &str = "Remove from favorites";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub route: Route,
    pub status: LoadStatus,
    pub error: Option<String>,
    pub selected_category: Option<String>,
    pub categories: Vec<String>,
    pub search_text: String,
    pub applied_query: String,
    pub list: ListPageView,
    pub detail: DetailState,
    pub detail_is_favorite: bool,
    pub favorites: Vec<RecipeRowView>,
    pub ingredient_lines: Vec<String>,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ListPageView {
    pub rows: Vec<RecipeRowView>,
    /// Number of recipes matching the query and category, across all pages.
    pub total_items: usize,
    pub pagination: PageControls,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeRowView {
    pub id: RecipeId,
    pub name: String,
    pub category: String,
    pub area: String,
    pub thumbnail: String,
    pub is_favorite: bool,
}

impl RecipeRowView {
    pub(crate) fn new(recipe: &Recipe, is_favorite: bool) -> Self {
        Self {
            id: recipe.id.clone(),
            name: recipe.name.clone(),
            category: recipe.category.clone(),
            area: recipe.area.clone(),
            thumbnail: recipe.thumbnail.clone(),
            is_favorite,
        }
    }

    pub fn toggle_label(&self) -> &'static str {
        favorite_toggle_label(self.is_favorite)
    }
}

pub fn favorite_toggle_label(is_favorite: bool) -> &'static str {
    if is_favorite {
        REMOVE_FAVORITE_LABEL
    } else {
        ADD_FAVORITE_LABEL
    }
}
