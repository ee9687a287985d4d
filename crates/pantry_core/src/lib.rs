//! Pantry core: pure recipe-browser state machine and view-model helpers.
mod aggregate;
mod catalog;
mod detail;
mod effect;
mod favorites;
mod list_view;
mod msg;
mod quantity;
mod recipe;
mod state;
mod update;
mod view_model;

pub use aggregate::{aggregate_ingredients, ingredient_lines, IngredientTotal};
pub use catalog::{CatalogState, LoadStatus, RequestToken};
pub use detail::DetailState;
pub use effect::Effect;
pub use favorites::Favorites;
pub use list_view::{
    filter_recipes, page_controls, page_slice, total_pages, ListView, PageControls, PAGE_SIZE,
    PAGE_WINDOW, SEARCH_DEBOUNCE,
};
pub use msg::Msg;
pub use quantity::{parse_quantity, Quantity};
pub use recipe::{IngredientSlot, Recipe, RecipeId, INGREDIENT_SLOTS};
pub use state::{AppState, Route};
pub use update::update;
pub use view_model::{
    favorite_toggle_label, AppViewModel, ListPageView, RecipeRowView, ADD_FAVORITE_LABEL,
    REMOVE_FAVORITE_LABEL,
};
