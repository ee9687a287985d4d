use pantry_logging::{pantry_debug, pantry_info, pantry_warn};

use crate::list_view::SEARCH_DEBOUNCE;
use crate::{AppState, Effect, Msg, Route};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::CatalogRequested => {
            let token = state.catalog_mut().begin_fetch();
            state.mark_dirty();
            vec![Effect::FetchAll { token }]
        }
        Msg::CategoryFetchRequested(category) => {
            let category = category.trim().to_string();
            if category.is_empty() {
                return (state, Vec::new());
            }
            let token = state.catalog_mut().begin_fetch();
            state.mark_dirty();
            vec![Effect::FetchByCategory { token, category }]
        }
        Msg::CatalogLoaded { token, result } => {
            if state.catalog_mut().finish_fetch(token, result) {
                let total_pages = state.total_pages();
                state.list_mut().clamp_page(total_pages);
                state.mark_dirty();
            } else {
                pantry_debug!("Dropping stale catalog response token={}", token);
            }
            Vec::new()
        }
        Msg::CategorySelected(category) => {
            if state.catalog_mut().set_category(category) {
                state.list_mut().reset_page();
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::CategoriesRequested => vec![Effect::FetchCategories],
        Msg::CategoriesLoaded(result) => {
            match result {
                Ok(categories) => {
                    state.catalog_mut().set_categories(categories);
                    state.mark_dirty();
                }
                Err(message) => pantry_warn!("Category list unavailable: {}", message),
            }
            Vec::new()
        }
        Msg::SearchInput(text) => {
            let generation = state.list_mut().input_search(text);
            state.mark_dirty();
            vec![Effect::ScheduleSearch {
                generation,
                delay: SEARCH_DEBOUNCE,
            }]
        }
        Msg::SearchDebounceElapsed { generation } => {
            if state.list_mut().apply_search(generation) {
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::PageSelected(page) => {
            let total_pages = state.total_pages();
            if state.list_mut().select_page(page, total_pages) {
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::NextPage => {
            let total_pages = state.total_pages();
            let next = state.list().current_page() + 1;
            if state.list_mut().select_page(next, total_pages) {
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::PrevPage => {
            let total_pages = state.total_pages();
            let prev = state.list().current_page().saturating_sub(1);
            if state.list_mut().select_page(prev, total_pages) {
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::FavoriteToggled { id } => {
            let changed = if state.favorites().is_favorite(&id) {
                state.favorites_mut().remove(&id)
            } else {
                match state.visible_recipe(&id).cloned() {
                    Some(recipe) => state.favorites_mut().add(recipe),
                    None => {
                        pantry_warn!("Cannot favorite unknown recipe id={}", id);
                        false
                    }
                }
            };
            favorites_changed(&mut state, changed)
        }
        Msg::FavoriteRemoved { id } => {
            let changed = state.favorites_mut().remove(&id);
            favorites_changed(&mut state, changed)
        }
        Msg::FavoritesRestored(recipes) => {
            let mut restored = 0;
            for recipe in recipes {
                if state.favorites_mut().add(recipe) {
                    restored += 1;
                }
            }
            if restored > 0 {
                pantry_info!("Restored {} favorite recipes", restored);
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::Navigate(route) => {
            // Re-entering the detail route issues a fresh lookup, so it doubles as retry.
            let is_detail = matches!(route, Route::Detail(_));
            if *state.route() == route && !is_detail {
                return (state, Vec::new());
            }
            let effects = match &route {
                Route::Detail(id) => {
                    let token = state.detail_mut().begin_lookup(id.clone());
                    vec![Effect::LookupRecipe {
                        token,
                        id: id.clone(),
                    }]
                }
                Route::List | Route::Favorites => Vec::new(),
            };
            state.set_route(route);
            state.mark_dirty();
            effects
        }
        Msg::RecipeLookedUp { token, result } => {
            if state.detail_mut().finish_lookup(token, result) {
                state.mark_dirty();
            } else {
                pantry_debug!("Dropping stale recipe lookup token={}", token);
            }
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

fn favorites_changed(state: &mut AppState, changed: bool) -> Vec<Effect> {
    if !changed {
        return Vec::new();
    }
    state.mark_dirty();
    vec![Effect::SaveFavorites {
        recipes: state.favorites().recipes().to_vec(),
    }]
}
