use futures_util::{stream, StreamExt};
use pantry_core::Recipe;
use pantry_logging::{pantry_info, pantry_warn};

use crate::source::RecipeSource;
use crate::store::KeyValueStore;
use crate::{FailureKind, FetchError};

/// Cache key holding the JSON array of the full catalog.
pub const ALL_RECIPES_KEY: &str = "allRecipes";

/// Full catalog from the cache, or assembled letter by letter on a miss.
///
/// A successful remote assembly is written back to the cache. Cache errors
/// never fail the load.
pub async fn load_full_catalog(
    source: &dyn RecipeSource,
    store: &dyn KeyValueStore,
    letter_concurrency: usize,
) -> Result<Vec<Recipe>, FetchError> {
    if let Some(cached) = read_cached_catalog(store) {
        pantry_info!("Catalog served from cache ({} recipes)", cached.len());
        return Ok(cached);
    }

    let recipes = fetch_all_letters(source, letter_concurrency).await?;
    write_cached_catalog(store, &recipes);
    Ok(recipes)
}

/// Concatenates `search.php?f=A` through `Z`, in letter order.
///
/// Failed letters are logged and skipped; the call fails only when every
/// letter failed.
pub async fn fetch_all_letters(
    source: &dyn RecipeSource,
    letter_concurrency: usize,
) -> Result<Vec<Recipe>, FetchError> {
    let results: Vec<(char, Result<Vec<Recipe>, FetchError>)> = stream::iter('A'..='Z')
        .map(move |letter| async move { (letter, source.search_by_first_letter(letter).await) })
        .buffered(letter_concurrency.max(1))
        .collect()
        .await;

    let mut recipes = Vec::new();
    let mut succeeded = 0usize;
    let mut last_error = None;
    for (letter, result) in results {
        match result {
            Ok(found) => {
                succeeded += 1;
                recipes.extend(found);
            }
            Err(err) => {
                pantry_warn!("Letter {} lookup failed: {}", letter, err);
                last_error = Some(err);
            }
        }
    }

    if succeeded == 0 {
        return Err(last_error
            .unwrap_or_else(|| FetchError::new(FailureKind::Network, "no letters fetched")));
    }
    pantry_info!(
        "Assembled catalog: {} recipes from {} letters",
        recipes.len(),
        succeeded
    );
    Ok(recipes)
}

/// Recipes of one category, stamped with that category.
pub async fn fetch_category(
    source: &dyn RecipeSource,
    category: &str,
) -> Result<Vec<Recipe>, FetchError> {
    let mut recipes = source.filter_by_category(category).await?;
    for recipe in recipes.iter_mut().filter(|r| r.category.is_empty()) {
        recipe.category = category.to_string();
    }
    Ok(recipes)
}

fn read_cached_catalog(store: &dyn KeyValueStore) -> Option<Vec<Recipe>> {
    let raw = match store.get(ALL_RECIPES_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => return None,
        Err(err) => {
            pantry_warn!("Catalog cache unreadable: {}", err);
            return None;
        }
    };
    match serde_json::from_str(&raw) {
        Ok(recipes) => Some(recipes),
        Err(err) => {
            pantry_warn!("Catalog cache corrupt, refetching: {}", err);
            None
        }
    }
}

fn write_cached_catalog(store: &dyn KeyValueStore, recipes: &[Recipe]) {
    let json = match serde_json::to_string(recipes) {
        Ok(json) => json,
        Err(err) => {
            pantry_warn!("Failed to serialize catalog cache: {}", err);
            return;
        }
    };
    if let Err(err) = store.set(ALL_RECIPES_KEY, &json) {
        pantry_warn!("Failed to write catalog cache: {}", err);
    }
}
