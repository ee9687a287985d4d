use pantry_core::{
    aggregate_ingredients, ingredient_lines, update, AppState, Effect, Favorites, Msg, Recipe,
    Route,
};
use pretty_assertions::assert_eq;

fn recipe(id: &str, name: &str) -> Recipe {
    Recipe::new(id, name)
}

#[test]
fn adding_same_id_twice_keeps_size() {
    let mut favorites = Favorites::new();
    assert!(favorites.add(recipe("1", "Arrabiata")));
    assert!(!favorites.add(recipe("1", "Arrabiata (copy)")));
    assert_eq!(favorites.len(), 1);
    assert_eq!(favorites.recipes()[0].name, "Arrabiata");
}

#[test]
fn removal_preserves_relative_order_and_ignores_strangers() {
    let mut favorites = Favorites::new();
    for (id, name) in [("1", "A"), ("2", "B"), ("3", "C"), ("4", "D")] {
        favorites.add(recipe(id, name));
    }

    assert!(!favorites.remove("99"));
    assert_eq!(favorites.len(), 4);

    assert!(favorites.remove("2"));
    let ids: Vec<_> = favorites.recipes().iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "3", "4"]);
    assert!(!favorites.is_favorite("2"));
    assert!(favorites.is_favorite("3"));
}

#[test]
fn salt_is_summed_across_recipes() {
    let soup = recipe("1", "Soup").with_ingredients([("Salt", "1 tsp"), ("Water", "2 cups")]);
    let stew = recipe("2", "Stew").with_ingredients([(" salt ", "2 tsp"), ("Beef", "500g")]);

    assert_eq!(
        ingredient_lines([&soup, &stew]),
        vec![
            "salt: 3 tsp".to_string(),
            "water: 2 cups".to_string(),
            "beef: 500 g".to_string(),
        ]
    );
}

#[test]
fn first_unit_wins_and_unitless_lines_are_trimmed() {
    let a = recipe("1", "A").with_ingredients([("Eggs", "2"), ("Butter", "100g"), ("Pepper", "")]);
    let b = recipe("2", "B").with_ingredients([("Eggs", "1"), ("Butter", "2 tbs"), ("pepper", "pinch")]);

    let totals = aggregate_ingredients([&a, &b]);
    assert_eq!(totals[0].to_string(), "eggs: 3");
    assert_eq!(totals[1].unit, "g");
    assert_eq!(totals[1].amount, 102.0);
    assert_eq!(totals[2].to_string(), "pepper: 2");
}

#[test]
fn blank_and_missing_slots_are_skipped() {
    let mut sparse = recipe("1", "Sparse").with_ingredients([("  ", "1 cup"), ("Rice", "1.5 cups")]);
    sparse.ingredients[5].name = Some("Saffron".to_string());
    sparse.ingredients[5].measure = None;

    assert_eq!(
        ingredient_lines([&sparse]),
        vec!["rice: 1.5 cups".to_string(), "saffron: 1".to_string()]
    );
}

#[test]
fn toggling_emits_save_with_full_collection() {
    let (state, _) = update(AppState::new(), Msg::CatalogRequested);
    let (state, _) = update(
        state,
        Msg::CatalogLoaded {
            token: 1,
            result: Ok(vec![recipe("1", "A"), recipe("2", "B")]),
        },
    );

    let (state, effects) = update(state, Msg::FavoriteToggled { id: "2".to_string() });
    assert_eq!(
        effects,
        vec![Effect::SaveFavorites {
            recipes: vec![recipe("2", "B")],
        }]
    );
    let (state, effects) = update(state, Msg::FavoriteToggled { id: "1".to_string() });
    assert_eq!(
        effects,
        vec![Effect::SaveFavorites {
            recipes: vec![recipe("2", "B"), recipe("1", "A")],
        }]
    );

    let (state, effects) = update(state, Msg::FavoriteToggled { id: "2".to_string() });
    assert_eq!(
        effects,
        vec![Effect::SaveFavorites {
            recipes: vec![recipe("1", "A")],
        }]
    );

    let (mut state, effects) = update(state, Msg::FavoriteRemoved { id: "2".to_string() });
    assert!(effects.is_empty());
    assert!(state.consume_dirty());
    assert!(!state.favorites().is_favorite("2"));
}

#[test]
fn unknown_recipe_cannot_be_favorited() {
    let (mut state, effects) =
        update(AppState::new(), Msg::FavoriteToggled { id: "404".to_string() });
    assert!(effects.is_empty());
    assert!(!state.consume_dirty());
    assert!(state.favorites().is_empty());
}

#[test]
fn restored_favorites_are_deduped_and_not_saved_again() {
    let (mut state, effects) = update(
        AppState::new(),
        Msg::FavoritesRestored(vec![recipe("1", "A"), recipe("1", "A"), recipe("2", "B")]),
    );
    assert!(effects.is_empty());
    assert!(state.consume_dirty());
    assert_eq!(state.favorites().len(), 2);

    let (state, _) = update(state, Msg::Navigate(Route::Favorites));
    let view = state.view();
    assert_eq!(view.route, Route::Favorites);
    assert_eq!(view.favorites.len(), 2);
    assert!(view.favorites.iter().all(|row| row.is_favorite));
}

#[test]
fn favorites_view_aggregates_ingredients() {
    let restored = vec![
        recipe("1", "A").with_ingredients([("Salt", "1 tsp")]),
        recipe("2", "B").with_ingredients([("Salt", "2 tsp")]),
    ];
    let (state, _) = update(AppState::new(), Msg::FavoritesRestored(restored));
    assert_eq!(state.view().ingredient_lines, vec!["salt: 3 tsp".to_string()]);
}
