use pantry_core::{update, AppState, DetailState, Effect, Msg, Recipe, Route};

fn open(state: AppState, id: &str) -> (AppState, u64) {
    let (state, effects) = update(state, Msg::Navigate(Route::Detail(id.to_string())));
    match effects.as_slice() {
        [Effect::LookupRecipe { token, id: looked_up }] => {
            assert_eq!(looked_up, id);
            (state, *token)
        }
        other => panic!("unexpected effects {other:?}"),
    }
}

#[test]
fn lookup_resolves_to_loaded() {
    let (state, token) = open(AppState::new(), "52772");
    let view = state.view();
    assert_eq!(view.route, Route::Detail("52772".to_string()));
    assert_eq!(
        view.detail,
        DetailState::Loading {
            id: "52772".to_string()
        }
    );

    let teriyaki = Recipe::new("52772", "Teriyaki Chicken Casserole");
    let (state, _) = update(
        state,
        Msg::RecipeLookedUp {
            token,
            result: Ok(Some(teriyaki.clone())),
        },
    );
    assert_eq!(state.view().detail, DetailState::Loaded(teriyaki));
}

#[test]
fn not_found_and_failure_are_distinct() {
    let (state, token) = open(AppState::new(), "1");
    let (state, _) = update(state, Msg::RecipeLookedUp { token, result: Ok(None) });
    assert_eq!(
        state.view().detail,
        DetailState::NotFound { id: "1".to_string() }
    );

    let (state, token) = open(state, "2");
    let (state, _) = update(
        state,
        Msg::RecipeLookedUp {
            token,
            result: Err("Failed to load recipe".to_string()),
        },
    );
    assert_eq!(
        state.view().detail,
        DetailState::Failed {
            id: "2".to_string(),
            message: "Failed to load recipe".to_string(),
        }
    );
}

#[test]
fn superseded_lookup_is_ignored() {
    let (state, first) = open(AppState::new(), "1");
    let (state, second) = open(state, "2");

    let (mut state, _) = update(
        state,
        Msg::RecipeLookedUp {
            token: first,
            result: Ok(Some(Recipe::new("1", "Old"))),
        },
    );
    assert!(state.consume_dirty());
    let (mut state, _) = update(
        state,
        Msg::RecipeLookedUp {
            token: first,
            result: Ok(Some(Recipe::new("1", "Old"))),
        },
    );
    assert!(!state.consume_dirty());
    assert_eq!(state.view().detail, DetailState::Loading { id: "2".to_string() });

    let (state, _) = update(
        state,
        Msg::RecipeLookedUp {
            token: second,
            result: Ok(Some(Recipe::new("2", "New"))),
        },
    );
    assert_eq!(
        state.view().detail,
        DetailState::Loaded(Recipe::new("2", "New"))
    );
}

#[test]
fn reopening_same_recipe_issues_fresh_lookup() {
    let (state, first) = open(AppState::new(), "7");
    let (state, _) = update(
        state,
        Msg::RecipeLookedUp {
            token: first,
            result: Err("offline".to_string()),
        },
    );
    let (_state, second) = open(state, "7");
    assert!(second > first);
}

#[test]
fn loaded_detail_recipe_can_be_favorited() {
    let (state, token) = open(AppState::new(), "9");
    let (state, _) = update(
        state,
        Msg::RecipeLookedUp {
            token,
            result: Ok(Some(Recipe::new("9", "Pancakes"))),
        },
    );
    assert!(!state.view().detail_is_favorite);

    let (state, effects) = update(state, Msg::FavoriteToggled { id: "9".to_string() });
    assert_eq!(effects.len(), 1);
    assert!(state.view().detail_is_favorite);
}

#[test]
fn navigating_back_to_list_keeps_detail_state() {
    let (state, _) = open(AppState::new(), "3");
    let (mut state, effects) = update(state, Msg::Navigate(Route::List));
    assert!(effects.is_empty());
    assert!(state.consume_dirty());
    assert_eq!(state.route(), &Route::List);

    let (mut state, effects) = update(state, Msg::Navigate(Route::List));
    assert!(effects.is_empty());
    assert!(!state.consume_dirty());
}
