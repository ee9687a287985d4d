use std::fmt::Write;

use pantry_core::{
    AppViewModel, DetailState, LoadStatus, PageControls, Recipe, RecipeRowView, Route,
};

pub fn render(view: &AppViewModel) -> String {
    let mut out = String::new();
    match &view.route {
        Route::List => render_list(&mut out, view),
        Route::Detail(_) => render_detail(&mut out, view),
        Route::Favorites => render_favorites(&mut out, view),
    }
    out
}

fn render_list(out: &mut String, view: &AppViewModel) {
    let _ = writeln!(out, "== Recipes ==");

    let category = view.selected_category.as_deref().unwrap_or("All");
    let _ = write!(out, "Category: {category}");
    if !view.search_text.is_empty() {
        let _ = write!(out, " | Search: \"{}\"", view.search_text);
        if view.search_text != view.applied_query {
            let _ = write!(out, " (pending)");
        }
    }
    let _ = writeln!(out);
    if !view.categories.is_empty() {
        let _ = writeln!(out, "Categories: {}", view.categories.join(", "));
    }

    match view.status {
        LoadStatus::Loading => {
            let _ = writeln!(out, "Loading recipes...");
        }
        LoadStatus::Failed => {
            let message = view.error.as_deref().unwrap_or("Failed to load recipes");
            let _ = writeln!(out, "Error: {message}. Type `reload` to try again.");
        }
        LoadStatus::Idle | LoadStatus::Succeeded => {}
    }

    if view.list.rows.is_empty() {
        if view.status == LoadStatus::Succeeded {
            let _ = writeln!(out, "No recipes found.");
        }
        return;
    }

    for row in &view.list.rows {
        render_row(out, row);
    }
    let _ = writeln!(
        out,
        "{} recipes | {}",
        view.list.total_items,
        pagination_line(&view.list.pagination)
    );
}

fn render_row(out: &mut String, row: &RecipeRowView) {
    let marker = if row.is_favorite { '*' } else { ' ' };
    let _ = write!(out, "{marker} {:>6}  {}", row.id, row.name);
    let details: Vec<&str> = [row.category.as_str(), row.area.as_str()]
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect();
    if !details.is_empty() {
        let _ = write!(out, "  ({})", details.join(", "));
    }
    let _ = writeln!(out);
}

/// `< prev  1 ... 4 5 [6] 7 8 ... 12  next >` with disabled arrows omitted.
pub fn pagination_line(controls: &PageControls) -> String {
    if controls.total_pages == 0 {
        return "no pages".to_string();
    }

    let mut parts: Vec<String> = Vec::new();
    if controls.has_prev {
        parts.push("< prev".to_string());
    }
    if let Some(first) = controls.first {
        parts.push(first.to_string());
    }
    if controls.leading_ellipsis {
        parts.push("...".to_string());
    }
    for &page in &controls.pages {
        if page == controls.current_page {
            parts.push(format!("[{page}]"));
        } else {
            parts.push(page.to_string());
        }
    }
    if controls.trailing_ellipsis {
        parts.push("...".to_string());
    }
    if let Some(last) = controls.last {
        parts.push(last.to_string());
    }
    if controls.has_next {
        parts.push("next >".to_string());
    }

    format!(
        "page {} of {}: {}",
        controls.current_page,
        controls.total_pages,
        parts.join(" ")
    )
}

fn render_detail(out: &mut String, view: &AppViewModel) {
    match &view.detail {
        DetailState::Idle => {
            let _ = writeln!(out, "No recipe selected.");
        }
        DetailState::Loading { id } => {
            let _ = writeln!(out, "Loading recipe {id}...");
        }
        DetailState::Loaded(recipe) => render_recipe(out, recipe, view.detail_is_favorite),
        DetailState::NotFound { id } => {
            let _ = writeln!(out, "Recipe {id} not found.");
        }
        DetailState::Failed { id, message } => {
            let _ = writeln!(out, "{message}. Type `open {id}` to try again.");
        }
    }
    let _ = writeln!(out, "Type `list` to go back.");
}

fn render_recipe(out: &mut String, recipe: &Recipe, is_favorite: bool) {
    let _ = writeln!(out, "== {} ==", recipe.name);
    let _ = writeln!(out, "Category: {} | Area: {}", recipe.category, recipe.area);
    if !recipe.thumbnail.is_empty() {
        let _ = writeln!(out, "Image: {}", recipe.thumbnail);
    }

    let _ = writeln!(out, "Ingredients:");
    for slot in recipe.listed_ingredients() {
        let name = slot.trimmed_name().unwrap_or_default();
        match slot.measure.as_deref().map(str::trim) {
            Some(measure) if !measure.is_empty() => {
                let _ = writeln!(out, "  - {measure} {name}");
            }
            _ => {
                let _ = writeln!(out, "  - {name}");
            }
        }
    }

    if !recipe.instructions.is_empty() {
        let _ = writeln!(out, "Instructions:");
        for paragraph in recipe.instructions.lines().filter(|l| !l.trim().is_empty()) {
            let _ = writeln!(out, "  {}", paragraph.trim());
        }
    }

    let _ = writeln!(
        out,
        "[fav {}] {}",
        recipe.id,
        pantry_core::favorite_toggle_label(is_favorite)
    );
}

fn render_favorites(out: &mut String, view: &AppViewModel) {
    let _ = writeln!(out, "== Favorites ({}) ==", view.favorites.len());
    if view.favorites.is_empty() {
        let _ = writeln!(out, "No favorites yet. Use `fav <id>` to add one.");
        return;
    }

    for row in &view.favorites {
        render_row(out, row);
    }
    let _ = writeln!(out, "Shopping list:");
    for line in &view.ingredient_lines {
        let _ = writeln!(out, "  {line}");
    }
    let _ = writeln!(out, "Use `unfav <id>` to remove a recipe.");
}
