use crate::aggregate::ingredient_lines;
use crate::catalog::CatalogState;
use crate::detail::DetailView;
use crate::favorites::Favorites;
use crate::list_view::{filter_recipes, page_controls, page_slice, total_pages, ListView, PAGE_SIZE};
use crate::recipe::{Recipe, RecipeId};
use crate::view_model::{AppViewModel, ListPageView, RecipeRowView};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    List,
    Detail(RecipeId),
    Favorites,
}

/// The whole application state; owned by the app loop and advanced by `update`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    route: Route,
    catalog: CatalogState,
    list: ListView,
    favorites: Favorites,
    detail: DetailView,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn route(&self) -> &Route {
        &self.route
    }

    pub fn catalog(&self) -> &CatalogState {
        &self.catalog
    }

    pub fn list(&self) -> &ListView {
        &self.list
    }

    pub fn favorites(&self) -> &Favorites {
        &self.favorites
    }

    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub fn view(&self) -> AppViewModel {
        let filtered = self.filtered();
        let total_pages = total_pages(filtered.len(), PAGE_SIZE);
        let page = page_slice(&filtered, self.list.current_page(), PAGE_SIZE);

        AppViewModel {
            route: self.route.clone(),
            status: self.catalog.status(),
            error: self.catalog.error().map(ToOwned::to_owned),
            selected_category: self.catalog.selected_category().map(ToOwned::to_owned),
            categories: self.catalog.categories().to_vec(),
            search_text: self.list.search_text().to_string(),
            applied_query: self.list.applied_query().to_string(),
            list: ListPageView {
                rows: page.iter().map(|recipe| self.row(recipe)).collect(),
                total_items: filtered.len(),
                pagination: page_controls(self.list.current_page(), total_pages),
            },
            detail: self.detail.state.clone(),
            detail_is_favorite: self
                .detail
                .loaded()
                .is_some_and(|recipe| self.favorites.is_favorite(&recipe.id)),
            favorites: self
                .favorites
                .recipes()
                .iter()
                .map(|recipe| self.row(recipe))
                .collect(),
            ingredient_lines: ingredient_lines(self.favorites.recipes()),
            dirty: self.dirty,
        }
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn set_route(&mut self, route: Route) {
        self.route = route;
    }

    pub(crate) fn catalog_mut(&mut self) -> &mut CatalogState {
        &mut self.catalog
    }

    pub(crate) fn list_mut(&mut self) -> &mut ListView {
        &mut self.list
    }

    pub(crate) fn favorites_mut(&mut self) -> &mut Favorites {
        &mut self.favorites
    }

    pub(crate) fn detail_mut(&mut self) -> &mut DetailView {
        &mut self.detail
    }

    pub(crate) fn filtered(&self) -> Vec<&Recipe> {
        filter_recipes(
            self.catalog.items(),
            self.list.applied_query(),
            self.catalog.selected_category(),
        )
    }

    pub(crate) fn total_pages(&self) -> usize {
        total_pages(self.filtered().len(), PAGE_SIZE)
    }

    /// A recipe the user can currently see, by id.
    pub(crate) fn visible_recipe(&self, id: &str) -> Option<&Recipe> {
        self.catalog
            .find(id)
            .or_else(|| self.detail.loaded().filter(|recipe| recipe.id == id))
    }

    fn row(&self, recipe: &Recipe) -> RecipeRowView {
        RecipeRowView::new(recipe, self.favorites.is_favorite(&recipe.id))
    }
}
