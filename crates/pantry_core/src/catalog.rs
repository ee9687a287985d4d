use crate::recipe::Recipe;

/// Identifies one issued fetch; only the latest token's result is applied.
pub type RequestToken = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadStatus {
    #[default]
    Idle,
    Loading,
    Succeeded,
    Failed,
}

/// Loaded recipes plus the status of the fetch that produced them.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CatalogState {
    items: Vec<Recipe>,
    status: LoadStatus,
    error: Option<String>,
    selected_category: Option<String>,
    categories: Vec<String>,
    latest_request: RequestToken,
}

impl CatalogState {
    pub fn items(&self) -> &[Recipe] {
        &self.items
    }

    pub fn status(&self) -> LoadStatus {
        self.status
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn selected_category(&self) -> Option<&str> {
        self.selected_category.as_deref()
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn find(&self, id: &str) -> Option<&Recipe> {
        self.items.iter().find(|recipe| recipe.id == id)
    }

    /// Moves to `Loading` and issues the token the response must carry.
    pub(crate) fn begin_fetch(&mut self) -> RequestToken {
        self.latest_request += 1;
        self.status = LoadStatus::Loading;
        self.error = None;
        self.latest_request
    }

    /// Applies a fetch result. Returns false when `token` is stale.
    pub(crate) fn finish_fetch(
        &mut self,
        token: RequestToken,
        result: Result<Vec<Recipe>, String>,
    ) -> bool {
        if token != self.latest_request {
            return false;
        }
        match result {
            Ok(items) => {
                self.items = items;
                self.status = LoadStatus::Succeeded;
                self.error = None;
            }
            Err(message) => {
                self.status = LoadStatus::Failed;
                self.error = Some(message);
            }
        }
        true
    }

    /// Stores the category filter; blank input clears it. Returns whether it changed.
    pub(crate) fn set_category(&mut self, category: Option<String>) -> bool {
        let category = category
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty());
        if category == self.selected_category {
            return false;
        }
        self.selected_category = category;
        true
    }

    pub(crate) fn set_categories(&mut self, categories: Vec<String>) {
        self.categories = categories;
    }
}
