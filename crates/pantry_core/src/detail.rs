use crate::catalog::RequestToken;
use crate::recipe::{Recipe, RecipeId};

/// What the detail route currently shows.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DetailState {
    #[default]
    Idle,
    Loading { id: RecipeId },
    Loaded(Recipe),
    NotFound { id: RecipeId },
    Failed { id: RecipeId, message: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub(crate) struct DetailView {
    pub(crate) state: DetailState,
    latest_request: RequestToken,
}

impl DetailView {
    pub(crate) fn begin_lookup(&mut self, id: RecipeId) -> RequestToken {
        self.latest_request += 1;
        self.state = DetailState::Loading { id };
        self.latest_request
    }

    /// Applies a lookup result. Returns false when `token` is stale.
    pub(crate) fn finish_lookup(
        &mut self,
        token: RequestToken,
        result: Result<Option<Recipe>, String>,
    ) -> bool {
        if token != self.latest_request {
            return false;
        }
        let id = match &self.state {
            DetailState::Loading { id } => id.clone(),
            _ => return false,
        };
        self.state = match result {
            Ok(Some(recipe)) => DetailState::Loaded(recipe),
            Ok(None) => DetailState::NotFound { id },
            Err(message) => DetailState::Failed { id, message },
        };
        true
    }

    pub(crate) fn loaded(&self) -> Option<&Recipe> {
        match &self.state {
            DetailState::Loaded(recipe) => Some(recipe),
            _ => None,
        }
    }
}
