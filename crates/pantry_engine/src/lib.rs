//! Pantry engine: recipe source IO, catalog cache and effect execution.
mod catalog;
mod debounce;
mod engine;
mod source;
mod store;
mod types;
mod wire;

pub use catalog::{fetch_all_letters, fetch_category, load_full_catalog, ALL_RECIPES_KEY};
pub use debounce::Debouncer;
pub use engine::EngineHandle;
pub use source::{FetchSettings, MealDbClient, RecipeSource, MEALDB_BASE_URL};
pub use store::{ensure_dir, AtomicFileWriter, FileStore, KeyValueStore, MemoryStore, PersistError};
pub use types::{EngineEvent, FailureKind, FetchError};
