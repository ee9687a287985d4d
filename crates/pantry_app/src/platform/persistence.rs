use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;
use pantry_core::Recipe;
use pantry_engine::{ensure_dir, AtomicFileWriter};
use pantry_logging::{pantry_error, pantry_info, pantry_warn};
use serde::{Deserialize, Serialize};

const FAVORITES_FILENAME: &str = ".pantry_favorites.ron";

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
struct PersistedFavorites {
    #[serde(default)]
    saved_at: Option<String>,
    recipes: Vec<Recipe>,
}

pub(crate) fn load_favorites(data_dir: &Path) -> Vec<Recipe> {
    let path = data_dir.join(FAVORITES_FILENAME);
    let content = match fs::read_to_string(&path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Vec::new();
        }
        Err(err) => {
            pantry_warn!("Failed to read favorites from {:?}: {}", path, err);
            return Vec::new();
        }
    };

    let saved: PersistedFavorites = match ron::from_str(&content) {
        Ok(saved) => saved,
        Err(err) => {
            pantry_warn!("Failed to parse favorites from {:?}: {}", path, err);
            return Vec::new();
        }
    };

    pantry_info!(
        "Loaded {} favorites from {:?} (saved {})",
        saved.recipes.len(),
        path,
        saved.saved_at.as_deref().unwrap_or("at an unknown time")
    );
    saved.recipes
}

pub(crate) fn save_favorites(data_dir: &Path, recipes: &[Recipe]) {
    if let Err(err) = ensure_dir(data_dir) {
        pantry_error!("Failed to ensure data dir {:?}: {}", data_dir, err);
        return;
    }

    let saved = PersistedFavorites {
        saved_at: Some(Utc::now().to_rfc3339()),
        recipes: recipes.to_vec(),
    };

    let pretty = ron::ser::PrettyConfig::new();
    let content = match ron::ser::to_string_pretty(&saved, pretty) {
        Ok(text) => text,
        Err(err) => {
            pantry_error!("Failed to serialize favorites: {}", err);
            return;
        }
    };

    let writer = AtomicFileWriter::new(PathBuf::from(data_dir));
    if let Err(err) = writer.write(FAVORITES_FILENAME, &content) {
        pantry_error!("Failed to write favorites to {:?}: {}", data_dir, err);
    }
}
