#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use pantry_core::Recipe;
use pantry_engine::{FailureKind, FetchError, RecipeSource};

/// In-memory recipe source that records which letters were requested.
#[derive(Default)]
pub struct FakeSource {
    pub by_letter: HashMap<char, Vec<Recipe>>,
    pub failing_letters: Vec<char>,
    pub by_category: HashMap<String, Vec<Recipe>>,
    pub categories: Vec<String>,
    /// Later letters answer faster, to shake out ordering assumptions.
    pub reverse_latency: bool,
    pub requested_letters: Mutex<Vec<char>>,
    pub calls: AtomicUsize,
}

impl FakeSource {
    /// Builds from `(letter, id, name)` rows.
    pub fn with_letters(rows: &[(char, &str, &str)]) -> Self {
        let mut by_letter: HashMap<char, Vec<Recipe>> = HashMap::new();
        for (letter, id, name) in rows {
            by_letter
                .entry(*letter)
                .or_default()
                .push(Recipe::new(*id, *name));
        }
        Self {
            by_letter,
            ..Self::default()
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn all_letters_fail() -> Self {
        Self {
            failing_letters: ('A'..='Z').collect(),
            ..Self::default()
        }
    }
}

#[async_trait::async_trait]
impl RecipeSource for FakeSource {
    async fn search_by_first_letter(&self, letter: char) -> Result<Vec<Recipe>, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.reverse_latency {
            let offset = u64::from(b'Z' - letter as u8);
            tokio::time::sleep(Duration::from_millis(offset)).await;
        }
        self.requested_letters.lock().unwrap().push(letter);
        if self.failing_letters.contains(&letter) {
            return Err(FetchError::new(FailureKind::Network, "connection reset"));
        }
        Ok(self.by_letter.get(&letter).cloned().unwrap_or_default())
    }

    async fn filter_by_category(&self, category: &str) -> Result<Vec<Recipe>, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.by_category
            .get(category)
            .cloned()
            .ok_or_else(|| FetchError::new(FailureKind::HttpStatus(500), "unknown category"))
    }

    async fn lookup(&self, id: &str) -> Result<Option<Recipe>, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self
            .by_letter
            .values()
            .flatten()
            .find(|recipe| recipe.id == id)
            .cloned())
    }

    async fn list_categories(&self) -> Result<Vec<String>, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.categories.clone())
    }
}
