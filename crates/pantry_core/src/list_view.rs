use std::time::Duration;

use crate::recipe::Recipe;

/// Recipes shown per list page.
pub const PAGE_SIZE: usize = 10;
/// Maximum number of page links shown at once.
pub const PAGE_WINDOW: usize = 7;
/// Idle time after the last keystroke before the search query applies.
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(500);

/// Search input, active query and page position of the list route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListView {
    search_text: String,
    applied_query: String,
    search_generation: u64,
    current_page: usize,
}

impl Default for ListView {
    fn default() -> Self {
        Self {
            search_text: String::new(),
            applied_query: String::new(),
            search_generation: 0,
            current_page: 1,
        }
    }
}

impl ListView {
    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    pub fn applied_query(&self) -> &str {
        &self.applied_query
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// Records new input and returns the generation of the timer to schedule.
    pub(crate) fn input_search(&mut self, text: String) -> u64 {
        self.search_text = text;
        self.search_generation += 1;
        self.search_generation
    }

    /// Applies the pending text if `generation` is the latest scheduled one.
    /// Returns whether the active query changed.
    pub(crate) fn apply_search(&mut self, generation: u64) -> bool {
        if generation != self.search_generation || self.applied_query == self.search_text {
            return false;
        }
        self.applied_query = self.search_text.clone();
        self.current_page = 1;
        true
    }

    pub(crate) fn reset_page(&mut self) {
        self.current_page = 1;
    }

    /// Moves to `page` if it lies within `1..=total_pages`.
    pub(crate) fn select_page(&mut self, page: usize, total_pages: usize) -> bool {
        if page == 0 || page > total_pages || page == self.current_page {
            return false;
        }
        self.current_page = page;
        true
    }

    /// Pulls the current page back in range after the result set shrank.
    pub(crate) fn clamp_page(&mut self, total_pages: usize) {
        self.current_page = self.current_page.clamp(1, total_pages.max(1));
    }
}

/// Recipes matching the query (case-insensitive name substring) and the
/// category (exact match) when one is selected.
pub fn filter_recipes<'a>(
    items: &'a [Recipe],
    query: &str,
    category: Option<&str>,
) -> Vec<&'a Recipe> {
    let needle = query.to_lowercase();
    items
        .iter()
        .filter(|recipe| recipe.name.to_lowercase().contains(&needle))
        .filter(|recipe| category.map_or(true, |c| recipe.category == c))
        .collect()
}

pub fn total_pages(total_items: usize, page_size: usize) -> usize {
    total_items.div_ceil(page_size)
}

/// Slice of `items` shown on 1-based `page`.
pub fn page_slice<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    let start = page.saturating_sub(1).saturating_mul(page_size).min(items.len());
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}

/// Navigation controls for the page bar.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PageControls {
    pub current_page: usize,
    pub total_pages: usize,
    pub has_prev: bool,
    pub has_next: bool,
    /// Jump-to-first control, shown when the window starts after page 1.
    pub first: Option<usize>,
    pub leading_ellipsis: bool,
    pub pages: Vec<usize>,
    pub trailing_ellipsis: bool,
    /// Jump-to-last control, shown when the window ends before the last page.
    pub last: Option<usize>,
}

/// Builds a window of at most [`PAGE_WINDOW`] page numbers around `current`.
pub fn page_controls(current: usize, total_pages: usize) -> PageControls {
    if total_pages == 0 {
        return PageControls {
            current_page: 1,
            ..PageControls::default()
        };
    }

    let current = current.clamp(1, total_pages);
    let half = PAGE_WINDOW / 2;
    let mut start = current.saturating_sub(half).max(1);
    let end = (start + PAGE_WINDOW - 1).min(total_pages);
    start = end.saturating_sub(PAGE_WINDOW - 1).max(1);

    PageControls {
        current_page: current,
        total_pages,
        has_prev: current > 1,
        has_next: current < total_pages,
        first: (start > 1).then_some(1),
        leading_ellipsis: start > 2,
        pages: (start..=end).collect(),
        trailing_ellipsis: end + 1 < total_pages,
        last: (end < total_pages).then_some(total_pages),
    }
}
