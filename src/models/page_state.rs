use crate::config::DEFAULT_URL;
use crate::pagination::{derive_view, with_page_size, PageView};

/// Everything the museum page owns. The fetch URL is the single source of
/// truth for which page is shown; page size and number are derived from it.
#[derive(Debug, Clone, PartialEq)]
pub struct PageState {
    pub fetch_url: String,
    /// Running total shown in the header.
    pub total: u64,
    pub is_shiny: bool,
}

impl Default for PageState {
    fn default() -> Self {
        Self::new(DEFAULT_URL)
    }
}

impl PageState {
    pub fn new(fetch_url: impl Into<String>) -> Self {
        Self {
            fetch_url: fetch_url.into(),
            total: 0,
            is_shiny: false,
        }
    }

    pub fn view(&self) -> PageView {
        derive_view(&self.fetch_url)
    }

    /// A zero count (failed or empty fetch) never hides a known total.
    pub fn observe_count(&mut self, count: u64) -> bool {
        if count == 0 || count == self.total {
            return false;
        }
        self.total = count;
        true
    }

    pub fn add_pokemon(&mut self) {
        self.total += 1;
    }

    pub fn toggle_shiny(&mut self) {
        self.is_shiny = !self.is_shiny;
    }

    /// Moves to a `next`/`previous` link. Empty links are ignored.
    pub fn follow(&mut self, link: &str) -> bool {
        if link.is_empty() || link == self.fetch_url {
            return false;
        }
        self.fetch_url = link.to_string();
        true
    }

    /// Writes a committed page size into the current URL.
    pub fn set_page_size(&mut self, page_size: &str) -> bool {
        let url = with_page_size(&self.fetch_url, page_size);
        if url == self.fetch_url {
            return false;
        }
        self.fetch_url = url;
        true
    }
}
