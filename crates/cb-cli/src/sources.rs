//! Category to source-URL registry.
//!
//! Pure configuration: which filter lists feed each category. The registry
//! is passed into the update command explicitly so tests can substitute
//! fixture entries.

use cb_core::types::Category;

/// Ordered mapping of categories to their filter-list sources.
#[derive(Debug, Clone)]
pub struct Registry {
    entries: Vec<(Category, Vec<String>)>,
}

impl Registry {
    /// Registry over explicit entries, kept in the given order.
    pub fn new(entries: Vec<(Category, Vec<String>)>) -> Self {
        Self { entries }
    }

    /// The stock source lists for every category.
    pub fn default_sources() -> Self {
        fn urls(list: &[&str]) -> Vec<String> {
            list.iter().map(|url| url.to_string()).collect()
        }

        Self::new(vec![
            (
                Category::Ads,
                urls(&[
                    "https://easylist.to/easylist/easylist.txt",
                    "https://raw.githubusercontent.com/uBlockOrigin/uAssets/master/filters/filters.txt",
                ]),
            ),
            (
                Category::Privacy,
                urls(&[
                    "https://easylist.to/easylist/easyprivacy.txt",
                    "https://raw.githubusercontent.com/uBlockOrigin/uAssets/master/filters/privacy.txt",
                ]),
            ),
            (
                Category::Annoyance,
                urls(&["https://easylist.to/easylist/fanboy-annoyance.txt"]),
            ),
            (
                Category::Unbreak,
                urls(&[
                    "https://raw.githubusercontent.com/uBlockOrigin/uAssets/master/filters/unbreak.txt",
                ]),
            ),
        ])
    }

    /// Iterate categories with their source URLs, in registry order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, &[String])> {
        self.entries
            .iter()
            .map(|(category, urls)| (*category, urls.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
