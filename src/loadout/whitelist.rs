//! Membership filter built from the item catalog. Names outside it never reach a squad.

use indexmap::IndexSet;

use crate::data::catalog::{ItemCatalog, CATALOG_CATEGORIES};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Whitelist {
    names: IndexSet<String>,
}

impl Whitelist {
    /// Flatten every category and sub-category list of the catalog, keeping first-seen order.
    pub fn from_catalog(catalog: &ItemCatalog) -> Self {
        let names = CATALOG_CATEGORIES
            .iter()
            .flat_map(|category| catalog.flatten_category(category))
            .collect();
        Self { names }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// Keep whitelisted names, dropping duplicates. Dropped names are logged under `context`.
    pub fn sanitize<I>(&self, names: I, context: &str) -> Vec<String>
    where
        I: IntoIterator<Item = String>,
    {
        let mut kept: IndexSet<String> = IndexSet::new();
        for name in names {
            if self.contains(&name) {
                kept.insert(name);
            } else {
                log::warn!("dropping '{name}' from {context}: not in item catalog");
            }
        }
        kept.into_iter().collect()
    }
}

impl<S: Into<String>> FromIterator<S> for Whitelist {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        Self {
            names: iter.into_iter().map(Into::into).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn whitelist_is_exactly_the_flattened_catalog() {
        let catalog = ItemCatalog::from_value(json!({
            "primaries": { "all": ["Liberator", "Breaker"] },
            "boosters": { "all": ["Vitality Enhancement", "Liberator"] },
            "stratagems": { "turrets": ["Gatling Sentry"], "support": { "weapons": ["Quasar Cannon"] } },
            "unlisted": { "all": ["Ghost Item"] }
        }));
        let whitelist = Whitelist::from_catalog(&catalog);
        let names: Vec<&str> = whitelist.iter().collect();
        assert_eq!(
            names,
            vec!["Liberator", "Breaker", "Vitality Enhancement", "Gatling Sentry", "Quasar Cannon"]
        );
        assert!(!whitelist.contains("Ghost Item"));
    }

    #[test]
    fn sanitize_filters_and_dedups() {
        let whitelist: Whitelist = ["A", "B"].into_iter().collect();
        let kept = whitelist.sanitize(
            ["B", "X", "A", "B"].into_iter().map(String::from),
            "test",
        );
        assert_eq!(kept, vec!["B", "A"]);
    }
}
