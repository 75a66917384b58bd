//! Composer-to-country resolution
//!
//! The pipeline itself has no opinion about repertoire: callers inject the
//! roster they care about as a plain mapping. An empty lookup is valid and
//! simply resolves no countries.

use std::collections::HashMap;

/// An injected composer → country mapping
///
/// # Example
///
/// ```
/// use textura::analysis::metadata::CountryLookup;
///
/// let countries: CountryLookup = [
///     ("Prez, Josquin des", "Franco-Flemish"),
///     ("Mouton, Jean", "French"),
/// ]
/// .into_iter()
/// .collect();
///
/// assert_eq!(countries.country_for("Mouton, Jean"), Some("French"));
/// assert_eq!(countries.country_for("Taverner, John"), None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct CountryLookup {
    map: HashMap<String, String>,
}

impl CountryLookup {
    /// Create an empty lookup
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a composer's country
    pub fn insert(&mut self, composer: impl Into<String>, country: impl Into<String>) {
        self.map.insert(composer.into(), country.into());
    }

    /// Country for a composer name as catalogued, if known
    pub fn country_for(&self, composer: &str) -> Option<&str> {
        self.map.get(composer).map(String::as_str)
    }

    /// Number of composers in the lookup
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// True if no composers are registered
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for CountryLookup {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            map: iter
                .into_iter()
                .map(|(composer, country)| (composer.into(), country.into()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_resolve() {
        let mut countries = CountryLookup::new();
        assert!(countries.is_empty());

        countries.insert("Obrecht, Jacob", "Franco-Flemish");
        countries.insert("Morales, Cristobal de", "Spanish");
        assert_eq!(countries.len(), 2);
        assert_eq!(
            countries.country_for("Obrecht, Jacob"),
            Some("Franco-Flemish")
        );
        assert_eq!(countries.country_for("Unknown"), None);
    }

    #[test]
    fn test_empty_lookup_resolves_nothing() {
        let countries = CountryLookup::default();
        assert_eq!(countries.country_for("Prez, Josquin des"), None);
    }
}
