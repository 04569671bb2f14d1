//! Purpose: Model the universe of generated files threaded through the protocol.
//! Exports: `Universe`.
//! Role: In-memory mapping from relative file path to full file content.
//! Invariants: Keys are forward-slash relative paths; storage stays sorted.
//! Invariants: Only command handlers mutate a universe; decode/dispatch pass it through.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Accumulated output of the scaffolding session so far. The host owns
/// persistence; the plugin only reads and extends the mapping.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Universe(BTreeMap<String, String>);

impl Universe {
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn contains(&self, path: &str) -> bool {
        self.0.contains_key(path)
    }

    pub fn get(&self, path: &str) -> Option<&str> {
        self.0.get(path).map(String::as_str)
    }

    /// Inserts or replaces one generated file, returning the previous content
    /// when the path was already present.
    pub fn insert(&mut self, path: impl Into<String>, content: impl Into<String>) -> Option<String> {
        self.0.insert(path.into(), content.into())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(path, content)| (path.as_str(), content.as_str()))
    }
}

impl FromIterator<(String, String)> for Universe {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::Universe;

    #[test]
    fn insert_reports_replaced_content() {
        let mut universe = Universe::new();
        assert_eq!(universe.insert("main", "v1"), None);
        assert_eq!(universe.insert("main", "v2"), Some("v1".to_string()));
        assert_eq!(universe.get("main"), Some("v2"));
        assert_eq!(universe.len(), 1);
    }

    #[test]
    fn serializes_with_sorted_keys() {
        let mut universe = Universe::new();
        universe.insert("zeta", "z");
        universe.insert("LICENSE", "l");
        universe.insert("api/v1/widget_types.py", "w");
        let json = serde_json::to_string(&universe).expect("encode");
        let license = json.find("LICENSE").expect("LICENSE key");
        let api = json.find("api/v1/widget_types.py").expect("api key");
        let zeta = json.find("zeta").expect("zeta key");
        assert!(license < api && api < zeta);
    }

    #[test]
    fn round_trips_through_json_object_semantics() {
        let universe: Universe = [
            ("main".to_string(), "print()".to_string()),
            ("LICENSE".to_string(), "notice".to_string()),
        ]
        .into_iter()
        .collect();
        let json = serde_json::to_string(&universe).expect("encode");
        let back: Universe = serde_json::from_str(&json).expect("decode");
        assert_eq!(back, universe);
    }
}
