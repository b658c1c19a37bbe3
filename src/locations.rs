//! State → cities lookup loaded once at startup.

use std::collections::BTreeMap;
use std::path::Path;

use tokio::fs;
use tracing::info;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocationIndex {
    cities_by_state: BTreeMap<String, Vec<String>>,
}

impl LocationIndex {
    pub fn from_map<I, C>(entries: I) -> Self
    where
        I: IntoIterator<Item = (String, C)>,
        C: IntoIterator<Item = String>,
    {
        let cities_by_state = entries
            .into_iter()
            .map(|(state, cities)| {
                let mut cities: Vec<String> = cities.into_iter().collect();
                cities.sort();
                cities.dedup();
                (state, cities)
            })
            .collect();

        Self { cities_by_state }
    }

    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        let raw: BTreeMap<String, Vec<String>> = serde_json::from_str(json)?;
        Ok(Self::from_map(raw))
    }

    pub async fn load(path: &Path) -> anyhow::Result<Self> {
        let json = fs::read_to_string(path).await?;
        let index = Self::from_json_str(&json)?;

        info!(
            path = %path.display(),
            states = index.cities_by_state.len(),
            "Loaded location data"
        );

        Ok(index)
    }

    /// All state names, sorted.
    pub fn states(&self) -> Vec<String> {
        self.cities_by_state.keys().cloned().collect()
    }

    /// Sorted cities of `state`; empty when the state is unknown.
    pub fn cities(&self, state: &str) -> Vec<String> {
        self.cities_by_state
            .get(state)
            .cloned()
            .unwrap_or_default()
    }
}
