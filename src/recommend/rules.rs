use std::collections::HashMap;
use crate::app_system::ConfigError;
use crate::domain::category;

/// Where candidates come from once the anchor's category is known.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CandidatePool<'a> {
    /// Every catalog product in one of these categories.
    Categories(&'a [String]),
    /// The whole active catalog.
    ActiveCatalog,
}

/// Lookup table mapping an anchor category to the categories that complement it.
///
/// Categories missing from the table fall back to the full active catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComplementRules {
    table: HashMap<String, Vec<String>>,
}

impl Default for ComplementRules {
    fn default() -> Self {
        Self::cafe_defaults()
    }
}

impl ComplementRules {
    pub fn empty() -> Self {
        Self { table: HashMap::new() }
    }

    /// Pairings for the café menu: meals get drinks, drinks get snacks, snacks get drinks.
    pub fn cafe_defaults() -> Self {
        Self::empty()
            .with_rule(category::COMBO, &[category::DRINK, category::COFFEE])
            .with_rule(category::COFFEE, &[category::SNACK])
            .with_rule(category::TEA, &[category::SNACK])
            .with_rule(category::SNACK, &[category::DRINK, category::TEA])
    }

    pub fn with_rule(mut self, anchor: &str, targets: &[&str]) -> Self {
        self.table.insert(
            anchor.to_string(),
            targets.iter().map(|t| t.to_string()).collect(),
        );
        self
    }

    pub fn pool_for(&self, anchor_category: &str) -> CandidatePool<'_> {
        match self.table.get(anchor_category) {
            Some(targets) => CandidatePool::Categories(targets),
            None => CandidatePool::ActiveCatalog,
        }
    }

    /// Parses `ANCHOR=TARGET|TARGET;ANCHOR=TARGET`. Whitespace around labels is ignored.
    pub fn parse(text: &str) -> Result<Self, ConfigError> {
        let mut rules = Self::empty();
        for entry in text.split(';').map(str::trim).filter(|e| !e.is_empty()) {
            let (anchor, targets) = entry.split_once('=').ok_or_else(|| {
                ConfigError::Invalid { key: "CAFE_COMPLEMENT_RULES", value: entry.to_string() }
            })?;
            let anchor = anchor.trim();
            let targets: Vec<&str> = targets
                .split('|')
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .collect();
            if anchor.is_empty() || targets.is_empty() {
                return Err(ConfigError::Invalid { key: "CAFE_COMPLEMENT_RULES", value: entry.to_string() });
            }
            rules = rules.with_rule(anchor, &targets);
        }
        Ok(rules)
    }
}
