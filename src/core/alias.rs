//! Texture alias table: ordered `(pattern, category)` rules used to sort
//! downloaded texture files into semantic categories.
//!
//! Texture packs name the same map differently (`albedo` vs `Base_Color`), so
//! several patterns can point at one category. Rules are tried in declaration
//! order and the first substring hit wins.
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AliasRule {
    pub pattern: String,
    pub category: String,
}

impl AliasRule {
    pub fn new(pattern: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            category: category.into(),
        }
    }
}

/// Outcome of classifying one path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification<'a> {
    /// The winning rule.
    pub rule: &'a AliasRule,
    /// Later rules that also matched, in declaration order.
    pub shadowed: Vec<&'a AliasRule>,
}

impl Classification<'_> {
    pub fn category(&self) -> &str {
        &self.rule.category
    }

    /// True when a shadowed rule points at a different category.
    pub fn is_ambiguous(&self) -> bool {
        self.shadowed
            .iter()
            .any(|r| r.category != self.rule.category)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AliasTable {
    rules: Vec<AliasRule>,
}

impl Default for AliasTable {
    fn default() -> Self {
        Self::new(vec![
            AliasRule::new("albedo", "albedo"),
            AliasRule::new("Base_Color", "albedo"),
            AliasRule::new("ao", "ao"),
            AliasRule::new("Ambient_Occlusion", "ao"),
            AliasRule::new("normal", "normal"),
            AliasRule::new("Normal", "normal"),
        ])
    }
}

impl AliasTable {
    pub fn new(rules: Vec<AliasRule>) -> Self {
        Self { rules }
    }

    /// Load a table from a JSON array of `{"pattern": .., "category": ..}` objects.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }

    pub fn rules(&self) -> &[AliasRule] {
        &self.rules
    }

    /// Distinct categories in order of first appearance.
    pub fn categories(&self) -> Vec<&str> {
        let mut out: Vec<&str> = Vec::new();
        for rule in &self.rules {
            if !out.contains(&rule.category.as_str()) {
                out.push(&rule.category);
            }
        }
        out
    }

    /// First rule whose pattern occurs in `text`, plus any later matches.
    pub fn classify(&self, text: &str) -> Option<Classification<'_>> {
        let mut matches = self.rules.iter().filter(|r| text.contains(&r.pattern));
        let rule = matches.next()?;
        Some(Classification {
            rule,
            shadowed: matches.collect(),
        })
    }
}
