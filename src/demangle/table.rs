//! Symbol table built during the scan pass.
//!
//! Maps each distinct raw symbol that classified as Nim mangled and decoded
//! cleanly to its decoded form. The table is a plain value handed to the
//! rewriter; nothing here is global.

use super::classify::is_nim_mangled;
use super::decoder::{decode, DecodedSymbol};
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

/// Raw symbol text → decoded symbol
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SymbolTable {
    symbols: BTreeMap<String, DecodedSymbol>,
}

/// Counters collected while building a table
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TableStats {
    /// Raw symbols seen, duplicates included
    pub scanned: usize,

    /// Distinct raw symbols
    pub distinct: usize,

    /// Distinct symbols decoded into the table
    pub decoded: usize,

    /// Distinct symbols rejected by the classifier
    pub not_mangled: usize,

    /// Distinct symbols that classified as mangled but could not be decoded
    pub undecodable: usize,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from raw symbols in scan order
    ///
    /// **Public** - main entry point after scanning
    ///
    /// Symbols failing classification are left out silently. Symbols that
    /// classify but fail to decode are logged and left out, so they stay
    /// untouched in the rewritten trace.
    pub fn build<I, S>(raw_symbols: I) -> (Self, TableStats)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut table = Self::new();
        let mut stats = TableStats::default();
        let mut seen = HashSet::new();

        for raw in raw_symbols {
            let raw = raw.as_ref();
            stats.scanned += 1;

            if !seen.insert(raw.to_string()) {
                continue;
            }
            stats.distinct += 1;

            if !is_nim_mangled(raw) {
                stats.not_mangled += 1;
                continue;
            }

            match decode(raw) {
                Ok(decoded) => {
                    debug!("Decoded {} -> {}", raw, decoded.render());
                    table.insert(raw.to_string(), decoded);
                    stats.decoded += 1;
                }
                Err(e) => {
                    warn!("Skipping symbol: {}", e);
                    stats.undecodable += 1;
                }
            }
        }

        (table, stats)
    }

    pub fn insert(&mut self, raw: String, decoded: DecodedSymbol) -> Option<DecodedSymbol> {
        self.symbols.insert(raw, decoded)
    }

    pub fn get(&self, raw: &str) -> Option<&DecodedSymbol> {
        self.symbols.get(raw)
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &DecodedSymbol)> {
        self.symbols.iter().map(|(raw, decoded)| (raw.as_str(), decoded))
    }

    /// Entries in substitution order
    ///
    /// Longer keys come first so a symbol that contains another symbol's
    /// text is replaced before the shorter one can match inside it. Ties
    /// keep lexicographic order.
    pub fn replacement_order(&self) -> Vec<(&str, &DecodedSymbol)> {
        let mut entries: Vec<_> = self.iter().collect();
        entries.sort_by(|(a, _), (b, _)| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
        entries
    }
}
