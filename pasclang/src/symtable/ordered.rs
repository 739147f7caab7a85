use super::{SymbolEntry, SymbolKey, SymbolTable};
use std::collections::BTreeMap;

/// Symbol table backed by a balanced ordered map
///
/// Same contract as `TreeSymbolTable` but with guaranteed logarithmic
/// lookups regardless of insertion order. Entries are kept in insertion
/// order in an arena; the map only holds keys. Tree links of the
/// entries stay empty.
#[derive(Clone, Debug, Default)]
pub struct OrderedSymbolTable {
	index: BTreeMap<String, SymbolKey>,
	entries: Vec<SymbolEntry>,
}

impl OrderedSymbolTable {
	pub fn new() -> Self {
		Self::default()
	}
}

impl SymbolTable for OrderedSymbolTable {
	fn search(&self, name: &str) -> Option<SymbolKey> {
		self.index.get(name).copied()
	}

	fn insert_if_absent(&mut self, name: &str) -> SymbolKey {
		if let Some(key) = self.search(name) {
			return key;
		}
		let key = SymbolKey::new(self.entries.len());
		self.entries.push(SymbolEntry::new(name));
		self.index.insert(name.into(), key);
		key
	}

	fn entry(&self, key: SymbolKey) -> &SymbolEntry {
		&self.entries[key.index]
	}

	fn entry_mut(&mut self, key: SymbolKey) -> &mut SymbolEntry {
		&mut self.entries[key.index]
	}

	fn len(&self) -> usize {
		self.entries.len()
	}

	fn sorted_keys(&self) -> Vec<SymbolKey> {
		self.index.values().copied().collect()
	}
}
