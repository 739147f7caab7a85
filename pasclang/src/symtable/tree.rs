use super::{SymbolEntry, SymbolKey, SymbolTable};
use std::cmp::Ordering;

/// Unbalanced binary search tree of entries
///
/// Entries live in an arena owned by the table and are linked through their
/// `left`/`right` keys. There is no rebalancing, so the shape of the tree only
/// depends on the insertion order - names inserted in sorted order end up in
/// a single chain.
#[derive(Clone, Debug, Default)]
pub struct TreeSymbolTable {
	root: Option<SymbolKey>,
	entries: Vec<SymbolEntry>,
}

impl TreeSymbolTable {
	pub fn new() -> Self {
		Self::default()
	}

	/// Root entry of the tree
	pub fn root(&self) -> Option<SymbolKey> {
		self.root
	}

	/// Number of entries on the longest root-to-leaf path
	pub fn depth(&self) -> usize {
		let mut deepest = 0;
		let mut stack: Vec<(SymbolKey, usize)> = self.root.map(|key| (key, 1)).into_iter().collect();
		while let Some((key, depth)) = stack.pop() {
			deepest = deepest.max(depth);
			let entry = self.entry(key);
			stack.extend(entry.left.map(|child| (child, depth + 1)));
			stack.extend(entry.right.map(|child| (child, depth + 1)));
		}
		deepest
	}
}

impl SymbolTable for TreeSymbolTable {
	fn search(&self, name: &str) -> Option<SymbolKey> {
		let mut link = self.root;
		while let Some(key) = link {
			let entry = self.entry(key);
			link = match name.cmp(entry.name()) {
				Ordering::Equal => return Some(key),
				Ordering::Less => entry.left,
				Ordering::Greater => entry.right,
			};
		}
		None
	}

	fn insert_if_absent(&mut self, name: &str) -> SymbolKey {
		// Last visited node and the side the new entry hangs off
		let mut parent: Option<(SymbolKey, Ordering)> = None;
		let mut link = self.root;
		while let Some(key) = link {
			let entry = self.entry(key);
			let ordering = name.cmp(entry.name());
			link = match ordering {
				Ordering::Equal => return key,
				Ordering::Less => entry.left,
				Ordering::Greater => entry.right,
			};
			parent = Some((key, ordering));
		}

		let key = SymbolKey::new(self.entries.len());
		self.entries.push(SymbolEntry::new(name));
		match parent {
			None => self.root = Some(key),
			Some((parent, Ordering::Less)) => self.entry_mut(parent).left = Some(key),
			Some((parent, _)) => self.entry_mut(parent).right = Some(key),
		}
		log::trace!("symbol `{}` linked into tree as #{}", name, key.index);
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
		let mut keys = Vec::with_capacity(self.entries.len());
		let mut stack = Vec::new();
		let mut link = self.root;
		loop {
			while let Some(key) = link {
				stack.push(key);
				link = self.entry(key).left;
			}
			match stack.pop() {
				Some(key) => {
					keys.push(key);
					link = self.entry(key).right;
				},
				None => break,
			}
		}
		keys
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn names_in_order(table: &TreeSymbolTable) -> Vec<&str> {
		table.sorted_keys().into_iter().map(|key| table.entry(key).name()).collect()
	}

	#[test]
	fn empty_table() {
		let table = TreeSymbolTable::new();
		assert!(table.is_empty());
		assert_eq!(table.root(), None);
		assert_eq!(table.depth(), 0);
		assert_eq!(table.search("x"), None);
	}

	#[test]
	fn links_follow_name_ordering() {
		let mut table = TreeSymbolTable::new();
		let m = table.insert_if_absent("m");
		let c = table.insert_if_absent("c");
		let x = table.insert_if_absent("x");
		let a = table.insert_if_absent("a");

		assert_eq!(table.root(), Some(m));
		assert_eq!(table.entry(m).left(), Some(c));
		assert_eq!(table.entry(m).right(), Some(x));
		assert_eq!(table.entry(c).left(), Some(a));
		assert_eq!(table.depth(), 3);
		assert_eq!(names_in_order(&table), vec!["a", "c", "m", "x"]);
	}

	#[test]
	fn new_entries_start_undefined() {
		let mut table = TreeSymbolTable::new();
		let key = table.insert_if_absent("counter");
		let entry = table.entry(key);
		assert_eq!(entry.name(), "counter");
		assert!(entry.definition.is_undefined());
		assert_eq!(entry.scope_level, 0);
		assert_eq!(entry.label_index, 0);
		assert_eq!(entry.next, None);
		assert_eq!(entry.left(), None);
		assert_eq!(entry.right(), None);
	}

	#[test]
	fn comparison_is_case_sensitive() {
		let mut table = TreeSymbolTable::new();
		let upper = table.insert_if_absent("Total");
		let lower = table.insert_if_absent("total");
		assert_ne!(upper, lower);
		assert_eq!(table.len(), 2);
	}

	// A blind re-walk that ignores equality would hang a second "b" to the
	// right of the first one, where search can never reach it. Here the
	// existing entry comes back instead and nothing is allocated.
	#[test]
	fn duplicate_insert_returns_existing_entry() {
		let mut table = TreeSymbolTable::new();
		table.insert_if_absent("a");
		let first = table.insert_if_absent("b");
		table.insert_if_absent("c");

		let second = table.insert_if_absent("b");

		assert_eq!(first, second);
		assert_eq!(table.len(), 3);
		assert_eq!(table.search("b"), Some(first));
		assert_eq!(table.entry(first).right(), Some(table.search("c").unwrap()));
		assert_eq!(table.depth(), 3);
	}

	#[test]
	fn duplicate_insert_keeps_caller_updates() {
		let mut table = TreeSymbolTable::new();
		let key = table.insert_if_absent("size");
		table.entry_mut(key).scope_level = 2;
		let again = table.insert_if_absent("size");
		assert_eq!(table.entry(again).scope_level, 2);
	}
}
