use bimap::BiHashMap;

/// Opaque key of an interned identifier
#[derive(Hash, PartialEq, Eq, Clone, Copy, Debug)]
pub struct IdTableKey {
	key: usize,
}

/// Interned identifier spellings seen by the scanner
///
/// Pascal identifiers are case-insensitive, so names are stored the way the
/// scanner normalizes them (lowercase) and every spelling of a name maps to
/// the same key.
#[derive(Clone, Debug, Default)]
pub struct IdTable {
	ids: BiHashMap<String, IdTableKey>,
}

impl IdTable {
	pub fn new() -> IdTable {
		IdTable::default()
	}

	/// Gets the identifier by key (or None)
	pub fn get_by_key(&self, key: &IdTableKey) -> Option<&str> {
		self.ids.get_by_right(key).map(String::as_str)
	}

	/// Gets key by identifier name (or None)
	pub fn get_by_name(&self, name: &str) -> Option<IdTableKey> {
		self.ids.get_by_left(name).copied()
	}

	/// Inserts a new name or returns the key already assigned to it
	pub fn insert_or_get(&mut self, name: &str) -> IdTableKey {
		if let Some(key) = self.get_by_name(name) {
			return key;
		}
		let key = IdTableKey { key: self.ids.len() };
		self.ids.insert(name.into(), key);
		key
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn interning_is_stable() {
		let mut table = IdTable::new();
		let a = table.insert_or_get("alpha");
		let b = table.insert_or_get("beta");
		assert_ne!(a, b);
		assert_eq!(table.insert_or_get("alpha"), a);
		assert_eq!(table.get_by_key(&b), Some("beta"));
		assert_eq!(table.get_by_name("gamma"), None);
	}
}
