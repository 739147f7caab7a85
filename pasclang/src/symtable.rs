mod entry;
mod ordered;
mod tree;

use crate::ErrorCode;
use thiserror::Error;

pub use entry::{ConstantValue, Definition, RoutineInfo, SymbolEntry};
pub use ordered::OrderedSymbolTable;
pub use tree::TreeSymbolTable;

/// Opaque handle of an entry owned by a symbol table
///
/// Keys are only meaningful for the table that produced them.
#[derive(Hash, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Debug)]
pub struct SymbolKey {
	index: usize,
}

impl SymbolKey {
	fn new(index: usize) -> Self {
		Self { index }
	}
}

/// Identifier resolution failures
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum SymbolError {
	#[error("Undefined identifier `{0}`")]
	Undefined(String),

	#[error("Redefined identifier `{0}`")]
	Redefined(String),
}

impl SymbolError {
	/// Catalog entry a parser reports for this failure
	pub fn error_code(&self) -> ErrorCode {
		match self {
			SymbolError::Undefined(_) => ErrorCode::UndefinedIdentifier,
			SymbolError::Redefined(_) => ErrorCode::RedefinedIdentifier,
		}
	}
}

/// Flat identifier table mapping names to compiler entries
///
/// Names are compared byte-wise (`str` ordering). Entries are never removed;
/// they live as long as the table.
pub trait SymbolTable {
	/// Looks a name up without modifying the table
	fn search(&self, name: &str) -> Option<SymbolKey>;

	/// Returns the entry registered under `name`, creating a fresh
	/// `Definition::Undefined` entry if there is none
	fn insert_if_absent(&mut self, name: &str) -> SymbolKey;

	/// Entry behind a key. Panics if the key belongs to another table.
	fn entry(&self, key: SymbolKey) -> &SymbolEntry;

	/// Mutable entry behind a key. Panics if the key belongs to another table.
	fn entry_mut(&mut self, key: SymbolKey) -> &mut SymbolEntry;

	/// Number of entries
	fn len(&self) -> usize;

	/// Keys of all entries, ascending by name
	fn sorted_keys(&self) -> Vec<SymbolKey>;

	fn is_empty(&self) -> bool {
		self.len() == 0
	}

	/// Resolves a name that must already be declared
	fn lookup(&self, name: &str) -> Result<SymbolKey, SymbolError> {
		self.search(name).ok_or_else(|| SymbolError::Undefined(name.into()))
	}

	/// Declares a new name, rejecting one that is already present
	fn enter(&mut self, name: &str) -> Result<SymbolKey, SymbolError> {
		match self.search(name) {
			Some(_) => Err(SymbolError::Redefined(name.into())),
			None => Ok(self.insert_if_absent(name)),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn declare_then_resolve<T: SymbolTable>(mut table: T) {
		let key = table.enter("alpha").expect("first declaration");
		assert_eq!(table.lookup("alpha"), Ok(key));
		assert_eq!(table.enter("alpha"), Err(SymbolError::Redefined("alpha".into())));
		assert_eq!(table.lookup("beta"), Err(SymbolError::Undefined("beta".into())));
		assert_eq!(table.len(), 1);
	}

	#[test]
	fn declarations_in_tree_table() {
		declare_then_resolve(TreeSymbolTable::new());
	}

	#[test]
	fn declarations_in_ordered_table() {
		declare_then_resolve(OrderedSymbolTable::new());
	}

	#[test]
	fn resolution_errors_map_to_catalog() {
		assert_eq!(
			SymbolError::Undefined("x".into()).error_code(),
			ErrorCode::UndefinedIdentifier
		);
		assert_eq!(
			SymbolError::Redefined("x".into()).error_code(),
			ErrorCode::RedefinedIdentifier
		);
	}
}
