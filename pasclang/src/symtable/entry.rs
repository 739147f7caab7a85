use super::SymbolKey;

/// Literal value bound to a constant identifier
#[derive(Clone, Debug, PartialEq)]
pub enum ConstantValue {
	Integer(i32),
	Real(f64),
	Char(char),
	String(String),
}

/// Bookkeeping shared by programs, procedures and functions
///
/// Parameters and locals are chained through `SymbolEntry::next`,
/// starting at the respective head entry.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RoutineInfo {
	pub parameter_count: usize,
	pub local_count: usize,
	pub parameters: Option<SymbolKey>,
	pub locals: Option<SymbolKey>,
}

/// What an identifier denotes, together with the data that kind carries
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Definition {
	#[default]
	Undefined,
	Constant(ConstantValue),
	Type { size: usize },
	Variable { offset: usize },
	Procedure(RoutineInfo),
	Function(RoutineInfo),
	Program(RoutineInfo),
}

impl Definition {
	pub fn is_undefined(&self) -> bool {
		matches!(self, Definition::Undefined)
	}

	/// Routine data for programs, procedures and functions
	pub fn routine(&self) -> Option<&RoutineInfo> {
		match self {
			Definition::Procedure(info) | Definition::Function(info) | Definition::Program(info) => Some(info),
			_ => None,
		}
	}
}

/// Compiler-visible record of one identifier
#[derive(Clone, Debug)]
pub struct SymbolEntry {
	name: String,
	pub(super) left: Option<SymbolKey>,
	pub(super) right: Option<SymbolKey>,
	/// Chains entries outside of the ordering (parameter lists, record fields)
	pub next: Option<SymbolKey>,
	pub definition: Definition,
	pub scope_level: usize,
	pub label_index: usize,
}

impl SymbolEntry {
	pub(super) fn new(name: &str) -> Self {
		Self {
			name: name.into(),
			left: None,
			right: None,
			next: None,
			definition: Definition::Undefined,
			scope_level: 0,
			label_index: 0,
		}
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	/// Left child in the binary search tree (always `None` outside of it)
	pub fn left(&self) -> Option<SymbolKey> {
		self.left
	}

	/// Right child in the binary search tree (always `None` outside of it)
	pub fn right(&self) -> Option<SymbolKey> {
		self.right
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn routine_data_only_for_routines() {
		let info = RoutineInfo {
			parameter_count: 2,
			..RoutineInfo::default()
		};
		assert_eq!(Definition::Function(info.clone()).routine(), Some(&info));
		assert_eq!(Definition::Variable { offset: 4 }.routine(), None);
		assert!(Definition::default().is_undefined());
	}
}
