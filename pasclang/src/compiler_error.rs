use crate::compiler_diagnostic::*;
use crate::symtable::SymbolError;
use crate::ErrorCode;
use thiserror::Error;

/// General compiler error
///
/// Everything that makes a compiler entry point stop early. Recoverable
/// syntax errors never end up here - they are reported through the
/// `ErrorReporter` and scanning continues.
#[derive(Debug, Error)]
pub enum CompilerError {
	#[error(transparent)]
	IoError(#[from] std::io::Error),

	#[error("File not found")]
	FileNotFound(String),

	#[error("Too many syntax errors")]
	TooManySyntaxErrors,

	#[error(transparent)]
	JsonError(#[from] serde_json::Error),

	#[error(transparent)]
	Symbol(#[from] SymbolError),
}

impl CompilerError {
	/// Exit status the process should terminate with
	pub fn exit_status(&self) -> i32 {
		match self {
			CompilerError::TooManySyntaxErrors => ErrorCode::TooManySyntaxErrors.exit_status(),
			_ => 1,
		}
	}
}

impl ProvidesCompilerDiagnostic for CompilerError {
	fn to_diagnostic(&self) -> CompilerDiagnostic {
		use CompilerError::*;
		match self {
			IoError(io_error) => CompilerDiagnosticBuilder::from_error(self)
				.error_code("pasc::io")
				.help(&io_error.to_string())
				.build(),
			FileNotFound(file_name) => CompilerDiagnosticBuilder::from_error(self)
				.error_code("pasc::source")
				.help(&format!("Make sure this file exists: {}", file_name))
				.build(),
			TooManySyntaxErrors => CompilerDiagnosticBuilder::from_error(self)
				.error_code("pasc::abort")
				.help("Fix the errors reported above or raise the limit with --max-errors")
				.build(),
			JsonError(serde_error) => CompilerDiagnosticBuilder::from_error(self)
				.error_code("pasc::json")
				.help(&serde_error.to_string())
				.build(),
			Symbol(symbol_error) => CompilerDiagnosticBuilder::from_error(self)
				.error_code("pasc::symbol")
				.help(&format!("{}", symbol_error.error_code()))
				.build(),
		}
	}
}
