use miette::{Diagnostic, Severity};
use std::error::Error;
use std::fmt;
use std::fmt::Display;

/// Diagnostic rendered by miette for errors that end the compiler run
/// (as opposed to the caret diagnostics written into the listing)
#[derive(Clone, Debug)]
pub struct CompilerDiagnostic {
	severity: Severity,
	error_text: String,
	help_text: Option<String>,
	error_code: Option<String>,
}

/// Used to conveniently craft compiler error messages
/// Note: Builder is single use only - build() consumes it.
pub struct CompilerDiagnosticBuilder {
	diag: CompilerDiagnostic,
}

impl From<CompilerDiagnostic> for CompilerDiagnosticBuilder {
	fn from(diag: CompilerDiagnostic) -> Self {
		Self { diag }
	}
}

impl CompilerDiagnosticBuilder {
	/// Creates an error diagnostic from an error type
	pub fn from_error<ErrorType>(err: &ErrorType) -> Self
	where
		ErrorType: Error,
	{
		Self::new_error(&err.to_string())
	}

	/// Creates a new error message
	pub fn new_error(msg: &str) -> Self {
		CompilerDiagnostic::new(Severity::Error, msg).into()
	}

	/// Attaches an error code
	pub fn error_code(mut self, code: &str) -> Self {
		self.diag.error_code = Some(code.into());
		self
	}

	/// Attaches a help message
	pub fn help(mut self, help: &str) -> Self {
		self.diag.help_text = Some(help.into());
		self
	}

	pub fn build(self) -> CompilerDiagnostic {
		self.diag
	}
}

impl Display for CompilerDiagnostic {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		write!(f, "{}", self.error_text)
	}
}

impl Error for CompilerDiagnostic {}

impl Diagnostic for CompilerDiagnostic {
	fn code<'a>(&'a self) -> Option<Box<dyn Display + 'a>> {
		self.error_code
			.as_ref()
			.map(|code| Box::new(code) as Box<dyn Display + 'a>)
	}

	fn severity(&self) -> Option<Severity> {
		Some(self.severity)
	}

	fn help<'a>(&'a self) -> Option<Box<dyn Display + 'a>> {
		self.help_text
			.as_ref()
			.map(|help| Box::new(help) as Box<dyn Display + 'a>)
	}
}

impl CompilerDiagnostic {
	fn new(severity: Severity, msg: &str) -> Self {
		Self {
			severity,
			error_text: msg.into(),
			help_text: None,
			error_code: None,
		}
	}

	pub fn help_text(&self) -> Option<&str> {
		self.help_text.as_deref()
	}

	pub fn error_code(&self) -> Option<&str> {
		self.error_code.as_deref()
	}
}

/// Indicates that type can provide a CompilerDiagnostic message.
/// All errors surfacing from the compiler entry points implement this trait.
pub trait ProvidesCompilerDiagnostic {
	/// Must be implemented by the error type
	fn to_diagnostic(&self) -> CompilerDiagnostic;

	/// Returns a Miette report
	fn to_miette_report(&self) -> miette::Report {
		miette::Report::new(self.to_diagnostic())
	}
}
