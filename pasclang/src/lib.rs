pub mod compiler_diagnostic;
pub mod compiler_error;
pub mod driver;
pub mod error_code;
pub mod error_reporter;
pub mod lexer;
pub mod listing;
pub mod source_span;
pub mod symtable;
pub mod utils;
pub mod xref;

pub use compiler_diagnostic::CompilerDiagnostic;
pub use compiler_diagnostic::ProvidesCompilerDiagnostic;
pub use compiler_error::CompilerError;
pub use error_code::ErrorCode;
pub use source_span::SourceSpan;
