use crate::listing::{Printer, LISTING_HEADER_WIDTH};
use crate::{CompilerError, ErrorCode};
use log::{debug, warn};
use std::io::Write;

/// Default number of syntax errors tolerated before compilation is aborted
pub const MAX_SYNTAX_ERRORS: usize = 25;

/// Difference between the scanner's buffer offset and the caret column
const CARET_ADJUSTMENT: usize = 2;

/// Scanner state the reporter needs to point at the offending token
pub trait ScanCursor {
	/// Current scan position (see `Scanner` for its exact meaning)
	fn buffer_offset(&self) -> usize;

	/// Drops the text of the current token so it is not printed again
	fn truncate_token(&mut self);
}

/// Number of spaces in front of the caret
pub fn caret_padding(buffer_offset: usize, listing: bool) -> usize {
	let padding = buffer_offset.saturating_sub(CARET_ADJUSTMENT);
	if listing {
		padding + LISTING_HEADER_WIDTH
	}
	else {
		padding
	}
}

/// Syntax error reporter
///
/// Counts reported errors and aborts the compilation once more than
/// `max_errors` of them have been seen.
#[derive(Debug, Clone)]
pub struct ErrorReporter {
	error_count: usize,
	max_errors: usize,
}

impl Default for ErrorReporter {
	fn default() -> Self {
		Self::new()
	}
}

impl ErrorReporter {
	pub fn new() -> Self {
		Self::with_max_errors(MAX_SYNTAX_ERRORS)
	}

	pub fn with_max_errors(max_errors: usize) -> Self {
		Self {
			error_count: 0,
			max_errors,
		}
	}

	/// Errors reported so far
	pub fn error_count(&self) -> usize {
		self.error_count
	}

	pub fn max_errors(&self) -> usize {
		self.max_errors
	}

	/// Reports an error at the cursor's current token
	///
	/// Prints a caret under the token followed by the catalog message. Returns
	/// `CompilerError::TooManySyntaxErrors` once the error limit is exceeded;
	/// the caller must stop compiling then.
	pub fn report<W: Write>(
		&mut self,
		code: ErrorCode,
		cursor: &mut dyn ScanCursor,
		printer: &mut Printer<W>,
	) -> Result<(), CompilerError> {
		let padding = caret_padding(cursor.buffer_offset(), printer.is_listing());
		printer.print_line(&format!("{}^", " ".repeat(padding)))?;
		printer.print_line(&format!(" *** ERROR: {}.", code))?;

		cursor.truncate_token();
		self.error_count += 1;
		debug!("reported {:?} (error {} of {})", code, self.error_count, self.max_errors);

		if self.error_count > self.max_errors {
			warn!("aborting after {} syntax errors", self.error_count);
			printer.print_line("Too many syntax errors. Aborted.")?;
			return Err(CompilerError::TooManySyntaxErrors);
		}
		Ok(())
	}
}
