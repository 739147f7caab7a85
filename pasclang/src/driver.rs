use crate::error_reporter::ErrorReporter;
use crate::lexer::{Scanner, Token, TokenKind};
use crate::listing::Printer;
use crate::{CompilerError, ErrorCode};
use log::info;
use std::io::{self, Write};

/// Outcome of a scan that was not aborted
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScanSummary {
	/// Tokens printed
	pub tokens: usize,
	/// Errors reported during this scan
	pub errors: usize,
	/// Whether the terminating period was reached
	pub terminated: bool,
}

/// Lists source lines the scanner has moved past
pub(crate) fn echo_source_lines<W: Write>(scanner: &mut Scanner, printer: &mut Printer<W>) -> io::Result<()> {
	if !printer.is_listing() {
		return Ok(());
	}
	for (line_number, text) in scanner.pending_lines() {
		printer.print_source_line(line_number, 0, text)?;
	}
	Ok(())
}

fn print_token<W: Write>(token: &Token, text: &str, printer: &mut Printer<W>) -> io::Result<()> {
	printer.print_line(&format!(" >> {:<16} {}", token.kind, text))
}

/// Prints every token up to the terminating period
///
/// Scan errors are reported and skipped. Running out of input before the
/// period is reported as an unexpected end of file and ends the scan.
pub fn tokenize<W: Write>(
	scanner: &mut Scanner,
	reporter: &mut ErrorReporter,
	printer: &mut Printer<W>,
) -> Result<ScanSummary, CompilerError> {
	let errors_before = reporter.error_count();
	let mut tokens = 0;
	let terminated = loop {
		let next = scanner.next_token();
		echo_source_lines(scanner, printer)?;
		let token = match next {
			Ok(token) => token,
			Err(err) => {
				reporter.report(err.code, scanner, printer)?;
				continue;
			},
		};

		if token.kind == TokenKind::EndOfFile {
			reporter.report(ErrorCode::UnexpectedEndOfFile, scanner, printer)?;
			break false;
		}

		print_token(&token, scanner.token_text(), printer)?;
		tokens += 1;
		if token.kind.is_terminator() {
			break true;
		}
	};

	let summary = ScanSummary {
		tokens,
		errors: reporter.error_count() - errors_before,
		terminated,
	};
	info!(
		"{}: {} tokens, {} errors",
		scanner.source_name(),
		summary.tokens,
		summary.errors
	);
	Ok(summary)
}
