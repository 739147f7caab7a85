use crate::driver::{self, ScanSummary};
use crate::error_reporter::{ErrorReporter, MAX_SYNTAX_ERRORS};
use crate::lexer::Scanner;
use crate::listing::Printer;
use crate::symtable::OrderedSymbolTable;
use crate::xref;
use crate::CompilerError;
use log::{debug, info};
use std::fs;
use std::io::Write;

/// Settings shared by all commands
#[derive(Clone, Copy, Debug)]
pub struct RunOptions {
	/// Produce a paginated source listing (the print flag)
	pub listing: bool,
	/// Number of syntax errors tolerated before aborting
	pub max_errors: usize,
}

impl Default for RunOptions {
	fn default() -> Self {
		Self {
			listing: false,
			max_errors: MAX_SYNTAX_ERRORS,
		}
	}
}

/// Cross-reference output format
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum XrefFormat {
	Text,
	Json,
}

fn make_printer<W: Write>(file_name: &str, options: &RunOptions, output: W) -> Printer<W> {
	if options.listing {
		Printer::listing(output, file_name)
	}
	else {
		Printer::plain(output)
	}
}

/// This function is used to read input from file, it provides the filename if the file is not found, contrary to the standard library
pub fn read_input_from_file(filename: &str) -> Result<String, CompilerError> {
	debug!("reading {}", filename);
	fs::read_to_string(filename).map_err(|_| CompilerError::FileNotFound(filename.into()))
}

/// Prints the tokens of a program up to its terminating period
pub fn tokenize<W: Write>(
	code: &str,
	file_name: &str,
	options: &RunOptions,
	output: W,
) -> Result<ScanSummary, CompilerError> {
	let mut scanner = Scanner::new(file_name, code);
	let mut reporter = ErrorReporter::with_max_errors(options.max_errors);
	let mut printer = make_printer(file_name, options, output);
	let result = driver::tokenize(&mut scanner, &mut reporter, &mut printer);
	printer.flush()?;
	result
}

/// Prints the identifiers of a source file with the lines they occur on
pub fn cross_reference<W: Write>(
	code: &str,
	file_name: &str,
	options: &RunOptions,
	format: XrefFormat,
	output: W,
) -> Result<(), CompilerError> {
	let mut scanner = Scanner::new(file_name, code);
	let mut table = OrderedSymbolTable::new();
	let mut reporter = ErrorReporter::with_max_errors(options.max_errors);
	let mut printer = make_printer(file_name, options, output);

	let result = xref::cross_reference(&mut scanner, &mut table, &mut reporter, &mut printer);
	let result = result.and_then(|xref| match format {
		XrefFormat::Text => xref.print(&table, &mut printer),
		XrefFormat::Json => {
			let json = xref.to_json(&table)?;
			Ok(printer.print_line(&json)?)
		},
	});
	printer.flush()?;
	info!("cross reference of {} done", file_name);
	result
}
