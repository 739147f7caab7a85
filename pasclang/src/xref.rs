use crate::driver::echo_source_lines;
use crate::error_reporter::ErrorReporter;
use crate::lexer::{Scanner, TokenKind};
use crate::listing::Printer;
use crate::symtable::{SymbolKey, SymbolTable};
use crate::CompilerError;
use serde::Serialize;
use std::collections::HashMap;
use std::io::Write;

/// Line numbers on which each identifier occurs
///
/// The occurrence lists are attached to symbol table entries by key; the
/// table itself knows nothing about them.
#[derive(Debug, Default)]
pub struct CrossReference {
	occurrences: HashMap<SymbolKey, Vec<usize>>,
}

/// One row of the cross-reference listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CrossReferenceRecord {
	pub name: String,
	pub lines: Vec<usize>,
}

impl CrossReference {
	/// Lines recorded for an entry, in scan order
	pub fn lines(&self, key: SymbolKey) -> &[usize] {
		self.occurrences.get(&key).map(Vec::as_slice).unwrap_or(&[])
	}

	/// Rows in ascending name order
	pub fn records<T: SymbolTable>(&self, table: &T) -> Vec<CrossReferenceRecord> {
		table
			.sorted_keys()
			.into_iter()
			.map(|key| CrossReferenceRecord {
				name: table.entry(key).name().into(),
				lines: self.lines(key).to_vec(),
			})
			.collect()
	}

	/// Prints the listing as `name` (padded to 16) followed by its line numbers
	pub fn print<T: SymbolTable, W: Write>(&self, table: &T, printer: &mut Printer<W>) -> Result<(), CompilerError> {
		printer.print_line("")?;
		printer.print_line("Cross Reference")?;
		printer.print_line("---------------")?;
		for record in self.records(table) {
			let lines: Vec<String> = record.lines.iter().map(usize::to_string).collect();
			printer.print_line(&format!("{:<16} {}", record.name, lines.join(" ")))?;
		}
		Ok(())
	}

	/// JSON rendering of `records`
	pub fn to_json<T: SymbolTable>(&self, table: &T) -> Result<String, CompilerError> {
		Ok(serde_json::to_string_pretty(&self.records(table))?)
	}
}

/// Scans the whole source, entering every identifier into `table`
///
/// Unlike `tokenize`, the scan does not stop at a period; it runs to the end
/// of input. Scan errors are reported and skipped.
pub fn cross_reference<T: SymbolTable, W: Write>(
	scanner: &mut Scanner,
	table: &mut T,
	reporter: &mut ErrorReporter,
	printer: &mut Printer<W>,
) -> Result<CrossReference, CompilerError> {
	let mut xref = CrossReference::default();
	loop {
		let next = scanner.next_token();
		echo_source_lines(scanner, printer)?;
		match next {
			Err(err) => reporter.report(err.code, scanner, printer)?,
			Ok(token) => match token.kind {
				TokenKind::EndOfFile => break,
				TokenKind::Identifier(id) => {
					let name = scanner.id_table().get_by_key(&id).unwrap_or(scanner.token_text());
					let key = table.insert_if_absent(name);
					xref.occurrences.entry(key).or_default().push(scanner.line());
				},
				_ => {},
			},
		}
	}

	if printer.is_listing() {
		for (line_number, text) in scanner.remaining_lines() {
			printer.print_source_line(line_number, 0, text)?;
		}
	}
	log::info!("{}: {} distinct identifiers", scanner.source_name(), table.len());
	Ok(xref)
}
