use std::io::{self, Write};

/// Width of the `"%4d %d: "` prefix put in front of listed source lines
pub const LISTING_HEADER_WIDTH: usize = 8;

/// Number of printed lines before a new page header
pub const MAX_LINES_PER_PAGE: usize = 50;

struct Pagination {
	source_name: String,
	date: String,
	page_number: usize,
	line_count: usize,
}

/// Output sink of the compiler
///
/// In plain mode every line goes straight to the writer. In listing mode the
/// output is paginated under a `Page <n>   <file>   <date>` header and source
/// lines are echoed with their line number and nesting level.
pub struct Printer<W: Write> {
	output: W,
	pagination: Option<Pagination>,
}

impl<W: Write> Printer<W> {
	/// Creates a printer without a listing
	pub fn plain(output: W) -> Self {
		Self {
			output,
			pagination: None,
		}
	}

	/// Creates a listing printer dated with the current local time
	pub fn listing(output: W, source_name: &str) -> Self {
		let date = chrono::Local::now().format("%a %b %e %H:%M:%S %Y").to_string();
		Self::listing_with_date(output, source_name, &date)
	}

	/// Creates a listing printer with a fixed date in the page header
	pub fn listing_with_date(output: W, source_name: &str, date: &str) -> Self {
		Self {
			output,
			pagination: Some(Pagination {
				source_name: source_name.into(),
				date: date.into(),
				page_number: 0,
				line_count: 0,
			}),
		}
	}

	/// Whether source lines are listed (the print flag)
	pub fn is_listing(&self) -> bool {
		self.pagination.is_some()
	}

	/// Prints one line of output
	pub fn print_line(&mut self, text: &str) -> io::Result<()> {
		if let Some(page) = self.pagination.as_mut() {
			if page.line_count % MAX_LINES_PER_PAGE == 0 {
				page.page_number += 1;
				writeln!(
					self.output,
					"Page {}   {}   {}\n",
					page.page_number, page.source_name, page.date
				)?;
			}
			page.line_count += 1;
		}
		writeln!(self.output, "{}", text)
	}

	/// Lists a source line; does nothing outside of listing mode
	pub fn print_source_line(&mut self, line_number: usize, level: usize, text: &str) -> io::Result<()> {
		if !self.is_listing() {
			return Ok(());
		}
		self.print_line(&format!("{:4} {}: {}", line_number, level, text))
	}

	pub fn flush(&mut self) -> io::Result<()> {
		self.output.flush()
	}

	pub fn into_inner(self) -> W {
		self.output
	}
}
