use std::ops::Range;

/// Byte region of the source text covered by a token
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SourceSpan {
	start: usize,
	end: usize,
}

impl SourceSpan {
	/// Creates a new source span from offset and length
	pub fn new(offset: usize, len: usize) -> SourceSpan {
		SourceSpan {
			start: offset,
			end: offset + len,
		}
	}

	/// Creates a new span from a Range type (as reported by logos)
	pub fn new_from_range(range: &Range<usize>) -> SourceSpan {
		SourceSpan {
			start: range.start,
			end: range.end,
		}
	}

	/// Returns start of the span
	pub fn start(&self) -> usize {
		self.start
	}

	/// Returns end of the span
	pub fn end(&self) -> usize {
		self.end
	}
}

impl From<(usize, usize)> for SourceSpan {
	fn from(pair: (usize, usize)) -> Self {
		SourceSpan::new(pair.0, pair.1)
	}
}
