mod id_table;
mod logos_lexer;
mod number_scanner;

use crate::error_reporter::ScanCursor;
use crate::{ErrorCode, SourceSpan};
use logos::Logos;
use logos_lexer::{RawToken, ScannerContext};
use std::fmt;
use thiserror::Error;

pub use id_table::{IdTable, IdTableKey};
pub use number_scanner::{NumberLiteral, MAX_DIGIT_COUNT, MAX_EXPONENT, MAX_INTEGER};

/// Distance between the start of a token and the scanner's buffer offset
///
/// The scanner position is 1-based and sits on the lookahead character that
/// follows the first character of the token.
const BUFFER_OFFSET_LEAD: usize = 2;

/// Tab stops are placed every `TAB_WIDTH` columns
pub const TAB_WIDTH: usize = 8;

/// Pascal reserved words
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeywordKind {
	And,
	Array,
	Begin,
	Case,
	Const,
	Div,
	Do,
	Downto,
	Else,
	End,
	File,
	For,
	Function,
	Goto,
	If,
	In,
	Label,
	Mod,
	Nil,
	Not,
	Of,
	Or,
	Packed,
	Procedure,
	Program,
	Record,
	Repeat,
	Set,
	Then,
	To,
	Type,
	Until,
	Var,
	While,
	With,
}

impl KeywordKind {
	pub fn as_str(self) -> &'static str {
		use KeywordKind::*;
		match self {
			And => "AND",
			Array => "ARRAY",
			Begin => "BEGIN",
			Case => "CASE",
			Const => "CONST",
			Div => "DIV",
			Do => "DO",
			Downto => "DOWNTO",
			Else => "ELSE",
			End => "END",
			File => "FILE",
			For => "FOR",
			Function => "FUNCTION",
			Goto => "GOTO",
			If => "IF",
			In => "IN",
			Label => "LABEL",
			Mod => "MOD",
			Nil => "NIL",
			Not => "NOT",
			Of => "OF",
			Or => "OR",
			Packed => "PACKED",
			Procedure => "PROCEDURE",
			Program => "PROGRAM",
			Record => "RECORD",
			Repeat => "REPEAT",
			Set => "SET",
			Then => "THEN",
			To => "TO",
			Type => "TYPE",
			Until => "UNTIL",
			Var => "VAR",
			While => "WHILE",
			With => "WITH",
		}
	}
}

/// Pascal special symbols
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PunctuatorKind {
	Caret,        // ^
	Asterisk,     // *
	LPar,         // (
	RPar,         // )
	Minus,        // -
	Plus,         // +
	Equal,        // =
	LBracket,     // [
	RBracket,     // ]
	Colon,        // :
	Semicolon,    // ;
	Less,         // <
	Greater,      // >
	Comma,        // ,
	Period,       // .
	Slash,        // /
	ColonEqual,   // :=
	LessEqual,    // <=
	GreaterEqual, // >=
	NotEqual,     // <>
	DotDot,       // ..
}

impl PunctuatorKind {
	pub fn as_str(self) -> &'static str {
		use PunctuatorKind::*;
		match self {
			Caret => "^",
			Asterisk => "*",
			LPar => "(",
			RPar => ")",
			Minus => "-",
			Plus => "+",
			Equal => "=",
			LBracket => "[",
			RBracket => "]",
			Colon => ":",
			Semicolon => ";",
			Less => "<",
			Greater => ">",
			Comma => ",",
			Period => ".",
			Slash => "/",
			ColonEqual => ":=",
			LessEqual => "<=",
			GreaterEqual => ">=",
			NotEqual => "<>",
			DotDot => "..",
		}
	}
}

/// Token classification
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TokenKind {
	Identifier(IdTableKey),
	Number(NumberLiteral),
	StringLiteral,
	Keyword(KeywordKind),
	Punctuator(PunctuatorKind),
	EndOfFile,
}

impl TokenKind {
	/// Whether this token ends the program
	pub fn is_terminator(&self) -> bool {
		matches!(self, TokenKind::Punctuator(PunctuatorKind::Period))
	}
}

impl fmt::Display for TokenKind {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		match self {
			TokenKind::Identifier(_) => f.pad("<IDENTIFIER>"),
			TokenKind::Number(_) => f.pad("<NUMBER>"),
			TokenKind::StringLiteral => f.pad("<STRING>"),
			TokenKind::Keyword(keyword) => f.pad(keyword.as_str()),
			TokenKind::Punctuator(punctuator) => f.pad(punctuator.as_str()),
			TokenKind::EndOfFile => f.pad("<END OF FILE>"),
		}
	}
}

fn token_kind(raw: RawToken) -> TokenKind {
	match raw {
		RawToken::Identifier(key) => TokenKind::Identifier(key),
		RawToken::Number(value) => TokenKind::Number(value),
		RawToken::StringLiteral => TokenKind::StringLiteral,
		RawToken::Keyword(keyword) => TokenKind::Keyword(keyword),
		RawToken::Punctuator(punctuator) => TokenKind::Punctuator(punctuator),
		// Comment callbacks always skip
		RawToken::Comment => unreachable!("comments are never emitted"),
	}
}

/// Token as produced by the scanner (token kind + source location)
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Token {
	pub kind: TokenKind,
	pub range: SourceSpan,
}

/// Malformed input found by the scanner. Scanning can continue after it.
#[derive(Copy, Clone, Debug, Error, PartialEq, Eq)]
#[error("{code}")]
pub struct ScanError {
	pub code: ErrorCode,
	pub range: SourceSpan,
}

/// Pascal scanner
///
/// Wraps the logos lexer and keeps the position bookkeeping the error
/// reporter and the source listing rely on.
pub struct Scanner<'source> {
	source_name: String,
	source: &'source str,
	lexer: logos::Lexer<'source, RawToken>,
	lines: Vec<&'source str>,
	line_starts: Vec<usize>,
	token_range: SourceSpan,
	token_text: String,
	echoed_lines: usize,
}

impl<'source> Scanner<'source> {
	/// Creates a scanner for the given source text
	pub fn new(source_name: &str, source: &'source str) -> Self {
		let line_starts = std::iter::once(0)
			.chain(source.match_indices('\n').map(|(index, _)| index + 1))
			.collect();
		Scanner {
			source_name: source_name.into(),
			source,
			lexer: RawToken::lexer_with_extras(source, ScannerContext::new()),
			lines: source.lines().collect(),
			line_starts,
			token_range: SourceSpan::new(0, 0),
			token_text: String::new(),
			echoed_lines: 0,
		}
	}

	/// Scans the next token
	///
	/// Returns `TokenKind::EndOfFile` once the input is exhausted (and on every
	/// call after that).
	pub fn next_token(&mut self) -> Result<Token, ScanError> {
		let next = self.lexer.next();
		self.token_range = match next {
			Some(_) => SourceSpan::new_from_range(&self.lexer.span()),
			None => SourceSpan::new(self.source.len(), 0),
		};
		self.token_text = self.source[self.token_range.start()..self.token_range.end()].into();

		match next {
			None => Ok(Token {
				kind: TokenKind::EndOfFile,
				range: self.token_range,
			}),
			Some(Ok(raw)) => Ok(Token {
				kind: token_kind(raw),
				range: self.token_range,
			}),
			Some(Err(())) => {
				let code = self.lexer.extras.last_err.take().unwrap_or(ErrorCode::UnexpectedToken);
				log::debug!("scan error {:?} at {:?} ({:?})", code, self.token_range, self.token_text);
				Err(ScanError {
					code,
					range: self.token_range,
				})
			},
		}
	}

	/// Name the source was opened under
	pub fn source_name(&self) -> &str {
		&self.source_name
	}

	/// Text of the current token (empty after an error was reported on it)
	pub fn token_text(&self) -> &str {
		&self.token_text
	}

	/// Source range of the current token
	pub fn token_range(&self) -> SourceSpan {
		self.token_range
	}

	/// Identifier names seen so far
	pub fn id_table(&self) -> &IdTable {
		&self.lexer.extras.id_table
	}

	fn line_index(&self) -> usize {
		self.line_starts
			.partition_point(|&start| start <= self.token_range.start())
			.saturating_sub(1)
	}

	/// 1-based line of the current token
	pub fn line(&self) -> usize {
		self.line_index() + 1
	}

	/// 0-based display column of the first character of the current token
	///
	/// Tabs advance to the next tab stop, so the column matches the position
	/// the token is shown at when the line is echoed.
	pub fn column(&self) -> usize {
		let line_start = self.line_starts[self.line_index()];
		self.source[line_start..self.token_range.start()]
			.chars()
			.fold(0, |column, ch| match ch {
				'\t' => column + TAB_WIDTH - column % TAB_WIDTH,
				_ => column + 1,
			})
	}

	/// Source lines up to (and including) the current token's line that have
	/// not been handed out yet, with their 1-based numbers
	pub fn pending_lines(&mut self) -> Vec<(usize, &'source str)> {
		let until = self.line().min(self.lines.len());
		let pending = (self.echoed_lines..until).map(|index| (index + 1, self.lines[index])).collect();
		self.echoed_lines = self.echoed_lines.max(until);
		pending
	}

	/// Source lines that have not been handed out yet
	pub fn remaining_lines(&mut self) -> Vec<(usize, &'source str)> {
		let pending = (self.echoed_lines..self.lines.len())
			.map(|index| (index + 1, self.lines[index]))
			.collect();
		self.echoed_lines = self.lines.len();
		pending
	}
}

impl ScanCursor for Scanner<'_> {
	fn buffer_offset(&self) -> usize {
		self.column() + BUFFER_OFFSET_LEAD
	}

	fn truncate_token(&mut self) {
		self.token_text.clear();
	}
}
