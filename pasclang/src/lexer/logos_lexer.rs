use super::id_table::{IdTable, IdTableKey};
use super::number_scanner::{scan_number, NumberLiteral};
use super::{KeywordKind, PunctuatorKind};
use crate::ErrorCode;
use logos::{Logos, Skip};

/// Finishes a numeric literal started by its leading digits
fn scan_number_token(lex: &mut logos::Lexer<RawToken>) -> Option<NumberLiteral> {
	match scan_number(lex.slice(), lex.remainder()) {
		Ok((value, consumed)) => {
			lex.bump(consumed);
			Some(value)
		},
		Err(err) => {
			lex.bump(err.consumed);
			lex.extras.last_err = Some(err.code);
			None
		},
	}
}

/// Skips a `{ ... }` comment (up to the end of input if unterminated)
fn skip_brace_comment(lex: &mut logos::Lexer<RawToken>) -> Skip {
	match lex.remainder().find('}') {
		Some(offset) => lex.bump(offset + 1),
		None => lex.bump(lex.remainder().len()),
	}
	Skip
}

/// Skips a `(* ... *)` comment (up to the end of input if unterminated)
fn skip_paren_comment(lex: &mut logos::Lexer<RawToken>) -> Skip {
	match lex.remainder().find("*)") {
		Some(offset) => lex.bump(offset + 2),
		None => lex.bump(lex.remainder().len()),
	}
	Skip
}

/// Registers the lowercase spelling of an identifier
fn register_identifier(lex: &mut logos::Lexer<RawToken>) -> IdTableKey {
	let name = lex.slice().to_ascii_lowercase();
	lex.extras.id_table.insert_or_get(&name)
}

#[derive(Logos, Debug, Clone, Copy, PartialEq)]
#[logos(extras = ScannerContext)]
#[logos(skip r"[ \t\r\n\f]+")]
pub(super) enum RawToken {
	#[token("{", skip_brace_comment)]
	#[token("(*", skip_paren_comment)]
	Comment,

	#[regex(r"[0-9]+", scan_number_token)]
	Number(NumberLiteral),

	#[regex(r"'([^'\n]|'')*'")]
	StringLiteral,

	#[regex(r"[a-zA-Z][a-zA-Z0-9_]*", register_identifier)]
	Identifier(IdTableKey),

	#[token("and",       |_| KeywordKind::And,       ignore(ascii_case))]
	#[token("array",     |_| KeywordKind::Array,     ignore(ascii_case))]
	#[token("begin",     |_| KeywordKind::Begin,     ignore(ascii_case))]
	#[token("case",      |_| KeywordKind::Case,      ignore(ascii_case))]
	#[token("const",     |_| KeywordKind::Const,     ignore(ascii_case))]
	#[token("div",       |_| KeywordKind::Div,       ignore(ascii_case))]
	#[token("do",        |_| KeywordKind::Do,        ignore(ascii_case))]
	#[token("downto",    |_| KeywordKind::Downto,    ignore(ascii_case))]
	#[token("else",      |_| KeywordKind::Else,      ignore(ascii_case))]
	#[token("end",       |_| KeywordKind::End,       ignore(ascii_case))]
	#[token("file",      |_| KeywordKind::File,      ignore(ascii_case))]
	#[token("for",       |_| KeywordKind::For,       ignore(ascii_case))]
	#[token("function",  |_| KeywordKind::Function,  ignore(ascii_case))]
	#[token("goto",      |_| KeywordKind::Goto,      ignore(ascii_case))]
	#[token("if",        |_| KeywordKind::If,        ignore(ascii_case))]
	#[token("in",        |_| KeywordKind::In,        ignore(ascii_case))]
	#[token("label",     |_| KeywordKind::Label,     ignore(ascii_case))]
	#[token("mod",       |_| KeywordKind::Mod,       ignore(ascii_case))]
	#[token("nil",       |_| KeywordKind::Nil,       ignore(ascii_case))]
	#[token("not",       |_| KeywordKind::Not,       ignore(ascii_case))]
	#[token("of",        |_| KeywordKind::Of,        ignore(ascii_case))]
	#[token("or",        |_| KeywordKind::Or,        ignore(ascii_case))]
	#[token("packed",    |_| KeywordKind::Packed,    ignore(ascii_case))]
	#[token("procedure", |_| KeywordKind::Procedure, ignore(ascii_case))]
	#[token("program",   |_| KeywordKind::Program,   ignore(ascii_case))]
	#[token("record",    |_| KeywordKind::Record,    ignore(ascii_case))]
	#[token("repeat",    |_| KeywordKind::Repeat,    ignore(ascii_case))]
	#[token("set",       |_| KeywordKind::Set,       ignore(ascii_case))]
	#[token("then",      |_| KeywordKind::Then,      ignore(ascii_case))]
	#[token("to",        |_| KeywordKind::To,        ignore(ascii_case))]
	#[token("type",      |_| KeywordKind::Type,      ignore(ascii_case))]
	#[token("until",     |_| KeywordKind::Until,     ignore(ascii_case))]
	#[token("var",       |_| KeywordKind::Var,       ignore(ascii_case))]
	#[token("while",     |_| KeywordKind::While,     ignore(ascii_case))]
	#[token("with",      |_| KeywordKind::With,      ignore(ascii_case))]
	Keyword(KeywordKind),

	#[token("^",  |_| PunctuatorKind::Caret)]
	#[token("*",  |_| PunctuatorKind::Asterisk)]
	#[token("(",  |_| PunctuatorKind::LPar)]
	#[token(")",  |_| PunctuatorKind::RPar)]
	#[token("-",  |_| PunctuatorKind::Minus)]
	#[token("+",  |_| PunctuatorKind::Plus)]
	#[token("=",  |_| PunctuatorKind::Equal)]
	#[token("[",  |_| PunctuatorKind::LBracket)]
	#[token("]",  |_| PunctuatorKind::RBracket)]
	#[token(":",  |_| PunctuatorKind::Colon)]
	#[token(";",  |_| PunctuatorKind::Semicolon)]
	#[token("<",  |_| PunctuatorKind::Less)]
	#[token(">",  |_| PunctuatorKind::Greater)]
	#[token(",",  |_| PunctuatorKind::Comma)]
	#[token(".",  |_| PunctuatorKind::Period)]
	#[token("/",  |_| PunctuatorKind::Slash)]
	#[token(":=", |_| PunctuatorKind::ColonEqual)]
	#[token("<=", |_| PunctuatorKind::LessEqual)]
	#[token(">=", |_| PunctuatorKind::GreaterEqual)]
	#[token("<>", |_| PunctuatorKind::NotEqual)]
	#[token("..", |_| PunctuatorKind::DotDot)]
	Punctuator(PunctuatorKind),
}

/// Data shared with the logos callbacks
pub(super) struct ScannerContext {
	/// Interned identifier names
	pub(super) id_table: IdTable,

	/// Error raised by the last callback (taken by the scanner)
	pub(super) last_err: Option<ErrorCode>,
}

impl ScannerContext {
	pub(super) fn new() -> Self {
		Self {
			id_table: IdTable::new(),
			last_err: None,
		}
	}
}
