use thiserror::Error;

/// Syntax and semantic error catalog
///
/// The discriminant of each variant is its index in the message catalog and
/// doubles as the value reported to the operating system when compilation is
/// aborted (negated).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Error)]
#[repr(i32)]
pub enum ErrorCode {
	#[error("No Error")]
	NoError = 0,
	#[error("Syntax Error")]
	SyntaxError,
	#[error("Too Many Syntax Errors")]
	TooManySyntaxErrors,
	#[error("Failed to open source file")]
	FailedSourceFileOpen,
	#[error("Unexpected end of file")]
	UnexpectedEndOfFile,
	#[error("Invalid number")]
	InvalidNumber,
	#[error("Invalid fraction")]
	InvalidFraction,
	#[error("Invalid exponent")]
	InvalidExponent,
	#[error("Too many digits")]
	TooManyDigits,
	#[error("Real literal out of range")]
	RealOutOfRange,
	#[error("Integer literal out of range")]
	IntegerOutOfRange,
	#[error("Missing right parenthesis")]
	MissingRightParen,
	#[error("Invalid expression")]
	InvalidExpression,
	#[error("Invalid assignment statement")]
	InvalidAssignment,
	#[error("Missing identifier")]
	MissingIdentifier,
	#[error("Missing :=")]
	MissingColonEqual,
	#[error("Undefined identifier")]
	UndefinedIdentifier,
	#[error("Stack overflow")]
	StackOverflow,
	#[error("Invalid statement")]
	InvalidStatement,
	#[error("Unexpected token")]
	UnexpectedToken,
	#[error("Missing ; ")]
	MissingSemicolon,
	#[error("Missing DO")]
	MissingDo,
	#[error("Missing UNTIL")]
	MissingUntil,
	#[error("Missing THEN")]
	MissingThen,
	#[error("Invalid FOR control variable")]
	InvalidForControl,
	#[error("Missing OF")]
	MissingOf,
	#[error("Invalid constant")]
	InvalidConstant,
	#[error("Missing constant")]
	MissingConstant,
	#[error("Missing : ")]
	MissingColon,
	#[error("Missing END")]
	MissingEnd,
	#[error("Missing TO or DOWNTO")]
	MissingToOrDownto,
	#[error("Redefined identifier")]
	RedefinedIdentifier,
	#[error("Missing = ")]
	MissingEqual,
	#[error("Invalid type")]
	InvalidType,
	#[error("Not a type identifier")]
	NotATypeIdentifier,
	#[error("Invalid subrange type")]
	InvalidSubrangeType,
	#[error("Not a constant identifier")]
	NotAConstantIdentifier,
	#[error("Missing .. ")]
	MissingDotDot,
	#[error("Incompatible types")]
	IncompatibleTypes,
	#[error("Invalid assignment target")]
	InvalidTarget,
	#[error("Invalid identifier usage")]
	InvalidIdentifierUsage,
	#[error("Incompatible assignment")]
	IncompatibleAssignment,
	#[error("Min limit greater than max limit")]
	MinGtMax,
	#[error("Missing [ ")]
	MissingLeftBracket,
	#[error("Missing ] ")]
	MissingRightBracket,
	#[error("Invalid index type")]
	InvalidIndexType,
	#[error("Missing BEGIN")]
	MissingBegin,
	#[error("Missing period")]
	MissingPeriod,
	#[error("Too many subscripts")]
	TooManySubscripts,
	#[error("Invalid field")]
	InvalidField,
	#[error("Nesting too deep")]
	NestingTooDeep,
	#[error("Missing PROGRAM")]
	MissingProgram,
	#[error("Already specified in FORWARD")]
	AlreadyForwarded,
	#[error("Wrong number of actual parameters")]
	WrongNumberOfParams,
	#[error("Invalid VAR parameter")]
	InvalidVarParam,
	#[error("Missing variable")]
	MissingVariable,
	#[error("Code segment overflow")]
	CodeSegmentOverflow,
	#[error("Unimplemented feature")]
	UnimplementedFeature,
}

impl ErrorCode {
	/// Catalog index of this error
	pub fn code(self) -> i32 {
		self as i32
	}

	/// Process exit status used when this error aborts compilation
	pub fn exit_status(self) -> i32 {
		-self.code()
	}

	/// Whether reporting this error ends the compilation run
	pub fn is_fatal(self) -> bool {
		matches!(self, ErrorCode::TooManySyntaxErrors)
	}
}
