use crate::ErrorCode;

/// Largest integer literal accepted by the scanner
pub const MAX_INTEGER: i32 = 32767;

/// Maximum number of significant mantissa digits in a numeric literal
pub const MAX_DIGIT_COUNT: usize = 20;

/// Maximum decimal exponent magnitude of a real literal
pub const MAX_EXPONENT: i32 = 37;

/// Value of an unsigned numeric literal
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum NumberLiteral {
	Integer(i32),
	Real(f64),
}

/// Number scanning failure - the code to report plus the number of
/// characters past the leading digits that belong to the malformed literal
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NumberScanError {
	pub code: ErrorCode,
	pub consumed: usize,
}

impl NumberScanError {
	fn new(code: ErrorCode, consumed: usize) -> Self {
		Self { code, consumed }
	}
}

fn leading_digits(s: &str) -> usize {
	s.bytes().take_while(u8::is_ascii_digit).count()
}

/// Mantissa digits, not counting leading zeros
fn significant_digits(whole: &str, fraction: &str) -> usize {
	let whole = whole.trim_start_matches('0');
	if whole.is_empty() {
		fraction.trim_start_matches('0').len()
	}
	else {
		whole.len() + fraction.len()
	}
}

/// Power of ten of the first significant digit (`None` for zero)
fn decimal_magnitude(whole: &str, fraction: &str, exponent: i64) -> Option<i64> {
	let significant_whole = whole.trim_start_matches('0').len() as i64;
	if significant_whole > 0 {
		return Some(exponent.saturating_add(significant_whole - 1));
	}
	let zeros = fraction.bytes().take_while(|&digit| digit == b'0').count();
	if zeros == fraction.len() {
		return None;
	}
	Some(exponent.saturating_sub(zeros as i64 + 1))
}

/// Completes a numeric literal
///
/// `whole` holds the leading digits already matched, `rest` the source text
/// that follows them. On success returns the value together with the number
/// of characters of `rest` that are part of the literal. A dot directly
/// followed by another dot is left alone, so `1..5` scans as a subrange.
pub fn scan_number(whole: &str, rest: &str) -> Result<(NumberLiteral, usize), NumberScanError> {
	let mut consumed = 0;
	let mut fraction = "";
	let mut exponent: i64 = 0;
	let mut is_real = false;

	if rest.starts_with('.') && !rest.starts_with("..") {
		is_real = true;
		consumed = 1;
		let len = leading_digits(&rest[consumed..]);
		if len == 0 {
			return Err(NumberScanError::new(ErrorCode::InvalidFraction, consumed));
		}
		fraction = &rest[consumed..consumed + len];
		consumed += len;
	}

	if rest[consumed..].starts_with(['e', 'E']) {
		is_real = true;
		consumed += 1;
		let negative = rest[consumed..].starts_with('-');
		if negative || rest[consumed..].starts_with('+') {
			consumed += 1;
		}
		let len = leading_digits(&rest[consumed..]);
		if len == 0 {
			return Err(NumberScanError::new(ErrorCode::InvalidExponent, consumed));
		}
		exponent = rest[consumed..consumed + len]
			.bytes()
			.fold(0i64, |acc, digit| acc.saturating_mul(10).saturating_add(i64::from(digit - b'0')));
		if negative {
			exponent = -exponent;
		}
		consumed += len;
	}

	if significant_digits(whole, fraction) > MAX_DIGIT_COUNT {
		return Err(NumberScanError::new(ErrorCode::TooManyDigits, consumed));
	}

	if !is_real {
		let value = whole
			.bytes()
			.fold(0i64, |acc, digit| acc.saturating_mul(10).saturating_add(i64::from(digit - b'0')));
		return match i32::try_from(value) {
			Ok(value) if value <= MAX_INTEGER => Ok((NumberLiteral::Integer(value), consumed)),
			_ => Err(NumberScanError::new(ErrorCode::IntegerOutOfRange, consumed)),
		};
	}

	if decimal_magnitude(whole, fraction, exponent).is_some_and(|m| m.abs() > i64::from(MAX_EXPONENT)) {
		return Err(NumberScanError::new(ErrorCode::RealOutOfRange, consumed));
	}
	let fraction = if fraction.is_empty() { "0" } else { fraction };
	let value: f64 = format!("{}.{}e{}", whole, fraction, exponent)
		.parse()
		.map_err(|_| NumberScanError::new(ErrorCode::RealOutOfRange, consumed))?;
	Ok((NumberLiteral::Real(value), consumed))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn plain_integer() {
		assert_eq!(scan_number("42", " ;"), Ok((NumberLiteral::Integer(42), 0)));
		assert_eq!(scan_number("32767", ""), Ok((NumberLiteral::Integer(32767), 0)));
	}

	#[test]
	fn integer_limit() {
		assert_eq!(
			scan_number("32768", ""),
			Err(NumberScanError::new(ErrorCode::IntegerOutOfRange, 0))
		);
	}

	#[test]
	fn subrange_dots_end_the_number() {
		assert_eq!(scan_number("1", "..10"), Ok((NumberLiteral::Integer(1), 0)));
	}

	#[test]
	fn reals() {
		assert_eq!(scan_number("3", ".25 "), Ok((NumberLiteral::Real(3.25), 3)));
		assert_eq!(scan_number("5", "e-1"), Ok((NumberLiteral::Real(0.5), 3)));
		assert_eq!(scan_number("1", ".5E+2;"), Ok((NumberLiteral::Real(150.0), 5)));
	}

	#[test]
	fn malformed_fraction_and_exponent() {
		assert_eq!(
			scan_number("3", ". "),
			Err(NumberScanError::new(ErrorCode::InvalidFraction, 1))
		);
		assert_eq!(
			scan_number("3", "e+x"),
			Err(NumberScanError::new(ErrorCode::InvalidExponent, 2))
		);
	}

	#[test]
	fn digit_count_limit() {
		let digits = "1".repeat(MAX_DIGIT_COUNT + 1);
		assert_eq!(
			scan_number(&digits, ""),
			Err(NumberScanError::new(ErrorCode::TooManyDigits, 0))
		);
	}

	#[test]
	fn leading_zeros_are_not_significant() {
		assert_eq!(
			scan_number("00000000000000000000001", ""),
			Ok((NumberLiteral::Integer(1), 0))
		);
		let fraction = format!(".{}5", "0".repeat(MAX_DIGIT_COUNT));
		assert_eq!(
			scan_number("0", &fraction),
			Ok((NumberLiteral::Real(5e-21), fraction.len()))
		);
		let fraction = format!(".{}", "1".repeat(MAX_DIGIT_COUNT));
		assert_eq!(
			scan_number("1", &fraction),
			Err(NumberScanError::new(ErrorCode::TooManyDigits, fraction.len()))
		);
	}

	#[test]
	fn real_range() {
		assert!(scan_number("1", "e37").is_ok());
		assert!(scan_number("1", "e-37").is_ok());
		assert!(scan_number("0", ".01e-35").is_ok());
		assert!(scan_number("0", ".0e99").is_ok());
		assert_eq!(
			scan_number("0", ".01e-36"),
			Err(NumberScanError::new(ErrorCode::RealOutOfRange, 7))
		);
		assert_eq!(
			scan_number("1", "e38"),
			Err(NumberScanError::new(ErrorCode::RealOutOfRange, 3))
		);
		assert_eq!(
			scan_number("1", "e99999999999999999999"),
			Err(NumberScanError::new(ErrorCode::RealOutOfRange, 21))
		);
	}
}
