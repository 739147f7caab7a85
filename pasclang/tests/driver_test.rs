use pasclang::driver::tokenize;
use pasclang::error_reporter::ErrorReporter;
use pasclang::lexer::Scanner;
use pasclang::listing::Printer;
use pasclang::CompilerError;
use rstest::*;

fn scan(source: &str, max_errors: usize) -> (Result<pasclang::driver::ScanSummary, CompilerError>, ErrorReporter, String) {
	let mut scanner = Scanner::new("test.pas", source);
	let mut reporter = ErrorReporter::with_max_errors(max_errors);
	let mut printer = Printer::plain(Vec::new());
	let result = tokenize(&mut scanner, &mut reporter, &mut printer);
	let output = String::from_utf8(printer.into_inner()).expect("utf-8 output");
	(result, reporter, output)
}

#[test]
fn begin_end_terminates_normally() {
	let (result, reporter, output) = scan("BEGIN END.", 25);
	let summary = result.expect("no abort");
	assert!(summary.terminated);
	assert_eq!(summary.tokens, 3);
	assert_eq!(summary.errors, 0);
	assert_eq!(reporter.error_count(), 0);
	assert!(!output.contains("ERROR"));
}

#[rstest]
#[case("BEGIN x := 1")]
#[case("PROGRAM p; BEGIN IF a THEN")]
#[case("")]
#[case("BEGIN { comment never closed . END.")]
fn truncated_source_reports_end_of_file_once(#[case] source: &str) {
	let (result, reporter, output) = scan(source, 25);
	let summary = result.expect("no abort");
	assert!(!summary.terminated);
	assert_eq!(summary.errors, 1);
	assert_eq!(reporter.error_count(), 1);
	assert_eq!(output.matches(" *** ERROR: Unexpected end of file.").count(), 1);
	assert_eq!(output.matches("^\n").count(), 1);
}

#[test]
fn caret_points_at_offending_token() {
	let (_, _, output) = scan("BEGIN x := 9999999 END.", 25);
	let lines: Vec<&str> = output.lines().collect();
	let caret = lines.iter().position(|line| line.ends_with('^')).unwrap();
	assert_eq!(lines[caret], format!("{}^", " ".repeat("BEGIN x := ".len())));
	assert_eq!(lines[caret + 1], " *** ERROR: Integer literal out of range.");
}

#[rstest]
#[case::plain(false, 13)]
#[case::listing(true, 21)]
fn caret_follows_tab_stops(#[case] listing: bool, #[case] padding: usize) {
	let mut scanner = Scanner::new("test.pas", "BEGIN\n\tx := 99999\nEND.");
	let mut reporter = ErrorReporter::with_max_errors(25);
	let mut printer = if listing {
		Printer::listing_with_date(Vec::new(), "test.pas", "today")
	}
	else {
		Printer::plain(Vec::new())
	};
	tokenize(&mut scanner, &mut reporter, &mut printer).expect("no abort");
	let output = String::from_utf8(printer.into_inner()).expect("utf-8 output");

	let caret = output.lines().find(|line| line.ends_with('^')).unwrap();
	assert_eq!(caret, format!("{}^", " ".repeat(padding)));
	if listing {
		// Terminal rendering of the echoed line: prefix + tab expanded to column 16
		let echoed = output.lines().find(|line| line.starts_with("   2 0: ")).unwrap();
		assert_eq!(echoed, "   2 0: \tx := 99999");
		let rendered = format!("{}{}x := ", "   2 0: ", " ".repeat(8));
		assert_eq!(rendered.len(), padding);
	}
}

#[rstest]
#[case::below_limit(3, 3, false)]
#[case::just_over_limit(3, 4, true)]
#[case::zero_tolerance(0, 1, true)]
fn error_limit(#[case] max_errors: usize, #[case] bad_tokens: usize, #[case] aborts: bool) {
	let source = format!("BEGIN {} END.", "? ".repeat(bad_tokens));
	let (result, reporter, output) = scan(&source, max_errors);
	assert_eq!(reporter.error_count(), bad_tokens);
	if aborts {
		assert!(matches!(result, Err(CompilerError::TooManySyntaxErrors)));
		assert!(output.ends_with("Too many syntax errors. Aborted.\n"));
		assert!(!output.contains(" >> END"));
	}
	else {
		let summary = result.expect("no abort");
		assert_eq!(summary.errors, bad_tokens);
		assert!(summary.terminated);
	}
}
