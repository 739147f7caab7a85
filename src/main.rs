extern crate pasclang;
use clap::{command, value_parser, Arg, ArgAction};
use log::{debug, error};
use pasclang::error_reporter::MAX_SYNTAX_ERRORS;
use pasclang::utils::{self, RunOptions, XrefFormat};
use pasclang::{CompilerError, ProvidesCompilerDiagnostic};
use std::fs;
use std::io;
use std::io::Write;
use std::process;

fn open_output(path: Option<&String>) -> Result<Box<dyn Write>, CompilerError> {
	Ok(match path {
		None => Box::new(io::stdout()),
		Some(path) => Box::new(io::BufWriter::new(fs::File::create(path)?)),
	})
}

fn run(mode: &str, source: &str, options: &RunOptions, format: XrefFormat, output: Box<dyn Write>) -> Result<(), CompilerError> {
	let code = utils::read_input_from_file(source)?;
	match mode {
		"xref" => utils::cross_reference(&code, source, options, format, output),
		_ => utils::tokenize(&code, source, options, output).map(|summary| debug!("{:?}", summary)),
	}
}

fn main() -> miette::Result<()> {
	env_logger::init();

	let matches = command!()
		.arg(Arg::new("source").required(true).help("Pascal source file"))
		.arg(
			Arg::new("output")
				.short('o')
				.long("output")
				.help("Write output to this file instead of stdout"),
		)
		.arg(
			Arg::new("mode")
				.short('m')
				.long("mode")
				.help("Specify which action should be performed")
				.value_parser(["tokenize", "xref"])
				.default_value("tokenize"),
		)
		.arg(
			Arg::new("listing")
				.short('l')
				.long("listing")
				.action(ArgAction::SetTrue)
				.help("Print a paginated source listing"),
		)
		.arg(
			Arg::new("max-errors")
				.long("max-errors")
				.value_parser(value_parser!(usize))
				.help("Number of syntax errors tolerated before aborting (default: 25)"),
		)
		.arg(
			Arg::new("format")
				.long("format")
				.value_parser(["text", "json"])
				.default_value("text")
				.help("Cross reference output format"),
		)
		.get_matches();

	// Both are guaranteed by clap (required / default value)
	let source = matches.get_one::<String>("source").unwrap();
	let mode = matches.get_one::<String>("mode").unwrap();
	let format = match matches.get_one::<String>("format").map(String::as_str) {
		Some("json") => XrefFormat::Json,
		_ => XrefFormat::Text,
	};
	let options = RunOptions {
		listing: matches.get_flag("listing"),
		max_errors: matches
			.get_one::<usize>("max-errors")
			.copied()
			.unwrap_or(MAX_SYNTAX_ERRORS),
	};

	let result = open_output(matches.get_one::<String>("output"))
		.and_then(|output| run(mode, source, &options, format, output));
	match result {
		Ok(()) => Ok(()),
		Err(CompilerError::TooManySyntaxErrors) => {
			error!("{}: too many syntax errors", source);
			process::exit(CompilerError::TooManySyntaxErrors.exit_status());
		},
		Err(err) => Err(err.to_miette_report()),
	}
}
