//! Command-line interface for scad-ast
//! Parses a source file (or standard input) and writes its syntax tree in a serialized format.
//!
//! Usage:
//!   scad-ast [INPUT] [--grammar `<name>`] [--output `<file>`] [--pretty] [--format `<format>`]
//!   scad-ast --list-grammars

use std::fs;
use std::io::{self, Write};
use std::process;

use clap::{Arg, ArgAction, ArgMatches, Command};
use scad_ast::scad::pipeline::{OutputSettings, PipelineError, PipelineExecutor};
use tracing_subscriber::EnvFilter;

fn main() {
    let matches = Command::new("scad-ast")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Parse OpenSCAD-style sources into a serialized syntax tree")
        .arg(
            Arg::new("input")
                .help("Source file to parse; '-' or absent reads standard input")
                .index(1),
        )
        .arg(
            Arg::new("grammar")
                .long("grammar")
                .short('g')
                .help("Grammar to parse with")
                .default_value("openscad"),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .short('o')
                .help("File to write the tree to; standard output when absent"),
        )
        .arg(
            Arg::new("pretty")
                .long("pretty")
                .short('p')
                .help("Pretty-print the output")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output format (e.g., 'json', 'yaml')"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("YAML file with output settings; flags override it"),
        )
        .arg(
            Arg::new("list-grammars")
                .long("list-grammars")
                .help("List available grammars and exit")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log pipeline stages to stderr (-vv for every reduction)")
                .action(ArgAction::Count),
        )
        .get_matches();

    init_tracing(matches.get_count("verbose"));

    let executor = PipelineExecutor::new();
    if matches.get_flag("list-grammars") {
        handle_list_grammars_command(&executor);
        return;
    }

    if let Err(e) = handle_parse_command(&executor, &matches) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn init_tracing(verbosity: u8) {
    let filter = match verbosity {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("scad_ast=debug"),
        _ => EnvFilter::new("scad_ast=trace"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Errors surfaced by the command line
enum CliError {
    Io(String),
    Pipeline(PipelineError),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Io(msg) => write!(f, "{}", msg),
            CliError::Pipeline(err) => write!(f, "{}", err),
        }
    }
}

impl From<PipelineError> for CliError {
    fn from(err: PipelineError) -> Self {
        CliError::Pipeline(err)
    }
}

fn settings_from(matches: &ArgMatches) -> Result<OutputSettings, PipelineError> {
    let mut settings = match matches.get_one::<String>("config") {
        Some(path) => OutputSettings::from_yaml_file(path)?,
        None => OutputSettings::default(),
    };
    if matches.get_flag("pretty") {
        settings.pretty = true;
    }
    if let Some(format) = matches.get_one::<String>("format") {
        settings.format = format.clone();
    }
    Ok(settings)
}

fn read_source(input: Option<&String>) -> Result<String, CliError> {
    match input.map(String::as_str) {
        None | Some("-") => io::read_to_string(io::stdin())
            .map_err(|e| CliError::Io(format!("Error reading standard input: {}", e))),
        Some(path) => fs::read_to_string(path)
            .map_err(|e| CliError::Io(format!("Error reading file {}: {}", path, e))),
    }
}

/// Parse and serialize; nothing is written unless every step succeeds
fn handle_parse_command(executor: &PipelineExecutor, matches: &ArgMatches) -> Result<(), CliError> {
    let settings = settings_from(matches)?;
    let source = read_source(matches.get_one::<String>("input"))?;
    let grammar = matches
        .get_one::<String>("grammar")
        .map(String::as_str)
        .unwrap_or("openscad");

    let mut output = executor.execute_and_serialize(grammar, &source, &settings)?;
    // YAML already ends with a newline, JSON does not
    if !output.ends_with('\n') {
        output.push('\n');
    }

    match matches.get_one::<String>("output") {
        Some(path) => fs::write(path, output)
            .map_err(|e| CliError::Io(format!("Error writing file {}: {}", path, e))),
        None => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(output.as_bytes())
                .map_err(|e| CliError::Io(format!("Error writing output: {}", e)))
        }
    }
}

fn handle_list_grammars_command(executor: &PipelineExecutor) {
    println!("Available grammars:\n");
    for config in executor.grammars().list_all() {
        println!("  {}", config.name);
        println!("    {}", config.description);
    }
}
