//! Command-line interface for piyathon sources
//! Translates keywords between the Thai and English forms and formats files.
//!
//! Usage:
//!   piyafmt format `<path>` [--write | --output `<file>`]   - Format a Thai-keyword file
//!   piyafmt to-standard `<path>` [--output `<file>`]        - Rewrite to English keywords
//!   piyafmt to-localized `<path>` [--output `<file>`]       - Rewrite to Thai keywords
//!   piyafmt scan `<path>` [--format simple|json]            - Dump lexical spans
//!   piyafmt keywords [--format simple|json]                 - List the keyword table
//!
//! `-` reads from standard input.

use clap::{Arg, ArgAction, ArgMatches, Command};
use piyathon_fmt::config::{Loader, PiyaConfig};
use piyathon_fmt::{scan, Error, KeywordTable, LineFormatter, Pipeline, Result};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

fn input_arg() -> Arg {
    Arg::new("path")
        .help("Path to the source file, or '-' for standard input")
        .required(true)
        .index(1)
}

fn output_arg() -> Arg {
    Arg::new("output")
        .long("output")
        .short('o')
        .help("Write the result to this file instead of standard output")
}

fn listing_format_arg() -> Arg {
    Arg::new("format")
        .long("format")
        .short('f')
        .help("Output format")
        .value_parser(["simple", "json"])
        .default_value("simple")
}

fn cli() -> Command {
    Command::new("piyafmt")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Keyword translation and formatting for Thai-keyword Python")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .global(true)
                .help("Configuration file layered over the defaults"),
        )
        .arg(
            Arg::new("keywords")
                .long("keywords")
                .short('k')
                .global(true)
                .help("Keyword table (.json, .yaml) replacing the built-in one"),
        )
        .arg(
            Arg::new("indent-width")
                .long("indent-width")
                .global(true)
                .value_parser(clap::value_parser!(u16).range(1..))
                .help("Spaces per indentation level"),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .global(true)
                .action(ArgAction::Count)
                .help("Increase log verbosity (PIYAFMT_LOG overrides)"),
        )
        .subcommand(
            Command::new("format")
                .about("Format a Thai-keyword source file")
                .arg(input_arg())
                .arg(output_arg().conflicts_with("write"))
                .arg(
                    Arg::new("write")
                        .long("write")
                        .short('w')
                        .action(ArgAction::SetTrue)
                        .help("Rewrite the input file in place"),
                ),
        )
        .subcommand(
            Command::new("to-standard")
                .about("Rewrite Thai keywords to English keywords")
                .arg(input_arg())
                .arg(output_arg()),
        )
        .subcommand(
            Command::new("to-localized")
                .about("Rewrite English keywords to Thai keywords")
                .arg(input_arg())
                .arg(output_arg()),
        )
        .subcommand(
            Command::new("scan")
                .about("Show the lexical spans of a source file")
                .arg(input_arg())
                .arg(listing_format_arg()),
        )
        .subcommand(
            Command::new("keywords")
                .about("List the active keyword table")
                .arg(listing_format_arg()),
        )
}

fn main() {
    let matches = cli().get_matches();
    init_logging(matches.get_count("verbose"));

    if let Err(e) = run(&matches) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbosity: u8) {
    let fallback = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_env("PIYAFMT_LOG").unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(matches: &ArgMatches) -> Result<PiyaConfig> {
    let mut loader = Loader::new();
    if let Some(path) = matches.get_one::<String>("config") {
        loader = loader.with_file(path);
    }
    if let Some(path) = matches.get_one::<String>("keywords") {
        loader = loader.set_override("keywords.table", path.as_str())?;
    }
    if let Some(width) = matches.get_one::<u16>("indent-width") {
        loader = loader.set_override("formatting.indent_width", i64::from(*width))?;
    }
    Ok(loader.build()?)
}

fn run(matches: &ArgMatches) -> Result<()> {
    let config = load_config(matches)?;
    let table = config.keyword_table()?;
    debug!(keywords = table.len(), "keyword table ready");

    match matches.subcommand() {
        Some(("format", sub)) => handle_format_command(sub, &config, &table),
        Some(("to-standard", sub)) => {
            let source = read_source(sub)?;
            let pipeline = Pipeline::new(&table);
            emit(sub, &pipeline.to_standard(&source))
        }
        Some(("to-localized", sub)) => {
            let source = read_source(sub)?;
            let pipeline = Pipeline::new(&table);
            emit(sub, &pipeline.to_localized(&source))
        }
        Some(("scan", sub)) => handle_scan_command(sub),
        Some(("keywords", sub)) => handle_keywords_command(sub, &table),
        _ => unreachable!(),
    }
}

/// Handle the format command
fn handle_format_command(sub: &ArgMatches, config: &PiyaConfig, table: &KeywordTable) -> Result<()> {
    let source = read_source(sub)?;
    let pipeline =
        Pipeline::new(table).with_formatter(LineFormatter::new(config.formatting.clone()));
    let formatted = pipeline.format_localized(&source)?;

    if sub.get_flag("write") {
        let path = input_path(sub).ok_or_else(|| Error::Write {
            path: PathBuf::from("-"),
            source: std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "--write needs a file path, not standard input",
            ),
        })?;
        if formatted != source {
            write_file(path, &formatted)?;
            info!(path = %path.display(), "reformatted");
        }
        return Ok(());
    }
    emit(sub, &formatted)
}

/// Handle the scan command
fn handle_scan_command(sub: &ArgMatches) -> Result<()> {
    let source = read_source(sub)?;
    let spans = scan(&source);
    let format = sub.get_one::<String>("format").map(String::as_str);

    let output = match format {
        Some("json") => serde_json::to_string_pretty(&spans).unwrap_or_default() + "\n",
        _ => spans
            .iter()
            .map(|span| {
                format!(
                    "{:>5}..{:<5} {:<9} {:?}\n",
                    span.range.start, span.range.end, span.kind, span.text
                )
            })
            .collect(),
    };
    print!("{}", output);
    Ok(())
}

/// Handle the keywords command
fn handle_keywords_command(sub: &ArgMatches, table: &KeywordTable) -> Result<()> {
    let entries = table.entries();
    let format = sub.get_one::<String>("format").map(String::as_str);

    match format {
        Some("json") => {
            println!("{}", serde_json::to_string_pretty(&entries).unwrap_or_default());
        }
        _ => {
            for entry in entries {
                println!("{:<12} {}", entry.standard, entry.localized);
            }
        }
    }
    Ok(())
}

/// The input file path, or `None` for standard input.
fn input_path(sub: &ArgMatches) -> Option<&Path> {
    sub.get_one::<String>("path")
        .filter(|p| p.as_str() != "-")
        .map(Path::new)
}

fn read_source(sub: &ArgMatches) -> Result<String> {
    match input_path(sub) {
        Some(path) => std::fs::read_to_string(path).map_err(|source| Error::Read {
            path: path.to_path_buf(),
            source,
        }),
        None => {
            let mut source = String::new();
            std::io::stdin()
                .read_to_string(&mut source)
                .map_err(|source| Error::Read {
                    path: PathBuf::from("-"),
                    source,
                })?;
            Ok(source)
        }
    }
}

fn write_file(path: &Path, contents: &str) -> Result<()> {
    std::fs::write(path, contents).map_err(|source| Error::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Write to `--output` if given, standard output otherwise.
fn emit(sub: &ArgMatches, contents: &str) -> Result<()> {
    match sub.get_one::<String>("output") {
        Some(path) => write_file(Path::new(path), contents),
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(contents.as_bytes())
                .and_then(|_| stdout.flush())
                .map_err(|source| Error::Write {
                    path: PathBuf::from("-"),
                    source,
                })
        }
    }
}
