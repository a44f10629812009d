//! Command-line interface for typlex
//! This binary tokenizes, highlights and spell-checks Typst-like markup files.
//!
//! Usage:
//!   typlex tokens `<path>` [--sentinels]               - Print the token stream
//!   typlex highlight `<path>` [--coalesce] [--lines]   - Print highlighting markers
//!   typlex words `<path>` [--dictionary `<file>`]      - Print prose words, or misspelled ones
//!
//! Global options: --format text|json|yaml, --config `<file>`, -v (repeatable).
//! A path of `-` reads standard input.

mod error;
mod output;

use clap::{Arg, ArgAction, ArgMatches, Command};
use error::CliError;
use log::{debug, info};
use output::MarkerRow;
use std::io::{self, Read, Write};
use typlex_config::{Loader, TyplexConfig};
use typlex_parser::typlex::highlighting::CoalescingListener;
use typlex_parser::typlex::spelling::{find_misspellings, prose_words, WordList, WordSpan};
use typlex_parser::{tokenize, HighlightingListener, Parser};

const LOCAL_CONFIG: &str = "typlex.toml";

fn build_cli() -> Command {
    let path_arg = || {
        Arg::new("path")
            .help("Path to the markup file, or - for standard input")
            .required(true)
            .index(1)
    };

    Command::new("typlex")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for tokenizing and highlighting Typst-like markup")
        .arg_required_else_help(true)
        .subcommand_required(true)
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output format")
                .value_parser(["text", "json", "yaml"])
                .global(true),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("Configuration file layered over the defaults")
                .global(true),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Increase logging verbosity")
                .action(ArgAction::Count)
                .global(true),
        )
        .subcommand(
            Command::new("tokens")
                .about("Print the token stream of a file")
                .arg(path_arg())
                .arg(
                    Arg::new("sentinels")
                        .long("sentinels")
                        .help("Include the BEGIN and TEXT_END tokens")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("highlight")
                .about("Print the highlighting markers of a file")
                .arg(path_arg())
                .arg(
                    Arg::new("coalesce")
                        .long("coalesce")
                        .help("Merge overlapping markers of the same kind")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("lines")
                        .long("lines")
                        .help("Split markers per line, as line:column spans")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("words")
                .about("Print the prose words of a file, or the misspelled ones")
                .arg(path_arg())
                .arg(
                    Arg::new("dictionary")
                        .long("dictionary")
                        .short('d')
                        .help("Word list, one word per line; only unknown words are printed"),
                ),
        )
}

fn main() {
    let matches = build_cli().get_matches();
    init_logging(matches.get_count("verbose"));

    if let Err(err) = run(&matches) {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn run(matches: &ArgMatches) -> Result<(), CliError> {
    let config = load_config(matches)?;
    let rendered = match matches.subcommand() {
        Some(("tokens", sub)) => handle_tokens_command(sub, &config)?,
        Some(("highlight", sub)) => handle_highlight_command(sub, &config)?,
        Some(("words", sub)) => handle_words_command(sub, &config)?,
        _ => unreachable!("clap requires a subcommand"),
    };

    let mut stdout = io::stdout().lock();
    stdout.write_all(rendered.as_bytes())?;
    stdout.flush()?;
    Ok(())
}

/// Defaults, then `typlex.toml` in the working directory or `--config`, then flags.
fn load_config(matches: &ArgMatches) -> Result<TyplexConfig, CliError> {
    let mut loader = match matches.get_one::<String>("config") {
        Some(path) => {
            debug!("loading configuration from {path}");
            Loader::new().with_file(path)
        }
        None => Loader::new().with_optional_file(LOCAL_CONFIG),
    };

    if let Some(format) = matches.get_one::<String>("format") {
        loader = loader.set_override("output.format", format.as_str())?;
    }
    if let Some((_, sub)) = matches.subcommand() {
        for (flag, key) in [
            ("sentinels", "tokens.include_sentinels"),
            ("coalesce", "highlight.coalesce"),
        ] {
            if sub.try_get_one::<bool>(flag).ok().flatten() == Some(&true) {
                loader = loader.set_override(key, true)?;
            }
        }
    }

    let config = loader.build()?;
    debug!("rendering as {}", config.output.format);
    Ok(config)
}

fn read_source(path: &str) -> Result<String, CliError> {
    let read = if path == "-" {
        let mut text = String::new();
        io::stdin().read_to_string(&mut text).map(|_| text)
    } else {
        std::fs::read_to_string(path)
    };
    let text = read.map_err(|source| CliError::Read {
        path: path.to_string(),
        source,
    })?;
    info!("read {} bytes from {path}", text.len());
    Ok(text)
}

fn source_arg(matches: &ArgMatches) -> Result<String, CliError> {
    let path = matches
        .get_one::<String>("path")
        .map(String::as_str)
        .unwrap_or("-");
    read_source(path)
}

/// Handle the tokens command
fn handle_tokens_command(matches: &ArgMatches, config: &TyplexConfig) -> Result<String, CliError> {
    let text = source_arg(matches)?;
    let tokens: Vec<_> = tokenize(&text)
        .into_iter()
        .filter(|t| config.tokens.include_sentinels || !t.kind.is_sentinel())
        .collect();
    debug!("{} tokens", tokens.len());
    output::render(
        &tokens,
        config.output.format,
        config.output.pretty,
        output::token_line,
    )
}

/// Handle the highlight command
fn handle_highlight_command(
    matches: &ArgMatches,
    config: &TyplexConfig,
) -> Result<String, CliError> {
    let text = source_arg(matches)?;
    let format = config.output.format;
    let pretty = config.output.pretty;

    if matches.get_flag("lines") {
        let spans = Parser::new(&text, CoalescingListener::new())
            .parse()
            .split_lines(&text);
        return output::render(&spans, format, pretty, output::line_span_line);
    }

    let markers = if config.highlight.coalesce {
        Parser::new(&text, CoalescingListener::new())
            .parse()
            .finish()
    } else {
        Parser::new(&text, HighlightingListener::new())
            .parse()
            .sorted()
    };
    debug!("{} markers", markers.len());

    let rows: Vec<MarkerRow<'_>> = markers
        .into_iter()
        .map(|marker| MarkerRow {
            marker,
            text: config
                .highlight
                .include_text
                .then(|| marker.text(&text))
                .flatten(),
        })
        .collect();
    output::render(&rows, format, pretty, output::marker_line)
}

/// Handle the words command
fn handle_words_command(matches: &ArgMatches, config: &TyplexConfig) -> Result<String, CliError> {
    let text = source_arg(matches)?;
    let markers = Parser::new(&text, HighlightingListener::new())
        .parse()
        .sorted();
    let min_length = config.spelling.min_length;
    let words: Vec<WordSpan<'_>> = prose_words(&text, &markers)
        .into_iter()
        .filter(|w| w.word.chars().count() >= min_length)
        .collect();

    let words = match matches.get_one::<String>("dictionary") {
        Some(path) => {
            let list = WordList::parse(&read_source(path)?);
            debug!("{} dictionary words from {path}", list.len());
            find_misspellings(&words, &list).into_vec()
        }
        None => words,
    };
    output::render(
        &words,
        config.output.format,
        config.output.pretty,
        output::word_line,
    )
}
