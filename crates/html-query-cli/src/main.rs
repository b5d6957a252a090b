//! `hq` - command-line HTML processor.
//!
//! Reads an HTML document from a file or stdin, matches a CSS selector
//! against it, and prints one result per matched node: its rendered text,
//! its raw HTML, or the value of one of its attributes.

use std::fs;
use std::io::{self, Read, Write};
use std::process::ExitCode;

use clap::{ArgAction, Parser, ValueEnum};
use html_query::{FormatBinding, StyleMode, query_attr, query_html, query_text};

#[derive(Parser)]
#[command(
    name = "hq",
    version,
    about = "hq (html query) - command-line HTML processor",
    after_help = "Examples:\n  \
        curl -sSL https://example.com | hq a data\n  \
        curl -sSL https://example.com | hq a attr href\n  \
        hq -f page.html p text md\n  \
        hq -F a '[{}]' body text"
)]
struct Cli {
    /// File to read, or "-" for stdin
    #[arg(short, long, default_value = "-")]
    file: String,

    /// Delimiter printed after each result
    #[arg(short, long, default_value = "\n")]
    delimiter: String,

    /// Use NUL as the result delimiter
    #[arg(short = '0', long = "null", conflicts_with = "delimiter")]
    null: bool,

    /// Wrap text rendered for nodes matching SELECTOR in TEMPLATE
    /// ("{}" marks where the text goes); repeatable, first match wins
    #[arg(
        short = 'F',
        long = "format",
        num_args = 2,
        value_names = ["SELECTOR", "TEMPLATE"],
        action = ArgAction::Append
    )]
    format: Vec<String>,

    /// CSS selector to match against
    selector: String,

    /// Processing mode
    #[arg(value_enum)]
    mode: Mode,

    /// Formatting for text mode (plain|ansi|md), attribute name for attr mode
    mode_arg: Option<String>,
}

#[derive(Clone, Copy, ValueEnum)]
enum Mode {
    /// Raw HTML of matching elements
    Data,
    /// Inner text of matching elements
    Text,
    /// Attribute value of matching elements
    Attr,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("hq: {message}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), String> {
    // Resolve everything that can fail on bad usage before touching input.
    let bindings: Vec<FormatBinding> = cli
        .format
        .chunks(2)
        .map(|pair| FormatBinding::new(pair[0].as_str(), pair[1].as_str()))
        .collect();

    let style = match cli.mode {
        Mode::Text => match cli.mode_arg.as_deref() {
            None => StyleMode::Plain,
            Some(name) => name.parse().map_err(|err| format!("{err}"))?,
        },
        Mode::Data | Mode::Attr => StyleMode::Plain,
    };

    if matches!(cli.mode, Mode::Attr) && cli.mode_arg.is_none() {
        return Err("no attribute name given".to_string());
    }

    let input = read_input(&cli.file).map_err(|err| format!("failed reading {:?}: {err}", cli.file))?;

    let results = match cli.mode {
        Mode::Data => query_html(&input, &cli.selector),
        Mode::Text => query_text(&input, &cli.selector, style, &bindings),
        Mode::Attr => query_attr(&input, &cli.selector, cli.mode_arg.as_deref().unwrap_or_default()),
    }
    .map_err(|err| format!("{err}"))?;

    let delimiter = if cli.null { "\0" } else { cli.delimiter.as_str() };
    let mut stdout = io::stdout().lock();
    for result in results {
        write!(stdout, "{result}{delimiter}").map_err(|err| format!("failed writing output: {err}"))?;
    }
    stdout.flush().map_err(|err| format!("failed writing output: {err}"))?;
    Ok(())
}

/// Reads the whole input and decodes it to UTF-8.
///
/// Decoding sniffs a byte-order mark and replaces malformed sequences
/// instead of failing, so real-world pages always parse.
fn read_input(path: &str) -> io::Result<String> {
    let bytes = if path == "-" {
        let mut buffer = Vec::new();
        io::stdin().lock().read_to_end(&mut buffer)?;
        buffer
    } else {
        fs::read(path)?
    };
    let (decoded, _, _) = encoding_rs::UTF_8.decode(&bytes);
    Ok(decoded.into_owned())
}
