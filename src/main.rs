use clap::{Parser as ClapParser, ValueEnum};
use serde::Serialize;
use std::{fs, io::{self, Read, Write}, path::{Path, PathBuf}, process::ExitCode};
use thiserror::Error;
use armlex_lexer::Lexer;
use armlex_report::report;
use armlex_span::Spannable;
use armlex_token::{Category, Token};

#[derive(Debug, ClapParser)]
#[command(version, long_about = None)]
#[command(about = "Tokenize ARM assembly source into highlighting categories")]
pub struct Args {
    #[arg(value_name = "FILE", help = "input file name, read stdin if omitted")]
    input: Option<PathBuf>,
    #[arg(short, long, value_enum, default_value_t = Format::Plain, help = "token dump format")]
    format: Format,
    #[arg(long, help = "report malformed tokens instead of dumping the stream")]
    check: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    /// `start..end category "text"`, one token per line.
    Plain,
    /// An array of `{ text, category, start, end }` objects.
    Json,
}

#[derive(Debug, Error)]
enum CliError {
    #[error("failed to read {name}: {source}")]
    Read { name: String, source: io::Error },
    #[error("failed to write output: {0}")]
    Write(#[from] io::Error),
    #[error("failed to serialize tokens: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// A token as handed to the host.
#[derive(Debug, Serialize)]
struct TokenRecord<'src> {
    text: &'src str,
    category: Category,
    start: usize,
    end: usize,
}

impl<'src> From<&Token<'src>> for TokenRecord<'src> {
    fn from(token: &Token<'src>) -> Self {
        Self {
            text: token.text(),
            category: token.category(),
            start: token.start(),
            end: token.end(),
        }
    }
}

/// Read the whole input and return it with the name used in diagnostics.
fn read_input(path: Option<&Path>) -> Result<(String, String), CliError> {
    match path {
        Some(path) => {
            let name = path.display().to_string();
            match fs::read_to_string(path) {
                Ok(input) => Ok((name, input)),
                Err(source) => Err(CliError::Read { name, source }),
            }
        }
        None => {
            let mut input = String::new();
            match io::stdin().read_to_string(&mut input) {
                Ok(_) => Ok(("<stdin>".to_string(), input)),
                Err(source) => Err(CliError::Read { name: "<stdin>".to_string(), source }),
            }
        }
    }
}

fn dump<W: Write>(tokens: &[Token], format: Format, out: &mut W) -> Result<(), CliError> {
    match format {
        Format::Plain => {
            for token in tokens {
                writeln!(
                    out,
                    "{}..{} {} {:?}",
                    token.start(),
                    token.end(),
                    token.category(),
                    token.text()
                )?;
            }
        }
        Format::Json => {
            let records = tokens.iter().map(TokenRecord::from).collect::<Vec<_>>();
            serde_json::to_writer_pretty(&mut *out, &records)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

/// Explain why a malformed token was tagged the way it was.
fn message(category: Category) -> &'static str {
    match category {
        Category::StringInvalid => "string is not closed on this line",
        Category::StringEscapeInvalid => "unknown escape sequence",
        Category::CharInvalid => "stray or unterminated character quote",
        _ => "unexpected character",
    }
}

/// Report every malformed token and return how many there were.
fn check(name: &str, input: &str, tokens: &[Token]) -> usize {
    let malformed = tokens
        .iter()
        .filter(|token| token.category().is_malformed())
        .collect::<Vec<_>>();
    for token in malformed.iter() {
        report(input, token.span(), name, "while lexing", message(token.category()));
    }
    malformed.len()
}

fn run(args: Args) -> Result<ExitCode, CliError> {
    let (name, input) = read_input(args.input.as_deref())?;
    let tokens = Lexer::new(&input).lex();
    tracing::debug!(file = %name, tokens = tokens.len(), "lexed input");

    if args.check {
        let count = check(&name, &input, &tokens);
        return Ok(if count == 0 {
            ExitCode::SUCCESS
        } else {
            eprintln!("{} malformed token(s) in {}", count, name);
            ExitCode::FAILURE
        });
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    dump(&tokens, args.format, &mut out)?;
    out.flush()?;
    Ok(ExitCode::SUCCESS)
}

/// Install a stderr subscriber when `RUST_LOG` is set, e.g. `RUST_LOG=armlex_lexer=trace`.
fn init_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry()
            .with(fmt::layer().with_writer(io::stderr).with_target(true))
            .with(EnvFilter::from_default_env())
            .init();
    }
}

fn main() -> ExitCode {
    init_tracing();
    let args = Args::parse();

    match run(args) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}", e);
            eprintln!("abort");
            ExitCode::FAILURE
        }
    }
}
