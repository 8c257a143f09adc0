//! `glint` — Glint syntax-highlighting shell.
//!
//! Reads JavaScript source from a file (or stdin when no file is given),
//! tokenizes it with `glint_core`, and prints either ANSI-colored source or
//! a per-line token listing. Declaring any other language with `--language`
//! switches the tokenizer into verbatim pass-through.

use std::io::Read;
use std::path::{Path, PathBuf};

use argh::FromArgs;
use glint_core::error::GlintResult;
use glint_core::lexer::document;
use glint_core::lexer::token::{Token, TokenKind};

#[derive(FromArgs, Debug)]
/// Tokenize a source file and print it with ANSI syntax colors.
struct Args {
    /// declared language of the source; anything but javascript/js passes
    /// through unstyled
    #[argh(option)]
    language: Option<String>,

    /// print a per-line token listing instead of colored source
    #[argh(switch)]
    dump: bool,

    /// source file to read; stdin when omitted
    #[argh(positional)]
    file: Option<PathBuf>,
}

fn main() {
    let args: Args = argh::from_env();
    if let Err(err) = run(&args) {
        eprintln!("glint: {err}");
        std::process::exit(1);
    }
}

fn run(args: &Args) -> GlintResult<()> {
    let source = read_source(args.file.as_deref())?;
    let lines = document::tokenize(&source, args.language.as_deref());
    if args.dump {
        dump_tokens(&lines);
    } else {
        print_colored(&lines);
    }
    Ok(())
}

fn read_source(path: Option<&Path>) -> GlintResult<String> {
    match path {
        Some(path) => Ok(std::fs::read_to_string(path)?),
        None => {
            let mut source = String::new();
            std::io::stdin().read_to_string(&mut source)?;
            Ok(source)
        }
    }
}

/// ANSI SGR color for a token kind, or `None` for unstyled output.
fn color(kind: TokenKind) -> Option<&'static str> {
    match kind {
        TokenKind::Keyword => Some("35"),
        TokenKind::BooleanOrNullLiteral => Some("36"),
        TokenKind::String => Some("32"),
        TokenKind::Comment => Some("90"),
        TokenKind::Number => Some("33"),
        TokenKind::Operator => Some("31"),
        TokenKind::Punctuation | TokenKind::Identifier => None,
        TokenKind::Whitespace | TokenKind::Plain => None,
    }
}

fn print_colored(lines: &[Vec<Token>]) {
    for tokens in lines {
        for token in tokens {
            match color(token.kind) {
                Some(sgr) => print!("\x1b[{sgr}m{}\x1b[0m", token.text),
                None => print!("{}", token.text),
            }
        }
        println!();
    }
}

fn dump_tokens(lines: &[Vec<Token>]) {
    for (number, tokens) in lines.iter().enumerate() {
        for token in tokens {
            println!("{:>5}  {:<20} {:?}", number + 1, format!("{:?}", token.kind), token.text);
        }
    }
}
