//! Kaleidoscope front end driver.
//!
//! Parses a source file, or each line typed at the `ready>` prompt, and
//! prints the resulting syntax trees. Syntax errors are logged and parsing
//! carries on; an unrecognised character abandons the current input.

use std::{
    fs,
    io::{self, BufRead, Write},
    path::{Path, PathBuf},
    process,
};

use clap::Parser as _;
use kaleidoscope::{
    ast::ast::Node, display_error, errors::errors::LexError, errors::sink::TracingSink,
    parser::parser::parse,
};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(clap::Parser, Debug)]
#[command(name = "kaleidoscope")]
#[command(about = "Parse Kaleidoscope source into syntax trees")]
struct Cli {
    /// Source file parsed as a single input; reads stdin line by line when omitted
    file: Option<PathBuf>,

    /// Print each node as an indented tree instead of an s-expression
    #[arg(long)]
    tree: bool,

    /// Indentation width per tree level
    #[arg(long, default_value_t = 2)]
    indent_size: usize,

    /// Character used for tree indentation
    #[arg(long, default_value_t = ' ')]
    indent_char: char,
}

#[derive(Debug, thiserror::Error)]
enum DriverError {
    #[error("could not read {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Lex(LexError),
}

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "kaleidoscope=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();

    let result = match &cli.file {
        Some(path) => run_file(&cli, path),
        None => run_repl(&cli),
    };

    if let Err(e) = result {
        error!("{}", e);
        process::exit(1);
    }
}

fn run_file(cli: &Cli, path: &Path) -> Result<(), DriverError> {
    let source = fs::read_to_string(path).map_err(|source| DriverError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned());

    let (_, result) = parse(&source, file_name, TracingSink);
    match result {
        Ok(nodes) => {
            for node in &nodes {
                print_node(cli, node);
            }
            info!(count = nodes.len(), "parsed {}", path.display());
            Ok(())
        }
        Err(error) => {
            eprint!("{}", render_lex_error(&error, &source));
            Err(DriverError::Lex(error))
        }
    }
}

fn run_repl(cli: &Cli) -> Result<(), DriverError> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut lines = stdin.lock().lines();

    loop {
        write!(stdout, "ready> ")?;
        stdout.flush()?;

        let Some(line) = lines.next() else {
            writeln!(stdout)?;
            return Ok(());
        };
        let line = line?;

        if line.trim() == "quit" {
            return Ok(());
        }

        // A fresh lexer per line; a poisoned one is simply dropped.
        let (_, result) = parse(&line, None, TracingSink);
        match result {
            Ok(nodes) => {
                for node in &nodes {
                    print_node(cli, node);
                }
            }
            Err(error) => eprint!("{}", render_lex_error(&error, &line)),
        }
    }
}

fn print_node(cli: &Cli, node: &Node) {
    if cli.tree {
        let mut out = String::new();
        node.print_to_string(&mut out, 0, cli.indent_char, cli.indent_size);
        print!("{}", out);
    } else {
        println!("{}", node);
    }
}

fn render_lex_error(error: &LexError, source: &str) -> String {
    display_error(
        error.get_error_name(),
        error.get_tip(),
        error.get_position(),
        source,
    )
}
