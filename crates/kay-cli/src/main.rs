//! KAY CLI - Command line driver for the KAY front end

use std::path::{Path, PathBuf};

use ariadne::{Color, Label, Report, ReportKind, Source};
use clap::{Parser, Subcommand};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use kay_ast::{display_tree, Program, ToKay};
use kay_lexer::{tokenize, SourceFile, TokenKind};
use kay_parser::{parse, parse_source, SyntaxError};

#[derive(Parser)]
#[command(name = "kay")]
#[command(about = "Scanner and parser for the KAY teaching language", long_about = None)]
struct Cli {
    /// Log scanner and parser activity (overrides RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a file and output the AST as JSON
    Parse {
        /// Input file
        file: PathBuf,
        /// Pretty print the output
        #[arg(short, long)]
        pretty: bool,
    },
    /// Print the token stream of a file
    Tokens {
        /// Input file
        file: PathBuf,
    },
    /// Print a file in canonical form
    Fmt {
        /// Input file
        file: PathBuf,
    },
    /// Print the AST of a file as an indented tree
    Tree {
        /// Input file
        file: PathBuf,
    },
    /// Check that files parse
    Check {
        /// Input file(s)
        files: Vec<PathBuf>,
    },
    /// Interactive REPL
    Repl,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Parse { file, pretty } => cmd_parse(&file, pretty),
        Commands::Tokens { file } => cmd_tokens(&file),
        Commands::Fmt { file } => cmd_fmt(&file),
        Commands::Tree { file } => cmd_tree(&file),
        Commands::Check { files } => cmd_check(&files),
        Commands::Repl => cmd_repl(),
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_or_exit(file: &Path) -> SourceFile {
    match SourceFile::load(file) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn parse_or_exit(source: &SourceFile) -> Program {
    match parse_source(source) {
        Ok(program) => program,
        Err(e) => {
            report_syntax_error(source, &e);
            std::process::exit(1);
        }
    }
}

fn cmd_parse(file: &Path, pretty: bool) {
    let source = load_or_exit(file);
    let program = parse_or_exit(&source);

    let json = if pretty {
        serde_json::to_string_pretty(&program)
    } else {
        serde_json::to_string(&program)
    };

    match json {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("Error serializing AST: {}", e);
            std::process::exit(1);
        }
    }
}

fn cmd_tokens(file: &Path) {
    let source = load_or_exit(file);
    for token in tokenize(source.text()) {
        println!("{:<10} {}", token.kind.name(), token.text);
    }
}

fn cmd_fmt(file: &Path) {
    let source = load_or_exit(file);
    let program = parse_or_exit(&source);
    print!("{}", program.to_kay(0));
}

fn cmd_tree(file: &Path) {
    let source = load_or_exit(file);
    let program = parse_or_exit(&source);
    print!("{}", display_tree(&program));
}

fn cmd_check(files: &[PathBuf]) {
    let mut all_ok = true;

    for file in files {
        let source = match SourceFile::load(file) {
            Ok(source) => source,
            Err(e) => {
                eprintln!("✗ {}", e);
                all_ok = false;
                continue;
            }
        };

        match parse_source(&source) {
            Ok(program) => {
                println!(
                    "✓ {} - {} declarations, {} statements",
                    file.display(),
                    program.declarations.len(),
                    program.body.members.len()
                );
            }
            Err(e) => {
                report_syntax_error(&source, &e);
                all_ok = false;
            }
        }
    }

    if !all_ok {
        std::process::exit(1);
    }
}

/// Net count of open braces; the REPL keeps reading while this is positive.
fn brace_depth(source: &str) -> i64 {
    tokenize(source)
        .iter()
        .filter(|t| t.kind == TokenKind::Separator)
        .map(|t| match t.text.as_str() {
            "{" => 1,
            "}" => -1,
            _ => 0,
        })
        .sum()
}

fn cmd_repl() {
    use rustyline::DefaultEditor;

    println!("KAY REPL v{}", env!("CARGO_PKG_VERSION"));
    println!("Enter a program (main {{ ... }}). Type :help for help, :quit to exit");
    println!();

    let mut rl = match DefaultEditor::new() {
        Ok(rl) => rl,
        Err(e) => {
            eprintln!("Failed to create REPL: {}", e);
            std::process::exit(1);
        }
    };
    let mut pending = String::new();

    loop {
        let prompt = if pending.is_empty() { "kay> " } else { "...> " };
        let line = match rl.readline(prompt) {
            Ok(line) => line,
            Err(_) => break,
        };
        let _ = rl.add_history_entry(&line);
        let trimmed = line.trim();

        if trimmed == ":clear" {
            pending.clear();
            println!("Cleared");
            continue;
        }

        if pending.is_empty() && trimmed.starts_with(':') {
            match trimmed {
                ":quit" | ":q" => break,
                ":help" | ":h" => {
                    println!("Commands:");
                    println!("  :load <file>  - Parse a file and show its tree");
                    println!("  :clear        - Discard a partially entered program");
                    println!("  :quit         - Exit REPL");
                }
                cmd if cmd.starts_with(":load ") => {
                    let path = cmd[6..].trim();
                    match SourceFile::load(path) {
                        Ok(source) => repl_show(source.text()),
                        Err(e) => eprintln!("Error: {}", e),
                    }
                }
                _ => println!("Unknown command. Type :help for help."),
            }
            continue;
        }

        pending.push_str(&line);
        pending.push('\n');

        if brace_depth(&pending) > 0 {
            debug!(depth = brace_depth(&pending), "waiting for closing brace");
            continue;
        }

        if !pending.trim().is_empty() {
            repl_show(&pending);
        }
        pending.clear();
    }

    info!("repl finished");
    println!("Goodbye!");
}

fn repl_show(source: &str) {
    match parse(source) {
        Ok(program) => print!("{}", display_tree(&program)),
        Err(e) => eprintln!("{}", e),
    }
}

/// Ariadne positions are in characters, token spans in bytes.
fn char_offset(text: &str, byte_offset: usize) -> usize {
    text.get(..byte_offset)
        .map(|prefix| prefix.chars().count())
        .unwrap_or_else(|| text.chars().count())
}

fn report_syntax_error(source: &SourceFile, error: &SyntaxError) {
    let span = error.span();
    let name = source.name().to_string();
    let total = source.text().chars().count();
    let start = char_offset(source.text(), span.start).min(total.saturating_sub(1));
    let end = char_offset(source.text(), span.end).clamp(start + 1, total.max(start + 1));

    let report = Report::build(ReportKind::Error, name.clone(), start)
        .with_message(error.to_string())
        .with_label(
            Label::new((name.clone(), start..end))
                .with_message(match error.found() {
                    Some((TokenKind::EndOfInput, _)) => "input ends here".to_string(),
                    Some((kind, text)) => format!("found {} `{}`", kind.describe(), text),
                    None => error.to_string(),
                })
                .with_color(Color::Red),
        )
        .finish();

    if report.eprint((name, Source::from(source.text()))).is_err() {
        eprintln!("{}: {}", source.name(), error);
    }
}
