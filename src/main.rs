use std::fs;

use clap::Parser;
use rustyline::error::ReadlineError;
use shunt::evaluate_expression;

const PROMPT: &str = "shunt> ";

/// shunt is an easy to use, interactive calculator for infix arithmetic over
/// `+`, `-`, `*`, `/` and `^`.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells shunt to read the expression from a file instead of the command
    /// line.
    #[arg(short, long)]
    file: bool,

    /// Longest line the interactive session accepts; longer lines are
    /// rejected before evaluation.
    #[arg(long, default_value_t = 100)]
    max_line_len: usize,

    /// Expression to evaluate. When omitted, an interactive session starts.
    expression: Option<String>,
}

fn main() {
    let args = Args::parse();

    let Some(contents) = args.expression else {
        repl(args.max_line_len);
        return;
    };

    let line = if args.file {
        fs::read_to_string(&contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{contents}'. Perhaps this file does not exist?");
            std::process::exit(1);
        })
    } else {
        contents
    };

    match evaluate_expression(line.trim()) {
        Ok(result) => println!("Result: {result}"),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        },
    }
}

/// Runs the interactive read-eval-print loop.
///
/// Each line is either one of the literal commands `exit`, `help` or
/// `version`, or an expression handed to the pipeline. A failed expression
/// prints an error and the loop continues; only `exit`, Ctrl-C or Ctrl-D end
/// the session.
fn repl(max_line_len: usize) {
    println!("Welcome to shunt, an interactive expression calculator.");
    println!("Enter an expression (type help to see the instructions).");

    let mut editor = rustyline::DefaultEditor::new().unwrap_or_else(|e| {
                         eprintln!("Failed to start the interactive session: {e}");
                         std::process::exit(1);
                     });

    loop {
        let line = match editor.readline(PROMPT) {
            Ok(line) => line,
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
            Err(e) => {
                eprintln!("Error: {e}");
                break;
            },
        };

        let line = line.trim();
        match line {
            "" => {},
            "exit" => break,
            "help" => {
                println!("-----HELP-----");
                println!("Supported symbols: +, -, /, ^, *, ( and )");
                println!("To exit type 'exit'");
                println!("To see the version type 'version'");
            },
            "version" => println!("shunt version {}", env!("CARGO_PKG_VERSION")),
            _ => {
                if line.len() > max_line_len {
                    eprintln!("Error: Input is longer than {max_line_len} characters.");
                    continue;
                }
                let _ = editor.add_history_entry(line);
                match evaluate_expression(line) {
                    Ok(result) => println!("Result: {result}"),
                    Err(e) => eprintln!("Error: {e}"),
                }
            },
        }
    }
}
