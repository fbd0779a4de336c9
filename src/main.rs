use clap::Parser;
use lisp_core::Interpreter;
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::{Config, Editor};
use std::path::PathBuf;

const WELCOME_MESSAGE: &str = "Lisp Interpreter";
const WELCOME_SUBTITLE: &str = "A small tree-walking Lisp, evaluated one expression at a time";

/// A tree-walking interpreter for a small Scheme-flavored Lisp dialect.
#[derive(Parser, Debug)]
#[command(name = "lisp-core")]
#[command(about = "A tree-walking Lisp interpreter")]
struct CliArgs {
    /// Script file to execute (optional -- if not provided, starts a REPL)
    #[arg(value_name = "FILE")]
    script: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = CliArgs::parse();
    let mut interpreter = Interpreter::new();

    if let Some(script_path) = args.script {
        run_script(&script_path, &mut interpreter)?;
        return Ok(());
    }

    repl(&mut interpreter)
}

/// Reads one expression per line from the terminal and prints its result.
fn repl(interpreter: &mut Interpreter) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::builder().auto_add_history(true).build();
    let mut rl: Editor<(), DefaultHistory> =
        Editor::with_config(config).map_err(|e| format!("failed to initialize REPL: {}", e))?;

    let history_file = ".lisp_history";
    let _ = rl.load_history(history_file);

    println!("{}", WELCOME_MESSAGE);
    println!("{}", WELCOME_SUBTITLE);

    loop {
        let readline = rl.readline("lisp> ");
        match readline {
            Ok(line) => {
                if line.trim().is_empty() {
                    continue;
                }
                if matches!(line.trim(), "(quit)" | "(exit)") {
                    println!("Goodbye!");
                    break;
                }
                match interpreter.evaluate(&line) {
                    Ok(result) => println!("=> {}", result),
                    Err(e) => eprintln!("Error: {}", e),
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("^C");
                continue;
            }
            Err(ReadlineError::Eof) => {
                println!("\nGoodbye!");
                break;
            }
            Err(err) => {
                eprintln!("Error: {}", err);
                break;
            }
        }
    }

    let _ = rl.save_history(history_file);
    Ok(())
}

/// Executes a script file containing one expression per top-level form,
/// evaluated in sequence against a single interpreter instance.
fn run_script(path: &PathBuf, interpreter: &mut Interpreter) -> Result<(), Box<dyn std::error::Error>> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| format!("cannot read script file {}: {}", path.display(), e))?;

    for expr_text in split_top_level_forms(&contents) {
        match interpreter.evaluate(&expr_text) {
            Ok(_) => {}
            Err(e) => return Err(format!("evaluation error: {}", e).into()),
        }
    }

    Ok(())
}

/// Splits source text into one string per balanced top-level form, since
/// `Interpreter::evaluate` reads exactly one expression per call.
fn split_top_level_forms(input: &str) -> Vec<String> {
    let mut forms = Vec::new();
    let chars: Vec<char> = input.chars().collect();
    let mut i = 0;

    while i < chars.len() {
        while i < chars.len() && chars[i].is_whitespace() {
            i += 1;
        }
        if i >= chars.len() {
            break;
        }

        let start = i;
        if chars[i] == '(' {
            let mut depth = 0;
            while i < chars.len() {
                match chars[i] {
                    '(' => depth += 1,
                    ')' => {
                        depth -= 1;
                        if depth == 0 {
                            i += 1;
                            break;
                        }
                    }
                    _ => {}
                }
                i += 1;
            }
        } else {
            while i < chars.len() && !chars[i].is_whitespace() {
                i += 1;
            }
        }
        forms.push(chars[start..i].iter().collect());
    }

    forms
}
