use std::process::ExitCode;

use log::{debug, error, info};
use lox_expr::report::StderrReporter;
use lox_expr::{parse_source, printer, run, Outcome};
use rustyline::{error::ReadlineError, DefaultEditor};

type DynResult<T = ()> = Result<T, Box<dyn std::error::Error>>;

const EXIT_USAGE: u8 = 64;
const EXIT_DATA_ERR: u8 = 65;
const EXIT_SOFTWARE: u8 = 70;
const EXIT_IO_ERR: u8 = 74;

fn main() -> ExitCode {
    let dotenv = dotenvy::dotenv();
    env_logger::init();
    if let Err(e) = dotenv {
        debug!("dotenvy load with error {}", e);
    }

    let args = std::env::args().skip(1).collect::<Vec<String>>();
    debug!("{:?}", args);

    let result = match args.as_slice() {
        [] => repl().map(|_| ExitCode::SUCCESS),
        [flag, file_path] if flag == "-a" || flag == "--ast" => print_ast_from_file(file_path),
        [file_path] if !file_path.starts_with('-') => read_from_file(file_path),
        _ => {
            println!("Usage: lox-expr [-a|--ast] [script]");
            return ExitCode::from(EXIT_USAGE);
        }
    };

    result.unwrap_or_else(|e| {
        error!("{}", e);
        ExitCode::from(EXIT_IO_ERR)
    })
}

fn repl() -> DynResult {
    info!("Running in REPL mode");

    let mut rl = DefaultEditor::new()?;
    let mut reporter = StderrReporter;

    loop {
        match rl.readline("> ") {
            Ok(line) => {
                rl.add_history_entry(&line)?;
                if line.trim().is_empty() {
                    continue;
                }
                // errors are already reported, the next line starts clean
                if let Outcome::Value(value) = run(&line, &mut reporter) {
                    println!("{}", value);
                }
            }
            Err(ReadlineError::Eof) => break,
            Err(ReadlineError::Interrupted) => break,
            Err(err) => {
                return Err(Box::new(err));
            }
        }
    }

    Ok(())
}

fn read_from_file(file_path: &str) -> DynResult<ExitCode> {
    info!("Read from file {}", file_path);
    let contents = std::fs::read_to_string(file_path)?;

    let code = match run(&contents, &mut StderrReporter) {
        Outcome::Value(value) => {
            println!("{}", value);
            ExitCode::SUCCESS
        }
        Outcome::StaticError => ExitCode::from(EXIT_DATA_ERR),
        Outcome::RuntimeError => ExitCode::from(EXIT_SOFTWARE),
    };
    Ok(code)
}

fn print_ast_from_file(file_path: &str) -> DynResult<ExitCode> {
    info!("Print AST from file {}", file_path);
    let contents = std::fs::read_to_string(file_path)?;

    let code = match parse_source(&contents, &mut StderrReporter) {
        Some(expr) => {
            println!("{}", printer::print(&expr));
            ExitCode::SUCCESS
        }
        None => ExitCode::from(EXIT_DATA_ERR),
    };
    Ok(code)
}
