//! CLI tool to run, format, and inspect Leona programs.

use std::fs;
use std::io::{self, Read, Write};
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        let mut input = String::new();
        if let Err(e) = io::stdin().read_to_string(&mut input) {
            eprintln!("<stdin>: {e}");
            return ExitCode::FAILURE;
        }
        return if run(&input, "<stdin>") {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        };
    }

    if args[1] == "--help" || args[1] == "-h" {
        print_usage();
        return ExitCode::SUCCESS;
    }

    let command = args[1].as_str();
    let files = &args[2..];

    if !matches!(command, "run" | "fmt" | "check" | "tokens") {
        eprintln!("Unknown command: {command}");
        print_usage();
        return ExitCode::from(2);
    }

    if files.is_empty() {
        eprintln!("Error: no files specified");
        return ExitCode::from(2);
    }

    let mut had_error = false;

    for path in files {
        let content = match fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("{path}: {e}");
                had_error = true;
                continue;
            }
        };
        log::debug!("{path}: read {} bytes", content.len());

        let ok = match command {
            "run" => run(&content, path),
            "fmt" => match leona::parse_str(&content) {
                Ok(program) => {
                    print!("{}", leona::format(&program.unwrap_or_default()));
                    true
                }
                Err(e) => {
                    eprintln!("{path}: {e}");
                    false
                }
            },
            "check" => match leona::parse_str(&content) {
                Ok(program) => {
                    let formatted = leona::format(&program.unwrap_or_default());
                    if formatted == content {
                        eprintln!("{path}: formatted");
                        true
                    } else {
                        eprintln!("{path}: not formatted");
                        false
                    }
                }
                Err(e) => {
                    eprintln!("{path}: {e}");
                    false
                }
            },
            _ => {
                let tokens = leona::tokenize(&content).unwrap_or_default();
                print!("{}", leona::format_tokens(&tokens));
                true
            }
        };

        had_error |= !ok;
    }

    if had_error {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// Execute a program, streaming segments to stdout.
fn run(input: &str, source: &str) -> bool {
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    let result = leona::run(input, &mut out).and_then(|drawn| {
        out.flush()?;
        Ok(drawn)
    });

    match result {
        Ok(drawn) => {
            log::info!("{source}: drew {drawn} segment(s)");
            true
        }
        Err(e) => {
            eprintln!("{source}: {e}");
            false
        }
    }
}

fn print_usage() {
    eprintln!("Usage: leona [<command> <files...>]");
    eprintln!();
    eprintln!("With no arguments the program is read from stdin and run.");
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  run     Run program(s) and print drawn segments");
    eprintln!("  fmt     Format program(s) and print to stdout");
    eprintln!("  check   Check if program(s) are formatted");
    eprintln!("  tokens  Print the canonical token stream of program(s)");
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  leona < square.leona");
    eprintln!("  leona run square.leona");
    eprintln!("  leona fmt square.leona");
}
