//! `taplex`: inspect the token stream of TAP files.

use taplex::commands::{check_file, lex_file, parse_lex_args};

fn main() {
    taplex::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "lex" => match parse_lex_args(&args[2..]) {
            Ok((path, options)) => lex_file(&path, options),
            Err(msg) => {
                eprintln!("error: {msg}");
                eprintln!("Usage: taplex lex <file.tap> [--trivia] [--json]");
                std::process::exit(1);
            }
        },
        "check" => {
            if args.len() < 3 {
                eprintln!("Usage: taplex check <file.tap>");
                std::process::exit(1);
            }
            check_file(&args[2]);
        }
        "help" | "--help" | "-h" => print_usage(),
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("taplex - TAP token inspector");
    println!();
    println!("Usage: taplex <command> [options]");
    println!();
    println!("Commands:");
    println!("  lex <file.tap>       Tokenize and display tokens");
    println!("  check <file.tap>     Tokenize and summarize test points");
    println!("  help                 Show this message");
    println!();
    println!("Options for lex:");
    println!("  --trivia             Include whitespace and newline tokens");
    println!("  --json               Print one JSON object per token");
    println!();
    println!("Use '-' as the file to read standard input.");
    println!("Set RUST_LOG (e.g. RUST_LOG=tap_lexer=trace) for lexer tracing.");
}
