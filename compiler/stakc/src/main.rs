//! Stak CLI

use stakc::commands::{
    check_files, explain_error, lex_file, parse_check_args, parse_file, parse_fmt_args,
    run_format, stats_file,
};

fn main() {
    stakc::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "check" => {
            let (options, paths) = match parse_check_args(&args[2..]) {
                Ok(parsed) => parsed,
                Err(message) => {
                    eprintln!("error: {message}");
                    eprintln!("Usage: stak check <file.stak>... [--all] [--color=auto|always|never]");
                    std::process::exit(1);
                }
            };
            if check_files(&paths, &options) > 0 {
                std::process::exit(1);
            }
        }
        "fmt" => {
            let (options, path) = match parse_fmt_args(&args[2..]) {
                Ok(parsed) => parsed,
                Err(message) => {
                    eprintln!("error: {message}");
                    eprintln!("Usage: stak fmt <file.stak> [--check]");
                    std::process::exit(1);
                }
            };
            if !run_format(&path, options) {
                std::process::exit(1);
            }
        }
        "stats" => {
            if args.len() < 3 {
                eprintln!("Usage: stak stats <file.stak>");
                std::process::exit(1);
            }
            stats_file(&args[2]);
        }
        "parse" => {
            if args.len() < 3 {
                eprintln!("Usage: stak parse <file.stak>");
                std::process::exit(1);
            }
            if !parse_file(&args[2]) {
                std::process::exit(1);
            }
        }
        "lex" => {
            if args.len() < 3 {
                eprintln!("Usage: stak lex <file.stak>");
                std::process::exit(1);
            }
            if !lex_file(&args[2]) {
                std::process::exit(1);
            }
        }
        "--explain" | "explain" => {
            if !explain_error(args.get(2).map(String::as_str)) {
                std::process::exit(1);
            }
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-V" => {
            println!("stak {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("Stak - multi-stack rewriting rules");
    println!();
    println!("Usage: stak <command> [options]");
    println!();
    println!("Commands:");
    println!("  check <files...>     Load and validate programs");
    println!("  fmt <file>           Print a program in canonical form");
    println!("  stats <file>         Show stack count, arities and variable slots");
    println!("  parse <file>         Parse and display rule structure");
    println!("  lex <file>           Tokenize and display tokens");
    println!("  explain [code]       Explain an error code (e.g., E2001)");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Check options:");
    println!("  --all                Report every unbound variable, not just the first");
    println!("  --color=<when>       Colorize diagnostics: auto, always, never");
    println!();
    println!("Format options:");
    println!("  --check              Exit 1 if the file is not already canonical");
    println!();
    println!("Environment:");
    println!("  RUST_LOG             Enable tracing output (e.g. RUST_LOG=stak_parse=debug)");
    println!("  NO_COLOR             Disable colors when --color=auto");
    println!();
    println!("Examples:");
    println!("  stak check rules.stak");
    println!("  stak check --all *.stak");
    println!("  stak fmt --check rules.stak");
    println!("  stak explain E2001");
}
